//! Stack safety for evaluator trees.
//!
//! A tree can be deep in two ways: nested `calc()` calls, and long flat
//! `a + b + c + ...` chains that fold into a left-deep spine of operator
//! nodes. Three walks visit every level:
//!
//! - construction (`CalcEvaluator::new` per nested `calc()`)
//! - evaluation (`Evaluatable::evaluate` per operator or calc node)
//! - teardown (dropping the tree)
//!
//! Construction and evaluation recurse under `ensure_sufficient_stack`.
//! Teardown does not recurse at all: `Drop` on operator and calc nodes
//! detaches their children and hands them to `dismantle`, which frees the
//! tree from an explicit worklist.

use crate::evaluator::Evaluatable;

/// Run one level of construction or evaluation with enough stack left for
/// the next.
///
/// On native targets `stacker` switches to a fresh heap segment when the
/// current one runs low. WASM manages its own stack and calls straight
/// through.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Remaining stack below which a new segment is allocated (64KB).
    const RED_ZONE: usize = 64 * 1024;

    /// Size of each newly allocated segment (1MB).
    const NEW_SEGMENT: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, NEW_SEGMENT, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Free detached subtrees without recursing once per level.
///
/// Each node popped off the worklist has its own children detached and
/// pushed before it is dropped, so every individual drop is shallow.
pub(crate) fn dismantle(roots: impl IntoIterator<Item = Evaluatable>) {
    let mut pending: Vec<Evaluatable> = roots.into_iter().filter(has_children).collect();
    while let Some(mut node) = pending.pop() {
        match &mut node {
            Evaluatable::Operator(op) => {
                pending.extend(op.detach_operands().into_iter().filter(has_children));
            }
            Evaluatable::Calc(calc) => {
                pending.extend(calc.detach_inner().filter(has_children));
            }
            Evaluatable::Literal(_) | Evaluatable::Env(_) => {}
        }
    }
}

fn has_children(node: &Evaluatable) -> bool {
    matches!(node, Evaluatable::Operator(_) | Evaluatable::Calc(_))
}
