//! `calc()` evaluator.
//!
//! The argument of `calc()` reaches us as a flat term list. The tree is
//! built in two passes over an output stack instead of a recursive grammar:
//!
//! 1. Multiplicative pass, left to right. Whenever the stack top is a `*` or
//!    `/` operator, it is popped together with its left operand and combined
//!    with the incoming term. Every `*`/`/` is folded before any `+`/`-` is
//!    looked at, which gives the two precedence levels.
//! 2. Additive pass. What remains alternates operand, operator, operand and
//!    is folded strictly left to right.
//!
//! Nested `calc()` and `env()` calls become operands through
//! `EvalContext::evaluatable_for`.

use smallvec::SmallVec;
use style_ir::{ExpressionTerm, FunctionNode, NumberNode, OperatorNode};

use crate::context::EvalContext;
use crate::errors::BuildError;
use crate::evaluator::{EvalCache, Evaluatable, Evaluator};
use crate::stack::{dismantle, ensure_sufficient_stack};

/// Evaluator for a `calc(...)` call.
///
/// A malformed argument leaves the evaluator without an inner tree; it then
/// evaluates to zero and counts as constant.
#[derive(Debug)]
pub struct CalcEvaluator {
    inner: Option<Evaluatable>,
    error: Option<BuildError>,
    cache: EvalCache<NumberNode>,
}

impl CalcEvaluator {
    pub fn new(call: &FunctionNode, ctx: &EvalContext) -> Self {
        match ensure_sufficient_stack(|| build_tree(call, ctx)) {
            Ok(inner) => {
                let constant = inner.is_constant();
                CalcEvaluator {
                    inner: Some(inner),
                    error: None,
                    cache: EvalCache::new(constant),
                }
            }
            Err(error) => {
                tracing::debug!(%error, expr = %call, "calc() has no evaluation tree");
                CalcEvaluator {
                    inner: None,
                    error: Some(error),
                    cache: EvalCache::new(true),
                }
            }
        }
    }

    /// The evaluation tree, if construction succeeded.
    pub fn inner(&self) -> Option<&Evaluatable> {
        self.inner.as_ref()
    }

    /// Why construction failed, if it did.
    pub fn build_error(&self) -> Option<&BuildError> {
        self.error.as_ref()
    }

    /// Move the evaluation tree out. Only used on teardown.
    pub(crate) fn detach_inner(&mut self) -> Option<Evaluatable> {
        self.inner.take()
    }

    #[cfg(test)]
    pub(crate) fn cache(&self) -> &EvalCache<NumberNode> {
        &self.cache
    }
}

impl Drop for CalcEvaluator {
    fn drop(&mut self) {
        dismantle(self.detach_inner());
    }
}

impl Evaluator for CalcEvaluator {
    type Output = NumberNode;

    fn evaluate(&self) -> NumberNode {
        self.cache.get_or_compute(|| match &self.inner {
            Some(inner) => inner.evaluate(),
            None => NumberNode::ZERO,
        })
    }

    fn is_constant(&self) -> bool {
        self.cache.is_constant()
    }
}

/// Entry of the output stack.
#[derive(Debug)]
enum Slot {
    Operand(Evaluatable),
    Operator(OperatorNode),
}

impl Slot {
    fn into_operand(self) -> Result<Evaluatable, BuildError> {
        match self {
            Slot::Operand(operand) => Ok(operand),
            Slot::Operator(op) => Err(BuildError::ExpectedOperand { found: op.symbol }),
        }
    }

    fn into_operator(self) -> Result<OperatorNode, BuildError> {
        match self {
            Slot::Operator(op) => Ok(op),
            Slot::Operand(_) => Err(BuildError::ExpectedOperator),
        }
    }
}

type SlotStack = SmallVec<[Slot; 8]>;

#[tracing::instrument(level = "trace", skip_all, fields(expr = %call))]
fn build_tree(call: &FunctionNode, ctx: &EvalContext) -> Result<Evaluatable, BuildError> {
    let [argument] = call.arguments.as_slice() else {
        return Err(BuildError::WrongArgumentCount {
            found: call.arguments.len(),
        });
    };
    let slots = fold_multiplicative(&argument.terms, ctx)?;
    fold_additive(slots, ctx)
}

/// Pass 1: collapse every `*`/`/` with its neighbours.
fn fold_multiplicative(terms: &[ExpressionTerm], ctx: &EvalContext) -> Result<SlotStack, BuildError> {
    let mut stack = SlotStack::new();
    for term in terms {
        match stack.pop() {
            Some(Slot::Operator(operator)) if operator.is_multiplicative() => {
                let left = match stack.pop() {
                    Some(slot) => slot.into_operand()?,
                    None => {
                        return Err(BuildError::MissingLeftOperand {
                            operator: operator.symbol,
                        })
                    }
                };
                let right = slot_for(term, ctx).into_operand()?;
                stack.push(Slot::Operand(ctx.operator(operator, left, right).into()));
            }
            top => {
                stack.extend(top);
                stack.push(slot_for(term, ctx));
            }
        }
    }
    Ok(stack)
}

/// Pass 2: fold `operand (operator operand)*` left-associatively.
fn fold_additive(slots: SlotStack, ctx: &EvalContext) -> Result<Evaluatable, BuildError> {
    let mut slots = slots.into_iter();
    let mut tree = match slots.next() {
        Some(slot) => slot.into_operand()?,
        None => return Err(BuildError::Empty),
    };
    while let Some(slot) = slots.next() {
        let operator = slot.into_operator()?;
        let right = match slots.next() {
            Some(slot) => slot.into_operand()?,
            None => {
                return Err(BuildError::DanglingOperator {
                    operator: operator.symbol,
                })
            }
        };
        tree = ctx.operator(operator, tree, right).into();
    }
    Ok(tree)
}

fn slot_for(term: &ExpressionTerm, ctx: &EvalContext) -> Slot {
    match term {
        ExpressionTerm::Operator(op) => Slot::Operator(op.clone()),
        other => Slot::Operand(ctx.evaluatable_for(other)),
    }
}
