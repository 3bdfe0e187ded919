//! Binary operator evaluator.
//!
//! Both operands are normalized to their family's base unit before the
//! operator is applied, so `1m + 1000mm` is `2m` and `180deg + 3.14rad`
//! lands in radians. Operands from different families cannot be combined.

use style_ir::{normalize, BinaryOp, NumberNode, OperatorNode};

use crate::config::DivisionPolicy;
use crate::errors::OperatorFault;
use crate::evaluator::{EvalCache, Evaluatable, Evaluator};
use crate::stack::dismantle;

/// `left <operator> right`.
#[derive(Debug)]
pub struct OperatorEvaluator {
    operator: OperatorNode,
    left: Evaluatable,
    right: Evaluatable,
    division: DivisionPolicy,
    cache: EvalCache<NumberNode>,
}

impl OperatorEvaluator {
    pub fn new(
        operator: OperatorNode,
        left: Evaluatable,
        right: Evaluatable,
        division: DivisionPolicy,
    ) -> Self {
        let constant = left.is_constant() && right.is_constant();
        OperatorEvaluator {
            operator,
            left,
            right,
            division,
            cache: EvalCache::new(constant),
        }
    }

    pub fn operator(&self) -> &OperatorNode {
        &self.operator
    }

    pub fn left(&self) -> &Evaluatable {
        &self.left
    }

    pub fn right(&self) -> &Evaluatable {
        &self.right
    }

    /// Move both operands out, leaving zero literals behind.
    pub(crate) fn detach_operands(&mut self) -> [Evaluatable; 2] {
        [
            std::mem::replace(&mut self.left, Evaluatable::ZERO),
            std::mem::replace(&mut self.right, Evaluatable::ZERO),
        ]
    }

    #[cfg(test)]
    pub(crate) fn cache(&self) -> &EvalCache<NumberNode> {
        &self.cache
    }

    fn compute(&self) -> NumberNode {
        let left = self.left.evaluate();
        let right = self.right.evaluate();
        match apply_operator(&self.operator, left, right, self.division) {
            Ok(result) => result,
            Err(fault) => {
                tracing::debug!(%fault, %left, %right, "operator degraded to zero");
                NumberNode::ZERO
            }
        }
    }
}

impl Evaluator for OperatorEvaluator {
    type Output = NumberNode;

    fn evaluate(&self) -> NumberNode {
        self.cache.get_or_compute(|| self.compute())
    }

    fn is_constant(&self) -> bool {
        self.cache.is_constant()
    }
}

impl Drop for OperatorEvaluator {
    fn drop(&mut self) {
        dismantle(self.detach_operands());
    }
}

/// Apply `operator` to two already evaluated numbers.
///
/// The result carries whichever base unit is present; unitless operands
/// combine with either family.
pub fn apply_operator(
    operator: &OperatorNode,
    left: NumberNode,
    right: NumberNode,
    division: DivisionPolicy,
) -> Result<NumberNode, OperatorFault> {
    let left = normalize(left);
    let right = normalize(right);
    let unit = match (left.unit, right.unit) {
        (Some(l), Some(r)) if l != r => {
            return Err(OperatorFault::UnitMismatch {
                left: l.as_str(),
                right: r.as_str(),
            })
        }
        (l, r) => l.or(r),
    };

    let op = operator
        .op()
        .ok_or_else(|| OperatorFault::UnsupportedOperator {
            symbol: operator.symbol.clone(),
        })?;
    let number = op.apply(left.number, right.number);

    if division == DivisionPolicy::ZeroOnNonFinite
        && op == BinaryOp::Div
        && !number.is_finite()
    {
        return Err(OperatorFault::NonFiniteQuotient);
    }
    Ok(NumberNode::new(number, unit))
}
