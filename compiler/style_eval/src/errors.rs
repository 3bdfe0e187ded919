//! Failure reasons inside the evaluator.
//!
//! None of these cross the `evaluate()` boundary. They are logged and the
//! affected node degrades to `NumberNode::ZERO`. `BuildError` stays readable
//! through `CalcEvaluator::build_error` for hosts that want diagnostics.

use thiserror::Error;

/// Why a `calc()` call produced no evaluation tree.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("calc() takes exactly one argument, found {found}")]
    WrongArgumentCount { found: usize },

    #[error("calc() argument has no terms")]
    Empty,

    #[error("operator `{operator}` has no left operand")]
    MissingLeftOperand { operator: String },

    #[error("expected an operand, found operator `{found}`")]
    ExpectedOperand { found: String },

    #[error("expected an operator between operands")]
    ExpectedOperator,

    #[error("operator `{operator}` has no right operand")]
    DanglingOperator { operator: String },
}

/// Why a binary operation degraded to zero.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OperatorFault {
    #[error("cannot combine `{left}` with `{right}`")]
    UnitMismatch {
        left: &'static str,
        right: &'static str,
    },

    #[error("unsupported operator `{symbol}`")]
    UnsupportedOperator { symbol: String },

    #[error("division produced a non-finite quotient")]
    NonFiniteQuotient,
}
