//! The evaluation contract shared by every node.
//!
//! `Evaluator` is implemented by each concrete evaluator and by
//! `Evaluatable`, the tagged union the tree is built from. Call sites hold an
//! `Evaluatable` and never need to ask whether they are looking at a literal
//! or a computed node.
//!
//! Constancy is derived once, when a node is constructed, because the tree
//! shape never changes afterwards. Only the cached value is written later.

use std::fmt;
#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use style_ir::NumberNode;

use crate::calc::CalcEvaluator;
use crate::env::EnvEvaluator;
use crate::operator::OperatorEvaluator;
use crate::stack::ensure_sufficient_stack;

/// A node that yields a value on demand.
pub trait Evaluator {
    type Output: Clone + fmt::Debug;

    /// Current value of the node.
    ///
    /// Constant nodes compute once and return the cached value afterwards.
    /// Non-constant nodes recompute on every call.
    fn evaluate(&self) -> Self::Output;

    /// Whether the value can never change between evaluations.
    fn is_constant(&self) -> bool;
}

/// A literal number or a node that evaluates to one.
#[derive(Debug)]
pub enum Evaluatable {
    Literal(NumberNode),
    Calc(Box<CalcEvaluator>),
    Env(EnvEvaluator),
    Operator(Box<OperatorEvaluator>),
}

impl Evaluatable {
    /// The unitless zero literal.
    pub const ZERO: Evaluatable = Evaluatable::Literal(NumberNode::ZERO);

    /// The literal value, if this is a literal.
    pub fn as_literal(&self) -> Option<NumberNode> {
        match self {
            Evaluatable::Literal(node) => Some(*node),
            _ => None,
        }
    }
}

impl Evaluator for Evaluatable {
    type Output = NumberNode;

    fn evaluate(&self) -> NumberNode {
        match self {
            Evaluatable::Literal(node) => *node,
            Evaluatable::Env(env) => env.evaluate(),
            Evaluatable::Calc(calc) => ensure_sufficient_stack(|| calc.evaluate()),
            Evaluatable::Operator(op) => ensure_sufficient_stack(|| op.evaluate()),
        }
    }

    fn is_constant(&self) -> bool {
        match self {
            Evaluatable::Literal(_) => true,
            Evaluatable::Env(env) => env.is_constant(),
            Evaluatable::Calc(calc) => calc.is_constant(),
            Evaluatable::Operator(op) => op.is_constant(),
        }
    }
}

impl From<NumberNode> for Evaluatable {
    fn from(node: NumberNode) -> Self {
        Evaluatable::Literal(node)
    }
}

impl From<CalcEvaluator> for Evaluatable {
    fn from(calc: CalcEvaluator) -> Self {
        Evaluatable::Calc(Box::new(calc))
    }
}

impl From<EnvEvaluator> for Evaluatable {
    fn from(env: EnvEvaluator) -> Self {
        Evaluatable::Env(env)
    }
}

impl From<OperatorEvaluator> for Evaluatable {
    fn from(op: OperatorEvaluator) -> Self {
        Evaluatable::Operator(Box::new(op))
    }
}

/// Last-value slot of an evaluator.
///
/// Holds a value only for constant nodes; non-constant nodes bypass it.
#[derive(Debug)]
pub(crate) struct EvalCache<T> {
    constant: bool,
    value: OnceLock<T>,
    #[cfg(test)]
    computations: AtomicUsize,
}

impl<T: Clone> EvalCache<T> {
    pub(crate) fn new(constant: bool) -> Self {
        EvalCache {
            constant,
            value: OnceLock::new(),
            #[cfg(test)]
            computations: AtomicUsize::new(0),
        }
    }

    #[inline]
    pub(crate) fn is_constant(&self) -> bool {
        self.constant
    }

    /// Return the cached value, or run `compute` and cache its result when
    /// the node is constant.
    pub(crate) fn get_or_compute(&self, compute: impl FnOnce() -> T) -> T {
        let compute = || {
            #[cfg(test)]
            self.computations.fetch_add(1, Ordering::Relaxed);
            compute()
        };
        if !self.constant {
            return compute();
        }
        if let Some(value) = self.value.get() {
            tracing::trace!("constant cache hit");
            return value.clone();
        }
        self.value.get_or_init(compute).clone()
    }

    /// Number of times a fresh value was computed.
    #[cfg(test)]
    pub(crate) fn computations(&self) -> usize {
        self.computations.load(Ordering::Relaxed)
    }
}
