//! Term and expression nodes produced by the style expression parser.

use std::fmt;

use super::BinaryOp;
use crate::units::Unit;

/// A numeric literal with an optional unit.
///
/// `Copy` so evaluators can hand values around without cloning.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberNode {
    pub number: f64,
    pub unit: Option<Unit>,
}

impl NumberNode {
    /// Unitless zero. Every failed construction or evaluation falls back to it.
    pub const ZERO: NumberNode = NumberNode {
        number: 0.0,
        unit: None,
    };

    #[inline]
    pub const fn new(number: f64, unit: Option<Unit>) -> Self {
        NumberNode { number, unit }
    }

    #[inline]
    pub const fn unitless(number: f64) -> Self {
        NumberNode { number, unit: None }
    }

    #[inline]
    pub const fn with_unit(number: f64, unit: Unit) -> Self {
        NumberNode {
            number,
            unit: Some(unit),
        }
    }
}

impl fmt::Display for NumberNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Some(unit) => write!(f, "{}{}", self.number, unit),
            None => write!(f, "{}", self.number),
        }
    }
}

/// A bare identifier such as `auto` or `window-scroll-y`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdentNode {
    pub value: String,
}

impl IdentNode {
    /// Keyword a spherical radius falls back to when none is given.
    pub const AUTO: &'static str = "auto";

    pub fn new(value: impl Into<String>) -> Self {
        IdentNode {
            value: value.into(),
        }
    }

    /// The `auto` keyword.
    pub fn auto() -> Self {
        IdentNode::new(Self::AUTO)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for IdentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// An operator symbol between two operands.
///
/// The parser may hand over symbols that are not arithmetic operators; those
/// are kept verbatim and fail at evaluation time.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperatorNode {
    pub symbol: String,
}

impl OperatorNode {
    pub fn new(symbol: impl Into<String>) -> Self {
        OperatorNode {
            symbol: symbol.into(),
        }
    }

    /// The arithmetic operator, if the symbol is one.
    #[inline]
    pub fn op(&self) -> Option<BinaryOp> {
        BinaryOp::from_symbol(&self.symbol)
    }

    /// `*` or `/`.
    #[inline]
    pub fn is_multiplicative(&self) -> bool {
        self.op().is_some_and(BinaryOp::is_multiplicative)
    }
}

impl From<BinaryOp> for OperatorNode {
    fn from(op: BinaryOp) -> Self {
        OperatorNode::new(op.as_symbol())
    }
}

impl fmt::Display for OperatorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

/// A function call, e.g. `calc(1 + 2)` or `env(window-scroll-y)`.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionNode {
    pub name: IdentNode,
    pub arguments: Vec<ExpressionNode>,
}

impl FunctionNode {
    pub fn new(name: impl Into<String>, arguments: Vec<ExpressionNode>) -> Self {
        FunctionNode {
            name: IdentNode::new(name),
            arguments,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl fmt::Display for FunctionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{argument}")?;
        }
        f.write_str(")")
    }
}

/// An ordered sequence of terms.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpressionNode {
    pub terms: Vec<ExpressionTerm>,
}

impl ExpressionNode {
    pub fn new(terms: Vec<ExpressionTerm>) -> Self {
        ExpressionNode { terms }
    }

    #[inline]
    pub fn first(&self) -> Option<&ExpressionTerm> {
        self.terms.first()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

/// One term of an expression.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExpressionTerm {
    Number(NumberNode),
    Ident(IdentNode),
    Operator(OperatorNode),
    Function(FunctionNode),
}

impl ExpressionTerm {
    pub const fn number(number: f64, unit: Option<Unit>) -> Self {
        ExpressionTerm::Number(NumberNode::new(number, unit))
    }

    pub fn ident(value: impl Into<String>) -> Self {
        ExpressionTerm::Ident(IdentNode::new(value))
    }

    pub fn op(symbol: impl Into<String>) -> Self {
        ExpressionTerm::Operator(OperatorNode::new(symbol))
    }

    pub fn call(name: impl Into<String>, arguments: Vec<ExpressionNode>) -> Self {
        ExpressionTerm::Function(FunctionNode::new(name, arguments))
    }

    /// Short name of the term kind, for diagnostics.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            ExpressionTerm::Number(_) => "number",
            ExpressionTerm::Ident(_) => "identifier",
            ExpressionTerm::Operator(_) => "operator",
            ExpressionTerm::Function(_) => "function",
        }
    }
}

impl From<NumberNode> for ExpressionTerm {
    fn from(node: NumberNode) -> Self {
        ExpressionTerm::Number(node)
    }
}

impl From<IdentNode> for ExpressionTerm {
    fn from(node: IdentNode) -> Self {
        ExpressionTerm::Ident(node)
    }
}

impl From<OperatorNode> for ExpressionTerm {
    fn from(node: OperatorNode) -> Self {
        ExpressionTerm::Operator(node)
    }
}

impl From<FunctionNode> for ExpressionTerm {
    fn from(node: FunctionNode) -> Self {
        ExpressionTerm::Function(node)
    }
}

impl fmt::Display for ExpressionTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionTerm::Number(node) => node.fmt(f),
            ExpressionTerm::Ident(node) => node.fmt(f),
            ExpressionTerm::Operator(node) => node.fmt(f),
            ExpressionTerm::Function(node) => node.fmt(f),
        }
    }
}
