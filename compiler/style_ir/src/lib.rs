//! Style IR - parsed expression types for dynamic style values.
//!
//! This crate contains the data structures the evaluator consumes:
//! - Terms of a parsed style expression (numbers, identifiers, operators, calls)
//! - Binary operators and their precedence class
//! - Units and the unit normalizer
//!
//! Tokenizing and parsing happen upstream; everything here is plain data
//! compared by content. The canonical fallbacks (`NumberNode::ZERO` and
//! `IdentNode::auto()`) are ordinary values, not shared identities.

pub mod ast;
pub mod units;

pub use ast::{
    BinaryOp, ExpressionNode, ExpressionTerm, FunctionNode, IdentNode, NumberNode, OperatorNode,
};
pub use units::{normalize, Unit, UnitFamily};
