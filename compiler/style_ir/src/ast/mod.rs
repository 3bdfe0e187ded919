//! Parsed style expression types.
//!
//! A style expression arrives from the parser as a flat, ordered list of
//! terms. Function calls nest further expressions as arguments; there is no
//! other grouping.
//!
//! # Module Structure
//!
//! - `nodes`: Term and expression node types
//! - `operators`: Binary operators accepted inside `calc()`

mod nodes;
mod operators;

pub use nodes::{ExpressionNode, ExpressionTerm, FunctionNode, IdentNode, NumberNode, OperatorNode};
pub use operators::BinaryOp;
