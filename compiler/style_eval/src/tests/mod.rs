//! Evaluator tests, one file per component.
//!
//! Shared term builders live here so each test reads like the expression it
//! evaluates.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp, reason = "Tests can panic")]

mod operator_tests;

use std::sync::Arc;

use style_ir::{ExpressionNode, ExpressionTerm, FunctionNode, Unit};

use crate::{EvalContext, RecordingEnvironment, ScrollMetrics, SharedEnvironment};

pub(crate) fn num(number: f64) -> ExpressionTerm {
    ExpressionTerm::number(number, None)
}

pub(crate) fn dim(number: f64, unit: Unit) -> ExpressionTerm {
    ExpressionTerm::number(number, Some(unit))
}

pub(crate) fn op(symbol: &str) -> ExpressionTerm {
    ExpressionTerm::op(symbol)
}

pub(crate) fn expr(terms: Vec<ExpressionTerm>) -> ExpressionNode {
    ExpressionNode::new(terms)
}

/// `calc(<terms>)`
pub(crate) fn calc(terms: Vec<ExpressionTerm>) -> FunctionNode {
    FunctionNode::new("calc", vec![expr(terms)])
}

/// `calc(<terms>)` as a nested term.
pub(crate) fn calc_term(terms: Vec<ExpressionTerm>) -> ExpressionTerm {
    calc(terms).into()
}

/// `env(<identifier>)`, or `env()` for `None`.
pub(crate) fn env_term(identifier: Option<&str>) -> ExpressionTerm {
    let arguments = match identifier {
        Some(name) => vec![expr(vec![ExpressionTerm::ident(name)])],
        None => vec![],
    };
    ExpressionTerm::call("env", arguments)
}

pub(crate) fn scroll_y() -> ExpressionTerm {
    env_term(Some("window-scroll-y"))
}

/// Context over a recording environment the test keeps a handle to.
pub(crate) fn recording_context(metrics: ScrollMetrics) -> (EvalContext, Arc<RecordingEnvironment>) {
    let source = Arc::new(RecordingEnvironment::new(metrics));
    let ctx = EvalContext::builder()
        .environment(SharedEnvironment::from_arc(source.clone()))
        .build();
    (ctx, source)
}

#[track_caller]
pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
