//! Tests for binary operator evaluation and unit handling.

use std::f64::consts::PI;

use pretty_assertions::assert_eq;
use style_ir::{NumberNode, OperatorNode, Unit};

use super::{assert_close, recording_context, scroll_y};
use crate::{
    apply_operator, DivisionPolicy, EvalConfig, EvalContext, Evaluatable, Evaluator,
    OperatorFault, ScrollMetrics,
};

fn apply(symbol: &str, left: NumberNode, right: NumberNode) -> Result<NumberNode, OperatorFault> {
    apply_operator(&OperatorNode::new(symbol), left, right, DivisionPolicy::Ieee)
}

fn eval(symbol: &str, left: NumberNode, right: NumberNode) -> NumberNode {
    EvalContext::default()
        .operator(OperatorNode::new(symbol), left.into(), right.into())
        .evaluate()
}

#[test]
fn test_same_family_lengths_add_in_meters() {
    assert_eq!(
        eval("+", NumberNode::with_unit(1.0, Unit::M), NumberNode::with_unit(1000.0, Unit::Mm)),
        NumberNode::with_unit(2.0, Unit::M)
    );
}

#[test]
fn test_same_family_angles_add_in_radians() {
    let result = eval(
        "+",
        NumberNode::with_unit(180.0, Unit::Deg),
        NumberNode::with_unit(PI, Unit::Rad),
    );
    assert_eq!(result.unit, Some(Unit::Rad));
    assert_close(result.number, 2.0 * PI);
}

#[test]
fn test_mixed_families_degrade_to_zero() {
    assert_eq!(
        eval("+", NumberNode::with_unit(1.0, Unit::M), NumberNode::with_unit(1.0, Unit::Rad)),
        NumberNode::ZERO
    );
    assert_eq!(
        apply("*", NumberNode::with_unit(1.0, Unit::Cm), NumberNode::with_unit(1.0, Unit::Deg)),
        Err(OperatorFault::UnitMismatch {
            left: "m",
            right: "rad",
        })
    );
}

#[test]
fn test_unitless_operand_takes_other_unit() {
    assert_eq!(
        eval("*", NumberNode::unitless(3.0), NumberNode::with_unit(50.0, Unit::Cm)),
        NumberNode::with_unit(1.5, Unit::M)
    );
    assert_eq!(
        eval("-", NumberNode::with_unit(2.0, Unit::Rad), NumberNode::unitless(0.5)),
        NumberNode::with_unit(1.5, Unit::Rad)
    );
}

#[test]
fn test_unsupported_operator() {
    assert_eq!(
        eval("%", NumberNode::unitless(7.0), NumberNode::unitless(2.0)),
        NumberNode::ZERO
    );
    assert_eq!(
        apply("^", NumberNode::unitless(2.0), NumberNode::unitless(3.0)),
        Err(OperatorFault::UnsupportedOperator {
            symbol: "^".to_string()
        })
    );
}

#[test]
fn test_unit_mismatch_reported_before_operator() {
    assert!(matches!(
        apply("%", NumberNode::with_unit(1.0, Unit::M), NumberNode::with_unit(1.0, Unit::Rad)),
        Err(OperatorFault::UnitMismatch { .. })
    ));
}

#[test]
fn test_division_by_zero_follows_ieee_by_default() {
    let inf = eval("/", NumberNode::unitless(1.0), NumberNode::unitless(0.0));
    assert!(inf.number.is_infinite() && inf.number > 0.0);

    let nan = eval("/", NumberNode::unitless(0.0), NumberNode::unitless(0.0));
    assert!(nan.number.is_nan());
}

#[test]
fn test_division_policy_zero_on_non_finite() {
    let ctx = EvalContext::builder()
        .config(EvalConfig::default().with_division(DivisionPolicy::ZeroOnNonFinite))
        .build();
    let divide = |left: f64, right: f64| {
        ctx.operator(
            OperatorNode::new("/"),
            NumberNode::unitless(left).into(),
            NumberNode::unitless(right).into(),
        )
        .evaluate()
    };
    assert_eq!(divide(1.0, 0.0), NumberNode::ZERO);
    assert_eq!(divide(0.0, 0.0), NumberNode::ZERO);
    assert_eq!(divide(9.0, 3.0), NumberNode::unitless(3.0));
}

#[test]
fn test_constancy_is_conjunction_of_operands() {
    let (ctx, _source) = recording_context(ScrollMetrics::default());
    let literal = || Evaluatable::from(NumberNode::unitless(1.0));
    let dynamic = || ctx.evaluatable_for(&scroll_y());

    assert!(ctx.operator(OperatorNode::new("+"), literal(), literal()).is_constant());
    assert!(!ctx.operator(OperatorNode::new("+"), dynamic(), literal()).is_constant());
    assert!(!ctx.operator(OperatorNode::new("+"), literal(), dynamic()).is_constant());
}

#[test]
fn test_operator_accessors() {
    let node = EvalContext::default().operator(
        OperatorNode::new("-"),
        NumberNode::unitless(4.0).into(),
        NumberNode::unitless(1.0).into(),
    );
    assert_eq!(node.operator().symbol, "-");
    assert_eq!(node.left().as_literal(), Some(NumberNode::unitless(4.0)));
    assert_eq!(node.right().as_literal(), Some(NumberNode::unitless(1.0)));
}
