//! Property-based tests for `calc()` tree construction.
//!
//! Random flat expressions over `+ - * /` are checked against a direct
//! two-level precedence evaluation, and constancy is checked against the
//! presence of `env()` operands.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::float_cmp,
    clippy::doc_markdown,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use style_eval::style_ir::{BinaryOp, ExpressionNode, ExpressionTerm, FunctionNode, NumberNode};
use style_eval::{EvalContext, Evaluator};

// -- Strategies --

fn operand_strategy() -> impl Strategy<Value = f64> {
    // Non-zero so division never leaves the finite range.
    prop_oneof![(1i32..=50).prop_map(f64::from), (-50i32..=-1).prop_map(f64::from)]
}

fn op_strategy() -> impl Strategy<Value = BinaryOp> {
    prop_oneof![
        Just(BinaryOp::Add),
        Just(BinaryOp::Sub),
        Just(BinaryOp::Mul),
        Just(BinaryOp::Div),
    ]
}

/// `first (op operand)*`
fn flat_expression_strategy() -> impl Strategy<Value = (f64, Vec<(BinaryOp, f64)>)> {
    (
        operand_strategy(),
        prop::collection::vec((op_strategy(), operand_strategy()), 0..12),
    )
}

// -- Helpers --

fn terms_of(first: f64, rest: &[(BinaryOp, f64)]) -> Vec<ExpressionTerm> {
    let mut terms = vec![ExpressionTerm::number(first, None)];
    for (op, operand) in rest {
        terms.push(ExpressionTerm::op(op.as_symbol()));
        terms.push(ExpressionTerm::number(*operand, None));
    }
    terms
}

fn calc_of(terms: Vec<ExpressionTerm>) -> FunctionNode {
    FunctionNode::new("calc", vec![ExpressionNode::new(terms)])
}

/// Evaluate with `*`/`/` before `+`/`-`, both left-associative.
fn reference(first: f64, rest: &[(BinaryOp, f64)]) -> f64 {
    let mut groups: Vec<(BinaryOp, f64)> = Vec::new();
    let mut current = first;
    let mut pending = BinaryOp::Add;
    for &(op, operand) in rest {
        if op.is_multiplicative() {
            current = op.apply(current, operand);
        } else {
            groups.push((pending, current));
            pending = op;
            current = operand;
        }
    }
    groups.push((pending, current));

    let mut groups = groups.into_iter();
    let (_, mut total) = groups.next().expect("at least one group");
    for (op, value) in groups {
        total = op.apply(total, value);
    }
    total
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn calc_matches_reference_precedence((first, rest) in flat_expression_strategy()) {
        let calc = EvalContext::default().calc(&calc_of(terms_of(first, &rest)));
        prop_assert!(calc.build_error().is_none());
        prop_assert_eq!(calc.evaluate(), NumberNode::unitless(reference(first, &rest)));
    }

    #[test]
    fn constant_calc_is_idempotent((first, rest) in flat_expression_strategy()) {
        let calc = EvalContext::default().calc(&calc_of(terms_of(first, &rest)));
        prop_assert!(calc.is_constant());
        let once = calc.evaluate();
        prop_assert_eq!(calc.evaluate(), once);
        prop_assert_eq!(calc.evaluate(), once);
    }

    #[test]
    fn env_operand_anywhere_makes_calc_dynamic(
        (first, rest) in flat_expression_strategy(),
        position in any::<prop::sample::Index>(),
        depth in 0usize..4,
    ) {
        let mut terms = terms_of(first, &rest);
        let operand_slots = terms.len() / 2 + 1;
        let slot = position.index(operand_slots) * 2;

        let mut env = ExpressionTerm::call(
            "env",
            vec![ExpressionNode::new(vec![ExpressionTerm::ident("window-scroll-y")])],
        );
        for _ in 0..depth {
            env = calc_of(vec![env]).into();
        }
        terms[slot] = env;

        let calc = EvalContext::default().calc(&calc_of(terms));
        prop_assert!(calc.build_error().is_none());
        prop_assert!(!calc.is_constant());
    }
}
