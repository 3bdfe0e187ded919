//! Spherical coordinate evaluator.
//!
//! A spherical style value is `azimuth inclination radius`. Azimuth and
//! inclination come out in radians, the radius in metres unless it is a
//! keyword such as `auto`, which passes through as text.

use std::fmt;

use style_ir::{normalize, ExpressionNode, ExpressionTerm, IdentNode, NumberNode};

use crate::context::EvalContext;
use crate::evaluator::{EvalCache, Evaluatable, Evaluator};

/// Radius operand before evaluation.
#[derive(Debug)]
pub enum RadiusTerm {
    Keyword(IdentNode),
    Length(Evaluatable),
}

impl RadiusTerm {
    fn is_constant(&self) -> bool {
        match self {
            RadiusTerm::Keyword(_) => true,
            RadiusTerm::Length(length) => length.is_constant(),
        }
    }
}

/// Evaluated radius.
#[derive(Clone, Debug, PartialEq)]
pub enum Radius {
    Meters(f64),
    Keyword(String),
}

impl Radius {
    pub fn auto() -> Self {
        Radius::Keyword(IdentNode::AUTO.to_string())
    }

    pub fn as_meters(&self) -> Option<f64> {
        match self {
            Radius::Meters(meters) => Some(*meters),
            Radius::Keyword(_) => None,
        }
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Radius::Meters(meters) => write!(f, "{meters}"),
            Radius::Keyword(keyword) => f.write_str(keyword),
        }
    }
}

/// `[azimuth_rad, inclination_rad, radius_m | keyword]`.
#[derive(Clone, Debug, PartialEq)]
pub struct SphericalValue {
    pub azimuth: f64,
    pub inclination: f64,
    pub radius: Radius,
}

impl Default for SphericalValue {
    /// `[0, 0, auto]`
    fn default() -> Self {
        SphericalValue {
            azimuth: 0.0,
            inclination: 0.0,
            radius: Radius::auto(),
        }
    }
}

impl fmt::Display for SphericalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.azimuth, self.inclination, self.radius)
    }
}

#[derive(Debug)]
pub struct SphericalEvaluator {
    azimuth: Evaluatable,
    inclination: Evaluatable,
    radius: RadiusTerm,
    cache: EvalCache<SphericalValue>,
}

impl SphericalEvaluator {
    /// Build from the parsed value. Only the first expression is read, and
    /// only its first three terms.
    pub fn new(expressions: &[ExpressionNode], ctx: &EvalContext) -> Self {
        let terms = expressions.first().map_or(&[][..], |expr| expr.terms.as_slice());
        if terms.len() > 3 || expressions.len() > 1 {
            tracing::debug!(
                expressions = expressions.len(),
                terms = terms.len(),
                "extra spherical components ignored"
            );
        }

        let component = |index: usize| {
            terms
                .get(index)
                .map_or(Evaluatable::ZERO, |term| ctx.evaluatable_for(term))
        };
        let azimuth = component(0);
        let inclination = component(1);
        let radius = match terms.get(2) {
            None => RadiusTerm::Keyword(IdentNode::auto()),
            Some(ExpressionTerm::Ident(keyword)) => RadiusTerm::Keyword(keyword.clone()),
            Some(term) => RadiusTerm::Length(ctx.evaluatable_for(term)),
        };

        let constant = azimuth.is_constant() && inclination.is_constant() && radius.is_constant();
        SphericalEvaluator {
            azimuth,
            inclination,
            radius,
            cache: EvalCache::new(constant),
        }
    }

    #[cfg(test)]
    pub(crate) fn cache(&self) -> &EvalCache<SphericalValue> {
        &self.cache
    }

    fn compute(&self) -> SphericalValue {
        let radius = match &self.radius {
            RadiusTerm::Keyword(keyword) => Radius::Keyword(keyword.value.clone()),
            RadiusTerm::Length(length) => Radius::Meters(normalize(length.evaluate()).number),
        };
        SphericalValue {
            azimuth: radians(self.azimuth.evaluate()),
            inclination: radians(self.inclination.evaluate()),
            radius,
        }
    }
}

impl Evaluator for SphericalEvaluator {
    type Output = SphericalValue;

    fn evaluate(&self) -> SphericalValue {
        self.cache.get_or_compute(|| self.compute())
    }

    fn is_constant(&self) -> bool {
        self.cache.is_constant()
    }
}

fn radians(angle: NumberNode) -> f64 {
    normalize(angle).number
}
