//! `EvalContext` and its builder.
//!
//! The context carries what every evaluator needs at construction time: the
//! injected environment source and the evaluation config. It is the entry
//! point for wrapping parsed terms.

use style_ir::{ExpressionNode, ExpressionTerm, FunctionNode, OperatorNode};

use crate::calc::CalcEvaluator;
use crate::config::EvalConfig;
use crate::env::EnvEvaluator;
use crate::environment::{EnvironmentSource, SharedEnvironment};
use crate::evaluator::Evaluatable;
use crate::operator::OperatorEvaluator;
use crate::spherical::SphericalEvaluator;

/// Functions with an evaluator behind them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    Calc,
    Env,
}

impl FunctionKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "calc" => Some(Self::Calc),
            "env" => Some(Self::Env),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calc => "calc",
            Self::Env => "env",
        }
    }
}

/// Construction-time state shared by every evaluator of a tree.
///
/// Cheap to clone: the environment is reference-counted and the config is
/// `Copy`.
#[derive(Clone, Debug, Default)]
pub struct EvalContext {
    environment: SharedEnvironment,
    config: EvalConfig,
}

impl EvalContext {
    /// Context over `environment` with the default config.
    pub fn new(environment: SharedEnvironment) -> Self {
        EvalContext {
            environment,
            config: EvalConfig::default(),
        }
    }

    pub fn builder() -> EvalContextBuilder {
        EvalContextBuilder::new()
    }

    pub fn environment(&self) -> &SharedEnvironment {
        &self.environment
    }

    pub fn config(&self) -> EvalConfig {
        self.config
    }

    /// Wrap a parsed term as something evaluatable.
    ///
    /// Numbers stay literals. `calc()` and `env()` calls become their
    /// evaluators. Anything else (other functions, identifiers, stray
    /// operators) degrades to the zero literal.
    pub fn evaluatable_for(&self, term: &ExpressionTerm) -> Evaluatable {
        match term {
            ExpressionTerm::Number(node) => Evaluatable::Literal(*node),
            ExpressionTerm::Function(call) => self.function(call),
            ExpressionTerm::Ident(_) | ExpressionTerm::Operator(_) => {
                tracing::debug!(
                    term = %term,
                    kind = term.kind_name(),
                    "term is not evaluatable; using zero"
                );
                Evaluatable::ZERO
            }
        }
    }

    /// Build the evaluator for a function call, by name.
    pub fn function(&self, call: &FunctionNode) -> Evaluatable {
        match FunctionKind::from_name(call.name()) {
            Some(FunctionKind::Calc) => self.calc(call).into(),
            Some(FunctionKind::Env) => self.env(call).into(),
            None => {
                tracing::debug!(function = call.name(), "unknown function; using zero");
                Evaluatable::ZERO
            }
        }
    }

    pub fn calc(&self, call: &FunctionNode) -> CalcEvaluator {
        CalcEvaluator::new(call, self)
    }

    pub fn env(&self, call: &FunctionNode) -> EnvEvaluator {
        EnvEvaluator::new(call, self.environment.clone())
    }

    pub fn operator(
        &self,
        operator: OperatorNode,
        left: Evaluatable,
        right: Evaluatable,
    ) -> OperatorEvaluator {
        OperatorEvaluator::new(operator, left, right, self.config.division)
    }

    pub fn spherical(&self, expressions: &[ExpressionNode]) -> SphericalEvaluator {
        SphericalEvaluator::new(expressions, self)
    }
}

/// Builder for `EvalContext`.
///
/// Without an explicit environment, a detached source reporting zeros is used.
#[derive(Default)]
pub struct EvalContextBuilder {
    environment: Option<SharedEnvironment>,
    config: EvalConfig,
}

impl EvalContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the environment source handle.
    #[must_use]
    pub fn environment(mut self, environment: SharedEnvironment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Set the environment from an owned source.
    #[must_use]
    pub fn source(self, source: impl EnvironmentSource + 'static) -> Self {
        self.environment(SharedEnvironment::new(source))
    }

    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> EvalContext {
        EvalContext {
            environment: self.environment.unwrap_or_default(),
            config: self.config,
        }
    }
}
