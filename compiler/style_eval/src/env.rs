//! `env()` evaluator.

use style_ir::{ExpressionTerm, FunctionNode, IdentNode, NumberNode};

use crate::environment::{EnvVariable, SharedEnvironment};
use crate::evaluator::Evaluator;

/// Resolves one environment identifier to a unitless number.
///
/// Never constant: the environment can change between any two evaluations,
/// whatever the identifier is.
#[derive(Debug)]
pub struct EnvEvaluator {
    identifier: Option<IdentNode>,
    variable: Option<EnvVariable>,
    environment: SharedEnvironment,
}

impl EnvEvaluator {
    /// Build from an `env(...)` call. Only the first term of the first
    /// argument is considered, and only if it is an identifier.
    pub fn new(call: &FunctionNode, environment: SharedEnvironment) -> Self {
        let identifier = match call.arguments.first().and_then(|arg| arg.first()) {
            Some(ExpressionTerm::Ident(ident)) => Some(ident.clone()),
            _ => None,
        };
        let variable = identifier
            .as_ref()
            .and_then(|ident| EnvVariable::from_name(ident.as_str()));
        if variable.is_none() {
            tracing::debug!(
                identifier = identifier.as_ref().map(IdentNode::as_str),
                "env() identifier not recognized; evaluates to zero"
            );
        }
        EnvEvaluator {
            identifier,
            variable,
            environment,
        }
    }

    pub fn identifier(&self) -> Option<&IdentNode> {
        self.identifier.as_ref()
    }

    pub fn variable(&self) -> Option<EnvVariable> {
        self.variable
    }
}

impl Evaluator for EnvEvaluator {
    type Output = NumberNode;

    fn evaluate(&self) -> NumberNode {
        match self.variable {
            Some(variable) => NumberNode::unitless(variable.read(&*self.environment)),
            None => NumberNode::ZERO,
        }
    }

    fn is_constant(&self) -> bool {
        false
    }
}
