//! Style Eval - evaluator trees for dynamic style expressions.
//!
//! Turns parsed `style_ir` terms into trees of evaluators and evaluates
//! them on demand. Evaluation never fails: malformed input degrades to
//! `NumberNode::ZERO` (or `[0, 0, auto]` for spherical values) and the
//! reason is logged through `tracing`.
//!
//! # Architecture
//!
//! - `Evaluator`: the shared contract (`evaluate`, `is_constant`)
//! - `Evaluatable`: literal-or-node tagged union every tree is built from
//! - `EvalContext`: entry point; wraps terms and carries the injected
//!   `EnvironmentSource` and `EvalConfig`
//! - `CalcEvaluator`, `OperatorEvaluator`, `EnvEvaluator`,
//!   `SphericalEvaluator`: the concrete nodes
//! - `StyleBinding`: per-property refresh driver for hosts
//!
//! Constant subtrees compute once and keep their first result. Any
//! `env()` reachable from a node makes that node recompute on every call.

mod binding;
mod calc;
pub mod config;
mod context;
mod env;
pub mod environment;
pub mod errors;
mod evaluator;
mod operator;
mod spherical;
mod stack;

#[cfg(test)]
mod tests;

pub use binding::StyleBinding;
pub use calc::CalcEvaluator;
pub use config::{DivisionPolicy, EvalConfig};
pub use context::{EvalContext, EvalContextBuilder, FunctionKind};
pub use env::EnvEvaluator;
pub use environment::{
    DetachedEnvironment, EnvVariable, EnvironmentSource, RecordingEnvironment, ScrollMetrics,
    SharedEnvironment,
};
pub use errors::{BuildError, OperatorFault};
pub use evaluator::{Evaluatable, Evaluator};
pub use operator::{apply_operator, OperatorEvaluator};
pub use spherical::{Radius, RadiusTerm, SphericalEvaluator, SphericalValue};
pub use stack::ensure_sufficient_stack;

// Re-export the IR so hosts need a single dependency.
pub use style_ir;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing output for evaluator diagnostics.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set,
/// e.g. `RUST_LOG=style_eval=debug` to see every degradation to zero.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
