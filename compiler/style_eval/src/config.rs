//! Evaluation configuration.
//!
//! Hosts either build an `EvalConfig` directly or read it from the process
//! environment with `EvalConfig::from_env`.

/// Environment variable selecting the division policy (`ieee` or `zero`).
pub const DIVISION_POLICY_VAR: &str = "STYLE_EVAL_DIVISION";

/// What happens when a division yields `inf` or `NaN`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DivisionPolicy {
    /// Keep the IEEE-754 result.
    #[default]
    Ieee,
    /// Replace a non-finite quotient with the zero sentinel.
    ZeroOnNonFinite,
}

impl DivisionPolicy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ieee" => Some(Self::Ieee),
            "zero" => Some(Self::ZeroOnNonFinite),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ieee => "ieee",
            Self::ZeroOnNonFinite => "zero",
        }
    }
}

/// Evaluator-wide settings, fixed when an `EvalContext` is built.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EvalConfig {
    pub division: DivisionPolicy,
}

impl EvalConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    ///
    /// Unknown values fall back to the default and log a warning.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = EvalConfig::default();
        if let Some(raw) = lookup(DIVISION_POLICY_VAR) {
            let name = raw.trim().to_ascii_lowercase();
            match DivisionPolicy::from_name(&name) {
                Some(policy) => config.division = policy,
                None => tracing::warn!(
                    var = DIVISION_POLICY_VAR,
                    value = %raw,
                    "unknown division policy; using `{}`",
                    config.division.as_str()
                ),
            }
        }
        config
    }

    #[must_use]
    pub fn with_division(mut self, division: DivisionPolicy) -> Self {
        self.division = division;
        self
    }
}
