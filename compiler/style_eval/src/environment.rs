//! Environment capability for `env()`.
//!
//! Evaluators never touch platform globals. The host injects an
//! `EnvironmentSource` when it builds an `EvalContext`; every `EnvEvaluator`
//! built from that context samples it on each evaluation.
//!
//! Implementations:
//! - `DetachedEnvironment`: reports zeros (no host attached)
//! - `RecordingEnvironment`: settable metrics plus a sample counter

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

/// Scroll state of the document hosting the styled content.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Current vertical scroll position.
    pub offset: f64,
    /// Full scrollable height: the larger of the content height and the
    /// viewport-derived heights.
    pub extent: f64,
    /// Height of the visible viewport.
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub const fn new(offset: f64, extent: f64, viewport_height: f64) -> Self {
        ScrollMetrics {
            offset,
            extent,
            viewport_height,
        }
    }

    /// Fraction of the scrollable range already scrolled.
    ///
    /// Zero when nothing can scroll or the quotient is not finite.
    pub fn scroll_fraction(&self) -> f64 {
        let divisor = self.extent - self.viewport_height;
        if divisor == 0.0 {
            return 0.0;
        }
        let fraction = self.offset / divisor;
        if fraction.is_finite() {
            fraction
        } else {
            0.0
        }
    }
}

/// Live numeric inputs supplied by the host.
pub trait EnvironmentSource: Send + Sync {
    fn scroll_offset(&self) -> f64;

    fn scroll_extent(&self) -> f64;

    fn viewport_height(&self) -> f64;

    /// Sample all metrics at once.
    fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(
            self.scroll_offset(),
            self.scroll_extent(),
            self.viewport_height(),
        )
    }
}

/// Source used when the host attaches nothing. Every metric is zero.
#[derive(Copy, Clone, Debug, Default)]
pub struct DetachedEnvironment;

impl EnvironmentSource for DetachedEnvironment {
    fn scroll_offset(&self) -> f64 {
        0.0
    }

    fn scroll_extent(&self) -> f64 {
        0.0
    }

    fn viewport_height(&self) -> f64 {
        0.0
    }
}

/// Source whose metrics the host sets explicitly.
///
/// Counts how often it was sampled, which makes recomputation observable.
#[derive(Debug, Default)]
pub struct RecordingEnvironment {
    metrics: Mutex<ScrollMetrics>,
    samples: AtomicUsize,
}

impl RecordingEnvironment {
    pub fn new(metrics: ScrollMetrics) -> Self {
        RecordingEnvironment {
            metrics: Mutex::new(metrics),
            samples: AtomicUsize::new(0),
        }
    }

    /// Replace the current metrics (e.g. on a scroll event).
    pub fn set(&self, metrics: ScrollMetrics) {
        *self.metrics.lock() = metrics;
    }

    /// Number of samples taken so far. A full `scroll_metrics` read counts once.
    pub fn samples(&self) -> usize {
        self.samples.load(Ordering::Relaxed)
    }

    fn sample(&self) -> ScrollMetrics {
        self.samples.fetch_add(1, Ordering::Relaxed);
        *self.metrics.lock()
    }
}

impl EnvironmentSource for RecordingEnvironment {
    fn scroll_offset(&self) -> f64 {
        self.sample().offset
    }

    fn scroll_extent(&self) -> f64 {
        self.sample().extent
    }

    fn viewport_height(&self) -> f64 {
        self.sample().viewport_height
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        self.sample()
    }
}

/// Cloneable handle to the injected environment source.
#[derive(Clone)]
pub struct SharedEnvironment(Arc<dyn EnvironmentSource>);

impl SharedEnvironment {
    pub fn new(source: impl EnvironmentSource + 'static) -> Self {
        SharedEnvironment(Arc::new(source))
    }

    /// Share a source the host keeps a handle to.
    pub fn from_arc(source: Arc<dyn EnvironmentSource>) -> Self {
        SharedEnvironment(source)
    }

    pub fn detached() -> Self {
        SharedEnvironment::new(DetachedEnvironment)
    }
}

impl Default for SharedEnvironment {
    fn default() -> Self {
        Self::detached()
    }
}

impl std::ops::Deref for SharedEnvironment {
    type Target = dyn EnvironmentSource;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl fmt::Debug for SharedEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedEnvironment(..)")
    }
}

/// Identifiers `env()` understands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EnvVariable {
    /// Vertical scroll progress in `[0, 1]` for in-range scroll positions.
    WindowScrollY,
}

impl EnvVariable {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "window-scroll-y" => Some(Self::WindowScrollY),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WindowScrollY => "window-scroll-y",
        }
    }

    /// Read the variable's current value from `source`.
    pub fn read(self, source: &dyn EnvironmentSource) -> f64 {
        match self {
            Self::WindowScrollY => source.scroll_metrics().scroll_fraction(),
        }
    }
}
