//! Timing functions (easing curves) for ripple animations.
//!
//! - [`TimingFunction::Linear`] - Constant speed
//! - [`TimingFunction::Ease`] - The classic `cubic-bezier(0.42, 0, 1, 1)` curve
//! - [`TimingFunction::Out`] - Mirrors any curve, turning an ease-in into an ease-out
//! - [`TimingFunction::Custom`] - User-defined function
//!
//! ## Example
//!
//! ```
//! use ripple_effect::animation::TimingFunction;
//!
//! // The curve ripples use by default
//! let curve = TimingFunction::out(TimingFunction::Ease);
//! assert!(curve.evaluate(0.5) > 0.5);
//! ```

use std::sync::Arc;

/// Timing function that controls the animation curve
#[derive(Clone)]
pub enum TimingFunction {
    /// Linear interpolation (constant speed)
    Linear,
    /// `cubic-bezier(0.42, 0, 1, 1)`: slow start, full speed at the end
    Ease,
    /// Runs the inner curve backwards: `1 - f(1 - t)`
    Out(Box<TimingFunction>),
    /// Custom timing function
    Custom(Arc<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl TimingFunction {
    /// Evaluate the timing function at time t (0.0 to 1.0)
    pub fn evaluate(&self, t: f32) -> f32 {
        match self {
            TimingFunction::Linear => t,
            TimingFunction::Ease => ease(t),
            TimingFunction::Out(inner) => 1.0 - inner.evaluate(1.0 - t),
            TimingFunction::Custom(f) => f(t),
        }
    }

    /// Mirror `inner` so its slow start becomes a slow finish
    pub fn out(inner: TimingFunction) -> Self {
        TimingFunction::Out(Box::new(inner))
    }

    /// Create a custom timing function from a closure
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        TimingFunction::Custom(Arc::new(f))
    }
}

impl std::fmt::Debug for TimingFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimingFunction::Linear => write!(f, "Linear"),
            TimingFunction::Ease => write!(f, "Ease"),
            TimingFunction::Out(inner) => write!(f, "Out({:?})", inner),
            TimingFunction::Custom(_) => write!(f, "Custom"),
        }
    }
}

const EASE_X1: f32 = 0.42;
const EASE_X2: f32 = 1.0;

/// `cubic-bezier(0.42, 0, 1, 1)`, solved for the curve parameter with Newton-Raphson
fn ease(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let mut s = t;
    for _ in 0..8 {
        let slope = bezier_slope(s, EASE_X1, EASE_X2);
        if slope.abs() < 1e-6 {
            break;
        }
        s = (s - (bezier(s, EASE_X1, EASE_X2) - t) / slope).clamp(0.0, 1.0);
    }
    // y1 = 0, y2 = 1
    bezier(s, 0.0, 1.0)
}

/// One coordinate of a cubic bezier anchored at 0 and 1
fn bezier(s: f32, p1: f32, p2: f32) -> f32 {
    let ms = 1.0 - s;
    3.0 * ms * ms * s * p1 + 3.0 * ms * s * s * p2 + s * s * s
}

fn bezier_slope(s: f32, p1: f32, p2: f32) -> f32 {
    let ms = 1.0 - s;
    3.0 * ms * ms * p1 + 6.0 * ms * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}
