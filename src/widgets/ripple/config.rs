use std::time::Duration;

use crate::animation::{TimingFunction, Transition};
use crate::widgets::{Color, LayoutDirection};

/// Display and behaviour options for a [`RippleEffect`](super::RippleEffect).
///
/// Built once from [`Default`] plus builder overrides and never mutated while
/// the widget is mounted.
///
/// # Example
/// ```
/// use ripple_effect::prelude::*;
///
/// let config = RippleConfig::default()
///     .color(Color::WHITE)
///     .centered(true)
///     .sequential(true);
/// assert_eq!(config.opacity, 0.30);
/// ```
#[derive(Clone, Debug)]
pub struct RippleConfig {
    /// Fill color of the ripple
    pub color: Color,
    /// Base opacity, multiplied into the color alpha
    pub opacity: f32,
    /// Length of each ripple animation
    pub duration: Duration,
    /// Fixed ripple diameter; `0` sizes the ripple to cover the widget
    pub size: f32,
    /// Corner rounding of the clipping container
    pub container_border_radius: f32,
    /// Always start ripples from the widget center
    pub centered: bool,
    /// Ignore presses while a ripple is still animating
    pub sequential: bool,
    /// Fade opacity to zero over the animation
    pub fades: bool,
    /// Stop the touch target from recognising gestures
    pub disabled: bool,
    /// Easing applied to ripple progress
    pub timing: TimingFunction,
    /// How long a pointer must stay down to count as a long press
    pub delay_long_press: Duration,
    /// Writing direction used to place ripples horizontally
    pub layout_direction: LayoutDirection,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            opacity: 0.30,
            duration: Duration::from_millis(400),
            size: 0.0,
            container_border_radius: 0.0,
            centered: false,
            sequential: false,
            fades: true,
            disabled: false,
            timing: TimingFunction::out(TimingFunction::Ease),
            delay_long_press: Duration::from_millis(500),
            layout_direction: LayoutDirection::LeftToRight,
        }
    }
}

impl RippleConfig {
    /// Create a new ripple config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ripple config with a custom color.
    pub fn with_color(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Fixed ripple diameter. Pass `0.0` to size ripples automatically.
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn container_border_radius(mut self, radius: f32) -> Self {
        self.container_border_radius = radius;
        self
    }

    pub fn centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    pub fn sequential(mut self, sequential: bool) -> Self {
        self.sequential = sequential;
        self
    }

    pub fn fades(mut self, fades: bool) -> Self {
        self.fades = fades;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    pub fn delay_long_press(mut self, delay: Duration) -> Self {
        self.delay_long_press = delay;
        self
    }

    pub fn layout_direction(mut self, direction: LayoutDirection) -> Self {
        self.layout_direction = direction;
        self
    }

    /// Transition every ripple animation uses
    pub fn transition(&self) -> Transition {
        Transition::new(self.duration, self.timing.clone())
    }
}
