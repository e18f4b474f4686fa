//! Material-style ripple press feedback as a host-agnostic widget.
//!
//! The crate never reads a clock or talks to a windowing system. The host
//! feeds layout, pointer and time into a [`RippleEffect`](widgets::RippleEffect),
//! drains the [`frame`] queue once per paint, and draws what
//! [`paint`](widgets::RippleEffect::paint) returns.

pub mod animation;
pub mod error;
pub mod frame;
pub mod widgets;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::animation::{Animatable, AnimationStatus, TimingFunction, Transition};
    pub use crate::frame::{FrameQueue, FrameScheduler};
    pub use crate::widgets::{
        ripple_effect, Color, Event, EventResponse, LayoutDirection, LayoutEvent, Rect, Ripple,
        RippleAnimation, RippleCircle, RippleConfig, RippleEffect, RippleId, RippleLayer, Size,
        TouchEvent, BASE_RADIUS,
    };
}
