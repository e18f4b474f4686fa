pub mod ripple;
pub mod widget;

pub use ripple::{
    ripple_effect, Gesture, Ripple, RippleAnimation, RippleCircle, RippleConfig, RippleEffect,
    RippleGeometry, RippleId, RippleLayer, TouchTarget, BASE_RADIUS,
};
pub use widget::{
    Color, Event, EventResponse, LayoutDirection, LayoutEvent, Rect, Size, TouchEvent,
};
