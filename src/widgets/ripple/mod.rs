//! Touchable container that draws material-style ripple feedback.
//!
//! A [`RippleEffect`] tracks its measured bounds, turns presses and long
//! presses into expanding, fading circles, and forwards the gestures to user
//! callbacks on the next paint frame.
//!
//! # Example
//! ```
//! use std::time::Duration;
//! use ripple_effect::frame::FrameQueue;
//! use ripple_effect::prelude::*;
//!
//! let frames = FrameQueue::new();
//! let mut button = ripple_effect(RippleConfig::default().sequential(true))
//!     .frame_scheduler(frames.clone())
//!     .on_press(|touch| println!("pressed at {}, {}", touch.x, touch.y));
//!
//! button.handle_event(&Event::Layout(LayoutEvent::new(120.0, 40.0)?));
//! button.handle_event(&Event::Press(TouchEvent::new(30.0, 20.0)?));
//! assert_eq!(button.ripples().len(), 1);
//!
//! frames.run_frame(); // runs on_press
//! button.advance(Duration::from_millis(400));
//! assert!(button.ripples().is_empty());
//! # Ok::<(), ripple_effect::Error>(())
//! ```

mod config;
mod paint;
mod record;
mod touch;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::frame::{FrameQueue, FrameScheduler};
use crate::widgets::{Event, EventResponse, LayoutEvent, Rect, Size, TouchEvent};

pub use config::RippleConfig;
pub use paint::{RippleCircle, RippleLayer};
pub use record::{ripple_geometry, Ripple, RippleAnimation, RippleGeometry, RippleId, BASE_RADIUS};
pub use touch::{Gesture, TouchTarget};

pub type PressCallback = Arc<dyn Fn(TouchEvent) + Send + Sync>;
pub type RippleAnimationCallback = Arc<dyn Fn(&mut RippleAnimation) + Send + Sync>;
pub type RippleCompleteCallback = Arc<dyn Fn(RippleId) + Send + Sync>;

/// Create a ripple widget without child content
pub fn ripple_effect(config: RippleConfig) -> RippleEffect {
    RippleEffect::new(config)
}

pub struct RippleEffect<C = ()> {
    config: RippleConfig,
    bounds: Size,
    ripples: Vec<Ripple>,
    next_id: u64,
    touch: TouchTarget,
    content: Option<C>,
    on_press: Option<PressCallback>,
    on_long_press: Option<PressCallback>,
    on_ripple_animation: Option<RippleAnimationCallback>,
    on_ripple_complete: Option<RippleCompleteCallback>,
    scheduler: Arc<dyn FrameScheduler>,
    /// Shared with deferred callbacks so they go quiet after unmount
    mounted: Arc<AtomicBool>,
}

impl<C> RippleEffect<C> {
    pub fn new(config: RippleConfig) -> Self {
        let touch = TouchTarget::new(config.delay_long_press, config.disabled);
        Self {
            config,
            bounds: Size::zero(),
            ripples: Vec::new(),
            next_id: 0,
            touch,
            content: None,
            on_press: None,
            on_long_press: None,
            on_ripple_animation: None,
            on_ripple_complete: None,
            scheduler: Arc::new(FrameQueue::global()),
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Create a ripple widget wrapping `child`, painted beneath the ripples
    pub fn with_child(child: C, config: RippleConfig) -> Self {
        let mut widget = Self::new(config);
        widget.content = Some(child);
        widget
    }

    pub fn on_press<F: Fn(TouchEvent) + Send + Sync + 'static>(mut self, callback: F) -> Self {
        self.on_press = Some(Arc::new(callback));
        self
    }

    pub fn on_long_press<F: Fn(TouchEvent) + Send + Sync + 'static>(mut self, callback: F) -> Self {
        self.on_long_press = Some(Arc::new(callback));
        self
    }

    /// Replace the default "start right away" animation driver.
    ///
    /// The hook receives every new ripple animation before the ripple is
    /// added. It may start it, or leave it pending and start it later through
    /// [`start_animation`](Self::start_animation).
    pub fn on_ripple_animation<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut RippleAnimation) + Send + Sync + 'static,
    {
        self.on_ripple_animation = Some(Arc::new(hook));
        self
    }

    /// Called after a ripple's animation finished and it was removed
    pub fn on_ripple_complete<F: Fn(RippleId) + Send + Sync + 'static>(mut self, callback: F) -> Self {
        self.on_ripple_complete = Some(Arc::new(callback));
        self
    }

    /// Where press callbacks are deferred to. Defaults to [`FrameQueue::global`].
    pub fn frame_scheduler(mut self, scheduler: impl FrameScheduler + 'static) -> Self {
        self.scheduler = Arc::new(scheduler);
        self
    }

    pub fn config(&self) -> &RippleConfig {
        &self.config
    }

    /// Last measured size
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Active ripples, oldest first
    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    pub fn content(&self) -> Option<&C> {
        self.content.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    /// Whether any ripple animation is still running
    pub fn is_animating(&self) -> bool {
        self.ripples.iter().any(|r| r.animation.timeline().is_running())
    }

    /// Record the host's measured size. Any value is accepted.
    pub fn on_layout(&mut self, layout: LayoutEvent) {
        log::trace!("Ripple bounds {}x{}", layout.width, layout.height);
        self.bounds = layout.size();
    }

    /// Handle a recognised tap.
    ///
    /// In sequential mode the tap is swallowed while a ripple is active.
    /// Returns the new ripple, if one was started.
    pub fn press(&mut self, touch: TouchEvent) -> Option<RippleId> {
        if !self.is_mounted() {
            return None;
        }
        if self.config.sequential && !self.ripples.is_empty() {
            log::debug!(
                "Press at ({}, {}) ignored: {} ripple(s) still active",
                touch.x,
                touch.y,
                self.ripples.len()
            );
            return None;
        }

        self.defer(self.on_press.as_ref(), touch);
        self.start_ripple(touch)
    }

    /// Handle a recognised long press. Sequential mode does not apply.
    pub fn long_press(&mut self, touch: TouchEvent) -> Option<RippleId> {
        if !self.is_mounted() {
            return None;
        }
        self.defer(self.on_long_press.as_ref(), touch);
        self.start_ripple(touch)
    }

    fn defer(&self, callback: Option<&PressCallback>, touch: TouchEvent) {
        let Some(callback) = callback else {
            return;
        };
        let callback = callback.clone();
        let mounted = self.mounted.clone();
        self.scheduler.request_frame_callback(Box::new(move || {
            if mounted.load(Ordering::Acquire) {
                callback(touch);
            }
        }));
    }

    /// Create a ripple for `touch`, hand its animation to the hook and append
    /// it to the active list. Does nothing once unmounted.
    pub fn start_ripple(&mut self, touch: TouchEvent) -> Option<RippleId> {
        if !self.is_mounted() {
            return None;
        }
        let id = RippleId(self.next_id);
        self.next_id += 1;

        let geometry = ripple_geometry(self.bounds, touch, self.config.centered, self.config.size);
        let mut animation = RippleAnimation::new(id, self.config.transition());
        match &self.on_ripple_animation {
            Some(hook) => hook(&mut animation),
            None => {
                animation.start();
            }
        }

        log::debug!(
            "Ripple {} at ({}, {}) radius {} ({:?})",
            id.get(),
            geometry.x,
            geometry.y,
            geometry.radius,
            animation.status()
        );
        self.ripples.push(Ripple {
            geometry,
            animation,
        });
        Some(id)
    }

    /// Start a ripple animation the hook left pending
    pub fn start_animation(&mut self, id: RippleId) -> bool {
        self.ripples
            .iter_mut()
            .find(|r| r.id() == id)
            .is_some_and(|r| r.animation.start())
    }

    /// Advance ripple animations and the long-press timer by `dt`.
    ///
    /// Finished ripples are removed by id. Returns whether anything is still
    /// animating.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if !self.is_mounted() {
            return false;
        }

        let mut finished = Vec::new();
        for ripple in &mut self.ripples {
            if ripple.animation.advance(dt) {
                finished.push(ripple.id());
            }
        }
        for id in finished {
            self.complete(id);
        }

        if let Some(Gesture::LongPress(touch)) = self.touch.advance(dt) {
            self.long_press(touch);
        }

        self.is_animating()
    }

    fn complete(&mut self, id: RippleId) {
        self.ripples.retain(|r| r.id() != id);
        log::debug!("Ripple {} finished, {} active", id.get(), self.ripples.len());
        if let Some(ref callback) = self.on_ripple_complete {
            callback(id);
        }
    }

    /// Route a host event.
    ///
    /// Layout is always recorded. Touch input is ignored while disabled or
    /// after unmount.
    pub fn handle_event(&mut self, event: &Event) -> EventResponse {
        if !self.is_mounted() {
            return EventResponse::Ignored;
        }

        match *event {
            Event::Layout(layout) => {
                self.on_layout(layout);
                return EventResponse::Handled;
            }
            _ if self.touch.is_disabled() => return EventResponse::Ignored,
            Event::PointerDown(touch) => self.touch.pointer_down(touch),
            Event::PointerUp(touch) => {
                let hit_area = (self.bounds.width > 0.0 && self.bounds.height > 0.0)
                    .then(|| Rect::from_size(self.bounds));
                if let Some(Gesture::Press(touch)) = self.touch.pointer_up(touch, hit_area) {
                    self.press(touch);
                }
            }
            Event::PointerLeave => self.touch.pointer_leave(),
            Event::Press(touch) => {
                self.press(touch);
            }
            Event::LongPress(touch) => {
                self.long_press(touch);
            }
        }
        EventResponse::Handled
    }

    /// Describe the current frame: clip, content, then one circle per ripple
    pub fn paint(&self) -> RippleLayer<'_, C> {
        let clip = Rect::from_size(self.bounds);
        RippleLayer {
            clip,
            corner_radius: self.config.container_border_radius,
            content: self.content.as_ref(),
            circles: self
                .ripples
                .iter()
                .map(|ripple| paint::paint_ripple(ripple, &self.config, clip))
                .collect(),
        }
    }

    /// Tear the widget down: cancel every ripple animation, drop the active
    /// list and silence press callbacks still waiting for a frame.
    pub fn unmount(&mut self) {
        if !self.mounted.swap(false, Ordering::AcqRel) {
            return;
        }
        let mut cancelled = 0;
        for ripple in &mut self.ripples {
            if ripple.animation.cancel() {
                cancelled += 1;
            }
        }
        self.ripples.clear();
        self.touch.pointer_leave();
        if cancelled > 0 {
            log::debug!("Unmounted with {} ripple animation(s) cancelled", cancelled);
        }
    }
}

impl<C> Drop for RippleEffect<C> {
    fn drop(&mut self) {
        self.unmount();
    }
}
