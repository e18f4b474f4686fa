use std::time::Duration;

use crate::animation::{Animatable, AnimationStatus, Timeline, Transition};
use crate::widgets::{Size, TouchEvent};

/// Intrinsic radius of the painted ripple circle; scale is relative to it
pub const BASE_RADIUS: f32 = 10.0;

/// Radius the circle starts from, so it is barely visible at progress 0
const START_RADIUS: f32 = 0.5;

/// Identifier of a ripple. Never reused within one widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RippleId(pub(crate) u64);

impl RippleId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Where a ripple starts and how large it grows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// Compute ripple origin and final radius for a touch.
///
/// The auto radius is the distance from the origin to the farthest corner of
/// `bounds`, so the grown circle covers the whole widget. A positive `size`
/// overrides it with `size / 2`.
pub fn ripple_geometry(bounds: Size, touch: TouchEvent, centered: bool, size: f32) -> RippleGeometry {
    let w2 = 0.5 * bounds.width;
    let h2 = 0.5 * bounds.height;

    let (x, y) = if centered { (w2, h2) } else { (touch.x, touch.y) };

    let offset_x = (w2 - x).abs();
    let offset_y = (h2 - y).abs();

    let radius = if size > 0.0 {
        0.5 * size
    } else {
        ((w2 + offset_x).powi(2) + (h2 + offset_y).powi(2)).sqrt()
    };

    RippleGeometry { x, y, radius }
}

/// The animation behind one ripple, as handed to the animation hook.
///
/// The hook decides when [`start`](Self::start) is called; a ripple whose
/// animation never starts stays on screen at progress 0.
#[derive(Debug)]
pub struct RippleAnimation {
    id: RippleId,
    timeline: Timeline,
}

impl RippleAnimation {
    pub(crate) fn new(id: RippleId, transition: Transition) -> Self {
        Self {
            id,
            timeline: Timeline::new(transition),
        }
    }

    pub fn id(&self) -> RippleId {
        self.id
    }

    /// Start the animation. Returns false if it was already started or ended.
    pub fn start(&mut self) -> bool {
        self.timeline.start()
    }

    pub fn status(&self) -> AnimationStatus {
        self.timeline.status()
    }

    pub fn duration(&self) -> Duration {
        self.timeline.duration()
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub(crate) fn advance(&mut self, dt: Duration) -> bool {
        self.timeline.advance(dt)
    }

    pub(crate) fn cancel(&mut self) -> bool {
        self.timeline.cancel()
    }
}

/// One active ripple
#[derive(Debug)]
pub struct Ripple {
    pub(crate) geometry: RippleGeometry,
    pub(crate) animation: RippleAnimation,
}

impl Ripple {
    pub fn id(&self) -> RippleId {
        self.animation.id
    }

    pub fn geometry(&self) -> RippleGeometry {
        self.geometry
    }

    pub fn animation(&self) -> &RippleAnimation {
        &self.animation
    }

    /// Eased animation progress in `[0, 1]`
    pub fn progress(&self) -> f32 {
        self.animation.timeline.progress()
    }

    /// Scale applied to a circle of [`BASE_RADIUS`]
    pub fn scale(&self) -> f32 {
        f32::lerp(
            &(START_RADIUS / BASE_RADIUS),
            &(self.geometry.radius / BASE_RADIUS),
            self.progress(),
        )
    }

    /// Current opacity for a ripple with base `opacity`
    pub fn opacity(&self, opacity: f32, fades: bool) -> f32 {
        if fades {
            f32::lerp(&opacity, &0.0, self.progress())
        } else {
            opacity
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::TimingFunction;

    fn touch(x: f32, y: f32) -> TouchEvent {
        TouchEvent::new(x, y).unwrap()
    }

    fn ripple(radius: f32, ms: u64) -> Ripple {
        Ripple {
            geometry: RippleGeometry {
                x: 0.0,
                y: 0.0,
                radius,
            },
            animation: RippleAnimation::new(
                RippleId(0),
                Transition::new(Duration::from_millis(ms), TimingFunction::Linear),
            ),
        }
    }

    #[test]
    fn test_corner_touch_radius() {
        let geometry = ripple_geometry(Size::new(100.0, 100.0), touch(90.0, 10.0), false, 0.0);
        assert_eq!((geometry.x, geometry.y), (90.0, 10.0));
        assert!((geometry.radius - 90.0 * 2f32.sqrt()).abs() < 1e-3);
        assert!((geometry.radius - 127.279).abs() < 1e-2);
    }

    #[test]
    fn test_radius_covers_corners_across_grid() {
        let sizes = [(100.0, 100.0), (320.0, 48.0), (24.0, 400.0), (1.0, 1.0), (0.5, 250.0)];
        for &(w, h) in &sizes {
            let bounds = Size::new(w, h);
            let corners = [(0.0, 0.0), (w, 0.0), (0.0, h), (w, h)];
            for i in 0..=10 {
                for j in 0..=10 {
                    let x = w * i as f32 / 10.0;
                    let y = h * j as f32 / 10.0;
                    let g = ripple_geometry(bounds, touch(x, y), false, 0.0);
                    for &(cx, cy) in &corners {
                        let distance = ((cx - x).powi(2) + (cy - y).powi(2)).sqrt();
                        assert!(
                            g.radius * (1.0 + 1e-5) + 1e-4 >= distance,
                            "{w}x{h} at ({x}, {y}) misses ({cx}, {cy})"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_centered_ignores_touch() {
        let g = ripple_geometry(Size::new(80.0, 40.0), touch(5.0, 35.0), true, 0.0);
        assert_eq!((g.x, g.y), (40.0, 20.0));
        assert!((g.radius - (40f32.powi(2) + 20f32.powi(2)).sqrt()).abs() < 1e-4);
    }

    #[test]
    fn test_fixed_size() {
        for &(w, h, x, y) in &[(100.0, 100.0, 90.0, 10.0), (0.0, 0.0, 0.0, 0.0), (5.0, 500.0, 2.0, 400.0)] {
            let g = ripple_geometry(Size::new(w, h), touch(x, y), false, 20.0);
            assert_eq!(g.radius, 10.0);
        }
    }

    #[test]
    fn test_unmeasured_bounds_give_zero_radius() {
        let g = ripple_geometry(Size::zero(), touch(0.0, 0.0), false, 0.0);
        assert_eq!(g.radius, 0.0);
    }

    #[test]
    fn test_scale_grows_to_radius() {
        let mut r = ripple(50.0, 100);
        assert_eq!(r.scale(), 0.5 / BASE_RADIUS);
        r.animation.start();
        r.animation.advance(Duration::from_millis(100));
        assert!((r.scale() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_opacity_fades_linearly() {
        let mut r = ripple(50.0, 100);
        r.animation.start();
        assert!((r.opacity(0.3, true) - 0.3).abs() < 1e-6);
        r.animation.advance(Duration::from_millis(50));
        assert!((r.opacity(0.3, true) - 0.15).abs() < 1e-6);
        assert_eq!(r.opacity(0.3, false), 0.3);
        r.animation.advance(Duration::from_millis(50));
        assert_eq!(r.opacity(0.3, true), 0.0);
        assert_eq!(r.opacity(0.3, false), 0.3);
    }
}
