use crate::widgets::{Color, LayoutDirection, Rect};

use super::record::{Ripple, RippleId, BASE_RADIUS};
use super::RippleConfig;

/// A ripple circle ready to draw: a circle of `base_radius` at the center,
/// scaled by `scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleCircle {
    pub id: RippleId,
    pub center_x: f32,
    pub center_y: f32,
    pub base_radius: f32,
    pub scale: f32,
    /// Ripple color with the current opacity folded into alpha
    pub color: Color,
}

impl RippleCircle {
    /// On-screen radius after scaling
    pub fn radius(&self) -> f32 {
        self.base_radius * self.scale
    }
}

/// Everything needed to paint the widget for one frame.
///
/// Draw `content` first, then the circles in order, clipped to `clip` with
/// `corner_radius` rounding.
#[derive(Debug)]
pub struct RippleLayer<'a, C> {
    pub clip: Rect,
    pub corner_radius: f32,
    pub content: Option<&'a C>,
    pub circles: Vec<RippleCircle>,
}

pub(super) fn paint_ripple(ripple: &Ripple, config: &RippleConfig, clip: Rect) -> RippleCircle {
    let geometry = ripple.geometry();
    let center_x = match config.layout_direction {
        LayoutDirection::LeftToRight => geometry.x,
        LayoutDirection::RightToLeft => clip.width - geometry.x,
    };

    RippleCircle {
        id: ripple.id(),
        center_x,
        center_y: geometry.y,
        base_radius: BASE_RADIUS,
        scale: ripple.scale(),
        color: config
            .color
            .with_opacity(ripple.opacity(config.opacity, config.fades)),
    }
}
