use std::str::FromStr;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Same color with its alpha multiplied by `opacity`
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self {
            a: self.a * opacity,
            ..self
        }
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

/// Parses CSS-style colors: `rgb(r, g, b)`, `rgba(r, g, b, a)`, `#rgb`, `#rrggbb`.
///
/// Channels in `rgb()`/`rgba()` are 0-255, alpha is 0-1.
impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(s.to_string());
        let trimmed = s.trim();

        if let Some(hex) = trimmed.strip_prefix('#') {
            let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
            return match hex.len() {
                6 => Ok(Color::from_hex(value)),
                3 => {
                    // #abc expands to #aabbcc
                    let r = (value >> 8) & 0xF;
                    let g = (value >> 4) & 0xF;
                    let b = value & 0xF;
                    Ok(Color::from_hex(
                        ((r * 0x11) << 16) | ((g * 0x11) << 8) | (b * 0x11),
                    ))
                }
                _ => Err(invalid()),
            };
        }

        let (args, has_alpha) = if let Some(rest) = trimmed.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = trimmed.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(invalid());
        };
        let args = args.strip_suffix(')').ok_or_else(invalid)?;

        let parts = args
            .split(',')
            .map(|part| part.trim().parse::<f32>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>>>()?;

        match (parts.as_slice(), has_alpha) {
            ([r, g, b], false) => Ok(Color::rgb(r / 255.0, g / 255.0, b / 255.0)),
            ([r, g, b, a], true) => Ok(Color::rgba(r / 255.0, g / 255.0, b / 255.0, *a)),
            _ => Err(invalid()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    /// Closed-box hit test; points on the right and bottom edges are inside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Horizontal writing direction of the host layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Touch location in the widget's local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub x: f32,
    pub y: f32,
}

impl TouchEvent {
    pub fn new(x: f32, y: f32) -> Result<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::NonFiniteTouch { x, y });
        }
        Ok(Self { x, y })
    }
}

/// Measured size reported by the host layout pass.
///
/// Zero and negative sizes are accepted as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEvent {
    pub width: f32,
    pub height: f32,
}

impl LayoutEvent {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        if !width.is_finite() || !height.is_finite() {
            return Err(Error::NonFiniteLayout { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Input delivered to the ripple widget by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Host layout measured the widget
    Layout(LayoutEvent),
    /// Pointer went down inside the widget
    PointerDown(TouchEvent),
    /// Pointer was released
    PointerUp(TouchEvent),
    /// Pointer left the widget or the gesture was taken by someone else
    PointerLeave,
    /// An already recognised tap
    Press(TouchEvent),
    /// An already recognised long press
    LongPress(TouchEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Handled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb() {
        let color: Color = "rgb(0, 0, 0)".parse().unwrap();
        assert_eq!(color, Color::BLACK);

        let color: Color = "rgb(255,0,255)".parse().unwrap();
        assert_eq!(color, Color::rgb(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_parse_rgba() {
        let color: Color = "rgba(255, 255, 255, 0.5)".parse().unwrap();
        assert_eq!(color, Color::rgba(1.0, 1.0, 1.0, 0.5));
    }

    #[test]
    fn test_parse_hex() {
        let color: Color = "#ff0000".parse().unwrap();
        assert_eq!(color, Color::rgb(1.0, 0.0, 0.0));

        let short: Color = "#0f0".parse().unwrap();
        assert_eq!(short, Color::rgb(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "red", "rgb(1, 2)", "rgba(1, 2, 3)", "#12345", "#zzzzzz", "rgb(a, b, c)"] {
            assert_eq!(
                input.parse::<Color>(),
                Err(Error::InvalidColor(input.to_string())),
                "{input}"
            );
        }
    }

    #[test]
    fn test_with_opacity() {
        let color = Color::rgba(1.0, 0.0, 0.0, 0.5).with_opacity(0.5);
        assert_eq!(color.a, 0.25);
        assert_eq!(color.r, 1.0);
    }

    #[test]
    fn test_touch_event_rejects_non_finite() {
        assert!(TouchEvent::new(1.0, 2.0).is_ok());
        assert!(TouchEvent::new(-5.0, 0.0).is_ok());
        assert!(matches!(
            TouchEvent::new(f32::NAN, 0.0),
            Err(Error::NonFiniteTouch { .. })
        ));
        assert!(TouchEvent::new(0.0, f32::INFINITY).is_err());
    }

    #[test]
    fn test_layout_event_accepts_zero_and_negative() {
        assert_eq!(LayoutEvent::new(0.0, 0.0).unwrap().size(), Size::zero());
        assert!(LayoutEvent::new(-1.0, 10.0).is_ok());
        assert!(matches!(
            LayoutEvent::new(f32::NEG_INFINITY, 1.0),
            Err(Error::NonFiniteLayout { .. })
        ));
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::from_size(Size::new(10.0, 20.0));
        assert!(rect.contains(0.0, 0.0));
        assert!(rect.contains(9.9, 19.9));
        assert!(rect.contains(10.0, 5.0));
        assert!(rect.contains(10.0, 20.0));
        assert!(!rect.contains(10.1, 5.0));
        assert!(!rect.contains(5.0, 20.1));
        assert!(!rect.contains(-0.1, 5.0));
    }
}
