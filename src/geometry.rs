//! Plain geometry the outline is laid out with.
//!
//! Everything is in host units with the origin at the container's top-left
//! corner and `y` growing downward.

/// RGBA color, each channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Opaque color from a `0xRRGGBB` value
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Holo blue, the stock outline color.
    pub const ACCENT: Color = Color::from_hex(0x33B5E5);
}

impl Default for Color {
    fn default() -> Self {
        Self::ACCENT
    }
}

/// Container bounds in host units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rect
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect anchored at the origin.
    /// Rect at the origin
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Shrink uniformly on every edge. Width and height never go negative.
    pub fn inset(&self, amount: f32) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            width: (self.width - amount * 2.0).max(0.0),
            height: (self.height - amount * 2.0).max(0.0),
        }
    }

    /// Shrink by per-edge padding (the content box of a container).
    pub fn pad(&self, padding: &Padding) -> Self {
        Self {
            x: self.x + padding.left,
            y: self.y + padding.top,
            width: (self.width - padding.horizontal()).max(0.0),
            height: (self.height - padding.vertical()).max(0.0),
        }
    }

    /// Corners in drawing order: top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [(f32, f32); 4] {
        [
            (self.x, self.y),
            (self.right(), self.y),
            (self.right(), self.bottom()),
            (self.x, self.bottom()),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    /// Same padding on every side
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Horizontal padding on left and right, vertical on top and bottom
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Total of left and right
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total of top and bottom
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset_clamps_to_zero() {
        let r = Rect::from_size(10.0, 40.0).inset(8.0);
        assert_eq!(r.x, 8.0);
        assert_eq!(r.width, 0.0);
        assert_eq!(r.height, 24.0);
    }

    #[test]
    fn test_pad_uses_each_edge() {
        let padding = Padding {
            top: 1.0,
            right: 2.0,
            bottom: 3.0,
            left: 4.0,
        };
        let r = Rect::from_size(100.0, 50.0).pad(&padding);
        assert_eq!(r, Rect::new(4.0, 1.0, 94.0, 46.0));
    }

    #[test]
    fn test_corners_clockwise() {
        let corners = Rect::new(10.0, 20.0, 30.0, 40.0).corners();
        assert_eq!(
            corners,
            [(10.0, 20.0), (40.0, 20.0), (40.0, 60.0), (10.0, 60.0)]
        );
    }

    #[test]
    fn test_accent_from_hex() {
        let c = Color::ACCENT;
        assert_eq!(c.r, 0x33 as f32 / 255.0);
        assert_eq!(c.g, 0xB5 as f32 / 255.0);
        assert_eq!(c.b, 0xE5 as f32 / 255.0);
        assert_eq!(c.a, 1.0);
    }
}
