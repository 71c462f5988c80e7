//! The drawing surface contract shared with higher-level graphics code.
//!
//! Shape and text rendering is not part of this crate. Anything that can plot single pixels
//! through `Canvas::draw_pixel` can be layered on top, e.g. `embedded-graphics` with the
//! `graphics` feature enabled.

/// A binary pixel value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Off,
    On,
}

impl From<bool> for Color {
    fn from(on: bool) -> Self {
        if on {
            Color::On
        } else {
            Color::Off
        }
    }
}

/// Orientation of the logical drawing surface relative to the panel, in quarter turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    Rotate0,
    Rotate90,
    Rotate180,
    Rotate270,
}

impl Default for Rotation {
    fn default() -> Self {
        Rotation::Rotate0
    }
}

impl Rotation {
    /// Rotation from a quarter-turn count. Only the two low bits are significant, so 4 wraps to
    /// `Rotate0`.
    pub fn from_index(index: u8) -> Self {
        match index & 3 {
            0 => Rotation::Rotate0,
            1 => Rotation::Rotate90,
            2 => Rotation::Rotate180,
            _ => Rotation::Rotate270,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Rotation::Rotate0 => 0,
            Rotation::Rotate90 => 1,
            Rotation::Rotate180 => 2,
            Rotation::Rotate270 => 3,
        }
    }

    /// Whether logical width and height are swapped relative to the panel.
    pub fn is_transposed(self) -> bool {
        match self {
            Rotation::Rotate90 | Rotation::Rotate270 => true,
            Rotation::Rotate0 | Rotation::Rotate180 => false,
        }
    }

    /// Map a logical coordinate to the panel coordinate it lands on, for a panel of
    /// `width` x `height` physical pixels. The input must already be within the logical bounds.
    pub fn to_physical(self, x: i16, y: i16, width: i16, height: i16) -> (i16, i16) {
        match self {
            Rotation::Rotate0 => (x, y),
            Rotation::Rotate90 => (width - y - 1, x),
            Rotation::Rotate180 => (width - x - 1, height - y - 1),
            Rotation::Rotate270 => (y, height - x - 1),
        }
    }
}

/// The minimal capability set a pixel-addressable surface offers to drawing code.
pub trait Canvas {
    /// Width of the drawing surface in the current rotation.
    fn width(&self) -> i16;
    /// Height of the drawing surface in the current rotation.
    fn height(&self) -> i16;
    fn rotation(&self) -> Rotation;
    /// Set a single pixel. Coordinates outside `[0, width) x [0, height)` are ignored.
    fn draw_pixel(&mut self, x: i16, y: i16, color: Color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_index_wraps() {
        assert_eq!(Rotation::from_index(0), Rotation::Rotate0);
        assert_eq!(Rotation::from_index(3), Rotation::Rotate270);
        assert_eq!(Rotation::from_index(4), Rotation::Rotate0);
        assert_eq!(Rotation::from_index(6), Rotation::Rotate180);
        for i in 0..4 {
            assert_eq!(Rotation::from_index(i).index(), i);
        }
    }

    #[test]
    fn to_physical_corners() {
        // Logical origin of each rotation lands on a different panel corner.
        assert_eq!(Rotation::Rotate0.to_physical(0, 0, 128, 64), (0, 0));
        assert_eq!(Rotation::Rotate90.to_physical(0, 0, 128, 64), (127, 0));
        assert_eq!(Rotation::Rotate180.to_physical(0, 0, 128, 64), (127, 63));
        assert_eq!(Rotation::Rotate270.to_physical(0, 0, 128, 64), (0, 63));

        // Far logical corners, with width and height swapped for the quarter turns.
        assert_eq!(Rotation::Rotate0.to_physical(127, 63, 128, 64), (127, 63));
        assert_eq!(Rotation::Rotate90.to_physical(63, 127, 128, 64), (0, 63));
        assert_eq!(Rotation::Rotate180.to_physical(127, 63, 128, 64), (0, 0));
        assert_eq!(Rotation::Rotate270.to_physical(63, 127, 128, 64), (127, 0));
    }

    #[test]
    fn transposed() {
        assert!(!Rotation::Rotate0.is_transposed());
        assert!(Rotation::Rotate90.is_transposed());
        assert!(!Rotation::Rotate180.is_transposed());
        assert!(Rotation::Rotate270.is_transposed());
    }
}
