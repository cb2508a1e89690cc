//! Cell-grid geometry primitives for bubble positioning.
//!
//! Coordinates are measured in character cells, with the origin at the
//! top-left corner of the viewport.

/// A 2D size with unsigned dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Size {
    /// Creates a new size.
    #[inline]
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Returns whether either dimension is zero.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A rectangle combining position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// The x coordinate of the top-left corner (column).
    pub x: u16,
    /// The y coordinate of the top-left corner (row).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Creates a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the column one past the right edge.
    #[inline]
    #[must_use]
    pub const fn right(self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Returns the row one past the bottom edge.
    #[inline]
    #[must_use]
    pub const fn bottom(self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Returns the size of this rectangle.
    #[inline]
    #[must_use]
    pub const fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns whether `other` lies entirely within this rectangle.
    #[inline]
    #[must_use]
    pub const fn contains_rect(self, other: Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_edges() {
        let rect = Rect::new(10, 5, 60, 18);
        assert_eq!(rect.right(), 70);
        assert_eq!(rect.bottom(), 23);
        assert_eq!(rect.size(), Size::new(60, 18));
    }

    #[test]
    fn test_contains_rect() {
        let viewport = Rect::new(0, 0, 80, 24);
        assert!(viewport.contains_rect(Rect::new(10, 10, 20, 5)));
        assert!(viewport.contains_rect(viewport));
        assert!(!viewport.contains_rect(Rect::new(70, 10, 20, 5)));
        assert!(!viewport.contains_rect(Rect::new(10, 22, 20, 5)));
    }

    #[test]
    fn test_saturating_edges() {
        let rect = Rect::new(u16::MAX - 1, u16::MAX - 1, 10, 10);
        assert_eq!(rect.right(), u16::MAX);
        assert_eq!(rect.bottom(), u16::MAX);
    }
}
