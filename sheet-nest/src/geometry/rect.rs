use anyhow::Result;
use anyhow::ensure;
use serde::{Deserialize, Serialize};

///Axis-aligned rectangle, `y` grows downwards from the sheet origin
#[derive(Clone, Debug, PartialEq, Copy, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Rectangle with its top-left corner at (`x`, `y`) and the given dimensions.
    /// Zero-sized rectangles are allowed, they describe exhausted free space.
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect {
            x_min: x,
            y_min: y,
            x_max: x + width,
            y_max: y + height,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Grows the rectangle by `dx` on the left and right and by `dy` on the top and bottom.
    /// Negative values shrink it, returns `None` if nothing would be left.
    pub fn resize_by(mut self, dx: f64, dy: f64) -> Option<Self> {
        self.x_min -= dx;
        self.y_min -= dy;
        self.x_max += dx;
        self.y_max += dy;

        match self.x_min < self.x_max && self.y_min < self.y_max {
            true => Some(self),
            false => None,
        }
    }

    /// Returns true if the interiors of `self` and `other` intersect.
    /// Rectangles that only share an edge or a corner do not overlap.
    #[inline(always)]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x_min < other.x_max
            && other.x_min < self.x_max
            && self.y_min < other.y_max
            && other.y_min < self.y_max
    }

    /// Returns true if `other` lies entirely within `self` (boundaries included).
    #[inline(always)]
    pub fn contains(&self, other: &Rect) -> bool {
        self.x_min <= other.x_min
            && self.y_min <= other.y_min
            && other.x_max <= self.x_max
            && other.y_max <= self.y_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_rectangles_do_not_overlap() {
        let a = Rect::from_xywh(0.0, 0.0, 100.0, 200.0);
        let b = Rect::from_xywh(100.0, 0.0, 100.0, 200.0);
        let c = Rect::from_xywh(100.0, 200.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn overlapping_rectangles() {
        let a = Rect::from_xywh(0.0, 0.0, 100.0, 100.0);
        let b = Rect::from_xywh(99.0, 99.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn containment_includes_boundary() {
        let sheet = Rect::from_xywh(0.0, 0.0, 200.0, 200.0);
        assert!(sheet.contains(&sheet));
        assert!(sheet.contains(&Rect::from_xywh(100.0, 150.0, 100.0, 50.0)));
        assert!(!sheet.contains(&Rect::from_xywh(100.0, 150.0, 100.1, 50.0)));
    }

    #[test]
    fn resizing() {
        let r = Rect::from_xywh(10.0, 10.0, 20.0, 10.0);
        assert_eq!(r.resize_by(1.0, 2.0), Some(Rect::from_xywh(9.0, 8.0, 22.0, 14.0)));
        assert_eq!(r.resize_by(-5.0, -5.0), None);
    }

    #[test]
    fn degenerate_rectangles_are_rejected() {
        assert!(Rect::try_new(0.0, 0.0, 0.0, 10.0).is_err());
        assert!(Rect::try_new(0.0, 5.0, 10.0, 1.0).is_err());
        assert!(Rect::try_new(0.0, 0.0, 10.0, 10.0).is_ok());
    }
}
