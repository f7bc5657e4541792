//! Ellipse shape.

use super::{OutlineTrait, ShapeKind, corner_frame, frame_contains};
use kurbo::{BezPath, Ellipse as KurboEllipse, Point, Rect, Shape as KurboShape};

/// An axis-aligned ellipse inscribed in the frame of two opposite corners.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    pub anchor: Point,
    pub corner: Point,
}

impl Ellipse {
    /// Create a zero-sized ellipse at `seed`.
    pub fn new(seed: Point) -> Self {
        Self::from_corners(seed, seed)
    }

    pub fn from_corners(anchor: Point, corner: Point) -> Self {
        Self { anchor, corner }
    }

    /// Bounding frame of the ellipse.
    pub fn frame(&self) -> Rect {
        corner_frame(self.anchor, self.corner)
    }

    /// Horizontal and vertical radii.
    pub fn radii(&self) -> (f64, f64) {
        let frame = self.frame();
        (frame.width() / 2.0, frame.height() / 2.0)
    }

    /// Get as a kurbo Ellipse.
    pub fn as_kurbo(&self) -> KurboEllipse {
        KurboEllipse::from_rect(self.frame())
    }
}

impl OutlineTrait for Ellipse {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Ellipse
    }

    fn contains(&self, point: Point) -> bool {
        let frame = self.frame();
        if !frame_contains(frame, point) {
            return false;
        }
        let center = frame.center();
        let (rx, ry) = self.radii();
        // A flat ellipse degenerates to its axis, which the frame test already covers.
        if rx < f64::EPSILON || ry < f64::EPSILON {
            return true;
        }
        let dx = (point.x - center.x) / rx;
        let dy = (point.y - center.y) / ry;
        dx * dx + dy * dy <= 1.0
    }

    fn set_last_point(&mut self, point: Point) {
        self.corner = point;
    }

    fn center(&self) -> Point {
        self.frame().center()
    }

    fn bounds(&self) -> Rect {
        self.frame()
    }

    fn to_path(&self) -> BezPath {
        self.as_kurbo().to_path(0.1)
    }
}
