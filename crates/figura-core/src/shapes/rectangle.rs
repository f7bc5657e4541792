//! Rectangle and rounded rectangle shapes.

use super::{OutlineTrait, ShapeKind, corner_frame, frame_contains};
use kurbo::{BezPath, Point, Rect, RoundedRect, Shape as KurboShape};

/// An axis-aligned rectangle spanned by two opposite corners.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    /// Corner fixed at construction.
    pub anchor: Point,
    /// Corner that follows the pointer during creation.
    pub corner: Point,
}

impl Rectangle {
    /// Create a zero-sized rectangle at `seed`.
    pub fn new(seed: Point) -> Self {
        Self::from_corners(seed, seed)
    }

    /// Create a rectangle from two corner points.
    pub fn from_corners(anchor: Point, corner: Point) -> Self {
        Self { anchor, corner }
    }

    /// Get the rectangle as a normalised kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        corner_frame(self.anchor, self.corner)
    }
}

impl OutlineTrait for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn contains(&self, point: Point) -> bool {
        frame_contains(self.as_rect(), point)
    }

    fn set_last_point(&mut self, point: Point) {
        self.corner = point;
    }

    fn center(&self) -> Point {
        self.as_rect().center()
    }

    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn to_path(&self) -> BezPath {
        self.as_rect().to_path(0.1)
    }
}

/// A rectangle with circular-arc corners.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectangle {
    pub anchor: Point,
    pub corner: Point,
    /// Requested corner radius; clamped to half the shorter side when used.
    pub corner_radius: f64,
}

impl RoundedRectangle {
    /// Create a zero-sized rounded rectangle at `seed`.
    pub fn new(seed: Point, corner_radius: f64) -> Self {
        Self::from_corners(seed, seed, corner_radius)
    }

    pub fn from_corners(anchor: Point, corner: Point, corner_radius: f64) -> Self {
        Self {
            anchor,
            corner,
            corner_radius: corner_radius.max(0.0),
        }
    }

    pub fn as_rect(&self) -> Rect {
        corner_frame(self.anchor, self.corner)
    }

    /// Corner radius that actually fits the current frame.
    pub fn effective_radius(&self) -> f64 {
        let rect = self.as_rect();
        self.corner_radius
            .min(rect.width() / 2.0)
            .min(rect.height() / 2.0)
    }
}

impl OutlineTrait for RoundedRectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::RoundedRectangle
    }

    fn contains(&self, point: Point) -> bool {
        let rect = self.as_rect();
        if !frame_contains(rect, point) {
            return false;
        }
        let r = self.effective_radius();
        if r <= 0.0 {
            return true;
        }
        // Inside the frame: only the corner squares need the arc test.
        // The inner bounds can cross by an ulp when r is half a side, so no `clamp`.
        let cx = point.x.max(rect.x0 + r).min(rect.x1 - r);
        let cy = point.y.max(rect.y0 + r).min(rect.y1 - r);
        point.distance(Point::new(cx, cy)) <= r
    }

    fn set_last_point(&mut self, point: Point) {
        self.corner = point;
    }

    fn center(&self) -> Point {
        self.as_rect().center()
    }

    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn to_path(&self) -> BezPath {
        RoundedRect::from_rect(self.as_rect(), self.effective_radius()).to_path(0.1)
    }
}
