//! Free polygon built one vertex at a time.

use super::{OutlineTrait, ShapeKind};
use crate::geometry::{centroid, points_bounds, polygon_contains, polygon_path};
use kurbo::{BezPath, Point, Rect};

/// A closed polygon with user-placed vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// A polygon under construction never has fewer vertices than this.
    pub const MIN_VERTICES: usize = 2;

    /// Seed a polygon with two coincident vertices: the fixed first vertex and
    /// the rubber-band vertex that follows the pointer.
    pub fn new(seed: Point) -> Self {
        Self {
            vertices: vec![seed, seed],
        }
    }

    /// Create from existing vertices, padding up to [`Polygon::MIN_VERTICES`].
    pub fn from_vertices(mut vertices: Vec<Point>) -> Option<Self> {
        let first = *vertices.first()?;
        while vertices.len() < Self::MIN_VERTICES {
            vertices.push(first);
        }
        Some(Self { vertices })
    }

    /// Append a vertex; it becomes the new rubber-band vertex.
    pub fn add_point(&mut self, point: Point) {
        self.vertices.push(point);
    }

    /// Drop the last vertex. Returns false when already at the minimum.
    pub fn remove_last_point(&mut self) -> bool {
        if self.vertices.len() <= Self::MIN_VERTICES {
            return false;
        }
        self.vertices.pop();
        true
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl OutlineTrait for Polygon {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Polygon
    }

    fn contains(&self, point: Point) -> bool {
        polygon_contains(&self.vertices, point)
    }

    fn set_last_point(&mut self, point: Point) {
        if let Some(last) = self.vertices.last_mut() {
            *last = point;
        }
    }

    fn center(&self) -> Point {
        centroid(&self.vertices)
    }

    fn bounds(&self) -> Rect {
        points_bounds(&self.vertices)
    }

    fn to_path(&self) -> BezPath {
        polygon_path(&self.vertices)
    }
}
