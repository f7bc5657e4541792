//! Regular polygon (the circle figure).

use super::{OutlineTrait, ShapeKind};
use crate::figure::FigureError;
use crate::geometry::{
    centroid, points_bounds, polygon_contains, polygon_path, regular_polygon_vertices,
};
use kurbo::{BezPath, Point, Rect};

/// A regular polygon inscribed in a circle, rounded to integer vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct RegularPolygon {
    /// Construction center.
    seed: Point,
    /// Offset added to every requested radius.
    min_radius: f64,
    vertex_count: usize,
    vertices: Vec<Point>,
}

impl RegularPolygon {
    /// Radius offset that keeps freshly seeded polygons from being zero-sized.
    pub const MIN_RADIUS: f64 = 2.0;

    /// Create a regular polygon of `radius + MIN_RADIUS` around `center`.
    pub fn new(center: Point, radius: f64, vertex_count: usize) -> Result<Self, FigureError> {
        Self::with_min_radius(center, radius, vertex_count, Self::MIN_RADIUS)
    }

    /// Create a regular polygon with a custom radius offset.
    pub fn with_min_radius(
        center: Point,
        radius: f64,
        vertex_count: usize,
        min_radius: f64,
    ) -> Result<Self, FigureError> {
        let vertices = regular_polygon_vertices(center, radius + min_radius, vertex_count)?;
        Ok(Self {
            seed: center,
            min_radius,
            vertex_count,
            vertices,
        })
    }

    /// Regenerate the outline so its radius reaches `point`.
    pub fn resize_to(&mut self, point: Point) {
        let radius = self.seed.distance(point) + self.min_radius;
        // vertex_count was validated at construction
        if let Ok(vertices) = regular_polygon_vertices(self.seed, radius, self.vertex_count) {
            self.vertices = vertices;
        }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn min_radius(&self) -> f64 {
        self.min_radius
    }

    /// The center the polygon was built around.
    pub fn seed(&self) -> Point {
        self.seed
    }
}

impl OutlineTrait for RegularPolygon {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn contains(&self, point: Point) -> bool {
        polygon_contains(&self.vertices, point)
    }

    fn set_last_point(&mut self, point: Point) {
        if let Some(last) = self.vertices.last_mut() {
            *last = point.trunc();
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
