//! Pure geometry builders and point/polygon helpers.

use crate::figure::FigureError;
use kurbo::{BezPath, Point, Rect, Vec2};
use std::f64::consts::TAU;

/// Smallest vertex count a regular polygon can be built with.
pub const MIN_REGULAR_VERTICES: usize = 3;

/// Distance under which a point is considered to lie on a polygon edge.
pub const BOUNDARY_TOLERANCE: f64 = 0.5;

/// Generate the vertices of a regular polygon.
///
/// Vertex `k` sits at angle `2πk/n` (starting at angle 0, counter-clockwise in
/// a y-up frame), at distance `radius` from `center`. Coordinates are rounded
/// to integers so outlines stay on the pixel grid.
pub fn regular_polygon_vertices(
    center: Point,
    radius: f64,
    vertex_count: usize,
) -> Result<Vec<Point>, FigureError> {
    if vertex_count < MIN_REGULAR_VERTICES {
        return Err(FigureError::TooFewVertices {
            count: vertex_count,
            minimum: MIN_REGULAR_VERTICES,
        });
    }

    let step = TAU / vertex_count as f64;
    Ok((0..vertex_count)
        .map(|k| {
            let angle = step * k as f64;
            Point::new(
                (center.x + radius * angle.cos()).round(),
                (center.y + radius * angle.sin()).round(),
            )
        })
        .collect())
}

/// Unweighted centroid (mean of the vertices). The origin for an empty slice.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::ZERO;
    }
    let sum = points
        .iter()
        .fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
    (sum / points.len() as f64).to_point()
}

/// Axis-aligned bounding box of a point set.
pub fn points_bounds(points: &[Point]) -> Rect {
    let mut iter = points.iter();
    let Some(first) = iter.next() else {
        return Rect::ZERO;
    };
    iter.fold(Rect::from_points(*first, *first), |rect, p| {
        rect.union_pt(*p)
    })
}

/// Distance from a point to a line segment (a→b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = b - a;
    let pv = point - a;
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = a + seg * t;
    point.distance(proj)
}

/// Even-odd point-in-polygon test, with points on the boundary counted as inside.
///
/// The polygon is implicitly closed. Degenerate outlines (one or two distinct
/// vertices) only contain the points on their edges.
pub fn polygon_contains(vertices: &[Point], point: Point) -> bool {
    match vertices.len() {
        0 => return false,
        1 => return vertices[0].distance(point) <= BOUNDARY_TOLERANCE,
        _ => {}
    }

    let on_edge = vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .any(|(a, b)| point_to_segment_dist(point, *a, *b) <= BOUNDARY_TOLERANCE);
    if on_edge {
        return true;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (pi, pj) = (vertices[i], vertices[j]);
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = pi.x + (point.y - pi.y) * (pj.x - pi.x) / (pj.y - pi.y);
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Closed path through the given vertices.
pub fn polygon_path(vertices: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = vertices.iter();
    if let Some(first) = iter.next() {
        path.move_to(*first);
        for p in iter {
            path.line_to(*p);
        }
        path.close_path();
    }
    path
}
