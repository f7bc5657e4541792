//! A placed figure: outline, paint attributes and position transform.

use crate::shapes::{FigureStyle, Outline, ShapeKind};
use kurbo::{Affine, BezPath, Point, Rect, Stroke, Vec2};
use std::sync::atomic::{AtomicU32, Ordering};
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for figures.
pub type FigureId = Uuid;

/// Determinant magnitude below which a transform counts as degenerate.
pub const MIN_DETERMINANT: f64 = 1e-12;

/// Figure geometry errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FigureError {
    #[error("figure transform is not invertible (determinant {determinant})")]
    NonInvertibleTransform { determinant: f64 },
    #[error("regular polygon needs at least {minimum} vertices, got {count}")]
    TooFewVertices { count: usize, minimum: usize },
    #[error("cannot scale a figure by ({sx}, {sy})")]
    DegenerateScale { sx: f64, sy: f64 },
}

/// Per-kind instance counters.
static INSTANCE_COUNTERS: [AtomicU32; ShapeKind::COUNT] =
    [const { AtomicU32::new(0) }; ShapeKind::COUNT];

fn next_instance_number(kind: ShapeKind) -> u32 {
    INSTANCE_COUNTERS[kind.index()].fetch_add(1, Ordering::Relaxed) + 1
}

/// One placed shape.
///
/// The outline is kept in the figure's own coordinate space; moving,
/// rotating and scaling only touch `transform`, which is always invertible.
#[derive(Debug, Clone)]
pub struct Figure {
    id: FigureId,
    instance_number: u32,
    style: FigureStyle,
    pub(crate) transform: Affine,
    outline: Outline,
}

impl Figure {
    /// Create a figure with an identity transform.
    pub fn new(outline: Outline, style: FigureStyle) -> Self {
        let kind = outline.kind();
        Self {
            id: Uuid::new_v4(),
            instance_number: next_instance_number(kind),
            style,
            transform: Affine::IDENTITY,
            outline,
        }
    }

    pub fn id(&self) -> FigureId {
        self.id
    }

    /// Per-kind creation counter, starting at 1.
    pub fn instance_number(&self) -> u32 {
        self.instance_number
    }

    /// The fixed shape discriminant.
    pub fn kind(&self) -> ShapeKind {
        self.outline.kind()
    }

    /// Diagnostic label such as `Rectangle 3`.
    pub fn label(&self) -> String {
        format!("{} {}", self.kind().name(), self.instance_number)
    }

    pub fn style(&self) -> &FigureStyle {
        &self.style
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Replace the transform, rejecting degenerate ones.
    pub fn set_transform(&mut self, transform: Affine) -> Result<(), FigureError> {
        check_invertible(transform)?;
        self.transform = transform;
        Ok(())
    }

    /// Map a world point into the figure's own coordinate space.
    pub fn to_local(&self, point: Point) -> Result<Point, FigureError> {
        check_invertible(self.transform)?;
        Ok(self.transform.inverse() * point)
    }

    /// Hit-test a world point, surfacing a degenerate transform.
    pub fn try_contains(&self, point: Point) -> Result<bool, FigureError> {
        let local = self.to_local(point)?;
        Ok(self.outline.contains(local))
    }

    /// Hit-test a world point. Fails closed on a degenerate transform.
    pub fn contains_point(&self, point: Point) -> bool {
        match self.try_contains(point) {
            Ok(hit) => hit,
            Err(e) => {
                log::error!("Hit test on {} failed: {}", self.label(), e);
                false
            }
        }
    }

    /// Move the construction point (in the figure's own space).
    pub fn set_last_point(&mut self, point: Point) {
        self.outline.set_last_point(point);
    }

    /// Append a vertex to a free polygon. False for other kinds.
    pub fn add_point(&mut self, point: Point) -> bool {
        match self.outline.as_polygon_mut() {
            Some(polygon) => {
                polygon.add_point(point);
                true
            }
            None => false,
        }
    }

    /// Remove the last vertex of a free polygon. False if nothing was removed.
    pub fn remove_last_point(&mut self) -> bool {
        self.outline
            .as_polygon_mut()
            .is_some_and(|polygon| polygon.remove_last_point())
    }

    /// Regrow a regular polygon so its radius reaches `point`. False for other kinds.
    pub fn resize_to(&mut self, point: Point) -> bool {
        match self.outline.as_regular_polygon_mut() {
            Some(polygon) => {
                polygon.resize_to(point);
                true
            }
            None => false,
        }
    }

    /// Center in the figure's own coordinate space.
    pub fn center(&self) -> Point {
        self.outline.center()
    }

    /// Center in world coordinates.
    pub fn world_center(&self) -> Point {
        self.transform * self.center()
    }

    /// Compose a translation (in the figure's own space) into the transform.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.transform = self.transform * Affine::translate(Vec2::new(dx, dy));
    }

    /// Rotate around the figure's center.
    pub fn rotate(&mut self, angle: f64) {
        let c = self.center().to_vec2();
        self.transform = self.transform
            * Affine::translate(c)
            * Affine::rotate(angle)
            * Affine::translate(-c);
    }

    /// Scale around the figure's center. Zero or non-finite factors are rejected.
    pub fn scale(&mut self, sx: f64, sy: f64) -> Result<(), FigureError> {
        if !sx.is_finite() || !sy.is_finite() || sx.abs() < f64::EPSILON || sy.abs() < f64::EPSILON
        {
            return Err(FigureError::DegenerateScale { sx, sy });
        }
        let c = self.center().to_vec2();
        let scaled = self.transform
            * Affine::translate(c)
            * Affine::scale_non_uniform(sx, sy)
            * Affine::translate(-c);
        self.set_transform(scaled)
    }

    /// World-space bounding box.
    pub fn bounds(&self) -> Rect {
        self.transform.transform_rect_bbox(self.outline.bounds())
    }

    /// World-space path for rendering.
    pub fn to_path(&self) -> BezPath {
        let mut path = self.outline.to_path();
        path.apply_affine(self.transform);
        path
    }

    /// Stroke for the edge, or `None` when the edge is not drawn.
    pub fn stroke(&self) -> Option<Stroke> {
        self.style.stroke()
    }
}

fn check_invertible(transform: Affine) -> Result<(), FigureError> {
    let determinant = transform.determinant();
    if !determinant.is_finite() || determinant.abs() < MIN_DETERMINANT {
        return Err(FigureError::NonInvertibleTransform { determinant });
    }
    Ok(())
}
