//! Shape variants, paint attributes and the outline capability trait.

mod ellipse;
mod polygon;
mod rectangle;
mod regular_polygon;

pub use ellipse::Ellipse;
pub use polygon::Polygon;
pub use rectangle::{Rectangle, RoundedRectangle};
pub use regular_polygon::RegularPolygon;

use kurbo::{BezPath, Point, Rect, Stroke};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Value-compared RGBA8 color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const ORANGE: Self = Self::rgb(255, 200, 0);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Discriminant of the closed set of figure variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShapeKind {
    /// Regular polygon approximating a circle.
    #[default]
    Circle,
    Ellipse,
    Rectangle,
    RoundedRectangle,
    Polygon,
}

impl ShapeKind {
    pub const COUNT: usize = 5;

    pub const ALL: [ShapeKind; Self::COUNT] = [
        ShapeKind::Circle,
        ShapeKind::Ellipse,
        ShapeKind::Rectangle,
        ShapeKind::RoundedRectangle,
        ShapeKind::Polygon,
    ];

    /// Position in [`ShapeKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kind at a collaborator-supplied index (e.g. a combo box row).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::RoundedRectangle => "Rounded rectangle",
            ShapeKind::Polygon => "Polygon",
        }
    }
}

/// How the edge of a figure is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineStyle {
    /// No edge at all.
    None,
    #[default]
    Solid,
    Dashed,
}

impl LineStyle {
    pub const ALL: [LineStyle; 3] = [LineStyle::None, LineStyle::Solid, LineStyle::Dashed];

    /// Dash length, in multiples of the stroke width.
    pub const DASH_FACTOR: f64 = 3.0;

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Cycle to the next line style.
    pub fn next(self) -> Self {
        match self {
            LineStyle::None => LineStyle::Solid,
            LineStyle::Solid => LineStyle::Dashed,
            LineStyle::Dashed => LineStyle::None,
        }
    }

    /// Realise this style at the given width. `None` for [`LineStyle::None`].
    pub fn stroke(self, width: f64) -> Option<Stroke> {
        match self {
            LineStyle::None => None,
            LineStyle::Solid => Some(Stroke::new(width)),
            LineStyle::Dashed => {
                let dash = width * Self::DASH_FACTOR;
                Some(Stroke::new(width).with_dashes(0.0, [dash, dash]))
            }
        }
    }
}

/// Paint and stroke attributes of a figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureStyle {
    /// Stroke width.
    pub stroke_width: f64,
    /// Edge line style.
    pub line_style: LineStyle,
    /// Edge color (None = no edge paint).
    pub edge_color: Option<Rgba>,
    /// Fill color (None = unfilled).
    pub fill_color: Option<Rgba>,
}

impl FigureStyle {
    /// The stroke to draw the edge with, if any.
    pub fn stroke(&self) -> Option<Stroke> {
        if self.edge_color.is_none() {
            return None;
        }
        self.line_style.stroke(self.stroke_width)
    }

    /// Edge color as a peniko Color.
    pub fn edge(&self) -> Option<Color> {
        self.edge_color.map(Into::into)
    }

    /// Fill color as a peniko Color.
    pub fn fill(&self) -> Option<Color> {
        self.fill_color.map(Into::into)
    }
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            stroke_width: 1.0,
            line_style: LineStyle::Solid,
            edge_color: Some(Rgba::BLACK),
            fill_color: None,
        }
    }
}

/// Capability shared by every outline variant.
///
/// All coordinates are in the figure's own (untransformed) space.
pub trait OutlineTrait {
    /// The fixed shape discriminant.
    fn kind(&self) -> ShapeKind;

    /// Point-in-shape test, boundary inclusive.
    fn contains(&self, point: Point) -> bool;

    /// Move the construction point that follows the pointer.
    fn set_last_point(&mut self, point: Point);

    /// Centroid for polygonal outlines, geometric center otherwise.
    fn center(&self) -> Point;

    /// Untransformed bounding box.
    fn bounds(&self) -> Rect;

    /// Untransformed path for rendering.
    fn to_path(&self) -> BezPath;
}

/// Closed set of outline variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    RegularPolygon(RegularPolygon),
    Ellipse(Ellipse),
    Rectangle(Rectangle),
    RoundedRectangle(RoundedRectangle),
    Polygon(Polygon),
}

impl Outline {
    fn as_trait(&self) -> &dyn OutlineTrait {
        match self {
            Outline::RegularPolygon(s) => s,
            Outline::Ellipse(s) => s,
            Outline::Rectangle(s) => s,
            Outline::RoundedRectangle(s) => s,
            Outline::Polygon(s) => s,
        }
    }

    fn as_trait_mut(&mut self) -> &mut dyn OutlineTrait {
        match self {
            Outline::RegularPolygon(s) => s,
            Outline::Ellipse(s) => s,
            Outline::Rectangle(s) => s,
            Outline::RoundedRectangle(s) => s,
            Outline::Polygon(s) => s,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.as_trait().kind()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.as_trait().contains(point)
    }

    pub fn set_last_point(&mut self, point: Point) {
        self.as_trait_mut().set_last_point(point);
    }

    pub fn center(&self) -> Point {
        self.as_trait().center()
    }

    pub fn bounds(&self) -> Rect {
        self.as_trait().bounds()
    }

    pub fn to_path(&self) -> BezPath {
        self.as_trait().to_path()
    }

    /// Get the polygon if this outline is a free polygon.
    pub fn as_polygon_mut(&mut self) -> Option<&mut Polygon> {
        match self {
            Outline::Polygon(p) => Some(p),
            _ => None,
        }
    }

    /// Get the regular polygon if this outline is one.
    pub fn as_regular_polygon_mut(&mut self) -> Option<&mut RegularPolygon> {
        match self {
            Outline::RegularPolygon(p) => Some(p),
            _ => None,
        }
    }
}

/// Normalised frame spanned by a fixed anchor and a moving corner.
pub(crate) fn corner_frame(anchor: Point, corner: Point) -> Rect {
    Rect::from_points(anchor, corner)
}

/// Inclusive containment, so zero-area frames still contain their own points.
pub(crate) fn frame_contains(frame: Rect, point: Point) -> bool {
    point.x >= frame.x0 && point.x <= frame.x1 && point.y >= frame.y0 && point.y <= frame.y1
}
