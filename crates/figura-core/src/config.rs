//! Editor configuration: palettes, default attributes and construction constants.

use crate::geometry::MIN_REGULAR_VERTICES;
use crate::shapes::{LineStyle, RegularPolygon, Rgba, ShapeKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// One selectable palette row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    /// `None` is the "no color" entry.
    pub color: Option<Rgba>,
}

impl PaletteEntry {
    pub fn new(name: impl Into<String>, color: Option<Rgba>) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// An ordered list of named colors offered to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    pub fn new(entries: Vec<PaletteEntry>) -> Self {
        Self { entries }
    }

    /// Fill colors, ending with the unfilled entry.
    pub fn fill() -> Self {
        Self::new(vec![
            PaletteEntry::new("Black", Some(Rgba::BLACK)),
            PaletteEntry::new("White", Some(Rgba::WHITE)),
            PaletteEntry::new("Red", Some(Rgba::RED)),
            PaletteEntry::new("Orange", Some(Rgba::ORANGE)),
            PaletteEntry::new("Yellow", Some(Rgba::YELLOW)),
            PaletteEntry::new("Green", Some(Rgba::GREEN)),
            PaletteEntry::new("Cyan", Some(Rgba::CYAN)),
            PaletteEntry::new("Blue", Some(Rgba::BLUE)),
            PaletteEntry::new("Magenta", Some(Rgba::MAGENTA)),
            PaletteEntry::new("None", None),
        ])
    }

    /// Edge colors.
    pub fn edge() -> Self {
        Self::new(vec![
            PaletteEntry::new("Magenta", Some(Rgba::MAGENTA)),
            PaletteEntry::new("Red", Some(Rgba::RED)),
            PaletteEntry::new("Orange", Some(Rgba::ORANGE)),
            PaletteEntry::new("Yellow", Some(Rgba::YELLOW)),
            PaletteEntry::new("Green", Some(Rgba::GREEN)),
            PaletteEntry::new("Cyan", Some(Rgba::CYAN)),
            PaletteEntry::new("Blue", Some(Rgba::BLUE)),
            PaletteEntry::new("Black", Some(Rgba::BLACK)),
        ])
    }

    pub fn get(&self, index: usize) -> Option<&PaletteEntry> {
        self.entries.get(index)
    }

    /// Index of the first entry with this color.
    pub fn position(&self, color: Option<Rgba>) -> Option<usize> {
        self.entries.iter().position(|e| e.color == color)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.entries.iter()
    }
}

/// Editor-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub fill_palette: Palette,
    pub default_fill_index: usize,
    pub edge_palette: Palette,
    pub default_edge_index: usize,
    pub default_shape_kind: ShapeKind,
    pub default_line_style: LineStyle,
    pub default_stroke_width: f64,
    pub min_stroke_width: f64,
    pub max_stroke_width: f64,
    /// Vertices used to approximate circles.
    pub circle_vertex_count: usize,
    /// Radius offset keeping freshly seeded circles visible.
    pub min_radius: f64,
    /// Corner radius of rounded rectangles.
    pub corner_radius: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            fill_palette: Palette::fill(),
            default_fill_index: 0,
            edge_palette: Palette::edge(),
            default_edge_index: 6,
            default_shape_kind: ShapeKind::default(),
            default_line_style: LineStyle::Solid,
            default_stroke_width: 4.0,
            min_stroke_width: 1.0,
            max_stroke_width: 30.0,
            circle_vertex_count: 32,
            min_radius: RegularPolygon::MIN_RADIUS,
            corner_radius: 16.0,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fill_palette.get(self.default_fill_index).is_none() {
            return Err(ConfigError::Invalid(format!(
                "default fill index {} outside palette of {}",
                self.default_fill_index,
                self.fill_palette.len()
            )));
        }
        if self.edge_palette.get(self.default_edge_index).is_none() {
            return Err(ConfigError::Invalid(format!(
                "default edge index {} outside palette of {}",
                self.default_edge_index,
                self.edge_palette.len()
            )));
        }
        if !(self.min_stroke_width > 0.0 && self.min_stroke_width <= self.max_stroke_width) {
            return Err(ConfigError::Invalid(format!(
                "stroke width bounds {}..={} are not a positive range",
                self.min_stroke_width, self.max_stroke_width
            )));
        }
        if !(self.min_stroke_width..=self.max_stroke_width).contains(&self.default_stroke_width) {
            return Err(ConfigError::Invalid(format!(
                "default stroke width {} outside {}..={}",
                self.default_stroke_width, self.min_stroke_width, self.max_stroke_width
            )));
        }
        if self.circle_vertex_count < MIN_REGULAR_VERTICES {
            return Err(ConfigError::Invalid(format!(
                "circle needs at least {} vertices, got {}",
                MIN_REGULAR_VERTICES, self.circle_vertex_count
            )));
        }
        if self.min_radius <= 0.0 || self.corner_radius < 0.0 {
            return Err(ConfigError::Invalid(
                "radii must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn default_fill_color(&self) -> Option<Rgba> {
        self.fill_palette
            .get(self.default_fill_index)
            .and_then(|e| e.color)
    }

    pub fn default_edge_color(&self) -> Option<Rgba> {
        self.edge_palette
            .get(self.default_edge_index)
            .and_then(|e| e.color)
    }

    /// Clamp a stroke width into the configured bounds.
    pub fn clamp_stroke_width(&self, width: f64) -> f64 {
        width.clamp(self.min_stroke_width, self.max_stroke_width)
    }
}
