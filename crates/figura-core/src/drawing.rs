//! The drawing model: ordered figures, default attributes and filters.

use crate::config::EditorConfig;
use crate::figure::{Figure, FigureError, FigureId};
use crate::filters::{EdgeColorFilter, FigureFilter, FillColorFilter, FilterSet, LineFilter, ShapeFilter};
use crate::notify::{ChangeListener, ChangeNotifier, SubscriptionId};
use crate::shapes::{
    Ellipse, FigureStyle, LineStyle, Outline, Polygon, Rectangle, RegularPolygon, Rgba,
    RoundedRectangle, ShapeKind,
};
use kurbo::Point;
use std::iter::FusedIterator;
use thiserror::Error;

/// Drawing model errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawingError {
    #[error("Unknown {palette} color index {index} (palette has {len} entries)")]
    UnknownPaletteIndex {
        palette: &'static str,
        index: usize,
        len: usize,
    },
    #[error("Stroke width must be positive, got {0}")]
    InvalidStrokeWidth(f64),
    #[error(transparent)]
    Figure(#[from] FigureError),
}

/// The figures of one editing session, back to front.
///
/// Figure order is append-only apart from popping the tail and clearing.
/// Filters never touch the figures, only the view returned by
/// [`Drawing::query_visible`].
#[derive(Debug)]
pub struct Drawing {
    figures: Vec<Figure>,
    config: EditorConfig,
    pending_kind: ShapeKind,
    default_fill: Option<Rgba>,
    default_edge: Option<Rgba>,
    default_stroke_width: f64,
    default_line_style: LineStyle,
    filtering: bool,
    shape_filters: FilterSet<ShapeFilter>,
    fill_color_filter: Option<FillColorFilter>,
    edge_color_filter: Option<EdgeColorFilter>,
    line_filters: FilterSet<LineFilter>,
    move_mode: bool,
    notifier: ChangeNotifier,
}

impl Default for Drawing {
    fn default() -> Self {
        Self::new()
    }
}

impl Drawing {
    /// Create an empty drawing with the default configuration.
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    /// Create an empty drawing whose defaults come from `config`.
    pub fn with_config(config: EditorConfig) -> Self {
        log::debug!("Drawing model created");
        Self {
            figures: Vec::new(),
            pending_kind: config.default_shape_kind,
            default_fill: config.default_fill_color(),
            default_edge: config.default_edge_color(),
            default_stroke_width: config.default_stroke_width,
            default_line_style: config.default_line_style,
            filtering: false,
            shape_filters: FilterSet::new(),
            fill_color_filter: None,
            edge_color_filter: None,
            line_filters: FilterSet::new(),
            move_mode: false,
            notifier: ChangeNotifier::new(),
            config,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    // --- Change notification -------------------------------------------

    /// Register a change listener.
    pub fn subscribe(&mut self, listener: impl ChangeListener + 'static) -> SubscriptionId {
        self.notifier.subscribe(Box::new(listener))
    }

    /// Remove a change listener. Returns false if the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Tell every listener the drawing changed.
    pub fn notify(&mut self) {
        self.notifier.notify();
    }

    // --- Default attributes --------------------------------------------

    /// Kind of figure created by the next [`Drawing::initiate_figure`].
    pub fn pending_kind(&self) -> ShapeKind {
        self.pending_kind
    }

    pub fn set_pending_kind(&mut self, kind: ShapeKind) {
        self.pending_kind = kind;
    }

    pub fn default_fill_color(&self) -> Option<Rgba> {
        self.default_fill
    }

    /// Set the fill color for new figures (None = unfilled).
    pub fn set_default_fill_color(&mut self, color: Option<Rgba>) {
        self.default_fill = color;
    }

    pub fn default_edge_color(&self) -> Option<Rgba> {
        self.default_edge
    }

    pub fn set_default_edge_color(&mut self, color: Option<Rgba>) {
        self.default_edge = color;
    }

    /// Pick the fill color from the configured palette.
    pub fn select_fill_color(&mut self, index: usize) -> Result<(), DrawingError> {
        let palette = &self.config.fill_palette;
        match palette.get(index) {
            Some(entry) => {
                self.default_fill = entry.color;
                Ok(())
            }
            None => Err(unknown_index("fill", index, palette.len())),
        }
    }

    /// Pick the edge color from the configured palette.
    pub fn select_edge_color(&mut self, index: usize) -> Result<(), DrawingError> {
        let palette = &self.config.edge_palette;
        match palette.get(index) {
            Some(entry) => {
                self.default_edge = entry.color;
                Ok(())
            }
            None => Err(unknown_index("edge", index, palette.len())),
        }
    }

    pub fn default_stroke_width(&self) -> f64 {
        self.default_stroke_width
    }

    /// Set the stroke width for new figures, clamped to the configured bounds.
    pub fn set_default_stroke_width(&mut self, width: f64) -> Result<(), DrawingError> {
        if !(width.is_finite() && width > 0.0) {
            log::warn!("Ignoring stroke width {}", width);
            return Err(DrawingError::InvalidStrokeWidth(width));
        }
        self.default_stroke_width = self.config.clamp_stroke_width(width);
        Ok(())
    }

    pub fn default_line_style(&self) -> LineStyle {
        self.default_line_style
    }

    pub fn set_default_line_style(&mut self, style: LineStyle) {
        self.default_line_style = style;
    }

    /// Style snapshot applied to the next figure.
    pub fn default_style(&self) -> FigureStyle {
        FigureStyle {
            stroke_width: self.default_stroke_width,
            line_style: self.default_line_style,
            edge_color: self.default_edge,
            fill_color: self.default_fill,
        }
    }

    // --- Figures ---------------------------------------------------------

    /// Seed a figure of the pending kind at `point` with the current defaults.
    ///
    /// Listeners are notified even when construction fails.
    pub fn initiate_figure(&mut self, point: Point) -> Option<&mut Figure> {
        let created = match self.build_outline(point) {
            Ok(outline) => {
                let figure = Figure::new(outline, self.default_style());
                log::debug!("Created {} at {:?}", figure.label(), point);
                self.figures.push(figure);
                true
            }
            Err(e) => {
                log::error!("Cannot create {:?} figure: {}", self.pending_kind, e);
                false
            }
        };

        self.notify();

        if created {
            self.figures.last_mut()
        } else {
            None
        }
    }

    fn build_outline(&self, seed: Point) -> Result<Outline, FigureError> {
        Ok(match self.pending_kind {
            ShapeKind::Circle => Outline::RegularPolygon(RegularPolygon::with_min_radius(
                seed,
                0.0,
                self.config.circle_vertex_count,
                self.config.min_radius,
            )?),
            ShapeKind::Ellipse => Outline::Ellipse(Ellipse::new(seed)),
            ShapeKind::Rectangle => Outline::Rectangle(Rectangle::new(seed)),
            ShapeKind::RoundedRectangle => {
                Outline::RoundedRectangle(RoundedRectangle::new(seed, self.config.corner_radius))
            }
            ShapeKind::Polygon => Outline::Polygon(Polygon::new(seed)),
        })
    }

    /// All figures, unfiltered, back to front.
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn figure(&self, id: FigureId) -> Option<&Figure> {
        self.figures.iter().find(|f| f.id() == id)
    }

    pub fn figure_mut(&mut self, id: FigureId) -> Option<&mut Figure> {
        self.figures.iter_mut().find(|f| f.id() == id)
    }

    /// The most recently added figure.
    pub fn last_figure(&self) -> Option<&Figure> {
        let last = self.figures.last();
        if last.is_none() {
            log::debug!("Last figure requested on an empty drawing");
        }
        last
    }

    pub fn last_figure_mut(&mut self) -> Option<&mut Figure> {
        let last = self.figures.last_mut();
        if last.is_none() {
            log::debug!("Last figure requested on an empty drawing");
        }
        last
    }

    /// Topmost visible figure containing `point`.
    ///
    /// Figures whose transform cannot be inverted are skipped and logged.
    pub fn figure_at(&self, point: Point) -> Option<&Figure> {
        self.query_visible().rev().find(|f| f.contains_point(point))
    }

    /// Topmost visible figure containing `point`, surfacing degenerate transforms.
    pub fn try_figure_at(&self, point: Point) -> Result<Option<&Figure>, DrawingError> {
        for figure in self.query_visible().rev() {
            if figure.try_contains(point)? {
                return Ok(Some(figure));
            }
        }
        Ok(None)
    }

    /// Pop the last figure (undo). No notification when empty.
    pub fn remove_last_figure(&mut self) -> Option<Figure> {
        let removed = self.figures.pop()?;
        log::debug!("Removed {}", removed.label());
        self.notify();
        Some(removed)
    }

    /// Remove every figure. No notification when already empty.
    pub fn clear(&mut self) {
        if self.figures.is_empty() {
            return;
        }
        self.figures.clear();
        self.notify();
    }

    pub fn len(&self) -> usize {
        self.figures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    // --- Filtering -------------------------------------------------------

    pub fn is_filtering(&self) -> bool {
        self.filtering
    }

    /// Toggle filtering. Always notifies.
    pub fn set_filtering(&mut self, filtering: bool) {
        self.filtering = filtering;
        log::debug!("Filtering {}", if filtering { "on" } else { "off" });
        self.notify();
    }

    pub fn shape_filters(&self) -> &FilterSet<ShapeFilter> {
        &self.shape_filters
    }

    /// Add a shape-kind filter. Notifies only if it was not already present.
    pub fn add_shape_filter(&mut self, filter: ShapeFilter) -> bool {
        let added = self.shape_filters.add(filter);
        if added {
            log::debug!("Added shape filter {:?}", filter.0);
            self.notify();
        }
        added
    }

    /// Remove a shape-kind filter. Notifies only if it was present.
    pub fn remove_shape_filter(&mut self, filter: &ShapeFilter) -> bool {
        let removed = self.shape_filters.remove(filter);
        if removed {
            log::debug!("Removed shape filter {:?}", filter.0);
            self.notify();
        }
        removed
    }

    pub fn line_filters(&self) -> &FilterSet<LineFilter> {
        &self.line_filters
    }

    /// Add a line-style filter. Notifies only if it was not already present.
    pub fn add_line_filter(&mut self, filter: LineFilter) -> bool {
        let added = self.line_filters.add(filter);
        if added {
            log::debug!("Added line filter {:?}", filter.0);
            self.notify();
        }
        added
    }

    /// Remove a line-style filter. Notifies only if it was present.
    pub fn remove_line_filter(&mut self, filter: &LineFilter) -> bool {
        let removed = self.line_filters.remove(filter);
        if removed {
            log::debug!("Removed line filter {:?}", filter.0);
            self.notify();
        }
        removed
    }

    pub fn fill_color_filter(&self) -> Option<FillColorFilter> {
        self.fill_color_filter
    }

    /// Set or clear the fill color filter. Always notifies.
    pub fn set_fill_color_filter(&mut self, filter: Option<FillColorFilter>) {
        self.fill_color_filter = filter;
        log::debug!("Fill color filter set to {:?}", filter);
        self.notify();
    }

    pub fn edge_color_filter(&self) -> Option<EdgeColorFilter> {
        self.edge_color_filter
    }

    /// Set or clear the edge color filter. Always notifies.
    pub fn set_edge_color_filter(&mut self, filter: Option<EdgeColorFilter>) {
        self.edge_color_filter = filter;
        log::debug!("Edge color filter set to {:?}", filter);
        self.notify();
    }

    /// Figures to render and hit-test, back to front.
    ///
    /// With filtering on, each non-empty filter category must pass (AND),
    /// where a category passes if any of its filters does (OR). The returned
    /// iterator is lazy; clone it or call this again to restart.
    pub fn query_visible(&self) -> VisibleFigures<'_> {
        let filters = self.filtering.then(|| ActiveFilters {
            shape: (!self.shape_filters.is_empty()).then_some(&self.shape_filters),
            fill: self.fill_color_filter.as_ref(),
            edge: self.edge_color_filter.as_ref(),
            line: (!self.line_filters.is_empty()).then_some(&self.line_filters),
        });
        VisibleFigures {
            inner: self.figures.iter(),
            filters,
        }
    }

    // --- Move mode -------------------------------------------------------

    pub fn is_move_mode(&self) -> bool {
        self.move_mode
    }

    pub fn set_move_mode(&mut self, move_mode: bool) {
        self.move_mode = move_mode;
    }
}

fn unknown_index(palette: &'static str, index: usize, len: usize) -> DrawingError {
    log::warn!("Unknown {} color index: {}", palette, index);
    DrawingError::UnknownPaletteIndex {
        palette,
        index,
        len,
    }
}

/// The filter categories that constrain the visible view.
#[derive(Debug, Clone, Copy)]
struct ActiveFilters<'a> {
    shape: Option<&'a FilterSet<ShapeFilter>>,
    fill: Option<&'a FillColorFilter>,
    edge: Option<&'a EdgeColorFilter>,
    line: Option<&'a FilterSet<LineFilter>>,
}

impl ActiveFilters<'_> {
    fn accepts(&self, figure: &Figure) -> bool {
        self.shape.is_none_or(|f| f.test(figure))
            && self.fill.is_none_or(|f| f.test(figure))
            && self.edge.is_none_or(|f| f.test(figure))
            && self.line.is_none_or(|f| f.test(figure))
    }
}

/// Lazy view over the figures that pass the active filters.
#[derive(Debug, Clone)]
pub struct VisibleFigures<'a> {
    inner: std::slice::Iter<'a, Figure>,
    filters: Option<ActiveFilters<'a>>,
}

impl<'a> Iterator for VisibleFigures<'a> {
    type Item = &'a Figure;

    fn next(&mut self) -> Option<Self::Item> {
        match self.filters {
            Some(filters) => self.inner.find(|f| filters.accepts(f)),
            None => self.inner.next(),
        }
    }
}

impl DoubleEndedIterator for VisibleFigures<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match self.filters {
            Some(filters) => self.inner.rfind(|f| filters.accepts(f)),
            None => self.inner.next_back(),
        }
    }
}

impl FusedIterator for VisibleFigures<'_> {}
