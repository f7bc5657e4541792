//! Figure predicates and OR-combined filter sets.

use crate::figure::Figure;
use crate::shapes::{LineStyle, Rgba, ShapeKind};

/// A predicate over figures.
pub trait FigureFilter {
    fn test(&self, figure: &Figure) -> bool;
}

/// Passes figures of one shape kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeFilter(pub ShapeKind);

impl FigureFilter for ShapeFilter {
    fn test(&self, figure: &Figure) -> bool {
        figure.kind() == self.0
    }
}

/// Passes figures with one fill color. `FillColorFilter(None)` passes unfilled figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FillColorFilter(pub Option<Rgba>);

impl FigureFilter for FillColorFilter {
    fn test(&self, figure: &Figure) -> bool {
        figure.style().fill_color == self.0
    }
}

/// Passes figures with one edge color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeColorFilter(pub Option<Rgba>);

impl FigureFilter for EdgeColorFilter {
    fn test(&self, figure: &Figure) -> bool {
        figure.style().edge_color == self.0
    }
}

/// Passes figures with one line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineFilter(pub LineStyle);

impl FigureFilter for LineFilter {
    fn test(&self, figure: &Figure) -> bool {
        figure.style().line_style == self.0
    }
}

/// A group of same-category filters combined with OR.
///
/// An empty set passes nothing; callers that want "no constraint" must skip
/// empty sets instead of testing them.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSet<F> {
    filters: Vec<F>,
}

impl<F> Default for FilterSet<F> {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
        }
    }
}

impl<F: FigureFilter + PartialEq> FilterSet<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a filter. Returns false if an equal filter is already present.
    pub fn add(&mut self, filter: F) -> bool {
        if self.filters.contains(&filter) {
            return false;
        }
        self.filters.push(filter);
        true
    }

    /// Remove a filter. Returns false if it was not present.
    pub fn remove(&mut self, filter: &F) -> bool {
        match self.filters.iter().position(|f| f == filter) {
            Some(index) => {
                self.filters.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, filter: &F) -> bool {
        self.filters.contains(filter)
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &F> {
        self.filters.iter()
    }
}

impl<F: FigureFilter> FigureFilter for FilterSet<F> {
    fn test(&self, figure: &Figure) -> bool {
        self.filters.iter().any(|f| f.test(figure))
    }
}
