//! Interactive figure protocols.
//!
//! Each tool is a small state machine: a private state enum plus a
//! transition function that maps `(state, event)` to the next state while
//! applying its side effects to the [`Drawing`]. The state is only replaced
//! when the transition succeeds, so a failed step leaves the protocol where it
//! was.

mod drag;
mod movement;
mod polygon;

pub use drag::{DragEdit, DragTool};
pub use movement::MoveTool;
pub use polygon::PolygonTool;

use crate::drawing::Drawing;
use crate::figure::{FigureError, FigureId};
use crate::input::{InputEvent, KeyEvent, PointerEvent};
use crate::shapes::ShapeKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Protocol step failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolError {
    #[error(transparent)]
    Figure(#[from] FigureError),
}

pub type ToolResult = Result<(), ToolError>;

/// Common behavior of every protocol.
pub trait Tool {
    /// One hint per step.
    fn tips(&self) -> &'static [&'static str];

    /// Current step, in `0..step_count()`.
    fn step(&self) -> usize;

    fn step_count(&self) -> usize {
        self.tips().len()
    }

    /// Hint for the current step.
    fn tip(&self) -> &'static str {
        self.tips().get(self.step()).copied().unwrap_or_default()
    }

    /// Advance the protocol with one pointer event.
    fn handle_pointer(&mut self, drawing: &mut Drawing, event: &PointerEvent) -> ToolResult;

    /// Key events are ignored unless a protocol needs them.
    fn handle_key(&mut self, _drawing: &mut Drawing, _event: &KeyEvent) -> ToolResult {
        Ok(())
    }

    /// Figure this protocol is currently working on.
    fn current_figure(&self) -> Option<FigureId>;
}

/// Available protocols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    /// Press, drag the opposite corner, release.
    Rectangular,
    /// Press at the centre, drag the radius, release.
    Circle,
    /// Click vertex after vertex.
    Polygon,
    /// Drag existing figures.
    Move,
}

impl ToolKind {
    /// Protocol matching the drawing's move mode and pending shape kind.
    pub fn for_drawing(drawing: &Drawing) -> Self {
        if drawing.is_move_mode() {
            return ToolKind::Move;
        }
        match drawing.pending_kind() {
            ShapeKind::Circle => ToolKind::Circle,
            ShapeKind::Polygon => ToolKind::Polygon,
            ShapeKind::Ellipse | ShapeKind::Rectangle | ShapeKind::RoundedRectangle => {
                ToolKind::Rectangular
            }
        }
    }
}

/// Enum dispatch over the concrete protocols.
#[derive(Debug, Clone)]
pub enum ActiveTool {
    Drag(DragTool),
    Polygon(PolygonTool),
    Move(MoveTool),
}

impl ActiveTool {
    pub fn new(kind: ToolKind) -> Self {
        match kind {
            ToolKind::Rectangular => ActiveTool::Drag(DragTool::new(DragEdit::Corner)),
            ToolKind::Circle => ActiveTool::Drag(DragTool::new(DragEdit::Radius)),
            ToolKind::Polygon => ActiveTool::Polygon(PolygonTool::new()),
            ToolKind::Move => ActiveTool::Move(MoveTool::new()),
        }
    }

    pub fn as_trait(&self) -> &dyn Tool {
        match self {
            ActiveTool::Drag(t) => t,
            ActiveTool::Polygon(t) => t,
            ActiveTool::Move(t) => t,
        }
    }

    pub fn as_trait_mut(&mut self) -> &mut dyn Tool {
        match self {
            ActiveTool::Drag(t) => t,
            ActiveTool::Polygon(t) => t,
            ActiveTool::Move(t) => t,
        }
    }
}

/// Owns the active protocol and swaps it when the drawing's mode changes.
#[derive(Debug, Clone)]
pub struct ToolManager {
    kind: ToolKind,
    tool: ActiveTool,
}

impl ToolManager {
    /// Create a manager with the protocol the drawing currently calls for.
    pub fn new(drawing: &Drawing) -> Self {
        let kind = ToolKind::for_drawing(drawing);
        Self {
            kind,
            tool: ActiveTool::new(kind),
        }
    }

    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    pub fn tool(&self) -> &ActiveTool {
        &self.tool
    }

    pub fn tip(&self) -> &'static str {
        self.tool.as_trait().tip()
    }

    pub fn step(&self) -> usize {
        self.tool.as_trait().step()
    }

    pub fn current_figure(&self) -> Option<FigureId> {
        self.tool.as_trait().current_figure()
    }

    /// Switch protocol if the drawing's mode changed. Returns true on a switch.
    ///
    /// An abandoned run leaves its figure in the drawing as it was.
    pub fn sync(&mut self, drawing: &Drawing) -> bool {
        let kind = ToolKind::for_drawing(drawing);
        if kind == self.kind {
            return false;
        }
        if let Some(id) = self.current_figure() {
            log::debug!("Abandoning {:?} run on figure {}", self.kind, id);
        }
        log::debug!("Switching tool {:?} -> {:?}", self.kind, kind);
        self.kind = kind;
        self.tool = ActiveTool::new(kind);
        log::debug!("{}", self.tip());
        true
    }

    /// Route one input event to the active protocol.
    pub fn handle_event(&mut self, drawing: &mut Drawing, event: &InputEvent) -> ToolResult {
        self.sync(drawing);
        let before = self.step();
        let result = match event {
            InputEvent::Pointer(pointer) => self.tool.as_trait_mut().handle_pointer(drawing, pointer),
            InputEvent::Key(key) => self.tool.as_trait_mut().handle_key(drawing, key),
        };
        if self.step() != before {
            log::debug!("{:?} step {} -> {}: {}", self.kind, before, self.step(), self.tip());
        }
        result
    }
}
