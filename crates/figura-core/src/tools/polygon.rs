//! Multi-click protocol for free polygons.

use super::{Tool, ToolError, ToolResult};
use crate::drawing::Drawing;
use crate::figure::FigureId;
use crate::input::{MouseButton, PointerEvent};

const TIPS: &[&str] = &[
    "Click to place the first vertex",
    "Left click adds a vertex, middle click removes the last one, right click finishes",
];

#[derive(Debug, Clone, Copy, PartialEq)]
enum PolygonState {
    Idle,
    Placing { figure: FigureId },
}

/// Two-step creation: the first click seeds, the right click finishes.
///
/// While placing, the last vertex follows the pointer.
#[derive(Debug, Clone)]
pub struct PolygonTool {
    state: PolygonState,
}

impl Default for PolygonTool {
    fn default() -> Self {
        Self::new()
    }
}

impl PolygonTool {
    pub fn new() -> Self {
        Self {
            state: PolygonState::Idle,
        }
    }

    fn transition(
        &self,
        drawing: &mut Drawing,
        event: &PointerEvent,
    ) -> Result<PolygonState, ToolError> {
        let figure = match self.state {
            PolygonState::Idle => {
                return Ok(match *event {
                    PointerEvent::Clicked { position, button } if button.is_primary() => {
                        match drawing.initiate_figure(position) {
                            Some(figure) => PolygonState::Placing {
                                figure: figure.id(),
                            },
                            None => PolygonState::Idle,
                        }
                    }
                    _ => PolygonState::Idle,
                });
            }
            PolygonState::Placing { figure } => figure,
        };

        let Some(target) = drawing.figure_mut(figure) else {
            log::warn!("Figure {} vanished while placing vertices", figure);
            return Ok(PolygonState::Idle);
        };

        let next = match *event {
            PointerEvent::Moved { position } | PointerEvent::Dragged { position } => {
                let local = target.to_local(position)?;
                target.set_last_point(local);
                self.state
            }
            PointerEvent::Clicked { position, button } => match button {
                MouseButton::Left => {
                    let local = target.to_local(position)?;
                    target.set_last_point(local);
                    target.add_point(local);
                    self.state
                }
                MouseButton::Middle => {
                    if !target.remove_last_point() {
                        log::warn!("{} already has its minimum vertex count", target.label());
                    }
                    self.state
                }
                MouseButton::Right => PolygonState::Idle,
            },
            _ => return Ok(self.state),
        };

        drawing.notify();
        Ok(next)
    }
}

impl Tool for PolygonTool {
    fn tips(&self) -> &'static [&'static str] {
        TIPS
    }

    fn step(&self) -> usize {
        match self.state {
            PolygonState::Idle => 0,
            PolygonState::Placing { .. } => 1,
        }
    }

    fn handle_pointer(&mut self, drawing: &mut Drawing, event: &PointerEvent) -> ToolResult {
        self.state = self.transition(drawing, event)?;
        Ok(())
    }

    fn current_figure(&self) -> Option<FigureId> {
        match self.state {
            PolygonState::Idle => None,
            PolygonState::Placing { figure } => Some(figure),
        }
    }
}
