//! Move protocol: drag an existing figure by its center.

use super::{Tool, ToolError, ToolResult};
use crate::drawing::Drawing;
use crate::figure::FigureId;
use crate::input::PointerEvent;
use kurbo::Point;

const TIPS: &[&str] = &[
    "Press and hold the left button to move a figure",
    "Release to drop the figure",
];

#[derive(Debug, Clone, Copy, PartialEq)]
enum MoveState {
    /// `selected` is the figure under the last plain click.
    Idle { selected: Option<FigureId> },
    /// The press may have missed every figure.
    Dragging {
        figure: Option<FigureId>,
        anchor: Point,
    },
}

/// Two-step move: press picks the topmost figure, drags recenter it on the pointer.
#[derive(Debug, Clone)]
pub struct MoveTool {
    state: MoveState,
}

impl Default for MoveTool {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveTool {
    pub fn new() -> Self {
        Self {
            state: MoveState::Idle { selected: None },
        }
    }

    /// Where the current drag started.
    pub fn press_point(&self) -> Option<Point> {
        match self.state {
            MoveState::Dragging { anchor, .. } => Some(anchor),
            MoveState::Idle { .. } => None,
        }
    }

    fn transition(
        &self,
        drawing: &mut Drawing,
        event: &PointerEvent,
    ) -> Result<MoveState, ToolError> {
        match (self.state, *event) {
            (MoveState::Idle { .. }, PointerEvent::Pressed { position, button })
                if button.is_primary() =>
            {
                let figure = drawing.figure_at(position).map(|f| f.id());
                drawing.notify();
                Ok(MoveState::Dragging {
                    figure,
                    anchor: position,
                })
            }
            (
                MoveState::Dragging {
                    figure: Some(id),
                    anchor,
                },
                PointerEvent::Dragged { position },
            ) => {
                let Some(target) = drawing.figure_mut(id) else {
                    log::warn!("Figure {} vanished while moving", id);
                    return Ok(MoveState::Dragging {
                        figure: None,
                        anchor,
                    });
                };
                let local = target.to_local(position).inspect_err(|e| {
                    log::error!("Cannot move {}: {}", target.label(), e);
                })?;
                let center = target.center();
                target.translate(local.x - center.x, local.y - center.y);
                drawing.notify();
                Ok(self.state)
            }
            (MoveState::Dragging { .. }, PointerEvent::Released { button, .. })
                if button.is_primary() =>
            {
                Ok(MoveState::Idle { selected: None })
            }
            (MoveState::Idle { .. }, PointerEvent::Clicked { position, button })
                if button.is_primary() =>
            {
                Ok(MoveState::Idle {
                    selected: drawing.figure_at(position).map(|f| f.id()),
                })
            }
            (state, _) => Ok(state),
        }
    }
}

impl Tool for MoveTool {
    fn tips(&self) -> &'static [&'static str] {
        TIPS
    }

    fn step(&self) -> usize {
        match self.state {
            MoveState::Idle { .. } => 0,
            MoveState::Dragging { .. } => 1,
        }
    }

    fn handle_pointer(&mut self, drawing: &mut Drawing, event: &PointerEvent) -> ToolResult {
        self.state = self.transition(drawing, event)?;
        Ok(())
    }

    fn current_figure(&self) -> Option<FigureId> {
        match self.state {
            MoveState::Idle { selected } => selected,
            MoveState::Dragging { figure, .. } => figure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::FigureError;
    use crate::input::MouseButton;
    use crate::shapes::ShapeKind;
    use kurbo::Affine;
    use std::cell::Cell;
    use std::rc::Rc;

    fn pressed(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Pressed {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    fn released(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Released {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    fn dragged(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Dragged {
            position: Point::new(x, y),
        }
    }

    fn drawing_with_square() -> (Drawing, FigureId) {
        let mut drawing = Drawing::new();
        drawing.set_pending_kind(ShapeKind::Rectangle);
        let figure = drawing.initiate_figure(Point::new(0.0, 0.0)).unwrap();
        figure.set_last_point(Point::new(20.0, 20.0));
        let id = figure.id();
        drawing.set_move_mode(true);
        (drawing, id)
    }

    #[test]
    fn test_drag_recenters_figure() {
        let (mut drawing, id) = drawing_with_square();
        let mut tool = MoveTool::new();
        tool.handle_pointer(&mut drawing, &pressed(5.0, 5.0)).unwrap();
        assert_eq!(tool.step(), 1);
        assert_eq!(tool.current_figure(), Some(id));
        assert_eq!(tool.press_point(), Some(Point::new(5.0, 5.0)));

        tool.handle_pointer(&mut drawing, &dragged(100.0, 60.0)).unwrap();
        let figure = drawing.figure(id).unwrap();
        assert!(figure.world_center().distance(Point::new(100.0, 60.0)) < 1e-9);
        assert_eq!(figure.center(), Point::new(10.0, 10.0));

        tool.handle_pointer(&mut drawing, &released(100.0, 60.0)).unwrap();
        assert_eq!(tool.step(), 0);
        assert!(tool.current_figure().is_none());
    }

    #[test]
    fn test_press_on_empty_space_still_advances() {
        let (mut drawing, id) = drawing_with_square();
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        drawing.subscribe(move || counter.set(counter.get() + 1));

        let mut tool = MoveTool::new();
        tool.handle_pointer(&mut drawing, &pressed(200.0, 200.0)).unwrap();
        assert_eq!(tool.step(), 1);
        assert!(tool.current_figure().is_none());
        tool.handle_pointer(&mut drawing, &dragged(300.0, 300.0)).unwrap();
        tool.handle_pointer(&mut drawing, &released(300.0, 300.0)).unwrap();
        assert_eq!(tool.step(), 0);
        assert_eq!(
            drawing.figure(id).unwrap().world_center(),
            Point::new(10.0, 10.0)
        );
        // only the press notified
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_degenerate_transform_aborts_drag_step() {
        let (mut drawing, id) = drawing_with_square();
        let mut tool = MoveTool::new();
        tool.handle_pointer(&mut drawing, &pressed(5.0, 5.0)).unwrap();

        drawing.figure_mut(id).unwrap().transform = Affine::scale(0.0);
        let err = tool
            .handle_pointer(&mut drawing, &dragged(50.0, 50.0))
            .unwrap_err();
        assert!(matches!(
            err,
            ToolError::Figure(FigureError::NonInvertibleTransform { .. })
        ));
        assert_eq!(tool.step(), 1);
        assert_eq!(tool.current_figure(), Some(id));
        assert_eq!(drawing.figure(id).unwrap().transform(), Affine::scale(0.0));
    }

    #[test]
    fn test_non_primary_buttons_are_ignored() {
        let (mut drawing, id) = drawing_with_square();
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        drawing.subscribe(move || counter.set(counter.get() + 1));

        let mut tool = MoveTool::new();
        for button in [MouseButton::Right, MouseButton::Middle] {
            let position = Point::new(5.0, 5.0);
            tool.handle_pointer(&mut drawing, &PointerEvent::Pressed { position, button })
                .unwrap();
            tool.handle_pointer(&mut drawing, &PointerEvent::Released { position, button })
                .unwrap();
            assert_eq!(tool.step(), 0);
            assert!(tool.current_figure().is_none());
        }
        tool.handle_pointer(&mut drawing, &dragged(50.0, 50.0)).unwrap();
        assert_eq!(
            drawing.figure(id).unwrap().world_center(),
            Point::new(10.0, 10.0)
        );
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_non_primary_release_keeps_dragging() {
        let (mut drawing, id) = drawing_with_square();
        let mut tool = MoveTool::new();
        tool.handle_pointer(&mut drawing, &pressed(5.0, 5.0)).unwrap();

        let release_right = PointerEvent::Released {
            position: Point::new(5.0, 5.0),
            button: MouseButton::Right,
        };
        tool.handle_pointer(&mut drawing, &release_right).unwrap();
        assert_eq!(tool.step(), 1);
        assert_eq!(tool.current_figure(), Some(id));

        tool.handle_pointer(&mut drawing, &dragged(40.0, 30.0)).unwrap();
        assert!(
            drawing
                .figure(id)
                .unwrap()
                .world_center()
                .distance(Point::new(40.0, 30.0))
                < 1e-9
        );
        tool.handle_pointer(&mut drawing, &released(40.0, 30.0)).unwrap();
        assert_eq!(tool.step(), 0);
    }

    #[test]
    fn test_click_selects_topmost() {
        let (mut drawing, id) = drawing_with_square();
        let mut tool = MoveTool::new();
        let click = PointerEvent::Clicked {
            position: Point::new(10.0, 10.0),
            button: MouseButton::Left,
        };
        tool.handle_pointer(&mut drawing, &click).unwrap();
        assert_eq!(tool.step(), 0);
        assert_eq!(tool.current_figure(), Some(id));
    }
}
