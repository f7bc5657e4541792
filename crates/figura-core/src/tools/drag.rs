//! Press, drag, release protocol for rectangular shapes and circles.

use super::{Tool, ToolError, ToolResult};
use crate::drawing::Drawing;
use crate::figure::FigureId;
use crate::input::PointerEvent;

const CORNER_TIPS: &[&str] = &[
    "Press and hold to start the figure",
    "Release to finish the figure",
];

const RADIUS_TIPS: &[&str] = &[
    "Press and hold at the centre of the circle",
    "Drag to set the radius, release to finish",
];

/// What a drag sample edits on the figure being sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEdit {
    /// Move the opposite corner.
    Corner,
    /// Regrow a regular polygon around its seed.
    Radius,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Sizing { figure: FigureId },
}

/// Two-step creation: press seeds the figure, release finishes it.
#[derive(Debug, Clone)]
pub struct DragTool {
    edit: DragEdit,
    state: DragState,
}

impl DragTool {
    pub fn new(edit: DragEdit) -> Self {
        Self {
            edit,
            state: DragState::Idle,
        }
    }

    pub fn edit(&self) -> DragEdit {
        self.edit
    }

    fn transition(
        &self,
        drawing: &mut Drawing,
        event: &PointerEvent,
    ) -> Result<DragState, ToolError> {
        match (self.state, *event) {
            (DragState::Idle, PointerEvent::Pressed { position, button }) if button.is_primary() => {
                Ok(match drawing.initiate_figure(position) {
                    Some(figure) => DragState::Sizing {
                        figure: figure.id(),
                    },
                    None => DragState::Idle,
                })
            }
            (DragState::Sizing { figure }, PointerEvent::Dragged { position }) => {
                let Some(target) = drawing.figure_mut(figure) else {
                    log::warn!("Figure {} vanished while sizing", figure);
                    return Ok(DragState::Idle);
                };
                let local = target.to_local(position)?;
                match self.edit {
                    DragEdit::Corner => target.set_last_point(local),
                    DragEdit::Radius => {
                        if !target.resize_to(local) {
                            target.set_last_point(local);
                        }
                    }
                }
                drawing.notify();
                Ok(self.state)
            }
            (DragState::Sizing { .. }, PointerEvent::Released { button, .. })
                if button.is_primary() =>
            {
                drawing.notify();
                Ok(DragState::Idle)
            }
            (state, _) => Ok(state),
        }
    }
}

impl Tool for DragTool {
    fn tips(&self) -> &'static [&'static str] {
        match self.edit {
            DragEdit::Corner => CORNER_TIPS,
            DragEdit::Radius => RADIUS_TIPS,
        }
    }

    fn step(&self) -> usize {
        match self.state {
            DragState::Idle => 0,
            DragState::Sizing { .. } => 1,
        }
    }

    fn handle_pointer(&mut self, drawing: &mut Drawing, event: &PointerEvent) -> ToolResult {
        self.state = self.transition(drawing, event)?;
        Ok(())
    }

    fn current_figure(&self) -> Option<FigureId> {
        match self.state {
            DragState::Idle => None,
            DragState::Sizing { figure } => Some(figure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseButton;
    use crate::shapes::{Outline, ShapeKind};
    use kurbo::{Point, Rect};
    use std::cell::Cell;
    use std::rc::Rc;

    fn pressed(x: f64, y: f64, button: MouseButton) -> PointerEvent {
        PointerEvent::Pressed {
            position: Point::new(x, y),
            button,
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

    #[test]
    fn test_rectangle_session() {
        let mut drawing = Drawing::new();
        drawing.set_pending_kind(ShapeKind::Rectangle);
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        drawing.subscribe(move || counter.set(counter.get() + 1));

        let mut tool = DragTool::new(DragEdit::Corner);
        tool.handle_pointer(&mut drawing, &pressed(10.0, 10.0, MouseButton::Left))
            .unwrap();
        assert_eq!(tool.step(), 1);
        assert_eq!(tool.tip(), "Release to finish the figure");
        tool.handle_pointer(&mut drawing, &dragged(30.0, 20.0)).unwrap();
        tool.handle_pointer(&mut drawing, &dragged(50.0, 40.0)).unwrap();
        tool.handle_pointer(&mut drawing, &released(50.0, 40.0)).unwrap();

        assert_eq!(tool.step(), 0);
        assert!(tool.current_figure().is_none());
        assert_eq!(drawing.len(), 1);
        assert_eq!(
            drawing.last_figure().unwrap().bounds(),
            Rect::new(10.0, 10.0, 50.0, 40.0)
        );
        // initiate, two drags, release
        assert_eq!(count.get(), 4);
    }

    #[test]
    fn test_non_primary_buttons_are_ignored() {
        let mut drawing = Drawing::new();
        drawing.set_pending_kind(ShapeKind::Ellipse);
        let mut tool = DragTool::new(DragEdit::Corner);
        tool.handle_pointer(&mut drawing, &pressed(0.0, 0.0, MouseButton::Right))
            .unwrap();
        tool.handle_pointer(&mut drawing, &pressed(0.0, 0.0, MouseButton::Middle))
            .unwrap();
        assert_eq!(tool.step(), 0);
        assert!(drawing.is_empty());
    }

    #[test]
    fn test_drag_while_idle_does_nothing() {
        let mut drawing = Drawing::new();
        let mut tool = DragTool::new(DragEdit::Corner);
        tool.handle_pointer(&mut drawing, &dragged(40.0, 40.0)).unwrap();
        tool.handle_pointer(&mut drawing, &released(40.0, 40.0)).unwrap();
        assert_eq!(tool.step(), 0);
        assert!(drawing.is_empty());
    }

    #[test]
    fn test_circle_grows_with_pointer() {
        let mut drawing = Drawing::new();
        drawing.set_pending_kind(ShapeKind::Circle);
        let mut tool = DragTool::new(DragEdit::Radius);
        tool.handle_pointer(&mut drawing, &pressed(100.0, 100.0, MouseButton::Left))
            .unwrap();
        tool.handle_pointer(&mut drawing, &dragged(130.0, 140.0)).unwrap();
        tool.handle_pointer(&mut drawing, &released(130.0, 140.0)).unwrap();

        let figure = drawing.last_figure().unwrap();
        let Outline::RegularPolygon(circle) = figure.outline() else {
            panic!("expected a regular polygon");
        };
        let expected = 50.0 + circle.min_radius();
        for v in circle.vertices() {
            assert!((v.distance(Point::new(100.0, 100.0)) - expected).abs() <= 1.0);
        }
        assert!(figure.contains_point(Point::new(100.0, 100.0)));
        assert!(!figure.contains_point(Point::new(100.0, 160.0)));
    }
}
