use figura_core::{
    Drawing, FigureError, FillColorFilter, InputEvent, MouseButton, PointerEvent, Rgba,
    ShapeFilter, ShapeKind, ToolKind, ToolManager,
};
use kurbo::{Affine, Point, Rect};
use std::cell::Cell;
use std::rc::Rc;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn press(x: f64, y: f64) -> InputEvent {
    PointerEvent::Pressed {
        position: Point::new(x, y),
        button: MouseButton::Left,
    }
    .into()
}

fn drag(x: f64, y: f64) -> InputEvent {
    PointerEvent::Dragged {
        position: Point::new(x, y),
    }
    .into()
}

fn release(x: f64, y: f64) -> InputEvent {
    PointerEvent::Released {
        position: Point::new(x, y),
        button: MouseButton::Left,
    }
    .into()
}

fn click(x: f64, y: f64, button: MouseButton) -> InputEvent {
    PointerEvent::Clicked {
        position: Point::new(x, y),
        button,
    }
    .into()
}

// Drive one press/drag/release gesture through the manager.
fn gesture(drawing: &mut Drawing, manager: &mut ToolManager, from: Point, to: Point) {
    manager.handle_event(drawing, &press(from.x, from.y)).unwrap();
    manager.handle_event(drawing, &drag(to.x, to.y)).unwrap();
    manager.handle_event(drawing, &release(to.x, to.y)).unwrap();
}

#[test]
fn test_rectangle_from_press_drag_release() {
    init_logging();
    let mut drawing = Drawing::new();
    drawing.set_pending_kind(ShapeKind::Rectangle);
    let mut manager = ToolManager::new(&drawing);
    assert_eq!(manager.kind(), ToolKind::Rectangular);

    gesture(
        &mut drawing,
        &mut manager,
        Point::new(10.0, 10.0),
        Point::new(50.0, 40.0),
    );

    assert_eq!(drawing.len(), 1);
    let figure = drawing.last_figure().unwrap();
    assert_eq!(figure.kind(), ShapeKind::Rectangle);
    assert_eq!(figure.bounds(), Rect::new(10.0, 10.0, 50.0, 40.0));
    assert_eq!(manager.step(), 0);
}

#[test]
fn test_topmost_hit_then_undo() {
    init_logging();
    let mut drawing = Drawing::new();
    let mut manager = ToolManager::new(&drawing);

    drawing.set_pending_kind(ShapeKind::Circle);
    gesture(
        &mut drawing,
        &mut manager,
        Point::new(50.0, 50.0),
        Point::new(80.0, 50.0),
    );
    let circle = drawing.last_figure().unwrap().id();

    drawing.set_pending_kind(ShapeKind::Rectangle);
    gesture(
        &mut drawing,
        &mut manager,
        Point::new(40.0, 40.0),
        Point::new(100.0, 100.0),
    );
    let rectangle = drawing.last_figure().unwrap().id();

    let overlap = Point::new(60.0, 60.0);
    assert_eq!(drawing.figure_at(overlap).unwrap().id(), rectangle);
    drawing.remove_last_figure();
    assert_eq!(drawing.figure_at(overlap).unwrap().id(), circle);
}

#[test]
fn test_move_there_and_back_restores_center() {
    init_logging();
    let mut drawing = Drawing::new();
    drawing.set_pending_kind(ShapeKind::Ellipse);
    let mut manager = ToolManager::new(&drawing);
    gesture(
        &mut drawing,
        &mut manager,
        Point::new(0.0, 0.0),
        Point::new(40.0, 20.0),
    );
    let id = drawing.last_figure().unwrap().id();
    let start = drawing.figure(id).unwrap().world_center();

    drawing.set_move_mode(true);
    gesture(
        &mut drawing,
        &mut manager,
        start,
        Point::new(start.x + 33.0, start.y - 12.0),
    );
    assert_eq!(manager.kind(), ToolKind::Move);
    let moved = drawing.figure(id).unwrap().world_center();
    assert!(moved.distance(Point::new(53.0, -2.0)) < 1e-9);

    gesture(&mut drawing, &mut manager, moved, start);
    assert!(drawing.figure(id).unwrap().world_center().distance(start) < 1e-9);
    assert_eq!(drawing.len(), 1);
}

#[test]
fn test_transform_edits_keep_figures_movable() {
    init_logging();
    let mut drawing = Drawing::new();
    drawing.set_pending_kind(ShapeKind::Rectangle);
    let mut manager = ToolManager::new(&drawing);
    gesture(
        &mut drawing,
        &mut manager,
        Point::new(0.0, 0.0),
        Point::new(20.0, 20.0),
    );
    let id = drawing.last_figure().unwrap().id();

    let figure = drawing.figure_mut(id).unwrap();
    assert!(matches!(
        figure.set_transform(Affine::scale(0.0)),
        Err(FigureError::NonInvertibleTransform { .. })
    ));
    assert!(matches!(
        figure.scale(1e-7, 1e-7),
        Err(FigureError::NonInvertibleTransform { .. })
    ));
    figure.scale(2.0, 2.0).unwrap();

    drawing.set_move_mode(true);
    gesture(
        &mut drawing,
        &mut manager,
        Point::new(25.0, 25.0),
        Point::new(110.0, 90.0),
    );
    let figure = drawing.figure(id).unwrap();
    assert!(figure.world_center().distance(Point::new(110.0, 90.0)) < 1e-9);
    assert!((figure.bounds().width() - 40.0).abs() < 1e-9);
}

#[test]
fn test_polygon_through_manager() {
    init_logging();
    let mut drawing = Drawing::new();
    drawing.set_pending_kind(ShapeKind::Polygon);
    let mut manager = ToolManager::new(&drawing);
    assert_eq!(manager.kind(), ToolKind::Polygon);

    manager
        .handle_event(&mut drawing, &click(0.0, 0.0, MouseButton::Left))
        .unwrap();
    manager
        .handle_event(&mut drawing, &click(30.0, 0.0, MouseButton::Left))
        .unwrap();
    let hover: InputEvent = PointerEvent::Moved {
        position: Point::new(0.0, 30.0),
    }
    .into();
    manager.handle_event(&mut drawing, &hover).unwrap();
    manager
        .handle_event(&mut drawing, &click(0.0, 30.0, MouseButton::Right))
        .unwrap();
    assert_eq!(manager.step(), 0);

    let figure = drawing.last_figure().unwrap();
    assert_eq!(figure.kind(), ShapeKind::Polygon);
    assert!(figure.contains_point(Point::new(10.0, 5.0)));
}

#[test]
fn test_filtered_view_drives_hit_testing() {
    init_logging();
    let mut drawing = Drawing::new();
    let renders = Rc::new(Cell::new(0));
    let counter = Rc::clone(&renders);
    drawing.subscribe(move || counter.set(counter.get() + 1));
    let mut manager = ToolManager::new(&drawing);

    drawing.set_pending_kind(ShapeKind::Ellipse);
    drawing.set_default_fill_color(Some(Rgba::RED));
    gesture(
        &mut drawing,
        &mut manager,
        Point::new(0.0, 0.0),
        Point::new(100.0, 100.0),
    );
    let ellipse = drawing.last_figure().unwrap().id();

    drawing.set_pending_kind(ShapeKind::Rectangle);
    drawing.set_default_fill_color(Some(Rgba::GREEN));
    gesture(
        &mut drawing,
        &mut manager,
        Point::new(0.0, 0.0),
        Point::new(100.0, 100.0),
    );
    assert!(renders.get() >= 6);

    drawing.set_filtering(true);
    drawing.set_fill_color_filter(Some(FillColorFilter(Some(Rgba::RED))));
    assert_eq!(drawing.figure_at(Point::new(50.0, 50.0)).unwrap().id(), ellipse);

    drawing.set_fill_color_filter(None);
    drawing.add_shape_filter(ShapeFilter(ShapeKind::Circle));
    assert!(drawing.figure_at(Point::new(50.0, 50.0)).is_none());
    assert_eq!(drawing.query_visible().count(), 0);

    drawing.set_filtering(false);
    assert_eq!(drawing.query_visible().count(), 2);
}
