//! Figura Core Library
//!
//! Drawing model for the Figura vector-figure editor: figures, filters,
//! change notification and the interactive creation/move protocols.

pub mod config;
pub mod drawing;
pub mod figure;
pub mod filters;
pub mod geometry;
pub mod input;
pub mod notify;
pub mod shapes;
pub mod tools;

pub use config::{ConfigError, EditorConfig, Palette, PaletteEntry};
pub use drawing::{Drawing, DrawingError, VisibleFigures};
pub use figure::{Figure, FigureError, FigureId};
pub use filters::{EdgeColorFilter, FigureFilter, FillColorFilter, FilterSet, LineFilter, ShapeFilter};
pub use input::{InputEvent, KeyEvent, MouseButton, PointerEvent};
pub use notify::{ChangeListener, ChangeNotifier, SubscriptionId};
pub use shapes::{FigureStyle, LineStyle, Outline, OutlineTrait, Rgba, ShapeKind};
pub use tools::{Tool, ToolError, ToolKind, ToolManager, ToolResult};
