//! Tutorboard Core Library
//!
//! Platform-agnostic data structures and logic for the Tutorboard whiteboard engine:
//! the draw action model, bounded undo/redo history, the tool state machine and
//! surface geometry. Nothing in here touches pixels.

pub mod actions;
pub mod board;
pub mod caption;
pub mod config;
pub mod geometry;
pub mod history;
pub mod input;
pub mod tools;

pub use actions::{ActionStyle, Circle, Composite, DrawAction, Line, Rectangle, Rgba, Stroke, ERASER_SIZE};
pub use board::{Board, BoardChange};
pub use caption::Caption;
pub use config::{ConfigError, ConfigResult, EngineConfig};
pub use geometry::SurfaceGeometry;
pub use history::{ActionHistory, MAX_HISTORY};
pub use input::{MouseButton, PointerEvent, TouchEvent};
pub use tools::{LiveMark, ToolKind, ToolManager, ToolState};
