//! Tutorboard Application
//!
//! The whiteboard engine facade a chat host embeds: event routing onto the board
//! and raster surface, keyboard shortcuts and the message payload produced on commit.

mod shortcuts;
mod submission;
mod whiteboard;

pub use shortcuts::{KeyPress, Shortcut, ShortcutAction, ShortcutRegistry};
pub use submission::{Submission, WhiteboardMessage, WHITEBOARD_MESSAGE_TYPE};
pub use whiteboard::{Whiteboard, WhiteboardError};
