//! Whiteboard state: action history, active tool and caption.

use crate::actions::DrawAction;
use crate::caption::Caption;
use crate::config::EngineConfig;
use crate::history::ActionHistory;
use crate::tools::{LiveMark, ToolKind, ToolManager, ToolState};
use kurbo::Point;

/// What the raster side has to do after a board operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoardChange {
    /// Surface is already up to date.
    Nothing,
    /// Paint an incremental mark directly on the surface.
    Live(LiveMark),
    /// Replay committed history followed by [`Board::preview_action`].
    Preview,
    /// Replay committed history.
    Replay,
}

impl BoardChange {
    /// Whether the surface must be rebuilt from history.
    pub fn needs_replay(&self) -> bool {
        matches!(self, BoardChange::Preview | BoardChange::Replay)
    }
}

/// The drawing model behind one whiteboard session.
///
/// Coordinates are surface-local CSS pixels; mapping from client space happens
/// before events reach the board.
#[derive(Debug, Clone)]
pub struct Board {
    history: ActionHistory,
    tools: ToolManager,
    caption: Caption,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl Board {
    /// Create an empty board using the host's tool selection and style.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            history: ActionHistory::new(),
            tools: ToolManager::with_tool(config.tool, config.action_style()),
            caption: Caption::new(config.caption_max_len),
        }
    }

    pub fn tool(&self) -> ToolKind {
        self.tools.current_tool
    }

    /// Switch tools. A gesture in progress is discarded without committing.
    pub fn select_tool(&mut self, tool: ToolKind) -> BoardChange {
        if self.tools.set_tool(tool) {
            log::debug!("Discarded active gesture on switch to {}", tool.name());
            BoardChange::Replay
        } else {
            BoardChange::Nothing
        }
    }

    /// Start a gesture.
    pub fn pointer_down(&mut self, point: Point) -> BoardChange {
        log::trace!("{} down at ({:.1}, {:.1})", self.tool().name(), point.x, point.y);
        self.tools.begin(point);
        BoardChange::Nothing
    }

    /// Feed a pointer sample to the active gesture.
    pub fn pointer_move(&mut self, point: Point) -> BoardChange {
        if !self.tools.is_active() {
            return BoardChange::Nothing;
        }
        match self.tools.update(point) {
            Some(mark) => BoardChange::Live(mark),
            None => BoardChange::Preview,
        }
    }

    /// End the active gesture, normally or because the pointer left the surface,
    /// and commit its action.
    pub fn pointer_up(&mut self, point: Point) -> BoardChange {
        match self.tools.end(point) {
            Some(action) => {
                self.commit_action(action);
                BoardChange::Replay
            }
            None => BoardChange::Nothing,
        }
    }

    /// Commit the active gesture at its last sample, e.g. when the surface goes away.
    pub fn finish_gesture(&mut self) -> BoardChange {
        match self.tools.state {
            ToolState::Active { current, .. } => self.pointer_up(current),
            ToolState::Idle => BoardChange::Nothing,
        }
    }

    fn commit_action(&mut self, action: DrawAction) {
        log::debug!(
            "Committed {} ({} in history)",
            action.kind_name(),
            self.history.len() + 1
        );
        self.history.append(action);
    }

    pub fn is_gesturing(&self) -> bool {
        self.tools.is_active()
    }

    /// Undo the newest action. Ignored while a gesture is active.
    pub fn undo(&mut self) -> BoardChange {
        if self.is_gesturing() {
            log::debug!("Undo ignored during active gesture");
            return BoardChange::Nothing;
        }
        if self.history.undo() {
            log::debug!("Undo ({} left)", self.history.len());
            BoardChange::Replay
        } else {
            BoardChange::Nothing
        }
    }

    /// Redo the most recently undone action. Ignored while a gesture is active.
    pub fn redo(&mut self) -> BoardChange {
        if self.is_gesturing() {
            log::debug!("Redo ignored during active gesture");
            return BoardChange::Nothing;
        }
        if self.history.redo() {
            log::debug!("Redo ({} in history)", self.history.len());
            BoardChange::Replay
        } else {
            BoardChange::Nothing
        }
    }

    /// Drop history, redo stack, caption and any gesture in progress.
    pub fn clear(&mut self) -> BoardChange {
        self.tools.cancel();
        self.history.clear();
        self.caption.clear();
        log::debug!("Board cleared");
        BoardChange::Replay
    }

    /// Set the caption. Returns true if it was truncated.
    pub fn set_caption(&mut self, text: &str) -> bool {
        self.caption.set(text)
    }

    pub fn caption(&self) -> &Caption {
        &self.caption
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &ActionHistory {
        &self.history
    }

    /// Transient action for the gesture in progress, painted after history.
    pub fn preview_action(&self) -> Option<DrawAction> {
        self.tools.preview_action()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
