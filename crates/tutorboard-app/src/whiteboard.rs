//! Whiteboard engine: board state, raster surface and export behind one facade.

use crate::shortcuts::{KeyPress, ShortcutAction, ShortcutRegistry};
use crate::submission::Submission;
use thiserror::Error;
use tutorboard_core::board::{Board, BoardChange};
use tutorboard_core::config::EngineConfig;
use tutorboard_core::geometry::SurfaceGeometry;
use tutorboard_core::input::{MouseButton, PointerEvent, TouchEvent};
use tutorboard_core::tools::ToolKind;
use tutorboard_render::{ExportError, Frame, ImageEncoder, PngEncoder, RasterSurface, Renderer};

/// Errors surfaced to the host. None of them changes engine state.
#[derive(Debug, Error)]
pub enum WhiteboardError {
    #[error("Nothing to send: draw something first")]
    EmptyCanvas,
    #[error("Whiteboard surface is not mounted")]
    SurfaceNotReady,
    #[error(transparent)]
    Export(#[from] ExportError),
}

impl WhiteboardError {
    /// Whether retrying the same call later can succeed without user input.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, WhiteboardError::EmptyCanvas)
    }
}

/// One whiteboard session.
///
/// All operations run on the caller's thread in event order. The surface is
/// optional: before [`Whiteboard::mount`] (or after [`Whiteboard::unmount`]) drawing
/// state is kept but nothing is painted.
pub struct Whiteboard {
    config: EngineConfig,
    board: Board,
    surface: Option<RasterSurface>,
    encoder: Box<dyn ImageEncoder>,
    focused: bool,
}

impl Default for Whiteboard {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Whiteboard {
    /// Open a session with the host's config.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            board: Board::new(&config),
            config,
            surface: None,
            encoder: Box::new(PngEncoder),
            focused: false,
        }
    }

    /// Replace the image encoder used by [`Whiteboard::commit`].
    pub fn with_encoder(mut self, encoder: impl ImageEncoder + 'static) -> Self {
        self.encoder = Box::new(encoder);
        self
    }

    /// Current config, with `tool` tracking the latest selection. Hand it back to
    /// [`Whiteboard::new`] to restore the tool on reopen.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn surface(&self) -> Option<&RasterSurface> {
        self.surface.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    /// Create the raster surface and replay existing history onto it.
    /// Returns false, leaving the session unmounted, if `geometry` has no area.
    pub fn mount(&mut self, geometry: SurfaceGeometry) -> bool {
        match RasterSurface::mount(geometry, &frame(&self.board, &self.config)) {
            Ok(surface) => {
                self.surface = Some(surface);
                true
            }
            Err(e) => {
                log::warn!("Deferring mount: {}", e);
                false
            }
        }
    }

    /// Apply a new surface geometry and replay. Mounts if not mounted yet.
    /// Returns false if the new geometry was rejected; the old surface stays.
    pub fn resize(&mut self, geometry: SurfaceGeometry) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            return self.mount(geometry);
        };
        match surface.resize(geometry, &frame(&self.board, &self.config)) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Deferring resize: {}", e);
                false
            }
        }
    }

    /// Drop the raster surface. History, caption and tool survive for the next mount;
    /// a gesture in progress is committed as if the pointer had left.
    pub fn unmount(&mut self) {
        self.board.finish_gesture();
        self.surface = None;
        self.focused = false;
    }

    /// Route a pointer event. Returns true if the event reached the board.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        let Some(surface) = self.surface.as_ref() else {
            log::trace!("Ignoring pointer event before mount");
            return false;
        };
        let local = surface.geometry().to_local(event.position());

        let change = match event {
            PointerEvent::Down {
                button: MouseButton::Left,
                ..
            } => self.board.pointer_down(local),
            PointerEvent::Down { .. } => return false,
            PointerEvent::Move { .. } => self.board.pointer_move(local),
            PointerEvent::Up { .. } | PointerEvent::Leave { .. } => self.board.pointer_up(local),
        };
        self.apply(change);
        true
    }

    /// Route a touch event through the pointer path.
    pub fn handle_touch(&mut self, event: TouchEvent) -> bool {
        self.handle_pointer(event.into())
    }

    /// Route a key press. Returns true if it was consumed as a shortcut.
    ///
    /// Shortcuts only apply while the whiteboard is focused and mounted, and are
    /// ignored while a gesture is in progress.
    pub fn handle_key(&mut self, press: &KeyPress) -> bool {
        if !self.focused || self.surface.is_none() {
            return false;
        }
        let Some(action) = ShortcutRegistry::resolve(press) else {
            return false;
        };
        if self.board.is_gesturing() {
            log::debug!("Ignoring {:?} shortcut during active gesture", action);
            return false;
        }
        match action {
            ShortcutAction::Undo => self.undo(),
            ShortcutAction::Redo => self.redo(),
        };
        true
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn tool(&self) -> ToolKind {
        self.board.tool()
    }

    /// Select a tool and remember it in the config.
    pub fn select_tool(&mut self, tool: ToolKind) {
        self.config.tool = tool;
        let change = self.board.select_tool(tool);
        self.apply(change);
    }

    /// Returns true if an action was undone.
    pub fn undo(&mut self) -> bool {
        let change = self.board.undo();
        self.apply(change);
        change.needs_replay()
    }

    /// Returns true if an action was redone.
    pub fn redo(&mut self) -> bool {
        let change = self.board.redo();
        self.apply(change);
        change.needs_replay()
    }

    pub fn can_undo(&self) -> bool {
        self.board.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.board.can_redo()
    }

    pub fn is_gesturing(&self) -> bool {
        self.board.is_gesturing()
    }

    /// Erase everything: history, redo stack, caption.
    pub fn clear(&mut self) {
        let change = self.board.clear();
        self.apply(change);
    }

    /// Set the caption. Returns true if it was cut to the configured length.
    pub fn set_caption(&mut self, text: &str) -> bool {
        self.board.set_caption(text)
    }

    pub fn caption(&self) -> &str {
        self.board.caption().as_str()
    }

    /// Encode the rendered surface with the trimmed caption, then clear the session.
    ///
    /// On error nothing is cleared, so the user can retry without losing the drawing.
    pub fn commit(&mut self) -> Result<Submission, WhiteboardError> {
        if self.board.is_empty() {
            return Err(WhiteboardError::EmptyCanvas);
        }
        let surface = self.surface.as_ref().ok_or(WhiteboardError::SurfaceNotReady)?;
        let image = self.encoder.encode(surface.pixmap())?;
        let caption = self.board.caption().trimmed().to_string();

        log::info!(
            "Committed drawing of {} actions as {}x{} {}",
            self.board.history().len(),
            image.width,
            image.height,
            image.mime_type()
        );
        let change = self.board.clear();
        self.apply(change);
        Ok(Submission { image, caption })
    }

    fn apply(&mut self, change: BoardChange) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        match change {
            BoardChange::Nothing => {}
            BoardChange::Live(mark) => surface.paint_live(&mark),
            BoardChange::Preview | BoardChange::Replay => surface.replay(&frame(&self.board, &self.config)),
        }
    }
}

/// Replay frame for the current board, including the gesture preview if any.
fn frame<'a>(board: &'a Board, config: &EngineConfig) -> Frame<'a> {
    Frame::new(board.history())
        .with_preview(board.preview_action())
        .with_background(config.background.into())
}
