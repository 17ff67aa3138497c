//! Renderer trait abstraction.

use peniko::Color;
use thiserror::Error;
use tutorboard_core::actions::DrawAction;
use tutorboard_core::history::ActionHistory;
use tutorboard_core::tools::LiveMark;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Surface has no drawable area ({width}x{height} physical pixels)")]
    EmptySurface { width: u32, height: u32 },
    #[error("Failed to allocate a {width}x{height} raster buffer")]
    Allocation { width: u32, height: u32 },
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Everything needed to rebuild the surface from scratch.
pub struct Frame<'a> {
    /// Committed actions, painted in order.
    pub history: &'a ActionHistory,
    /// Transient action for a gesture in progress, painted last.
    pub preview: Option<DrawAction>,
    /// Opaque color painted before any action.
    pub background: Color,
}

impl<'a> Frame<'a> {
    /// Create a frame with a white background and no preview.
    pub fn new(history: &'a ActionHistory) -> Self {
        Self {
            history,
            preview: None,
            background: Color::from_rgba8(255, 255, 255, 255),
        }
    }

    /// Set the preview action.
    pub fn with_preview(mut self, preview: Option<DrawAction>) -> Self {
        self.preview = preview;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Actions in paint order: history, then the preview.
    pub fn actions(&self) -> impl Iterator<Item = &DrawAction> {
        self.history.actions().chain(self.preview.iter())
    }
}

/// Trait for rendering backends.
///
/// The only way committed state reaches the pixels is [`Renderer::replay`];
/// [`Renderer::paint_live`] is feedback for a gesture that is still in progress.
pub trait Renderer: Send + Sync {
    /// Paint the background and then every action of the frame, in order.
    fn replay(&mut self, frame: &Frame);

    /// Paint an incremental pen segment or eraser stamp on top of the current pixels.
    fn paint_live(&mut self, mark: &LiveMark);
}
