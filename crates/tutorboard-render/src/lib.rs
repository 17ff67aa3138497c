//! Tutorboard Render Library
//!
//! Renderer abstraction, the tiny-skia backed raster surface that replays the
//! action history, and raster export of the rendered pixels.

mod export;
mod renderer;
mod skia_impl;
mod surface;

pub use export::{EncodedImage, ExportError, ExportResult, ImageEncoder, ImageFormat, PngEncoder, straight_rgba};
pub use renderer::{Frame, RenderResult, Renderer, RendererError};
pub use surface::RasterSurface;
pub use tiny_skia::Pixmap;
