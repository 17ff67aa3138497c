//! DPI-aware raster surface.

use crate::renderer::{Frame, RenderResult, Renderer, RendererError};
use crate::skia_impl::{fill_background, paint_action, paint_live_mark, to_transform};
use tiny_skia::{BlendMode, Pixmap, PixmapPaint, Transform};
use tutorboard_core::geometry::SurfaceGeometry;
use tutorboard_core::tools::LiveMark;

/// The whiteboard's pixel buffer.
///
/// The buffer holds `css_size * device_pixel_ratio` physical pixels and every draw
/// call is scaled by the ratio, so callers keep working in CSS pixels.
/// Pixels are only ever a cache of the action history: mounting and resizing
/// both finish with a full replay.
#[derive(Debug)]
pub struct RasterSurface {
    pixmap: Pixmap,
    geometry: SurfaceGeometry,
}

impl RasterSurface {
    /// Allocate a surface for `geometry` and replay `frame` onto it.
    pub fn mount(geometry: SurfaceGeometry, frame: &Frame) -> RenderResult<Self> {
        let pixmap = allocate(&geometry)?;
        let mut surface = Self { pixmap, geometry };
        surface.replay(frame);
        log::info!(
            "Mounted {}x{} surface at {}x device pixel ratio",
            surface.width(),
            surface.height(),
            geometry.device_pixel_ratio
        );
        Ok(surface)
    }

    /// Re-measure the surface and replay `frame` at the new size.
    ///
    /// On error the previous buffer and geometry are kept.
    pub fn resize(&mut self, geometry: SurfaceGeometry, frame: &Frame) -> RenderResult<()> {
        let mut pixmap = allocate(&geometry)?;

        // Carry the old pixels over; the replay below overwrites them.
        let copy = PixmapPaint {
            blend_mode: BlendMode::Source,
            ..PixmapPaint::default()
        };
        pixmap.draw_pixmap(0, 0, self.pixmap.as_ref(), &copy, Transform::identity(), None);

        log::debug!(
            "Resized surface {}x{} -> {}x{}",
            self.width(),
            self.height(),
            pixmap.width(),
            pixmap.height()
        );
        self.pixmap = pixmap;
        self.geometry = geometry;
        self.replay(frame);
        Ok(())
    }

    pub fn geometry(&self) -> &SurfaceGeometry {
        &self.geometry
    }

    /// Width in physical pixels.
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Height in physical pixels.
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// The rendered pixels (premultiplied RGBA).
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Straight RGBA of one physical pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    fn transform(&self) -> Transform {
        to_transform(self.geometry.device_transform())
    }
}

impl Renderer for RasterSurface {
    fn replay(&mut self, frame: &Frame) {
        let transform = self.transform();
        fill_background(&mut self.pixmap, frame.background);
        for action in frame.actions() {
            paint_action(&mut self.pixmap, action, transform);
        }
    }

    fn paint_live(&mut self, mark: &LiveMark) {
        let transform = self.transform();
        paint_live_mark(&mut self.pixmap, mark, transform);
    }
}

fn allocate(geometry: &SurfaceGeometry) -> RenderResult<Pixmap> {
    let (width, height) = geometry.physical_size();
    if !geometry.is_renderable() {
        return Err(RendererError::EmptySurface { width, height });
    }
    Pixmap::new(width, height).ok_or(RendererError::Allocation { width, height })
}
