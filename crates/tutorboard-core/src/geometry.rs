//! Surface geometry: client-to-local mapping and device pixel ratio handling.

use kurbo::{Affine, Point, Size};
use serde::{Deserialize, Serialize};

/// Measured display box of the drawing surface.
///
/// All drawing coordinates are surface-local CSS pixels. The raster buffer is
/// `css_size * device_pixel_ratio` physical pixels, and [`SurfaceGeometry::device_transform`]
/// maps the former onto the latter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceGeometry {
    /// Top-left corner of the surface in client coordinates.
    pub origin: Point,
    /// Display size in CSS pixels.
    pub css_size: Size,
    /// Physical pixels per CSS pixel.
    pub device_pixel_ratio: f64,
}

impl Default for SurfaceGeometry {
    fn default() -> Self {
        Self {
            origin: Point::ZERO,
            css_size: Size::ZERO,
            device_pixel_ratio: 1.0,
        }
    }
}

impl SurfaceGeometry {
    /// Create a geometry from a measured box and pixel ratio.
    pub fn new(origin: Point, css_size: Size, device_pixel_ratio: f64) -> Self {
        Self {
            origin,
            css_size,
            device_pixel_ratio,
        }
    }

    /// Geometry anchored at the client origin.
    pub fn with_size(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self::new(Point::ZERO, Size::new(width, height), device_pixel_ratio)
    }

    /// Convert a client-space pointer position to surface-local CSS pixels.
    ///
    /// Out-of-bounds positions are returned as-is, never clamped.
    pub fn to_local(&self, client: Point) -> Point {
        self.inverse_transform() * client
    }

    /// Convert a surface-local point back to client space.
    pub fn to_client(&self, local: Point) -> Point {
        self.client_transform() * local
    }

    fn client_transform(&self) -> Affine {
        Affine::translate(self.origin.to_vec2())
    }

    fn inverse_transform(&self) -> Affine {
        Affine::translate(-self.origin.to_vec2())
    }

    /// Scale applied to every draw call so callers stay in CSS pixels.
    pub fn device_transform(&self) -> Affine {
        Affine::scale(self.device_pixel_ratio)
    }

    /// Size of the backing raster in physical pixels.
    pub fn physical_size(&self) -> (u32, u32) {
        let scale = |v: f64| (v * self.device_pixel_ratio).round().max(0.0) as u32;
        (scale(self.css_size.width), scale(self.css_size.height))
    }

    /// Whether a raster buffer can be allocated for this geometry.
    pub fn is_renderable(&self) -> bool {
        let (w, h) = self.physical_size();
        self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 && w > 0 && h > 0
    }
}
