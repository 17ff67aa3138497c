//! Draw actions: the vector model of a whiteboard drawing.

use kurbo::{Point, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Side length, in CSS pixels, of the square cleared by the eraser at each sample.
pub const ERASER_SIZE: f64 = 10.0;

/// Default stroke width in CSS pixels.
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// Whether the color fully covers what is underneath.
    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::black()
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// How a stroke combines with the pixels already on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Composite {
    /// Paint opaque ink over what is there.
    #[default]
    Paint,
    /// Clear pixels back to fully transparent.
    Erase,
}

/// Color and width shared by every action kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionStyle {
    pub color: Rgba,
    /// Stroke width in CSS pixels.
    pub line_width: f64,
}

impl Default for ActionStyle {
    fn default() -> Self {
        Self {
            color: Rgba::black(),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

/// A free-hand pen or eraser path, one point per pointer sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    pub style: ActionStyle,
    pub composite: Composite,
}

impl Stroke {
    /// Create a stroke from sampled points. Returns `None` if `points` is empty.
    pub fn from_points(points: Vec<Point>, style: ActionStyle, composite: Composite) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self {
            points,
            style,
            composite,
        })
    }

    /// Sampled points, never empty.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_eraser(&self) -> bool {
        self.composite == Composite::Erase
    }
}

/// A straight segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub style: ActionStyle,
}

impl Line {
    pub fn new(start: Point, end: Point, style: ActionStyle) -> Self {
        Self { start, end, style }
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// A circle outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Point,
    radius: f64,
    pub style: ActionStyle,
}

impl Circle {
    /// Create a circle. Negative or NaN radii are stored as zero.
    pub fn new(center: Point, radius: f64, style: ActionStyle) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            style,
        }
    }

    /// Circle centred on `center` passing through `edge`.
    pub fn through(center: Point, edge: Point, style: ActionStyle) -> Self {
        Self::new(center, center.distance(edge), style)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// A rectangle outline anchored at the drag origin.
///
/// `width` and `height` keep the sign of the drag, so a rectangle dragged up or left
/// has negative extents. Use [`Rectangle::normalized`] when painting.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    pub style: ActionStyle,
}

impl Rectangle {
    pub fn new(origin: Point, width: f64, height: f64, style: ActionStyle) -> Self {
        Self {
            origin,
            width,
            height,
            style,
        }
    }

    /// Rectangle spanning a drag from `start` to `end`, with signed extents.
    pub fn from_drag(start: Point, end: Point, style: ActionStyle) -> Self {
        Self::new(start, end.x - start.x, end.y - start.y, style)
    }

    /// Axis-aligned rect with non-negative width and height.
    pub fn normalized(&self) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.origin.x + self.width,
            self.origin.y + self.height,
        )
        .abs()
    }
}

/// One committed drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawAction {
    Stroke(Stroke),
    Line(Line),
    Circle(Circle),
    Rectangle(Rectangle),
}

impl DrawAction {
    /// Short name for log output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            DrawAction::Stroke(s) if s.is_eraser() => "eraser",
            DrawAction::Stroke(_) => "stroke",
            DrawAction::Line(_) => "line",
            DrawAction::Circle(_) => "circle",
            DrawAction::Rectangle(_) => "rectangle",
        }
    }
}
