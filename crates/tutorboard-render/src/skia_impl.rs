//! tiny-skia painting of draw actions.
//!
//! Every function takes coordinates in CSS pixels and a transform that carries
//! the device pixel ratio, so the same action paints identically at any density.

use kurbo::{Affine, Point};
use peniko::Color;
use tiny_skia::{
    BlendMode, FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform,
};
use tutorboard_core::actions::{ActionStyle, Composite, DrawAction, ERASER_SIZE};
use tutorboard_core::tools::LiveMark;

/// Convert a kurbo affine into a tiny-skia transform.
pub(crate) fn to_transform(affine: Affine) -> Transform {
    let [a, b, c, d, e, f] = affine.as_coeffs();
    Transform::from_row(a as f32, b as f32, c as f32, d as f32, e as f32, f as f32)
}

/// Overwrite every pixel with an opaque background.
pub(crate) fn fill_background(pixmap: &mut Pixmap, color: Color) {
    let rgba = color.to_rgba8();
    pixmap.fill(tiny_skia::Color::from_rgba8(rgba.r, rgba.g, rgba.b, rgba.a));
}

/// Paint one committed or preview action.
pub(crate) fn paint_action(pixmap: &mut Pixmap, action: &DrawAction, transform: Transform) {
    match action {
        DrawAction::Stroke(stroke) => match stroke.composite {
            Composite::Paint => stroke_polyline(pixmap, stroke.points(), &stroke.style, transform),
            Composite::Erase => {
                // One stamp per sample; gaps between fast samples are expected.
                for point in stroke.points() {
                    erase_square(pixmap, *point, ERASER_SIZE, transform);
                }
            }
        },
        DrawAction::Line(line) => {
            stroke_polyline(pixmap, &[line.start, line.end], &line.style, transform);
        }
        DrawAction::Circle(circle) => {
            // Zero radius paints nothing.
            let Some(path) = PathBuilder::from_circle(
                circle.center.x as f32,
                circle.center.y as f32,
                circle.radius() as f32,
            ) else {
                return;
            };
            pixmap.stroke_path(&path, &ink(&circle.style), &pen(&circle.style), transform, None);
        }
        DrawAction::Rectangle(rectangle) => {
            let bounds = rectangle.normalized();
            let Some(rect) = Rect::from_ltrb(
                bounds.x0 as f32,
                bounds.y0 as f32,
                bounds.x1 as f32,
                bounds.y1 as f32,
            ) else {
                log::trace!("Skipping degenerate rectangle");
                return;
            };
            let path = PathBuilder::from_rect(rect);
            pixmap.stroke_path(&path, &ink(&rectangle.style), &pen(&rectangle.style), transform, None);
        }
    }
}

/// Paint the incremental feedback for a free-hand gesture.
pub(crate) fn paint_live_mark(pixmap: &mut Pixmap, mark: &LiveMark, transform: Transform) {
    match mark {
        LiveMark::Segment { from, to, style } => stroke_polyline(pixmap, &[*from, *to], style, transform),
        LiveMark::Erase { at, size } => erase_square(pixmap, *at, *size, transform),
    }
}

fn ink(style: &ActionStyle) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(style.color.r, style.color.g, style.color.b, style.color.a);
    paint.anti_alias = true;
    paint
}

fn pen(style: &ActionStyle) -> Stroke {
    Stroke {
        width: style.line_width as f32,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    }
}

/// Stroke a polyline with round caps and joins. A path that never moves
/// becomes a round dot the size of the pen.
fn stroke_polyline(pixmap: &mut Pixmap, points: &[Point], style: &ActionStyle, transform: Transform) {
    let Some(&first) = points.first() else {
        return;
    };

    if points.iter().all(|p| *p == first) {
        let radius = (style.line_width / 2.0) as f32;
        if let Some(dot) = PathBuilder::from_circle(first.x as f32, first.y as f32, radius) {
            pixmap.fill_path(&dot, &ink(style), FillRule::Winding, transform, None);
        }
        return;
    }

    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for point in &points[1..] {
        pb.line_to(point.x as f32, point.y as f32);
    }
    if let Some(path) = pb.finish() {
        pixmap.stroke_path(&path, &ink(style), &pen(style), transform, None);
    }
}

/// Clear a `size`-wide square centred on `center` back to transparent.
fn erase_square(pixmap: &mut Pixmap, center: Point, size: f64, transform: Transform) {
    let half = size / 2.0;
    let Some(rect) = Rect::from_xywh(
        (center.x - half) as f32,
        (center.y - half) as f32,
        size as f32,
        size as f32,
    ) else {
        return;
    };
    let mut paint = Paint::default();
    paint.blend_mode = BlendMode::Clear;
    paint.anti_alias = false;
    pixmap.fill_rect(rect, &paint, transform, None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutorboard_core::actions::{Circle, Line, Rectangle, Rgba, Stroke};

    fn white(width: u32, height: u32) -> Pixmap {
        let mut pixmap = Pixmap::new(width, height).unwrap();
        fill_background(&mut pixmap, Color::from_rgba8(255, 255, 255, 255));
        pixmap
    }

    fn rgba_at(pixmap: &Pixmap, x: u32, y: u32) -> [u8; 4] {
        let c = pixmap.pixel(x, y).unwrap().demultiply();
        [c.red(), c.green(), c.blue(), c.alpha()]
    }

    #[test]
    fn test_to_transform_scale() {
        let t = to_transform(Affine::scale(2.0));
        assert!((t.sx - 2.0).abs() < f32::EPSILON);
        assert!((t.sy - 2.0).abs() < f32::EPSILON);
        assert!(t.tx.abs() < f32::EPSILON);
    }

    #[test]
    fn test_line_paints_ink() {
        let mut pixmap = white(40, 40);
        let line = Line::new(Point::new(5.0, 20.0), Point::new(35.0, 20.0), ActionStyle::default());
        paint_action(&mut pixmap, &DrawAction::Line(line), Transform::identity());
        assert_eq!(rgba_at(&pixmap, 20, 20), [0, 0, 0, 255]);
        assert_eq!(rgba_at(&pixmap, 20, 5), [255, 255, 255, 255]);
    }

    #[test]
    fn test_eraser_clears_to_transparent() {
        let mut pixmap = white(40, 40);
        let eraser = Stroke::from_points(vec![Point::new(20.0, 20.0)], ActionStyle::default(), Composite::Erase).unwrap();
        paint_action(&mut pixmap, &DrawAction::Stroke(eraser), Transform::identity());
        assert_eq!(rgba_at(&pixmap, 20, 20)[3], 0);
        // Stamp is 10 px wide: 16..=24 cleared, 30 untouched.
        assert_eq!(rgba_at(&pixmap, 16, 24)[3], 0);
        assert_eq!(rgba_at(&pixmap, 30, 20), [255, 255, 255, 255]);
    }

    #[test]
    fn test_negative_rectangle_paints_normalized_outline() {
        let mut pixmap = white(60, 60);
        let style = ActionStyle {
            color: Rgba::new(255, 0, 0, 255),
            line_width: 2.0,
        };
        let rect = Rectangle::new(Point::new(50.0, 50.0), -40.0, -30.0, style);
        paint_action(&mut pixmap, &DrawAction::Rectangle(rect), Transform::identity());

        // Left edge at x=10, top edge at y=20, bottom at y=50.
        assert_eq!(rgba_at(&pixmap, 10, 35), [255, 0, 0, 255]);
        assert_eq!(rgba_at(&pixmap, 30, 20), [255, 0, 0, 255]);
        assert_eq!(rgba_at(&pixmap, 30, 50), [255, 0, 0, 255]);
        // Interior stays background.
        assert_eq!(rgba_at(&pixmap, 30, 35), [255, 255, 255, 255]);
    }

    #[test]
    fn test_zero_radius_circle_paints_nothing() {
        let mut pixmap = white(20, 20);
        let before = pixmap.data().to_vec();
        let circle = Circle::new(Point::new(10.0, 10.0), 0.0, ActionStyle::default());
        paint_action(&mut pixmap, &DrawAction::Circle(circle), Transform::identity());
        assert_eq!(pixmap.data(), before.as_slice());
    }

    #[test]
    fn test_single_point_stroke_is_a_dot() {
        let mut pixmap = white(20, 20);
        let style = ActionStyle {
            color: Rgba::black(),
            line_width: 6.0,
        };
        let dot = Stroke::from_points(vec![Point::new(10.0, 10.0)], style, Composite::Paint).unwrap();
        paint_action(&mut pixmap, &DrawAction::Stroke(dot), Transform::identity());
        assert_eq!(rgba_at(&pixmap, 10, 10), [0, 0, 0, 255]);
        assert_eq!(rgba_at(&pixmap, 2, 2), [255, 255, 255, 255]);
    }

    #[test]
    fn test_live_segment_respects_transform() {
        let mut pixmap = white(40, 40);
        let mark = LiveMark::Segment {
            from: Point::new(2.0, 10.0),
            to: Point::new(18.0, 10.0),
            style: ActionStyle::default(),
        };
        paint_live_mark(&mut pixmap, &mark, to_transform(Affine::scale(2.0)));
        assert_eq!(rgba_at(&pixmap, 20, 20), [0, 0, 0, 255]);
        assert_eq!(rgba_at(&pixmap, 20, 10), [255, 255, 255, 255]);
    }
}
