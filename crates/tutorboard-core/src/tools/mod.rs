//! Tool system for the whiteboard.

use crate::actions::{
    ActionStyle, Circle, Composite, DrawAction, ERASER_SIZE, Line, Rectangle, Stroke,
};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Pen,
    Eraser,
    Line,
    Circle,
    Rectangle,
}

impl ToolKind {
    /// Every tool, in toolbar order.
    pub const ALL: [ToolKind; 5] = [
        ToolKind::Pen,
        ToolKind::Eraser,
        ToolKind::Line,
        ToolKind::Circle,
        ToolKind::Rectangle,
    ];

    /// Free-hand tools accumulate every sample; shape tools only need the endpoints.
    pub fn is_freehand(self) -> bool {
        matches!(self, ToolKind::Pen | ToolKind::Eraser)
    }

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Pen => "pen",
            ToolKind::Eraser => "eraser",
            ToolKind::Line => "line",
            ToolKind::Circle => "circle",
            ToolKind::Rectangle => "rectangle",
        }
    }
}

/// State of a tool interaction.
#[derive(Debug, Clone, Default)]
pub enum ToolState {
    /// Tool is idle, waiting for interaction.
    #[default]
    Idle,
    /// A gesture is in progress.
    Active {
        /// Pointer-down position.
        start: Point,
        /// Latest pointer position.
        current: Point,
    },
}

/// Incremental mark painted straight onto the live surface during a free-hand gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiveMark {
    /// Pen segment between two consecutive samples.
    Segment {
        from: Point,
        to: Point,
        style: ActionStyle,
    },
    /// Eraser stamp centred on a sample.
    Erase { at: Point, size: f64 },
}

/// Manages the current tool and its in-progress gesture.
#[derive(Debug, Clone, Default)]
pub struct ToolManager {
    /// Currently selected tool.
    pub current_tool: ToolKind,
    /// Current state of the tool.
    pub state: ToolState,
    /// Accumulated samples for free-hand tools.
    stroke_points: Vec<Point>,
    /// Style applied to new actions.
    pub current_style: ActionStyle,
}

impl ToolManager {
    /// Create a new tool manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tool manager with a preselected tool and style.
    pub fn with_tool(tool: ToolKind, style: ActionStyle) -> Self {
        Self {
            current_tool: tool,
            current_style: style,
            ..Self::default()
        }
    }

    /// Set the current tool, discarding any gesture in progress.
    /// Returns true if a gesture was discarded.
    pub fn set_tool(&mut self, tool: ToolKind) -> bool {
        let discarded = self.is_active();
        self.current_tool = tool;
        self.cancel();
        discarded
    }

    /// Begin a gesture at a surface-local point.
    pub fn begin(&mut self, point: Point) {
        self.stroke_points.clear();
        if self.current_tool.is_freehand() {
            self.stroke_points.push(point);
        }
        self.state = ToolState::Active {
            start: point,
            current: point,
        };
    }

    /// Feed a pointer sample into the active gesture.
    ///
    /// Free-hand tools return the mark to paint immediately; shape tools return `None`
    /// and expect the caller to render [`ToolManager::preview_action`].
    pub fn update(&mut self, point: Point) -> Option<LiveMark> {
        let ToolState::Active { current, .. } = &mut self.state else {
            return None;
        };
        *current = point;

        match self.current_tool {
            ToolKind::Pen => {
                let from = self.stroke_points.last().copied().unwrap_or(point);
                self.stroke_points.push(point);
                Some(LiveMark::Segment {
                    from,
                    to: point,
                    style: self.current_style,
                })
            }
            ToolKind::Eraser => {
                self.stroke_points.push(point);
                Some(LiveMark::Erase {
                    at: point,
                    size: ERASER_SIZE,
                })
            }
            ToolKind::Line | ToolKind::Circle | ToolKind::Rectangle => None,
        }
    }

    /// End the gesture and return the action to commit.
    ///
    /// Free-hand tools commit the samples gathered so far; shape tools use `point` as
    /// the final endpoint. Returns `None` when no gesture was active.
    pub fn end(&mut self, point: Point) -> Option<DrawAction> {
        let ToolState::Active { start, .. } = self.state else {
            return None;
        };
        let action = self.build_action(start, point);
        self.cancel();
        action
    }

    /// Discard the gesture in progress.
    pub fn cancel(&mut self) {
        self.state = ToolState::Idle;
        self.stroke_points.clear();
    }

    /// Check if a gesture is active.
    pub fn is_active(&self) -> bool {
        matches!(self.state, ToolState::Active { .. })
    }

    /// The action the current gesture would commit if it ended now.
    pub fn preview_action(&self) -> Option<DrawAction> {
        match self.state {
            ToolState::Active { start, current } => self.build_action(start, current),
            ToolState::Idle => None,
        }
    }

    /// Samples accumulated by the active free-hand gesture.
    pub fn stroke_points(&self) -> &[Point] {
        &self.stroke_points
    }

    fn build_action(&self, start: Point, end: Point) -> Option<DrawAction> {
        let style = self.current_style;
        match self.current_tool {
            ToolKind::Pen => Stroke::from_points(self.stroke_points.clone(), style, Composite::Paint)
                .map(DrawAction::Stroke),
            ToolKind::Eraser => Stroke::from_points(self.stroke_points.clone(), style, Composite::Erase)
                .map(DrawAction::Stroke),
            ToolKind::Line => Some(DrawAction::Line(Line::new(start, end, style))),
            ToolKind::Circle => Some(DrawAction::Circle(Circle::through(start, end, style))),
            ToolKind::Rectangle => Some(DrawAction::Rectangle(Rectangle::from_drag(start, end, style))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_selection() {
        let mut tm = ToolManager::new();
        assert_eq!(tm.current_tool, ToolKind::Pen);

        tm.set_tool(ToolKind::Rectangle);
        assert_eq!(tm.current_tool, ToolKind::Rectangle);
    }

    #[test]
    fn test_pen_accumulates_samples() {
        let mut tm = ToolManager::new();
        tm.begin(Point::new(0.0, 0.0));
        assert!(tm.is_active());

        let mark = tm.update(Point::new(5.0, 5.0));
        assert_eq!(
            mark,
            Some(LiveMark::Segment {
                from: Point::new(0.0, 0.0),
                to: Point::new(5.0, 5.0),
                style: ActionStyle::default(),
            })
        );
        tm.update(Point::new(10.0, 5.0));

        let action = tm.end(Point::new(99.0, 99.0)).unwrap();
        let DrawAction::Stroke(stroke) = action else {
            panic!("pen should commit a stroke");
        };
        assert_eq!(
            stroke.points(),
            &[Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(10.0, 5.0)]
        );
        assert_eq!(stroke.composite, Composite::Paint);
        assert!(!tm.is_active());
        assert!(tm.stroke_points().is_empty());
    }

    #[test]
    fn test_eraser_commits_erase_stroke() {
        let mut tm = ToolManager::new();
        tm.set_tool(ToolKind::Eraser);
        tm.begin(Point::new(1.0, 1.0));
        let mark = tm.update(Point::new(2.0, 2.0));
        assert_eq!(
            mark,
            Some(LiveMark::Erase {
                at: Point::new(2.0, 2.0),
                size: ERASER_SIZE,
            })
        );

        match tm.end(Point::new(2.0, 2.0)) {
            Some(DrawAction::Stroke(stroke)) => {
                assert!(stroke.is_eraser());
                assert_eq!(stroke.points().len(), 2);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_shape_preview_follows_pointer() {
        let mut tm = ToolManager::new();
        tm.set_tool(ToolKind::Line);
        tm.begin(Point::new(0.0, 0.0));

        assert!(tm.update(Point::new(50.0, 50.0)).is_none());
        let preview = tm.preview_action();
        assert_eq!(
            preview,
            Some(DrawAction::Line(Line::new(
                Point::new(0.0, 0.0),
                Point::new(50.0, 50.0),
                ActionStyle::default()
            )))
        );

        let action = tm.end(Point::new(100.0, 100.0));
        assert_eq!(
            action,
            Some(DrawAction::Line(Line::new(
                Point::new(0.0, 0.0),
                Point::new(100.0, 100.0),
                ActionStyle::default()
            )))
        );
        assert!(tm.preview_action().is_none());
    }

    #[test]
    fn test_circle_radius_from_drag() {
        let mut tm = ToolManager::new();
        tm.set_tool(ToolKind::Circle);
        tm.begin(Point::new(10.0, 10.0));
        match tm.end(Point::new(13.0, 14.0)) {
            Some(DrawAction::Circle(circle)) => {
                assert_eq!(circle.center, Point::new(10.0, 10.0));
                assert!((circle.radius() - 5.0).abs() < f64::EPSILON);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_degenerate_gestures_commit() {
        let mut tm = ToolManager::new();
        let at = Point::new(7.0, 7.0);

        tm.begin(at);
        match tm.end(at) {
            Some(DrawAction::Stroke(stroke)) => assert_eq!(stroke.points(), &[at]),
            other => panic!("unexpected action: {other:?}"),
        }

        tm.set_tool(ToolKind::Circle);
        tm.begin(at);
        match tm.end(at) {
            Some(DrawAction::Circle(circle)) => assert!(circle.radius().abs() < f64::EPSILON),
            other => panic!("unexpected action: {other:?}"),
        }

        tm.set_tool(ToolKind::Rectangle);
        tm.begin(at);
        match tm.end(at) {
            Some(DrawAction::Rectangle(rect)) => {
                assert!(rect.width.abs() < f64::EPSILON);
                assert!(rect.height.abs() < f64::EPSILON);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_rectangle_drawn_up_left() {
        let mut tm = ToolManager::new();
        tm.set_tool(ToolKind::Rectangle);
        tm.begin(Point::new(100.0, 100.0));
        match tm.end(Point::new(60.0, 20.0)) {
            Some(DrawAction::Rectangle(rect)) => {
                assert!((rect.width + 40.0).abs() < f64::EPSILON);
                assert!((rect.height + 80.0).abs() < f64::EPSILON);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_set_tool_discards_gesture() {
        let mut tm = ToolManager::new();
        tm.begin(Point::new(0.0, 0.0));
        tm.update(Point::new(1.0, 1.0));

        assert!(tm.set_tool(ToolKind::Circle));
        assert!(!tm.is_active());
        assert!(tm.end(Point::new(5.0, 5.0)).is_none());
        assert!(!tm.set_tool(ToolKind::Pen));
    }

    #[test]
    fn test_idle_ignores_samples() {
        let mut tm = ToolManager::new();
        assert!(tm.update(Point::new(3.0, 3.0)).is_none());
        assert!(tm.end(Point::new(3.0, 3.0)).is_none());
        assert!(tm.preview_action().is_none());
    }

    #[test]
    fn test_tool_kind_serde_names() {
        let json = serde_json::to_string(&ToolKind::Rectangle).unwrap();
        assert_eq!(json, "\"rectangle\"");
        let tool: ToolKind = serde_json::from_str("\"eraser\"").unwrap();
        assert_eq!(tool, ToolKind::Eraser);
        assert_eq!(ToolKind::ALL.len(), 5);
    }
}
