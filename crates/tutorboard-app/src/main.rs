//! Headless demo: draws a short scripted sketch and writes the exported image.

use clap::Parser;
use kurbo::{Point, Size};
use std::path::PathBuf;
use tutorboard_app::{KeyPress, ShortcutRegistry, Whiteboard};
use tutorboard_core::{EngineConfig, MouseButton, PointerEvent, SurfaceGeometry, ToolKind};

#[derive(Parser)]
#[command(name = "tutorboard")]
#[command(about = "Draw a scripted whiteboard sketch and export it as PNG")]
struct Args {
    /// Engine config file (JSON); defaults are used when omitted
    config: Option<PathBuf>,

    /// Where to write the exported image
    #[arg(default_value = "whiteboard.png")]
    output: PathBuf,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    log::info!("Starting Tutorboard");

    let config = match &args.config {
        Some(path) => EngineConfig::load(path).unwrap_or_else(|e| {
            log::error!("Failed to load config from {}: {}", path.display(), e);
            EngineConfig::default()
        }),
        None => EngineConfig::default(),
    };
    let output = args.output;

    ShortcutRegistry::print_all();

    let mut whiteboard = Whiteboard::new(config);
    let geometry = SurfaceGeometry::new(Point::new(0.0, 0.0), Size::new(480.0, 320.0), 2.0);
    if !whiteboard.mount(geometry) {
        log::error!("Could not mount the whiteboard surface");
        std::process::exit(1);
    }
    whiteboard.set_focused(true);

    sketch(&mut whiteboard);
    whiteboard.set_caption("Right triangle with its circumcircle");

    let submission = match whiteboard.commit() {
        Ok(submission) => submission,
        Err(e) => {
            log::error!("Commit failed: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = std::fs::write(&output, &submission.image.bytes) {
        log::error!("Failed to write {}: {}", output.display(), e);
        std::process::exit(1);
    }
    match submission.to_json() {
        Ok(json) => println!(
            "Wrote {} ({} bytes), message payload {} bytes, caption {:?}",
            output.display(),
            submission.image.len(),
            json.len(),
            submission.caption
        ),
        Err(e) => log::error!("Failed to serialize message: {}", e),
    }
}

/// Triangle, circle, a scribble that gets undone and redone, then a rubbed-out corner.
fn sketch(whiteboard: &mut Whiteboard) {
    whiteboard.select_tool(ToolKind::Line);
    drag(whiteboard, &[(120.0, 240.0), (360.0, 240.0)]);
    drag(whiteboard, &[(360.0, 240.0), (360.0, 80.0)]);
    drag(whiteboard, &[(360.0, 80.0), (120.0, 240.0)]);

    whiteboard.select_tool(ToolKind::Circle);
    drag(whiteboard, &[(240.0, 160.0), (300.0, 160.0), (384.0, 160.0)]);

    whiteboard.select_tool(ToolKind::Rectangle);
    drag(whiteboard, &[(360.0, 240.0), (345.0, 225.0)]);

    whiteboard.select_tool(ToolKind::Pen);
    let scribble: Vec<(f64, f64)> = (0..24)
        .map(|i| {
            let x = 40.0 + i as f64 * 6.0;
            let y = 40.0 + if i % 2 == 0 { 0.0 } else { 12.0 };
            (x, y)
        })
        .collect();
    drag(whiteboard, &scribble);
    whiteboard.handle_key(&KeyPress::new("z").with_ctrl());
    whiteboard.handle_key(&KeyPress::new("y").with_ctrl());

    whiteboard.select_tool(ToolKind::Eraser);
    drag(whiteboard, &[(40.0, 40.0), (52.0, 46.0), (64.0, 52.0)]);
}

/// Press at the first point, move through the rest, release at the last.
fn drag(whiteboard: &mut Whiteboard, points: &[(f64, f64)]) {
    let Some((&(x, y), rest)) = points.split_first() else {
        return;
    };
    whiteboard.handle_pointer(PointerEvent::Down {
        position: Point::new(x, y),
        button: MouseButton::Left,
    });
    for &(x, y) in rest {
        whiteboard.handle_pointer(PointerEvent::Move { position: Point::new(x, y) });
    }
    let (x, y) = points[points.len() - 1];
    whiteboard.handle_pointer(PointerEvent::Up { position: Point::new(x, y) });
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["tutorboard"]).unwrap();
        assert!(args.config.is_none());
        assert_eq!(args.output, PathBuf::from("whiteboard.png"));
    }

    #[test]
    fn test_args_positional() {
        let args = Args::try_parse_from(["tutorboard", "board.json", "out.png"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("board.json")));
        assert_eq!(args.output, PathBuf::from("out.png"));
    }

    #[test]
    fn test_help_is_not_a_config_path() {
        let err = Args::try_parse_from(["tutorboard", "--help"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);

        assert!(Args::try_parse_from(["tutorboard", "a.json", "b.png", "extra"]).is_err());
    }
}
