// Copyright 2025 the PipeSection Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a pipe cross-section to SVG and replays clicks against it.
//!
//! ```text
//! pipe_section_demo [--scene scene.json] [--out section.svg] [X,Y ...]
//! ```
//!
//! Without `--scene` a built-in sample is drawn. Each `X,Y` is a click in
//! device pixels relative to the canvas' top-left corner.

mod svg;

use std::fmt;
use std::process::ExitCode;

use kurbo::Point;
use pipe_section::{DisplayList, PipeSection, Primitive, Scene, ViewConfig, ViewConfigError};

const DEFAULT_OUT: &str = "pipe_section_demo.svg";

#[derive(Debug)]
enum DemoError {
    Io(std::io::Error),
    Json(serde_json::Error),
    View(ViewConfigError),
    Usage(String),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "i/o error: {err}"),
            Self::Json(err) => write!(f, "invalid scene: {err}"),
            Self::View(err) => write!(f, "invalid view: {err}"),
            Self::Usage(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for DemoError {}

impl From<std::io::Error> for DemoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for DemoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<ViewConfigError> for DemoError {
    fn from(err: ViewConfigError) -> Self {
        Self::View(err)
    }
}

#[derive(Debug, Default, PartialEq)]
struct Args {
    scene: Option<String>,
    out: Option<String>,
    clicks: Vec<Point>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, DemoError> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--scene" => {
                parsed.scene = Some(
                    args.next()
                        .ok_or_else(|| DemoError::Usage("--scene needs a path".into()))?,
                );
            }
            "--out" => {
                parsed.out = Some(
                    args.next()
                        .ok_or_else(|| DemoError::Usage("--out needs a path".into()))?,
                );
            }
            click => parsed.clicks.push(parse_click(click)?),
        }
    }
    Ok(parsed)
}

fn parse_click(s: &str) -> Result<Point, DemoError> {
    let bad = || DemoError::Usage(format!("expected a click as X,Y, got `{s}`"));
    let (x, y) = s.split_once(',').ok_or_else(bad)?;
    let x: f64 = x.trim().parse().map_err(|_| bad())?;
    let y: f64 = y.trim().parse().map_err(|_| bad())?;
    Ok(Point::new(x, y))
}

/// A buried pipe on its bedding, under an uneven ground line.
fn sample_scene() -> Scene {
    Scene::new()
        .with(Primitive::arc((2.0, 3.0), 2.5))
        .with(Primitive::rect((-1.0, 0.5), 6.0, 1.5))
        .with(Primitive::line([(-5.0, 9.0), (4.0, 10.0), (13.0, 9.0)]))
}

fn sample_view() -> ViewConfig {
    ViewConfig::new(400.0, 400.0)
        .with_padding(20.0)
        .with_scale(1.0)
        .with_ratio(20.0)
        .with_min(-5.0, -5.0)
}

fn load_scene(path: Option<&str>) -> Result<Scene, DemoError> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&json)?)
        }
        None => Ok(sample_scene()),
    }
}

fn run(args: Args) -> Result<(), DemoError> {
    let scene = load_scene(args.scene.as_deref())?;
    let view = sample_view();

    let mut canvas = DisplayList::new();
    let mut section = PipeSection::draw(view, scene, &mut canvas)?;
    section.on_click(|event| {
        println!(
            "  hit {} #{} at ({}, {})",
            event.primitive.kind(),
            event.index,
            event.logical.x,
            event.logical.y
        );
    });

    let out = args.out.as_deref().unwrap_or(DEFAULT_OUT);
    std::fs::write(out, svg::to_svg_string(view.canvas_rect(), canvas.commands()))?;
    println!("wrote {out}");

    for click in args.clicks {
        println!("click ({}, {})", click.x, click.y);
        if section.handle_click(click).is_none() {
            let logical = section.mapper().to_logical(click);
            println!("  nothing at ({}, {})", logical.x, logical.y);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let result = parse_args(std::env::args().skip(1)).and_then(run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pipe_section_demo: {err}");
            ExitCode::FAILURE
        }
    }
}
