//! CLI tool for spangrid - computes a layout from a scene description and
//! outputs the frames as JSON
//!
//! Usage:
//!   spangrid_cli <scene.json>              # Output JSON to stdout
//!   spangrid_cli <scene.json> -o out.json  # Output JSON to file

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use serde::Serialize;

use spangrid::{Frame, LayoutEngine, LayoutScene, LayoutSummary, Rect};

#[derive(Serialize)]
struct LayoutDump<'a> {
    summary: &'a LayoutSummary,
    frames: Vec<&'a Frame>,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: spangrid_cli <scene.json> [-o output.json]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = if args.len() > 3 && args[2] == "-o" {
        Some(&args[3])
    } else {
        None
    };

    // Read the scene description
    let data = match fs::read_to_string(input_path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    let scene: LayoutScene = match serde_json::from_str(&data) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error parsing scene: {}", e);
            std::process::exit(1);
        }
    };

    // Run the pass
    let mut engine = match LayoutEngine::new(scene.config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error in configuration: {}", e);
            std::process::exit(1);
        }
    };
    engine.set_available_width(scene.width);

    let summary = match engine.compute_layout(&scene.item_counts(), &scene) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error computing layout: {}", e);
            std::process::exit(1);
        }
    };

    for violation in &summary.violations {
        eprintln!("Warning: section {}: {}", violation.section, violation.kind);
    }

    // Every frame lies inside the content rect
    let content = engine.content_size();
    let frames = engine.frames_intersecting(Rect::new(0.0, 0.0, content.width, content.height));

    let json = match serde_json::to_string_pretty(&LayoutDump {
        summary: &summary,
        frames,
    }) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
