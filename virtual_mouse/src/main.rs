//! virtual_mouse — interactive entry point.

use virtual_mouse::about;
use virtual_mouse::app::{run, DemoConfig};
use virtual_mouse::input::KEY_LEGEND;
use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║            Virtual Mouse — Gesture Tracking Demo             ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();
    println!("  {}", about::TAGLINE);
    println!();

    if args.iter().any(|a| a == "--info") {
        about::print_info();
        return;
    }

    let mut cfg = if args.iter().any(|a| a == "--quick") {
        println!("  Quick-start: 800 px surface, 1× density, tracking on\n");
        DemoConfig::default()
    } else {
        configure_interactively()
    };

    if let Some(w) = flag_value(&args, "--width") {
        cfg.container_width = w.max(160.0).min(3840.0);
    }
    if let Some(d) = flag_value(&args, "--dpr") {
        cfg.device_pixel_ratio = d.max(1.0).min(2.0);
    }

    println!();
    println!("  {}", KEY_LEGEND);
    println!();
    println!("  Opening visualizer window…");
    println!();

    if let Err(e) = run(cfg) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn configure_interactively() -> DemoConfig {
    let width: f32 = {
        let w: f32 = read_line("  Surface width px (default 800): ")
            .trim().parse().unwrap_or(800.0);
        w.max(160.0).min(3840.0)
    };
    let dpr: f32 = {
        let d: f32 = read_line("  Device pixel ratio 1–2 (default 1): ")
            .trim().parse().unwrap_or(1.0);
        d.max(1.0).min(2.0)
    };
    let start_enabled = !matches!(read_line("  Start paused? (y/N): ").trim(), "y" | "Y");

    DemoConfig {
        container_width: width,
        device_pixel_ratio: dpr,
        start_enabled,
        ..DemoConfig::default()
    }
}

/// `--width 640` style value flags; returns None when absent or unparsable.
fn flag_value(args: &[String], name: &str) -> Option<f32> {
    let at = args.iter().position(|a| a == name)?;
    args.get(at + 1)?.trim().parse().ok()
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf
}
