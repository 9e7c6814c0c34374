//! Renders a short scripted session offscreen and writes PPM snapshots of
//! a MOVE frame and a CLICK frame.

use std::time::{Duration, Instant};

use glam::Vec2;
use hand_paint::{hud_lines, paint_frame, Raster};
use pointer_sim::{DemoState, PointerInput};

const FRAME: Duration = Duration::from_millis(16);

fn main() {
    println!("\n=== Offscreen Frame Painter Demo ===\n");

    let base = Instant::now();
    let mut demo = DemoState::new(800.0, 2.0, base);
    let mut raster = Raster::new(demo.geometry());

    println!(
        "1. Surface: {}x{} logical, {}x{} physical (scale {})",
        demo.geometry().logical_size().x,
        demo.geometry().logical_size().y,
        raster.width(),
        raster.height(),
        raster.scale()
    );

    // ── settle the cursor near the right edge ────────────────────────────
    demo.apply(PointerInput::Moved(Vec2::new(620.0, 180.0)), base);
    for i in 1..=90 {
        demo.tick(base + FRAME * i);
    }

    println!("2. MOVE frame after a 1.5s drag");
    paint_frame(&demo, &mut raster);
    for line in hud_lines(&demo) {
        println!("   {line}");
    }
    if let Err(e) = raster.write_ppm("demo_move.ppm") {
        eprintln!("[hand_paint] snapshot failed: {e}");
    } else {
        println!("   wrote demo_move.ppm");
    }

    // ── press and capture the CLICK frame ────────────────────────────────
    demo.apply(PointerInput::Pressed, base + FRAME * 91);
    demo.tick(base + FRAME * 91);

    println!("3. CLICK frame right after a press");
    paint_frame(&demo, &mut raster);
    for line in hud_lines(&demo) {
        println!("   {line}");
    }
    if let Err(e) = raster.write_ppm("demo_click.ppm") {
        eprintln!("[hand_paint] snapshot failed: {e}");
    } else {
        println!("   wrote demo_click.ppm");
    }

    println!("\nDone.");
}
