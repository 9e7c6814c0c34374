//! Drives a scripted demo session without a window: pointer drag, clicks,
//! a toggle and a resize, printing the state readout as it evolves.

use std::time::{Duration, Instant};

use glam::Vec2;
use pointer_sim::{DemoState, GesturePhase, PointerInput, INITIAL_POINTER};

const FRAME: Duration = Duration::from_millis(16);

fn show(label: &str, t_ms: u64, demo: &DemoState) {
    let s = demo.smoothed();
    println!(
        "   {:<26} t={:>4}ms  smoothed=({:6.1},{:6.1})  {:<5}  clicks={}",
        label,
        t_ms,
        s.x,
        s.y,
        demo.gesture_phase().label(),
        demo.clicks(),
    );
}

fn main() {
    println!("\n=== Pointer Simulation Demo ===\n");

    let base = Instant::now();
    let mut demo = DemoState::new(800.0, 1.0, base);
    let mut t = 0u64;
    let step = |demo: &mut DemoState, t: &mut u64| {
        *t += 16;
        demo.tick(base + FRAME * (*t / 16) as u32);
    };

    // ── 1. Cursor easing ─────────────────────────────────────────────────
    println!("1. Drag to (650, 120); the cursor eases, it never jumps");
    show("start", t, &demo);
    demo.apply(PointerInput::Moved(Vec2::new(650.0, 120.0)), base);
    for label in ["after 1 frame", "after 2 frames", "after 3 frames"] {
        step(&mut demo, &mut t);
        show(label, t, &demo);
    }
    for _ in 0..60 {
        step(&mut demo, &mut t);
    }
    show("after 1s hold", t, &demo);
    println!();

    // ── 2. Click gesture ─────────────────────────────────────────────────
    println!("2. Two quick presses; CLICK holds 300ms past the second");
    demo.apply(PointerInput::Pressed, base + FRAME * (t / 16) as u32);
    show("press #1", t, &demo);
    for _ in 0..9 {
        step(&mut demo, &mut t);
    }
    demo.apply(PointerInput::Pressed, base + FRAME * (t / 16) as u32);
    show("press #2 (+144ms)", t, &demo);
    for _ in 0..12 {
        step(&mut demo, &mut t);
    }
    show("192ms after press #2", t, &demo);
    for _ in 0..8 {
        step(&mut demo, &mut t);
    }
    show("320ms after press #2", t, &demo);
    assert_eq!(demo.gesture_phase(), GesturePhase::Move);
    println!();

    // ── 3. Pause and resume ──────────────────────────────────────────────
    println!("3. Toggle off: presses stop counting until toggled back on");
    demo.apply(PointerInput::ToggleTracking, base + FRAME * (t / 16) as u32);
    demo.apply(PointerInput::Pressed, base + FRAME * (t / 16) as u32);
    show("press while paused", t, &demo);
    demo.apply(PointerInput::ToggleTracking, base + FRAME * (t / 16) as u32);
    demo.apply(PointerInput::Pressed, base + FRAME * (t / 16) as u32);
    show("press after resume", t, &demo);
    println!();

    // ── 4. Resize ────────────────────────────────────────────────────────
    println!("4. Container resize recomputes the surface");
    let g = demo.geometry();
    println!(
        "   before: logical {}x{}  physical {:?}",
        g.logical_size().x,
        g.logical_size().y,
        g.physical_size()
    );
    demo.apply(
        PointerInput::Resized { container_width: 1100.0 },
        base + FRAME * (t / 16) as u32,
    );
    let g = demo.geometry();
    println!(
        "   after:  logical {}x{}  physical {:?}  (height capped at 500)",
        g.logical_size().x,
        g.logical_size().y,
        g.physical_size()
    );
    println!();

    // ── 5. Independent instances ─────────────────────────────────────────
    println!("5. Two demos side by side share nothing");
    let mut other = DemoState::new(400.0, 2.0, base);
    other.apply(PointerInput::Pressed, base);
    println!(
        "   demo A: clicks={}  demo B: clicks={}  B physical {:?}",
        demo.clicks(),
        other.clicks(),
        other.geometry().physical_size()
    );
    assert_eq!(other.raw(), INITIAL_POINTER);

    println!("\nDone.");
}
