//! Prints the landmark table and sketches one computed layout as ASCII.

use glam::Vec2;
use hand_model::{layout, Landmark, BASE_OFFSETS, CONNECTIONS, FINGERTIPS};

fn main() {
    println!("\n=== Hand Model Demo ===\n");

    // ── 1. Landmark table ─────────────────────────────────────────────────
    println!("1. The 21 landmarks");
    for lm in Landmark::all() {
        let tip = if lm.is_fingertip() { "  (fingertip)" } else { "" };
        let base = BASE_OFFSETS[lm.index()];
        println!(
            "   {:>2}  {:<11} offset ({:>5.2}, {:>5.2}){}",
            lm.index(),
            lm.name(),
            base.x,
            base.y,
            tip
        );
    }
    println!();

    // ── 2. Edge list ──────────────────────────────────────────────────────
    println!("2. {} bone segments, {} fingertips", CONNECTIONS.len(), FINGERTIPS.len());
    println!();

    // ── 3. One layout, sketched ───────────────────────────────────────────
    let size = Vec2::new(64.0, 32.0);
    let points = layout(Vec2::new(32.0, 16.0), size);

    println!("3. Layout for cursor (32, 16) on a 64x32 canvas");
    let mut grid = vec![vec![' '; 64]; 32];
    for (i, p) in points.iter().enumerate() {
        let (x, y) = (p.x as usize, p.y as usize);
        if x < 64 && y < 32 {
            grid[y][x] = if Landmark::from_index(i).is_some_and(|l| l.is_fingertip()) {
                'O'
            } else {
                'o'
            };
        }
    }
    for row in grid {
        let line: String = row.into_iter().collect();
        if !line.trim().is_empty() {
            println!("   |{}|", line);
        }
    }
    println!("\n   (O = fingertip, o = joint)\n");
}
