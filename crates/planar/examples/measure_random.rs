//! Print measurements of a few sampled contours for quick visual sanity.
//!
//! Usage:
//!   cargo run -p planar --example measure_random -- measure
//!   cargo run -p planar --example measure_random -- contains

use planar::contour::rand::{draw_contour_radial, RadialCfg, ReplayToken, VertexCount};
use planar::Pt2;

fn main() {
    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "measure".to_string());
    match mode.as_str() {
        "measure" => show_measurements(),
        "contains" => show_containment(),
        _ => {
            eprintln!("usage: measure_random [measure|contains]");
        }
    }
}

fn show_measurements() {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 5, max: 25 },
        ..RadialCfg::default()
    };
    for index in 0..5 {
        let c = draw_contour_radial(cfg, ReplayToken { seed: 2026, index });
        let b = c.bounds().unwrap();
        println!(
            "sample {index}: n={}, area={:.4}, perimeter={:.4}, bounds=({:.2},{:.2},{:.2},{:.2})",
            c.len(),
            c.area().unwrap(),
            c.perimeter().unwrap(),
            b.x,
            b.y,
            b.width,
            b.height,
        );
    }
}

fn show_containment() {
    let c = draw_contour_radial(RadialCfg::default(), ReplayToken { seed: 2026, index: 0 });
    for &(x, y) in &[(0.0, 0.0), (0.5, 0.5), (2.0, 2.0)] {
        println!("({x}, {y}) -> {:?}", c.contains(Pt2::new(x, y)));
    }
}
