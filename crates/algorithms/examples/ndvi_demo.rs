//! NDVI demo: synthetic scene with vegetation, soil and water
//!
//! Builds a 120x160 pair of NIR/Red bands in Sentinel-2 L2A scaling
//! (reflectance * 10000) with three land covers:
//! - Left third: dense vegetation (high NIR, low Red)
//! - Middle third: bare soil (NIR slightly above Red)
//! - Right third: open water (NIR below Red)
//! - A block of zero-filled cells along the bottom edge (no signal)
//!
//! Then computes NDVI and prints per-cover statistics.
//!
//! Run:
//!   cargo run -p verdex-algorithms --example ndvi_demo -- --verbose

use ndarray::{s, Array2, ArrayView2};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use verdex_algorithms::imagery::calculate_ndvi;

const ROWS: usize = 120;
const COLS: usize = 160;

fn main() {
    let verbose = std::env::args().any(|a| a == "-v" || a == "--verbose");
    setup_logging(verbose);

    // --- 1. Build synthetic bands ---
    let (nir, red) = build_synthetic_scene();
    info!("Synthetic scene: {}x{}", COLS, ROWS);

    // --- 2. NDVI ---
    let ndvi = match calculate_ndvi(&nir, &red) {
        Ok(out) => out,
        Err(e) => {
            eprintln!("NDVI failed: {}", e);
            std::process::exit(1);
        }
    };
    let ndvi = match ndvi.into_dimensionality::<ndarray::Ix2>() {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("unexpected output shape: {}", e);
            std::process::exit(1);
        }
    };

    // --- 3. Per-cover summary ---
    let third = COLS / 3;
    print_stats("vegetation", ndvi.slice(s![..ROWS - 10, ..third]));
    print_stats("bare soil", ndvi.slice(s![..ROWS - 10, third..2 * third]));
    print_stats("water", ndvi.slice(s![..ROWS - 10, 2 * third..]));
    print_stats("no signal", ndvi.slice(s![ROWS - 10.., ..]));
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("logging disabled: {}", e);
    }
}

fn build_synthetic_scene() -> (Array2<u16>, Array2<u16>) {
    let third = COLS / 3;
    let texture = |row: usize, col: usize| ((row * 31 + col * 17) % 97) as u16;

    let nir = Array2::from_shape_fn((ROWS, COLS), |(row, col)| {
        if row >= ROWS - 10 {
            0
        } else if col < third {
            3800 + texture(row, col)
        } else if col < 2 * third {
            2300 + texture(row, col)
        } else {
            300 + texture(row, col)
        }
    });
    let red = Array2::from_shape_fn((ROWS, COLS), |(row, col)| {
        if row >= ROWS - 10 {
            0
        } else if col < third {
            500 + texture(row, col)
        } else if col < 2 * third {
            1900 + texture(row, col)
        } else {
            700 + texture(row, col)
        }
    });

    (nir, red)
}

fn print_stats(label: &str, values: ArrayView2<'_, f64>) {
    let n = values.len().max(1) as f64;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.sum() / n;
    println!(
        "  {:<11} min={:>7.4}  max={:>7.4}  mean={:>7.4}",
        label, min, max, mean
    );
}
