//! Outline demo: synthetic segmentation overlay
//!
//! Builds a 40x40 slice with two segmented structures, then:
//!   1. prints the width-1 and width-2 outlines as ASCII art
//!   2. colours each outline and composites it, with a blended functional
//!      overlay, on a grey rendering of the slice
//!   3. attaches a legend for the two structures and renders its swatches
//!
//! Run:
//!   cargo run -p medvis-algorithms --example outline_demo

use ndarray::Array2;

use medvis_algorithms::legend::{create_legend, Axes, LegendOptions, Location};
use medvis_algorithms::mask::create_outline;
use medvis_colormap::{apply_cmap, apply_cmap_with_blend, ColorScheme};
use medvis_core::image::{alpha_channel, composite_over, to_rgba8};

const SIZE: usize = 40;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    let anatomy = build_anatomy();
    let ventricle = disc(16.0, 14.0, 7.0);
    let lesion = disc(26.0, 25.0, 5.0);

    // --- 1. ASCII outlines ---
    for width in [1, 2] {
        let outline = create_outline(&ventricle, width, None)
            .expect("outline failed")
            .into_mask()
            .expect("uncoloured outline");
        println!("\nVentricle outline, width {width}:");
        print_ascii(&outline);
    }

    // --- 2. Composite ---
    let base = apply_cmap(&anatomy, &ColorScheme::Gray, None, None).expect("grey base failed");
    let signal = lesion.mapv(|m| if m { 6.0 } else { 0.0 });
    let functional = apply_cmap_with_blend(&signal, &ColorScheme::Hot, Some(0.0), Some(8.0), 0.8)
        .expect("functional overlay failed");

    let mut stacked = composite_over(&base, &functional).expect("composite failed");
    for (mask, colour) in [(&ventricle, "tab:blue"), (&lesion, "tab:red")] {
        let outline = create_outline(mask, 2, Some(colour.into()))
            .expect("outline failed")
            .into_rgba()
            .expect("coloured outline");
        stacked = composite_over(&stacked, &outline).expect("composite failed");
    }

    let display = to_rgba8(&stacked);
    let opaque = alpha_channel(&stacked)
        .expect("alpha")
        .iter()
        .filter(|&&a| a >= 1.0)
        .count();
    println!(
        "\nComposite: {:?} RGBA, {opaque}/{} opaque pixels, centre = {:?}",
        stacked.shape(),
        SIZE * SIZE,
        display.slice(ndarray::s![SIZE / 2, SIZE / 2, ..]).to_vec()
    );

    // --- 3. Legend ---
    let mut axes = Axes::new();
    let legend = create_legend(
        &["tab:blue", "tab:red"],
        &["Ventricle", "Lesion"],
        &mut axes,
        LegendOptions::default()
            .location(Location::UpperRight)
            .title("Segmentation"),
    )
    .expect("legend failed");
    for entry in legend.entries() {
        println!("  {}  {}", entry.handle.face_colour, entry.label);
    }
    let swatches = legend.render_swatches(12).expect("swatches failed");
    println!("Legend swatches: {:?}", swatches.shape());
}

/// Smooth brightness ramp standing in for a structural scan
fn build_anatomy() -> Array2<f64> {
    Array2::from_shape_fn((SIZE, SIZE), |(r, c)| {
        let (y, x) = (r as f64 / SIZE as f64, c as f64 / SIZE as f64);
        400.0 + 300.0 * (std::f64::consts::PI * y).sin() * (std::f64::consts::PI * x).sin()
    })
}

fn disc(cy: f64, cx: f64, radius: f64) -> Array2<bool> {
    Array2::from_shape_fn((SIZE, SIZE), |(r, c)| {
        (r as f64 - cy).powi(2) + (c as f64 - cx).powi(2) <= radius * radius
    })
}

fn print_ascii(outline: &Array2<f64>) {
    for row in outline.rows() {
        let line: String = row.iter().map(|&v| if v > 0.0 { '#' } else { '.' }).collect();
        println!("  {line}");
    }
}
