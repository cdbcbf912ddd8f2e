//! # medvis algorithms
//!
//! Mask and legend helpers for medical-image overlays.
//!
//! ## Modules
//!
//! - **morphology**: structuring elements and n-dimensional binary erosion
//! - **mask**: mask colouring and erosion-based outlines
//! - **legend**: colour/label legends on an explicit plotting surface
//!
//! Colormap overlays live in `medvis-colormap`.

pub mod legend;
pub mod mask;
pub mod morphology;

mod maybe_rayon;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::legend::{
        create_legend, create_legend_with, Axes, Legend, LegendEntry, LegendOptions,
        LegendSurface, Location, Marker, MarkerHandle,
    };
    pub use crate::mask::{
        apply_colour_to_mask, apply_colour_to_mask_with, create_outline, create_outline_with,
        MaskColourParams, MaskColouriser, Outline, OutlineExtractor, OutlineParams,
    };
    pub use crate::morphology::{
        binary_erosion, binary_erosion_iterations, BinaryErosion, BinaryMorphology,
        ErosionParams, MorphologyEngine, StructuringElement,
    };
    pub use medvis_core::prelude::*;
}
