//! Binary morphology for n-dimensional masks
//!
//! - **Structuring elements**: connectivity-based boxes of any rank, or
//!   custom footprints
//! - **Erosion**: shrinks set regions by one layer of neighbours per pass
//!
//! [`MorphologyEngine`] is the seam the mask operations erode through; the
//! built-in [`BinaryMorphology`] engine covers the common case.

mod element;
mod erode;

pub use element::StructuringElement;
pub use erode::{
    binary_erosion, binary_erosion_iterations, BinaryErosion, BinaryMorphology, ErosionParams,
    MorphologyEngine,
};
