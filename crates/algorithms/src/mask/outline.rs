//! Mask outlines
//!
//! The outline of a mask is the ring of set elements removed by eroding the
//! mask `width` times. It lies inside the mask, so the outer edge of the
//! outline coincides with the outer edge of each structure.

use ndarray::{Array, ArrayBase, ArrayD, Data, Dimension, IxDyn, RemoveAxis, Zip};
use tracing::debug;

use medvis_core::{Algorithm, ColourSpec, Error, Result, Voxel};

use super::colour::apply_colour_to_mask;
use crate::morphology::{BinaryMorphology, MorphologyEngine, StructuringElement};

/// Result of [`create_outline`]: a scalar ring or its coloured RGBA image.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline<D: Dimension> {
    /// Outline with values in {0, 1}, same shape as the mask
    Mask(Array<f64, D>),
    /// Coloured outline with a trailing channel axis of length 4
    Rgba(Array<f64, D::Larger>),
}

impl<D: Dimension> Outline<D> {
    pub fn is_coloured(&self) -> bool {
        matches!(self, Outline::Rgba(_))
    }

    pub fn into_mask(self) -> Option<Array<f64, D>> {
        match self {
            Outline::Mask(mask) => Some(mask),
            Outline::Rgba(_) => None,
        }
    }

    pub fn into_rgba(self) -> Option<Array<f64, D::Larger>> {
        match self {
            Outline::Mask(_) => None,
            Outline::Rgba(image) => Some(image),
        }
    }
}

/// Parameters for outline extraction
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineParams {
    /// Ring width in erosion steps
    pub width: usize,
    /// Colour for an RGBA result; `None` returns the scalar outline
    pub colour: Option<ColourSpec>,
    /// Connectivity of the erosion element (1 = face neighbours)
    pub connectivity: usize,
}

impl Default for OutlineParams {
    fn default() -> Self {
        Self {
            width: 2,
            colour: None,
            connectivity: 1,
        }
    }
}

impl OutlineParams {
    pub fn with_width(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn colour(mut self, colour: impl Into<ColourSpec>) -> Self {
        self.colour = Some(colour.into());
        self
    }
}

/// Create the outline of a mask.
///
/// # Arguments
/// * `mask` - Binary mask (nonzero = set) of any dimensionality
/// * `width` - Width of the outline in erosion steps; 0 gives an empty outline
/// * `colour` - When given, the outline is coloured with
///   [`apply_colour_to_mask`]
pub fn create_outline<S, D>(
    mask: &ArrayBase<S, D>,
    width: usize,
    colour: Option<ColourSpec>,
) -> Result<Outline<D>>
where
    S: Data,
    S::Elem: Voxel,
    D: Dimension,
    D::Larger: RemoveAxis,
{
    let params = OutlineParams {
        width,
        colour,
        ..OutlineParams::default()
    };
    create_outline_with(&BinaryMorphology, mask, &params)
}

/// [`create_outline`] eroding through `engine`.
pub fn create_outline_with<E, S, D>(
    engine: &E,
    mask: &ArrayBase<S, D>,
    params: &OutlineParams,
) -> Result<Outline<D>>
where
    E: MorphologyEngine + ?Sized,
    S: Data,
    S::Elem: Voxel,
    D: Dimension,
    D::Larger: RemoveAxis,
{
    let original = mask.mapv(|v| if v.is_set() { 1.0 } else { 0.0 });
    let element = StructuringElement::with_connectivity(mask.ndim(), params.connectivity);

    let mut inner: ArrayD<bool> = mask.mapv(|v| v.is_set()).into_dyn();
    for _ in 0..params.width {
        if !inner.iter().any(|&v| v) {
            break;
        }
        inner = engine.binary_erosion(inner.view(), &element)?;
        if inner.shape() != mask.shape() {
            return Err(Error::Shape(format!(
                "erosion returned shape {:?} for a mask of shape {:?}",
                inner.shape(),
                mask.shape()
            )));
        }
    }
    let inner = inner.into_dimensionality::<D>()?;

    // (mask - eroded) * mask
    let outline = Zip::from(&original)
        .and(&inner)
        .map_collect(|&m, &kept| (m - if kept { 1.0 } else { 0.0 }) * m);

    debug!(
        shape = ?mask.shape(),
        width = params.width,
        connectivity = params.connectivity,
        outline_cells = outline.iter().filter(|&&v| v != 0.0).count(),
        "created mask outline"
    );

    match &params.colour {
        Some(colour) => Ok(Outline::Rgba(apply_colour_to_mask(&outline, colour.clone())?)),
        None => Ok(Outline::Mask(outline)),
    }
}

/// Outline extraction algorithm
#[derive(Debug, Clone, Default)]
pub struct OutlineExtractor;

impl Algorithm for OutlineExtractor {
    type Input = ArrayD<f64>;
    type Output = Outline<IxDyn>;
    type Params = OutlineParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "OutlineExtractor"
    }

    fn description(&self) -> &'static str {
        "Boundary ring of a mask obtained by repeated binary erosion"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        create_outline_with(&BinaryMorphology, &input, &params)
    }
}
