//! Functional overlays: colormapped scalar fields whose opacity follows the
//! normalised value, so weak signal fades into the structural image below.

use ndarray::{Array, ArrayBase, ArrayD, Data, Dimension, IxDyn, RemoveAxis};
use tracing::debug;

use medvis_core::image::pack_rgba;
use medvis_core::{Algorithm, Error, Result, Rgba, Voxel};

use crate::colormap::Colormap;
use crate::scheme::ColorScheme;

/// Parameters for normalising a scalar field before colour lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct BlendParams {
    /// Value mapped to 0 (transparent). `None` uses the field minimum.
    pub vmin: Option<f64>,
    /// Value mapped to 1 (opaque). `None` uses the field maximum.
    pub vmax: Option<f64>,
    /// Exponent applied after clamping; 1 leaves contrast unchanged.
    pub gamma: f64,
}

impl Default for BlendParams {
    fn default() -> Self {
        Self {
            vmin: None,
            vmax: None,
            gamma: 1.0,
        }
    }
}

impl BlendParams {
    /// Params with an explicit value range.
    pub fn with_range(vmin: f64, vmax: f64) -> Self {
        Self {
            vmin: Some(vmin),
            vmax: Some(vmax),
            ..Self::default()
        }
    }

    /// Set the gamma exponent.
    pub fn gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }
}

/// Minimum and maximum of the finite values in `field`, or `None` if there are none.
pub fn data_range<S, D>(field: &ArrayBase<S, D>) -> Option<(f64, f64)>
where
    S: Data,
    S::Elem: Voxel,
    D: Dimension,
{
    field
        .iter()
        .map(|v| v.to_f64())
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Resolve the `[vmin, vmax]` range, filling unset bounds from the data.
pub fn resolve_range<S, D>(field: &ArrayBase<S, D>, params: &BlendParams) -> Result<(f64, f64)>
where
    S: Data,
    S::Elem: Voxel,
    D: Dimension,
{
    let (vmin, vmax) = match (params.vmin, params.vmax) {
        (Some(lo), Some(hi)) => (lo, hi),
        (lo, hi) => {
            let (data_lo, data_hi) = data_range(field).ok_or(Error::EmptyInput)?;
            (lo.unwrap_or(data_lo), hi.unwrap_or(data_hi))
        }
    };

    if !vmin.is_finite() || !vmax.is_finite() || vmin == vmax {
        return Err(Error::InvalidRange { vmin, vmax });
    }
    Ok((vmin, vmax))
}

/// Normalise `field` to `[0, 1]` and apply gamma.
///
/// NaN elements stay NaN; everything else lands in `[0, 1]`. A range with
/// `vmax < vmin` is accepted and inverts the ramp.
pub fn normalise<S, D>(field: &ArrayBase<S, D>, params: &BlendParams) -> Result<Array<f64, D>>
where
    S: Data,
    S::Elem: Voxel,
    D: Dimension,
{
    let gamma = params.gamma;
    if !gamma.is_finite() || gamma <= 0.0 {
        return Err(Error::InvalidParameter {
            name: "gamma",
            value: gamma.to_string(),
            reason: "gamma must be finite and positive".to_string(),
        });
    }

    let (vmin, vmax) = resolve_range(field, params)?;
    let span = vmax - vmin;

    Ok(field.mapv(|v| {
        let t = ((v.to_f64() - vmin) / span).clamp(0.0, 1.0);
        if gamma == 1.0 {
            t
        } else {
            t.powf(gamma)
        }
    }))
}

/// Apply a colormap to a scalar field, using the normalised values as alpha.
///
/// Returns an RGBA image with `field.ndim() + 1` axes; the trailing axis
/// holds the four channels. Elements at `vmin` are fully transparent and
/// elements at `vmax` fully opaque. NaN elements become transparent black.
///
/// # Arguments
/// * `field` - Functional imaging data
/// * `cmap` - Colormap, e.g. a [`ColorScheme`] or the result of [`get_cmap`](crate::get_cmap)
/// * `vmin`, `vmax` - Dynamic range; `None` uses the data minimum/maximum
/// * `gamma` - Contrast exponent; 1 applies no transformation
pub fn apply_cmap_with_blend<S, D, C>(
    field: &ArrayBase<S, D>,
    cmap: &C,
    vmin: Option<f64>,
    vmax: Option<f64>,
    gamma: f64,
) -> Result<Array<f64, D::Larger>>
where
    S: Data,
    S::Elem: Voxel,
    D: Dimension,
    D::Larger: RemoveAxis,
    C: Colormap + ?Sized,
{
    apply_cmap_with_blend_params(field, cmap, &BlendParams { vmin, vmax, gamma })
}

/// [`apply_cmap_with_blend`] taking a [`BlendParams`].
pub fn apply_cmap_with_blend_params<S, D, C>(
    field: &ArrayBase<S, D>,
    cmap: &C,
    params: &BlendParams,
) -> Result<Array<f64, D::Larger>>
where
    S: Data,
    S::Elem: Voxel,
    D: Dimension,
    D::Larger: RemoveAxis,
    C: Colormap + ?Sized,
{
    let t = normalise(field, params)?;
    debug!(
        shape = ?field.shape(),
        cmap = cmap.name(),
        vmin = ?params.vmin,
        vmax = ?params.vmax,
        gamma = params.gamma,
        "blending functional overlay"
    );

    let pixels = t.mapv(|t| {
        if t.is_nan() {
            Rgba::TRANSPARENT
        } else {
            cmap.rgba(t).with_alpha(t)
        }
    });
    pack_rgba(&pixels)
}

/// Apply a colormap without touching alpha, e.g. to render the structural
/// image a functional overlay is composited onto.
pub fn apply_cmap<S, D, C>(
    field: &ArrayBase<S, D>,
    cmap: &C,
    vmin: Option<f64>,
    vmax: Option<f64>,
) -> Result<Array<f64, D::Larger>>
where
    S: Data,
    S::Elem: Voxel,
    D: Dimension,
    D::Larger: RemoveAxis,
    C: Colormap + ?Sized,
{
    let params = BlendParams {
        vmin,
        vmax,
        gamma: 1.0,
    };
    let t = normalise(field, &params)?;
    debug!(shape = ?field.shape(), cmap = cmap.name(), "applying colormap");

    let pixels = t.mapv(|t| {
        if t.is_nan() {
            Rgba::TRANSPARENT
        } else {
            cmap.rgba(t)
        }
    });
    pack_rgba(&pixels)
}

/// Functional overlay operation bound to a colormap
#[derive(Debug, Clone, Default)]
pub struct BlendOverlay<C = ColorScheme> {
    pub cmap: C,
}

impl<C: Colormap> BlendOverlay<C> {
    pub fn new(cmap: C) -> Self {
        Self { cmap }
    }
}

impl<C: Colormap> Algorithm for BlendOverlay<C> {
    type Input = ArrayD<f64>;
    type Output = Array<f64, IxDyn>;
    type Params = BlendParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "BlendOverlay"
    }

    fn description(&self) -> &'static str {
        "Colormap a scalar field with the normalised value as alpha"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        apply_cmap_with_blend_params(&input, &self.cmap, &params)
    }
}
