//! RGBA image helpers.
//!
//! An RGBA image is an `f64` array whose trailing axis has length 4 and
//! holds the red, green, blue and alpha channels of the element addressed
//! by the leading axes.

use ndarray::{stack, Array, ArrayBase, Axis, Data, Dimension, RemoveAxis, Zip};

use crate::colour::{quantise, Rgba};
use crate::error::{Error, Result};

/// Number of channels on the trailing axis of an RGBA image
pub const CHANNELS: usize = 4;

/// Pack per-element colours into an RGBA image, appending the channel axis.
pub fn pack_rgba<S, D>(pixels: &ArrayBase<S, D>) -> Result<Array<f64, D::Larger>>
where
    S: Data<Elem = Rgba>,
    D: Dimension,
    D::Larger: RemoveAxis,
{
    let r = pixels.mapv(|c| c.r);
    let g = pixels.mapv(|c| c.g);
    let b = pixels.mapv(|c| c.b);
    let a = pixels.mapv(|c| c.a);
    let image = stack(
        Axis(pixels.ndim()),
        &[r.view(), g.view(), b.view(), a.view()],
    )?;
    Ok(image)
}

/// Check that `shape` ends in a channel axis and return that axis.
pub fn channel_axis(shape: &[usize]) -> Result<Axis> {
    match shape.last() {
        Some(&CHANNELS) => Ok(Axis(shape.len() - 1)),
        _ => Err(Error::Shape(format!(
            "expected a trailing channel axis of length {CHANNELS}, got shape {shape:?}"
        ))),
    }
}

/// Copy out the alpha channel of an RGBA image.
pub fn alpha_channel<S, D>(image: &ArrayBase<S, D>) -> Result<Array<f64, D::Smaller>>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    let axis = channel_axis(image.shape())?;
    Ok(image.index_axis(axis, CHANNELS - 1).to_owned())
}

/// Quantise an RGBA image to 8-bit channels for display buffers.
///
/// Components are clamped to `[0, 1]`; NaN becomes 0.
pub fn to_rgba8<S, D>(image: &ArrayBase<S, D>) -> Array<u8, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    image.mapv(quantise)
}

/// Porter-Duff "over": lay `overlay` on top of `base`.
///
/// Both images must have the same shape with a trailing channel axis.
/// Channels are straight (not premultiplied) alpha on input and output.
pub fn composite_over<S1, S2, D>(
    base: &ArrayBase<S1, D>,
    overlay: &ArrayBase<S2, D>,
) -> Result<Array<f64, D>>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    if base.shape() != overlay.shape() {
        return Err(Error::Shape(format!(
            "cannot composite shape {:?} over shape {:?}",
            overlay.shape(),
            base.shape()
        )));
    }
    let axis = channel_axis(base.shape())?;

    let mut out = base.to_owned();
    Zip::from(out.lanes_mut(axis))
        .and(overlay.lanes(axis))
        .for_each(|mut dst, src| {
            let src_a = src[3];
            let dst_a = dst[3] * (1.0 - src_a);
            let out_a = src_a + dst_a;
            for c in 0..3 {
                dst[c] = if out_a > 0.0 {
                    (src[c] * src_a + dst[c] * dst_a) / out_a
                } else {
                    0.0
                };
            }
            dst[3] = out_a;
        });
    Ok(out)
}
