//! Mask colouring: set elements take one colour, the rest turn transparent.

use ndarray::{Array, ArrayBase, ArrayD, Data, Dimension, IxDyn, RemoveAxis};
use tracing::debug;

use medvis_core::image::pack_rgba;
use medvis_core::{Algorithm, ColourResolver, ColourSpec, Error, NamedColours, Result, Rgba, Voxel};

/// Colour a binary mask.
///
/// Every set (nonzero) element takes exactly the resolved colour, including
/// its alpha; every unset element becomes `[0, 0, 0, 0]`. The result has a
/// trailing channel axis of length 4.
pub fn apply_colour_to_mask<S, D>(
    mask: &ArrayBase<S, D>,
    colour: impl Into<ColourSpec>,
) -> Result<Array<f64, D::Larger>>
where
    S: Data,
    S::Elem: Voxel,
    D: Dimension,
    D::Larger: RemoveAxis,
{
    apply_colour_to_mask_with(&NamedColours, mask, colour)
}

/// [`apply_colour_to_mask`] resolving colour names through `resolver`.
pub fn apply_colour_to_mask_with<R, S, D>(
    resolver: &R,
    mask: &ArrayBase<S, D>,
    colour: impl Into<ColourSpec>,
) -> Result<Array<f64, D::Larger>>
where
    R: ColourResolver + ?Sized,
    S: Data,
    S::Elem: Voxel,
    D: Dimension,
    D::Larger: RemoveAxis,
{
    let rgba = Into::<ColourSpec>::into(colour).resolve_with(resolver)?;
    debug!(shape = ?mask.shape(), colour = %rgba, "colouring mask");

    let pixels = mask.mapv(|v| if v.is_set() { rgba } else { Rgba::TRANSPARENT });
    pack_rgba(&pixels)
}

/// Parameters for mask colouring
#[derive(Debug, Clone, PartialEq)]
pub struct MaskColourParams {
    pub colour: ColourSpec,
}

impl Default for MaskColourParams {
    fn default() -> Self {
        Self {
            colour: ColourSpec::from("tab:blue"),
        }
    }
}

/// Mask colouring algorithm
#[derive(Debug, Clone, Default)]
pub struct MaskColouriser;

impl Algorithm for MaskColouriser {
    type Input = ArrayD<f64>;
    type Output = Array<f64, IxDyn>;
    type Params = MaskColourParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "MaskColouriser"
    }

    fn description(&self) -> &'static str {
        "Colour set mask elements and make the rest transparent"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        apply_colour_to_mask(&input, params.colour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medvis_core::image::alpha_channel;
    use ndarray::{arr1, arr2, Array3, Axis};

    #[test]
    fn test_set_and_unset_pixels() {
        let mask = arr2(&[[0, 1], [1, 0]]);
        let image = apply_colour_to_mask(&mask, "red").unwrap();
        assert_eq!(image.shape(), &[2, 2, 4]);

        for ((r, c), &m) in mask.indexed_iter() {
            let px = image.slice(ndarray::s![r, c, ..]).to_vec();
            if m != 0 {
                assert_eq!(px, vec![1.0, 0.0, 0.0, 1.0]);
            } else {
                assert_eq!(px, vec![0.0; 4]);
            }
        }
    }

    #[test]
    fn test_colour_alpha_is_kept() {
        let mask = arr1(&[true, false]);
        let image = apply_colour_to_mask(&mask, [0.0, 0.0, 1.0, 0.4]).unwrap();
        assert_eq!(alpha_channel(&image).unwrap(), arr1(&[0.4, 0.0]));
    }

    #[test]
    fn test_float_mask_any_nonzero_is_set() {
        let mask = arr1(&[0.0, 0.3, -2.0, f64::NAN]);
        let image = apply_colour_to_mask(&mask, "k").unwrap();
        assert_eq!(alpha_channel(&image).unwrap(), arr1(&[0.0, 1.0, 1.0, 0.0]));
    }

    #[test]
    fn test_idempotent_through_alpha() {
        let mask = Array3::from_shape_fn((3, 4, 5), |(z, y, x)| (z + 2 * y + x) % 3 == 0);
        let colour = ColourSpec::from("tab:green");
        let first = apply_colour_to_mask(&mask, colour.clone()).unwrap();
        let rederived = alpha_channel(&first).unwrap().mapv(|a| a > 0.0);
        let second = apply_colour_to_mask(&rederived, colour).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len_of(Axis(3)), 4);
    }

    #[test]
    fn test_css_colour_name() {
        let mask = arr1(&[1u8, 1]);
        let image = apply_colour_to_mask(&mask, "darkviolet").unwrap();
        assert_eq!(image[[0, 0]], 0x94 as f64 / 255.0);
        assert_eq!(image[[1, 2]], 0xd3 as f64 / 255.0);
        assert_eq!(image[[1, 3]], 1.0);
    }

    #[test]
    fn test_unknown_colour_propagates() {
        let mask = arr1(&[1]);
        let result = apply_colour_to_mask(&mask, "octarine");
        assert!(matches!(result, Err(Error::UnknownColour(_))));
    }

    #[test]
    fn test_custom_resolver() {
        struct Palette;
        impl ColourResolver for Palette {
            fn resolve(&self, spec: &str) -> Result<Rgba> {
                match spec {
                    "lesion" => Ok(Rgba::opaque(1.0, 0.5, 0.0)),
                    other => Err(Error::UnknownColour(other.to_string())),
                }
            }
        }

        let mask = arr1(&[1u8, 0]);
        let image = apply_colour_to_mask_with(&Palette, &mask, "lesion").unwrap();
        assert_eq!(image[[0, 1]], 0.5);
        assert!(apply_colour_to_mask_with(&Palette, &mask, "red").is_err());
    }

    #[test]
    fn test_algorithm_interface() {
        let mask = arr2(&[[1.0, 0.0]]).into_dyn();
        let params = MaskColourParams {
            colour: ColourSpec::from("white"),
        };
        let image = MaskColouriser.execute(mask, params).unwrap();
        assert_eq!(image.shape(), &[1, 2, 4]);
        assert_eq!(image[[0, 0, 0]], 1.0);
        assert_eq!(image[[0, 1, 3]], 0.0);
    }
}
