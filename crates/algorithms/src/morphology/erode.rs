//! Binary erosion over n-dimensional masks
//!
//! An element survives erosion only if every cell of the structuring
//! element centred on it is set. Cells outside the array count as unset,
//! so set elements on the array border are always removed.

use ndarray::{Array, ArrayBase, ArrayD, ArrayViewD, Data, Dimension};
use tracing::debug;

use crate::maybe_rayon::*;
use medvis_core::{Algorithm, Error, Result, Voxel};

use super::element::StructuringElement;

/// Binary morphology backend used by the mask operations.
pub trait MorphologyEngine {
    /// Erode `mask` once with `element`.
    fn binary_erosion(
        &self,
        mask: ArrayViewD<'_, bool>,
        element: &StructuringElement,
    ) -> Result<ArrayD<bool>>;
}

/// Built-in engine backed by [`binary_erosion`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryMorphology;

impl MorphologyEngine for BinaryMorphology {
    fn binary_erosion(
        &self,
        mask: ArrayViewD<'_, bool>,
        element: &StructuringElement,
    ) -> Result<ArrayD<bool>> {
        binary_erosion(&mask, element)
    }
}

/// Parameters for binary erosion
#[derive(Debug, Clone)]
pub struct ErosionParams {
    /// Connectivity of the generated element, used when `element` is `None`
    pub connectivity: usize,
    /// Explicit structuring element overriding `connectivity`
    pub element: Option<StructuringElement>,
    /// Number of successive erosions
    pub iterations: usize,
}

impl Default for ErosionParams {
    fn default() -> Self {
        Self {
            connectivity: 1,
            element: None,
            iterations: 1,
        }
    }
}

/// Erosion algorithm
#[derive(Debug, Clone, Default)]
pub struct BinaryErosion;

impl Algorithm for BinaryErosion {
    type Input = ArrayD<bool>;
    type Output = ArrayD<bool>;
    type Params = ErosionParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "BinaryErosion"
    }

    fn description(&self) -> &'static str {
        "Binary erosion of an n-dimensional mask by a structuring element"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        let element = params
            .element
            .unwrap_or_else(|| StructuringElement::with_connectivity(input.ndim(), params.connectivity));
        binary_erosion_iterations(&input, &element, params.iterations)
    }
}

/// Perform binary erosion on a mask of any dimensionality
///
/// Nonzero input elements count as set. The element's rank must match the
/// mask's.
///
/// # Arguments
/// * `mask` - Input mask
/// * `element` - Structuring element defining the neighbourhood
pub fn binary_erosion<S, D>(mask: &ArrayBase<S, D>, element: &StructuringElement) -> Result<Array<bool, D>>
where
    S: Data,
    S::Elem: Voxel,
    D: Dimension,
{
    element.validate()?;
    if element.rank() != mask.ndim() {
        return Err(Error::InvalidParameter {
            name: "structure",
            value: format!("rank {}", element.rank()),
            reason: format!("structuring element must have the mask's rank ({})", mask.ndim()),
        });
    }

    let shape = mask.shape().to_vec();
    let strides = row_major_strides(&shape);
    let offsets = element.offsets();
    let data: Vec<bool> = mask.iter().map(|v| v.is_set()).collect();

    let eroded: Vec<bool> = (0..data.len())
        .into_par_iter()
        .map(|flat| {
            if !data[flat] {
                return false;
            }
            let coords = unravel(flat, &strides);
            offsets.iter().all(|offset| {
                neighbour(flat, &coords, offset, &shape, &strides).is_some_and(|n| data[n])
            })
        })
        .collect();

    Ok(Array::from_shape_vec(mask.raw_dim(), eroded)?)
}

/// Erode `iterations` times. Zero iterations returns the binarised mask.
pub fn binary_erosion_iterations<S, D>(
    mask: &ArrayBase<S, D>,
    element: &StructuringElement,
    iterations: usize,
) -> Result<Array<bool, D>>
where
    S: Data,
    S::Elem: Voxel,
    D: Dimension,
{
    let mut current = mask.mapv(|v| v.is_set());
    for i in 0..iterations {
        if !current.iter().any(|&v| v) {
            debug!(iteration = i, "mask fully eroded");
            break;
        }
        current = binary_erosion(&current, element)?;
    }
    Ok(current)
}

/// Strides of a C-contiguous array with `shape`, in elements
fn row_major_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![1; shape.len()];
    for k in (0..shape.len().saturating_sub(1)).rev() {
        strides[k] = strides[k + 1] * shape[k + 1];
    }
    strides
}

fn unravel(mut flat: usize, strides: &[usize]) -> Vec<usize> {
    strides
        .iter()
        .map(|&s| {
            let c = flat / s;
            flat %= s;
            c
        })
        .collect()
}

/// Flat index of `coords + offset`, or `None` when it falls outside the array
fn neighbour(
    flat: usize,
    coords: &[usize],
    offset: &[isize],
    shape: &[usize],
    strides: &[usize],
) -> Option<usize> {
    let mut index = flat as isize;
    for k in 0..shape.len() {
        let c = coords[k] as isize + offset[k];
        if c < 0 || c >= shape[k] as isize {
            return None;
        }
        index += offset[k] * strides[k] as isize;
    }
    Some(index as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2, Array2, Array3};

    #[test]
    fn test_erode_1d_run() {
        let mask = arr1(&[0, 1, 1, 1, 0]);
        let result = binary_erosion(&mask, &StructuringElement::cross(1)).unwrap();
        assert_eq!(result, arr1(&[false, false, true, false, false]));
    }

    #[test]
    fn test_erode_single_row_2d() {
        // Rows above and below are outside the array and count as unset
        let mask = arr2(&[[0, 1, 1, 1, 0]]);
        let result = binary_erosion(&mask, &StructuringElement::cross(2)).unwrap();
        assert!(result.iter().all(|&v| !v));
    }

    #[test]
    fn test_erode_square_cross() {
        let mut mask = Array2::<u8>::zeros((7, 7));
        mask.slice_mut(ndarray::s![1..6, 1..6]).fill(1);

        let result = binary_erosion(&mask, &StructuringElement::cross(2)).unwrap();
        // 5x5 block shrinks to its 3x3 interior
        for ((r, c), &v) in result.indexed_iter() {
            let inside = (2..5).contains(&r) && (2..5).contains(&c);
            assert_eq!(v, inside, "at ({r}, {c})");
        }
    }

    #[test]
    fn test_cross_keeps_diagonal_neighbour_of_hole() {
        let mut mask = Array2::<bool>::from_elem((5, 5), true);
        mask[[1, 1]] = false;
        let result = binary_erosion(&mask, &StructuringElement::cross(2)).unwrap();
        // (2, 2) only touches (1, 1) diagonally
        assert!(result[[2, 2]]);

        let result = binary_erosion(&mask, &StructuringElement::full(2)).unwrap();
        assert!(!result[[2, 2]]);
    }

    #[test]
    fn test_border_always_erodes() {
        let mask = Array2::<bool>::from_elem((4, 4), true);
        let result = binary_erosion(&mask, &StructuringElement::cross(2)).unwrap();
        assert!(!result[[0, 0]]);
        assert!(!result[[0, 2]]);
        assert!(result[[1, 1]]);
        assert!(result[[2, 2]]);
    }

    #[test]
    fn test_erode_volume() {
        let mask = Array3::<f32>::from_elem((5, 5, 5), 1.0);
        let result = binary_erosion(&mask, &StructuringElement::cross(3)).unwrap();
        assert_eq!(result.iter().filter(|&&v| v).count(), 27);
        assert!(result[[2, 2, 2]]);
        assert!(!result[[0, 2, 2]]);
    }

    #[test]
    fn test_rank_mismatch() {
        let mask = arr2(&[[1, 1], [1, 1]]);
        let result = binary_erosion(&mask, &StructuringElement::cross(3));
        assert!(matches!(result, Err(Error::InvalidParameter { name: "structure", .. })));
    }

    #[test]
    fn test_iterations() {
        let mask = Array2::<u8>::from_elem((9, 9), 1);
        let se = StructuringElement::cross(2);
        let once = binary_erosion_iterations(&mask, &se, 1).unwrap();
        let twice = binary_erosion_iterations(&mask, &se, 2).unwrap();
        assert_eq!(once.iter().filter(|&&v| v).count(), 49);
        assert_eq!(twice.iter().filter(|&&v| v).count(), 25);

        let none = binary_erosion_iterations(&mask, &se, 0).unwrap();
        assert!(none.iter().all(|&v| v));
    }

    #[test]
    fn test_empty_mask() {
        let mask = Array2::<u8>::zeros((0, 3));
        let result = binary_erosion(&mask, &StructuringElement::cross(2)).unwrap();
        assert_eq!(result.shape(), &[0, 3]);
    }

    #[test]
    fn test_engine_trait_matches_function() {
        let mask = arr2(&[[0, 1, 1, 1, 0], [0, 1, 1, 1, 0], [0, 1, 1, 1, 0]]).mapv(|v| v != 0);
        let se = StructuringElement::cross(2);
        let via_engine = BinaryMorphology.binary_erosion(mask.view().into_dyn(), &se).unwrap();
        let direct = binary_erosion(&mask, &se).unwrap().into_dyn();
        assert_eq!(via_engine, direct);
    }

    #[test]
    fn test_algorithm_default_params() {
        let mask = Array2::<bool>::from_elem((3, 3), true).into_dyn();
        let result = BinaryErosion.execute_default(mask).unwrap();
        assert_eq!(result.iter().filter(|&&v| v).count(), 1);
    }
}
