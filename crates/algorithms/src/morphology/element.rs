//! Structuring element definitions for n-dimensional binary morphology
//!
//! A structuring element defines which neighbours of an element take part
//! in erosion. Elements are centred: every axis has odd length and the
//! middle cell is the element itself.

use ndarray::{ArrayD, IxDyn};

use medvis_core::{Error, Result};

/// Shape of a structuring element for binary morphology
#[derive(Debug, Clone, PartialEq)]
pub enum StructuringElement {
    /// 3×…×3 box keeping offsets whose city-block distance from the centre
    /// is at most `connectivity`. Connectivity 1 is the cross (face
    /// neighbours), connectivity `rank` the full box.
    Connectivity { rank: usize, connectivity: usize },
    /// User-provided footprint (every axis must have odd length)
    Custom(ArrayD<bool>),
}

impl StructuringElement {
    /// Element with the given rank and connectivity.
    pub fn with_connectivity(rank: usize, connectivity: usize) -> Self {
        StructuringElement::Connectivity { rank, connectivity }
    }

    /// Face-neighbour element (connectivity 1).
    pub fn cross(rank: usize) -> Self {
        Self::with_connectivity(rank, 1)
    }

    /// Full 3×…×3 box (connectivity `rank`).
    pub fn full(rank: usize) -> Self {
        Self::with_connectivity(rank, rank)
    }

    /// User-provided footprint.
    pub fn custom(footprint: ArrayD<bool>) -> Self {
        StructuringElement::Custom(footprint)
    }

    /// Number of axes the element applies to
    pub fn rank(&self) -> usize {
        match self {
            StructuringElement::Connectivity { rank, .. } => *rank,
            StructuringElement::Custom(footprint) => footprint.ndim(),
        }
    }

    /// Validate the structuring element, returning an error for invalid configurations
    pub fn validate(&self) -> Result<()> {
        match self {
            StructuringElement::Connectivity { .. } => Ok(()),
            StructuringElement::Custom(footprint) => {
                if footprint.shape().iter().any(|&n| n % 2 == 0) {
                    return Err(Error::InvalidParameter {
                        name: "structure",
                        value: format!("{:?}", footprint.shape()),
                        reason: "every axis of a custom element must have odd length".to_string(),
                    });
                }
                if !footprint.iter().any(|&v| v) {
                    return Err(Error::InvalidParameter {
                        name: "structure",
                        value: format!("{:?}", footprint.shape()),
                        reason: "custom element has no active cells".to_string(),
                    });
                }
                Ok(())
            }
        }
    }

    /// Materialise the element as a boolean footprint.
    pub fn footprint(&self) -> ArrayD<bool> {
        match self {
            StructuringElement::Connectivity { rank, connectivity } => {
                ArrayD::from_shape_fn(IxDyn(&vec![3; *rank]), |idx| {
                    let distance: usize = (0..*rank).map(|k| idx[k].abs_diff(1)).sum();
                    distance <= *connectivity
                })
            }
            StructuringElement::Custom(footprint) => footprint.clone(),
        }
    }

    /// Offsets relative to the centre for all active cells, in row-major order
    pub fn offsets(&self) -> Vec<Vec<isize>> {
        let footprint = self.footprint();
        let centre: Vec<isize> = footprint.shape().iter().map(|&n| (n / 2) as isize).collect();

        footprint
            .indexed_iter()
            .filter(|(_, &active)| active)
            .map(|(idx, _)| {
                (0..centre.len())
                    .map(|k| idx[k] as isize - centre[k])
                    .collect()
            })
            .collect()
    }
}
