//! Voxel element trait for scalar fields and masks

use std::fmt::Debug;

use num_traits::{ToPrimitive, Zero};

/// Trait for types that can be stored in a scalar field or a mask.
///
/// Scalar fields are read through [`Voxel::to_f64`]; masks are read through
/// [`Voxel::is_set`], where any nonzero value counts as set.
pub trait Voxel: Copy + Debug + PartialOrd + Send + Sync + 'static {
    /// Convert to `f64` for normalisation
    fn to_f64(self) -> f64;

    /// Whether this value marks an element as part of a mask
    fn is_set(self) -> bool;
}

fn numeric_to_f64<T: ToPrimitive>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

/// Nonzero and not NaN (NaN is the only value unequal to itself)
fn numeric_is_set<T: Zero + PartialEq>(v: T) -> bool {
    v == v && !v.is_zero()
}

macro_rules! impl_voxel_numeric {
    ($($t:ty),*) => {
        $(
            impl Voxel for $t {
                fn to_f64(self) -> f64 {
                    numeric_to_f64(self)
                }

                fn is_set(self) -> bool {
                    numeric_is_set(self)
                }
            }
        )*
    };
}

impl_voxel_numeric!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

// bool has no numeric traits; set means true
impl Voxel for bool {
    fn to_f64(self) -> f64 {
        if self {
            1.0
        } else {
            0.0
        }
    }

    fn is_set(self) -> bool {
        self
    }
}
