//! Parallel iteration switch for erosion.
//!
//! With the `parallel` feature, `into_par_iter()` comes from rayon. Without
//! it, only `into_par_iter()` is provided, and it hands back the plain
//! sequential iterator, so erosion's `map`/`collect` chain builds either way.

#[cfg(feature = "parallel")]
pub use rayon::prelude::*;

#[cfg(not(feature = "parallel"))]
mod sequential {
    pub trait IntoParallelIterator {
        type Iter;
        fn into_par_iter(self) -> Self::Iter;
    }

    impl<I: IntoIterator> IntoParallelIterator for I {
        type Iter = I::IntoIter;
        fn into_par_iter(self) -> Self::Iter {
            self.into_iter()
        }
    }
}

#[cfg(not(feature = "parallel"))]
pub use sequential::IntoParallelIterator;
