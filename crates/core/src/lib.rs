//! # medvis core
//!
//! Core types shared by the medvis overlay helpers.
//!
//! This crate provides:
//! - `Rgba` colours and `ColourSpec` resolution through a `ColourResolver`
//! - `Voxel`: element trait for scalar fields and binary masks
//! - RGBA image helpers (channel packing, quantisation, alpha compositing)
//! - The `Algorithm` trait every operation implements

pub mod colour;
pub mod error;
pub mod image;
pub mod voxel;

pub use colour::{ColourResolver, ColourSpec, NamedColours, Rgba};
pub use error::{Error, Result};
pub use voxel::Voxel;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::colour::{ColourResolver, ColourSpec, NamedColours, Rgba};
    pub use crate::error::{Error, Result};
    pub use crate::image::{alpha_channel, composite_over, pack_rgba, to_rgba8};
    pub use crate::voxel::Voxel;
    pub use crate::Algorithm;
}

/// Core trait for all operations in medvis.
///
/// Operations are pure functions that transform input arrays according to parameters.
pub trait Algorithm {
    /// Input type for the operation
    type Input;
    /// Output type for the operation
    type Output;
    /// Parameters controlling the operation
    type Params: Default;
    /// Error type for execution
    type Error: std::error::Error;

    /// Returns the operation name
    fn name(&self) -> &'static str;

    /// Returns a description of what the operation does
    fn description(&self) -> &'static str;

    /// Execute the operation
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
