//! # medvis colormap
//!
//! Colour mapping and functional-overlay blending for medvis.
//!
//! Provides 12 built-in colour schemes, custom linear colormaps, and a
//! generic multi-stop interpolation engine behind the [`Colormap`] trait.
//! The main entry point is [`apply_cmap_with_blend`], which turns a scalar
//! field of any dimensionality into an RGBA image whose alpha follows the
//! normalised value.
//!
//! ## Usage
//!
//! ```ignore
//! use medvis_colormap::{apply_cmap_with_blend, get_cmap};
//!
//! let cmap = get_cmap("hot")?;
//! let rgba = apply_cmap_with_blend(&pet_slice, &cmap, Some(0.0), Some(8.0), 1.0)?;
//! ```

mod blend;
mod colormap;
mod scheme;

pub use blend::{
    apply_cmap, apply_cmap_with_blend, apply_cmap_with_blend_params, data_range, normalise,
    resolve_range, BlendOverlay, BlendParams,
};
pub use colormap::{get_cmap, Colormap, LinearColormap, Reversed};
pub use scheme::{evaluate, ColorScheme, ColorStop, Rgb};
