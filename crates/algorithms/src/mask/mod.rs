//! Binary mask overlays
//!
//! - **Colouring**: set elements take one colour, the rest are transparent
//! - **Outlines**: boundary ring of given width, optionally coloured

mod colour;
mod outline;

pub use colour::{apply_colour_to_mask, apply_colour_to_mask_with, MaskColourParams, MaskColouriser};
pub use outline::{
    create_outline, create_outline_with, Outline, OutlineExtractor, OutlineParams,
};
