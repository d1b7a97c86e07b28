//! Point color assignment.
//!
//! Colors come either from an evenly spaced HSL hue sweep, from uniformly
//! random hex strings, or from a hex string already present in the row.

pub mod assign;
pub mod hex;
pub mod palette;
pub mod rgba;

pub use assign::{assign_random, assign_sweep, ColorAssigner, ColorStrategy, ColoredTable};
pub use hex::{parse_hex_color, FALLBACK_COLOR, HEX_ALPHA};
pub use palette::{
    generate_palette, hsl_to_rgb, random_hex_color, DEFAULT_ALPHA, DISTINCT_PALETTE_LIMIT,
};
pub use rgba::Rgba;
