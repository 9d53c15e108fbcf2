//! Shared encoder flag bits.
//!
//! A plain `u32` bitmask, not a `bitflags`-derived type: no crate in this
//! workspace depends on `bitflags`. Flags that don't apply to a given
//! format, and unknown bits, are silently ignored by that format's encoder.

/// Apply Floyd-Steinberg error diffusion to RGB channels while quantizing
/// (BC1/BC2/BC3).
pub const DITHER_RGB: u32 = 1 << 0;
/// Apply Floyd-Steinberg error diffusion to the alpha channel while
/// quantizing (BC1/BC2/BC3).
pub const DITHER_A: u32 = 1 << 1;
/// Disable perceptual luminance weighting in the RGB optimizer; channel
/// weights default to `(1,1,1)`.
pub const UNIFORM: u32 = 1 << 2;
/// BC7: consider 3-subset modes (0 and 2) during the mode search. Off by
/// default to bound encode time.
pub const USE_3SUBSETS: u32 = 1 << 3;
/// BC7: consider only mode 6 during the mode search.
pub const FORCE_BC7_MODE6: u32 = 1 << 4;
