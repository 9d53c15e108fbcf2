//! Color primitives, endpoint optimizers, and normative constant tables
//! shared between the BC1-BC7 block codec crates.
//!
//! This crate has no block-format-specific encode/decode logic of its own;
//! it exists so `texel-block-compress-bc1`..`-bc7` can share the geometric
//! and numeric core the formats have in common instead of re-deriving it
//! per crate.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod alpha_optimizer;
pub mod color;
pub mod error;
pub mod flags;
pub mod rgb_optimizer;
pub mod tables;

pub use color::{half_to_int, int_to_half, hdr_to_ldr, ldr_to_hdr, Color565, HdrColor, LdrColor, F16MAX};
pub use error::BlockSliceError;

/// An 8-bit-per-channel RGBA pixel: the external pixel type for every LDR
/// codec (BC1-BC5, BC7). BC6H uses [`HdrColor`] directly instead.
pub type Rgba = LdrColor;
