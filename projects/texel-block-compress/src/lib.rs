//! GPU texture block compression: one crate re-exporting every BC1-BC7
//! format codec behind a single `Cargo.toml` dependency.
//!
//! Each format lives in its own crate (`texel-block-compress-bc1` and so
//! on) so a consumer that only needs one codec can depend on it directly
//! and skip the rest; this facade exists for consumers who want the whole
//! family behind one name, gated by matching Cargo features (`bc1`..`bc7`,
//! all on by default).

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub use texel_block_compress_common as common;

/// BC1 (DXT1): opaque or 1-bit-alpha RGB, 8 bytes per block.
#[cfg(feature = "bc1")]
pub use texel_block_compress_bc1 as bc1;

/// BC2 (DXT3): RGB plus 4-bit explicit alpha, 16 bytes per block.
#[cfg(feature = "bc2")]
pub use texel_block_compress_bc2 as bc2;

/// BC3 (DXT5): RGB plus 8-bit interpolated alpha, 16 bytes per block.
#[cfg(feature = "bc3")]
pub use texel_block_compress_bc3 as bc3;

/// BC4/BC5: one or two independently interpolated 8-bit channels.
#[cfg(feature = "bc45")]
pub use texel_block_compress_bc45 as bc45;

/// BC6H: 14-mode floating-point HDR RGB, 16 bytes per block.
#[cfg(feature = "bc6h")]
pub use texel_block_compress_bc6h as bc6h;

/// BC7: 8-mode LDR RGBA, 16 bytes per block.
#[cfg(feature = "bc7")]
pub use texel_block_compress_bc7 as bc7;

#[cfg(test)]
mod tests {
    #[test]
    fn bc1_reexport_decodes_a_block() {
        let block = [0u8; super::bc1::BLOCK_SIZE];
        let decoded = super::bc1::decode_block(&block);
        assert_eq!(decoded.len(), super::bc1::BLOCK_PIXELS);
    }

    #[test]
    fn bc7_reexport_decodes_a_block() {
        let block = [0u8; super::bc7::BLOCK_SIZE];
        let decoded = super::bc7::decode_block(&block);
        assert_eq!(decoded.len(), super::bc7::BLOCK_PIXELS);
    }
}
