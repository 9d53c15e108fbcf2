//! Common test imports and fixture builders, shared across this crate's
//! `#[cfg(test)]` modules.
#![allow(unused_imports, dead_code)]

pub use rstest::rstest;

use super::BLOCK_PIXELS;
use texel_block_compress_common::Rgba;

/// A 4x4 tile whose alpha ramps linearly from 0 to 255, row-major, RGB held
/// constant.
pub fn alpha_gradient_block() -> [Rgba; BLOCK_PIXELS] {
    let mut out = [Rgba::new(1, 2, 3, 0); BLOCK_PIXELS];
    for (i, px) in out.iter_mut().enumerate() {
        px.a = (i * 16) as u8;
    }
    out
}
