//! Common test imports and fixture builders, shared across this crate's
//! `#[cfg(test)]` modules.
#![allow(unused_imports, dead_code)]

pub use rstest::rstest;

use super::BLOCK_PIXELS;
use texel_block_compress_common::Rgba;

/// A uniform 4x4 tile of one color.
pub fn solid_block(r: u8, g: u8, b: u8, a: u8) -> [Rgba; BLOCK_PIXELS] {
    [Rgba::new(r, g, b, a); BLOCK_PIXELS]
}

/// A 4x4 tile whose alpha ramps linearly from 0 to 255, row-major, RGB held
/// constant.
pub fn alpha_ramp_block() -> [Rgba; BLOCK_PIXELS] {
    let mut out = [Rgba::new(100, 150, 200, 255); BLOCK_PIXELS];
    for (i, px) in out.iter_mut().enumerate() {
        px.a = (i * 17) as u8;
    }
    out
}
