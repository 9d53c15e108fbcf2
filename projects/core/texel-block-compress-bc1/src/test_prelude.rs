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

/// A 4x4 tile that ramps linearly from black to white, row-major.
pub fn gradient_block() -> [Rgba; BLOCK_PIXELS] {
    let mut out = [Rgba::default(); BLOCK_PIXELS];
    for (i, px) in out.iter_mut().enumerate() {
        let v = (i * 17) as u8;
        *px = Rgba::new(v, v, v, 255);
    }
    out
}
