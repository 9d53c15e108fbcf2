//! Common test imports and fixture builders, shared across this crate's
//! `#[cfg(test)]` modules.
#![allow(unused_imports, dead_code)]

pub use rstest::rstest;

use super::BLOCK_PIXELS;
use texel_block_compress_common::HdrColor;

/// A uniform 4x4 HDR tile of one color.
pub fn solid_hdr_block(r: f32, g: f32, b: f32) -> [HdrColor; BLOCK_PIXELS] {
    [HdrColor::new(r, g, b, 1.0); BLOCK_PIXELS]
}

/// A 4x4 grayscale HDR tile ramping linearly from 0 to 1, row-major.
pub fn gradient_hdr_block() -> [HdrColor; BLOCK_PIXELS] {
    let mut out = [HdrColor::default(); BLOCK_PIXELS];
    for (i, p) in out.iter_mut().enumerate() {
        let v = i as f32 / 15.0;
        *p = HdrColor::new(v, v, v, 1.0);
    }
    out
}
