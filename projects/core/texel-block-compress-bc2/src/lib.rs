//! BC2 (DXT3) block codec.
//!
//! A BC2 block is 16 bytes: 8 bytes of explicit 4-bit-per-pixel alpha
//! (pixel 0 in the lowest nibble of the first word) followed by an 8-byte
//! BC1 color block encoded without the colorkey convention.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

use texel_block_compress_bc1::{decode_block as decode_bc1_block, encode_block_with_threshold};
use texel_block_compress_common::flags::DITHER_A;
use texel_block_compress_common::{BlockSliceError, Rgba};

#[cfg(test)]
mod test_prelude;

/// Size in bytes of one BC2 block.
pub const BLOCK_SIZE: usize = 16;
/// Number of pixels decoded from (or encoded into) one block.
pub const BLOCK_PIXELS: usize = 16;

/// Decodes one 16-byte BC2 block into 16 row-major RGBA pixels.
pub fn decode_block(block: &[u8; BLOCK_SIZE]) -> [Rgba; BLOCK_PIXELS] {
    let bc1_block: [u8; 8] = block[8..16].try_into().unwrap();
    let mut out = decode_bc1_block(&bc1_block);

    let bitmap0 = u32::from_le_bytes(block[0..4].try_into().unwrap());
    let bitmap1 = u32::from_le_bytes(block[4..8].try_into().unwrap());

    for (i, slot) in out.iter_mut().take(8).enumerate() {
        let nibble = (bitmap0 >> (4 * i)) & 0xF;
        slot.a = ((nibble * 255) / 15) as u8;
    }
    for (i, slot) in out.iter_mut().enumerate().skip(8) {
        let nibble = (bitmap1 >> (4 * (i - 8))) & 0xF;
        slot.a = ((nibble * 255) / 15) as u8;
    }
    out
}

/// Encodes 16 row-major RGBA pixels into one 16-byte BC2 block.
pub fn encode_block(pixels: &[Rgba; BLOCK_PIXELS], flags: u32) -> [u8; BLOCK_SIZE] {
    let dither = flags & DITHER_A != 0;
    let mut alpha = [0.0f32; BLOCK_PIXELS];
    let mut error = [0.0f32; BLOCK_PIXELS];
    let mut nibbles = [0u32; BLOCK_PIXELS];

    for i in 0..BLOCK_PIXELS {
        let mut a = pixels[i].a as f32 / 255.0;
        if dither {
            a += error[i];
        }
        let q = (a * 15.0 + 0.5) as i32 as u32;
        nibbles[i] = q;

        if dither {
            let diff = a - (q as f32 / 15.0);
            diffuse(&mut error, i, diff);
        }
    }

    let mut bitmap0: u32 = 0;
    let mut bitmap1: u32 = 0;
    for (i, &n) in nibbles.iter().enumerate() {
        if i < 8 {
            bitmap0 |= n << (4 * i);
        } else {
            bitmap1 |= n << (4 * (i - 8));
        }
    }

    // BC1 sub-block: color-key disabled (threshold above any real alpha).
    let bc1_block = encode_block_with_threshold(pixels, f32::MIN, flags);

    let mut out = [0u8; BLOCK_SIZE];
    out[0..4].copy_from_slice(&bitmap0.to_le_bytes());
    out[4..8].copy_from_slice(&bitmap1.to_le_bytes());
    out[8..16].copy_from_slice(&bc1_block);
    out
}

fn diffuse(error: &mut [f32; BLOCK_PIXELS], i: usize, diff: f32) {
    if i & 3 != 3 {
        error[i + 1] += diff * (7.0 / 16.0);
    }
    if i < 12 {
        if i & 3 != 0 {
            error[i + 3] += diff * (3.0 / 16.0);
        }
        error[i + 4] += diff * (5.0 / 16.0);
        if i & 3 != 3 {
            error[i + 5] += diff * (1.0 / 16.0);
        }
    }
}

/// Decodes a flat buffer of BC2 blocks into a flat buffer of RGBA pixels.
pub fn decode_blocks(blocks: &[u8], out: &mut [Rgba]) -> Result<(), BlockSliceError> {
    if blocks.len() % BLOCK_SIZE != 0 {
        return Err(BlockSliceError::InvalidBlockBufferLength { expected: BLOCK_SIZE, actual: blocks.len() });
    }
    let num_blocks = blocks.len() / BLOCK_SIZE;
    if out.len() != num_blocks * BLOCK_PIXELS {
        return Err(BlockSliceError::InvalidPixelBufferLength { expected: num_blocks * BLOCK_PIXELS, actual: out.len() });
    }
    for (block, out_px) in blocks.chunks_exact(BLOCK_SIZE).zip(out.chunks_exact_mut(BLOCK_PIXELS)) {
        let block: [u8; BLOCK_SIZE] = block.try_into().unwrap();
        out_px.copy_from_slice(&decode_block(&block));
    }
    Ok(())
}

/// Encodes a flat buffer of RGBA pixels into a flat buffer of BC2 blocks.
pub fn encode_blocks(pixels: &[Rgba], out: &mut [u8], flags: u32) -> Result<(), BlockSliceError> {
    if pixels.len() % BLOCK_PIXELS != 0 {
        return Err(BlockSliceError::InvalidPixelBufferLength { expected: BLOCK_PIXELS, actual: pixels.len() });
    }
    let num_blocks = pixels.len() / BLOCK_PIXELS;
    if out.len() != num_blocks * BLOCK_SIZE {
        return Err(BlockSliceError::InvalidBlockBufferLength { expected: num_blocks * BLOCK_SIZE, actual: out.len() });
    }
    for (px, out_block) in pixels.chunks_exact(BLOCK_PIXELS).zip(out.chunks_exact_mut(BLOCK_SIZE)) {
        let px: [Rgba; BLOCK_PIXELS] = px.try_into().unwrap();
        out_block.copy_from_slice(&encode_block(&px, flags));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::test_prelude::*;

    #[test]
    fn alpha_nibble_round_trips_to_nearest_fifteenth() {
        let mut pixels = [Rgba::new(100, 150, 200, 255); BLOCK_PIXELS];
        pixels[0].a = 128;
        let block = encode_block(&pixels, 0);
        let decoded = decode_block(&block);
        assert!((decoded[0].a as i32 - 128).abs() <= 9);
        assert_eq!(decoded[1].a, 255);
    }

    #[rstest]
    #[case(0)]
    #[case(DITHER_A)]
    fn alpha_ramp_block_round_trips_monotonically(#[case] flags: u32) {
        let pixels = alpha_ramp_block();
        let block = encode_block(&pixels, flags);
        let decoded = decode_block(&block);
        assert!(decoded[0].a < decoded[15].a);
    }

    #[test]
    fn fully_transparent_alpha_decodes_to_zero() {
        let pixels = [Rgba::new(10, 20, 30, 0); BLOCK_PIXELS];
        let block = encode_block(&pixels, 0);
        let decoded = decode_block(&block);
        assert!(decoded.iter().all(|p| p.a == 0));
    }

    #[test]
    fn dithered_alpha_still_round_trips_reasonably() {
        let mut pixels = [Rgba::new(0, 0, 0, 0); BLOCK_PIXELS];
        for (i, p) in pixels.iter_mut().enumerate() {
            p.a = (i * 16) as u8;
        }
        let block = encode_block(&pixels, DITHER_A);
        let decoded = decode_block(&block);
        assert_eq!(decoded.len(), BLOCK_PIXELS);
    }

    #[test]
    fn decode_blocks_rejects_misaligned_buffer() {
        let mut out = [Rgba::default(); 16];
        assert!(decode_blocks(&[0u8; 15], &mut out).is_err());
    }
}
