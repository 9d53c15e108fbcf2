//! BC3 (DXT5) block codec.
//!
//! A BC3 block is 16 bytes: two 8-bit alpha endpoints and 48 bits of 3-bit
//! alpha indices (6 bytes, two 24-bit halves of 8 pixels each), followed by
//! an 8-byte BC1 color block encoded without the colorkey convention.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

use texel_block_compress_bc1::{decode_block as decode_bc1_block, encode_block_with_threshold};
use texel_block_compress_common::alpha_optimizer::optimize_alpha;
use texel_block_compress_common::flags::DITHER_A;
use texel_block_compress_common::{BlockSliceError, Rgba};

#[cfg(test)]
mod test_prelude;

/// Size in bytes of one BC3 block.
pub const BLOCK_SIZE: usize = 16;
/// Number of pixels decoded from (or encoded into) one block.
pub const BLOCK_PIXELS: usize = 16;

/// Decodes one 16-byte BC3 block into 16 row-major RGBA pixels.
pub fn decode_block(block: &[u8; BLOCK_SIZE]) -> [Rgba; BLOCK_PIXELS] {
    let bc1_block: [u8; 8] = block[10..16].try_into().unwrap();
    let mut out = decode_bc1_block(&bc1_block);

    let a0 = block[0];
    let a1 = block[1];
    let palette = build_decode_palette(a0, a1);

    let dw0 = block[2] as u32 | (block[3] as u32) << 8 | (block[4] as u32) << 16;
    let dw1 = block[5] as u32 | (block[6] as u32) << 8 | (block[7] as u32) << 16;

    let mut dw = dw0;
    for slot in out.iter_mut().take(8) {
        slot.a = (palette[(dw & 7) as usize] * 255.0 + 0.5) as u8;
        dw >>= 3;
    }
    let mut dw = dw1;
    for slot in out.iter_mut().skip(8) {
        slot.a = (palette[(dw & 7) as usize] * 255.0 + 0.5) as u8;
        dw >>= 3;
    }
    out
}

fn build_decode_palette(a0: u8, a1: u8) -> [f32; 8] {
    let f0 = a0 as f32 / 255.0;
    let f1 = a1 as f32 / 255.0;
    let mut palette = [0.0f32; 8];
    palette[0] = f0;
    palette[1] = f1;
    if a0 > a1 {
        for i in 1..7 {
            palette[i + 1] = (f0 * (7 - i) as f32 + f1 * i as f32) / 7.0;
        }
    } else {
        for i in 1..5 {
            palette[i + 1] = (f0 * (5 - i) as f32 + f1 * i as f32) / 5.0;
        }
        palette[6] = 0.0;
        palette[7] = 1.0;
    }
    palette
}

/// Encodes 16 row-major RGBA pixels into one 16-byte BC3 block.
pub fn encode_block(pixels: &[Rgba; BLOCK_PIXELS], flags: u32) -> [u8; BLOCK_SIZE] {
    let dither = flags & DITHER_A != 0;
    let mut alpha = [0.0f32; BLOCK_PIXELS];
    let mut error = [0.0f32; BLOCK_PIXELS];
    let mut min_alpha = pixels[0].a as f32 / 255.0;
    let mut max_alpha = min_alpha;

    for i in 0..BLOCK_PIXELS {
        let mut a = pixels[i].a as f32 / 255.0;
        if dither {
            a += error[i];
        }
        let q = ((a * 255.0 + 0.5) as i32 as f32) / 255.0;
        alpha[i] = q;
        if q < min_alpha {
            min_alpha = q;
        } else if q > max_alpha {
            max_alpha = q;
        }
        if dither {
            let diff = a - q;
            diffuse(&mut error, i, diff);
        }
    }

    let bc1_block = encode_block_with_threshold(pixels, f32::MIN, flags);

    let mut out = [0u8; BLOCK_SIZE];
    out[10..16].copy_from_slice(&bc1_block);

    if min_alpha == 1.0 {
        out[0] = 0xFF;
        out[1] = 0xFF;
        return out;
    }

    let steps = if min_alpha == 0.0 || max_alpha == 1.0 { 6 } else { 8 };
    let (opt_a, opt_b) = optimize_alpha(&alpha, steps, false);

    let byte_a = (opt_a * 255.0 + 0.5) as u8;
    let byte_b = (opt_b * 255.0 + 0.5) as u8;
    let fa = byte_a as f32 / 255.0;
    let fb = byte_b as f32 / 255.0;

    if steps == 8 && byte_a == byte_b {
        out[0] = byte_a;
        out[1] = byte_b;
        return out;
    }

    let (raw0, raw1, mut step, order): (u8, u8, [f32; 8], &[usize]) = if steps == 6 {
        let mut step = [0.0f32; 8];
        step[0] = fa;
        step[1] = fb;
        for i in 1..5 {
            step[i + 1] = (step[0] * (5 - i) as f32 + step[1] * i as f32) / 5.0;
        }
        step[6] = 0.0;
        step[7] = 1.0;
        (byte_a, byte_b, step, &[0, 2, 3, 4, 5, 1])
    } else {
        let mut step = [0.0f32; 8];
        step[0] = fb;
        step[1] = fa;
        for i in 1..7 {
            step[i + 1] = (step[0] * (7 - i) as f32 + step[1] * i as f32) / 7.0;
        }
        (byte_b, byte_a, step, &[0, 2, 3, 4, 5, 6, 7, 1])
    };
    out[0] = raw0;
    out[1] = raw1;

    let f_steps = (steps - 1) as f32;
    let scale = if step[0] != step[1] { f_steps / (step[1] - step[0]) } else { 0.0 };

    let mut error = [0.0f32; BLOCK_PIXELS];
    for set in 0..2 {
        let base = set * 8;
        let mut dw: u32 = 0;
        for i in base..base + 8 {
            let mut a = pixels[i].a as f32 / 255.0;
            if dither {
                a += error[i];
            }
            let dot = (a - step[0]) * scale;
            let idx = if dot <= 0.0 {
                if steps == 6 && a <= step[0] * 0.5 { 6 } else { 0 }
            } else if dot >= f_steps {
                if steps == 6 && a >= (step[1] + 1.0) * 0.5 { 7 } else { 1 }
            } else {
                order[(dot + 0.5) as usize]
            };
            dw = ((idx as u32) << 21) | (dw >> 3);

            if dither {
                let diff = a - step[idx];
                diffuse(&mut error, i, diff);
            }
        }
        let bytes = dw.to_le_bytes();
        out[2 + set * 3] = bytes[0];
        out[3 + set * 3] = bytes[1];
        out[4 + set * 3] = bytes[2];
    }

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

/// Decodes a flat buffer of BC3 blocks into a flat buffer of RGBA pixels.
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

/// Encodes a flat buffer of RGBA pixels into a flat buffer of BC3 blocks.
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
    fn fully_opaque_block_uses_all_ff_shortcut() {
        let pixels = [Rgba::new(1, 2, 3, 255); BLOCK_PIXELS];
        let block = encode_block(&pixels, 0);
        assert_eq!(block[0], 0xFF);
        assert_eq!(block[1], 0xFF);
        let decoded = decode_block(&block);
        assert!(decoded.iter().all(|p| p.a == 255));
    }

    #[test]
    fn fully_transparent_block_decodes_to_zero_alpha() {
        let pixels = [Rgba::new(1, 2, 3, 0); BLOCK_PIXELS];
        let block = encode_block(&pixels, 0);
        let decoded = decode_block(&block);
        assert!(decoded.iter().all(|p| p.a == 0));
    }

    #[rstest]
    #[case(0)]
    #[case(DITHER_A)]
    fn gradient_alpha_round_trips_within_tolerance(#[case] flags: u32) {
        let pixels = alpha_gradient_block();
        let block = encode_block(&pixels, flags);
        let decoded = decode_block(&block);
        for (orig, got) in pixels.iter().zip(decoded.iter()) {
            assert!((orig.a as i32 - got.a as i32).abs() <= 24);
        }
    }

    #[test]
    fn decode_blocks_rejects_misaligned_buffer() {
        let mut out = [Rgba::default(); 16];
        assert!(decode_blocks(&[0u8; 15], &mut out).is_err());
    }
}
