//! BC1 (DXT1) block codec.
//!
//! A BC1 block is 8 bytes: two little-endian 565 color words followed by a
//! 32-bit bitmap of sixteen 2-bit palette indices (pixel 0 in the low two
//! bits). When the first color word is numerically `<=` the second, the
//! palette's last two entries are the midpoint and transparent black (the
//! "colorkey" layout); otherwise they are the 1/3 and 2/3 Lerp points.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

use texel_block_compress_common::color::{ldr_to_hdr, hdr_to_ldr, Color565, HdrColor};
use texel_block_compress_common::flags::{DITHER_RGB, DITHER_A, UNIFORM};
use texel_block_compress_common::rgb_optimizer::{optimize_rgb_weighted, LUMINANCE, LUMINANCE_INV};
use texel_block_compress_common::{BlockSliceError, Rgba};

#[cfg(test)]
mod test_prelude;

/// Size in bytes of one BC1 block.
pub const BLOCK_SIZE: usize = 8;
/// Number of pixels decoded from (or encoded into) one block.
pub const BLOCK_PIXELS: usize = 16;
/// Default colorkey threshold used by [`encode_block`].
pub const DEFAULT_THRESHOLD: f32 = 0.5;

#[inline]
fn lerp(a: HdrColor, b: HdrColor, t: f32) -> HdrColor {
    HdrColor::new(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        a.a + (b.a - a.a) * t,
    )
}

/// Decodes one 8-byte BC1 block into 16 row-major RGBA pixels.
pub fn decode_block(block: &[u8; BLOCK_SIZE]) -> [Rgba; BLOCK_PIXELS] {
    let raw0 = u16::from_le_bytes([block[0], block[1]]);
    let raw1 = u16::from_le_bytes([block[2], block[3]]);
    let bitmap = u32::from_le_bytes([block[4], block[5], block[6], block[7]]);

    let clr0 = Color565::from_raw(raw0).decode();
    let clr1 = Color565::from_raw(raw1).decode();

    let (clr2, clr3) = if raw0 <= raw1 {
        (lerp(clr0, clr1, 0.5), HdrColor::new(0.0, 0.0, 0.0, 0.0))
    } else {
        (lerp(clr0, clr1, 1.0 / 3.0), lerp(clr0, clr1, 2.0 / 3.0))
    };

    let palette = [clr0, clr1, clr2, clr3];
    let mut out = [Rgba::default(); BLOCK_PIXELS];
    let mut dw = bitmap;
    for slot in out.iter_mut() {
        *slot = hdr_to_ldr(palette[(dw & 3) as usize]);
        dw >>= 2;
    }
    out
}

/// Encodes 16 row-major RGBA pixels into one 8-byte BC1 block using the
/// default colorkey threshold ([`DEFAULT_THRESHOLD`]).
pub fn encode_block(pixels: &[Rgba; BLOCK_PIXELS], flags: u32) -> [u8; BLOCK_SIZE] {
    encode_block_with_threshold(pixels, DEFAULT_THRESHOLD, flags)
}

/// Encodes 16 row-major RGBA pixels into one 8-byte BC1 block.
///
/// A pixel is treated as transparent (colorkeyed out) when its alpha falls
/// below `threshold`.
pub fn encode_block_with_threshold(
    pixels: &[Rgba; BLOCK_PIXELS],
    threshold: f32,
    flags: u32,
) -> [u8; BLOCK_SIZE] {
    let hdr: [HdrColor; BLOCK_PIXELS] = {
        let mut out = [HdrColor::default(); BLOCK_PIXELS];
        for (slot, px) in out.iter_mut().zip(pixels.iter()) {
            *slot = ldr_to_hdr(*px);
        }
        out
    };

    let colorkey_count = hdr.iter().filter(|c| c.a < threshold).count();
    if colorkey_count == BLOCK_PIXELS {
        let mut out = [0u8; BLOCK_SIZE];
        out[0..2].copy_from_slice(&0x0000u16.to_le_bytes());
        out[2..4].copy_from_slice(&0xFFFFu16.to_le_bytes());
        out[4..8].copy_from_slice(&0xFFFF_FFFFu32.to_le_bytes());
        return out;
    }
    let steps = if colorkey_count > 0 { 3 } else { 4 };

    // Quantize to 565 via Floyd-Steinberg error diffusion (optional), then
    // apply luminance weighting unless UNIFORM is set.
    let uniform = flags & UNIFORM != 0;
    let dither = flags & DITHER_RGB != 0;

    let mut quantized = [HdrColor::default(); BLOCK_PIXELS];
    let mut error = [HdrColor::default(); BLOCK_PIXELS];
    for i in 0..BLOCK_PIXELS {
        let mut c = hdr[i];
        if dither {
            c.r += error[i].r;
            c.g += error[i].g;
            c.b += error[i].b;
        }

        let qr = ((c.r * 31.0 + 0.5) as i32 as f32) * (1.0 / 31.0);
        let qg = ((c.g * 63.0 + 0.5) as i32 as f32) * (1.0 / 63.0);
        let qb = ((c.b * 31.0 + 0.5) as i32 as f32) * (1.0 / 31.0);
        quantized[i] = HdrColor::new(qr, qg, qb, 1.0);

        if dither {
            let diff = HdrColor::new(c.r - qr, c.g - qg, c.b - qb, 0.0);
            diffuse_error(&mut error, i, diff);
        }

        if !uniform {
            quantized[i].r *= LUMINANCE.r;
            quantized[i].g *= LUMINANCE.g;
            quantized[i].b *= LUMINANCE.b;
        }
    }

    let (opt_a, opt_b) = optimize_rgb_weighted(&quantized, steps, uniform);

    let (mut color_c, mut color_d) = if uniform {
        (opt_a, opt_b)
    } else {
        (
            HdrColor::new(opt_a.r * LUMINANCE_INV.r, opt_a.g * LUMINANCE_INV.g, opt_a.b * LUMINANCE_INV.b, 1.0),
            HdrColor::new(opt_b.r * LUMINANCE_INV.r, opt_b.g * LUMINANCE_INV.g, opt_b.b * LUMINANCE_INV.b, 1.0),
        )
    };

    let raw_a = Color565::encode(color_c).raw_value();
    let raw_b = Color565::encode(color_d).raw_value();

    if steps == 4 && raw_a == raw_b {
        let mut out = [0u8; BLOCK_SIZE];
        out[0..2].copy_from_slice(&raw_a.to_le_bytes());
        out[2..4].copy_from_slice(&raw_b.to_le_bytes());
        return out;
    }

    color_c = Color565::from_raw(raw_a).decode();
    color_d = Color565::from_raw(raw_b).decode();

    let (color_a, color_b) = if uniform {
        (color_c, color_d)
    } else {
        (
            HdrColor::new(color_c.r * LUMINANCE.r, color_c.g * LUMINANCE.g, color_c.b * LUMINANCE.b, 1.0),
            HdrColor::new(color_d.r * LUMINANCE.r, color_d.g * LUMINANCE.g, color_d.b * LUMINANCE.b, 1.0),
        )
    };

    let (raw0, raw1, mut step) = if (steps == 3) == (raw_a <= raw_b) {
        (raw_a, raw_b, [color_a, color_b, HdrColor::default(), HdrColor::default()])
    } else {
        (raw_b, raw_a, [color_b, color_a, HdrColor::default(), HdrColor::default()])
    };

    let index_order: &[usize] = if steps == 3 {
        step[2] = lerp(step[0], step[1], 0.5);
        &[0, 2, 1]
    } else {
        step[2] = lerp(step[0], step[1], 1.0 / 3.0);
        step[3] = lerp(step[0], step[1], 2.0 / 3.0);
        &[0, 2, 3, 1]
    };

    let dir = HdrColor::new(step[1].r - step[0].r, step[1].g - step[0].g, step[1].b - step[0].b, 0.0);
    let f_steps = (steps - 1) as f32;
    let dir_len2 = dir.r * dir.r + dir.g * dir.g + dir.b * dir.b;
    let scale = if raw_a != raw_b { f_steps / dir_len2 } else { 0.0 };
    let dir = HdrColor::new(dir.r * scale, dir.g * scale, dir.b * scale, 0.0);

    let mut bitmap: u32 = 0;
    let mut error = [HdrColor::default(); BLOCK_PIXELS];
    for i in 0..BLOCK_PIXELS {
        let idx = if steps == 3 && hdr[i].a < threshold {
            3
        } else {
            let mut c = if uniform {
                HdrColor::new(hdr[i].r, hdr[i].g, hdr[i].b, 0.0)
            } else {
                HdrColor::new(hdr[i].r * LUMINANCE.r, hdr[i].g * LUMINANCE.g, hdr[i].b * LUMINANCE.b, 0.0)
            };
            if dither {
                c.r += error[i].r;
                c.g += error[i].g;
                c.b += error[i].b;
            }

            let dot = (c.r - step[0].r) * dir.r + (c.g - step[0].g) * dir.g + (c.b - step[0].b) * dir.b;
            let raw_idx = if dot <= 0.0 {
                0
            } else if dot >= f_steps {
                1
            } else {
                index_order[(dot + 0.5) as usize]
            };

            if dither {
                let target = step[raw_idx];
                let diff = HdrColor::new(c.r - target.r, c.g - target.g, c.b - target.b, 0.0);
                diffuse_error(&mut error, i, diff);
            }
            raw_idx
        };
        bitmap |= (idx as u32) << (2 * i);
    }

    let mut out = [0u8; BLOCK_SIZE];
    out[0..2].copy_from_slice(&raw0.to_le_bytes());
    out[2..4].copy_from_slice(&raw1.to_le_bytes());
    out[4..8].copy_from_slice(&bitmap.to_le_bytes());
    out
}

/// Floyd-Steinberg RGB diffusion used by both the quantization and
/// index-assignment passes: propagate to `i+1` (7/16), `i+3` (3/16), `i+4`
/// (5/16), `i+5` (1/16), skipping the right-edge neighbor at the end of a
/// row and the neighbors that fall past the last pixel.
fn diffuse_error(error: &mut [HdrColor; BLOCK_PIXELS], i: usize, diff: HdrColor) {
    let add = |e: &mut HdrColor, w: f32| {
        e.r += diff.r * w;
        e.g += diff.g * w;
        e.b += diff.b * w;
    };
    if i & 3 != 3 {
        add(&mut error[i + 1], 7.0 / 16.0);
    }
    if i < 12 {
        if i & 3 != 0 {
            add(&mut error[i + 3], 3.0 / 16.0);
        }
        add(&mut error[i + 4], 5.0 / 16.0);
        if i & 3 != 3 {
            add(&mut error[i + 5], 1.0 / 16.0);
        }
    }
}

/// Decodes a flat buffer of BC1 blocks into a flat buffer of RGBA pixels.
///
/// `blocks` must be a multiple of [`BLOCK_SIZE`] bytes; `out` must hold
/// exactly `blocks.len() / BLOCK_SIZE * BLOCK_PIXELS` pixels.
pub fn decode_blocks(blocks: &[u8], out: &mut [Rgba]) -> Result<(), BlockSliceError> {
    if blocks.len() % BLOCK_SIZE != 0 {
        return Err(BlockSliceError::InvalidBlockBufferLength {
            expected: BLOCK_SIZE,
            actual: blocks.len(),
        });
    }
    let num_blocks = blocks.len() / BLOCK_SIZE;
    if out.len() != num_blocks * BLOCK_PIXELS {
        return Err(BlockSliceError::InvalidPixelBufferLength {
            expected: num_blocks * BLOCK_PIXELS,
            actual: out.len(),
        });
    }
    for (block, out_px) in blocks.chunks_exact(BLOCK_SIZE).zip(out.chunks_exact_mut(BLOCK_PIXELS)) {
        let block: [u8; BLOCK_SIZE] = block.try_into().unwrap();
        out_px.copy_from_slice(&decode_block(&block));
    }
    Ok(())
}

/// Encodes a flat buffer of RGBA pixels into a flat buffer of BC1 blocks.
///
/// `pixels` must hold a whole number of 16-pixel tiles; `out` must hold
/// exactly `pixels.len() / BLOCK_PIXELS * BLOCK_SIZE` bytes.
pub fn encode_blocks(pixels: &[Rgba], out: &mut [u8], flags: u32) -> Result<(), BlockSliceError> {
    if pixels.len() % BLOCK_PIXELS != 0 {
        return Err(BlockSliceError::InvalidPixelBufferLength {
            expected: BLOCK_PIXELS,
            actual: pixels.len(),
        });
    }
    let num_blocks = pixels.len() / BLOCK_PIXELS;
    if out.len() != num_blocks * BLOCK_SIZE {
        return Err(BlockSliceError::InvalidBlockBufferLength {
            expected: num_blocks * BLOCK_SIZE,
            actual: out.len(),
        });
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

    fn solid(r: u8, g: u8, b: u8, a: u8) -> [Rgba; BLOCK_PIXELS] {
        solid_block(r, g, b, a)
    }

    #[test]
    fn gradient_block_round_trips_without_wraparound() {
        let pixels = gradient_block();
        let block = encode_block(&pixels, 0);
        let decoded = decode_block(&block);
        assert!(decoded[0].r < decoded[15].r);
    }

    #[test]
    fn solid_red_block_round_trips_and_matches_565() {
        let pixels = solid(255, 0, 0, 255);
        let block = encode_block(&pixels, UNIFORM);
        let decoded = decode_block(&block);
        for px in decoded {
            assert_eq!(px.r, 255);
            assert_eq!(px.g, 0);
            assert_eq!(px.b, 0);
        }
    }

    #[test]
    fn fully_transparent_block_emits_colorkey_sentinel() {
        let pixels = solid(10, 20, 30, 0);
        let block = encode_block(&pixels, 0);
        assert_eq!(u16::from_le_bytes([block[0], block[1]]), 0x0000);
        assert_eq!(u16::from_le_bytes([block[2], block[3]]), 0xFFFF);
        assert_eq!(u32::from_le_bytes([block[4], block[5], block[6], block[7]]), 0xFFFF_FFFF);
    }

    #[test]
    fn colorkey_mode_maps_transparent_pixels_to_index_three() {
        let mut pixels = solid(255, 255, 255, 255);
        pixels[0] = Rgba::new(0, 0, 0, 0);
        let block = encode_block(&pixels, 0);
        let decoded = decode_block(&block);
        assert_eq!(decoded[0].a, 0);
    }

    #[rstest]
    #[case(0)]
    #[case(UNIFORM)]
    #[case(DITHER_RGB)]
    #[case(DITHER_A | UNIFORM)]
    fn two_tone_block_round_trips_under_any_flag_combination(#[case] flags: u32) {
        let mut pixels = [Rgba::new(0, 0, 0, 255); BLOCK_PIXELS];
        for px in pixels.iter_mut().skip(8) {
            *px = Rgba::new(255, 255, 255, 255);
        }
        let block = encode_block(&pixels, flags);
        let decoded = decode_block(&block);
        assert!(decoded.iter().any(|p| p.r < 128));
        assert!(decoded.iter().any(|p| p.r > 128));
    }

    #[test]
    fn decode_blocks_rejects_misaligned_buffer() {
        let mut out = [Rgba::default(); 16];
        assert!(decode_blocks(&[0u8; 7], &mut out).is_err());
    }

    #[test]
    fn encode_blocks_rejects_wrong_output_length() {
        let pixels = [Rgba::default(); 16];
        let mut out = [0u8; 7];
        assert!(encode_blocks(&pixels, &mut out, 0).is_err());
    }
}
