//! BC4 (single-channel) and BC5 (two-channel) block codecs.
//!
//! A BC4 block is 8 bytes: two 8-bit endpoints followed by 48 bits of 3-bit
//! indices (pixel 0 at bit 16). When `endpoint_0 > endpoint_1` the palette
//! has 8 interpolated entries; otherwise it has 6, plus the format's fixed
//! boundary constants (0/1 for UNORM, -1/+1 for SNORM) at indices 6 and 7.
//! A BC5 block is two BC4 blocks back to back, one per channel.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

use texel_block_compress_common::alpha_optimizer::optimize_alpha;
use texel_block_compress_common::BlockSliceError;

#[cfg(test)]
mod test_prelude;

/// BC4 codec: a single interpolated 8-bit channel.
pub mod bc4 {
    use super::*;

    /// Size in bytes of one BC4 block.
    pub const BLOCK_SIZE: usize = 8;
    /// Number of scalar samples decoded from (or encoded into) one block.
    pub const BLOCK_PIXELS: usize = 16;

    fn decode_palette(raw0: i32, raw1: i32, signed: bool) -> [f32; 8] {
        let to_f = |v: i32| -> f32 {
            if signed {
                let v = if v == -128 { -127 } else { v };
                v as f32 / 127.0
            } else {
                v as f32 / 255.0
            }
        };
        let f0 = to_f(raw0);
        let f1 = to_f(raw1);
        let mut pal = [0.0f32; 8];
        pal[0] = f0;
        pal[1] = f1;
        if raw0 > raw1 {
            for i in 1..7 {
                pal[i + 1] = (f0 * (7 - i) as f32 + f1 * i as f32) / 7.0;
            }
        } else {
            for i in 1..5 {
                pal[i + 1] = (f0 * (5 - i) as f32 + f1 * i as f32) / 5.0;
            }
            pal[6] = if signed { -1.0 } else { 0.0 };
            pal[7] = 1.0;
        }
        pal
    }

    fn pack_indices(raw0: u8, raw1: u8, indices: &[usize; BLOCK_PIXELS]) -> [u8; BLOCK_SIZE] {
        let mut data: u64 = raw0 as u64 | (raw1 as u64) << 8;
        for (i, &idx) in indices.iter().enumerate() {
            data |= (idx as u64) << (3 * i + 16);
        }
        data.to_le_bytes()
    }

    fn unpack_indices(block: &[u8; BLOCK_SIZE]) -> [usize; BLOCK_PIXELS] {
        let data = u64::from_le_bytes(*block);
        let mut out = [0usize; BLOCK_PIXELS];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = ((data >> (3 * i + 16)) & 0x7) as usize;
        }
        out
    }

    fn decode_generic(block: &[u8; BLOCK_SIZE], signed: bool) -> [f32; BLOCK_PIXELS] {
        let (raw0, raw1) = if signed {
            (block[0] as i8 as i32, block[1] as i8 as i32)
        } else {
            (block[0] as i32, block[1] as i32)
        };
        let palette = decode_palette(raw0, raw1, signed);
        let indices = unpack_indices(block);
        let mut out = [0.0f32; BLOCK_PIXELS];
        for (slot, idx) in out.iter_mut().zip(indices.iter()) {
            *slot = palette[*idx];
        }
        out
    }

    fn float_to_unorm(v: f32) -> u8 {
        (v.clamp(0.0, 1.0) * 255.0) as u8
    }

    /// Rounds a value in `[-1,1]` to an 8-bit SNORM code (round-half-away-
    /// from-zero, symmetric range: `-128` is never produced).
    fn float_to_snorm(v: f32) -> i8 {
        let v = if v.is_nan() { 0.0 } else { v.clamp(-1.0, 1.0) };
        let scaled = v * 127.0;
        let rounded = if scaled >= 0.0 { scaled + 0.5 } else { scaled - 0.5 };
        rounded as i8
    }

    fn encode_generic(points: &[f32; BLOCK_PIXELS], signed: bool) -> [u8; BLOCK_SIZE] {
        let min_norm = if signed { -1.0 } else { 0.0 };
        let max_norm = 1.0f32;
        let block_min = points.iter().cloned().fold(f32::INFINITY, f32::min);
        let block_max = points.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let use_four = block_min == min_norm || block_max == max_norm;

        let steps = if use_four { 6 } else { 8 };
        let (f_start, f_end) = optimize_alpha(points, steps, signed);

        let (raw0, raw1): (i32, i32) = if signed {
            let i_start = float_to_snorm(f_start) as i32;
            let i_end = float_to_snorm(f_end) as i32;
            if use_four { (i_start, i_end) } else { (i_end, i_start) }
        } else {
            let i_start = float_to_unorm(f_start) as i32;
            let i_end = float_to_unorm(f_end) as i32;
            if use_four { (i_start, i_end) } else { (i_end, i_start) }
        };

        let palette = decode_palette(raw0, raw1, signed);
        let mut indices = [0usize; BLOCK_PIXELS];
        for (slot, &p) in indices.iter_mut().zip(points.iter()) {
            let mut best = 0usize;
            let mut best_delta = f32::MAX;
            for (i, &entry) in palette.iter().enumerate() {
                let delta = (entry - p).abs();
                if delta < best_delta {
                    best_delta = delta;
                    best = i;
                }
            }
            *slot = best;
        }

        let raw0 = raw0 as u8;
        let raw1 = raw1 as u8;
        pack_indices(raw0, raw1, &indices)
    }

    /// Decodes a UNORM BC4 block into 16 row-major samples in `[0,1]`.
    pub fn decode_block_unorm(block: &[u8; BLOCK_SIZE]) -> [f32; BLOCK_PIXELS] {
        decode_generic(block, false)
    }

    /// Decodes a SNORM BC4 block into 16 row-major samples in `[-1,1]`.
    pub fn decode_block_snorm(block: &[u8; BLOCK_SIZE]) -> [f32; BLOCK_PIXELS] {
        decode_generic(block, true)
    }

    /// Encodes 16 row-major samples in `[0,1]` into a UNORM BC4 block.
    pub fn encode_block_unorm(points: &[f32; BLOCK_PIXELS]) -> [u8; BLOCK_SIZE] {
        encode_generic(points, false)
    }

    /// Encodes 16 row-major samples in `[-1,1]` into a SNORM BC4 block.
    pub fn encode_block_snorm(points: &[f32; BLOCK_PIXELS]) -> [u8; BLOCK_SIZE] {
        encode_generic(points, true)
    }

    /// Decodes a contiguous buffer of BC4 blocks into a sample buffer.
    pub fn decode_blocks(blocks: &[u8], signed: bool, out: &mut [f32]) -> Result<(), BlockSliceError> {
        if blocks.len() % BLOCK_SIZE != 0 {
            return Err(BlockSliceError::InvalidBlockBufferLength { expected: BLOCK_SIZE, actual: blocks.len() });
        }
        let num_blocks = blocks.len() / BLOCK_SIZE;
        if out.len() != num_blocks * BLOCK_PIXELS {
            return Err(BlockSliceError::InvalidPixelBufferLength { expected: num_blocks * BLOCK_PIXELS, actual: out.len() });
        }
        for (block, out_px) in blocks.chunks_exact(BLOCK_SIZE).zip(out.chunks_exact_mut(BLOCK_PIXELS)) {
            let block: [u8; BLOCK_SIZE] = block.try_into().unwrap();
            let decoded = decode_generic(&block, signed);
            out_px.copy_from_slice(&decoded);
        }
        Ok(())
    }

    /// Encodes a contiguous sample buffer into a buffer of BC4 blocks.
    pub fn encode_blocks(points: &[f32], signed: bool, out: &mut [u8]) -> Result<(), BlockSliceError> {
        if points.len() % BLOCK_PIXELS != 0 {
            return Err(BlockSliceError::InvalidPixelBufferLength { expected: BLOCK_PIXELS, actual: points.len() });
        }
        let num_blocks = points.len() / BLOCK_PIXELS;
        if out.len() != num_blocks * BLOCK_SIZE {
            return Err(BlockSliceError::InvalidBlockBufferLength { expected: num_blocks * BLOCK_SIZE, actual: out.len() });
        }
        for (pts, out_block) in points.chunks_exact(BLOCK_PIXELS).zip(out.chunks_exact_mut(BLOCK_SIZE)) {
            let pts: [f32; BLOCK_PIXELS] = pts.try_into().unwrap();
            out_block.copy_from_slice(&encode_generic(&pts, signed));
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::super::test_prelude::*;
        use super::*;

        #[test]
        fn solid_unorm_block_round_trips() {
            let points = [0.5f32; BLOCK_PIXELS];
            let block = encode_block_unorm(&points);
            let decoded = decode_block_unorm(&block);
            for v in decoded {
                assert!((v - 0.5).abs() < 1.0 / 200.0);
            }
        }

        #[test]
        fn gradient_unorm_block_preserves_endpoints() {
            let points = gradient_scalar(0.0, 1.0);
            let block = encode_block_unorm(&points);
            let decoded = decode_block_unorm(&block);
            assert!(decoded[0] < 0.1);
            assert!(decoded[15] > 0.9);
        }

        #[rstest]
        #[case(0.0, 1.0)]
        #[case(-1.0, 0.0)]
        fn gradient_unorm_block_is_monotonic(#[case] lo: f32, #[case] hi: f32) {
            let points = gradient_scalar(lo.max(0.0), hi.max(0.0));
            let block = encode_block_unorm(&points);
            let decoded = decode_block_unorm(&block);
            assert!(decoded[0] <= decoded[15]);
        }

        #[test]
        fn snorm_block_round_trips_negative_range() {
            let points = [-0.75f32; BLOCK_PIXELS];
            let block = encode_block_snorm(&points);
            let decoded = decode_block_snorm(&block);
            for v in decoded {
                assert!((v - (-0.75)).abs() < 0.05);
            }
        }

        #[test]
        fn float_to_snorm_never_emits_negative_128() {
            assert_ne!(float_to_snorm(-1.0), i8::MIN);
        }

        #[test]
        fn decode_blocks_rejects_misaligned_buffer() {
            let mut out = [0.0f32; 16];
            assert!(decode_blocks(&[0u8; 7], false, &mut out).is_err());
        }

        #[test]
        fn encode_blocks_round_trips_two_blocks() {
            let points = [0.5f32; 32];
            let mut blocks = [0u8; 16];
            encode_blocks(&points, false, &mut blocks).unwrap();
            let mut decoded = [0.0f32; 32];
            decode_blocks(&blocks, false, &mut decoded).unwrap();
            for v in decoded {
                assert!((v - 0.5).abs() < 1.0 / 200.0);
            }
        }
    }
}

/// BC5 codec: two independent BC4 channels (R, G).
pub mod bc5 {
    use super::bc4;

    /// Size in bytes of one BC5 block.
    pub const BLOCK_SIZE: usize = 16;
    /// Number of pixels decoded from (or encoded into) one block.
    pub const BLOCK_PIXELS: usize = 16;

    /// Decodes a UNORM BC5 block into 16 row-major `(r, g)` pairs.
    pub fn decode_block_unorm(block: &[u8; BLOCK_SIZE]) -> [(f32, f32); BLOCK_PIXELS] {
        let r_block: [u8; 8] = block[0..8].try_into().unwrap();
        let g_block: [u8; 8] = block[8..16].try_into().unwrap();
        let r = bc4::decode_block_unorm(&r_block);
        let g = bc4::decode_block_unorm(&g_block);
        let mut out = [(0.0, 0.0); BLOCK_PIXELS];
        for i in 0..BLOCK_PIXELS {
            out[i] = (r[i], g[i]);
        }
        out
    }

    /// Decodes a SNORM BC5 block into 16 row-major `(r, g)` pairs.
    pub fn decode_block_snorm(block: &[u8; BLOCK_SIZE]) -> [(f32, f32); BLOCK_PIXELS] {
        let r_block: [u8; 8] = block[0..8].try_into().unwrap();
        let g_block: [u8; 8] = block[8..16].try_into().unwrap();
        let r = bc4::decode_block_snorm(&r_block);
        let g = bc4::decode_block_snorm(&g_block);
        let mut out = [(0.0, 0.0); BLOCK_PIXELS];
        for i in 0..BLOCK_PIXELS {
            out[i] = (r[i], g[i]);
        }
        out
    }

    /// Encodes 16 row-major `(r, g)` pairs in `[0,1]` into a UNORM BC5 block.
    pub fn encode_block_unorm(points: &[(f32, f32); BLOCK_PIXELS]) -> [u8; BLOCK_SIZE] {
        let mut r = [0.0f32; BLOCK_PIXELS];
        let mut g = [0.0f32; BLOCK_PIXELS];
        for (i, &(rv, gv)) in points.iter().enumerate() {
            r[i] = rv;
            g[i] = gv;
        }
        let mut out = [0u8; BLOCK_SIZE];
        out[0..8].copy_from_slice(&bc4::encode_block_unorm(&r));
        out[8..16].copy_from_slice(&bc4::encode_block_unorm(&g));
        out
    }

    /// Encodes 16 row-major `(r, g)` pairs in `[-1,1]` into a SNORM BC5
    /// block.
    pub fn encode_block_snorm(points: &[(f32, f32); BLOCK_PIXELS]) -> [u8; BLOCK_SIZE] {
        let mut r = [0.0f32; BLOCK_PIXELS];
        let mut g = [0.0f32; BLOCK_PIXELS];
        for (i, &(rv, gv)) in points.iter().enumerate() {
            r[i] = rv;
            g[i] = gv;
        }
        let mut out = [0u8; BLOCK_SIZE];
        out[0..8].copy_from_slice(&bc4::encode_block_snorm(&r));
        out[8..16].copy_from_slice(&bc4::encode_block_snorm(&g));
        out
    }

    /// Decodes a contiguous buffer of BC5 blocks into a pair buffer.
    pub fn decode_blocks(
        blocks: &[u8],
        signed: bool,
        out: &mut [(f32, f32)],
    ) -> Result<(), super::BlockSliceError> {
        if blocks.len() % BLOCK_SIZE != 0 {
            return Err(super::BlockSliceError::InvalidBlockBufferLength { expected: BLOCK_SIZE, actual: blocks.len() });
        }
        let num_blocks = blocks.len() / BLOCK_SIZE;
        if out.len() != num_blocks * BLOCK_PIXELS {
            return Err(super::BlockSliceError::InvalidPixelBufferLength { expected: num_blocks * BLOCK_PIXELS, actual: out.len() });
        }
        for (block, out_px) in blocks.chunks_exact(BLOCK_SIZE).zip(out.chunks_exact_mut(BLOCK_PIXELS)) {
            let block: [u8; BLOCK_SIZE] = block.try_into().unwrap();
            let decoded = if signed { decode_block_snorm(&block) } else { decode_block_unorm(&block) };
            out_px.copy_from_slice(&decoded);
        }
        Ok(())
    }

    /// Encodes a contiguous pair buffer into a buffer of BC5 blocks.
    pub fn encode_blocks(
        points: &[(f32, f32)],
        signed: bool,
        out: &mut [u8],
    ) -> Result<(), super::BlockSliceError> {
        if points.len() % BLOCK_PIXELS != 0 {
            return Err(super::BlockSliceError::InvalidPixelBufferLength { expected: BLOCK_PIXELS, actual: points.len() });
        }
        let num_blocks = points.len() / BLOCK_PIXELS;
        if out.len() != num_blocks * BLOCK_SIZE {
            return Err(super::BlockSliceError::InvalidBlockBufferLength { expected: num_blocks * BLOCK_SIZE, actual: out.len() });
        }
        for (pts, out_block) in points.chunks_exact(BLOCK_PIXELS).zip(out.chunks_exact_mut(BLOCK_SIZE)) {
            let pts: [(f32, f32); BLOCK_PIXELS] = pts.try_into().unwrap();
            let block = if signed { encode_block_snorm(&pts) } else { encode_block_unorm(&pts) };
            out_block.copy_from_slice(&block);
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::super::test_prelude::*;
        use super::*;

        #[test]
        fn channels_are_independent() {
            let points = [(0.25f32, 0.75f32); BLOCK_PIXELS];
            let block = encode_block_unorm(&points);
            let decoded = decode_block_unorm(&block);
            for (r, g) in decoded {
                assert!((r - 0.25).abs() < 0.05);
                assert!((g - 0.75).abs() < 0.05);
            }
        }

        #[test]
        fn gradient_channels_round_trip_independently() {
            let r = gradient_scalar(0.0, 1.0);
            let g = gradient_scalar(1.0, 0.0);
            let mut points = [(0.0f32, 0.0f32); BLOCK_PIXELS];
            for i in 0..BLOCK_PIXELS {
                points[i] = (r[i], g[i]);
            }
            let block = encode_block_unorm(&points);
            let decoded = decode_block_unorm(&block);
            assert!(decoded[0].0 < decoded[15].0);
            assert!(decoded[0].1 > decoded[15].1);
        }

        #[test]
        fn decode_blocks_rejects_misaligned_buffer() {
            let mut out = [(0.0f32, 0.0f32); 16];
            assert!(decode_blocks(&[0u8; 7], false, &mut out).is_err());
        }

        #[test]
        fn encode_blocks_round_trips_two_blocks() {
            let points = [(0.25f32, 0.75f32); 32];
            let mut blocks = [0u8; 32];
            encode_blocks(&points, false, &mut blocks).unwrap();
            let mut decoded = [(0.0f32, 0.0f32); 32];
            decode_blocks(&blocks, false, &mut decoded).unwrap();
            for (r, g) in decoded {
                assert!((r - 0.25).abs() < 0.05);
                assert!((g - 0.75).abs() < 0.05);
            }
        }
    }
}
