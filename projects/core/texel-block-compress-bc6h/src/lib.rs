//! BC6H block codec: 14-mode floating-point HDR RGB compression.
//!
//! A BC6H block is 16 bytes. Its header selects one of 14 modes (10
//! two-region "partitioned" modes plus 4 single-region "partitionless"
//! modes), each with its own per-channel endpoint precision and header bit
//! layout (see [`layout`]). Partitioned, "transformed" modes store every
//! endpoint but the first as a signed delta from region 0's first endpoint;
//! [`transform_inverse`] reconstructs the absolute value. Endpoints are then
//! brought from their header precision up to a working range via
//! [`unquantize`], interpolated per pixel, and scaled back down by
//! [`finish_unquantize`] before conversion to `f32` via
//! [`texel_block_compress_common::int_to_half`].
//!
//! [`encode_block`] searches all 14 modes (partitioned modes additionally
//! searched across their 8 distinct partition shapes): each candidate's
//! region endpoints are seeded by
//! [`texel_block_compress_common::rgb_optimizer::optimize_rgb_subset`], run
//! through the same quantize/unquantize path [`decode_block`] uses, and
//! scored by reconstruction error against the source pixels; the
//! lowest-error candidate is the one written out.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod layout;

use layout::Field;
use texel_block_compress_common::rgb_optimizer::optimize_rgb_subset;
use texel_block_compress_common::tables::{
    fixup_index, partition_regions, weights_for_precision, Bc6hModeInfo, BC6H_MODES, WEIGHT_MAX,
    WEIGHT_ROUND, WEIGHT_SHIFT,
};
use texel_block_compress_common::{half_to_int, int_to_half, BlockSliceError, HdrColor, F16MAX};

#[cfg(test)]
mod test_prelude;

/// Size in bytes of one BC6H block.
pub const BLOCK_SIZE: usize = 16;
/// Number of pixels decoded from (or encoded into) one block.
pub const BLOCK_PIXELS: usize = 16;

/// Partition shapes tried for every partitioned mode: `region_2`'s geometry
/// only depends on `shape % 8`, so these 8 values cover every distinct
/// 2-region partition this crate can produce.
const SHAPE_CANDIDATES: [u8; 8] = [0, 1, 2, 3, 4, 5, 6, 7];

struct BitReader<'a> {
    block: &'a [u8; BLOCK_SIZE],
    pos: usize,
}

impl<'a> BitReader<'a> {
    fn new(block: &'a [u8; BLOCK_SIZE]) -> Self {
        Self { block, pos: 0 }
    }

    fn peek(&self, count: u8) -> u32 {
        let mut v = 0u32;
        for i in 0..count {
            let bit_pos = self.pos + i as usize;
            let byte = self.block[bit_pos / 8];
            let bit = (byte >> (bit_pos % 8)) & 1;
            v |= (bit as u32) << i;
        }
        v
    }

    fn read(&mut self, count: u8) -> u32 {
        let v = self.peek(count);
        self.pos += count as usize;
        v
    }
}

struct BitWriter {
    block: [u8; BLOCK_SIZE],
    pos: usize,
}

impl BitWriter {
    fn new() -> Self {
        Self { block: [0u8; BLOCK_SIZE], pos: 0 }
    }

    fn write(&mut self, value: u32, count: u8) {
        for i in 0..count {
            let bit = (value >> i) & 1;
            if bit != 0 {
                let bit_pos = self.pos + i as usize;
                self.block[bit_pos / 8] |= 1 << (bit_pos % 8);
            }
        }
        self.pos += count as usize;
    }

    fn finish(self) -> [u8; BLOCK_SIZE] {
        self.block
    }
}

/// Sign-extends the low `bits` of `value` to a full-width `i32`.
pub fn sign_extend(value: i32, bits: u8) -> i32 {
    let shift = 32 - bits as u32;
    (value << shift) >> shift
}

/// Reduces a 16-bit half-float-domain integer to `prec` bits of precision.
/// Transcribed from the reference codec's `Quantize`.
pub fn quantize(value: i32, prec: u8, signed: bool) -> i32 {
    if signed {
        let (s, mag) = if value < 0 { (true, -value) } else { (false, value) };
        let q = if prec >= 16 { mag } else { (mag << (prec - 1)) / (F16MAX + 1) };
        if s {
            -q
        } else {
            q
        }
    } else if prec >= 15 {
        value
    } else {
        (value << prec) / (F16MAX + 1)
    }
}

/// Expands a `bits`-wide quantized endpoint component back toward the
/// 15-bit working range used for interpolation. Transcribed from the
/// reference codec's `Unquantize`.
pub fn unquantize(comp: i32, bits: u8, signed: bool) -> i32 {
    if signed {
        if bits >= 16 {
            return comp;
        }
        let (s, c) = if comp < 0 { (true, -comp) } else { (false, comp) };
        let unq = if c == 0 {
            0
        } else if c >= ((1 << (bits - 1)) - 1) {
            0x7FFF
        } else {
            ((c << 15) + 0x4000) >> (bits - 1)
        };
        if s {
            -unq
        } else {
            unq
        }
    } else if bits >= 15 {
        comp
    } else if comp == 0 {
        0
    } else if comp == ((1 << bits) - 1) {
        0xFFFF
    } else {
        ((comp << 16) + 0x8000) >> bits
    }
}

/// Scales an interpolated working-range value down to the final half-float
/// domain: `*31/32` signed, `*31/64` unsigned. Transcribed from the
/// reference codec's `FinishUnquantize`.
pub fn finish_unquantize(comp: i32, signed: bool) -> i32 {
    if signed {
        if comp < 0 {
            -(((-comp) * 31) >> 5)
        } else {
            (comp * 31) >> 5
        }
    } else {
        (comp * 31) >> 6
    }
}

/// Reconstructs an absolute endpoint component from a delta stored relative
/// to `base`: sign-extends the delta to its stored width, adds it to
/// `base`, then wraps and (for signed blocks) re-sign-extends the sum to
/// `base_bits`. The wraparound is intentional: a delta that doesn't fit `
/// base_bits` worth of range folds rather than saturates, matching the
/// reference codec's modular `TransformInverse`.
pub fn transform_inverse(delta_raw: u32, delta_bits: u8, base: i32, base_bits: u8, signed: bool) -> i32 {
    let delta = sign_extend(delta_raw as i32, delta_bits);
    let mask = (1i32 << base_bits) - 1;
    let mut v = base.wrapping_add(delta) & mask;
    if signed {
        v = sign_extend(v, base_bits);
    }
    v
}

fn interpolate(a: i32, b: i32, weight_index: usize, index_bits: u8) -> i32 {
    let w = weights_for_precision(index_bits as u32)[weight_index] as i64;
    ((a as i64 * (WEIGHT_MAX as i64 - w) + b as i64 * w + WEIGHT_ROUND as i64) >> WEIGHT_SHIFT) as i32
}

fn find_mode(mode_code: u8, mode_bits: u8) -> Option<(usize, Bc6hModeInfo)> {
    BC6H_MODES
        .iter()
        .position(|m| m.mode_code == mode_code && m.mode_bits() == mode_bits)
        .map(|idx| (idx, BC6H_MODES[idx]))
}

fn read_mode(reader: &mut BitReader) -> Option<(usize, Bc6hModeInfo)> {
    let two = reader.peek(2);
    if two <= 1 {
        reader.read(2);
        find_mode(two as u8, 2)
    } else {
        let five = reader.read(5);
        find_mode(five as u8, 5)
    }
}

#[derive(Default, Clone, Copy)]
struct RawHeader {
    w: [u32; 3],
    x: [u32; 3],
    y: [u32; 3],
    z: [u32; 3],
    shape: u8,
}

fn read_header(reader: &mut BitReader, info: &Bc6hModeInfo, mode_idx: usize) -> RawHeader {
    let row = &layout::BC6H_DESC[layout::desc_row(mode_idx)];
    let start = layout::header_start(info.mode_bits());
    let mut raw = RawHeader::default();
    let mut shape_bits = 0u32;
    for &(field, bit_pos) in &row[start..] {
        if field == Field::Na {
            continue;
        }
        let bit = reader.read(1);
        match field {
            Field::Rw => raw.w[0] |= bit << bit_pos,
            Field::Gw => raw.w[1] |= bit << bit_pos,
            Field::Bw => raw.w[2] |= bit << bit_pos,
            Field::Rx => raw.x[0] |= bit << bit_pos,
            Field::Gx => raw.x[1] |= bit << bit_pos,
            Field::Bx => raw.x[2] |= bit << bit_pos,
            Field::Ry => raw.y[0] |= bit << bit_pos,
            Field::Gy => raw.y[1] |= bit << bit_pos,
            Field::By => raw.y[2] |= bit << bit_pos,
            Field::Rz => raw.z[0] |= bit << bit_pos,
            Field::Gz => raw.z[1] |= bit << bit_pos,
            Field::Bz => raw.z[2] |= bit << bit_pos,
            Field::D => shape_bits |= bit << bit_pos,
            Field::Na => unreachable!(),
        }
    }
    raw.shape = shape_bits as u8;
    raw
}

fn write_header(writer: &mut BitWriter, info: &Bc6hModeInfo, mode_idx: usize, raw: &RawHeader) {
    let row = &layout::BC6H_DESC[layout::desc_row(mode_idx)];
    let start = layout::header_start(info.mode_bits());
    for &(field, bit_pos) in &row[start..] {
        let bit = match field {
            Field::Na => continue,
            Field::Rw => (raw.w[0] >> bit_pos) & 1,
            Field::Gw => (raw.w[1] >> bit_pos) & 1,
            Field::Bw => (raw.w[2] >> bit_pos) & 1,
            Field::Rx => (raw.x[0] >> bit_pos) & 1,
            Field::Gx => (raw.x[1] >> bit_pos) & 1,
            Field::Bx => (raw.x[2] >> bit_pos) & 1,
            Field::Ry => (raw.y[0] >> bit_pos) & 1,
            Field::Gy => (raw.y[1] >> bit_pos) & 1,
            Field::By => (raw.y[2] >> bit_pos) & 1,
            Field::Rz => (raw.z[0] >> bit_pos) & 1,
            Field::Gz => (raw.z[1] >> bit_pos) & 1,
            Field::Bz => (raw.z[2] >> bit_pos) & 1,
            Field::D => (raw.shape as u32 >> bit_pos) & 1,
        };
        writer.write(bit, 1);
    }
}

fn reconstruct_endpoints(raw: &RawHeader, info: &Bc6hModeInfo, signed: bool) -> ([i32; 3], [i32; 3], [i32; 3], [i32; 3]) {
    let mut w = [0i32; 3];
    let mut x = [0i32; 3];
    let mut y = [0i32; 3];
    let mut z = [0i32; 3];
    for c in 0..3 {
        w[c] = if signed {
            sign_extend(raw.w[c] as i32, info.base_bits[c])
        } else {
            raw.w[c] as i32
        };
        x[c] = reconstruct_other(raw.x[c], info, c, w[c], signed);
        if info.partitioned {
            y[c] = reconstruct_other(raw.y[c], info, c, w[c], signed);
            z[c] = reconstruct_other(raw.z[c], info, c, w[c], signed);
        }
    }
    (w, x, y, z)
}

fn reconstruct_other(raw: u32, info: &Bc6hModeInfo, channel: usize, base: i32, signed: bool) -> i32 {
    if info.transformed {
        transform_inverse(raw, info.delta_bits[channel], base, info.base_bits[channel], signed)
    } else if signed {
        sign_extend(raw as i32, info.delta_bits[channel])
    } else {
        raw as i32
    }
}

/// Decodes one 16-byte BC6H block into 16 row-major HDR colors (alpha always
/// `1.0`). `signed` selects the SFLOAT16 (true) or UFLOAT16 (false) variant.
///
/// A reserved or otherwise invalid mode selector decodes to the format's
/// error color (see [`HdrColor::error_color`]).
pub fn decode_block(block: &[u8; BLOCK_SIZE], signed: bool) -> [HdrColor; BLOCK_PIXELS] {
    let mut reader = BitReader::new(block);
    let Some((mode_idx, info)) = read_mode(&mut reader) else {
        return [HdrColor::error_color(HdrColor::ERROR_BLACK); BLOCK_PIXELS];
    };

    let raw = read_header(&mut reader, &info, mode_idx);
    let (w, x, y, z) = reconstruct_endpoints(&raw, &info, signed);

    let uq = |v: [i32; 3]| -> [i32; 3] {
        let mut out = [0i32; 3];
        for c in 0..3 {
            out[c] = unquantize(v[c], info.base_bits[c], signed);
        }
        out
    };
    let uq_w = uq(w);
    let uq_x = uq(x);
    let uq_y = if info.partitioned { uq(y) } else { [0; 3] };
    let uq_z = if info.partitioned { uq(z) } else { [0; 3] };

    let index_bits = info.index_bits();
    let region_of = if info.partitioned {
        partition_regions(raw.shape, 2)
    } else {
        [0u8; 16]
    };

    let mut out = [HdrColor::default(); BLOCK_PIXELS];
    for i in 0..BLOCK_PIXELS {
        let anchor = i == 0 || (info.partitioned && i == fixup_index(raw.shape, 2, 1));
        let bits = if anchor { index_bits - 1 } else { index_bits };
        let index = reader.read(bits) as usize;

        let (ea, eb) = if region_of[i] == 0 { (&uq_w, &uq_x) } else { (&uq_y, &uq_z) };
        let mut channel = [0.0f32; 3];
        for c in 0..3 {
            let interp = interpolate(ea[c], eb[c], index, index_bits);
            let finished = finish_unquantize(interp, signed);
            channel[c] = int_to_half(finished, signed);
        }
        out[i] = HdrColor::new(channel[0], channel[1], channel[2], 1.0);
    }
    out
}

fn collect_region(raw_px: &[[i32; 3]; BLOCK_PIXELS], region_of: &[u8; BLOCK_PIXELS], region: u8, buf: &mut [HdrColor; BLOCK_PIXELS]) -> usize {
    let mut n = 0;
    for (i, &r) in region_of.iter().enumerate() {
        if r == region {
            let p = raw_px[i];
            buf[n] = HdrColor::new(p[0] as f32, p[1] as f32, p[2] as f32, 1.0);
            n += 1;
        }
    }
    n
}

fn round_clamp(c: HdrColor, lo: i32, hi: i32) -> [i32; 3] {
    [
        (c.r.round() as i32).clamp(lo, hi),
        (c.g.round() as i32).clamp(lo, hi),
        (c.b.round() as i32).clamp(lo, hi),
    ]
}

/// Quantizes one region's endpoint candidates, brute-forces the best index
/// per pixel against the reconstructed (post-quantization) endpoints, and
/// returns the quantized endpoint pair plus the resulting indices and total
/// squared error. The anchor pixel's search range is restricted to indices
/// whose top bit is clear, since its stored index is one bit narrower than
/// every other pixel's in the same region.
fn encode_region(
    raw_px: &[[i32; 3]; BLOCK_PIXELS],
    region_of: &[u8; BLOCK_PIXELS],
    region: u8,
    anchor: usize,
    val_lo: [i32; 3],
    val_hi: [i32; 3],
    base_bits: [u8; 3],
    signed: bool,
    index_bits: u8,
) -> ([i32; 3], [i32; 3], [u32; BLOCK_PIXELS], i64) {
    let steps = 1usize << index_bits;
    let qa: [i32; 3] = core::array::from_fn(|c| quantize(val_lo[c], base_bits[c], signed));
    let qb: [i32; 3] = core::array::from_fn(|c| quantize(val_hi[c], base_bits[c], signed));
    let uq_a: [i32; 3] = core::array::from_fn(|c| unquantize(qa[c], base_bits[c], signed));
    let uq_b: [i32; 3] = core::array::from_fn(|c| unquantize(qb[c], base_bits[c], signed));

    let mut indices = [0u32; BLOCK_PIXELS];
    let mut error = 0i64;
    for i in 0..BLOCK_PIXELS {
        if region_of[i] != region {
            continue;
        }
        let limit = if i == anchor { steps / 2 } else { steps };
        let mut best_k = 0usize;
        let mut best_err = i64::MAX;
        for k in 0..limit {
            let mut err = 0i64;
            for c in 0..3 {
                let v = interpolate(uq_a[c], uq_b[c], k, index_bits) as i64;
                let d = v - raw_px[i][c] as i64;
                err += d * d;
            }
            if err < best_err {
                best_err = err;
                best_k = k;
            }
        }
        indices[i] = best_k as u32;
        error += best_err;
    }
    (qa, qb, indices, error)
}

/// Encodes 16 row-major HDR colors into a BC6H block.
///
/// Every one of [`BC6H_MODES`]' 14 modes is tried (partitioned modes across
/// each of [`SHAPE_CANDIDATES`]'s 8 distinct shapes); each candidate's
/// region endpoints are seeded by [`optimize_rgb_subset`] and scored by
/// summed squared error against the source pixels once quantized and
/// reconstructed exactly as [`decode_block`] would. The lowest-error
/// candidate is written out.
pub fn encode_block(pixels: &[HdrColor; BLOCK_PIXELS], signed: bool) -> [u8; BLOCK_SIZE] {
    let mut raw_px = [[0i32; 3]; BLOCK_PIXELS];
    for (slot, px) in raw_px.iter_mut().zip(pixels.iter()) {
        *slot = [half_to_int(px.r, signed), half_to_int(px.g, signed), half_to_int(px.b, signed)];
    }

    let domain_lo = if signed { -F16MAX } else { 0 };
    let domain_hi = F16MAX;

    let mut buf = [HdrColor::default(); BLOCK_PIXELS];
    let mut best_error = i64::MAX;
    let mut best_mode_idx = 0usize;
    let mut best_raw = RawHeader::default();
    let mut best_indices = [0u32; BLOCK_PIXELS];

    for (mode_idx, info) in BC6H_MODES.iter().enumerate() {
        let shapes: &[u8] = if info.partitioned { &SHAPE_CANDIDATES } else { &SHAPE_CANDIDATES[..1] };
        for &shape in shapes {
            let region_of = if info.partitioned { partition_regions(shape, 2) } else { [0u8; BLOCK_PIXELS] };
            let index_bits = info.index_bits();

            let n0 = collect_region(&raw_px, &region_of, 0, &mut buf);
            let (lo0, hi0) = optimize_rgb_subset(&buf[..n0], 4);
            let (w_val, x_val, mut indices, mut error) = encode_region(
                &raw_px,
                &region_of,
                0,
                0,
                round_clamp(lo0, domain_lo, domain_hi),
                round_clamp(hi0, domain_lo, domain_hi),
                info.base_bits,
                signed,
                index_bits,
            );

            let (y_val, z_val) = if info.partitioned {
                let n1 = collect_region(&raw_px, &region_of, 1, &mut buf);
                let (lo1, hi1) = optimize_rgb_subset(&buf[..n1], 4);
                let anchor1 = fixup_index(shape, 2, 1);
                let (y, z, indices1, error1) = encode_region(
                    &raw_px,
                    &region_of,
                    1,
                    anchor1,
                    round_clamp(lo1, domain_lo, domain_hi),
                    round_clamp(hi1, domain_lo, domain_hi),
                    info.base_bits,
                    signed,
                    index_bits,
                );
                for i in 0..BLOCK_PIXELS {
                    if region_of[i] == 1 {
                        indices[i] = indices1[i];
                    }
                }
                error += error1;
                (y, z)
            } else {
                ([0i32; 3], [0i32; 3])
            };

            if error >= best_error {
                continue;
            }

            let mut raw = RawHeader { shape, ..RawHeader::default() };
            for c in 0..3 {
                let base_mask = (1u32 << info.base_bits[c]) - 1;
                let delta_mask = (1u32 << info.delta_bits[c]) - 1;
                raw.w[c] = (w_val[c] as u32) & base_mask;
                let x_raw = if info.transformed { x_val[c] - w_val[c] } else { x_val[c] };
                raw.x[c] = (x_raw as u32) & delta_mask;
                if info.partitioned {
                    let y_raw = if info.transformed { y_val[c] - w_val[c] } else { y_val[c] };
                    let z_raw = if info.transformed { z_val[c] - w_val[c] } else { z_val[c] };
                    raw.y[c] = (y_raw as u32) & delta_mask;
                    raw.z[c] = (z_raw as u32) & delta_mask;
                }
            }

            best_error = error;
            best_mode_idx = mode_idx;
            best_raw = raw;
            best_indices = indices;
        }
    }

    let info = BC6H_MODES[best_mode_idx];
    let index_bits = info.index_bits();
    let mut writer = BitWriter::new();
    writer.write(info.mode_code as u32, info.mode_bits());
    write_header(&mut writer, &info, best_mode_idx, &best_raw);
    for (i, &idx) in best_indices.iter().enumerate() {
        let anchor = i == 0 || (info.partitioned && i == fixup_index(best_raw.shape, 2, 1));
        let bits = if anchor { index_bits - 1 } else { index_bits };
        writer.write(idx, bits);
    }
    writer.finish()
}

/// Decodes a flat buffer of BC6H blocks into a flat buffer of HDR pixels.
pub fn decode_blocks(blocks: &[u8], signed: bool, out: &mut [HdrColor]) -> Result<(), BlockSliceError> {
    if blocks.len() % BLOCK_SIZE != 0 {
        return Err(BlockSliceError::InvalidBlockBufferLength { expected: BLOCK_SIZE, actual: blocks.len() });
    }
    let num_blocks = blocks.len() / BLOCK_SIZE;
    if out.len() != num_blocks * BLOCK_PIXELS {
        return Err(BlockSliceError::InvalidPixelBufferLength { expected: num_blocks * BLOCK_PIXELS, actual: out.len() });
    }
    for (block, out_px) in blocks.chunks_exact(BLOCK_SIZE).zip(out.chunks_exact_mut(BLOCK_PIXELS)) {
        let block: [u8; BLOCK_SIZE] = block.try_into().unwrap();
        out_px.copy_from_slice(&decode_block(&block, signed));
    }
    Ok(())
}

/// Encodes a flat buffer of HDR pixels into a flat buffer of BC6H blocks.
pub fn encode_blocks(pixels: &[HdrColor], signed: bool, out: &mut [u8]) -> Result<(), BlockSliceError> {
    if pixels.len() % BLOCK_PIXELS != 0 {
        return Err(BlockSliceError::InvalidPixelBufferLength { expected: BLOCK_PIXELS, actual: pixels.len() });
    }
    let num_blocks = pixels.len() / BLOCK_PIXELS;
    if out.len() != num_blocks * BLOCK_SIZE {
        return Err(BlockSliceError::InvalidBlockBufferLength { expected: num_blocks * BLOCK_SIZE, actual: out.len() });
    }
    for (px, out_block) in pixels.chunks_exact(BLOCK_PIXELS).zip(out.chunks_exact_mut(BLOCK_SIZE)) {
        let px: [HdrColor; BLOCK_PIXELS] = px.try_into().unwrap();
        out_block.copy_from_slice(&encode_block(&px, signed));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::test_prelude::*;
    use super::*;

    #[test]
    fn solid_unsigned_block_round_trips() {
        let pixels = solid_hdr_block(0.5, 0.25, 0.75);
        let block = encode_block(&pixels, false);
        let decoded = decode_block(&block, false);
        for c in decoded {
            assert!((c.r - 0.5).abs() < 0.02);
            assert!((c.g - 0.25).abs() < 0.02);
            assert!((c.b - 0.75).abs() < 0.02);
        }
    }

    #[test]
    fn solid_signed_block_round_trips_negative_values() {
        let pixels = solid_hdr_block(-0.5, -0.25, -0.75);
        let block = encode_block(&pixels, true);
        let decoded = decode_block(&block, true);
        for c in decoded {
            assert!((c.r - (-0.5)).abs() < 0.02);
            assert!((c.g - (-0.25)).abs() < 0.02);
            assert!((c.b - (-0.75)).abs() < 0.02);
        }
    }

    #[test]
    fn gradient_block_preserves_endpoint_order() {
        let pixels = gradient_hdr_block();
        let block = encode_block(&pixels, false);
        let decoded = decode_block(&block, false);
        assert!(decoded[0].r < decoded[15].r);
    }

    #[test]
    fn reserved_mode_selector_decodes_to_error_color() {
        // Mode selector bits [0,1,1,1,1] (two=0b11 -> read 5; five bits
        // 0b11111 = 0x1F, a reserved code per BC6H_RESERVED_MODES).
        let mut block = [0u8; BLOCK_SIZE];
        block[0] = 0x1F;
        let decoded = decode_block(&block, false);
        assert_eq!(decoded[0], HdrColor::error_color(HdrColor::ERROR_BLACK));
    }

    #[test]
    fn encode_emits_a_mode_that_decodes_back_to_a_valid_selector() {
        let pixels = [HdrColor::new(0.1, 0.2, 0.3, 1.0); BLOCK_PIXELS];
        let block = encode_block(&pixels, false);
        let mut reader = BitReader::new(&block);
        assert!(read_mode(&mut reader).is_some(), "encoder must always emit a valid mode");
    }

    #[test]
    fn two_corner_block_keeps_corners_distinct_after_round_trip() {
        let mut pixels = [HdrColor::new(0.05, 0.05, 0.05, 1.0); BLOCK_PIXELS];
        for p in pixels.iter_mut().skip(12) {
            *p = HdrColor::new(0.95, 0.95, 0.95, 1.0);
        }
        let block = encode_block(&pixels, false);
        let decoded = decode_block(&block, false);
        assert!(decoded[0].r < 0.2);
        assert!(decoded[15].r > 0.8);
    }

    #[test]
    fn decode_blocks_rejects_misaligned_buffer() {
        let mut out = [HdrColor::default(); 16];
        assert!(decode_blocks(&[0u8; 15], false, &mut out).is_err());
    }

    #[test]
    fn sign_extend_preserves_small_positive_values() {
        assert_eq!(sign_extend(0b011, 3), 3);
        assert_eq!(sign_extend(0b111, 3), -1);
    }
}
