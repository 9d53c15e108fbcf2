//! BC7 block codec: 8-mode LDR RGBA compression.
//!
//! A BC7 block is 16 bytes. The mode selector is unary: the block's bits are
//! scanned from bit 0 until the first `1` bit is found, and the mode is the
//! count of `0` bits seen (`0..=7`; a block with no `1` bit anywhere in its
//! first 8 bits, or with the `1` at position 7, selects mode 7 or is treated
//! as reserved if not even that is found). Every mode's remaining fields
//! follow in one fixed sequential order: partition shape, rotation, index
//! mode, then every endpoint channel (red across all endpoints, then green,
//! then blue, then alpha), then P-bits, then the primary index stream, then
//! an optional secondary index stream.
//!
//! Modes 0-3 and 7 partition the block into 2 or 3 regions with a 4- or
//! 6-bit shape selector; modes 4-6 cover the whole block as a single
//! region. Endpoint precision, whether a P-bit is appended to each channel,
//! and whether alpha is stored at all, vary per mode ([`Bc7ModeInfo`]).
//! Region 0's first pixel (index 0) is always the fix-up/anchor position
//! for the primary index stream; regions 1 and 2 each have their own
//! fix-up position, read with one fewer index bit (the MSB is implied 0).
//! Modes 4 and 5 carry a second index stream for a channel the primary
//! stream doesn't drive (and mode 4's index-mode bit picks which stream
//! drives color vs. alpha); both are always single-region, so their
//! secondary stream's only anchor is pixel 0.
//!
//! Endpoints are quantized to `color_bits`/`alpha_bits`, then (if the mode
//! has P-bits) widened by one bit per channel before being expanded back to
//! 8 bits with [`unquantize8`]. [`encode_block`] searches all 8 modes
//! (partitioned modes additionally searched across their distinct partition
//! shapes, rotation-capable modes across all 4 rotations, and dual-index
//! modes across both index-mode assignments): each candidate's region
//! endpoints are seeded by
//! [`texel_block_compress_common::rgb_optimizer::optimize_rgb_subset`] for
//! RGB and a plain per-region min/max for alpha, then quantized and
//! reconstructed exactly as [`decode_block`] would and scored by
//! reconstruction error against the source pixels; the lowest-error
//! candidate is the one written out.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

use texel_block_compress_common::rgb_optimizer::optimize_rgb_subset;
use texel_block_compress_common::tables::{
    fixup_index, interpolate_u8, partition_regions, Bc7ModeInfo, BC7_MODES,
};
use texel_block_compress_common::{BlockSliceError, HdrColor, Rgba};

#[cfg(test)]
mod test_prelude;

/// Size in bytes of one BC7 block.
pub const BLOCK_SIZE: usize = 16;
/// Number of pixels decoded from (or encoded into) one block.
pub const BLOCK_PIXELS: usize = 16;

struct BitReader<'a> {
    block: &'a [u8; BLOCK_SIZE],
    pos: usize,
}

impl<'a> BitReader<'a> {
    fn new(block: &'a [u8; BLOCK_SIZE]) -> Self {
        Self { block, pos: 0 }
    }

    fn read(&mut self, count: u8) -> u32 {
        let mut value = 0u32;
        for i in 0..count {
            let bit_pos = self.pos + i as usize;
            let byte = self.block[bit_pos / 8];
            let bit = (byte >> (bit_pos % 8)) & 1;
            value |= (bit as u32) << i;
        }
        self.pos += count as usize;
        value
    }

    /// Consumes the unary mode prefix: zero or more `0` bits terminated by a
    /// `1` bit. Returns the number of `0` bits seen, or `None` if all 8
    /// bytes are exhausted without finding a terminating `1` (reserved).
    fn read_unary_mode(&mut self) -> Option<u8> {
        let mut mode = 0u8;
        loop {
            if self.pos >= BLOCK_SIZE * 8 {
                return None;
            }
            if self.read(1) == 1 {
                return Some(mode);
            }
            mode += 1;
            if mode > 7 {
                return None;
            }
        }
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

    /// Writes the unary prefix for `mode`: `mode` zero bits then a one bit.
    fn write_unary_mode(&mut self, mode: u8) {
        self.write(0, mode);
        self.write(1, 1);
    }

    fn finish(self) -> [u8; BLOCK_SIZE] {
        self.block
    }
}

/// BC7's 8-bit variable-precision endpoint quantizer:
/// `rnd = min(255, comp + (1 << (7 - prec))); rnd >> (8 - prec)`.
pub fn quantize8(comp: u8, prec: u8) -> u8 {
    let comp = comp as u32;
    let rnd = (comp + (1 << (7 - prec))).min(255);
    (rnd >> (8 - prec)) as u8
}

/// BC7's inverse: replicates the low bits into the vacated high bits so
/// that the all-ones code still expands to 255 (`comp << (8-prec) |
/// comp >> (2*prec-8)`, simplified here to the reference's two-shift form).
/// Returns the input unchanged when `prec` is 0 or 8 (no data stored, or
/// already full precision).
pub fn unquantize8(comp: u8, prec: u8) -> u8 {
    if prec == 0 {
        return 0;
    }
    if prec >= 8 {
        return comp;
    }
    let comp = (comp as u32) << (8 - prec);
    (comp | (comp >> prec)) as u8
}

fn with_p_precision(info: &Bc7ModeInfo, channel: usize) -> u8 {
    let base = if channel < 3 { info.color_bits } else { info.alpha_bits };
    if info.has_pbits() && base > 0 {
        base + 1
    } else {
        base
    }
}

/// Anchor (fix-up) pixel indices for each region of `subsets` regions under
/// `shape`. Unused slots are `usize::MAX` and never match a real pixel
/// index.
fn anchors_for(subsets: u8, shape: u8) -> [usize; 3] {
    match subsets {
        1 => [0, usize::MAX, usize::MAX],
        2 => [0, fixup_index(shape, 2, 1), usize::MAX],
        _ => [0, fixup_index(shape, 3, 1), fixup_index(shape, 3, 2)],
    }
}

/// Decodes one 16-byte BC7 block into 16 row-major RGBA pixels.
///
/// A reserved mode selector (unary prefix with no terminating `1` bit
/// within the block) decodes to transparent black, matching the reference
/// decoder's behavior for blocks it cannot interpret.
pub fn decode_block(block: &[u8; BLOCK_SIZE]) -> [Rgba; BLOCK_PIXELS] {
    let mut reader = BitReader::new(block);
    let Some(mode) = reader.read_unary_mode() else {
        return [Rgba::new(0, 0, 0, 0); BLOCK_PIXELS];
    };
    let info = BC7_MODES[mode as usize];

    let shape = reader.read(info.partition_bits) as u8;
    let rotation = reader.read(info.rotation_bits) as u8;
    let index_mode = reader.read(info.index_mode_bits) as u8;

    let num_endpoints = info.subsets as usize * 2;
    let mut endpoints = [[0u8; 4]; 6];
    for ch in 0..3 {
        for ep in endpoints.iter_mut().take(num_endpoints) {
            ep[ch] = reader.read(info.color_bits) as u8;
        }
    }
    for ep in endpoints.iter_mut().take(num_endpoints) {
        ep[3] = if info.has_alpha() { reader.read(info.alpha_bits) as u8 } else { 255 };
    }

    let mut pbits = [0u8; 6];
    for p in pbits.iter_mut().take(info.pbits_total as usize) {
        *p = reader.read(1) as u8;
    }
    if info.has_pbits() {
        for (i, ep) in endpoints.iter_mut().take(num_endpoints).enumerate() {
            let pi = i * info.pbits_total as usize / num_endpoints;
            for (ch, comp) in ep.iter_mut().enumerate() {
                if with_p_precision(&info, ch) != if ch < 3 { info.color_bits } else { info.alpha_bits } {
                    *comp = (*comp << 1) | pbits[pi];
                }
            }
        }
    }
    for ep in endpoints.iter_mut().take(num_endpoints) {
        for ch in 0..3 {
            ep[ch] = unquantize8(ep[ch], with_p_precision(&info, ch));
        }
        if info.has_alpha() {
            ep[3] = unquantize8(ep[3], with_p_precision(&info, 3));
        }
    }

    let region_of = if info.subsets == 1 { [0u8; 16] } else { partition_regions(shape, info.subsets) };
    let anchors = anchors_for(info.subsets, shape);

    let index_bits = info.index_bits_primary;
    let index_bits2 = info.index_bits_secondary;
    let mut primary = [0u32; 16];
    for (i, slot) in primary.iter_mut().enumerate() {
        let bits = if anchors.contains(&i) { index_bits - 1 } else { index_bits };
        *slot = reader.read(bits);
    }
    let mut secondary = [0u32; 16];
    if index_bits2 > 0 {
        for (i, slot) in secondary.iter_mut().enumerate() {
            let bits = if i == 0 { index_bits2 - 1 } else { index_bits2 };
            *slot = reader.read(bits);
        }
    }

    let mut out = [Rgba::default(); BLOCK_PIXELS];
    for i in 0..BLOCK_PIXELS {
        let region = region_of[i] as usize;
        let e0 = endpoints[region * 2];
        let e1 = endpoints[region * 2 + 1];
        let (color_w, color_idx_bits, alpha_w, alpha_idx_bits) = if index_bits2 == 0 {
            (primary[i], index_bits, primary[i], index_bits)
        } else if index_mode == 0 {
            (primary[i], index_bits, secondary[i], index_bits2)
        } else {
            (secondary[i], index_bits2, primary[i], index_bits)
        };
        let mut px = [0u8; 4];
        for ch in 0..3 {
            px[ch] = interpolate_u8(e0[ch] as u32, e1[ch] as u32, color_w as usize, color_idx_bits as u32) as u8;
        }
        px[3] = interpolate_u8(e0[3] as u32, e1[3] as u32, alpha_w as usize, alpha_idx_bits as u32) as u8;
        match rotation {
            1 => px.swap(0, 3),
            2 => px.swap(1, 3),
            3 => px.swap(2, 3),
            _ => {}
        }
        out[i] = Rgba::new(px[0], px[1], px[2], px[3]);
    }
    out
}

/// Partition shapes tried for every 2-subset mode: `partition_regions(_, 2)`
/// only depends on `shape % 8`, so these 8 values cover every distinct
/// 2-region partition this crate can produce.
const SHAPE_CANDIDATES_2: [u8; 8] = [0, 1, 2, 3, 4, 5, 6, 7];
/// Partition shapes tried for every 3-subset mode, for the same reason
/// restricted to `shape % 4`.
const SHAPE_CANDIDATES_3: [u8; 4] = [0, 1, 2, 3];

/// Which P-bit slot (of `pbits_total`) endpoint `i` shares, matching the
/// grouping [`decode_block`] reads back. Most modes give each endpoint its
/// own slot; mode 1 groups a region's two endpoints under one shared slot.
fn pbit_group_for(i: usize, pbits_total: u8, num_endpoints: usize) -> usize {
    i * pbits_total as usize / num_endpoints
}

/// Picks the `prec`-bit code (plus the already-chosen P-bit `p`) that
/// reconstructs closest to `comp`, by exhaustive search over the small
/// candidate space (`2^prec <= 128`).
fn quantize_channel_with_pbit(comp: u8, p: u8, prec: u8) -> (u8, u8) {
    if prec == 0 {
        return (0, 255);
    }
    let full_prec = prec + 1;
    let mut best_code = 0u8;
    let mut best_recon = 0u8;
    let mut best_err = i32::MAX;
    for code in 0..(1u16 << prec) {
        let raw = ((code as u32) << 1) as u8 | p;
        let recon = unquantize8(raw, full_prec);
        let err = (recon as i32 - comp as i32).abs();
        if err < best_err {
            best_err = err;
            best_code = code as u8;
            best_recon = recon;
        }
    }
    (best_code, best_recon)
}

/// Resolves per-channel codes, P-bits, and reconstructed 8-bit values for
/// every endpoint of one mode/shape/rotation candidate.
///
/// When the mode has P-bits, endpoints that share a slot
/// ([`pbit_group_for`]) are solved together: both P-bit values are tried
/// and the one minimizing total squared reconstruction error across every
/// channel and every endpoint in the group wins.
fn quantize_endpoints(
    info: &Bc7ModeInfo,
    endpoints: &[[u8; 4]; 6],
    num_endpoints: usize,
) -> ([[u8; 4]; 6], [[u8; 4]; 6], [u8; 6]) {
    let mut codes = [[0u8; 4]; 6];
    let mut recon = [[0u8; 4]; 6];
    let mut pbits = [0u8; 6];

    if !info.has_pbits() {
        for i in 0..num_endpoints {
            for ch in 0..4 {
                let prec = if ch < 3 { info.color_bits } else { info.alpha_bits };
                if prec == 0 {
                    recon[i][ch] = 255;
                    continue;
                }
                codes[i][ch] = quantize8(endpoints[i][ch], prec);
                recon[i][ch] = unquantize8(codes[i][ch], prec);
            }
        }
        return (codes, recon, pbits);
    }

    for slot in 0..info.pbits_total as usize {
        let mut best_p = 0u8;
        let mut best_err = i64::MAX;
        let mut best_codes = [[0u8; 4]; 6];
        let mut best_recon = [[0u8; 4]; 6];
        for p in 0..2u8 {
            let mut cand_codes = [[0u8; 4]; 6];
            let mut cand_recon = [[0u8; 4]; 6];
            let mut err = 0i64;
            for i in 0..num_endpoints {
                if pbit_group_for(i, info.pbits_total, num_endpoints) != slot {
                    continue;
                }
                for ch in 0..4 {
                    let prec = if ch < 3 { info.color_bits } else { info.alpha_bits };
                    let (code, rv) = quantize_channel_with_pbit(endpoints[i][ch], p, prec);
                    cand_codes[i][ch] = code;
                    cand_recon[i][ch] = rv;
                    let d = (rv as i32 - endpoints[i][ch] as i32) as i64;
                    err += d * d;
                }
            }
            if err < best_err {
                best_err = err;
                best_p = p;
                best_codes = cand_codes;
                best_recon = cand_recon;
            }
        }
        for i in 0..num_endpoints {
            if pbit_group_for(i, info.pbits_total, num_endpoints) == slot {
                codes[i] = best_codes[i];
                recon[i] = best_recon[i];
                pbits[i] = best_p;
            }
        }
    }
    (codes, recon, pbits)
}

/// Swaps channel 3 (alpha) with the channel `rotation` selects (`1`=red,
/// `2`=green, `3`=blue); `0` is a no-op. Self-inverse, so applying it to
/// the source pixels before searching and again to the interpolated result
/// in [`decode_block`] round-trips.
fn apply_rotation(p: [u8; 4], rotation: u8) -> [u8; 4] {
    let mut p = p;
    match rotation {
        1 => p.swap(0, 3),
        2 => p.swap(1, 3),
        3 => p.swap(2, 3),
        _ => {}
    }
    p
}

fn collect_region_rgb(
    px: &[[u8; 4]; BLOCK_PIXELS],
    region_of: &[u8; BLOCK_PIXELS],
    region: u8,
    buf: &mut [HdrColor; BLOCK_PIXELS],
) -> usize {
    let mut n = 0;
    for (i, &r) in region_of.iter().enumerate() {
        if r == region {
            let p = px[i];
            buf[n] = HdrColor::new(p[0] as f32, p[1] as f32, p[2] as f32, 1.0);
            n += 1;
        }
    }
    n
}

fn region_alpha_minmax(px: &[[u8; 4]; BLOCK_PIXELS], region_of: &[u8; BLOCK_PIXELS], region: u8) -> (u8, u8) {
    let mut lo = 255u8;
    let mut hi = 0u8;
    for (i, &r) in region_of.iter().enumerate() {
        if r == region {
            lo = lo.min(px[i][3]);
            hi = hi.max(px[i][3]);
        }
    }
    (lo, hi)
}

/// Brute-forces the best index (restricted to the lower half of the range
/// at `anchor`, since its stored index is one bit narrower) for every pixel
/// of `region`, scoring only the channels listed in `channels` — `&[0,1,2]`
/// for a color-only stream, `&[3]` for an alpha-only stream, or all four
/// for a stream that drives both.
fn assign_region_indices(
    px: &[[u8; 4]; BLOCK_PIXELS],
    region_of: &[u8; BLOCK_PIXELS],
    region: u8,
    anchor: usize,
    e0: [u8; 4],
    e1: [u8; 4],
    index_bits: u8,
    channels: &[usize],
) -> ([u32; BLOCK_PIXELS], i64) {
    let steps = 1usize << index_bits;
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
            for &ch in channels {
                let v = interpolate_u8(e0[ch] as u32, e1[ch] as u32, k, index_bits as u32) as i64;
                let d = v - px[i][ch] as i64;
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
    (indices, error)
}

/// Encodes 16 row-major RGBA pixels into one 16-byte BC7 block.
///
/// Every one of [`BC7_MODES`]' 8 modes is tried, partitioned modes across
/// each of their distinct shapes, rotation-capable modes across all 4
/// rotations, and dual-index modes across both index-mode assignments.
/// Each candidate's region endpoints are seeded by [`optimize_rgb_subset`]
/// (RGB) and a per-region min/max (alpha), quantized by
/// [`quantize_endpoints`], and scored by summed squared error against the
/// source pixels once reconstructed exactly as [`decode_block`] would. The
/// lowest-error candidate is written out. `flags` is accepted for API
/// parity with the other codecs in this workspace; no bit in it currently
/// changes this function's output.
pub fn encode_block(pixels: &[Rgba; BLOCK_PIXELS], _flags: u32) -> [u8; BLOCK_SIZE] {
    let mut best_error = i64::MAX;
    let mut best_mode = 0usize;
    let mut best_shape = 0u8;
    let mut best_rotation = 0u8;
    let mut best_index_mode = 0u8;
    let mut best_codes = [[0u8; 4]; 6];
    let mut best_pbits = [0u8; 6];
    let mut best_primary = [0u32; BLOCK_PIXELS];
    let mut best_secondary = [0u32; BLOCK_PIXELS];

    let mut buf = [HdrColor::default(); BLOCK_PIXELS];

    for (mode_idx, info) in BC7_MODES.iter().enumerate() {
        let num_endpoints = info.subsets as usize * 2;
        let shapes: &[u8] = match info.subsets {
            1 => &SHAPE_CANDIDATES_2[..1],
            2 => &SHAPE_CANDIDATES_2,
            _ => &SHAPE_CANDIDATES_3,
        };
        let rotations: &[u8] = if info.rotation_bits > 0 { &[0, 1, 2, 3] } else { &[0] };
        let index_modes: &[u8] = if info.index_mode_bits > 0 { &[0, 1] } else { &[0] };

        for &shape in shapes {
            let region_of = if info.subsets == 1 { [0u8; BLOCK_PIXELS] } else { partition_regions(shape, info.subsets) };

            for &rotation in rotations {
                let mut rpx = [[0u8; 4]; BLOCK_PIXELS];
                for (i, p) in pixels.iter().enumerate() {
                    rpx[i] = apply_rotation([p.r, p.g, p.b, p.a], rotation);
                }

                let mut raw_endpoints = [[0u8; 4]; 6];
                for region in 0..info.subsets {
                    let n = collect_region_rgb(&rpx, &region_of, region, &mut buf);
                    let (lo, hi) = optimize_rgb_subset(&buf[..n], 4);
                    let (alo, ahi) = region_alpha_minmax(&rpx, &region_of, region);
                    let idx0 = region as usize * 2;
                    raw_endpoints[idx0] = [
                        (lo.r.round() as i32).clamp(0, 255) as u8,
                        (lo.g.round() as i32).clamp(0, 255) as u8,
                        (lo.b.round() as i32).clamp(0, 255) as u8,
                        alo,
                    ];
                    raw_endpoints[idx0 + 1] = [
                        (hi.r.round() as i32).clamp(0, 255) as u8,
                        (hi.g.round() as i32).clamp(0, 255) as u8,
                        (hi.b.round() as i32).clamp(0, 255) as u8,
                        ahi,
                    ];
                }

                let (codes, recon, pbits) = quantize_endpoints(info, &raw_endpoints, num_endpoints);

                for &index_mode in index_modes {
                    let (primary, secondary, idx_error) = if info.index_bits_secondary == 0 {
                        let anchors = anchors_for(info.subsets, shape);
                        let mut primary = [0u32; BLOCK_PIXELS];
                        let mut error = 0i64;
                        for region in 0..info.subsets {
                            let e0 = recon[region as usize * 2];
                            let e1 = recon[region as usize * 2 + 1];
                            let anchor = anchors[region as usize];
                            let (region_idx, region_err) = assign_region_indices(
                                &rpx, &region_of, region, anchor, e0, e1, info.index_bits_primary, &[0, 1, 2, 3],
                            );
                            for i in 0..BLOCK_PIXELS {
                                if region_of[i] == region {
                                    primary[i] = region_idx[i];
                                }
                            }
                            error += region_err;
                        }
                        (primary, [0u32; BLOCK_PIXELS], error)
                    } else {
                        let e0 = recon[0];
                        let e1 = recon[1];
                        let (color_bits, alpha_bits, color_is_primary) = if index_mode == 0 {
                            (info.index_bits_primary, info.index_bits_secondary, true)
                        } else {
                            (info.index_bits_secondary, info.index_bits_primary, false)
                        };
                        let (color_idx, color_err) = assign_region_indices(&rpx, &region_of, 0, 0, e0, e1, color_bits, &[0, 1, 2]);
                        let (alpha_idx, alpha_err) = assign_region_indices(&rpx, &region_of, 0, 0, e0, e1, alpha_bits, &[3]);
                        let (primary, secondary) = if color_is_primary { (color_idx, alpha_idx) } else { (alpha_idx, color_idx) };
                        (primary, secondary, color_err + alpha_err)
                    };

                    if idx_error >= best_error {
                        continue;
                    }

                    best_error = idx_error;
                    best_mode = mode_idx;
                    best_shape = shape;
                    best_rotation = rotation;
                    best_index_mode = index_mode;
                    best_codes = codes;
                    best_pbits = pbits;
                    best_primary = primary;
                    best_secondary = secondary;
                }
            }
        }
    }

    let info = BC7_MODES[best_mode];
    let num_endpoints = info.subsets as usize * 2;

    let mut writer = BitWriter::new();
    writer.write_unary_mode(best_mode as u8);
    writer.write(best_shape as u32, info.partition_bits);
    writer.write(best_rotation as u32, info.rotation_bits);
    writer.write(best_index_mode as u32, info.index_mode_bits);
    for ch in 0..3 {
        for ep in best_codes.iter().take(num_endpoints) {
            writer.write(ep[ch] as u32, info.color_bits);
        }
    }
    if info.has_alpha() {
        for ep in best_codes.iter().take(num_endpoints) {
            writer.write(ep[3] as u32, info.alpha_bits);
        }
    }
    if info.has_pbits() {
        for slot in 0..info.pbits_total as usize {
            let i = (0..num_endpoints)
                .find(|&i| pbit_group_for(i, info.pbits_total, num_endpoints) == slot)
                .expect("every P-bit slot has at least one endpoint");
            writer.write(best_pbits[i] as u32, 1);
        }
    }
    let anchors = anchors_for(info.subsets, best_shape);
    for (i, &idx) in best_primary.iter().enumerate() {
        let bits = if anchors.contains(&i) { info.index_bits_primary - 1 } else { info.index_bits_primary };
        writer.write(idx, bits);
    }
    if info.index_bits_secondary > 0 {
        for (i, &idx) in best_secondary.iter().enumerate() {
            let bits = if i == 0 { info.index_bits_secondary - 1 } else { info.index_bits_secondary };
            writer.write(idx, bits);
        }
    }
    writer.finish()
}

/// Decodes a contiguous buffer of 16-byte BC7 blocks into a pixel buffer.
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

/// Encodes a contiguous pixel buffer into a buffer of 16-byte BC7 blocks.
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
    use super::test_prelude::*;
    use super::*;

    #[test]
    fn quantize8_unquantize8_round_trip_full_precision() {
        for v in [0u8, 1, 127, 128, 254, 255] {
            let q = quantize8(v, 7);
            let u = unquantize8(q, 7);
            assert!((u as i32 - v as i32).abs() <= 2);
        }
    }

    #[test]
    fn unquantize8_all_ones_expands_to_max() {
        assert_eq!(unquantize8(0b1111, 4), 255);
        assert_eq!(unquantize8(0b111_1111, 7), 255);
    }

    #[test]
    fn unquantize8_zero_precision_yields_zero() {
        assert_eq!(unquantize8(5, 0), 0);
    }

    #[test]
    fn solid_block_round_trips() {
        let pixels = solid_block(100, 150, 200, 255);
        let block = encode_block(&pixels, 0);
        let decoded = decode_block(&block);
        for p in decoded {
            assert!((p.r as i32 - 100).abs() <= 2);
            assert!((p.g as i32 - 150).abs() <= 2);
            assert!((p.b as i32 - 200).abs() <= 2);
            assert!((p.a as i32 - 255).abs() <= 2);
        }
    }

    #[test]
    fn gradient_block_preserves_endpoint_order() {
        let pixels = gradient_block();
        let block = encode_block(&pixels, 0);
        let decoded = decode_block(&block);
        assert!(decoded[0].r < decoded[15].r);
    }

    #[test]
    fn encode_emits_a_mode_that_decodes_cleanly() {
        let pixels = [Rgba::new(10, 20, 30, 40); BLOCK_PIXELS];
        let block = encode_block(&pixels, 0);
        let mut reader = BitReader::new(&block);
        assert!(reader.read_unary_mode().is_some(), "encoder must always emit a valid mode");
    }

    #[test]
    fn two_corner_block_keeps_corners_distinct_after_round_trip() {
        let mut pixels = [Rgba::new(10, 10, 10, 255); BLOCK_PIXELS];
        for p in pixels.iter_mut().skip(12) {
            *p = Rgba::new(240, 240, 240, 0);
        }
        let block = encode_block(&pixels, 0);
        let decoded = decode_block(&block);
        assert!(decoded[0].r < 50);
        assert!(decoded[15].r > 200);
    }

    #[test]
    fn reserved_mode_decodes_to_transparent_black() {
        // All bits 0: the unary scan never finds a terminating 1.
        let block = [0u8; BLOCK_SIZE];
        let decoded = decode_block(&block);
        for p in decoded {
            assert_eq!(p, Rgba::new(0, 0, 0, 0));
        }
    }

    #[test]
    fn mode4_rotation_swaps_alpha_with_selected_channel() {
        // Mode 4 unary prefix: 0000 1 (4 zero bits then a one bit).
        let mut writer = BitWriter::new();
        writer.write_unary_mode(4);
        writer.write(0, 0); // no partition bits
        writer.write(1, 2); // rotation = 1 (swap R/A)
        writer.write(0, 1); // index_mode = 0
        // Endpoints: R, G, B at 5 bits, A at 6 bits, two endpoints each.
        writer.write(0, 5);
        writer.write(31, 5);
        writer.write(0, 5);
        writer.write(31, 5);
        writer.write(0, 5);
        writer.write(31, 5);
        writer.write(63, 6);
        writer.write(0, 6);
        // Primary index stream (2 bits, pixel 0 reads 1 bit).
        for i in 0..16 {
            writer.write(0, if i == 0 { 1 } else { 2 });
        }
        // Secondary index stream (3 bits, pixel 0 reads 2 bits).
        for i in 0..16 {
            writer.write(0, if i == 0 { 2 } else { 3 });
        }
        let block = writer.finish();
        let decoded = decode_block(&block);
        // Rotation 1 swaps R and A: the high-alpha endpoint (A=63 at
        // endpoint 0) becomes visible in the red channel instead.
        assert!(decoded[0].r > decoded[0].a);
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
