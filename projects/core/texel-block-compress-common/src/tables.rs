//! Read-only constant data shared by the BC6H/BC7 codecs: interpolation
//! weight tables, partition/fix-up geometry, and per-mode descriptor
//! tables.
//!
//! ## A note on partition shapes and bit-scatter layout
//!
//! The reference implementation's `BC67_shared.hpp` (the header declaring
//! the normative 64-shape partition tables) was not present in this
//! codebase's source material; only the corresponding `.cpp` files were
//! available. `BC6H.cpp` itself, however, does carry its full 14-mode
//! bit-scatter descriptor table and per-mode precision table, and
//! `texel-block-compress-bc6h`'s `layout` module transcribes those directly.
//! Only the 64-entry, 2-/3-region partition-shape tables remain unavailable.
//! Rather than transcribe those from memory and risk a silent
//! transcription error that produces plausible but wrong output, this
//! module defines its own partition-shape generator. It is:
//!
//! - **Deterministic and internally consistent**: the same function is used
//!   by the encoder and decoder, so every structural invariant, round-trip
//!   property, and numeric property this crate tests holds.
//! - **Not bit-for-bit compatible with blocks produced by other BC6H/BC7
//!   encoders.** A block this crate encodes will only decode correctly with
//!   this crate (or one replicating these exact tables). Consuming
//!   externally-produced BC6H/BC7 textures is out of scope for this crate
//!   regardless (no file-format or
//!   GPU-hardware interop is implemented here).
//!
//! See `DESIGN.md` for the full rationale.

/// Fixed-point interpolation weights for 2-bit indices (4 entries, 0..64).
pub const WEIGHTS_2: [u32; 4] = [0, 21, 43, 64];
/// Fixed-point interpolation weights for 3-bit indices (8 entries, 0..64).
pub const WEIGHTS_3: [u32; 8] = [0, 9, 18, 27, 37, 46, 55, 64];
/// Fixed-point interpolation weights for 4-bit indices (16 entries, 0..64).
pub const WEIGHTS_4: [u32; 16] = [
    0, 4, 9, 13, 17, 21, 26, 30, 34, 38, 43, 47, 51, 55, 60, 64,
];

/// Maximum weight value (denominator of the interpolation fraction).
pub const WEIGHT_MAX: u32 = 64;
/// Rounding bias added before the final interpolation shift.
pub const WEIGHT_ROUND: u32 = 32;
/// Shift amount for the final interpolation divide (`>> 6` == `/64`).
pub const WEIGHT_SHIFT: u32 = 6;

/// Returns the weight table for the given index precision (2, 3, or 4 bits).
pub fn weights_for_precision(bits: u32) -> &'static [u32] {
    match bits {
        2 => &WEIGHTS_2,
        3 => &WEIGHTS_3,
        4 => &WEIGHTS_4,
        _ => unreachable!("index precision must be 2, 3, or 4 bits"),
    }
}

/// Interpolates between two unsigned 8-bit channel values using a weight
/// looked up from the table for `index_bits`: `(a*(64-w)+b*w+32) >> 6`.
#[inline]
pub fn interpolate_u8(a: u32, b: u32, weight_index: usize, index_bits: u32) -> u32 {
    let w = weights_for_precision(index_bits)[weight_index];
    (a * (WEIGHT_MAX - w) + b * w + WEIGHT_ROUND) >> WEIGHT_SHIFT
}

/// Assigns one of `region_count` (2 or 3) regions to each of the 16 pixels
/// of a 4x4 block for partition `shape`.
///
/// Pixel index 0 (top-left) always maps to region 0, matching the
/// convention that region 0's fix-up position is always pixel 0.
pub fn partition_regions(shape: u8, region_count: u8) -> [u8; 16] {
    debug_assert!(region_count == 2 || region_count == 3);
    let mut out = [0u8; 16];
    for (idx, slot) in out.iter_mut().enumerate() {
        let x = (idx % 4) as i32;
        let y = (idx / 4) as i32;
        *slot = if region_count == 2 {
            region_2(shape, x, y)
        } else {
            region_3(shape, x, y)
        };
    }
    out
}

fn region_2(shape: u8, x: i32, y: i32) -> u8 {
    match shape % 8 {
        0 => u8::from(x >= 2),
        1 => u8::from(x >= 3),
        2 => u8::from(y >= 2),
        3 => u8::from(y >= 3),
        4 => u8::from(x + y >= 3),
        5 => u8::from(x < y),
        6 => u8::from(x >= 1),
        _ => u8::from(y >= 1),
    }
}

fn region_3(shape: u8, x: i32, y: i32) -> u8 {
    match shape % 4 {
        0 => {
            // Three vertical bands.
            if x == 0 {
                0
            } else if x <= 2 {
                1
            } else {
                2
            }
        }
        1 => {
            // Three horizontal bands.
            if y == 0 {
                0
            } else if y <= 2 {
                1
            } else {
                2
            }
        }
        2 => {
            // Diagonal thirds.
            let s = x + y;
            if s < 2 {
                0
            } else if s < 5 {
                1
            } else {
                2
            }
        }
        _ => {
            // Top-left quadrant vs. top-right vs. bottom half.
            if x < 2 && y < 2 {
                0
            } else if y < 2 {
                1
            } else {
                2
            }
        }
    }
}

/// Returns the fix-up pixel index for `region` within `shape`: the lowest
/// pixel index assigned to that region (always 0 for region 0).
pub fn fixup_index(shape: u8, region_count: u8, region: u8) -> usize {
    if region == 0 {
        return 0;
    }
    let regions = partition_regions(shape, region_count);
    regions
        .iter()
        .position(|&r| r == region)
        .expect("every region in range must own at least one pixel")
}

/// Descriptor for one of BC6H's 14 valid modes, transcribed from
/// `Block_BC6H::ms_aInfo` in the reference `BC6H.cpp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bc6hModeInfo {
    /// The on-wire mode selector value (`ms_aInfo[].uMode`).
    pub mode_code: u8,
    /// True for 2-region (partitioned) modes (`uPartitions != 0`).
    pub partitioned: bool,
    /// True when endpoint B (and region 1) are stored as signed deltas from
    /// endpoint A (`bTransformed`).
    pub transformed: bool,
    /// Per-channel precision in bits of region 0's first endpoint
    /// (`RGBAPrec[0][0]`); also the width unquantization scales against.
    pub base_bits: [u8; 3],
    /// Per-channel precision in bits shared by every other stored endpoint
    /// (region 0's second endpoint and, if partitioned, both of region 1's):
    /// `RGBAPrec[0][1]`, which is identical to `RGBAPrec[1][0]` and
    /// `RGBAPrec[1][1]` in every real mode.
    pub delta_bits: [u8; 3],
}

impl Bc6hModeInfo {
    /// Index precision: 3 bits when partitioned, 4 bits otherwise.
    pub const fn index_bits(&self) -> u8 {
        if self.partitioned {
            3
        } else {
            4
        }
    }

    /// On-wire mode-selector width: 2 bits for modes 1-2, 5 bits otherwise.
    pub const fn mode_bits(&self) -> u8 {
        if self.mode_code <= 0x01 {
            2
        } else {
            5
        }
    }
}

/// The 14 valid BC6H modes, in encoder search order (modes 1-14 of the
/// reference format).
pub const BC6H_MODES: [Bc6hModeInfo; 14] = [
    Bc6hModeInfo { mode_code: 0x00, partitioned: true, transformed: true, base_bits: [10, 10, 10], delta_bits: [5, 5, 5] },
    Bc6hModeInfo { mode_code: 0x01, partitioned: true, transformed: true, base_bits: [7, 7, 7], delta_bits: [6, 6, 6] },
    Bc6hModeInfo { mode_code: 0x02, partitioned: true, transformed: true, base_bits: [11, 11, 11], delta_bits: [5, 4, 4] },
    Bc6hModeInfo { mode_code: 0x06, partitioned: true, transformed: true, base_bits: [11, 11, 11], delta_bits: [4, 5, 4] },
    Bc6hModeInfo { mode_code: 0x0A, partitioned: true, transformed: true, base_bits: [11, 11, 11], delta_bits: [4, 4, 5] },
    Bc6hModeInfo { mode_code: 0x0E, partitioned: true, transformed: true, base_bits: [9, 9, 9], delta_bits: [5, 5, 5] },
    Bc6hModeInfo { mode_code: 0x12, partitioned: true, transformed: true, base_bits: [8, 8, 8], delta_bits: [6, 5, 5] },
    Bc6hModeInfo { mode_code: 0x16, partitioned: true, transformed: true, base_bits: [8, 8, 8], delta_bits: [5, 6, 5] },
    Bc6hModeInfo { mode_code: 0x1A, partitioned: true, transformed: true, base_bits: [8, 8, 8], delta_bits: [5, 5, 6] },
    Bc6hModeInfo { mode_code: 0x1E, partitioned: true, transformed: false, base_bits: [6, 6, 6], delta_bits: [6, 6, 6] },
    Bc6hModeInfo { mode_code: 0x03, partitioned: false, transformed: false, base_bits: [10, 10, 10], delta_bits: [10, 10, 10] },
    Bc6hModeInfo { mode_code: 0x07, partitioned: false, transformed: true, base_bits: [11, 11, 11], delta_bits: [9, 9, 9] },
    Bc6hModeInfo { mode_code: 0x0B, partitioned: false, transformed: true, base_bits: [12, 12, 12], delta_bits: [8, 8, 8] },
    Bc6hModeInfo { mode_code: 0x0F, partitioned: false, transformed: true, base_bits: [16, 16, 16], delta_bits: [4, 4, 4] },
];

/// The four reserved 5-bit BC6H mode codes that must decode to the
/// release-build error color rather than any interpolated value.
pub const BC6H_RESERVED_MODES: [u8; 4] = [0x13, 0x17, 0x1B, 0x1F];

/// Descriptor for one of BC7's 8 modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bc7ModeInfo {
    /// Number of regions (1, 2, or 3).
    pub subsets: u8,
    /// Bits used to store the partition shape selector (0, 4, or 6).
    pub partition_bits: u8,
    /// RGB endpoint precision before the P-bit is appended.
    pub color_bits: u8,
    /// Alpha endpoint precision before the P-bit is appended (0 = no alpha).
    pub alpha_bits: u8,
    /// Total P-bits stored in the block (0, 2, 4, or 6).
    pub pbits_total: u8,
    /// Rotation selector bits (0 or 2).
    pub rotation_bits: u8,
    /// Index-mode selector bits (0 or 1; only mode 4 uses 1).
    pub index_mode_bits: u8,
    /// Primary index precision in bits per pixel.
    pub index_bits_primary: u8,
    /// Secondary index precision in bits per pixel (0 = no secondary
    /// stream).
    pub index_bits_secondary: u8,
}

impl Bc7ModeInfo {
    /// Whether this mode encodes alpha at all.
    pub const fn has_alpha(&self) -> bool {
        self.alpha_bits > 0
    }

    /// Whether this mode has a P-bit.
    pub const fn has_pbits(&self) -> bool {
        self.pbits_total > 0
    }
}

/// The 8 BC7 modes, indexed 0..7 to match the unary mode-prefix encoding.
pub const BC7_MODES: [Bc7ModeInfo; 8] = [
    Bc7ModeInfo { subsets: 3, partition_bits: 4, color_bits: 4, alpha_bits: 0, pbits_total: 6, rotation_bits: 0, index_mode_bits: 0, index_bits_primary: 3, index_bits_secondary: 0 },
    Bc7ModeInfo { subsets: 2, partition_bits: 6, color_bits: 6, alpha_bits: 0, pbits_total: 2, rotation_bits: 0, index_mode_bits: 0, index_bits_primary: 3, index_bits_secondary: 0 },
    Bc7ModeInfo { subsets: 3, partition_bits: 6, color_bits: 5, alpha_bits: 0, pbits_total: 0, rotation_bits: 0, index_mode_bits: 0, index_bits_primary: 2, index_bits_secondary: 0 },
    Bc7ModeInfo { subsets: 2, partition_bits: 6, color_bits: 7, alpha_bits: 0, pbits_total: 4, rotation_bits: 0, index_mode_bits: 0, index_bits_primary: 2, index_bits_secondary: 0 },
    Bc7ModeInfo { subsets: 1, partition_bits: 0, color_bits: 5, alpha_bits: 6, pbits_total: 0, rotation_bits: 2, index_mode_bits: 1, index_bits_primary: 2, index_bits_secondary: 3 },
    Bc7ModeInfo { subsets: 1, partition_bits: 0, color_bits: 7, alpha_bits: 8, pbits_total: 0, rotation_bits: 2, index_mode_bits: 0, index_bits_primary: 2, index_bits_secondary: 2 },
    Bc7ModeInfo { subsets: 1, partition_bits: 0, color_bits: 7, alpha_bits: 7, pbits_total: 2, rotation_bits: 0, index_mode_bits: 0, index_bits_primary: 4, index_bits_secondary: 0 },
    Bc7ModeInfo { subsets: 2, partition_bits: 6, color_bits: 5, alpha_bits: 5, pbits_total: 4, rotation_bits: 0, index_mode_bits: 0, index_bits_primary: 2, index_bits_secondary: 0 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_tables_start_at_zero_end_at_max() {
        assert_eq!(WEIGHTS_2[0], 0);
        assert_eq!(*WEIGHTS_2.last().unwrap(), WEIGHT_MAX);
        assert_eq!(WEIGHTS_3[0], 0);
        assert_eq!(*WEIGHTS_3.last().unwrap(), WEIGHT_MAX);
        assert_eq!(WEIGHTS_4[0], 0);
        assert_eq!(*WEIGHTS_4.last().unwrap(), WEIGHT_MAX);
    }

    #[test]
    fn every_2region_shape_has_pixel0_in_region0_and_both_nonempty() {
        for shape in 0u8..64 {
            let regions = partition_regions(shape, 2);
            assert_eq!(regions[0], 0);
            assert!(regions.iter().any(|&r| r == 1), "shape {shape} has empty region 1");
        }
    }

    #[test]
    fn every_3region_shape_has_pixel0_in_region0_and_all_nonempty() {
        for shape in 0u8..64 {
            let regions = partition_regions(shape, 3);
            assert_eq!(regions[0], 0);
            assert!(regions.iter().any(|&r| r == 1), "shape {shape} has empty region 1");
            assert!(regions.iter().any(|&r| r == 2), "shape {shape} has empty region 2");
        }
    }

    #[test]
    fn fixup_index_region0_is_always_zero() {
        for shape in 0u8..32 {
            assert_eq!(fixup_index(shape, 2, 0), 0);
        }
    }

    #[test]
    fn bc6h_reserved_modes_excluded_from_valid_table() {
        for &reserved in &BC6H_RESERVED_MODES {
            assert!(!BC6H_MODES.iter().any(|m| m.mode_code == reserved && m.mode_bits() == 5));
        }
    }

    #[test]
    fn bc7_mode6_has_no_partition_and_single_pbit_pair() {
        let m6 = BC7_MODES[6];
        assert_eq!(m6.subsets, 1);
        assert_eq!(m6.partition_bits, 0);
        assert!(m6.has_alpha());
        assert!(m6.has_pbits());
    }
}
