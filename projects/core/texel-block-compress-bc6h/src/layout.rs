//! Bit-scatter header layout for BC6H's 14 modes.
//!
//! Transcribed directly from `Block_BC6H::ms_aDesc` / `ms_aModeToInfo` in
//! the reference `BC6H.cpp`: each mode's 82-bit (or 65-bit, for
//! partitionless modes) header is read one bit at a time, and each bit is
//! scattered into a specific position of a specific endpoint-color
//! component (or the shape selector) rather than packed contiguously.

/// A header bit's destination: which endpoint-color component it belongs
/// to (`Rw`/`Rx`/`Ry`/`Rz` etc. name the reference's W/X/Y/Z roles: region
/// 0 endpoint A, region 0 endpoint B, region 1 endpoint A, region 1
/// endpoint B), the partition shape selector `D`, or unused padding `Na`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Padding entry in a partitionless mode's unused header tail.
    Na,
    /// Shape (partition) selector bit.
    D,
    /// Region 0 endpoint A, red.
    Rw,
    /// Region 0 endpoint B (delta when transformed), red.
    Rx,
    /// Region 1 endpoint A (delta), red.
    Ry,
    /// Region 1 endpoint B (delta), red.
    Rz,
    /// Region 0 endpoint A, green.
    Gw,
    /// Region 0 endpoint B (delta), green.
    Gx,
    /// Region 1 endpoint A (delta), green.
    Gy,
    /// Region 1 endpoint B (delta), green.
    Gz,
    /// Region 0 endpoint A, blue.
    Bw,
    /// Region 0 endpoint B (delta), blue.
    Bx,
    /// Region 1 endpoint A (delta), blue.
    By,
    /// Region 1 endpoint B (delta), blue.
    Bz,
}
use Field::*;

/// One header bit: its destination field and the bit position within that
/// field's value it sets.
pub type DescEntry = (Field, u8);

/// The mode-selector bits themselves are read directly (2 then, if
/// needed, 3 more bits) rather than through this table; the table starts
/// at the first endpoint/shape bit, but the reference source lists the
/// mode-selector positions too (`M`), which this port skips over since
/// [`crate::read_mode`] already consumed them. The descriptor rows below
/// therefore begin past the mode bits; this constant still models them as
/// `Na` placeholders so indices match the original 82-wide rows exactly.
pub const BC6H_DESC: [[DescEntry; 82]; 14] = [
    // Mode 1 (0x00) - 10 5 5 5
    [
        (Na, 0), (Na, 0), (Gy, 4), (By, 4), (Bz, 4), (Rw, 0), (Rw, 1), (Rw, 2), (Rw, 3), (Rw, 4),
        (Rw, 5), (Rw, 6), (Rw, 7), (Rw, 8), (Rw, 9), (Gw, 0), (Gw, 1), (Gw, 2), (Gw, 3), (Gw, 4),
        (Gw, 5), (Gw, 6), (Gw, 7), (Gw, 8), (Gw, 9), (Bw, 0), (Bw, 1), (Bw, 2), (Bw, 3), (Bw, 4),
        (Bw, 5), (Bw, 6), (Bw, 7), (Bw, 8), (Bw, 9), (Rx, 0), (Rx, 1), (Rx, 2), (Rx, 3), (Rx, 4),
        (Gz, 4), (Gy, 0), (Gy, 1), (Gy, 2), (Gy, 3), (Gx, 0), (Gx, 1), (Gx, 2), (Gx, 3), (Gx, 4),
        (Bz, 0), (Gz, 0), (Gz, 1), (Gz, 2), (Gz, 3), (Bx, 0), (Bx, 1), (Bx, 2), (Bx, 3), (Bx, 4),
        (Bz, 1), (By, 0), (By, 1), (By, 2), (By, 3), (Ry, 0), (Ry, 1), (Ry, 2), (Ry, 3), (Ry, 4),
        (Bz, 2), (Rz, 0), (Rz, 1), (Rz, 2), (Rz, 3), (Rz, 4), (Bz, 3), (D, 0), (D, 1), (D, 2),
        (D, 3), (D, 4),
    ],
    // Mode 2 (0x01) - 7 6 6 6
    [
        (Na, 0), (Na, 0), (Gy, 5), (Gz, 4), (Gz, 5), (Rw, 0), (Rw, 1), (Rw, 2), (Rw, 3), (Rw, 4),
        (Rw, 5), (Rw, 6), (Bz, 0), (Bz, 1), (By, 4), (Gw, 0), (Gw, 1), (Gw, 2), (Gw, 3), (Gw, 4),
        (Gw, 5), (Gw, 6), (By, 5), (Bz, 2), (Gy, 4), (Bw, 0), (Bw, 1), (Bw, 2), (Bw, 3), (Bw, 4),
        (Bw, 5), (Bw, 6), (Bz, 3), (Bz, 5), (Bz, 4), (Rx, 0), (Rx, 1), (Rx, 2), (Rx, 3), (Rx, 4),
        (Rx, 5), (Gy, 0), (Gy, 1), (Gy, 2), (Gy, 3), (Gx, 0), (Gx, 1), (Gx, 2), (Gx, 3), (Gx, 4),
        (Gx, 5), (Gz, 0), (Gz, 1), (Gz, 2), (Gz, 3), (Bx, 0), (Bx, 1), (Bx, 2), (Bx, 3), (Bx, 4),
        (Bx, 5), (By, 0), (By, 1), (By, 2), (By, 3), (Ry, 0), (Ry, 1), (Ry, 2), (Ry, 3), (Ry, 4),
        (Ry, 5), (Rz, 0), (Rz, 1), (Rz, 2), (Rz, 3), (Rz, 4), (Rz, 5), (D, 0), (D, 1), (D, 2),
        (D, 3), (D, 4),
    ],
    // Mode 3 (0x02) - 11 5 4 4
    [
        (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Rw, 0), (Rw, 1), (Rw, 2), (Rw, 3), (Rw, 4),
        (Rw, 5), (Rw, 6), (Rw, 7), (Rw, 8), (Rw, 9), (Gw, 0), (Gw, 1), (Gw, 2), (Gw, 3), (Gw, 4),
        (Gw, 5), (Gw, 6), (Gw, 7), (Gw, 8), (Gw, 9), (Bw, 0), (Bw, 1), (Bw, 2), (Bw, 3), (Bw, 4),
        (Bw, 5), (Bw, 6), (Bw, 7), (Bw, 8), (Bw, 9), (Rx, 0), (Rx, 1), (Rx, 2), (Rx, 3), (Rx, 4),
        (Rw, 10), (Gy, 0), (Gy, 1), (Gy, 2), (Gy, 3), (Gx, 0), (Gx, 1), (Gx, 2), (Gx, 3), (Gw, 10),
        (Bz, 0), (Gz, 0), (Gz, 1), (Gz, 2), (Gz, 3), (Bx, 0), (Bx, 1), (Bx, 2), (Bx, 3), (Bw, 10),
        (Bz, 1), (By, 0), (By, 1), (By, 2), (By, 3), (Ry, 0), (Ry, 1), (Ry, 2), (Ry, 3), (Ry, 4),
        (Bz, 2), (Rz, 0), (Rz, 1), (Rz, 2), (Rz, 3), (Rz, 4), (Bz, 3), (D, 0), (D, 1), (D, 2),
        (D, 3), (D, 4),
    ],
    // Mode 4 (0x06) - 11 4 5 4
    [
        (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Rw, 0), (Rw, 1), (Rw, 2), (Rw, 3), (Rw, 4),
        (Rw, 5), (Rw, 6), (Rw, 7), (Rw, 8), (Rw, 9), (Gw, 0), (Gw, 1), (Gw, 2), (Gw, 3), (Gw, 4),
        (Gw, 5), (Gw, 6), (Gw, 7), (Gw, 8), (Gw, 9), (Bw, 0), (Bw, 1), (Bw, 2), (Bw, 3), (Bw, 4),
        (Bw, 5), (Bw, 6), (Bw, 7), (Bw, 8), (Bw, 9), (Rx, 0), (Rx, 1), (Rx, 2), (Rx, 3), (Rw, 10),
        (Gz, 4), (Gy, 0), (Gy, 1), (Gy, 2), (Gy, 3), (Gx, 0), (Gx, 1), (Gx, 2), (Gx, 3), (Gx, 4),
        (Gw, 10), (Gz, 0), (Gz, 1), (Gz, 2), (Gz, 3), (Bx, 0), (Bx, 1), (Bx, 2), (Bx, 3), (Bw, 10),
        (Bz, 1), (By, 0), (By, 1), (By, 2), (By, 3), (Ry, 0), (Ry, 1), (Ry, 2), (Ry, 3), (Bz, 0),
        (Bz, 2), (Rz, 0), (Rz, 1), (Rz, 2), (Rz, 3), (Gy, 4), (Bz, 3), (D, 0), (D, 1), (D, 2),
        (D, 3), (D, 4),
    ],
    // Mode 5 (0x0a) - 11 4 4 5
    [
        (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Rw, 0), (Rw, 1), (Rw, 2), (Rw, 3), (Rw, 4),
        (Rw, 5), (Rw, 6), (Rw, 7), (Rw, 8), (Rw, 9), (Gw, 0), (Gw, 1), (Gw, 2), (Gw, 3), (Gw, 4),
        (Gw, 5), (Gw, 6), (Gw, 7), (Gw, 8), (Gw, 9), (Bw, 0), (Bw, 1), (Bw, 2), (Bw, 3), (Bw, 4),
        (Bw, 5), (Bw, 6), (Bw, 7), (Bw, 8), (Bw, 9), (Rx, 0), (Rx, 1), (Rx, 2), (Rx, 3), (Rw, 10),
        (By, 4), (Gy, 0), (Gy, 1), (Gy, 2), (Gy, 3), (Gx, 0), (Gx, 1), (Gx, 2), (Gx, 3), (Gw, 10),
        (Bz, 0), (Gz, 0), (Gz, 1), (Gz, 2), (Gz, 3), (Bx, 0), (Bx, 1), (Bx, 2), (Bx, 3), (Bx, 4),
        (Bw, 10), (By, 0), (By, 1), (By, 2), (By, 3), (Ry, 0), (Ry, 1), (Ry, 2), (Ry, 3), (Bz, 1),
        (Bz, 2), (Rz, 0), (Rz, 1), (Rz, 2), (Rz, 3), (Bz, 4), (Bz, 3), (D, 0), (D, 1), (D, 2),
        (D, 3), (D, 4),
    ],
    // Mode 6 (0x0e) - 9 5 5 5
    [
        (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Rw, 0), (Rw, 1), (Rw, 2), (Rw, 3), (Rw, 4),
        (Rw, 5), (Rw, 6), (Rw, 7), (Rw, 8), (By, 4), (Gw, 0), (Gw, 1), (Gw, 2), (Gw, 3), (Gw, 4),
        (Gw, 5), (Gw, 6), (Gw, 7), (Gw, 8), (Gy, 4), (Bw, 0), (Bw, 1), (Bw, 2), (Bw, 3), (Bw, 4),
        (Bw, 5), (Bw, 6), (Bw, 7), (Bw, 8), (Bz, 4), (Rx, 0), (Rx, 1), (Rx, 2), (Rx, 3), (Rx, 4),
        (Gz, 4), (Gy, 0), (Gy, 1), (Gy, 2), (Gy, 3), (Gx, 0), (Gx, 1), (Gx, 2), (Gx, 3), (Gx, 4),
        (Bz, 0), (Gz, 0), (Gz, 1), (Gz, 2), (Gz, 3), (Bx, 0), (Bx, 1), (Bx, 2), (Bx, 3), (Bx, 4),
        (Bz, 1), (By, 0), (By, 1), (By, 2), (By, 3), (Ry, 0), (Ry, 1), (Ry, 2), (Ry, 3), (Ry, 4),
        (Bz, 2), (Rz, 0), (Rz, 1), (Rz, 2), (Rz, 3), (Rz, 4), (Bz, 3), (D, 0), (D, 1), (D, 2),
        (D, 3), (D, 4),
    ],
    // Mode 7 (0x12) - 8 6 5 5
    [
        (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Rw, 0), (Rw, 1), (Rw, 2), (Rw, 3), (Rw, 4),
        (Rw, 5), (Rw, 6), (Rw, 7), (Gz, 4), (By, 4), (Gw, 0), (Gw, 1), (Gw, 2), (Gw, 3), (Gw, 4),
        (Gw, 5), (Gw, 6), (Gw, 7), (Bz, 2), (Gy, 4), (Bw, 0), (Bw, 1), (Bw, 2), (Bw, 3), (Bw, 4),
        (Bw, 5), (Bw, 6), (Bw, 7), (Bz, 3), (Bz, 4), (Rx, 0), (Rx, 1), (Rx, 2), (Rx, 3), (Rx, 4),
        (Rx, 5), (Gy, 0), (Gy, 1), (Gy, 2), (Gy, 3), (Gx, 0), (Gx, 1), (Gx, 2), (Gx, 3), (Gx, 4),
        (Bz, 0), (Gz, 0), (Gz, 1), (Gz, 2), (Gz, 3), (Bx, 0), (Bx, 1), (Bx, 2), (Bx, 3), (Bx, 4),
        (Bz, 1), (By, 0), (By, 1), (By, 2), (By, 3), (Ry, 0), (Ry, 1), (Ry, 2), (Ry, 3), (Ry, 4),
        (Ry, 5), (Rz, 0), (Rz, 1), (Rz, 2), (Rz, 3), (Rz, 4), (Rz, 5), (D, 0), (D, 1), (D, 2),
        (D, 3), (D, 4),
    ],
    // Mode 8 (0x16) - 8 5 6 5
    [
        (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Rw, 0), (Rw, 1), (Rw, 2), (Rw, 3), (Rw, 4),
        (Rw, 5), (Rw, 6), (Rw, 7), (Bz, 0), (By, 4), (Gw, 0), (Gw, 1), (Gw, 2), (Gw, 3), (Gw, 4),
        (Gw, 5), (Gw, 6), (Gw, 7), (Gy, 5), (Gy, 4), (Bw, 0), (Bw, 1), (Bw, 2), (Bw, 3), (Bw, 4),
        (Bw, 5), (Bw, 6), (Bw, 7), (Gz, 5), (Bz, 4), (Rx, 0), (Rx, 1), (Rx, 2), (Rx, 3), (Rx, 4),
        (Gz, 4), (Gy, 0), (Gy, 1), (Gy, 2), (Gy, 3), (Gx, 0), (Gx, 1), (Gx, 2), (Gx, 3), (Gx, 4),
        (Gx, 5), (Gz, 0), (Gz, 1), (Gz, 2), (Gz, 3), (Bx, 0), (Bx, 1), (Bx, 2), (Bx, 3), (Bx, 4),
        (Bz, 1), (By, 0), (By, 1), (By, 2), (By, 3), (Ry, 0), (Ry, 1), (Ry, 2), (Ry, 3), (Ry, 4),
        (Bz, 2), (Rz, 0), (Rz, 1), (Rz, 2), (Rz, 3), (Rz, 4), (Bz, 3), (D, 0), (D, 1), (D, 2),
        (D, 3), (D, 4),
    ],
    // Mode 9 (0x1a) - 8 5 5 6
    [
        (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Rw, 0), (Rw, 1), (Rw, 2), (Rw, 3), (Rw, 4),
        (Rw, 5), (Rw, 6), (Rw, 7), (Bz, 1), (By, 4), (Gw, 0), (Gw, 1), (Gw, 2), (Gw, 3), (Gw, 4),
        (Gw, 5), (Gw, 6), (Gw, 7), (By, 5), (Gy, 4), (Bw, 0), (Bw, 1), (Bw, 2), (Bw, 3), (Bw, 4),
        (Bw, 5), (Bw, 6), (Bw, 7), (Bz, 5), (Bz, 4), (Rx, 0), (Rx, 1), (Rx, 2), (Rx, 3), (Rx, 4),
        (Gz, 4), (Gy, 0), (Gy, 1), (Gy, 2), (Gy, 3), (Gx, 0), (Gx, 1), (Gx, 2), (Gx, 3), (Gx, 4),
        (Bz, 0), (Gz, 0), (Gz, 1), (Gz, 2), (Gz, 3), (Bx, 0), (Bx, 1), (Bx, 2), (Bx, 3), (Bx, 4),
        (Bx, 5), (By, 0), (By, 1), (By, 2), (By, 3), (Ry, 0), (Ry, 1), (Ry, 2), (Ry, 3), (Ry, 4),
        (Bz, 2), (Rz, 0), (Rz, 1), (Rz, 2), (Rz, 3), (Rz, 4), (Bz, 3), (D, 0), (D, 1), (D, 2),
        (D, 3), (D, 4),
    ],
    // Mode 10 (0x1e) - 6 6 6 6
    [
        (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Rw, 0), (Rw, 1), (Rw, 2), (Rw, 3), (Rw, 4),
        (Rw, 5), (Gz, 4), (Bz, 0), (Bz, 1), (By, 4), (Gw, 0), (Gw, 1), (Gw, 2), (Gw, 3), (Gw, 4),
        (Gw, 5), (Gy, 5), (By, 5), (Bz, 2), (Gy, 4), (Bw, 0), (Bw, 1), (Bw, 2), (Bw, 3), (Bw, 4),
        (Bw, 5), (Gz, 5), (Bz, 3), (Bz, 5), (Bz, 4), (Rx, 0), (Rx, 1), (Rx, 2), (Rx, 3), (Rx, 4),
        (Rx, 5), (Gy, 0), (Gy, 1), (Gy, 2), (Gy, 3), (Gx, 0), (Gx, 1), (Gx, 2), (Gx, 3), (Gx, 4),
        (Gx, 5), (Gz, 0), (Gz, 1), (Gz, 2), (Gz, 3), (Bx, 0), (Bx, 1), (Bx, 2), (Bx, 3), (Bx, 4),
        (Bx, 5), (By, 0), (By, 1), (By, 2), (By, 3), (Ry, 0), (Ry, 1), (Ry, 2), (Ry, 3), (Ry, 4),
        (Ry, 5), (Rz, 0), (Rz, 1), (Rz, 2), (Rz, 3), (Rz, 4), (Rz, 5), (D, 0), (D, 1), (D, 2),
        (D, 3), (D, 4),
    ],
    // Mode 11 (0x03) - 10 10 (partitionless)
    [
        (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Rw, 0), (Rw, 1), (Rw, 2), (Rw, 3), (Rw, 4),
        (Rw, 5), (Rw, 6), (Rw, 7), (Rw, 8), (Rw, 9), (Gw, 0), (Gw, 1), (Gw, 2), (Gw, 3), (Gw, 4),
        (Gw, 5), (Gw, 6), (Gw, 7), (Gw, 8), (Gw, 9), (Bw, 0), (Bw, 1), (Bw, 2), (Bw, 3), (Bw, 4),
        (Bw, 5), (Bw, 6), (Bw, 7), (Bw, 8), (Bw, 9), (Rx, 0), (Rx, 1), (Rx, 2), (Rx, 3), (Rx, 4),
        (Rx, 5), (Rx, 6), (Rx, 7), (Rx, 8), (Rx, 9), (Gx, 0), (Gx, 1), (Gx, 2), (Gx, 3), (Gx, 4),
        (Gx, 5), (Gx, 6), (Gx, 7), (Gx, 8), (Gx, 9), (Bx, 0), (Bx, 1), (Bx, 2), (Bx, 3), (Bx, 4),
        (Bx, 5), (Bx, 6), (Bx, 7), (Bx, 8), (Bx, 9), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0),
        (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0),
        (Na, 0), (Na, 0),
    ],
    // Mode 12 (0x07) - 11 9 (partitionless)
    [
        (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Rw, 0), (Rw, 1), (Rw, 2), (Rw, 3), (Rw, 4),
        (Rw, 5), (Rw, 6), (Rw, 7), (Rw, 8), (Rw, 9), (Gw, 0), (Gw, 1), (Gw, 2), (Gw, 3), (Gw, 4),
        (Gw, 5), (Gw, 6), (Gw, 7), (Gw, 8), (Gw, 9), (Bw, 0), (Bw, 1), (Bw, 2), (Bw, 3), (Bw, 4),
        (Bw, 5), (Bw, 6), (Bw, 7), (Bw, 8), (Bw, 9), (Rx, 0), (Rx, 1), (Rx, 2), (Rx, 3), (Rx, 4),
        (Rx, 5), (Rx, 6), (Rx, 7), (Rx, 8), (Rw, 10), (Gx, 0), (Gx, 1), (Gx, 2), (Gx, 3), (Gx, 4),
        (Gx, 5), (Gx, 6), (Gx, 7), (Gx, 8), (Gw, 10), (Bx, 0), (Bx, 1), (Bx, 2), (Bx, 3), (Bx, 4),
        (Bx, 5), (Bx, 6), (Bx, 7), (Bx, 8), (Bw, 10), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0),
        (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0),
        (Na, 0), (Na, 0),
    ],
    // Mode 13 (0x0b) - 12 8 (partitionless)
    [
        (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Rw, 0), (Rw, 1), (Rw, 2), (Rw, 3), (Rw, 4),
        (Rw, 5), (Rw, 6), (Rw, 7), (Rw, 8), (Rw, 9), (Gw, 0), (Gw, 1), (Gw, 2), (Gw, 3), (Gw, 4),
        (Gw, 5), (Gw, 6), (Gw, 7), (Gw, 8), (Gw, 9), (Bw, 0), (Bw, 1), (Bw, 2), (Bw, 3), (Bw, 4),
        (Bw, 5), (Bw, 6), (Bw, 7), (Bw, 8), (Bw, 9), (Rx, 0), (Rx, 1), (Rx, 2), (Rx, 3), (Rx, 4),
        (Rx, 5), (Rx, 6), (Rx, 7), (Rw, 11), (Rw, 10), (Gx, 0), (Gx, 1), (Gx, 2), (Gx, 3), (Gx, 4),
        (Gx, 5), (Gx, 6), (Gx, 7), (Gw, 11), (Gw, 10), (Bx, 0), (Bx, 1), (Bx, 2), (Bx, 3), (Bx, 4),
        (Bx, 5), (Bx, 6), (Bx, 7), (Bw, 11), (Bw, 10), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0),
        (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0),
        (Na, 0), (Na, 0),
    ],
    // Mode 14 (0x0f) - 16 4 (partitionless)
    [
        (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Rw, 0), (Rw, 1), (Rw, 2), (Rw, 3), (Rw, 4),
        (Rw, 5), (Rw, 6), (Rw, 7), (Rw, 8), (Rw, 9), (Gw, 0), (Gw, 1), (Gw, 2), (Gw, 3), (Gw, 4),
        (Gw, 5), (Gw, 6), (Gw, 7), (Gw, 8), (Gw, 9), (Bw, 0), (Bw, 1), (Bw, 2), (Bw, 3), (Bw, 4),
        (Bw, 5), (Bw, 6), (Bw, 7), (Bw, 8), (Bw, 9), (Rx, 0), (Rx, 1), (Rx, 2), (Rx, 3), (Rw, 15),
        (Rw, 14), (Rw, 13), (Rw, 12), (Rw, 11), (Rw, 10), (Gx, 0), (Gx, 1), (Gx, 2), (Gx, 3), (Gw, 15),
        (Gw, 14), (Gw, 13), (Gw, 12), (Gw, 11), (Gw, 10), (Bx, 0), (Bx, 1), (Bx, 2), (Bx, 3), (Bw, 15),
        (Bw, 14), (Bw, 13), (Bw, 12), (Bw, 11), (Bw, 10), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0),
        (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0),
        (Na, 0), (Na, 0),
    ],
];

/// Maps a mode's index in [`texel_block_compress_common::tables::BC6H_MODES`]
/// to its row in [`BC6H_DESC`]. The two tables share ordering (both list
/// modes 1-14 in the same sequence), so this is the identity — kept as a
/// named function so callers don't have to know that invariant.
pub const fn desc_row(mode_index: usize) -> usize {
    mode_index
}

/// Entries `[0, mode_bits)` of every row are the mode selector, already
/// consumed by the caller before walking the rest of the row (2 entries for
/// the two 2-bit-mode rows, 5 for every other row — all marked [`Field::Na`]
/// in [`BC6H_DESC`] since the mode is read directly rather than through this
/// table). The remaining `82 - mode_bits` entries are real header fields.
pub const fn header_start(mode_bits: u8) -> usize {
    mode_bits as usize
}
