//! The in-memory bitmap mirroring the panel, and its conversion to the controller's packed gray
//! scale transfer format.
//!
//! Memory layout: the bitmap is split in bands of 8 rows. Each band stores one byte per pixel
//! column, with bit `n` of that byte holding row `8 * band + n`. The byte for pixel `(col, row)`
//! therefore lives at `col + (row / 8) * PIXEL_COLS`.

use crate::command::consts::*;

const COLS: usize = PIXEL_COLS as usize;
const ROWS: usize = PIXEL_ROWS as usize;
const NUM_BANDS: usize = ROWS / 8;

/// Size of the bitmap in bytes.
pub const BUFFER_SIZE: usize = COLS * ROWS / 8;

/// Number of bytes `FrameBuffer::packed` yields for one frame: one byte per horizontal pixel
/// pair.
pub const PACKED_FRAME_SIZE: usize = COLS * ROWS / 2;

/// Gray scale nibble for a lit pixel. Unlit pixels use level 0.
const LIT: u8 = 0x0F;

pub struct FrameBuffer {
    bytes: [u8; BUFFER_SIZE],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// An all-dark bitmap.
    pub fn new() -> Self {
        FrameBuffer {
            bytes: [0; BUFFER_SIZE],
        }
    }

    pub fn clear(&mut self) {
        for byte in self.bytes.iter_mut() {
            *byte = 0;
        }
    }

    /// Set or clear the pixel at panel coordinates `(col, row)`. Coordinates outside the panel
    /// are ignored.
    pub fn set(&mut self, col: usize, row: usize, on: bool) {
        if col >= COLS || row >= ROWS {
            return;
        }
        let mask = 1 << (row % 8);
        let byte = &mut self.bytes[col + (row / 8) * COLS];
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    /// Whether the pixel at panel coordinates `(col, row)` is lit. Outside the panel, `false`.
    pub fn get(&self, col: usize, row: usize) -> bool {
        if col >= COLS || row >= ROWS {
            return false;
        }
        self.bytes[col + (row / 8) * COLS] & (1 << (row % 8)) != 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// The whole frame in the controller's transfer format, in the order its write pointer
    /// advances with the configured remap: column pairs left to right, then bands top to bottom,
    /// then the 8 rows within the band. Each byte carries the left pixel of the pair in the high
    /// nibble and the right pixel in the low nibble, each at either level 0 or level 15.
    pub fn packed<'a>(&'a self) -> impl Iterator<Item = u8> + 'a {
        iproduct!((0..COLS).step_by(2), 0..NUM_BANDS).flat_map(move |(col, band)| {
            let left = self.bytes[band * COLS + col];
            let right = self.bytes[band * COLS + col + 1];
            (0..8).map(move |bit| pack_pair(left, right, bit))
        })
    }
}

/// Combine bit `bit` of two vertical 8-pixel strips into one gray scale byte.
fn pack_pair(left: u8, right: u8, bit: u8) -> u8 {
    let nibble = |strip: u8| if strip & (1 << bit) != 0 { LIT } else { 0 };
    nibble(left) << 4 | nibble(right)
}
