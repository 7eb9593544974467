//! Bundled idle logo
//!
//! "LILY58" wordmark, 128x32, 1 bit per pixel, row-major, MSB first.
//! Replace `WORDMARK_ROWS` with your own export (same layout) to change it.

/// A 1-bit bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ImageAsset {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
    /// Packed rows, each padded to a whole byte
    pub data: &'static [u8],
}

impl ImageAsset {
    /// Bytes in one packed row
    pub const fn stride(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// Check that `data` holds exactly `height` rows
    pub const fn is_well_formed(&self) -> bool {
        self.data.len() == self.stride() * self.height as usize
    }
}

const LOGO_WIDTH: u16 = 128;
const LOGO_HEIGHT: u16 = 32;
const LOGO_STRIDE: usize = LOGO_WIDTH as usize / 8;
const LOGO_LEN: usize = LOGO_STRIDE * LOGO_HEIGHT as usize;

/// Non-blank rows of the wordmark, starting at row 1
const WORDMARK_ROWS: [[u8; LOGO_STRIDE]; 2] = [
    [
        0x3C, 0x4E, 0x49, 0x59, 0x59, 0x4E, 0x3C, 0x00, 0x3C, 0x52, 0x52, 0x52, 0x52, 0x52, 0x3C,
        0x00,
    ],
    [
        0x7E, 0x40, 0x40, 0x7C, 0x40, 0x40, 0x7E, 0x00, 0x7E, 0x02, 0x02, 0x7E, 0x40, 0x40, 0x7E,
        0x00,
    ],
];

const fn logo_bitmap() -> [u8; LOGO_LEN] {
    let mut data = [0u8; LOGO_LEN];
    let mut row = 0;
    while row < WORDMARK_ROWS.len() {
        let mut col = 0;
        while col < LOGO_STRIDE {
            data[(row + 1) * LOGO_STRIDE + col] = WORDMARK_ROWS[row][col];
            col += 1;
        }
        row += 1;
    }
    data
}

static LOGO_DATA: [u8; LOGO_LEN] = logo_bitmap();

/// Idle logo shown on the left half until the first layer change
pub static LILY58_LOGO: ImageAsset = ImageAsset {
    width: LOGO_WIDTH,
    height: LOGO_HEIGHT,
    data: &LOGO_DATA,
};
