//! Glyph ramp and ordered-dither lookup tables

/// Fill characters organized by foreground coverage
///
/// 10 levels from pure background (space) to nearly pure foreground (@)
pub const FILL_CHARS: [char; 10] = [
    ' ',  // 0: background only
    '.',  // 1
    ':',  // 2
    ';',  // 3
    't',  // 4
    '%',  // 5
    'S',  // 6
    '8',  // 7
    'X',  // 8
    '@',  // 9: foreground only
];

pub const BAYER2: [[u8; 2]; 2] = [
    [0, 2],
    [3, 1],
];

pub const BAYER4: [[u8; 4]; 4] = [
    [ 0,  8,  2, 10],
    [12,  4, 14,  6],
    [ 3, 11,  1,  9],
    [15,  7, 13,  5],
];

pub const BAYER8: [[u8; 8]; 8] = [
    [ 0, 32,  8, 40,  2, 34, 10, 42],
    [48, 16, 56, 24, 50, 18, 58, 26],
    [12, 44,  4, 36, 14, 46,  6, 38],
    [60, 28, 52, 20, 62, 30, 54, 22],
    [ 3, 35, 11, 43,  1, 33,  9, 41],
    [51, 19, 59, 27, 49, 17, 57, 25],
    [15, 47,  7, 39, 13, 45,  5, 37],
    [63, 31, 55, 23, 61, 29, 53, 21],
];

/// Size of a Bayer matrix
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BayerOrder {
    Two,
    Four,
    Eight,
}

impl BayerOrder {
    pub const fn size(self) -> u32 {
        match self {
            BayerOrder::Two => 2,
            BayerOrder::Four => 4,
            BayerOrder::Eight => 8,
        }
    }
}

/// Ordered-dither threshold in (0, 1) for cell `(x, y)`
pub fn bayer_threshold(order: BayerOrder, x: u32, y: u32) -> f32 {
    let n = order.size();
    let (col, row) = ((x % n) as usize, (y % n) as usize);
    let value = match order {
        BayerOrder::Two => BAYER2[row][col],
        BayerOrder::Four => BAYER4[row][col],
        BayerOrder::Eight => BAYER8[row][col],
    };
    (value as f32 + 0.5) / (n * n) as f32
}

/// Ramp index for a foreground coverage in `[0, 1]` and a dither threshold
/// in `[0, 1)`. A threshold of 0.5 rounds to the nearest level.
pub fn fill_index(coverage: f32, threshold: f32) -> usize {
    let levels = (FILL_CHARS.len() - 1) as f32;
    let index = (coverage.clamp(0.0, 1.0) * levels + threshold).floor() as usize;
    index.min(FILL_CHARS.len() - 1)
}
