use crate::color::{Attribute, Color};
use crate::config::DitherMode;
use crate::dither::Ditherer;
use crate::filters::{apply_gamma, luminance};
use crate::grid::Cell;
use crate::lut::FILL_CHARS;
use image::RgbaImage;
use rayon::prelude::*;

/// Alpha below this makes a cell transparent.
pub const ALPHA_THRESHOLD: u8 = 128;

/// A pixel approximated by two palette colors
///
/// `coverage` is how far the pixel sits from `bg` towards `fg`, in [0, 1].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PaletteFit {
    pub fg: Color,
    pub bg: Color,
    pub coverage: f32,
}

fn palette_rgb(color: Color) -> [f32; 3] {
    color
        .rgb()
        .map(|c| c.map(|v| v as f32 / 255.0))
        .unwrap_or([0.0; 3])
}

fn distance_sq(a: [f32; 3], b: [f32; 3]) -> f32 {
    (0..3).map(|i| (a[i] - b[i]) * (a[i] - b[i])).sum()
}

/// Fit a normalized RGB value to the two nearest palette colors
///
/// The darker of the two becomes the background and the brighter the
/// foreground, so coverage grows with brightness.
pub fn fit_palette(rgb: [f32; 3]) -> PaletteFit {
    let mut nearest = (f32::MAX, Color::Black);
    let mut second = (f32::MAX, Color::Black);

    for color in Color::NAMED {
        let d = distance_sq(rgb, palette_rgb(color));
        if d < nearest.0 {
            second = nearest;
            nearest = (d, color);
        } else if d < second.0 {
            second = (d, color);
        }
    }

    let (a, b) = (nearest.1, second.1);
    let (bg, fg) = if luminance(palette_rgb(a)) <= luminance(palette_rgb(b)) {
        (a, b)
    } else {
        (b, a)
    };

    // Project the sample onto the bg -> fg segment
    let bg_rgb = palette_rgb(bg);
    let fg_rgb = palette_rgb(fg);
    let span = distance_sq(fg_rgb, bg_rgb);
    let dot: f32 = (0..3).map(|i| (rgb[i] - bg_rgb[i]) * (fg_rgb[i] - bg_rgb[i])).sum();
    let coverage = if span > 0.0 { (dot / span).clamp(0.0, 1.0) } else { 0.0 };

    PaletteFit { fg, bg, coverage }
}

/// Sample one pixel per cell at the centre of the cell's footprint
///
/// # Arguments
/// * `img` - Source image (already prefiltered when antialiasing)
/// * `columns` - Number of cells horizontally
/// * `rows` - Number of cells vertically
/// * `gamma` - Gamma applied to each sample
///
/// # Returns
/// Vec of gamma-corrected normalized RGB values, one per cell, row-major.
/// `None` marks a transparent cell.
pub fn sample_cells(img: &RgbaImage, columns: u32, rows: u32, gamma: f32) -> Vec<Option<[f32; 3]>> {
    let (width, height) = img.dimensions();
    let num_cells = (columns * rows) as usize;

    // Parallelize cell sampling
    (0..num_cells)
        .into_par_iter()
        .map(|cell_idx| {
            let cell_x = (cell_idx as u32) % columns;
            let cell_y = (cell_idx as u32) / columns;

            let px = ((cell_x as f32 + 0.5) * width as f32 / columns as f32) as u32;
            let py = ((cell_y as f32 + 0.5) * height as f32 / rows as f32) as u32;
            let pixel = img.get_pixel(px.min(width - 1), py.min(height - 1));

            if pixel[3] < ALPHA_THRESHOLD {
                return None;
            }
            let rgb = [
                pixel[0] as f32 / 255.0,
                pixel[1] as f32 / 255.0,
                pixel[2] as f32 / 255.0,
            ];
            Some(apply_gamma(rgb, gamma))
        })
        .collect()
}

/// Turn per-cell samples into glyphs and color attributes
///
/// # Arguments
/// * `samples` - Output of [`sample_cells`]
/// * `columns` - Number of cells horizontally
/// * `rows` - Number of cells vertically
/// * `dither` - Dithering applied to glyph selection
///
/// # Returns
/// Row-major cells, ready for [`CellGrid::new`](crate::grid::CellGrid::new),
/// which rejects a `samples` length other than `columns * rows`
pub fn select_cells(
    samples: &[Option<[f32; 3]>],
    columns: u32,
    rows: u32,
    dither: DitherMode,
) -> Vec<Cell> {
    // Fitting is independent per cell; quantization below is not.
    let fits: Vec<Option<PaletteFit>> = samples
        .par_iter()
        .map(|sample| sample.map(fit_palette))
        .collect();

    let mut ditherer = Ditherer::new(dither, columns as usize, rows as usize);
    fits.iter()
        .enumerate()
        .map(|(idx, fit)| match fit {
            Some(fit) => {
                let x = idx % columns as usize;
                let y = idx / columns as usize;
                let level = ditherer.quantize(x, y, fit.coverage);
                Cell::new(FILL_CHARS[level], Attribute::new(fit.fg, fit.bg))
            }
            None => Cell::transparent(),
        })
        .collect()
}
