use std::borrow::Cow;
use std::path::Path;

use crate::ascii::{sample_cells, select_cells};
use crate::config::RenderConfig;
use crate::encoder::encode;
use crate::error::{Error, Result};
use crate::filters::antialias;
use crate::grid::CellGrid;
use crate::target::OutputTarget;
use image::RgbaImage;

/// Upper bound on `columns * rows` for one render.
pub const MAX_CELLS: u64 = 1 << 24;

/// Decode an image file into RGBA samples
pub fn load_image(path: impl AsRef<Path>) -> Result<RgbaImage> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = image.to_rgba8();
    log::debug!(
        "loaded {} ({}x{})",
        path.display(),
        rgba.width(),
        rgba.height()
    );
    Ok(rgba)
}

/// Converts an RGBA image into a grid of colored character cells
///
/// Pipeline:
/// 1. Derive the row count from the configured width and aspect ratio
/// 2. Optionally prefilter (antialias) so each sample covers its cell
/// 3. Sample one gamma-corrected pixel per cell
/// 4. Fit each sample to two palette colors
/// 5. Dither the coverage onto the glyph ramp
///
/// # Arguments
/// * `input` - The input RGBA image
/// * `config` - Configuration parameters for the conversion
///
/// # Returns
/// A `config.width` columns wide [`CellGrid`]
pub fn render_cells(input: &RgbaImage, config: &RenderConfig) -> Result<CellGrid> {
    config.validate()?;

    let (width, height) = input.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::EmptyGrid);
    }

    // Step 1: Grid size
    let columns = config.width;
    let rows = config.grid_height(width, height);
    if columns as u64 * rows as u64 > MAX_CELLS {
        return Err(Error::InvalidConfig(format!(
            "{columns}x{rows} cells is too large (limit {MAX_CELLS})"
        )));
    }
    log::debug!(
        "rendering {}x{} image to {}x{} cells (gamma {}, dither {}, antialias {})",
        width,
        height,
        columns,
        rows,
        config.gamma,
        config.dither,
        config.antialias
    );

    // Step 2: Antialiasing prefilter
    let working_image = if config.antialias {
        let cell_width = width as f32 / columns as f32;
        let cell_height = height as f32 / rows as f32;
        antialias(input, cell_width, cell_height)
            .map(Cow::Owned)
            .unwrap_or(Cow::Borrowed(input))
    } else {
        Cow::Borrowed(input)
    };

    // Step 3: Sample
    let samples = sample_cells(&working_image, columns, rows, config.gamma);

    // Steps 4-5: Palette fit and glyph selection
    let cells = select_cells(&samples, columns, rows, config.dither);

    CellGrid::new(columns as usize, rows as usize, cells)
}

/// Load, render and encode an image in one pass
pub fn convert(path: impl AsRef<Path>, config: &RenderConfig, target: &OutputTarget) -> Result<String> {
    config.validate()?;
    let input = load_image(path)?;
    let grid = render_cells(&input, config)?;
    Ok(encode(&grid, target))
}
