use image::RgbaImage;
use imageproc::filter::gaussian_blur_f32;

/// Calculate luminance of a normalized RGB triple
///
/// Formula: L = 0.2127*R + 0.7152*G + 0.0722*B
pub fn luminance(rgb: [f32; 3]) -> f32 {
    0.2127 * rgb[0] + 0.7152 * rgb[1] + 0.0722 * rgb[2]
}

/// Apply gamma to a normalized RGB triple: each channel becomes
/// `v^(1/gamma)`, so gamma below 1 darkens and above 1 brightens.
pub fn apply_gamma(rgb: [f32; 3], gamma: f32) -> [f32; 3] {
    let exponent = 1.0 / gamma;
    rgb.map(|v| v.clamp(0.0, 1.0).powf(exponent))
}

/// Antialiasing prefilter applied before point sampling
///
/// Blurs with a Gaussian whose sigma is half the smaller side of a cell's
/// footprint in source pixels, so the sample at a cell centre stands for
/// the whole cell. Returns `None` when cells are smaller than about a pixel
/// and there is nothing to average.
///
/// # Arguments
/// * `img` - Input RGBA image
/// * `cell_width` - Source pixels per output column
/// * `cell_height` - Source pixels per output row
pub fn antialias(img: &RgbaImage, cell_width: f32, cell_height: f32) -> Option<RgbaImage> {
    let sigma = 0.5 * cell_width.min(cell_height);
    if sigma < 0.5 {
        return None;
    }
    Some(gaussian_blur_f32(img, sigma))
}
