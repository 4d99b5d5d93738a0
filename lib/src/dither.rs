//! Per-cell quantization of foreground coverage onto the glyph ramp.

use crate::config::DitherMode;
use crate::lut::{BayerOrder, FILL_CHARS, bayer_threshold, fill_index};

// Fixed so that `random` dithering is reproducible from run to run.
const RANDOM_SEED: u64 = 0x1d6_2571;

/// Stateful quantizer for one cell grid
///
/// Cells must be visited row-major; Floyd-Steinberg carries error forward.
pub struct Ditherer {
    mode: DitherMode,
    width: usize,
    rng: fastrand::Rng,
    error: Vec<f32>,
}

impl Ditherer {
    pub fn new(mode: DitherMode, width: usize, height: usize) -> Self {
        let error = match mode {
            DitherMode::FloydSteinberg => vec![0.0; width * height],
            _ => Vec::new(),
        };
        Self {
            mode,
            width,
            rng: fastrand::Rng::with_seed(RANDOM_SEED),
            error,
        }
    }

    /// Ramp index for `coverage` at cell `(x, y)`.
    pub fn quantize(&mut self, x: usize, y: usize, coverage: f32) -> usize {
        match self.mode {
            DitherMode::None => fill_index(coverage, 0.5),
            DitherMode::Ordered2 => self.ordered(BayerOrder::Two, x, y, coverage),
            DitherMode::Ordered4 => self.ordered(BayerOrder::Four, x, y, coverage),
            DitherMode::Ordered8 => self.ordered(BayerOrder::Eight, x, y, coverage),
            DitherMode::Random => fill_index(coverage, self.rng.f32()),
            DitherMode::FloydSteinberg => self.diffuse(x, y, coverage),
        }
    }

    fn ordered(&self, order: BayerOrder, x: usize, y: usize, coverage: f32) -> usize {
        fill_index(coverage, bayer_threshold(order, x as u32, y as u32))
    }

    fn diffuse(&mut self, x: usize, y: usize, coverage: f32) -> usize {
        let idx = y * self.width + x;
        let wanted = coverage + self.error.get(idx).copied().unwrap_or(0.0);
        let index = fill_index(wanted, 0.5);
        let levels = (FILL_CHARS.len() - 1) as f32;
        let err = wanted - index as f32 / levels;

        let mut spread = |dx: isize, dy: usize, weight: f32| {
            let nx = x as isize + dx;
            if nx < 0 || nx as usize >= self.width {
                return;
            }
            if let Some(e) = self.error.get_mut((y + dy) * self.width + nx as usize) {
                *e += err * weight;
            }
        };
        spread(1, 0, 7.0 / 16.0);
        spread(-1, 1, 3.0 / 16.0);
        spread(0, 1, 5.0 / 16.0);
        spread(1, 1, 1.0 / 16.0);

        index
    }
}
