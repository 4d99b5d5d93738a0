/// Basic example: Render a synthetic image and print it in every output mode
///
/// This draws a colored circle on a transparent background and encodes it
/// once per target.
use img2string::{DitherMode, OutputMode, RenderConfig, encode, render_cells};
use image::{Rgba, RgbaImage};

fn main() -> img2string::Result<()> {
    let width = 160;
    let height = 160;
    let mut img = RgbaImage::new(width, height);

    // Red-to-blue circle, transparent outside
    let center = width as f32 / 2.0;
    let radius = 70.0;
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let dx = x as f32 - center;
        let dy = y as f32 - center;
        if (dx * dx + dy * dy).sqrt() < radius {
            let t = y as f32 / height as f32;
            *pixel = Rgba([(255.0 * (1.0 - t)) as u8, 64, (255.0 * t) as u8, 255]);
        }
    }

    let config = RenderConfig {
        width: 32,
        gamma: 1.0,
        dither: DitherMode::Ordered4,
        antialias: true,
        ..Default::default()
    };
    let grid = render_cells(&img, &config)?;

    for mode in OutputMode::ALL {
        println!("--- {} ---", mode.target().name);
        print!("{}", encode(&grid, mode.target()));
    }
    Ok(())
}
