//! img2string - image to ANSI text art, as terminal output or string literals
//!
//! An image is rendered into a grid of colored character cells, then the
//! grid is encoded with the fewest color-change escape sequences and spelled
//! for one of five output targets: raw terminal output, or a C, Python,
//! JavaScript or Bash string literal.
//!
//! # Example
//! ```no_run
//! use img2string::{OutputMode, RenderConfig, encode, load_image, render_cells};
//!
//! let input = load_image("photo.png").unwrap();
//! let grid = render_cells(&input, &RenderConfig::default()).unwrap();
//! print!("{}", encode(&grid, OutputMode::Python.target()));
//! ```

pub mod ascii;
pub mod color;
pub mod config;
pub mod dither;
pub mod encoder;
pub mod error;
pub mod filters;
pub mod grid;
pub mod lut;
pub mod processor;
pub mod target;

// Re-export main types for convenience
pub use color::{Attribute, Color};
pub use config::{DitherMode, RenderConfig};
pub use encoder::{Token, Transition, encode, encode_to, plan};
pub use error::{Error, Result};
pub use grid::{Cell, CellGrid};
pub use processor::{convert, load_image, render_cells};
pub use target::{OutputMode, OutputTarget};
