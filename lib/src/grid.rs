use crate::color::Attribute;
use crate::error::{Error, Result};

/// One character position: a glyph and the colors it is drawn with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub attr: Attribute,
}

impl Cell {
    pub const fn new(glyph: char, attr: Attribute) -> Self {
        Self { glyph, attr }
    }

    /// Empty cell with nothing drawn.
    pub const fn transparent() -> Self {
        Self::new(' ', Attribute::TRANSPARENT)
    }
}

/// Rectangular, row-major grid of cells
///
/// Invariant: `width > 0`, `height > 0` and `cells.len() == width * height`.
/// Checked once in [`CellGrid::new`]; the grid is read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl CellGrid {
    pub fn new(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyGrid);
        }
        let expected = width * height;
        if cells.len() != expected {
            return Err(Error::InvalidGrid {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Grid of `width * height` copies of `cell`.
    pub fn filled(width: usize, height: usize, cell: Cell) -> Result<Self> {
        Self::new(width, height, vec![cell; width * height])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Rows top to bottom, each `width` cells long.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width)
    }
}
