//! Color run encoder
//!
//! Walks a [`CellGrid`] once, row-major, and decides where color changes
//! are needed. The decisions come out as a target-independent [`Token`]
//! stream; [`encode`] spells that stream through an [`OutputTarget`].
//!
//! Every row starts from the clean `Default/Default` state, so each output
//! line can be used on its own.

use std::io;

use crate::color::{Attribute, Color};
use crate::grid::CellGrid;
use crate::target::OutputTarget;

/// A color change between two cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Background goes away: optional reset, then an optional foreground.
    Foreground { reset: bool, fg: Option<u8> },
    /// Both colors set at once. `bg` is a background code (color code + 10).
    ForegroundBackground { fg: u8, bg: u8 },
}

/// One step of the encoded image.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Token {
    RowStart(usize),
    Transition(Transition),
    Glyph(char),
    RowEnd,
}

/// Transition needed to go from `prev` to `next`, if any.
///
/// A changed attribute always yields a transition. In the transparent
/// path the reset is left out while `prev` is still the row-start
/// `Default/Default` state, so a transition may spell as nothing.
fn transition(prev: Attribute, next: Attribute) -> Option<Transition> {
    if prev == next {
        return None;
    }
    match next.bg {
        Color::Transparent | Color::Default => Some(Transition::Foreground {
            reset: prev != Attribute::DEFAULT,
            fg: (!next.fg.is_unset()).then(|| next.fg.code()),
        }),
        bg => Some(Transition::ForegroundBackground {
            fg: next.fg.code(),
            bg: bg.background_code(),
        }),
    }
}

/// Plan the token stream for `grid`.
///
/// This is the only traversal of the grid; all targets share its output.
pub fn plan(grid: &CellGrid) -> Vec<Token> {
    // Each row contributes its cells, a start, an end and at most one
    // transition per cell.
    let mut tokens = Vec::with_capacity(grid.cells().len() * 2 + grid.height() * 2);

    for (y, row) in grid.rows().enumerate() {
        tokens.push(Token::RowStart(y));
        let mut prev = Attribute::DEFAULT;

        for cell in row {
            if let Some(t) = transition(prev, cell.attr) {
                tokens.push(Token::Transition(t));
            }
            prev = cell.attr;
            tokens.push(Token::Glyph(cell.glyph));
        }

        tokens.push(Token::RowEnd);
    }

    tokens
}

/// Encode `grid` as text for `target`.
///
/// Total and deterministic: the same grid and target always give the same
/// bytes.
pub fn encode(grid: &CellGrid, target: &OutputTarget) -> String {
    let tokens = plan(grid);
    log::debug!(
        "encoding {}x{} grid as {} ({} tokens)",
        grid.width(),
        grid.height(),
        target.name,
        tokens.len()
    );

    let mut out = target.prologue();
    for token in tokens {
        match token {
            Token::RowStart(y) => {
                if y > 0 {
                    out.push_str(target.row_separator());
                }
                out.push_str(target.line_start());
            }
            Token::Transition(Transition::Foreground { reset, fg }) => {
                if reset {
                    target.push_reset(&mut out);
                }
                if let Some(fg) = fg {
                    target.push_foreground(&mut out, fg);
                }
            }
            Token::Transition(Transition::ForegroundBackground { fg, bg }) => {
                target.push_foreground_background(&mut out, fg, bg);
            }
            Token::Glyph(glyph) => target.push_glyph(&mut out, glyph),
            Token::RowEnd => target.push_line_end(&mut out),
        }
    }
    out.push_str(target.epilogue());
    out
}

/// Encode `grid` and write the result to `writer`.
pub fn encode_to<W: io::Write>(grid: &CellGrid, target: &OutputTarget, mut writer: W) -> io::Result<()> {
    writer.write_all(encode(grid, target).as_bytes())?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;
    use crate::target::{BASH, C, JAVASCRIPT, OutputMode, PYTHON, STDOUT};

    fn attr(fg: Color, bg: Color) -> Attribute {
        Attribute::new(fg, bg)
    }

    fn transitions(tokens: &[Token]) -> usize {
        tokens
            .iter()
            .filter(|t| matches!(t, Token::Transition(_)))
            .count()
    }

    /// Deterministic pseudo-random grid, uncolored attributes included.
    fn noisy_grid(width: usize, height: usize, seed: u64) -> CellGrid {
        let mut rng = fastrand::Rng::with_seed(seed);
        let foregrounds = [
            Color::Black,
            Color::Red,
            Color::Green,
            Color::Default,
            Color::Transparent,
        ];
        let backgrounds = [
            Color::Transparent,
            Color::Default,
            Color::Blue,
            Color::Black,
        ];
        let cells = (0..width * height)
            .map(|_| {
                let fg = foregrounds[rng.usize(..foregrounds.len())];
                let bg = backgrounds[rng.usize(..backgrounds.len())];
                Cell::new('#', attr(fg, bg))
            })
            .collect();
        CellGrid::new(width, height, cells).unwrap()
    }

    #[test]
    fn test_single_red_cell_stdout() {
        let grid = CellGrid::filled(1, 1, Cell::new('#', attr(Color::Red, Color::Transparent))).unwrap();
        assert_eq!(encode(&grid, &STDOUT), "\x1b[0m\x1b[31m#\x1b[0m\n");
    }

    #[test]
    fn test_repeated_attribute_emits_once() {
        let grid = CellGrid::filled(2, 1, Cell::new('X', attr(Color::White, Color::Blue))).unwrap();
        assert_eq!(encode(&grid, &STDOUT), "\x1b[0m\x1b[97;44mXX\x1b[0m\n");
    }

    #[test]
    fn test_rows_restart_from_default() {
        let grid = CellGrid::filled(1, 2, Cell::new('#', attr(Color::Green, Color::Transparent))).unwrap();
        let out = encode(&grid, &STDOUT);
        assert_eq!(out.matches("\x1b[32m").count(), 2);
        assert_eq!(out, "\x1b[0m\x1b[32m#\x1b[0m\n\x1b[32m#\x1b[0m\n");
    }

    #[test]
    fn test_single_red_cell_c() {
        let grid = CellGrid::filled(1, 1, Cell::new('#', attr(Color::Red, Color::Transparent))).unwrap();
        assert_eq!(
            encode(&grid, &C),
            "const char* image = \"\\x1b[0m\\x1b[31m#\\x1b[0m\\n\";\n"
        );
    }

    #[test]
    fn test_quote_glyph_is_escaped() {
        let grid = CellGrid::filled(1, 1, Cell::new('"', attr(Color::Red, Color::Transparent))).unwrap();
        assert!(encode(&grid, &BASH).contains("\\\""));
        assert!(encode(&grid, &C).contains("m\\\"\\x1b"));
    }

    #[test]
    fn test_reset_before_dropping_background() {
        let cells = vec![
            Cell::new('a', attr(Color::White, Color::Blue)),
            Cell::new('b', attr(Color::Red, Color::Transparent)),
            Cell::new('c', Attribute::TRANSPARENT),
        ];
        let grid = CellGrid::new(3, 1, cells).unwrap();
        assert_eq!(
            encode(&grid, &STDOUT),
            "\x1b[0m\x1b[97;44ma\x1b[0m\x1b[31mb\x1b[0mc\x1b[0m\n"
        );
    }

    #[test]
    fn test_uncolored_cells_still_count_as_transitions() {
        let cells = vec![
            Cell::new(' ', Attribute::DEFAULT),
            Cell::transparent(),
            Cell::new('#', attr(Color::Red, Color::Transparent)),
        ];
        let grid = CellGrid::new(3, 1, cells).unwrap();
        assert_eq!(
            plan(&grid)[2],
            Token::Transition(Transition::Foreground { reset: false, fg: None })
        );
        assert_eq!(transitions(&plan(&grid)), 2);
        // the transparent cell spells as nothing; leaving it for red needs a reset
        assert_eq!(encode(&grid, &STDOUT), "\x1b[0m  \x1b[0m\x1b[31m#\x1b[0m\n");
    }

    #[test]
    fn test_default_foreground_on_color() {
        let grid = CellGrid::filled(1, 1, Cell::new('.', attr(Color::Default, Color::Cyan))).unwrap();
        assert_eq!(encode(&grid, &STDOUT), "\x1b[0m\x1b[0;46m.\x1b[0m\n");
    }

    #[test]
    fn test_transition_count_is_minimal() {
        for seed in 0..20 {
            let grid = noisy_grid(7, 5, seed);
            let mut expected = 0;
            for row in grid.rows() {
                let mut prev = Attribute::DEFAULT;
                for cell in row {
                    if cell.attr != prev {
                        expected += 1;
                    }
                    prev = cell.attr;
                }
            }
            assert_eq!(transitions(&plan(&grid)), expected, "seed {seed}");
        }
    }

    #[test]
    fn test_rows_are_independent() {
        let blue = Cell::new('x', attr(Color::Yellow, Color::Blue));
        let red = Cell::new('x', attr(Color::Red, Color::Transparent));
        let a = CellGrid::new(2, 2, vec![blue, blue, red, red]).unwrap();
        let b = CellGrid::new(2, 2, vec![red, red, red, red]).unwrap();

        let second_row = |grid: &CellGrid| -> Vec<Token> {
            let tokens = plan(grid);
            let start = tokens
                .iter()
                .position(|t| *t == Token::RowStart(1))
                .unwrap();
            tokens[start + 1..].to_vec()
        };
        assert_eq!(second_row(&a), second_row(&b));
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let grid = noisy_grid(9, 4, 7);
        for mode in OutputMode::ALL {
            assert_eq!(encode(&grid, mode.target()), encode(&grid, mode.target()));
        }
    }

    #[test]
    fn test_targets_agree_on_transitions() {
        let grid = noisy_grid(6, 3, 3);
        let tokens = plan(&grid);
        let expected_sets = tokens
            .iter()
            .filter(|t| {
                matches!(
                    t,
                    Token::Transition(Transition::Foreground { fg: Some(_), .. })
                        | Token::Transition(Transition::ForegroundBackground { .. })
                )
            })
            .count();

        let stdout = encode(&grid, &STDOUT);
        let sets = |out: &str, csi: &str| {
            out.split(csi).skip(1).filter(|s| !s.starts_with("0m")).count()
        };
        assert_eq!(sets(&stdout, "\x1b["), expected_sets);
        assert_eq!(sets(&encode(&grid, &C), "\\x1b["), expected_sets);
        assert_eq!(sets(&encode(&grid, &PYTHON), "\\x1b["), expected_sets);
        assert_eq!(sets(&encode(&grid, &JAVASCRIPT), "\\x1b["), expected_sets);
        assert_eq!(sets(&encode(&grid, &BASH), "\\033["), expected_sets);
    }

    #[test]
    fn test_multi_row_literal_uses_continuations() {
        let grid = CellGrid::filled(1, 3, Cell::new('o', attr(Color::Red, Color::Transparent))).unwrap();
        let out = encode(&grid, &PYTHON);
        assert_eq!(out.matches("\\\n").count(), 2);
        assert!(out.starts_with("image = \"\"\"\\x1b[0m\\x1b[31mo\\x1b[0m\\n\\\n"));
        assert!(out.ends_with("\\x1b[0m\\n\"\"\"\n"));

        let raw = encode(&grid, &STDOUT);
        assert_eq!(raw.lines().count(), 3);
    }

    #[test]
    fn test_encode_to_writes_same_bytes() {
        let grid = noisy_grid(4, 2, 11);
        let mut buf = Vec::new();
        encode_to(&grid, &C, &mut buf).unwrap();
        assert_eq!(buf, encode(&grid, &C).into_bytes());
    }
}
