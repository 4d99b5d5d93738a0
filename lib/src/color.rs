//! Terminal color palette and the color-to-code mapping
//!
//! The 16 named colors follow the classic ANSI/VGA layout: eight "dark"
//! colors on codes 30-37 and eight "light" colors on codes 90-97.

/// A cell color: one of the 16 named ANSI colors, the terminal default, or
/// transparent (nothing drawn behind the glyph).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Brown,
    Blue,
    Magenta,
    Cyan,
    LightGray,
    DarkGray,
    LightRed,
    LightGreen,
    Yellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    White,
    Default,
    Transparent,
}

impl Color {
    /// All named colors, in code order.
    pub const NAMED: [Color; 16] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Brown,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::LightGray,
        Color::DarkGray,
        Color::LightRed,
        Color::LightGreen,
        Color::Yellow,
        Color::LightBlue,
        Color::LightMagenta,
        Color::LightCyan,
        Color::White,
    ];

    /// Foreground SGR code for this color. `Default` and `Transparent` map to
    /// 0, the reset code.
    pub const fn code(self) -> u8 {
        match self {
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Brown => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::LightGray => 37,
            Color::DarkGray => 90,
            Color::LightRed => 91,
            Color::LightGreen => 92,
            Color::Yellow => 93,
            Color::LightBlue => 94,
            Color::LightMagenta => 95,
            Color::LightCyan => 96,
            Color::White => 97,
            Color::Default | Color::Transparent => 0,
        }
    }

    /// Background SGR code: the foreground code plus 10.
    pub const fn background_code(self) -> u8 {
        self.code() + 10
    }

    /// True for the two colors that have no code of their own.
    pub const fn is_unset(self) -> bool {
        matches!(self, Color::Default | Color::Transparent)
    }

    /// Reference sRGB value used when fitting pixels to the palette.
    ///
    /// Values are the standard VGA text-mode palette.
    pub const fn rgb(self) -> Option<[u8; 3]> {
        match self {
            Color::Black => Some([0, 0, 0]),
            Color::Red => Some([170, 0, 0]),
            Color::Green => Some([0, 170, 0]),
            Color::Brown => Some([170, 85, 0]),
            Color::Blue => Some([0, 0, 170]),
            Color::Magenta => Some([170, 0, 170]),
            Color::Cyan => Some([0, 170, 170]),
            Color::LightGray => Some([170, 170, 170]),
            Color::DarkGray => Some([85, 85, 85]),
            Color::LightRed => Some([255, 85, 85]),
            Color::LightGreen => Some([85, 255, 85]),
            Color::Yellow => Some([255, 255, 85]),
            Color::LightBlue => Some([85, 85, 255]),
            Color::LightMagenta => Some([255, 85, 255]),
            Color::LightCyan => Some([85, 255, 255]),
            Color::White => Some([255, 255, 255]),
            Color::Default | Color::Transparent => None,
        }
    }
}

/// Foreground/background pair attached to every cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub fg: Color,
    pub bg: Color,
}

impl Attribute {
    /// Terminal state right after a reset.
    pub const DEFAULT: Attribute = Attribute::new(Color::Default, Color::Default);

    /// Attribute of a cell with nothing drawn in it.
    pub const TRANSPARENT: Attribute = Attribute::new(Color::Transparent, Color::Transparent);

    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }
}

impl Default for Attribute {
    fn default() -> Self {
        Self::DEFAULT
    }
}
