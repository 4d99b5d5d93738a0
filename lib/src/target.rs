//! Output targets: how one escape-coded image is spelled for each destination
//!
//! A target is plain data. The encoder asks it for the prologue, the
//! per-row framing, the spelling of SGR sequences and the escaping of each
//! glyph, so the same traversal serves raw terminal output and the four
//! string-literal dialects.

use std::fmt::Write;
use std::str::FromStr;

use crate::error::Error;

/// Spelling rules for one output dialect.
#[derive(Debug)]
pub struct OutputTarget {
    /// Human-readable name, used in logs.
    pub name: &'static str,
    /// Text written before the first reset, e.g. a variable declaration.
    opening: &'static str,
    /// Text written after the last row.
    closing: &'static str,
    /// Control Sequence Introducer as it must appear in the output.
    csi: &'static str,
    /// Newline as it must appear inside the output.
    newline: &'static str,
    /// Written before every row except the first.
    row_separator: &'static str,
    escape_char: fn(char, &mut String),
}

impl OutputTarget {
    /// Prologue: the opening text followed by a reset.
    pub fn prologue(&self) -> String {
        let mut out = String::from(self.opening);
        self.push_reset(&mut out);
        out
    }

    pub fn epilogue(&self) -> &'static str {
        self.closing
    }

    /// Empty for every built-in target.
    pub fn line_start(&self) -> &'static str {
        ""
    }

    /// Reset followed by a newline, spelled for this target.
    pub fn line_end(&self) -> String {
        let mut out = String::new();
        self.push_line_end(&mut out);
        out
    }

    pub fn row_separator(&self) -> &'static str {
        self.row_separator
    }

    pub fn reset(&self) -> String {
        let mut out = String::new();
        self.push_reset(&mut out);
        out
    }

    pub fn set_foreground(&self, fg: u8) -> String {
        let mut out = String::new();
        self.push_foreground(&mut out, fg);
        out
    }

    /// `bg` is already a background code (foreground code plus 10).
    pub fn set_foreground_background(&self, fg: u8, bg: u8) -> String {
        let mut out = String::new();
        self.push_foreground_background(&mut out, fg, bg);
        out
    }

    pub fn escape_char(&self, glyph: char) -> String {
        let mut out = String::with_capacity(2);
        self.push_glyph(&mut out, glyph);
        out
    }

    /// Append `glyph` to `out`, escaped for this target.
    pub fn push_glyph(&self, out: &mut String, glyph: char) {
        (self.escape_char)(glyph, out)
    }

    pub fn push_reset(&self, out: &mut String) {
        out.push_str(self.csi);
        out.push_str("0m");
    }

    pub fn push_foreground(&self, out: &mut String, fg: u8) {
        let _ = write!(out, "{}{}m", self.csi, fg);
    }

    pub fn push_foreground_background(&self, out: &mut String, fg: u8, bg: u8) {
        let _ = write!(out, "{}{};{}m", self.csi, fg, bg);
    }

    pub fn push_line_end(&self, out: &mut String) {
        self.push_reset(out);
        out.push_str(self.newline);
    }
}

fn escape_raw(glyph: char, out: &mut String) {
    out.push(glyph);
}

fn escape_c_like(glyph: char, out: &mut String) {
    if matches!(glyph, '"' | '\'' | '?' | '\\') {
        out.push('\\');
    }
    out.push(glyph);
}

fn escape_shell(glyph: char, out: &mut String) {
    if matches!(glyph, '"' | '\\' | '$' | '`' | '!') {
        out.push('\\');
    }
    out.push(glyph);
}

// Backslash-newline inside a string literal is a line continuation in C,
// Python, JavaScript and Bash alike.
const CONTINUATION: &str = "\\\n";

pub static STDOUT: OutputTarget = OutputTarget {
    name: "stdout",
    opening: "",
    closing: "",
    csi: "\x1b[",
    newline: "\n",
    row_separator: "",
    escape_char: escape_raw,
};

pub static C: OutputTarget = OutputTarget {
    name: "c",
    opening: "const char* image = \"",
    closing: "\";\n",
    csi: "\\x1b[",
    newline: "\\n",
    row_separator: CONTINUATION,
    escape_char: escape_c_like,
};

pub static PYTHON: OutputTarget = OutputTarget {
    name: "python",
    opening: "image = \"\"\"",
    closing: "\"\"\"\n",
    csi: "\\x1b[",
    newline: "\\n",
    row_separator: CONTINUATION,
    escape_char: escape_c_like,
};

pub static JAVASCRIPT: OutputTarget = OutputTarget {
    name: "javascript",
    opening: "const image = '",
    closing: "';\n",
    csi: "\\x1b[",
    newline: "\\n",
    row_separator: CONTINUATION,
    escape_char: escape_c_like,
};

pub static BASH: OutputTarget = OutputTarget {
    name: "bash",
    opening: "IMAGE=\"",
    closing: "\"\n",
    csi: "\\033[",
    newline: "\\n",
    row_separator: CONTINUATION,
    escape_char: escape_shell,
};

/// User-facing output mode, resolved to a built-in [`OutputTarget`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Stdout,
    C,
    Python,
    JavaScript,
    Bash,
}

impl OutputMode {
    pub const ALL: [OutputMode; 5] = [
        OutputMode::Stdout,
        OutputMode::C,
        OutputMode::Python,
        OutputMode::JavaScript,
        OutputMode::Bash,
    ];

    pub fn target(self) -> &'static OutputTarget {
        match self {
            OutputMode::Stdout => &STDOUT,
            OutputMode::C => &C,
            OutputMode::Python => &PYTHON,
            OutputMode::JavaScript => &JAVASCRIPT,
            OutputMode::Bash => &BASH,
        }
    }
}

impl FromStr for OutputMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s" | "stdout" => Ok(OutputMode::Stdout),
            "c" => Ok(OutputMode::C),
            "py" | "python" => Ok(OutputMode::Python),
            "js" | "javascript" => Ok(OutputMode::JavaScript),
            "sh" | "bash" => Ok(OutputMode::Bash),
            other => Err(Error::UnknownOutputMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_aliases() {
        let cases = [
            ("s", OutputMode::Stdout),
            ("stdout", OutputMode::Stdout),
            ("c", OutputMode::C),
            ("py", OutputMode::Python),
            ("python", OutputMode::Python),
            ("js", OutputMode::JavaScript),
            ("javascript", OutputMode::JavaScript),
            ("sh", OutputMode::Bash),
            ("bash", OutputMode::Bash),
        ];
        for (name, mode) in cases {
            assert_eq!(name.parse::<OutputMode>().unwrap(), mode, "{name}");
        }
    }

    #[test]
    fn test_unknown_mode() {
        assert!(matches!(
            "rust".parse::<OutputMode>(),
            Err(Error::UnknownOutputMode(name)) if name == "rust"
        ));
        assert!("C".parse::<OutputMode>().is_err());
    }

    #[test]
    fn test_mode_resolves_target() {
        let mode: OutputMode = "sh".parse().unwrap();
        assert_eq!(mode.target().name, "bash");
    }

    #[test]
    fn test_string_and_push_spellings_agree() {
        for mode in OutputMode::ALL {
            let target = mode.target();
            let mut out = String::new();
            target.push_foreground_background(&mut out, 97, 44);
            target.push_foreground(&mut out, 31);
            target.push_reset(&mut out);
            assert_eq!(
                out,
                target.set_foreground_background(97, 44)
                    + &target.set_foreground(31)
                    + &target.reset()
            );
        }
    }

    #[test]
    fn test_prologues() {
        assert_eq!(STDOUT.prologue(), "\x1b[0m");
        assert_eq!(C.prologue(), "const char* image = \"\\x1b[0m");
        assert_eq!(PYTHON.prologue(), "image = \"\"\"\\x1b[0m");
        assert_eq!(JAVASCRIPT.prologue(), "const image = '\\x1b[0m");
        assert_eq!(BASH.prologue(), "IMAGE=\"\\033[0m");
    }

    #[test]
    fn test_epilogues() {
        assert_eq!(STDOUT.epilogue(), "");
        assert_eq!(C.epilogue(), "\";\n");
        assert_eq!(PYTHON.epilogue(), "\"\"\"\n");
        assert_eq!(JAVASCRIPT.epilogue(), "';\n");
        assert_eq!(BASH.epilogue(), "\"\n");
    }

    #[test]
    fn test_line_framing() {
        for mode in OutputMode::ALL {
            assert_eq!(mode.target().line_start(), "");
        }
        assert_eq!(STDOUT.line_end(), "\x1b[0m\n");
        assert_eq!(C.line_end(), "\\x1b[0m\\n");
        assert_eq!(BASH.line_end(), "\\033[0m\\n");
    }

    #[test]
    fn test_sequence_spelling() {
        assert_eq!(STDOUT.set_foreground(31), "\x1b[31m");
        assert_eq!(STDOUT.set_foreground_background(97, 44), "\x1b[97;44m");
        assert_eq!(JAVASCRIPT.set_foreground(31), "\\x1b[31m");
        assert_eq!(BASH.set_foreground_background(30, 47), "\\033[30;47m");
        assert_eq!(PYTHON.reset(), "\\x1b[0m");
    }

    #[test]
    fn test_c_like_escaping() {
        for target in [&C, &PYTHON, &JAVASCRIPT] {
            for glyph in ['"', '\'', '?', '\\'] {
                assert_eq!(target.escape_char(glyph), format!("\\{glyph}"));
            }
            assert_eq!(target.escape_char('$'), "$");
            assert_eq!(target.escape_char('@'), "@");
        }
    }

    #[test]
    fn test_shell_escaping() {
        for glyph in ['"', '\\', '$', '`', '!'] {
            assert_eq!(BASH.escape_char(glyph), format!("\\{glyph}"));
        }
        assert_eq!(BASH.escape_char('\''), "'");
        assert_eq!(BASH.escape_char('?'), "?");
    }

    #[test]
    fn test_stdout_does_not_escape() {
        for glyph in ['"', '\\', '$', '?'] {
            assert_eq!(STDOUT.escape_char(glyph), glyph.to_string());
        }
    }
}
