//! ANSI color codes for terminal output.
//!
//! Call graph tree art cycles through five colors by depth; the rest of the
//! palette marks errors and backtrace indices.

/// ANSI color palette for console output.
///
/// Uses only standard 16-color ANSI codes (no RGB).
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub red: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub blue: &'static str,
    pub cyan: &'static str,
    pub white: &'static str,
    pub bright_red: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        red: "\x1b[31m",
        green: "\x1b[32m",
        yellow: "\x1b[33m",
        blue: "\x1b[34m",
        cyan: "\x1b[36m",
        white: "\x1b[37m",
        bright_red: "\x1b[91m",
        reset: "\x1b[0m",
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        red: "",
        green: "",
        yellow: "",
        blue: "",
        cyan: "",
        white: "",
        bright_red: "",
        reset: "",
    };

    /// Create colors based on enabled flag.
    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    /// Check if colors are enabled.
    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Tree art color for a call graph depth. Depths 1, 6, 11, ... share one.
    pub fn for_depth(&self, depth: usize) -> &'static str {
        let palette = [self.red, self.green, self.yellow, self.blue, self.cyan];
        palette[depth % palette.len()]
    }
}
