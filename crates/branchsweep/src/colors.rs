//! Semantic color theme for terminal output
//!
//! - `ACTIVE` => blue - spinner, progress lines
//! - `SUCCESS` => green - report written
//! - `WARNING` => yellow - stale branch count
//! - `FAIL` => red - errors

use std::io::IsTerminal;
use std::sync::LazyLock;

use owo_colors::Style;

/// Semantic color definitions for terminal output
pub struct SemanticColors {
    /// Blue - spinners, progress lines
    pub active: Style,
    /// Green - completed operations
    pub success: Style,
    /// Yellow - counts that need attention
    pub warning: Style,
    /// Red - errors
    pub fail: Style,
}

impl SemanticColors {
    /// Theme with every style plain
    pub fn plain() -> Self {
        Self {
            active: Style::new(),
            success: Style::new(),
            warning: Style::new(),
            fail: Style::new(),
        }
    }
}

impl Default for SemanticColors {
    fn default() -> Self {
        Self {
            active: Style::new().blue(),
            success: Style::new().green(),
            warning: Style::new().yellow(),
            fail: Style::new().red(),
        }
    }
}

/// Global theme; plain when stdout is not a terminal so piped output stays clean
pub static COLORS: LazyLock<SemanticColors> = LazyLock::new(|| {
    if std::io::stdout().is_terminal() {
        SemanticColors::default()
    } else {
        SemanticColors::plain()
    }
});
