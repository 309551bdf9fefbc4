//! Visual theme and styling.

use console::Style;

/// Report theme.
#[derive(Debug, Clone)]
pub struct PreflightTheme {
    /// Style for success markers and messages (green).
    pub success: Style,
    /// Style for warning markers (orange).
    pub warning: Style,
    /// Style for error markers and messages (red bold).
    pub error: Style,
    /// Style for in-progress lines (magenta).
    pub info: Style,
    /// Style for secondary text such as hints and commands (dim).
    pub dim: Style,
    /// Style for banner titles (bold).
    pub highlight: Style,
    /// Style for separator lines (dim).
    pub border: Style,
}

impl Default for PreflightTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl PreflightTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().magenta(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            border: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            border: Style::new(),
        }
    }

    /// Pick the theme for the current terminal.
    pub fn detect(no_color: bool) -> Self {
        if !no_color && should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_leaves_text_untouched() {
        let theme = PreflightTheme::plain();
        assert_eq!(theme.error.apply_to("boom").to_string(), "boom");
        assert_eq!(theme.success.apply_to("ok").to_string(), "ok");
    }

    #[test]
    fn no_color_flag_forces_plain() {
        let theme = PreflightTheme::detect(true);
        assert_eq!(theme.warning.apply_to("careful").to_string(), "careful");
    }
}
