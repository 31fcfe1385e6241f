//! Color themes and styling for the explorer.

use ratatui::style::{Color, Modifier, Style};

/// Zen minimalist color scheme for the pagewise explorer
pub struct Theme {
    /// Primary accent color (cyan for active elements)
    pub primary: Color,
    /// Success color (green for matches)
    pub success: Color,
    /// Muted color (dark gray for disabled/inactive elements)
    pub muted: Color,
    /// Text color (white for normal text)
    pub text: Color,
    /// Background color (black/default)
    pub background: Color,
}

impl Theme {
    /// Create the default zen minimalist theme
    pub fn default_theme() -> Self {
        Self {
            primary: Color::Cyan,
            success: Color::Green,
            muted: Color::DarkGray,
            text: Color::White,
            background: Color::Reset,
        }
    }

    /// Accent color (alias for primary)
    pub fn accent(&self) -> Color {
        self.primary
    }

    /// Style for the active page in the page strip
    pub fn active_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    /// Style for clickable controls
    pub fn control_style(&self, enabled: bool) -> Style {
        if enabled {
            Style::default().fg(self.text)
        } else {
            Style::default().fg(self.muted)
        }
    }

    /// Style for the line number gutter
    pub fn gutter_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for the search box, highlighted while it has focus
    pub fn search_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.primary)
        } else {
            Style::default().fg(self.muted)
        }
    }

    /// Style for metrics and statistics
    pub fn metric_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for the match counter
    pub fn match_style(&self) -> Style {
        Style::default().fg(self.success)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default_theme();
        assert_eq!(theme.primary, Color::Cyan);
        assert_eq!(theme.success, Color::Green);
        assert_eq!(theme.muted, Color::DarkGray);
    }

    #[test]
    fn test_disabled_controls_are_muted() {
        let theme = Theme::default_theme();
        assert_eq!(theme.control_style(false).fg, Some(Color::DarkGray));
        assert_ne!(theme.control_style(true).fg, theme.control_style(false).fg);
    }
}
