//! Colors used by the kask dashboard.

use ratatui::style::{Color, Modifier, Style};

/// Color palette for the dashboard.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Normal text
    pub text: Color,
    /// Unfocused borders and titles
    pub border_dim: Color,
    /// Border/title of the focused pane
    pub focus_highlight: Color,
    /// `~~~~` rules in the detail pane
    pub divider: Color,
    /// Brewery website line
    pub link: Color,
    /// Foreground of the selected tap list entry
    pub selected_fg: Color,
    /// Background of the selected tap list entry
    pub selected_bg: Color,
    /// Filled portion of the keg meter
    pub fill: Color,
    /// Empty portion of the keg meter
    pub fill_empty: Color,
}

/// Complete theme definition.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Color palette
    pub colors: ThemeColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: ThemeColors {
                text: Color::White,
                border_dim: Color::DarkGray,
                focus_highlight: Color::Green,
                divider: Color::Red,
                link: Color::Cyan,
                selected_fg: Color::White,
                selected_bg: Color::Green,
                fill: Color::Green,
                fill_empty: Color::DarkGray,
            },
        }
    }
}

impl Theme {
    /// Style of the highlighted tap list line.
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.colors.selected_fg)
            .bg(self.colors.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style for a pane, depending on focus.
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.colors.focus_highlight)
        } else {
            Style::default().fg(self.colors.border_dim)
        }
    }

    /// Title style for a pane, depending on focus.
    pub fn title_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.colors.focus_highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.colors.text)
        }
    }
}
