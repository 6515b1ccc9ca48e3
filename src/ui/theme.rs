use ratatui::style::{Color, Modifier, Style};

/// Styles for the select widget chrome.
#[derive(Clone, Debug)]
pub struct Theme {
    pub option: Style,
    pub focused: Style,
    pub selected: Style,
    pub group_label: Style,
    pub placeholder: Style,
    pub empty: Style,
    pub chip: Style,
    pub pending: Style,
    pub border: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            option: Style::default(),
            focused: Style::default().add_modifier(Modifier::REVERSED),
            selected: Style::default().fg(Color::Green),
            group_label: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            placeholder: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            empty: Style::default().fg(Color::DarkGray),
            chip: Style::default().fg(Color::Black).bg(Color::Gray),
            pending: Style::default().fg(Color::Yellow),
            border: Style::default().fg(Color::DarkGray),
        }
    }
}
