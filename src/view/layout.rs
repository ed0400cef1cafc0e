//! Layout rendering (top bar, footer)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{ActiveSection, Theme, UiState};
use super::theme::Palette;

pub fn render_top_bar(frame: &mut Frame, area: Rect, ui_state: &UiState, theme: Theme, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Search input
            Constraint::Length(14), // Favorites trigger
            Constraint::Length(14), // Theme toggle
        ])
        .split(area);

    let focused = ui_state.active_section == ActiveSection::Search;
    let border_style = if focused {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.border)
    };

    let (search_text, search_style) = if ui_state.search_query.is_empty() {
        ("Search movies...", Style::default().fg(palette.dim))
    } else {
        (ui_state.search_query.as_str(), Style::default().fg(palette.text))
    };

    let search = Paragraph::new(search_text).style(search_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .padding(Padding::horizontal(1))
            .border_style(border_style)
            .style(Style::default().bg(palette.background)),
    );
    frame.render_widget(search, chunks[0]);

    let favorites = Paragraph::new("♥ Favs [v]")
        .style(Style::default().fg(palette.favorite))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .style(Style::default().bg(palette.background)),
        );
    frame.render_widget(favorites, chunks[1]);

    let theme_label = match theme {
        Theme::Light => "☀ Light [t]",
        Theme::Dark => "☾ Dark [t]",
    };
    let theme_toggle = Paragraph::new(theme_label)
        .style(Style::default().fg(palette.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .style(Style::default().bg(palette.background)),
        );
    frame.render_widget(theme_toggle, chunks[2]);
}

pub fn render_footer(frame: &mut Frame, area: Rect, palette: &Palette) {
    let hints = [
        ("Tab", "focus"),
        ("Enter", "details"),
        ("f", "favorite"),
        ("v", "favorites"),
        ("p", "popular"),
        ("t", "theme"),
        ("h", "help"),
        ("q", "quit"),
    ];

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, desc) in hints {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!("{}  ", desc), Style::default().fg(palette.muted)));
    }

    let footer = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.background));
    frame.render_widget(footer, area);
}
