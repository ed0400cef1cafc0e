//! Card rendering: movie summary → card node → grid cell widget

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{poster_url, FavoriteToggle, FavoritesStore, MovieCard, MovieSummary};
use super::theme::Palette;
use super::utils::truncate_string;

pub const UNKNOWN_GLYPH: &str = "—";

/// Rating to one decimal, or the unknown glyph
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(value) => format!("{:.1}", value),
        None => UNKNOWN_GLYPH.to_string(),
    }
}

/// Build the card for `movie`. Favorites are read once, for the initial heart state.
pub fn render_card(movie: &MovieSummary, favorites: &FavoritesStore) -> MovieCard {
    MovieCard {
        movie: movie.clone(),
        title: movie.title.clone(),
        rating: format_rating(movie.rating()),
        year: movie.release_year().map(str::to_string),
        poster: poster_url(movie.poster_path.as_deref()),
        favorite: FavoriteToggle {
            pressed: favorites.is_favorite(movie.id),
        },
    }
}

/// Height of one grid cell, borders included
pub const CARD_HEIGHT: u16 = 5;
pub const CARD_MIN_WIDTH: u16 = 26;

pub fn draw_card(frame: &mut Frame, area: Rect, card: &MovieCard, selected: bool, palette: &Palette) {
    let border_style = if selected {
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.border)
    };

    let inner_width = area.width.saturating_sub(4) as usize;
    let heart_style = if card.favorite.pressed {
        Style::default().fg(palette.favorite)
    } else {
        Style::default().fg(palette.muted)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(card.favorite.glyph(), heart_style),
            Span::raw(" "),
            Span::styled(
                truncate_string(&card.title, inner_width.saturating_sub(2)),
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(card.caption(), Style::default().fg(palette.muted))),
        Line::from(Span::styled(
            truncate_string(&card.poster, inner_width),
            Style::default().fg(palette.dim),
        )),
    ];

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(palette.background)),
    );
    frame.render_widget(widget, area);
}
