//! Results grid rendering

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{ActiveSection, ContentState, GridState, UiState};
use super::card::{draw_card, CARD_HEIGHT};
use super::theme::Palette;
use super::utils::columns_for_inner_width;

/// Bordered, padded frame around the grid; its chrome is `GRID_CHROME_WIDTH` wide
fn grid_block(title: String, border_style: Style, palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding::horizontal(1))
        .border_style(border_style)
        .style(Style::default().bg(palette.background))
}

pub fn render_grid(frame: &mut Frame, area: Rect, ui_state: &UiState, content_state: &ContentState, palette: &Palette) {
    let focused = ui_state.active_section == ActiveSection::Grid;
    let border_style = if focused {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.border)
    };

    let block = grid_block(ui_state.listing.title(), border_style, palette);

    let cards = match &content_state.grid {
        GridState::Placeholder(text) => {
            let placeholder = Paragraph::new(text.as_str())
                .style(Style::default().fg(palette.muted))
                .wrap(Wrap { trim: false })
                .block(block);
            frame.render_widget(placeholder, area);
            return;
        }
        GridState::Cards(cards) => cards,
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = columns_for_inner_width(inner.width);
    let cell_width = inner.width / columns as u16;
    let visible_rows = (inner.height / CARD_HEIGHT).max(1) as usize;

    // Scroll so the selected row stays on screen
    let selected_row = content_state.selected_index / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    for (index, card) in cards.iter().enumerate() {
        let row = index / columns;
        if row < first_row || row >= first_row + visible_rows {
            continue;
        }
        let col = index % columns;
        let cell = Rect {
            x: inner.x + col as u16 * cell_width,
            y: inner.y + (row - first_row) as u16 * CARD_HEIGHT,
            width: cell_width,
            height: CARD_HEIGHT,
        };
        let selected = focused && index == content_state.selected_index;
        draw_card(frame, cell, card, selected, palette);
    }
}
