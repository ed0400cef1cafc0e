//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `card`: Card renderer (movie → card node) and cell drawing
//! - `theme`: Light/dark palettes
//! - `utils`: Shared layout helpers
//! - `layout`: Top bar and footer
//! - `grid`: Results grid
//! - `overlays`: Details modal and help popup

pub mod card;
mod theme;
pub mod utils;
mod layout;
mod grid;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::model::{ContentState, ModalState, Theme, UiState};
use theme::Palette;

pub struct AppView;

impl AppView {
    pub fn render(
        frame: &mut Frame,
        ui_state: &UiState,
        content_state: &ContentState,
        modal_state: &ModalState,
        theme: Theme,
    ) {
        let palette = Palette::for_theme(theme);

        frame.render_widget(
            Block::default().style(Style::default().bg(palette.background)),
            frame.area(),
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar + toggles
                Constraint::Min(0),    // Grid
                Constraint::Length(1), // Key hints
            ])
            .split(frame.area());

        layout::render_top_bar(frame, chunks[0], ui_state, theme, &palette);
        grid::render_grid(frame, chunks[1], ui_state, content_state, &palette);
        layout::render_footer(frame, chunks[2], &palette);

        if modal_state.visible {
            overlays::render_details_modal(frame, modal_state, &palette);
        }

        if ui_state.show_help_popup {
            overlays::render_help_popup(frame, &palette);
        }
    }
}
