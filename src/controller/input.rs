//! Key and mouse event handling

use std::future::Future;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::model::{ActiveSection, CardTarget};
use crate::view::utils::modal_area;
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Ctrl shortcuts work everywhere, including while typing a query
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => {
                    self.model.lock().await.set_should_quit(true).await;
                }
                KeyCode::Char('f') => self.spawn_favorites().await,
                KeyCode::Char('t') => self.toggle_theme().await,
                _ => {}
            }
            return Ok(());
        }

        let model = self.model.lock().await;

        // Help popup swallows everything until dismissed
        if model.is_help_popup_open().await {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H')) {
                model.hide_help_popup().await;
            }
            return Ok(());
        }

        // Details modal
        if model.is_modal_open().await {
            match key.code {
                KeyCode::Esc => model.close_modal().await,
                KeyCode::Char('q') | KeyCode::Char('Q') => model.set_should_quit(true).await,
                _ => {}
            }
            return Ok(());
        }

        let ui_state = model.get_ui_state().await;

        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            model.cycle_section().await;
            return Ok(());
        }

        // Search input: every edit is an input event carrying the full text
        if ui_state.active_section == ActiveSection::Search {
            let text = match key.code {
                KeyCode::Char(c) => model.append_to_search(c).await,
                KeyCode::Backspace => model.backspace_search().await,
                KeyCode::Esc => {
                    model.clear_search().await;
                    String::new()
                }
                KeyCode::Down | KeyCode::Enter => {
                    model.set_active_section(ActiveSection::Grid).await;
                    return Ok(());
                }
                _ => return Ok(()),
            };
            drop(model);
            self.search.on_input(&text).await;
            return Ok(());
        }

        match key.code {
            KeyCode::Left => model.move_selection(-1).await,
            KeyCode::Right => model.move_selection(1).await,
            KeyCode::Up => model.move_selection_rows(-1).await,
            KeyCode::Down => model.move_selection_rows(1).await,
            KeyCode::Enter => {
                drop(model);
                self.spawn_flow(|c| async move { c.activate_selected_card(CardTarget::Body).await });
            }
            // Local only, so it runs inline and toggles apply in keypress order
            KeyCode::Char('f') | KeyCode::Char('F') => {
                drop(model);
                self.activate_selected_card(CardTarget::FavoriteButton).await;
            }
            KeyCode::Char('v') | KeyCode::Char('V') => {
                drop(model);
                self.spawn_favorites().await;
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                model.clear_search().await;
                drop(model);
                self.search.cancel().await;
                self.spawn_flow(|c| async move { c.show_popular().await });
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                drop(model);
                self.toggle_theme().await;
            }
            KeyCode::Char('/') => model.set_active_section(ActiveSection::Search).await,
            KeyCode::Char('h') | KeyCode::Char('H') => model.show_help_popup().await,
            KeyCode::Char('q') | KeyCode::Char('Q') => model.set_should_quit(true).await,
            _ => {}
        }
        Ok(())
    }

    /// A left click on the backdrop, outside the modal box, closes the modal
    pub async fn handle_mouse_event(&self, mouse: MouseEvent, frame_area: Rect) -> Result<()> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(());
        }

        let model = self.model.lock().await;
        if !model.is_modal_open().await {
            return Ok(());
        }

        let clicked = Position::new(mouse.column, mouse.row);
        if !modal_area(frame_area).contains(clicked) {
            tracing::trace!(column = mouse.column, row = mouse.row, "Backdrop click");
            model.close_modal().await;
        }
        Ok(())
    }

    /// A pending debounced search must not replace the favorites view
    async fn spawn_favorites(&self) {
        self.search.cancel().await;
        self.spawn_flow(|c| async move { c.show_favorites().await });
    }

    /// Run a network flow in the background so input stays responsive
    fn spawn_flow<F, Fut>(&self, flow: F)
    where
        F: FnOnce(AppController) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        tokio::spawn(flow(self.clone()));
    }
}
