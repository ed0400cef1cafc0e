//! Main application model with state management

use std::sync::Arc;
use tokio::sync::Mutex;

use super::content::{ContentState, GridState, ModalBody, ModalState, MovieCard};
use super::tmdb_client::CatalogClient;
use super::types::{ActiveSection, Listing, MovieId, UiState};

/// Main application model containing all state
pub struct AppModel {
    pub catalog: Option<CatalogClient>,
    pub ui_state: Arc<Mutex<UiState>>,
    pub content_state: Arc<Mutex<ContentState>>,
    pub modal_state: Arc<Mutex<ModalState>>,
    pub should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            catalog: None,
            ui_state: Arc::new(Mutex::new(UiState::default())),
            content_state: Arc::new(Mutex::new(ContentState::default())),
            modal_state: Arc::new(Mutex::new(ModalState::default())),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    pub fn set_catalog_client(&mut self, client: CatalogClient) {
        self.catalog = Some(client);
    }

    pub fn get_catalog_client(&self) -> Option<CatalogClient> {
        self.catalog.clone()
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    // ========================================================================
    // UI State
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn cycle_section(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.next();
    }

    pub async fn set_active_section(&self, section: ActiveSection) {
        self.ui_state.lock().await.active_section = section;
    }

    /// Append to the query and return the new text
    pub async fn append_to_search(&self, c: char) -> String {
        let mut state = self.ui_state.lock().await;
        state.search_query.push(c);
        state.search_query.clone()
    }

    pub async fn backspace_search(&self) -> String {
        let mut state = self.ui_state.lock().await;
        state.search_query.pop();
        state.search_query.clone()
    }

    pub async fn clear_search(&self) {
        self.ui_state.lock().await.search_query.clear();
    }

    pub async fn set_grid_columns(&self, columns: usize) {
        self.ui_state.lock().await.grid_columns = columns.max(1);
    }

    pub async fn show_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }

    // ========================================================================
    // Grid
    // ========================================================================

    pub async fn get_content_state(&self) -> ContentState {
        self.content_state.lock().await.clone()
    }

    /// Start a list request: show `placeholder` and hand out a fresh token.
    pub async fn begin_grid_request(&self, listing: Listing, placeholder: &str) -> u64 {
        self.ui_state.lock().await.listing = listing;

        let mut content = self.content_state.lock().await;
        content.request_token += 1;
        content.grid = GridState::Placeholder(placeholder.to_string());
        content.selected_index = 0;
        content.request_token
    }

    /// Publish a list result. Returns false when a newer request superseded it.
    pub async fn finish_grid_request(&self, token: u64, grid: GridState) -> bool {
        let mut content = self.content_state.lock().await;
        if content.request_token != token {
            tracing::debug!(
                token,
                latest = content.request_token,
                "Discarding stale grid response"
            );
            return false;
        }
        content.grid = grid;
        content.selected_index = 0;
        true
    }

    pub async fn get_selected_card(&self) -> Option<MovieCard> {
        let content = self.content_state.lock().await;
        content.grid.cards().get(content.selected_index).cloned()
    }

    /// Repaint the heart on the selected card, if it still shows `movie_id`
    pub async fn update_selected_card_favorite(&self, movie_id: MovieId, pressed: bool) {
        let mut content = self.content_state.lock().await;
        let index = content.selected_index;
        if let GridState::Cards(cards) = &mut content.grid {
            if let Some(card) = cards.get_mut(index).filter(|c| c.id() == movie_id) {
                card.favorite.pressed = pressed;
            }
        }
    }

    /// Move the grid selection by `delta` cells, clamped to the grid
    pub async fn move_selection(&self, delta: isize) {
        let mut content = self.content_state.lock().await;
        let count = content.grid.cards().len();
        if count == 0 {
            return;
        }
        let current = content.selected_index as isize;
        let next = (current + delta).clamp(0, count as isize - 1);
        content.selected_index = next as usize;
    }

    pub async fn move_selection_rows(&self, rows: isize) {
        let columns = self.ui_state.lock().await.grid_columns.max(1) as isize;
        self.move_selection(rows * columns).await;
    }

    // ========================================================================
    // Details modal
    // ========================================================================

    pub async fn get_modal_state(&self) -> ModalState {
        self.modal_state.lock().await.clone()
    }

    pub async fn is_modal_open(&self) -> bool {
        self.modal_state.lock().await.visible
    }

    /// Show the modal with `placeholder` and return the token for this opening
    pub async fn open_modal(&self, placeholder: &str) -> u64 {
        let mut modal = self.modal_state.lock().await;
        modal.request_token += 1;
        modal.visible = true;
        modal.aria_hidden = false;
        modal.body = ModalBody::Placeholder(placeholder.to_string());
        modal.request_token
    }

    /// Fill the modal, unless it was closed or reopened since `token` was issued
    pub async fn finish_modal(&self, token: u64, body: ModalBody) -> bool {
        let mut modal = self.modal_state.lock().await;
        if !modal.visible || modal.request_token != token {
            tracing::debug!(token, latest = modal.request_token, "Discarding stale details response");
            return false;
        }
        modal.body = body;
        true
    }

    pub async fn close_modal(&self) {
        let mut modal = self.modal_state.lock().await;
        // Bump so an in-flight open cannot repaint a closed modal
        modal.request_token += 1;
        modal.visible = false;
        modal.aria_hidden = true;
        modal.body = ModalBody::Empty;
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}
