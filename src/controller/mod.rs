//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input
//! and coordinates between the model, the persisted stores and the catalog.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key and mouse event handling
//! - `search`: Debounced search input
//! - `listing`: Popular / search / favorites grid flows
//! - `details`: Details modal lifecycle

mod input;
mod search;
mod listing;
mod details;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::model::{AppModel, CatalogClient, FavoritesStore, Listing, ThemeStore};

pub use search::{SearchAction, SearchCoordinator};

pub const CREDENTIAL_MESSAGE: &str = "Please set your TMDb API key in the TMDB_API_KEY environment \
variable (replace YOUR_TMDB_API_KEY_HERE) and restart the app.";

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    pub(crate) favorites: FavoritesStore,
    pub(crate) theme: ThemeStore,
    pub(crate) search: SearchCoordinator,
}

impl AppController {
    pub fn new(
        model: Arc<Mutex<AppModel>>,
        favorites: FavoritesStore,
        theme: ThemeStore,
        search: SearchCoordinator,
    ) -> Self {
        Self {
            model,
            favorites,
            theme,
            search,
        }
    }

    /// First paint: the popular listing, or the setup message when there is no key.
    pub async fn initialize(&self) {
        if self.catalog().await.is_none() {
            tracing::warn!("No usable TMDb API key, network features disabled");
            let model = self.model.lock().await;
            model.begin_grid_request(Listing::Popular, CREDENTIAL_MESSAGE).await;
            return;
        }
        self.show_popular().await;
    }

    /// Run an action the search coordinator let through
    pub async fn dispatch_search(&self, action: SearchAction) {
        match action {
            SearchAction::Popular => self.show_popular().await,
            SearchAction::Search(query) => self.search_movies(&query).await,
        }
    }

    pub async fn toggle_theme(&self) {
        if let Err(e) = self.theme.toggle().await {
            tracing::error!(error = %e, "Failed to persist theme");
        }
    }

    /// The catalog client, or None when no credential is configured
    pub(crate) async fn catalog(&self) -> Option<CatalogClient> {
        self.model.lock().await.get_catalog_client()
    }
}
