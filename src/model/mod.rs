//! Model module - Application state, persistence and the catalog client
//!
//! - `types`: Movie records, theme and UI enums
//! - `storage`: JSON key-value persistence adapter
//! - `favorites`: Favorited movie ids
//! - `preferences`: Preferences record and the theme store
//! - `content`: Grid cards and the details modal state
//! - `tmdb_client`: TMDb API client
//! - `app_model`: Main application model with state management methods

mod types;
mod storage;
mod favorites;
mod preferences;
mod content;
mod tmdb_client;
mod app_model;

pub use types::{
    pick_trailer, ActiveSection, Listing, MovieDetail, MovieId, MovieSummary, Theme, UiState,
    Video,
};

pub use storage::JsonStore;

pub use favorites::FavoritesStore;

pub use preferences::ThemeStore;

pub use content::{
    CardAction, CardTarget, ContentState, DetailView, FavoriteToggle, GridState, ModalBody,
    ModalState, MovieCard,
};

pub use tmdb_client::{poster_url, trailer_url, CatalogClient, CatalogError, NO_POSTER};

pub use app_model::AppModel;
