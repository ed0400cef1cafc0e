//! Shared fixtures for unit tests.

use std::sync::Arc;

use serde_json::{json, Value};
use tokio::sync::{mpsc, Mutex};

use crate::config::AppConfig;
use crate::controller::{AppController, SearchAction, SearchCoordinator};
use crate::model::{AppModel, CatalogClient, FavoritesStore, JsonStore, MovieId, MovieSummary, ThemeStore};

pub const TEST_API_KEY: &str = "test-key";

/// Config pointing the catalog client at `base_url` (usually a mock server).
pub fn config_for(base_url: &str) -> AppConfig {
    AppConfig {
        api_key: Some(TEST_API_KEY.to_string()),
        base_url: base_url.to_string(),
        data_dir: std::env::temp_dir(),
    }
}

pub fn summary(id: MovieId, title: &str) -> MovieSummary {
    MovieSummary {
        id,
        title: title.to_string(),
        poster_path: None,
        vote_average: None,
        release_date: None,
    }
}

/// A `/movie/{id}` body.
pub fn movie_json(id: MovieId, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "poster_path": format!("/poster-{id}.jpg"),
        "vote_average": 7.4,
        "release_date": "2021-09-15",
        "tagline": "It begins.",
        "overview": format!("Overview of {title}"),
        "runtime": 155
    })
}

/// A list-endpoint body with `count` movies numbered from 1.
pub fn results_json(count: usize) -> Value {
    let results: Vec<Value> = (1..=count)
        .map(|i| {
            json!({
                "id": i,
                "title": format!("Movie {i}"),
                "poster_path": null,
                "vote_average": 6.5,
                "release_date": "2020-01-01"
            })
        })
        .collect();
    json!({ "page": 1, "results": results, "total_results": count })
}

/// Controller wired to in-memory stores and a catalog at `base_url`.
pub fn controller_with_catalog(
    base_url: &str,
) -> (AppController, mpsc::UnboundedReceiver<SearchAction>) {
    controller_for_config(&config_for(base_url))
}

/// Controller with no credential configured.
pub fn controller_without_catalog() -> (AppController, mpsc::UnboundedReceiver<SearchAction>) {
    build_controller(AppModel::new())
}

/// Controller built from `config` the way startup does: no catalog when the key is unusable.
pub fn controller_for_config(
    config: &AppConfig,
) -> (AppController, mpsc::UnboundedReceiver<SearchAction>) {
    let mut model = AppModel::new();
    if let Ok(client) = CatalogClient::new(config) {
        model.set_catalog_client(client);
    }
    build_controller(model)
}

fn build_controller(model: AppModel) -> (AppController, mpsc::UnboundedReceiver<SearchAction>) {
    let store = JsonStore::in_memory();
    let (search, actions) = SearchCoordinator::new();
    let controller = AppController::new(
        Arc::new(Mutex::new(model)),
        FavoritesStore::new(store.clone()),
        ThemeStore::load(store),
        search,
    );
    (controller, actions)
}
