//! Grid-filling flows: popular, search and favorites

use futures::future::try_join_all;

use crate::model::{CardAction, CardTarget, GridState, Listing, MovieSummary};
use crate::view::card::render_card;
use super::AppController;

pub const POPULAR_LIMIT: usize = 24;
pub const SEARCH_LIMIT: usize = 40;

pub const POPULAR_LOADING: &str = "Loading...";
pub const POPULAR_FAILED: &str = "Failed to load movies";
pub const SEARCH_LOADING: &str = "Searching...";
pub const SEARCH_FAILED: &str = "Search failed";
pub const NO_RESULTS: &str = "No results found";
pub const FAVORITES_LOADING: &str = "Loading favorites...";
pub const FAVORITES_FAILED: &str = "Failed to load favorites";
pub const NO_FAVORITES: &str = "No favorites yet";

impl AppController {
    pub async fn show_popular(&self) {
        let Some(catalog) = self.catalog().await else {
            return;
        };

        let token = self.begin_listing(Listing::Popular, POPULAR_LOADING).await;
        let grid = match catalog.popular().await {
            Ok(movies) => {
                tracing::info!(count = movies.len(), "Popular movies loaded");
                self.build_grid(movies.iter(), Some(POPULAR_LIMIT))
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load popular movies");
                GridState::Placeholder(POPULAR_FAILED.to_string())
            }
        };
        self.finish_listing(token, grid).await;
    }

    pub async fn search_movies(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return self.show_popular().await;
        }
        let Some(catalog) = self.catalog().await else {
            return;
        };

        tracing::debug!(query, "Performing search");
        let token = self
            .begin_listing(Listing::Search(query.to_string()), SEARCH_LOADING)
            .await;
        let grid = match catalog.search(query).await {
            Ok(movies) => {
                tracing::info!(query, count = movies.len(), "Search completed successfully");
                self.build_grid(movies.iter(), Some(SEARCH_LIMIT))
            }
            Err(e) => {
                tracing::error!(query, error = %e, "Search failed");
                GridState::Placeholder(SEARCH_FAILED.to_string())
            }
        };
        self.finish_listing(token, grid).await;
    }

    /// Fetch every favorite in parallel; one failure fails the whole view.
    pub async fn show_favorites(&self) {
        let Some(catalog) = self.catalog().await else {
            return;
        };

        let ids = self.favorites.ids();
        if ids.is_empty() {
            self.begin_listing(Listing::Favorites, NO_FAVORITES).await;
            return;
        }

        let token = self.begin_listing(Listing::Favorites, FAVORITES_LOADING).await;
        let grid = match try_join_all(ids.iter().map(|id| catalog.movie(*id))).await {
            Ok(details) => {
                tracing::info!(count = details.len(), "Favorites loaded");
                self.build_grid(details.iter().map(|d| &d.summary), None)
            }
            Err(e) => {
                tracing::error!(count = ids.len(), error = %e, "Failed to load favorites");
                GridState::Placeholder(FAVORITES_FAILED.to_string())
            }
        };
        self.finish_listing(token, grid).await;
    }

    /// Activate the selected card's body or its favorite button
    pub async fn activate_selected_card(&self, target: CardTarget) {
        let card = self.model.lock().await.get_selected_card().await;
        let Some(card) = card else {
            return;
        };

        match card.activate(target) {
            CardAction::OpenDetails(id) => self.open_details(id).await,
            CardAction::ToggleFavorite(_) => self.toggle_card_favorite(&card.movie).await,
        }
    }

    /// Toggle a favorite and repaint only the selected card's heart
    pub async fn toggle_card_favorite(&self, movie: &MovieSummary) {
        if let Err(e) = self.favorites.toggle(movie) {
            tracing::error!(movie_id = movie.id, error = %e, "Failed to save favorites");
        }

        let pressed = self.favorites.is_favorite(movie.id);
        let model = self.model.lock().await;
        model.update_selected_card_favorite(movie.id, pressed).await;
    }

    fn build_grid<'a, I>(&self, movies: I, limit: Option<usize>) -> GridState
    where
        I: Iterator<Item = &'a MovieSummary>,
    {
        let cards: Vec<_> = movies
            .take(limit.unwrap_or(usize::MAX))
            .map(|movie| render_card(movie, &self.favorites))
            .collect();

        if cards.is_empty() {
            GridState::Placeholder(NO_RESULTS.to_string())
        } else {
            GridState::Cards(cards)
        }
    }

    async fn begin_listing(&self, listing: Listing, placeholder: &str) -> u64 {
        let model = self.model.lock().await;
        model.begin_grid_request(listing, placeholder).await
    }

    async fn finish_listing(&self, token: u64, grid: GridState) {
        let model = self.model.lock().await;
        model.finish_grid_request(token, grid).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GridState;
    use crate::test_fixtures::{controller_with_catalog, movie_json, results_json};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn grid_of(controller: &AppController) -> GridState {
        let model = controller.model.lock().await;
        model.get_content_state().await.grid
    }

    #[tokio::test]
    async fn popular_is_capped_at_24() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/popular"))
            .respond_with(ResponseTemplate::new(200).set_body_json(results_json(30)))
            .mount(&server)
            .await;

        let (controller, _actions) = controller_with_catalog(&server.uri());
        controller.show_popular().await;

        let grid = grid_of(&controller).await;
        assert_eq!(grid.cards().len(), POPULAR_LIMIT);
        assert_eq!(grid.cards()[0].title, "Movie 1");
    }

    #[tokio::test]
    async fn search_is_capped_at_40() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/movie"))
            .and(query_param("query", "dune"))
            .respond_with(ResponseTemplate::new(200).set_body_json(results_json(50)))
            .expect(1)
            .mount(&server)
            .await;

        let (controller, _actions) = controller_with_catalog(&server.uri());
        controller.search_movies("  dune ").await;

        assert_eq!(grid_of(&controller).await.cards().len(), SEARCH_LIMIT);
        let ui = controller.model.lock().await.get_ui_state().await;
        assert_eq!(ui.listing, Listing::Search("dune".to_string()));
    }

    #[tokio::test]
    async fn empty_search_results_show_no_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/movie"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .mount(&server)
            .await;

        let (controller, _actions) = controller_with_catalog(&server.uri());
        controller.search_movies("zzzzzz").await;

        assert_eq!(grid_of(&controller).await.placeholder(), Some(NO_RESULTS));
    }

    #[tokio::test]
    async fn empty_popular_results_show_no_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/popular"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .expect(1)
            .mount(&server)
            .await;

        let (controller, _actions) = controller_with_catalog(&server.uri());
        controller.show_popular().await;

        assert_eq!(grid_of(&controller).await.placeholder(), Some(NO_RESULTS));
        let ui = controller.model.lock().await.get_ui_state().await;
        assert_eq!(ui.listing, Listing::Popular);
    }

    #[tokio::test]
    async fn blank_search_falls_back_to_popular() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/popular"))
            .respond_with(ResponseTemplate::new(200).set_body_json(results_json(2)))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/search/movie"))
            .respond_with(ResponseTemplate::new(200).set_body_json(results_json(2)))
            .expect(0)
            .mount(&server)
            .await;

        let (controller, _actions) = controller_with_catalog(&server.uri());
        controller.search_movies("   ").await;

        assert_eq!(grid_of(&controller).await.cards().len(), 2);
    }

    #[tokio::test]
    async fn failures_show_flow_specific_placeholders() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let (controller, _actions) = controller_with_catalog(&server.uri());

        controller.show_popular().await;
        assert_eq!(grid_of(&controller).await.placeholder(), Some(POPULAR_FAILED));

        controller.search_movies("dune").await;
        assert_eq!(grid_of(&controller).await.placeholder(), Some(SEARCH_FAILED));

        controller.favorites.toggle_id(1).unwrap();
        controller.show_favorites().await;
        assert_eq!(grid_of(&controller).await.placeholder(), Some(FAVORITES_FAILED));
    }

    #[tokio::test]
    async fn favorites_fetch_each_id_in_stored_order() {
        let server = MockServer::start().await;
        for (id, title, delay_ms) in [(30, "Heat", 80), (10, "Alien", 0), (20, "Dune", 40)] {
            Mock::given(method("GET"))
                .and(path(format!("/movie/{}", id)))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(movie_json(id, title))
                        .set_delay(Duration::from_millis(delay_ms)),
                )
                .expect(1)
                .mount(&server)
                .await;
        }

        let (controller, _actions) = controller_with_catalog(&server.uri());
        for id in [30, 10, 20] {
            controller.favorites.toggle_id(id).unwrap();
        }
        controller.show_favorites().await;

        let grid = grid_of(&controller).await;
        let titles: Vec<&str> = grid.cards().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Heat", "Alien", "Dune"]);
        assert!(grid.cards().iter().all(|c| c.favorite.pressed));
    }

    #[tokio::test]
    async fn one_failed_favorite_fails_the_whole_view() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(movie_json(1, "Dune")))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/movie/2"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let (controller, _actions) = controller_with_catalog(&server.uri());
        controller.favorites.toggle_id(1).unwrap();
        controller.favorites.toggle_id(2).unwrap();
        controller.show_favorites().await;

        assert_eq!(grid_of(&controller).await.placeholder(), Some(FAVORITES_FAILED));
    }

    #[tokio::test]
    async fn empty_favorites_short_circuit_without_fetching() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(movie_json(1, "Dune")))
            .expect(0)
            .mount(&server)
            .await;

        let (controller, _actions) = controller_with_catalog(&server.uri());
        controller.show_favorites().await;

        assert_eq!(grid_of(&controller).await.placeholder(), Some(NO_FAVORITES));
    }

    #[tokio::test]
    async fn stale_listing_does_not_overwrite_newer_one() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/popular"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(results_json(10))
                    .set_delay(Duration::from_millis(300)),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/search/movie"))
            .respond_with(ResponseTemplate::new(200).set_body_json(results_json(3)))
            .mount(&server)
            .await;

        let (controller, _actions) = controller_with_catalog(&server.uri());
        let slow = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.show_popular().await })
        };
        // Let the popular request go out first
        tokio::time::sleep(Duration::from_millis(50)).await;
        controller.search_movies("dune").await;
        slow.await.unwrap();

        assert_eq!(grid_of(&controller).await.cards().len(), 3);
    }

    #[tokio::test]
    async fn favorite_button_updates_card_without_opening_details() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/popular"))
            .respond_with(ResponseTemplate::new(200).set_body_json(results_json(3)))
            .mount(&server)
            .await;

        let (controller, _actions) = controller_with_catalog(&server.uri());
        controller.show_popular().await;
        controller.model.lock().await.move_selection(1).await;

        controller.activate_selected_card(CardTarget::FavoriteButton).await;

        let grid = grid_of(&controller).await;
        assert!(grid.cards()[1].favorite.pressed);
        assert!(!grid.cards()[0].favorite.pressed);
        assert!(controller.favorites.is_favorite(2));
        assert!(!controller.model.lock().await.is_modal_open().await);

        controller.activate_selected_card(CardTarget::FavoriteButton).await;
        assert!(!grid_of(&controller).await.cards()[1].favorite.pressed);
        assert!(controller.favorites.ids().is_empty());
    }
}
