//! TMDb API client wrapper with the four calls the app needs

use std::sync::Arc;

use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::config::AppConfig;
use super::types::{MovieDetail, MovieId, MovieSummary, Video};

pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w342";
pub const NO_POSTER: &str = "assets/no-poster.png";
pub const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

const LANGUAGE: &str = "en-US";
const USER_AGENT: &str = concat!("movies-rs/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no TMDb API key configured")]
    CredentialMissing,

    #[error("TMDb fetch failed: {status}")]
    Transport { status: u16 },

    #[error("TMDb request could not be completed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected TMDb response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct ResultsPage<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

/// Poster URL for a movie, or the bundled placeholder
pub fn poster_url(poster_path: Option<&str>) -> String {
    match poster_path {
        Some(path) => format!("{}{}", IMAGE_BASE_URL, path),
        None => NO_POSTER.to_string(),
    }
}

pub fn trailer_url(key: &str) -> String {
    format!("{}{}", YOUTUBE_WATCH_URL, key)
}

/// TMDb client. Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: Arc<str>,
    api_key: Arc<str>,
}

impl CatalogClient {
    /// Fails with [`CatalogError::CredentialMissing`] when no usable key is configured.
    pub fn new(config: &AppConfig) -> Result<Self, CatalogError> {
        let api_key = config
            .usable_api_key()
            .ok_or(CatalogError::CredentialMissing)?;

        let http = Client::builder().user_agent(USER_AGENT).build()?;

        tracing::debug!(base_url = %config.base_url, "Catalog client initialized");
        Ok(Self {
            http,
            base_url: Arc::from(config.base_url.as_str()),
            api_key: Arc::from(api_key),
        })
    }

    /// GET `path` with the credential and `params`, returning the parsed body.
    pub async fn request(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, CatalogError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .query(&[("api_key", &*self.api_key)])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Transport {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn request_as<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, CatalogError> {
        let value = self.request(path, params).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn popular(&self) -> Result<Vec<MovieSummary>, CatalogError> {
        let path = "/movie/popular";
        crate::log_api_request!("popular", path, page = 1);
        let result = self
            .request_as::<ResultsPage<MovieSummary>>(path, &[("language", LANGUAGE), ("page", "1")])
            .await
            .map(|page| page.results);
        crate::log_api_result!("popular", path, result, counted);
        result
    }

    pub async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, CatalogError> {
        let path = "/search/movie";
        crate::log_api_request!("search", path, query);
        let result = self
            .request_as::<ResultsPage<MovieSummary>>(
                path,
                &[
                    ("language", LANGUAGE),
                    ("query", query),
                    ("page", "1"),
                    ("include_adult", "false"),
                ],
            )
            .await
            .map(|page| page.results);
        crate::log_api_result!("search", path, result, counted);
        result
    }

    pub async fn movie(&self, id: MovieId) -> Result<MovieDetail, CatalogError> {
        let path = format!("/movie/{}", id);
        crate::log_api_request!("movie", path, movie_id = id);
        let result = self
            .request_as::<MovieDetail>(&path, &[("language", LANGUAGE)])
            .await;
        crate::log_api_result!("movie", path, result);
        result
    }

    pub async fn videos(&self, id: MovieId) -> Result<Vec<Video>, CatalogError> {
        let path = format!("/movie/{}/videos", id);
        crate::log_api_request!("videos", path, movie_id = id);
        let result = self
            .request_as::<ResultsPage<Video>>(&path, &[("language", LANGUAGE)])
            .await
            .map(|page| page.results);
        crate::log_api_result!("videos", path, result, counted);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::API_KEY_SENTINEL;
    use crate::test_fixtures::{config_for, movie_json, results_json, TEST_API_KEY};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn poster_url_falls_back_to_placeholder() {
        assert_eq!(poster_url(None), NO_POSTER);
        assert_eq!(
            poster_url(Some("/abc.jpg")),
            "https://image.tmdb.org/t/p/w342/abc.jpg"
        );
    }

    #[test]
    fn missing_or_sentinel_key_is_rejected() {
        let mut config = config_for("http://127.0.0.1:1");
        config.api_key = None;
        assert!(matches!(
            CatalogClient::new(&config),
            Err(CatalogError::CredentialMissing)
        ));

        config.api_key = Some(API_KEY_SENTINEL.to_string());
        assert!(matches!(
            CatalogClient::new(&config),
            Err(CatalogError::CredentialMissing)
        ));
    }

    #[tokio::test]
    async fn popular_sends_key_language_and_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/popular"))
            .and(query_param("api_key", TEST_API_KEY))
            .and(query_param("language", "en-US"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(results_json(3)))
            .expect(1)
            .mount(&server)
            .await;

        let client = CatalogClient::new(&config_for(&server.uri())).unwrap();
        let movies = client.popular().await.unwrap();

        assert_eq!(movies.len(), 3);
        assert_eq!(movies[0].id, 1);
    }

    #[tokio::test]
    async fn search_encodes_query_and_excludes_adult() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/movie"))
            .and(query_param("query", "star wars & more"))
            .and(query_param("include_adult", "false"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(results_json(2)))
            .expect(1)
            .mount(&server)
            .await;

        let client = CatalogClient::new(&config_for(&server.uri())).unwrap();
        assert_eq!(client.search("star wars & more").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn non_success_status_is_a_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/99"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"status_code": 34})))
            .mount(&server)
            .await;

        let client = CatalogClient::new(&config_for(&server.uri())).unwrap();
        match client.movie(99).await {
            Err(CatalogError::Transport { status }) => assert_eq!(status, 404),
            other => panic!("expected transport error, got {:?}", other.map(|m| m.summary.id)),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/popular"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = CatalogClient::new(&config_for(&server.uri())).unwrap();
        assert!(matches!(client.popular().await, Err(CatalogError::Decode(_))));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        let client = CatalogClient::new(&config_for("http://127.0.0.1:9")).unwrap();
        assert!(matches!(client.popular().await, Err(CatalogError::Network(_))));
    }

    #[tokio::test]
    async fn movie_and_videos_decode() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/438631"))
            .respond_with(ResponseTemplate::new(200).set_body_json(movie_json(438631, "Dune")))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/movie/438631/videos"))
            .and(query_param("language", "en-US"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 438631,
                "results": [{"site": "YouTube", "type": "Trailer", "key": "n9xhJrPXop4"}]
            })))
            .mount(&server)
            .await;

        let client = CatalogClient::new(&config_for(&server.uri())).unwrap();
        let detail = client.movie(438631).await.unwrap();
        let videos = client.videos(438631).await.unwrap();

        assert_eq!(detail.summary.title, "Dune");
        assert_eq!(videos[0].key, "n9xhJrPXop4");
    }
}
