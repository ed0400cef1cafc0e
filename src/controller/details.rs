//! Details modal lifecycle

use crate::model::{
    pick_trailer, poster_url, trailer_url, DetailView, ModalBody, MovieDetail, MovieId, Video,
};
use crate::view::card::format_rating;
use super::AppController;

pub const DETAILS_LOADING: &str = "Loading details...";
pub const DETAILS_FAILED: &str = "Failed to load details";
pub const NO_OVERVIEW: &str = "No overview available.";

/// Assemble the modal content for one movie and its videos
pub fn build_detail_view(detail: &MovieDetail, videos: &[Video]) -> DetailView {
    let summary = &detail.summary;
    let heading = match summary.release_year() {
        Some(year) => format!("{} ({})", summary.title, year),
        None => summary.title.clone(),
    };

    DetailView {
        movie_id: summary.id,
        poster: poster_url(summary.poster_path.as_deref()),
        heading,
        tagline: detail.tagline.clone().unwrap_or_default(),
        overview: detail
            .overview
            .clone()
            .unwrap_or_else(|| NO_OVERVIEW.to_string()),
        rating: format_rating(summary.rating()),
        runtime: detail.runtime().map(|minutes| format!("{} min", minutes)),
        trailer_url: pick_trailer(videos).map(|video| trailer_url(&video.key)),
    }
}

impl AppController {
    /// Open the modal and fill it with the movie's details and trailer.
    ///
    /// Both requests run concurrently; either failing shows the failure text.
    pub async fn open_details(&self, movie_id: MovieId) {
        let Some(catalog) = self.catalog().await else {
            return;
        };

        let token = self.model.lock().await.open_modal(DETAILS_LOADING).await;
        tracing::debug!(movie_id, token, "Opening details");

        let body = match tokio::try_join!(catalog.movie(movie_id), catalog.videos(movie_id)) {
            Ok((detail, videos)) => ModalBody::Detail(build_detail_view(&detail, &videos)),
            Err(e) => {
                tracing::error!(movie_id, error = %e, "Failed to load details");
                ModalBody::Placeholder(DETAILS_FAILED.to_string())
            }
        };

        let model = self.model.lock().await;
        model.finish_modal(token, body).await;
    }

    pub async fn close_details(&self) {
        self.model.lock().await.close_modal().await;
    }
}
