//! Core type definitions for the application

use serde::{Deserialize, Deserializer, Serialize};

pub type MovieId = u64;

/// A movie as returned by the list endpoints
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MovieSummary {
    pub id: MovieId,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub release_date: Option<String>,
}

impl MovieSummary {
    /// First four characters of the release date, if there is one.
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .map(|date| date.char_indices().nth(4).map_or(date, |(i, _)| &date[..i]))
    }

    /// Average vote; TMDb reports unrated titles as 0.
    pub fn rating(&self) -> Option<f64> {
        self.vote_average.filter(|v| *v > 0.0)
    }
}

/// Full record from `/movie/{id}`
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub summary: MovieSummary,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub tagline: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub overview: Option<String>,
    #[serde(default, rename = "runtime")]
    pub runtime_minutes: Option<u32>,
}

impl MovieDetail {
    pub fn runtime(&self) -> Option<u32> {
        self.runtime_minutes.filter(|m| *m > 0)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Video {
    #[serde(default)]
    pub site: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub key: String,
}

impl Video {
    pub fn is_youtube_trailer(&self) -> bool {
        self.site == "YouTube" && self.kind == "Trailer"
    }
}

/// First YouTube trailer in the order the catalog returned them
pub fn pick_trailer(videos: &[Video]) -> Option<&Video> {
    videos.iter().find(|v| v.is_youtube_trailer())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Which section of the UI is currently active/focused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveSection {
    Search,
    Grid,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Grid,
            ActiveSection::Grid => ActiveSection::Search,
        }
    }
}

/// The flow that last filled the grid
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Listing {
    #[default]
    Popular,
    Search(String),
    Favorites,
}

impl Listing {
    pub fn title(&self) -> String {
        match self {
            Listing::Popular => " Popular ".to_string(),
            Listing::Search(query) => format!(" Results for \"{}\" ", query),
            Listing::Favorites => " Favorites ".to_string(),
        }
    }
}

/// UI state for the application
#[derive(Clone, Debug)]
pub struct UiState {
    pub active_section: ActiveSection,
    pub search_query: String,
    pub listing: Listing,
    /// Cards per grid row at the last draw
    pub grid_columns: usize,
    pub show_help_popup: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_section: ActiveSection::Search,
            search_query: String::new(),
            listing: Listing::Popular,
            grid_columns: 1,
            show_help_popup: false,
        }
    }
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
