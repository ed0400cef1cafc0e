//! Grid and modal state: rendered cards, placeholders and the details view

use super::types::{MovieId, MovieSummary};

/// Which part of a card was activated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardTarget {
    Body,
    FavoriteButton,
}

/// What a card activation asks the controller to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAction {
    OpenDetails(MovieId),
    ToggleFavorite(MovieId),
}

/// The heart button on a card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FavoriteToggle {
    pub pressed: bool,
}

impl FavoriteToggle {
    pub fn glyph(&self) -> &'static str {
        if self.pressed { "♥" } else { "♡" }
    }
}

/// A rendered movie card, independent of the terminal toolkit
#[derive(Clone, Debug, PartialEq)]
pub struct MovieCard {
    pub movie: MovieSummary,
    pub title: String,
    pub rating: String,
    pub year: Option<String>,
    pub poster: String,
    pub favorite: FavoriteToggle,
}

impl MovieCard {
    pub fn id(&self) -> MovieId {
        self.movie.id
    }

    /// "⭐ 8.0 | 2021", or just the rating when the year is unknown
    pub fn caption(&self) -> String {
        match &self.year {
            Some(year) => format!("⭐ {} | {}", self.rating, year),
            None => format!("⭐ {}", self.rating),
        }
    }

    /// The favorite button contains its own activation: it never opens details.
    pub fn activate(&self, target: CardTarget) -> CardAction {
        match target {
            CardTarget::Body => CardAction::OpenDetails(self.id()),
            CardTarget::FavoriteButton => CardAction::ToggleFavorite(self.id()),
        }
    }
}

/// Contents of the results grid. Always replaced whole.
#[derive(Clone, Debug, PartialEq)]
pub enum GridState {
    Placeholder(String),
    Cards(Vec<MovieCard>),
}

impl Default for GridState {
    fn default() -> Self {
        GridState::Placeholder(String::new())
    }
}

impl GridState {
    pub fn cards(&self) -> &[MovieCard] {
        match self {
            GridState::Cards(cards) => cards,
            GridState::Placeholder(_) => &[],
        }
    }

    pub fn placeholder(&self) -> Option<&str> {
        match self {
            GridState::Placeholder(text) => Some(text),
            GridState::Cards(_) => None,
        }
    }
}

/// State for the results grid
#[derive(Clone, Debug, Default)]
pub struct ContentState {
    pub grid: GridState,
    pub selected_index: usize,
    /// Token of the most recent list request; older responses are dropped
    pub request_token: u64,
}

/// Everything the details modal shows for one movie
#[derive(Clone, Debug, PartialEq)]
pub struct DetailView {
    pub movie_id: MovieId,
    pub poster: String,
    pub heading: String,
    pub tagline: String,
    pub overview: String,
    pub rating: String,
    pub runtime: Option<String>,
    pub trailer_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalBody {
    #[default]
    Empty,
    Placeholder(String),
    Detail(DetailView),
}

/// State for the details modal
#[derive(Clone, Debug)]
pub struct ModalState {
    pub visible: bool,
    pub aria_hidden: bool,
    pub body: ModalBody,
    pub request_token: u64,
}

impl Default for ModalState {
    fn default() -> Self {
        Self {
            visible: false,
            aria_hidden: true,
            body: ModalBody::Empty,
            request_token: 0,
        }
    }
}
