use std::sync::Arc;

use tokio::sync::{watch, RwLock};

use crate::api::MovieQuery;

/// Genre selection for the movie list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenreFilter {
    /// Filter by a genre title, passed through to the catalog API
    Genre(String),
    /// Show only locally favorited movies
    Favorites,
}

/// Current search, genre, and pagination selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    pub search_term: String,
    pub selected_genre: Option<GenreFilter>,
    /// 1-based page number, always at least 1
    pub current_page: u32,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selected_genre: None,
            current_page: 1,
        }
    }
}

impl Filters {
    /// Builds the movies query for the current selection
    ///
    /// An empty search term is omitted, and the favorites view sends no
    /// genre upstream since it filters locally against the favorites store.
    pub fn movie_query(&self) -> MovieQuery {
        let search = if self.search_term.is_empty() {
            None
        } else {
            Some(self.search_term.clone())
        };
        let genre = match &self.selected_genre {
            Some(GenreFilter::Genre(title)) => Some(title.clone()),
            Some(GenreFilter::Favorites) | None => None,
        };

        MovieQuery {
            search,
            genre,
            page: Some(self.current_page),
            limit: None,
        }
    }

    /// Returns true when the favorites view is selected
    pub fn showing_favorites(&self) -> bool {
        self.selected_genre == Some(GenreFilter::Favorites)
    }
}

/// Thread-safe filter state manager
///
/// Every mutation publishes a snapshot to subscribers so presentation code
/// can refetch when the selection changes.
pub struct FilterStore {
    inner: RwLock<Filters>,
    change_tx: watch::Sender<Filters>,
    change_rx: watch::Receiver<Filters>,
}

impl FilterStore {
    /// Creates a new filter store with default selection
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Returns a receiver for selection change notifications
    pub fn subscribe(&self) -> watch::Receiver<Filters> {
        self.change_rx.clone()
    }

    /// Returns a copy of the current selection
    pub async fn get(&self) -> Filters {
        self.inner.read().await.clone()
    }

    /// Updates the search term
    ///
    /// A new search always starts from the first page.
    pub async fn set_search_term(&self, term: impl Into<String>) {
        let mut state = self.inner.write().await;
        state.search_term = term.into();
        state.current_page = 1;
        let snapshot = state.clone();
        drop(state);

        let _ = self.change_tx.send(snapshot);
    }

    /// Updates the selected genre
    ///
    /// Pass None to clear the genre filter. A new selection always starts
    /// from the first page.
    pub async fn set_selected_genre(&self, genre: Option<GenreFilter>) {
        let mut state = self.inner.write().await;
        state.selected_genre = genre;
        state.current_page = 1;
        let snapshot = state.clone();
        drop(state);

        let _ = self.change_tx.send(snapshot);
    }

    /// Updates the current page, leaving search and genre untouched
    pub async fn set_current_page(&self, page: u32) {
        let mut state = self.inner.write().await;
        state.current_page = page.max(1);
        let snapshot = state.clone();
        drop(state);

        let _ = self.change_tx.send(snapshot);
    }

    /// Resets search, genre, and page to their defaults
    pub async fn reset(&self) {
        let mut state = self.inner.write().await;
        *state = Filters::default();
        let snapshot = state.clone();
        drop(state);

        let _ = self.change_tx.send(snapshot);
    }
}

impl Default for FilterStore {
    fn default() -> Self {
        let (change_tx, change_rx) = watch::channel(Filters::default());
        Self {
            inner: RwLock::new(Filters::default()),
            change_tx,
            change_rx,
        }
    }
}
