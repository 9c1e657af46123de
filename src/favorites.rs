//! Locally persisted favorites
//!
//! Favorites are full Movie records copied from the catalog, held
//! most-recently-added first and unique by id. Every mutation writes the
//! whole list to the blob store; persistence is fire-and-forget from the
//! caller's point of view, with a failed write rolling the change back.

use tokio::sync::RwLock;

use crate::api::Movie;
use crate::storage::BlobStore;

/// Fixed blob-store key holding the JSON-encoded favorites list
const FAVORITES_KEY: &str = "favorites.json";

/// Favorites list with local persistence
///
/// Generic over the storage backend for testability.
pub struct FavoritesStore<S: BlobStore> {
    store: S,
    movies: RwLock<Vec<Movie>>,
}

impl<S: BlobStore> FavoritesStore<S> {
    /// Creates an empty favorites store over `store`
    pub fn new(store: S) -> Self {
        Self {
            store,
            movies: RwLock::new(Vec::new()),
        }
    }

    /// Loads the persisted favorites list
    ///
    /// A missing blob leaves the list empty. A blob that does not parse as
    /// a movie list is discarded and removed, so one corrupt write cannot
    /// wedge the store permanently.
    pub async fn load(&self) {
        let data = match self.store.load(FAVORITES_KEY).await {
            Ok(Some(data)) => data,
            Ok(None) => return,
            Err(err) => {
                tracing::warn!("Failed to load favorites: {err:#}");
                return;
            }
        };

        match serde_json::from_slice::<Vec<Movie>>(&data) {
            Ok(movies) => *self.movies.write().await = movies,
            Err(err) => {
                tracing::warn!("Discarding corrupt favorites list: {err}");
                if let Err(err) = self.store.remove(FAVORITES_KEY).await {
                    tracing::warn!("Failed to remove corrupt favorites blob: {err:#}");
                }
                self.movies.write().await.clear();
            }
        }
    }

    /// Toggles a movie in the favorites list
    ///
    /// A movie not in the list is prepended; one already present is removed
    /// by id. The updated list is persisted as a whole; if that fails, the
    /// failure is logged and the in-memory change rolled back. Returns
    /// whether the movie is a favorite after the call.
    pub async fn toggle(&self, movie: &Movie) -> bool {
        let mut movies = self.movies.write().await;
        let previous = movies.clone();

        if let Some(index) = movies.iter().position(|m| m.id == movie.id) {
            movies.remove(index);
        } else {
            movies.insert(0, movie.clone());
        }

        if let Err(err) = self.persist(&movies).await {
            tracing::error!("Failed to persist favorites, reverting: {err:#}");
            *movies = previous;
        }

        movies.iter().any(|m| m.id == movie.id)
    }

    /// Returns true when the movie id is currently favorited
    pub async fn is_favorite(&self, id: &str) -> bool {
        self.movies.read().await.iter().any(|m| m.id == id)
    }

    /// Returns a copy of the favorites list, most recently added first
    pub async fn favorites(&self) -> Vec<Movie> {
        self.movies.read().await.clone()
    }

    /// Empties the list and removes the persisted blob
    pub async fn clear(&self) {
        let mut movies = self.movies.write().await;
        movies.clear();

        if let Err(err) = self.store.remove(FAVORITES_KEY).await {
            tracing::error!("Failed to remove persisted favorites: {err:#}");
        }
    }

    async fn persist(&self, movies: &[Movie]) -> anyhow::Result<()> {
        let data = serde_json::to_vec(movies)?;
        self.store.save(FAVORITES_KEY, &data).await
    }
}
