use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{DetailInfo, MovieId};

/// Session-lifetime cache of movie details, keyed by TMDB ID
///
/// Unbounded with no expiry. Clones share the same underlying map, so one
/// cache can be handed to concurrent enrichment tasks.
#[derive(Clone, Default)]
pub struct DetailsCache {
    entries: Arc<RwLock<HashMap<MovieId, DetailInfo>>>,
}

impl DetailsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, movie_id: &MovieId) -> Option<DetailInfo> {
        self.entries.read().await.get(movie_id).cloned()
    }

    pub async fn insert(&self, movie_id: MovieId, details: DetailInfo) {
        self.entries.write().await.insert(movie_id, details);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
