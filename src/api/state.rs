use std::sync::Arc;

use crate::{
    cache::DetailsCache,
    services::{DetailEnricher, MovieDetailsProvider, Recommender},
    store::MovieStore,
};

/// Shared application state
///
/// Built once at startup. The movie data is read-only, so handlers share it
/// without locking; only the details cache is mutable.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
    pub enricher: DetailEnricher,
}

impl AppState {
    pub fn new(
        store: Arc<MovieStore>,
        provider: Arc<dyn MovieDetailsProvider>,
        image_base_url: String,
    ) -> Self {
        Self {
            recommender: Recommender::new(store),
            enricher: DetailEnricher::new(provider, DetailsCache::new(), image_base_url),
        }
    }
}
