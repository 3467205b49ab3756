/// Movie details provider abstraction
///
/// The enricher talks to the details source only through this trait, so the
/// TMDB client can be swapped for a stub in tests.
use crate::{
    error::AppResult,
    models::{MovieId, TmdbMovie},
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trait for movie details providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieDetailsProvider: Send + Sync {
    /// Fetch raw details for one movie
    ///
    /// Any transport, status or decoding problem is returned as an error; the
    /// caller decides how to degrade.
    async fn fetch_movie(&self, movie_id: MovieId) -> AppResult<TmdbMovie>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
