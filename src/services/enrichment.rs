use std::sync::Arc;

use crate::{
    cache::DetailsCache,
    cached,
    error::{AppError, AppResult},
    models::{DetailInfo, MovieId},
    services::providers::MovieDetailsProvider,
};

/// Details for one movie plus the warning to show if the lookup failed
#[derive(Debug, Clone, PartialEq)]
pub struct Enrichment {
    pub movie_id: MovieId,
    pub details: DetailInfo,
    pub warning: Option<String>,
}

impl Enrichment {
    fn failed(movie_id: MovieId) -> Self {
        Self {
            movie_id,
            details: DetailInfo::placeholder(),
            warning: Some(format!("Failed to fetch details for movie ID {}", movie_id)),
        }
    }
}

/// Augments recommended movies with poster, year and rating
///
/// Never fails: every lookup error is turned into placeholder details and a
/// warning, so one bad movie cannot abort the recommend cycle.
#[derive(Clone)]
pub struct DetailEnricher {
    provider: Arc<dyn MovieDetailsProvider>,
    cache: DetailsCache,
    image_base_url: String,
}

impl DetailEnricher {
    pub fn new(
        provider: Arc<dyn MovieDetailsProvider>,
        cache: DetailsCache,
        image_base_url: String,
    ) -> Self {
        Self {
            provider,
            cache,
            image_base_url,
        }
    }

    pub fn cache(&self) -> &DetailsCache {
        &self.cache
    }

    /// Fetches details for one movie, consulting the cache first
    pub async fn enrich(&self, movie_id: MovieId) -> Enrichment {
        match self.lookup(movie_id).await {
            Ok(details) => Enrichment {
                movie_id,
                details,
                warning: None,
            },
            Err(e) => {
                tracing::warn!(
                    movie_id = %movie_id,
                    provider = self.provider.name(),
                    error = %e,
                    "Failed to fetch movie details"
                );
                Enrichment::failed(movie_id)
            }
        }
    }

    async fn lookup(&self, movie_id: MovieId) -> AppResult<DetailInfo> {
        cached!(self.cache, movie_id, async {
            let movie = self.provider.fetch_movie(movie_id).await?;
            Ok::<_, AppError>(DetailInfo::from_tmdb(movie, &self.image_base_url))
        })
    }

    /// Enriches several movies concurrently, preserving input order
    pub async fn enrich_all(&self, movie_ids: &[MovieId]) -> Vec<Enrichment> {
        let tasks: Vec<_> = movie_ids
            .iter()
            .map(|&movie_id| {
                let enricher = self.clone();
                (
                    movie_id,
                    tokio::spawn(async move { enricher.enrich(movie_id).await }),
                )
            })
            .collect();

        let mut results = Vec::with_capacity(tasks.len());
        for (movie_id, task) in tasks {
            match task.await {
                Ok(enrichment) => results.push(enrichment),
                Err(e) => {
                    tracing::error!(
                        movie_id = %movie_id,
                        error = %e,
                        "Enrichment task join error"
                    );
                    results.push(Enrichment::failed(movie_id));
                }
            }
        }

        results
    }
}
