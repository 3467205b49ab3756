/// TMDB API provider
///
/// Issues a single `GET {api_url}/movie/{id}?api_key=...` per lookup.
use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{MovieId, TmdbMovie},
    services::providers::MovieDetailsProvider,
};

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbProvider {
    /// Creates a TMDB client whose requests give up after `timeout`
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    fn movie_url(&self, movie_id: MovieId) -> String {
        format!("{}/movie/{}", self.api_url, movie_id)
    }
}

#[async_trait::async_trait]
impl MovieDetailsProvider for TmdbProvider {
    async fn fetch_movie(&self, movie_id: MovieId) -> AppResult<TmdbMovie> {
        let response = self
            .http_client
            .get(self.movie_url(movie_id))
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| AppError::HttpClient(e.without_url()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| AppError::HttpClient(e.without_url()))?;
        tracing::debug!(
            movie_id = %movie_id,
            response = %response_text,
            "Raw TMDB API response"
        );

        let movie: TmdbMovie = serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                movie_id = %movie_id,
                "Failed to deserialize TMDB response"
            );
            AppError::ExternalApi(format!("Failed to parse TMDB response: {}", e))
        })?;

        tracing::info!(movie_id = %movie_id, provider = "tmdb", "Movie details fetched");

        Ok(movie)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
