use std::cmp::Ordering;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::CatalogRecord,
    store::MovieStore,
};

/// Number of similar movies returned per query
pub const RECOMMENDATION_COUNT: usize = 5;

/// Nearest-neighbour lookup over the precomputed similarity matrix
#[derive(Clone)]
pub struct Recommender {
    store: Arc<MovieStore>,
}

impl Recommender {
    pub fn new(store: Arc<MovieStore>) -> Self {
        Self { store }
    }

    /// Every catalog title in row order
    pub fn titles(&self) -> Vec<String> {
        self.store.catalog.titles().map(str::to_string).collect()
    }

    /// Returns the movies most similar to `title`, best first
    ///
    /// The title must match a catalog entry exactly. The query movie itself is
    /// never part of the result.
    pub fn recommend(&self, title: &str) -> AppResult<Vec<CatalogRecord>> {
        let query = self
            .store
            .catalog
            .find_by_title(title)
            .ok_or_else(|| {
                AppError::NotFound(format!("Movie '{}' not found in the dataset.", title))
            })?;

        let scores = self.store.similarity.row(query.row_index).ok_or_else(|| {
            AppError::Internal(format!(
                "no similarity row for catalog row {}",
                query.row_index
            ))
        })?;

        let recommendations: Vec<CatalogRecord> =
            rank_similar(scores, query.row_index, RECOMMENDATION_COUNT)
                .into_iter()
                .filter_map(|(row_index, _)| self.store.catalog.get(row_index).cloned())
                .collect();

        tracing::info!(
            title = %title,
            row_index = query.row_index,
            results = recommendations.len(),
            "Recommendations computed"
        );

        Ok(recommendations)
    }
}

/// Ranks rows by descending score, excluding `exclude`, and keeps the top `k`
///
/// The sort is stable, so equal scores keep row order. NaN scores rank last.
pub fn rank_similar(scores: &[f64], exclude: usize, k: usize) -> Vec<(usize, f64)> {
    let mut ranked: Vec<(usize, f64)> = scores
        .iter()
        .copied()
        .enumerate()
        .filter(|&(row_index, _)| row_index != exclude)
        .collect();

    ranked.sort_by(|a, b| compare_scores(b.1, a.1));
    ranked.truncate(k);
    ranked
}

fn compare_scores(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}
