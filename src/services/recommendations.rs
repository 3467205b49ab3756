use crate::{
    error::AppError,
    models::{MovieId, RecommendationCard, RecommendationResponse},
    services::{enrichment::DetailEnricher, recommender::Recommender},
};

/// Notice shown when a cycle ends with nothing to display
pub const NO_RECOMMENDATIONS_NOTICE: &str = "No recommendations to show.";

/// Runs one full recommend cycle: rank, enrich, assemble cards
///
/// Recoverable problems (unknown title, failed lookups) end up in `notices`
/// rather than as errors. Only an internal inconsistency in the loaded data
/// is returned as `Err`.
pub async fn recommend_with_details(
    recommender: &Recommender,
    enricher: &DetailEnricher,
    title: &str,
) -> Result<RecommendationResponse, AppError> {
    let mut notices = Vec::new();

    let records = match recommender.recommend(title) {
        Ok(records) => records,
        Err(AppError::NotFound(message)) => {
            tracing::warn!(title = %title, "Requested title is not in the catalog");
            notices.push(message);
            Vec::new()
        }
        Err(e) => return Err(e),
    };

    let movie_ids: Vec<MovieId> = records.iter().map(|r| r.external_id).collect();
    let enrichments = enricher.enrich_all(&movie_ids).await;

    let mut recommendations = Vec::with_capacity(records.len());
    for (record, enrichment) in records.iter().zip(enrichments) {
        if let Some(warning) = enrichment.warning {
            notices.push(warning);
        }
        recommendations.push(RecommendationCard::new(record, enrichment.details));
    }

    if recommendations.is_empty() {
        notices.push(NO_RECOMMENDATIONS_NOTICE.to_string());
    }

    Ok(RecommendationResponse {
        query: title.to_string(),
        recommendations,
        notices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cache::DetailsCache,
        models::{CatalogRow, Rating, TmdbMovie, ERROR_POSTER_URL},
        services::providers::MockMovieDetailsProvider,
        store::{Catalog, MovieStore, SimilarityMatrix},
    };
    use std::collections::BTreeMap;
    use std::sync::Arc;

    fn recommender() -> Recommender {
        let rows: BTreeMap<usize, CatalogRow> = ["Heat", "Ronin", "Collateral"]
            .iter()
            .enumerate()
            .map(|(i, title)| {
                (
                    i,
                    CatalogRow {
                        id: MovieId(i as u64 + 1),
                        original_title: Some(title.to_string()),
                        title: None,
                    },
                )
            })
            .collect();
        let similarity = SimilarityMatrix::new(vec![
            vec![1.0, 0.4, 0.8],
            vec![0.4, 1.0, 0.3],
            vec![0.8, 0.3, 1.0],
        ])
        .unwrap();
        let store = MovieStore::new(Catalog::from_rows(rows).unwrap(), similarity).unwrap();
        Recommender::new(Arc::new(store))
    }

    fn enricher(provider: MockMovieDetailsProvider) -> DetailEnricher {
        DetailEnricher::new(
            Arc::new(provider),
            DetailsCache::new(),
            "https://image.tmdb.org/t/p/w185".to_string(),
        )
    }

    #[tokio::test]
    async fn test_cycle_builds_cards_in_rank_order() {
        let mut provider = MockMovieDetailsProvider::new();
        provider.expect_fetch_movie().returning(|_| {
            Ok(TmdbMovie {
                poster_path: Some("/p.jpg".to_string()),
                release_date: Some("1995-12-15".to_string()),
                vote_average: Some(7.9),
            })
        });
        provider.expect_name().return_const("mock");

        let response = recommend_with_details(&recommender(), &enricher(provider), "Heat")
            .await
            .unwrap();

        let titles: Vec<&str> = response
            .recommendations
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Collateral", "Ronin"]);
        assert_eq!(response.recommendations[0].movie_id, MovieId(3));
        assert_eq!(response.recommendations[0].year, "1995");
        assert_eq!(response.recommendations[0].rating, Rating::Score(7.9));
        assert!(response.notices.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_title_yields_empty_result_and_notices() {
        let mut provider = MockMovieDetailsProvider::new();
        provider.expect_fetch_movie().never();
        provider.expect_name().return_const("mock");

        let response = recommend_with_details(&recommender(), &enricher(provider), "Thief")
            .await
            .unwrap();

        assert!(response.recommendations.is_empty());
        assert_eq!(
            response.notices,
            vec![
                "Movie 'Thief' not found in the dataset.".to_string(),
                NO_RECOMMENDATIONS_NOTICE.to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_enrichment_keeps_other_cards() {
        let mut provider = MockMovieDetailsProvider::new();
        provider.expect_fetch_movie().returning(|movie_id| {
            if movie_id == MovieId(2) {
                Err(AppError::ExternalApi("timeout".to_string()))
            } else {
                Ok(TmdbMovie::default())
            }
        });
        provider.expect_name().return_const("mock");

        let response = recommend_with_details(&recommender(), &enricher(provider), "Heat")
            .await
            .unwrap();

        assert_eq!(response.recommendations.len(), 2);
        assert_eq!(response.recommendations[1].title, "Ronin");
        assert_eq!(response.recommendations[1].poster_url, ERROR_POSTER_URL);
        assert_eq!(
            response.notices,
            vec!["Failed to fetch details for movie ID 2".to_string()]
        );
    }
}
