use serde::{Deserialize, Serialize, Serializer};
use std::fmt::Display;

/// Text shown wherever TMDB has no value for a field
pub const NOT_AVAILABLE: &str = "N/A";

/// Poster used when TMDB knows the movie but has no poster for it
pub const NO_POSTER_URL: &str = "https://via.placeholder.com/185x278?text=No+Poster";

/// Poster used when the details lookup itself failed
pub const ERROR_POSTER_URL: &str = "https://via.placeholder.com/185x278?text=Error";

/// TMDB movie identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Catalog Types
// ============================================================================

/// One row of the serialized catalog, as stored on disk
///
/// `original_title` is the user-facing key; `title` is only consulted when a
/// row has no original title.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRow {
    pub id: MovieId,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// A movie in the loaded catalog
///
/// `row_index` is the movie's row (and column) in the similarity matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRecord {
    pub row_index: usize,
    pub external_id: MovieId,
    pub title: String,
}

impl CatalogRecord {
    /// Returns `None` for a row that carries no title at all
    pub fn from_row(row_index: usize, row: CatalogRow) -> Option<Self> {
        let title = row.original_title.or(row.title)?;
        Some(Self {
            row_index,
            external_id: row.id,
            title,
        })
    }
}

// ============================================================================
// Details Types
// ============================================================================

/// Average vote, or "N/A" when TMDB has none
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rating {
    Score(f64),
    NotAvailable,
}

impl Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rating::Score(score) => write!(f, "{}", score),
            Rating::NotAvailable => write!(f, "{}", NOT_AVAILABLE),
        }
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Rating::Score(score) => serializer.serialize_f64(*score),
            Rating::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

/// Display metadata for a single recommended movie
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DetailInfo {
    pub poster_url: String,
    pub year: String,
    pub rating: Rating,
}

impl DetailInfo {
    /// Fallback returned when the details lookup fails
    pub fn placeholder() -> Self {
        Self {
            poster_url: ERROR_POSTER_URL.to_string(),
            year: NOT_AVAILABLE.to_string(),
            rating: Rating::NotAvailable,
        }
    }

    /// Builds display metadata from a TMDB response
    pub fn from_tmdb(movie: TmdbMovie, image_base_url: &str) -> Self {
        let poster_url = match movie.poster_path.as_deref() {
            Some(path) if !path.is_empty() => format!("{}{}", image_base_url, path),
            _ => NO_POSTER_URL.to_string(),
        };

        Self {
            poster_url,
            year: release_year(movie.release_date.as_deref()),
            rating: movie
                .vote_average
                .map(Rating::Score)
                .unwrap_or(Rating::NotAvailable),
        }
    }
}

/// First four characters of a release date, or "N/A" when there is none
pub fn release_year(release_date: Option<&str>) -> String {
    match release_date {
        Some(date) if !date.is_empty() => date.chars().take(4).collect(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// API response from GET /movie/{id}
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbMovie {
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

// ============================================================================
// Recommendation Types
// ============================================================================

/// A recommended movie with its display metadata
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationCard {
    pub movie_id: MovieId,
    pub title: String,
    pub poster_url: String,
    pub year: String,
    pub rating: Rating,
}

impl RecommendationCard {
    pub fn new(record: &CatalogRecord, details: DetailInfo) -> Self {
        Self {
            movie_id: record.external_id,
            title: record.title.clone(),
            poster_url: details.poster_url,
            year: details.year,
            rating: details.rating,
        }
    }
}

/// Result of one recommend cycle
///
/// `notices` carries the user-visible messages for every recoverable failure
/// that happened along the way.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub query: String,
    pub recommendations: Vec<RecommendationCard>,
    pub notices: Vec<String>,
}
