//! Loading of the precomputed catalog and similarity artifacts
//!
//! Both files are read once at startup and held read-only for the lifetime of
//! the process. Any problem with either file is fatal.
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{
    error::{AppError, AppResult},
    models::CatalogRow,
};

pub mod catalog;
pub mod similarity;

pub use catalog::Catalog;
pub use similarity::SimilarityMatrix;

/// The loaded catalog paired with its similarity matrix
#[derive(Debug)]
pub struct MovieStore {
    pub catalog: Catalog,
    pub similarity: SimilarityMatrix,
}

impl MovieStore {
    /// Pairs a catalog with its matrix, checking that their sizes agree
    pub fn new(catalog: Catalog, similarity: SimilarityMatrix) -> AppResult<Self> {
        if catalog.len() != similarity.dimension() {
            return Err(AppError::InvalidArtifact(format!(
                "catalog has {} movies but similarity matrix has dimension {}",
                catalog.len(),
                similarity.dimension()
            )));
        }

        Ok(Self {
            catalog,
            similarity,
        })
    }

    /// Loads both artifacts from disk
    pub fn load(
        catalog_path: impl AsRef<Path>,
        similarity_path: impl AsRef<Path>,
    ) -> AppResult<Self> {
        let catalog_path = catalog_path.as_ref();
        let similarity_path = similarity_path.as_ref();

        let rows: BTreeMap<usize, CatalogRow> = read_json(catalog_path)?;
        let catalog = Catalog::from_rows(rows)?;

        let matrix: Vec<Vec<f64>> = read_json(similarity_path)?;
        let similarity = SimilarityMatrix::new(matrix)?;

        let store = Self::new(catalog, similarity)?;

        if store.catalog.duplicate_titles() > 0 {
            tracing::warn!(
                duplicates = store.catalog.duplicate_titles(),
                "Catalog contains duplicate titles; lookups use the first matching row"
            );
        }

        tracing::info!(
            movies = store.catalog.len(),
            catalog = %catalog_path.display(),
            similarity = %similarity_path.display(),
            "Loaded movie data"
        );

        Ok(store)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let file = File::open(path).map_err(|e| {
        AppError::InvalidArtifact(format!("cannot open {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| {
        AppError::InvalidArtifact(format!("cannot parse {}: {}", path.display(), e))
    })
}
