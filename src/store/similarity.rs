use crate::error::{AppError, AppResult};

/// Square matrix of precomputed pairwise similarity scores
///
/// Higher means more similar. Symmetry is not checked.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    rows: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    pub fn new(rows: Vec<Vec<f64>>) -> AppResult<Self> {
        let dimension = rows.len();
        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != dimension)
        {
            return Err(AppError::InvalidArtifact(format!(
                "similarity matrix is not square: row {} has {} entries, expected {}",
                index,
                row.len(),
                dimension
            )));
        }

        Ok(Self { rows })
    }

    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    /// Similarity vector of one catalog row
    pub fn row(&self, row_index: usize) -> Option<&[f64]> {
        self.rows.get(row_index).map(Vec::as_slice)
    }
}
