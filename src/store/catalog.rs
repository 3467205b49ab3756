use std::collections::{BTreeMap, HashMap};

use crate::{
    error::{AppError, AppResult},
    models::{CatalogRecord, CatalogRow},
};

/// Immutable table of known movies, indexed by similarity-matrix row
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<CatalogRecord>,
    /// Title → lowest row index carrying that title
    title_index: HashMap<String, usize>,
    duplicate_titles: usize,
}

impl Catalog {
    /// Builds the catalog from rows keyed by row index
    ///
    /// The keys must form the contiguous range `0..n`, since they double as
    /// positions in the similarity matrix.
    pub fn from_rows(rows: BTreeMap<usize, CatalogRow>) -> AppResult<Self> {
        let mut records = Vec::with_capacity(rows.len());

        for (expected, (row_index, row)) in rows.into_iter().enumerate() {
            if row_index != expected {
                return Err(AppError::InvalidArtifact(format!(
                    "catalog rows are not contiguous: expected row {}, found row {}",
                    expected, row_index
                )));
            }

            let record = CatalogRecord::from_row(row_index, row).ok_or_else(|| {
                AppError::InvalidArtifact(format!("catalog row {} has no title", row_index))
            })?;
            records.push(record);
        }

        Ok(Self::from_records(records))
    }

    fn from_records(records: Vec<CatalogRecord>) -> Self {
        let mut title_index = HashMap::with_capacity(records.len());
        let mut duplicate_titles = 0;

        for record in &records {
            if title_index.contains_key(&record.title) {
                duplicate_titles += 1;
            } else {
                title_index.insert(record.title.clone(), record.row_index);
            }
        }

        Self {
            records,
            title_index,
            duplicate_titles,
        }
    }

    /// Exact-match title lookup; duplicate titles resolve to the first row
    pub fn find_by_title(&self, title: &str) -> Option<&CatalogRecord> {
        self.title_index
            .get(title)
            .and_then(|&row_index| self.records.get(row_index))
    }

    pub fn get(&self, row_index: usize) -> Option<&CatalogRecord> {
        self.records.get(row_index)
    }

    /// All titles in row order
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.title.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of rows whose title was already taken by an earlier row
    pub fn duplicate_titles(&self) -> usize {
        self.duplicate_titles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MovieId;

    fn row(id: u64, title: &str) -> CatalogRow {
        CatalogRow {
            id: MovieId(id),
            original_title: Some(title.to_string()),
            title: None,
        }
    }

    #[test]
    fn test_from_rows() {
        let rows = BTreeMap::from([(0, row(10, "Alien")), (1, row(20, "Aliens"))]);
        let catalog = Catalog::from_rows(rows).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().external_id, MovieId(20));
        assert_eq!(catalog.titles().collect::<Vec<_>>(), vec!["Alien", "Aliens"]);
    }

    #[test]
    fn test_from_rows_rejects_gap() {
        let rows = BTreeMap::from([(0, row(10, "Alien")), (2, row(20, "Aliens"))]);
        let err = Catalog::from_rows(rows).unwrap_err();
        assert!(matches!(err, AppError::InvalidArtifact(_)));
    }

    #[test]
    fn test_from_rows_rejects_untitled_row() {
        let mut untitled = row(10, "x");
        untitled.original_title = None;
        let rows = BTreeMap::from([(0, untitled)]);
        assert!(Catalog::from_rows(rows).is_err());
    }

    #[test]
    fn test_find_by_title_is_exact() {
        let rows = BTreeMap::from([(0, row(10, "Alien"))]);
        let catalog = Catalog::from_rows(rows).unwrap();

        assert!(catalog.find_by_title("Alien").is_some());
        assert!(catalog.find_by_title("alien").is_none());
        assert!(catalog.find_by_title("Alien ").is_none());
    }

    #[test]
    fn test_duplicate_title_resolves_to_first_row() {
        let rows = BTreeMap::from([
            (0, row(10, "Heat")),
            (1, row(20, "Solaris")),
            (2, row(30, "Solaris")),
        ]);
        let catalog = Catalog::from_rows(rows).unwrap();

        let found = catalog.find_by_title("Solaris").unwrap();
        assert_eq!(found.row_index, 1);
        assert_eq!(found.external_id, MovieId(20));
        assert_eq!(catalog.duplicate_titles(), 1);
    }
}
