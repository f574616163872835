//! Core data types for the population table
//!
//! - `PopulationRecord`: one region's population in one year
//! - `PopulationDataset`: the validated, immutable collection of records
//! - `DatasetStats`: summary used for startup logging and health output

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use super::error::{DatasetError, DatasetResult};

/// Population of a single region in a single year
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PopulationRecord {
    /// Region name (e.g. "California")
    pub region: String,
    /// Two-letter postal code used for map matching (e.g. "CA")
    pub region_code: String,
    /// Numeric region identifier (FIPS id) when the source provides one
    #[serde(default)]
    pub region_id: Option<u32>,
    /// Calendar year
    pub year: i32,
    /// Resident population
    pub population: u64,
}

impl PopulationRecord {
    /// Create a new record without a numeric id
    pub fn new(
        region: impl Into<String>,
        region_code: impl Into<String>,
        year: i32,
        population: u64,
    ) -> Self {
        Self {
            region: region.into(),
            region_code: region_code.into(),
            region_id: None,
            year,
            population,
        }
    }

    /// Builder method: set the numeric region id
    pub fn id(mut self, region_id: u32) -> Self {
        self.region_id = Some(region_id);
        self
    }
}

/// Immutable, validated population table
///
/// Holds at most one record per (region, year) and at least one record
/// overall. Record order is the order of the source.
#[derive(Debug, Clone)]
pub struct PopulationDataset {
    records: Vec<PopulationRecord>,
    /// Distinct years, ascending
    years: Vec<i32>,
}

impl PopulationDataset {
    /// Validate records and build a dataset
    pub fn new(records: Vec<PopulationRecord>) -> DatasetResult<Self> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert((record.region.as_str(), record.year)) {
                return Err(DatasetError::DuplicateRecord {
                    region: record.region.clone(),
                    year: record.year,
                });
            }
        }

        let years = records
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Ok(Self { records, years })
    }

    /// All records in source order
    pub fn records(&self) -> &[PopulationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct years in ascending order
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Check whether any record exists for the given year
    pub fn contains_year(&self, year: i32) -> bool {
        self.years.binary_search(&year).is_ok()
    }

    /// Earliest year in the dataset
    pub fn first_year(&self) -> i32 {
        self.years.first().copied().unwrap_or_default()
    }

    /// Latest year in the dataset
    pub fn last_year(&self) -> i32 {
        self.years.last().copied().unwrap_or_default()
    }

    /// Records for a single year, in source order
    pub fn for_year(&self, year: i32) -> impl Iterator<Item = &PopulationRecord> {
        self.records.iter().filter(move |r| r.year == year)
    }

    /// Distinct region names in ascending order
    pub fn regions(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.region.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Summary statistics
    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            records: self.records.len(),
            regions: self.regions().len(),
            first_year: self.first_year(),
            last_year: self.last_year(),
        }
    }
}

/// Dataset summary
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DatasetStats {
    pub records: usize,
    pub regions: usize,
    pub first_year: i32,
    pub last_year: i32,
}

impl std::fmt::Display for DatasetStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} records, {} regions, years {}-{}",
            self.records, self.regions, self.first_year, self.last_year
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<PopulationRecord> {
        vec![
            PopulationRecord::new("Texas", "TX", 2011, 25_600_000).id(48),
            PopulationRecord::new("Alaska", "AK", 2011, 722_000).id(2),
            PopulationRecord::new("Texas", "TX", 2010, 25_200_000).id(48),
            PopulationRecord::new("Alaska", "AK", 2010, 714_000).id(2),
        ]
    }

    #[test]
    fn test_dataset_creation() {
        let dataset = PopulationDataset::new(sample_records()).unwrap();

        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.years(), &[2010, 2011]);
        assert_eq!(dataset.first_year(), 2010);
        assert_eq!(dataset.last_year(), 2011);
        assert_eq!(dataset.regions(), vec!["Alaska", "Texas"]);
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let err = PopulationDataset::new(Vec::new()).unwrap_err();
        assert!(matches!(err, DatasetError::Empty));
    }

    #[test]
    fn test_duplicate_region_year_rejected() {
        let mut records = sample_records();
        records.push(PopulationRecord::new("Texas", "TX", 2010, 1));

        let err = PopulationDataset::new(records).unwrap_err();
        match err {
            DatasetError::DuplicateRecord { region, year } => {
                assert_eq!(region, "Texas");
                assert_eq!(year, 2010);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_for_year_keeps_source_order() {
        let dataset = PopulationDataset::new(sample_records()).unwrap();
        let regions: Vec<&str> = dataset.for_year(2011).map(|r| r.region.as_str()).collect();

        assert_eq!(regions, vec!["Texas", "Alaska"]);
        assert!(dataset.contains_year(2010));
        assert!(!dataset.contains_year(2012));
    }

    #[test]
    fn test_stats_display() {
        let dataset = PopulationDataset::new(sample_records()).unwrap();
        assert_eq!(
            dataset.stats().to_string(),
            "4 records, 2 regions, years 2010-2011"
        );
    }
}
