//! CSV Loader
//!
//! Reads the reshaped census table (`states`, `states_code`, `id`, `year`,
//! `population`) into a [`PopulationDataset`]. Additional columns, such as
//! a leading unnamed index column, are ignored.

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::DatasetResult;
use super::types::{PopulationDataset, PopulationRecord};

/// One row of the source CSV
#[derive(Debug, Deserialize)]
struct CsvRow {
    states: String,
    states_code: String,
    #[serde(default)]
    id: Option<u32>,
    year: i32,
    population: u64,
}

impl From<CsvRow> for PopulationRecord {
    fn from(row: CsvRow) -> Self {
        Self {
            region: row.states,
            region_code: row.states_code,
            region_id: row.id,
            year: row.year,
            population: row.population,
        }
    }
}

/// Load the dataset from a CSV file
pub fn load_dataset(path: &Path) -> DatasetResult<PopulationDataset> {
    let file = File::open(path)?;
    let dataset = load_dataset_from_reader(file)?;

    tracing::info!(path = ?path, "Loaded population dataset: {}", dataset.stats());
    Ok(dataset)
}

/// Load the dataset from any CSV reader
pub fn load_dataset_from_reader<R: Read>(reader: R) -> DatasetResult<PopulationDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in reader.deserialize::<CsvRow>() {
        records.push(PopulationRecord::from(result?));
    }

    PopulationDataset::new(records)
}

/// Load the dataset from a CSV string (useful for testing)
pub fn load_dataset_str(csv_data: &str) -> DatasetResult<PopulationDataset> {
    load_dataset_from_reader(csv_data.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetError;
    use std::io::Write;

    #[test]
    fn test_load_reshaped_csv() {
        let csv_data = ",states,states_code,id,year,population
0,Alabama,AL,1,2010,4785437
1,Alaska,AK,2,2010,713910
52,Alabama,AL,1,2011,4799069
53,Alaska,AK,2,2011,722128";

        let dataset = load_dataset_str(csv_data).unwrap();

        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.years(), &[2010, 2011]);

        let first = &dataset.records()[0];
        assert_eq!(first.region, "Alabama");
        assert_eq!(first.region_code, "AL");
        assert_eq!(first.region_id, Some(1));
        assert_eq!(first.population, 4_785_437);
    }

    #[test]
    fn test_id_column_optional() {
        let csv_data = "states,states_code,year,population
Wyoming, WY ,2019,578759";

        let dataset = load_dataset_str(csv_data).unwrap();
        let record = &dataset.records()[0];

        assert_eq!(record.region_code, "WY");
        assert_eq!(record.region_id, None);
    }

    #[test]
    fn test_unparsable_population_reported() {
        let csv_data = "states,states_code,id,year,population
Alabama,AL,1,2010,4785437
Alaska,AK,2,2010,lots";

        match load_dataset_str(csv_data).unwrap_err() {
            DatasetError::Csv { line, .. } => assert_eq!(line, 3),
            other => panic!("expected CSV error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_population_rejected() {
        let csv_data = "states,states_code,id,year,population
Alabama,AL,1,2010,-5";

        let err = load_dataset_str(csv_data).unwrap_err();
        assert!(matches!(err, DatasetError::Csv { .. }));
    }

    #[test]
    fn test_header_only_is_empty() {
        let err = load_dataset_str("states,states_code,id,year,population\n").unwrap_err();
        assert!(matches!(err, DatasetError::Empty));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "states,states_code,id,year,population").unwrap();
        writeln!(file, "Ohio,OH,39,2018,11676341").unwrap();
        writeln!(file, "Ohio,OH,39,2019,11689100").unwrap();

        let dataset = load_dataset(file.path()).unwrap();
        assert_eq!(dataset.years(), &[2018, 2019]);
    }

    #[test]
    fn test_missing_file() {
        let err = load_dataset(Path::new("/nonexistent/population.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
