//! Year-over-year population differences
//!
//! Pairs each region's population in the target year with the same
//! region's population in the previous year and ranks the regions by the
//! change.
//!
//! ```text
//! target year  ──sort by region──┐
//!                                ├── merge join on region ──► delta ──► sort (delta desc, region asc)
//! prior year   ──sort by region──┘   (missing prior = 0)
//! ```

use serde::Serialize;
use std::cmp::Ordering;

use super::error::{AnalysisError, AnalysisResult};
use crate::dataset::{PopulationDataset, PopulationRecord};

/// One region's population and its change from the previous year
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RankedDifference {
    pub region: String,
    pub region_code: String,
    pub region_id: Option<u32>,
    /// Population in the target year
    pub population: u64,
    /// Target-year population minus previous-year population
    pub population_delta: i64,
}

/// Rank every region of `target_year` by its change from `target_year - 1`.
///
/// Regions without a previous-year record are compared against zero, so
/// their delta equals their population. The result holds one entry per
/// region of the target year, ordered by delta descending and then by
/// region name ascending.
///
/// Fails with [`AnalysisError::InvalidYear`] when the dataset has no
/// records for `target_year`.
pub fn compute_ranked_differences(
    dataset: &PopulationDataset,
    target_year: i32,
) -> AnalysisResult<Vec<RankedDifference>> {
    if !dataset.contains_year(target_year) {
        return Err(AnalysisError::InvalidYear(target_year));
    }

    let mut current: Vec<&PopulationRecord> = dataset.for_year(target_year).collect();
    current.sort_by(|a, b| a.region.cmp(&b.region));

    let mut previous: Vec<&PopulationRecord> = match target_year.checked_sub(1) {
        Some(year) => dataset.for_year(year).collect(),
        None => Vec::new(),
    };
    previous.sort_by(|a, b| a.region.cmp(&b.region));

    let mut previous = previous.into_iter().peekable();
    let mut ranked = Vec::with_capacity(current.len());

    for record in current {
        // Skip prior-year regions that have no counterpart this year
        while previous.next_if(|p| p.region < record.region).is_some() {}

        let prior_population = previous
            .next_if(|p| p.region == record.region)
            .map(|p| p.population)
            .unwrap_or(0);

        ranked.push(RankedDifference {
            region: record.region.clone(),
            region_code: record.region_code.clone(),
            region_id: record.region_id,
            population: record.population,
            population_delta: population_delta(record.population, prior_population),
        });
    }

    ranked.sort_by(rank_order);
    Ok(ranked)
}

/// Signed change between two counts, saturating at the `i64` bounds
fn population_delta(current: u64, prior: u64) -> i64 {
    let delta = i128::from(current) - i128::from(prior);
    i64::try_from(delta).unwrap_or(if delta < 0 { i64::MIN } else { i64::MAX })
}

/// Delta descending, then region ascending
fn rank_order(a: &RankedDifference, b: &RankedDifference) -> Ordering {
    b.population_delta
        .cmp(&a.population_delta)
        .then_with(|| a.region.cmp(&b.region))
}
