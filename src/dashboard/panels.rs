//! Dashboard panels
//!
//! View-models for each section of the page. Every function derives its
//! panel fresh from the dataset; nothing is cached between calls.
//!
//! - `population_changes`: highest/lowest growth metrics
//! - `choropleth`: per-region values and color scale for the state map
//! - `population_table`: regions ranked by population
//! - `heatmap`: population by year and region
//! - `about`: data provenance

use serde::Serialize;
use std::collections::BTreeMap;

use super::theme::ColorTheme;
use crate::analysis::{
    compute_ranked_differences, format_compact, format_population, AnalysisError,
    AnalysisResult, RankedDifference,
};
use crate::dataset::PopulationDataset;

/// Map location mode understood by choropleth renderers
pub const LOCATION_MODE: &str = "USA-states";

/// Geographic scope of the choropleth
pub const MAP_SCOPE: &str = "usa";

/// Attribution shown in the about panel
pub const DATA_SOURCE: &str = "U.S. Census Bureau";

// ============================================
// POPULATION CHANGES
// ============================================

/// A single growth metric card
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GrowthMetric {
    /// Card heading, e.g. "Highest Growth: Texas"
    pub label: String,
    pub region: String,
    pub region_code: String,
    pub population: u64,
    pub population_delta: i64,
    pub population_display: String,
    pub delta_display: String,
}

impl GrowthMetric {
    fn new(heading: &str, ranked: &RankedDifference) -> Self {
        Self {
            label: format!("{}: {}", heading, ranked.region),
            region: ranked.region.clone(),
            region_code: ranked.region_code.clone(),
            population: ranked.population,
            population_delta: ranked.population_delta,
            population_display: format_population(ranked.population),
            delta_display: format_compact(ranked.population_delta),
        }
    }
}

/// Largest and smallest change for a year
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PopulationChanges {
    pub year: i32,
    pub previous_year: i32,
    pub highest: GrowthMetric,
    pub lowest: GrowthMetric,
}

/// Population-changes panel content
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ChangesPanel {
    Available(PopulationChanges),
    /// The selected year has no previous year to compare against
    Unavailable { year: i32, message: String },
}

impl ChangesPanel {
    pub fn changes(&self) -> Option<&PopulationChanges> {
        match self {
            ChangesPanel::Available(changes) => Some(changes),
            ChangesPanel::Unavailable { .. } => None,
        }
    }
}

/// Build the highest/lowest growth metrics for `year`.
///
/// When the dataset has no records for `year - 1` the panel is
/// [`ChangesPanel::Unavailable`]; ranked differences for such a year would
/// compare against zero and are not meaningful as growth.
pub fn population_changes(dataset: &PopulationDataset, year: i32) -> AnalysisResult<ChangesPanel> {
    if !dataset.contains_year(year) {
        return Err(AnalysisError::InvalidYear(year));
    }

    let previous_year = match year.checked_sub(1) {
        Some(previous) if dataset.contains_year(previous) => previous,
        _ => {
            return Ok(ChangesPanel::Unavailable {
                year,
                message: format!("No data available for {}", year),
            })
        }
    };

    let ranked = compute_ranked_differences(dataset, year)?;
    match (ranked.first(), ranked.last()) {
        (Some(highest), Some(lowest)) => Ok(ChangesPanel::Available(PopulationChanges {
            year,
            previous_year,
            highest: GrowthMetric::new("Highest Growth", highest),
            lowest: GrowthMetric::new("Lowest Growth", lowest),
        })),
        _ => Err(AnalysisError::InvalidYear(year)),
    }
}

// ============================================
// CHOROPLETH
// ============================================

/// Continuous color scale domain
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ColorScale {
    pub theme: ColorTheme,
    pub min: u64,
    pub max: u64,
}

impl ColorScale {
    fn spanning(theme: ColorTheme, values: impl Iterator<Item = u64> + Clone) -> Self {
        Self {
            theme,
            min: values.clone().min().unwrap_or(0),
            max: values.max().unwrap_or(0),
        }
    }
}

/// One state on the map
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MapEntry {
    pub region: String,
    /// Location key matched against the map's state codes
    pub region_code: String,
    pub population: u64,
}

/// Data for the state-level choropleth
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChoroplethMap {
    pub year: i32,
    pub location_mode: &'static str,
    pub scope: &'static str,
    pub entries: Vec<MapEntry>,
    pub scale: ColorScale,
}

/// Build choropleth data for `year`, entries ordered by region code
pub fn choropleth(
    dataset: &PopulationDataset,
    year: i32,
    theme: ColorTheme,
) -> AnalysisResult<ChoroplethMap> {
    if !dataset.contains_year(year) {
        return Err(AnalysisError::InvalidYear(year));
    }

    let mut entries: Vec<MapEntry> = dataset
        .for_year(year)
        .map(|r| MapEntry {
            region: r.region.clone(),
            region_code: r.region_code.clone(),
            population: r.population,
        })
        .collect();
    entries.sort_by(|a, b| a.region_code.cmp(&b.region_code));

    let scale = ColorScale::spanning(theme, entries.iter().map(|e| e.population));

    Ok(ChoroplethMap {
        year,
        location_mode: LOCATION_MODE,
        scope: MAP_SCOPE,
        entries,
        scale,
    })
}

// ============================================
// RANKED TABLE
// ============================================

/// One row of the ranked population table
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TableRow {
    /// 1-based position
    pub rank: usize,
    pub region: String,
    pub population: u64,
    pub population_display: String,
}

/// Regions of one year ranked by population
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PopulationTable {
    pub year: i32,
    pub rows: Vec<TableRow>,
}

/// Rank the regions of `year` by population, largest first (ties by name)
pub fn population_table(dataset: &PopulationDataset, year: i32) -> AnalysisResult<PopulationTable> {
    if !dataset.contains_year(year) {
        return Err(AnalysisError::InvalidYear(year));
    }

    let mut records: Vec<_> = dataset.for_year(year).collect();
    records.sort_by(|a, b| {
        b.population
            .cmp(&a.population)
            .then_with(|| a.region.cmp(&b.region))
    });

    let rows = records
        .into_iter()
        .enumerate()
        .map(|(i, r)| TableRow {
            rank: i + 1,
            region: r.region.clone(),
            population: r.population,
            population_display: format_population(r.population),
        })
        .collect();

    Ok(PopulationTable { year, rows })
}

// ============================================
// HEATMAP
// ============================================

/// One (year, region) cell
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HeatmapCell {
    pub year: i32,
    pub region: String,
    /// Maximum population recorded for the cell
    pub population: u64,
}

/// Population over time for every region
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Heatmap {
    /// Row axis, ascending
    pub years: Vec<i32>,
    /// Column axis, ascending
    pub regions: Vec<String>,
    /// Cells ordered by year, then region
    pub cells: Vec<HeatmapCell>,
    pub scale: ColorScale,
}

/// Build the year × region heatmap over the whole dataset
pub fn heatmap(dataset: &PopulationDataset, theme: ColorTheme) -> Heatmap {
    let mut grid: BTreeMap<(i32, &str), u64> = BTreeMap::new();
    for record in dataset.records() {
        let cell = grid
            .entry((record.year, record.region.as_str()))
            .or_insert(record.population);
        *cell = (*cell).max(record.population);
    }

    let cells: Vec<HeatmapCell> = grid
        .into_iter()
        .map(|((year, region), population)| HeatmapCell {
            year,
            region: region.to_string(),
            population,
        })
        .collect();

    let scale = ColorScale::spanning(theme, cells.iter().map(|c| c.population));

    Heatmap {
        years: dataset.years().to_vec(),
        regions: dataset.regions().into_iter().map(str::to_string).collect(),
        cells,
        scale,
    }
}

// ============================================
// ABOUT
// ============================================

/// Data provenance panel
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct About {
    pub source: &'static str,
    /// Year span, e.g. "2010-2019"
    pub years: String,
    pub notes: Vec<&'static str>,
}

pub fn about(dataset: &PopulationDataset) -> About {
    About {
        source: DATA_SOURCE,
        years: format!("{}-{}", dataset.first_year(), dataset.last_year()),
        notes: vec!["Population changes show year-over-year differences"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::PopulationRecord;

    fn sample() -> PopulationDataset {
        PopulationDataset::new(vec![
            PopulationRecord::new("Texas", "TX", 2010, 25_145_561),
            PopulationRecord::new("Vermont", "VT", 2010, 625_741),
            PopulationRecord::new("Ohio", "OH", 2010, 11_536_504),
            PopulationRecord::new("Texas", "TX", 2011, 25_657_477),
            PopulationRecord::new("Vermont", "VT", 2011, 626_687),
            PopulationRecord::new("Ohio", "OH", 2011, 11_533_957),
        ])
        .unwrap()
    }

    #[test]
    fn test_changes_highest_and_lowest() {
        let panel = population_changes(&sample(), 2011).unwrap();
        let changes = panel.changes().unwrap();

        assert_eq!(changes.previous_year, 2010);
        assert_eq!(changes.highest.label, "Highest Growth: Texas");
        assert_eq!(changes.highest.population_display, "25.7 M");
        assert_eq!(changes.highest.delta_display, "511 K");
        assert_eq!(changes.lowest.label, "Lowest Growth: Ohio");
        assert_eq!(changes.lowest.population_delta, -2_547);
        assert_eq!(changes.lowest.delta_display, "-2 K");
    }

    #[test]
    fn test_changes_unavailable_for_first_year() {
        let panel = population_changes(&sample(), 2010).unwrap();

        assert_eq!(
            panel,
            ChangesPanel::Unavailable {
                year: 2010,
                message: "No data available for 2010".to_string(),
            }
        );
        assert!(panel.changes().is_none());
    }

    #[test]
    fn test_changes_invalid_year() {
        assert_eq!(
            population_changes(&sample(), 2030),
            Err(AnalysisError::InvalidYear(2030))
        );
    }

    #[test]
    fn test_changes_panel_serialization() {
        let panel = population_changes(&sample(), 2010).unwrap();
        let json = serde_json::to_value(&panel).unwrap();

        assert_eq!(json["status"], "unavailable");
        assert_eq!(json["message"], "No data available for 2010");
    }

    #[test]
    fn test_choropleth() {
        let map = choropleth(&sample(), 2011, ColorTheme::Viridis).unwrap();
        let codes: Vec<&str> = map.entries.iter().map(|e| e.region_code.as_str()).collect();

        assert_eq!(codes, vec!["OH", "TX", "VT"]);
        assert_eq!(map.location_mode, "USA-states");
        assert_eq!(map.scale.theme, ColorTheme::Viridis);
        assert_eq!(map.scale.min, 626_687);
        assert_eq!(map.scale.max, 25_657_477);
    }

    #[test]
    fn test_population_table_ranked() {
        let table = population_table(&sample(), 2010).unwrap();
        let regions: Vec<(usize, &str)> = table
            .rows
            .iter()
            .map(|r| (r.rank, r.region.as_str()))
            .collect();

        assert_eq!(regions, vec![(1, "Texas"), (2, "Ohio"), (3, "Vermont")]);
        assert_eq!(table.rows[2].population_display, "625 K");
        assert!(population_table(&sample(), 1999).is_err());
    }

    #[test]
    fn test_heatmap_axes_and_cells() {
        let heatmap = heatmap(&sample(), ColorTheme::Reds);

        assert_eq!(heatmap.years, vec![2010, 2011]);
        assert_eq!(heatmap.regions, vec!["Ohio", "Texas", "Vermont"]);
        assert_eq!(heatmap.cells.len(), 6);
        assert_eq!(heatmap.cells[0].year, 2010);
        assert_eq!(heatmap.cells[0].region, "Ohio");
        assert_eq!(heatmap.scale.min, 625_741);
        assert_eq!(heatmap.scale.max, 25_657_477);
    }

    #[test]
    fn test_about() {
        let about = about(&sample());
        assert_eq!(about.source, "U.S. Census Bureau");
        assert_eq!(about.years, "2010-2011");
    }
}
