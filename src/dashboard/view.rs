//! Full dashboard view
//!
//! Resolves a user selection against the dataset and assembles every panel
//! of the page in one value.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::panels::{
    about, choropleth, heatmap, population_changes, population_table, About, ChangesPanel,
    ChoroplethMap, Heatmap, PopulationTable,
};
use super::theme::ColorTheme;
use crate::analysis::{AnalysisError, AnalysisResult};
use crate::config::DashboardConfig;
use crate::dataset::PopulationDataset;

/// Year and theme chosen in the sidebar
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Selection {
    pub year: i32,
    pub theme: ColorTheme,
}

impl Selection {
    /// Fill in missing choices from the configuration.
    ///
    /// The year falls back to the configured default when that year exists
    /// in the dataset, otherwise to the earliest year. The year is not
    /// validated here; [`DashboardView::build`] rejects unknown years.
    pub fn resolve(
        dataset: &PopulationDataset,
        config: &DashboardConfig,
        year: Option<i32>,
        theme: Option<ColorTheme>,
    ) -> Self {
        Self {
            year: year.unwrap_or_else(|| default_year(dataset, config)),
            theme: theme.unwrap_or(config.color_theme),
        }
    }
}

/// Default year for a fresh session
pub fn default_year(dataset: &PopulationDataset, config: &DashboardConfig) -> i32 {
    config
        .default_year
        .filter(|year| dataset.contains_year(*year))
        .unwrap_or_else(|| dataset.first_year())
}

/// Selectable years, newest first
pub fn year_options(dataset: &PopulationDataset) -> Vec<i32> {
    dataset.years().iter().rev().copied().collect()
}

/// Everything the page renders for one selection
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub years: Vec<i32>,
    pub themes: Vec<ColorTheme>,
    pub selection: Selection,
    pub changes: ChangesPanel,
    pub map: ChoroplethMap,
    pub table: PopulationTable,
    pub heatmap: Heatmap,
    pub about: About,
}

impl DashboardView {
    /// Build all panels for `selection`
    pub fn build(
        dataset: &PopulationDataset,
        selection: Selection,
        config: &DashboardConfig,
    ) -> AnalysisResult<Self> {
        if !dataset.contains_year(selection.year) {
            return Err(AnalysisError::InvalidYear(selection.year));
        }

        Ok(Self {
            title: config.title.clone(),
            generated_at: Utc::now(),
            years: year_options(dataset),
            themes: ColorTheme::all().to_vec(),
            selection,
            changes: population_changes(dataset, selection.year)?,
            map: choropleth(dataset, selection.year, selection.theme)?,
            table: population_table(dataset, selection.year)?,
            heatmap: heatmap(dataset, selection.theme),
            about: about(dataset),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::PopulationRecord;

    fn sample() -> PopulationDataset {
        PopulationDataset::new(vec![
            PopulationRecord::new("Utah", "UT", 2017, 3_101_833),
            PopulationRecord::new("Utah", "UT", 2018, 3_153_550),
            PopulationRecord::new("Utah", "UT", 2019, 3_205_958),
            PopulationRecord::new("Iowa", "IA", 2017, 3_143_637),
            PopulationRecord::new("Iowa", "IA", 2018, 3_148_618),
            PopulationRecord::new("Iowa", "IA", 2019, 3_155_070),
        ])
        .unwrap()
    }

    #[test]
    fn test_selection_defaults_to_earliest_year() {
        let config = DashboardConfig::default();
        let selection = Selection::resolve(&sample(), &config, None, None);

        assert_eq!(selection.year, 2017);
        assert_eq!(selection.theme, ColorTheme::Blues);
    }

    #[test]
    fn test_selection_uses_configured_year_when_present() {
        let dataset = sample();
        let config = DashboardConfig {
            default_year: Some(2019),
            color_theme: ColorTheme::Plasma,
            ..Default::default()
        };

        let selection = Selection::resolve(&dataset, &config, None, None);
        assert_eq!(selection.year, 2019);
        assert_eq!(selection.theme, ColorTheme::Plasma);

        let missing = DashboardConfig {
            default_year: Some(1990),
            ..Default::default()
        };
        assert_eq!(default_year(&dataset, &missing), 2017);
    }

    #[test]
    fn test_explicit_choice_wins() {
        let config = DashboardConfig::default();
        let selection =
            Selection::resolve(&sample(), &config, Some(2018), Some(ColorTheme::Greens));

        assert_eq!(selection.year, 2018);
        assert_eq!(selection.theme, ColorTheme::Greens);
    }

    #[test]
    fn test_build_dashboard() {
        let dataset = sample();
        let config = DashboardConfig::default();
        let selection = Selection {
            year: 2019,
            theme: ColorTheme::Reds,
        };

        let view = DashboardView::build(&dataset, selection, &config).unwrap();

        assert_eq!(view.title, "US Population Dashboard");
        assert_eq!(view.years, vec![2019, 2018, 2017]);
        assert_eq!(view.themes.len(), 5);

        let changes = view.changes.changes().unwrap();
        assert_eq!(changes.highest.region, "Utah");
        assert_eq!(changes.lowest.region, "Iowa");

        assert_eq!(view.map.entries.len(), 2);
        assert_eq!(view.table.rows[0].region, "Utah");
        assert_eq!(view.heatmap.cells.len(), 6);
        assert_eq!(view.heatmap.scale.theme, ColorTheme::Reds);
        assert_eq!(view.about.years, "2017-2019");
    }

    #[test]
    fn test_build_rejects_unknown_year() {
        let selection = Selection {
            year: 2020,
            theme: ColorTheme::Blues,
        };
        let err = DashboardView::build(&sample(), selection, &DashboardConfig::default())
            .unwrap_err();

        assert_eq!(err, AnalysisError::InvalidYear(2020));
    }
}
