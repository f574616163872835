//! Dashboard View-Models
//!
//! Presentation-ready data for each panel of the population dashboard.
//! Rendering (charts, maps, widgets) is left to whichever front-end
//! consumes these types; the API serves them as JSON and the CLI prints
//! them as text.
//!
//! - **theme**: selectable color schemes
//! - **panels**: population changes, choropleth, ranked table, heatmap, about
//! - **view**: selection resolution and the assembled page

pub mod panels;
pub mod theme;
pub mod view;

pub use panels::{
    about, choropleth, heatmap, population_changes, population_table, About, ChangesPanel,
    ChoroplethMap, ColorScale, GrowthMetric, Heatmap, HeatmapCell, MapEntry, PopulationChanges,
    PopulationTable, TableRow,
};
pub use theme::{ColorTheme, UnknownTheme};
pub use view::{default_year, year_options, DashboardView, Selection};
