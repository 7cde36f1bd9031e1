//! Free-zone catalogue with filtering, selection and side-by-side comparison.

mod catalog;
mod comparison;
mod domain;
pub mod export;
mod filter;
mod selection;

pub use catalog::{find, find_in, free_zones, FreeZoneLookupError};
pub use comparison::{
    compare, ComparisonColumn, ComparisonFeature, ComparisonRow, ComparisonTable, ComparisonValue,
};
pub use domain::{FreeZoneCosts, FreeZoneRecord};
pub use export::ExportError;
pub use filter::{
    filter_and_sort, BudgetTier, IndustryFilter, SortKey, ALL_INDUSTRIES, INDUSTRY_FILTERS,
};
pub use selection::{toggle_selection, ComparisonSelection, MAX_COMPARISON};
