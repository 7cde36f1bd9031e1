use serde::Serialize;

use super::catalog::find_in;
use super::domain::FreeZoneRecord;
use super::selection::MAX_COMPARISON;
use crate::tools::display::format_aed;

/// Industries shown per column before truncating.
const INDUSTRY_PREVIEW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonFeature {
    PackageFrom,
    LicenseCost,
    VisaCost,
    VisaAllocation,
    ProcessingTime,
    Ownership,
    Industries,
    Rating,
}

impl ComparisonFeature {
    pub const ALL: [ComparisonFeature; 8] = [
        ComparisonFeature::PackageFrom,
        ComparisonFeature::LicenseCost,
        ComparisonFeature::VisaCost,
        ComparisonFeature::VisaAllocation,
        ComparisonFeature::ProcessingTime,
        ComparisonFeature::Ownership,
        ComparisonFeature::Industries,
        ComparisonFeature::Rating,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ComparisonFeature::PackageFrom => "Package From",
            ComparisonFeature::LicenseCost => "License Cost",
            ComparisonFeature::VisaCost => "Visa Cost",
            ComparisonFeature::VisaAllocation => "Visa Allocation",
            ComparisonFeature::ProcessingTime => "Processing Time",
            ComparisonFeature::Ownership => "Ownership",
            ComparisonFeature::Industries => "Industries",
            ComparisonFeature::Rating => "Rating",
        }
    }

    fn value_for(&self, record: &FreeZoneRecord) -> ComparisonValue {
        match self {
            ComparisonFeature::PackageFrom => ComparisonValue::Currency(record.costs.package_from),
            ComparisonFeature::LicenseCost => ComparisonValue::Currency(record.costs.license_from),
            ComparisonFeature::VisaCost => ComparisonValue::Currency(record.costs.visa_from),
            ComparisonFeature::VisaAllocation => {
                ComparisonValue::Text(record.visa_allocation.clone())
            }
            ComparisonFeature::ProcessingTime => {
                ComparisonValue::Text(record.processing_time.clone())
            }
            ComparisonFeature::Ownership => ComparisonValue::Text(record.ownership.clone()),
            ComparisonFeature::Industries => ComparisonValue::Tags(
                record
                    .industries
                    .iter()
                    .take(INDUSTRY_PREVIEW)
                    .cloned()
                    .collect(),
            ),
            ComparisonFeature::Rating => ComparisonValue::Rating(record.rating),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComparisonValue {
    /// AED amount.
    Currency(u32),
    Text(String),
    Tags(Vec<String>),
    Rating(f32),
}

impl ComparisonValue {
    pub fn display(&self) -> String {
        match self {
            ComparisonValue::Currency(amount) => format_aed(*amount),
            ComparisonValue::Text(text) => text.clone(),
            ComparisonValue::Tags(tags) => tags.join(", "),
            ComparisonValue::Rating(rating) => format!("{rating:.1}"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonColumn {
    pub id: String,
    pub short_name: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub feature: ComparisonFeature,
    pub label: &'static str,
    pub values: Vec<ComparisonValue>,
}

/// Side-by-side view of the selected zones. Every row has one value per column.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonTable {
    pub columns: Vec<ComparisonColumn>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn row(&self, feature: ComparisonFeature) -> Option<&ComparisonRow> {
        self.rows.iter().find(|row| row.feature == feature)
    }
}

/// Build the comparison for `selection`, keeping selection order. Unknown ids are skipped and
/// at most [`MAX_COMPARISON`] columns are produced.
pub fn compare<S: AsRef<str>>(records: &[FreeZoneRecord], selection: &[S]) -> ComparisonTable {
    let mut zones: Vec<&FreeZoneRecord> = Vec::with_capacity(MAX_COMPARISON);
    for id in selection {
        if zones.len() == MAX_COMPARISON {
            break;
        }
        match find_in(records, id.as_ref()) {
            Ok(zone) if !zones.iter().any(|chosen| chosen.id == zone.id) => zones.push(zone),
            Ok(_) => {}
            Err(error) => tracing::debug!(%error, "skipping comparison id"),
        }
    }

    let columns = zones
        .iter()
        .map(|zone| ComparisonColumn {
            id: zone.id.clone(),
            short_name: zone.short_name.clone(),
            location: zone.location.clone(),
        })
        .collect();

    let rows = ComparisonFeature::ALL
        .iter()
        .map(|feature| ComparisonRow {
            feature: *feature,
            label: feature.label(),
            values: zones.iter().map(|zone| feature.value_for(zone)).collect(),
        })
        .collect();

    ComparisonTable { columns, rows }
}
