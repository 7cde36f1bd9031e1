use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Indicative set-up costs in AED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeZoneCosts {
    pub license_from: u32,
    pub visa_from: u32,
    pub office_from: u32,
    pub package_from: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeZoneRecord {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub location: String,
    pub established: i32,
    pub description: String,
    pub industries: Vec<String>,
    pub highlights: Vec<String>,
    pub costs: FreeZoneCosts,
    pub visa_allocation: String,
    pub ownership: String,
    pub office_options: Vec<String>,
    pub processing_time: String,
    pub rating: f32,
    pub popular: bool,
}

impl FreeZoneRecord {
    pub fn serves(&self, industry: &str) -> bool {
        self.industries.iter().any(|candidate| candidate == industry)
    }

    /// Whole years since the zone was established, never negative.
    pub fn years_operating(&self, as_of: NaiveDate) -> u32 {
        u32::try_from(as_of.year() - self.established).unwrap_or(0)
    }
}
