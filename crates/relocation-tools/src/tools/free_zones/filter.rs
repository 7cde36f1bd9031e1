use serde::{Deserialize, Serialize};

use super::domain::FreeZoneRecord;

pub const ALL_INDUSTRIES: &str = "All Industries";

/// The industry menu offered to users. The first entry is the "no filter" sentinel.
pub const INDUSTRY_FILTERS: [&str; 9] = [
    ALL_INDUSTRIES,
    "Trading",
    "Tech",
    "Finance",
    "Consulting",
    "Media",
    "Logistics",
    "E-commerce",
    "Manufacturing",
];

const BUDGET_CEILING: u32 = 15_000;
const PREMIUM_FLOOR: u32 = 30_000;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IndustryFilter {
    #[default]
    All,
    Industry(String),
}

impl IndustryFilter {
    /// Empty input, `all` and the menu sentinel all mean no filtering. Anything else is
    /// matched exactly against a zone's industries.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty()
            || value.eq_ignore_ascii_case("all")
            || value.eq_ignore_ascii_case(ALL_INDUSTRIES)
        {
            IndustryFilter::All
        } else {
            IndustryFilter::Industry(value.to_string())
        }
    }

    pub fn admits(&self, record: &FreeZoneRecord) -> bool {
        match self {
            IndustryFilter::All => true,
            IndustryFilter::Industry(industry) => record.serves(industry),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    #[default]
    All,
    Budget,
    Mid,
    Premium,
}

impl BudgetTier {
    /// Tier a package price falls into. Never returns `All`.
    pub fn classify(package_from: u32) -> Self {
        if package_from < BUDGET_CEILING {
            BudgetTier::Budget
        } else if package_from < PREMIUM_FLOOR {
            BudgetTier::Mid
        } else {
            BudgetTier::Premium
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "budget" => BudgetTier::Budget,
            "mid" => BudgetTier::Mid,
            "premium" => BudgetTier::Premium,
            _ => BudgetTier::All,
        }
    }

    pub fn admits(&self, record: &FreeZoneRecord) -> bool {
        *self == BudgetTier::All || Self::classify(record.costs.package_from) == *self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Popular,
    Price,
    Rating,
}

impl SortKey {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "price" => SortKey::Price,
            "rating" => SortKey::Rating,
            _ => SortKey::Popular,
        }
    }
}

/// Filter by industry and budget tier, then order by `sort`. Sorting is stable so ties keep
/// catalogue order.
pub fn filter_and_sort<'a>(
    records: &'a [FreeZoneRecord],
    industry: &IndustryFilter,
    budget: BudgetTier,
    sort: SortKey,
) -> Vec<&'a FreeZoneRecord> {
    let mut zones: Vec<_> = records
        .iter()
        .filter(|record| industry.admits(record) && budget.admits(record))
        .collect();

    match sort {
        SortKey::Price => zones.sort_by_key(|record| record.costs.package_from),
        SortKey::Rating => zones.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Popular => zones.sort_by_key(|record| !record.popular),
    }

    zones
}
