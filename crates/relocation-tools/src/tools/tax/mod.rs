//! Tax savings calculator comparing a home-country schedule with the zero-rate destination.

mod domain;
mod engine;
mod jurisdictions;

pub use domain::{
    BracketSlice, CurrencyProfile, FlatSurcharge, JurisdictionError, SurchargeCharge, TaxBracket,
    TaxEstimate, TaxJurisdiction, TaxResult,
};
pub use engine::{
    bracket_breakdown, compute_tax, normalize_income, parse_income, surcharge_charges,
    TaxCalculator, DEFAULT_INCOME, INCOME_PRESETS,
};
pub use jurisdictions::{jurisdiction, jurisdictions};
