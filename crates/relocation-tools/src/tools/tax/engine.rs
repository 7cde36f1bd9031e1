use tracing::{debug, warn};

use super::domain::{BracketSlice, SurchargeCharge, TaxEstimate, TaxJurisdiction, TaxResult};
use super::jurisdictions::jurisdiction;

/// Quick-select incomes offered next to the income field.
pub const INCOME_PRESETS: [f64; 4] = [100_000.0, 250_000.0, 500_000.0, 1_000_000.0];

/// Income preloaded into the calculator.
pub const DEFAULT_INCOME: f64 = 250_000.0;

/// Destination jurisdiction levies no personal income tax.
const DESTINATION_TAX: f64 = 0.0;

/// Clamp out-of-domain incomes to zero.
pub fn normalize_income(income: f64) -> f64 {
    if income.is_finite() && income > 0.0 {
        income
    } else {
        0.0
    }
}

/// Read user-typed income such as `"250,000"`, `"1200.50 GBP"` or `"1.5e6"`.
///
/// Thousands separators are dropped and the leading decimal number, with an optional exponent,
/// is used. Anything that does not start with a number resolves to zero.
pub fn parse_income(raw: &str) -> f64 {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();

    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_point = false;
    for (index, ch) in cleaned.char_indices() {
        match ch {
            '0'..='9' => {
                seen_digit = true;
                end = index + 1;
            }
            '.' if !seen_point => {
                seen_point = true;
                end = index + 1;
            }
            '-' | '+' if index == 0 => end = index + 1,
            _ => break,
        }
    }

    if !seen_digit {
        return 0.0;
    }

    let mantissa = cleaned[..end].trim_end_matches('.');
    let exponent = exponent_prefix(&cleaned[end..]);
    let number = format!("{mantissa}{exponent}");
    normalize_income(number.parse::<f64>().unwrap_or(0.0))
}

/// `e`/`E`, an optional sign and at least one digit at the start of `rest`, or `""`.
fn exponent_prefix(rest: &str) -> &str {
    let bytes = rest.as_bytes();
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return "";
    }

    let mut index = 1;
    if matches!(bytes.get(index), Some(b'+' | b'-')) {
        index += 1;
    }
    let digits = bytes[index..]
        .iter()
        .take_while(|byte| byte.is_ascii_digit())
        .count();

    if digits == 0 {
        ""
    } else {
        &rest[..index + digits]
    }
}

/// Split `annual_income` across the progressive brackets.
///
/// The taxable amounts of the returned slices sum to the (normalized) income. Brackets past the
/// point where the income is exhausted are omitted.
pub fn bracket_breakdown(jurisdiction: &TaxJurisdiction, annual_income: f64) -> Vec<BracketSlice> {
    let mut remaining = normalize_income(annual_income);
    let mut slices = Vec::with_capacity(jurisdiction.brackets.len());

    for bracket in jurisdiction.brackets {
        if remaining <= 0.0 {
            break;
        }

        let taxable = match bracket.width() {
            Some(width) => remaining.min(width),
            None => remaining,
        };
        slices.push(BracketSlice {
            min: bracket.min,
            max: bracket.max,
            rate: bracket.rate,
            taxable,
            tax: taxable * (bracket.rate / 100.0),
        });
        remaining -= taxable;
    }

    slices
}

/// Flat levies, each applied to the full income rather than the bracketed remainder.
pub fn surcharge_charges(jurisdiction: &TaxJurisdiction, annual_income: f64) -> Vec<SurchargeCharge> {
    let income = normalize_income(annual_income);
    jurisdiction
        .surcharges
        .iter()
        .map(|surcharge| SurchargeCharge {
            name: surcharge.name,
            rate: surcharge.rate,
            amount: income * (surcharge.rate / 100.0),
        })
        .collect()
}

/// Home-country tax liability and the savings from relocating to a zero-tax destination.
pub fn compute_tax(jurisdiction: &TaxJurisdiction, annual_income: f64) -> TaxResult {
    let income = normalize_income(annual_income);
    let slices = bracket_breakdown(jurisdiction, income);
    let surcharges = surcharge_charges(jurisdiction, income);
    result_from_parts(income, &slices, &surcharges)
}

fn result_from_parts(
    income: f64,
    slices: &[BracketSlice],
    surcharges: &[SurchargeCharge],
) -> TaxResult {
    let mut current_tax = 0.0;
    for slice in slices {
        current_tax += slice.tax;
    }
    for surcharge in surcharges {
        current_tax += surcharge.amount;
    }

    let effective_rate = if income > 0.0 {
        current_tax / income * 100.0
    } else {
        0.0
    };

    let annual_savings = current_tax - DESTINATION_TAX;

    TaxResult {
        current_tax,
        destination_tax: DESTINATION_TAX,
        effective_rate,
        annual_savings,
        five_year_savings: annual_savings * 5.0,
        ten_year_savings: annual_savings * 10.0,
    }
}

/// Stateless facade that resolves a country code and assembles a display-ready estimate.
#[derive(Debug, Clone)]
pub struct TaxCalculator {
    default_country: String,
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new("uk")
    }
}

impl TaxCalculator {
    pub fn new(default_country: impl Into<String>) -> Self {
        Self {
            default_country: default_country.into(),
        }
    }

    pub fn default_country(&self) -> &str {
        &self.default_country
    }

    /// Estimate for `country`, or the configured default when none is given.
    ///
    /// Unknown codes produce an all-zero estimate rather than an error.
    pub fn estimate(&self, country: Option<&str>, annual_income: f64) -> TaxEstimate {
        let code = country
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .unwrap_or(self.default_country.as_str())
            .to_ascii_lowercase();
        let income = normalize_income(annual_income);

        let Some(jurisdiction) = jurisdiction(&code) else {
            warn!(country = %code, "unknown jurisdiction; returning zero estimate");
            return TaxEstimate {
                country_code: code,
                country: "",
                currency_symbol: "$",
                income,
                income_usd: 0.0,
                result: TaxResult::zero(),
                brackets: Vec::new(),
                surcharges: Vec::new(),
            };
        };

        let brackets = bracket_breakdown(jurisdiction, income);
        let surcharges = surcharge_charges(jurisdiction, income);
        let result = result_from_parts(income, &brackets, &surcharges);

        debug!(
            country = jurisdiction.code,
            income,
            current_tax = result.current_tax,
            effective_rate = result.effective_rate,
            "tax estimate computed"
        );

        TaxEstimate {
            country_code: jurisdiction.code.to_string(),
            country: jurisdiction.country,
            currency_symbol: jurisdiction.currency.symbol,
            income,
            income_usd: income * jurisdiction.currency.usd_rate,
            result,
            brackets,
            surcharges,
        }
    }
}
