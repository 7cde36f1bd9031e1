use serde::Serialize;

/// Marginal band of a progressive income tax schedule.
///
/// Bounds are inclusive. `max` is `None` for the open-ended top band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaxBracket {
    pub min: f64,
    pub max: Option<f64>,
    pub rate: f64,
}

impl TaxBracket {
    /// Number of income units the band can absorb, or `None` when unbounded.
    pub fn width(&self) -> Option<f64> {
        self.max.map(|max| max - self.min + 1.0)
    }
}

/// Levy charged on the full income regardless of bracket (social charges, state averages).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlatSurcharge {
    pub name: &'static str,
    pub rate: f64,
}

/// Static currency facts used when presenting an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurrencyProfile {
    pub code: &'static str,
    pub symbol: &'static str,
    /// Units of USD per one unit of the local currency.
    pub usd_rate: f64,
}

/// Home-country tax schedule compared against the zero-rate destination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaxJurisdiction {
    pub code: &'static str,
    pub country: &'static str,
    pub currency: CurrencyProfile,
    pub brackets: &'static [TaxBracket],
    pub surcharges: &'static [FlatSurcharge],
}

impl TaxJurisdiction {
    /// Confirm the brackets start at zero, are contiguous, and end with one open band.
    pub fn validate(&self) -> Result<(), JurisdictionError> {
        let Some(first) = self.brackets.first() else {
            return Err(JurisdictionError::NoBrackets { code: self.code });
        };

        if first.min != 0.0 {
            return Err(JurisdictionError::DoesNotStartAtZero {
                code: self.code,
                min: first.min,
            });
        }

        for (index, pair) in self.brackets.windows(2).enumerate() {
            let Some(max) = pair[0].max else {
                return Err(JurisdictionError::UnboundedBeforeEnd {
                    code: self.code,
                    index,
                });
            };
            if pair[1].min != max + 1.0 {
                return Err(JurisdictionError::Gap {
                    code: self.code,
                    index: index + 1,
                    expected_min: max + 1.0,
                    actual_min: pair[1].min,
                });
            }
        }

        if self.brackets.last().and_then(|bracket| bracket.max).is_some() {
            return Err(JurisdictionError::BoundedTop { code: self.code });
        }

        Ok(())
    }
}

/// Result of a single tax calculation. The destination jurisdiction levies no personal income tax.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaxResult {
    pub current_tax: f64,
    pub destination_tax: f64,
    pub effective_rate: f64,
    pub annual_savings: f64,
    pub five_year_savings: f64,
    pub ten_year_savings: f64,
}

impl TaxResult {
    pub fn zero() -> Self {
        Self {
            current_tax: 0.0,
            destination_tax: 0.0,
            effective_rate: 0.0,
            annual_savings: 0.0,
            five_year_savings: 0.0,
            ten_year_savings: 0.0,
        }
    }

    /// Savings accumulated over `years` with no compounding.
    pub fn savings_over(&self, years: u32) -> f64 {
        self.annual_savings * f64::from(years)
    }
}

/// Portion of the income that fell into one bracket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BracketSlice {
    pub min: f64,
    pub max: Option<f64>,
    pub rate: f64,
    pub taxable: f64,
    pub tax: f64,
}

/// Amount charged by a flat surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurchargeCharge {
    pub name: &'static str,
    pub rate: f64,
    pub amount: f64,
}

/// Display-ready estimate for a selected country and income.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxEstimate {
    pub country_code: String,
    pub country: &'static str,
    pub currency_symbol: &'static str,
    pub income: f64,
    pub income_usd: f64,
    pub result: TaxResult,
    pub brackets: Vec<BracketSlice>,
    pub surcharges: Vec<SurchargeCharge>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JurisdictionError {
    #[error("{code}: no brackets defined")]
    NoBrackets { code: &'static str },
    #[error("{code}: first bracket starts at {min}, expected 0")]
    DoesNotStartAtZero { code: &'static str, min: f64 },
    #[error("{code}: bracket {index} is unbounded but is not the last bracket")]
    UnboundedBeforeEnd { code: &'static str, index: usize },
    #[error("{code}: bracket {index} starts at {actual_min}, expected {expected_min}")]
    Gap {
        code: &'static str,
        index: usize,
        expected_min: f64,
        actual_min: f64,
    },
    #[error("{code}: top bracket must be unbounded")]
    BoundedTop { code: &'static str },
}
