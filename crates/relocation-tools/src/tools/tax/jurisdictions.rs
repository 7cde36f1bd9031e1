use super::domain::{CurrencyProfile, FlatSurcharge, TaxBracket, TaxJurisdiction};

const GBP: CurrencyProfile = CurrencyProfile {
    code: "GBP",
    symbol: "£",
    usd_rate: 1.27,
};

const USD: CurrencyProfile = CurrencyProfile {
    code: "USD",
    symbol: "$",
    usd_rate: 1.0,
};

const EUR: CurrencyProfile = CurrencyProfile {
    code: "EUR",
    symbol: "€",
    usd_rate: 1.08,
};

const AUD: CurrencyProfile = CurrencyProfile {
    code: "AUD",
    symbol: "A$",
    usd_rate: 0.65,
};

const CAD: CurrencyProfile = CurrencyProfile {
    code: "CAD",
    symbol: "C$",
    usd_rate: 0.74,
};

const INR: CurrencyProfile = CurrencyProfile {
    code: "INR",
    symbol: "₹",
    usd_rate: 0.012,
};

const fn band(min: f64, max: f64, rate: f64) -> TaxBracket {
    TaxBracket {
        min,
        max: Some(max),
        rate,
    }
}

const fn top(min: f64, rate: f64) -> TaxBracket {
    TaxBracket {
        min,
        max: None,
        rate,
    }
}

const fn levy(name: &'static str, rate: f64) -> FlatSurcharge {
    FlatSurcharge { name, rate }
}

static JURISDICTIONS: [TaxJurisdiction; 7] = [
    TaxJurisdiction {
        code: "uk",
        country: "United Kingdom",
        currency: GBP,
        brackets: &[
            band(0.0, 12_570.0, 0.0),
            band(12_571.0, 50_270.0, 20.0),
            band(50_271.0, 125_140.0, 40.0),
            top(125_141.0, 45.0),
        ],
        surcharges: &[levy("National Insurance", 8.0)],
    },
    TaxJurisdiction {
        code: "us",
        country: "United States",
        currency: USD,
        brackets: &[
            band(0.0, 11_600.0, 10.0),
            band(11_601.0, 47_150.0, 12.0),
            band(47_151.0, 100_525.0, 22.0),
            band(100_526.0, 191_950.0, 24.0),
            band(191_951.0, 243_725.0, 32.0),
            band(243_726.0, 609_350.0, 35.0),
            top(609_351.0, 37.0),
        ],
        surcharges: &[
            levy("State Tax (avg)", 5.0),
            levy("Social Security", 6.2),
            levy("Medicare", 1.45),
        ],
    },
    TaxJurisdiction {
        code: "germany",
        country: "Germany",
        currency: EUR,
        brackets: &[
            band(0.0, 11_604.0, 0.0),
            band(11_605.0, 66_760.0, 14.0),
            band(66_761.0, 277_825.0, 42.0),
            top(277_826.0, 45.0),
        ],
        surcharges: &[levy("Solidarity Surcharge", 5.5)],
    },
    TaxJurisdiction {
        code: "france",
        country: "France",
        currency: EUR,
        brackets: &[
            band(0.0, 11_294.0, 0.0),
            band(11_295.0, 28_797.0, 11.0),
            band(28_798.0, 82_341.0, 30.0),
            band(82_342.0, 177_106.0, 41.0),
            top(177_107.0, 45.0),
        ],
        surcharges: &[levy("Social Charges", 9.7)],
    },
    TaxJurisdiction {
        code: "australia",
        country: "Australia",
        currency: AUD,
        brackets: &[
            band(0.0, 18_200.0, 0.0),
            band(18_201.0, 45_000.0, 19.0),
            band(45_001.0, 120_000.0, 32.5),
            band(120_001.0, 180_000.0, 37.0),
            top(180_001.0, 45.0),
        ],
        surcharges: &[levy("Medicare Levy", 2.0)],
    },
    TaxJurisdiction {
        code: "canada",
        country: "Canada",
        currency: CAD,
        brackets: &[
            band(0.0, 55_867.0, 15.0),
            band(55_868.0, 111_733.0, 20.5),
            band(111_734.0, 173_205.0, 26.0),
            band(173_206.0, 246_752.0, 29.0),
            top(246_753.0, 33.0),
        ],
        surcharges: &[
            levy("Provincial Tax (avg)", 12.0),
            levy("CPP", 5.95),
        ],
    },
    TaxJurisdiction {
        code: "india",
        country: "India",
        currency: INR,
        brackets: &[
            band(0.0, 300_000.0, 0.0),
            band(300_001.0, 700_000.0, 5.0),
            band(700_001.0, 1_000_000.0, 10.0),
            band(1_000_001.0, 1_200_000.0, 15.0),
            band(1_200_001.0, 1_500_000.0, 20.0),
            top(1_500_001.0, 30.0),
        ],
        surcharges: &[levy("Surcharge (high income)", 10.0)],
    },
];

/// Every supported home jurisdiction, in menu order.
pub fn jurisdictions() -> &'static [TaxJurisdiction] {
    &JURISDICTIONS
}

/// Case-insensitive lookup by country code (`uk`, `us`, `germany`, ...).
pub fn jurisdiction(code: &str) -> Option<&'static TaxJurisdiction> {
    let code = code.trim();
    JURISDICTIONS
        .iter()
        .find(|jurisdiction| jurisdiction.code.eq_ignore_ascii_case(code))
}
