use relocation_tools::tools::tax::{
    bracket_breakdown, compute_tax, jurisdiction, jurisdictions, parse_income, TaxCalculator,
    INCOME_PRESETS,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn uk_high_earner_pays_brackets_plus_national_insurance() {
    let uk = jurisdiction("uk").expect("uk schedule");
    let result = compute_tax(uk, 250_000.0);

    let brackets = 12_571.0 * 0.0 + 37_700.0 * 0.20 + 74_870.0 * 0.40 + 124_859.0 * 0.45;
    let national_insurance = 250_000.0 * 0.08;
    assert_close(result.current_tax, brackets + national_insurance);
    assert_close(result.destination_tax, 0.0);
    assert_close(result.annual_savings, result.current_tax);
    assert_eq!(result.ten_year_savings, result.current_tax * 10.0);
}

#[test]
fn every_schedule_covers_income_exactly() {
    for schedule in jurisdictions() {
        for income in [0.0, 1.0, 12_570.0, 99_999.5, 250_000.0, 3_000_000.0] {
            let taxed: f64 = bracket_breakdown(schedule, income)
                .iter()
                .map(|slice| slice.taxable)
                .sum();
            assert!(
                (taxed - income).abs() < 1e-6,
                "{} taxed {taxed} of {income}",
                schedule.code
            );
        }
    }
}

#[test]
fn tax_never_decreases_with_income() {
    for schedule in jurisdictions() {
        let mut previous = 0.0;
        for step in 0..=400 {
            let income = f64::from(step) * 2_500.0;
            let tax = compute_tax(schedule, income).current_tax;
            assert!(tax >= previous, "{} dropped at {income}", schedule.code);
            previous = tax;
        }
    }
}

#[test]
fn savings_scale_exactly_for_presets() {
    let calculator = TaxCalculator::default();
    for schedule in jurisdictions() {
        for income in INCOME_PRESETS {
            let estimate = calculator.estimate(Some(schedule.code), income);
            let result = estimate.result;
            assert_eq!(result.five_year_savings, result.annual_savings * 5.0);
            assert_eq!(result.ten_year_savings, result.annual_savings * 10.0);
        }
    }
}

#[test]
fn typed_income_is_coerced_not_rejected() {
    let calculator = TaxCalculator::default();
    let estimate = calculator.estimate(Some("Germany"), parse_income("not a number"));
    assert_eq!(estimate.income, 0.0);
    assert_eq!(estimate.result.current_tax, 0.0);
    assert_eq!(estimate.result.effective_rate, 0.0);

    let negative = calculator.estimate(Some("france"), -5_000.0);
    assert_eq!(negative.result.current_tax, 0.0);
}
