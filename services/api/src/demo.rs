use crate::infra::{parse_answer, parse_date};
use chrono::{Local, NaiveDate};
use clap::Args;
use relocation_tools::config::AppConfig;
use relocation_tools::error::AppError;
use relocation_tools::tools::display::{format_aed, format_currency, format_percent, format_usd};
use relocation_tools::tools::eligibility::{
    evaluate, question, EligibilityAnswer, EligibilityQuestion, EligibilityResult,
    EligibilitySession, QuestionId,
};
use relocation_tools::tools::free_zones::{
    compare, export, filter_and_sort, find, free_zones, BudgetTier, ComparisonTable,
    FreeZoneRecord, IndustryFilter, SortKey, MAX_COMPARISON,
};
use relocation_tools::tools::tax::{
    jurisdictions, parse_income, TaxCalculator, TaxEstimate, DEFAULT_INCOME, INCOME_PRESETS,
};
use std::io::{self, BufRead, Write};

#[derive(Args, Debug, Default)]
pub(crate) struct TaxArgs {
    /// Home country code (uk, us, germany, france, australia, canada, india)
    #[arg(long)]
    pub(crate) country: Option<String>,
    /// Annual income in the home currency; separators such as "250,000" are accepted
    #[arg(long)]
    pub(crate) income: Option<String>,
    /// Also show the estimate for each preset income
    #[arg(long)]
    pub(crate) presets: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct EligibilityArgs {
    /// Answer as QUESTION=VALUE, e.g. investment=2m-5m. Repeat for each question.
    #[arg(long = "answer", value_parser = parse_answer)]
    pub(crate) answers: Vec<EligibilityAnswer>,
    /// Ask the questions one at a time on the terminal
    #[arg(long, conflicts_with = "answers")]
    pub(crate) interactive: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ListArgs {
    /// Industry filter, e.g. Finance. Defaults to all industries.
    #[arg(long)]
    pub(crate) industry: Option<String>,
    /// Budget tier: all, budget, mid or premium
    #[arg(long)]
    pub(crate) budget: Option<String>,
    /// Sort order: popular, price or rating
    #[arg(long)]
    pub(crate) sort: Option<String>,
    /// Write CSV to stdout instead of a listing
    #[arg(long)]
    pub(crate) csv: bool,
    /// Date used for "years operating" (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CompareArgs {
    /// Free zone ids, e.g. dmcc difc ifza
    #[arg(required = true, num_args = 1..)]
    pub(crate) ids: Vec<String>,
    /// Write CSV to stdout instead of a table
    #[arg(long)]
    pub(crate) csv: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Date used for "years operating" (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
}

pub(crate) fn run_tax(args: TaxArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let calculator = TaxCalculator::new(config.tools.default_country);
    let income = args
        .income
        .as_deref()
        .map(parse_income)
        .unwrap_or(DEFAULT_INCOME);

    let estimate = calculator.estimate(args.country.as_deref(), income);
    render_tax_estimate(&estimate);
    if args.presets {
        render_presets(&calculator, &estimate.country_code);
    }
    Ok(())
}

pub(crate) fn run_eligibility(args: EligibilityArgs) -> Result<(), AppError> {
    if args.interactive {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        match run_interactive(stdin.lock(), &mut stdout)? {
            Some(result) => render_eligibility(&result),
            None => println!("\nEligibility check cancelled."),
        }
        return Ok(());
    }

    let missing: Vec<_> = QuestionId::ALL
        .iter()
        .filter(|id| !args.answers.iter().any(|answer| answer.question == **id))
        .map(QuestionId::as_str)
        .collect();
    if !missing.is_empty() {
        eprintln!("note: unanswered questions: {}", missing.join(", "));
    }

    render_profile(&args.answers);
    render_eligibility(&evaluate(&args.answers));
    Ok(())
}

pub(crate) fn run_list(args: ListArgs) -> Result<(), AppError> {
    let industry = IndustryFilter::parse(args.industry.as_deref().unwrap_or_default());
    let budget = BudgetTier::parse(args.budget.as_deref().unwrap_or_default());
    let sort = SortKey::parse(args.sort.as_deref().unwrap_or_default());
    let zones = filter_and_sort(free_zones(), &industry, budget, sort);

    if args.csv {
        export::write_zones(io::stdout().lock(), &zones)?;
        return Ok(());
    }

    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    render_zone_list(&zones, as_of);
    Ok(())
}

pub(crate) fn run_compare(args: CompareArgs) -> Result<(), AppError> {
    for id in &args.ids {
        if let Err(err) = find(id) {
            eprintln!("note: {err}; skipping");
        }
    }
    if args.ids.len() > MAX_COMPARISON {
        eprintln!("note: only the first {MAX_COMPARISON} known free zones are compared");
    }

    let table = compare(free_zones(), &args.ids);
    if args.csv {
        export::write_comparison(io::stdout().lock(), &table)?;
    } else {
        render_comparison(&table);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());

    println!("Relocation tools demo");
    println!("\n== Tax savings ==");
    let calculator = TaxCalculator::default();
    let estimate = calculator.estimate(Some("uk"), DEFAULT_INCOME);
    render_tax_estimate(&estimate);
    render_presets(&calculator, &estimate.country_code);

    println!("\n== Golden Visa eligibility ==");
    let profile = [
        "purpose=investment",
        "investment=2m-5m",
        "profession=executive",
        "timeline=immediate",
        "family=family",
    ]
    .into_iter()
    .filter_map(|raw| parse_answer(raw).ok())
    .collect::<Vec<_>>();
    render_profile(&profile);
    render_eligibility(&evaluate(&profile));

    println!("\n== Free zones serving Finance, cheapest first ==");
    let zones = filter_and_sort(
        free_zones(),
        &IndustryFilter::parse("Finance"),
        BudgetTier::All,
        SortKey::Price,
    );
    render_zone_list(&zones, as_of);

    println!("\n== Comparison ==");
    let selection: Vec<_> = zones.iter().map(|zone| zone.id.as_str()).collect();
    render_comparison(&compare(free_zones(), &selection));

    Ok(())
}

/// Ask each question on `output`, reading choices from `input`.
///
/// A choice is an option number or value; `b` goes back and `q` (or end of input) cancels.
pub(crate) fn run_interactive<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
) -> io::Result<Option<EligibilityResult>> {
    let mut session = EligibilitySession::default();
    let mut line = String::new();

    while let Some(current) = session.current_question() {
        writeln!(
            output,
            "\n[{}/{}] {} ({:.0}%)",
            session.step() + 1,
            session.total_steps(),
            current.prompt,
            session.progress_percent()
        )?;
        for (index, option) in current.options.iter().enumerate() {
            writeln!(output, "  {}. {}", index + 1, option.label)?;
        }
        write!(
            output,
            "Choose 1-{} (b = back, q = quit): ",
            current.options.len()
        )?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let choice = line.trim();
        match choice {
            "b" | "back" => {
                session.back();
            }
            "q" | "quit" => return Ok(None),
            _ => match resolve_choice(current, choice) {
                Some(value) => {
                    session.answer(value);
                }
                None => writeln!(output, "Unrecognised choice '{choice}'.")?,
            },
        }
    }

    Ok(session.result().cloned())
}

fn resolve_choice(current: &EligibilityQuestion, choice: &str) -> Option<&'static str> {
    if let Ok(number) = choice.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| current.options.get(index))
            .map(|option| option.value);
    }
    current.option(choice).map(|option| option.value)
}

fn render_tax_estimate(estimate: &TaxEstimate) {
    if estimate.country.is_empty() {
        let known: Vec<_> = jurisdictions().iter().map(|item| item.code).collect();
        println!(
            "Unknown jurisdiction '{}'; showing a zero estimate. Known codes: {}",
            estimate.country_code,
            known.join(", ")
        );
        return;
    }

    let symbol = estimate.currency_symbol;
    let result = &estimate.result;
    println!("Tax savings estimate: {}", estimate.country);
    println!(
        "Annual income: {} (about {})",
        format_currency(estimate.income, symbol),
        format_usd(estimate.income_usd)
    );

    println!("Income tax bands:");
    for slice in &estimate.brackets {
        let upper = slice
            .max
            .map(|max| format_currency(max, symbol))
            .unwrap_or_else(|| "and above".to_string());
        println!(
            "  {:>4}%  {} - {}: {} on {}",
            slice.rate,
            format_currency(slice.min, symbol),
            upper,
            format_currency(slice.tax, symbol),
            format_currency(slice.taxable, symbol)
        );
    }
    for charge in &estimate.surcharges {
        println!(
            "  {} ({}% of income): {}",
            charge.name,
            charge.rate,
            format_currency(charge.amount, symbol)
        );
    }

    println!(
        "Current tax: {} (effective rate {})",
        format_currency(result.current_tax, symbol),
        format_percent(result.effective_rate)
    );
    println!(
        "Tax in Dubai: {}",
        format_currency(result.destination_tax, symbol)
    );
    println!(
        "Savings: {} per year | {} over 5 years | {} over 10 years",
        format_currency(result.annual_savings, symbol),
        format_currency(result.five_year_savings, symbol),
        format_currency(result.ten_year_savings, symbol)
    );
}

fn render_presets(calculator: &TaxCalculator, country: &str) {
    println!("Preset incomes:");
    for income in INCOME_PRESETS {
        let estimate = calculator.estimate(Some(country), income);
        let symbol = estimate.currency_symbol;
        println!(
            "  {:>12}  tax {:>12}  ({:>6})  10-year savings {:>14}",
            format_currency(income, symbol),
            format_currency(estimate.result.current_tax, symbol),
            format_percent(estimate.result.effective_rate),
            format_currency(estimate.result.ten_year_savings, symbol)
        );
    }
}

fn render_profile(answers: &[EligibilityAnswer]) {
    println!("Profile:");
    for answer in answers {
        let label = question(answer.question)
            .option(&answer.value)
            .map(|option| option.label)
            .unwrap_or(answer.value.as_str());
        println!("  - {}: {}", answer.question.as_str(), label);
    }
}

fn render_eligibility(result: &EligibilityResult) {
    if !result.eligible {
        println!("No residency pathways matched this profile.");
    } else {
        println!(
            "Eligible for {} pathway(s), {} recommended",
            result.pathways.len(),
            result.recommended().count()
        );
        for pathway in &result.pathways {
            let marker = if pathway.recommended {
                " [recommended]"
            } else {
                ""
            };
            println!(
                "\n* {} ({}){}",
                pathway.name, pathway.duration, marker
            );
            println!("  {}", pathway.description);
            println!("  Processing time: {}", pathway.processing_time);
            println!("  Requirements:");
            for requirement in &pathway.requirements {
                println!("    - {requirement}");
            }
            println!("  Benefits:");
            for benefit in &pathway.benefits {
                println!("    - {benefit}");
            }
        }
    }

    println!("\nNext steps:");
    for (index, step) in result.next_steps.iter().enumerate() {
        println!("  {}. {}", index + 1, step);
    }
}

fn render_zone_list(zones: &[&FreeZoneRecord], as_of: NaiveDate) {
    if zones.is_empty() {
        println!("No free zones match these filters.");
        return;
    }

    for zone in zones {
        let popular = if zone.popular { " | popular" } else { "" };
        println!("{:<6} {}", zone.short_name, zone.name);
        println!(
            "       {} | est. {} ({} years) | package from {} | rating {:.1}{}",
            zone.location,
            zone.established,
            zone.years_operating(as_of),
            format_aed(zone.costs.package_from),
            zone.rating,
            popular
        );
        println!("       {}", zone.industries.join(", "));
    }
}

fn render_comparison(table: &ComparisonTable) {
    if table.is_empty() {
        println!("Nothing to compare; pass known free zone ids.");
        return;
    }

    const LABEL_WIDTH: usize = 17;
    const COLUMN_WIDTH: usize = 30;

    let mut header = format!("{:<LABEL_WIDTH$}", "");
    for column in &table.columns {
        header.push_str(&format!("{:<COLUMN_WIDTH$}", column.short_name));
    }
    println!("{}", header.trim_end());

    for row in &table.rows {
        let mut line = format!("{:<LABEL_WIDTH$}", row.label);
        for value in &row.values {
            line.push_str(&format!("{:<COLUMN_WIDTH$}", value.display()));
        }
        println!("{}", line.trim_end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn interact(script: &str) -> (Option<EligibilityResult>, String) {
        let mut output = Vec::new();
        let result =
            run_interactive(Cursor::new(script.to_string()), &mut output).expect("io succeeds");
        (result, String::from_utf8(output).expect("utf8 output"))
    }

    #[test]
    fn interactive_session_accepts_numbers_values_and_back() {
        let (result, transcript) = interact("2\n4\n2\nb\n1\nimmediate\n3\n");

        let result = result.expect("session completes");
        assert!(result.eligible);
        assert_eq!(result.pathways[0].name, "10-Year Golden Visa (Property)");
        assert!(transcript.contains("[1/5] What is your primary reason"));
        assert!(transcript.contains("[5/5] Will you be relocating with family?"));
    }

    #[test]
    fn interactive_session_reprompts_on_bad_input() {
        let (result, transcript) = interact("9\nplease\n1\n1\n1\n1\n1\n");
        assert!(result.is_some());
        assert_eq!(transcript.matches("Unrecognised choice").count(), 2);
    }

    #[test]
    fn interactive_session_can_be_cancelled() {
        assert!(interact("1\nq\n").0.is_none());
        assert!(interact("1\n2\n").0.is_none());
    }

    #[test]
    fn choices_resolve_by_number_or_value() {
        let purpose = question(QuestionId::Purpose);
        assert_eq!(resolve_choice(purpose, "1"), Some("business"));
        assert_eq!(resolve_choice(purpose, "retirement"), Some("retirement"));
        assert_eq!(resolve_choice(purpose, "0"), None);
        assert_eq!(resolve_choice(purpose, "6"), None);
    }
}
