use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use relocation_tools::tools::eligibility::{EligibilityAnswer, QuestionId};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Parse `question=value`, e.g. `investment=2m-5m`.
pub(crate) fn parse_answer(raw: &str) -> Result<EligibilityAnswer, String> {
    let (question, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION=VALUE, got '{raw}'"))?;

    let question = QuestionId::parse(question).ok_or_else(|| {
        let known: Vec<_> = QuestionId::ALL.iter().map(QuestionId::as_str).collect();
        format!(
            "unknown question '{}' (expected one of {})",
            question.trim(),
            known.join(", ")
        )
    })?;

    let value = value.trim();
    if value.is_empty() {
        return Err(format!("missing answer for '{}'", question.as_str()));
    }

    Ok(EligibilityAnswer::new(question, value))
}
