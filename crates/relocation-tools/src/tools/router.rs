use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::eligibility::{
    questions, EligibilityAnswer, EligibilityEngine, EligibilityQuestion, EligibilityResult,
};
use super::free_zones::{
    compare, filter_and_sort, find, free_zones, BudgetTier, ComparisonSelection, ComparisonTable,
    FreeZoneRecord, IndustryFilter, SortKey, INDUSTRY_FILTERS,
};
use super::tax::{jurisdictions, parse_income, TaxCalculator, TaxEstimate, TaxJurisdiction, DEFAULT_INCOME};
use crate::error::AppError;

/// Runtime knobs for the tool endpoints.
#[derive(Debug, Clone)]
pub struct ToolsSettings {
    /// Pause before returning an eligibility result. Zero disables it.
    pub evaluation_delay: Duration,
    pub default_country: String,
}

impl Default for ToolsSettings {
    fn default() -> Self {
        Self {
            evaluation_delay: Duration::ZERO,
            default_country: "uk".to_string(),
        }
    }
}

#[derive(Debug)]
struct ToolsState {
    calculator: TaxCalculator,
    eligibility: EligibilityEngine,
    evaluation_delay: Duration,
}

/// Router exposing the tax, eligibility and free-zone tools under `/api/v1`.
pub fn tools_router(settings: ToolsSettings) -> Router {
    let state = Arc::new(ToolsState {
        calculator: TaxCalculator::new(settings.default_country),
        eligibility: EligibilityEngine::default(),
        evaluation_delay: settings.evaluation_delay,
    });

    Router::new()
        .route("/api/v1/tax/jurisdictions", get(jurisdictions_handler))
        .route("/api/v1/tax/estimate", post(estimate_handler))
        .route("/api/v1/eligibility/questions", get(questions_handler))
        .route("/api/v1/eligibility/evaluate", post(evaluate_handler))
        .route("/api/v1/free-zones", get(free_zones_handler))
        .route("/api/v1/free-zones/industries", get(industries_handler))
        .route("/api/v1/free-zones/selection", post(selection_handler))
        .route("/api/v1/free-zones/compare", post(compare_handler))
        .route("/api/v1/free-zones/:zone_id", get(free_zone_handler))
        .with_state(state)
}

/// Income may arrive as a number or as user-typed text such as `"250,000"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum IncomeInput {
    Amount(f64),
    Text(String),
}

impl IncomeInput {
    fn amount(&self) -> f64 {
        match self {
            IncomeInput::Amount(amount) => *amount,
            IncomeInput::Text(text) => parse_income(text),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct EstimateRequest {
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    income: Option<IncomeInput>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EvaluateRequest {
    #[serde(default)]
    answers: Vec<EligibilityAnswer>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct FreeZoneQuery {
    industry: Option<String>,
    budget: Option<String>,
    sort: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SelectionRequest {
    #[serde(default)]
    selected: ComparisonSelection,
    id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct SelectionResponse {
    selected: ComparisonSelection,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CompareRequest {
    #[serde(default)]
    selected: Vec<String>,
}

async fn jurisdictions_handler() -> Json<&'static [TaxJurisdiction]> {
    Json(jurisdictions())
}

async fn estimate_handler(
    State(state): State<Arc<ToolsState>>,
    Json(request): Json<EstimateRequest>,
) -> Json<TaxEstimate> {
    let income = request
        .income
        .as_ref()
        .map(IncomeInput::amount)
        .unwrap_or(DEFAULT_INCOME);
    Json(state.calculator.estimate(request.country.as_deref(), income))
}

async fn questions_handler() -> Json<&'static [EligibilityQuestion]> {
    Json(questions())
}

async fn evaluate_handler(
    State(state): State<Arc<ToolsState>>,
    Json(request): Json<EvaluateRequest>,
) -> Json<EligibilityResult> {
    if !state.evaluation_delay.is_zero() {
        tokio::time::sleep(state.evaluation_delay).await;
    }

    let result = state.eligibility.evaluate(&request.answers);
    info!(
        eligible = result.eligible,
        pathways = result.pathways.len(),
        "eligibility evaluated"
    );
    Json(result)
}

async fn free_zones_handler(Query(query): Query<FreeZoneQuery>) -> Json<Vec<&'static FreeZoneRecord>> {
    let industry = IndustryFilter::parse(query.industry.as_deref().unwrap_or_default());
    let budget = BudgetTier::parse(query.budget.as_deref().unwrap_or_default());
    let sort = SortKey::parse(query.sort.as_deref().unwrap_or_default());
    Json(filter_and_sort(free_zones(), &industry, budget, sort))
}

async fn industries_handler() -> Json<[&'static str; 9]> {
    Json(INDUSTRY_FILTERS)
}

async fn free_zone_handler(
    Path(zone_id): Path<String>,
) -> Result<Json<&'static FreeZoneRecord>, AppError> {
    Ok(Json(find(&zone_id)?))
}

async fn selection_handler(Json(request): Json<SelectionRequest>) -> Json<SelectionResponse> {
    let SelectionRequest { mut selected, id } = request;
    selected.toggle(&id);
    Json(SelectionResponse { selected })
}

async fn compare_handler(Json(request): Json<CompareRequest>) -> Json<ComparisonTable> {
    Json(compare(free_zones(), &request.selected))
}
