//! Golden Visa eligibility checker.
//!
//! A fixed questionnaire feeds an ordered list of declarative pathway rules. Rules are
//! independent, so a profile can qualify for zero, one, or many pathways.

mod domain;
mod engine;
mod questions;
mod rules;
mod session;

pub use domain::{
    AnswerOption, EligibilityAnswer, EligibilityPathway, EligibilityQuestion, EligibilityResult,
    QuestionId,
};
pub use engine::{evaluate, EligibilityEngine};
pub use questions::{question, questions};
pub use rules::{
    pathway_rules, AnswerCondition, PathwayRule, PathwayTemplate, ProfileAnswers, Recommendation,
};
pub use session::{EligibilitySession, SessionState};
