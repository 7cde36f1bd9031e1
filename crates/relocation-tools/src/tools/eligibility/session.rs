use serde::Serialize;

use super::domain::{EligibilityAnswer, EligibilityQuestion, EligibilityResult};
use super::engine::EligibilityEngine;
use super::questions::questions;

/// Where an interactive session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    Collecting { step: usize },
    Complete,
}

/// Collects answers one question at a time and evaluates once the last one is given.
///
/// Invariant: while collecting, `answers.len() == step`.
#[derive(Debug, Clone)]
pub struct EligibilitySession {
    engine: EligibilityEngine,
    questions: &'static [EligibilityQuestion],
    step: usize,
    answers: Vec<EligibilityAnswer>,
    result: Option<EligibilityResult>,
}

impl Default for EligibilitySession {
    fn default() -> Self {
        Self::new(EligibilityEngine::default())
    }
}

impl EligibilitySession {
    pub fn new(engine: EligibilityEngine) -> Self {
        Self {
            engine,
            questions: questions(),
            step: 0,
            answers: Vec::new(),
            result: None,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.result.is_some() {
            SessionState::Complete
        } else {
            SessionState::Collecting { step: self.step }
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total_steps(&self) -> usize {
        self.questions.len()
    }

    /// The question awaiting an answer, or `None` once the result is available.
    pub fn current_question(&self) -> Option<&'static EligibilityQuestion> {
        if self.result.is_some() {
            return None;
        }
        self.questions.get(self.step)
    }

    pub fn answers(&self) -> &[EligibilityAnswer] {
        &self.answers
    }

    pub fn result(&self) -> Option<&EligibilityResult> {
        self.result.as_ref()
    }

    /// Percentage shown on the progress bar for the current step.
    pub fn progress_percent(&self) -> f64 {
        if self.questions.is_empty() {
            return 100.0;
        }
        (self.step + 1) as f64 / self.questions.len() as f64 * 100.0
    }

    /// Record `value` for the current question. Answering the last question evaluates the
    /// profile. Ignored once the result is available.
    pub fn answer(&mut self, value: impl Into<String>) -> SessionState {
        let Some(question) = self.current_question() else {
            return self.state();
        };

        self.answers.push(EligibilityAnswer::new(question.id, value));

        if self.step + 1 < self.questions.len() {
            self.step += 1;
        } else {
            self.result = Some(self.engine.evaluate(&self.answers));
        }

        self.state()
    }

    /// Drop the most recent answer. From a finished session this reopens the last question.
    pub fn back(&mut self) -> SessionState {
        if self.result.take().is_some() {
            self.answers.pop();
            return self.state();
        }

        if self.step > 0 {
            self.answers.pop();
            self.step -= 1;
        }

        self.state()
    }

    pub fn restart(&mut self) {
        self.step = 0;
        self.answers.clear();
        self.result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::eligibility::QuestionId;

    fn complete(session: &mut EligibilitySession, values: [&str; 5]) {
        for value in values {
            session.answer(value);
        }
    }

    #[test]
    fn walks_questions_in_order() {
        let mut session = EligibilitySession::default();
        assert_eq!(session.state(), SessionState::Collecting { step: 0 });
        assert_eq!(
            session.current_question().map(|question| question.id),
            Some(QuestionId::Purpose)
        );
        assert_eq!(session.progress_percent(), 20.0);

        session.answer("investment");
        assert_eq!(session.state(), SessionState::Collecting { step: 1 });
        assert_eq!(
            session.current_question().map(|question| question.id),
            Some(QuestionId::Investment)
        );
        assert_eq!(session.answers().len(), session.step());
    }

    #[test]
    fn last_answer_produces_result() {
        let mut session = EligibilitySession::default();
        complete(
            &mut session,
            ["investment", "2m-5m", "executive", "immediate", "family"],
        );

        assert_eq!(session.state(), SessionState::Complete);
        assert!(session.current_question().is_none());
        let result = session.result().expect("result available");
        assert!(result.eligible);
        assert_eq!(result.pathways[0].name, "10-Year Golden Visa (Property)");
    }

    #[test]
    fn answers_after_completion_are_ignored() {
        let mut session = EligibilitySession::default();
        complete(
            &mut session,
            ["lifestyle", "under500k", "other", "exploring", "solo"],
        );
        session.answer("business");
        assert_eq!(session.answers().len(), 5);
        assert_eq!(session.state(), SessionState::Complete);
    }

    #[test]
    fn back_pops_last_answer() {
        let mut session = EligibilitySession::default();
        session.back();
        assert_eq!(session.state(), SessionState::Collecting { step: 0 });

        session.answer("business");
        session.answer("1m-2m");
        assert_eq!(session.back(), SessionState::Collecting { step: 1 });
        assert_eq!(session.answers().len(), 1);
        assert_eq!(session.answers()[0].value, "business");
    }

    #[test]
    fn back_from_result_reopens_final_question() {
        let mut session = EligibilitySession::default();
        complete(
            &mut session,
            ["business", "1m-2m", "entrepreneur", "soon", "spouse"],
        );

        assert_eq!(session.back(), SessionState::Collecting { step: 4 });
        assert!(session.result().is_none());
        assert_eq!(session.answers().len(), 4);
        assert_eq!(
            session.current_question().map(|question| question.id),
            Some(QuestionId::Family)
        );

        session.answer("family");
        assert_eq!(session.state(), SessionState::Complete);
    }

    #[test]
    fn restart_clears_everything() {
        let mut session = EligibilitySession::default();
        complete(
            &mut session,
            ["business", "1m-2m", "entrepreneur", "soon", "spouse"],
        );
        session.restart();
        assert_eq!(session.state(), SessionState::Collecting { step: 0 });
        assert!(session.answers().is_empty());
        assert!(session.result().is_none());
    }
}
