use serde::{Deserialize, Serialize};

/// Questions asked by the eligibility checker, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    Purpose,
    Investment,
    Profession,
    Timeline,
    Family,
}

impl QuestionId {
    pub const ALL: [QuestionId; 5] = [
        QuestionId::Purpose,
        QuestionId::Investment,
        QuestionId::Profession,
        QuestionId::Timeline,
        QuestionId::Family,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionId::Purpose => "purpose",
            QuestionId::Investment => "investment",
            QuestionId::Profession => "profession",
            QuestionId::Timeline => "timeline",
            QuestionId::Family => "family",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(value))
    }
}

/// Selectable answer for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EligibilityQuestion {
    pub id: QuestionId,
    pub prompt: &'static str,
    pub options: &'static [AnswerOption],
}

impl EligibilityQuestion {
    pub fn option(&self, value: &str) -> Option<&'static AnswerOption> {
        self.options.iter().find(|option| option.value == value)
    }
}

/// One recorded answer. A session's ordered answers form the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityAnswer {
    pub question: QuestionId,
    pub value: String,
}

impl EligibilityAnswer {
    pub fn new(question: QuestionId, value: impl Into<String>) -> Self {
        Self {
            question,
            value: value.into(),
        }
    }
}

/// Residency option produced for a matching profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityPathway {
    pub name: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub requirements: Vec<&'static str>,
    pub benefits: Vec<&'static str>,
    pub processing_time: &'static str,
    pub recommended: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityResult {
    pub eligible: bool,
    pub pathways: Vec<EligibilityPathway>,
    pub next_steps: Vec<&'static str>,
}

impl EligibilityResult {
    pub fn recommended(&self) -> impl Iterator<Item = &EligibilityPathway> {
        self.pathways.iter().filter(|pathway| pathway.recommended)
    }
}
