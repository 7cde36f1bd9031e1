use super::domain::{AnswerOption, EligibilityQuestion, QuestionId};

const fn option(value: &'static str, label: &'static str) -> AnswerOption {
    AnswerOption { value, label }
}

static QUESTIONS: [EligibilityQuestion; 5] = [
    EligibilityQuestion {
        id: QuestionId::Purpose,
        prompt: "What is your primary reason for considering Dubai?",
        options: &[
            option("business", "Start or expand a business"),
            option("investment", "Investment opportunities"),
            option("employment", "Career / Employment"),
            option("lifestyle", "Lifestyle & Tax benefits"),
            option("retirement", "Retirement"),
        ],
    },
    EligibilityQuestion {
        id: QuestionId::Investment,
        prompt: "What is your estimated investment capacity?",
        options: &[
            option("under500k", "Under $500,000"),
            option("500k-1m", "$500,000 - $1 Million"),
            option("1m-2m", "$1 Million - $2 Million"),
            option("2m-5m", "$2 Million - $5 Million"),
            option("over5m", "Over $5 Million"),
        ],
    },
    EligibilityQuestion {
        id: QuestionId::Profession,
        prompt: "What best describes your professional background?",
        options: &[
            option("executive", "C-Suite / Executive"),
            option("entrepreneur", "Business Owner / Entrepreneur"),
            option("specialist", "Specialist / Expert"),
            option("creative", "Creative / Artist"),
            option("scientist", "Scientist / Researcher"),
            option("other", "Other Professional"),
        ],
    },
    EligibilityQuestion {
        id: QuestionId::Timeline,
        prompt: "When are you planning to relocate?",
        options: &[
            option("immediate", "Within 3 months"),
            option("soon", "3-6 months"),
            option("planning", "6-12 months"),
            option("exploring", "Just exploring options"),
        ],
    },
    EligibilityQuestion {
        id: QuestionId::Family,
        prompt: "Will you be relocating with family?",
        options: &[
            option("solo", "Just myself"),
            option("spouse", "With spouse/partner"),
            option("family", "With spouse and children"),
            option("extended", "Extended family members"),
        ],
    },
];

/// The fixed question sequence.
pub fn questions() -> &'static [EligibilityQuestion] {
    &QUESTIONS
}

pub fn question(id: QuestionId) -> &'static EligibilityQuestion {
    // QUESTIONS is declared in QuestionId discriminant order.
    &QUESTIONS[id as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questions_follow_declared_order() {
        let ids: Vec<_> = questions().iter().map(|question| question.id).collect();
        assert_eq!(ids, QuestionId::ALL);
        for id in QuestionId::ALL {
            assert_eq!(question(id).id, id);
        }
    }

    #[test]
    fn option_lookup_is_exact() {
        let investment = question(QuestionId::Investment);
        assert_eq!(
            investment.option("2m-5m").map(|option| option.label),
            Some("$2 Million - $5 Million")
        );
        assert!(investment.option("2M-5M").is_none());
    }
}
