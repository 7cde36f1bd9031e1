use super::domain::{EligibilityAnswer, EligibilityPathway, QuestionId};

/// Read-only view over a profile. When a question was answered twice the first answer wins.
#[derive(Debug, Clone, Copy)]
pub struct ProfileAnswers<'a> {
    answers: &'a [EligibilityAnswer],
}

impl<'a> ProfileAnswers<'a> {
    pub fn new(answers: &'a [EligibilityAnswer]) -> Self {
        Self { answers }
    }

    pub fn value(&self, question: QuestionId) -> Option<&'a str> {
        self.answers
            .iter()
            .find(|answer| answer.question == question)
            .map(|answer| answer.value.as_str())
    }
}

/// Requires the answer to `question` to be one of `any_of`. A missing answer never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerCondition {
    pub question: QuestionId,
    pub any_of: &'static [&'static str],
}

impl AnswerCondition {
    pub fn matches(&self, profile: &ProfileAnswers<'_>) -> bool {
        profile
            .value(self.question)
            .map(|value| self.any_of.iter().any(|candidate| *candidate == value))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Always,
    Never,
    When(&'static [AnswerCondition]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathwayTemplate {
    pub name: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub requirements: &'static [&'static str],
    pub benefits: &'static [&'static str],
    pub processing_time: &'static str,
}

/// Declarative eligibility rule: every condition must hold for the pathway to be offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathwayRule {
    pub key: &'static str,
    pub conditions: &'static [AnswerCondition],
    pub recommendation: Recommendation,
    pub template: PathwayTemplate,
}

impl PathwayRule {
    pub fn matches(&self, profile: &ProfileAnswers<'_>) -> bool {
        self.conditions
            .iter()
            .all(|condition| condition.matches(profile))
    }

    pub fn is_recommended(&self, profile: &ProfileAnswers<'_>) -> bool {
        match self.recommendation {
            Recommendation::Always => true,
            Recommendation::Never => false,
            Recommendation::When(conditions) => conditions
                .iter()
                .all(|condition| condition.matches(profile)),
        }
    }

    /// Instantiate the pathway when the rule matches `profile`.
    pub fn apply(&self, profile: &ProfileAnswers<'_>) -> Option<EligibilityPathway> {
        if !self.matches(profile) {
            return None;
        }

        let template = &self.template;
        Some(EligibilityPathway {
            name: template.name,
            duration: template.duration,
            description: template.description,
            requirements: template.requirements.to_vec(),
            benefits: template.benefits.to_vec(),
            processing_time: template.processing_time,
            recommended: self.is_recommended(profile),
        })
    }
}

const fn when(question: QuestionId, any_of: &'static [&'static str]) -> AnswerCondition {
    AnswerCondition { question, any_of }
}

const LOWER_INVESTMENT: AnswerCondition =
    when(QuestionId::Investment, &["under500k", "500k-1m"]);

const OVER_FIVE_MILLION: &[AnswerCondition] = &[when(QuestionId::Investment, &["over5m"])];

static PATHWAY_RULES: [PathwayRule; 7] = [
    PathwayRule {
        key: "golden_visa_property",
        conditions: &[when(QuestionId::Investment, &["1m-2m", "2m-5m", "over5m"])],
        recommendation: Recommendation::Always,
        template: PathwayTemplate {
            name: "10-Year Golden Visa (Property)",
            duration: "10 Years",
            description: "Obtain residency through property investment of AED 2 million or more.",
            requirements: &[
                "Property investment of AED 2,000,000+ (fully paid)",
                "Valid passport",
                "Health insurance",
                "No criminal record",
            ],
            benefits: &[
                "10-year renewable residency",
                "Sponsor unlimited family members",
                "No minimum stay requirement",
                "Work for any employer or freelance",
                "Access to UAE banking & business",
            ],
            processing_time: "2-4 weeks",
        },
    },
    PathwayRule {
        key: "golden_visa_investor",
        conditions: &[
            when(QuestionId::Purpose, &["investment", "business"]),
            when(QuestionId::Investment, &["2m-5m", "over5m"]),
        ],
        recommendation: Recommendation::When(OVER_FIVE_MILLION),
        template: PathwayTemplate {
            name: "10-Year Golden Visa (Investor)",
            duration: "10 Years",
            description: "For investors with public investments or company shareholders.",
            requirements: &[
                "Investment/deposit of AED 2,000,000+",
                "Or ownership of company with capital AED 2M+",
                "Valid passport",
                "Health insurance",
            ],
            benefits: &[
                "10-year renewable residency",
                "Full business ownership rights",
                "Sponsor family members",
                "Multiple entry visa",
                "No sponsor required",
            ],
            processing_time: "2-4 weeks",
        },
    },
    PathwayRule {
        key: "golden_visa_entrepreneur",
        conditions: &[
            when(QuestionId::Profession, &["entrepreneur", "executive"]),
            when(QuestionId::Purpose, &["business"]),
        ],
        recommendation: Recommendation::Never,
        template: PathwayTemplate {
            name: "10-Year Golden Visa (Entrepreneur)",
            duration: "10 Years",
            description: "For founders of successful startups or businesses.",
            requirements: &[
                "Own a startup valued at AED 2M+",
                "Or have sold a startup for AED 7M+",
                "Approval from accredited business incubator",
                "Valid passport",
            ],
            benefits: &[
                "10-year renewable residency",
                "Bring business partners & employees",
                "No local sponsor needed",
                "Full company ownership",
            ],
            processing_time: "3-6 weeks",
        },
    },
    PathwayRule {
        key: "golden_visa_talent",
        conditions: &[when(
            QuestionId::Profession,
            &["specialist", "scientist", "creative"],
        )],
        recommendation: Recommendation::Never,
        template: PathwayTemplate {
            name: "10-Year Golden Visa (Exceptional Talent)",
            duration: "10 Years",
            description: "For specialists, scientists, and exceptional talents in their field.",
            requirements: &[
                "PhD holders or specialists in priority fields",
                "Scientists with significant research contributions",
                "Creative professionals with awards/recognition",
                "Letter of recommendation from relevant authority",
            ],
            benefits: &[
                "10-year renewable residency",
                "Work independently or for any employer",
                "Sponsor family members",
                "Fast-track processing available",
            ],
            processing_time: "2-4 weeks",
        },
    },
    PathwayRule {
        key: "golden_visa_executive",
        conditions: &[
            when(QuestionId::Profession, &["executive"]),
            when(QuestionId::Purpose, &["employment"]),
        ],
        recommendation: Recommendation::Never,
        template: PathwayTemplate {
            name: "10-Year Golden Visa (Executive)",
            duration: "10 Years",
            description: "For senior executives of established companies.",
            requirements: &[
                "Executive director or senior manager position",
                "Minimum salary of AED 30,000/month",
                "Bachelor's degree or equivalent",
                "Valid employment contract in UAE",
            ],
            benefits: &[
                "10-year renewable residency",
                "Change employers without visa change",
                "Sponsor family members",
                "No minimum stay",
            ],
            processing_time: "2-4 weeks",
        },
    },
    PathwayRule {
        key: "freelance_visa",
        conditions: &[LOWER_INVESTMENT],
        recommendation: Recommendation::Never,
        template: PathwayTemplate {
            name: "Freelance Visa",
            duration: "1-3 Years",
            description: "Self-sponsored visa for freelancers and independent professionals.",
            requirements: &[
                "Proof of professional expertise",
                "Minimum AED 20,000 bank balance",
                "Health insurance",
                "No degree requirement for some categories",
            ],
            benefits: &[
                "Self-sponsored residency",
                "Work with multiple clients",
                "Issue your own invoices",
                "Open UAE bank account",
            ],
            processing_time: "1-2 weeks",
        },
    },
    PathwayRule {
        key: "company_formation_visa",
        conditions: &[LOWER_INVESTMENT],
        recommendation: Recommendation::Never,
        template: PathwayTemplate {
            name: "Company Formation Visa",
            duration: "2-3 Years",
            description: "Residency through setting up a Free Zone or Mainland company.",
            requirements: &[
                "Company setup (from AED 15,000)",
                "Office space (flexi-desk acceptable)",
                "Valid passport",
                "Health insurance",
            ],
            benefits: &[
                "Self-sponsored residency",
                "100% business ownership",
                "Sponsor employees & family",
                "Business-friendly regulations",
            ],
            processing_time: "1-3 weeks",
        },
    },
];

/// Rules in declaration order.
pub fn pathway_rules() -> &'static [PathwayRule] {
    &PATHWAY_RULES
}

pub(crate) static NEXT_STEPS: [&str; 4] = [
    "Book a consultation to discuss your specific situation",
    "Gather required documents (passport, proof of funds, etc.)",
    "Select the visa pathway that best matches your goals",
    "Begin the application process with our guidance",
];
