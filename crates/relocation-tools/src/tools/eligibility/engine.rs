use tracing::debug;

use super::domain::{EligibilityAnswer, EligibilityResult};
use super::rules::{pathway_rules, PathwayRule, ProfileAnswers, NEXT_STEPS};

/// Stateless evaluator that applies an ordered rule set to a profile.
#[derive(Debug, Clone, Copy)]
pub struct EligibilityEngine {
    rules: &'static [PathwayRule],
}

impl Default for EligibilityEngine {
    fn default() -> Self {
        Self::new(pathway_rules())
    }
}

impl EligibilityEngine {
    pub fn new(rules: &'static [PathwayRule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'static [PathwayRule] {
        self.rules
    }

    /// Every rule is checked independently; matches are then stably partitioned so that
    /// recommended pathways lead.
    pub fn evaluate(&self, profile: &[EligibilityAnswer]) -> EligibilityResult {
        let answers = ProfileAnswers::new(profile);

        let matched: Vec<_> = self
            .rules
            .iter()
            .filter_map(|rule| rule.apply(&answers))
            .collect();

        let (mut pathways, others): (Vec<_>, Vec<_>) =
            matched.into_iter().partition(|pathway| pathway.recommended);
        pathways.extend(others);

        debug!(
            answers = profile.len(),
            matched = pathways.len(),
            "eligibility profile evaluated"
        );

        EligibilityResult {
            eligible: !pathways.is_empty(),
            pathways,
            next_steps: NEXT_STEPS.to_vec(),
        }
    }
}

/// Evaluate `profile` against the reference rule set.
pub fn evaluate(profile: &[EligibilityAnswer]) -> EligibilityResult {
    EligibilityEngine::default().evaluate(profile)
}
