use relocation_tools::tools::eligibility::{
    evaluate, questions, EligibilityAnswer, EligibilitySession, QuestionId, SessionState,
};

fn profile(values: [&str; 5]) -> Vec<EligibilityAnswer> {
    QuestionId::ALL
        .into_iter()
        .zip(values)
        .map(|(question, value)| EligibilityAnswer::new(question, value))
        .collect()
}

#[test]
fn investor_profile_lists_property_before_investor() {
    let result = evaluate(&profile([
        "investment",
        "2m-5m",
        "executive",
        "immediate",
        "family",
    ]));

    let names: Vec<_> = result.pathways.iter().map(|pathway| pathway.name).collect();
    let property = names
        .iter()
        .position(|name| name.contains("Property"))
        .expect("property pathway");
    let investor = names
        .iter()
        .position(|name| name.contains("Investor"))
        .expect("investor pathway");
    assert!(property < investor);
    assert!(result.pathways[property].recommended);
}

#[test]
fn rules_are_independent_of_each_other() {
    // Changing the profession must not remove pathways driven only by purpose and investment.
    let base = evaluate(&profile(["business", "over5m", "entrepreneur", "soon", "solo"]));
    let changed = evaluate(&profile(["business", "over5m", "creative", "soon", "solo"]));

    for name in ["10-Year Golden Visa (Property)", "10-Year Golden Visa (Investor)"] {
        assert!(base.pathways.iter().any(|pathway| pathway.name == name));
        assert!(changed.pathways.iter().any(|pathway| pathway.name == name));
    }
}

#[test]
fn recommended_pathways_always_lead() {
    for purpose in ["business", "investment", "employment", "lifestyle", "retirement"] {
        for investment in ["under500k", "500k-1m", "1m-2m", "2m-5m", "over5m"] {
            for profession in ["executive", "entrepreneur", "specialist", "scientist", "other"] {
                let result = evaluate(&profile([purpose, investment, profession, "soon", "solo"]));
                let first_plain = result
                    .pathways
                    .iter()
                    .position(|pathway| !pathway.recommended)
                    .unwrap_or(result.pathways.len());
                assert!(result.pathways[first_plain..]
                    .iter()
                    .all(|pathway| !pathway.recommended));
            }
        }
    }
}

#[test]
fn session_walks_every_question_then_evaluates() {
    let mut session = EligibilitySession::default();
    let values = ["lifestyle", "under500k", "creative", "planning", "spouse"];

    for (index, value) in values.into_iter().enumerate() {
        assert_eq!(session.state(), SessionState::Collecting { step: index });
        assert_eq!(
            session.current_question().map(|question| question.id),
            Some(questions()[index].id)
        );
        session.answer(value);
    }

    assert_eq!(session.state(), SessionState::Complete);
    let result = session.result().expect("evaluated");
    assert!(result.eligible);
    assert!(result.recommended().next().is_none());
    assert_eq!(result.pathways.len(), 3);
}
