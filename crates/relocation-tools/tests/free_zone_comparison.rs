use relocation_tools::tools::free_zones::{
    compare, filter_and_sort, free_zones, toggle_selection, BudgetTier, ComparisonSelection,
    IndustryFilter, SortKey, INDUSTRY_FILTERS, MAX_COMPARISON,
};

fn owned(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| (*id).to_string()).collect()
}

#[test]
fn finance_filter_returns_exactly_finance_zones() {
    for sort in [SortKey::Popular, SortKey::Price, SortKey::Rating] {
        let zones = filter_and_sort(
            free_zones(),
            &IndustryFilter::parse("Finance"),
            BudgetTier::All,
            sort,
        );
        let mut ids: Vec<_> = zones.iter().map(|zone| zone.id.as_str()).collect();
        ids.sort_unstable();
        assert_eq!(ids, ["adgm", "difc", "dmcc"]);
    }
}

#[test]
fn toggle_is_a_no_op_at_capacity_and_removes_existing() {
    assert_eq!(
        toggle_selection(&owned(&["a", "b", "c"]), "d"),
        owned(&["a", "b", "c"])
    );
    assert_eq!(toggle_selection(&owned(&["a", "b"]), "a"), owned(&["b"]));
}

#[test]
fn selection_never_exceeds_capacity() {
    let mut selection = ComparisonSelection::new();
    let ids: Vec<_> = free_zones().iter().map(|zone| zone.id.as_str()).collect();
    for round in 0..5 {
        for id in ids.iter().skip(round) {
            selection.toggle(id);
            assert!(selection.len() <= MAX_COMPARISON);
        }
    }
}

#[test]
fn budget_tier_boundaries() {
    assert_eq!(BudgetTier::classify(15_000), BudgetTier::Mid);
    assert_eq!(BudgetTier::classify(30_000), BudgetTier::Premium);

    let tecom = free_zones()
        .iter()
        .find(|zone| zone.id == "tecom")
        .expect("tecom");
    assert_eq!(tecom.costs.package_from, 30_000);
    assert!(BudgetTier::Premium.admits(tecom));
    assert!(!BudgetTier::Mid.admits(tecom));
}

#[test]
fn popular_sort_is_stable_within_groups() {
    for industry in INDUSTRY_FILTERS {
        let zones = filter_and_sort(
            free_zones(),
            &IndustryFilter::parse(industry),
            BudgetTier::All,
            SortKey::Popular,
        );
        let catalogue_index = |id: &str| free_zones().iter().position(|zone| zone.id == id);

        for popular in [true, false] {
            let group: Vec<_> = zones
                .iter()
                .filter(|zone| zone.popular == popular)
                .map(|zone| catalogue_index(&zone.id))
                .collect();
            assert!(group.windows(2).all(|pair| pair[0] < pair[1]), "{industry}");
        }

        let first_plain = zones.iter().position(|zone| !zone.popular).unwrap_or(zones.len());
        assert!(zones[first_plain..].iter().all(|zone| !zone.popular));
    }
}

#[test]
fn comparison_matches_selection() {
    let mut selection = ComparisonSelection::new();
    selection.toggle("adgm");
    selection.toggle("rakez");

    let table = compare(free_zones(), selection.ids());
    let columns: Vec<_> = table.columns.iter().map(|column| column.short_name.as_str()).collect();
    assert_eq!(columns, ["ADGM", "RAKEZ"]);
    assert!(table.rows.iter().all(|row| row.values.len() == 2));
}
