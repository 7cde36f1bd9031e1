use serde::{Deserialize, Serialize};

/// Most zones that can be compared side by side.
pub const MAX_COMPARISON: usize = 3;

/// First occurrence of each id, at most [`MAX_COMPARISON`] of them.
fn capped<S: AsRef<str>>(ids: impl IntoIterator<Item = S>) -> Vec<String> {
    let mut kept: Vec<String> = Vec::with_capacity(MAX_COMPARISON);
    for id in ids {
        let id = id.as_ref();
        if kept.len() == MAX_COMPARISON {
            break;
        }
        if !kept.iter().any(|existing| existing == id) {
            kept.push(id.to_string());
        }
    }
    kept
}

/// Toggle `id` in `selected`: remove it when present, append it when there is room, otherwise
/// leave the selection unchanged.
///
/// `selected` is first reduced to its distinct ids, capped at [`MAX_COMPARISON`], so the result
/// never exceeds the cap whatever the caller passes in.
pub fn toggle_selection(selected: &[String], id: &str) -> Vec<String> {
    let mut next = capped(selected);
    if let Some(position) = next.iter().position(|existing| existing == id) {
        next.remove(position);
    } else if next.len() < MAX_COMPARISON {
        next.push(id.to_string());
    }
    next
}

/// Insertion-ordered set of at most [`MAX_COMPARISON`] zone ids.
///
/// Deserializes from a plain list; duplicates and ids past the cap are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ComparisonSelection {
    ids: Vec<String>,
}

impl From<Vec<String>> for ComparisonSelection {
    fn from(ids: Vec<String>) -> Self {
        Self::from_ids(ids)
    }
}

impl From<ComparisonSelection> for Vec<String> {
    fn from(selection: ComparisonSelection) -> Self {
        selection.ids
    }
}

impl ComparisonSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first occurrence of each id, up to [`MAX_COMPARISON`].
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self { ids: capped(ids) }
    }

    /// Returns whether `id` is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        self.ids = toggle_selection(&self.ids, id);
        self.contains(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_COMPARISON
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| (*id).to_string()).collect()
    }

    #[test]
    fn appends_until_full() {
        let selected = toggle_selection(&[], "dmcc");
        let selected = toggle_selection(&selected, "difc");
        let selected = toggle_selection(&selected, "ifza");
        assert_eq!(selected, owned(&["dmcc", "difc", "ifza"]));

        let unchanged = toggle_selection(&selected, "adgm");
        assert_eq!(unchanged, selected);
    }

    #[test]
    fn removes_present_id_preserving_order() {
        let selected = owned(&["dmcc", "difc", "ifza"]);
        assert_eq!(toggle_selection(&selected, "difc"), owned(&["dmcc", "ifza"]));
    }

    #[test]
    fn toggling_twice_restores_selection() {
        let selected = owned(&["dmcc"]);
        let once = toggle_selection(&selected, "adgm");
        assert_eq!(toggle_selection(&once, "adgm"), selected);
    }

    #[test]
    fn selection_wrapper_follows_the_same_rule() {
        let mut selection = ComparisonSelection::from_ids(["dmcc", "difc", "dmcc", "ifza", "dso"]);
        assert_eq!(selection.ids(), owned(&["dmcc", "difc", "ifza"]).as_slice());
        assert!(selection.is_full());

        assert!(!selection.toggle("adgm"));
        assert!(!selection.toggle("difc"));
        assert!(selection.toggle("adgm"));
        assert_eq!(selection.ids(), owned(&["dmcc", "ifza", "adgm"]).as_slice());

        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn oversized_input_is_capped_before_toggling() {
        let oversized = owned(&["a", "b", "c", "d", "e"]);
        assert_eq!(toggle_selection(&oversized, "f"), owned(&["a", "b", "c"]));
        assert_eq!(toggle_selection(&oversized, "b"), owned(&["a", "c"]));
        assert_eq!(toggle_selection(&oversized, "d"), owned(&["a", "b", "c"]));

        let repeated = owned(&["a", "a", "b"]);
        assert_eq!(toggle_selection(&repeated, "c"), owned(&["a", "b", "c"]));
    }

    #[test]
    fn deserializing_enforces_the_cap() {
        let selection: ComparisonSelection =
            serde_json::from_str(r#"["dmcc", "difc", "dmcc", "ifza", "adgm", "dso"]"#)
                .expect("list deserializes");
        assert_eq!(selection.ids(), owned(&["dmcc", "difc", "ifza"]).as_slice());
        assert_eq!(
            serde_json::to_value(&selection).expect("serializes"),
            serde_json::json!(["dmcc", "difc", "ifza"])
        );
    }
}
