use super::*;

fn house(id: i64, name: &str) -> House {
    House { id, name: name.to_owned(), address: "addr".to_owned(), length: 2.0, width: 3.0, height: 4.0 }
}

#[test]
fn houses_state_default_is_empty() {
    let state = HousesState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn replace_all_clears_loading_and_error() {
    let mut state = HousesState { loading: true, error: Some("boom".to_owned()), ..HousesState::default() };
    state.replace_all(vec![house(1, "A"), house(2, "B")]);
    assert_eq!(state.items.len(), 2);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn apply_created_appends() {
    let mut state = HousesState::default();
    state.apply_created(house(1, "A"));
    state.apply_created(house(2, "B"));
    let ids: Vec<i64> = state.items.iter().map(|h| h.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn apply_updated_replaces_in_place() {
    let mut state = HousesState::default();
    state.replace_all(vec![house(1, "A"), house(2, "B")]);
    state.apply_updated(house(1, "A2"));
    assert_eq!(state.items[0].name, "A2");
    assert_eq!(state.items.len(), 2);
}

#[test]
fn apply_updated_unknown_id_appends() {
    let mut state = HousesState::default();
    state.apply_updated(house(9, "Z"));
    assert_eq!(state.find(9).map(|h| h.name.as_str()), Some("Z"));
}

#[test]
fn apply_removed_drops_matching_id_only() {
    let mut state = HousesState::default();
    state.replace_all(vec![house(1, "A"), house(2, "B")]);
    state.apply_removed(1);
    assert!(state.find(1).is_none());
    assert!(state.find(2).is_some());
    state.apply_removed(42);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn fail_records_error_and_stops_loading() {
    let mut state = HousesState { loading: true, ..HousesState::default() };
    state.fail("request failed: 500");
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("request failed: 500"));
}

#[test]
fn total_area_sums_items() {
    let mut state = HousesState::default();
    state.replace_all(vec![house(1, "A"), house(2, "B")]);
    assert!((state.total_area() - 12.0).abs() < f64::EPSILON);
}
