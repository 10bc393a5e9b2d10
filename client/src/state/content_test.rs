use super::*;
use content::{ContentKind, FetchError, item::normalize_all};
use serde_json::json;

fn loaded() -> ContentListState {
    let raw = vec![
        json!({ "id": 1, "title": "Télémédecine", "category_name": "Santé", "excerpt": "consultations" }),
        json!({ "id": 2, "title": "Cloud", "category_name": "Tech" }),
        json!({ "id": 3, "title": "Nutrition", "category_name": "Santé" }),
    ];
    let mut state = ContentListState::default();
    state.items.begin();
    state.items.finish(Ok(normalize_all(ContentKind::Article, &raw)));
    state
}

#[test]
fn nothing_visible_before_load() {
    let state = ContentListState::default();
    assert!(state.visible().is_empty());
    assert!(state.categories().is_empty());
    assert_eq!(state.summary(), None);
}

#[test]
fn category_and_query_combine() {
    let mut state = loaded();
    assert_eq!(state.categories(), vec!["Tous", "Santé", "Tech"]);

    state.select_category("Santé");
    assert_eq!(state.summary().as_deref(), Some("2 / 3"));

    state.set_query("CONSULT".to_owned());
    let titles: Vec<String> = state.visible().into_iter().map(|item| item.title).collect();
    assert_eq!(titles, vec!["Télémédecine"]);
}

#[test]
fn reset_restores_full_list() {
    let mut state = loaded();
    state.select_category("Tech");
    state.set_query("zzz".to_owned());
    assert!(state.visible().is_empty());

    state.reset_filters();
    assert_eq!(state.filter, FilterState::default());
    assert_eq!(state.visible().len(), 3);
}

#[test]
fn failed_fetch_shows_no_items() {
    let mut state = ContentListState::default();
    state.items.finish(Err(FetchError::http_status(500, None)));
    assert!(state.items.error().is_some());
    assert!(state.visible().is_empty());
}
