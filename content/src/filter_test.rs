use super::*;
use crate::item::{ContentKind, normalize_all};
use serde_json::json;

fn sample() -> Vec<ContentItem> {
    normalize_all(
        ContentKind::Article,
        &[
            json!({ "id": 1, "title": "Bien dormir", "excerpt": "Conseils sommeil", "category_name": "Santé" }),
            json!({ "id": 2, "title": "Objets connectés", "excerpt": "La santé au poignet", "category_name": "Tech" }),
            json!({ "id": 3, "title": "Manger équilibré", "excerpt": "Nutrition", "category_name": "Santé" }),
            json!({ "id": 4, "title": "Télémédecine", "excerpt": "", "category_name": "santé" }),
        ],
    )
}

#[test]
fn tous_with_empty_query_is_identity() {
    let items = sample();
    assert_eq!(filter_items(&items, ALL_CATEGORIES, ""), items);
}

#[test]
fn filtering_is_idempotent() {
    let items = sample();
    let once = filter_items(&items, "Santé", "bien");
    let twice = filter_items(&once, "Santé", "bien");
    assert_eq!(once, twice);
}

#[test]
fn category_match_is_exact_and_case_sensitive() {
    let items = sample();
    let sante = filter_items(&items, "Santé", "");
    assert_eq!(sante.len(), 2);
    assert!(sante.iter().all(|item| item.category == "Santé"));
    assert_eq!(filter_items(&items, "santé", "").len(), 1);
    assert!(filter_items(&items, "Inconnue", "").is_empty());
}

#[test]
fn query_matches_title_or_excerpt_case_insensitively() {
    let items = sample();
    let hits = filter_items(&items, ALL_CATEGORIES, "  SANTÉ ");
    let ids: Vec<&str> = hits.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, vec!["2"]);

    let hits = filter_items(&items, ALL_CATEGORIES, "nutri");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Manger équilibré");
}

#[test]
fn whitespace_query_imposes_no_constraint() {
    let items = sample();
    assert_eq!(filter_items(&items, ALL_CATEGORIES, "   ").len(), items.len());
}

#[test]
fn category_and_query_compose_with_and() {
    let items = sample();
    let hits = filter_items(&items, "Santé", "dormir");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "1");
    assert!(filter_items(&items, "Tech", "dormir").is_empty());
}

#[test]
fn categories_are_deduplicated_in_first_appearance_order() {
    let items = sample();
    assert_eq!(categories(&items), vec!["Tous", "Santé", "Tech", "santé"]);
    assert_eq!(categories(&[]), vec!["Tous"]);
}

#[test]
fn reset_restores_both_fields_at_once() {
    let mut state = FilterState { active_category: "Tech".to_owned(), search_query: "montre".to_owned() };
    assert!(state.is_active());
    state.reset();
    assert_eq!(state, FilterState::default());
    assert_eq!(state.active_category, ALL_CATEGORIES);
    assert_eq!(state.search_query, "");
    assert!(!state.is_active());
}

#[test]
fn end_to_end_envelope_to_filtered_list() {
    let body = r#"{"success":true,"data":[{"id":1,"title":"A","category_name":"Santé"},{"id":2,"title":"B","category_name":"Tech"}]}"#;
    let raw = crate::envelope::open_list(200, body).expect("envelope");
    let items = normalize_all(ContentKind::Article, &raw);
    assert_eq!(items[0].category, "Santé");
    assert_eq!(items[1].category, "Tech");
    assert_eq!(categories(&items), vec!["Tous", "Santé", "Tech"]);

    let state = FilterState { active_category: "Tech".to_owned(), search_query: String::new() };
    let hits = state.apply(&items);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "B");
}
