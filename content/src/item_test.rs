use super::*;
use serde_json::json;

#[test]
fn empty_record_gets_every_default() {
    let item = normalize(ContentKind::Article, &json!({}), 0);
    assert_eq!(item.id, "1");
    assert_eq!(item.title, DEFAULT_TITLE);
    assert_eq!(item.excerpt, "");
    assert_eq!(item.image_url, DEFAULT_ARTICLE_IMAGE);
    assert_eq!(item.category, DEFAULT_CATEGORY);
    assert_eq!(item.author, DEFAULT_AUTHOR);
    assert_eq!(item.published_at, None);
    assert_eq!(item.slug, "post-1");
    assert!(item.tags.is_empty());
    assert_eq!(item.read_time, DEFAULT_READ_TIME);
}

#[test]
fn empty_project_record_uses_project_defaults() {
    let item = normalize(ContentKind::Project, &json!({ "id": 7 }), 3);
    assert_eq!(item.slug, "project-7");
    assert_eq!(item.image_url, DEFAULT_PROJECT_IMAGE);
    assert_eq!(item.kind, ContentKind::Project);
}

#[test]
fn non_object_record_is_fully_defaulted() {
    let item = normalize(ContentKind::Article, &json!("garbage"), 4);
    assert_eq!(item.slug, "post-5");
    assert_eq!(item.title, DEFAULT_TITLE);
}

#[test]
fn alternative_backend_field_names_are_accepted() {
    let raw = json!({
        "id": "42",
        "name": "Téléconsultation",
        "description": "Consultez depuis chez vous",
        "image": "/uploads/tele.png",
        "category": { "name": "Services" },
        "author": { "name": "Dr. Benali" },
        "created_at": "2024-03-01T10:00:00Z",
        "read_time": 8
    });
    let item = normalize(ContentKind::Project, &raw, 0);
    assert_eq!(item.id, "42");
    assert_eq!(item.title, "Téléconsultation");
    assert_eq!(item.excerpt, "Consultez depuis chez vous");
    assert_eq!(item.image_url, "/uploads/tele.png");
    assert_eq!(item.category, "Services");
    assert_eq!(item.author, "Dr. Benali");
    assert_eq!(item.published_at.as_deref(), Some("2024-03-01T10:00:00Z"));
    assert_eq!(item.read_time, "8 min");
}

#[test]
fn preferred_keys_win_over_fallback_keys() {
    let raw = json!({
        "id": 1,
        "category_name": "Santé",
        "category": "Ignored",
        "published_at": "2024-01-02",
        "created_at": "2023-12-31",
        "excerpt": "court",
        "description": "long"
    });
    let item = normalize(ContentKind::Article, &raw, 0);
    assert_eq!(item.category, "Santé");
    assert_eq!(item.published_at.as_deref(), Some("2024-01-02"));
    assert_eq!(item.excerpt, "court");
}

#[test]
fn articles_fall_back_to_created_at() {
    let item = normalize(ContentKind::Article, &json!({ "created_at": "2023-12-31" }), 0);
    assert_eq!(item.published_at.as_deref(), Some("2023-12-31"));
}

#[test]
fn display_fields_are_kept_verbatim() {
    let raw = vec![
        json!({ "id": 1, "category_name": "Santé " }),
        json!({ "id": 2, "title": "   ", "category_name": "Santé" }),
        json!({ "id": 3, "title": "", "category_name": "" }),
    ];
    let items = normalize_all(ContentKind::Article, &raw);
    assert_eq!(items[0].category, "Santé ");
    assert_eq!(items[1].title, "   ");
    assert_eq!(items[2].title, DEFAULT_TITLE);
    assert_eq!(items[2].category, DEFAULT_CATEGORY);

    let padded = crate::filter::filter_items(&items, "Santé ", "");
    assert_eq!(padded.len(), 1);
    assert_eq!(padded[0].id, "1");
    assert_eq!(crate::filter::categories(&items), vec!["Tous", "Santé ", "Santé", DEFAULT_CATEGORY]);
}

#[test]
fn blank_slug_is_regenerated_from_id() {
    let item = normalize(ContentKind::Article, &json!({ "id": 9, "slug": "   " }), 0);
    assert_eq!(item.slug, "post-9");
}

#[test]
fn tags_are_trimmed_from_arrays_and_comma_strings() {
    let from_array = normalize(ContentKind::Article, &json!({ "tags": [" cardio ", "", {"name": "nutrition"}, 3] }), 0);
    assert_eq!(from_array.tags, vec!["cardio".to_owned(), "nutrition".to_owned()]);

    let from_string = normalize(ContentKind::Article, &json!({ "tags": "prévention,  sport , ," }), 0);
    assert_eq!(from_string.tags, vec!["prévention".to_owned(), "sport".to_owned()]);
}

#[test]
fn normalization_is_deterministic() {
    let raw = json!({ "id": 3, "title": "A", "tags": "x,y" });
    assert_eq!(normalize(ContentKind::Article, &raw, 0), normalize(ContentKind::Article, &raw, 0));
}

#[test]
fn normalize_all_preserves_order_and_uses_positions() {
    let raw = vec![json!({ "id": 10, "title": "B" }), json!({ "title": "A" })];
    let items = normalize_all(ContentKind::Article, &raw);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "B");
    assert_eq!(items[0].slug, "post-10");
    assert_eq!(items[1].title, "A");
    assert_eq!(items[1].slug, "post-2");
}

#[test]
fn read_time_serializes_camel_case() {
    let item = normalize(ContentKind::Article, &json!({ "readTime": "3 min" }), 0);
    let value = serde_json::to_value(&item).expect("serialize");
    assert_eq!(value["readTime"], "3 min");
    assert_eq!(value["kind"], "article");
}
