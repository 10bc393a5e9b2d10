use super::*;
use serde_json::json;

#[test]
fn endpoint_paths_follow_backend_layout() {
    assert_eq!(collection_path(ContentKind::Article), "/api/articles");
    assert_eq!(detail_path(ContentKind::Project, "tele-sante"), "/api/projects/tele-sante");
    assert_eq!(login_path(Role::Clinique), "/api/cliniques/login");
    assert_eq!(register_path(Role::Patient), "/api/patients/register");
}

#[test]
fn endpoint_url_strips_trailing_slashes() {
    assert_eq!(endpoint_url("https://api.example.com/", ARTICLES_PATH), "https://api.example.com/api/articles");
    assert_eq!(endpoint_url("http://localhost:8000", ADMIN_LOGIN_PATH), "http://localhost:8000/api/admin/login");
}

#[test]
fn decode_list_normalizes_each_record() {
    let body = r#"{"success":true,"data":[{"id":1,"title":"A","category_name":"Santé"},{"id":2,"title":"B","category_name":"Tech"}]}"#;
    let items = decode_list(ContentKind::Article, 200, body).expect("list");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].slug, "post-1");
    assert_eq!(items[1].category, "Tech");
}

#[test]
fn decode_item_reads_detail_object() {
    let body = r#"{"success":true,"data":{"id":5,"title":"Détail","slug":"detail"}}"#;
    let item = decode_item(ContentKind::Article, 200, body).expect("item");
    assert_eq!(item.slug, "detail");
    assert_eq!(item.id, "5");
}

#[test]
fn login_grant_prefers_nested_user() {
    let body = r#"{"success":true,"data":{"user":{"id":1,"email":"p@x.fr"},"token":"tok123"}}"#;
    let grant = decode_login(200, body).expect("grant");
    assert_eq!(grant.token, "tok123");
    assert_eq!(grant.user, json!({"id": 1, "email": "p@x.fr"}));
}

#[test]
fn login_grant_accepts_flat_payload_with_access_token() {
    let body = r#"{"success":true,"data":{"id":3,"nom":"Dr X","access_token":"abc","token_type":"Bearer"}}"#;
    let grant = decode_login(200, body).expect("grant");
    assert_eq!(grant.token, "abc");
    assert_eq!(grant.user, json!({"id": 3, "nom": "Dr X"}));
}

#[test]
fn login_without_token_is_invalid_response() {
    let body = r#"{"success":true,"data":{"user":{"id":1}}}"#;
    assert!(matches!(decode_login(200, body), Err(FetchError::InvalidResponse(_))));
    let body = r#"{"success":true,"data":{"user":{"id":1},"token":""}}"#;
    assert!(decode_login(200, body).is_err());
}

#[test]
fn login_rejection_surfaces_backend_message() {
    let body = r#"{"success":false,"message":"Mot de passe incorrect"}"#;
    assert_eq!(
        decode_login(401, body),
        Err(FetchError::Network { status: Some(401), message: "Mot de passe incorrect".to_owned() })
    );
}
