use super::*;

#[test]
fn url_joins_configured_base_and_path() {
    let joined = url("/api/articles");
    assert!(joined.ends_with("/api/articles"));
    assert!(!joined.contains("//api"));
}

#[test]
fn native_calls_fail_without_touching_the_network() {
    let err = futures::executor::block_on(fetch_list(ContentKind::Article)).expect_err("native");
    assert_eq!(err.status(), None);
    assert!(err.to_string().contains("navigateur"));
}
