use super::*;

#[test]
fn missing_segment_always_redirects_home() {
    assert_eq!(admin_decision(None), RouteDecision::Redirect("/"));
}

#[test]
fn decision_follows_configured_secret() {
    let expected = match ADMIN_HASH {
        Some(secret) if !secret.is_empty() => RouteDecision::Allow,
        _ => RouteDecision::Redirect("/"),
    };
    assert_eq!(admin_decision(ADMIN_HASH), expected);
    assert_eq!(admin_decision(Some("definitely-not-the-secret-hash")), RouteDecision::Redirect("/"));
}

#[test]
fn admin_paths_share_the_segment() {
    let (dashboard, login) = admin_paths("a1b2");
    assert_eq!(dashboard, "/admin/a1b2");
    assert_eq!(login, "/admin/a1b2/login");
}
