use super::*;

fn context(admin_hash: Option<&str>) -> CliContext {
    let path = std::env::temp_dir().join(format!("medconsult-{}.json", uuid::Uuid::new_v4()));
    CliContext {
        backend: Backend::new("http://127.0.0.1:9", Duration::from_secs(1)).expect("client"),
        session: SessionStore::new(FileStorage::new(path)),
        admin_hash: admin_hash.map(ToOwned::to_owned),
    }
}

#[test]
fn parse_role_accepts_storage_labels_only() {
    assert_eq!(parse_role("medecin"), Ok(Role::Medecin));
    assert_eq!(parse_role("doctor"), Err("unknown role: doctor".to_owned()));
}

#[test]
fn parse_kind_accepts_singular_and_plural() {
    assert_eq!(parse_kind("article"), Ok(ContentKind::Article));
    assert_eq!(parse_kind("projects"), Ok(ContentKind::Project));
    assert!(parse_kind("page").is_err());
}

#[test]
fn list_args_default_to_unfiltered() {
    let cli = Cli::try_parse_from(["medconsult", "articles"]).expect("parse");
    let Command::Articles(args) = cli.command else {
        panic!("expected articles command");
    };
    assert_eq!(args.category, content::ALL_CATEGORIES);
    assert_eq!(args.search, "");
    assert!(!args.categories);
}

#[test]
fn login_requires_known_role() {
    assert!(Cli::try_parse_from(["medconsult", "login", "--role", "admin", "--email", "a@b.fr", "--password", "x"]).is_err());
    let cli = Cli::try_parse_from(["medconsult", "login", "--role", "clinique", "--email", "a@b.fr", "--password", "x"])
        .expect("parse");
    assert!(matches!(cli.command, Command::Login(LoginArgs { role: Role::Clinique, .. })));
}

#[test]
fn admin_guard_uses_configured_hash() {
    assert!(guard_admin(&context(Some("s3cr3t")), "s3cr3t").is_ok());
    assert!(matches!(guard_admin(&context(Some("s3cr3t")), "S3CR3T"), Err(CliError::AdminRedirect("/"))));
    assert!(matches!(guard_admin(&context(None), ""), Err(CliError::AdminRedirect("/"))));
    assert!(matches!(guard_admin(&context(Some("")), ""), Err(CliError::AdminRedirect("/"))));
}

#[test]
fn whoami_without_session_reports_not_logged_in() {
    assert!(matches!(run_whoami(&context(None)), Err(CliError::NotLoggedIn)));
}

#[test]
fn logout_clears_a_persisted_session() {
    let mut ctx = context(None);
    ctx.session
        .login(serde_json::json!({ "email": "p@x.fr" }), Role::Patient, "tok")
        .expect("login");
    run_logout(&mut ctx).expect("logout");
    assert!(!ctx.session.is_authenticated());
    assert!(!ctx.session.storage().path().exists());
}

#[test]
fn item_line_is_tab_separated() {
    let item = content::item::normalize(
        ContentKind::Article,
        &serde_json::json!({ "id": 1, "title": "A", "category_name": "Santé" }),
        0,
    );
    assert_eq!(item_line(&item), "post-1\tSanté\tA");
}
