mod backend;
mod storage;

use std::future::Future;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use content::{
    AdminSession, ContentItem, ContentKind, FetchError, FilterState, LoginForm, Role, RouteDecision,
    SessionStore, SignupForm, StorageError, ValidationError, authorize, categories,
};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use crate::backend::Backend;
use crate::storage::FileStorage;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Fetch(#[from] FetchError),
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("session storage failed: {0}")]
    Storage(#[from] StorageError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON output: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("not logged in; run `medconsult login` first")]
    NotLoggedIn,
    #[error("admin access refused; redirecting to {0}")]
    AdminRedirect(&'static str),
    #[error("interrupted")]
    Cancelled,
}

#[derive(Parser, Debug)]
#[command(name = "medconsult", about = "Medical Consulting content and account CLI")]
struct Cli {
    #[arg(long, env = "MEDCONSULT_API_URL", default_value = "http://127.0.0.1:8000")]
    api_url: String,

    #[arg(long, env = "MEDCONSULT_SESSION_FILE", default_value = ".medconsult-session.json")]
    session_file: String,

    #[arg(long, env = "MEDCONSULT_ADMIN_HASH")]
    admin_hash: Option<String>,

    #[arg(long, env = "MEDCONSULT_TIMEOUT_SECS", default_value_t = 15)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List blog articles.
    Articles(ListArgs),
    /// List services / projects.
    Projects(ListArgs),
    /// Show one article or project by slug.
    Show {
        #[arg(value_parser = parse_kind)]
        kind: ContentKind,
        slug: String,
        #[arg(long)]
        json: bool,
    },
    Login(LoginArgs),
    Logout,
    /// Print the persisted identity.
    Whoami,
    Signup(SignupArgs),
    Admin(AdminCommand),
}

#[derive(Args, Debug)]
struct ListArgs {
    #[arg(long, default_value = content::ALL_CATEGORIES)]
    category: String,

    #[arg(long, default_value = "")]
    search: String,

    /// Print the derived category set instead of the items.
    #[arg(long)]
    categories: bool,

    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct LoginArgs {
    #[arg(long, value_parser = parse_role)]
    role: Role,
    #[arg(long)]
    email: String,
    #[arg(long, env = "MEDCONSULT_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Args, Debug)]
struct SignupArgs {
    #[arg(long, value_parser = parse_role)]
    role: Role,
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long)]
    password: String,
    #[arg(long)]
    password_confirmation: String,
    #[arg(long, default_value = "")]
    specialty: String,
    #[arg(long, default_value = "")]
    address: String,
}

#[derive(Args, Debug)]
struct AdminCommand {
    #[command(subcommand)]
    command: AdminSubcommand,
}

#[derive(Subcommand, Debug)]
enum AdminSubcommand {
    /// Check whether a URL hash segment opens the admin pages.
    Check { hash: String },
    Login {
        #[arg(long)]
        hash: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "MEDCONSULT_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Logout,
}

fn parse_role(raw: &str) -> Result<Role, String> {
    raw.parse::<Role>().map_err(|err| err.to_string())
}

fn parse_kind(raw: &str) -> Result<ContentKind, String> {
    match raw {
        "article" | "articles" => Ok(ContentKind::Article),
        "project" | "projects" => Ok(ContentKind::Project),
        other => Err(format!("expected `article` or `project`, got `{other}`")),
    }
}

#[derive(Debug)]
struct CliContext {
    backend: Backend,
    session: SessionStore<FileStorage>,
    admin_hash: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let backend = Backend::new(&cli.api_url, Duration::from_secs(cli.timeout_secs))?;
    let mut session = SessionStore::new(FileStorage::new(&cli.session_file));
    match session.rehydrate() {
        Ok(restored) => tracing::debug!(restored, file = %cli.session_file, "session rehydrated"),
        Err(err) => tracing::warn!(error = %err, "session file unreadable; continuing logged out"),
    }
    let mut ctx = CliContext { backend, session, admin_hash: cli.admin_hash };

    match cli.command {
        Command::Articles(args) => run_list(&ctx, ContentKind::Article, args).await,
        Command::Projects(args) => run_list(&ctx, ContentKind::Project, args).await,
        Command::Show { kind, slug, json } => run_show(&ctx, kind, &slug, json).await,
        Command::Login(args) => run_login(&mut ctx, args).await,
        Command::Logout => run_logout(&mut ctx),
        Command::Whoami => run_whoami(&ctx),
        Command::Signup(args) => run_signup(&ctx, args).await,
        Command::Admin(admin) => run_admin(&mut ctx, admin).await,
    }
}

/// Race a backend call against Ctrl-C so an interrupted request never
/// writes session state after the user gave up on it.
async fn cancellable<T, F>(fut: F) -> Result<T, CliError>
where
    F: Future<Output = Result<T, FetchError>>,
{
    tokio::select! {
        result = fut => result.map_err(CliError::from),
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("request cancelled");
            Err(CliError::Cancelled)
        }
    }
}

async fn run_list(cli: &CliContext, kind: ContentKind, args: ListArgs) -> Result<(), CliError> {
    let items = cancellable(cli.backend.list(kind)).await?;

    if args.categories {
        for category in categories(&items) {
            println!("{category}");
        }
        return Ok(());
    }

    let filter = FilterState { active_category: args.category, search_query: args.search };
    let visible = filter.apply(&items);
    tracing::info!(total = items.len(), shown = visible.len(), "content filtered");

    if args.json {
        return print_json(&serde_json::to_value(&visible)?);
    }
    if visible.is_empty() {
        eprintln!("aucun résultat");
    }
    for item in &visible {
        println!("{}", item_line(item));
    }
    Ok(())
}

async fn run_show(cli: &CliContext, kind: ContentKind, slug: &str, json: bool) -> Result<(), CliError> {
    let item = cancellable(cli.backend.item(kind, slug)).await?;
    if json {
        return print_json(&serde_json::to_value(&item)?);
    }
    println!("{}", item.title);
    println!("{} | {} | {}", item.category, item.author, item.read_time);
    if let Some(date) = &item.published_at {
        println!("{date}");
    }
    if !item.tags.is_empty() {
        println!("#{}", item.tags.join(" #"));
    }
    println!();
    println!("{}", item.excerpt);
    Ok(())
}

async fn run_login(cli: &mut CliContext, args: LoginArgs) -> Result<(), CliError> {
    let credentials = LoginForm { email: args.email, password: args.password }.validate()?;
    let grant = cancellable(cli.backend.login(args.role, &credentials)).await?;
    cli.session.login(grant.user, args.role, grant.token)?;
    if let Some(identity) = cli.session.identity() {
        println!("connecté: {} ({})", identity.display_name(), identity.role.label());
    }
    Ok(())
}

fn run_logout(cli: &mut CliContext) -> Result<(), CliError> {
    cli.session.logout()?;
    println!("déconnecté");
    Ok(())
}

fn run_whoami(cli: &CliContext) -> Result<(), CliError> {
    let identity = cli.session.identity().ok_or(CliError::NotLoggedIn)?;
    println!("{} ({})", identity.display_name(), identity.role.label());
    print_json(&identity.user)
}

async fn run_signup(cli: &CliContext, args: SignupArgs) -> Result<(), CliError> {
    let form = SignupForm {
        role: args.role,
        name: args.name,
        email: args.email,
        phone: args.phone,
        password: args.password,
        password_confirmation: args.password_confirmation,
        specialty: args.specialty,
        address: args.address,
    };
    let request = form.validate()?;
    let message = cancellable(cli.backend.register(&request)).await?;
    println!("{}", message.as_deref().unwrap_or("inscription enregistrée"));
    Ok(())
}

async fn run_admin(cli: &mut CliContext, admin: AdminCommand) -> Result<(), CliError> {
    match admin.command {
        AdminSubcommand::Check { hash } => {
            guard_admin(cli, &hash)?;
            println!("allow");
            Ok(())
        }
        AdminSubcommand::Login { hash, email, password } => {
            guard_admin(cli, &hash)?;
            let credentials = LoginForm { email, password }.validate()?;
            let grant = cancellable(cli.backend.admin_login(&credentials)).await?;
            let admin = AdminSession { email: credentials.email, token: grant.token };
            admin.persist(cli.session.storage_mut())?;
            println!("admin connecté: {}", admin.email);
            Ok(())
        }
        AdminSubcommand::Logout => {
            AdminSession::clear(cli.session.storage_mut())?;
            println!("admin déconnecté");
            Ok(())
        }
    }
}

fn guard_admin(cli: &CliContext, hash: &str) -> Result<(), CliError> {
    match authorize(Some(hash), cli.admin_hash.as_deref()) {
        RouteDecision::Allow => Ok(()),
        RouteDecision::Redirect(to) => Err(CliError::AdminRedirect(to)),
    }
}

fn item_line(item: &ContentItem) -> String {
    format!("{}\t{}\t{}", item.slug, item.category, item.title)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;
