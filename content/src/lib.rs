//! Application-state core shared by the browser client and the CLI.
//!
//! This crate owns the data contracts with the remote backend (response
//! envelope, content normalization, login grants) together with the pure
//! state containers the UI is built on: session store, filter pipeline,
//! admin route guard and fetch lifecycle. It performs no I/O of its own;
//! HTTP transports and durable storage are plugged in by the caller.

pub mod admin;
pub mod api;
pub mod envelope;
pub mod fetch;
pub mod filter;
pub mod forms;
pub mod guard;
pub mod item;
pub mod session;

pub use admin::AdminSession;
pub use api::LoginGrant;
pub use envelope::FetchError;
pub use fetch::{FetchState, RequestGuard, RequestTicket};
pub use filter::{ALL_CATEGORIES, FilterState, categories, filter_items};
pub use forms::{LoginForm, LoginRequest, SignupForm, SignupRequest, ValidationError};
pub use guard::{RouteDecision, authorize};
pub use item::{ContentItem, ContentKind};
pub use session::{Identity, MemoryStorage, Role, SessionStorage, SessionStore, StorageError};
