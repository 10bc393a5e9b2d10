//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod admin;
pub mod blog;
pub mod detail;
pub mod home;
pub mod login;
pub mod projects;
pub mod signup;
