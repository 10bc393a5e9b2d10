//! Networking: REST calls to the content and account backend.

pub mod api;
