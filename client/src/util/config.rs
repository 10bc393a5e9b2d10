//! Build-time configuration baked into the WASM bundle.

/// Backend origin; empty means same-origin requests.
pub const API_BASE_URL: &str = match option_env!("MEDCONSULT_API_URL") {
    Some(url) => url,
    None => "",
};

/// Secret path segment that opens `/admin/{hash}`. Unset disables the admin area.
pub const ADMIN_HASH: Option<&str> = option_env!("MEDCONSULT_ADMIN_HASH");
