const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Base address of the matching service. Baked in at build time via
/// `BACKEND_URL`, with a local-development fallback.
pub fn backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL)
}

pub fn find_url() -> String {
    format!("{}/find", backend_url())
}
