/// Fallback host for the contact-intake API when no override is baked in.
pub const DEFAULT_API_BASE_URL: &str = "https://serpbackend.vercel.app";

/// Base URL of the contact-intake API.
///
/// Resolved at compile time from `API_BASE_URL` so deployments can point the
/// site at a staging backend without touching the source.
pub fn api_base_url() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL)
}
