use dotenvy::dotenv;
use std::env;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Client configuration. Constructed once and injected into the HTTP clients
/// so the base URL is never read ad hoc inside request logic.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        dotenv().ok();
        let api_base_url =
            env::var("HOSPITAL_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        Self { api_base_url }
    }

    /// Root for every endpoint: trailing slash stripped, `/api` appended
    /// unless the configured base already ends with it.
    pub fn api_root(&self) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        if base.ends_with("/api") {
            base.to_string()
        } else {
            format!("{}/api", base)
        }
    }
}
