use std::env;

pub const DEFAULT_BASE_URL: &str = "http://localhost:9090/OpenKM";
pub const DEFAULT_USER: &str = "okmAdmin";
pub const DEFAULT_PASS: &str = "admin";

/// OpenKM connection settings, read once at startup and passed by reference.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub user: String,
    pub pass: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("OKM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            user: env::var("OKM_USER").unwrap_or_else(|_| DEFAULT_USER.to_string()),
            pass: env::var("OKM_PASS").unwrap_or_else(|_| DEFAULT_PASS.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user: DEFAULT_USER.to_string(),
            pass: DEFAULT_PASS.to_string(),
        }
    }
}
