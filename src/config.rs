use std::env;
use std::net::SocketAddr;

/// Application-level constants
pub const APP_NAME: &str = "Sympta";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Local Vite dev server, the default frontend origin.
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5173";

pub fn default_log_filter() -> String {
    "info,sympta=debug".to_string()
}

/// Runtime configuration, read from the process environment once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Credential for the generative backend. Absence permanently selects
    /// rule-based mode for this process.
    pub gemini_api_key: Option<String>,
    pub model: String,
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let bind_addr = match env::var("SYMPTA_ADDR") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(addr = %raw, "invalid SYMPTA_ADDR, using default");
                default_bind_addr()
            }),
            Err(_) => default_bind_addr(),
        };

        let gemini_api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let model = env::var("SYMPTA_MODEL")
            .ok()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let allowed_origins = env::var("SYMPTA_ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_default();
        let allowed_origins = if allowed_origins.is_empty() {
            parse_origins(DEFAULT_ALLOWED_ORIGINS)
        } else {
            allowed_origins
        };

        Self {
            bind_addr,
            gemini_api_key,
            model,
            allowed_origins,
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            gemini_api_key: None,
            model: DEFAULT_MODEL.to_string(),
            allowed_origins: parse_origins(DEFAULT_ALLOWED_ORIGINS),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    DEFAULT_BIND_ADDR
        .parse()
        .expect("default bind address is valid")
}

/// Split a comma-separated origin list, dropping empty entries.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bind_addr_parses() {
        assert_eq!(default_bind_addr().port(), 8000);
    }

    #[test]
    fn parse_origins_splits_and_trims() {
        let origins = parse_origins("http://localhost:5173, https://app.example.com ,");
        assert_eq!(
            origins,
            vec![
                "http://localhost:5173".to_string(),
                "https://app.example.com".to_string()
            ]
        );
    }

    #[test]
    fn parse_origins_empty_input_yields_nothing() {
        assert!(parse_origins("").is_empty());
        assert!(parse_origins(" , ").is_empty());
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
