use anyhow::{Context, Result};

use crate::layout::templates::TemplateId;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Template used when a layout request does not name one.
    pub default_template: TemplateId,
    /// Upper bound on work entries accepted per layout request.
    pub max_experience_entries: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            default_template: TemplateId::default(),
            max_experience_entries: 200,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            port: optional_env("PORT")
                .map(|v| v.parse::<u16>())
                .transpose()
                .context("PORT must be a valid port number")?
                .unwrap_or(defaults.port),
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            default_template: optional_env("DEFAULT_TEMPLATE")
                .map(|v| v.parse::<TemplateId>())
                .transpose()
                .context("DEFAULT_TEMPLATE must name a known template")?
                .unwrap_or(defaults.default_template),
            max_experience_entries: optional_env("MAX_EXPERIENCE_ENTRIES")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("MAX_EXPERIENCE_ENTRIES must be a non-negative integer")?
                .unwrap_or(defaults.max_experience_entries),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.default_template, TemplateId::Classic);
        assert_eq!(config.max_experience_entries, 200);
    }

    #[test]
    fn test_optional_env_ignores_blank() {
        std::env::set_var("FOLIO_TEST_BLANK_VAR", "   ");
        assert_eq!(optional_env("FOLIO_TEST_BLANK_VAR"), None);

        std::env::set_var("FOLIO_TEST_SET_VAR", "modern");
        assert_eq!(optional_env("FOLIO_TEST_SET_VAR").as_deref(), Some("modern"));
    }
}
