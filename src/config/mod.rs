pub mod affiliate;
pub mod features;
pub mod plans;
pub mod site;

use std::env;
use std::path::PathBuf;

use self::site::SiteConfig;

/// Log output format for the preview binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// Anything other than `json` (any case) keeps the human-readable format.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,

    // Dataset: bundled copy unless a freshly exported file is pointed at
    pub events_json_path: Option<PathBuf>,

    // Static site
    pub site: SiteConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = SiteConfig::default();

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()
                .map_err(|e| anyhow::anyhow!("PORT must be a valid port number: {e}"))?,
            log_format: LogFormat::from_str(&env::var("LOG_FORMAT").unwrap_or_default()),

            events_json_path: env::var("EVENTS_JSON_PATH")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),

            site: SiteConfig {
                site: env::var("SITE_URL").unwrap_or(defaults.site),
                base: env::var("SITE_BASE").unwrap_or(defaults.base),
                output: defaults.output,
            },
        })
    }

    /// Returns true if the preview serves a file export instead of the bundled dataset.
    pub fn uses_external_events(&self) -> bool {
        self.events_json_path.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_str(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::from_str(""), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str("pretty"), LogFormat::Pretty);
    }
}
