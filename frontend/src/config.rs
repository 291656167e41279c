use log::LevelFilter;

pub const DEFAULT_API_BASE_URL: &str = "/api";

/// Settings baked into the wasm bundle at build time
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Read `SURVEY_API_BASE_URL` and `SURVEY_LOG_LEVEL` as they were when the bundle was built
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("SURVEY_API_BASE_URL"),
            option_env!("SURVEY_LOG_LEVEL"),
        )
    }

    pub fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();

        let api_base_url = api_base_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .unwrap_or(defaults.api_base_url);

        let log_level = log_level
            .and_then(|level| level.trim().parse::<LevelFilter>().ok())
            .unwrap_or(defaults.log_level);

        Self {
            api_base_url,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url, "/api");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some("https://analytics.example.com/api/"), Some("debug"));
        assert_eq!(config.api_base_url, "https://analytics.example.com/api");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), Some("chatty"));
        assert_eq!(config.api_base_url, "/api");
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
