use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

fn default_api_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            login: None,
            token: None,
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("FINBOARD_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        Self::from_file(&config_path)
    }

    /// Load settings from `path` (optional) with `FINBOARD__*` environment overrides.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("FINBOARD").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api_url.is_empty() {
            return Err("api_url is required".to_string());
        }
        if !self.api_url.starts_with("http") {
            return Err("api_url must be a valid HTTP(S) URL".to_string());
        }
        Ok(())
    }

    /// Login and token, when both are configured and non-empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.login.as_deref(), self.token.as_deref()) {
            (Some(login), Some(token)) if !login.is_empty() && !token.is_empty() => {
                Some((login, token))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_non_http_url() {
        let settings = Settings {
            api_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_url() {
        let settings = Settings {
            api_url: String::new(),
            ..Default::default()
        };
        assert_eq!(settings.validate(), Err("api_url is required".to_string()));
    }

    #[test]
    fn test_default_url_is_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_credentials_require_both_parts() {
        let mut settings = Settings {
            login: Some("ana".to_string()),
            ..Default::default()
        };
        assert!(settings.credentials().is_none());

        settings.token = Some(String::new());
        assert!(settings.credentials().is_none());

        settings.token = Some("tok".to_string());
        assert_eq!(settings.credentials(), Some(("ana", "tok")));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let settings = Settings::from_file("definitely-not-a-finboard-config").unwrap();
        assert!(settings.api_url.starts_with("http"));
    }
}
