#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use crate::domain::model::DevProxyRule;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{RecipeError, Result};
use crate::utils::validation::{self, Validate};
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";
pub const API_BASE_ENV: &str = "API_BASE_URL";
pub const PATH_SUFFIX_ENV: &str = "RECIPE_PATH_SUFFIX";
pub const TIMEOUT_ENV: &str = "RECIPE_TIMEOUT_SECONDS";
pub const DEV_PROXY_ENV: &str = "RECIPE_DEV_PROXY";

const MAX_TIMEOUT_SECONDS: u64 = 3600;

impl Validate for DevProxyRule {
    fn validate(&self) -> Result<()> {
        if !self.prefix.starts_with('/') {
            return Err(RecipeError::InvalidConfigValueError {
                field: "dev_proxy.prefix".to_string(),
                value: self.prefix.clone(),
                reason: "Proxy prefix must start with '/'".to_string(),
            });
        }
        validation::validate_url("dev_proxy.target", &self.target)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base: Option<String>,
    pub path_suffix: String,
    pub timeout_seconds: Option<u64>,
    pub json_content_type: bool,
    pub dev_proxy: Option<DevProxyRule>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            path_suffix: String::new(),
            timeout_seconds: None,
            json_content_type: true,
            dev_proxy: None,
        }
    }
}

impl ClientConfig {
    /// 開啟本機開發用的 dev proxy 預設規則
    pub fn with_dev_proxy(mut self) -> Self {
        self.dev_proxy = Some(DevProxyRule::default());
        self
    }

    /// 預設值加上環境變數覆寫
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// 以 `lookup` 讀取環境變數；空字串視為未設定
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(base) = read(API_BASE_ENV) {
            self.api_base = Some(base);
        }

        if let Some(suffix) = read(PATH_SUFFIX_ENV) {
            self.path_suffix = suffix;
        }

        if let Some(raw) = read(TIMEOUT_ENV) {
            let seconds = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| RecipeError::InvalidConfigValueError {
                    field: TIMEOUT_ENV.to_string(),
                    value: raw.clone(),
                    reason: format!("Not a number of seconds: {}", e),
                })?;
            self.timeout_seconds = Some(seconds);
        }

        // dev proxy 只在明確開啟時生效
        if let Some(raw) = read(DEV_PROXY_ENV) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "on" => {
                    self.dev_proxy.get_or_insert_with(DevProxyRule::default);
                }
                "0" | "false" | "off" => self.dev_proxy = None,
                _ => {
                    return Err(RecipeError::InvalidConfigValueError {
                        field: DEV_PROXY_ENV.to_string(),
                        value: raw.clone(),
                        reason: "Expected true/false, on/off or 1/0".to_string(),
                    })
                }
            }
        }

        Ok(self)
    }
}

impl ConfigProvider for ClientConfig {
    fn api_base(&self) -> Option<&str> {
        self.api_base.as_deref()
    }

    fn path_suffix(&self) -> &str {
        &self.path_suffix
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn json_content_type(&self) -> bool {
        self.json_content_type
    }

    fn dev_proxy(&self) -> Option<&DevProxyRule> {
        self.dev_proxy.as_ref()
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base) = self.api_base.as_deref().filter(|b| !b.is_empty()) {
            validation::validate_base_url("api_base", base)?;
        }

        validation::validate_path_suffix("path_suffix", &self.path_suffix)?;

        if let Some(seconds) = self.timeout_seconds {
            validation::validate_range("timeout_seconds", seconds, 1, MAX_TIMEOUT_SECONDS)?;
        }

        if let Some(rule) = &self.dev_proxy {
            rule.validate()?;
        }

        Ok(())
    }
}

/// 解析實際請求的網址：覆寫值 (非空) 或預設值，接上 path suffix；
/// 相對路徑交給 dev proxy 轉發。
pub fn resolve_request_url<C: ConfigProvider + ?Sized>(config: &C) -> Result<String> {
    let base = config
        .api_base()
        .filter(|base| !base.is_empty())
        .unwrap_or(DEFAULT_API_BASE);

    let suffix = config.path_suffix();
    let url = if suffix.is_empty() {
        base.to_string()
    } else {
        format!("{}{}", base.trim_end_matches('/'), suffix)
    };

    if !url.starts_with('/') {
        return Ok(url);
    }

    config
        .dev_proxy()
        .and_then(|rule| rule.forward(&url))
        .ok_or_else(|| RecipeError::ConfigError {
            message: format!("Relative API base '{}' has no matching dev proxy rule", url),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_fallback() {
        let config = ClientConfig::default().with_env_overrides(env(&[])).unwrap();
        assert_eq!(resolve_request_url(&config).unwrap(), DEFAULT_API_BASE);
    }

    #[test]
    fn test_empty_override_falls_back() {
        let config = ClientConfig::default()
            .with_env_overrides(env(&[(API_BASE_ENV, "")]))
            .unwrap();
        assert_eq!(config.api_base, None);
        assert_eq!(resolve_request_url(&config).unwrap(), DEFAULT_API_BASE);

        let config = ClientConfig {
            api_base: Some(String::new()),
            ..ClientConfig::default()
        };
        assert_eq!(resolve_request_url(&config).unwrap(), DEFAULT_API_BASE);
    }

    #[test]
    fn test_override_is_used_verbatim() {
        let config = ClientConfig::default()
            .with_env_overrides(env(&[(API_BASE_ENV, "https://recipes.example.com/v2/")]))
            .unwrap();
        assert_eq!(
            resolve_request_url(&config).unwrap(),
            "https://recipes.example.com/v2/"
        );
    }

    #[test]
    fn test_path_suffix_is_appended() {
        let config = ClientConfig::default()
            .with_env_overrides(env(&[
                (API_BASE_ENV, "https://recipes.example.com/"),
                (PATH_SUFFIX_ENV, "/api"),
            ]))
            .unwrap();
        assert_eq!(
            resolve_request_url(&config).unwrap(),
            "https://recipes.example.com/api"
        );
    }

    #[test]
    fn test_relative_base_goes_through_dev_proxy() {
        let config = ClientConfig {
            api_base: Some("/api".to_string()),
            ..ClientConfig::default().with_dev_proxy()
        };
        assert_eq!(
            resolve_request_url(&config).unwrap(),
            "http://localhost:8080/api"
        );

        let config = ClientConfig {
            api_base: Some("/other".to_string()),
            ..ClientConfig::default().with_dev_proxy()
        };
        assert!(matches!(
            resolve_request_url(&config),
            Err(RecipeError::ConfigError { .. })
        ));

        let config = ClientConfig {
            api_base: Some("/api".to_string()),
            dev_proxy: None,
            ..ClientConfig::default()
        };
        assert!(resolve_request_url(&config).is_err());
    }

    #[test]
    fn test_dev_proxy_is_off_by_default() {
        let config = ClientConfig::default()
            .with_env_overrides(env(&[(API_BASE_ENV, "/api")]))
            .unwrap();
        assert_eq!(config.dev_proxy, None);
        assert!(matches!(
            resolve_request_url(&config),
            Err(RecipeError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_dev_proxy_env_switch() {
        let config = ClientConfig::default()
            .with_env_overrides(env(&[(API_BASE_ENV, "/api"), (DEV_PROXY_ENV, "true")]))
            .unwrap();
        assert_eq!(
            resolve_request_url(&config).unwrap(),
            "http://localhost:8080/api"
        );

        let config = ClientConfig::default()
            .with_dev_proxy()
            .with_env_overrides(env(&[(DEV_PROXY_ENV, "off")]))
            .unwrap();
        assert_eq!(config.dev_proxy, None);

        let result = ClientConfig::default().with_env_overrides(env(&[(DEV_PROXY_ENV, "maybe")]));
        assert!(matches!(
            result,
            Err(RecipeError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_dev_proxy_prefix_boundary() {
        let rule = DevProxyRule::default();
        assert_eq!(
            rule.forward("/api/recipes").as_deref(),
            Some("http://localhost:8080/api/recipes")
        );
        assert_eq!(rule.forward("/apix"), None);
        assert_eq!(rule.forward("/recipes"), None);
    }

    #[test]
    fn test_invalid_timeout_env() {
        let result = ClientConfig::default().with_env_overrides(env(&[(TIMEOUT_ENV, "soon")]));
        assert!(matches!(
            result,
            Err(RecipeError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_validation() {
        assert!(ClientConfig::default().validate().is_ok());

        let config = ClientConfig {
            api_base: Some("not a url".to_string()),
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ClientConfig {
            timeout_seconds: Some(0),
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ClientConfig {
            dev_proxy: Some(DevProxyRule {
                prefix: "api".to_string(),
                target: "http://localhost:8080".to_string(),
            }),
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
