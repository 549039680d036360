use crate::config::{ClientConfig, DevProxyRule};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{RecipeError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid")
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiConfig,
    pub dev_proxy: Option<DevProxyConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub path_suffix: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub json_content_type: Option<bool>,
}

/// `[dev_proxy]` 區段；沒有這個區段或 `enabled = false` 時不轉發
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevProxyConfig {
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(flatten)]
    pub rule: DevProxyRule,
}

fn enabled_by_default() -> bool {
    true
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RecipeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RecipeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_BASE_URL})；未設定的變數換成空字串，
    /// 讓對應欄位回到預設值
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| {
                    tracing::debug!("Environment variable {} is not set", var_name);
                    String::new()
                })
            })
            .into_owned()
    }

    fn enabled_dev_proxy(&self) -> Option<&DevProxyRule> {
        self.dev_proxy
            .as_ref()
            .filter(|proxy| proxy.enabled)
            .map(|proxy| &proxy.rule)
    }

    /// 轉成執行期使用的配置；未設定的欄位沿用預設值
    pub fn client_config(&self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            api_base: self.api.base_url.clone().filter(|base| !base.is_empty()),
            path_suffix: self.api.path_suffix.clone().unwrap_or(defaults.path_suffix),
            timeout_seconds: self.api.timeout_seconds,
            json_content_type: self
                .api
                .json_content_type
                .unwrap_or(defaults.json_content_type),
            dev_proxy: self.enabled_dev_proxy().cloned(),
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn api_base(&self) -> Option<&str> {
        self.api.base_url.as_deref()
    }

    fn path_suffix(&self) -> &str {
        self.api.path_suffix.as_deref().unwrap_or("")
    }

    fn timeout(&self) -> Option<Duration> {
        self.api.timeout_seconds.map(Duration::from_secs)
    }

    fn json_content_type(&self) -> bool {
        self.api.json_content_type.unwrap_or(true)
    }

    fn dev_proxy(&self) -> Option<&DevProxyRule> {
        self.enabled_dev_proxy()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.client_config().validate()
    }
}
