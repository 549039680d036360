use crate::config::toml_config::TomlConfig;
use crate::config::{ClientConfig, DevProxyRule};
use crate::utils::error::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "recipe-fetch")]
#[command(about = "Fetch a tenant's recipe from the recipe API")]
pub struct CliConfig {
    /// Subdomain sent as X-Forwarded-Host
    #[arg(long)]
    pub subdomain: String,

    /// API base URL, overrides API_BASE_URL and the config file
    #[arg(long)]
    pub api_base: Option<String>,

    /// Path appended to the base URL (for example "/api")
    #[arg(long)]
    pub path_suffix: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Forward a relative base URL (e.g. "/api") to http://localhost:8080
    #[arg(long, conflicts_with = "no_dev_proxy")]
    pub dev_proxy: bool,

    /// Never forward through the dev proxy, even if the config file enables it
    #[arg(long)]
    pub no_dev_proxy: bool,

    /// Do not send "Content-Type: application/json"
    #[arg(long)]
    pub no_content_type: bool,

    /// Decode the payload as a recipe envelope and print a summary
    #[arg(long)]
    pub typed: bool,

    /// Print the resolved request URL without sending anything
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 依序套用：預設值 / TOML 檔 → 環境變數 → 命令列參數
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?
                .client_config()
                .with_env_overrides(|key| std::env::var(key).ok())?,
            None => ClientConfig::from_env()?,
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut ClientConfig) {
        if let Some(base) = self.api_base.as_ref().filter(|base| !base.is_empty()) {
            config.api_base = Some(base.clone());
        }

        if let Some(suffix) = &self.path_suffix {
            config.path_suffix = suffix.clone();
        }

        if let Some(seconds) = self.timeout_seconds {
            config.timeout_seconds = Some(seconds);
        }

        if self.no_content_type {
            config.json_content_type = false;
        }

        if self.dev_proxy {
            config.dev_proxy.get_or_insert_with(DevProxyRule::default);
        }

        if self.no_dev_proxy {
            config.dev_proxy = None;
        }
    }
}
