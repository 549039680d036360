pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{toml_config::TomlConfig, ClientConfig, DevProxyRule};
pub use crate::core::{recipe_client::RecipeClient, RecipePayload, RecipeSource, TenantId};
pub use utils::error::{RecipeError, Result};
