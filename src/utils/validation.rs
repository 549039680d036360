use crate::utils::error::{RecipeError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(RecipeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(RecipeError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(RecipeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// 基底 URL 可以是絕對網址，或交給 dev proxy 轉發的相對路徑 (例如 `/api`)
pub fn validate_base_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.starts_with('/') {
        return Ok(());
    }
    validate_url(field_name, url_str)
}

pub fn validate_path_suffix(field_name: &str, suffix: &str) -> Result<()> {
    if suffix.is_empty() {
        return Ok(());
    }

    if !suffix.starts_with('/') {
        return Err(RecipeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: suffix.to_string(),
            reason: "Path suffix must start with '/'".to_string(),
        });
    }

    if suffix.contains(['?', '#']) || suffix.chars().any(char::is_whitespace) {
        return Err(RecipeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: suffix.to_string(),
            reason: "Path suffix may not contain whitespace, '?' or '#'".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(RecipeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
