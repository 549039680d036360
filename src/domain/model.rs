use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 租戶識別 (子網域)。不做任何驗證或正規化，原樣轉送。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TenantId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TenantId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// 後端回傳的 JSON，不檢查 schema。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipePayload(serde_json::Value);

impl RecipePayload {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }

    /// 以後端的標準回應格式解讀 payload
    pub fn envelope(&self) -> Result<RecipeEnvelope> {
        Ok(RecipeEnvelope::deserialize(&self.0)?)
    }
}

impl From<serde_json::Value> for RecipePayload {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeEnvelope {
    pub subdomain: String,
    pub parsed: ParsedSubdomain,
    pub recipe: Recipe,
}

/// 後端從子網域拆出的料理描述，例如 `beef-stew-spicy-for6`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedSubdomain {
    #[serde(default)]
    pub dish: String,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub servings: String,
    #[serde(default)]
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub servings: u32,
    pub cook_time: u32,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
}

/// 本機開發用的轉發規則：`prefix` 開頭的相對路徑改送到 `target`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevProxyRule {
    pub prefix: String,
    pub target: String,
}

impl Default for DevProxyRule {
    fn default() -> Self {
        Self {
            prefix: "/api".to_string(),
            target: "http://localhost:8080".to_string(),
        }
    }
}

impl DevProxyRule {
    /// 將相對路徑轉成 target 上的絕對網址，路徑保持不變
    pub fn forward(&self, path: &str) -> Option<String> {
        let rest = path.strip_prefix(self.prefix.as_str())?;
        if !(rest.is_empty() || rest.starts_with('/') || rest.starts_with('?')) {
            return None;
        }
        Some(format!("{}{}", self.target.trim_end_matches('/'), path))
    }
}
