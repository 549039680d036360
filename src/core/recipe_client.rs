use crate::config::resolve_request_url;
use crate::core::{ConfigProvider, RecipePayload, RecipeSource, Result, TenantId};
use crate::utils::error::RecipeError;
use async_trait::async_trait;
use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Client;

pub const X_FORWARDED_HOST: HeaderName = HeaderName::from_static("x-forwarded-host");

const MAX_ERROR_BODY_CHARS: usize = 512;

/// 以 `X-Forwarded-Host` 帶上租戶識別，向後端取得 recipe
pub struct RecipeClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> RecipeClient<C> {
    pub fn new(config: C) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: C, client: Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// 實際會送出的網址，不發出請求
    pub fn request_url(&self) -> Result<String> {
        resolve_request_url(&self.config)
    }

    fn forwarded_host(tenant: &TenantId) -> Result<HeaderValue> {
        // 非 ASCII 也原樣送出；只有控制字元會被拒絕
        HeaderValue::from_bytes(tenant.as_str().as_bytes()).map_err(|e| {
            RecipeError::InvalidTenant {
                value: tenant.to_string(),
                reason: e.to_string(),
            }
        })
    }
}

#[async_trait]
impl<C: ConfigProvider> RecipeSource for RecipeClient<C> {
    async fn try_fetch_recipe(&self, tenant: &TenantId) -> Result<RecipePayload> {
        let url = self.request_url()?;
        tracing::info!(tenant = %tenant, "Fetching recipe from: {}", url);

        let mut request = self
            .client
            .get(&url)
            .header(X_FORWARDED_HOST, Self::forwarded_host(tenant)?);

        if self.config.json_content_type() {
            request = request.header(CONTENT_TYPE, "application/json");
        }

        // 沒有設定時沿用 reqwest 的預設行為
        if let Some(timeout) = self.config.timeout() {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let body = response.text().await?;
        if !status.is_success() {
            return Err(RecipeError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let value: serde_json::Value = serde_json::from_str(&body)?;
        Ok(RecipePayload::new(value))
    }
}
