use crate::domain::model::{DevProxyRule, RecipePayload, TenantId};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    /// 覆寫的 API 基底網址；空字串視為未設定
    fn api_base(&self) -> Option<&str>;
    fn path_suffix(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
    fn json_content_type(&self) -> bool;
    fn dev_proxy(&self) -> Option<&DevProxyRule>;
}

#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// 執行一次請求並保留失敗原因
    async fn try_fetch_recipe(&self, tenant: &TenantId) -> Result<RecipePayload>;

    /// 失敗時記錄錯誤並回傳 `None`，呼叫端永遠不會收到錯誤
    async fn fetch_recipe(&self, tenant: &TenantId) -> Option<RecipePayload> {
        match self.try_fetch_recipe(tenant).await {
            Ok(payload) => {
                tracing::info!(tenant = %tenant, "Fetched data: {}", payload.as_value());
                Some(payload)
            }
            Err(e) => {
                tracing::error!(
                    tenant = %tenant,
                    category = ?e.category(),
                    "Recipe fetch failed: {}",
                    e
                );
                None
            }
        }
    }
}
