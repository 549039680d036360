pub mod recipe_client;

pub use crate::domain::model::{RecipeEnvelope, RecipePayload, TenantId};
pub use crate::domain::ports::{ConfigProvider, RecipeSource};
pub use crate::utils::error::Result;
