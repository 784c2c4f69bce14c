use crate::domain::model::Credential;
use crate::utils::error::ServiceError;
use async_trait::async_trait;
use std::time::Duration;

/// An external text-generation capability. The credential travels with every
/// call; implementations keep no per-user state between calls.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn submit(
        &self,
        prompt: &str,
        credential: &Credential,
    ) -> std::result::Result<String, ServiceError>;
}

/// Operator-visible channel for service failures.
pub trait ErrorChannel: Send + Sync {
    fn report(&self, keyword: &str, error: &ServiceError);
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn model(&self) -> &str;
    fn timeout(&self) -> Duration;
}
