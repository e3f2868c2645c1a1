use async_trait::async_trait;

use crate::StoreError;

/// Key/value lookup for configuration blobs and message templates.
#[async_trait]
pub trait ParameterStore: Send + Sync {
    async fn get_parameter(&self, name: &str) -> Result<String, StoreError>;
}

#[async_trait]
pub trait SecretStore: Send + Sync {
    async fn get_secret(&self, name: &str) -> Result<String, StoreError>;
}

#[async_trait]
impl<T: ParameterStore + ?Sized> ParameterStore for std::sync::Arc<T> {
    async fn get_parameter(&self, name: &str) -> Result<String, StoreError> {
        (**self).get_parameter(name).await
    }
}

#[async_trait]
impl<T: SecretStore + ?Sized> SecretStore for std::sync::Arc<T> {
    async fn get_secret(&self, name: &str) -> Result<String, StoreError> {
        (**self).get_secret(name).await
    }
}
