use async_trait::async_trait;
use aws_config::SdkConfig;
use log::debug;
use notify_defs::{ParameterStore, SecretStore, StoreError};

/// Parameter Store and Secrets Manager clients sharing one SDK configuration.
/// Built once per process and reused across invocations.
#[derive(Clone, Debug)]
pub struct AwsStores {
    ssm: aws_sdk_ssm::Client,
    secrets: aws_sdk_secretsmanager::Client,
}

impl AwsStores {
    pub fn new(config: &SdkConfig) -> Self {
        AwsStores {
            ssm: aws_sdk_ssm::Client::new(config),
            secrets: aws_sdk_secretsmanager::Client::new(config),
        }
    }
}

#[async_trait]
impl ParameterStore for AwsStores {
    async fn get_parameter(&self, name: &str) -> Result<String, StoreError> {
        debug!("Reading SSM parameter '{}'", name);
        let resp = self
            .ssm
            .get_parameter()
            .name(name)
            .with_decryption(false)
            .send()
            .await
            .map_err(|e| {
                let service_error = e.into_service_error();
                if service_error.is_parameter_not_found() {
                    StoreError::NotFound(name.to_string())
                } else {
                    StoreError::Backend(anyhow::Error::new(service_error).context(format!(
                        "Error getting param value from ID '{}'",
                        name
                    )))
                }
            })?;

        match resp.parameter.and_then(|parameter| parameter.value) {
            Some(value) => Ok(value),
            None => Err(StoreError::NotFound(name.to_string())),
        }
    }
}

#[async_trait]
impl SecretStore for AwsStores {
    async fn get_secret(&self, name: &str) -> Result<String, StoreError> {
        debug!("Reading secret '{}'", name);
        let resp = self
            .secrets
            .get_secret_value()
            .secret_id(name)
            .send()
            .await
            .map_err(|e| {
                let service_error = e.into_service_error();
                if service_error.is_resource_not_found_exception() {
                    StoreError::NotFound(name.to_string())
                } else {
                    StoreError::Backend(anyhow::Error::new(service_error).context(format!(
                        "Error getting secret from ID '{}'",
                        name
                    )))
                }
            })?;

        match resp.secret_string {
            Some(secret) => Ok(secret),
            None => Err(StoreError::NotFound(name.to_string())),
        }
    }
}
