use aws_config::meta::region::RegionProviderChain;
use aws_config::{Region, SdkConfig};
use log::info;

/// Loads the shared SDK configuration. An explicit region wins over the
/// default provider chain.
pub async fn load_sdk_config(region: Option<&str>) -> SdkConfig {
    let region_provider = match region {
        Some(region) => RegionProviderChain::first_try(Region::new(region.to_string())),
        None => RegionProviderChain::default_provider(),
    };
    let config = aws_config::from_env().region(region_provider).load().await;
    info!(
        "AWS SDK configured for region: {}",
        config
            .region()
            .map(|r| r.to_string())
            .unwrap_or_else(|| "<unset>".to_string())
    );
    config
}

/// Builds the ECS service ARN that `extract_service_name` takes apart.
pub fn ecs_service_arn(region: &str, account: &str, service_name: &str) -> String {
    format!(
        "arn:aws:ecs:{}:{}:service/{}",
        region, account, service_name
    )
}
