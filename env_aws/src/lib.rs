mod stores;
mod utils;

pub use stores::AwsStores;
pub use utils::{ecs_service_arn, load_sdk_config};
