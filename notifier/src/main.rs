use std::time::Duration;

use env_aws::{load_sdk_config, AwsStores};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use log::error;
use notifier::{handle_payload, Dispatcher, Notifier, ReqwestTransport, RunEnv};
use notify_utils::setup_logging;
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_logging()?;

    let run_env = match RunEnv::from_env() {
        Ok(run_env) => run_env,
        Err(e) => {
            error!("Environment validation failed: {}", e);
            return Err(e.into());
        }
    };
    run_env.log();

    let sdk_config = load_sdk_config(run_env.aws_region.as_deref()).await;
    let stores = AwsStores::new(&sdk_config);
    let transport = ReqwestTransport::new(Duration::from_secs(run_env.http_timeout_secs))?;

    let notifier = Notifier::new(stores.clone(), stores, Dispatcher::new(transport), run_env);
    let notifier = &notifier;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        let (payload, _context) = event.into_parts();
        handle_payload(notifier, payload).await.map_err(Error::from)
    }))
    .await
}
