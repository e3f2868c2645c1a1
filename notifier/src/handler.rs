use anyhow::anyhow;
use log::{error, info};
use notify_defs::{
    DeploymentEvent, EventEnvelope, NotificationStatus, ParameterStore, SecretStore,
};
use notify_utils::format_error_chain;
use serde_json::Value;

use crate::orchestrator::Notifier;
use crate::transport::Transport;

/// Handles one raw event payload and produces the function response.
///
/// Filtered events (other sources, categories or event names) are answered
/// successfully so the event bus does not retry them. Every other failure is
/// returned as an error whose text starts with a short status message.
pub async fn handle_payload<P, S, T>(
    notifier: &Notifier<P, S, T>,
    payload: Value,
) -> Result<Value, anyhow::Error>
where
    P: ParameterStore,
    S: SecretStore,
    T: Transport,
{
    let envelope: EventEnvelope = serde_json::from_value(payload)
        .map_err(|e| anyhow!("Event Parsing Error: {}", e))?;
    let event = DeploymentEvent::from(envelope);

    match notifier.notify(&event).await {
        Ok(status) => {
            info!("{}", status.message);
            Ok(serde_json::to_value(status)?)
        }
        Err(e) if e.is_filtered() => {
            info!("Ignoring event '{}': {}", event.id, e);
            Ok(serde_json::to_value(NotificationStatus::new(e.to_string()))?)
        }
        Err(e) => {
            let summary = e.summary();
            let detail = format_error_chain(&e);
            error!("{}", summary);
            error!("Error: {}", detail);
            Err(anyhow!("{}: {}", summary, detail))
        }
    }
}
