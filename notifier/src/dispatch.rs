use log::{debug, info};
use notify_defs::{
    DeliveryError, DeliveryOutcome, DestinationKind, MonitoringDeployment,
};
use serde_json::json;

use crate::transport::{HttpReply, Transport};

const CONTENT_TYPE_JSON: (&str, &str) = ("Content-Type", "application/json");

pub fn monitoring_deployment_url(base_domain: &str, application_id: &str) -> String {
    format!(
        "https://{}/v2/applications/{}/deployments.json",
        base_domain, application_id
    )
}

/// Sends one payload to one destination and classifies the result. Never
/// retries; a failed delivery is reported in the returned outcome.
pub struct Dispatcher<T: Transport> {
    transport: T,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T) -> Self {
        Dispatcher { transport }
    }

    pub async fn post_monitoring(
        &self,
        deployment: &MonitoringDeployment,
        base_domain: &str,
        application_id: &str,
        api_token: &str,
    ) -> DeliveryOutcome {
        let kind = DestinationKind::Monitoring;

        let body = match serde_json::to_string(&json!({ "deployment": deployment })) {
            Ok(body) => body,
            Err(e) => {
                return DeliveryOutcome::failed(
                    kind,
                    application_id,
                    DeliveryError::Payload(e.to_string()),
                )
            }
        };

        let url = monitoring_deployment_url(base_domain, application_id);
        let headers = [("Api-Key", api_token), CONTENT_TYPE_JSON];
        let result = self.transport.post(&url, &headers, body).await;
        classify(kind, application_id, result)
    }

    pub async fn post_chat(&self, payload: &str, webhook_url: &str) -> DeliveryOutcome {
        debug!("Slack payload: {}", payload);
        let result = self
            .transport
            .post(webhook_url, &[CONTENT_TYPE_JSON], payload.to_string())
            .await;
        classify(DestinationKind::Chat, webhook_url, result)
    }
}

fn classify(
    kind: DestinationKind,
    target: &str,
    result: Result<HttpReply, DeliveryError>,
) -> DeliveryOutcome {
    match result {
        Ok(reply) => {
            info!("{} response status: {}", kind, reply.status);
            info!("{} response body: {}", kind, reply.body);
            if (200..300).contains(&reply.status) {
                DeliveryOutcome::succeeded(kind, target, reply.status)
            } else {
                DeliveryOutcome::failed(
                    kind,
                    target,
                    DeliveryError::RemoteRejection {
                        status: reply.status,
                        body: reply.body,
                    },
                )
            }
        }
        Err(e) => DeliveryOutcome::failed(kind, target, e),
    }
}
