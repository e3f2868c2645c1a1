use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const ACCEPTED_SOURCE: &str = "aws.ecs";
pub const ACCEPTED_CATEGORY: &str = "ecs deployment state change";
pub const TRACKED_EVENT_NAME: &str = "SERVICE_DEPLOYMENT_COMPLETED";

/// Raw EventBridge envelope as delivered to the function.
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct EventEnvelope {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "detail-type")]
    pub detail_type: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub account: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub detail: Value,
}

/// Deployment state change event, normalized from the envelope.
#[derive(Clone, Debug, PartialEq)]
pub struct DeploymentEvent {
    pub source: String,
    pub category: String,
    pub region: String,
    pub id: String,
    pub account: String,
    pub timestamp: String,
    pub resource_arn: String,
    pub detail: Value,
}

impl From<EventEnvelope> for DeploymentEvent {
    fn from(envelope: EventEnvelope) -> Self {
        DeploymentEvent {
            source: envelope.source,
            category: envelope.detail_type,
            region: envelope.region,
            id: envelope.id,
            account: envelope.account,
            timestamp: envelope.time,
            resource_arn: envelope.resources.into_iter().next().unwrap_or_default(),
            detail: envelope.detail,
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentDetail {
    #[serde(default)]
    pub event_name: String,
    #[serde(default)]
    pub deployment_id: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub reason: String,
}
