use serde::{Deserialize, Serialize};

use crate::DeliveryError;

/// Values available to chat message templates. Serialized names are the
/// template field names.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct NotificationFields {
    #[serde(rename = "ServiceName")]
    pub service_name: String,
    #[serde(rename = "DeploymentRevision")]
    pub deployment_revision: String,
    #[serde(rename = "AWSReference")]
    pub aws_reference: String,
    #[serde(rename = "AWSRegion")]
    pub aws_region: String,
    #[serde(rename = "AWSAccount")]
    pub aws_account: String,
    #[serde(rename = "DeploymentTimestamp")]
    pub deployment_timestamp: String,
    #[serde(rename = "DeploymentDescription")]
    pub deployment_description: String,
}

/// Deployment record submitted to the monitoring API, wrapped under `deployment`.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct MonitoringDeployment {
    pub revision: String,
    pub timestamp: String,
    pub user: String,
    pub description: String,
    pub changelog: String,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DestinationKind {
    Monitoring,
    Chat,
}

impl std::fmt::Display for DestinationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DestinationKind::Monitoring => write!(f, "New Relic"),
            DestinationKind::Chat => write!(f, "Slack"),
        }
    }
}

#[derive(Debug)]
pub struct DeliveryOutcome {
    pub destination_kind: DestinationKind,
    pub target: String,
    pub status_code: u16,
    pub error: Option<DeliveryError>,
}

impl DeliveryOutcome {
    pub fn succeeded(destination_kind: DestinationKind, target: &str, status_code: u16) -> Self {
        DeliveryOutcome {
            destination_kind,
            target: target.to_string(),
            status_code,
            error: None,
        }
    }

    pub fn failed(destination_kind: DestinationKind, target: &str, error: DeliveryError) -> Self {
        DeliveryOutcome {
            destination_kind,
            target: target.to_string(),
            status_code: error.status_code(),
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct NotificationStatus {
    pub message: String,
}

impl NotificationStatus {
    pub fn new(message: impl Into<String>) -> Self {
        NotificationStatus {
            message: message.into(),
        }
    }
}
