mod config;
mod errors;
mod event;
mod notification;
mod store;

pub use config::{ConfigMap, WebhookMap, DEFAULT_SERVICE_KEY};
pub use errors::{
    ConfigError, DecodeError, DeliveryError, NotifierError, StoreError, TemplateError,
    ValidationError, TRANSPORT_FAILURE_STATUS,
};
pub use event::{
    DeploymentDetail, DeploymentEvent, EventEnvelope, ACCEPTED_CATEGORY, ACCEPTED_SOURCE,
    TRACKED_EVENT_NAME,
};
pub use notification::{
    DeliveryOutcome, DestinationKind, MonitoringDeployment, NotificationFields,
    NotificationStatus,
};
pub use store::{ParameterStore, SecretStore};
