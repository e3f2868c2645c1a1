use thiserror::Error;

/// Status reported for a delivery that never got an HTTP response.
pub const TRANSPORT_FAILURE_STATUS: u16 = 0;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Event '{0}' received. We only respond to 'aws.ecs' events")]
    UnsupportedSource(String),

    #[error("ECS Event '{0}' received. We only respond to 'ECS Deployment State Change' events")]
    UnsupportedCategory(String),

    #[error("Unexpected error unmarshaling event details: {0}")]
    MalformedDetail(String),

    #[error("'{0}' attribute not found on payload")]
    MissingField(&'static str),

    #[error("We received '{0}' which we don't track. We only want 'SERVICE_DEPLOYMENT_COMPLETED'")]
    UntrackedEvent(String),

    #[error("Input '{0}' did not have expected 'service/' prefix")]
    MalformedArn(String),
}

impl ValidationError {
    /// Events we simply do not care about, as opposed to events that are broken.
    pub fn is_filtered(&self) -> bool {
        matches!(
            self,
            ValidationError::UnsupportedSource(_)
                | ValidationError::UnsupportedCategory(_)
                | ValidationError::UntrackedEvent(_)
        )
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Env var {0} is missing")]
    MissingEnvVar(&'static str),

    #[error("ECS service '{0}' is not configured for notification")]
    NotConfigured(String),

    #[error("Webhook service for 'default-service' not defined in '{0}'")]
    DefaultWebhookMissing(String),

    #[error("Error reading parameter '{name}'")]
    Parameter {
        name: String,
        #[source]
        source: StoreError,
    },

    #[error("Error reading secret '{name}'")]
    Secret {
        name: String,
        #[source]
        source: StoreError,
    },
}

#[derive(Error, Debug, PartialEq)]
#[error("Could not decode parameter string: {0}")]
pub struct DecodeError(pub String);

#[derive(Error, Debug, PartialEq)]
pub enum TemplateError {
    #[error("error parsing message template: {0}")]
    Syntax(String),

    #[error("error applying values to message template: {0}")]
    Execution(String),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("'{0}' not found")]
    NotFound(String),

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("remote rejected the request with status {status}: {body}")]
    RemoteRejection { status: u16, body: String },

    #[error("no response received: {0}")]
    Transport(String),

    #[error("could not build request payload: {0}")]
    Payload(String),
}

impl DeliveryError {
    pub fn status_code(&self) -> u16 {
        match self {
            DeliveryError::RemoteRejection { status, .. } => *status,
            _ => TRANSPORT_FAILURE_STATUS,
        }
    }
}

/// Terminal failure of one notifier run.
#[derive(Error, Debug)]
pub enum NotifierError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Error decoding parameter '{name}'")]
    Decode {
        name: String,
        #[source]
        source: DecodeError,
    },

    #[error("One or more notification failures: {}", failed_legs(.monitoring_failed, .chat_failed))]
    Incomplete {
        monitoring_failed: bool,
        chat_failed: bool,
    },
}

impl NotifierError {
    /// Short human readable status for the caller. Details live in the log stream.
    pub fn summary(&self) -> String {
        match self {
            NotifierError::Validation(_) => "Error validating execution setup".to_string(),
            NotifierError::Config(ConfigError::MissingEnvVar(_)) => {
                "Environment validation failed".to_string()
            }
            NotifierError::Config(ConfigError::NotConfigured(_)) => {
                "ECS Service not configured for notification".to_string()
            }
            NotifierError::Config(ConfigError::DefaultWebhookMissing(_)) => {
                "Default Slack Webhook not defined".to_string()
            }
            NotifierError::Config(ConfigError::Parameter { .. }) => {
                "SSM Parameter Read Failure".to_string()
            }
            NotifierError::Config(ConfigError::Secret { .. }) => {
                "New Relic Token Secret Read Failure".to_string()
            }
            NotifierError::Decode { .. } => "SSM Parameter Decode Failure".to_string(),
            NotifierError::Incomplete { .. } => "Notification incomplete!".to_string(),
        }
    }

    pub fn is_filtered(&self) -> bool {
        matches!(self, NotifierError::Validation(e) if e.is_filtered())
    }
}

fn failed_legs(monitoring_failed: &bool, chat_failed: &bool) -> String {
    let mut legs = vec![];
    if *monitoring_failed {
        legs.push("New Relic submission did not complete");
    }
    if *chat_failed {
        legs.push("Slack submission did not complete for one or more webhooks");
    }
    legs.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_incomplete_lists_failed_legs() {
        let err = NotifierError::Incomplete {
            monitoring_failed: true,
            chat_failed: false,
        };
        assert_eq!(
            err.to_string(),
            "One or more notification failures: New Relic submission did not complete"
        );
        assert_eq!(err.summary(), "Notification incomplete!");

        let err = NotifierError::Incomplete {
            monitoring_failed: true,
            chat_failed: true,
        };
        assert!(err.to_string().contains("New Relic"));
        assert!(err.to_string().contains("Slack"));
    }

    #[test]
    fn test_filtered_validation_errors() {
        assert!(ValidationError::UnsupportedSource("aws.ec2".to_string()).is_filtered());
        assert!(ValidationError::UntrackedEvent("SERVICE_TASK_STARTED".to_string()).is_filtered());
        assert!(!ValidationError::MissingField("eventName").is_filtered());
        assert!(!ValidationError::MalformedArn("arn".to_string()).is_filtered());

        let err: NotifierError = ConfigError::NotConfigured("my-app".to_string()).into();
        assert!(!err.is_filtered());
    }

    #[test]
    fn test_delivery_status_code() {
        let rejected = DeliveryError::RemoteRejection {
            status: 403,
            body: "forbidden".to_string(),
        };
        assert_eq!(rejected.status_code(), 403);
        let transport = DeliveryError::Transport("connection refused".to_string());
        assert_eq!(transport.status_code(), TRANSPORT_FAILURE_STATUS);
    }
}
