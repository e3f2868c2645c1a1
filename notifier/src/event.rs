use log::info;
use notify_defs::{
    DeploymentDetail, DeploymentEvent, MonitoringDeployment, NotificationFields,
    ValidationError, ACCEPTED_CATEGORY, ACCEPTED_SOURCE, TRACKED_EVENT_NAME,
};

const SERVICE_MARKER: &str = "service/";

pub fn validate_source(event: &DeploymentEvent) -> Result<(), ValidationError> {
    // ignore non ECS events
    if event.source.to_lowercase() != ACCEPTED_SOURCE {
        return Err(ValidationError::UnsupportedSource(event.source.clone()));
    }
    Ok(())
}

pub fn validate_category(event: &DeploymentEvent) -> Result<(), ValidationError> {
    // ignore non deployment ECS events
    if event.category.to_lowercase() != ACCEPTED_CATEGORY {
        return Err(ValidationError::UnsupportedCategory(event.category.clone()));
    }
    Ok(())
}

pub fn extract_detail(event: &DeploymentEvent) -> Result<DeploymentDetail, ValidationError> {
    let detail: DeploymentDetail = serde_json::from_value(event.detail.clone())
        .map_err(|e| ValidationError::MalformedDetail(e.to_string()))?;

    if detail.event_name.is_empty() {
        return Err(ValidationError::MissingField("eventName"));
    }
    if detail.deployment_id.is_empty() {
        return Err(ValidationError::MissingField("deploymentId"));
    }
    if detail.updated_at.is_empty() {
        return Err(ValidationError::MissingField("updatedAt"));
    }

    Ok(detail)
}

/// Everything after the first `service/` in the ARN. Cluster-qualified ARNs
/// (`service/<cluster>/<name>`) keep the cluster part.
pub fn extract_service_name(resource_arn: &str) -> Result<String, ValidationError> {
    match resource_arn.split_once(SERVICE_MARKER) {
        Some((_, service_name)) => Ok(service_name.to_string()),
        None => Err(ValidationError::MalformedArn(resource_arn.to_string())),
    }
}

/// Runs every check an event must pass before anything is read or sent.
/// Returns the decoded detail and the service name.
pub fn validate_event(
    event: &DeploymentEvent,
) -> Result<(DeploymentDetail, String), ValidationError> {
    validate_source(event)?;
    validate_category(event)?;

    let detail = extract_detail(event)?;
    if detail.event_name != TRACKED_EVENT_NAME {
        return Err(ValidationError::UntrackedEvent(detail.event_name));
    }

    let service_name = extract_service_name(&event.resource_arn)?;
    Ok((detail, service_name))
}

pub fn log_request(event: &DeploymentEvent, detail: &DeploymentDetail) {
    info!("Event Source: {}", event.source);
    info!("Event ID: {}", event.id);
    info!("Event Detail Type: {}", event.category);
    info!("Event Region: {}", event.region);
    info!("Event Timestamp: {}", event.timestamp);
    info!("Event Name: '{}'", detail.event_name);
    info!("ECS ARN: {}", event.resource_arn);
}

pub fn notification_fields(
    event: &DeploymentEvent,
    detail: &DeploymentDetail,
    service_name: &str,
) -> NotificationFields {
    NotificationFields {
        service_name: service_name.to_string(),
        deployment_revision: detail.deployment_id.clone(),
        aws_reference: event.id.clone(),
        aws_region: event.region.clone(),
        aws_account: event.account.clone(),
        deployment_timestamp: detail.updated_at.clone(),
        deployment_description: detail.reason.clone(),
    }
}

pub fn monitoring_deployment(
    event: &DeploymentEvent,
    detail: &DeploymentDetail,
    deployment_user: &str,
) -> MonitoringDeployment {
    MonitoringDeployment {
        revision: detail.deployment_id.clone(),
        timestamp: detail.updated_at.clone(),
        user: deployment_user.to_string(),
        description: format!(
            "AWS Account: {}, Region: {}, Deployment ID: {}",
            event.account, event.region, event.id
        ),
        changelog: detail.reason.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify_defs::EventEnvelope;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_event() -> DeploymentEvent {
        let envelope: EventEnvelope = serde_json::from_value(json!({
            "version": "0",
            "id": "ddca6449-b258-46c0-8653-e0e3a6EXAMPLE",
            "detail-type": "ECS Deployment State Change",
            "source": "AWS.ECS",
            "account": "111122223333",
            "time": "2020-05-23T12:31:14Z",
            "region": "us-west-2",
            "resources": ["arn:aws:ecs:us-west-2:111122223333:service/content-api"],
            "detail": {
                "eventType": "INFO",
                "eventName": "SERVICE_DEPLOYMENT_COMPLETED",
                "deploymentId": "ecs-svc/123",
                "updatedAt": "2020-05-23T11:11:11Z",
                "reason": "ECS deployment deploymentId completed."
            }
        }))
        .unwrap();
        DeploymentEvent::from(envelope)
    }

    #[test]
    fn test_source_validate() {
        let mut event = sample_event();
        assert!(validate_source(&event).is_ok());

        event.source = "aws.ecs".to_string();
        assert!(validate_source(&event).is_ok());

        event.source = "AWS.EC2".to_string();
        match validate_source(&event) {
            Err(ValidationError::UnsupportedSource(source)) => assert_eq!(source, "AWS.EC2"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_category_validate() {
        let mut event = sample_event();
        assert!(validate_category(&event).is_ok());

        event.category = "ecs DEPLOYMENT state CHANGE".to_string();
        assert!(validate_category(&event).is_ok());

        event.category = "ECS Task State Change".to_string();
        assert!(matches!(
            validate_category(&event),
            Err(ValidationError::UnsupportedCategory(_))
        ));
    }

    #[test]
    fn test_extract_detail() {
        let detail = extract_detail(&sample_event()).unwrap();
        assert_eq!(
            detail,
            DeploymentDetail {
                event_name: "SERVICE_DEPLOYMENT_COMPLETED".to_string(),
                deployment_id: "ecs-svc/123".to_string(),
                updated_at: "2020-05-23T11:11:11Z".to_string(),
                reason: "ECS deployment deploymentId completed.".to_string(),
            }
        );
    }

    #[test]
    fn test_extract_detail_missing_fields() {
        let mut event = sample_event();
        event.detail = json!({"eventName": "SERVICE_DEPLOYMENT_COMPLETED", "updatedAt": "now"});
        assert!(matches!(
            extract_detail(&event),
            Err(ValidationError::MissingField("deploymentId"))
        ));

        event.detail = json!({"deploymentId": "ecs-svc/1", "updatedAt": "now"});
        assert!(matches!(
            extract_detail(&event),
            Err(ValidationError::MissingField("eventName"))
        ));

        event.detail = json!({"eventName": "X", "deploymentId": "ecs-svc/1", "updatedAt": ""});
        assert!(matches!(
            extract_detail(&event),
            Err(ValidationError::MissingField("updatedAt"))
        ));

        // reason is optional
        event.detail = json!({"eventName": "X", "deploymentId": "ecs-svc/1", "updatedAt": "now"});
        assert_eq!(extract_detail(&event).unwrap().reason, "");
    }

    #[test]
    fn test_extract_detail_malformed() {
        let mut event = sample_event();
        event.detail = serde_json::Value::Null;
        assert!(matches!(
            extract_detail(&event),
            Err(ValidationError::MalformedDetail(_))
        ));

        event.detail = json!({"eventName": 5, "deploymentId": "x", "updatedAt": "y"});
        assert!(matches!(
            extract_detail(&event),
            Err(ValidationError::MalformedDetail(_))
        ));
    }

    #[test]
    fn test_extract_service_name() {
        assert_eq!(
            extract_service_name("arn:aws:ecs:us-west-2:111122223333:service/my-app").unwrap(),
            "my-app"
        );
        assert_eq!(
            extract_service_name("arn:aws:ecs:us-west-2:111122223333:service/prod/my-app")
                .unwrap(),
            "prod/my-app"
        );
        assert!(matches!(
            extract_service_name("arn:aws:ecs:us-west-2:111122223333:cluster/prod"),
            Err(ValidationError::MalformedArn(_))
        ));
        assert!(extract_service_name("").is_err());
    }

    #[test]
    fn test_validate_event_untracked() {
        let mut event = sample_event();
        event.detail["eventName"] = json!("SERVICE_DEPLOYMENT_IN_PROGRESS");
        match validate_event(&event) {
            Err(ValidationError::UntrackedEvent(name)) => {
                assert_eq!(name, "SERVICE_DEPLOYMENT_IN_PROGRESS")
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_validate_event() {
        let (detail, service_name) = validate_event(&sample_event()).unwrap();
        assert_eq!(detail.deployment_id, "ecs-svc/123");
        assert_eq!(service_name, "content-api");
    }

    #[test]
    fn test_notification_fields() {
        let event = sample_event();
        let (detail, service_name) = validate_event(&event).unwrap();
        let fields = notification_fields(&event, &detail, &service_name);

        assert_eq!(fields.service_name, "content-api");
        assert_eq!(fields.deployment_revision, "ecs-svc/123");
        assert_eq!(fields.aws_reference, "ddca6449-b258-46c0-8653-e0e3a6EXAMPLE");
        assert_eq!(fields.aws_account, "111122223333");
        assert_eq!(fields.aws_region, "us-west-2");
        assert_eq!(fields.deployment_timestamp, "2020-05-23T11:11:11Z");
        assert_eq!(
            fields.deployment_description,
            "ECS deployment deploymentId completed."
        );
    }

    #[test]
    fn test_monitoring_deployment() {
        let event = sample_event();
        let detail = extract_detail(&event).unwrap();
        let deployment = monitoring_deployment(&event, &detail, "services@example.com");

        assert_eq!(
            deployment,
            MonitoringDeployment {
                revision: "ecs-svc/123".to_string(),
                timestamp: "2020-05-23T11:11:11Z".to_string(),
                user: "services@example.com".to_string(),
                description: "AWS Account: 111122223333, Region: us-west-2, Deployment ID: ddca6449-b258-46c0-8653-e0e3a6EXAMPLE".to_string(),
                changelog: "ECS deployment deploymentId completed.".to_string(),
            }
        );
    }
}
