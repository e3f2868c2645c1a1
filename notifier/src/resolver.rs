use notify_defs::{ConfigError, ConfigMap, WebhookMap, DEFAULT_SERVICE_KEY};

pub fn resolve_monitoring_target(
    service_name: &str,
    config_map: &ConfigMap,
) -> Result<String, ConfigError> {
    config_map
        .get(service_name)
        .cloned()
        .ok_or_else(|| ConfigError::NotConfigured(service_name.to_string()))
}

/// First webhook of `default-service`, or an empty string when there is none.
pub fn resolve_default_webhook(webhook_map: &WebhookMap) -> String {
    webhook_map
        .get(DEFAULT_SERVICE_KEY)
        .and_then(|webhooks| webhooks.first())
        .cloned()
        .unwrap_or_default()
}

pub fn resolve_additional_webhooks(service_name: &str, webhook_map: &WebhookMap) -> Vec<String> {
    webhook_map.get(service_name).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify_utils::{decode_flat, decode_multi};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_monitoring_target() {
        let config_map = decode_flat(r#"{"my-app": "123456", "other-app": "654321"}"#).unwrap();
        assert_eq!(
            resolve_monitoring_target("my-app", &config_map).unwrap(),
            "123456"
        );
        match resolve_monitoring_target("unknown-app", &config_map) {
            Err(ConfigError::NotConfigured(service)) => assert_eq!(service, "unknown-app"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_resolve_default_webhook() {
        let webhook_map = decode_multi(
            r#"
{
    "default-service": ["http://hooks.example.com/u1", "http://hooks.example.com/u2"],
    "input2": ["d", "e", "f"]
}
"#,
        )
        .unwrap();
        assert_eq!(
            resolve_default_webhook(&webhook_map),
            "http://hooks.example.com/u1"
        );

        let webhook_map = decode_multi(
            r#"
{
    "default-services": ["http://hooks.example.com/u1"],
    "input2": ["d", "e", "f"]
}
"#,
        )
        .unwrap();
        assert_eq!(resolve_default_webhook(&webhook_map), "");

        let webhook_map = decode_multi(r#"{"default-service": []}"#).unwrap();
        assert_eq!(resolve_default_webhook(&webhook_map), "");
    }

    #[test]
    fn test_resolve_additional_webhooks() {
        let webhook_map = decode_multi(
            r#"{"default-service": ["u1"], "my-app": ["hook3", "hook2"]}"#,
        )
        .unwrap();
        assert_eq!(
            resolve_additional_webhooks("my-app", &webhook_map),
            vec!["hook3", "hook2"]
        );
        assert!(resolve_additional_webhooks("other-app", &webhook_map).is_empty());
    }
}
