use std::collections::HashMap;

/// Reserved webhook key holding the fallback chat destination.
pub const DEFAULT_SERVICE_KEY: &str = "default-service";

/// Service name to a single value, e.g. the monitoring application id.
pub type ConfigMap = HashMap<String, String>;

/// Service name to its webhook URLs, in configured order.
pub type WebhookMap = HashMap<String, Vec<String>>;
