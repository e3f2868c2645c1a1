use notify_defs::{ConfigMap, DecodeError, WebhookMap};

/// Decodes a JSON object whose values are all strings. Anything else fails
/// as a whole, no partial map is returned.
pub fn decode_flat(parameter_string: &str) -> Result<ConfigMap, DecodeError> {
    serde_json::from_str(parameter_string).map_err(|e| DecodeError(e.to_string()))
}

/// Decodes a JSON object whose values are all lists of strings.
pub fn decode_multi(parameter_string: &str) -> Result<WebhookMap, DecodeError> {
    serde_json::from_str(parameter_string).map_err(|e| DecodeError(e.to_string()))
}
