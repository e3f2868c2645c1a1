use std::env;

pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_DEPLOYMENT_USER: &str = "services@graphcms.com";

/// Reads `name`, treating an unset or empty variable as `default_value`.
pub fn get_string_env(name: &str, default_value: &str) -> String {
    match env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => default_value.to_string(),
    }
}

/// Per-request HTTP timeout in seconds from `HTTP_TIMEOUT`. Zero is not a
/// usable timeout and falls back to the default like any other bad value.
pub fn get_http_timeout() -> u64 {
    parse_timeout(&get_string_env("HTTP_TIMEOUT", ""))
}

fn parse_timeout(value: &str) -> u64 {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS)
}

pub fn get_deployment_user() -> String {
    get_string_env("DEPLOYMENT_USER", DEFAULT_DEPLOYMENT_USER)
}

/// `AWS_REGION`, falling back to `AWS_DEFAULT_REGION`.
pub fn get_aws_default_region() -> Option<String> {
    let region = get_string_env("AWS_REGION", "");
    if !region.is_empty() {
        return Some(region);
    }
    let region = get_string_env("AWS_DEFAULT_REGION", "");
    if region.is_empty() {
        None
    } else {
        Some(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_get_string_env() {
        env::set_var("NOTIFY_UTILS_TEST_VAR", "value");
        assert_eq!(get_string_env("NOTIFY_UTILS_TEST_VAR", ""), "value");
        env::remove_var("NOTIFY_UTILS_TEST_VAR");

        assert_eq!(
            get_string_env("NOTIFY_UTILS_TEST_VAR_MISSING", "missing"),
            "missing"
        );

        env::set_var("NOTIFY_UTILS_TEST_VAR_EMPTY", "");
        assert_eq!(get_string_env("NOTIFY_UTILS_TEST_VAR_EMPTY", "fallback"), "fallback");
        env::remove_var("NOTIFY_UTILS_TEST_VAR_EMPTY");
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout(""), 15);
        assert_eq!(parse_timeout("999"), 999);
        assert_eq!(parse_timeout(" 30 "), 30);
        assert_eq!(parse_timeout("soon"), 15);
        assert_eq!(parse_timeout("-5"), 15);
        assert_eq!(parse_timeout("0"), 15);
        assert_eq!(parse_timeout("1"), 1);
    }
}
