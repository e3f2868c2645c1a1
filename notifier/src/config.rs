use log::info;
use notify_defs::ConfigError;
use notify_utils::{
    get_aws_default_region, get_deployment_user, get_http_timeout, get_string_env,
};

pub const DEFAULT_NEW_RELIC_BASE_DOMAIN: &str = "api.eu.newrelic.com";

/// Process-wide settings, read once from the environment before any event
/// is handled.
#[derive(Clone, Debug, PartialEq)]
pub struct RunEnv {
    pub ssm_parameter_name_new_relic: String,
    pub ssm_parameter_name_slack: String,
    pub ssm_parameter_message_slack: String,
    /// Name of the secret holding the New Relic API key, not the key itself.
    pub new_relic_api_token: String,
    pub new_relic_base_domain: String,
    pub http_timeout_secs: u64,
    pub deployment_user: String,
    pub aws_region: Option<String>,
    pub aws_account_number: Option<String>,
    pub slack_api_token: Option<String>,
    pub local_execution: bool,
}

impl RunEnv {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(RunEnv {
            ssm_parameter_name_new_relic: required("SSM_PARAMETER_NAME_NEW_RELIC")?,
            ssm_parameter_name_slack: required("SSM_PARAMETER_NAME_SLACK")?,
            ssm_parameter_message_slack: required("SSM_PARAMETER_MESSAGE_SLACK")?,
            new_relic_api_token: required("NEW_RELIC_API_TOKEN")?,
            new_relic_base_domain: get_string_env(
                "NEW_RELIC_BASE_DOMAIN",
                DEFAULT_NEW_RELIC_BASE_DOMAIN,
            ),
            http_timeout_secs: get_http_timeout(),
            deployment_user: get_deployment_user(),
            aws_region: get_aws_default_region(),
            aws_account_number: optional("AWS_ACCOUNT_NUMBER"),
            slack_api_token: optional("SLACK_API_TOKEN"),
            local_execution: optional("LOCAL_EXECUTION").is_some(),
        })
    }

    pub fn log(&self) {
        info!(
            "SSM New Relic Parameter Used: {}",
            self.ssm_parameter_name_new_relic
        );
        info!("SSM Slack Parameter Used: {}", self.ssm_parameter_name_slack);
        info!(
            "SSM Slack Message Parameter Used: {}",
            self.ssm_parameter_message_slack
        );
        info!(
            "New Relic API Token Secret Name: {}",
            self.new_relic_api_token
        );
        if let Some(slack_api_token) = &self.slack_api_token {
            info!("Slack Token Secret Name: {}", slack_api_token);
        }
        info!(
            "New Relic Base Domain for API Calls: {}",
            self.new_relic_base_domain
        );
        if let Some(account) = &self.aws_account_number {
            info!("AWS Account Number: {}", account);
        }
        info!(
            "AWS Region: {}",
            self.aws_region.as_deref().unwrap_or("<sdk default>")
        );
        info!("HTTP Timeout: {}s", self.http_timeout_secs);
        info!("Deployment User: {}", self.deployment_user);
        info!("Local Execution: {}", self.local_execution);
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    optional(name).ok_or(ConfigError::MissingEnvVar(name))
}

fn optional(name: &str) -> Option<String> {
    let value = get_string_env(name, "");
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
