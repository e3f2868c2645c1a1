use log::{error, info, warn};
use notify_defs::{
    ConfigError, DeliveryOutcome, DeploymentEvent, NotificationFields, NotificationStatus,
    NotifierError, ParameterStore, SecretStore,
};
use notify_utils::{decode_flat, decode_multi, format_error_chain};

use crate::config::RunEnv;
use crate::dispatch::Dispatcher;
use crate::event::{log_request, monitoring_deployment, notification_fields, validate_event};
use crate::render::render;
use crate::resolver::{
    resolve_additional_webhooks, resolve_default_webhook, resolve_monitoring_target,
};
use crate::transport::Transport;

/// Everything resolved from the remote stores for one event.
struct Destinations {
    monitoring_target: String,
    api_token: String,
    default_webhook: String,
    additional_webhooks: Vec<String>,
    message_template: String,
}

/// Runs one event through validation, configuration and delivery.
///
/// Validation and configuration failures stop the run before anything is
/// sent. After that, the monitoring leg and every chat webhook are attempted
/// exactly once each, in order, and a failure in one never skips another.
pub struct Notifier<P, S, T>
where
    P: ParameterStore,
    S: SecretStore,
    T: Transport,
{
    parameters: P,
    secrets: S,
    dispatcher: Dispatcher<T>,
    run_env: RunEnv,
}

impl<P, S, T> Notifier<P, S, T>
where
    P: ParameterStore,
    S: SecretStore,
    T: Transport,
{
    pub fn new(parameters: P, secrets: S, dispatcher: Dispatcher<T>, run_env: RunEnv) -> Self {
        Notifier {
            parameters,
            secrets,
            dispatcher,
            run_env,
        }
    }

    pub async fn notify(
        &self,
        event: &DeploymentEvent,
    ) -> Result<NotificationStatus, NotifierError> {
        let (detail, service_name) = validate_event(event)?;
        log_request(event, &detail);

        let destinations = self.resolve_destinations(&service_name).await?;

        let deployment = monitoring_deployment(event, &detail, &self.run_env.deployment_user);
        let outcome = self
            .dispatcher
            .post_monitoring(
                &deployment,
                &self.run_env.new_relic_base_domain,
                &destinations.monitoring_target,
                &destinations.api_token,
            )
            .await;
        let monitoring_failed = !log_outcome(&outcome);
        if monitoring_failed {
            warn!("We will attempt slack notification");
        } else {
            info!("New Relic Payload submitted: {:?}", deployment);
        }

        let fields = notification_fields(event, &detail, &service_name);
        let chat_failed = !self.notify_chat(&destinations, &fields).await;

        if monitoring_failed {
            error!("New Relic submission did not complete");
        }
        if chat_failed {
            error!("Slack submission did not complete for one or more webhooks");
        }
        if monitoring_failed || chat_failed {
            return Err(NotifierError::Incomplete {
                monitoring_failed,
                chat_failed,
            });
        }

        Ok(NotificationStatus::new("Notification complete!"))
    }

    async fn resolve_destinations(
        &self,
        service_name: &str,
    ) -> Result<Destinations, NotifierError> {
        let run_env = &self.run_env;

        let monitoring_map = self
            .read_parameter(&run_env.ssm_parameter_name_new_relic)
            .await?;
        let monitoring_map =
            decode_flat(&monitoring_map).map_err(|source| NotifierError::Decode {
                name: run_env.ssm_parameter_name_new_relic.clone(),
                source,
            })?;

        let webhook_map = self.read_parameter(&run_env.ssm_parameter_name_slack).await?;
        let webhook_map = decode_multi(&webhook_map).map_err(|source| NotifierError::Decode {
            name: run_env.ssm_parameter_name_slack.clone(),
            source,
        })?;

        let default_webhook = resolve_default_webhook(&webhook_map);
        if default_webhook.is_empty() {
            return Err(
                ConfigError::DefaultWebhookMissing(run_env.ssm_parameter_name_slack.clone()).into(),
            );
        }

        let message_template = self
            .read_parameter(&run_env.ssm_parameter_message_slack)
            .await?;

        // A service missing from the monitoring map aborts the whole notification,
        // the chat leg included.
        let monitoring_target = resolve_monitoring_target(service_name, &monitoring_map)
            .inspect_err(|_| {
                warn!(
                    "We did not find a mapping for '{}'. Aborting notification",
                    service_name
                )
            })?;

        let api_token = self
            .secrets
            .get_secret(&run_env.new_relic_api_token)
            .await
            .map_err(|source| ConfigError::Secret {
                name: run_env.new_relic_api_token.clone(),
                source,
            })?;

        let additional_webhooks = resolve_additional_webhooks(service_name, &webhook_map);
        if !additional_webhooks.is_empty() {
            info!(
                "{} additional webhooks defined for service '{}'",
                additional_webhooks.len(),
                service_name
            );
        }

        Ok(Destinations {
            monitoring_target,
            api_token,
            default_webhook,
            additional_webhooks,
            message_template,
        })
    }

    async fn read_parameter(&self, name: &str) -> Result<String, ConfigError> {
        self.parameters
            .get_parameter(name)
            .await
            .map_err(|source| ConfigError::Parameter {
                name: name.to_string(),
                source,
            })
    }

    /// Renders the message once and posts it to the default webhook, then to
    /// each additional one. Returns false if any of them failed.
    async fn notify_chat(&self, destinations: &Destinations, fields: &NotificationFields) -> bool {
        let payload = match render(&destinations.message_template, fields, true) {
            Ok(payload) => payload,
            Err(e) => {
                error!("Error rendering Slack message template: {}", e);
                return false;
            }
        };

        let webhooks = std::iter::once(&destinations.default_webhook)
            .chain(destinations.additional_webhooks.iter());

        let mut all_delivered = true;
        for webhook in webhooks {
            let outcome = self.dispatcher.post_chat(&payload, webhook).await;
            if !log_outcome(&outcome) {
                all_delivered = false;
                warn!("We will attempt other webhooks, if available");
            }
        }
        all_delivered
    }
}

fn log_outcome(outcome: &DeliveryOutcome) -> bool {
    match &outcome.error {
        None => {
            info!(
                "{} post to '{}' succeeded with status: {}",
                outcome.destination_kind, outcome.target, outcome.status_code
            );
            true
        }
        Some(e) => {
            error!(
                "{} post to '{}' failed with status: {}, {}",
                outcome.destination_kind,
                outcome.target,
                outcome.status_code,
                format_error_chain(e)
            );
            false
        }
    }
}
