mod config;
mod dispatch;
mod event;
mod handler;
mod orchestrator;
mod render;
mod resolver;
mod transport;

pub use config::RunEnv;
pub use dispatch::{monitoring_deployment_url, Dispatcher};
pub use event::{
    extract_detail, extract_service_name, log_request, monitoring_deployment,
    notification_fields, validate_category, validate_event, validate_source,
};
pub use handler::handle_payload;
pub use orchestrator::Notifier;
pub use render::{render, BACKQUOTE_MARKER, VAR_BEGIN_MARKER, VAR_END_MARKER};
pub use resolver::{
    resolve_additional_webhooks, resolve_default_webhook, resolve_monitoring_target,
};
pub use transport::{HttpReply, ReqwestTransport, Transport};
