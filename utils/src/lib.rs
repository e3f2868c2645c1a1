mod env;
mod error;
mod json;
mod logging;

pub use env::{
    get_aws_default_region, get_deployment_user, get_http_timeout, get_string_env,
    DEFAULT_DEPLOYMENT_USER, DEFAULT_HTTP_TIMEOUT_SECS,
};
pub use error::format_error_chain;
pub use json::{decode_flat, decode_multi};
pub use logging::setup_logging;
