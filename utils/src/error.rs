use std::error::Error;

/// Joins an error and all of its sources into one line, e.g. for tera and
/// reqwest errors whose top-level message hides the actual cause.
pub fn format_error_chain(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
