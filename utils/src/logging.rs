use std::env;

use chrono::Local;
use log::LevelFilter;

pub fn setup_logging() -> Result<(), fern::InitError> {
    let level = match env::var("LOG_LEVEL").as_deref() {
        Ok("debug") => LevelFilter::Debug,
        Ok("warn") => LevelFilter::Warn,
        Ok("error") => LevelFilter::Error,
        _ => LevelFilter::Info, // Default to Info if variable is unset or has an unrecognized value
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}] {}: {}",
                Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        // The AWS SDK is chatty at info
        .level_for("aws_config", LevelFilter::Warn)
        .level_for("aws_smithy_runtime", LevelFilter::Warn)
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}
