// src/logging/mod.rs
use log::LevelFilter;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Logger already initialised: {0}")]
    AlreadySet(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

fn builder(level: LevelFilter) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(true)
        // stdout carries passwords only
        .target(env_logger::Target::Stderr);

    // RUST_LOG directives refine the configured level
    if let Ok(directives) = std::env::var("RUST_LOG") {
        builder.parse_filters(&directives);
    }

    builder
}

// Install the process-wide logger; call once at the top of main
pub fn init(level: LevelFilter) -> Result<()> {
    builder(level).try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_an_error() {
        let _ = init(LevelFilter::Off);
        let err = init(LevelFilter::Off).unwrap_err();
        assert!(err.to_string().starts_with("Logger already initialised"));
    }
}
