// src/core/config.rs
use std::env;
use log::LevelFilter;

pub const DEFAULT_OUTPUT_PREFIX: &str = "post-shuffle: ";

// Runtime settings taken from the environment; length and count come from argv only
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Generation
    pub seed: Option<u64>,
    pub output_prefix: String,

    // Logging
    pub log_level: LevelFilter,

    // Problems found while loading, logged once the logger is up
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            log_level: LevelFilter::Warn,
            warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(val) = lookup("PASSWORD_GENERATOR_SEED") {
            match val.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(e) => config
                    .warnings
                    .push(format!("Ignoring PASSWORD_GENERATOR_SEED '{}': {}", val, e)),
            }
        }

        if let Some(prefix) = lookup("PASSWORD_GENERATOR_PREFIX") {
            config.output_prefix = prefix;
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => config
                    .warnings
                    .push(format!("Unknown log level '{}', using {}", level, config.log_level)),
            }
        }

        config
    }
}
