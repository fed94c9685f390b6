// src/cli/handlers.rs
use std::io::{self, Write};

use crate::core::config::Config;
use crate::generators::{PasswordBuilder, RandomSource};
use crate::models::GenerationOptions;

// Pick the seed override if there is one, otherwise the clock
pub fn random_source(config: &Config) -> RandomSource {
    match config.seed {
        Some(seed) => {
            log::debug!("Seeding from PASSWORD_GENERATOR_SEED={}", seed);
            RandomSource::from_seed(seed)
        }
        None => {
            let source = RandomSource::from_time();
            log::debug!("Seeding from the clock: {}", source.seed());
            source
        }
    }
}

// Write one prefixed line per password
pub fn handle_generate<W: Write>(
    options: &GenerationOptions,
    config: &Config,
    builder: &mut PasswordBuilder,
    out: &mut W,
) -> io::Result<()> {
    for password in builder.generate(options) {
        writeln!(out, "{}{}", config.output_prefix, password)?;
    }
    out.flush()
}
