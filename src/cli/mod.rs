// src/cli/mod.rs
use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::Parser;

use crate::models::GenerationOptions;

pub mod handlers;
pub mod parse;

pub use parse::ArgumentError;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, allow_negative_numbers = true)]
pub struct Args {
    /// Password length, 8 to 32 characters
    #[arg(value_name = "LENGTH", allow_hyphen_values = true)]
    pub length: Option<String>,

    /// Number of passwords to generate
    #[arg(value_name = "COUNT", allow_hyphen_values = true)]
    pub count: Option<String>,
}

impl Args {
    // Apply defaults and validate; length is checked before count
    pub fn into_options(self) -> Result<GenerationOptions, ArgumentError> {
        let mut options = GenerationOptions::default();

        if let Some(length) = &self.length {
            options.length = parse::parse_length(length)?;
        }
        if let Some(count) = &self.count {
            options.count = parse::parse_count(count)?;
        }

        Ok(options)
    }
}

/// What the command line asked for.
#[derive(Debug)]
pub enum Invocation {
    Generate(GenerationOptions),
    // --help or --version, already rendered by clap
    Info(clap::Error),
}

// Program name plus length and count
const MAX_TOKENS: usize = 3;

const INFO_FLAGS: &[&str] = &["-h", "--help", "-V", "--version"];

// Checks clap cannot make on its own: it swallows a bare `--`, and with
// hyphen values allowed it would read `--help` after LENGTH as the count
fn check_raw_tokens(tokens: &[OsString]) -> Result<Option<Invocation>, ArgumentError> {
    if tokens.len() > MAX_TOKENS {
        return Err(ArgumentError::Usage);
    }

    if let Some(flag) = tokens
        .iter()
        .skip(1)
        .find(|t| INFO_FLAGS.iter().any(|f| t.as_os_str() == *f))
    {
        let program = tokens[0].clone();
        return match Args::try_parse_from([program, flag.clone()]) {
            Err(e) => Ok(Some(Invocation::Info(e))),
            Ok(_) => Err(ArgumentError::Usage),
        };
    }

    match tokens.iter().skip(1).position(|t| t.as_os_str() == "--") {
        None => Ok(None),
        Some(0) => Err(ArgumentError::NoConversion("--".to_string())),
        Some(_) => {
            parse::parse_length(&tokens[1].to_string_lossy())?;
            Err(ArgumentError::NoConversion("--".to_string()))
        }
    }
}

pub fn parse_from<I, T>(tokens: I) -> Result<Invocation, ArgumentError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let tokens: Vec<OsString> = tokens.into_iter().map(Into::into).collect();
    if let Some(invocation) = check_raw_tokens(&tokens)? {
        return Ok(invocation);
    }

    let args = match Args::try_parse_from(tokens) {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return Ok(Invocation::Info(e));
        }
        Err(e) => {
            log::debug!("Rejected command line: {}", e);
            return Err(ArgumentError::Usage);
        }
    };
    log::debug!("Command line args: {:?}", args);

    args.into_options().map(Invocation::Generate)
}
