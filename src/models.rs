// src/models.rs

pub const DEFAULT_PASSWORD_LENGTH: usize = 8;
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 32;

pub const DEFAULT_PASSWORD_COUNT: u64 = 10;
pub const MIN_PASSWORD_COUNT: u64 = 1;
// Largest value a signed long can hold
pub const MAX_PASSWORD_COUNT: u64 = i64::MAX as u64;

// Password generation options, validated once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    pub length: usize,
    pub count: u64,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            count: DEFAULT_PASSWORD_COUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_cli_defaults() {
        let options = GenerationOptions::default();
        assert_eq!(options.length, 8);
        assert_eq!(options.count, 10);
    }

    #[test]
    fn max_count_fits_in_a_signed_long() {
        assert_eq!(MAX_PASSWORD_COUNT, 9_223_372_036_854_775_807);
    }
}
