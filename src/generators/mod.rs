// src/generators/mod.rs
pub mod charset;
pub mod password;
pub mod random;

pub use password::PasswordBuilder;
pub use random::RandomSource;
