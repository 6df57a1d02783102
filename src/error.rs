use std::io;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name}: bit string is empty")]
    EmptyBits { name: &'static str },

    #[error("{name}: invalid character {ch:?} at position {pos}, only '0' and '1' are allowed")]
    NotBinary {
        name: &'static str,
        ch: char,
        pos: usize,
    },

    #[error("{name}: bit {pos} has value {value}, expected 0 or 1")]
    NotBinaryValue {
        name: &'static str,
        value: u8,
        pos: usize,
    },

    #[error("register width mismatch: polynomial has {polynomial} bits, seed has {seed}")]
    WidthMismatch { polynomial: usize, seed: usize },

    #[error("register width must be at least 1")]
    ZeroWidth,

    #[error("sequence length {0:?} is not a positive integer")]
    BadLength(String),

    #[error("sequence length {length} exceeds the limit of {max}")]
    LengthTooLarge { length: usize, max: usize },

    #[error("parameter file must contain 5 lines, found {0}")]
    MissingParams(usize),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("chi-squared test is undefined for an empty sequence")]
    EmptySequence,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
