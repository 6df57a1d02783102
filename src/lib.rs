//! Shrinking generator over two linear-feedback shift registers, with a
//! chi-squared uniformity check of its output.

pub mod bits;
pub mod error;
pub mod generator;
pub mod lfsr;
pub mod report;
pub mod shrinking;
pub mod stats;

pub use self::error::{ConfigError, DomainError, Error, Result};
pub use self::generator::ShrinkingGenerator;
pub use self::report::Report;
