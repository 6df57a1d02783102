use std::fmt;
use std::ops::Deref;

use crate::error::ConfigError;

/// A non-empty run of bits, each stored as a `u8` that is either 0 or 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitString(Vec<u8>);

impl BitString {
    /// Parses a string of `0`/`1` characters. Whitespace between bits is
    /// skipped, anything else is rejected. `name` labels the field in errors.
    pub fn parse(name: &'static str, s: &str) -> Result<Self, ConfigError> {
        let mut bits = Vec::with_capacity(s.len());

        for (pos, ch) in s.chars().enumerate() {
            match ch {
                '0' => bits.push(0),
                '1' => bits.push(1),
                c if c.is_ascii_whitespace() => {}
                c => return Err(ConfigError::NotBinary { name, ch: c, pos }),
            }
        }

        if bits.is_empty() {
            return Err(ConfigError::EmptyBits { name });
        }
        Ok(Self(bits))
    }

    pub fn width(&self) -> usize {
        self.0.len()
    }
}

impl Deref for BitString {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|b| write!(f, "{}", b))
    }
}
