use std::collections::VecDeque;

use crate::error::ConfigError;

/// Fibonacci-style shift register of arbitrary width.
///
/// Position 0 is the slot the feedback bit enters; the last position is the
/// bit emitted on the next step.
#[derive(Debug)]
pub struct Lfsr {
    register: VecDeque<u8>,
    taps: Vec<u8>,
}

impl Lfsr {
    pub fn new(seed: &[u8], polynomial: &[u8]) -> Result<Self, ConfigError> {
        if seed.len() != polynomial.len() {
            return Err(ConfigError::WidthMismatch {
                polynomial: polynomial.len(),
                seed: seed.len(),
            });
        }
        if seed.is_empty() {
            return Err(ConfigError::ZeroWidth);
        }
        check_binary("seed", seed)?;
        check_binary("polynomial", polynomial)?;

        Ok(Self {
            register: seed.iter().copied().collect(),
            taps: polynomial.to_vec(),
        })
    }

    pub fn get(&mut self) -> u8 {
        let out = self.register[self.register.len() - 1];
        let feedback = self
            .register
            .iter()
            .zip(&self.taps)
            .filter(|(_, t)| **t == 1)
            .fold(0, |acc, (&r, _)| acc ^ r);

        self.register.pop_back();
        self.register.push_front(feedback);

        out
    }

    pub fn gen(&mut self, length: usize) -> Vec<u8> {
        (0..length).map(|_| self.get()).collect()
    }

    pub fn state(&self) -> Vec<u8> {
        self.register.iter().copied().collect()
    }
}

fn check_binary(name: &'static str, bits: &[u8]) -> Result<(), ConfigError> {
    match bits.iter().position(|&b| b > 1) {
        Some(pos) => Err(ConfigError::NotBinaryValue {
            name,
            value: bits[pos],
            pos,
        }),
        None => Ok(()),
    }
}

/// Runs a fresh register from `seed` for `length` steps and returns the
/// emitted bits.
pub fn generate(seed: &[u8], polynomial: &[u8], length: usize) -> Result<Vec<u8>, ConfigError> {
    Ok(Lfsr::new(seed, polynomial)?.gen(length))
}
