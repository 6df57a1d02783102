//! Period estimate and Pearson's chi-squared uniformity test for the
//! combined sequence.

use std::collections::BTreeMap;
use std::fmt;

use log::debug;
use num_bigint::BigUint;
use num_traits::One;

use crate::error::{ConfigError, DomainError, Result};

/// Size of the binary alphabet the expected counts are computed against.
pub const ALPHABET_SIZE: usize = 2;

/// Largest key of the critical value table. Larger keys are clamped to it.
pub const MAX_TABLE_KEY: usize = 16;

/// Chi-squared critical values at the 0.05 significance level, for keys
/// 1 through 16.
const CRITICAL_VALUES: [f64; MAX_TABLE_KEY] = [
    3.84, 5.99, 7.82, 9.49, 11.07, 12.59, 14.07, 15.51, 16.92, 18.31, 19.68, 21.03, 22.36, 23.69,
    25.0, 26.3,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Uniform,
    NotUniform,
    Undefined,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Uniform => "uniform distribution",
            Verdict::NotUniform => "not a uniform distribution",
            Verdict::Undefined => "undefined test",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub period: BigUint,
    pub chi_squared: f64,
    /// Distinct observed symbols minus one.
    pub degrees_of_freedom: usize,
    /// Key the critical value was looked up with: sequence length minus one.
    pub table_key: usize,
    pub critical_value: Option<f64>,
    pub verdict: Verdict,
}

impl Evaluation {
    pub fn is_uniform(&self) -> bool {
        self.verdict == Verdict::Uniform
    }
}

/// Maximum period of a shrinking generator built from registers of the given
/// widths: `(2^width1 - 1) * 2^(width2 - 1)`.
pub fn period(width1: usize, width2: usize) -> std::result::Result<BigUint, ConfigError> {
    if width1 == 0 || width2 == 0 {
        return Err(ConfigError::ZeroWidth);
    }
    let data = (BigUint::one() << width1) - 1u32;
    let control = BigUint::one() << (width2 - 1);
    Ok(data * control)
}

pub fn frequencies(sequence: &[u8]) -> BTreeMap<u8, usize> {
    let mut counts = BTreeMap::new();
    for &b in sequence {
        *counts.entry(b).or_insert(0) += 1;
    }
    counts
}

/// Returns the statistic and the observed degrees of freedom.
///
/// Only symbols that actually occur contribute to the sum.
pub fn chi_squared(
    sequence: &[u8],
    alphabet_size: usize,
) -> std::result::Result<(f64, usize), DomainError> {
    if sequence.is_empty() {
        return Err(DomainError::EmptySequence);
    }

    let counts = frequencies(sequence);
    let expected = sequence.len() as f64 / alphabet_size as f64;
    let chi: f64 = counts
        .values()
        .map(|&c| (c as f64 - expected).powi(2) / expected)
        .sum();

    Ok((chi, counts.len() - 1))
}

/// Table lookup with keys above `MAX_TABLE_KEY` clamped down. Key 0 has no
/// entry.
pub fn critical_value(key: usize) -> Option<f64> {
    match key {
        0 => None,
        k => Some(CRITICAL_VALUES[k.min(MAX_TABLE_KEY) - 1]),
    }
}

pub fn evaluate(sequence: &[u8], width1: usize, width2: usize) -> Result<Evaluation> {
    let period = period(width1, width2)?;
    let (chi_squared, degrees_of_freedom) = chi_squared(sequence, ALPHABET_SIZE)?;

    // The table is indexed by sample size, independently of the observed
    // degrees of freedom.
    let table_key = sequence.len() - 1;
    let critical_value = critical_value(table_key);

    let verdict = match critical_value {
        _ if degrees_of_freedom == 0 => Verdict::Undefined,
        None => Verdict::Undefined,
        Some(c) if chi_squared < c => Verdict::Uniform,
        Some(_) => Verdict::NotUniform,
    };
    debug!(
        "chi2 {:.4}, df {}, key {}, critical {:?} -> {:?}",
        chi_squared, degrees_of_freedom, table_key, critical_value, verdict
    );

    Ok(Evaluation {
        period,
        chi_squared,
        degrees_of_freedom,
        table_key,
        critical_value,
        verdict,
    })
}
