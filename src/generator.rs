use std::fs::File;
use std::io::Read;

use log::{debug, info};

use crate::bits::BitString;
use crate::error::{ConfigError, Result};
use crate::lfsr::Lfsr;
use crate::report::Report;
use crate::shrinking;
use crate::stats;

/// Validated inputs of one shrinking-generator run. Register 1 supplies the
/// data stream, register 2 the control stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShrinkingGenerator {
    poly1: BitString,
    seed1: BitString,
    poly2: BitString,
    seed2: BitString,
    length: usize,
}

impl ShrinkingGenerator {
    /// Upper bound on the sequence length accepted from the outside.
    pub const MAX_LENGTH: usize = 1 << 24;
    const PARAM_LINES: usize = 5;

    pub fn new(
        poly1: &str,
        seed1: &str,
        poly2: &str,
        seed2: &str,
        length: usize,
    ) -> std::result::Result<Self, ConfigError> {
        let poly1 = BitString::parse("polynomial 1", poly1)?;
        let seed1 = BitString::parse("seed 1", seed1)?;
        let poly2 = BitString::parse("polynomial 2", poly2)?;
        let seed2 = BitString::parse("seed 2", seed2)?;

        for (poly, seed) in [(&poly1, &seed1), (&poly2, &seed2)] {
            if poly.width() != seed.width() {
                return Err(ConfigError::WidthMismatch {
                    polynomial: poly.width(),
                    seed: seed.width(),
                });
            }
        }

        if length == 0 {
            return Err(ConfigError::BadLength(length.to_string()));
        }
        if length > Self::MAX_LENGTH {
            return Err(ConfigError::LengthTooLarge {
                length,
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self {
            poly1,
            seed1,
            poly2,
            seed2,
            length,
        })
    }

    /// Parameters as five lines: polynomial 1, seed 1, polynomial 2, seed 2
    /// and the sequence length. Lines past the fifth are ignored.
    pub fn from_lines(text: &str) -> std::result::Result<Self, ConfigError> {
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        if lines.len() < Self::PARAM_LINES {
            return Err(ConfigError::MissingParams(lines.len()));
        }

        let length = parse_length(lines[4])?;
        Self::new(lines[0], lines[1], lines[2], lines[3], length)
    }

    pub fn read_params(filename: &str) -> Result<Self> {
        let mut f = File::open(filename)?;
        let mut text = String::new();

        let n = f.read_to_string(&mut text)?;
        debug!("Read {} bytes", n);

        let generator = Self::from_lines(&text)?;
        info!("Imported parameters from {}", filename);
        Ok(generator)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Labelled parameter lines, as written at the top of an export.
    pub fn describe(&self) -> String {
        format!(
            "Polynomial G1: {}\nSeed G1: {}\nPolynomial G2: {}\nSeed G2: {}\nSequence length: {}",
            self.poly1, self.seed1, self.poly2, self.seed2, self.length
        )
    }

    /// Decimated output of the two registers, before evaluation.
    pub fn sequence(&self) -> Result<Vec<u8>> {
        let data = self.register_stream(&self.seed1, &self.poly1, "G1")?;
        let control = self.register_stream(&self.seed2, &self.poly2, "G2")?;

        let sequence = shrinking::combine(&data, &control);
        debug!(
            "combined {} of {} bits",
            sequence.len(),
            data.len().min(control.len())
        );
        Ok(sequence)
    }

    fn register_stream(&self, seed: &BitString, poly: &BitString, name: &str) -> Result<Vec<u8>> {
        let mut lfsr = Lfsr::new(seed, poly)?;
        let bits = lfsr.gen(self.length);
        debug!("{}: {} bits, final state {:?}", name, bits.len(), lfsr.state());
        Ok(bits)
    }

    pub fn run(&self) -> Result<Report> {
        let sequence = self.sequence()?;
        let evaluation = stats::evaluate(&sequence, self.seed1.width(), self.seed2.width())?;

        Ok(Report::new(sequence, evaluation))
    }
}

fn parse_length(s: &str) -> std::result::Result<usize, ConfigError> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::BadLength(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainError, Error};
    use crate::stats::Verdict;
    use num_bigint::BigUint;

    fn reference() -> ShrinkingGenerator {
        ShrinkingGenerator::new("1 1 0", "1 0 1", "1 0 1", "0 1 1", 8).unwrap()
    }

    #[test]
    fn it_works() {
        let report = reference().run().unwrap();

        assert_eq!(report.sequence, vec![1, 0, 1, 1, 0]);
        assert_eq!(report.evaluation.period, BigUint::from(28u32));
        assert!((report.evaluation.chi_squared - 0.2).abs() < 1e-9);
        assert_eq!(report.evaluation.critical_value, Some(9.49));
        assert_eq!(report.evaluation.verdict, Verdict::Uniform);
    }

    #[test]
    fn reproducible() {
        let first = reference().run().unwrap();
        for _ in 0..10 {
            assert_eq!(reference().run().unwrap(), first);
        }
    }

    #[test]
    fn sequence_never_exceeds_length() {
        let g = ShrinkingGenerator::new("10011", "11010", "0101", "1001", 50).unwrap();
        assert!(g.sequence().unwrap().len() <= g.length());
    }

    #[test]
    fn all_zero_control_is_domain_error() {
        let g = ShrinkingGenerator::new("110", "101", "111", "000", 8).unwrap();
        assert!(matches!(
            g.run(),
            Err(Error::Domain(DomainError::EmptySequence))
        ));
    }

    #[test]
    fn rejects_bad_config() {
        assert_eq!(
            ShrinkingGenerator::new("11", "101", "101", "011", 8),
            Err(ConfigError::WidthMismatch {
                polynomial: 2,
                seed: 3
            })
        );
        assert!(matches!(
            ShrinkingGenerator::new("110", "1a1", "101", "011", 8),
            Err(ConfigError::NotBinary { ch: 'a', .. })
        ));
        assert_eq!(
            ShrinkingGenerator::new("110", "101", "101", "011", 0),
            Err(ConfigError::BadLength("0".to_string()))
        );
        assert!(matches!(
            ShrinkingGenerator::new("1", "1", "1", "1", ShrinkingGenerator::MAX_LENGTH + 1),
            Err(ConfigError::LengthTooLarge { .. })
        ));
    }

    #[test]
    fn params_from_lines() {
        let text = "1 1 0\n1 0 1\n1 0 1\n0 1 1\n 8 \nignored\n";
        let g = ShrinkingGenerator::from_lines(text).unwrap();
        assert_eq!(g, reference());
    }

    #[test]
    fn params_need_five_lines() {
        assert_eq!(
            ShrinkingGenerator::from_lines("110\n101\n101\n011\n"),
            Err(ConfigError::MissingParams(4))
        );
        assert_eq!(
            ShrinkingGenerator::from_lines("110\n101\n101\n011\nten"),
            Err(ConfigError::BadLength("ten".to_string()))
        );
    }

    #[test]
    fn describe_lists_params() {
        assert_eq!(
            reference().describe(),
            "Polynomial G1: 110\nSeed G1: 101\nPolynomial G2: 101\nSeed G2: 011\nSequence length: 8"
        );
    }
}
