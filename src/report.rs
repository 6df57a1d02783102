use std::fmt;
use std::fs::File;
use std::io::{self, Write};

use log::info;

use crate::generator::ShrinkingGenerator;
use crate::stats::Evaluation;

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub sequence: Vec<u8>,
    pub evaluation: Evaluation,
}

impl Report {
    pub fn new(sequence: Vec<u8>, evaluation: Evaluation) -> Self {
        Self {
            sequence,
            evaluation,
        }
    }

    /// Writes the parameters followed by the rendered results.
    pub fn export(&self, filename: &str, generator: &ShrinkingGenerator) -> io::Result<()> {
        let mut f = File::create(filename)?;

        writeln!(f, "{}", generator.describe())?;
        writeln!(f)?;
        writeln!(f, "Results:")?;
        write!(f, "{}", self)?;

        info!("Exported parameters and results to {}", filename);
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits: Vec<String> = self.sequence.iter().map(|b| b.to_string()).collect();
        writeln!(f, "Sequence: [{}]", bits.join(", "))?;
        writeln!(f, "Period: {}", self.evaluation.period)?;
        writeln!(f, "Chi-squared: {:.2}", self.evaluation.chi_squared)?;
        match self.evaluation.critical_value {
            Some(c) => writeln!(f, "Critical value: {}", c)?,
            None => writeln!(f, "Critical value: undefined")?,
        }
        writeln!(f, "Verdict: {}", self.evaluation.verdict)
    }
}
