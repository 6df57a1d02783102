use std::process::ExitCode;

use clap::Parser;
use log::debug;

use sgen::{Result, ShrinkingGenerator};

/// Shrinking generator with a chi-squared uniformity test
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Feedback polynomial of the data register G1, e.g. "110"
    #[arg(long, required_unless_present = "params")]
    poly1: Option<String>,

    /// Seed of the data register G1
    #[arg(long, required_unless_present = "params")]
    seed1: Option<String>,

    /// Feedback polynomial of the control register G2
    #[arg(long, required_unless_present = "params")]
    poly2: Option<String>,

    /// Seed of the control register G2
    #[arg(long, required_unless_present = "params")]
    seed2: Option<String>,

    /// Number of bits generated by each register
    #[arg(short, long, default_value_t = 10)]
    length: usize,

    /// Read the five parameters from a file, one per line
    #[arg(short, long, conflicts_with_all = ["poly1", "seed1", "poly2", "seed2", "length"])]
    params: Option<String>,

    /// Write parameters and results to this file
    #[arg(short, long)]
    export: Option<String>,
}

fn load(args: &Args) -> Result<ShrinkingGenerator> {
    if let Some(path) = &args.params {
        return ShrinkingGenerator::read_params(path);
    }

    let field = |v: &Option<String>| v.clone().unwrap_or_default();
    Ok(ShrinkingGenerator::new(
        &field(&args.poly1),
        &field(&args.seed1),
        &field(&args.poly2),
        &field(&args.seed2),
        args.length,
    )?)
}

fn run(args: &Args) -> Result<()> {
    let generator = load(args)?;
    debug!("{:?}", generator);

    let report = generator.run()?;
    print!("{}", report);

    if let Some(path) = &args.export {
        report.export(path, &generator)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use sgen::Error;

    fn parse(argv: &[&str]) -> std::result::Result<Args, clap::Error> {
        Args::try_parse_from(argv)
    }

    #[test]
    fn command_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn params_conflicts_with_flags() {
        assert!(parse(&["sgen", "--params", "p.txt", "--seed1", "1"]).is_err());
        assert!(parse(&["sgen", "--params", "p.txt", "--length", "8"]).is_err());

        let args = parse(&["sgen", "--params", "p.txt"]).unwrap();
        assert_eq!(args.params.as_deref(), Some("p.txt"));
    }

    #[test]
    fn bit_strings_required_without_params() {
        assert!(parse(&["sgen"]).is_err());
        assert!(parse(&["sgen", "--poly1", "1", "--seed1", "1", "--poly2", "1"]).is_err());
    }

    #[test]
    fn length_defaults_to_ten() {
        let args = parse(&[
            "sgen", "--poly1", "1", "--seed1", "1", "--poly2", "1", "--seed2", "1",
        ])
        .unwrap();
        assert_eq!(args.length, 10);
        assert_eq!(args.export, None);
    }

    #[test]
    fn missing_params_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let args = parse(&["sgen", "--params", path.to_str().unwrap()]).unwrap();

        assert!(matches!(load(&args), Err(Error::Io(_))));
    }

    #[test]
    fn loads_params_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.txt");
        std::fs::write(&path, "110\n101\n101\n011\n8\n").unwrap();
        let args = parse(&["sgen", "--params", path.to_str().unwrap()]).unwrap();

        let generator = load(&args).unwrap();
        assert_eq!(generator.length(), 8);
        assert_eq!(generator.run().unwrap().sequence, vec![1, 0, 1, 1, 0]);
    }
}
