//! Command-line surface: argument parsing and validation.
//!
//! Parsing itself can't express "mutually exclusive" or "requires" across
//! these particular flags cleanly with `clap`'s derive attributes alone, so
//! [`Cli::parse`] hand-validates the combination once arguments are in, the
//! same way a usage error would be raised in any of this codebase's other
//! command-line front ends.

use clap::Parser;
use thiserror::Error;

/// Which structural measure to compute for each graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Circumference,
    LongestPath,
    InducedCycle,
    InducedPath,
}

/// Raised for flag combinations that are individually well-formed but
/// jointly nonsensical. Reported to stderr with exit code 1, before any
/// input is read.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("-c, -p and -l are mutually exclusive")]
    MultipleMeasures,
    #[error("-f/--forbidden requires -c or -p")]
    ForbiddenRequiresInduced,
    #[error("-f/--forbidden and -o/--output are mutually exclusive")]
    ForbiddenAndOutput,
}

#[derive(Parser, Debug)]
#[command(
    name = "circumference",
    about = "Reads graph6 from stdin and reports circumference / longest path / longest induced cycle / longest induced path."
)]
struct RawArgs {
    /// Report longest induced cycle length instead of circumference.
    #[arg(short = 'c', long = "induced-cycle")]
    induced_cycle: bool,

    /// Report longest induced path length instead of circumference.
    #[arg(short = 'p', long = "induced-path")]
    induced_path: bool,

    /// Report longest (non-induced) path length instead of circumference.
    #[arg(short = 'l', long = "length")]
    length: bool,

    /// Report `n - value` instead of `value`.
    #[arg(short = 'd', long = "difference")]
    difference: bool,

    /// Only pass through graphs with no induced structure of this length.
    /// Requires `-c` or `-p`.
    #[arg(short = 'f', long = "forbidden", value_name = "LEN")]
    forbidden: Option<usize>,

    /// Only pass through graphs whose reported value equals this.
    #[arg(short = 'o', long = "output", value_name = "VAL")]
    output: Option<usize>,

    /// Negate the output predicate.
    #[arg(short = 'C', long = "complement")]
    complement: bool,
}

/// A validated, immutable record of the run's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub measure: Measure,
    pub difference: bool,
    pub forbidden: Option<usize>,
    pub output: Option<usize>,
    pub complement: bool,
}

impl Options {
    /// Parses `std::env::args`, validating the flag combination.
    ///
    /// An unrecognised flag is a usage error like any other and must exit 1
    /// (see `SPEC_FULL.md` §6/§7), so this uses `try_parse` rather than
    /// `clap`'s default `parse`, which would call `clap::Error::exit()`
    /// itself and terminate with clap's own exit code 2 before this
    /// function ever got a chance to return. `--help`/`--version` still
    /// exit 0, since those aren't usage errors.
    pub fn parse() -> Result<Self, UsageError> {
        match RawArgs::try_parse() {
            Ok(raw) => Self::from_raw(raw),
            Err(e) if matches!(
                e.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) =>
            {
                let _ = e.print();
                std::process::exit(0);
            }
            Err(e) => {
                let _ = e.print();
                std::process::exit(1);
            }
        }
    }

    fn from_raw(raw: RawArgs) -> Result<Self, UsageError> {
        let measures_selected = [raw.induced_cycle, raw.induced_path, raw.length]
            .iter()
            .filter(|&&b| b)
            .count();
        if measures_selected > 1 {
            return Err(UsageError::MultipleMeasures);
        }
        let measure = if raw.induced_cycle {
            Measure::InducedCycle
        } else if raw.induced_path {
            Measure::InducedPath
        } else if raw.length {
            Measure::LongestPath
        } else {
            Measure::Circumference
        };

        if raw.forbidden.is_some()
            && !matches!(measure, Measure::InducedCycle | Measure::InducedPath)
        {
            return Err(UsageError::ForbiddenRequiresInduced);
        }
        if raw.forbidden.is_some() && raw.output.is_some() {
            return Err(UsageError::ForbiddenAndOutput);
        }

        Ok(Options {
            measure,
            difference: raw.difference,
            forbidden: raw.forbidden,
            output: raw.output,
            complement: raw.complement,
        })
    }
}
