use std::io::{self, BufRead, Write};

use circumference::cli::Options;
use circumference::harness::Harness;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = Options::parse()?;
    run(options, io::stdin().lock(), io::stdout().lock())
}

fn run(options: Options, input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
    let mut harness = Harness::new(options);
    for line in read_lines(input) {
        harness.process_line(&line?, &mut output)?;
    }
    harness.log_summary();
    Ok(())
}

/// Yields each line of `input` including its terminating `\n` (or, for a
/// final unterminated line, without one) — `graph6::decode` is the one that
/// decides whether a missing newline is an error, not this loop.
fn read_lines(mut input: impl BufRead) -> impl Iterator<Item = io::Result<String>> {
    std::iter::from_fn(move || {
        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(Ok(line)),
            Err(e) => Some(Err(e)),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use circumference::cli::Measure;

    #[test]
    fn forwards_decodable_lines_and_skips_the_rest() {
        let input = b"D??\nnot graph6\nD~{\n".as_slice();
        let options = Options {
            measure: Measure::Circumference,
            difference: false,
            forbidden: None,
            output: None,
            complement: false,
        };
        let mut out = Vec::new();
        run(options, input, &mut out).unwrap();
        assert_eq!(out, b"D??\nD~{\n");
    }
}
