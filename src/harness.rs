//! Per-graph frequency aggregation, output filtering and summary logging —
//! the layer between the raw [`engine`](crate::engine) measures and the
//! line-at-a-time CLI loop in `main`.

use std::io::{self, Write};
use std::time::Instant;

use log::{info, warn};

use crate::bitset::{Bitset, WIDTH};
use crate::cli::{Measure, Options};
use crate::engine::{
    circumference, longest_induced_cycle_length, longest_induced_path_length, longest_path_length,
};
use crate::graph::Graph;
use crate::graph6::{self, Graph6Error};

/// Drives one run: decodes each input line, computes the selected measure,
/// tallies the result, and forwards the line verbatim when it passes the
/// filter predicate.
pub struct Harness {
    options: Options,
    freq: Vec<u64>,
    processed: u64,
    skipped: u64,
    emitted: u64,
    started: Instant,
}

impl Harness {
    pub fn new(options: Options) -> Self {
        Harness {
            options,
            freq: vec![0u64; WIDTH + 1],
            processed: 0,
            skipped: 0,
            emitted: 0,
            started: Instant::now(),
        }
    }

    /// Processes one input line (including its trailing newline). Decode
    /// failures are logged and counted, never propagated.
    pub fn process_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<()> {
        let graph = match graph6::decode(line) {
            Ok(g) => g,
            Err(e) => {
                self.note_skip(&e);
                return Ok(());
            }
        };

        self.processed += 1;
        let (value, induced_freq) = self.measure(&graph);
        let reported = self.reported_value(graph.order(), value);
        self.freq[reported] += 1;

        if self.should_output(reported, induced_freq.as_deref()) {
            self.emitted += 1;
            out.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    /// Logs the end-of-run summary (frequency table and counts) at `info`
    /// level, matching how the rest of this codebase reports on completion
    /// rather than printing straight to stdout.
    pub fn log_summary(&self) {
        info!(
            "processed {} graphs, skipped {}, emitted {}, elapsed {:?}",
            self.processed,
            self.skipped,
            self.emitted,
            self.started.elapsed()
        );
        for (value, &count) in self.freq.iter().enumerate() {
            if count > 0 {
                info!("value {value}: {count}");
            }
        }
    }

    fn note_skip(&mut self, err: &Graph6Error) {
        self.skipped += 1;
        warn!("skipping invalid graph: {err}");
    }

    /// Computes the selected measure. For the two induced measures, also
    /// returns the per-graph induced-length frequency table the walker
    /// filled in along the way, used by `-f`/`--forbidden`.
    fn measure(&self, g: &Graph) -> (usize, Option<Vec<u64>>) {
        match self.options.measure {
            Measure::Circumference => (circumference(g, Bitset::empty()), None),
            Measure::LongestPath => (longest_path_length(g), None),
            Measure::InducedCycle => {
                let mut freq = vec![0u64; WIDTH + 1];
                let value = longest_induced_cycle_length(g, &mut freq);
                (value, Some(freq))
            }
            Measure::InducedPath => {
                let mut freq = vec![0u64; WIDTH + 1];
                let value = longest_induced_path_length(g, &mut freq);
                (value, Some(freq))
            }
        }
    }

    fn reported_value(&self, n: usize, value: usize) -> usize {
        if self.options.difference {
            n - value
        } else {
            value
        }
    }

    fn should_output(&self, reported: usize, induced_freq: Option<&[u64]>) -> bool {
        let accept = if let Some(len) = self.options.forbidden {
            // `induced_freq` is only `None` when the measure isn't induced,
            // which `cli::Options` already rejects when `-f` is set.
            let freq = induced_freq.expect("forbidden requires an induced measure");
            freq.get(len).copied().unwrap_or(0) == 0
        } else if let Some(target) = self.options.output {
            reported == target
        } else {
            true
        };

        if self.options.complement {
            !accept
        } else {
            accept
        }
    }
}
