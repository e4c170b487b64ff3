//! Thin orchestration: pick an engine, copy the working data, run it to
//! completion, report the final counts.

use std::str::FromStr;
use std::time::Duration;

use sort_step_tools::{Counters, Engine, TraceSink};
use tracing::debug;

use crate::engines;

/// Which of the four engines to animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bubble,
    Selection,
    InsertionStandard,
    InsertionTextbook,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::InsertionStandard,
        Algorithm::InsertionTextbook,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::InsertionStandard => "insertion",
            Algorithm::InsertionTextbook => "insertion-textbook",
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bubble" => Ok(Algorithm::Bubble),
            "selection" => Ok(Algorithm::Selection),
            "insertion" | "insertion-standard" => Ok(Algorithm::InsertionStandard),
            "insertion-textbook" | "textbook" => Ok(Algorithm::InsertionTextbook),
            other => Err(format!(
                "unknown algorithm {other:?}, expected one of: bubble, selection, \
                 insertion, insertion-textbook"
            )),
        }
    }
}

/// Everything one run needs, fixed for its duration. The delay is advisory to
/// the emitter only and never reaches the engine.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub algorithm: Algorithm,
    pub delay: Duration,
    pub values: Vec<i64>,
}

impl RunConfig {
    pub fn new(algorithm: Algorithm, values: Vec<i64>) -> Self {
        Self {
            algorithm,
            delay: Duration::from_millis(300),
            values,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Result of one completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    pub sorted: Vec<i64>,
    pub counters: Counters,
}

/// Runs the configured engine over a private copy of the configured values.
pub fn run(config: &RunConfig, sink: &mut dyn TraceSink<i64>) -> SortOutcome {
    let mut values = config.values.clone();
    debug!(
        algorithm = config.algorithm.name(),
        len = values.len(),
        "starting sort"
    );

    let counters = match config.algorithm {
        Algorithm::Bubble => engines::bubble::SortImpl::run(&mut values, sink),
        Algorithm::Selection => engines::selection::SortImpl::run(&mut values, sink),
        Algorithm::InsertionStandard => {
            engines::insertion_standard::SortImpl::run(&mut values, sink)
        }
        Algorithm::InsertionTextbook => {
            engines::insertion_textbook::SortImpl::run(&mut values, sink)
        }
    };

    debug!(
        comparisons = counters.comparisons,
        moves = counters.moves,
        "sort completed"
    );

    SortOutcome {
        sorted: values,
        counters,
    }
}
