//! Animated terminal visualizer for four classic comparison sorts.
//!
//! Each engine in [`engines`] interleaves algorithmic mutation with
//! observation: every comparison, swap, shift and placement is reported to a
//! [`TraceSink`] as an immutable [`StepRecord`] carrying a snapshot, the
//! highlighted pair and the running counters. The [`driver`] picks an engine
//! from a [`driver::RunConfig`] and runs it over a private copy of the data;
//! [`render`] consumes the trace as a paced bar-chart animation.

pub use sort_step_tools::{Counters, Engine, StepKind, StepRecord, TraceSink};

/// Generates the `SortImpl` wrapper tying an engine module's free `run`
/// function to the [`Engine`] trait under the given display name.
macro_rules! engine_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl ::sort_step_tools::Engine for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn run<T: ::sort_step_tools::SortValue>(
                data: &mut [T],
                sink: &mut dyn ::sort_step_tools::TraceSink<T>,
            ) -> ::sort_step_tools::Counters {
                self::run(data, sink)
            }
        }
    };
}

pub mod driver;
pub mod engines;
pub mod input;
pub mod render;

pub use driver::{run, Algorithm, RunConfig, SortOutcome};
pub use input::{parse_values, random_values, InputError};
pub use render::TerminalSink;
