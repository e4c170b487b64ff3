//! Step-record protocol and shared test battery for instrumented sort engines.
//!
//! An engine mutates a slice in place and reports every observable
//! sub-operation (comparison, swap, shift, placement) to a [`TraceSink`] as an
//! immutable [`StepRecord`]. The sink owns pacing and display; the engine owns
//! the algorithm and the counters. Test suites are instantiated per engine via
//! [`instantiate_engine_tests`].

use std::fmt::Display;

pub mod patterns;
pub mod testing;

// Re-exported for the test instantiation macro.
pub use paste;

/// What a single step record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Two elements are about to be compared.
    Comparing,
    /// Two elements exchanged positions.
    Swapping,
    /// An element was copied one slot over to make room.
    Shifting,
    /// An element reached its resting position.
    Placed,
    /// Nothing had to change (element already in place).
    Noop,
}

/// Running operation counters for one sort. Monotonically non-decreasing
/// within a run, zeroed at the start of each run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub comparisons: u64,
    pub moves: u64,
}

/// Immutable snapshot of one observable moment in a sort's execution.
///
/// Created by an engine at each transition, consumed immediately by the sink,
/// never retained by the engine. `highlights` holds the 0..=2 indices the
/// step is about, `settled` the indices the engine reports as ordered (final
/// positions for bubble/selection, the sorted prefix for insertion).
#[derive(Debug, Clone)]
pub struct StepRecord<T> {
    pub kind: StepKind,
    pub values: Vec<T>,
    pub highlights: Vec<usize>,
    pub settled: Vec<usize>,
    pub label: String,
    pub counters: Counters,
}

impl<T: Clone> StepRecord<T> {
    pub fn new(
        kind: StepKind,
        values: &[T],
        highlights: &[usize],
        label: impl Into<String>,
        counters: Counters,
    ) -> Self {
        Self {
            kind,
            values: values.to_vec(),
            highlights: highlights.to_vec(),
            settled: Vec::new(),
            label: label.into(),
            counters,
        }
    }

    pub fn with_settled(mut self, settled: Vec<usize>) -> Self {
        self.settled = settled;
        self
    }
}

/// Consumer of step records. May suspend to pace an animation; must not
/// influence engine state.
pub trait TraceSink<T> {
    fn record(&mut self, step: StepRecord<T>);
}

/// Discards every record. Used for benches and summary-only runs.
pub struct NullSink;

impl<T> TraceSink<T> for NullSink {
    fn record(&mut self, _step: StepRecord<T>) {}
}

/// Collects every record, in emission order. Used by the test battery.
#[derive(Default)]
pub struct VecSink<T> {
    pub steps: Vec<StepRecord<T>>,
}

impl<T> VecSink<T> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<T> TraceSink<T> for VecSink<T> {
    fn record(&mut self, step: StepRecord<T>) {
        self.steps.push(step);
    }
}

/// Element bound shared by all engines. `Display` feeds the step labels.
pub trait SortValue: Ord + Clone + Display {}

impl<T: Ord + Clone + Display> SortValue for T {}

/// An instrumented sort engine.
pub trait Engine {
    fn name() -> String;

    /// Sorts `data` in place, reporting every observable step to `sink`.
    /// Returns the final operation counts.
    fn run<T: SortValue>(data: &mut [T], sink: &mut dyn TraceSink<T>) -> Counters;
}

/// Instantiates the shared engine test battery for one engine type.
///
/// ```ignore
/// type TestEngine = sort_classroom_rs::engines::bubble::SortImpl;
/// sort_step_tools::instantiate_engine_tests!(TestEngine);
/// ```
#[macro_export]
macro_rules! instantiate_engine_tests {
    ($engine:ty) => {
        $crate::instantiate_engine_tests!(@pattern $engine, random_uniform);
        $crate::instantiate_engine_tests!(@pattern $engine, ascending);
        $crate::instantiate_engine_tests!(@pattern $engine, descending);
        $crate::instantiate_engine_tests!(@pattern $engine, all_equal);
        $crate::instantiate_engine_tests!(@pattern $engine, zipf_skewed);

        #[test]
        fn trivial_inputs_yield_no_steps() {
            $crate::testing::check_trivial_inputs::<$engine>();
        }
    };
    (@pattern $engine:ty, $pattern:ident) => {
        $crate::paste::paste! {
            #[test]
            fn [<sorts_ $pattern>]() {
                for &len in $crate::testing::test_lengths() {
                    $crate::testing::check_sorts::<$engine>($crate::patterns::$pattern(len));
                }
            }
        }
    };
}
