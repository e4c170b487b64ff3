//! Shared correctness checks, instantiated per engine by
//! `instantiate_engine_tests!`.

use once_cell::sync::Lazy;

use crate::{Counters, Engine, StepRecord, VecSink};

static TEST_LENGTHS: Lazy<Vec<usize>> = Lazy::new(|| {
    let mut lengths = vec![0, 1, 2, 3, 4, 5, 8, 10, 16, 20];
    if cfg!(feature = "large_test_sizes") {
        // The visualizer caps its UI at 20 elements, the engines do not.
        lengths.extend([24, 35, 50]);
    }
    lengths
});

/// Input lengths the battery exercises for every pattern.
pub fn test_lengths() -> &'static [usize] {
    &TEST_LENGTHS
}

/// Runs one engine over a copy of `input`, collecting the full trace.
pub fn run_collect<E: Engine>(input: &[i64]) -> (Vec<i64>, Counters, Vec<StepRecord<i64>>) {
    let mut data = input.to_vec();
    let mut sink = VecSink::new();
    let counters = E::run(&mut data, &mut sink);
    (data, counters, sink.steps)
}

/// Core battery check: sorted output, multiset preserved, well-formed trace.
pub fn check_sorts<E: Engine>(input: Vec<i64>) {
    let (output, counters, steps) = run_collect::<E>(&input);

    let mut expected = input.clone();
    expected.sort_unstable();
    assert_eq!(
        output,
        expected,
        "engine {} failed to sort {input:?}",
        E::name()
    );

    check_trace_shape::<E>(&input, &counters, &steps);
}

/// Lengths 0 and 1 are trivially sorted: no steps, zero counters.
pub fn check_trivial_inputs<E: Engine>() {
    for input in [Vec::new(), vec![7]] {
        let (output, counters, steps) = run_collect::<E>(&input);
        assert_eq!(output, input);
        assert_eq!(counters, Counters::default());
        assert!(
            steps.is_empty(),
            "engine {} emitted steps for {input:?}",
            E::name()
        );
    }
}

/// Every settled index must already hold its final sorted value. Only the
/// engines that report true final positions (bubble, selection) opt in.
pub fn check_settled_hold_final<E: Engine>(input: Vec<i64>) {
    let (sorted, _, steps) = run_collect::<E>(&input);
    for (step_idx, step) in steps.iter().enumerate() {
        for &idx in &step.settled {
            assert_eq!(
                step.values[idx],
                sorted[idx],
                "engine {}: step {step_idx} reports index {idx} settled \
                 but it does not hold its final value (input {input:?})",
                E::name()
            );
        }
    }
}

fn check_trace_shape<E: Engine>(input: &[i64], final_counters: &Counters, steps: &[StepRecord<i64>]) {
    let mut last = Counters::default();
    for (step_idx, step) in steps.iter().enumerate() {
        assert_eq!(
            step.values.len(),
            input.len(),
            "engine {}: step {step_idx} changed the sequence length",
            E::name()
        );
        assert!(
            step.highlights.len() <= 2,
            "engine {}: step {step_idx} highlights more than a pair",
            E::name()
        );
        for &idx in step.highlights.iter().chain(step.settled.iter()) {
            assert!(idx < input.len(), "engine {}: index {idx} out of bounds", E::name());
        }
        assert!(
            step.counters.comparisons >= last.comparisons && step.counters.moves >= last.moves,
            "engine {}: counters went backwards at step {step_idx}",
            E::name()
        );
        assert!(!step.label.is_empty());
        last = step.counters;
    }

    if !steps.is_empty() {
        // Every counter increment is followed by a record, so the last record
        // must carry the final totals.
        assert_eq!(last, *final_counters, "engine {}", E::name());
    }
}
