use sort_step_tools::{Counters, SortValue, StepKind, StepRecord, TraceSink};

engine_impl!("bubble");

/// Classic double-loop bubble sort, deliberately without the early-exit on an
/// already-sorted pass: the tool always shows the full worst-case trace, so
/// the comparison count is n(n-1)/2 for every input.
pub fn run<T: SortValue>(v: &mut [T], sink: &mut dyn TraceSink<T>) -> Counters {
    let n = v.len();
    let mut counters = Counters::default();
    if n < 2 {
        return counters;
    }

    for i in 0..n {
        // The top i elements bubbled up in earlier passes and are final.
        let settled: Vec<usize> = (n - i..n).collect();

        for j in 0..n - i - 1 {
            counters.comparisons += 1;
            sink.record(
                StepRecord::new(
                    StepKind::Comparing,
                    v,
                    &[j, j + 1],
                    format!("compare {} vs {}", v[j], v[j + 1]),
                    counters,
                )
                .with_settled(settled.clone()),
            );

            if v[j] > v[j + 1] {
                v.swap(j, j + 1);
                counters.moves += 1;
                sink.record(
                    StepRecord::new(
                        StepKind::Swapping,
                        v,
                        &[j, j + 1],
                        format!("swap {} and {}", v[j + 1], v[j]),
                        counters,
                    )
                    .with_settled(settled.clone()),
                );
            }
        }
    }

    counters
}
