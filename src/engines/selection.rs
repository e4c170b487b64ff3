use sort_step_tools::{Counters, SortValue, StepKind, StepRecord, TraceSink};

engine_impl!("selection");

/// Selection sort: scan the unsorted tail for its minimum, then exchange it
/// into position. At most one exchange per outer pass, so moves <= n-1 while
/// comparisons stay at n(n-1)/2 regardless of input order.
pub fn run<T: SortValue>(v: &mut [T], sink: &mut dyn TraceSink<T>) -> Counters {
    let n = v.len();
    let mut counters = Counters::default();
    if n < 2 {
        return counters;
    }

    for i in 0..n {
        let mut min_idx = i;
        // The prefix [0, i) already holds its final values.
        let settled: Vec<usize> = (0..i).collect();

        for j in i + 1..n {
            counters.comparisons += 1;
            sink.record(
                StepRecord::new(
                    StepKind::Comparing,
                    v,
                    &[min_idx, j],
                    format!("scan for minimum: {} vs {}", v[min_idx], v[j]),
                    counters,
                )
                .with_settled(settled.clone()),
            );

            if v[j] < v[min_idx] {
                min_idx = j;
            }
        }

        if min_idx != i {
            v.swap(i, min_idx);
            counters.moves += 1;
            sink.record(
                StepRecord::new(
                    StepKind::Swapping,
                    v,
                    &[i, min_idx],
                    format!("move minimum {} to index {}", v[i], i),
                    counters,
                )
                .with_settled(settled.clone()),
            );
        }
    }

    counters
}
