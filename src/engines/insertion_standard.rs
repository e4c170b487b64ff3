use sort_step_tools::{Counters, SortValue, StepKind, StepRecord, TraceSink};

engine_impl!("insertion_standard");

/// Insertion sort, "standard" variant: the key walks backward through the
/// sorted prefix via adjacent exchange.
///
/// Bookkeeping convention: one move per displaced element (the exchange that
/// carries the key one slot left), the key's final resting write is implied by
/// the last exchange and not counted separately. Comparisons stop at the first
/// left neighbor that is not greater, so the count depends on input order.
pub fn run<T: SortValue>(v: &mut [T], sink: &mut dyn TraceSink<T>) -> Counters {
    let mut counters = Counters::default();
    if v.len() < 2 {
        return counters;
    }

    for i in 1..v.len() {
        // Sorted among themselves, not yet final.
        let prefix: Vec<usize> = (0..i).collect();
        let mut j = i;

        loop {
            counters.comparisons += 1;
            sink.record(
                StepRecord::new(
                    StepKind::Comparing,
                    v,
                    &[j - 1, j],
                    format!("compare {} vs key {}", v[j - 1], v[j]),
                    counters,
                )
                .with_settled(prefix.clone()),
            );

            if v[j - 1] > v[j] {
                v.swap(j - 1, j);
                counters.moves += 1;
                sink.record(
                    StepRecord::new(
                        StepKind::Swapping,
                        v,
                        &[j - 1, j],
                        format!("move {} one slot right", v[j]),
                        counters,
                    )
                    .with_settled(prefix.clone()),
                );
                j -= 1;
                if j == 0 {
                    break;
                }
            } else {
                break;
            }
        }

        let sorted_prefix: Vec<usize> = (0..=i).collect();
        sink.record(
            StepRecord::new(
                StepKind::Placed,
                v,
                &[j],
                format!("{} inserted", v[j]),
                counters,
            )
            .with_settled(sorted_prefix),
        );
    }

    counters
}
