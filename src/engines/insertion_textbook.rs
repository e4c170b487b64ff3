use sort_step_tools::{Counters, SortValue, StepKind, StepRecord, TraceSink};

engine_impl!("insertion_textbook");

/// Insertion sort, "textbook" variant: a pure search phase scans forward from
/// index 0 for the first element greater than the key (comparisons only, zero
/// mutations), then a copy-based shift phase opens the slot.
///
/// Bookkeeping convention: one move per displaced element (the copy one slot
/// right), the key write into the opened slot is not counted. The comparison
/// count depends only on value order, never on the shifting strategy. While
/// the shift phase runs, snapshots show the displaced value twice; the key is
/// held aside until the `Placed` record, exactly like the blackboard version.
pub fn run<T: SortValue>(v: &mut [T], sink: &mut dyn TraceSink<T>) -> Counters {
    let mut counters = Counters::default();
    if v.len() < 2 {
        return counters;
    }

    for i in 1..v.len() {
        let key = v[i].clone();
        let mut target = i;
        let prefix: Vec<usize> = (0..i).collect();

        // Search phase: first index whose value exceeds the key, if any.
        for j in 0..i {
            counters.comparisons += 1;
            sink.record(
                StepRecord::new(
                    StepKind::Comparing,
                    v,
                    &[j, i],
                    format!("search: {} vs key {}", v[j], key),
                    counters,
                )
                .with_settled(prefix.clone()),
            );

            if v[j] > key {
                target = j;
                break;
            }
        }

        let sorted_prefix: Vec<usize> = (0..=i).collect();

        if target != i {
            // Shift phase: open the slot by copying (target, i) one right.
            let mut k = i;
            while k > target {
                let shifted = v[k - 1].clone();
                v[k] = shifted;
                counters.moves += 1;
                sink.record(
                    StepRecord::new(
                        StepKind::Shifting,
                        v,
                        &[k - 1, k],
                        format!("shift {} one slot right", v[k]),
                        counters,
                    )
                    .with_settled(prefix.clone()),
                );
                k -= 1;
            }

            v[target] = key.clone();
            sink.record(
                StepRecord::new(
                    StepKind::Placed,
                    v,
                    &[target],
                    format!("insert key {} at index {}", key, target),
                    counters,
                )
                .with_settled(sorted_prefix),
            );
        } else {
            sink.record(
                StepRecord::new(
                    StepKind::Noop,
                    v,
                    &[i],
                    format!("{} already in place", key),
                    counters,
                )
                .with_settled(sorted_prefix),
            );
        }
    }

    counters
}
