use super::{ValidationInput, project};
use crate::ranges::{self, Range};

/// Returns the parts of `first` not covered by `second`, re-sliced to the
/// surviving sub-spans.
///
/// Ranges are derived from each record as `(from, from + text.len())`, the
/// derived ranges are diffed, and every surviving range is projected back
/// against `first`. Both collections must be internally non-overlapping —
/// the range diff assumes pre-merged inputs.
pub fn diff_inputs<P: Clone>(
    first: &[ValidationInput<P>],
    second: &[ValidationInput<P>],
) -> Vec<ValidationInput<P>> {
    let first_ranges = derived_ranges(first);
    let second_ranges = derived_ranges(second);
    ranges::diff(&first_ranges, &second_ranges)
        .into_iter()
        .flat_map(|range| project(range, first))
        .collect()
}

fn derived_ranges<P>(records: &[ValidationInput<P>]) -> Vec<Range> {
    records
        .iter()
        .map(|record| Range::new(record.from, record.from + record.text.len()))
        .collect()
}
