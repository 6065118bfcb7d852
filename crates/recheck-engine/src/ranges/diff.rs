use std::collections::VecDeque;

use super::{Range, merge_all, overlap_index};

/// Subtracts the coverage of `second` from `first`.
///
/// Both sets are merged before comparison. A first-set range overlapped by
/// a second-set range is split: the part left of the overlap survives as a
/// result, and the part right of it goes back on the work queue to be
/// examined against the whole second set again, so a range straddling
/// several second-set ranges sheds each overlap in turn. The queue replaces
/// recursion; every step advances `from` past a second-set boundary, so it
/// drains. Never emits an empty range.
pub fn diff(first: &[Range], second: &[Range]) -> Vec<Range> {
    let second = merge_all(second);
    let mut work: VecDeque<Range> = merge_all(first).into();
    let mut out = Vec::new();

    while let Some(range) = work.pop_front() {
        if range.is_empty() {
            continue;
        }
        let Some(i) = overlap_index(range, &second) else {
            out.push(range);
            continue;
        };
        let local = second[i];
        if range.from < local.from {
            out.push(Range::new(range.from, local.from));
        }
        if local.to < range.to {
            work.push_front(Range::new(local.to + 1, range.to));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn splits_around_an_inner_overlap() {
        let out = diff(&[Range::new(0, 10)], &[Range::new(3, 6)]);
        assert_eq!(out, vec![Range::new(0, 3), Range::new(7, 10)]);
    }

    #[rstest]
    #[case(vec![Range::new(0, 10)])]
    #[case(vec![Range::new(0, 5), Range::new(9, 14)])]
    fn diff_against_itself_is_empty(#[case] set: Vec<Range>) {
        assert_eq!(diff(&set, &set), vec![]);
    }

    #[test]
    fn disjoint_second_set_leaves_merged_first() {
        let first = [Range::new(0, 5), Range::new(4, 10)];
        let second = [Range::new(30, 40)];
        assert_eq!(diff(&first, &second), merge_all(&first));
    }

    #[test]
    fn empty_second_set_leaves_merged_first() {
        let first = [Range::new(7, 9), Range::new(0, 3)];
        assert_eq!(diff(&first, &[]), merge_all(&first));
    }

    #[test]
    fn straddling_several_overlaps_sheds_each_in_turn() {
        let out = diff(
            &[Range::new(0, 20)],
            &[Range::new(2, 4), Range::new(8, 10), Range::new(15, 16)],
        );
        assert_eq!(
            out,
            vec![
                Range::new(0, 2),
                Range::new(5, 8),
                Range::new(11, 15),
                Range::new(17, 20),
            ]
        );
    }

    #[rstest]
    #[case(vec![Range::new(0, 10)], vec![Range::new(0, 5)])] // overlap at left edge
    #[case(vec![Range::new(0, 10)], vec![Range::new(5, 10)])] // overlap at right edge
    #[case(vec![Range::new(3, 6)], vec![Range::new(0, 10)])] // fully covered
    #[case(vec![Range::new(0, 10)], vec![Range::new(0, 10)])]
    fn never_emits_an_empty_range(#[case] first: Vec<Range>, #[case] second: Vec<Range>) {
        for range in diff(&first, &second) {
            assert!(!range.is_empty(), "empty range {range:?} in output");
        }
    }

    #[test]
    fn unmerged_inputs_are_merged_first() {
        // [0,5] and [4,12] coalesce before the diff, so the overlap at [6,8]
        // splits the single merged range.
        let out = diff(
            &[Range::new(0, 5), Range::new(4, 12)],
            &[Range::new(6, 8)],
        );
        assert_eq!(out, vec![Range::new(0, 6), Range::new(9, 12)]);
    }
}
