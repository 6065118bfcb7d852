use super::Range;

/// Returns the index of the first range in `ranges` overlapping `range`.
///
/// Overlap holds when either bound of `range` falls inside a candidate
/// (bounds inclusive) or when `range` fully contains one. Ties resolve to
/// the first match in iteration order.
pub fn overlap_index(range: Range, ranges: &[Range]) -> Option<usize> {
    ranges.iter().position(|local| {
        (local.from <= range.from && range.from <= local.to)
            || (local.from <= range.to && range.to <= local.to)
            || (range.from <= local.from && local.to <= range.to)
    })
}

/// Folds `ranges` into a set with no mergeable overlap.
///
/// Each incoming range merges into the first accumulated range it overlaps,
/// or is appended when it overlaps none. Output order is therefore
/// first-overlap/append order, not sorted order; callers rely on that.
pub fn merge_all(ranges: &[Range]) -> Vec<Range> {
    let mut merged: Vec<Range> = Vec::with_capacity(ranges.len());
    for &range in ranges {
        match overlap_index(range, &merged) {
            Some(i) => merged[i] = merged[i].union(range),
            None => merged.push(range),
        }
    }
    merged
}
