use super::ValidationInput;
use crate::ranges::Range;

/// Extracts from `records` the text falling inside `range`.
///
/// A record is selected by its relationship to the range's *start* alone:
/// it participates iff `record.from <= range.from <= record.from +
/// text.len()`, even when another record touches the range's end. The slice
/// start backs up one character whenever the range starts inside the
/// record, keeping the boundary character that word-boundary checks
/// downstream look at. Slice bounds clamp to the record's text, and empty
/// slices are dropped.
///
/// Emitted records take `range`'s bounds and the sliced text; the payload
/// is cloned through.
pub fn project<P: Clone>(range: Range, records: &[ValidationInput<P>]) -> Vec<ValidationInput<P>> {
    let mut projected = Vec::new();
    for record in records {
        if record.from > range.from || range.from > record.from + record.text.len() {
            continue;
        }
        let local_from = range.from - record.from;
        let local_to = local_from + range.len();

        let start = local_from.saturating_sub(1).min(record.text.len());
        let end = local_to.min(record.text.len());
        if start == end {
            continue;
        }

        projected.push(ValidationInput {
            from: range.from,
            to: range.to,
            text: record.text[start..end].to_string(),
            payload: record.payload.clone(),
        });
    }
    projected
}
