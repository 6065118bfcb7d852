//! Growing ranges to their enclosing block's full span.
//!
//! Re-validating a few characters in isolation produces different results
//! than re-validating their surrounding sentence, so changed ranges grow to
//! block granularity before text extraction. Block boundaries come from the
//! host via [`BlockLookup`]; the engine holds no document of its own.

use log::trace;
use thiserror::Error;

use crate::ranges::{Range, merge_all};

/// Span of a block-level container: start position and text length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpan {
    pub start: usize,
    pub text_len: usize,
}

impl BlockSpan {
    /// End position of the block's text.
    #[must_use]
    pub fn end(self) -> usize {
        self.start + self.text_len
    }
}

/// Resolves the enclosing block-level container for a document position.
pub trait BlockLookup {
    /// The block enclosing `pos`, or `None` when no block contains it.
    fn block_at(&self, pos: usize) -> Option<BlockSpan>;
}

impl<F> BlockLookup for F
where
    F: Fn(usize) -> Option<BlockSpan>,
{
    fn block_at(&self, pos: usize) -> Option<BlockSpan> {
        self(pos)
    }
}

/// No block encloses the position: the range and the document it was
/// derived from disagree. Not recoverable by the caller.
#[derive(Debug, Error)]
#[error("no enclosing block at position {position}")]
pub struct StructuralLookupError {
    pub position: usize,
}

/// Grows `range` to the full span of its enclosing block.
///
/// Both ends resolve independently, so a range straddling a block boundary
/// grows to cover every block it touches.
pub fn expand_to_block(
    range: Range,
    lookup: &impl BlockLookup,
) -> Result<Range, StructuralLookupError> {
    let start = lookup
        .block_at(range.from)
        .ok_or(StructuralLookupError { position: range.from })?;
    let end = lookup
        .block_at(range.to)
        .ok_or(StructuralLookupError { position: range.to })?;
    Ok(Range::new(start.start, end.end()))
}

/// Expands every range to its enclosing block, clamps the results to the
/// document, and merges them together with the originals so overlapping
/// expansions coalesce with their un-expanded siblings.
pub fn expand_all_to_blocks(
    ranges: &[Range],
    lookup: &impl BlockLookup,
    doc_len: usize,
) -> Result<Vec<Range>, StructuralLookupError> {
    let mut combined = ranges.to_vec();
    for &range in ranges {
        let expanded = expand_to_block(range, lookup)?;
        let clamped = Range::new(expanded.from, expanded.to.min(doc_len));
        if clamped.is_empty() {
            trace!("expansion of {range:?} clamped away at document length {doc_len}");
            continue;
        }
        combined.push(clamped);
    }
    Ok(merge_all(&combined))
}
