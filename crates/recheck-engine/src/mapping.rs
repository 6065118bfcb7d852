//! Replaying an edit log's position maps over ranges.

use std::fmt;

use log::debug;

use crate::ranges::Range;

/// A position-translation function from before one edit to after it.
///
/// Implementations must be monotonic: positions valid before the edit map
/// to positions after it without crossing each other.
pub trait PositionMap {
    fn map(&self, pos: usize) -> usize;
}

impl<F> PositionMap for F
where
    F: Fn(usize) -> usize,
{
    fn map(&self, pos: usize) -> usize {
        self(pos)
    }
}

/// One entry of the host's edit log: an opaque, strictly increasing `time`
/// key paired with the edit's position map.
pub struct EditRecord {
    time: u64,
    mapping: Box<dyn PositionMap>,
}

impl EditRecord {
    pub fn new(time: u64, mapping: impl PositionMap + 'static) -> Self {
        Self {
            time,
            mapping: Box::new(mapping),
        }
    }

    #[must_use]
    pub fn time(&self) -> u64 {
        self.time
    }

    /// Applies this edit's position map.
    #[must_use]
    pub fn map(&self, pos: usize) -> usize {
        self.mapping.map(pos)
    }
}

impl fmt::Debug for EditRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditRecord")
            .field("time", &self.time)
            .finish_non_exhaustive()
    }
}

/// Brings `ranges`, valid as of the edit stamped `time`, forward to the
/// log's current coordinates.
///
/// A single-record log means the document is unaltered since that point,
/// so the ranges come back unchanged for any `time`. When no record
/// carries `time`, the reference point is stale and every range is dropped
/// — a normal outcome, not an error. Otherwise each range is folded
/// through the mapping of every record from the match to the end of the
/// log, rebinding a fresh range at each step; a range whose text was
/// deleted along the way collapses to empty and is filtered out.
pub fn map_through_edits(ranges: &[Range], time: u64, log: &[EditRecord]) -> Vec<Range> {
    if log.len() == 1 {
        return ranges.to_vec();
    }
    let Some(start) = log.iter().position(|record| record.time() == time) else {
        debug!(
            "no edit stamped {time} in log of {}; dropping {} ranges",
            log.len(),
            ranges.len()
        );
        return Vec::new();
    };

    let mut mapped = Vec::with_capacity(ranges.len());
    for &range in ranges {
        let current = log[start..].iter().fold(range, |acc, record| {
            Range::new(record.map(acc.from), record.map(acc.to))
        });
        if !current.is_empty() {
            mapped.push(current);
        }
    }
    mapped
}
