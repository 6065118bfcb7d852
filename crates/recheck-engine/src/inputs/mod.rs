//! Validation inputs: text runs tagged with their document position.

mod diff;
mod project;

pub use diff::diff_inputs;
pub use project::project;

use serde::{Deserialize, Serialize};

/// A contiguous text run at a document position, plus whatever payload the
/// host tracks alongside it (a node id, a check epoch, nothing at all).
///
/// Runs arriving from a document scan satisfy `to - from == text.len()`.
/// Projected outputs take the projecting range's bounds instead and may
/// carry one extra leading character; see [`project`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationInput<P = ()> {
    /// Start position in document coordinates.
    pub from: usize,
    /// End position in document coordinates.
    pub to: usize,
    /// The text covered by `[from, to]`.
    pub text: String,
    /// Host payload, carried through every transform unchanged.
    pub payload: P,
}

impl ValidationInput {
    /// A payload-free run starting at `from`.
    pub fn new(from: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            from,
            to: from + text.len(),
            text,
            payload: (),
        }
    }
}
