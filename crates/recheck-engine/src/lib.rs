//! Range algebra and position remapping for incremental re-validation of
//! structured text documents.
//!
//! As a document is edited, only the changed regions need re-checking;
//! results for unchanged regions stay valid as long as their coordinates are
//! carried forward through the edit history. This crate provides the pieces
//! a validating host composes for that:
//!
//! - [`ranges`]: merge, diff and overlap location over document ranges
//! - [`inputs`]: extraction of validation-relevant text slices from ranges
//! - [`blocks`]: growing ranges to their enclosing block's full span
//! - [`mapping`]: replaying an edit log's position maps over ranges
//!
//! Everything is a synchronous, pure function over immutable inputs. The
//! document itself, its traversal, and the edit history live in the host;
//! the engine sees flat text runs, a block-boundary lookup, and a log of
//! position-mapping functions.
//!
//! ```
//! use recheck_engine::{Range, merge_all};
//!
//! let merged = merge_all(&[
//!     Range::new(0, 5),
//!     Range::new(4, 10),
//!     Range::new(20, 25),
//! ]);
//! assert_eq!(merged, vec![Range::new(0, 10), Range::new(20, 25)]);
//! ```

pub mod blocks;
pub mod inputs;
pub mod mapping;
pub mod ranges;

// Public API re-exports
pub use blocks::{
    BlockLookup, BlockSpan, StructuralLookupError, expand_all_to_blocks, expand_to_block,
};
pub use inputs::{ValidationInput, diff_inputs, project};
pub use mapping::{EditRecord, PositionMap, map_through_edits};
pub use ranges::{Range, diff, merge_all, overlap_index};
