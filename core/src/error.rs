//! Error types for the composition core.
//!
//! The core deliberately has very few failure modes: converters are total
//! functions and unmapped input passes through unchanged. The only errors
//! are caller-contract violations on the mutable session state.

use thiserror::Error;

/// Errors raised by the word composer on caller-contract violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// `delete_last` was called on an empty composer. Callers must check
    /// `size() > 0` before deleting.
    #[error("cannot delete from an empty composer")]
    EmptyComposer,
}
