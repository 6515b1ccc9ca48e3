use thiserror::Error;

use super::index::OptionIndex;

/// Errors raised when an [`OptionIndex`] is structurally invalid for the
/// collection it is resolved against.
///
/// These are contract violations on the caller's side, never user-facing
/// conditions: navigation and filtering only ever hand out valid addresses.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    /// A component of the address points past the end of its sequence.
    #[error("address {index:?} is out of range for a sequence of {len} entries")]
    OutOfRange { index: OptionIndex, len: usize },

    /// A flat address resolved to a group; a grouped address is required.
    #[error("flat address {position} resolves to group '{label}'")]
    ExpectedOption { position: usize, label: String },

    /// A grouped address whose first component does not point at a group.
    #[error("grouped address ({position}, {option}) does not point into a group")]
    ExpectedGroup { position: usize, option: usize },
}
