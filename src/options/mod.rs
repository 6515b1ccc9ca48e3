//! Option/group model and the indexed option collection.
//!
//! The collection owns the canonical option sequence for one widget
//! instance and answers every navigation, lookup, filter and creation query
//! through the composite [`OptionIndex`] addressing scheme.

mod collection;
mod error;
mod index;
mod model;

pub use collection::{CreatedOption, OptionCollection};
pub use error::AddressError;
pub use index::OptionIndex;
pub use model::{
    OptionEntry, OptionGroup, SelectOption, creation_prompt, is_creation_prompt, slugify,
};
