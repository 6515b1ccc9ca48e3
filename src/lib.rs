//! Dropdown select and chip widget state for terminal UIs.
//!
//! The root module re-exports the option collection and the selection state
//! machine so that embedders can wire a widget without digging through the
//! module hierarchy. Rendering is deliberately thin: everything interesting
//! lives in [`options`] (indexed storage, navigation, filtering, creation)
//! and [`select`] (the event-driven state machine); [`ui`] is the reference
//! terminal front end used by the demo binary.

pub mod chip;
pub mod logging;
pub mod options;
pub mod select;
pub mod ui;

pub use chip::{Chip, ChipConfig, ChipError};
pub use options::{
    AddressError, CreatedOption, OptionCollection, OptionEntry, OptionGroup, OptionIndex,
    SelectOption, slugify,
};
pub use select::{
    ClickTarget, CreateOptionHandler, InitialValue, SelectConfig, SelectNotice, SelectSnapshot,
    SelectState, Selection, TagCreation,
};
pub use ui::{SelectOutcome, run};
