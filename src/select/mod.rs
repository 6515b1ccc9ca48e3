//! Selection & navigation state machine driving the dropdown.
//!
//! [`SelectState`] owns one [`OptionCollection`](crate::options::OptionCollection)
//! and turns semantic input events (clicks by surface, keys, hover, blur)
//! into consistent search, expansion, focus and selection state. Each render
//! pass reads an immutable [`SelectSnapshot`].

mod actions;
mod config;
mod creation;
mod input;
mod snapshot;
mod state;

pub use actions::ClickTarget;
pub use config::{InitialValue, SelectConfig, TagCreation};
pub use creation::CreateOptionHandler;
pub use input::SearchInput;
pub use snapshot::SelectSnapshot;
pub use state::{SelectNotice, SelectState, Selection};
