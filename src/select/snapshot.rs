use crate::options::{OptionEntry, OptionIndex};

use super::state::{SelectState, Selection};

/// Immutable view of a select widget for one render pass.
///
/// The rendering layer draws exclusively from this; every interaction goes
/// back through the `handle_*` methods on [`SelectState`].
#[derive(Clone, Debug)]
pub struct SelectSnapshot {
    /// Filtered option/group sequence for the current search text.
    pub entries: Vec<OptionEntry>,
    pub selection: Selection,
    /// Focused address, valid against `entries`.
    pub focused: Option<OptionIndex>,
    pub expanded: bool,
    pub search: String,
    pub placeholder: String,
    pub no_data_message: String,
    pub multiple: bool,
    /// Prompt text of an in-flight background creation, for pending styling.
    pub pending_creation: Option<String>,
}

impl SelectState {
    pub fn snapshot(&self) -> SelectSnapshot {
        SelectSnapshot {
            entries: self.filtered_entries(),
            selection: self.selection.clone(),
            focused: self.focused,
            expanded: self.expanded,
            search: self.search.text().to_string(),
            placeholder: self.placeholder.clone(),
            no_data_message: self.no_data_message.clone(),
            multiple: self.multiple,
            pending_creation: self
                .pending_creation
                .as_ref()
                .map(|pending| pending.prompt.clone()),
        }
    }
}
