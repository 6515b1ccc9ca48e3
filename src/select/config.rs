use super::creation::CreateOptionHandler;

/// How tag creation behaves for a select widget.
#[derive(Default)]
pub enum TagCreation {
    /// No creation prompts are offered.
    #[default]
    Disabled,
    /// Accepted prompts append an option synchronously, with a slug-cased
    /// value derived from the search text.
    Enabled,
    /// Creation is delegated to a background handler; the prompt stays in a
    /// pending state until the handler resolves.
    Handler(Box<dyn CreateOptionHandler>),
}

impl TagCreation {
    /// Whether filtered views should offer "Create ..." prompts at all.
    pub(crate) fn offers_prompt(&self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

/// Initial selection supplied by the host, resolved by value lookup at
/// construction. Values that match nothing are silently skipped.
#[derive(Clone, Debug, Default)]
pub enum InitialValue {
    #[default]
    None,
    Single(String),
    Many(Vec<String>),
}

impl InitialValue {
    pub(crate) fn values(&self) -> Vec<String> {
        match self {
            Self::None => Vec::new(),
            Self::Single(value) => vec![value.clone()],
            Self::Many(values) => values.clone(),
        }
    }
}

/// Configuration for one select widget instance.
pub struct SelectConfig {
    /// Multi-select keeps the dropdown open on selection and renders chips.
    pub multiple: bool,
    pub tag_creation: TagCreation,
    pub initial_value: InitialValue,
    /// Display text while nothing is selected.
    pub placeholder: String,
    /// Message shown when the filtered dropdown has nothing to offer.
    pub no_data_message: String,
    pub expanded_initially: bool,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            multiple: false,
            tag_creation: TagCreation::Disabled,
            initial_value: InitialValue::None,
            placeholder: String::new(),
            no_data_message: "No data available".to_string(),
            expanded_initially: false,
        }
    }
}
