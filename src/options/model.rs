use serde::{Deserialize, Serialize};

/// A selectable item.
///
/// `value` is the stable identity key used for selection membership and
/// lookup; `name` is display text only and may differ (e.g. for creation
/// prompts).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub name: String,
    pub value: String,
    /// Top-level position of the owning group, when nested. Stamped at
    /// collection construction; callers never need to supply it.
    #[serde(skip)]
    pub group_index: Option<usize>,
}

impl SelectOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            group_index: None,
        }
    }
}

/// A named bucket of options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionGroup {
    #[serde(rename = "group")]
    pub label: String,
    pub options: Vec<SelectOption>,
    /// Own index within the top-level sequence, stamped at construction.
    #[serde(skip)]
    pub position: Option<usize>,
}

impl OptionGroup {
    pub fn new(label: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            label: label.into(),
            options,
            position: None,
        }
    }
}

/// Entry in the top-level option sequence: a plain option or a group.
/// On the wire the two are discriminated by the presence of a `group` field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionEntry {
    Group(OptionGroup),
    Option(SelectOption),
}

impl OptionEntry {
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }

    pub fn as_group(&self) -> Option<&OptionGroup> {
        match self {
            Self::Group(group) => Some(group),
            Self::Option(_) => None,
        }
    }

    pub fn as_option(&self) -> Option<&SelectOption> {
        match self {
            Self::Option(option) => Some(option),
            Self::Group(_) => None,
        }
    }
}

/// Slug-case a display name into a stable value key: lowercased, with every
/// whitespace character replaced by a hyphen.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}

/// Display text of the synthetic option offered when a search matches nothing
/// and tag creation is enabled.
pub fn creation_prompt(text: &str) -> String {
    format!("Create {text}")
}

/// Whether `prompt` is the creation prompt for the search text `compare`.
pub fn is_creation_prompt(prompt: &str, compare: &str) -> bool {
    prompt == creation_prompt(compare)
}
