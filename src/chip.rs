//! Small two-state tag widget, shown standalone or for selected options in
//! multi-select displays.

use thiserror::Error;

/// Invalid chip configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChipError {
    /// Both affordances route the same click to contradictory effect, so a
    /// chip is either selectable or removable, never both.
    #[error("chip '{label}' cannot be both selectable and removable")]
    SelectableAndRemovable { label: String },
}

/// Configuration for a [`Chip`].
#[derive(Clone, Debug, Default)]
pub struct ChipConfig {
    pub label: String,
    /// Clicking the chip toggles its selected state.
    pub selectable: bool,
    /// The chip exposes a remove control instead of toggling.
    pub removable: bool,
    pub selected_initially: bool,
}

impl ChipConfig {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }
}

/// A chip and its toggle state.
#[derive(Clone, Debug)]
pub struct Chip {
    label: String,
    selectable: bool,
    removable: bool,
    selected: bool,
}

impl Chip {
    /// Validates the configuration; selectable + removable fails fast.
    pub fn new(config: ChipConfig) -> Result<Self, ChipError> {
        if config.selectable && config.removable {
            return Err(ChipError::SelectableAndRemovable {
                label: config.label,
            });
        }
        Ok(Self {
            label: config.label,
            selectable: config.selectable,
            removable: config.removable,
            selected: config.selectable && config.selected_initially,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    pub fn is_removable(&self) -> bool {
        self.removable
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Toggle the selected state; a no-op for non-selectable chips.
    pub fn toggle(&mut self) {
        if self.selectable {
            self.selected = !self.selected;
        }
    }
}
