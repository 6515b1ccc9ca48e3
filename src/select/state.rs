use std::slice;
use std::sync::atomic::Ordering as AtomicOrdering;

use log::debug;

use crate::options::{OptionCollection, OptionEntry, OptionIndex, SelectOption};

use super::config::{InitialValue, SelectConfig, TagCreation};
use super::creation::{self, CreationChannel, CreationCommand, CreationOutcome, PendingCreation};
use super::input::SearchInput;

/// Current selection of a widget: nothing, one option, or an ordered set.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Single(SelectOption),
    Multiple(Vec<SelectOption>),
}

impl Selection {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Membership test by value, the identity used for toggling.
    pub fn contains(&self, value: &str) -> bool {
        self.options().iter().any(|option| option.value == value)
    }

    pub fn options(&self) -> &[SelectOption] {
        match self {
            Self::None => &[],
            Self::Single(option) => slice::from_ref(option),
            Self::Multiple(options) => options,
        }
    }

    pub fn values(&self) -> Vec<String> {
        self.options()
            .iter()
            .map(|option| option.value.clone())
            .collect()
    }
}

/// Host-facing notification, drained via [`SelectState::take_notices`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectNotice {
    /// Fired exactly once per successful creation.
    OptionCreated {
        option: SelectOption,
        group: Option<String>,
    },
    /// A creation handler failed; widget state is unchanged apart from the
    /// cleared pending prompt.
    CreationFailed { prompt: String, error: String },
}

/// Selection & navigation state machine for one dropdown select widget.
///
/// Owns the option collection exclusively and interprets semantic input
/// events into consistent search/expansion/focus/selection state. Rendering
/// layers consume [`snapshot`](SelectState::snapshot) and feed events back
/// through the `handle_*` methods.
pub struct SelectState {
    pub(crate) collection: OptionCollection,
    pub(crate) multiple: bool,
    pub(crate) placeholder: String,
    pub(crate) no_data_message: String,
    pub(crate) search: SearchInput,
    pub(crate) expanded: bool,
    /// Focused address, resolved against the filtered view.
    pub(crate) focused: Option<OptionIndex>,
    pub(crate) selection: Selection,
    /// Armed by a pointer-down inside the widget, consumed by the next blur.
    pub(crate) pending_blur_suppressed: bool,
    pub(crate) sync_creation: bool,
    pub(crate) creation: Option<CreationChannel>,
    pub(crate) pending_creation: Option<PendingCreation>,
    pub(crate) next_creation_id: u64,
    pub(crate) notices: Vec<SelectNotice>,
}

impl Drop for SelectState {
    fn drop(&mut self) {
        if let Some(channel) = &self.creation {
            let _ = channel.tx.send(CreationCommand::Shutdown);
        }
    }
}

impl SelectState {
    pub fn new(entries: Vec<OptionEntry>, config: SelectConfig) -> Self {
        let creation_offered = config.tag_creation.offers_prompt();
        let collection = OptionCollection::new(entries, creation_offered);

        let (sync_creation, creation) = match config.tag_creation {
            TagCreation::Disabled => (false, None),
            TagCreation::Enabled => (true, None),
            TagCreation::Handler(handler) => (false, Some(creation::spawn(handler))),
        };

        let selection = resolve_initial_selection(&collection, &config.initial_value, config.multiple);
        let focused = collection.first_index();

        Self {
            collection,
            multiple: config.multiple,
            placeholder: config.placeholder,
            no_data_message: config.no_data_message,
            search: SearchInput::default(),
            expanded: config.expanded_initially,
            focused,
            selection,
            // Expanding focuses the search box, so the matching blur must be
            // ignored; an initially expanded widget starts inside that window.
            pending_blur_suppressed: config.expanded_initially,
            sync_creation,
            creation,
            pending_creation: None,
            next_creation_id: 0,
            notices: Vec::new(),
        }
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn search_text(&self) -> &str {
        self.search.text()
    }

    pub fn focused(&self) -> Option<OptionIndex> {
        self.focused
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn collection(&self) -> &OptionCollection {
        &self.collection
    }

    /// Drain pending host notifications.
    pub fn take_notices(&mut self) -> Vec<SelectNotice> {
        std::mem::take(&mut self.notices)
    }

    /// Filtered entries for the current search text.
    pub(crate) fn filtered_entries(&self) -> Vec<OptionEntry> {
        let text = self.search.text();
        self.collection
            .filter((!text.is_empty()).then_some(text))
    }

    /// Navigable view over the filtered entries.
    pub(crate) fn filtered_view(&self) -> OptionCollection {
        OptionCollection::filtered_view(self.filtered_entries())
    }

    pub(crate) fn expand(&mut self) {
        if !self.expanded {
            self.expanded = true;
            self.pending_blur_suppressed = true;
            debug!("dropdown expanded");
        }
    }

    pub(crate) fn collapse(&mut self) {
        if self.expanded {
            self.expanded = false;
            debug!("dropdown collapsed");
        }
        // Collapse is never blocked by an in-flight creation; the eventual
        // result is dropped instead.
        self.cancel_pending_creation();
    }

    pub(crate) fn toggle_expanded(&mut self) {
        if self.expanded {
            self.collapse();
        } else {
            self.expand();
        }
    }

    /// Record a selection: membership, cleared search, focus on the selected
    /// option, collapse in single-select mode.
    pub(crate) fn select_option(&mut self, option: SelectOption, index: Option<OptionIndex>) {
        debug!("selected option '{}'", option.value);
        if self.multiple {
            match &mut self.selection {
                Selection::Multiple(options) => {
                    if !options.iter().any(|existing| existing.value == option.value) {
                        options.push(option.clone());
                    }
                }
                _ => self.selection = Selection::Multiple(vec![option.clone()]),
            }
        } else {
            self.selection = Selection::Single(option.clone());
        }

        self.search.clear();
        self.expanded = self.multiple;
        self.focused = index.or_else(|| self.collection.find_option_index(&option));
        // The search text just changed (cleared), so any in-flight creation
        // result for the old text must not be applied.
        self.cancel_pending_creation();
    }

    pub(crate) fn unselect_option(&mut self, value: &str) {
        if self.multiple {
            self.remove_option(value);
        } else {
            self.selection = Selection::None;
        }
    }

    /// Remove one option from a multi-selection by value; an emptied
    /// selection degrades to [`Selection::None`].
    pub(crate) fn remove_option(&mut self, value: &str) {
        if let Selection::Multiple(options) = &mut self.selection {
            options.retain(|option| option.value != value);
            if options.is_empty() {
                self.selection = Selection::None;
            }
            debug!("removed option '{value}' from selection");
        }
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selection = Selection::None;
        debug!("selection cleared");
    }

    /// Drain creation outcomes from the background worker and apply the one
    /// that is still current.
    pub fn pump_creation_results(&mut self) {
        loop {
            let outcome = match &self.creation {
                Some(channel) => match channel.rx.try_recv() {
                    Ok(outcome) => outcome,
                    Err(_) => break,
                },
                None => break,
            };
            self.handle_creation_outcome(outcome);
        }
    }

    fn handle_creation_outcome(&mut self, outcome: CreationOutcome) {
        let current = self
            .pending_creation
            .as_ref()
            .is_some_and(|pending| pending.id == outcome.id);
        if !current {
            debug!("dropping stale creation outcome {}", outcome.id);
            return;
        }
        let Some(pending) = self.pending_creation.take() else {
            return;
        };

        match outcome.result {
            Ok(option) => match self.collection.append_option(option, outcome.group) {
                Ok(created) => {
                    self.notices.push(SelectNotice::OptionCreated {
                        option: created.option.clone(),
                        group: created.group_label.clone(),
                    });
                    self.select_option(created.option, Some(created.index));
                }
                Err(err) => self.notices.push(SelectNotice::CreationFailed {
                    prompt: pending.prompt,
                    error: err.to_string(),
                }),
            },
            Err(err) => {
                debug!("creation of '{}' failed: {err:#}", pending.prompt);
                self.notices.push(SelectNotice::CreationFailed {
                    prompt: pending.prompt,
                    error: err.to_string(),
                });
            }
        }
    }

    /// Forget the in-flight creation, if any; its eventual result will be
    /// ignored on receipt and skipped by the worker where possible.
    pub(crate) fn cancel_pending_creation(&mut self) {
        if self.pending_creation.take().is_some()
            && let Some(channel) = &self.creation
        {
            channel.latest_id.store(0, AtomicOrdering::Release);
            debug!("pending tag creation dropped");
        }
    }
}

fn resolve_initial_selection(
    collection: &OptionCollection,
    initial: &InitialValue,
    multiple: bool,
) -> Selection {
    let values = initial.values();
    if values.is_empty() {
        return Selection::None;
    }
    if multiple {
        let found = collection.find_by_values(&values);
        if found.is_empty() {
            Selection::None
        } else {
            Selection::Multiple(found)
        }
    } else {
        values
            .first()
            .and_then(|value| collection.find_by_value(value))
            .cloned()
            .map(Selection::Single)
            .unwrap_or(Selection::None)
    }
}
