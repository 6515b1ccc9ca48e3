use log::debug;
use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::options::{SelectOption, is_creation_prompt};

use super::creation::{CreationCommand, PendingCreation};
use super::state::{SelectNotice, SelectState};

/// Identity of the surface a pointer event originated from, supplied by the
/// rendering layer. Routing by target replaces DOM event bubbling: a click on
/// a chip or the clear control never doubles as a trigger click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The widget's own trigger surface: display area, dropdown button or
    /// the widget root.
    Trigger,
    /// A rendered option row, identified by value.
    Option(String),
    /// The clear-selection control.
    ClearSelection,
    /// The remove control on a selected chip.
    ChipRemove(String),
    /// Anywhere outside the widget.
    Outside,
}

impl SelectState {
    /// Interpret a key event while the dropdown is expanded. Keys are owned
    /// by the search box except for navigation, accept and dismiss.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if !self.expanded {
            return;
        }
        match key.code {
            KeyCode::Down => {
                self.focused = self.filtered_view().next_index(self.focused);
            }
            KeyCode::Up => {
                self.focused = self.filtered_view().previous_index(self.focused);
            }
            KeyCode::Enter => self.accept_focused(),
            KeyCode::Esc => {
                self.search.clear();
                self.collapse();
            }
            _ => {
                if self.search.input(key) {
                    // New filter, new geometry: focus restarts at the top and
                    // any in-flight creation for the old text is obsolete.
                    self.focused = self.filtered_view().first_index();
                    self.cancel_pending_creation();
                }
            }
        }
    }

    /// Route a click by its originating surface.
    pub fn handle_click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Trigger => self.toggle_expanded(),
            ClickTarget::Option(value) => self.option_clicked(&value),
            ClickTarget::ClearSelection => self.clear_selection(),
            ClickTarget::ChipRemove(value) => {
                // Removing a chip refocuses the widget internally; the blur
                // this provokes must not collapse the dropdown.
                self.pending_blur_suppressed = true;
                self.remove_option(&value);
            }
            ClickTarget::Outside => {}
        }
    }

    /// Visual focus follows the hovered option without stealing input focus
    /// from the search box.
    pub fn handle_hover(&mut self, value: &str) {
        let view = self.filtered_view();
        if let Some(option) = view.find_by_value(value).cloned() {
            self.focused = view.find_option_index(&option);
        }
    }

    /// A pointer went down inside the widget boundary: the blur that follows
    /// is an internal refocus and must be ignored.
    pub fn handle_mouse_down_inside(&mut self) {
        self.pending_blur_suppressed = true;
    }

    /// Focus left the widget. Collapses unless the matching pointer-down
    /// happened inside the widget, which consumes the suppression.
    pub fn handle_blur(&mut self) {
        if self.pending_blur_suppressed {
            self.pending_blur_suppressed = false;
            return;
        }
        self.collapse();
    }

    fn accept_focused(&mut self) {
        let view = self.filtered_view();
        let Some(index) = self.focused else {
            return;
        };
        let Ok(option) = view.get(index).cloned() else {
            // Empty dropdown or focus not yet resolved against this view.
            return;
        };
        if is_creation_prompt(&option.name, self.search.text()) {
            self.create_and_select(option);
        } else {
            self.select_option(option, None);
        }
    }

    fn option_clicked(&mut self, value: &str) {
        let view = self.filtered_view();
        let Some(option) = view.find_by_value(value).cloned() else {
            return;
        };
        if self.selection.contains(&option.value) {
            self.unselect_option(&option.value);
        } else if is_creation_prompt(&option.name, self.search.text()) {
            self.create_and_select(option);
        } else {
            self.select_option(option, None);
        }
    }

    /// Accept a creation prompt: append an option named after the search
    /// text, synchronously or through the background handler.
    fn create_and_select(&mut self, prompt: SelectOption) {
        let name = self.search.text().to_string();
        if self.creation.is_some() {
            self.begin_async_creation(name, prompt.group_index);
            return;
        }
        if !self.sync_creation {
            return;
        }
        match self.collection.create_option(&name, prompt.group_index) {
            Ok(created) => {
                self.notices.push(SelectNotice::OptionCreated {
                    option: created.option.clone(),
                    group: created.group_label.clone(),
                });
                self.select_option(created.option, Some(created.index));
            }
            Err(err) => self.notices.push(SelectNotice::CreationFailed {
                prompt: name,
                error: err.to_string(),
            }),
        }
    }

    fn begin_async_creation(&mut self, name: String, group: Option<usize>) {
        if self
            .pending_creation
            .as_ref()
            .is_some_and(|pending| pending.prompt == name)
        {
            // At most one in-flight creation per distinct prompt text.
            return;
        }
        let Some(channel) = &self.creation else {
            return;
        };
        self.next_creation_id += 1;
        let id = self.next_creation_id;
        channel
            .latest_id
            .store(id, std::sync::atomic::Ordering::Release);
        self.pending_creation = Some(PendingCreation {
            id,
            prompt: name.clone(),
            group,
        });
        let _ = channel.tx.send(CreationCommand::Create { id, name, group });
        debug!("requested background creation {id}");
    }
}
