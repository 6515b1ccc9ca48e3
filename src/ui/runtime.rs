use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, warn};
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEventKind,
};
use ratatui::crossterm::execute;
use serde::Serialize;
use throbber_widgets_tui::ThrobberState;

use crate::select::{ClickTarget, SelectNotice, SelectState};

use super::render::{self, WidgetAreas};
use super::theme::Theme;

const TICK: Duration = Duration::from_millis(50);

/// Result of one interactive session.
#[derive(Clone, Debug, Serialize)]
pub struct SelectOutcome {
    /// `false` when the session was dismissed with Escape.
    pub accepted: bool,
    pub values: Vec<String>,
    pub names: Vec<String>,
}

impl SelectOutcome {
    fn from_state(state: &SelectState, accepted: bool) -> Self {
        let selection = state.selection();
        Self {
            accepted,
            values: selection.values(),
            names: selection
                .options()
                .iter()
                .map(|option| option.name.clone())
                .collect(),
        }
    }
}

/// Run the widget full screen until the user accepts or dismisses it.
///
/// Drives the draw/poll loop: every tick drains background creation results
/// and redraws; input events are translated into semantic widget events via
/// the hit areas recorded by the renderer.
pub fn run(state: &mut SelectState) -> Result<SelectOutcome> {
    let mut terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture).context("failed to enable mouse capture")?;

    let result = event_loop(state, &mut terminal);

    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

fn event_loop(
    state: &mut SelectState,
    terminal: &mut ratatui::DefaultTerminal,
) -> Result<SelectOutcome> {
    let theme = Theme::default();
    let mut areas = WidgetAreas::default();
    let mut throbber = ThrobberState::default();

    loop {
        state.pump_creation_results();
        for notice in state.take_notices() {
            match notice {
                SelectNotice::OptionCreated { option, group } => {
                    debug!("created option '{}' (group: {group:?})", option.value);
                }
                SelectNotice::CreationFailed { prompt, error } => {
                    warn!("creating '{prompt}' failed: {error}");
                }
            }
        }
        throbber.calc_next();

        let snapshot = state.snapshot();
        terminal
            .draw(|frame| render::draw(frame, &snapshot, &theme, &mut areas, &mut throbber))
            .context("failed to draw frame")?;

        if !event::poll(TICK).context("failed to poll for input")? {
            continue;
        }
        match event::read().context("failed to read input")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if state.expanded() {
                    state.handle_key(key);
                } else {
                    match key.code {
                        KeyCode::Enter => return Ok(SelectOutcome::from_state(state, true)),
                        KeyCode::Esc | KeyCode::Char('q') => {
                            return Ok(SelectOutcome::from_state(state, false));
                        }
                        KeyCode::Down | KeyCode::Char(' ') => {
                            state.handle_click(ClickTarget::Trigger);
                        }
                        _ => {}
                    }
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    if areas.inside_widget(mouse.column, mouse.row) {
                        state.handle_mouse_down_inside();
                        if let Some(target) = areas.target_at(mouse.column, mouse.row) {
                            state.handle_click(target);
                        }
                    } else {
                        // No real focus in a terminal; a click outside the
                        // widget is the blur.
                        state.handle_blur();
                    }
                }
                MouseEventKind::Moved => {
                    if let Some(value) = areas.hovered_option(mouse.column, mouse.row) {
                        let value = value.to_string();
                        state.handle_hover(&value);
                    }
                }
                _ => {}
            },
            _ => {}
        }
    }
}
