use ratatui::Frame;
use ratatui::layout::{Alignment, Margin, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::options::{OptionEntry, OptionIndex, SelectOption, creation_prompt};
use crate::select::{ClickTarget, SelectSnapshot, Selection};

use super::theme::Theme;

const MAX_WIDTH: u16 = 64;

/// Screen areas recorded during the last draw, used to map pointer events
/// back onto widget surfaces.
#[derive(Default)]
pub struct WidgetAreas {
    widget: Option<Rect>,
    trigger: Option<Rect>,
    clear_button: Option<Rect>,
    option_rows: Vec<(Rect, String)>,
    chip_removes: Vec<(Rect, String)>,
}

impl WidgetAreas {
    fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn inside_widget(&self, column: u16, row: u16) -> bool {
        self.widget.is_some_and(|area| contains(area, column, row))
    }

    /// Resolve a click position to the surface it hit, if any. `None` means
    /// the click landed on chrome (borders, labels, the search box) and has
    /// no semantic effect of its own.
    pub fn target_at(&self, column: u16, row: u16) -> Option<ClickTarget> {
        if let Some((_, value)) = self
            .chip_removes
            .iter()
            .find(|(area, _)| contains(*area, column, row))
        {
            return Some(ClickTarget::ChipRemove(value.clone()));
        }
        if self
            .clear_button
            .is_some_and(|area| contains(area, column, row))
        {
            return Some(ClickTarget::ClearSelection);
        }
        if let Some((_, value)) = self
            .option_rows
            .iter()
            .find(|(area, _)| contains(*area, column, row))
        {
            return Some(ClickTarget::Option(value.clone()));
        }
        if self.trigger.is_some_and(|area| contains(area, column, row)) {
            return Some(ClickTarget::Trigger);
        }
        None
    }

    /// Value of the option row under the pointer, if any.
    pub fn hovered_option(&self, column: u16, row: u16) -> Option<&str> {
        self.option_rows
            .iter()
            .find(|(area, _)| contains(*area, column, row))
            .map(|(_, value)| value.as_str())
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    area.contains(Position { x: column, y: row })
}

/// One visible line of the dropdown list.
enum ListRow {
    GroupLabel(String),
    Option {
        index: OptionIndex,
        option: SelectOption,
        nested: bool,
    },
}

pub fn draw(
    frame: &mut Frame,
    snapshot: &SelectSnapshot,
    theme: &Theme,
    areas: &mut WidgetAreas,
    throbber: &mut ThrobberState,
) {
    areas.reset();
    let outer = frame.area().inner(Margin {
        horizontal: 1,
        vertical: 0,
    });
    let column = Rect {
        width: outer.width.min(MAX_WIDTH),
        ..outer
    };
    if column.width < 8 || column.height < 3 {
        return;
    }

    let trigger_area = Rect {
        height: 3,
        ..column
    };
    draw_trigger(frame, snapshot, theme, areas, trigger_area);
    areas.trigger = Some(trigger_area);
    areas.widget = Some(trigger_area);

    if snapshot.expanded && column.height > 3 {
        let below = Rect {
            y: column.y + 3,
            height: column.height - 3,
            ..column
        };
        let used = draw_dropdown(frame, snapshot, theme, areas, throbber, below);
        areas.widget = Some(trigger_area.union(used));
    }
}

/// Display area: chips or the selected name, the clear button and the
/// expansion arrow. Returns nothing; hit areas land in `areas`.
fn draw_trigger(
    frame: &mut Frame,
    snapshot: &SelectSnapshot,
    theme: &Theme,
    areas: &mut WidgetAreas,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Right-hand controls first so the content knows how much room is left.
    let arrow = if snapshot.expanded { "▴" } else { "▾" };
    let arrow_area = Rect {
        x: inner.right().saturating_sub(1),
        width: 1,
        height: 1,
        ..inner
    };
    frame.render_widget(Paragraph::new(arrow).style(theme.border), arrow_area);

    let mut content_width = inner.width.saturating_sub(2);
    if !snapshot.selection.is_none() {
        let clear_area = Rect {
            x: inner.right().saturating_sub(3),
            width: 1,
            height: 1,
            ..inner
        };
        frame.render_widget(Paragraph::new("✕").style(theme.border), clear_area);
        areas.clear_button = Some(clear_area);
        content_width = content_width.saturating_sub(2);
    }

    let content = Rect {
        width: content_width,
        height: 1,
        ..inner
    };
    match &snapshot.selection {
        Selection::None => {
            frame.render_widget(
                Paragraph::new(snapshot.placeholder.as_str()).style(theme.placeholder),
                content,
            );
        }
        Selection::Single(option) => {
            frame.render_widget(Paragraph::new(option.name.as_str()), content);
        }
        Selection::Multiple(options) => {
            draw_chips(frame, options, theme, areas, content);
        }
    }
}

/// Chip row for multi-selection. Each chip carries its own remove cell,
/// recorded for hit-testing.
fn draw_chips(
    frame: &mut Frame,
    options: &[SelectOption],
    theme: &Theme,
    areas: &mut WidgetAreas,
    area: Rect,
) {
    let mut spans = Vec::new();
    let mut offset: u16 = 0;
    for option in options {
        let label = format!(" {} ✕ ", option.name);
        let width = label.width() as u16;
        if offset + width > area.width {
            spans.push(Span::styled("…", theme.placeholder));
            break;
        }
        // The ✕ cell sits two columns before the chip's trailing space.
        let remove_area = Rect {
            x: area.x + offset + width - 2,
            width: 1,
            height: 1,
            ..area
        };
        areas.chip_removes.push((remove_area, option.value.clone()));
        spans.push(Span::styled(label, theme.chip));
        spans.push(Span::raw(" "));
        offset += width + 1;
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Search box plus the filtered option list. Returns the area actually used
/// so the widget bounds stop at the last drawn row.
fn draw_dropdown(
    frame: &mut Frame,
    snapshot: &SelectSnapshot,
    theme: &Theme,
    areas: &mut WidgetAreas,
    throbber: &mut ThrobberState,
    area: Rect,
) -> Rect {
    let search_area = Rect { height: 3, ..area };
    let search_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title("search");
    let search_inner = search_block.inner(search_area);
    frame.render_widget(search_block, search_area);
    frame.render_widget(Paragraph::new(snapshot.search.as_str()), search_inner);
    frame.set_cursor_position(Position {
        x: search_inner.x + (snapshot.search.width() as u16).min(search_inner.width),
        y: search_inner.y,
    });

    let rows = list_rows(snapshot);
    let available = area.height.saturating_sub(3);
    if available < 3 {
        return search_area;
    }

    let list_height = ((rows.len().max(1) as u16) + 2).min(available);
    let list_area = Rect {
        y: area.y + 3,
        height: list_height,
        ..area
    };
    let list_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border);
    let list_inner = list_block.inner(list_area);
    frame.render_widget(list_block, list_area);

    if rows.is_empty() {
        frame.render_widget(
            Paragraph::new(snapshot.no_data_message.as_str())
                .style(theme.empty)
                .alignment(Alignment::Center),
            list_inner,
        );
        return search_area.union(list_area);
    }

    for (line_index, row) in rows.iter().enumerate() {
        if line_index as u16 >= list_inner.height {
            break;
        }
        let row_area = Rect {
            y: list_inner.y + line_index as u16,
            height: 1,
            ..list_inner
        };
        match row {
            ListRow::GroupLabel(label) => {
                frame.render_widget(
                    Paragraph::new(label.as_str()).style(theme.group_label),
                    row_area,
                );
            }
            ListRow::Option {
                index,
                option,
                nested,
            } => {
                areas.option_rows.push((row_area, option.value.clone()));
                let pending = snapshot
                    .pending_creation
                    .as_deref()
                    .is_some_and(|prompt| option.name == creation_prompt(prompt));
                if pending {
                    let spinner = Throbber::default()
                        .label(option.name.clone())
                        .throbber_style(theme.pending)
                        .style(theme.pending);
                    frame.render_stateful_widget(spinner, row_area, throbber);
                    continue;
                }
                let selected = snapshot.selection.contains(&option.value);
                let mut style = if snapshot.focused == Some(*index) {
                    theme.focused
                } else {
                    theme.option
                };
                if selected {
                    style = style.patch(theme.selected);
                }
                let indent = if *nested { "  " } else { "" };
                let mark = if selected { "✓ " } else { "  " };
                frame.render_widget(
                    Paragraph::new(format!("{indent}{mark}{}", option.name)).style(style),
                    row_area,
                );
            }
        }
    }

    search_area.union(list_area)
}

/// Flatten the snapshot's entry sequence into drawable lines, keeping the
/// composite address of every option for focus styling.
fn list_rows(snapshot: &SelectSnapshot) -> Vec<ListRow> {
    let mut rows = Vec::new();
    for (position, entry) in snapshot.entries.iter().enumerate() {
        match entry {
            OptionEntry::Group(group) => {
                rows.push(ListRow::GroupLabel(group.label.clone()));
                for (nested, option) in group.options.iter().enumerate() {
                    rows.push(ListRow::Option {
                        index: OptionIndex::Grouped(position, nested),
                        option: option.clone(),
                        nested: true,
                    });
                }
            }
            OptionEntry::Option(option) => rows.push(ListRow::Option {
                index: OptionIndex::Flat(position),
                option: option.clone(),
                nested: false,
            }),
        }
    }
    rows
}
