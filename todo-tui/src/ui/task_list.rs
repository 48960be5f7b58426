use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph},
    Frame,
};
use time::{Date, OffsetDateTime, UtcOffset};

use crate::app::{App, Filter, FocusedPane};

use super::Palette;

pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette) {
    let focused = app.focused_pane == FocusedPane::List;
    let border_color = if focused { palette.focus } else { palette.dim };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            " Your Tasks ",
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
        ))
        .padding(Padding::horizontal(1));

    let visible = app.visible_todos();
    if visible.is_empty() {
        let text = match app.filter {
            Filter::All => "You don't have any tasks yet.",
            Filter::Completed => "No completed tasks yet.",
            Filter::Incomplete => "All tasks completed!",
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                text,
                Style::default().fg(palette.dim),
            )))
            .block(block)
            .alignment(ratatui::layout::Alignment::Center),
            area,
        );
        return;
    }

    let today = local_today();
    let items: Vec<ListItem> = visible
        .iter()
        .map(|todo| {
            let marker = if todo.completed {
                Span::styled("[x] ", Style::default().fg(palette.success))
            } else {
                Span::styled("[ ] ", Style::default().fg(palette.accent))
            };

            let title_style = if todo.completed {
                Style::default()
                    .fg(palette.dim)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(palette.fg)
            };

            let mut line = vec![marker, Span::styled(todo.title.clone(), title_style)];

            if let Some(due) = todo.due_date {
                let overdue = due < today && !todo.completed;
                let due_style = if overdue {
                    Style::default().fg(palette.error).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(palette.dim)
                };
                line.push(Span::raw("  "));
                line.push(Span::styled(format!("due {due}"), due_style));
            }

            line.push(Span::raw("  "));
            line.push(if todo.completed {
                Span::styled("completed", Style::default().fg(palette.success))
            } else {
                Span::styled("pending", Style::default().fg(palette.accent))
            });

            let mut lines = vec![Line::from(line)];
            if let Some(desc) = &todo.description {
                if !desc.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("    {desc}"),
                        Style::default().fg(palette.dim),
                    )));
                }
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .fg(palette.focus)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.list_index.min(visible.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn local_today() -> Date {
    OffsetDateTime::now_utc()
        .to_offset(UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
        .date()
}
