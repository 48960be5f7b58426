use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::app::{App, FocusedPane, FormField, TextInput};

use super::Palette;

pub fn render_task_form(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette) {
    let focused = app.focused_pane == FocusedPane::Form;
    let border_color = if focused { palette.focus } else { palette.dim };

    let title = match app.editing_id {
        Some(id) => format!(" Edit Task #{id} "),
        None => " Add New Task ".to_string(),
    };

    let lines = vec![
        Line::from(""),
        field_line(
            "Title *     ",
            &app.draft.title,
            focused && app.draft.focused_field == FormField::Title,
            palette,
        ),
        field_line(
            "Description ",
            &app.draft.description,
            focused && app.draft.focused_field == FormField::Description,
            palette,
        ),
        field_line(
            "Due date    ",
            &app.draft.due_date,
            focused && app.draft.focused_field == FormField::DueDate,
            palette,
        ),
        Line::from(""),
        Line::from(Span::styled(
            if app.editing_id.is_some() {
                "Enter: Update task    Esc: Cancel edit"
            } else {
                "Enter: Add task"
            },
            Style::default().fg(palette.dim),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(
                title,
                Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
            ))
            .padding(Padding::horizontal(2)),
    );

    frame.render_widget(paragraph, area);
}

fn field_line<'a>(
    label: &'a str,
    input: &'a TextInput,
    active: bool,
    palette: &Palette,
) -> Line<'a> {
    let label_style = if active {
        Style::default().fg(palette.focus)
    } else {
        Style::default().fg(palette.dim)
    };

    let mut spans = vec![Span::styled(label, label_style)];
    if active {
        // Show the cursor as a reversed cell at its position.
        let (before, after) = input.split_at_cursor();
        let mut rest = after.chars();
        let cursor_char = rest.next().unwrap_or(' ');
        spans.push(Span::styled(before, Style::default().fg(palette.fg)));
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().add_modifier(Modifier::REVERSED),
        ));
        spans.push(Span::styled(
            rest.as_str().to_string(),
            Style::default().fg(palette.fg),
        ));
    } else {
        spans.push(Span::styled(
            input.value.as_str(),
            Style::default().fg(palette.fg),
        ));
    }
    Line::from(spans)
}
