use crate::app::{App, FocusedPane, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

mod auth;
mod delete_dialog;
mod task_form;
mod task_list;
mod theme;
pub(crate) mod utils;

pub use theme::Palette;

pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = Palette::for_theme(app.theme());

    // Theme applied at the root; everything below inherits it.
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
        frame.area(),
    );

    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, root[0], app, &palette);

    let body = root[1];
    match app.current_view {
        View::Login => auth::render_login(frame, app, body, &palette),
        View::Register => auth::render_register(frame, app, body, &palette),
        View::Tasks => render_tasks_body(frame, app, body, &palette),
        View::ConfirmDelete => {
            render_tasks_body(frame, app, body, &palette);
            delete_dialog::render_delete_confirm_dialog(frame, app, &palette);
        }
    }

    render_status(frame, root[2], app, &palette);
    render_footer(frame, root[3], app, &palette);
}

fn render_tasks_body(frame: &mut Frame, app: &mut App, body: Rect, palette: &Palette) {
    let panes = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(body);

    task_form::render_task_form(frame, app, panes[0], palette);
    task_list::render_task_list(frame, app, panes[1], palette);
}

fn render_header(frame: &mut Frame, area: Rect, app: &mut App, palette: &Palette) {
    let count = app.todos.len();
    let noun = if count == 1 { "task" } else { "tasks" };

    let mut left = vec![
        Span::styled(
            " Todo ",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{count} {noun}"), Style::default().fg(palette.dim)),
    ];
    if let Some(email) = &app.user_email {
        left.push(Span::styled("  ·  ", Style::default().fg(palette.dim)));
        left.push(Span::styled(email.clone(), Style::default().fg(palette.fg)));
    }

    // First header line: title/count/account left, filter + theme right.
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(34)])
        .split(Rect { height: 1, ..area });
    frame.render_widget(Paragraph::new(Line::from(left)), cols[0]);

    let indicators = format!(
        "filter: {}  theme: {} ",
        app.filter.label(),
        app.theme().label()
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            indicators,
            Style::default().fg(palette.dim),
        )))
        .alignment(ratatui::layout::Alignment::Right),
        cols[1],
    );

    if app.is_loading {
        let spinner_area = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: 1,
            height: 1,
        };
        let throbber = throbber_widgets_tui::Throbber::default()
            .style(Style::default().fg(palette.accent))
            .throbber_style(Style::default().fg(palette.accent))
            .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
            .use_type(throbber_widgets_tui::WhichUse::Spin);
        frame.render_stateful_widget(throbber, spinner_area, &mut app.throbber_state);
    }
}

fn render_status(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let Some(message) = &app.status_message else {
        return;
    };
    let color = if message.starts_with("Failed")
        || message.starts_with("Invalid")
        || message.contains("required")
        || message.starts_with("Could not")
        || message.contains("failed")
    {
        palette.error
    } else {
        palette.success
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(color),
        ))),
        area,
    );
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let hints = match app.current_view {
        View::Login => "Tab: Switch field  Enter: Log in  Ctrl+R: Register  Esc: Quit",
        View::Register => "Tab: Switch field  Enter: Create account  Esc: Back to login",
        View::ConfirmDelete => "y: Delete  n: Keep",
        View::Tasks => match app.focused_pane {
            FocusedPane::List => {
                "j/k: Move  Space: Toggle  Enter: Edit  d: Delete  f: Filter  t: Theme  n: New  r: Refresh  Ctrl+L: Logout  q: Quit"
            }
            FocusedPane::Form => "Tab: Next field  Enter: Save  Esc: Back to list  Ctrl+X: Clear field",
        },
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {hints}"),
            Style::default().fg(palette.dim),
        ))),
        area,
    );
}
