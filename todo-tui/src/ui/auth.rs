use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

use crate::app::{App, AuthField, AuthForm};

use super::utils::centered_rect;
use super::Palette;

pub fn render_login(frame: &mut Frame, app: &mut App, body: Rect, palette: &Palette) {
    render_credentials_box(
        frame,
        body,
        palette,
        &app.login_form,
        " Login ",
        "Organize your tasks. Log in to continue.",
        "Email",
    );
}

pub fn render_register(frame: &mut Frame, app: &mut App, body: Rect, palette: &Palette) {
    render_credentials_box(
        frame,
        body,
        palette,
        &app.register_form,
        " Register ",
        "Create an account to manage your tasks.",
        "Email",
    );
}

fn render_credentials_box(
    frame: &mut Frame,
    body: Rect,
    palette: &Palette,
    form: &AuthForm,
    title: &str,
    tagline: &str,
    username_label: &str,
) {
    let area = centered_rect(56, 11, body);
    frame.render_widget(Clear, area);

    let username_focused = form.focused_field == AuthField::Username;
    let password_focused = form.focused_field == AuthField::Password;

    let label_style = |focused: bool| {
        if focused {
            Style::default().fg(palette.focus)
        } else {
            Style::default().fg(palette.dim)
        }
    };
    let value_style = |focused: bool| {
        if focused {
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.fg)
        }
    };

    // Password is masked
    let password_display = "•".repeat(form.password.value.chars().count());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(tagline, Style::default().fg(palette.dim))),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("{username_label}:    "),
                label_style(username_focused),
            ),
            Span::styled(form.username.value.clone(), value_style(username_focused)),
        ]),
        Line::from(vec![
            Span::styled("Password: ", label_style(password_focused)),
            Span::styled(password_display, value_style(password_focused)),
        ]),
        Line::from(""),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent))
                .title(Span::styled(
                    title.to_string(),
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ))
                .padding(Padding::horizontal(2)),
        )
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, area);
}
