use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

use crate::app::App;

use super::utils::centered_rect;
use super::Palette;

pub fn render_delete_confirm_dialog(frame: &mut Frame, app: &App, palette: &Palette) {
    let Some(ctx) = &app.delete_context else {
        return;
    };

    let area = centered_rect(52, 8, frame.area());
    frame.render_widget(Clear, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            ctx.title.clone(),
            Style::default().fg(palette.fg),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y] Yes", Style::default().fg(palette.error)),
            Span::raw("    "),
            Span::styled("[n] No", Style::default().fg(palette.fg)),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.error))
                .title(" Delete Task? ")
                .padding(Padding::horizontal(1)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
