use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, clock: &str, timezone: &str, pinned: bool) {
    let title_line = Line::from(vec![
        Span::styled("  مواقيت الصلاة  ", theme::gold().add_modifier(Modifier::BOLD)),
        Span::styled("Prayer Times", theme::gold()),
    ]);

    let mut clock_spans = vec![
        Span::styled(clock, theme::amber()),
        Span::styled("  ·  ", theme::dim()),
        Span::styled(timezone, theme::dim()),
    ];
    if pinned {
        clock_spans.push(Span::styled("  (set manually, [T] live)", theme::dim()));
    }

    let text = vec![title_line, Line::from(""), Line::from(clock_spans)];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::gold().add_modifier(Modifier::BOLD))
        .style(theme::base());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
