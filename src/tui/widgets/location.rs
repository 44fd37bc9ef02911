use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::prayer_times::LocationSession;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, session: &LocationSession) {
    let block = Block::default()
        .title(Span::styled(" Location ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(false))
        .style(theme::surface());

    let country_name = session
        .current_country()
        .map(|c| c.name)
        .unwrap_or(session.selected_country());
    let city = if session.selected_city().is_empty() {
        "(none)"
    } else {
        session.selected_city()
    };

    let status = if session.is_loading() {
        Span::styled("  ⟳ loading…", theme::amber().add_modifier(Modifier::BOLD))
    } else {
        Span::styled("  [r] refresh", theme::dim())
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Country  ", theme::dim()),
            Span::styled(country_name, theme::bold()),
            Span::styled("   [c]", theme::gold()),
        ]),
        Line::from(vec![
            Span::styled("  City     ", theme::dim()),
            Span::styled(city, theme::bold()),
            Span::styled("   [v]", theme::gold()),
        ]),
        Line::from(""),
        Line::from(status),
    ];

    if let Some(label) = session.last_fetched() {
        lines.push(Line::from(vec![
            Span::styled("  Last updated: ", theme::dim()),
            Span::styled(label, theme::dim()),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
