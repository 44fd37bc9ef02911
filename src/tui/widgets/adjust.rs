use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::AdjustTarget;
use crate::tui::theme;
use crate::utils::format::format_signed_minutes;

pub fn render(frame: &mut Frame, area: Rect, pending: i64, target: AdjustTarget) {
    let block = Block::default()
        .title(Span::styled(" Bulk Adjustment ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(pending != 0))
        .style(theme::surface());

    let targets: Vec<Span> = [AdjustTarget::Adhan, AdjustTarget::Iqama, AdjustTarget::Both]
        .iter()
        .flat_map(|t| {
            let (icon, style) = if *t == target {
                ("◉ ", theme::gold().add_modifier(Modifier::BOLD))
            } else {
                ("○ ", theme::dim())
            };
            [Span::styled(icon, style), Span::styled(format!("{}   ", t.label()), style)]
        })
        .collect();

    let delta_style = match pending {
        0 => theme::dim(),
        d if d > 0 => theme::adhan().add_modifier(Modifier::BOLD),
        _ => theme::red().add_modifier(Modifier::BOLD),
    };

    let lines = vec![
        Line::from(""),
        Line::from(targets),
        Line::from(""),
        Line::from(Span::styled(format_signed_minutes(pending), delta_style)),
        Line::from(""),
        Line::from(vec![
            Span::styled("[-/+]", theme::gold()),
            Span::styled(" 1 min  ", theme::dim()),
            Span::styled("[</>]", theme::gold()),
            Span::styled(" 5 min  ", theme::dim()),
            Span::styled("[a]", theme::gold()),
            Span::styled(" target  ", theme::dim()),
            Span::styled("[b]", theme::gold()),
            Span::styled(" apply", theme::dim()),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
