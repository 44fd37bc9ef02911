use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::models::{PrayerTable, TimeField};
use crate::tui::theme;
use crate::utils::format::{format_time_cell, pad_to_width};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    table: &PrayerTable,
    focused_idx: usize,
    focused_field: TimeField,
) {
    let block = Block::default()
        .title(Span::styled(" Prayers ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(true))
        .style(theme::surface());

    let header = ListItem::new(Line::from(vec![
        Span::styled(format!("  {:<18}", ""), theme::dim()),
        Span::styled(format!("{:<12}", "Adhan"), theme::adhan()),
        Span::styled("Iqama", theme::iqama()),
    ]));

    let mut items = vec![header, ListItem::new(Line::from(""))];

    items.extend(table.iter().enumerate().map(|(i, (prayer, entry))| {
        let row_focused = i == focused_idx;

        let cell_style = |field: TimeField, base: Style| {
            if row_focused && field == focused_field {
                base.add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                base
            }
        };

        let name_style = if row_focused {
            theme::gold().add_modifier(Modifier::BOLD)
        } else {
            theme::bold()
        };

        let marker = if row_focused { "▸ " } else { "  " };

        ListItem::new(Line::from(vec![
            Span::styled(marker, theme::gold()),
            Span::styled(format!("{:<9}", prayer.display_name()), name_style),
            Span::styled(pad_to_width(prayer.arabic_name(), 9), theme::dim()),
            Span::styled(
                format!("{:<12}", format_time_cell(entry.adhan)),
                cell_style(TimeField::Adhan, theme::adhan()),
            ),
            Span::styled(
                format_time_cell(entry.iqama),
                cell_style(TimeField::Iqama, theme::iqama()),
            ),
        ]))
    }));

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
