use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{catalog::SuggestionItem, theme::Theme};

const CARD_HEIGHT: u16 = 5;

pub fn draw_suggestion_cards(
    frame: &mut Frame<'_>,
    area: Rect,
    items: &[SuggestionItem],
    highlighted: usize,
    theme: &Theme,
) {
    let rows = Layout::vertical(items.iter().map(|_| Constraint::Length(CARD_HEIGHT))).split(area);

    for (index, (item, row)) in items.iter().zip(rows.iter()).enumerate() {
        let lines = vec![
            Line::from(Span::styled(
                item.title,
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(item.price_line(), Style::default().fg(theme.muted))),
            Line::from(vec![
                Span::styled(
                    "Ver produto",
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::UNDERLINED),
                ),
                Span::styled(format!("  {}", item.link), Style::default().fg(theme.muted)),
            ]),
        ];

        let widget = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.outline(index == highlighted))
                .style(Style::default().bg(theme.card)),
        );
        frame.render_widget(widget, *row);
    }
}
