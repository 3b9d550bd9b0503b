use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{theme::Theme, wizard::Style as GiftStyle};

/// The four style buttons in a 2x2 grid.  `highlighted` is the keyboard
/// cursor; `selected` is the style already stored in the profile.
pub fn draw_style_grid(
    frame: &mut Frame<'_>,
    area: Rect,
    highlighted: usize,
    selected: Option<GiftStyle>,
    theme: &Theme,
) {
    let rows = Layout::vertical([Constraint::Length(3), Constraint::Length(3)]).split(area);
    let styles = GiftStyle::all();

    for (row_index, row) in rows.iter().enumerate() {
        let cells =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(*row);
        for (col_index, cell) in cells.iter().enumerate() {
            let index = row_index * 2 + col_index;
            let style = styles[index];
            draw_choice(
                frame,
                *cell,
                index,
                style,
                index == highlighted,
                selected == Some(style),
                theme,
            );
        }
    }
}

fn draw_choice(
    frame: &mut Frame<'_>,
    area: Rect,
    index: usize,
    style: GiftStyle,
    highlighted: bool,
    selected: bool,
    theme: &Theme,
) {
    let text_style = if selected {
        Style::default()
            .fg(theme.background)
            .bg(theme.foreground)
            .add_modifier(Modifier::BOLD)
    } else if highlighted {
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.foreground)
    };

    let widget = Paragraph::new(format!("{}. {}", index + 1, style.label()))
        .style(text_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.outline(highlighted)),
        );
    frame.render_widget(widget, area);
}
