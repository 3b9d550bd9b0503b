use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::{theme::Theme, wizard::Wizard};

/// Earlier prompts exactly as they read when their step was left, followed
/// by the step list with the current one marked.
pub fn draw_transcript(frame: &mut Frame<'_>, area: Rect, wizard: &Wizard, theme: &Theme) {
    let mut lines = Vec::new();
    for answered in wizard.transcript() {
        lines.push(Line::from(Span::styled(
            answered.prompt.clone(),
            Style::default().fg(theme.muted),
        )));
        lines.push(Line::from(Span::styled(
            format!("> {}", answered.answer),
            Style::default().fg(theme.foreground),
        )));
        lines.push(Line::from(""));
    }

    if wizard.transcript().is_empty() {
        lines.push(Line::from(Span::styled(
            "Nenhuma resposta ainda",
            Style::default().fg(theme.muted),
        )));
        lines.push(Line::from(""));
    }

    for step in crate::wizard::Step::all() {
        if step == wizard.step() {
            lines.push(Line::from(Span::styled(
                format!("> {}", step.label()),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                format!("  {}", step.label()),
                Style::default().fg(theme.foreground),
            )));
        }
    }

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Respostas ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.muted)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(widget, area);
}
