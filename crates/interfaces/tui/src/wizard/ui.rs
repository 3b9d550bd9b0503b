//! TUI rendering: gift wizard drawing, key handling, and event loop.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::cursor::Show;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap};
use tracing::{debug, info, warn};

use giftwise_config::AppConfig;

use crate::catalog::suggestions;
use crate::events::{Action, map_key};
use crate::theme::Theme;
use crate::widgets::{choices, suggestions as cards, transcript};

use super::state::{Step, Style as GiftStyle, Wizard};

pub const PAGE_TITLE: &str = "Assistente de Compras";
pub const BUTTON_LABEL: &str = "Avançar";

pub fn center(area: Rect, horizontal: Constraint, vertical: Constraint) -> Rect {
    let [area] = Layout::horizontal([horizontal])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([vertical]).flex(Flex::Center).areas(area);
    area
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Status {
    Info(String),
    Error(String),
}

/// Cursor and footer state that lives next to the wizard but is not part of
/// the collected profile.
#[derive(Debug, Clone, Default)]
pub(super) struct ViewState {
    pub(super) highlight: usize,
    pub(super) status: Option<Status>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Effect {
    OpenLink(&'static str),
    Quit,
}

fn choice_count(step: Step) -> usize {
    match step {
        Step::Style => GiftStyle::all().len(),
        Step::Suggestions => suggestions().len(),
        Step::RecipientName | Step::Age => 0,
    }
}

pub(super) fn apply_action(
    wizard: &mut Wizard,
    view: &mut ViewState,
    action: Action,
) -> Option<Effect> {
    let before = wizard.step();
    let count = choice_count(before);

    let effect = match action {
        Action::Quit => return Some(Effect::Quit),
        Action::Input(ch) => {
            wizard.push_char(ch);
            None
        }
        Action::Backspace => {
            wizard.pop_char();
            None
        }
        Action::Submit => {
            if before == Step::Style {
                let style = GiftStyle::all()[view.highlight % GiftStyle::all().len()];
                wizard.choose_style(style);
            } else {
                wizard.submit();
            }
            None
        }
        Action::Next => {
            if count > 0 {
                view.highlight = (view.highlight + 1) % count;
            }
            None
        }
        Action::Prev => {
            if count > 0 {
                view.highlight = (view.highlight + count - 1) % count;
            }
            None
        }
        Action::Pick(index) => {
            if let Some(style) = GiftStyle::all().get(index) {
                wizard.choose_style(*style);
            }
            None
        }
        Action::Open => {
            if before.is_terminal() {
                suggestions()
                    .get(view.highlight)
                    .map(|item| Effect::OpenLink(item.link))
            } else {
                None
            }
        }
    };

    if wizard.step() != before {
        view.highlight = 0;
        view.status = None;
    }
    effect
}

fn open_link(link: &str, enabled: bool) -> Status {
    if !enabled {
        return Status::Info(format!("Link: {link}"));
    }
    match open::that_detached(link) {
        Ok(()) => {
            info!(link, "opened suggestion link");
            Status::Info(format!("Aberto no navegador: {link}"))
        }
        Err(err) => {
            warn!(link, error = %err, "could not launch browser");
            Status::Error(format!("não foi possível abrir o navegador ({err}). Acesse: {link}"))
        }
    }
}

/// Raw mode plus the alternate screen.  Dropping the guard restores both,
/// so early returns and panics inside the loop leave a usable terminal.
struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self {
            restore: restore_terminal,
        };
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("restoring terminal state");
        if let Err(err) = (self.restore)() {
            warn!(error = %err, "failed to restore terminal");
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    restore_steps(disable_raw_mode, || {
        execute!(io::stdout(), LeaveAlternateScreen, Show)
    })
}

/// Both steps always run; the first error is reported.
fn restore_steps(
    raw_mode: impl FnOnce() -> io::Result<()>,
    screen: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    let raw_mode = raw_mode();
    let screen = screen();
    raw_mode.and(screen)
}

pub(super) fn run_wizard_tui(config: &AppConfig) -> Result<Wizard> {
    let theme = Theme::from_config(&config.ui.theme);
    let mut wizard = Wizard::new();
    let mut view = ViewState::default();

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    loop {
        terminal.draw(|frame| draw_wizard(frame, &wizard, &view, &theme))?;

        if !event::poll(Duration::from_millis(120))? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let Some(action) = map_key(wizard.step(), key) else {
            continue;
        };

        match apply_action(&mut wizard, &mut view, action) {
            Some(Effect::Quit) => break,
            Some(Effect::OpenLink(link)) => {
                view.status = Some(open_link(link, config.ui.open_links));
            }
            None => {}
        }
    }

    Ok(wizard)
}

pub(super) fn draw_wizard(frame: &mut Frame<'_>, wizard: &Wizard, view: &ViewState, theme: &Theme) {
    let step = wizard.step();
    let step_index = step.index() + 1;
    let step_total = Step::all().len();

    let wizard_area = center(frame.area(), Constraint::Length(100), Constraint::Length(30));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title_top(
            Line::from(Span::styled(
                format!(" {PAGE_TITLE} "),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
        )
        .title_bottom(
            Line::from(Span::styled(
                format!(" Passo {step_index}/{step_total} "),
                Style::default().fg(Color::DarkGray),
            ))
            .right_aligned(),
        );
    frame.render_widget(block, wizard_area);

    let inner_area = wizard_area.inner(Margin {
        vertical: 1,
        horizontal: 2,
    });
    let [sidebar, content] =
        Layout::horizontal([Constraint::Length(30), Constraint::Min(40)]).areas(inner_area);

    transcript::draw_transcript(frame, sidebar, wizard, theme);

    let [progress, prompt, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(6),
        Constraint::Length(2),
    ])
    .areas(content);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent).bg(theme.background))
        .ratio(step_index as f64 / step_total as f64)
        .label(format!("Passo {step_index} de {step_total}"));
    frame.render_widget(gauge, progress);

    let prompt_widget = Paragraph::new(wizard.prompt())
        .style(
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(prompt_widget, prompt);

    match step {
        Step::RecipientName | Step::Age => draw_text_step(frame, body, wizard, theme),
        Step::Style => {
            choices::draw_style_grid(frame, body, view.highlight, wizard.profile().style, theme)
        }
        Step::Suggestions => {
            cards::draw_suggestion_cards(frame, body, suggestions(), view.highlight, theme)
        }
    }

    frame.render_widget(
        Paragraph::new(footer_line(step, view.status.as_ref(), theme)).alignment(Alignment::Center),
        footer,
    );
}

fn draw_text_step(frame: &mut Frame<'_>, area: Rect, wizard: &Wizard, theme: &Theme) {
    let [row, _] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    let [input_area, button_area] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(14)])
            .spacing(1)
            .areas(row);

    let value = wizard.active_field().unwrap_or_default();
    let input_line = if value.is_empty() {
        Line::from(Span::styled(
            wizard.step().placeholder(),
            Style::default().fg(theme.muted),
        ))
    } else {
        Line::from(vec![
            Span::styled(value, Style::default().fg(theme.foreground)),
            Span::styled("▏", Style::default().fg(theme.accent)),
        ])
    };
    let input_widget = Paragraph::new(input_line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.accent)),
    );
    frame.render_widget(input_widget, input_area);

    let enabled = wizard.can_advance();
    let button = Paragraph::new(BUTTON_LABEL)
        .style(theme.button(enabled))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.outline(enabled)),
        );
    frame.render_widget(button, button_area);
}

fn footer_line<'a>(step: Step, status: Option<&'a Status>, theme: &Theme) -> Line<'a> {
    match status {
        Some(Status::Info(message)) => Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Some(Status::Error(message)) => Line::from(vec![
            Span::styled(
                "Erro: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(message.as_str(), Style::default().fg(Color::LightRed)),
        ]),
        None => {
            let hints = match step {
                Step::RecipientName | Step::Age => "Enter=avançar • Backspace=apagar • Esc=sair",
                Step::Style => "←/→ Tab=mover • 1-4/Enter=escolher • Esc=sair",
                Step::Suggestions => "↑/↓=mover • Enter/o=abrir link • q/Esc=sair",
            };
            Line::from(Span::styled(hints, Style::default().fg(theme.muted)))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    use super::*;

    fn render(wizard: &Wizard, view: &ViewState) -> Buffer {
        let backend = TestBackend::new(110, 32);
        let mut terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(error) => panic!("failed to create test terminal: {error}"),
        };
        let theme = Theme::default();
        if let Err(error) = terminal.draw(|frame| draw_wizard(frame, wizard, view, &theme)) {
            panic!("failed to draw test frame: {error}");
        }
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    /// Modifier of the first cell of the button label.
    fn button_modifier(buffer: &Buffer) -> Modifier {
        let area = buffer.area;
        for y in area.top()..area.bottom() {
            let row: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            if let Some(byte_idx) = row.find(BUTTON_LABEL) {
                let col = row[..byte_idx].chars().count() as u16;
                return buffer[(area.left() + col, y)].modifier;
            }
        }
        panic!("button label not rendered");
    }

    fn run(wizard: &mut Wizard, view: &mut ViewState, actions: &[Action]) -> Vec<Effect> {
        actions
            .iter()
            .filter_map(|action| apply_action(wizard, view, *action))
            .collect()
    }

    fn type_text(text: &str) -> Vec<Action> {
        text.chars().map(Action::Input).collect()
    }

    #[test]
    fn first_screen_shows_prompt_placeholder_and_disabled_button() {
        let buffer = render(&Wizard::new(), &ViewState::default());
        let text = buffer_text(&buffer);
        assert!(text.contains(PAGE_TITLE));
        assert!(text.contains("Qual o nome da pessoa que vai receber o presente?"));
        assert!(text.contains("Ex: Ana"));
        assert!(text.contains("Passo 1/4"));
        assert!(button_modifier(&buffer).contains(Modifier::DIM));
    }

    #[test]
    fn button_enables_once_name_is_typed() {
        let mut wizard = Wizard::new();
        let mut view = ViewState::default();
        run(&mut wizard, &mut view, &type_text("Ana"));

        let buffer = render(&wizard, &view);
        let modifier = button_modifier(&buffer);
        assert!(!modifier.contains(Modifier::DIM));
        assert!(modifier.contains(Modifier::BOLD));
        assert!(!buffer_text(&buffer).contains("Ex: Ana"));
    }

    #[test]
    fn enter_on_empty_field_keeps_the_step() {
        let mut wizard = Wizard::new();
        let mut view = ViewState::default();
        run(&mut wizard, &mut view, &[Action::Submit, Action::Input('x'), Action::Backspace, Action::Submit]);
        assert_eq!(wizard.step(), Step::RecipientName);
    }

    #[test]
    fn full_flow_by_keyboard_reaches_suggestions() {
        let mut wizard = Wizard::new();
        let mut view = ViewState::default();
        let mut actions = type_text("Ana");
        actions.push(Action::Submit);
        actions.extend(type_text("25"));
        actions.push(Action::Submit);
        actions.extend([Action::Next, Action::Next, Action::Submit]);
        assert!(run(&mut wizard, &mut view, &actions).is_empty());

        assert_eq!(wizard.step(), Step::Suggestions);
        assert_eq!(wizard.profile().style, Some(GiftStyle::Romantic));
        assert_eq!(view.highlight, 0);

        let text = buffer_text(&render(&wizard, &view));
        assert!(text.contains("Sugestões com base no estilo Romântica:"));
        for item in suggestions() {
            assert!(text.contains(item.title), "{}", item.title);
            assert!(text.contains(&item.price_line()), "{}", item.title);
        }
        assert_eq!(text.matches("Ver produto").count(), 3);
    }

    #[test]
    fn digit_pick_selects_style_immediately() {
        let mut wizard = Wizard::new();
        let mut view = ViewState::default();
        wizard.set_recipient_name("Ana");
        wizard.submit();
        wizard.set_age("25");
        wizard.submit();

        run(&mut wizard, &mut view, &[Action::Pick(1)]);
        assert_eq!(wizard.step(), Step::Suggestions);
        assert_eq!(wizard.profile().style, Some(GiftStyle::Minimalist));
    }

    #[test]
    fn style_cursor_wraps_backwards() {
        let mut wizard = Wizard::new();
        let mut view = ViewState::default();
        wizard.advance();
        wizard.advance();
        run(&mut wizard, &mut view, &[Action::Prev, Action::Submit]);
        assert_eq!(wizard.profile().style, Some(GiftStyle::Adventurous));
    }

    #[test]
    fn navigation_is_ignored_on_text_steps() {
        let mut wizard = Wizard::new();
        let mut view = ViewState::default();
        run(&mut wizard, &mut view, &[Action::Next, Action::Prev, Action::Open]);
        assert_eq!(view.highlight, 0);
        assert_eq!(wizard.step(), Step::RecipientName);
    }

    #[test]
    fn suggestions_are_static_for_any_profile() {
        let mut wizard = Wizard::new();
        let mut view = ViewState::default();
        let mut actions = type_text("Zé");
        actions.push(Action::Submit);
        actions.extend(type_text("80"));
        actions.extend([Action::Submit, Action::Pick(3)]);
        run(&mut wizard, &mut view, &actions);

        let text = buffer_text(&render(&wizard, &view));
        for item in suggestions() {
            assert!(text.contains(item.title));
        }
    }

    #[test]
    fn open_targets_highlighted_suggestion() {
        let mut wizard = Wizard::new();
        let mut view = ViewState::default();
        wizard.advance();
        wizard.advance();
        wizard.choose_style(GiftStyle::Creative);

        let effects = run(&mut wizard, &mut view, &[Action::Next, Action::Open]);
        assert_eq!(effects, vec![Effect::OpenLink("https://www.uaubox.com")]);

        let effects = run(&mut wizard, &mut view, &[Action::Prev, Action::Prev, Action::Open]);
        assert_eq!(effects, vec![Effect::OpenLink("https://www.hotmart.com")]);
    }

    #[test]
    fn quit_is_reported_as_effect() {
        let mut wizard = Wizard::new();
        let mut view = ViewState::default();
        assert_eq!(
            apply_action(&mut wizard, &mut view, Action::Quit),
            Some(Effect::Quit)
        );
    }

    #[test]
    fn transcript_keeps_name_from_when_step_was_left() {
        let mut wizard = Wizard::new();
        wizard.set_recipient_name("Ana");
        wizard.submit();
        wizard.set_recipient_name("Bia");

        let text = buffer_text(&render(&wizard, &ViewState::default()));
        assert!(text.contains("> Ana"));
        assert!(text.contains("Qual a idade de Bia?"));
    }

    #[test]
    fn disabled_link_opening_only_reports_url() {
        assert_eq!(
            open_link("https://www.uaubox.com", false),
            Status::Info("Link: https://www.uaubox.com".to_string())
        );
    }

    #[test]
    fn screen_is_restored_even_when_raw_mode_restore_fails() {
        let mut left_screen = false;
        let result = restore_steps(
            || Err(io::Error::other("tty closed")),
            || {
                left_screen = true;
                Ok(())
            },
        );
        assert!(result.is_err());
        assert!(left_screen);
    }

    #[test]
    fn terminal_guard_restores_on_error_and_panic() {
        static RESTORED: AtomicUsize = AtomicUsize::new(0);
        fn count_restore() -> io::Result<()> {
            RESTORED.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        let early_return = || -> Result<()> {
            let _guard = TerminalGuard {
                restore: count_restore,
            };
            anyhow::bail!("terminal backend unavailable")
        };
        assert!(early_return().is_err());
        assert_eq!(RESTORED.load(Ordering::SeqCst), 1);

        let panicked = std::panic::catch_unwind(|| {
            let _guard = TerminalGuard {
                restore: count_restore,
            };
            panic!("draw failed");
        });
        assert!(panicked.is_err());
        assert_eq!(RESTORED.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn status_replaces_key_hints() {
        let mut wizard = Wizard::new();
        wizard.advance();
        wizard.advance();
        wizard.choose_style(GiftStyle::Creative);
        let view = ViewState {
            highlight: 0,
            status: Some(Status::Error("sem navegador".to_string())),
        };
        let text = buffer_text(&render(&wizard, &view));
        assert!(text.contains("Erro: sem navegador"));
        assert!(!text.contains("abrir link"));
    }
}
