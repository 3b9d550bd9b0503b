use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::wizard::Step;

/// What a key press means on the current wizard screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Input(char),
    Backspace,
    /// Forward button on text steps, pick the highlighted style on the
    /// choice step.
    Submit,
    Next,
    Prev,
    /// Direct pick of a choice by zero-based position.
    Pick(usize),
    /// Open the highlighted suggestion link.
    Open,
    Quit,
}

pub fn map_key(step: Step, key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if key.code == KeyCode::Esc || (ctrl && key.code == KeyCode::Char('c')) {
        return Some(Action::Quit);
    }

    match step {
        Step::RecipientName | Step::Age => match key.code {
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(ch) if !ctrl => Some(Action::Input(ch)),
            _ => None,
        },
        Step::Style => match key.code {
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Right | KeyCode::Down | KeyCode::Tab => Some(Action::Next),
            KeyCode::Left | KeyCode::Up | KeyCode::BackTab => Some(Action::Prev),
            KeyCode::Char(ch @ '1'..='4') => Some(Action::Pick(ch as usize - '1' as usize)),
            _ => None,
        },
        Step::Suggestions => match key.code {
            KeyCode::Enter | KeyCode::Char('o') => Some(Action::Open),
            KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => Some(Action::Next),
            KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => Some(Action::Prev),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
    }
}
