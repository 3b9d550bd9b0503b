//! Wizard state: steps, profile, and the forward-only transition logic.

use std::fmt;

use anyhow::{Result, bail};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    RecipientName,
    Age,
    Style,
    /// Terminal step: the static suggestion list.
    Suggestions,
}

impl Step {
    pub fn all() -> [Step; 4] {
        [Step::RecipientName, Step::Age, Step::Style, Step::Suggestions]
    }

    /// Zero-based position of the step in the flow.
    pub fn index(self) -> usize {
        match self {
            Step::RecipientName => 0,
            Step::Age => 1,
            Step::Style => 2,
            Step::Suggestions => 3,
        }
    }

    fn next(self) -> Option<Step> {
        match self {
            Step::RecipientName => Some(Step::Age),
            Step::Age => Some(Step::Style),
            Step::Style => Some(Step::Suggestions),
            Step::Suggestions => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Step::Suggestions
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::RecipientName => "Nome",
            Step::Age => "Idade",
            Step::Style => "Estilo",
            Step::Suggestions => "Sugestões",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Step::RecipientName => "Ex: Ana",
            Step::Age => "Ex: 25",
            Step::Style | Step::Suggestions => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Creative,
    Minimalist,
    Romantic,
    Adventurous,
}

impl Style {
    /// Display order of the four choice buttons.
    pub fn all() -> [Style; 4] {
        [
            Style::Creative,
            Style::Minimalist,
            Style::Romantic,
            Style::Adventurous,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Style::Creative => "Criativa",
            Style::Minimalist => "Minimalista",
            Style::Romantic => "Romântica",
            Style::Adventurous => "Aventureira",
        }
    }

    fn english_name(self) -> &'static str {
        match self {
            Style::Creative => "creative",
            Style::Minimalist => "minimalist",
            Style::Romantic => "romantic",
            Style::Adventurous => "adventurous",
        }
    }

    /// Accepts the display label or the English name, case-insensitively.
    pub fn parse(raw: &str) -> Result<Style> {
        let value = raw.trim().to_lowercase();
        match Style::all()
            .into_iter()
            .find(|style| style.label().to_lowercase() == value || style.english_name() == value)
        {
            Some(style) => Ok(style),
            None => bail!("style must be one of: Criativa, Minimalista, Romântica, Aventureira"),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Recipient attributes collected across the first three steps.  Never
/// validated beyond non-emptiness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub recipient_name: String,
    pub age: String,
    pub style: Option<Style>,
}

/// A prompt frozen at the moment its step was left, with the answer given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answered {
    pub step: Step,
    pub prompt: String,
    pub answer: String,
}

#[derive(Debug, Clone)]
pub struct Wizard {
    step: Step,
    profile: Profile,
    transcript: Vec<Answered>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: Step::RecipientName,
            profile: Profile::default(),
            transcript: Vec::new(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn transcript(&self) -> &[Answered] {
        &self.transcript
    }

    /// Moves one step forward without any guard.  The terminal step has no
    /// outgoing transition, so advancing there leaves the wizard unchanged.
    pub fn advance(&mut self) -> bool {
        let Some(next) = self.step.next() else {
            return false;
        };

        self.transcript.push(Answered {
            step: self.step,
            prompt: self.prompt(),
            answer: self.answer_for(self.step),
        });
        debug!(from = ?self.step, to = ?next, "wizard advanced");
        self.step = next;
        true
    }

    /// Whether the forward button of the current step is enabled.  The style
    /// step has no forward button: picking a choice advances directly.
    pub fn can_advance(&self) -> bool {
        match self.step {
            Step::RecipientName => !self.profile.recipient_name.is_empty(),
            Step::Age => !self.profile.age.is_empty(),
            Step::Style | Step::Suggestions => false,
        }
    }

    /// Presses the forward button.  Does nothing while it is disabled.
    pub fn submit(&mut self) -> bool {
        self.can_advance() && self.advance()
    }

    pub fn set_recipient_name(&mut self, name: impl Into<String>) {
        self.profile.recipient_name = name.into();
    }

    pub fn set_age(&mut self, age: impl Into<String>) {
        self.profile.age = age.into();
    }

    /// Records the chosen style and moves to the suggestions.  Ignored
    /// outside the style step.
    pub fn choose_style(&mut self, style: Style) -> bool {
        if self.step != Step::Style {
            return false;
        }
        self.profile.style = Some(style);
        self.advance()
    }

    /// Text of the field edited on the current step, if it has one.
    pub fn active_field(&self) -> Option<&str> {
        match self.step {
            Step::RecipientName => Some(&self.profile.recipient_name),
            Step::Age => Some(&self.profile.age),
            Step::Style | Step::Suggestions => None,
        }
    }

    fn active_field_mut(&mut self) -> Option<&mut String> {
        match self.step {
            Step::RecipientName => Some(&mut self.profile.recipient_name),
            Step::Age => Some(&mut self.profile.age),
            Step::Style | Step::Suggestions => None,
        }
    }

    pub fn push_char(&mut self, ch: char) {
        if let Some(field) = self.active_field_mut() {
            field.push(ch);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(field) = self.active_field_mut() {
            field.pop();
        }
    }

    /// Question for the current step, interpolating earlier answers.
    pub fn prompt(&self) -> String {
        let name = &self.profile.recipient_name;
        match self.step {
            Step::RecipientName => "Qual o nome da pessoa que vai receber o presente?".to_string(),
            Step::Age => format!("Qual a idade de {name}?"),
            Step::Style => format!("Qual o estilo de {name}?"),
            Step::Suggestions => format!(
                "Sugestões com base no estilo {}:",
                self.profile.style.map(Style::label).unwrap_or_default()
            ),
        }
    }

    fn answer_for(&self, step: Step) -> String {
        match step {
            Step::RecipientName => self.profile.recipient_name.clone(),
            Step::Age => self.profile.age.clone(),
            Step::Style => self
                .profile
                .style
                .map(|style| style.label().to_string())
                .unwrap_or_default(),
            Step::Suggestions => String::new(),
        }
    }
}
