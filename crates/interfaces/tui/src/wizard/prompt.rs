//! Line-based fallback used when stdin or stdout is not a terminal.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::info;

use crate::catalog::suggestions;

use super::state::{Step, Style, Wizard};

/// Drives the wizard from `input` until the suggestions are printed or the
/// input ends.
pub fn run_prompt_session<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<Wizard> {
    let mut wizard = Wizard::new();
    writeln!(output, "{}", super::ui::PAGE_TITLE)?;

    while !wizard.step().is_terminal() {
        let step = wizard.step();
        writeln!(output, "\n{}", wizard.prompt())?;
        if step == Step::Style {
            for (index, style) in Style::all().iter().enumerate() {
                writeln!(output, "  {}. {style}", index + 1)?;
            }
        }

        let Some(line) = read_answer(&mut input, &mut output, step)? else {
            info!(step = ?step, "input closed before the wizard finished");
            return Ok(wizard);
        };

        match step {
            Step::RecipientName => {
                wizard.set_recipient_name(line);
                wizard.submit();
            }
            Step::Age => {
                wizard.set_age(line);
                wizard.submit();
            }
            Step::Style => {
                if let Some(style) = parse_style_choice(&line) {
                    wizard.choose_style(style);
                }
            }
            Step::Suggestions => {}
        }
    }

    writeln!(output, "\n{}", wizard.prompt())?;
    print_suggestions(&mut output)?;
    Ok(wizard)
}

fn read_answer<R: BufRead, W: Write>(input: &mut R, output: &mut W, step: Step) -> Result<Option<String>> {
    let placeholder = step.placeholder();
    if placeholder.is_empty() {
        write!(output, "> ")?;
    } else {
        write!(output, "[{placeholder}] > ")?;
    }
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// A 1-based number or a style name.
pub(super) fn parse_style_choice(raw: &str) -> Option<Style> {
    if let Ok(number) = raw.trim().parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| Style::all().get(index).copied());
    }
    Style::parse(raw).ok()
}

pub fn print_suggestions<W: Write>(output: &mut W) -> Result<()> {
    for item in suggestions() {
        writeln!(output, "\n{}", item.title)?;
        writeln!(output, "  {}", item.price_line())?;
        writeln!(output, "  Ver produto: {}", item.link)?;
    }
    Ok(())
}
