//! [`Prompter`] backed by cliclack

use crate::error::Result;
use crate::prompt::Prompter;

/// Asks on the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct CliclackPrompter;

impl Prompter for CliclackPrompter {
    fn ask_text(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = cliclack::input(prompt).required(false);
        if let Some(default) = default.filter(|d| !d.is_empty()) {
            input = input.default_input(default);
        }
        let answer: String = input.interact()?;
        Ok(answer)
    }

    fn ask_choice(
        &mut self,
        prompt: &str,
        options: &[String],
        default: Option<usize>,
    ) -> Result<usize> {
        // Items are keyed by index so the answer maps straight back to the option
        let mut select = cliclack::select(prompt);
        for (idx, option) in options.iter().enumerate() {
            select = select.item(idx, option, "");
        }
        if let Some(default) = default {
            select = select.initial_value(default);
        }
        Ok(select.interact()?)
    }

    fn ask_confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Ok(cliclack::confirm(prompt).initial_value(default).interact()?)
    }

    fn report_error(&mut self, message: &str) -> Result<()> {
        cliclack::log::error(message)?;
        Ok(())
    }
}
