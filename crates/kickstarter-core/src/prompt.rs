//! Question/answer seam between the table builder and the terminal
//!
//! The builder never touches the terminal itself. It asks through a
//! [`Prompter`] and blocks until the answer comes back, which keeps the
//! question flow testable with scripted answers.

use crate::error::Result;

pub trait Prompter {
    /// Free text. `default` pre-fills the input.
    fn ask_text(&mut self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Pick one of `options`; returns the index of the chosen entry
    fn ask_choice(&mut self, prompt: &str, options: &[String], default: Option<usize>)
        -> Result<usize>;

    fn ask_confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// Show a validation problem; the builder re-prompts afterwards
    fn report_error(&mut self, message: &str) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod scripted {
    use super::Prompter;
    use crate::error::Result;
    use std::collections::VecDeque;

    /// A queued answer
    #[derive(Debug, Clone)]
    pub(crate) enum Answer {
        Text(String),
        /// Accept whatever default the prompt offers
        Default,
        /// Pick the option with this label
        Choice(String),
        /// Return this index as is, even past the offered options
        Index(usize),
        Confirm(bool),
    }

    /// Replays queued answers and records what was asked
    #[derive(Debug, Default)]
    pub(crate) struct ScriptedPrompter {
        answers: VecDeque<Answer>,
        pub errors: Vec<String>,
        pub text_defaults: Vec<Option<String>>,
        pub choice_prompts: Vec<String>,
    }

    impl ScriptedPrompter {
        pub(crate) fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
            Self {
                answers: answers.into_iter().collect(),
                ..Default::default()
            }
        }

        pub(crate) fn is_exhausted(&self) -> bool {
            self.answers.is_empty()
        }

        fn next(&mut self, prompt: &str) -> Answer {
            self.answers
                .pop_front()
                .unwrap_or_else(|| panic!("no answer scripted for '{}'", prompt))
        }
    }

    impl Prompter for ScriptedPrompter {
        fn ask_text(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
            self.text_defaults.push(default.map(str::to_string));
            match self.next(prompt) {
                Answer::Text(text) => Ok(text),
                Answer::Default => Ok(default.unwrap_or_default().to_string()),
                other => panic!("expected text for '{}', got {:?}", prompt, other),
            }
        }

        fn ask_choice(
            &mut self,
            prompt: &str,
            options: &[String],
            default: Option<usize>,
        ) -> Result<usize> {
            self.choice_prompts.push(prompt.to_string());
            match self.next(prompt) {
                Answer::Choice(label) => Ok(options
                    .iter()
                    .position(|option| *option == label)
                    .unwrap_or_else(|| panic!("'{}' not offered for '{}'", label, prompt))),
                Answer::Index(index) => Ok(index),
                Answer::Default => {
                    Ok(default.unwrap_or_else(|| panic!("'{}' has no default", prompt)))
                }
                other => panic!("expected a choice for '{}', got {:?}", prompt, other),
            }
        }

        fn ask_confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
            match self.next(prompt) {
                Answer::Confirm(value) => Ok(value),
                Answer::Default => Ok(default),
                other => panic!("expected a confirmation for '{}', got {:?}", prompt, other),
            }
        }

        fn report_error(&mut self, message: &str) -> Result<()> {
            self.errors.push(message.to_string());
            Ok(())
        }
    }
}
