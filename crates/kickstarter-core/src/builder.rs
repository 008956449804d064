//! Interactive question flow producing a [`TableDescription`]
//!
//! Order of questions: extension, table name, title, then columns one at a
//! time (name, label, type, "another?"), and finally the label column.
//! Invalid names are reported and asked again with a repaired default.

use crate::catalog::FieldKind;
use crate::error::Result;
use crate::extension::{ExtensionInformation, ExtensionLocator};
use crate::naming::{humanize, ColumnNameCheck, TableNameCheck};
use crate::navigator::{FieldTypeNavigator, Resolution};
use crate::prompt::Prompter;
use crate::table::{ColumnDefinition, TableDescription, PLACEHOLDER_LABEL_COLUMN};
use tracing::debug;

pub struct TableDefinitionBuilder<'a, P: Prompter> {
    prompter: &'a mut P,
}

impl<'a, P: Prompter> TableDefinitionBuilder<'a, P> {
    pub fn new(prompter: &'a mut P) -> Self {
        Self { prompter }
    }

    /// Run the whole flow. Fails only if the extension cannot be resolved
    /// or the prompter itself fails.
    pub fn build<L>(&mut self, locator: &L, extension_key: Option<&str>) -> Result<TableDescription>
    where
        L: ExtensionLocator + ?Sized,
    {
        let extension = self.ask_extension(locator, extension_key)?;
        let table_name = self.ask_table_name(&extension.table_name_prefix())?;
        let title = self
            .prompter
            .ask_text("Please provide a table title", None)?;

        let mut table = TableDescription::new(extension, table_name, title);
        self.ask_columns(&mut table)?;

        let label_column = self.ask_label_column(&table)?;
        table.set_label_column(label_column);

        Ok(table)
    }

    fn ask_extension<L>(
        &mut self,
        locator: &L,
        extension_key: Option<&str>,
    ) -> Result<ExtensionInformation>
    where
        L: ExtensionLocator + ?Sized,
    {
        if let Some(key) = extension_key {
            return locator.resolve(key);
        }

        let available = locator.available()?;
        let key = if available.is_empty() {
            self.prompter
                .ask_text("Provide the extension key you want to extend", None)?
        } else {
            loop {
                let index = self.prompter.ask_choice(
                    "Choose the extension you want to extend",
                    &available,
                    None,
                )?;
                match available.get(index) {
                    Some(key) => break key.clone(),
                    None => self
                        .prompter
                        .report_error("Please choose one of the listed extensions.")?,
                }
            }
        };

        locator.resolve(key.trim())
    }

    /// Ask until the name is valid. Names without the prefix are offered the
    /// prefixed variant; declining keeps the name as typed.
    pub fn ask_table_name(&mut self, prefix: &str) -> Result<String> {
        let question = format!(
            "Please provide the table name. Usually the table name starts with: {}",
            prefix
        );

        loop {
            let raw = self.prompter.ask_text(&question, None)?;
            match TableNameCheck::validate(&raw, prefix) {
                TableNameCheck::Accepted(name) => return Ok(name),
                TableNameCheck::Rejected(reason) => {
                    self.prompter.report_error(&reason.to_string())?;
                }
                TableNameCheck::SuggestConfirmation(suggestion) => {
                    let confirmed = self.prompter.ask_confirm(&suggestion.question(), true)?;
                    return Ok(suggestion.settle(confirmed));
                }
            }
        }
    }

    /// Collect columns until the user declines to add another
    pub fn ask_columns(&mut self, table: &mut TableDescription) -> Result<()> {
        let mut suggestion: Option<String> = None;

        loop {
            let raw = self.prompter.ask_text(
                "Enter column name we should create for you",
                suggestion.as_deref(),
            )?;

            let name = match ColumnNameCheck::validate(&raw) {
                ColumnNameCheck::Accepted(name) => name,
                ColumnNameCheck::Rejected {
                    reason,
                    suggestion: repaired,
                } => {
                    self.prompter.report_error(&reason.to_string())?;
                    suggestion = Some(repaired).filter(|s| !s.is_empty());
                    continue;
                }
            };
            suggestion = None;

            let default_label = humanize(&name);
            let label = self
                .prompter
                .ask_text("Please provide a label for the column", Some(&default_label))?;
            let label = if label.trim().is_empty() {
                default_label
            } else {
                label
            };

            let kind = self.ask_field_kind()?;
            if let Some(previous) = table.add_column(ColumnDefinition::new(name, label, kind)) {
                debug!(column = %previous.name, "column redefined, keeping the new definition");
            }

            if !self
                .prompter
                .ask_confirm("Do you want to add another table column?", true)?
            {
                return Ok(());
            }
        }
    }

    /// Navigate the type catalog until a kind is picked
    pub fn ask_field_kind(&mut self) -> Result<FieldKind> {
        let mut navigator = FieldTypeNavigator::new();

        loop {
            let choices = navigator.choices();
            let index = self.prompter.ask_choice(
                &navigator.prompt(),
                &choices.labels(),
                choices.default_index(),
            )?;

            let Some(choice) = choices.entries.get(index).copied() else {
                self.prompter
                    .report_error("Please choose one of the listed column types.")?;
                continue;
            };

            match navigator.resolve(choice) {
                Resolution::Transition(mode) => debug!(%mode, "switched column type list"),
                Resolution::Selected(kind) => return Ok(kind),
            }
        }
    }

    fn ask_label_column(&mut self, table: &TableDescription) -> Result<String> {
        let names: Vec<String> = table.column_names().into_iter().map(String::from).collect();
        if names.is_empty() {
            return Ok(PLACEHOLDER_LABEL_COLUMN.to_string());
        }

        let index = self.prompter.ask_choice(
            "Which column should be used as record label?",
            &names,
            Some(0),
        )?;

        Ok(names.get(index).cloned().unwrap_or_else(|| names[0].clone()))
    }
}
