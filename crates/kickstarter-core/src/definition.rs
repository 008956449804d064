//! Table definitions read from YAML instead of asked interactively
//!
//! ```yaml
//! extension: my_extension
//! table_name: tx_myextension_mytable
//! title: My Table
//! label: my_input
//! columns:
//!   - name: my_input
//!     label: My Input
//!     type: input
//! ```

use crate::catalog::FieldKind;
use crate::error::{KickstarterError, Result};
use crate::extension::ExtensionLocator;
use crate::naming::{humanize, ColumnNameCheck, TableNameCheck};
use crate::table::{ColumnDefinition, TableDescription};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnEntry {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub kind: FieldKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDefinitionFile {
    /// Extension key; the command line argument wins when both are given
    #[serde(default)]
    pub extension: Option<String>,
    pub table_name: String,
    pub title: String,
    /// Label column, first column when omitted
    #[serde(default)]
    pub label: Option<String>,
    pub columns: Vec<ColumnEntry>,
}

impl TableDefinitionFile {
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| KickstarterError::io(path, e))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Validate every name the way the interactive flow does.
    ///
    /// Unprefixed table names get the extension prefix only when
    /// `adopt_prefix` is set.
    pub fn into_description<L>(
        self,
        locator: &L,
        extension_key: Option<&str>,
        adopt_prefix: bool,
    ) -> Result<TableDescription>
    where
        L: ExtensionLocator + ?Sized,
    {
        let key = extension_key
            .map(str::to_string)
            .or(self.extension)
            .ok_or_else(|| KickstarterError::InvalidDefinition("no extension given".to_string()))?;
        let extension = locator.resolve(&key)?;

        let prefix = extension.table_name_prefix();
        let table_name = match TableNameCheck::validate(&self.table_name, &prefix) {
            TableNameCheck::Accepted(name) => name,
            TableNameCheck::Rejected(reason) => {
                return Err(KickstarterError::InvalidDefinition(reason.to_string()))
            }
            TableNameCheck::SuggestConfirmation(suggestion) => {
                if !adopt_prefix {
                    warn!(
                        table = %suggestion.original,
                        suggested = %suggestion.suggested,
                        "table name does not start with the extension prefix"
                    );
                }
                suggestion.settle(adopt_prefix)
            }
        };

        if self.columns.is_empty() {
            return Err(KickstarterError::InvalidDefinition(
                "a table needs at least one column".to_string(),
            ));
        }

        let mut table = TableDescription::new(extension, table_name, self.title);
        for entry in self.columns {
            let name = match ColumnNameCheck::validate(&entry.name) {
                ColumnNameCheck::Accepted(name) => name,
                ColumnNameCheck::Rejected { reason, suggestion } => {
                    return Err(KickstarterError::InvalidDefinition(format!(
                        "column '{}': {} Try '{}'.",
                        entry.name, reason, suggestion
                    )))
                }
            };
            let label = entry.label.unwrap_or_else(|| humanize(&name));
            table.add_column(ColumnDefinition::new(name, label, entry.kind));
        }

        let label = match self.label {
            Some(label) if table.column(&label).is_none() => {
                return Err(KickstarterError::InvalidDefinition(format!(
                    "label column '{}' is not one of the columns",
                    label
                )))
            }
            Some(label) => label,
            None => table.column_names()[0].to_string(),
        };
        table.set_label_column(label);

        Ok(table)
    }
}
