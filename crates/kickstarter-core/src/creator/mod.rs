//! Turning a table description into files
//!
//! This module provides:
//! - The [`TableCreator`] deciding which artifacts a table needs
//! - TCA and `ext_tables.sql` rendering
//! - The [`FileWriter`] seam with disk and in-memory implementations
//! - The [`CreatorInformation`] report of touched files

pub mod php;
pub mod report;
pub mod sql;
pub mod tca;
pub mod writer;

use crate::error::{KickstarterError, Result};
use crate::table::TableDescription;
use tracing::{debug, info};

pub use report::{CreatorInformation, FileModification, ModificationKind};
pub use writer::{FileWriter, FsWriter, MemoryWriter};

/// Settings that shape the generated files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatorOptions {
    /// Icon identifier for `ctrl.typeicon_classes.default`
    pub type_icon: String,
    /// SQL definition for columns declared in `ext_tables.sql`
    pub storage_column: String,
}

impl Default for CreatorOptions {
    fn default() -> Self {
        Self {
            type_icon: "actions-brand-typo3".to_string(),
            storage_column: "varchar(255) DEFAULT '' NOT NULL".to_string(),
        }
    }
}

/// Writes the TCA file for a table and, when some column kinds have no
/// auto-created storage, declares those columns in `ext_tables.sql`.
///
/// Writes happen in that order and stop at the first failure; files
/// written before the failure stay on disk.
pub struct TableCreator<W: FileWriter> {
    writer: W,
    options: CreatorOptions,
}

impl<W: FileWriter> TableCreator<W> {
    pub fn new(writer: W, options: CreatorOptions) -> Self {
        Self { writer, options }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub fn create(&mut self, table: TableDescription) -> Result<CreatorInformation> {
        let mut information = CreatorInformation::new();
        let table_name = table.table_name();

        let tca_path = tca::configuration_path(table_name);
        if self.writer.read(&tca_path)?.is_some() {
            return Err(KickstarterError::TableConfigurationExists { path: tca_path });
        }

        let configuration = tca::table_configuration(&table, &self.options.type_icon);
        debug!(table = table_name, path = %tca_path.display(), "writing table configuration");
        information.push(self.writer.write(
            &tca_path,
            &php::return_file(&configuration),
            ModificationKind::Created,
        )?);

        let manual: Vec<(&str, &str)> = table
            .manual_storage_columns()
            .into_iter()
            .map(|column| (column.name.as_str(), self.options.storage_column.as_str()))
            .collect();

        if !manual.is_empty() {
            let sql_path = sql::ext_tables_path();
            let existing = self.writer.read(&sql_path)?;
            match sql::declare_columns(existing.as_deref(), table_name, &manual) {
                Some(change) => {
                    debug!(table = table_name, kind = %change.kind, columns = manual.len(), "declaring storage columns");
                    information.push(self.writer.write(&sql_path, &change.contents, change.kind)?);
                }
                None => debug!(table = table_name, "storage columns already declared"),
            }
        }

        info!(
            table = table_name,
            files = information.len(),
            "table created"
        );

        Ok(information)
    }
}
