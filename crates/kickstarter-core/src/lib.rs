//! Kickstarter Core - scaffolding TCA tables for TYPO3 extensions
//!
//! Walks a user through defining a table (name, title, columns and their
//! TCA types), then writes the table configuration into an extension.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Vocabulary** - [`catalog`] field kinds and [`navigator`] over them,
//!   [`naming`] validators for table and column names
//! - **Layer 2: Authoring** - [`builder::TableDefinitionBuilder`] drives the
//!   question flow through the [`prompt::Prompter`] seam; [`definition`] reads
//!   the same description from YAML
//! - **Layer 3: Synthesis** - [`creator::TableCreator`] turns a
//!   [`table::TableDescription`] into file modifications
//! - **Layer 4: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use kickstarter_core::{
//!     ColumnDefinition, CreatorOptions, ExtensionInformation, FieldKind, FsWriter,
//!     TableCreator, TableDescription,
//! };
//!
//! let extension = ExtensionInformation::new("my_extension", "packages/my_extension");
//! let mut table = TableDescription::new(extension, "tx_myextension_mytable", "My Table");
//! table.add_column(ColumnDefinition::new("my_input", "My Input", FieldKind::Input));
//!
//! let mut creator = TableCreator::new(FsWriter::new("packages/my_extension"), CreatorOptions::default());
//! let information = creator.create(table)?;
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod creator;
pub mod definition;
pub mod error;
pub mod extension;
pub mod naming;
pub mod navigator;
pub mod prompt;
pub mod table;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use builder::TableDefinitionBuilder;
pub use catalog::{FieldGroup, FieldKind};
pub use config::Settings;
pub use creator::{
    CreatorInformation, CreatorOptions, FileModification, FileWriter, FsWriter, MemoryWriter,
    ModificationKind, TableCreator,
};
pub use error::{KickstarterError, Result};
pub use extension::{DirectoryLocator, ExtensionInformation, ExtensionLocator};
pub use navigator::{Choice, FieldTypeNavigator, NavigationMode, Resolution};
pub use prompt::Prompter;
pub use table::{ColumnDefinition, TableDescription};

#[cfg(feature = "tui")]
pub use tui::run;
