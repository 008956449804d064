//! In-memory description of a table authored in one session

use crate::catalog::FieldKind;
use crate::extension::ExtensionInformation;
use indexmap::IndexMap;

/// Label column used until the table has real columns
pub const PLACEHOLDER_LABEL_COLUMN: &str = "uid";

/// One user-authored column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDefinition {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
        }
    }
}

/// A complete table: name, title, label column and ordered columns.
///
/// Columns are keyed by name. Adding a column under an existing name
/// replaces it in place, keeping its original position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDescription {
    extension: ExtensionInformation,
    table_name: String,
    title: String,
    label_column: String,
    columns: IndexMap<String, ColumnDefinition>,
}

impl TableDescription {
    pub fn new(
        extension: ExtensionInformation,
        table_name: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            extension,
            table_name: table_name.into(),
            title: title.into(),
            label_column: PLACEHOLDER_LABEL_COLUMN.to_string(),
            columns: IndexMap::new(),
        }
    }

    pub fn with_label_column(mut self, label_column: impl Into<String>) -> Self {
        self.label_column = label_column.into();
        self
    }

    /// Add a column, returning the one it replaced
    pub fn add_column(&mut self, column: ColumnDefinition) -> Option<ColumnDefinition> {
        self.columns.insert(column.name.clone(), column)
    }

    pub fn set_label_column(&mut self, label_column: impl Into<String>) {
        self.label_column = label_column.into();
    }

    pub fn extension(&self) -> &ExtensionInformation {
        &self.extension
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn label_column(&self) -> &str {
        &self.label_column
    }

    /// Columns in insertion order
    pub fn columns(&self) -> impl Iterator<Item = &ColumnDefinition> {
        self.columns.values()
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.get(name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Columns whose storage the framework does not derive from the TCA
    pub fn manual_storage_columns(&self) -> Vec<&ColumnDefinition> {
        self.columns()
            .filter(|column| !column.kind.is_column_auto_created())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TableDescription {
        TableDescription::new(
            ExtensionInformation::new("my_extension", "/tmp/my_extension"),
            "tx_myextension_mytable",
            "My Table",
        )
    }

    #[test]
    fn test_label_defaults_to_uid() {
        let table = table();
        assert_eq!(table.label_column(), "uid");
        assert!(table.is_empty());
    }

    #[test]
    fn test_columns_keep_insertion_order() {
        let mut table = table();
        table.add_column(ColumnDefinition::new("zeta", "Zeta", FieldKind::Input));
        table.add_column(ColumnDefinition::new("alpha", "Alpha", FieldKind::Text));
        table.add_column(ColumnDefinition::new("mid", "Mid", FieldKind::Number));
        assert_eq!(table.column_names(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_duplicate_name_replaces_in_place() {
        let mut table = table();
        table.add_column(ColumnDefinition::new("first", "First", FieldKind::Input));
        table.add_column(ColumnDefinition::new("second", "Second", FieldKind::Input));

        let replaced = table.add_column(ColumnDefinition::new("first", "Again", FieldKind::Link));
        assert_eq!(replaced.map(|c| c.label), Some("First".to_string()));
        assert_eq!(table.column_names(), vec!["first", "second"]);
        assert_eq!(table.column("first").unwrap().kind, FieldKind::Link);
    }

    #[test]
    fn test_manual_storage_columns() {
        let mut table = table();
        table.add_column(ColumnDefinition::new("my_input", "My Input", FieldKind::Input));
        table.add_column(ColumnDefinition::new(
            "my_passthrough",
            "My Passthrough",
            FieldKind::Passthrough,
        ));
        let manual: Vec<&str> = table
            .manual_storage_columns()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(manual, vec!["my_passthrough"]);
    }
}
