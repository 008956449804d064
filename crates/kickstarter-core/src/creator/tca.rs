//! TCA array for a table description

use crate::table::TableDescription;
use serde_json::{json, Map, Value};
use std::path::PathBuf;

const TABS: &str = "LLL:EXT:core/Resources/Private/Language/Form/locallang_tabs.xlf";
const TTC: &str = "LLL:EXT:frontend/Resources/Private/Language/locallang_ttc.xlf";

/// `Configuration/TCA/<table>.php`
pub fn configuration_path(table_name: &str) -> PathBuf {
    PathBuf::from("Configuration")
        .join("TCA")
        .join(format!("{}.php", table_name))
}

/// Full TCA array: ctrl, types, palettes and columns
pub fn table_configuration(table: &TableDescription, type_icon: &str) -> Value {
    json!({
        "ctrl": {
            "title": table.title(),
            "label": table.label_column(),
            "tstamp": "tstamp",
            "crdate": "crdate",
            "versioningWS": true,
            "origUid": "t3_origuid",
            "languageField": "sys_language_uid",
            "transOrigPointerField": "l10n_parent",
            "transOrigDiffSourceField": "l10n_diffsource",
            "delete": "deleted",
            "enablecolumns": {
                "disabled": "hidden",
                "starttime": "starttime",
                "endtime": "endtime",
            },
            "typeicon_classes": {
                "default": type_icon,
            },
        },
        "types": [
            { "showitem": showitem(table) },
        ],
        "palettes": {
            "access": {
                "showitem": format!(
                    "starttime;{ttc}:starttime_formlabel,endtime;{ttc}:endtime_formlabel",
                    ttc = TTC
                ),
            },
            "language": {
                "showitem": "sys_language_uid, l10n_parent",
            },
        },
        "columns": columns(table),
    })
}

/// Form layout: user columns on the general tab, then the standard tabs
fn showitem(table: &TableDescription) -> String {
    let fields = table.column_names().join(", ");
    let tab = |name: &str| format!("                --div--;{}:{},\n", TABS, name);

    let mut showitem = String::from("\n");
    showitem.push_str(&tab("general"));
    showitem.push_str(&format!("                    {},\n", fields));
    showitem.push_str(&tab("language"));
    showitem.push_str("                    --palette--;;language,\n");
    showitem.push_str(&tab("access"));
    showitem.push_str("                    hidden,--palette--;;access,\n");
    showitem.push_str(&tab("extended"));
    showitem.push_str("            ");
    showitem
}

fn columns(table: &TableDescription) -> Value {
    let mut columns = Map::new();
    for column in table.columns() {
        columns.insert(
            column.name.clone(),
            json!({
                "exclude": true,
                "label": column.label,
                "config": column.kind.example_configuration(),
            }),
        );
    }
    Value::Object(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FieldKind;
    use crate::extension::ExtensionInformation;
    use crate::table::ColumnDefinition;

    fn table() -> TableDescription {
        let mut table = TableDescription::new(
            ExtensionInformation::new("my_extension", "/ext/my_extension"),
            "tx_myextension_mytable",
            "My Table",
        )
        .with_label_column("title");
        table.add_column(ColumnDefinition::new("title", "Title", FieldKind::Input));
        table.add_column(ColumnDefinition::new("body", "Body", FieldKind::TextRte));
        table
    }

    #[test]
    fn test_configuration_path() {
        assert_eq!(
            configuration_path("tx_a_b"),
            PathBuf::from("Configuration/TCA/tx_a_b.php")
        );
    }

    #[test]
    fn test_ctrl_section() {
        let tca = table_configuration(&table(), "content-text");
        assert_eq!(tca["ctrl"]["title"], "My Table");
        assert_eq!(tca["ctrl"]["label"], "title");
        assert_eq!(tca["ctrl"]["typeicon_classes"]["default"], "content-text");
    }

    #[test]
    fn test_columns_in_order_with_example_config() {
        let tca = table_configuration(&table(), "actions-brand-typo3");
        let columns = tca["columns"].as_object().unwrap();
        let names: Vec<&String> = columns.keys().collect();
        assert_eq!(names, vec!["title", "body"]);
        assert_eq!(
            columns["body"]["config"],
            FieldKind::TextRte.example_configuration()
        );
        assert_eq!(columns["title"]["exclude"], true);
    }

    #[test]
    fn test_showitem_lists_columns() {
        let tca = table_configuration(&table(), "actions-brand-typo3");
        let showitem = tca["types"][0]["showitem"].as_str().unwrap();
        assert!(showitem.contains("\n                    title, body,\n"));
        assert!(showitem.ends_with(":extended,\n            "));
    }
}
