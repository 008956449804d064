//! Field kind taxonomy
//!
//! The fixed vocabulary of TCA column types a user can assign to a column,
//! their grouping for interactive selection and the example configuration
//! each kind seeds the generated TCA with.

use crate::error::KickstarterError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

/// A TCA column type offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldKind {
    Category,
    Check,
    CheckToggle,
    Color,
    Datetime,
    Email,
    File,
    FileImages,
    Flex,
    Folder,
    Group,
    ImageManipulation,
    Inline,
    Input,
    Json,
    Language,
    Link,
    None,
    Number,
    Passthrough,
    Password,
    Radio,
    Select,
    SelectForeign,
    Slug,
    Text,
    TextRte,
    User,
    Uuid,
}

/// Selection group a field kind belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldGroup {
    Basic,
    Relational,
    Additional,
    System,
}

impl FieldGroup {
    pub const ALL: [FieldGroup; 4] = [
        FieldGroup::Basic,
        FieldGroup::Relational,
        FieldGroup::Additional,
        FieldGroup::System,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldGroup::Basic => "basic",
            FieldGroup::Relational => "relational",
            FieldGroup::Additional => "additional",
            FieldGroup::System => "system",
        }
    }

    /// Kinds in this group, in presentation order
    pub fn kinds(&self) -> Vec<FieldKind> {
        match self {
            FieldGroup::Basic => BASIC.to_vec(),
            FieldGroup::Relational => RELATIONAL.to_vec(),
            FieldGroup::System => SYSTEM.to_vec(),
            FieldGroup::Additional => FieldKind::ALL
                .iter()
                .copied()
                .filter(|kind| kind.group() == FieldGroup::Additional)
                .collect(),
        }
    }
}

impl fmt::Display for FieldGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const BASIC: [FieldKind; 9] = [
    FieldKind::Input,
    FieldKind::TextRte,
    FieldKind::Link,
    FieldKind::FileImages,
    FieldKind::Number,
    FieldKind::Datetime,
    FieldKind::CheckToggle,
    FieldKind::Radio,
    FieldKind::Select,
];

const RELATIONAL: [FieldKind; 3] = [
    FieldKind::Inline,
    FieldKind::Group,
    FieldKind::SelectForeign,
];

const SYSTEM: [FieldKind; 6] = [
    FieldKind::Flex,
    FieldKind::ImageManipulation,
    FieldKind::Json,
    FieldKind::None,
    FieldKind::Passthrough,
    FieldKind::Uuid,
];

impl FieldKind {
    /// Every kind, in catalog order
    pub const ALL: [FieldKind; 29] = [
        FieldKind::Category,
        FieldKind::Check,
        FieldKind::CheckToggle,
        FieldKind::Color,
        FieldKind::Datetime,
        FieldKind::Email,
        FieldKind::File,
        FieldKind::FileImages,
        FieldKind::Flex,
        FieldKind::Folder,
        FieldKind::Group,
        FieldKind::ImageManipulation,
        FieldKind::Inline,
        FieldKind::Input,
        FieldKind::Json,
        FieldKind::Language,
        FieldKind::Link,
        FieldKind::None,
        FieldKind::Number,
        FieldKind::Passthrough,
        FieldKind::Password,
        FieldKind::Radio,
        FieldKind::Select,
        FieldKind::SelectForeign,
        FieldKind::Slug,
        FieldKind::Text,
        FieldKind::TextRte,
        FieldKind::User,
        FieldKind::Uuid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Category => "category",
            FieldKind::Check => "check",
            FieldKind::CheckToggle => "check-toggle",
            FieldKind::Color => "color",
            FieldKind::Datetime => "datetime",
            FieldKind::Email => "email",
            FieldKind::File => "file",
            FieldKind::FileImages => "file-images",
            FieldKind::Flex => "flex",
            FieldKind::Folder => "folder",
            FieldKind::Group => "group",
            FieldKind::ImageManipulation => "imageManipulation",
            FieldKind::Inline => "inline",
            FieldKind::Input => "input",
            FieldKind::Json => "json",
            FieldKind::Language => "language",
            FieldKind::Link => "link",
            FieldKind::None => "none",
            FieldKind::Number => "number",
            FieldKind::Passthrough => "passthrough",
            FieldKind::Password => "password",
            FieldKind::Radio => "radio",
            FieldKind::Select => "select",
            FieldKind::SelectForeign => "select-foreign",
            FieldKind::Slug => "slug",
            FieldKind::Text => "text",
            FieldKind::TextRte => "text-rte",
            FieldKind::User => "user",
            FieldKind::Uuid => "uuid",
        }
    }

    /// Group this kind is listed under.
    ///
    /// Basic, relational and system are explicit lists. Additional is the
    /// residual bucket: a kind missing from the three lists lands there.
    pub fn group(&self) -> FieldGroup {
        if BASIC.contains(self) {
            FieldGroup::Basic
        } else if RELATIONAL.contains(self) {
            FieldGroup::Relational
        } else if SYSTEM.contains(self) {
            FieldGroup::System
        } else {
            FieldGroup::Additional
        }
    }

    /// Example TCA `config` array for this kind, key order preserved
    pub fn example_configuration(&self) -> Value {
        match self {
            FieldKind::Category => json!({ "type": "category" }),
            FieldKind::Check => json!({
                "type": "check",
                "items": [
                    { "label": "Option 1" },
                    { "label": "Option 2" },
                ],
            }),
            FieldKind::CheckToggle => json!({
                "type": "check",
                "renderType": "checkboxToggle",
                "items": [
                    { "label": "Enable" },
                ],
            }),
            FieldKind::Color => json!({ "type": "color" }),
            FieldKind::Datetime => json!({
                "type": "datetime",
                "format": "date",
                "default": 0,
            }),
            FieldKind::Email => json!({ "type": "email" }),
            FieldKind::File => json!({
                "type": "file",
                "maxitems": 1,
                "allowed": "common-text-types",
            }),
            FieldKind::FileImages => json!({
                "type": "file",
                "allowed": "common-image-types",
            }),
            FieldKind::Flex => json!({ "type": "flex" }),
            FieldKind::Folder => json!({ "type": "folder" }),
            FieldKind::Group => json!({
                "type": "group",
                "allowed": "tx_someextension_changeme",
            }),
            FieldKind::ImageManipulation => json!({ "type": "imageManipulation" }),
            FieldKind::Inline => json!({
                "type": "inline",
                "foreign_table": "tx_someextension_changeme",
            }),
            FieldKind::Input => json!({
                "type": "input",
                "eval": "trim",
            }),
            FieldKind::Json => json!({ "type": "json" }),
            FieldKind::Language => json!({ "type": "language" }),
            FieldKind::Link => json!({ "type": "link" }),
            FieldKind::None => json!({ "type": "none" }),
            FieldKind::Number => json!({ "type": "number" }),
            FieldKind::Passthrough => json!({ "type": "passthrough" }),
            FieldKind::Password => json!({ "type": "password" }),
            FieldKind::Radio => json!({
                "type": "radio",
                "items": [
                    { "label": "Change me", "value": 1 },
                ],
            }),
            FieldKind::Select => json!({
                "type": "select",
                "renderType": "selectSingle",
                "items": [
                    { "label": "Change me", "value": 1 },
                ],
            }),
            FieldKind::SelectForeign => json!({
                "type": "select",
                "renderType": "selectSingle",
                "foreign_table": "tx_someextension_changeme",
            }),
            FieldKind::Slug => json!({ "type": "slug" }),
            FieldKind::Text => json!({
                "type": "text",
                "cols": 40,
                "rows": 7,
            }),
            FieldKind::TextRte => json!({
                "type": "text",
                "enableRichtext": true,
            }),
            FieldKind::User => json!({ "type": "user" }),
            FieldKind::Uuid => json!({ "type": "uuid" }),
        }
    }

    /// Whether the framework derives the database column from the TCA.
    /// Kinds returning false need an explicit `ext_tables.sql` entry.
    pub fn is_column_auto_created(&self) -> bool {
        !matches!(
            self,
            FieldKind::Passthrough | FieldKind::None | FieldKind::User
        )
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = KickstarterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| KickstarterError::UnknownFieldKind(s.to_string()))
    }
}

impl TryFrom<String> for FieldKind {
    type Error = KickstarterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.as_str().to_string()
    }
}
