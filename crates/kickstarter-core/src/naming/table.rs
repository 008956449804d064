//! Table name validation against the extension prefix

use std::fmt;

/// Why a table name was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableNameError {
    Empty,
    OnlyPrefix(String),
}

impl fmt::Display for TableNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableNameError::Empty => write!(f, "Table name must not be empty."),
            TableNameError::OnlyPrefix(prefix) => {
                write!(f, "Table name must not be only the prefix: {}", prefix)
            }
        }
    }
}

/// A prefixed name the user has to confirm or decline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSuggestion {
    pub original: String,
    pub suggested: String,
}

impl PrefixSuggestion {
    /// Confirmed takes the prefixed name, declined keeps the input verbatim
    pub fn settle(self, confirmed: bool) -> String {
        if confirmed {
            self.suggested
        } else {
            self.original
        }
    }

    pub fn question(&self) -> String {
        format!(
            "Would you like to adopt the suggested table name: {}?",
            self.suggested
        )
    }
}

/// Result of checking a table name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableNameCheck {
    Accepted(String),
    Rejected(TableNameError),
    SuggestConfirmation(PrefixSuggestion),
}

impl TableNameCheck {
    /// Check a raw table name against the required prefix.
    ///
    /// The prefix is a convention, not a rule: names without it are never
    /// rejected, only offered a prefixed alternative.
    pub fn validate(raw: &str, prefix: &str) -> Self {
        let name = raw.trim().to_lowercase();

        if name.is_empty() {
            return TableNameCheck::Rejected(TableNameError::Empty);
        }
        if name == prefix {
            return TableNameCheck::Rejected(TableNameError::OnlyPrefix(prefix.to_string()));
        }
        if name.starts_with(prefix) {
            return TableNameCheck::Accepted(name);
        }

        TableNameCheck::SuggestConfirmation(PrefixSuggestion {
            suggested: format!("{}{}", prefix, name),
            original: name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "tx_myextension_";

    #[test]
    fn test_rejects_empty() {
        assert_eq!(
            TableNameCheck::validate("  ", PREFIX),
            TableNameCheck::Rejected(TableNameError::Empty)
        );
    }

    #[test]
    fn test_rejects_bare_prefix() {
        let check = TableNameCheck::validate("tx_myextension_", PREFIX);
        assert_eq!(
            check,
            TableNameCheck::Rejected(TableNameError::OnlyPrefix(PREFIX.to_string()))
        );
        if let TableNameCheck::Rejected(reason) = check {
            assert_eq!(
                reason.to_string(),
                "Table name must not be only the prefix: tx_myextension_"
            );
        }
    }

    #[test]
    fn test_accepts_prefixed_name() {
        assert_eq!(
            TableNameCheck::validate("TX_MyExtension_MyTable", PREFIX),
            TableNameCheck::Accepted("tx_myextension_mytable".to_string())
        );
    }

    #[test]
    fn test_suggests_prefix() {
        let check = TableNameCheck::validate("mytable", PREFIX);
        let TableNameCheck::SuggestConfirmation(suggestion) = check else {
            panic!("expected a suggestion, got {:?}", check);
        };
        assert_eq!(suggestion.suggested, "tx_myextension_mytable");
        assert_eq!(
            suggestion.question(),
            "Would you like to adopt the suggested table name: tx_myextension_mytable?"
        );
        assert_eq!(suggestion.clone().settle(true), "tx_myextension_mytable");
        assert_eq!(suggestion.settle(false), "mytable");
    }
}
