//! Column name validation

use std::fmt;

/// Why a column name was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnNameError {
    Empty,
    StartsWithNumber,
    InvalidCharacters,
}

impl fmt::Display for ColumnNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnNameError::Empty => write!(f, "Table column name must not be empty."),
            ColumnNameError::StartsWithNumber => {
                write!(f, "Table column should not start with a number.")
            }
            ColumnNameError::InvalidCharacters => write!(
                f,
                "Table column name contains invalid chars. Please provide just letters, numbers and underscores."
            ),
        }
    }
}

/// Result of checking a column name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnNameCheck {
    Accepted(String),
    Rejected {
        reason: ColumnNameError,
        /// Cleaned-up input, offered as the default of the next prompt
        suggestion: String,
    },
}

impl ColumnNameCheck {
    /// Check a raw column name. Rules apply in order, first match wins.
    pub fn validate(raw: &str) -> Self {
        let reason = if raw.trim().is_empty() {
            ColumnNameError::Empty
        } else if raw.starts_with(|c: char| c.is_ascii_digit()) {
            ColumnNameError::StartsWithNumber
        } else if !raw.chars().all(is_column_char) {
            ColumnNameError::InvalidCharacters
        } else {
            return ColumnNameCheck::Accepted(raw.to_string());
        };

        ColumnNameCheck::Rejected {
            reason,
            suggestion: suggest_column_name(raw),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, ColumnNameCheck::Accepted(_))
    }
}

fn is_column_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Best-effort repair of a column name.
///
/// Dashes become underscores, camel case becomes lower snake case
/// (`BlogExample` -> `blog_example`) and anything outside `[A-Za-z0-9_]`
/// is dropped.
pub fn suggest_column_name(raw: &str) -> String {
    let dashed = raw.replace('-', "_");

    let mut snake = String::with_capacity(dashed.len() + 4);
    let mut previous: Option<char> = None;
    for c in dashed.chars() {
        if c.is_ascii_uppercase() && previous.is_some_and(is_word_char) {
            snake.push('_');
        }
        snake.push(c.to_ascii_lowercase());
        previous = Some(c);
    }

    snake.chars().filter(|c| is_word_char(*c)).collect()
}

/// Default label for a column: underscores to spaces, words capitalised
pub fn humanize(name: &str) -> String {
    name.replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(raw: &str) -> (ColumnNameError, String) {
        match ColumnNameCheck::validate(raw) {
            ColumnNameCheck::Rejected { reason, suggestion } => (reason, suggestion),
            ColumnNameCheck::Accepted(name) => panic!("'{}' was accepted as '{}'", raw, name),
        }
    }

    #[test]
    fn test_accepts_snake_case() {
        assert_eq!(
            ColumnNameCheck::validate("my_input"),
            ColumnNameCheck::Accepted("my_input".to_string())
        );
        assert!(ColumnNameCheck::validate("field2").is_accepted());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(rejected(""), (ColumnNameError::Empty, String::new()));
        assert_eq!(rejected("   "), (ColumnNameError::Empty, String::new()));
    }

    #[test]
    fn test_rejects_leading_digit_first() {
        let (reason, suggestion) = rejected("1st-Place");
        assert_eq!(reason, ColumnNameError::StartsWithNumber);
        assert_eq!(suggestion, "1st__place");

        assert_eq!(rejected("9valid").0, ColumnNameError::StartsWithNumber);
    }

    #[test]
    fn test_camel_case_suggestion() {
        assert_eq!(
            rejected("BlogExample"),
            (
                ColumnNameError::InvalidCharacters,
                "blog_example".to_string()
            )
        );
    }

    #[test]
    fn test_dash_and_symbol_suggestion() {
        assert_eq!(rejected("my-field").1, "my_field");
        assert_eq!(rejected("price (€)").1, "price");
        assert_eq!(rejected("isActive").1, "is_active");
    }

    #[test]
    fn test_suggestion_only_word_chars() {
        for raw in ["Ünïcode Näme", "a.b/c", "x y-z", "ÄBC", "--", "tab\tname"] {
            let suggestion = suggest_column_name(raw);
            assert!(
                suggestion.chars().all(is_word_char),
                "'{}' suggested '{}'",
                raw,
                suggestion
            );
            assert!(!ColumnNameCheck::validate(raw).is_accepted());
        }
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("my_input"), "My Input");
        assert_eq!(humanize("published_on"), "Published On");
        assert_eq!(humanize("title"), "Title");
    }
}
