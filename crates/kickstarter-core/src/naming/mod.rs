//! Validation and repair of user-supplied identifiers
//!
//! Both validators return values, never errors: a rejection carries the
//! message to show and, where one exists, the text to pre-fill on re-prompt.

pub mod column;
pub mod table;

pub use column::{humanize, suggest_column_name, ColumnNameCheck, ColumnNameError};
pub use table::{PrefixSuggestion, TableNameCheck, TableNameError};
