//! `ext_tables.sql` maintenance for columns the framework does not create

use super::report::ModificationKind;
use std::path::PathBuf;
use tracing::warn;

pub const EXT_TABLES_SQL: &str = "ext_tables.sql";

pub fn ext_tables_path() -> PathBuf {
    PathBuf::from(EXT_TABLES_SQL)
}

/// New contents for `ext_tables.sql` and how they relate to the old ones
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlChange {
    pub contents: String,
    pub kind: ModificationKind,
}

/// Declare `columns` (name, SQL definition) for `table_name`.
///
/// Missing file: created with one `CREATE TABLE` block. No block for the
/// table yet: a block is appended. Existing block: missing columns are
/// inserted before the line closing it. A block written on a single line,
/// or one whose end cannot be found before the next `CREATE TABLE`, gets a
/// second block for the same table appended; the schema reader combines
/// them. Returns `None` when every column is already declared.
pub fn declare_columns(
    existing: Option<&str>,
    table_name: &str,
    columns: &[(&str, &str)],
) -> Option<SqlChange> {
    if columns.is_empty() {
        return None;
    }

    let Some(existing) = existing else {
        return Some(SqlChange {
            contents: create_block(table_name, columns),
            kind: ModificationKind::Created,
        });
    };

    let lines: Vec<&str> = existing.lines().collect();
    match find_block(&lines, table_name) {
        Some(Block::Lines { start, end }) => {
            merge_into_block(existing, &lines, start, end, columns)
        }
        Some(Block::Inline(start)) => {
            let missing = undeclared(&inline_declarations(lines[start]), columns);
            if missing.is_empty() {
                return None;
            }
            Some(append_block(existing, table_name, &missing))
        }
        Some(Block::Unterminated(start)) => {
            warn!(
                table = table_name,
                line = start + 1,
                "no closing line for the table block, appending a new block"
            );
            let declared: Vec<&str> = lines[start + 1..]
                .iter()
                .take_while(|line| !is_any_block_header(line))
                .filter_map(|line| declared_name(line))
                .collect();
            let missing = undeclared(&declared, columns);
            if missing.is_empty() {
                return None;
            }
            Some(append_block(existing, table_name, &missing))
        }
        None => Some(append_block(existing, table_name, columns)),
    }
}

/// Where the `CREATE TABLE` statement of one table sits in the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    /// Header on `start`, closing `)` starts line `end`
    Lines { start: usize, end: usize },
    /// Header and closing parenthesis on the same line
    Inline(usize),
    /// No closing line before the next block or the end of the file
    Unterminated(usize),
}

fn find_block(lines: &[&str], table_name: &str) -> Option<Block> {
    let start = lines
        .iter()
        .position(|line| is_block_header(line, table_name))?;
    if closes_on_same_line(lines[start]) {
        return Some(Block::Inline(start));
    }

    let block = lines[start + 1..]
        .iter()
        .take_while(|line| !is_any_block_header(line))
        .position(|line| line.trim_start().starts_with(')'))
        .map(|offset| Block::Lines {
            start,
            end: start + 1 + offset,
        })
        .unwrap_or(Block::Unterminated(start));
    Some(block)
}

fn append_block(existing: &str, table_name: &str, columns: &[(&str, &str)]) -> SqlChange {
    let mut contents = existing.to_string();
    if !contents.is_empty() {
        if !contents.ends_with('\n') {
            contents.push('\n');
        }
        contents.push('\n');
    }
    contents.push_str(&create_block(table_name, columns));
    SqlChange {
        contents,
        kind: ModificationKind::Appended,
    }
}

fn undeclared<'c>(declared: &[&str], columns: &[(&'c str, &'c str)]) -> Vec<(&'c str, &'c str)> {
    columns
        .iter()
        .filter(|(name, _)| !declared.iter().any(|d| d.eq_ignore_ascii_case(name)))
        .copied()
        .collect()
}

fn merge_into_block(
    existing: &str,
    lines: &[&str],
    start: usize,
    end: usize,
    columns: &[(&str, &str)],
) -> Option<SqlChange> {
    let declared: Vec<&str> = lines[start + 1..end]
        .iter()
        .filter_map(|line| declared_name(line))
        .collect();

    let missing: Vec<String> = undeclared(&declared, columns)
        .into_iter()
        .map(|(name, definition)| column_line(name, definition))
        .collect();
    if missing.is_empty() {
        return None;
    }

    let mut merged: Vec<String> = lines[..end].iter().map(|l| l.to_string()).collect();

    // The previous last entry needs a separator before the new ones
    if let Some(last) = merged[start + 1..]
        .iter_mut()
        .rev()
        .find(|line| !line.trim().is_empty())
    {
        if !last.trim_end().ends_with(',') {
            let trimmed = last.trim_end().len();
            last.truncate(trimmed);
            last.push(',');
        }
    }

    merged.push(missing.join(",\n"));
    merged.extend(lines[end..].iter().map(|l| l.to_string()));

    let mut contents = merged.join("\n");
    if existing.ends_with('\n') {
        contents.push('\n');
    }

    Some(SqlChange {
        contents,
        kind: ModificationKind::Merged,
    })
}

fn create_block(table_name: &str, columns: &[(&str, &str)]) -> String {
    let body: Vec<String> = columns
        .iter()
        .map(|(name, definition)| column_line(name, definition))
        .collect();
    format!("CREATE TABLE {} (\n{}\n);\n", table_name, body.join(",\n"))
}

fn column_line(name: &str, definition: &str) -> String {
    format!("\t{} {}", name, definition)
}

/// `CREATE TABLE name (`, case and whitespace insensitive, backticks allowed
fn is_block_header(line: &str, table_name: &str) -> bool {
    let compact: String = line
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '`')
        .collect::<String>()
        .to_lowercase();
    compact.starts_with(&format!("createtable{}(", table_name.to_lowercase()))
}

/// Any `CREATE TABLE` header
fn is_any_block_header(line: &str) -> bool {
    let compact: String = line
        .chars()
        .filter(|c| !c.is_whitespace())
        .take("createtable".len())
        .collect::<String>()
        .to_lowercase();
    compact == "createtable"
}

/// The parenthesis opened by the header is closed again on that line
fn closes_on_same_line(line: &str) -> bool {
    let Some(open) = line.find('(') else {
        return false;
    };
    let mut depth = 0usize;
    for c in line[open..].chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}

/// Column names declared in a single-line `CREATE TABLE x (a int, b text);`
fn inline_declarations(line: &str) -> Vec<&str> {
    let (Some(open), Some(close)) = (line.find('('), line.rfind(')')) else {
        return Vec::new();
    };
    if close <= open {
        return Vec::new();
    }

    let body = &line[open + 1..close];
    let mut entries = Vec::new();
    let mut depth = 0usize;
    let mut from = 0;
    for (i, c) in body.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                entries.push(&body[from..i]);
                from = i + 1;
            }
            _ => {}
        }
    }
    entries.push(&body[from..]);
    entries.into_iter().filter_map(declared_name).collect()
}

fn declared_name(line: &str) -> Option<&str> {
    line.trim()
        .trim_start_matches('`')
        .split(|c: char| c.is_whitespace() || c == '`')
        .next()
        .filter(|name| !name.is_empty())
}
