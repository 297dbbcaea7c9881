//! The index document: free markdown text with a fixed-width table whose
//! newest row sits directly below the separator line.
//!
//! The table is parsed into an [`IndexDocument`] holding the text up to the
//! separator, the rows below it and whatever follows, so rows can be looked
//! up and inserted without touching the rest of the file.

use crate::config::ColumnLayout;
use crate::error::ComicError;
use log::{debug, info};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

const DELIMITER: &str = " | ";

/// Left-justify `value` in exactly `width` characters, truncating if needed.
fn fit(value: &str, width: usize) -> String {
    let mut out: String = value.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat_n(' ', width - len));
    out
}

fn table_line(date: &str, title: &str, link: &str, layout: &ColumnLayout) -> String {
    format!(
        "| {} | {} | {} |",
        fit(date, layout.date),
        fit(title, layout.title),
        fit(link, layout.link)
    )
}

pub fn separator_line(layout: &ColumnLayout) -> String {
    format!(
        "| {} | {} | {} |",
        "-".repeat(layout.date),
        "-".repeat(layout.title),
        "-".repeat(layout.link)
    )
}

pub fn header_line(layout: &ColumnLayout) -> String {
    table_line("Date", "Title", "Link", layout)
}

/// `[Link](./<url-encoded path> "title")`
pub fn link_cell(title: &str, url_path: &str) -> String {
    format!("[Link](./{} \"{}\")", urlencoding::encode(url_path), title)
}

/// Render the index row for a page.
pub fn generate_content_line(
    title: &str,
    date: &str,
    url_path: &str,
    layout: &ColumnLayout,
) -> String {
    IndexRow::new(date, title, link_cell(title, url_path)).render(layout)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRow {
    pub date: String,
    pub title: String,
    pub link: String,
}

impl IndexRow {
    pub fn new(date: impl Into<String>, title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            title: title.into(),
            link: link.into(),
        }
    }

    pub fn render(&self, layout: &ColumnLayout) -> String {
        if self.link.chars().count() > layout.link {
            debug!(
                "Link cell for {:?} exceeds {} characters, truncating",
                self.title, layout.link
            );
        }
        table_line(&self.date, &self.title, &self.link, layout)
    }

    /// (date, title) as they appear in the table.
    fn key(&self, layout: &ColumnLayout) -> (String, String) {
        (
            fit(&self.date, layout.date).trim().to_string(),
            fit(&self.title, layout.title).trim().to_string(),
        )
    }

    /// Parse one `| date | title | link |` line.
    pub fn parse(line: &str, layout: &ColumnLayout) -> Option<Self> {
        let inner = line
            .trim_end_matches('\r')
            .strip_prefix("| ")?
            .strip_suffix(" |")?;
        let (date, rest) = inner.split_once(DELIMITER)?;
        let (title, link) = split_title(rest, layout.title)?;
        if date.trim().is_empty() || date.chars().all(|c| c == '-') {
            return None;
        }
        Some(Self::new(date.trim(), title.trim(), link.trim()))
    }
}

// Titles may contain " | "; rows we wrote have the delimiter at a fixed column.
fn split_title(rest: &str, width: usize) -> Option<(&str, &str)> {
    if let Some((idx, _)) = rest.char_indices().nth(width) {
        if let Some(link) = rest[idx..].strip_prefix(DELIMITER) {
            return Some((&rest[..idx], link));
        }
    }
    rest.split_once(DELIMITER)
}

// Row-shaped lines elsewhere in the document still count as listed.
fn stray_rows(text: &str, layout: &ColumnLayout) -> Vec<IndexRow> {
    text.lines()
        .filter_map(|line| IndexRow::parse(line, layout))
        .collect()
}

#[derive(Debug, Clone)]
struct IndexEntry {
    row: IndexRow,
    line: String,
}

/// Parsed index document.
#[derive(Debug, Clone)]
pub struct IndexDocument {
    layout: ColumnLayout,
    /// Everything up to the end of the separator line (the whole text if
    /// there is no separator).
    head: String,
    has_separator: bool,
    entries: Vec<IndexEntry>,
    tail: String,
    /// Rows found outside the table, kept only for duplicate checks.
    stray: Vec<IndexRow>,
}

impl IndexDocument {
    pub fn parse(content: &str, layout: ColumnLayout) -> Self {
        let separator = separator_line(&layout);
        let mut offset = 0;
        let mut head_end = None;
        for line in content.split_inclusive('\n') {
            let text = line.strip_suffix('\n').unwrap_or(line);
            if text.trim() == separator {
                head_end = Some(offset + text.len());
                break;
            }
            offset += line.len();
        }

        let Some(head_end) = head_end else {
            return Self {
                layout,
                head: content.to_string(),
                has_separator: false,
                entries: Vec::new(),
                tail: String::new(),
                stray: stray_rows(content, &layout),
            };
        };

        let mut rest = &content[head_end..];
        let mut entries = Vec::new();
        while let Some(after) = rest.strip_prefix('\n') {
            let line = after.split('\n').next().unwrap_or_default();
            let Some(row) = IndexRow::parse(line, &layout) else {
                break;
            };
            entries.push(IndexEntry {
                row,
                line: line.to_string(),
            });
            rest = &after[line.len()..];
        }
        let head = &content[..head_end];
        let mut stray = stray_rows(head, &layout);
        stray.extend(stray_rows(rest, &layout));
        debug!(
            "Parsed index table with {} rows, {} outside it",
            entries.len(),
            stray.len()
        );

        Self {
            layout,
            head: head.to_string(),
            has_separator: true,
            entries,
            tail: rest.to_string(),
            stray,
        }
    }

    pub fn has_separator(&self) -> bool {
        self.has_separator
    }

    pub fn rows(&self) -> impl Iterator<Item = &IndexRow> {
        self.entries.iter().map(|e| &e.row)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a row with the same date and title is anywhere in the document.
    pub fn contains(&self, row: &IndexRow) -> bool {
        let key = row.key(&self.layout);
        self.rows()
            .chain(&self.stray)
            .any(|r| r.key(&self.layout) == key)
    }

    /// Start a table at the end of the document, after a blank line.
    pub fn append_separator(&mut self) {
        if self.has_separator {
            return;
        }
        let mut head = std::mem::take(&mut self.head);
        if !head.is_empty() {
            if !head.ends_with('\n') {
                head.push('\n');
            }
            if !head.ends_with("\n\n") {
                head.push('\n');
            }
        }
        head.push_str(&header_line(&self.layout));
        head.push('\n');
        head.push_str(&separator_line(&self.layout));
        self.head = head;
        self.tail = "\n".to_string();
        self.has_separator = true;
    }

    /// Put `row` directly below the separator. Returns false when the
    /// document has no separator to insert under.
    pub fn insert(&mut self, row: IndexRow) -> bool {
        if !self.has_separator {
            return false;
        }
        let line = row.render(&self.layout);
        self.entries.insert(0, IndexEntry { row, line });
        true
    }
}

impl fmt::Display for IndexDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.head)?;
        for entry in &self.entries {
            f.write_str("\n")?;
            f.write_str(&entry.line)?;
        }
        f.write_str(&self.tail)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    AlreadyPresent,
}

/// Add the row for a page to the index at `path`, unless it is already there.
///
/// A missing file or a file without a table gets a header and separator
/// appended first, in the same write.
pub fn insert_to_content_page(
    path: &Path,
    layout: ColumnLayout,
    title: &str,
    date: &str,
    url_path: &str,
) -> Result<InsertOutcome, ComicError> {
    let row = IndexRow::new(date, title, link_cell(title, url_path));

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!("Index {} does not exist yet, creating it", path.display());
            String::new()
        }
        Err(err) => return Err(ComicError::io(path, err)),
    };

    let mut doc = IndexDocument::parse(&content, layout);
    if !doc.has_separator() {
        info!("No table separator in {}, appending one", path.display());
        doc.append_separator();
    }

    if doc.contains(&row) {
        info!(
            "Index {} already lists {} {:?}, skipping",
            path.display(),
            date,
            title
        );
        return Ok(InsertOutcome::AlreadyPresent);
    }

    if !doc.insert(row) {
        return Err(ComicError::MissingSeparator {
            path: path.to_path_buf(),
        });
    }

    fs::write(path, doc.to_string()).map_err(|err| ComicError::io(path, err))?;
    info!("Added {} {:?} to {}", date, title, path.display());
    Ok(InsertOutcome::Inserted)
}
