//! Dictionary loading utilities
//!
//! Reads word/clue rows from the embedded table, a tab-separated file or a JSON
//! array. Row-level problems are skipped and counted, never fatal.

use super::embedded::EMBEDDED;
use super::entry::{DictionaryEntry, RawEntry};
use super::index::DictionaryIndex;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where dictionary rows come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// Rows compiled into the binary
    Embedded,
    /// A `.json` array of row objects, or tab-separated rows for any other extension
    File(PathBuf),
}

/// Row counts from one load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Data rows seen
    pub rows: usize,
    /// Rows that passed validation, before deduplication
    pub accepted: usize,
    /// Rows dropped as malformed or filtered
    pub skipped: usize,
}

/// One object in a JSON dictionary
#[derive(Debug, Deserialize)]
struct JsonRow {
    word: String,
    clue: String,
    #[serde(default)]
    common: bool,
    #[serde(default)]
    obscure: bool,
    #[serde(default)]
    categories: Vec<String>,
}

/// Load a source into an index, optionally keeping one category
///
/// # Errors
///
/// Returns an I/O error if a file source cannot be read, or if a JSON source is
/// not an array.
///
/// # Examples
/// ```
/// use daily_crossword::dictionary::{load, DictionarySource};
///
/// let space = load(&DictionarySource::Embedded, Some("space")).unwrap();
/// assert!(space.contains("GALAXY"));
/// ```
pub fn load(source: &DictionarySource, category: Option<&str>) -> io::Result<DictionaryIndex> {
    load_with_report(source, category).map(|(index, _)| index)
}

/// Like [`load`], also returning row counts
///
/// # Errors
///
/// Same as [`load`].
pub fn load_with_report(
    source: &DictionarySource,
    category: Option<&str>,
) -> io::Result<(DictionaryIndex, LoadReport)> {
    let (entries, report) = match source {
        DictionarySource::Embedded => entries_from_raw(EMBEDDED.iter().copied()),
        DictionarySource::File(path) => load_from_file(path)?,
    };

    debug!(
        "Loaded {} of {} dictionary rows ({} skipped)",
        report.accepted, report.rows, report.skipped
    );
    Ok((DictionaryIndex::build(entries, category), report))
}

/// Read and validate every row of a dictionary file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or if a `.json` file does not
/// hold an array.
///
/// # Examples
/// ```no_run
/// use daily_crossword::dictionary::load_from_file;
///
/// let (entries, report) = load_from_file("data/dictionary.tsv").unwrap();
/// println!("Loaded {} entries, skipped {}", entries.len(), report.skipped);
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<(Vec<DictionaryEntry>, LoadReport)> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        entries_from_json(&content)
    } else {
        Ok(entries_from_tsv(&content))
    }
}

/// Validate tab-separated rows; blank lines and `#` comments are not counted
#[must_use]
pub fn entries_from_tsv(content: &str) -> (Vec<DictionaryEntry>, LoadReport) {
    let mut report = LoadReport::default();
    let mut entries = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        report.rows += 1;

        let Some(raw) = RawEntry::parse_tsv(line) else {
            debug!("Skipping line {}: no clue column", line_no + 1);
            report.skipped += 1;
            continue;
        };
        match DictionaryEntry::try_from(raw) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                debug!("Skipping line {} ({}): {e}", line_no + 1, raw.word);
                report.skipped += 1;
            }
        }
    }

    report.accepted = entries.len();
    (entries, report)
}

/// Validate a JSON array of `{word, clue, common, obscure, categories}` objects
///
/// Elements that are not well-formed rows are skipped.
///
/// # Errors
///
/// Returns `InvalidData` if the document is not a JSON array.
pub fn entries_from_json(content: &str) -> io::Result<(Vec<DictionaryEntry>, LoadReport)> {
    let values: Vec<serde_json::Value> = serde_json::from_str(content)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let mut report = LoadReport {
        rows: values.len(),
        ..LoadReport::default()
    };
    let mut entries = Vec::new();

    for (i, value) in values.into_iter().enumerate() {
        let row = match serde_json::from_value::<JsonRow>(value) {
            Ok(row) => row,
            Err(e) => {
                debug!("Skipping row {i}: {e}");
                report.skipped += 1;
                continue;
            }
        };
        let tags = row.categories.iter().map(String::as_str);
        match DictionaryEntry::new(&row.word, &row.clue, row.common, row.obscure, tags) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                debug!("Skipping row {i} ({}): {e}", row.word);
                report.skipped += 1;
            }
        }
    }

    report.accepted = entries.len();
    Ok((entries, report))
}

/// Validate already-split rows
#[must_use]
pub fn entries_from_raw<'a>(
    rows: impl IntoIterator<Item = RawEntry<'a>>,
) -> (Vec<DictionaryEntry>, LoadReport) {
    let mut report = LoadReport::default();
    let mut entries = Vec::new();

    for raw in rows {
        report.rows += 1;
        match DictionaryEntry::try_from(raw) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                debug!("Skipping {}: {e}", raw.word);
                report.skipped += 1;
            }
        }
    }

    report.accepted = entries.len();
    (entries, report)
}

/// Index over the embedded dictionary, no category filter
#[must_use]
pub fn embedded_index() -> DictionaryIndex {
    let (entries, _) = entries_from_raw(EMBEDDED.iter().copied());
    DictionaryIndex::build(entries, None)
}
