//! The line-per-entry text format.
//!
//! Each entry is one line of five `;`-separated fields:
//!
//! ```text
//! key;meaning;reverse meaning;example;category
//! ```
//!
//! Fields are written as-is. A field that itself contains `;` makes the line
//! unreadable on the way back in.
//!
//! Trailing empty fields are significant: `word;;;;` is a record with four
//! empty fields, while `a;b;c;d;e;` has six fields and is malformed. This
//! keeps every exported line readable, including entries whose last fields
//! are empty.
//!
//! Bytes that are not valid UTF-8 are replaced with `U+FFFD` when reading,
//! so one badly encoded line does not stop an import.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::string::String;
use std::vec::Vec;

use allocator_api2::alloc::Allocator;

use crate::entry::Entry;
use crate::error::PersistError;
use crate::index::Lexicon;

/// Separator between the fields of a record.
pub const FIELD_SEPARATOR: char = ';';

/// Outcome of an [`import`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Lines added to the lexicon.
    pub imported: usize,
    /// Lines skipped because they did not have five fields.
    pub malformed: usize,
    /// Well-formed lines the lexicon refused (duplicate or invalid key).
    pub rejected: usize,
}

/// Renders `entry` as one record, without a line terminator.
pub fn format_line(entry: &Entry) -> String {
    [
        entry.key(),
        entry.meaning(),
        entry.reverse_meaning(),
        entry.example(),
        entry.category(),
    ]
    .join(";")
}

/// Parses one record.
///
/// # Errors
///
/// [`PersistError::Malformed`] unless `line` splits into exactly five
/// fields.
pub fn parse_line(line: &str) -> Result<Entry, PersistError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    match fields[..] {
        [key, meaning, reverse_meaning, example, category] => {
            Ok(Entry::new(key, meaning, reverse_meaning, example, category))
        }
        _ => Err(PersistError::Malformed {
            found: fields.len(),
        }),
    }
}

/// Adds every record read from `reader` to `lexicon`.
///
/// Blank lines are ignored. Malformed lines and lines the lexicon rejects
/// are counted and skipped; the rest of the input is still read.
///
/// # Errors
///
/// Returns [`PersistError::Io`] if reading fails. Entries added before the
/// failure stay in the lexicon.
pub fn import<A, R>(lexicon: &mut Lexicon<A>, mut reader: R) -> Result<ImportSummary, PersistError>
where
    A: Allocator + Clone,
    R: BufRead,
{
    let mut summary = ImportSummary::default();
    let mut raw = Vec::new();
    let mut n = 0;
    loop {
        raw.clear();
        if reader.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        n += 1;

        let line = decode_line(&raw);
        if let Cow::Owned(_) = line {
            tracing::warn!(line = n, "replaced invalid UTF-8 in record");
        }
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line) {
            Ok(entry) => match lexicon.try_add(entry) {
                Ok(()) => summary.imported += 1,
                Err(err) => {
                    tracing::debug!(line = n, %err, "skipping rejected record");
                    summary.rejected += 1;
                }
            },
            Err(err) => {
                tracing::warn!(line = n, %err, "skipping malformed record");
                summary.malformed += 1;
            }
        }
    }
    tracing::info!(
        imported = summary.imported,
        malformed = summary.malformed,
        rejected = summary.rejected,
        "import finished"
    );
    Ok(summary)
}

/// Strips the line terminator (`\n` or `\r\n`) and decodes lossily.
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw)
}

/// Writes every entry of `lexicon` to `writer`, one record per line, in
/// partition then key order. Returns the number of records written.
///
/// # Errors
///
/// Returns [`PersistError::Io`] if writing fails.
pub fn export<A, W>(lexicon: &Lexicon<A>, mut writer: W) -> Result<usize, PersistError>
where
    A: Allocator + Clone,
    W: Write,
{
    let mut written = 0;
    for entry in lexicon.entries() {
        writeln!(writer, "{}", format_line(entry))?;
        written += 1;
    }
    writer.flush()?;
    tracing::info!(written, "export finished");
    Ok(written)
}

/// [`import`] from the file at `path`.
///
/// # Errors
///
/// Returns [`PersistError::Io`] if the file cannot be opened or read.
pub fn load_path<A: Allocator + Clone>(
    lexicon: &mut Lexicon<A>,
    path: impl AsRef<Path>,
) -> Result<ImportSummary, PersistError> {
    let file = File::open(path)?;
    import(lexicon, BufReader::new(file))
}

/// [`export`] to the file at `path`, replacing it.
///
/// # Errors
///
/// Returns [`PersistError::Io`] if the file cannot be created or written.
pub fn save_path<A: Allocator + Clone>(
    lexicon: &Lexicon<A>,
    path: impl AsRef<Path>,
) -> Result<usize, PersistError> {
    let file = File::create(path)?;
    export(lexicon, BufWriter::new(file))
}
