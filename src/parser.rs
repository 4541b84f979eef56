//! Line-oriented `KEY=VALUE` parsing.
//!
//! The parser is total: every input string produces a mapping, and lines that
//! are not assignments are skipped rather than reported as errors. Each line is
//! processed in order:
//!
//! 1. Trim surrounding whitespace. Blank lines and lines starting with `#` are
//!    skipped.
//! 2. Truncate at the first `#` (inline comment) and trim again. The scan is
//!    quote-unaware, so `KEY="a#b"` yields `"a`.
//! 3. Split at the first `=`. The key is everything before it, the value is
//!    everything after it, so `A=b=c` assigns `b=c` to `A`. Lines without `=`
//!    are skipped, as are lines whose key trims to nothing.
//! 4. Strip one matching pair of surrounding `"` or `'` from the value. The
//!    interior is kept verbatim: no escapes, no interpolation.
//! 5. Insert into the mapping. A later assignment to the same key wins.

use std::collections::BTreeMap;

/// Parsed variables. Keys are case-sensitive; a key declared with no value maps
/// to the empty string.
pub type EnvMap = BTreeMap<String, String>;

/// Why a line contributed nothing to the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Empty or whitespace-only.
    Blank,
    /// Starts with `#`.
    Comment,
    /// No `=` left after inline-comment truncation.
    MissingSeparator,
    /// Nothing but whitespace before the `=`.
    EmptyKey,
}

/// A line the parser ignored, with its 1-indexed line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: usize,
    pub reason: SkipReason,
}

/// Parse result plus the lines that were skipped along the way.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseReport {
    pub entries: EnvMap,
    pub skipped: Vec<SkippedLine>,
}

/// Parse dotenv-style content into a mapping.
pub fn parse(content: &str) -> EnvMap {
    parse_with_report(content).entries
}

/// Like [`parse`] but also records which lines were skipped and why.
pub fn parse_with_report(content: &str) -> ParseReport {
    let mut report = ParseReport::default();

    for (i, raw) in content.lines().enumerate() {
        match parse_line(raw) {
            Ok((key, value)) => {
                report.entries.insert(key.to_string(), value.to_string());
            }
            Err(reason) => {
                tracing::trace!(line = i + 1, ?reason, "skipping line");
                report.skipped.push(SkippedLine {
                    line: i + 1,
                    reason,
                });
            }
        }
    }

    report
}

/// Parse a single line into a `(key, value)` pair borrowed from the input.
fn parse_line(raw: &str) -> Result<(&str, &str), SkipReason> {
    let line = raw.trim();
    if line.is_empty() {
        return Err(SkipReason::Blank);
    }
    if line.starts_with('#') {
        return Err(SkipReason::Comment);
    }

    let line = strip_inline_comment(line);

    let (key, value) = line
        .split_once('=')
        .ok_or(SkipReason::MissingSeparator)?;
    let key = key.trim();
    if key.is_empty() {
        return Err(SkipReason::EmptyKey);
    }

    Ok((key, unquote(value.trim())))
}

fn strip_inline_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => line[..idx].trim(),
        None => line,
    }
}

/// Remove one matching pair of surrounding quotes, if present.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2
            && let Some(inner) = value
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
