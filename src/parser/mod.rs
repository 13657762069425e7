//! Line-oriented alias declaration parser
//!
//! Scans startup file text for lines of the form `alias NAME=WORD`, where
//! WORD is a shell word built from single-quoted, double-quoted, bare, and
//! backslash-escaped segments. Working at the character level keeps the
//! `'\''` close-escape-reopen sequence emitted by the writer parseable,
//! which a quote-to-quote regex cannot do.
//!
//! Malformed lines (missing keyword, unbalanced quote, empty command) simply
//! fail the match and are skipped; parsing never errors.

use crate::model::{Alias, AliasSet};

/// Parse one line as an alias declaration.
///
/// Leading whitespace and a trailing `# comment` are tolerated. Returns
/// `None` for anything that is not a well-formed declaration.
pub fn parse_alias_line(line: &str) -> Option<Alias> {
    let rest = line.trim_start().strip_prefix("alias")?;

    // Keyword must be followed by whitespace
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }
    let rest = rest.trim_start();

    let eq = rest.find('=')?;
    let name = &rest[..eq];
    if name.is_empty() || name.contains(|c: char| c.is_whitespace() || c == '\'' || c == '"') {
        return None;
    }

    let (command, tail) = parse_word(&rest[eq + 1..])?;

    // Only whitespace or a comment may follow the value
    let tail = tail.trim_start();
    if !tail.is_empty() && !tail.starts_with('#') {
        return None;
    }

    Some(Alias::new(name, command))
}

/// Consume one shell word, concatenating quoted and unquoted segments.
///
/// Returns the decoded word and the unconsumed remainder of the line, or
/// `None` for an unbalanced quote, a dangling backslash, or an empty word.
fn parse_word(s: &str) -> Option<(String, &str)> {
    let mut word = String::new();
    let mut saw_segment = false;
    let mut rest = s;

    while let Some(c) = rest.chars().next() {
        match c {
            '\'' | '"' => {
                let body = &rest[1..];
                let end = body.find(c)?;
                word.push_str(&body[..end]);
                rest = &body[end + c.len_utf8()..];
                saw_segment = true;
            }
            '\\' => {
                let escaped = rest[1..].chars().next()?;
                word.push(escaped);
                rest = &rest[1 + escaped.len_utf8()..];
                saw_segment = true;
            }
            c if c.is_whitespace() => break,
            c => {
                word.push(c);
                rest = &rest[c.len_utf8()..];
                saw_segment = true;
            }
        }
    }

    if !saw_segment || word.is_empty() {
        return None;
    }
    Some((word, rest))
}

/// Collect every alias declared in the given startup file text.
///
/// Duplicate names are last-write-wins for the command while keeping their
/// first-encounter position, matching how a sourcing shell resolves
/// redefinitions.
pub fn parse_aliases(content: &str) -> AliasSet {
    let mut set = AliasSet::new();
    for line in content.lines() {
        if let Some(alias) = parse_alias_line(line) {
            set.upsert(alias);
        }
    }
    set
}
