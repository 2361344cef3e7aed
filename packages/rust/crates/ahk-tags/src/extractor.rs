//! Regex-driven symbol extractor for AutoHotkey scripts.
//!
//! Each rule is scanned over the raw script bytes; every match becomes one
//! [`TagEntry`]. Matching is lazy: [`TagEntries`] pulls the next regex match
//! only when asked, and keeps a running line count so a file is walked once
//! per rule regardless of how many symbols it holds.

use memchr::{memchr2, memchr2_iter};
use regex::bytes::CaptureMatches;

use crate::escape::format_address;
use crate::patterns::{NAME_GROUP, rule_for};
use crate::types::{TagEntry, TagKind};

/// Symbol extractor for AutoHotkey source text.
pub struct TagExtractor;

impl TagExtractor {
    /// Lazily find every match of the `kind` rule in `text`.
    ///
    /// `file` is recorded on each entry with a leading `./` removed.
    /// `text` is treated as opaque bytes; any encoding works.
    /// Entries come out in text order, which is ascending line order.
    #[must_use]
    pub fn find_entries<'t, T>(kind: TagKind, file: &'t str, text: &'t T) -> TagEntries<'t>
    where
        T: AsRef<[u8]> + ?Sized,
    {
        let text = text.as_ref();
        TagEntries {
            kind,
            file: normalize_path(file),
            text,
            matches: rule_for(kind).captures_iter(text),
            lines: LineCounter::default(),
        }
    }

    /// Run the rules for `kinds`, in the order given, over one script.
    ///
    /// Rules are independent: a line matched by two rules produces two
    /// entries.
    pub fn extract<'t, T, K>(
        file: &'t str,
        text: &'t T,
        kinds: K,
    ) -> impl Iterator<Item = TagEntry> + 't
    where
        T: AsRef<[u8]> + ?Sized,
        K: IntoIterator<Item = TagKind>,
        K::IntoIter: 't,
    {
        let text = text.as_ref();
        kinds
            .into_iter()
            .flat_map(move |kind| Self::find_entries(kind, file, text))
    }
}

/// Iterator over the entries of a single rule in a single script.
///
/// Restartable by calling [`TagExtractor::find_entries`] again with the same
/// inputs.
pub struct TagEntries<'t> {
    kind: TagKind,
    file: &'t str,
    text: &'t [u8],
    matches: CaptureMatches<'static, 't>,
    lines: LineCounter,
}

impl Iterator for TagEntries<'_> {
    type Item = TagEntry;

    fn next(&mut self) -> Option<TagEntry> {
        loop {
            let caps = self.matches.next()?;
            let (Some(whole), Some(name)) = (caps.get(0), caps.name(NAME_GROUP)) else {
                continue;
            };

            let line = self.lines.advance(self.text, whole.start());
            let address = format_address(first_line(whole.as_bytes()));

            return Some(TagEntry::new(
                String::from_utf8_lossy(name.as_bytes()),
                self.file,
                address,
                self.kind,
                line,
            ));
        }
    }
}

/// Running 1-based line number for monotonically increasing offsets.
#[derive(Debug, Clone, Copy)]
struct LineCounter {
    offset: usize,
    line: usize,
}

impl Default for LineCounter {
    fn default() -> Self {
        Self { offset: 0, line: 1 }
    }
}

impl LineCounter {
    /// Move to byte offset `to` and return the line it sits on.
    fn advance(&mut self, text: &[u8], to: usize) -> usize {
        if to > self.offset {
            self.line += count_line_breaks(&text[self.offset..to]);
            self.offset = to;
        }
        self.line
    }
}

/// Count `\r\n`, lone `\r` and lone `\n` sequences in `bytes`.
fn count_line_breaks(bytes: &[u8]) -> usize {
    memchr2_iter(b'\r', b'\n', bytes)
        .filter(|&pos| !(bytes[pos] == b'\r' && bytes.get(pos + 1) == Some(&b'\n')))
        .count()
}

/// Text of a match up to its first line break.
fn first_line(span: &[u8]) -> &[u8] {
    match memchr2(b'\r', b'\n', span) {
        Some(end) => &span[..end],
        None => span,
    }
}

/// Strip a single leading `./` from a path.
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    path.strip_prefix("./").unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_line_breaks_mixed() {
        assert_eq!(count_line_breaks(b""), 0);
        assert_eq!(count_line_breaks(b"a\nb"), 1);
        assert_eq!(count_line_breaks(b"a\r\nb"), 1);
        assert_eq!(count_line_breaks(b"a\rb"), 1);
        assert_eq!(count_line_breaks(b"\r\n\r\n\r\r\n\n"), 5);
    }

    #[test]
    fn test_line_counter_is_incremental() {
        let text = b"a\nb\r\nc\rd\n";
        let mut counter = LineCounter::default();
        assert_eq!(counter.advance(text, 0), 1);
        assert_eq!(counter.advance(text, 2), 2);
        assert_eq!(counter.advance(text, 5), 3);
        assert_eq!(counter.advance(text, 7), 4);
        assert_eq!(counter.advance(text, 7), 4);
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line(b"Foo() {\r\n}"), b"Foo() {");
        assert_eq!(first_line(b"Bar:"), b"Bar:");
        assert_eq!(first_line(b"x =\rnext"), b"x =");
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("./lib/a.ahk"), "lib/a.ahk");
        assert_eq!(normalize_path("././a.ahk"), "./a.ahk");
        assert_eq!(normalize_path("lib/./a.ahk"), "lib/./a.ahk");
        assert_eq!(normalize_path("../a.ahk"), "../a.ahk");
    }
}
