//! Tag index: accumulates entries and renders the tag file.
//!
//! Entries are kept in insertion order and only sorted when the file text is
//! produced, so `append` stays a plain extend.

use std::fmt;

use crate::types::TagEntry;

/// Program name written into the pseudo-tag header.
pub const PROGRAM_NAME: &str = "AHKTags";
/// Program version written into the pseudo-tag header.
pub const PROGRAM_VERSION: &str = "0.1";

/// One `!_TAG_*` pseudo-tag line: `!NAME<TAB>value<TAB>/comment/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagHeader {
    /// Pseudo-tag name, including the `_TAG_` prefix
    pub name: &'static str,
    /// Value field
    pub value: &'static str,
    /// Comment placed between slashes
    pub comment: &'static str,
}

impl fmt::Display for TagHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "!{}\t{}\t/{}/", self.name, self.value, self.comment)
    }
}

/// Fixed header block, in output order.
pub const HEADERS: [TagHeader; 6] = [
    TagHeader {
        name: "_TAG_FILE_FORMAT",
        value: "2",
        comment: "extended format; --format=1 will not append ;\" to lines",
    },
    TagHeader {
        name: "_TAG_FILE_SORTED",
        value: "1",
        comment: "0=unsorted, 1=sorted, 2=foldcase",
    },
    TagHeader {
        name: "_TAG_PROGRAM_AUTHOR",
        value: "Sviatoslav Abakumov",
        comment: "dust.harvesting@gmail.com",
    },
    TagHeader {
        name: "_TAG_PROGRAM_NAME",
        value: PROGRAM_NAME,
        comment: "",
    },
    TagHeader {
        name: "_TAG_PROGRAM_URL",
        value: "https://github.com/perlence/ahktags",
        comment: "",
    },
    TagHeader {
        name: "_TAG_PROGRAM_VERSION",
        value: PROGRAM_VERSION,
        comment: "",
    },
];

/// Accumulated tag entries for one run.
#[derive(Debug, Default, Clone)]
pub struct TagIndex {
    entries: Vec<TagEntry>,
}

impl TagIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add entries. Duplicates are kept.
    pub fn append<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = TagEntry>,
    {
        self.entries.extend(entries);
    }

    /// Number of entries held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry was appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[TagEntry] {
        &self.entries
    }

    /// Entries ordered by name; ties keep insertion order.
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<&TagEntry> {
        let mut sorted: Vec<&TagEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| a.name().cmp(b.name()));
        sorted
    }

    /// Render the tag file: header lines then sorted entry lines, joined by
    /// `\n` without a trailing newline.
    #[must_use]
    pub fn serialize(&self) -> String {
        let lines: Vec<String> = HEADERS
            .iter()
            .map(ToString::to_string)
            .chain(self.sorted_entries().into_iter().map(ToString::to_string))
            .collect();
        lines.join("\n")
    }
}

impl fmt::Display for TagIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl Extend<TagEntry> for TagIndex {
    fn extend<I: IntoIterator<Item = TagEntry>>(&mut self, iter: I) {
        self.append(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TagKind;

    #[test]
    fn test_header_lines() {
        let rendered: Vec<String> = HEADERS.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            [
                "!_TAG_FILE_FORMAT\t2\t/extended format; --format=1 will not append ;\" to lines/",
                "!_TAG_FILE_SORTED\t1\t/0=unsorted, 1=sorted, 2=foldcase/",
                "!_TAG_PROGRAM_AUTHOR\tSviatoslav Abakumov\t/dust.harvesting@gmail.com/",
                "!_TAG_PROGRAM_NAME\tAHKTags\t//",
                "!_TAG_PROGRAM_URL\thttps://github.com/perlence/ahktags\t//",
                "!_TAG_PROGRAM_VERSION\t0.1\t//",
            ]
        );
    }

    #[test]
    fn test_empty_index_is_headers_only() {
        let index = TagIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.serialize().lines().count(), HEADERS.len());
    }

    #[test]
    fn test_sort_is_stable_for_equal_names() {
        let mut index = TagIndex::new();
        index.append([
            TagEntry::new("b", "x.ahk", "/^b:$/", TagKind::Label, 2),
            TagEntry::new("a", "z.ahk", "/^a:$/", TagKind::Label, 9),
            TagEntry::new("a", "y.ahk", "/^a:$/", TagKind::Label, 1),
        ]);
        let files: Vec<&str> = index.sorted_entries().iter().map(|e| e.file()).collect();
        assert_eq!(files, ["z.ahk", "y.ahk", "x.ahk"]);
        assert_eq!(index.entries()[0].name(), "b");
    }
}
