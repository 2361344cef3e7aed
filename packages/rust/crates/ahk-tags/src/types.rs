//! Type definitions for tags.
//!
//! Core data structures shared by the extractor and the tag index.

use std::fmt;

/// Tag kind enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// Function definition: `Name(params) {`
    Function,
    /// Label (jump target): `Name:`
    Label,
    /// Variable assignment: `Name = value` or `Name := value`
    Variable,
}

impl TagKind {
    /// Every kind, in the order rules are applied to a file.
    pub const ALL: [TagKind; 3] = [TagKind::Function, TagKind::Label, TagKind::Variable];

    /// Kind label written into the tag file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TagKind::Function => "function",
            TagKind::Label => "label",
            TagKind::Variable => "variable",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A symbol occurrence extracted from a script.
///
/// Built once by the extractor and never mutated afterwards, hence the
/// read-only accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    name: String,
    file: String,
    address: String,
    kind: TagKind,
    line: usize,
}

impl TagEntry {
    /// Create an entry. `file` is stored as given; `address` must already
    /// carry its `/^...$/` delimiters.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        file: impl Into<String>,
        address: impl Into<String>,
        kind: TagKind,
        line: usize,
    ) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            address: address.into(),
            kind,
            line,
        }
    }

    /// Symbol name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized path of the script the symbol was found in
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Search-pattern address, e.g. `/^Foo() {$/`
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Kind of symbol
    #[must_use]
    pub fn kind(&self) -> TagKind {
        self.kind
    }

    /// 1-based line where the match begins
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }
}

impl fmt::Display for TagEntry {
    /// Tag-file line: `name<TAB>file<TAB>address;"<TAB>kind<TAB>line:N`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{};\"\t{}\tline:{}",
            self.name, self.file, self.address, self.kind, self.line
        )
    }
}
