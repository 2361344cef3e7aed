//! Run configuration.

use std::path::PathBuf;

use crate::types::TagKind;

/// Default destination for the tag file.
pub const DEFAULT_TAG_FILE: &str = "tags";
/// Extension picked up by recursive discovery.
pub const AHK_EXTENSION: &str = "ahk";

/// Where the serialized index goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagOutput {
    /// Print to standard output
    Stdout,
    /// Write to a file, created or truncated
    File(PathBuf),
}

impl TagOutput {
    /// Interpret a `--file` argument; `-` selects standard output.
    #[must_use]
    pub fn parse(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

impl Default for TagOutput {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_TAG_FILE))
    }
}

/// Options for one tag generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagsConfig {
    /// Scripts named explicitly, scanned first and in order
    pub files: Vec<PathBuf>,
    /// Also scan every script found under the working root
    pub recursive: bool,
    /// Enable the variable-assignment rule
    pub include_vars: bool,
    /// Destination of the tag file
    pub output: TagOutput,
    /// Extensions used by recursive discovery
    pub extensions: Vec<String>,
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            recursive: false,
            include_vars: false,
            output: TagOutput::default(),
            extensions: vec![AHK_EXTENSION.to_string()],
        }
    }
}

impl TagsConfig {
    /// Tag kinds whose rules run, in application order.
    #[must_use]
    pub fn kinds(&self) -> Vec<TagKind> {
        TagKind::ALL
            .into_iter()
            .filter(|kind| self.include_vars || *kind != TagKind::Variable)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_parse() {
        assert_eq!(TagOutput::parse("-"), TagOutput::Stdout);
        assert_eq!(
            TagOutput::parse("TAGS"),
            TagOutput::File(PathBuf::from("TAGS"))
        );
        assert_eq!(TagOutput::default(), TagOutput::parse(DEFAULT_TAG_FILE));
    }

    #[test]
    fn test_kinds_follow_include_vars() {
        let mut config = TagsConfig::default();
        assert_eq!(config.kinds(), [TagKind::Function, TagKind::Label]);
        config.include_vars = true;
        assert_eq!(config.kinds(), TagKind::ALL);
    }
}
