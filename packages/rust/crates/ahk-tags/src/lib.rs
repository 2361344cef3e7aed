//! ahk-tags - Ctags-compatible tag generation for AutoHotkey
//!
//! Features:
//! - Line-anchored regex rules for functions, labels and (opt-in) variables
//! - Lazy, per-rule extraction over raw bytes with incremental line numbering
//! - Classic extended-format `tags` output, sorted by name
//!
//! # Architecture
//!
//! ```text
//! ahk-tags/src/
//! ├── lib.rs        # Re-exports (this file)
//! ├── error.rs      # TagError
//! ├── types.rs      # TagKind, TagEntry
//! ├── patterns.rs   # Rule regexes
//! ├── escape.rs     # Address escaping
//! ├── extractor.rs  # TagExtractor, TagEntries
//! ├── index.rs      # TagIndex, header table
//! ├── config.rs     # TagsConfig, TagOutput
//! ├── generate.rs   # Run pipeline
//! └── bin/ahktags.rs
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use ahk_tags::{TagExtractor, TagIndex, TagKind};
//!
//! let mut index = TagIndex::new();
//! index.append(TagExtractor::extract("Main.ahk", script, [TagKind::Function, TagKind::Label]));
//! println!("{index}");
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod config;
mod error;
mod escape;
mod extractor;
mod generate;
mod index;
mod patterns;
mod types;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use config::{AHK_EXTENSION, DEFAULT_TAG_FILE, TagOutput, TagsConfig};
pub use error::TagError;
pub use escape::{escape_address_text, format_address};
pub use extractor::{TagEntries, TagExtractor, normalize_path};
pub use generate::{
    WriteOutcome, build_index, collect_files, generate, write_index, write_kinds, write_tags,
};
pub use index::{HEADERS, PROGRAM_NAME, PROGRAM_VERSION, TagHeader, TagIndex};
pub use patterns::{FUNCTION_PATTERN, LABEL_PATTERN, VARIABLE_PATTERN};
pub use types::{TagEntry, TagKind};
