#![allow(clippy::doc_markdown)]

//! ahk-io - Safe file I/O and discovery for ahktags
//!
//! The collaborator layer of the tag generator: everything that touches the
//! filesystem lives here so the extraction engine only ever sees text.
//!
//! # Features
//!
//! - **Byte-faithful**: Scripts are read as raw bytes; ANSI and UTF-8 files
//!   reach the tagger unchanged
//! - **Discovery**: Recursive, extension-filtered, deterministic file listing
//!
//! # Architecture
//!
//! ```text
//! ahk-io/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── error.rs    # IoError enum
//! ├── discover.rs # Recursive file discovery
//! └── sync.rs     # Read / write API
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use ahk_io::{read_script, IoError};
//!
//! let script: Vec<u8> = read_script("lib/Window.ahk")?;
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod discover;
mod error;
mod sync;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use discover::{DiscoverOptions, discover_files};
pub use error::IoError;
pub use sync::{read_script, write_text};
