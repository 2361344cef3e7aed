//! Run pipeline: collect scripts, build the index, write the tag file.
//!
//! Scripts are processed one at a time. Any unreadable script aborts the run
//! before anything is written, and an empty index writes nothing at all.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use ahk_io::{DiscoverOptions, discover_files, read_script, write_text};

use crate::config::{TagOutput, TagsConfig};
use crate::error::TagError;
use crate::extractor::TagExtractor;
use crate::index::TagIndex;

/// What [`write_index`] did with the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Index was empty; no output produced
    Skipped,
    /// Printed to standard output
    Stdout {
        /// Entry lines printed
        entries: usize,
    },
    /// Written to a tag file
    File {
        /// Destination path
        path: PathBuf,
        /// Entry lines written
        entries: usize,
    },
}

/// Scripts to scan: explicit files first, then discovered ones under `root`
/// when the run is recursive.
#[must_use]
pub fn collect_files(config: &TagsConfig, root: &Path) -> Vec<PathBuf> {
    let mut files = config.files.clone();
    if config.recursive {
        let options = DiscoverOptions {
            extensions: config.extensions.clone(),
            ..DiscoverOptions::default()
        };
        let discovered = discover_files(root, &options);
        tracing::debug!(root = %root.display(), count = discovered.len(), "discovered scripts");
        files.extend(discovered);
    }
    files
}

/// Read and tag every script in order.
///
/// # Errors
/// `TagError::Io` for the first script that cannot be read.
pub fn build_index(config: &TagsConfig, files: &[PathBuf]) -> Result<TagIndex, TagError> {
    let kinds = config.kinds();
    let mut index = TagIndex::new();

    for path in files {
        let script = read_script(path).map_err(|source| TagError::Io {
            path: path.clone(),
            source,
        })?;
        let file = path.to_string_lossy();

        let before = index.len();
        index.append(TagExtractor::extract(&file, &script, kinds.iter().copied()));
        tracing::debug!(file = %file, entries = index.len() - before, "tagged script");
    }

    Ok(index)
}

/// Write the serialized index to `output`.
///
/// Standard output gets a trailing newline; a tag file does not.
///
/// # Errors
/// `TagError::Write` or `TagError::Stdout` when the destination fails.
pub fn write_index(index: &TagIndex, output: &TagOutput) -> Result<WriteOutcome, TagError> {
    if index.is_empty() {
        tracing::debug!("no tags found, nothing written");
        return Ok(WriteOutcome::Skipped);
    }

    let entries = index.len();
    match output {
        TagOutput::Stdout => {
            write_tags(index, &mut io::stdout().lock())?;
            Ok(WriteOutcome::Stdout { entries })
        }
        TagOutput::File(path) => {
            write_text(path, &index.serialize()).map_err(|source| TagError::Write {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), entries, "wrote tag file");
            Ok(WriteOutcome::File {
                path: path.clone(),
                entries,
            })
        }
    }
}

/// Print the serialized index followed by a newline.
///
/// # Errors
/// Any failure of `writer`.
pub fn write_tags<W: Write>(index: &TagIndex, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{index}")?;
    writer.flush()
}

/// Print the enabled tag kinds, one per line.
///
/// # Errors
/// Any failure of `writer`.
pub fn write_kinds<W: Write>(config: &TagsConfig, writer: &mut W) -> io::Result<()> {
    for kind in config.kinds() {
        writeln!(writer, "{kind}")?;
    }
    writer.flush()
}

/// Full run: [`collect_files`], [`build_index`], [`write_index`].
///
/// # Errors
/// Propagates the first read or write failure.
pub fn generate(config: &TagsConfig, root: &Path) -> Result<WriteOutcome, TagError> {
    let files = collect_files(config, root);
    let index = build_index(config, &files)?;
    write_index(&index, &config.output)
}
