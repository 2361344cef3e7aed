//! ahktags - generate a ctags-compatible `tags` file for AutoHotkey scripts.
//!
//! Usage:
//!   ahktags Main.ahk lib/Window.ahk
//!   ahktags -R --include-vars -f -

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ahk_tags::{DEFAULT_TAG_FILE, TagOutput, TagsConfig, WriteOutcome, generate, write_kinds};

#[derive(Parser, Debug)]
#[command(name = "ahktags")]
#[command(version, about = "Ctags-compatible tag generator for AutoHotkey", long_about = None)]
struct Cli {
    /// Scripts to scan
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Process current directory recursively
    #[arg(short = 'R', long, default_value_t = false)]
    recursive: bool,

    /// Include variables in generated tags
    #[arg(long, default_value_t = false)]
    include_vars: bool,

    /// Write tags to FILE (use - for std out)
    #[arg(short = 'f', long = "file", value_name = "FILE", default_value = DEFAULT_TAG_FILE)]
    file: String,

    /// Lists the tag kinds
    #[arg(long, default_value_t = false)]
    list_kinds: bool,

    /// Log each tagged script to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> TagsConfig {
        TagsConfig {
            files: self.files,
            recursive: self.recursive,
            include_vars: self.include_vars,
            output: TagOutput::parse(&self.file),
            ..TagsConfig::default()
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "ahk_tags=debug,ahk_io=debug"
        } else {
            "ahk_tags=warn"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let list_kinds = cli.list_kinds;
    let config = cli.into_config();

    if list_kinds {
        write_kinds(&config, &mut std::io::stdout().lock()).context("cannot list kinds")?;
        return Ok(());
    }

    let outcome = generate(&config, Path::new(".")).context("tag generation failed")?;
    if outcome == WriteOutcome::Skipped {
        tracing::debug!("no symbols in input");
    }
    Ok(())
}
