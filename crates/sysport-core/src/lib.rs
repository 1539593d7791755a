//! # sysport-core
//!
//! Derives js/wasm flavoured copies of the linux/arm64 `syscall` and
//! `golang.org/x/sys/unix` sources.
//!
//! Each generator walks a hand-curated, ordered file list and for every file:
//!
//! ```text
//! read -> rewrite name -> rewrite //go:build line -> rewrite imports -> write
//! ```
//!
//! Nothing here parses Go. The engine works on whole files and on the single
//! build-constraint line, which keeps the bulk of every file byte-identical.

pub mod catalog;
pub mod condition;
pub mod generate;
pub mod lines;
pub mod naming;
pub mod profile;
pub mod reference;
pub mod tokens;
pub mod toolchain;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use catalog::Catalog;
pub use condition::ConditionRules;
pub use generate::{Generator, OutputFile, RunReport, SourceFile};
pub use profile::{Profile, SourceDir};
pub use reference::ReferenceTable;
pub use tokens::TokenMap;

/// Literal prefix of a Go build-constraint line.
pub const BUILD_DIRECTIVE: &str = "//go:build";

/// Errors that abort a generator run
#[derive(Error, Debug)]
pub enum GenError {
    #[error("failed to run `{command}`: {source}")]
    Toolchain {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` failed ({status}): {stderr}")]
    ToolchainStatus {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GenError>;
