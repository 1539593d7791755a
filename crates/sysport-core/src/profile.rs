//! Generator profiles: everything that differs between the two catalogs.

use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::condition::ConditionRules;
use crate::reference::ReferenceTable;
use crate::tokens::TokenMap;
use crate::Result;

/// Where a catalog's sources live
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceDir {
    /// Fixed directory, relative to the working directory unless absolute
    Path(PathBuf),
    /// Directory below the Go installation root
    GoRoot { subdir: PathBuf },
}

impl SourceDir {
    /// Resolve to a concrete directory, asking `goroot` only when needed.
    pub fn resolve<F>(&self, goroot: F) -> Result<PathBuf>
    where
        F: FnOnce() -> Result<PathBuf>,
    {
        match self {
            SourceDir::Path(path) => Ok(path.clone()),
            SourceDir::GoRoot { subdir } => Ok(goroot()?.join(subdir)),
        }
    }
}

/// Complete description of one generator
#[derive(Debug, Clone)]
pub struct Profile {
    pub catalog: Catalog,
    /// Ordered input file names
    pub files: Vec<String>,
    pub source: SourceDir,
    pub output_dir: PathBuf,
    pub rules: ConditionRules,
    pub references: ReferenceTable,
    pub tokens: TokenMap,
}

impl Profile {
    /// `$GOROOT/src/syscall` -> `./syscall`
    pub fn syscall(tokens: TokenMap) -> Self {
        Self {
            catalog: Catalog::Syscall,
            files: owned(Catalog::Syscall.files()),
            source: SourceDir::GoRoot {
                subdir: PathBuf::from("src/syscall"),
            },
            output_dir: PathBuf::from("./syscall"),
            rules: ConditionRules::syscall(&tokens),
            references: ReferenceTable::new(),
            tokens,
        }
    }

    /// `../unix` -> `../unix`, with the `syscall` import retargeted
    pub fn unix(tokens: TokenMap) -> Self {
        Self {
            catalog: Catalog::Unix,
            files: owned(Catalog::Unix.files()),
            source: SourceDir::Path(PathBuf::from("../unix")),
            output_dir: PathBuf::from("../unix"),
            rules: ConditionRules::unix(&tokens),
            references: ReferenceTable::unix(),
            tokens,
        }
    }

    pub fn for_catalog(catalog: Catalog, tokens: TokenMap) -> Self {
        match catalog {
            Catalog::Syscall => Self::syscall(tokens),
            Catalog::Unix => Self::unix(tokens),
        }
    }

    /// Replace the built-in file list. An empty list keeps the built-in one.
    pub fn with_files(mut self, files: Vec<String>) -> Self {
        if !files.is_empty() {
            self.files = files;
        }
        self
    }

    pub fn with_source(mut self, source: SourceDir) -> Self {
        self.source = source;
        self
    }

    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }
}

fn owned(files: &[&str]) -> Vec<String> {
    files.iter().map(|f| f.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GenError;

    #[test]
    fn test_default_profiles() {
        let syscall = Profile::syscall(TokenMap::default());
        assert!(matches!(syscall.source, SourceDir::GoRoot { .. }));
        assert!(syscall.references.is_empty());
        assert_eq!(syscall.files.len(), 29);

        let unix = Profile::unix(TokenMap::default());
        assert_eq!(unix.source, SourceDir::Path(PathBuf::from("../unix")));
        assert_eq!(unix.output_dir, PathBuf::from("../unix"));
        assert!(!unix.references.is_empty());
    }

    #[test]
    fn test_empty_override_keeps_builtin_list() {
        let profile = Profile::unix(TokenMap::default()).with_files(Vec::new());
        assert_eq!(profile.files.len(), 38);

        let profile = Profile::unix(TokenMap::default()).with_files(vec!["a.go".into()]);
        assert_eq!(profile.files, vec!["a.go".to_string()]);
    }

    #[test]
    fn test_resolve_goroot_relative() {
        let source = SourceDir::GoRoot {
            subdir: PathBuf::from("src/syscall"),
        };
        let dir = source.resolve(|| Ok(PathBuf::from("/usr/lib/go"))).unwrap();
        assert_eq!(dir, PathBuf::from("/usr/lib/go/src/syscall"));
    }

    #[test]
    fn test_fixed_path_never_asks_for_goroot() {
        let source = SourceDir::Path(PathBuf::from("../unix"));
        let dir = source
            .resolve(|| {
                Err(GenError::ToolchainStatus {
                    command: "go env GOROOT".into(),
                    status: "unreachable".into(),
                    stderr: String::new(),
                })
            })
            .unwrap();
        assert_eq!(dir, PathBuf::from("../unix"));
    }
}
