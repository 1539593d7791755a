//! Test environment abstraction for isolated generator runs.
//!
//! Provides `TestEnvironment` to manage:
//! - A throwaway HOME (so no global config leaks in)
//! - A working directory with the default `../unix` layout next to it
//! - Source and output directories
//!
//! # Usage
//!
//! ```ignore
//! use sysport_config::testing::TestEnvironment;
//!
//! #[test]
//! fn test_something() {
//!     let env = TestEnvironment::new().unwrap();
//!     env.create_source("fcntl.go", b"package unix\n").unwrap();
//!     // run a generator with env.workdir as working directory
//! }
//! ```

use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated directory tree for one test
pub struct TestEnvironment {
    /// Temporary directory (dropped on cleanup)
    _temp_dir: TempDir,
    /// Stand-in for $HOME
    pub home: PathBuf,
    /// Working directory (`<root>/repo/wasm`)
    pub workdir: PathBuf,
    /// Source directory (`<root>/repo/unix`, i.e. `../unix` from workdir)
    pub source_dir: PathBuf,
    /// Output directory (`<root>/repo/wasm/syscall`)
    pub output_dir: PathBuf,
}

impl TestEnvironment {
    /// Create a new isolated test environment
    pub fn new() -> anyhow::Result<Self> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();

        let home = root.join("home");
        let workdir = root.join("repo/wasm");
        let source_dir = root.join("repo/unix");
        let output_dir = workdir.join("syscall");

        std::fs::create_dir_all(&home)?;
        std::fs::create_dir_all(&source_dir)?;
        std::fs::create_dir_all(&output_dir)?;

        Ok(Self {
            _temp_dir: temp_dir,
            home,
            workdir,
            source_dir,
            output_dir,
        })
    }

    /// Create a source file with content
    pub fn create_source(&self, name: &str, content: &[u8]) -> anyhow::Result<PathBuf> {
        let path = self.source_dir.join(name);
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Write `.sysport/config.toml` inside the working directory
    pub fn write_project_config(&self, contents: &str) -> anyhow::Result<PathBuf> {
        let dir = self.workdir.join(".sysport");
        std::fs::create_dir_all(&dir)?;
        let path = dir.join("config.toml");
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Write the global `~/.sysport/config.toml` under the fake HOME
    pub fn write_global_config(&self, contents: &str) -> anyhow::Result<PathBuf> {
        let dir = self.home.join(".sysport");
        std::fs::create_dir_all(&dir)?;
        let path = dir.join("config.toml");
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Environment for spawning `sysport` against this tree
    pub fn command_env(&self) -> Vec<(String, String)> {
        vec![
            ("HOME".to_string(), self.home.display().to_string()),
            ("SYSPORT_LOG".to_string(), "info".to_string()),
        ]
    }
}
