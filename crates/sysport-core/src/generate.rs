//! Read, transform and emit one catalog.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::condition::rewrite_condition;
use crate::naming::{output_file_name, rewrite_base_name};
use crate::profile::Profile;
use crate::{GenError, Result};

/// Mode of every generated file (rw-r--r--)
pub const OUTPUT_MODE: u32 = 0o644;

/// Input file as read from the origin directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub content: Vec<u8>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Read `name` from `dir`
    pub fn read(dir: &Path, name: &str) -> Result<Self> {
        let path = dir.join(name);
        let content = fs::read(&path).map_err(|source| GenError::Read { path, source })?;
        Ok(Self::new(name, content))
    }
}

/// Derived file, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub name: String,
    pub content: Vec<u8>,
}

/// Summary of a finished run
#[derive(Debug, Default)]
pub struct RunReport {
    /// Written paths, in catalog order
    pub written: Vec<PathBuf>,
}

/// Runs one profile
pub struct Generator {
    profile: Profile,
}

impl Generator {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Derive the output for a single source file. Pure.
    pub fn transform(&self, source: &SourceFile) -> OutputFile {
        let profile = &self.profile;
        let name = output_file_name(&source.name, &profile.tokens);
        let content = rewrite_condition(&source.content, &profile.rules, &profile.tokens);
        let content = profile.references.apply(content);

        OutputFile {
            name,
            content: content.into_owned(),
        }
    }

    /// Transform every catalog entry from `source_dir` into `output_dir`.
    ///
    /// Stops at the first read or write failure. Files written before the
    /// failure are left in place.
    pub fn run(&self, source_dir: &Path, output_dir: &Path) -> Result<RunReport> {
        tracing::debug!(
            component = "GEN",
            catalog = %self.profile.catalog,
            source = %source_dir.display(),
            output = %output_dir.display(),
            files = self.profile.files.len(),
            rewrites_imports = !self.profile.references.is_empty(),
            "starting generator"
        );

        let mut report = RunReport::default();
        for filename in &self.profile.files {
            let source = SourceFile::read(source_dir, filename)?;
            let output = self.transform(&source);

            let path = output_dir.join(&output.name);
            write_output(&path, &output.content)
                .map_err(|source| GenError::Write {
                    path: path.clone(),
                    source,
                })?;

            // base name only, no extension
            tracing::info!(
                component = "GEN",
                "wrote {}",
                rewrite_base_name(filename, &self.profile.tokens)
            );
            report.written.push(path);
        }

        Ok(report)
    }
}

/// Create or truncate `path` and leave it with [`OUTPUT_MODE`].
fn write_output(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(OUTPUT_MODE);
    }

    let mut file = options.open(path)?;
    file.write_all(content)?;

    // mode() only applies on creation and is subject to the umask
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(OUTPUT_MODE))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenMap;

    #[test]
    fn test_transform_plain_file_is_byte_identical() {
        let generator = Generator::new(Profile::unix(TokenMap::default()));
        let src = SourceFile::new(
            "pagesize_unix.go",
            "// Copyright\n\npackage unix\n\nfunc Getpagesize() int { return 65536 }\n",
        );
        let out = generator.transform(&src);
        assert_eq!(out.name, "pagesize_unix__js.go");
        assert_eq!(out.content, src.content);
    }

    #[test]
    fn test_transform_arch_file() {
        let generator = Generator::new(Profile::syscall(TokenMap::default()));
        let src = SourceFile::new(
            "syscall_linux_arm64.go",
            "//go:build linux && arm64\n\npackage syscall\n",
        );
        let out = generator.transform(&src);
        assert_eq!(out.name, "syscall_js_wasm.go");
        assert_eq!(
            String::from_utf8_lossy(&out.content),
            "//go:build js && wasm\n\npackage syscall\n"
        );
    }

    #[test]
    fn test_transform_unix_rewrites_import() {
        let generator = Generator::new(Profile::unix(TokenMap::default()));
        let src = SourceFile::new(
            "env_unix.go",
            "//go:build linux && !race\n\npackage unix\n\nimport \"syscall\"\n",
        );
        let out = generator.transform(&src);
        assert_eq!(out.name, "env_unix__js.go");
        assert_eq!(
            String::from_utf8_lossy(&out.content),
            "//go:build js && !race\n\npackage unix\n\nimport \"golang.org/x/sys/wasm/syscall\"\n"
        );
    }

    #[test]
    fn test_syscall_generator_leaves_imports_alone() {
        let generator = Generator::new(Profile::syscall(TokenMap::default()));
        let src = SourceFile::new("net.go", "package syscall\n\nimport \"syscall\"\n");
        let out = generator.transform(&src);
        assert_eq!(out.content, src.content);
    }
}
