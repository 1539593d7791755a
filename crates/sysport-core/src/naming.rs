//! Output file naming.

use std::path::Path;

use crate::tokens::TokenMap;

/// Split `name` into its stem and its final extension (without the dot).
fn split_extension(name: &str) -> (&str, Option<&str>) {
    match Path::new(name).extension().and_then(|ext| ext.to_str()) {
        Some(ext) => (&name[..name.len() - ext.len() - 1], Some(ext)),
        None => (name, None),
    }
}

/// Derive the output base name (no extension) for a catalog entry.
///
/// `syscall_linux_arm64.go` becomes `syscall_js_wasm`, while a name without
/// the origin GOOS, such as `pagesize_unix.go`, becomes `pagesize_unix__js`.
/// Applying this twice is not meant to be stable.
pub fn rewrite_base_name(filename: &str, tokens: &TokenMap) -> String {
    let (stem, _) = split_extension(filename);
    let mut name = stem
        .replace(&tokens.origin_os, &tokens.target_os)
        .replace(&tokens.origin_arch, &tokens.target_arch);

    if !filename.contains(&tokens.origin_os) {
        name.push_str(&tokens.marker());
    }
    name
}

/// Full output file name: rewritten base plus the original extension.
pub fn output_file_name(filename: &str, tokens: &TokenMap) -> String {
    let base = rewrite_base_name(filename, tokens);
    match split_extension(filename).1 {
        Some(ext) => format!("{base}.{ext}"),
        None => base,
    }
}
