use serde::{Deserialize, Serialize};

/// Origin and target GOOS/GOARCH tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenMap {
    pub origin_os: String,
    pub origin_arch: String,
    pub target_os: String,
    pub target_arch: String,
}

impl Default for TokenMap {
    fn default() -> Self {
        Self {
            origin_os: "linux".to_string(),
            origin_arch: "arm64".to_string(),
            target_os: "js".to_string(),
            target_arch: "wasm".to_string(),
        }
    }
}

impl TokenMap {
    /// Suffix for names that carried no origin GOOS, e.g. `__js`.
    ///
    /// The double underscore keeps the derived name clear of files that
    /// already end in an unrelated GOOS suffix such as `_unix`.
    pub fn marker(&self) -> String {
        format!("__{}", self.target_os)
    }
}
