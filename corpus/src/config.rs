use serde::{Deserialize, Serialize};

/// Knobs for locating corpus documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusOptions {
    /// File extension (without the dot) a document must have. Matched case-sensitively.
    pub extension: String,
    /// Sort documents by path. When false, directory-listing order is kept, which is
    /// filesystem dependent.
    pub sort_files: bool,
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self { extension: "txt".to_string(), sort_files: true }
    }
}
