//! Source location definitions
//!
//! Line/column information attached to every AST node so that translation
//! errors can be reported against the original source file.

use serde::{Deserialize, Serialize};

/// Position of a node in the original source file (1-indexed)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
    /// File name (for multi-file front-ends)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            file: None,
        }
    }

    pub fn with_file(line: usize, column: usize, file: String) -> Self {
        Self {
            line,
            column,
            file: Some(file),
        }
    }

    /// Location for nodes whose position was not recorded
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn is_known(&self) -> bool {
        self.line > 0
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.is_known() {
            return write!(f, "[unknown location]");
        }

        if let Some(ref file) = self.file {
            write!(f, "[{}:{}]", file, self.line)
        } else {
            write!(f, "[line {}]", self.line)
        }
    }
}
