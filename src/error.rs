//! Error types for the tslua transpiler

use crate::ast::SourceLocation;
use thiserror::Error;

/// Main error type for tslua
#[derive(Debug, Error)]
pub enum TsluaError {
    #[error("Unsupported syntax {loc}: {construct}")]
    Unsupported {
        construct: String,
        loc: SourceLocation,
    },

    #[error("Translation error {loc}: {message}")]
    Translation {
        message: String,
        loc: SourceLocation,
    },

    #[error("Invalid input: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TsluaError {
    pub fn unsupported(construct: impl Into<String>, loc: &SourceLocation) -> Self {
        TsluaError::Unsupported {
            construct: construct.into(),
            loc: loc.clone(),
        }
    }

    pub fn translation(message: impl Into<String>, loc: &SourceLocation) -> Self {
        TsluaError::Translation {
            message: message.into(),
            loc: loc.clone(),
        }
    }

    /// Source location the error points at, when it has one
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            TsluaError::Unsupported { loc, .. } | TsluaError::Translation { loc, .. } => Some(loc),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TsluaError>;
