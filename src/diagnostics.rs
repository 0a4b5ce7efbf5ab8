//! Compile-time diagnostics collection and output
//!
//! Wraps [`TsluaError`](crate::error::TsluaError) values in a structured,
//! serializable form so drivers can render them as plain text or JSON.

use crate::error::TsluaError;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticSpan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct TslDiagnostic {
    pub code: String,
    pub message: String,
    pub severity: DiagnosticSeverity,
    pub span: DiagnosticSpan,
    pub phase: String,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct TslDiagnostics {
    pub diagnostics: Vec<TslDiagnostic>,
}

impl TslDiagnostics {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn add(&mut self, diag: TslDiagnostic) {
        self.diagnostics.push(diag);
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for diag in &self.diagnostics {
            let file = diag.span.file.as_deref().unwrap_or("<input>");
            out.push_str(&format!(
                "[{}] {}:{}:{} {}\n",
                diag.code, file, diag.span.line, diag.span.column, diag.message
            ));
        }
        out
    }
}

pub fn error_diag(code: &str, message: String, span: DiagnosticSpan, phase: &str) -> TslDiagnostic {
    TslDiagnostic {
        code: code.to_string(),
        message,
        severity: DiagnosticSeverity::Error,
        span,
        phase: phase.to_string(),
    }
}

/// Convert an engine error into a one-entry diagnostics set
pub fn from_error(err: &TsluaError, file: Option<&Path>) -> TslDiagnostics {
    let mut diags = TslDiagnostics::new();

    let (code, phase) = match err {
        TsluaError::Unsupported { .. } => ("TSL-UNSUPPORTED-SYNTAX", "translate"),
        TsluaError::Translation { .. } => ("TSL-TRANSLATE-ERROR", "translate"),
        TsluaError::JsonError(_) => ("TSL-JSON-ERROR", "input"),
        TsluaError::IoError(_) => ("TSL-IO-ERROR", "input"),
    };

    let (line, column) = err
        .location()
        .map(|loc| (loc.line, loc.column))
        .unwrap_or((1, 1));

    let span = DiagnosticSpan {
        file: file.map(|p| p.display().to_string()),
        line,
        column,
    };

    diags.add(error_diag(code, format!("{err}"), span, phase));
    diags
}
