//! MLIR Diagnostics
//!
//! This file defines utilities for emitting diagnostics.
//!
//! - include <https://github.com/llvm/llvm-project/blob/main/mlir/include/mlir/IR/Diagnostics.h>
//! - lib <https://github.com/llvm/llvm-project/blob/main/mlir/lib/IR/Diagnostics.cpp>

use core::fmt::{self, Display};

use thiserror::Error;

use crate::{errors::ShapeError, ir::location::Location};

/// Defines the different supported severity of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Note,
    Warning,
    Error,
    Remark,
}

impl Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Note => "note",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Remark => "remark",
        })
    }
}

/// A diagnostic reported against a single operation.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("{location}: {severity}: '{operation}' op {error}")]
pub struct Diagnostic {
    location: Location,
    severity: Severity,
    operation: &'static str,
    #[source]
    error: ShapeError,
}

impl Diagnostic {
    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the name of the operation the diagnostic was emitted for.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Returns the violated constraint.
    pub fn error(&self) -> &ShapeError {
        &self.error
    }
}

/// Emits an error diagnostic for `operation` at `location`. Verification failures always block further compilation, hence the error severity.
pub fn emit_op_error(location: Location, operation: &'static str, error: ShapeError) -> Diagnostic {
    tracing::trace!(%location, operation, %error, "emitting op error");
    Diagnostic {
        location,
        severity: Severity::Error,
        operation,
        error,
    }
}
