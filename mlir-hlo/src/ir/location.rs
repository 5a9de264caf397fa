//! MLIR Location Classes
//!
//! These classes provide the ability to relate MLIR objects back to source location position information.
//!
//! - include <https://github.com/llvm/llvm-project/blob/main/mlir/include/mlir/IR/Location.h>
//! - lib <https://github.com/llvm/llvm-project/blob/main/mlir/lib/IR/Location.cpp>

use core::fmt::{self, Display};

/// Source location of an operation. Locations are opaque to verification and only ever attached to diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Location {
    /// Used when no source information is available.
    #[default]
    Unknown,
    /// A `file:line:column` triple.
    FileLineCol {
        filename: String,
        line: u32,
        column: u32,
    },
    /// A named location, e.g. the name of the value or pass that produced the operation.
    Name(String),
}

impl Location {
    pub fn unknown() -> Self {
        Location::Unknown
    }

    pub fn file_line_col(filename: impl Into<String>, line: u32, column: u32) -> Self {
        Location::FileLineCol {
            filename: filename.into(),
            line,
            column,
        }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Location::Name(name.into())
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Unknown => f.write_str("loc(unknown)"),
            Location::FileLineCol {
                filename,
                line,
                column,
            } => write!(f, "{filename}:{line}:{column}"),
            Location::Name(name) => write!(f, "loc(\"{name}\")"),
        }
    }
}
