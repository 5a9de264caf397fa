//! - include <https://github.com/llvm/llvm-project/tree/main/mlir/include/mlir/IR>
//! - lib <https://github.com/llvm/llvm-project/tree/main/mlir/lib/IR>

pub mod affine_expr;
pub mod affine_map;
pub mod builtins;
pub mod diagnostics;
pub mod location;
pub mod operation;
pub mod value;
pub mod verifier;
