/*!
# Utilities for Handling Success/Failure

- include <https://github.com/llvm/llvm-project/blob/main/mlir/include/mlir/Support/LogicalResult.h>
*/

use crate::ir::diagnostics::Diagnostic;

/// Outcome of verifying a single operation. On failure it carries the diagnostic that was emitted for the operation.
pub type LogicalResult = Result<(), Diagnostic>;
