/*!
# Classes for Defining Concrete Operation Types

- include <https://github.com/llvm/llvm-project/blob/main/mlir/include/mlir/IR/OpDefinition.h>
*/

use crate::{
    errors::ShapeError,
    ir::{
        diagnostics::{emit_op_error, Diagnostic},
        location::Location,
    },
    support::logical_result::LogicalResult,
};

/// Common accessors of every concrete operation.
pub trait Op {
    /// Returns the fully qualified operation name, e.g. `xla_lhlo.static_memref_cast`.
    fn name(&self) -> &'static str;

    fn location(&self) -> &Location;

    /// Builds an error diagnostic against this operation.
    fn emit_op_error(&self, error: ShapeError) -> Diagnostic {
        emit_op_error(self.location().clone(), self.name(), error)
    }
}

/// Operation-specific verification hook, run once the operand and result types are attached.
pub trait Verify: Op {
    fn verify(&self) -> LogicalResult;
}
