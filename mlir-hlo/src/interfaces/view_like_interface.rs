/*!
# View-Like Operations Interface

- include
  - <https://github.com/llvm/llvm-project/blob/main/mlir/include/mlir/Interfaces/ViewLikeInterface.h>
  - <https://github.com/llvm/llvm-project/blob/main/mlir/include/mlir/Interfaces/ViewLikeInterface.td>
- lib <https://github.com/llvm/llvm-project/blob/main/mlir/lib/Interfaces/ViewLikeInterface.cpp>
*/

use crate::ir::{builtins::types::BaseMemRef, operation::Op, value::Value};

/**
A view-like operation 'views' a buffer in a potentially different way. It takes in a (view of) buffer (and potentially some other operands) and returns another view of buffer.
*/
pub trait ViewLikeOpInterface: Op {
    /// Returns the source buffer from which the view is created.
    fn view_source(&self) -> &Value<BaseMemRef>;
}
