/*!
- include <https://github.com/tensorflow/mlir-hlo/blob/master/include/mlir-hlo/Dialect/mhlo/IR/lhlo_ops.td>
- lib <https://github.com/tensorflow/mlir-hlo/blob/master/lib/Dialect/mhlo/IR/lhlo_ops.cc>
*/

pub mod operations;
