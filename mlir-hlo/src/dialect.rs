//! - include <https://github.com/tensorflow/mlir-hlo/tree/master/include/mlir-hlo/Dialect>
//! - lib <https://github.com/tensorflow/mlir-hlo/tree/master/lib/Dialect>

pub mod lhlo;
