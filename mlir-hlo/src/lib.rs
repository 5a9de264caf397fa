//! - include <https://github.com/tensorflow/mlir-hlo/tree/master/include/mlir-hlo>
//! - lib <https://github.com/tensorflow/mlir-hlo/tree/master/lib>

pub mod dialect;
pub mod errors;
pub mod interfaces;
pub mod ir;
pub mod support;
