//! - include <https://github.com/llvm/llvm-project/blob/main/mlir/include/mlir/IR/Value.h>
//! - lib <https://github.com/llvm/llvm-project/blob/main/mlir/lib/IR/Value.cpp>

/// An SSA value of a statically known type `T`.
///
/// Operations hold typed values so that verifiers read operand and result types directly instead of recovering them by casting.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Value<T> {
    r#type: T,
}

impl<T> Value<T> {
    pub fn new(r#type: T) -> Self {
        Self { r#type }
    }

    pub fn r#type(&self) -> &T {
        &self.r#type
    }
}

impl<T> From<T> for Value<T> {
    fn from(r#type: T) -> Self {
        Value::new(r#type)
    }
}
