use thiserror::Error;

use crate::ir::builtins::types::{MemRef, Type};

/// Structural violation found while verifying a buffer cast operation.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    #[error("operand must have static shape")]
    OperandNotStatic,

    #[error("result must have static shape")]
    ResultNotStatic,

    #[error("`sizes` args count must be equal to the rank of the output memref, but got {sizes} sizes for rank {rank}")]
    RankMismatch { sizes: usize, rank: usize },

    #[error("operand #1 must be 1D memref of signless integer or index values, but got '{shape}'")]
    InvalidShapeOperand { shape: MemRef },

    #[error("element types of source and destination memref types should be the same, but got '{operand}' and '{result}'")]
    ElementTypeMismatch { operand: Type, result: Type },

    #[error("operand memref type should have identity affine map")]
    OperandLayoutNotIdentity,

    #[error("cannot use shape operand with dynamic length to cast statically-ranked memref type")]
    DynamicShapeLengthWithStaticResultRank,

    #[error("length of shape operand ({length}) differs from the result's memref rank ({rank})")]
    ShapeLengthRankMismatch { length: usize, rank: usize },

    #[error("result memref type should have identity affine map")]
    ResultLayoutNotIdentity,
}
