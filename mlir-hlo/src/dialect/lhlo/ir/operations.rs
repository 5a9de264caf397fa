/*!
# LHLO Operation Definitions

Buffer casts of the LHLO dialect. Each cast reinterprets the metadata of an existing buffer and never copies data, so verification only has to check that the source and destination memref types can describe the same buffer.

- include <https://github.com/tensorflow/mlir-hlo/blob/master/include/mlir-hlo/Dialect/mhlo/IR/lhlo_ops.td>
- lib <https://github.com/tensorflow/mlir-hlo/blob/master/lib/Dialect/mhlo/IR/lhlo_ops.cc>
*/

use crate::{
    errors::ShapeError,
    interfaces::view_like_interface::ViewLikeOpInterface,
    ir::{
        builtins::{
            type_interfaces::{ShapedType, Size},
            types::{BaseMemRef, IndexType, MemRef},
        },
        location::Location,
        operation::{Op, Verify},
        value::Value,
    },
    support::logical_result::LogicalResult,
};

/*
----------------------------------------------------------------------
StaticMemRefCast
----------------------------------------------------------------------
*/

/**
Modifies the offset, sizes and strides of a statically shaped memref.

Allows to modify the offset, sizes and strides of a statically shaped memref. Both the operand and the result must have a fully static shape, since the cast only changes the layout metadata of a buffer whose extent is known on both sides.

# Examples

```mlir
%buf_transformed =
    xla_lhlo.static_memref_cast %buf
    : memref<1x5xf32> -> memref<5xf32, offset: 2, strides: [1]>

// The result of the op is a rank-1 memref with `[5]` shape, stride 1 and
// offset 2.
```
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticMemRefCast {
    location: Location,
    operand: Value<BaseMemRef>,
    result: Value<MemRef>,
}

impl StaticMemRefCast {
    pub const NAME: &'static str = "xla_lhlo.static_memref_cast";

    pub fn new(location: Location, operand: Value<BaseMemRef>, result: Value<MemRef>) -> Self {
        Self {
            location,
            operand,
            result,
        }
    }

    pub fn operand(&self) -> &Value<BaseMemRef> {
        &self.operand
    }

    pub fn result(&self) -> &Value<MemRef> {
        &self.result
    }
}

impl Op for StaticMemRefCast {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn location(&self) -> &Location {
        &self.location
    }
}

impl Verify for StaticMemRefCast {
    fn verify(&self) -> LogicalResult {
        if !self.operand.r#type().has_static_shape() {
            return Err(self.emit_op_error(ShapeError::OperandNotStatic));
        }
        if !self.result.r#type().has_static_shape() {
            return Err(self.emit_op_error(ShapeError::ResultNotStatic));
        }
        Ok(())
    }
}

impl ViewLikeOpInterface for StaticMemRefCast {
    fn view_source(&self) -> &Value<BaseMemRef> {
        &self.operand
    }
}

/*
----------------------------------------------------------------------
DynamicMemRefCast
----------------------------------------------------------------------
*/

/**
Modifies the sizes and strides of a memref using values computed at runtime.

The element type and the rank of the result are known statically. The sizes and strides are passed as `index` operands, one of each per result dimension.

# Examples

```mlir
%buf_transformed =
    xla_lhlo.dynamic_memref_cast %buf(%size_X, %size_Y)[%step_X, %step_Y]
    : memref<?x?xf32> -> memref<?x?xf32, offset: 0, strides: [?, ?]>
// The result of the op is a type-erased memref with `[%size_X, %size_Y]`
// shape and `[%step_X, %step_Y]` strides. The offset will be inherited
// from the input.
```
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DynamicMemRefCast {
    location: Location,
    operand: Value<BaseMemRef>,
    sizes: Vec<Value<IndexType>>,
    strides: Vec<Value<IndexType>>,
    result: Value<MemRef>,
}

impl DynamicMemRefCast {
    pub const NAME: &'static str = "xla_lhlo.dynamic_memref_cast";

    pub fn new(
        location: Location,
        operand: Value<BaseMemRef>,
        sizes: Vec<Value<IndexType>>,
        strides: Vec<Value<IndexType>>,
        result: Value<MemRef>,
    ) -> Self {
        Self {
            location,
            operand,
            sizes,
            strides,
            result,
        }
    }

    pub fn operand(&self) -> &Value<BaseMemRef> {
        &self.operand
    }

    pub fn sizes(&self) -> &[Value<IndexType>] {
        &self.sizes
    }

    pub fn strides(&self) -> &[Value<IndexType>] {
        &self.strides
    }

    pub fn result(&self) -> &Value<MemRef> {
        &self.result
    }
}

impl Op for DynamicMemRefCast {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn location(&self) -> &Location {
        &self.location
    }
}

impl Verify for DynamicMemRefCast {
    fn verify(&self) -> LogicalResult {
        // Check if `sizes` args are compatible with the result type.
        let rank = self.result.r#type().dimensions().len();
        if self.sizes.len() != rank {
            return Err(self.emit_op_error(ShapeError::RankMismatch {
                sizes: self.sizes.len(),
                rank,
            }));
        }
        Ok(())
    }
}

impl ViewLikeOpInterface for DynamicMemRefCast {
    fn view_source(&self) -> &Value<BaseMemRef> {
        &self.operand
    }
}

/*
----------------------------------------------------------------------
ReshapeMemRefCast
----------------------------------------------------------------------
*/

/**
Reshapes a memref to the shape held in another memref.

The operation is defined as a copy-free reshape of an identity-layout buffer. The shape operand is a 1-D memref of integers whose length is the rank of the result.

1. If the shape operand has a static length, the result may be ranked. Its rank must then equal that length.

    ```mlir
    // Reshape statically-shaped memref.
    %dst = reshape_memref_cast %src(%shape)
        : (memref<4x1xf32>, memref<1xi32>) to memref<4xf32>
    %dst0 = reshape_memref_cast %src(%shape0)
        : (memref<4x1xf32>, memref<2xi32>) to memref<2x2xf32>
    ```

2. If the shape operand has a dynamic length, the result must be unranked.

    ```mlir
    // Reshape dynamically-shaped 1D memref.
    %dst = reshape_memref_cast %src(%shape)
        : (memref<?xf32>, memref<?xi32>) to memref<*xf32>
    // Reshape unranked memref.
    %dst = reshape_memref_cast %src(%shape)
        : (memref<*xf32>, memref<?xi32>) to memref<*xf32>
    ```
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReshapeMemRefCast {
    location: Location,
    operand: Value<BaseMemRef>,
    shape: Value<MemRef>,
    result: Value<BaseMemRef>,
}

impl ReshapeMemRefCast {
    pub const NAME: &'static str = "xla_lhlo.reshape_memref_cast";

    pub fn new(
        location: Location,
        operand: Value<BaseMemRef>,
        shape: Value<MemRef>,
        result: Value<BaseMemRef>,
    ) -> Self {
        Self {
            location,
            operand,
            shape,
            result,
        }
    }

    pub fn operand(&self) -> &Value<BaseMemRef> {
        &self.operand
    }

    pub fn shape(&self) -> &Value<MemRef> {
        &self.shape
    }

    pub fn result(&self) -> &Value<BaseMemRef> {
        &self.result
    }

    /// Returns the length of the shape operand if it is a 1-D memref of signless integer or index values.
    fn shape_length(&self) -> Option<Size> {
        let shape_type = self.shape.r#type();
        let element_type = shape_type.element_type();
        if !(element_type.is_signless_integer() || element_type.is_index()) {
            return None;
        }
        match shape_type.dimensions() {
            &[length] => Some(length),
            _ => None,
        }
    }
}

impl Op for ReshapeMemRefCast {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn location(&self) -> &Location {
        &self.location
    }
}

impl Verify for ReshapeMemRefCast {
    fn verify(&self) -> LogicalResult {
        let Some(length) = self.shape_length() else {
            return Err(self.emit_op_error(ShapeError::InvalidShapeOperand {
                shape: self.shape.r#type().clone(),
            }));
        };

        let operand_type = self.operand.r#type();
        let result_type = self.result.r#type();
        if operand_type.element_type() != result_type.element_type() {
            return Err(self.emit_op_error(ShapeError::ElementTypeMismatch {
                operand: *operand_type.element_type(),
                result: *result_type.element_type(),
            }));
        }

        if !operand_type.has_identity_layout() {
            return Err(self.emit_op_error(ShapeError::OperandLayoutNotIdentity));
        }

        // Nothing to reconcile statically for an unranked result.
        if let Some(rank) = result_type.rank() {
            let Size::Static(length) = length else {
                return Err(self.emit_op_error(ShapeError::DynamicShapeLengthWithStaticResultRank));
            };
            if length != rank {
                return Err(self.emit_op_error(ShapeError::ShapeLengthRankMismatch { length, rank }));
            }
            if !result_type.has_identity_layout() {
                return Err(self.emit_op_error(ShapeError::ResultLayoutNotIdentity));
            }
        }
        Ok(())
    }
}

impl ViewLikeOpInterface for ReshapeMemRefCast {
    fn view_source(&self) -> &Value<BaseMemRef> {
        &self.operand
    }
}

/*
----------------------------------------------------------------------
LhloOperation
----------------------------------------------------------------------
*/

/// Any of the buffer cast operations, dispatched by kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LhloOperation {
    StaticMemRefCast(StaticMemRefCast),
    DynamicMemRefCast(DynamicMemRefCast),
    ReshapeMemRefCast(ReshapeMemRefCast),
}

impl Op for LhloOperation {
    fn name(&self) -> &'static str {
        match self {
            LhloOperation::StaticMemRefCast(operation) => operation.name(),
            LhloOperation::DynamicMemRefCast(operation) => operation.name(),
            LhloOperation::ReshapeMemRefCast(operation) => operation.name(),
        }
    }

    fn location(&self) -> &Location {
        match self {
            LhloOperation::StaticMemRefCast(operation) => operation.location(),
            LhloOperation::DynamicMemRefCast(operation) => operation.location(),
            LhloOperation::ReshapeMemRefCast(operation) => operation.location(),
        }
    }
}

impl Verify for LhloOperation {
    fn verify(&self) -> LogicalResult {
        match self {
            LhloOperation::StaticMemRefCast(operation) => operation.verify(),
            LhloOperation::DynamicMemRefCast(operation) => operation.verify(),
            LhloOperation::ReshapeMemRefCast(operation) => operation.verify(),
        }
    }
}

impl ViewLikeOpInterface for LhloOperation {
    fn view_source(&self) -> &Value<BaseMemRef> {
        match self {
            LhloOperation::StaticMemRefCast(operation) => operation.view_source(),
            LhloOperation::DynamicMemRefCast(operation) => operation.view_source(),
            LhloOperation::ReshapeMemRefCast(operation) => operation.view_source(),
        }
    }
}

impl From<StaticMemRefCast> for LhloOperation {
    fn from(operation: StaticMemRefCast) -> Self {
        LhloOperation::StaticMemRefCast(operation)
    }
}

impl From<DynamicMemRefCast> for LhloOperation {
    fn from(operation: DynamicMemRefCast) -> Self {
        LhloOperation::DynamicMemRefCast(operation)
    }
}

impl From<ReshapeMemRefCast> for LhloOperation {
    fn from(operation: ReshapeMemRefCast) -> Self {
        LhloOperation::ReshapeMemRefCast(operation)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::ir::{
        affine_map::permutation_map,
        builtins::{
            type_interfaces::Size::{Dynamic, Static},
            types::{Signedness, IntegerType, Type, UnrankedMemRef},
        },
        diagnostics::Severity,
    };

    use super::*;

    fn ranked(shape: &[Size], element_type: Type) -> MemRef {
        MemRef::new(shape.iter().copied(), element_type)
    }

    fn transposed(shape: &[Size], element_type: Type) -> MemRef {
        MemRef::with_layout(shape.iter().copied(), element_type, permutation_map(&[1, 0]).unwrap())
    }

    fn static_cast(operand: impl Into<BaseMemRef>, result: MemRef) -> StaticMemRefCast {
        StaticMemRefCast::new(Location::unknown(), Value::new(operand.into()), Value::new(result))
    }

    fn dynamic_cast(num_sizes: usize, result: MemRef) -> DynamicMemRefCast {
        let operand = ranked(&[Dynamic, Dynamic], Type::f32());
        DynamicMemRefCast::new(
            Location::unknown(),
            Value::new(operand.into()),
            vec![Value::new(IndexType); num_sizes],
            vec![Value::new(IndexType); num_sizes],
            Value::new(result),
        )
    }

    fn reshape_cast(
        operand: impl Into<BaseMemRef>,
        shape_length: Size,
        result: impl Into<BaseMemRef>,
    ) -> ReshapeMemRefCast {
        ReshapeMemRefCast::new(
            Location::file_line_col("reshape.mlir", 1, 8),
            Value::new(operand.into()),
            Value::new(ranked(&[shape_length], Type::integer(32))),
            Value::new(result.into()),
        )
    }

    fn error_of(result: LogicalResult) -> Option<ShapeError> {
        result.err().map(|diagnostic| diagnostic.error().clone())
    }

    #[test]
    fn test_static_mem_ref_cast() {
        let cast = static_cast(ranked(&[Static(1), Static(5)], Type::f32()), ranked(&[Static(5)], Type::f32()));
        assert_eq!(cast.verify(), Ok(()));
        assert_eq!(cast.name(), "xla_lhlo.static_memref_cast");

        // Zero-sized and rank-0 buffers are static too.
        let cast = static_cast(ranked(&[Static(0)], Type::f32()), ranked(&[], Type::f32()));
        assert_eq!(cast.verify(), Ok(()));
    }

    #[test]
    fn test_static_mem_ref_cast_dynamic_operand() {
        let cast = static_cast(ranked(&[Static(1), Dynamic], Type::f32()), ranked(&[Static(5)], Type::f32()));
        assert_eq!(error_of(cast.verify()), Some(ShapeError::OperandNotStatic));

        let cast = static_cast(UnrankedMemRef::new(Type::f32()), ranked(&[Static(5)], Type::f32()));
        assert_eq!(error_of(cast.verify()), Some(ShapeError::OperandNotStatic));

        // The operand is checked first when both sides are dynamic.
        let cast = static_cast(ranked(&[Dynamic], Type::f32()), ranked(&[Dynamic], Type::f32()));
        assert_eq!(error_of(cast.verify()), Some(ShapeError::OperandNotStatic));
    }

    #[test]
    fn test_static_mem_ref_cast_dynamic_result() {
        let cast = static_cast(ranked(&[Static(1), Static(5)], Type::f32()), ranked(&[Dynamic], Type::f32()));
        let diagnostic = cast.verify().unwrap_err();
        assert_eq!(diagnostic.error(), &ShapeError::ResultNotStatic);
        assert_eq!(diagnostic.severity(), Severity::Error);
        assert_eq!(
            diagnostic.to_string(),
            "loc(unknown): error: 'xla_lhlo.static_memref_cast' op result must have static shape"
        );
    }

    #[test]
    fn test_dynamic_mem_ref_cast() {
        let result = ranked(&[Dynamic, Dynamic, Static(4)], Type::f32());
        assert_eq!(dynamic_cast(3, result.clone()).verify(), Ok(()));
        assert_eq!(
            error_of(dynamic_cast(2, result.clone()).verify()),
            Some(ShapeError::RankMismatch { sizes: 2, rank: 3 })
        );
        assert_eq!(
            error_of(dynamic_cast(4, result).verify()),
            Some(ShapeError::RankMismatch { sizes: 4, rank: 3 })
        );
        assert_eq!(dynamic_cast(0, ranked(&[], Type::f32())).verify(), Ok(()));
    }

    #[test]
    fn test_dynamic_mem_ref_cast_ignores_strides() {
        let operand = ranked(&[Dynamic], Type::f32());
        let cast = DynamicMemRefCast::new(
            Location::unknown(),
            Value::new(operand.into()),
            vec![Value::new(IndexType)],
            Vec::new(),
            Value::new(ranked(&[Dynamic], Type::f32())),
        );
        assert_eq!(cast.verify(), Ok(()));
        assert_eq!(cast.sizes().len(), 1);
        assert!(cast.strides().is_empty());
    }

    #[test]
    fn test_reshape_mem_ref_cast() {
        let cast = reshape_cast(
            ranked(&[Static(4), Static(1)], Type::f32()),
            Static(2),
            ranked(&[Static(2), Static(2)], Type::f32()),
        );
        assert_eq!(cast.verify(), Ok(()));

        let cast = reshape_cast(ranked(&[Dynamic], Type::f32()), Dynamic, UnrankedMemRef::new(Type::f32()));
        assert_eq!(cast.verify(), Ok(()));

        let cast = reshape_cast(UnrankedMemRef::new(Type::f32()), Dynamic, UnrankedMemRef::new(Type::f32()));
        assert_eq!(cast.verify(), Ok(()));

        let cast = reshape_cast(
            UnrankedMemRef::new(Type::f32()),
            Static(3),
            ranked(&[Dynamic, Dynamic, Dynamic], Type::f32()),
        );
        assert_eq!(cast.verify(), Ok(()));
    }

    #[test]
    fn test_reshape_mem_ref_cast_element_type_mismatch() {
        let cast = reshape_cast(
            ranked(&[Static(4)], Type::f32()),
            Static(1),
            ranked(&[Static(4)], Type::integer(32)),
        );
        assert_eq!(
            error_of(cast.verify()),
            Some(ShapeError::ElementTypeMismatch {
                operand: Type::f32(),
                result: Type::integer(32),
            })
        );

        // Takes precedence over every later check.
        let cast = reshape_cast(transposed(&[Static(2), Static(2)], Type::f32()), Dynamic, ranked(&[Static(4)], Type::f64()));
        assert!(matches!(error_of(cast.verify()), Some(ShapeError::ElementTypeMismatch { .. })));

        let cast = reshape_cast(UnrankedMemRef::new(Type::f32()), Dynamic, UnrankedMemRef::new(Type::index()));
        assert!(matches!(error_of(cast.verify()), Some(ShapeError::ElementTypeMismatch { .. })));
    }

    #[test]
    fn test_reshape_mem_ref_cast_operand_layout() {
        let cast = reshape_cast(
            transposed(&[Static(2), Static(2)], Type::f32()),
            Static(1),
            ranked(&[Static(4)], Type::f32()),
        );
        let diagnostic = cast.verify().unwrap_err();
        assert_eq!(diagnostic.error(), &ShapeError::OperandLayoutNotIdentity);
        assert_eq!(
            diagnostic.to_string(),
            "reshape.mlir:1:8: error: 'xla_lhlo.reshape_memref_cast' op operand memref type should have identity affine map"
        );

        let cast = reshape_cast(
            transposed(&[Static(2), Static(2)], Type::f32()),
            Dynamic,
            UnrankedMemRef::new(Type::f32()),
        );
        assert_eq!(error_of(cast.verify()), Some(ShapeError::OperandLayoutNotIdentity));
    }

    #[test]
    fn test_reshape_mem_ref_cast_dynamic_shape_length() {
        let cast = reshape_cast(
            ranked(&[Static(4)], Type::f32()),
            Dynamic,
            ranked(&[Static(2), Static(2)], Type::f32()),
        );
        assert_eq!(error_of(cast.verify()), Some(ShapeError::DynamicShapeLengthWithStaticResultRank));
    }

    #[test]
    fn test_reshape_mem_ref_cast_shape_length_mismatch() {
        let cast = reshape_cast(
            ranked(&[Static(4)], Type::f32()),
            Static(3),
            ranked(&[Static(2), Static(2)], Type::f32()),
        );
        assert_eq!(
            error_of(cast.verify()),
            Some(ShapeError::ShapeLengthRankMismatch { length: 3, rank: 2 })
        );

        let cast = reshape_cast(
            ranked(&[Static(8)], Type::f32()),
            Static(3),
            ranked(&[Static(2), Static(2), Static(2)], Type::f32()),
        );
        assert_eq!(cast.verify(), Ok(()));
    }

    #[test]
    fn test_reshape_mem_ref_cast_result_layout() {
        let cast = reshape_cast(
            ranked(&[Static(4)], Type::f32()),
            Static(2),
            transposed(&[Static(2), Static(2)], Type::f32()),
        );
        assert_eq!(error_of(cast.verify()), Some(ShapeError::ResultLayoutNotIdentity));

        // The length check comes before the layout check.
        let cast = reshape_cast(
            ranked(&[Static(4)], Type::f32()),
            Static(3),
            transposed(&[Static(2), Static(2)], Type::f32()),
        );
        assert!(matches!(error_of(cast.verify()), Some(ShapeError::ShapeLengthRankMismatch { .. })));
    }

    #[test]
    fn test_reshape_mem_ref_cast_unranked_result_skips_rank_checks() {
        for length in [Dynamic, Static(0), Static(2), Static(7)] {
            let cast = reshape_cast(
                ranked(&[Static(4), Static(4)], Type::f32()),
                length,
                UnrankedMemRef::new(Type::f32()),
            );
            assert_eq!(cast.verify(), Ok(()));
        }
    }

    #[test]
    fn test_reshape_mem_ref_cast_invalid_shape_operand() {
        let invalid_shapes = [
            ranked(&[Static(2), Static(1)], Type::integer(32)),
            ranked(&[], Type::index()),
            ranked(&[Static(2)], Type::f32()),
            ranked(&[Static(2)], Type::Integer(IntegerType::new(64, Signedness::Unsigned))),
        ];
        for shape in invalid_shapes {
            let cast = ReshapeMemRefCast::new(
                Location::unknown(),
                Value::new(ranked(&[Static(4)], Type::f32()).into()),
                Value::new(shape.clone()),
                Value::new(ranked(&[Static(2), Static(2)], Type::f32()).into()),
            );
            assert_eq!(error_of(cast.verify()), Some(ShapeError::InvalidShapeOperand { shape }));
        }

        let cast = ReshapeMemRefCast::new(
            Location::unknown(),
            Value::new(ranked(&[Static(4)], Type::f32()).into()),
            Value::new(ranked(&[Static(2)], Type::index())),
            Value::new(ranked(&[Static(2), Static(2)], Type::f32()).into()),
        );
        assert_eq!(cast.verify(), Ok(()));
    }

    #[test]
    fn test_verify_is_idempotent() {
        let operations: Vec<LhloOperation> = vec![
            static_cast(ranked(&[Dynamic], Type::f32()), ranked(&[Static(5)], Type::f32())).into(),
            dynamic_cast(2, ranked(&[Dynamic, Dynamic], Type::f32())).into(),
            reshape_cast(ranked(&[Static(4)], Type::f32()), Static(3), ranked(&[Static(4)], Type::f32())).into(),
        ];
        for operation in &operations {
            assert_eq!(operation.verify(), operation.verify());
        }
    }

    #[test]
    fn test_lhlo_operation_dispatch() {
        let source = ranked(&[Static(1), Static(5)], Type::f32());
        let operation = LhloOperation::from(static_cast(source.clone(), ranked(&[Static(5)], Type::f32())));
        assert_eq!(operation.name(), StaticMemRefCast::NAME);
        assert_eq!(operation.location(), &Location::Unknown);
        assert_eq!(operation.view_source().r#type(), &BaseMemRef::from(source));
        assert_eq!(operation.verify(), Ok(()));

        let operation = LhloOperation::from(dynamic_cast(1, ranked(&[Dynamic, Dynamic], Type::f32())));
        assert_eq!(operation.name(), DynamicMemRefCast::NAME);
        assert!(matches!(error_of(operation.verify()), Some(ShapeError::RankMismatch { .. })));

        let operation = LhloOperation::from(reshape_cast(
            UnrankedMemRef::new(Type::f32()),
            Dynamic,
            UnrankedMemRef::new(Type::f32()),
        ));
        assert_eq!(operation.name(), ReshapeMemRefCast::NAME);
        assert_eq!(operation.location(), &Location::file_line_col("reshape.mlir", 1, 8));
        assert_eq!(operation.view_source().r#type(), &BaseMemRef::from(UnrankedMemRef::new(Type::f32())));
    }

    #[test]
    fn test_operations_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LhloOperation>();
        assert_send_sync::<crate::ir::diagnostics::Diagnostic>();
    }
}
