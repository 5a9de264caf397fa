//! # Builtin Type Interfaces
//!
//! This file contains definitions for type interfaces that closely interact with attributes, types, and operations in the builtin dialect.
//!
//! - include
//!   - <https://github.com/llvm/llvm-project/blob/main/mlir/include/mlir/IR/BuiltinTypeInterfaces.h>
//!   - <https://github.com/llvm/llvm-project/blob/main/mlir/include/mlir/IR/BuiltinTypeInterfaces.td>
//! - lib <https://github.com/llvm/llvm-project/blob/main/mlir/lib/IR/BuiltinTypeInterfaces.cpp>

use core::fmt::{self, Display};

use crate::ir::builtins::types::Type;

/// Size of a single dimension of a shaped type. A dynamic size is not known until runtime and is never equal to any static size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Size {
    Static(usize),
    Dynamic,
}

impl Size {
    /// Returns the value of this [`Size`], if it is a [`Size::Static`], and [`None`] otherwise.
    pub fn value(&self) -> Option<usize> {
        match self {
            Size::Static(value) => Some(*value),
            Size::Dynamic => None,
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self, Self::Static(_))
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic)
    }
}

impl From<usize> for Size {
    fn from(value: usize) -> Self {
        Size::Static(value)
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::Static(value) => write!(f, "{value}"),
            Size::Dynamic => f.write_str("?"),
        }
    }
}

// ----------------------------------------------------------------------
// ShapedType
// ----------------------------------------------------------------------

/// This interface provides a common API for interacting with multi-dimensional container types. These types contain a shape and an element type.
///
/// A shape is a list of sizes corresponding to the dimensions of the container.
/// If the number of dimensions in the shape is unknown, the shape is 'unranked'.
/// If the number of dimensions is known, the shape 'ranked'.
pub trait ShapedType {
    /// Returns the element type of this shaped type.
    fn element_type(&self) -> &Type;

    /// Returns the shape of this type if it is ranked, and `None` otherwise.
    fn shape(&self) -> Option<&[Size]>;

    /// Returns if this type is ranked, i.e. it has a known number of dimensions.
    fn has_rank(&self) -> bool {
        self.shape().is_some()
    }

    /// Returns the number of dimensions, or `None` for unranked types.
    fn rank(&self) -> Option<usize> {
        self.shape().map(<[Size]>::len)
    }

    /// Returns the size of the dimension at `index`. `None` for unranked types and out-of-range indices.
    fn dim_size(&self, index: usize) -> Option<Size> {
        self.shape().and_then(|shape| shape.get(index).copied())
    }

    /// Returns if this type has a static shape, i.e. if the type is ranked and all dimensions have known size.
    fn has_static_shape(&self) -> bool {
        self.shape()
            .is_some_and(|shape| shape.iter().all(Size::is_static))
    }

    /// If this is a ranked type, return the number of dimensions with dynamic size.
    fn num_dynamic_dims(&self) -> Option<usize> {
        self.shape()
            .map(|shape| shape.iter().filter(|size| size.is_dynamic()).count())
    }

    /// If it has static shape, return the number of elements. `None` also covers overflow.
    fn num_elements(&self) -> Option<usize> {
        self.shape()?
            .iter()
            .try_fold(1usize, |num, size| num.checked_mul(size.value()?))
    }
}
