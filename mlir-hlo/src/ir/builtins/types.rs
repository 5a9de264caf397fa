//! # Builtin Type Definitions
//!
//! Defines the subset of builtin MLIR types that buffer casts operate on: scalar element types and ranked or unranked memrefs.
//!
//! - include
//!   - <https://github.com/llvm/llvm-project/blob/main/mlir/include/mlir/IR/BuiltinTypes.h>
//!   - <https://github.com/llvm/llvm-project/blob/main/mlir/include/mlir/IR/BuiltinTypes.td>
//! - lib <https://github.com/llvm/llvm-project/blob/main/mlir/lib/IR/BuiltinTypes.cpp>

use core::fmt::{self, Display};

use crate::ir::{
    affine_map::AffineMap,
    builtins::type_interfaces::{ShapedType, Size},
};

/// Scalar types that can be stored in a memref.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    Integer(IntegerType),
    Index(IndexType),
    Float(FloatType),
}

impl Type {
    /// Signless integer type of the given width, e.g. `i32`.
    pub const fn integer(width: u32) -> Self {
        Type::Integer(IntegerType::new(width, Signedness::Signless))
    }

    pub const fn index() -> Self {
        Type::Index(IndexType)
    }

    pub const fn f32() -> Self {
        Type::Float(FloatType::F32)
    }

    pub const fn f64() -> Self {
        Type::Float(FloatType::F64)
    }

    pub fn is_signless_integer(&self) -> bool {
        matches!(self, Type::Integer(integer) if integer.is_signless())
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Type::Index(_))
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Integer(integer) => integer.fmt(f),
            Type::Index(_) => f.write_str("index"),
            Type::Float(float) => float.fmt(f),
        }
    }
}

// ----------------------------------------------------------------------
// IndexType
// ----------------------------------------------------------------------

/// Integer-like type with unknown platform-dependent bit width.
///
/// The index type is a signless integer whose size is equal to the natural machine word of the target and is used for sizes, dimensionalities and subscripts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IndexType;

// ----------------------------------------------------------------------
// IntegerType
// ----------------------------------------------------------------------

/// Integer type with arbitrary precision up to a fixed limit.
///
/// # Syntax
///
/// ```text
/// signed-integer-type ::= `si` [1-9][0-9]*
/// unsigned-integer-type ::= `ui` [1-9][0-9]*
/// signless-integer-type ::= `i` [1-9][0-9]*
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IntegerType {
    width: u32,
    signedness: Signedness,
}

/// Signedness semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signedness {
    /// No signedness semantics
    Signless,
    /// Signed integer
    Signed,
    /// Unsigned integer
    Unsigned,
}

impl IntegerType {
    pub const fn new(width: u32, signedness: Signedness) -> Self {
        Self { width, signedness }
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn signedness(&self) -> Signedness {
        self.signedness
    }

    /// Return true if this is a signless integer type.
    pub const fn is_signless(&self) -> bool {
        matches!(self.signedness, Signedness::Signless)
    }
}

impl Display for IntegerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.signedness {
            Signedness::Signless => "i",
            Signedness::Signed => "si",
            Signedness::Unsigned => "ui",
        };
        write!(f, "{prefix}{}", self.width)
    }
}

// ----------------------------------------------------------------------
// FloatType
// ----------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FloatType {
    BF16,
    F16,
    F32,
    F64,
}

impl Display for FloatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FloatType::BF16 => "bf16",
            FloatType::F16 => "f16",
            FloatType::F32 => "f32",
            FloatType::F64 => "f64",
        })
    }
}

// ----------------------------------------------------------------------
// MemRefType
// ----------------------------------------------------------------------

/// Shaped reference to a region of memory.
///
/// # Syntax
///
/// ```text
/// memref-type ::= `memref` `<` dimension-list-ranked type
///                 (`,` layout-specification)? `>`
/// ```
///
/// A memref type is a reference to a region of memory. Its shape is a list of sizes, each of which may be dynamic. The optional layout map maps the index space of the memref onto the linear buffer. Without a layout the memref is laid out densely in row-major order with unit innermost stride, which is the identity layout.
///
/// # Examples
///
/// ```mlir
/// memref<16x32xf32>
/// memref<16x4x?xf32>
/// memref<4x8xf32, affine_map<(d0, d1) -> (d1, d0)>>
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MemRef {
    shape: Vec<Size>,
    element_type: Type,
    layout: Option<AffineMap>,
}

impl MemRef {
    /// Creates a memref with the identity layout.
    pub fn new(shape: impl IntoIterator<Item = Size>, element_type: Type) -> Self {
        Self {
            shape: shape.into_iter().collect(),
            element_type,
            layout: None,
        }
    }

    /// Creates a memref with an explicit layout. An identity map over the memref's dimensions is dropped, so the resulting type compares equal to one built with [`MemRef::new`].
    pub fn with_layout(
        shape: impl IntoIterator<Item = Size>,
        element_type: Type,
        layout: AffineMap,
    ) -> Self {
        let mut memref = Self::new(shape, element_type);
        if !(layout.is_identity() && layout.num_dims() == memref.shape.len()) {
            memref.layout = Some(layout);
        }
        memref
    }

    /// Returns the sizes of all dimensions. Unlike [`ShapedType::shape`] this cannot fail since a ranked memref always knows its rank.
    pub fn dimensions(&self) -> &[Size] {
        &self.shape
    }

    /// Returns the layout map, or `None` for the identity layout.
    pub fn layout(&self) -> Option<&AffineMap> {
        self.layout.as_ref()
    }

    pub fn has_identity_layout(&self) -> bool {
        self.layout.is_none()
    }
}

impl ShapedType for MemRef {
    fn element_type(&self) -> &Type {
        &self.element_type
    }

    fn shape(&self) -> Option<&[Size]> {
        Some(&self.shape)
    }
}

impl Display for MemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("memref<")?;
        for size in &self.shape {
            write!(f, "{size}x")?;
        }
        write!(f, "{}", self.element_type)?;
        if let Some(layout) = &self.layout {
            write!(f, ", affine_map<{layout}>")?;
        }
        f.write_str(">")
    }
}

// ----------------------------------------------------------------------
// UnrankedMemRefType
// ----------------------------------------------------------------------

/// Shaped reference, with unknown rank, to a region of memory.
///
/// ```mlir
/// memref<*xf32>
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnrankedMemRef {
    element_type: Type,
}

impl UnrankedMemRef {
    pub fn new(element_type: Type) -> Self {
        Self { element_type }
    }
}

impl ShapedType for UnrankedMemRef {
    fn element_type(&self) -> &Type {
        &self.element_type
    }

    fn shape(&self) -> Option<&[Size]> {
        None
    }
}

impl Display for UnrankedMemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "memref<*x{}>", self.element_type)
    }
}

// ----------------------------------------------------------------------
// BaseMemRefType
// ----------------------------------------------------------------------

/// Either a ranked or an unranked memref.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BaseMemRef {
    Ranked(MemRef),
    Unranked(UnrankedMemRef),
}

impl BaseMemRef {
    pub fn as_ranked(&self) -> Option<&MemRef> {
        match self {
            BaseMemRef::Ranked(memref) => Some(memref),
            BaseMemRef::Unranked(_) => None,
        }
    }

    /// Unranked memrefs carry no layout map.
    pub fn has_identity_layout(&self) -> bool {
        self.as_ranked().map_or(true, MemRef::has_identity_layout)
    }
}

impl ShapedType for BaseMemRef {
    fn element_type(&self) -> &Type {
        match self {
            BaseMemRef::Ranked(memref) => memref.element_type(),
            BaseMemRef::Unranked(memref) => memref.element_type(),
        }
    }

    fn shape(&self) -> Option<&[Size]> {
        match self {
            BaseMemRef::Ranked(memref) => memref.shape(),
            BaseMemRef::Unranked(memref) => memref.shape(),
        }
    }
}

impl From<MemRef> for BaseMemRef {
    fn from(memref: MemRef) -> Self {
        BaseMemRef::Ranked(memref)
    }
}

impl From<UnrankedMemRef> for BaseMemRef {
    fn from(memref: UnrankedMemRef) -> Self {
        BaseMemRef::Unranked(memref)
    }
}

impl Display for BaseMemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseMemRef::Ranked(memref) => memref.fmt(f),
            BaseMemRef::Unranked(memref) => memref.fmt(f),
        }
    }
}
