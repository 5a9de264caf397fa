//! MLIR Affine Expr Class
//!
//! An affine expression is an affine combination of dimension identifiers and symbols, including ceildiv/floordiv/mod by a constant integer.
//!
//! - include <https://github.com/llvm/llvm-project/blob/main/mlir/include/mlir/IR/AffineExpr.h>
//! - lib <https://github.com/llvm/llvm-project/blob/main/mlir/lib/IR/AffineExpr.cpp>

use core::{
    fmt::{self, Display},
    ops::{Add, Mul},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Add,
    /// RHS of mul is always a constant or a symbolic expression.
    Mul,
    /// RHS of mod is always a constant or a symbolic expression with a positive value.
    Mod,
    /// RHS of floordiv is always a constant or a symbolic expression.
    FloorDiv,
    /// RHS of ceildiv is always a constant or a symbolic expression.
    CeilDiv,
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Add => "+",
            Kind::Mul => "*",
            Kind::Mod => "mod",
            Kind::FloorDiv => "floordiv",
            Kind::CeilDiv => "ceildiv",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AffineExpr {
    /// Affine binary operation expression. Subtraction is represented through a multiply by -1 and add.
    BinaryOperation {
        kind: Kind,
        lhs: Box<AffineExpr>,
        rhs: Box<AffineExpr>,
    },
    /// A dimensional identifier appearing in an affine expression.
    Dimension { index: usize },
    /// A symbolic identifier appearing in an affine expression.
    Symbol { index: usize },
    /// An integer constant appearing in affine expression.
    Constant { value: i64 },
}

use AffineExpr::*;

pub const fn dimension(index: usize) -> AffineExpr {
    Dimension { index }
}

pub const fn symbol(index: usize) -> AffineExpr {
    Symbol { index }
}

pub const fn constant(value: i64) -> AffineExpr {
    Constant { value }
}

impl AffineExpr {
    pub fn binary(kind: Kind, lhs: AffineExpr, rhs: AffineExpr) -> Self {
        BinaryOperation {
            kind,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Returns true if this expression is made out of only symbols and constants, i.e., it does not involve dimensional identifiers.
    pub fn is_symbolic_or_constant(&self) -> bool {
        match self {
            BinaryOperation { lhs, rhs, .. } => {
                lhs.is_symbolic_or_constant() && rhs.is_symbolic_or_constant()
            }
            Dimension { .. } => false,
            Symbol { .. } | Constant { .. } => true,
        }
    }

    /// Returns true if the dimension at `index` appears anywhere in this expression.
    pub fn is_function_of_dim(&self, index: usize) -> bool {
        match self {
            BinaryOperation { lhs, rhs, .. } => {
                lhs.is_function_of_dim(index) || rhs.is_function_of_dim(index)
            }
            Dimension { index: position } => *position == index,
            Symbol { .. } | Constant { .. } => false,
        }
    }
}

impl Add for AffineExpr {
    type Output = AffineExpr;

    fn add(self, rhs: AffineExpr) -> AffineExpr {
        AffineExpr::binary(Kind::Add, self, rhs)
    }
}

impl Mul for AffineExpr {
    type Output = AffineExpr;

    fn mul(self, rhs: AffineExpr) -> AffineExpr {
        AffineExpr::binary(Kind::Mul, self, rhs)
    }
}

impl Display for AffineExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOperation { kind, lhs, rhs } => {
                // Nested binary operands are parenthesised.
                let operand = |f: &mut fmt::Formatter<'_>, expr: &AffineExpr| match expr {
                    BinaryOperation { .. } => write!(f, "({expr})"),
                    _ => write!(f, "{expr}"),
                };
                operand(f, lhs)?;
                write!(f, " {kind} ")?;
                operand(f, rhs)
            }
            Dimension { index } => write!(f, "d{index}"),
            Symbol { index } => write!(f, "s{index}"),
            Constant { value } => write!(f, "{value}"),
        }
    }
}
