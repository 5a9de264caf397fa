//! # MLIR Affine Map Class
//!
//! Affine maps are mathematical functions which map a list of dimension identifiers and symbols, to multidimensional affine expressions.
//!
//! - include <https://github.com/llvm/llvm-project/blob/main/mlir/include/mlir/IR/AffineMap.h>
//! - lib <https://github.com/llvm/llvm-project/blob/main/mlir/lib/IR/AffineMap.cpp>

use core::fmt::{self, Display};

use crate::ir::affine_expr::{dimension, AffineExpr};

/**
A multi-dimensional affine map.
Affine map's are immutable like `Type`'s.
For example:

```mlir
(d0, d1) -> (d0 / 128, d0 mod 128, d1)
```

The names used above, `d0` and `d1`, don't matter - it's the mathematical function that is unique to this affine map.
*/
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AffineMap {
    num_dims: usize,
    num_symbols: usize,
    outputs: Vec<AffineExpr>,
}

/**
Returns an identity affine map with `num_dims` dimensions.

```mlir
(d0, ..., dn) -> (d0, ..., dn)
```
*/
pub fn multi_dim_identity_map(num_dims: usize) -> AffineMap {
    AffineMap::new(num_dims, 0, (0..num_dims).map(dimension).collect())
}

/**
Returns an AffineMap representing a permutation.
The permutation `(i, j, k) -> (j, k, i)` is expressed with `permutation = [1, 2, 0]`. All values in `permutation` must be in the range `0..permutation.len()` without duplications, otherwise `None` is returned.
*/
pub fn permutation_map(permutation: &[usize]) -> Option<AffineMap> {
    let map = AffineMap::new(
        permutation.len(),
        0,
        permutation.iter().copied().map(dimension).collect(),
    );
    map.is_permutation().then_some(map)
}

impl AffineMap {
    pub fn new(num_dims: usize, num_symbols: usize, outputs: Vec<AffineExpr>) -> Self {
        Self {
            num_dims,
            num_symbols,
            outputs,
        }
    }

    pub fn num_dims(&self) -> usize {
        self.num_dims
    }

    pub fn num_symbols(&self) -> usize {
        self.num_symbols
    }

    pub fn num_outputs(&self) -> usize {
        self.outputs.len()
    }

    pub fn outputs(&self) -> &[AffineExpr] {
        &self.outputs
    }

    /// Returns true if this affine map is an identity affine map.
    /// An identity affine map corresponds to an identity affine function on the dimensional identifiers.
    pub fn is_identity(&self) -> bool {
        if self.num_dims != self.outputs.len() {
            return false;
        }
        self.outputs
            .iter()
            .enumerate()
            .all(|(index, output)| matches!(output, AffineExpr::Dimension { index: position } if *position == index))
    }

    /// Returns true if the AffineMap represents a symbol-less permutation map.
    pub fn is_permutation(&self) -> bool {
        if self.num_symbols != 0 || self.num_dims != self.outputs.len() {
            return false;
        }
        let mut seen = vec![false; self.num_dims];
        for output in &self.outputs {
            match output {
                AffineExpr::Dimension { index } if *index < self.num_dims && !seen[*index] => {
                    seen[*index] = true;
                }
                _ => return false,
            }
        }
        true
    }
}

impl Display for AffineMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |f: &mut fmt::Formatter<'_>, prefix: &str, count: usize| -> fmt::Result {
            for index in 0..count {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{prefix}{index}")?;
            }
            Ok(())
        };
        f.write_str("(")?;
        join(f, "d", self.num_dims)?;
        f.write_str(")")?;
        if self.num_symbols > 0 {
            f.write_str("[")?;
            join(f, "s", self.num_symbols)?;
            f.write_str("]")?;
        }
        f.write_str(" -> (")?;
        for (index, output) in self.outputs.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{output}")?;
        }
        f.write_str(")")
    }
}
