//! # LHLO Dialect
//!
//! The buffer-level counterpart of the XLA HLO dialect. Operations read and write memrefs instead of producing tensors.

pub mod ir;
