//! Verifier Analysis for MLIR Structures
//!
//! Runs the operation-specific verifiers over a sequence of operations and collects the diagnostics they emit. Each operation is verified independently; one failing operation never hides the diagnostics of another unless the verifier is configured to stop early.
//!
//! - include <https://github.com/llvm/llvm-project/blob/main/mlir/include/mlir/IR/Verifier.h>
//! - lib <https://github.com/llvm/llvm-project/blob/main/mlir/lib/IR/Verifier.cpp>

use core::num::NonZeroUsize;

use crate::ir::{
    diagnostics::Diagnostic,
    operation::{Op, Verify},
};

/// Options of the [`OperationVerifier`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Stop at the first operation that fails to verify.
    pub fail_fast: bool,
    /// Stop once this many diagnostics have been collected.
    pub max_diagnostics: Option<NonZeroUsize>,
}

/// Verifies every operation of a program, collecting one diagnostic per invalid operation.
#[derive(Clone, Debug, Default)]
pub struct OperationVerifier {
    config: VerifierConfig,
}

/// Verify the given operations with the default configuration, reporting every invalid operation.
pub fn verify<T: Verify>(operations: &[T]) -> Result<(), Vec<Diagnostic>> {
    OperationVerifier::default().verify_operations(operations)
}

impl OperationVerifier {
    pub fn new(config: VerifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Verify all of `operations`. On failure the diagnostics are returned in operation order.
    pub fn verify_operations<'a, T, I>(&self, operations: I) -> Result<(), Vec<Diagnostic>>
    where
        T: Verify + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut diagnostics = Vec::new();
        for operation in operations {
            if let Err(diagnostic) = self.verify_operation(operation) {
                diagnostics.push(diagnostic);
                if self.should_stop(diagnostics.len()) {
                    tracing::debug!(collected = diagnostics.len(), "stopping verification early");
                    break;
                }
            }
        }
        if diagnostics.is_empty() {
            Ok(())
        } else {
            Err(diagnostics)
        }
    }

    /// Verify a single operation.
    pub fn verify_operation<T: Verify>(&self, operation: &T) -> Result<(), Diagnostic> {
        tracing::debug!(operation = operation.name(), location = %operation.location(), "verifying operation");
        let result = operation.verify();
        if let Err(diagnostic) = &result {
            tracing::warn!(operation = operation.name(), %diagnostic, "operation failed to verify");
        }
        result
    }

    fn should_stop(&self, num_diagnostics: usize) -> bool {
        self.config.fail_fast
            || self
                .config
                .max_diagnostics
                .is_some_and(|max| num_diagnostics >= max.get())
    }
}
