use crate::error::AutodiffError;

/// Scratch space a forward computation uses to stash values its backward needs.
///
/// When `no_grad` is set nothing will ever be differentiated, so saving is skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Context<T> {
    no_grad: bool,
    saved_values: Vec<T>,
}

impl<T> Default for Context<T> {
    fn default() -> Self {
        Context::new(false)
    }
}

impl<T> Context<T> {
    pub fn new(no_grad: bool) -> Self {
        Context {
            no_grad,
            saved_values: Vec::new(),
        }
    }

    pub fn no_grad(&self) -> bool {
        self.no_grad
    }

    /// Stores `values` for the backward pass, replacing anything saved before.
    pub fn save_for_backward(&mut self, values: Vec<T>) {
        if self.no_grad {
            return;
        }
        self.saved_values = values;
    }

    pub fn saved_values(&self) -> &[T] {
        &self.saved_values
    }

    /// Alias of [`saved_values`](Context::saved_values).
    pub fn saved_tensors(&self) -> &[T] {
        &self.saved_values
    }
}

impl<T: Copy> Context<T> {
    /// Returns exactly `N` saved values, or an error naming `operation` if a different
    /// number was saved.
    pub fn saved<const N: usize>(&self, operation: &str) -> Result<[T; N], AutodiffError> {
        <[T; N]>::try_from(self.saved_values.as_slice()).map_err(|_| {
            AutodiffError::MissingSavedValues {
                operation: operation.to_string(),
                expected: N,
                actual: self.saved_values.len(),
            }
        })
    }
}
