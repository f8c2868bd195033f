// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Entropy extraction errors.

use thiserror::Error;

/// Why an extraction failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntropyError {
    /// A worker died before completing its critical section. The race it
    /// belonged to is unusable; a partial race has no valid digits.
    #[error("worker {label} panicked mid-race; extraction dropped")]
    WorkerPanicked { label: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_worker() {
        let err = EntropyError::WorkerPanicked { label: 7 };
        assert_eq!(
            err.to_string(),
            "worker 7 panicked mid-race; extraction dropped"
        );
    }
}
