// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Composition errors.

use strife_entropy::EntropyError;
use thiserror::Error;

/// Why a composed number could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    /// Sizing input was 0, which has no decimal digit count.
    #[error("cannot size a number to 0 (zero has no digit count)")]
    ZeroMagnitude,

    /// Modulo bound was 0; there is no value below it.
    #[error("modulo bound must be positive")]
    NonPositiveBound,

    /// The underlying source failed mid-composition.
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_errors_pass_through_unchanged() {
        let inner = EntropyError::WorkerPanicked { label: 3 };
        let err: ComposeError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
    }
}
