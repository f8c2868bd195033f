// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Magnitude composition: building multi-digit numbers out of repeated
//! two-digit extractions.
//!
//! Each extraction contributes one base-100 position, little-endian: the
//! first pair is the low two decimal digits, the next pair the following
//! two, and so on. The composer only talks to a [`PairSource`], never to
//! the race machinery behind it.

pub mod digits;
pub mod error;

use strife_entropy::PairSource;

pub use error::ComposeError;

use digits::{digit_count, rounds_for};

/// Extraction count of the fixed-width operations. Four rounds of base-100
/// composition reach at most 99_999_999.
const FIXED_ROUNDS: u32 = 4;

/// Builds random numbers of a requested magnitude from a pair source.
pub struct MagnitudeComposer<S> {
    source: S,
}

impl<S: PairSource> MagnitudeComposer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// A random value from four extractions:
    /// `d0 + d1*100 + d2*10_000 + d3*1_000_000`.
    ///
    /// The name is historical: four base-100 rounds actually cover
    /// [0, 99_999_999], two digits short of the billion it promises.
    /// Widening the composition would change observable behavior, so the
    /// mismatch stays.
    pub fn random_up_to_billion(&mut self) -> Result<u64, ComposeError> {
        Ok(self.compose(FIXED_ROUNDS)? as u64)
    }

    /// The four-extraction composition reduced modulo `bound`, yielding a
    /// value in [0, bound). `bound == 0` is rejected; `bound == 1` always
    /// yields 0.
    pub fn random_bounded(&mut self, bound: u64) -> Result<u64, ComposeError> {
        if bound == 0 {
            return Err(ComposeError::NonPositiveBound);
        }
        Ok((self.compose(FIXED_ROUNDS)? % u128::from(bound)) as u64)
    }

    /// A random value sized to the decimal width of `n`: one extraction
    /// per two digits of `n`, composed little-endian base-100, reduced
    /// modulo `n`.
    ///
    /// `n` is taken as already absolute; callers with signed input apply
    /// the absolute value themselves. `n == 0` is rejected.
    pub fn random_with_digits_of(&mut self, n: u64) -> Result<u64, ComposeError> {
        let rounds = rounds_for(digit_count(n)?);
        Ok((self.compose(rounds)? % u128::from(n)) as u64)
    }

    /// Sum of `rounds` extractions weighted by ascending powers of 100.
    ///
    /// Accumulates in u128: a 19-digit sizing input takes 10 rounds with
    /// weights up to 100^9, which overflows u64 mid-sum.
    fn compose(&mut self, rounds: u32) -> Result<u128, ComposeError> {
        let mut value: u128 = 0;
        let mut weight: u128 = 1;
        for _ in 0..rounds {
            value += u128::from(self.source.next_pair()?) * weight;
            weight *= 100;
        }
        Ok(value)
    }
}
