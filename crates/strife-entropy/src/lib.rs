// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Scheduler-race entropy.
//!
//! Twenty worker threads are started together and contend for one lock.
//! The order in which they get through it is up to the OS scheduler; the
//! labels of the workers finishing 20th and 11th become the two decimal
//! digits of one extraction.
//!
//! Components:
//! - lock — closure-based exclusive access to the shared race state
//! - state — finish-order counter + the two digit slots
//! - worker — one labeled participant in a race
//! - cohort — spawns a full race, joins it, reads out the digit pair
//! - source — the `PairSource` seam consumed by higher layers

pub mod cohort;
pub mod error;
pub mod lock;
pub mod source;
pub mod state;
pub mod worker;

pub use cohort::{RaceCohort, COHORT_SIZE};
pub use error::EntropyError;
pub use source::PairSource;
