// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! One participant in a cohort race.

use std::sync::Arc;

use crate::lock::RaceMutex;
use crate::state::RaceState;

/// A labeled race participant. The label is the worker's cohort index and
/// never changes across races; a fresh `Worker` with the same label stands
/// in for the old one after every race.
pub struct Worker {
    label: u8,
}

impl Worker {
    pub fn new(label: u8) -> Self {
        Self { label }
    }

    pub fn label(&self) -> u8 {
        self.label
    }

    /// Run to the shared critical section and record this worker's finish.
    ///
    /// This is the whole body of a worker thread: all cohort members
    /// contend on the same lock, and the serialization order of these
    /// calls is the finishing order.
    pub fn run(self, state: &Arc<RaceMutex<RaceState>>) {
        state.lock(|s| s.record_finish(self.label));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_records_exactly_one_finish() {
        let state = Arc::new(RaceMutex::new(RaceState::new()));
        Worker::new(3).run(&state);
        assert_eq!(state.lock(|s| s.finished()), 1);
    }

    #[test]
    fn label_is_preserved() {
        assert_eq!(Worker::new(17).label(), 17);
    }
}
