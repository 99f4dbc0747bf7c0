//! Report editing session
//!
//! Wraps one report record behind a lock so that recomputes never overlap
//! and consumers never read derived values computed from an older input
//! snapshot. Every edit runs mutation and recompute under the same lock
//! acquisition, so the derived block always matches the inputs by the time
//! the lock is released (compute-then-read, not eventually consistent).
//!
//! The generation counter gives last-write-wins identity: each published
//! recompute bumps it, and a consumer holding a snapshot can tell whether
//! a later edit has superseded it.

use std::sync::{Mutex, PoisonError};

use crate::engine;
use crate::types::{ReportInputs, ReportRecord};

struct SessionState {
    record: ReportRecord,
    generation: u64,
}

/// A live editing session for one report record.
pub struct ReportSession {
    state: Mutex<SessionState>,
}

impl ReportSession {
    /// Open a session, recomputing once so the initial derived block
    /// matches the initial inputs.
    pub fn open(mut record: ReportRecord) -> Self {
        engine::recompute_report(&mut record);
        Self {
            state: Mutex::new(SessionState {
                record,
                generation: 0,
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SessionState> {
        // A panic while holding the lock cannot leave the record half
        // published: the engine writes the derived block in one assignment.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply one input mutation and recompute, all under the lock.
    ///
    /// Returns the generation of the published result.
    pub fn edit<F>(&self, mutate: F) -> u64
    where
        F: FnOnce(&mut ReportInputs),
    {
        let mut state = self.lock();
        mutate(&mut state.record.inputs);
        engine::recompute_report(&mut state.record);
        state.generation += 1;
        state.generation
    }

    /// Snapshot the record for export or persistence.
    ///
    /// The derived block of the returned record is always consistent with
    /// its inputs; the generation identifies which edit produced it.
    pub fn snapshot(&self) -> (ReportRecord, u64) {
        let state = self.lock();
        (state.record.clone(), state.generation)
    }

    /// Generation of the most recently published recompute.
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{self, EngineConfig};

    fn ensure_config() {
        if !config::is_initialized() {
            config::init(EngineConfig::default());
        }
    }

    #[test]
    fn open_recomputes_the_initial_record() {
        ensure_config();
        let mut record = ReportRecord::default();
        record.inputs.flow_rate_gpm = 120.0;
        record.inputs.spp_psi = 1000.0;

        let session = ReportSession::open(record);
        let (snap, generation) = session.snapshot();

        assert_eq!(generation, 0);
        assert!((snap.derived.bit_hhp - 70.01).abs() < 0.1);
    }

    #[test]
    fn rapid_edits_are_last_write_wins() {
        ensure_config();
        let session = ReportSession::open(ReportRecord::default());

        // Simulate per-keystroke edits of the flow rate field
        for q in [1.0, 12.0, 120.0] {
            session.edit(|inputs| inputs.flow_rate_gpm = q);
        }
        session.edit(|inputs| inputs.spp_psi = 1000.0);

        let (snap, generation) = session.snapshot();
        assert_eq!(generation, 4);
        // Only the final snapshot's result is visible
        assert!((snap.derived.bit_hhp - 70.01).abs() < 0.1);
    }

    #[test]
    fn snapshot_derived_always_matches_snapshot_inputs() {
        ensure_config();
        let session = ReportSession::open(ReportRecord::default());
        session.edit(|inputs| {
            inputs.flow_rate_gpm = 250.0;
            inputs.spp_psi = 2000.0;
        });

        let (snap, _) = session.snapshot();
        let expected = crate::engine::compute(&snap.inputs);
        assert_eq!(snap.derived, expected);
    }
}
