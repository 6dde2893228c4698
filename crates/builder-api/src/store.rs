//! Mutex-guarded holder of the current slot attributes.

use crate::error::{BuilderApiError, Result};
use crate::ports::ChainReader;
use builder_types::SlotAttributes;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Outcome of offering a candidate record to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotAdmission {
    /// The candidate became the current record.
    Accepted,

    /// The candidate's slot was not strictly greater than the current one;
    /// it was discarded silently. Not an error.
    Stale,
}

/// Owns the single current [`SlotAttributes`] record.
///
/// Admission policy: a candidate is accepted only if its slot is strictly
/// greater than the current one **and** its head block exists in local
/// chain state. The "no record yet" state is the explicit `None`, not a
/// sentinel slot value. All critical sections are copy-in/copy-out; the
/// lock is never held across the chain lookup.
pub struct SlotAttributeStore {
    chain: Arc<dyn ChainReader>,
    current: Mutex<Option<SlotAttributes>>,
}

impl SlotAttributeStore {
    /// Create an empty store backed by the given chain lookup.
    pub fn new(chain: Arc<dyn ChainReader>) -> Self {
        Self { chain, current: Mutex::new(None) }
    }

    /// Offer a candidate record.
    ///
    /// Stale candidates (slot not strictly greater) are discarded silently.
    /// Candidates whose head block is unknown locally are rejected with
    /// [`BuilderApiError::UnknownParentBlock`] and leave the current record
    /// untouched.
    pub async fn accept(&self, candidate: SlotAttributes) -> Result<SlotAdmission> {
        if !self.advances_current_slot(candidate.slot) {
            debug!(
                slot = candidate.slot,
                "[builder-api] stale slot attributes discarded"
            );
            return Ok(SlotAdmission::Stale);
        }

        let parent = self.chain.block_by_hash(candidate.head_hash).await?;
        if parent.is_none() {
            return Err(BuilderApiError::UnknownParentBlock { head_hash: candidate.head_hash });
        }

        let mut current = self.current.lock().unwrap();
        // The lookup awaited with the lock released; another update may have
        // advanced the slot in the meantime.
        match current.as_ref() {
            Some(existing) if candidate.slot <= existing.slot => Ok(SlotAdmission::Stale),
            _ => {
                debug!(
                    slot = candidate.slot,
                    head_hash = ?candidate.head_hash,
                    "[builder-api] slot attributes updated"
                );
                *current = Some(candidate);
                Ok(SlotAdmission::Accepted)
            }
        }
    }

    /// Snapshot of the current record, if any.
    pub fn current(&self) -> Option<SlotAttributes> {
        self.current.lock().unwrap().clone()
    }

    /// Slot of the current record, if any.
    pub fn current_slot(&self) -> Option<u64> {
        self.current.lock().unwrap().as_ref().map(|attrs| attrs.slot)
    }

    fn advances_current_slot(&self, candidate_slot: u64) -> bool {
        match *self.current.lock().unwrap() {
            Some(ref existing) => candidate_slot > existing.slot,
            None => true,
        }
    }
}
