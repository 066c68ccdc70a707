use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use serde::Serialize;

use crate::structs::qr_request::CreatedQr;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SubmissionOutcome {
    Created(CreatedQr),
    Failed { message: String },
}

/// The outcome currently on display, with the submission it belongs to.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Published {
    pub sequence: u64,
    #[serde(flatten)]
    pub outcome: SubmissionOutcome,
}

/// Orders concurrent submissions.
///
/// Every submission takes a sequence number before its creation call. When
/// results come back out of order, a result older than the one on display is
/// dropped instead of overwriting it.
#[derive(Debug, Default)]
pub struct SubmissionLedger {
    next: AtomicU64,
    latest: Mutex<Option<Published>>,
}

impl SubmissionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strictly increasing, starting at 1.
    pub fn begin(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Returns false when a newer submission has already been published.
    pub fn publish(&self, sequence: u64, outcome: SubmissionOutcome) -> bool {
        let mut latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);

        if latest
            .as_ref()
            .is_some_and(|current| current.sequence > sequence)
        {
            return false;
        }

        *latest = Some(Published { sequence, outcome });
        true
    }

    pub fn latest(&self) -> Option<Published> {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
