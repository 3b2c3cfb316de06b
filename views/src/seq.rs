//! Monotonic request sequencing for overlapping polls.
//!
//! Every request takes a fresh sequence number. A response is applied only
//! when its number is newer than the last applied one, so a slow response can
//! never overwrite state produced by a later request.

#[cfg(test)]
#[path = "seq_test.rs"]
mod seq_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq {
    issued: u64,
    applied: u64,
}

impl RequestSeq {
    /// Reserve the next sequence number for an outgoing request.
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Record a response; returns `false` when it is stale and must be dropped.
    pub fn accept(&mut self, seq: u64) -> bool {
        if seq <= self.applied || seq > self.issued {
            return false;
        }
        self.applied = seq;
        true
    }

    #[must_use]
    pub fn latest_issued(&self) -> u64 {
        self.issued
    }

    #[must_use]
    pub fn latest_applied(&self) -> u64 {
        self.applied
    }
}
