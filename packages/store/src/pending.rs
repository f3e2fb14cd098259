//! Re-entrancy guard for simulated round-trips.
//!
//! While a boundary call for a logical action is outstanding, the same action
//! must not be started again. Views disable their controls too, but the guard is
//! what the controller relies on.

use std::collections::HashSet;

/// One logical action that may be in flight.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PendingKey {
    Authenticate,
    SubmitForm,
    ExtractResume,
    SubmitApplication(u32),
    DownloadTemplate(u32),
    Subscribe,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PendingActions {
    in_flight: HashSet<PendingKey>,
}

impl PendingActions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` as in flight. Returns `false` if it already was.
    pub fn try_begin(&mut self, key: PendingKey) -> bool {
        self.in_flight.insert(key)
    }

    pub fn finish(&mut self, key: &PendingKey) {
        self.in_flight.remove(key);
    }

    pub fn is_pending(&self, key: &PendingKey) -> bool {
        self.in_flight.contains(key)
    }

    /// Abandon everything in flight.
    pub fn clear(&mut self) {
        self.in_flight.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_begin_is_rejected_until_finish() {
        let mut pending = PendingActions::new();
        assert!(pending.try_begin(PendingKey::Authenticate));
        assert!(!pending.try_begin(PendingKey::Authenticate));
        assert!(pending.is_pending(&PendingKey::Authenticate));

        pending.finish(&PendingKey::Authenticate);
        assert!(!pending.is_pending(&PendingKey::Authenticate));
        assert!(pending.try_begin(PendingKey::Authenticate));
    }

    #[test]
    fn test_keys_are_independent() {
        let mut pending = PendingActions::new();
        assert!(pending.try_begin(PendingKey::SubmitApplication(1)));
        assert!(pending.try_begin(PendingKey::SubmitApplication(2)));
        assert!(!pending.try_begin(PendingKey::SubmitApplication(1)));
        pending.finish(&PendingKey::SubmitApplication(1));
        assert!(pending.is_pending(&PendingKey::SubmitApplication(2)));
    }
}
