//! Sequencing of in-flight requests so only the newest response is applied.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn number(self) -> u64 {
        self.0
    }
}

/// Hands out increasing tickets; a response is current only if it carries
/// the last ticket issued.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }

    pub fn latest(&self) -> Option<RequestTicket> {
        (self.latest > 0).then_some(RequestTicket(self.latest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superseded_ticket_is_stale() {
        let mut seq = RequestSequencer::new();
        assert_eq!(seq.latest(), None);
        let first = seq.issue();
        assert!(seq.is_latest(first));
        let second = seq.issue();
        assert!(!seq.is_latest(first));
        assert!(seq.is_latest(second));
        assert!(second > first);
        assert_eq!(seq.latest(), Some(second));
    }
}
