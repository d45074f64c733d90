//! Request Sequencing
//!
//! Every fetch that ends in a render takes a ticket. Only the holder of the
//! latest ticket may apply its results, so a slow response can never
//! overwrite the grid after a newer action already did.

/// Identifies one fetch-then-render action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Monotonic ticket counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    /// Issue a new ticket, superseding all earlier ones
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let mut seq = RequestSequence::default();
        let first = seq.begin();
        assert!(seq.is_current(first));

        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_out_of_order_resolution() {
        // filter click, then search; the filter response arrives last
        let mut seq = RequestSequence::default();
        let filter = seq.begin();
        let search = seq.begin();

        assert!(seq.is_current(search));
        assert!(!seq.is_current(filter));
    }

    #[test]
    fn test_tickets_are_distinct() {
        let mut seq = RequestSequence::default();
        let tickets: Vec<_> = (0..5).map(|_| seq.begin()).collect();
        for (i, a) in tickets.iter().enumerate() {
            for b in &tickets[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
