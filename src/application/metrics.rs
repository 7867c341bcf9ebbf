//! Figures shown on the dashboard overview

use serde::Serialize;

use crate::domain::{ConnectionStats, Id, Node, Ticket, TicketCounts};

/// Everything one dashboard render needs, computed in one place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardMetrics {
    pub connections: ConnectionStats,
    pub tickets: TicketCounts,
}

impl DashboardMetrics {
    pub fn compute(connections: &[Node], tickets: &[Ticket], user: &Id) -> Self {
        Self {
            connections: ConnectionStats::from_forest(connections),
            tickets: TicketCounts::classify(tickets, user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_catalog_and_tickets_when_computing_then_combines_both() {
        let catalog = vec![Node::folder(
            "lab",
            vec![Node::leaf("a", "ssh"), Node::leaf("b", "rdp")],
        )];
        let tickets = vec![Ticket::new(5u64, 6u64)];

        let metrics = DashboardMetrics::compute(&catalog, &tickets, &Id::Number(6));

        assert_eq!(metrics.connections.total, 2);
        assert_eq!(metrics.connections.ssh, 1);
        assert_eq!(metrics.tickets.shared, 1);
        assert_eq!(metrics.tickets.personal, 0);
    }

    #[test]
    fn given_nothing_when_computing_then_all_zero() {
        let metrics = DashboardMetrics::compute(&[], &[], &Id::Number(1));
        assert_eq!(metrics, DashboardMetrics::default());
    }
}
