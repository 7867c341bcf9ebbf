//! Dashboard metrics service
//!
//! Loads the connection catalog and ticket list exported by the backend
//! (JSON) and computes the overview figures.

use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::application::error_ext::{IoResultExt, JsonResultExt};
use crate::application::metrics::DashboardMetrics;
use crate::application::ApplicationResult;
use crate::domain::{self, ConnectionStats, Id, Node, Ticket, TicketCounts};
use crate::infrastructure::traits::FileSystem;

/// Service for computing dashboard figures from exported data.
pub struct DashboardService {
    fs: Arc<dyn FileSystem>,
}

impl DashboardService {
    /// Create a new dashboard service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Read a connection forest. A `null` document is an empty catalog.
    #[instrument(level = "debug", skip(self))]
    pub fn load_catalog(&self, path: &Path) -> ApplicationResult<Vec<Node>> {
        let nodes: Option<Vec<Node>> = self.load_json(path, "read catalog")?;
        let nodes = nodes.unwrap_or_default();
        debug!("load_catalog: {} root nodes", nodes.len());
        Ok(nodes)
    }

    /// Read a ticket list. A `null` document is an empty list.
    #[instrument(level = "debug", skip(self))]
    pub fn load_tickets(&self, path: &Path) -> ApplicationResult<Vec<Ticket>> {
        let tickets: Option<Vec<Ticket>> = self.load_json(path, "read tickets")?;
        let tickets = tickets.unwrap_or_default();
        debug!("load_tickets: {} tickets", tickets.len());
        Ok(tickets)
    }

    /// Total, RDP, SSH and VNC connection counts for a catalog file.
    pub fn connection_stats(&self, catalog: &Path) -> ApplicationResult<ConnectionStats> {
        let nodes = self.load_catalog(catalog)?;
        Ok(ConnectionStats::from_forest(&nodes))
    }

    /// Count connections in a catalog file, optionally for one protocol only.
    pub fn count_connections(
        &self,
        catalog: &Path,
        protocol: Option<&str>,
    ) -> ApplicationResult<usize> {
        let nodes = self.load_catalog(catalog)?;
        Ok(match protocol {
            Some(protocol) => domain::count_protocol(&nodes, protocol),
            None => domain::count_leaves(&nodes),
        })
    }

    /// Ticket figures for `user`.
    pub fn ticket_counts(&self, tickets: &Path, user: &Id) -> ApplicationResult<TicketCounts> {
        let tickets = self.load_tickets(tickets)?;
        Ok(TicketCounts::classify(&tickets, user))
    }

    /// Full overview for one user.
    #[instrument(level = "debug", skip(self))]
    pub fn metrics(
        &self,
        catalog: &Path,
        tickets: &Path,
        user: &Id,
    ) -> ApplicationResult<DashboardMetrics> {
        let nodes = self.load_catalog(catalog)?;
        let tickets = self.load_tickets(tickets)?;
        Ok(DashboardMetrics::compute(&nodes, &tickets, user))
    }

    fn load_json<T: DeserializeOwned>(&self, path: &Path, action: &str) -> ApplicationResult<T> {
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context(action, path)?;
        from_json_unbounded(&content).with_parse_context(path)
    }
}

/// Decode without serde_json's nesting limit. Catalog depth is unbounded, so
/// the stack is grown on demand instead.
fn from_json_unbounded<T: DeserializeOwned>(content: &str) -> serde_json::Result<T> {
    let mut de = serde_json::Deserializer::from_str(content);
    de.disable_recursion_limit();
    let value: T = serde::Deserialize::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}
