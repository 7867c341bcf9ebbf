//! Access tickets and their per-user classification

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Record identifier as delivered by the backend (integer key or string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(u64),
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{}", n),
            Id::Text(s) => f.write_str(s),
        }
    }
}

/// Digits parse as a numeric key, anything else stays text.
impl FromStr for Id {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<u64>()
            .map(Id::Number)
            .unwrap_or_else(|_| Id::Text(s.to_string())))
    }
}

impl From<u64> for Id {
    fn from(value: u64) -> Self {
        Id::Number(value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Id::Text(value.to_string())
    }
}

/// Reference to a user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub id: Id,
}

/// Access ticket: `user` is the holder, `author` the user who issued it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    pub user: Reference,
    pub author: Reference,
}

impl Ticket {
    pub fn new(user: impl Into<Id>, author: impl Into<Id>) -> Self {
        Self {
            id: None,
            user: Reference { id: user.into() },
            author: Reference { id: author.into() },
        }
    }

    fn is_self_issued(&self) -> bool {
        self.user.id == self.author.id
    }
}

/// Tickets held by `user`.
pub fn personal(tickets: &[Ticket], user: &Id) -> usize {
    tickets.iter().filter(|t| &t.user.id == user).count()
}

/// Tickets held by `user` that someone else issued.
pub fn received(tickets: &[Ticket], user: &Id) -> usize {
    tickets
        .iter()
        .filter(|t| &t.user.id == user && !t.is_self_issued())
        .count()
}

/// Tickets `user` issued to someone else.
pub fn shared(tickets: &[Ticket], user: &Id) -> usize {
    tickets
        .iter()
        .filter(|t| &t.author.id == user && !t.is_self_issued())
        .count()
}

/// Ticket figures for one user. The categories overlap: every received
/// ticket is also personal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TicketCounts {
    pub personal: usize,
    pub received: usize,
    pub shared: usize,
}

impl TicketCounts {
    pub fn classify(tickets: &[Ticket], user: &Id) -> Self {
        Self {
            personal: personal(tickets, user),
            received: received(tickets, user),
            shared: shared(tickets, user),
        }
    }
}
