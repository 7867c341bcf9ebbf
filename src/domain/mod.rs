//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod aggregate;
pub mod error;
pub mod node;
mod palettes;
pub mod theme;
pub mod ticket;

pub use aggregate::{count, count_leaves, count_matching, count_protocol, ConnectionStats};
pub use error::DomainError;
pub use node::{Node, Protocol};
pub use theme::{
    ColorRole, Palette, RawPalette, ThemeName, ThemeRegistry, APP_THEME, DEFAULT_THEME,
};
pub use ticket::{Id, Reference, Ticket, TicketCounts};
