//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, StyleSink)
//! but are themselves concrete structs, not traits.

mod dashboard;
mod theme;

pub use dashboard::DashboardService;
pub use theme::{inject_active_theme, ThemeInjector};
