//! Infrastructure layer: I/O implementations and DI container
//!
//! This layer implements I/O boundary traits, owns the process-wide
//! style-variable store, and wires up services.

pub mod di;
pub mod error;
pub mod style_store;
pub mod traits;

pub use error::InfraError;
pub use style_store::StyleStore;
