//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::theme::{ColorRole, ThemeName};

/// Domain errors represent business logic violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Requested theme name is not registered.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("theme '{theme}' is missing color role '{role}'")]
    IncompletePalette { theme: String, role: ColorRole },

    #[error("theme registered twice: {0}")]
    DuplicateTheme(ThemeName),

    #[error("default theme not registered: {0}")]
    MissingDefault(ThemeName),
}
