//! Compiled-in palettes

use crate::domain::theme::{ColorRole, RawPalette, ThemeName};

use ColorRole::*;

const DEFAULT: &[(ColorRole, &str)] = &[
    (Primary, "#2185d0"),
    (Secondary, "#1b1c1d"),
    (Success, "#21ba45"),
    (Warning, "#f2711c"),
    (Danger, "#db2828"),
    (Info, "#00b5ad"),
    (Background, "#ffffff"),
    (Text, "#333333"),
];

const TWITTER: &[(ColorRole, &str)] = &[
    (Primary, "#1da1f2"),
    (Secondary, "#14171a"),
    (Success, "#17bf63"),
    (Warning, "#ffad1f"),
    (Danger, "#e0245e"),
    (Info, "#794bc4"),
    (Background, "#f5f8fa"),
    (Text, "#14171a"),
];

const MATERIAL: &[(ColorRole, &str)] = &[
    (Primary, "#4285f4"),
    (Secondary, "#34a853"),
    (Success, "#34a853"),
    (Warning, "#fbbc05"),
    (Danger, "#ea4335"),
    (Info, "#4285f4"),
    (Background, "#fafafa"),
    (Text, "#3c4043"),
];

const BOOTSTRAP: &[(ColorRole, &str)] = &[
    (Primary, "#007bff"),
    (Secondary, "#6c757d"),
    (Success, "#28a745"),
    (Warning, "#ffc107"),
    (Danger, "#dc3545"),
    (Info, "#17a2b8"),
    (Background, "#f8f9fa"),
    (Text, "#212529"),
];

const AMAZON: &[(ColorRole, &str)] = &[
    (Primary, "#ff9900"),
    (Secondary, "#146eb4"),
    (Success, "#00a650"),
    (Warning, "#ff8c00"),
    (Danger, "#e47911"),
    (Info, "#146eb4"),
    (Background, "#ffffff"),
    (Text, "#111111"),
];

// Secondary doubles as the card background in dark mode
const DARK: &[(ColorRole, &str)] = &[
    (Primary, "#00bcd4"),
    (Secondary, "#2d2d2d"),
    (Success, "#4caf50"),
    (Warning, "#ff9800"),
    (Danger, "#f44336"),
    (Info, "#03a9f4"),
    (Background, "#1e1e1e"),
    (Text, "#f0f0f0"),
];

/// Every built-in theme, unvalidated.
pub fn builtin() -> Vec<(ThemeName, RawPalette)> {
    ThemeName::ALL
        .into_iter()
        .map(|name| (name, RawPalette::from_pairs(colors(name))))
        .collect()
}

fn colors(name: ThemeName) -> &'static [(ColorRole, &'static str)] {
    match name {
        ThemeName::Default => DEFAULT,
        ThemeName::Twitter => TWITTER,
        ThemeName::Material => MATERIAL,
        ThemeName::Bootstrap => BOOTSTRAP,
        ThemeName::Amazon => AMAZON,
        ThemeName::Dark => DARK,
    }
}
