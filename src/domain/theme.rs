//! Theme names, palettes and the theme registry
//!
//! The registry is built once from compiled-in palettes. Every palette is
//! checked for the full set of color roles when the registry is constructed,
//! so lookups afterwards cannot fail: an unknown name resolves to the
//! registry's default palette.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::domain::error::DomainError;
use crate::domain::palettes;

/// Theme selected when no configuration says otherwise.
pub const APP_THEME: ThemeName = ThemeName::Dark;

/// Entry used whenever a requested theme is not registered.
pub const DEFAULT_THEME: ThemeName = ThemeName::Default;

/// Known theme keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    Default,
    Twitter,
    Material,
    Bootstrap,
    Amazon,
    Dark,
}

impl ThemeName {
    pub const ALL: [ThemeName; 6] = [
        ThemeName::Default,
        ThemeName::Twitter,
        ThemeName::Material,
        ThemeName::Bootstrap,
        ThemeName::Amazon,
        ThemeName::Dark,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Default => "default",
            ThemeName::Twitter => "twitter",
            ThemeName::Material => "material",
            ThemeName::Bootstrap => "bootstrap",
            ThemeName::Amazon => "amazon",
            ThemeName::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = DomainError;

    /// Exact match on the lowercase key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| DomainError::UnknownTheme(s.to_string()))
    }
}

/// Named color slot of a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
    Info,
    Background,
    Text,
}

impl ColorRole {
    pub const ALL: [ColorRole; 8] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Success,
        ColorRole::Warning,
        ColorRole::Danger,
        ColorRole::Info,
        ColorRole::Background,
        ColorRole::Text,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Success => "success",
            ColorRole::Warning => "warning",
            ColorRole::Danger => "danger",
            ColorRole::Info => "info",
            ColorRole::Background => "background",
            ColorRole::Text => "text",
        }
    }

    /// Well-known style-variable key this role is published under.
    pub fn style_key(&self) -> &'static str {
        match self {
            ColorRole::Primary => "--primary-color",
            ColorRole::Secondary => "--secondary-color",
            ColorRole::Success => "--success-color",
            ColorRole::Warning => "--warning-color",
            ColorRole::Danger => "--danger-color",
            ColorRole::Info => "--info-color",
            ColorRole::Background => "--background-color",
            ColorRole::Text => "--text-color",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Palette as declared, before the role check.
///
/// Roles are stored sparsely; a missing role is only reported by [`Palette::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPalette {
    colors: BTreeMap<ColorRole, String>,
}

impl RawPalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(role, color)` pairs; later pairs win.
    pub fn from_pairs(pairs: &[(ColorRole, &str)]) -> Self {
        let colors = pairs
            .iter()
            .map(|(role, color)| (*role, color.to_string()))
            .collect();
        Self { colors }
    }

    pub fn with(mut self, role: ColorRole, color: impl Into<String>) -> Self {
        self.colors.insert(role, color.into());
        self
    }

    pub fn get(&self, role: ColorRole) -> Option<&str> {
        self.colors.get(&role).map(String::as_str)
    }
}

/// Complete palette: one non-empty color string for each of the 8 roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub success: String,
    pub warning: String,
    pub danger: String,
    pub info: String,
    pub background: String,
    pub text: String,
}

impl Palette {
    /// Check that every role is present and non-blank.
    pub fn validate(theme: &str, raw: &RawPalette) -> Result<Self, DomainError> {
        let take = |role: ColorRole| -> Result<String, DomainError> {
            raw.get(role)
                .map(str::trim)
                .filter(|color| !color.is_empty())
                .map(str::to_string)
                .ok_or_else(|| DomainError::IncompletePalette {
                    theme: theme.to_string(),
                    role,
                })
        };

        Ok(Self {
            primary: take(ColorRole::Primary)?,
            secondary: take(ColorRole::Secondary)?,
            success: take(ColorRole::Success)?,
            warning: take(ColorRole::Warning)?,
            danger: take(ColorRole::Danger)?,
            info: take(ColorRole::Info)?,
            background: take(ColorRole::Background)?,
            text: take(ColorRole::Text)?,
        })
    }

    pub fn get(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Success => &self.success,
            ColorRole::Warning => &self.warning,
            ColorRole::Danger => &self.danger,
            ColorRole::Info => &self.info,
            ColorRole::Background => &self.background,
            ColorRole::Text => &self.text,
        }
    }

    /// Roles with their colors, in declaration order.
    pub fn roles(&self) -> impl Iterator<Item = (ColorRole, &str)> + '_ {
        ColorRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }
}

/// Immutable mapping from theme name to palette, with a default entry and
/// the configured active selection.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    palettes: BTreeMap<ThemeName, Palette>,
    default: ThemeName,
    fallback: Palette,
    /// Requested name, kept verbatim so a misconfiguration is visible
    active: String,
}

impl ThemeRegistry {
    /// Validate and freeze `entries`.
    ///
    /// Fails if a palette lacks a role, a name repeats, or `default` has no entry.
    #[instrument(level = "debug", skip(entries))]
    pub fn new<I>(entries: I, default: ThemeName, active: &str) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (ThemeName, RawPalette)>,
    {
        let mut palettes = BTreeMap::new();
        for (name, raw) in entries {
            let palette = Palette::validate(name.as_str(), &raw)?;
            if palettes.insert(name, palette).is_some() {
                return Err(DomainError::DuplicateTheme(name));
            }
        }
        let fallback = palettes
            .get(&default)
            .cloned()
            .ok_or(DomainError::MissingDefault(default))?;
        debug!("registered {} themes", palettes.len());

        Ok(Self {
            palettes,
            default,
            fallback,
            active: active.to_string(),
        })
    }

    /// Registry with the compiled-in palettes and `active` selected.
    pub fn builtin(active: &str) -> Result<Self, DomainError> {
        Self::new(palettes::builtin(), DEFAULT_THEME, active)
    }

    /// Palette for `name`, or the default palette if `name` is not registered.
    pub fn resolve(&self, name: &str) -> &Palette {
        self.resolve_named(name).1
    }

    /// Like [`resolve`](Self::resolve), also reporting which entry was used.
    pub fn resolve_named(&self, name: &str) -> (ThemeName, &Palette) {
        match self.lookup(name) {
            Ok(found) => found,
            Err(e) => {
                warn!("{}; falling back to '{}'", e, self.default);
                (self.default, self.default_palette())
            }
        }
    }

    /// Strict lookup without fallback.
    pub fn lookup(&self, name: &str) -> Result<(ThemeName, &Palette), DomainError> {
        let theme = name.parse::<ThemeName>()?;
        self.palettes
            .get(&theme)
            .map(|palette| (theme, palette))
            .ok_or_else(|| DomainError::UnknownTheme(name.to_string()))
    }

    pub fn default_name(&self) -> ThemeName {
        self.default
    }

    pub fn default_palette(&self) -> &Palette {
        &self.fallback
    }

    /// The configured selection as requested.
    pub fn active_name(&self) -> &str {
        &self.active
    }

    pub fn active(&self) -> (ThemeName, &Palette) {
        self.resolve_named(&self.active)
    }

    pub fn names(&self) -> impl Iterator<Item = ThemeName> + '_ {
        self.palettes.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ThemeName, &Palette)> + '_ {
        self.palettes.iter().map(|(name, palette)| (*name, palette))
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}
