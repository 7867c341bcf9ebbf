//! Theme injection service
//!
//! Publishes the active palette as style variables. Runs once during
//! start-up, before anything reads the style-variable store; that ordering
//! is the caller's job.

use tracing::{debug, info, instrument};

use crate::domain::{ThemeName, ThemeRegistry};
use crate::infrastructure::style_store::GlobalStyles;
use crate::infrastructure::traits::StyleSink;

/// Writes the registry's active palette into a [`StyleSink`].
pub struct ThemeInjector<'a> {
    registry: &'a ThemeRegistry,
}

impl<'a> ThemeInjector<'a> {
    pub fn new(registry: &'a ThemeRegistry) -> Self {
        Self { registry }
    }

    /// Publish all 8 roles of the active palette under their well-known keys.
    ///
    /// An unregistered active name degrades to the default palette. Calling
    /// this again rewrites the same keys with the same values.
    /// Returns the theme that was actually applied.
    #[instrument(
        level = "debug",
        skip(self, sink),
        fields(requested = self.registry.active_name())
    )]
    pub fn inject(&self, sink: &mut dyn StyleSink) -> ThemeName {
        let (applied, palette) = self.registry.active();
        for (role, color) in palette.roles() {
            debug!("{} = {}", role.style_key(), color);
            sink.set_var(role.style_key(), color);
        }
        info!("applied theme '{}'", applied);
        applied
    }
}

/// Start-up hook: publish the active theme into the process-wide store.
pub fn inject_active_theme(registry: &ThemeRegistry) {
    ThemeInjector::new(registry).inject(&mut GlobalStyles);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ColorRole;
    use crate::infrastructure::style_store::StyleStore;

    #[test]
    fn given_dark_active_when_injecting_then_store_holds_dark_palette() {
        let registry = ThemeRegistry::builtin("dark").expect("builtin registry");
        let mut store = StyleStore::new();

        let applied = ThemeInjector::new(&registry).inject(&mut store);

        assert_eq!(applied, ThemeName::Dark);
        assert_eq!(store.len(), 8);
        assert_eq!(store.color(ColorRole::Primary), Some("#00bcd4"));
        assert_eq!(store.get("--background-color"), Some("#1e1e1e"));
    }

    #[test]
    fn given_unknown_active_when_injecting_then_default_palette_is_published() {
        let registry = ThemeRegistry::builtin("solarized").expect("builtin registry");
        let mut store = StyleStore::new();

        let applied = ThemeInjector::new(&registry).inject(&mut store);

        assert_eq!(applied, ThemeName::Default);
        assert_eq!(store.color(ColorRole::Text), Some("#333333"));
    }

    #[test]
    fn given_repeated_injection_when_comparing_then_store_is_unchanged() {
        let registry = ThemeRegistry::builtin("amazon").expect("builtin registry");
        let injector = ThemeInjector::new(&registry);
        let mut store = StyleStore::new();

        injector.inject(&mut store);
        let first = store.clone();
        injector.inject(&mut store);

        assert_eq!(store, first);
        assert_eq!(store.len(), 8);
    }
}
