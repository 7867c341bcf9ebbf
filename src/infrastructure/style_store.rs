//! Style-variable store
//!
//! Lifecycle of the process-wide store:
//! 1. empty at process start
//! 2. populated once by the theme injector during start-up
//! 3. read-only for the rest of the run
//!
//! Presentation code should receive a [`StyleStore`] snapshot by reference
//! (see [`snapshot`]) instead of reading the global directly.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io;
use std::path::Path;
use std::sync::{PoisonError, RwLock};

use crate::domain::ColorRole;
use crate::infrastructure::traits::{FileSystem, StyleSink};

static STYLE_VARIABLES: RwLock<StyleStore> = RwLock::new(StyleStore::new());

/// Key-value mapping from style-variable names to color strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleStore {
    vars: BTreeMap<String, String>,
}

impl StyleStore {
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Value published for `role`, if any.
    pub fn color(&self, role: ColorRole) -> Option<&str> {
        self.get(role.style_key())
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as a `:root` declaration block.
    ///
    /// Role keys come first in role order, any other keys after them sorted.
    pub fn to_css(&self) -> String {
        let role_keys: Vec<&str> = ColorRole::ALL.iter().map(|r| r.style_key()).collect();
        let ordered = role_keys
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .chain(self.iter().filter(|(key, _)| !role_keys.contains(key)));

        let mut css = String::from(":root {\n");
        for (key, value) in ordered {
            let _ = writeln!(css, "    {}: {};", key, value);
        }
        css.push_str("}\n");
        css
    }

    /// Write the [`to_css`](Self::to_css) rendering to `path`.
    pub fn write_css(&self, fs: &dyn FileSystem, path: &Path) -> io::Result<()> {
        fs.write(path, &self.to_css())
    }
}

impl StyleSink for StyleStore {
    fn set_var(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }
}

/// Writer handle for the process-wide store.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobalStyles;

impl StyleSink for GlobalStyles {
    fn set_var(&mut self, key: &str, value: &str) {
        STYLE_VARIABLES
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set_var(key, value);
    }
}

/// Copy of the process-wide store as it is now.
pub fn snapshot() -> StyleStore {
    STYLE_VARIABLES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Read one variable from the process-wide store.
pub fn global_var(key: &str) -> Option<String> {
    STYLE_VARIABLES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(key)
        .map(str::to_string)
}
