//! Connection catalog entities

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Unit in the connection hierarchy: a folder or a single connection.
///
/// Leaves (`is_folder == false`) carry a protocol. Folders may have zero
/// children. Forests are ordered and assumed acyclic; ownership makes
/// cycles unrepresentable here anyway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Display name (folder or connection label)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub is_folder: bool,
    /// Connection protocol tag, only meaningful on leaves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Child nodes; `null` and missing are both read as empty
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<Node>,
}

impl Node {
    /// Create a connection leaf.
    pub fn leaf(name: impl Into<String>, protocol: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            is_folder: false,
            protocol: Some(protocol.into()),
            children: Vec::new(),
        }
    }

    /// Create a folder holding `children`.
    pub fn folder(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            name: Some(name.into()),
            is_folder: true,
            protocol: None,
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        !self.is_folder
    }

    /// Exact, case-sensitive protocol comparison.
    pub fn has_protocol(&self, protocol: &str) -> bool {
        self.protocol.as_deref() == Some(protocol)
    }

    /// Label used when rendering the catalog.
    pub fn label(&self) -> String {
        match (&self.name, &self.protocol, self.is_folder) {
            (Some(name), _, true) => format!("{}/", name),
            (None, _, true) => "<folder>/".to_string(),
            (Some(name), Some(protocol), false) => format!("{} [{}]", name, protocol),
            (Some(name), None, false) => name.clone(),
            (None, Some(protocol), false) => format!("<connection> [{}]", protocol),
            (None, None, false) => "<connection>".to_string(),
        }
    }
}

/// Frees descendants from a work-list; the derived glue would recurse once
/// per nesting level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Protocols the dashboard reports separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Protocol {
    Rdp,
    Ssh,
    Vnc,
}

impl Protocol {
    pub const ALL: [Protocol; 3] = [Protocol::Rdp, Protocol::Ssh, Protocol::Vnc];

    /// Tag as it appears on catalog leaves.
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Rdp => "rdp",
            Protocol::Ssh => "ssh",
            Protocol::Vnc => "vnc",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Protocol::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unsupported protocol: {}", s))
    }
}
