//! Display cell contents.
//!
//! A plain [`Cell`] is either still loading or holds one value. The
//! internal IPv4 row is a [`CompositeCell`]: two slots filled by two
//! independent completions and rendered together, so the final text does
//! not depend on which completion arrived first.

use serde::{Deserialize, Serialize};

/// Content of a single-value cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "text", rename_all = "snake_case")]
pub enum Cell {
    #[default]
    Loading,
    Ready(String),
}

impl Cell {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn render(&self, placeholder: &str) -> String {
        match self {
            Self::Loading => placeholder.to_string(),
            Self::Ready(text) => text.clone(),
        }
    }
}

/// Two-slot cell: address first, hardware identifier second.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeCell {
    address: Option<String>,
    identifier: Option<String>,
}

impl CompositeCell {
    /// Replace the address slot. The identifier slot is left untouched.
    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = Some(address.into());
    }

    /// Replace the identifier slot. The address slot is left untouched.
    pub fn set_identifier(&mut self, identifier: impl Into<String>) {
        self.identifier = Some(identifier.into());
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub const fn is_loading(&self) -> bool {
        self.address.is_none() && self.identifier.is_none()
    }

    pub fn clear(&mut self) {
        self.address = None;
        self.identifier = None;
    }

    /// Render as `address + separator + "(MAC: identifier)"`.
    ///
    /// A missing address renders as the placeholder, so an identifier that
    /// arrives first reads `loading...      (MAC: ..)` until the address lands.
    pub fn render(&self, placeholder: &str, separator: &str) -> String {
        let address = self.address.as_deref().unwrap_or(placeholder);
        match &self.identifier {
            Some(id) => format!("{address}{separator}(MAC: {id})"),
            None => address.to_string(),
        }
    }
}
