// Copyright 2025 the Layline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Open, schema-free entity properties.

use alloc::collections::BTreeMap;
use alloc::string::String;

/// The open property mapping carried by every entity.
///
/// Keys are free-form; the engine never interprets them. A conveyor's
/// `"speed"` lives here, as does anything a future palette kind wants to
/// expose to the property editor.
pub type PropMap = BTreeMap<String, PropValue>;

/// An editable scalar property value.
///
/// The property editor round-trips these without schema enforcement: any
/// key may hold any variant, and replacing a value with a different variant
/// is legal.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropValue {
    /// A numeric value (e.g. a conveyor speed).
    Number(f64),
    /// A free-form text value.
    Text(String),
    /// A boolean toggle.
    Flag(bool),
}

impl PropValue {
    /// Returns the numeric value, if this is a [`PropValue::Number`].
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text value, if this is a [`PropValue::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the flag value, if this is a [`PropValue::Flag`].
    #[must_use]
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        Self::Text(String::from(s))
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}
