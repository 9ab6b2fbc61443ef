// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier for one device, assigned by the transport/adapter
/// layer.
///
/// This is a wrapper around the transport-provided string handle that
/// provides a distinct type for device identification, preventing
/// accidental confusion with other string values. The library never
/// interprets its contents.
///
/// # Examples
///
/// ```
/// use bedjet_lib::event::DeviceId;
///
/// let id = DeviceId::new("hci0/dev_C4_22_90_01_02_03");
/// assert_eq!(id.as_str(), "hci0/dev_C4_22_90_01_02_03");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    /// Wraps a transport-assigned handle.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the handle as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeviceId({})", self.0)
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DeviceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for DeviceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for DeviceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_handle() {
        let id1 = DeviceId::new("adapter/dev_AA");
        let id2 = DeviceId::new("adapter/dev_AA");
        let id3 = DeviceId::new("adapter/dev_BB");
        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn display_and_debug() {
        let id = DeviceId::new("dev_AA");
        assert_eq!(id.to_string(), "dev_AA");
        assert_eq!(format!("{id:?}"), "DeviceId(dev_AA)");
    }

    #[test]
    fn hashable() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(DeviceId::new("dev_AA"));
        assert!(set.contains(&DeviceId::new("dev_AA")));
    }

    #[test]
    fn serde_is_transparent() {
        let json = serde_json::to_string(&DeviceId::new("dev_AA")).unwrap();
        assert_eq!(json, r#""dev_AA""#);
    }
}
