// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device event types.

use serde::Serialize;

use crate::protocol::DeviceStatus;

use super::DeviceId;

/// Events published on the [`EventBus`](super::EventBus).
///
/// Lifecycle variants are pass-throughs from the adapter layer's device
/// list; the library relays them without interpreting membership
/// semantics. `StatusUpdated` is published by a
/// [`DeviceSession`](crate::session::DeviceSession) for every
/// successfully decoded status frame.
///
/// Events for one device arrive strictly in order; ordering across
/// devices is unspecified.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum DeviceEvent {
    /// A device advertising the BedJet service was discovered.
    Discovered {
        /// The transport-assigned device handle.
        device_id: DeviceId,
        /// Advertised name, if one was seen.
        name: Option<String>,
    },

    /// A device connected.
    Connected {
        /// The transport-assigned device handle.
        device_id: DeviceId,
        /// Advertised name, if one was seen.
        name: Option<String>,
    },

    /// A device disconnected.
    Disconnected {
        /// The transport-assigned device handle.
        device_id: DeviceId,
        /// Advertised name, if one was seen.
        name: Option<String>,
    },

    /// A device published a new status snapshot.
    ///
    /// Emitted for every decoded frame; the session does not diff or
    /// debounce.
    StatusUpdated {
        /// The transport-assigned device handle.
        device_id: DeviceId,
        /// The freshly decoded status.
        status: DeviceStatus,
    },
}

impl DeviceEvent {
    /// Returns the device ID associated with this event.
    #[must_use]
    pub fn device_id(&self) -> &DeviceId {
        match self {
            Self::Discovered { device_id, .. }
            | Self::Connected { device_id, .. }
            | Self::Disconnected { device_id, .. }
            | Self::StatusUpdated { device_id, .. } => device_id,
        }
    }

    /// Returns `true` if this is a device-list lifecycle event.
    #[must_use]
    pub fn is_lifecycle(&self) -> bool {
        !matches!(self, Self::StatusUpdated { .. })
    }

    /// Returns `true` if this is a status update.
    #[must_use]
    pub fn is_status_update(&self) -> bool {
        matches!(self, Self::StatusUpdated { .. })
    }

    /// Creates a discovered event.
    #[must_use]
    pub fn discovered(device_id: DeviceId, name: Option<String>) -> Self {
        Self::Discovered { device_id, name }
    }

    /// Creates a connected event.
    #[must_use]
    pub fn connected(device_id: DeviceId, name: Option<String>) -> Self {
        Self::Connected { device_id, name }
    }

    /// Creates a disconnected event.
    #[must_use]
    pub fn disconnected(device_id: DeviceId, name: Option<String>) -> Self {
        Self::Disconnected { device_id, name }
    }

    /// Creates a status updated event.
    #[must_use]
    pub fn status_updated(device_id: DeviceId, status: DeviceStatus) -> Self {
        Self::StatusUpdated { device_id, status }
    }
}
