// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The transport seam.
//!
//! All I/O lives behind this trait: the library encodes and plans, the
//! integrator's BLE stack moves bytes. The characteristics to write and
//! subscribe to are listed in [`protocol::uuids`](crate::protocol::uuids).

use async_trait::async_trait;

use crate::error::TransportError;

/// One device's outbound byte channel.
///
/// Implementations write the frame to the device's command
/// characteristic with GATT write-without-response semantics. No
/// application-level acknowledgement is expected; confirmation arrives
/// asynchronously as a status frame.
///
/// A [`DeviceSession`](super::DeviceSession) calls `send_frame` from a
/// single writer task, so implementations do not need to handle
/// concurrent sends for the same device.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Writes one encoded command frame to the device.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the peripheral is unreachable or
    /// the write fails. The session surfaces the error to the submitting
    /// caller and does not retry.
    async fn send_frame(&self, frame: &[u8]) -> Result<(), TransportError>;
}
