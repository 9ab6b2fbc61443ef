// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Firmware update progress codes.

use serde::{Deserialize, Serialize};
use strum::FromRepr;

/// Firmware-update progress, as reported in every status frame.
///
/// Codes below 20 are in-progress states; codes from 20 upward are
/// terminal results of the last attempt.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, Serialize, Deserialize)]
pub enum UpdateStatus {
    /// No update activity.
    Idle = 0,
    /// Update sequence starting.
    Starting = 1,
    /// Connecting to the configured access point.
    ConnectingToAp = 2,
    /// Got an IP address.
    GotIpAddress = 3,
    /// Checking internet connectivity.
    CheckingConnection = 4,
    /// Checking the update server for a newer firmware.
    CheckingForUpdate = 5,
    /// Downloading and flashing.
    Updating = 6,
    /// Restarting after a successful update.
    Restarting = 7,
    /// No Wi-Fi credentials are configured.
    NoWifiConfig = 20,
    /// Could not associate with the access point.
    UnableToConnect = 21,
    /// DHCP did not assign an address.
    DhcpFailure = 22,
    /// The update server was unreachable.
    UnableToContactServer = 23,
    /// Connection test passed.
    ConnectionTestOk = 24,
    /// Connection test failed.
    ConnectionTestFailed = 25,
    /// Firmware is already current.
    NoUpdateNeeded = 26,
    /// The Wi-Fi/BT radio is disabled.
    RadioDisabled = 27,
    /// Restarting the remote terminal.
    RestartingTerminal = 28,
    /// The update attempt failed.
    UpdateFailed = 29,
}

impl UpdateStatus {
    /// Maps a wire byte to an update status.
    #[must_use]
    pub fn from_wire(byte: u8) -> Option<Self> {
        Self::from_repr(byte)
    }

    /// Returns `true` if an update or connection test is in progress.
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(
            self,
            Self::Starting
                | Self::ConnectingToAp
                | Self::GotIpAddress
                | Self::CheckingConnection
                | Self::CheckingForUpdate
                | Self::Updating
                | Self::Restarting
        )
    }

    /// Returns `true` if the last attempt ended in failure.
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(
            self,
            Self::NoWifiConfig
                | Self::UnableToConnect
                | Self::DhcpFailure
                | Self::UnableToContactServer
                | Self::ConnectionTestFailed
                | Self::UpdateFailed
        )
    }
}
