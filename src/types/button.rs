// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Physical-button-equivalent press codes.

use serde::{Deserialize, Serialize};
use strum::FromRepr;

/// A physical-button-equivalent press the device accepts as a command.
///
/// Discriminants are the wire values carried in the button command frame.
/// The low codes mirror the buttons on the handheld remote; codes from
/// `0x42` upward are maintenance operations with no physical counterpart.
///
/// # Examples
///
/// ```
/// use bedjet_lib::types::ButtonCode;
///
/// assert_eq!(ButtonCode::Cool.code(), 0x02);
/// assert_eq!(ButtonCode::from_wire(0x04), Some(ButtonCode::Turbo));
/// ```
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, Serialize, Deserialize)]
pub enum ButtonCode {
    /// Stop the current program and return to standby.
    Stop = 0x01,
    /// Enter cool mode.
    Cool = 0x02,
    /// Enter normal heat mode.
    Heat = 0x03,
    /// Enter turbo heat mode.
    Turbo = 0x04,
    /// Enter dry mode.
    Dry = 0x05,
    /// Enter extended heat mode.
    ExternalHeat = 0x06,
    /// Increase fan speed by one step.
    FanUp = 0x10,
    /// Decrease fan speed by one step.
    FanDown = 0x11,
    /// Raise the target temperature by 1 °C.
    TempUp1C = 0x12,
    /// Lower the target temperature by 1 °C.
    TempDown1C = 0x13,
    /// Raise the target temperature by 1 °F.
    TempUp1F = 0x14,
    /// Lower the target temperature by 1 °F.
    TempDown1F = 0x15,
    /// Recall memory preset 1.
    Memory1Recall = 0x20,
    /// Recall memory preset 2.
    Memory2Recall = 0x21,
    /// Recall memory preset 3.
    Memory3Recall = 0x22,
    /// Store the current settings as memory preset 1.
    Memory1Store = 0x28,
    /// Store the current settings as memory preset 2.
    Memory2Store = 0x29,
    /// Store the current settings as memory preset 3.
    Memory3Store = 0x2a,
    /// Start a Wi-Fi connection test.
    StartConnectionTest = 0x42,
    /// Start a firmware update.
    StartFirmwareUpdate = 0x43,
    /// Enter low power mode.
    SetLowPowerMode = 0x44,
    /// Return to normal power mode.
    SetNormalPowerMode = 0x45,
    /// Enable the ring-of-light indicator.
    EnableRingOfLight = 0x46,
    /// Disable the ring-of-light indicator.
    DisableRingOfLight = 0x47,
    /// Mute the beeper.
    MuteBeeper = 0x48,
    /// Unmute the beeper.
    UnmuteBeeper = 0x49,
    /// Reset the device to factory settings.
    ResetToFactorySettings = 0x4c,
    /// Enable the Wi-Fi/BT radio.
    EnableWiFiBT = 0x4d,
    /// Disable the Wi-Fi/BT radio.
    DisableWiFiBT = 0x4e,
    /// Mark initial configuration as complete.
    SetConfigCompleteFlag = 0x4f,
}

impl ButtonCode {
    /// Returns the wire byte for this button.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Maps a wire byte to a button code.
    ///
    /// Returns `None` for bytes outside the closed enumeration.
    #[must_use]
    pub fn from_wire(byte: u8) -> Option<Self> {
        Self::from_repr(byte)
    }
}
