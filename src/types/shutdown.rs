// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Last-shutdown reason codes.

use serde::{Deserialize, Serialize};
use strum::FromRepr;

/// Why the device last shut itself down, as reported in every status
/// frame.
///
/// Anything other than [`Normal`](Self::Normal) or
/// [`HeaterPowerStandby`](Self::HeaterPowerStandby) indicates a safety
/// trip.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, Serialize, Deserialize)]
pub enum ShutdownCode {
    /// Clean shutdown (timer expiry or user stop).
    Normal = 0,
    /// The temperature ADC returned an invalid reading.
    InvalidAdc = 1,
    /// The thermistor stopped tracking the heater.
    ThermistorTrackingError = 2,
    /// Fast over-temperature protection tripped.
    FastOverTempTrip = 3,
    /// Slow over-temperature protection tripped.
    SlowOverTempTrip = 4,
    /// The fan stalled or failed.
    FanFailure = 5,
    /// The heater power supply entered standby.
    HeaterPowerStandby = 6,
    /// The extender hose thermal protection tripped.
    ExtenderThermalTrip = 7,
}

impl ShutdownCode {
    /// Maps a wire byte to a shutdown code.
    #[must_use]
    pub fn from_wire(byte: u8) -> Option<Self> {
        Self::from_repr(byte)
    }

    /// Returns `true` if this code indicates a safety trip.
    #[must_use]
    pub const fn is_fault(self) -> bool {
        !matches!(self, Self::Normal | Self::HeaterPowerStandby)
    }
}
