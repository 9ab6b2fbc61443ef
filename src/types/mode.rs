// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating mode types.
//!
//! The device reports exactly one operating mode at a time, and the mode
//! determines which temperature band and which controls are legal.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::FromRepr;

/// The device's current operating state.
///
/// Discriminants are the wire values reported in the mode byte of a
/// status frame.
///
/// # Examples
///
/// ```
/// use bedjet_lib::types::OperatingMode;
///
/// let mode = OperatingMode::from_wire(4).unwrap();
/// assert_eq!(mode, OperatingMode::Cool);
/// assert!(OperatingMode::from_wire(11).is_none());
/// ```
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, Serialize, Deserialize)]
pub enum OperatingMode {
    /// Device is idle; no airflow or heating.
    Standby = 0,
    /// Continuous heating with a fixed internal target.
    NormalHeat = 1,
    /// Maximum heat burst, time-limited by the device.
    TurboHeat = 2,
    /// Heating with a caller-selectable target temperature.
    ExtendedHeat = 3,
    /// Ambient-air cooling.
    Cool = 4,
    /// High-airflow drying.
    Dry = 5,
    /// Post-heat cool-down while the heater element is ventilated.
    Wait = 6,
}

impl OperatingMode {
    /// Maps a wire byte to an operating mode.
    ///
    /// Returns `None` for bytes outside the closed enumeration.
    #[must_use]
    pub fn from_wire(byte: u8) -> Option<Self> {
        Self::from_repr(byte)
    }

    /// Returns the wire byte for this mode.
    #[must_use]
    pub const fn to_wire(self) -> u8 {
        self as u8
    }

    /// Returns the display-facing category this mode projects to.
    ///
    /// The projection is computed on demand and never stored, so the two
    /// representations cannot drift apart.
    #[must_use]
    pub const fn category(self) -> ModeCategory {
        match self {
            Self::Standby | Self::Wait => ModeCategory::Off,
            Self::ExtendedHeat | Self::Cool | Self::Dry => ModeCategory::Normal,
            Self::NormalHeat => ModeCategory::Heat,
            Self::TurboHeat => ModeCategory::Turbo,
        }
    }

    /// Returns `true` if this mode exposes a continuous target temperature.
    ///
    /// `NormalHeat` and `TurboHeat` run at fixed device-internal targets;
    /// `Standby` and `Wait` do not heat or cool at all.
    #[must_use]
    pub const fn has_target_temp(self) -> bool {
        matches!(self, Self::Cool | Self::Dry | Self::ExtendedHeat)
    }
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Standby => "Standby",
            Self::NormalHeat => "Normal Heat",
            Self::TurboHeat => "Turbo Heat",
            Self::ExtendedHeat => "Extended Heat",
            Self::Cool => "Cool",
            Self::Dry => "Dry",
            Self::Wait => "Wait",
        };
        write!(f, "{name}")
    }
}

/// Display-facing simplification of the six device modes.
///
/// This is a derived projection of [`OperatingMode`], suitable for a
/// four-way mode selector. It is never independent state.
///
/// # Examples
///
/// ```
/// use bedjet_lib::types::{ModeCategory, OperatingMode};
///
/// assert_eq!(OperatingMode::Dry.category(), ModeCategory::Normal);
/// assert_eq!(OperatingMode::Wait.category(), ModeCategory::Off);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModeCategory {
    /// Device is idle (standby or post-heat cool-down).
    Off,
    /// A temperature-band mode (cool, dry, or extended heat).
    Normal,
    /// Continuous heating.
    Heat,
    /// Maximum heat burst.
    Turbo,
}

impl ModeCategory {
    /// Returns the display label for this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::Normal => "Normal",
            Self::Heat => "Heat",
            Self::Turbo => "Turbo",
        }
    }
}

impl fmt::Display for ModeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_round_trip() {
        for byte in 0..=6 {
            let mode = OperatingMode::from_wire(byte).unwrap();
            assert_eq!(mode.to_wire(), byte);
        }
    }

    #[test]
    fn unknown_wire_bytes_rejected() {
        assert!(OperatingMode::from_wire(7).is_none());
        assert!(OperatingMode::from_wire(0xff).is_none());
    }

    #[test]
    fn category_projection_is_total() {
        assert_eq!(OperatingMode::Standby.category(), ModeCategory::Off);
        assert_eq!(OperatingMode::Wait.category(), ModeCategory::Off);
        assert_eq!(OperatingMode::Cool.category(), ModeCategory::Normal);
        assert_eq!(OperatingMode::Dry.category(), ModeCategory::Normal);
        assert_eq!(OperatingMode::ExtendedHeat.category(), ModeCategory::Normal);
        assert_eq!(OperatingMode::NormalHeat.category(), ModeCategory::Heat);
        assert_eq!(OperatingMode::TurboHeat.category(), ModeCategory::Turbo);
    }

    #[test]
    fn target_temp_modes() {
        assert!(OperatingMode::Cool.has_target_temp());
        assert!(OperatingMode::Dry.has_target_temp());
        assert!(OperatingMode::ExtendedHeat.has_target_temp());
        assert!(!OperatingMode::NormalHeat.has_target_temp());
        assert!(!OperatingMode::TurboHeat.has_target_temp());
        assert!(!OperatingMode::Standby.has_target_temp());
        assert!(!OperatingMode::Wait.has_target_temp());
    }

    #[test]
    fn category_display() {
        assert_eq!(ModeCategory::Off.to_string(), "Off");
        assert_eq!(ModeCategory::Turbo.to_string(), "Turbo");
    }
}
