// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature intent type.
//!
//! Callers express a target temperature in whichever unit the user chose;
//! the core normalizes to Celsius before reasoning about mode ranges.
//! Unit conversion for display is a presentation concern and never
//! happens inside this library.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A temperature value tagged with its unit at the point of intent.
///
/// The serde representation is adjacently tagged
/// (`{"type": "Celsius", "value": 21.5}`), matching the shape UI layers
/// send over an RPC bridge.
///
/// # Examples
///
/// ```
/// use bedjet_lib::types::Temperature;
///
/// let t = Temperature::Fahrenheit(86.0);
/// assert!((t.to_celsius() - 30.0).abs() < 1e-4);
///
/// let c = Temperature::Celsius(21.5);
/// assert_eq!(c.to_celsius(), 21.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Temperature {
    /// The temperature in degrees Celsius.
    Celsius(f32),
    /// The temperature in degrees Fahrenheit.
    Fahrenheit(f32),
}

impl Temperature {
    /// Lowest target temperature any mode accepts, in °C.
    pub const MIN_TARGET_CELSIUS: f32 = 19.0;

    /// Highest target temperature any mode accepts, in °C.
    pub const MAX_TARGET_CELSIUS: f32 = 33.5;

    /// Returns the value in degrees Celsius.
    #[must_use]
    pub fn to_celsius(self) -> f32 {
        match self {
            Self::Celsius(val) => val,
            Self::Fahrenheit(val) => (val - 32.0) * 5.0 / 9.0,
        }
    }

    /// Returns the value in degrees Fahrenheit.
    #[must_use]
    pub fn to_fahrenheit(self) -> f32 {
        match self {
            Self::Celsius(val) => val * 9.0 / 5.0 + 32.0,
            Self::Fahrenheit(val) => val,
        }
    }

    /// Rounds a Celsius value to the nearest half degree.
    ///
    /// The device's temperature grid is 0.5 °C; Fahrenheit intents almost
    /// never convert onto it exactly.
    #[must_use]
    pub fn round_to_half_degree(celsius: f32) -> f32 {
        (celsius * 2.0).round() / 2.0
    }

    /// Returns `true` if a Celsius value is an exact multiple of 0.5 °C.
    #[must_use]
    pub fn is_half_degree(celsius: f32) -> bool {
        let doubled = celsius * 2.0;
        (doubled - doubled.round()).abs() < f32::EPSILON
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Celsius(val) => write!(f, "{val} °C"),
            Self::Fahrenheit(val) => write!(f, "{val} °F"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celsius_passes_through() {
        assert_eq!(Temperature::Celsius(19.5).to_celsius(), 19.5);
    }

    #[test]
    fn fahrenheit_converts() {
        assert!((Temperature::Fahrenheit(32.0).to_celsius()).abs() < 1e-5);
        assert!((Temperature::Fahrenheit(212.0).to_celsius() - 100.0).abs() < 1e-4);
    }

    #[test]
    fn fahrenheit_round_trip() {
        let t = Temperature::Celsius(25.0);
        assert!((t.to_fahrenheit() - 77.0).abs() < 1e-4);
        assert!((Temperature::Fahrenheit(t.to_fahrenheit()).to_celsius() - 25.0).abs() < 1e-4);
    }

    #[test]
    fn half_degree_check() {
        assert!(Temperature::is_half_degree(21.0));
        assert!(Temperature::is_half_degree(21.5));
        assert!(Temperature::is_half_degree(33.5));
        assert!(!Temperature::is_half_degree(21.3));
        // 82 °F converts to 27.777... °C, off the device grid
        assert!(!Temperature::is_half_degree(
            Temperature::Fahrenheit(82.0).to_celsius()
        ));
    }

    #[test]
    fn half_degree_rounding() {
        assert_eq!(Temperature::round_to_half_degree(21.3), 21.5);
        assert_eq!(Temperature::round_to_half_degree(21.2), 21.0);
        assert_eq!(Temperature::round_to_half_degree(33.5), 33.5);
        let rounded = Temperature::round_to_half_degree(Temperature::Fahrenheit(82.0).to_celsius());
        assert!(Temperature::is_half_degree(rounded));
        assert_eq!(rounded, 28.0);
    }

    #[test]
    fn serde_is_adjacently_tagged() {
        let json = serde_json::to_string(&Temperature::Celsius(21.5)).unwrap();
        assert_eq!(json, r#"{"type":"Celsius","value":21.5}"#);

        let back: Temperature = serde_json::from_str(r#"{"type":"Fahrenheit","value":72.0}"#).unwrap();
        assert_eq!(back, Temperature::Fahrenheit(72.0));
    }

    #[test]
    fn display() {
        assert_eq!(Temperature::Celsius(21.5).to_string(), "21.5 °C");
        assert_eq!(Temperature::Fahrenheit(72.0).to_string(), "72 °F");
    }
}
