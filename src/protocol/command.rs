// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command encoding.
//!
//! Every command variant maps to exactly one wire frame written to the
//! command characteristic. Commands are fire-and-forget: the device does
//! not acknowledge at this layer, and confirmation arrives asynchronously
//! as an updated status frame.

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::error::EncodeError;
use crate::types::{ButtonCode, FanSpeed, Temperature};

// Wire opcodes, the first byte of every command frame.
const OP_BUTTON: u8 = 0x01;
const OP_SET_TIME: u8 = 0x02;
const OP_SET_TEMP: u8 = 0x03;
const OP_SET_FAN: u8 = 0x07;
const OP_SET_CLOCK: u8 = 0x08;
const OP_SET_PARAMETER: u8 = 0x40;

// Parameter codes under OP_SET_PARAMETER.
const PARAM_DEVICE_NAME: u8 = 0x00;

/// Zero-padded length of the name payload.
const NAME_FIELD_LEN: usize = 16;

/// Longest device name the name parameter accepts, in bytes.
pub const MAX_NAME_LEN: usize = 15;

/// Highest hour value the timer accepts.
///
/// The wire field is a raw byte; 23 is the day-scale ceiling. The
/// tighter per-mode ceiling is reported by the device in
/// [`DeviceStatus::max_duration`](crate::protocol::DeviceStatus::max_duration)
/// and is the caller's to honor.
pub const MAX_TIMER_HOURS: u8 = 23;

/// A device-bound intent.
///
/// Each variant maps to exactly one wire encoding, produced by
/// [`Command::encode`]. The serde representation is adjacently tagged
/// (`{"type": "Button", "content": ...}`), the shape UI layers send over
/// an RPC bridge.
///
/// # Examples
///
/// ```
/// use bedjet_lib::protocol::Command;
/// use bedjet_lib::types::ButtonCode;
///
/// let frame = Command::Button(ButtonCode::Cool).encode().unwrap();
/// assert_eq!(frame, vec![0x01, 0x02]);
///
/// // Out-of-range parameters are rejected before any transmission
/// assert!(Command::SetTemp { celsius: 10.0 }.encode().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum Command {
    /// Press a physical-button equivalent.
    Button(ButtonCode),
    /// Set the runtime timer. `{0, 0}` cancels the timer, which the
    /// device interprets as standby.
    SetTime {
        /// Hours component, at most [`MAX_TIMER_HOURS`].
        hours: u8,
        /// Minutes component, below 60.
        minutes: u8,
    },
    /// Set the target temperature, in degrees Celsius on the device's
    /// half-degree grid.
    SetTemp {
        /// The target, in `[19.0, 33.5]` and a multiple of 0.5.
        celsius: f32,
    },
    /// Set the fan speed.
    SetFan(FanSpeed),
    /// Sync the device's wall clock.
    SetClock {
        /// Hour of day, below 24.
        hours: u8,
        /// Minute of hour, below 60.
        minutes: u8,
    },
    /// Persist a friendly device name, at most [`MAX_NAME_LEN`] bytes.
    SetName(String),
}

impl Command {
    /// The command that turns the device off.
    ///
    /// Cancelling the timer is how the device reaches standby; there is
    /// no dedicated off opcode.
    pub const TURN_OFF: Self = Self::SetTime {
        hours: 0,
        minutes: 0,
    };

    /// Builds a `SetClock` command from a wall-clock time.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // hour < 24, minute < 60
    pub fn set_clock_from(time: chrono::NaiveTime) -> Self {
        Self::SetClock {
            hours: time.hour() as u8,
            minutes: time.minute() as u8,
        }
    }

    /// Builds a `SetClock` command from the local wall clock.
    #[must_use]
    pub fn sync_clock() -> Self {
        Self::set_clock_from(chrono::Local::now().time())
    }

    /// Encodes this command into its wire frame.
    ///
    /// Pure transformation; transmission is the transport's concern.
    ///
    /// # Errors
    ///
    /// Returns an [`EncodeError`] if any parameter is outside its
    /// allowed set. No frame is produced on failure.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        match self {
            Self::Button(code) => Ok(vec![OP_BUTTON, code.code()]),

            Self::SetTime { hours, minutes } => {
                validate_time("timer", *hours, MAX_TIMER_HOURS, *minutes)?;
                Ok(vec![OP_SET_TIME, *hours, *minutes])
            }

            Self::SetTemp { celsius } => {
                if !(Temperature::MIN_TARGET_CELSIUS..=Temperature::MAX_TARGET_CELSIUS)
                    .contains(celsius)
                {
                    return Err(EncodeError::OutOfRange {
                        field: "temperature",
                        min: f64::from(Temperature::MIN_TARGET_CELSIUS),
                        max: f64::from(Temperature::MAX_TARGET_CELSIUS),
                        actual: f64::from(*celsius),
                    });
                }
                if !Temperature::is_half_degree(*celsius) {
                    return Err(EncodeError::NotHalfDegree(*celsius));
                }
                // In-range half-degree values fit a byte exactly
                Ok(vec![OP_SET_TEMP, (celsius * 2.0) as u8])
            }

            Self::SetFan(speed) => Ok(vec![OP_SET_FAN, speed.to_step()?]),

            Self::SetClock { hours, minutes } => {
                validate_time("clock", *hours, 23, *minutes)?;
                Ok(vec![OP_SET_CLOCK, *hours, *minutes])
            }

            Self::SetName(name) => {
                if name.len() > MAX_NAME_LEN {
                    return Err(EncodeError::NameTooLong { len: name.len() });
                }
                let mut frame = Vec::with_capacity(3 + NAME_FIELD_LEN);
                frame.extend_from_slice(&[OP_SET_PARAMETER, PARAM_DEVICE_NAME, 0x10]);
                frame.extend_from_slice(name.as_bytes());
                frame.resize(3 + NAME_FIELD_LEN, 0);
                Ok(frame)
            }
        }
    }
}

fn validate_time(
    field: &'static str,
    hours: u8,
    max_hours: u8,
    minutes: u8,
) -> Result<(), EncodeError> {
    if hours > max_hours {
        return Err(EncodeError::OutOfRange {
            field,
            min: 0.0,
            max: f64::from(max_hours),
            actual: f64::from(hours),
        });
    }
    if minutes > 59 {
        return Err(EncodeError::OutOfRange {
            field,
            min: 0.0,
            max: 59.0,
            actual: f64::from(minutes),
        });
    }
    Ok(())
}
