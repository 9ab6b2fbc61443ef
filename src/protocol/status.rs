// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status frame decoding.
//!
//! The device pushes its full state as a fixed-layout frame on the
//! status characteristic: a one-byte continuation marker followed by a
//! 27-byte packet. All temperatures are wire-encoded in half-degree
//! Celsius units.

use std::time::Duration;

use serde::Serialize;
use serde_with::{DurationSeconds, serde_as};

use crate::error::DecodeError;
use crate::types::{FanSpeed, OperatingMode, ShutdownCode, UpdateStatus};

/// Length of the status packet, excluding the continuation marker.
pub const STATUS_PACKET_LEN: usize = 27;

/// Total length of a status frame: marker byte plus packet.
pub const STATUS_FRAME_LEN: usize = 1 + STATUS_PACKET_LEN;

// Byte offsets within the 27-byte packet.
const OFFSET_REMAINING_HOURS: usize = 3;
const OFFSET_REMAINING_MINUTES: usize = 4;
const OFFSET_REMAINING_SECONDS: usize = 5;
const OFFSET_ACTUAL_TEMP: usize = 6;
const OFFSET_TARGET_TEMP: usize = 7;
const OFFSET_OPERATING_MODE: usize = 8;
const OFFSET_FAN_STEP: usize = 9;
const OFFSET_MAX_DURATION_HOURS: usize = 10;
const OFFSET_MAX_DURATION_MINUTES: usize = 11;
const OFFSET_MIN_TARGET_TEMP: usize = 12;
const OFFSET_MAX_TARGET_TEMP: usize = 13;
const OFFSET_AMBIENT_TEMP: usize = 16;
const OFFSET_SHUTDOWN_CODE: usize = 17;
const OFFSET_UPDATE_STATUS: usize = 25;

/// Returns `true` if a status notification carried the complete packet.
///
/// The first byte of every notification is a continuation marker: zero
/// means the packet is complete, anything else means the transport must
/// read the remainder from the status characteristic and append it
/// before calling [`DeviceStatus::decode`].
#[must_use]
pub fn is_complete_frame(frame: &[u8]) -> bool {
    frame.first() == Some(&0)
}

/// A decoded device status snapshot.
///
/// Immutable once constructed; each decoded frame supersedes the
/// previous snapshot wholesale. All temperatures are degrees Celsius,
/// the device's native unit.
///
/// # Examples
///
/// ```
/// use bedjet_lib::protocol::{DeviceStatus, STATUS_FRAME_LEN};
/// use bedjet_lib::types::OperatingMode;
///
/// let mut frame = [0u8; STATUS_FRAME_LEN];
/// frame[9] = 4; // mode byte at packet offset 8
/// frame[8] = 44; // target temp, half-degree units
///
/// let status = DeviceStatus::decode(&frame).unwrap();
/// assert_eq!(status.operating_mode, OperatingMode::Cool);
/// assert_eq!(status.target_temp, 22.0);
/// ```
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeviceStatus {
    /// The device's current operating mode.
    pub operating_mode: OperatingMode,
    /// Target temperature in °C.
    pub target_temp: f32,
    /// Measured output temperature in °C.
    pub actual_temp: f32,
    /// Fan speed as a percentage, a multiple of 5 in `[5, 100]`.
    pub fan_step: u8,
    /// Runtime left on the current program.
    #[serde_as(as = "DurationSeconds<u64>")]
    pub remaining_duration: Duration,
    /// Longest runtime the current mode allows.
    #[serde_as(as = "DurationSeconds<u64>")]
    pub max_duration: Duration,
    /// Lowest settable target temperature for the current mode, in °C.
    pub min_target_temp: f32,
    /// Highest settable target temperature for the current mode, in °C.
    pub max_target_temp: f32,
    /// Ambient room temperature in °C.
    pub ambient_temp: f32,
    /// Reason for the last shutdown.
    pub shutdown_code: ShutdownCode,
    /// Firmware update progress.
    pub update_status: UpdateStatus,
}

impl DeviceStatus {
    /// Decodes a raw status frame.
    ///
    /// The frame must contain the continuation marker and a complete
    /// packet; chunked notifications are the transport's to reassemble
    /// (see [`is_complete_frame`]). Bytes beyond the fixed layout are
    /// ignored.
    ///
    /// Pure and deterministic; no state is retained between calls.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Truncated`] if the frame is shorter than the
    ///   fixed layout requires.
    /// - [`DecodeError::UnknownMode`] if the mode byte maps to no
    ///   [`OperatingMode`].
    /// - [`DecodeError::InvalidField`] if the shutdown or update byte
    ///   maps to no known code.
    pub fn decode(frame: &[u8]) -> Result<Self, DecodeError> {
        if frame.len() < STATUS_FRAME_LEN {
            return Err(DecodeError::Truncated {
                expected: STATUS_FRAME_LEN,
                actual: frame.len(),
            });
        }
        // Skip the continuation marker
        let packet = &frame[1..=STATUS_PACKET_LEN];

        let mode_byte = packet[OFFSET_OPERATING_MODE];
        let operating_mode =
            OperatingMode::from_wire(mode_byte).ok_or(DecodeError::UnknownMode(mode_byte))?;

        let shutdown_byte = packet[OFFSET_SHUTDOWN_CODE];
        let shutdown_code =
            ShutdownCode::from_wire(shutdown_byte).ok_or(DecodeError::InvalidField {
                field: "shutdown code",
                value: shutdown_byte,
            })?;

        let update_byte = packet[OFFSET_UPDATE_STATUS];
        let update_status =
            UpdateStatus::from_wire(update_byte).ok_or(DecodeError::InvalidField {
                field: "update status",
                value: update_byte,
            })?;

        let remaining_duration = duration_from_parts(
            packet[OFFSET_REMAINING_HOURS],
            packet[OFFSET_REMAINING_MINUTES],
            packet[OFFSET_REMAINING_SECONDS],
        );
        let max_duration = duration_from_parts(
            packet[OFFSET_MAX_DURATION_HOURS],
            packet[OFFSET_MAX_DURATION_MINUTES],
            0,
        );

        Ok(Self {
            operating_mode,
            target_temp: half_degrees(packet[OFFSET_TARGET_TEMP]),
            actual_temp: half_degrees(packet[OFFSET_ACTUAL_TEMP]),
            // The step field is device-reported; saturate instead of
            // dropping an otherwise-valid frame
            fan_step: FanSpeed::percent_from_step(packet[OFFSET_FAN_STEP]),
            remaining_duration,
            max_duration,
            min_target_temp: half_degrees(packet[OFFSET_MIN_TARGET_TEMP]),
            max_target_temp: half_degrees(packet[OFFSET_MAX_TARGET_TEMP]),
            ambient_temp: half_degrees(packet[OFFSET_AMBIENT_TEMP]),
            shutdown_code,
            update_status,
        })
    }

    /// Returns `true` if a timer is running.
    #[must_use]
    pub fn has_active_timer(&self) -> bool {
        !self.remaining_duration.is_zero()
    }
}

fn half_degrees(byte: u8) -> f32 {
    f32::from(byte) / 2.0
}

fn duration_from_parts(hours: u8, minutes: u8, seconds: u8) -> Duration {
    Duration::from_secs(
        u64::from(hours) * 3600 + u64::from(minutes) * 60 + u64::from(seconds),
    )
}
