// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mode/temperature transition planning.
//!
//! The device maps each settable temperature band 1:1 to an operating
//! mode and only exposes discrete mode buttons plus independent
//! fan/timer/temperature setters. Reaching an arbitrary target
//! temperature from an arbitrary starting mode therefore takes a short
//! command sequence, and a mode switch resets the device's fan speed and
//! timer as a side effect. The planners here compute the full sequence
//! up front so a failed plan has zero side effects, making the
//! multi-step hazard look like a single atomic intent to callers.

use std::time::Duration;

use crate::error::TransitionError;
use crate::protocol::{Command, DeviceStatus};
use crate::types::{ButtonCode, FanSpeed, ModeCategory, OperatingMode, Temperature};

/// One row of the mode/temperature range table.
#[derive(Debug, Clone, Copy)]
struct ModeRange {
    mode: OperatingMode,
    min: f32,
    max: f32,
}

/// The settable temperature bands, in declared order.
///
/// The ranges are contiguous and fully cover `[19.0, 33.5]`. Shared
/// boundaries belong to the earlier row: 25.0 °C resolves to Cool and
/// 30.0 °C to Dry, because lookup takes the first containing range.
const MODE_RANGES: [ModeRange; 3] = [
    ModeRange {
        mode: OperatingMode::Cool,
        min: 19.0,
        max: 25.0,
    },
    ModeRange {
        mode: OperatingMode::Dry,
        min: 25.0,
        max: 30.0,
    },
    ModeRange {
        mode: OperatingMode::ExtendedHeat,
        min: 30.0,
        max: 33.5,
    },
];

/// Resolves the operating mode whose band contains a Celsius target.
///
/// # Errors
///
/// Returns [`TransitionError::OutOfRange`] if the target lies outside
/// `[19.0, 33.5]`. The engine never clamps; any desired clamping belongs
/// at the presentation boundary.
pub fn required_mode(celsius: f32) -> Result<OperatingMode, TransitionError> {
    MODE_RANGES
        .iter()
        .find(|range| celsius >= range.min && celsius <= range.max)
        .map(|range| range.mode)
        .ok_or(TransitionError::OutOfRange {
            min: Temperature::MIN_TARGET_CELSIUS,
            max: Temperature::MAX_TARGET_CELSIUS,
            actual: celsius,
        })
}

/// Returns the button that switches the device into a temperature-band
/// mode.
///
/// # Errors
///
/// Returns [`TransitionError::UnmappedMode`] for modes without a mapped
/// button. The range table only resolves to mapped modes, but a gap must
/// surface as an error rather than a panic.
pub fn mode_button(mode: OperatingMode) -> Result<ButtonCode, TransitionError> {
    match mode {
        OperatingMode::Cool => Ok(ButtonCode::Cool),
        OperatingMode::Dry => Ok(ButtonCode::Dry),
        OperatingMode::ExtendedHeat => Ok(ButtonCode::ExternalHeat),
        other => Err(TransitionError::UnmappedMode(other)),
    }
}

/// Plans the command sequence that moves the device to a target
/// temperature.
///
/// The target is normalized to Celsius, bounds-checked, and then
/// quantized to the device's 0.5 °C grid (exact Fahrenheit conversions
/// almost never land on it). If the device is already in the resolved
/// mode the plan is a single `SetTemp`; otherwise the plan switches
/// mode, restores the timer (only if one was running) and fan speed the
/// switch reset, and finally asserts the temperature, in that fixed
/// order.
///
/// # Errors
///
/// - [`TransitionError::OutOfRange`] if the normalized target lies
///   outside `[19.0, 33.5]`.
/// - [`TransitionError::UnmappedMode`] if the resolved mode has no
///   button mapping.
///
/// # Examples
///
/// ```
/// use bedjet_lib::protocol::{Command, DeviceStatus, STATUS_FRAME_LEN};
/// use bedjet_lib::transition::plan_temperature_change;
/// use bedjet_lib::types::{ButtonCode, Temperature};
///
/// let mut frame = [0u8; STATUS_FRAME_LEN];
/// frame[9] = 4; // Cool
/// frame[10] = 7; // fan step 7 = 40%
/// let status = DeviceStatus::decode(&frame).unwrap();
///
/// let plan = plan_temperature_change(&status, Temperature::Celsius(32.0)).unwrap();
/// assert_eq!(plan[0], Command::Button(ButtonCode::ExternalHeat));
/// assert_eq!(plan.last(), Some(&Command::SetTemp { celsius: 32.0 }));
/// ```
pub fn plan_temperature_change(
    current: &DeviceStatus,
    target: Temperature,
) -> Result<Vec<Command>, TransitionError> {
    let celsius = target.to_celsius();
    if !(Temperature::MIN_TARGET_CELSIUS..=Temperature::MAX_TARGET_CELSIUS).contains(&celsius) {
        return Err(TransitionError::OutOfRange {
            min: Temperature::MIN_TARGET_CELSIUS,
            max: Temperature::MAX_TARGET_CELSIUS,
            actual: celsius,
        });
    }
    // Quantize after the bounds check; the band endpoints sit on the
    // grid, so rounding cannot leave the band
    let celsius = Temperature::round_to_half_degree(celsius);

    let required = required_mode(celsius)?;
    if current.operating_mode == required {
        return Ok(vec![Command::SetTemp { celsius }]);
    }

    let mut plan = Vec::with_capacity(4);
    plan.push(Command::Button(mode_button(required)?));
    if current.has_active_timer() {
        let (hours, minutes) = split_duration(current.remaining_duration);
        plan.push(Command::SetTime { hours, minutes });
    }
    plan.push(Command::SetFan(FanSpeed::Percent(current.fan_step)));
    plan.push(Command::SetTemp { celsius });
    Ok(plan)
}

/// Plans the command sequence for a four-way mode selection.
///
/// `Off` cancels the timer (the device interprets that as standby), and
/// `Heat`/`Turbo` are single button presses with no temperature
/// negotiation. `Normal` re-asserts the device's current target
/// temperature through [`plan_temperature_change`], clamping it into the
/// settable band first: the value is device-reported and may
/// legitimately sit outside the band, and this helper mirrors a
/// presentation-boundary intent where clamping is the expected policy.
///
/// # Errors
///
/// Propagates [`plan_temperature_change`] errors for `Normal`.
pub fn plan_mode_select(
    current: &DeviceStatus,
    category: ModeCategory,
) -> Result<Vec<Command>, TransitionError> {
    match category {
        ModeCategory::Off => Ok(vec![Command::TURN_OFF]),
        ModeCategory::Heat => Ok(vec![Command::Button(ButtonCode::Heat)]),
        ModeCategory::Turbo => Ok(vec![Command::Button(ButtonCode::Turbo)]),
        ModeCategory::Normal => {
            let target = current.target_temp.clamp(
                Temperature::MIN_TARGET_CELSIUS,
                Temperature::MAX_TARGET_CELSIUS,
            );
            plan_temperature_change(current, Temperature::Celsius(target))
        }
    }
}

#[allow(clippy::cast_possible_truncation)] // both components bounded below u8::MAX
fn split_duration(duration: Duration) -> (u8, u8) {
    let secs = duration.as_secs();
    let hours = (secs / 3600).min(u64::from(crate::protocol::MAX_TIMER_HOURS)) as u8;
    let minutes = ((secs % 3600) / 60) as u8;
    (hours, minutes)
}
