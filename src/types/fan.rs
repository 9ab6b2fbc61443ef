// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan speed type.
//!
//! The device models fan speed as 20 discrete steps (0-19). Status
//! reports and most callers work in percent, where each step covers 5%:
//! step 0 is 5%, step 19 is 100%.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EncodeError;

/// A fan speed intent, in device steps or percent.
///
/// `Percent` values must be multiples of 5 in `[5, 100]`; anything else
/// is rejected at encode time rather than silently rounded. The UI's
/// slider already constrains this, but the encoder does not trust
/// callers.
///
/// # Examples
///
/// ```
/// use bedjet_lib::types::FanSpeed;
///
/// assert_eq!(FanSpeed::Percent(40).to_step().unwrap(), 7);
/// assert_eq!(FanSpeed::Step(19).to_step().unwrap(), 19);
/// assert!(FanSpeed::Percent(7).to_step().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum FanSpeed {
    /// Device-native step, 0-19.
    Step(u8),
    /// Percentage, a multiple of 5 in `[5, 100]`.
    Percent(u8),
}

impl FanSpeed {
    /// Highest device-native fan step.
    pub const MAX_STEP: u8 = 19;

    /// Validates this speed against the device's accepted sets.
    ///
    /// # Errors
    ///
    /// Returns `EncodeError::OutOfRange` if a step exceeds 19, or if a
    /// percentage is not a multiple of 5 within `[5, 100]`.
    pub fn validate(self) -> Result<(), EncodeError> {
        match self {
            Self::Step(step) if step > Self::MAX_STEP => Err(EncodeError::OutOfRange {
                field: "fan step",
                min: 0.0,
                max: f64::from(Self::MAX_STEP),
                actual: f64::from(step),
            }),
            Self::Percent(pct) if !(5..=100).contains(&pct) || pct % 5 != 0 => {
                Err(EncodeError::OutOfRange {
                    field: "fan percent",
                    min: 5.0,
                    max: 100.0,
                    actual: f64::from(pct),
                })
            }
            _ => Ok(()),
        }
    }

    /// Converts this speed to the device-native step.
    ///
    /// # Errors
    ///
    /// Returns `EncodeError::OutOfRange` if the value fails validation.
    pub fn to_step(self) -> Result<u8, EncodeError> {
        self.validate()?;
        Ok(match self {
            Self::Step(step) => step,
            Self::Percent(pct) => pct / 5 - 1,
        })
    }

    /// Converts a device-reported step to percent.
    ///
    /// Steps above 19 saturate at 100%.
    #[must_use]
    pub const fn percent_from_step(step: u8) -> u8 {
        let step = if step > Self::MAX_STEP {
            Self::MAX_STEP
        } else {
            step
        };
        (step + 1) * 5
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step(step) => write!(f, "step {step}"),
            Self::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}
