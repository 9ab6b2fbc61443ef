// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for BedJet device control.
//!
//! This module provides type-safe representations of the values the
//! device understands. Each type validates wire bytes or caller intents
//! at the edge, so the rest of the library reasons over closed
//! enumerations and in-range values.
//!
//! # Types
//!
//! - [`OperatingMode`] - the device's current operating state
//! - [`ModeCategory`] - derived four-way display projection of the mode
//! - [`ButtonCode`] - physical-button-equivalent press codes
//! - [`Temperature`] - a temperature tagged with its unit of intent
//! - [`FanSpeed`] - fan speed as device steps or percent
//! - [`ShutdownCode`] - last-shutdown reason reported by the device
//! - [`UpdateStatus`] - firmware update progress reported by the device

mod button;
mod fan;
mod mode;
mod shutdown;
mod temperature;
mod update;

pub use button::ButtonCode;
pub use fan::FanSpeed;
pub use mode::{ModeCategory, OperatingMode};
pub use shutdown::ShutdownCode;
pub use temperature::Temperature;
pub use update::UpdateStatus;
