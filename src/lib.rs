// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `BedJet` Lib - A Rust library to control BedJet climate devices.
//!
//! This library implements the device-control core for the BedJet bed
//! climate system: the wire protocol, the mode/temperature transition
//! logic, and a per-device session that keeps commands ordered and fans
//! out status updates. The BLE transport itself stays outside, behind
//! the [`session::Transport`] trait, so any Bluetooth stack can drive
//! the radio.
//!
//! # Supported Features
//!
//! - **Status decoding**: the device's pushed status frames, validated
//!   into typed snapshots (mode, temperatures, fan, timer, fault codes)
//! - **Command encoding**: buttons, temperature, fan, timer, wall
//!   clock, and device rename, validated before a byte leaves the core
//! - **Transition planning**: a single "set temperature" intent expands
//!   into the mode-switch/restore/commit sequence the device requires
//! - **Sessions**: per-device ordered command queue, conflating status
//!   cache, and event fan-out over a broadcast bus
//!
//! # Quick Start
//!
//! Implement [`session::Transport`] over your BLE stack (write frames to
//! the command characteristic listed in [`protocol::uuids`]), then drive
//! the device through a session:
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use bedjet_lib::error::TransportError;
//! use bedjet_lib::event::{DeviceId, EventBus};
//! use bedjet_lib::session::{DeviceSession, Transport};
//! use bedjet_lib::types::{FanSpeed, Temperature};
//!
//! struct BleTransport; // wraps your peripheral handle
//!
//! #[async_trait]
//! impl Transport for BleTransport {
//!     async fn send_frame(&self, frame: &[u8]) -> Result<(), TransportError> {
//!         // GATT write-without-response to the command characteristic
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> bedjet_lib::Result<()> {
//!     let bus = EventBus::new();
//!     let session = DeviceSession::new(
//!         DeviceId::new("hci0/dev_C4_22_90_01_02_03"),
//!         Arc::new(BleTransport),
//!         bus.clone(),
//!     );
//!
//!     // Feed status notifications into the session as they arrive:
//!     // session.on_status(&notification_bytes);
//!
//!     let status = session.wait_for_status().await?;
//!     println!("mode: {}", status.operating_mode);
//!
//!     session.set_fan(FanSpeed::Percent(40)).await?;
//!     session.set_temperature(Temperature::Fahrenheit(82.0)).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Watching Status
//!
//! Every decoded frame is republished on the [`event::EventBus`]; the
//! per-device watch channel keeps only the latest snapshot:
//!
//! ```no_run
//! # async fn watch(session: bedjet_lib::session::DeviceSession) {
//! let mut rx = session.subscribe_status();
//! while rx.changed().await.is_ok() {
//!     if let Some(status) = *rx.borrow() {
//!         println!("{} -> {} °C", status.actual_temp, status.target_temp);
//!     }
//! }
//! # }
//! ```

pub mod error;
pub mod event;
pub mod protocol;
pub mod session;
pub mod transition;
pub mod types;

pub use error::{DecodeError, EncodeError, Error, Result, TransitionError, TransportError};
pub use event::{DeviceEvent, DeviceId, EventBus};
pub use protocol::{Command, DeviceStatus};
pub use session::{DeviceSession, Transport};
pub use transition::{plan_mode_select, plan_temperature_change};
pub use types::{
    ButtonCode, FanSpeed, ModeCategory, OperatingMode, ShutdownCode, Temperature, UpdateStatus,
};
