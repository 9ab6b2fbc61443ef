// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event fan-out for status updates and device-list changes.
//!
//! Sessions publish a [`DeviceEvent::StatusUpdated`] for every decoded
//! status frame; transport integrations publish the lifecycle variants
//! as the adapter's device list changes. The [`EventBus`] is a
//! single-producer-per-device, multi-consumer broadcast channel: events
//! for one device are strictly ordered, while ordering across devices is
//! unspecified.
//!
//! # Examples
//!
//! ```
//! use bedjet_lib::event::{DeviceEvent, DeviceId, EventBus};
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! bus.publish(DeviceEvent::discovered(DeviceId::new("dev_AA"), None));
//! ```

mod device_event;
mod device_id;
mod event_bus;

pub use device_event::DeviceEvent;
pub use device_id::DeviceId;
pub use event_bus::EventBus;
