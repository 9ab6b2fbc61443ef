// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! GATT identifiers for the BedJet service.
//!
//! This library never touches the radio itself; these constants exist so
//! transport integrations can locate the right service and
//! characteristics. Command writes use write-without-response semantics,
//! and status arrives as notifications on [`DEVICE_STATUS`].

use uuid::Uuid;

/// The BedJet primary service.
pub const SERVICE: Uuid = Uuid::from_u128(0x0000_1000_bed0_0080_aa55_4265_644a_6574);

/// Status characteristic; notifies with status frames.
pub const DEVICE_STATUS: Uuid = Uuid::from_u128(0x0000_2000_bed0_0080_aa55_4265_644a_6574);

/// Friendly name characteristic; readable UTF-8 name.
pub const FRIENDLY_NAME: Uuid = Uuid::from_u128(0x0000_2001_bed0_0080_aa55_4265_644a_6574);

/// Wi-Fi SSID characteristic.
pub const WIFI_SSID: Uuid = Uuid::from_u128(0x0000_2002_bed0_0080_aa55_4265_644a_6574);

/// Wi-Fi password characteristic.
pub const WIFI_PASSWORD: Uuid = Uuid::from_u128(0x0000_2003_bed0_0080_aa55_4265_644a_6574);

/// Command characteristic; accepts encoded command frames.
pub const COMMANDS: Uuid = Uuid::from_u128(0x0000_2004_bed0_0080_aa55_4265_644a_6574);

/// Extended data characteristic.
pub const EXTENDED_DATA: Uuid = Uuid::from_u128(0x0000_2005_bed0_0080_aa55_4265_644a_6574);
