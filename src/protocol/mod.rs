// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire protocol: status frame decoding and command encoding.
//!
//! Both directions are pure, reentrant transformations. Decoding turns a
//! raw status frame into a validated [`DeviceStatus`]; encoding turns a
//! [`Command`] into the byte frame the device expects on its command
//! characteristic. All I/O lives behind the
//! [`Transport`](crate::session::Transport) seam.

mod command;
mod status;
pub mod uuids;

pub use command::{Command, MAX_NAME_LEN, MAX_TIMER_HOURS};
pub use status::{DeviceStatus, STATUS_FRAME_LEN, STATUS_PACKET_LEN, is_complete_frame};
