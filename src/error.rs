// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `BedJet` library.
//!
//! This module provides the error hierarchy for failures across the library:
//! status frame decoding, command encoding, transition planning, and the
//! transport boundary.

use thiserror::Error;

use crate::types::OperatingMode;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when driving a
/// BedJet device through a session.
#[derive(Debug, Error)]
pub enum Error {
    /// A status frame could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A command could not be encoded.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// A transition plan could not be computed.
    #[error("transition error: {0}")]
    Transition(#[from] TransitionError),

    /// The transport rejected or failed a frame write.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// No status has been received from the device yet.
    #[error("no device status has been received yet")]
    StatusUnavailable,

    /// The session's writer task has shut down.
    #[error("device session is closed")]
    SessionClosed,
}

/// Errors produced while decoding a raw status frame.
///
/// Decode failures are always recoverable: the malformed frame is dropped
/// and the previously decoded status stays valid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The frame is shorter than the fixed status layout requires.
    #[error("status frame too short: expected {expected} bytes, got {actual}")]
    Truncated {
        /// Number of bytes the layout requires.
        expected: usize,
        /// Number of bytes actually received.
        actual: usize,
    },

    /// The mode byte does not map to a known operating mode.
    #[error("unknown operating mode byte: {0:#04x}")]
    UnknownMode(u8),

    /// A status field byte does not map to a known value.
    #[error("invalid {field} byte: {value:#04x}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// The raw byte that failed to map.
        value: u8,
    },
}

/// Errors produced while encoding a command.
///
/// These are surfaced synchronously, before any transmission attempt.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EncodeError {
    /// A command parameter is outside its allowed set of values.
    ///
    /// For fan percentages the allowed set is the multiples of 5 within
    /// the range, so a value like 7 is rejected with this variant even
    /// though it sits between the bounds.
    #[error("{field} value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the offending parameter.
        field: &'static str,
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
        /// The actual value that was provided.
        actual: f64,
    },

    /// A temperature is not an exact multiple of 0.5 °C.
    ///
    /// The device only accepts half-degree steps; the encoder rejects
    /// rather than rounding on the caller's behalf.
    #[error("temperature {0} °C is not a multiple of 0.5 °C")]
    NotHalfDegree(f32),

    /// A device name exceeds the 15-byte limit.
    #[error("device name is {len} bytes, maximum is 15")]
    NameTooLong {
        /// Byte length of the rejected name.
        len: usize,
    },
}

/// Errors produced by the mode/temperature transition engine.
///
/// A failed plan has zero side effects: no partial command sequence is
/// ever issued.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransitionError {
    /// The target temperature is outside the device's settable band.
    #[error("target temperature {actual} °C is out of range [{min}, {max}]")]
    OutOfRange {
        /// Lower bound of the settable band.
        min: f32,
        /// Upper bound of the settable band.
        max: f32,
        /// The normalized Celsius target that was rejected.
        actual: f32,
    },

    /// The resolved mode has no entry in the button-mapping table.
    #[error("no mode button is mapped for {0:?}")]
    UnmappedMode(OperatingMode),
}

/// Errors surfaced by [`Transport`](crate::session::Transport)
/// implementations.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The peripheral is not connected.
    #[error("device is not connected")]
    NotConnected,

    /// The GATT write failed.
    #[error("write failed: {0}")]
    WriteFailed(String),

    /// The transport has shut down.
    #[error("transport closed")]
    Closed,
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
