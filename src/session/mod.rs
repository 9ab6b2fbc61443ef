// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-device session: outbound ordering and inbound status delivery.
//!
//! A [`DeviceSession`] owns one logical connection. Outbound commands
//! flow through a bounded queue drained by a single writer task, which
//! preserves submission order without any shared mutable buffer. Inbound
//! status frames are decoded and published both on a per-device watch
//! channel (a conflating last-value cache) and on the shared
//! [`EventBus`] (every frame, undiffed). The two flows never block each
//! other.

mod transport;

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{mpsc, oneshot, watch};

use crate::error::{Error, Result, TransportError};
use crate::event::{DeviceEvent, DeviceId, EventBus};
use crate::protocol::{Command, DeviceStatus};
use crate::transition::{plan_mode_select, plan_temperature_change};
use crate::types::{ButtonCode, FanSpeed, ModeCategory, Temperature};

pub use transport::Transport;

/// Capacity of the outbound command queue.
///
/// Slider drags produce short bursts; 32 frames absorbs them without
/// letting an unbounded backlog build against a stalled transport.
const COMMAND_QUEUE_CAPACITY: usize = 32;

struct Outbound {
    frame: Vec<u8>,
    done: oneshot::Sender<std::result::Result<(), TransportError>>,
}

/// One device's control session.
///
/// The session serializes outbound commands for its device and relays
/// decoded status to subscribers. Sessions for distinct device ids are
/// fully independent and may run concurrently.
///
/// Dropping the session closes the outbound queue; the writer task
/// drains what was already submitted and exits. Dropping status
/// receivers or bus subscribers never affects session state.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use async_trait::async_trait;
/// use bedjet_lib::error::TransportError;
/// use bedjet_lib::event::{DeviceId, EventBus};
/// use bedjet_lib::session::{DeviceSession, Transport};
/// use bedjet_lib::types::Temperature;
///
/// struct BleTransport;
///
/// #[async_trait]
/// impl Transport for BleTransport {
///     async fn send_frame(&self, frame: &[u8]) -> Result<(), TransportError> {
///         // hand the frame to the BLE stack here
///         Ok(())
///     }
/// }
///
/// # async fn run() -> bedjet_lib::Result<()> {
/// let bus = EventBus::new();
/// let session = DeviceSession::new(
///     DeviceId::new("hci0/dev_C4_22_90_01_02_03"),
///     Arc::new(BleTransport),
///     bus.clone(),
/// );
///
/// // feed inbound frames from the status characteristic:
/// // session.on_status(&frame);
///
/// session.set_temperature(Temperature::Fahrenheit(82.0)).await?;
/// # Ok(())
/// # }
/// ```
pub struct DeviceSession {
    id: DeviceId,
    command_tx: mpsc::Sender<Outbound>,
    status_tx: watch::Sender<Option<DeviceStatus>>,
    bus: EventBus,
    last_transport_error: Arc<Mutex<Option<String>>>,
}

impl DeviceSession {
    /// Creates a session and spawns its writer task.
    ///
    /// The writer task is the only execution path that calls the
    /// transport for this device, so submission order is transmission
    /// order.
    #[must_use]
    pub fn new(id: DeviceId, transport: Arc<dyn Transport>, bus: EventBus) -> Self {
        let (command_tx, mut command_rx) = mpsc::channel::<Outbound>(COMMAND_QUEUE_CAPACITY);
        let (status_tx, _) = watch::channel(None);
        let last_transport_error = Arc::new(Mutex::new(None));

        let writer_id = id.clone();
        let writer_error = Arc::clone(&last_transport_error);
        tokio::spawn(async move {
            while let Some(outbound) = command_rx.recv().await {
                let result = transport.send_frame(&outbound.frame).await;
                if let Err(error) = &result {
                    tracing::warn!(device_id = %writer_id, error = %error, "Frame write failed");
                    *writer_error.lock() = Some(error.to_string());
                }
                // The submitter may have gone away; that cancels nothing
                let _ = outbound.done.send(result);
            }
            tracing::debug!(device_id = %writer_id, "Session writer task stopped");
        });

        Self {
            id,
            command_tx,
            status_tx,
            bus,
            last_transport_error,
        }
    }

    /// Returns this session's device id.
    #[must_use]
    pub fn id(&self) -> &DeviceId {
        &self.id
    }

    /// Submits one command and waits for the transport's send result.
    ///
    /// Encoding happens synchronously, so invalid parameters are
    /// rejected before anything is queued. Commands are transmitted in
    /// submission order, never reordered or coalesced.
    ///
    /// # Errors
    ///
    /// Returns an encode error for invalid parameters, a transport error
    /// if the write fails, or [`Error::SessionClosed`] if the writer
    /// task has shut down.
    pub async fn submit(&self, command: &Command) -> Result<()> {
        let frame = command.encode()?;
        tracing::trace!(device_id = %self.id, ?command, "Submitting command");
        let done = self.enqueue(frame).await?;
        await_send(done).await
    }

    /// Submits a command sequence, encoding everything before sending
    /// anything.
    ///
    /// If any command fails to encode, zero frames are transmitted. The
    /// whole batch is enqueued back-to-back, so no other caller's
    /// command can interleave with it.
    ///
    /// # Errors
    ///
    /// As [`submit`](Self::submit); the first transport failure is
    /// returned, after the writer has already picked up the remaining
    /// queued frames.
    pub async fn submit_all(&self, commands: &[Command]) -> Result<()> {
        let frames = commands
            .iter()
            .map(Command::encode)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        tracing::debug!(device_id = %self.id, count = frames.len(), "Submitting command batch");
        let mut completions = Vec::with_capacity(frames.len());
        for frame in frames {
            completions.push(self.enqueue(frame).await?);
        }
        for done in completions {
            await_send(done).await?;
        }
        Ok(())
    }

    /// Handles a raw status frame pushed by the transport.
    ///
    /// Every successfully decoded frame replaces the cached status and
    /// is republished on the event bus. A decode failure drops the frame
    /// and leaves the previous status untouched; the session itself is
    /// unaffected.
    pub fn on_status(&self, frame: &[u8]) {
        match DeviceStatus::decode(frame) {
            Ok(status) => {
                self.status_tx.send_replace(Some(status));
                self.bus
                    .publish(DeviceEvent::status_updated(self.id.clone(), status));
            }
            Err(error) => {
                tracing::warn!(device_id = %self.id, error = %error, "Dropping malformed status frame");
            }
        }
    }

    /// Returns the last decoded status, if any frame has arrived yet.
    #[must_use]
    pub fn status(&self) -> Option<DeviceStatus> {
        *self.status_tx.borrow()
    }

    /// Subscribes to the per-device status cache.
    ///
    /// The watch channel conflates: a subscriber that falls behind sees
    /// only the latest snapshot. Use the [`EventBus`] to observe every
    /// frame.
    #[must_use]
    pub fn subscribe_status(&self) -> watch::Receiver<Option<DeviceStatus>> {
        self.status_tx.subscribe()
    }

    /// Waits until a status frame has been decoded and returns it.
    ///
    /// Returns immediately if one already arrived.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SessionClosed`] if the session is torn down
    /// while waiting.
    pub async fn wait_for_status(&self) -> Result<DeviceStatus> {
        let mut rx = self.status_tx.subscribe();
        let guard = rx
            .wait_for(Option::is_some)
            .await
            .map_err(|_| Error::SessionClosed)?;
        (*guard).ok_or(Error::SessionClosed)
    }

    /// Returns the most recent transport failure, if any.
    ///
    /// Fire-and-forget callers that ignore individual `submit` results
    /// can still surface the last failure to the user.
    #[must_use]
    pub fn last_transport_error(&self) -> Option<String> {
        self.last_transport_error.lock().clone()
    }

    /// Moves the device to a target temperature.
    ///
    /// Plans the mode/timer/fan/temperature sequence against the current
    /// status and submits it atomically (all-or-nothing encoding).
    ///
    /// # Errors
    ///
    /// Returns [`Error::StatusUnavailable`] before the first status
    /// frame arrives, a transition error for out-of-band targets, or any
    /// [`submit_all`](Self::submit_all) error.
    pub async fn set_temperature(&self, target: Temperature) -> Result<()> {
        let current = self.status().ok_or(Error::StatusUnavailable)?;
        let plan = plan_temperature_change(&current, target)?;
        self.submit_all(&plan).await
    }

    /// Selects one of the four display-facing modes.
    ///
    /// # Errors
    ///
    /// As [`set_temperature`](Self::set_temperature).
    pub async fn select_mode(&self, category: ModeCategory) -> Result<()> {
        let current = self.status().ok_or(Error::StatusUnavailable)?;
        let plan = plan_mode_select(&current, category)?;
        self.submit_all(&plan).await
    }

    /// Sets the fan speed.
    ///
    /// # Errors
    ///
    /// As [`submit`](Self::submit).
    pub async fn set_fan(&self, speed: FanSpeed) -> Result<()> {
        self.submit(&Command::SetFan(speed)).await
    }

    /// Sets the runtime timer.
    ///
    /// # Errors
    ///
    /// As [`submit`](Self::submit).
    pub async fn set_timer(&self, hours: u8, minutes: u8) -> Result<()> {
        self.submit(&Command::SetTime { hours, minutes }).await
    }

    /// Turns the device off by cancelling the timer.
    ///
    /// # Errors
    ///
    /// As [`submit`](Self::submit).
    pub async fn turn_off(&self) -> Result<()> {
        self.submit(&Command::TURN_OFF).await
    }

    /// Presses a physical-button equivalent.
    ///
    /// # Errors
    ///
    /// As [`submit`](Self::submit).
    pub async fn press(&self, button: ButtonCode) -> Result<()> {
        self.submit(&Command::Button(button)).await
    }

    /// Sets the device's wall clock.
    ///
    /// # Errors
    ///
    /// As [`submit`](Self::submit).
    pub async fn set_clock(&self, time: chrono::NaiveTime) -> Result<()> {
        self.submit(&Command::set_clock_from(time)).await
    }

    /// Syncs the device's wall clock to the local time.
    ///
    /// # Errors
    ///
    /// As [`submit`](Self::submit).
    pub async fn sync_clock(&self) -> Result<()> {
        self.submit(&Command::sync_clock()).await
    }

    /// Persists a friendly device name.
    ///
    /// # Errors
    ///
    /// As [`submit`](Self::submit); names over 15 bytes are rejected.
    pub async fn rename(&self, name: impl Into<String>) -> Result<()> {
        self.submit(&Command::SetName(name.into())).await
    }

    async fn enqueue(
        &self,
        frame: Vec<u8>,
    ) -> Result<oneshot::Receiver<std::result::Result<(), TransportError>>> {
        let (done_tx, done_rx) = oneshot::channel();
        self.command_tx
            .send(Outbound {
                frame,
                done: done_tx,
            })
            .await
            .map_err(|_| Error::SessionClosed)?;
        Ok(done_rx)
    }
}

async fn await_send(
    done: oneshot::Receiver<std::result::Result<(), TransportError>>,
) -> Result<()> {
    done.await.map_err(|_| Error::SessionClosed)??;
    Ok(())
}

impl std::fmt::Debug for DeviceSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceSession")
            .field("id", &self.id)
            .field("has_status", &self.status().is_some())
            .finish_non_exhaustive()
    }
}
