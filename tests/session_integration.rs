// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the device session over a mock transport.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use bedjet_lib::error::{Error, TransportError};
use bedjet_lib::event::{DeviceEvent, DeviceId, EventBus};
use bedjet_lib::protocol::{Command, DeviceStatus, STATUS_FRAME_LEN};
use bedjet_lib::session::{DeviceSession, Transport};
use bedjet_lib::types::{ButtonCode, FanSpeed, ModeCategory, OperatingMode, Temperature};

/// Records every frame it is asked to send; can be switched to fail.
#[derive(Default)]
struct MockTransport {
    frames: Mutex<Vec<Vec<u8>>>,
    fail: AtomicBool,
}

impl MockTransport {
    fn sent(&self) -> Vec<Vec<u8>> {
        self.frames.lock().clone()
    }

    fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send_frame(&self, frame: &[u8]) -> Result<(), TransportError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(TransportError::WriteFailed("mock failure".to_string()));
        }
        self.frames.lock().push(frame.to_vec());
        Ok(())
    }
}

fn new_session() -> (DeviceSession, Arc<MockTransport>, EventBus) {
    let transport = Arc::new(MockTransport::default());
    let bus = EventBus::new();
    let session = DeviceSession::new(
        DeviceId::new("hci0/dev_TEST"),
        transport.clone(),
        bus.clone(),
    );
    (session, transport, bus)
}

/// Builds a status frame with the given packet bytes at their offsets.
fn status_frame(fields: &[(usize, u8)]) -> Vec<u8> {
    let mut frame = vec![0u8; STATUS_FRAME_LEN];
    for &(offset, value) in fields {
        frame[1 + offset] = value;
    }
    frame
}

/// Cool mode at 22 °C target, 40% fan, no timer.
fn cool_frame() -> Vec<u8> {
    status_frame(&[
        (6, 42), // actual 21.0 °C
        (7, 44), // target 22.0 °C
        (8, 4),  // Cool
        (9, 7),  // fan step 7 = 40%
    ])
}

// ============================================================================
// Outbound ordering
// ============================================================================

mod ordering {
    use super::*;

    #[tokio::test]
    async fn commands_are_sent_in_submission_order() {
        let (session, transport, _bus) = new_session();

        session.set_fan(FanSpeed::Percent(5)).await.unwrap();
        session.set_fan(FanSpeed::Percent(50)).await.unwrap();
        session.set_timer(2, 15).await.unwrap();
        session.press(ButtonCode::Cool).await.unwrap();

        assert_eq!(
            transport.sent(),
            vec![
                vec![0x07, 0],
                vec![0x07, 9],
                vec![0x02, 2, 15],
                vec![0x01, 0x02],
            ]
        );
    }

    #[tokio::test]
    async fn slider_drag_then_commit_stays_ordered() {
        let (session, transport, _bus) = new_session();

        // A temperature drag is a burst of SetTemp frames; the trailing
        // commit must never overtake them
        for temp in [20.0, 20.5, 21.0, 21.5] {
            session.submit(&Command::SetTemp { celsius: temp }).await.unwrap();
        }

        let sent = transport.sent();
        assert_eq!(sent.len(), 4);
        assert_eq!(sent.last(), Some(&vec![0x03, 43]));
        let temps: Vec<u8> = sent.iter().map(|f| f[1]).collect();
        assert_eq!(temps, vec![40, 41, 42, 43]);
    }

    #[tokio::test]
    async fn turn_off_sends_zero_timer() {
        let (session, transport, _bus) = new_session();

        session.turn_off().await.unwrap();
        assert_eq!(transport.sent(), vec![vec![0x02, 0, 0]]);
    }
}

// ============================================================================
// Batch submission
// ============================================================================

mod batches {
    use super::*;

    #[tokio::test]
    async fn invalid_command_fails_the_whole_batch() {
        let (session, transport, _bus) = new_session();

        let batch = vec![
            Command::Button(ButtonCode::Cool),
            Command::SetFan(FanSpeed::Percent(7)), // invalid
            Command::SetTemp { celsius: 22.0 },
        ];
        let result = session.submit_all(&batch).await;

        assert!(matches!(result, Err(Error::Encode(_))));
        assert!(transport.sent().is_empty(), "no frame may be transmitted");
    }

    #[tokio::test]
    async fn encode_failure_on_submit_sends_nothing() {
        let (session, transport, _bus) = new_session();

        let result = session.submit(&Command::SetTemp { celsius: 50.0 }).await;
        assert!(matches!(result, Err(Error::Encode(_))));
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn valid_batch_is_sent_in_order() {
        let (session, transport, _bus) = new_session();

        let batch = vec![
            Command::Button(ButtonCode::ExternalHeat),
            Command::SetFan(FanSpeed::Percent(40)),
            Command::SetTemp { celsius: 32.0 },
        ];
        session.submit_all(&batch).await.unwrap();

        assert_eq!(
            transport.sent(),
            vec![vec![0x01, 0x06], vec![0x07, 7], vec![0x03, 64]]
        );
    }
}

// ============================================================================
// Inbound status delivery
// ============================================================================

mod status_delivery {
    use super::*;

    #[tokio::test]
    async fn decoded_status_is_cached() {
        let (session, _transport, _bus) = new_session();
        assert!(session.status().is_none());

        session.on_status(&cool_frame());

        let status = session.status().unwrap();
        assert_eq!(status.operating_mode, OperatingMode::Cool);
        assert_eq!(status.target_temp, 22.0);
        assert_eq!(status.fan_step, 40);
    }

    #[tokio::test]
    async fn malformed_frame_keeps_previous_status() {
        let (session, _transport, _bus) = new_session();

        session.on_status(&cool_frame());
        session.on_status(&[0xff, 0x01]); // truncated garbage

        let status = session.status().unwrap();
        assert_eq!(status.operating_mode, OperatingMode::Cool);
        assert_eq!(status.target_temp, 22.0);
    }

    #[tokio::test]
    async fn malformed_frame_does_not_kill_the_session() {
        let (session, transport, _bus) = new_session();

        session.on_status(&status_frame(&[(8, 99)])); // unknown mode
        session.on_status(&cool_frame());
        session.set_fan(FanSpeed::Percent(40)).await.unwrap();

        assert!(session.status().is_some());
        assert_eq!(transport.sent(), vec![vec![0x07, 7]]);
    }

    #[tokio::test]
    async fn wait_for_status_returns_first_frame() {
        let (session, _transport, _bus) = new_session();

        let waiter = tokio::spawn({
            let mut rx = session.subscribe_status();
            async move {
                let guard = rx.wait_for(Option::is_some).await.unwrap();
                (*guard).unwrap()
            }
        });

        session.on_status(&cool_frame());
        let status = waiter.await.unwrap();
        assert_eq!(status.operating_mode, OperatingMode::Cool);

        // And the direct helper resolves immediately now
        let status = session.wait_for_status().await.unwrap();
        assert_eq!(status.target_temp, 22.0);
    }

    #[tokio::test]
    async fn every_frame_is_republished_on_the_bus() {
        let (session, _transport, bus) = new_session();
        let mut rx = bus.subscribe();

        // Two identical frames still yield two events; the bus does not diff
        session.on_status(&cool_frame());
        session.on_status(&cool_frame());

        for _ in 0..2 {
            let event = rx.recv().await.unwrap();
            match event {
                DeviceEvent::StatusUpdated { device_id, status } => {
                    assert_eq!(device_id.as_str(), "hci0/dev_TEST");
                    assert_eq!(status.operating_mode, OperatingMode::Cool);
                }
                other => panic!("unexpected event: {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn malformed_frames_publish_nothing() {
        let (session, _transport, bus) = new_session();
        let mut rx = bus.subscribe();

        session.on_status(&[0x00; 4]);
        session.on_status(&cool_frame());

        // The first event on the bus is the valid frame's
        let event = rx.recv().await.unwrap();
        assert!(event.is_status_update());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn watch_channel_conflates_to_latest() {
        let (session, _transport, _bus) = new_session();
        let rx = session.subscribe_status();

        session.on_status(&cool_frame());
        session.on_status(&status_frame(&[(7, 60), (8, 5)])); // Dry at 30.0 °C

        let status = (*rx.borrow()).unwrap();
        assert_eq!(status.operating_mode, OperatingMode::Dry);
        assert_eq!(status.target_temp, 30.0);
    }
}

// ============================================================================
// High-level intents
// ============================================================================

mod intents {
    use super::*;

    #[tokio::test]
    async fn set_temperature_without_status_fails() {
        let (session, transport, _bus) = new_session();

        let result = session.set_temperature(Temperature::Celsius(22.0)).await;
        assert!(matches!(result, Err(Error::StatusUnavailable)));
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn set_temperature_plans_and_sends_the_sequence() {
        let (session, transport, _bus) = new_session();
        session.on_status(&cool_frame());

        session
            .set_temperature(Temperature::Celsius(32.0))
            .await
            .unwrap();

        // Cool -> ExtendedHeat with no active timer: button, fan restore, temp
        assert_eq!(
            transport.sent(),
            vec![vec![0x01, 0x06], vec![0x07, 7], vec![0x03, 64]]
        );
    }

    #[tokio::test]
    async fn set_temperature_restores_a_running_timer() {
        let (session, transport, _bus) = new_session();
        session.on_status(&status_frame(&[
            (3, 1),  // 1 h
            (4, 30), // 30 min
            (7, 44),
            (8, 4), // Cool
            (9, 7),
        ]));

        session
            .set_temperature(Temperature::Celsius(32.0))
            .await
            .unwrap();

        assert_eq!(
            transport.sent(),
            vec![
                vec![0x01, 0x06],
                vec![0x02, 1, 30],
                vec![0x07, 7],
                vec![0x03, 64],
            ]
        );
    }

    #[tokio::test]
    async fn set_temperature_same_mode_is_one_frame() {
        let (session, transport, _bus) = new_session();
        session.on_status(&cool_frame());

        session
            .set_temperature(Temperature::Celsius(21.0))
            .await
            .unwrap();

        assert_eq!(transport.sent(), vec![vec![0x03, 42]]);
    }

    #[tokio::test]
    async fn out_of_range_target_has_zero_side_effects() {
        let (session, transport, _bus) = new_session();
        session.on_status(&cool_frame());

        let result = session.set_temperature(Temperature::Celsius(10.0)).await;
        assert!(matches!(result, Err(Error::Transition(_))));
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn select_mode_off_cancels_the_timer() {
        let (session, transport, _bus) = new_session();
        session.on_status(&cool_frame());

        session.select_mode(ModeCategory::Off).await.unwrap();
        assert_eq!(transport.sent(), vec![vec![0x02, 0, 0]]);
    }

    #[tokio::test]
    async fn select_mode_heat_is_a_single_press() {
        let (session, transport, _bus) = new_session();
        session.on_status(&cool_frame());

        session.select_mode(ModeCategory::Heat).await.unwrap();
        assert_eq!(transport.sent(), vec![vec![0x01, 0x03]]);
    }

    #[tokio::test]
    async fn rename_sends_padded_name() {
        let (session, transport, _bus) = new_session();

        session.rename("Guest room").await.unwrap();

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(&sent[0][..3], &[0x40, 0x00, 0x10]);
        assert_eq!(sent[0].len(), 19);
    }

    #[tokio::test]
    async fn set_clock_sends_the_given_time() {
        let (session, transport, _bus) = new_session();

        let time = chrono::NaiveTime::from_hms_opt(22, 5, 0).unwrap();
        session.set_clock(time).await.unwrap();
        assert_eq!(transport.sent(), vec![vec![0x08, 22, 5]]);
    }
}

// ============================================================================
// Transport failures
// ============================================================================

mod transport_failures {
    use super::*;

    #[tokio::test]
    async fn write_failure_surfaces_to_the_caller() {
        let (session, transport, _bus) = new_session();
        transport.set_failing(true);

        let result = session.set_fan(FanSpeed::Percent(40)).await;
        assert!(matches!(result, Err(Error::Transport(_))));
        assert_eq!(
            session.last_transport_error().as_deref(),
            Some("write failed: mock failure")
        );
    }

    #[tokio::test]
    async fn session_recovers_after_a_failed_write() {
        let (session, transport, _bus) = new_session();

        transport.set_failing(true);
        assert!(session.turn_off().await.is_err());

        transport.set_failing(false);
        session.turn_off().await.unwrap();
        assert_eq!(transport.sent(), vec![vec![0x02, 0, 0]]);
    }

    #[tokio::test]
    async fn status_delivery_is_independent_of_transport_failures() {
        let (session, transport, _bus) = new_session();
        transport.set_failing(true);

        session.on_status(&cool_frame());
        assert_eq!(
            session.status().map(|s| s.operating_mode),
            Some(OperatingMode::Cool)
        );
    }
}

// ============================================================================
// Independent sessions
// ============================================================================

mod multi_device {
    use super::*;

    #[tokio::test]
    async fn sessions_do_not_share_state() {
        let bus = EventBus::new();
        let transport_a = Arc::new(MockTransport::default());
        let transport_b = Arc::new(MockTransport::default());

        let session_a =
            DeviceSession::new(DeviceId::new("dev_A"), transport_a.clone(), bus.clone());
        let session_b =
            DeviceSession::new(DeviceId::new("dev_B"), transport_b.clone(), bus.clone());

        session_a.on_status(&cool_frame());
        session_a.set_fan(FanSpeed::Percent(40)).await.unwrap();

        assert!(session_b.status().is_none());
        assert!(transport_b.sent().is_empty());
        assert_eq!(transport_a.sent().len(), 1);
    }

    #[tokio::test]
    async fn bus_events_carry_the_right_device_id() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        let session_a = DeviceSession::new(
            DeviceId::new("dev_A"),
            Arc::new(MockTransport::default()),
            bus.clone(),
        );
        let session_b = DeviceSession::new(
            DeviceId::new("dev_B"),
            Arc::new(MockTransport::default()),
            bus.clone(),
        );

        session_a.on_status(&cool_frame());
        session_b.on_status(&cool_frame());

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        assert_eq!(first.device_id().as_str(), "dev_A");
        assert_eq!(second.device_id().as_str(), "dev_B");
    }
}

// ============================================================================
// Full status round trip
// ============================================================================

mod full_status {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn rich_frame_decodes_through_the_session() {
        let (session, _transport, _bus) = new_session();

        session.on_status(&status_frame(&[
            (3, 2),   // 2 h remaining
            (4, 45),  // 45 min
            (5, 30),  // 30 s
            (6, 55),  // actual 27.5 °C
            (7, 60),  // target 30.0 °C
            (8, 3),   // ExtendedHeat
            (9, 19),  // fan 100%
            (10, 12), // max 12 h
            (11, 0),
            (12, 60), // min target 30.0 °C
            (13, 67), // max target 33.5 °C
            (16, 44), // ambient 22.0 °C
            (17, 0),  // Normal shutdown
            (25, 26), // NoUpdateNeeded
        ]));

        let status: DeviceStatus = session.status().unwrap();
        assert_eq!(status.operating_mode, OperatingMode::ExtendedHeat);
        assert_eq!(status.actual_temp, 27.5);
        assert_eq!(status.target_temp, 30.0);
        assert_eq!(status.fan_step, 100);
        assert_eq!(
            status.remaining_duration,
            Duration::from_secs(2 * 3600 + 45 * 60 + 30)
        );
        assert_eq!(status.max_duration, Duration::from_secs(12 * 3600));
        assert_eq!(status.min_target_temp, 30.0);
        assert_eq!(status.max_target_temp, 33.5);
        assert_eq!(status.ambient_temp, 22.0);
        assert_eq!(status.operating_mode.category(), ModeCategory::Normal);
    }
}
