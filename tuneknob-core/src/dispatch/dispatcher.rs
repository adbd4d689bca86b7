//! One pass of the remote's main loop
//!
//! Every pass runs the same three steps, in order:
//!
//! 1. volume: sample the analog cell on the cadence, send `v` on change
//! 2. buttons: poll both classifiers, send the mapped gesture command
//! 3. host: take at most one frame from the receive queue and apply it
//!
//! The dispatcher never blocks; outgoing frames go to a [`FrameSink`].

use heapless::Vec;
use tuneknob_protocol::{Frame, FrameError, FrameSink, IncomingCommand, OutgoingCommand};

use crate::config::RemoteConfig;
use crate::gesture::{Gesture, GestureClassifier};
use crate::input::{Button, Inputs, BUTTON_COUNT};
use crate::queue::FrameConsumer;
use crate::state::PlaybackState;
use crate::traits::PlaybackIndicator;
use crate::volume::VolumeMonitor;

/// Most frames a single pass can send (one volume report plus one per button)
pub const MAX_SENT_PER_PASS: usize = 1 + BUTTON_COUNT;

/// What happened during one pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassReport {
    /// Volume percentage reported this pass
    pub volume: Option<u8>,
    /// Gesture classified for each button, indexed by [`Button::index`]
    pub gestures: [Gesture; BUTTON_COUNT],
    /// Outcome of the receive step
    pub received: Result<(u8, u8), FrameError>,
    /// Host command recognized in the received frame
    pub command: Option<IncomingCommand>,
    /// New playback state, when the command changed it
    pub playback_changed: Option<PlaybackState>,
    /// Commands sent this pass, in send order
    pub sent: Vec<OutgoingCommand, MAX_SENT_PER_PASS>,
}

impl Default for PassReport {
    fn default() -> Self {
        Self {
            volume: None,
            gestures: [Gesture::None; BUTTON_COUNT],
            received: Err(FrameError::NoneAvailable),
            command: None,
            playback_changed: None,
            sent: Vec::new(),
        }
    }
}

impl PassReport {
    /// True when the pass sent, received or changed nothing
    pub fn is_idle(&self) -> bool {
        self.sent.is_empty() && self.received == Err(FrameError::NoneAvailable)
    }
}

/// Command sent for a classified gesture on `button`
pub fn gesture_command(button: Button, gesture: Gesture) -> Option<OutgoingCommand> {
    match (button, gesture) {
        (_, Gesture::None) => None,
        (Button::Primary, Gesture::SingleClick) => Some(OutgoingCommand::Up),
        (Button::Primary, Gesture::DoubleClick) => Some(OutgoingCommand::Forward),
        (Button::Secondary, Gesture::SingleClick) => Some(OutgoingCommand::Confirm),
        (Button::Secondary, Gesture::DoubleClick) => Some(OutgoingCommand::Back),
    }
}

/// Main-loop state: classifiers, volume cadence and mirrored playback
#[derive(Debug, Clone)]
pub struct Dispatcher {
    buttons: [GestureClassifier; BUTTON_COUNT],
    volume: VolumeMonitor,
    playback: PlaybackState,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(&RemoteConfig::default())
    }
}

impl Dispatcher {
    /// Create a dispatcher using the timing in `config`
    pub fn new(config: &RemoteConfig) -> Self {
        let window = config.gesture.double_click_window_ms;
        Self {
            buttons: [GestureClassifier::new(window), GestureClassifier::new(window)],
            volume: VolumeMonitor::new(
                config.volume.sample_interval_ms,
                config.volume.adc_full_scale,
            ),
            playback: PlaybackState::default(),
        }
    }

    /// Playback state as last reported by the host
    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    /// Run one pass
    pub fn run_pass<const N: usize>(
        &mut self,
        inputs: &Inputs,
        rx: &mut FrameConsumer<'_, N>,
        tx: &mut impl FrameSink,
        indicator: &mut impl PlaybackIndicator,
    ) -> PassReport {
        let mut report = PassReport::default();
        let now = inputs.ticks.now();

        if let Some(percent) = self.volume.poll(now, inputs.analog.load()) {
            report.volume = Some(percent);
            send(tx, &mut report, OutgoingCommand::Volume(percent));
        }

        for button in Button::ALL {
            let count = inputs.presses(button).count();
            let gesture = self.buttons[button.index()].poll(count, now);
            report.gestures[button.index()] = gesture;

            if let Some(command) = gesture_command(button, gesture) {
                send(tx, &mut report, command);
            }
        }

        report.received = Frame::decode_received(rx.dequeue_frame());
        if let Ok((option, _value)) = report.received {
            // Options the remote does not understand are dropped.
            if let Some(command) = IncomingCommand::from_byte(option) {
                report.command = Some(command);
                self.apply(command, indicator, &mut report);
            }
        }

        report
    }

    fn apply(
        &mut self,
        command: IncomingCommand,
        indicator: &mut impl PlaybackIndicator,
        report: &mut PassReport,
    ) {
        let next = self.playback.transition(command);
        if next != self.playback {
            report.playback_changed = Some(next);
        }
        self.playback = next;
        indicator.show(next);
    }
}

fn send(tx: &mut impl FrameSink, report: &mut PassReport, command: OutgoingCommand) {
    Frame::encode(command.option(), command.value()).write_to(tx);
    // Capacity matches the number of send sites in a pass.
    let _ = report.sent.push(command);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::FrameQueue;

    /// Byte sink that keeps everything written to it
    #[derive(Default)]
    struct Wire {
        bytes: heapless::Vec<u8, 256>,
    }

    impl Wire {
        fn frames(&self) -> impl Iterator<Item = Frame> + '_ {
            self.bytes.chunks_exact(5).map(|chunk| {
                let mut bytes = [0u8; 5];
                bytes.copy_from_slice(chunk);
                Frame::from_bytes(bytes)
            })
        }

        /// `(option, value)` of every valid frame written so far
        fn decoded(&self) -> heapless::Vec<(u8, u8), 32> {
            self.frames().filter_map(|frame| frame.decode().ok()).collect()
        }
    }

    fn on_wire(command: OutgoingCommand) -> (u8, u8) {
        (command.option(), command.value())
    }

    impl FrameSink for Wire {
        fn push_byte(&mut self, byte: u8) {
            let _ = self.bytes.push(byte);
        }
    }

    #[derive(Default)]
    struct RecordingIndicator {
        shown: heapless::Vec<PlaybackState, 16>,
    }

    impl PlaybackIndicator for RecordingIndicator {
        fn show(&mut self, state: PlaybackState) {
            let _ = self.shown.push(state);
        }
    }

    /// Advance the tick by one and run a pass, `ticks` times
    fn run_ticks(
        dispatcher: &mut Dispatcher,
        inputs: &Inputs,
        rx: &mut FrameConsumer<'_>,
        wire: &mut Wire,
        indicator: &mut RecordingIndicator,
        ticks: u32,
    ) {
        for _ in 0..ticks {
            inputs.ticks.tick();
            dispatcher.run_pass(inputs, rx, wire, indicator);
        }
    }

    #[test]
    fn test_gesture_mapping() {
        assert_eq!(
            gesture_command(Button::Primary, Gesture::SingleClick),
            Some(OutgoingCommand::Up)
        );
        assert_eq!(
            gesture_command(Button::Primary, Gesture::DoubleClick),
            Some(OutgoingCommand::Forward)
        );
        assert_eq!(
            gesture_command(Button::Secondary, Gesture::SingleClick),
            Some(OutgoingCommand::Confirm)
        );
        assert_eq!(
            gesture_command(Button::Secondary, Gesture::DoubleClick),
            Some(OutgoingCommand::Back)
        );
        assert_eq!(gesture_command(Button::Secondary, Gesture::None), None);
    }

    #[test]
    fn test_idle_pass_reports_none_available() {
        let mut dispatcher = Dispatcher::default();
        let inputs = Inputs::new();
        let mut queue: FrameQueue = FrameQueue::new();
        let (_, mut rx) = queue.split();
        let mut wire = Wire::default();
        let mut indicator = RecordingIndicator::default();

        let report = dispatcher.run_pass(&inputs, &mut rx, &mut wire, &mut indicator);

        assert!(report.is_idle());
        assert_eq!(report.received, Err(FrameError::NoneAvailable));
        assert!(wire.bytes.is_empty());
        assert!(indicator.shown.is_empty());
    }

    #[test]
    fn test_volume_change_sends_one_frame() {
        let mut dispatcher = Dispatcher::default();
        let inputs = Inputs::new();
        let mut queue: FrameQueue = FrameQueue::new();
        let (_, mut rx) = queue.split();
        let mut wire = Wire::default();
        let mut indicator = RecordingIndicator::default();

        inputs.analog.store(2000);
        run_ticks(&mut dispatcher, &inputs, &mut rx, &mut wire, &mut indicator, 201);
        assert_eq!(wire.decoded().as_slice(), &[on_wire(OutgoingCommand::Volume(49))]);

        wire.bytes.clear();
        inputs.analog.store(3000);
        run_ticks(&mut dispatcher, &inputs, &mut rx, &mut wire, &mut indicator, 200);

        assert_eq!(wire.bytes.len(), 5);
        assert_eq!(wire.decoded().as_slice(), &[on_wire(OutgoingCommand::Volume(74))]);
        assert_eq!(wire.bytes.as_slice(), &[b'0', b'v', 74, b'v'.wrapping_add(74), b'0']);
    }

    #[test]
    fn test_steady_volume_sends_nothing_more() {
        let mut dispatcher = Dispatcher::default();
        let inputs = Inputs::new();
        let mut queue: FrameQueue = FrameQueue::new();
        let (_, mut rx) = queue.split();
        let mut wire = Wire::default();
        let mut indicator = RecordingIndicator::default();

        inputs.analog.store(1234);
        run_ticks(&mut dispatcher, &inputs, &mut rx, &mut wire, &mut indicator, 2000);
        assert_eq!(wire.decoded().len(), 1);
    }

    #[test]
    fn test_single_click_sends_up() {
        let mut dispatcher = Dispatcher::default();
        let inputs = Inputs::new();
        let mut queue: FrameQueue = FrameQueue::new();
        let (_, mut rx) = queue.split();
        let mut wire = Wire::default();
        let mut indicator = RecordingIndicator::default();

        inputs.presses(Button::Primary).record_press();
        run_ticks(&mut dispatcher, &inputs, &mut rx, &mut wire, &mut indicator, 199);
        assert!(wire.bytes.is_empty());

        // The volume cadence also fires once inside this span.
        run_ticks(&mut dispatcher, &inputs, &mut rx, &mut wire, &mut indicator, 400);
        let sent = wire.decoded();
        assert_eq!(
            sent.iter().filter(|&&pair| pair == on_wire(OutgoingCommand::Up)).count(),
            1
        );
        assert!(!sent.contains(&on_wire(OutgoingCommand::Forward)));
    }

    #[test]
    fn test_double_click_sends_back() {
        let mut dispatcher = Dispatcher::default();
        let inputs = Inputs::new();
        let mut queue: FrameQueue = FrameQueue::new();
        let (_, mut rx) = queue.split();
        let mut wire = Wire::default();
        let mut indicator = RecordingIndicator::default();

        let presses = inputs.presses(Button::Secondary);
        presses.record_press();
        run_ticks(&mut dispatcher, &inputs, &mut rx, &mut wire, &mut indicator, 100);
        presses.record_press();
        run_ticks(&mut dispatcher, &inputs, &mut rx, &mut wire, &mut indicator, 1000);

        let sent = wire.decoded();
        assert_eq!(
            sent.iter().filter(|&&pair| pair == on_wire(OutgoingCommand::Back)).count(),
            1
        );
        assert!(!sent.contains(&on_wire(OutgoingCommand::Confirm)));
    }

    #[test]
    fn test_gestures_reported_per_button() {
        let mut dispatcher = Dispatcher::default();
        let inputs = Inputs::new();
        let mut queue: FrameQueue = FrameQueue::new();
        let (_, mut rx) = queue.split();
        let mut wire = Wire::default();
        let mut indicator = RecordingIndicator::default();

        inputs.presses(Button::Primary).record_press();
        inputs.presses(Button::Primary).record_press();
        inputs.ticks.tick();

        let report = dispatcher.run_pass(&inputs, &mut rx, &mut wire, &mut indicator);
        assert_eq!(report.gestures, [Gesture::DoubleClick, Gesture::None]);
        assert_eq!(report.sent.as_slice(), &[OutgoingCommand::Forward]);
    }

    #[test]
    fn test_play_pause_drives_indicator() {
        let mut dispatcher = Dispatcher::default();
        let inputs = Inputs::new();
        let mut queue: FrameQueue = FrameQueue::new();
        let (mut host, mut rx) = queue.split();
        let mut wire = Wire::default();
        let mut indicator = RecordingIndicator::default();

        host.try_send(&Frame::encode(b'p', b'0'));
        let report = dispatcher.run_pass(&inputs, &mut rx, &mut wire, &mut indicator);
        assert_eq!(report.received, Ok((b'p', b'0')));
        assert_eq!(report.command, Some(IncomingCommand::Play));
        assert_eq!(report.playback_changed, Some(PlaybackState::Playing));
        assert_eq!(dispatcher.playback(), PlaybackState::Playing);

        // A repeated play still refreshes the indicator.
        host.try_send(&Frame::encode(b'p', b'0'));
        let report = dispatcher.run_pass(&inputs, &mut rx, &mut wire, &mut indicator);
        assert_eq!(report.playback_changed, None);

        host.try_send(&Frame::encode(b't', b'0'));
        dispatcher.run_pass(&inputs, &mut rx, &mut wire, &mut indicator);
        assert_eq!(dispatcher.playback(), PlaybackState::Paused);

        assert_eq!(
            indicator.shown.as_slice(),
            &[
                PlaybackState::Playing,
                PlaybackState::Playing,
                PlaybackState::Paused
            ]
        );
    }

    #[test]
    fn test_one_frame_per_pass() {
        let mut dispatcher = Dispatcher::default();
        let inputs = Inputs::new();
        let mut queue: FrameQueue = FrameQueue::new();
        let (mut host, mut rx) = queue.split();
        let mut wire = Wire::default();
        let mut indicator = RecordingIndicator::default();

        host.try_send(&Frame::encode(b'p', b'0'));
        host.try_send(&Frame::encode(b't', b'0'));

        dispatcher.run_pass(&inputs, &mut rx, &mut wire, &mut indicator);
        assert_eq!(dispatcher.playback(), PlaybackState::Playing);
        assert!(!rx.is_empty());

        dispatcher.run_pass(&inputs, &mut rx, &mut wire, &mut indicator);
        assert_eq!(dispatcher.playback(), PlaybackState::Paused);
        assert!(rx.is_empty());
    }

    #[test]
    fn test_unknown_option_ignored() {
        let mut dispatcher = Dispatcher::default();
        let inputs = Inputs::new();
        let mut queue: FrameQueue = FrameQueue::new();
        let (mut host, mut rx) = queue.split();
        let mut wire = Wire::default();
        let mut indicator = RecordingIndicator::default();

        host.try_send(&Frame::encode(b'x', 7));
        let report = dispatcher.run_pass(&inputs, &mut rx, &mut wire, &mut indicator);

        assert_eq!(report.received, Ok((b'x', 7)));
        assert_eq!(report.command, None);
        assert_eq!(dispatcher.playback(), PlaybackState::Paused);
        assert!(indicator.shown.is_empty());
    }

    #[test]
    fn test_corrupt_frames_reported() {
        let mut dispatcher = Dispatcher::default();
        let inputs = Inputs::new();
        let mut queue: FrameQueue = FrameQueue::new();
        let (mut host, mut rx) = queue.split();
        let mut wire = Wire::default();
        let mut indicator = RecordingIndicator::default();

        host.try_send(&Frame::from_bytes([b'X', b'p', b'0', b'p'.wrapping_add(b'0'), b'0']));
        host.try_send(&Frame::from_bytes([b'0', b'p', b'0', 0, b'0']));

        let report = dispatcher.run_pass(&inputs, &mut rx, &mut wire, &mut indicator);
        assert_eq!(report.received, Err(FrameError::BadMarker));

        let report = dispatcher.run_pass(&inputs, &mut rx, &mut wire, &mut indicator);
        assert_eq!(report.received, Err(FrameError::BadChecksum));

        assert_eq!(dispatcher.playback(), PlaybackState::Paused);
        assert!(indicator.shown.is_empty());
    }

    #[test]
    fn test_config_window_applies_to_both_buttons() {
        let mut config = RemoteConfig::default();
        config.gesture.double_click_window_ms = 50;
        let mut dispatcher = Dispatcher::new(&config);
        let inputs = Inputs::new();
        let mut queue: FrameQueue = FrameQueue::new();
        let (_, mut rx) = queue.split();
        let mut wire = Wire::default();
        let mut indicator = RecordingIndicator::default();

        inputs.presses(Button::Primary).record_press();
        inputs.presses(Button::Secondary).record_press();

        // First press seen at tick 1; the 50-tick window closes after tick 51.
        run_ticks(&mut dispatcher, &inputs, &mut rx, &mut wire, &mut indicator, 51);
        assert!(wire.bytes.is_empty());

        run_ticks(&mut dispatcher, &inputs, &mut rx, &mut wire, &mut indicator, 1);
        assert_eq!(
            wire.decoded().as_slice(),
            &[
                on_wire(OutgoingCommand::Up),
                on_wire(OutgoingCommand::Confirm)
            ]
        );
    }
}
