//! The wave slider controller: drag state, phase clock and amplitude smoothing.
//!
//! ## Usage
//!
//! Create one [`WaveSliderController`] per slider instance, feed it the track
//! size and input events, and call [`WaveSliderController::frame`] from the
//! host's frame callback to obtain a [`TrackFrame`] to draw.
//!
//! ```
//! use std::time::Instant;
//!
//! use wave_slider::{
//!     controller::{WaveSliderArgs, WaveSliderController},
//!     interaction::PointerEvent,
//! };
//!
//! let args = WaveSliderArgs::default()
//!     .value(0.3)
//!     .on_change(|value| println!("value: {value}"));
//! let mut controller = WaveSliderController::new(args).expect("default params are valid");
//! controller.set_track_size(240.0, 48.0);
//!
//! let now = Instant::now();
//! controller.handle_pointer(PointerEvent::Pressed { x: 120.0 }, now);
//! controller.handle_pointer(PointerEvent::Released, now);
//!
//! let frame = controller.frame(now);
//! assert_eq!(frame.value, 0.5);
//! assert_eq!(frame.wave_points.len(), 121);
//! ```

use std::{fmt, sync::Arc, time::Instant};

use derive_setters::Setters;
use glam::Vec2;
use tracing::{debug, trace, warn};

use crate::{
    animation::Animated,
    color::Color,
    colors::SliderColors,
    error::WaveSliderError,
    interaction::{
        DragInteraction, InteractionState, PointerEvent, position_to_value, snap_fraction,
    },
    params::{WaveParams, WaveSliderDefaults},
    phase_clock::PhaseClock,
    prop::CallbackWith,
    render::{Stroke, TickInputs, TrackFrame, resolve_ticks},
    theme::ColorProvider,
    thumb::Thumb,
    waveform::WaveSampler,
};

/// Host frame scheduler asked for another frame while the slider animates.
pub trait FrameScheduler: Send + Sync {
    /// Requests that the host call [`WaveSliderController::frame`] again.
    fn request_frame(&self);
}

/// Arguments for a wave slider.
#[derive(Clone, Debug, PartialEq, Setters)]
pub struct WaveSliderArgs {
    /// The current value of the slider, ranging from 0.0 to 1.0.
    pub value: f32,
    /// Called with the new value on every interaction-driven change.
    #[setters(skip)]
    pub on_change: CallbackWith<f32>,
    /// Called with the final value when a drag ends or a press is released.
    #[setters(skip)]
    pub on_change_finished: CallbackWith<f32>,
    /// Palette for every part of the slider.
    pub colors: SliderColors,
    /// Whether the slider responds to input and animates.
    pub enabled: bool,
    /// Thumb drawn at the current value.
    pub thumb: Thumb,
    /// Wave shape and animation parameters.
    pub wave: WaveParams,
}

impl WaveSliderArgs {
    /// Default arguments with colors taken from `provider`.
    pub fn themed(provider: &impl ColorProvider) -> Self {
        Self {
            colors: WaveSliderDefaults::colors(provider),
            ..Self::default()
        }
    }

    /// Sets the on_change handler.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        self.on_change = CallbackWith::new(on_change);
        self
    }

    /// Sets the on_change handler using a shared callback.
    pub fn on_change_shared(mut self, on_change: impl Into<CallbackWith<f32>>) -> Self {
        self.on_change = on_change.into();
        self
    }

    /// Sets the on_change_finished handler.
    pub fn on_change_finished<F>(mut self, on_change_finished: F) -> Self
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        self.on_change_finished = CallbackWith::new(on_change_finished);
        self
    }

    /// Sets the on_change_finished handler using a shared callback.
    pub fn on_change_finished_shared(
        mut self,
        on_change_finished: impl Into<CallbackWith<f32>>,
    ) -> Self {
        self.on_change_finished = on_change_finished.into();
        self
    }
}

impl Default for WaveSliderArgs {
    fn default() -> Self {
        Self {
            value: 0.0,
            on_change: CallbackWith::noop(),
            on_change_finished: CallbackWith::noop(),
            colors: SliderColors::default(),
            enabled: true,
            thumb: Thumb::default(),
            wave: WaveParams::default(),
        }
    }
}

/// Owns the per-instance state of a wave slider and produces its frames.
///
/// All state (phase, drag flag, smoothed amplitude) is mutated through
/// `&mut self`, once per frame or input event.
pub struct WaveSliderController {
    args: WaveSliderArgs,
    track_size: Vec2,
    interaction: InteractionState,
    pointer_down: bool,
    phase_clock: PhaseClock,
    amplitude: Animated<f32>,
    thumb_color: Animated<Color>,
    scheduler: Option<Arc<dyn FrameScheduler>>,
}

impl WaveSliderController {
    /// Creates a controller, rejecting invalid wave parameters.
    pub fn new(mut args: WaveSliderArgs) -> Result<Self, WaveSliderError> {
        args.wave.validate()?;
        args.value = clamp_value(args.value);
        let interaction = InteractionState::Idle;
        Ok(Self {
            track_size: Vec2::ZERO,
            interaction,
            pointer_down: false,
            phase_clock: PhaseClock::new(
                args.wave.phase_cycle(),
                args.wave.animation_duration,
            ),
            amplitude: Animated::new(
                args.wave.target_amplitude(interaction),
                WaveSliderDefaults::AMPLITUDE_ANIMATION_DURATION,
            ),
            thumb_color: Animated::new(
                args.colors.thumb_color(args.enabled),
                WaveSliderDefaults::THUMB_COLOR_ANIMATION_DURATION,
            ),
            scheduler: None,
            args,
        })
    }

    /// Current arguments.
    pub fn args(&self) -> &WaveSliderArgs {
        &self.args
    }

    /// Replaces the arguments, animating amplitude and thumb color toward the
    /// new targets.
    pub fn set_args(
        &mut self,
        mut args: WaveSliderArgs,
        now: Instant,
    ) -> Result<(), WaveSliderError> {
        args.wave.validate()?;
        args.value = clamp_value(args.value);
        if args == self.args {
            return Ok(());
        }
        debug!(
            value = args.value,
            enabled = args.enabled,
            amplitude = args.wave.amplitude(),
            frequency = args.wave.frequency(),
            "wave slider arguments changed"
        );

        if !args.enabled {
            self.pointer_down = false;
            if self.interaction.is_dragging() {
                debug!("slider disabled mid-drag, dropping drag state");
                self.interaction = InteractionState::Idle;
            }
        }

        self.phase_clock
            .reconfigure(args.wave.phase_cycle(), args.wave.animation_duration, now);
        self.amplitude
            .animate_to(args.wave.target_amplitude(self.interaction), now);
        self.thumb_color
            .animate_to(args.colors.thumb_color(args.enabled), now);
        self.args = args;
        self.request_frame();
        Ok(())
    }

    /// Current (clamped) value.
    pub fn value(&self) -> f32 {
        self.args.value
    }

    /// Sets the value from the caller without notifying `on_change`.
    pub fn set_value(&mut self, value: f32) {
        let value = clamp_value(value);
        if value != self.args.value {
            self.args.value = value;
            self.request_frame();
        }
    }

    /// Sets the track size in pixels. The wave is centered vertically.
    pub fn set_track_size(&mut self, width: f32, height: f32) {
        let sanitize = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        self.track_size = Vec2::new(sanitize(width), sanitize(height));
    }

    /// Track size in pixels.
    pub fn track_size(&self) -> Vec2 {
        self.track_size
    }

    /// Installs the host frame scheduler.
    pub fn set_scheduler(&mut self, scheduler: Arc<dyn FrameScheduler>) {
        if self.phase_clock.is_disposed() {
            return;
        }
        self.scheduler = Some(scheduler);
    }

    /// Current interaction state.
    pub fn interaction_state(&self) -> InteractionState {
        self.interaction
    }

    /// Returns whether the thumb is currently being dragged.
    pub fn is_dragging(&self) -> bool {
        self.interaction.is_dragging()
    }

    /// Amplitude the wave is settling toward.
    pub fn target_amplitude(&self) -> f32 {
        self.args.wave.target_amplitude(self.interaction)
    }

    /// Returns `true` while the phase runs or a tween is in flight.
    pub fn is_animating(&self) -> bool {
        self.phase_clock.is_running()
            || self.amplitude.is_running()
            || self.thumb_color.is_running()
    }

    /// Returns `true` once [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.phase_clock.is_disposed()
    }

    /// Feeds a drag lifecycle event from a host gesture source.
    ///
    /// Ending a drag reports the final value through `on_change_finished`.
    pub fn handle_drag(&mut self, event: DragInteraction, now: Instant) {
        if !self.args.enabled && event == DragInteraction::Start {
            return;
        }
        let previous = self.interaction;
        let next = previous.apply(event);
        if next == previous {
            return;
        }
        debug!(?previous, ?next, ?event, "wave slider drag transition");
        self.interaction = next;
        self.amplitude
            .animate_to(self.args.wave.target_amplitude(next), now);
        if previous.is_dragging() && !next.is_dragging() {
            // The gesture is over; a later release must not report it again.
            self.pointer_down = false;
            self.args.on_change_finished.call(self.args.value);
        }
        self.request_frame();
    }

    /// Feeds raw pointer input in track-local coordinates.
    ///
    /// A press jumps to the pressed position, moving while pressed drags, and
    /// releasing finishes the change.
    pub fn handle_pointer(&mut self, event: PointerEvent, now: Instant) {
        if !self.args.enabled {
            return;
        }
        match event {
            PointerEvent::Pressed { x } => {
                self.pointer_down = true;
                self.update_value_from_position(x);
            }
            PointerEvent::Moved { x } => {
                if !self.pointer_down {
                    return;
                }
                if !self.interaction.is_dragging() {
                    self.handle_drag(DragInteraction::Start, now);
                }
                self.update_value_from_position(x);
            }
            PointerEvent::Released | PointerEvent::Cancelled => {
                if !self.pointer_down {
                    return;
                }
                self.pointer_down = false;
                if self.interaction.is_dragging() {
                    let drag_event = if event == PointerEvent::Released {
                        DragInteraction::Stop
                    } else {
                        DragInteraction::Cancel
                    };
                    self.handle_drag(drag_event, now);
                } else {
                    self.args.on_change_finished.call(self.args.value);
                }
            }
        }
    }

    /// Advances the animations to `now` and describes the frame to draw.
    ///
    /// Requests another frame from the scheduler while anything is still
    /// animating.
    pub fn frame(&mut self, now: Instant) -> TrackFrame {
        self.sync_phase_clock(now);
        let phase = self.phase_clock.tick(now);
        let amplitude = self.amplitude.sample(now);
        let thumb_color = self.thumb_color.sample(now);

        let enabled = self.args.enabled;
        let colors = &self.args.colors;
        let wave = &self.args.wave;
        let width = self.track_size.x;
        let center_y = self.track_size.y / 2.0;

        let sampler = WaveSampler {
            value: self.args.value,
            track_width: width,
            amplitude,
            frequency: wave.frequency(),
            phase,
            reverse_direction: wave.animation_options.reverse_direction,
            center_y,
        };
        let end_x = sampler.end_x() as f32;
        let ticks = resolve_ticks(TickInputs {
            steps: wave.steps,
            value: sampler.clamped_value(),
            track_width: width,
            center_y,
            amplitude,
            enabled,
            colors,
        });

        let frame = TrackFrame {
            size: self.track_size,
            center_y,
            value: sampler.clamped_value(),
            phase,
            amplitude,
            wave_points: sampler.points().collect(),
            active_color: colors.active_track_color(enabled),
            inactive_start: Vec2::new(end_x, center_y),
            inactive_end: Vec2::new(width, center_y),
            inactive_color: colors.inactive_track_color(enabled),
            stroke: Stroke::round(wave.stroke_width),
            tick_stroke: Stroke::round(WaveSliderDefaults::TICK_STROKE_WIDTH),
            ticks,
            thumb: self.args.thumb.clone(),
            thumb_center: Vec2::new(end_x, center_y),
            thumb_color,
        };
        trace!(
            value = frame.value,
            phase,
            amplitude,
            points = frame.wave_points.len(),
            "wave slider frame"
        );

        if self.is_animating() {
            self.request_frame();
        }
        frame
    }

    /// Stops the phase clock and releases the scheduler. Frames can still be
    /// produced afterwards but never animate.
    pub fn dispose(&mut self) {
        if self.phase_clock.is_disposed() {
            return;
        }
        debug!("disposing wave slider controller");
        self.phase_clock.dispose();
        self.scheduler = None;
        self.pointer_down = false;
        self.interaction = InteractionState::Idle;
        self.amplitude
            .snap_to(self.args.wave.target_amplitude(self.interaction));
        self.thumb_color.snap_to(self.thumb_color.target());
    }

    fn sync_phase_clock(&mut self, now: Instant) {
        let should_run = self.args.enabled && self.args.wave.animation_options.animate_wave;
        match (should_run, self.phase_clock.is_running()) {
            (true, false) => self.phase_clock.start(now),
            (false, true) => self.phase_clock.pause(),
            _ => {}
        }
    }

    fn update_value_from_position(&mut self, x: f32) {
        let Some(raw) = position_to_value(x, self.track_size.x) else {
            return;
        };
        let value = snap_fraction(raw, self.args.wave.steps);
        if (value - self.args.value).abs() > f32::EPSILON {
            self.args.value = value;
            self.args.on_change.call(value);
            self.request_frame();
        }
    }

    fn request_frame(&self) {
        if let Some(scheduler) = &self.scheduler {
            scheduler.request_frame();
        }
    }
}

impl fmt::Debug for WaveSliderController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WaveSliderController")
            .field("value", &self.args.value)
            .field("interaction", &self.interaction)
            .field("phase", &self.phase_clock.phase())
            .field("amplitude", &self.amplitude.value())
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

fn clamp_value(value: f32) -> f32 {
    if value.is_nan() {
        warn!("wave slider value is NaN, using 0.0");
        return 0.0;
    }
    if !(0.0..=1.0).contains(&value) {
        warn!(value, "wave slider value outside [0, 1], clamping");
    }
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        time::Duration,
    };

    use parking_lot::Mutex;

    use super::*;
    use crate::params::WaveAnimationOptions;

    #[derive(Default)]
    struct CountingScheduler {
        requests: AtomicUsize,
    }

    impl FrameScheduler for CountingScheduler {
        fn request_frame(&self) {
            self.requests.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[derive(Default)]
    struct Events {
        changes: Mutex<Vec<f32>>,
        finished: Mutex<Vec<f32>>,
    }

    fn args_with_events(events: &Arc<Events>) -> WaveSliderArgs {
        let on_change = Arc::clone(events);
        let on_finished = Arc::clone(events);
        WaveSliderArgs::default()
            .on_change(move |v| on_change.changes.lock().push(v))
            .on_change_finished(move |v| on_finished.finished.lock().push(v))
    }

    fn controller(args: WaveSliderArgs) -> WaveSliderController {
        let mut controller = WaveSliderController::new(args).expect("valid args");
        controller.set_track_size(200.0, 200.0);
        controller
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_rejects_invalid_wave_params() {
        let mut args = WaveSliderArgs::default();
        args.wave = args.wave.animation_duration(Duration::ZERO);
        assert_eq!(
            WaveSliderController::new(args).err(),
            Some(WaveSliderError::ZeroAnimationDuration)
        );
    }

    #[test]
    fn test_static_wave_scenario() {
        let options = WaveAnimationOptions::default().animate_wave(false);
        let wave = WaveParams::new(15.0, 0.07)
            .expect("valid params")
            .animation_options(options);
        let mut controller = controller(WaveSliderArgs::default().value(0.5).wave(wave));

        let frame = controller.frame(Instant::now());
        assert_eq!(frame.center_y, 100.0);
        assert_eq!(frame.wave_points.len(), 101);
        for p in &frame.wave_points {
            let expected = 100.0 - 15.0 * (0.07 * p.x).sin();
            assert!((p.y - expected).abs() < 1e-4);
        }
        assert_eq!(frame.inactive_start, Vec2::new(100.0, 100.0));
        assert_eq!(frame.inactive_end, Vec2::new(200.0, 100.0));
        assert_eq!(frame.thumb_center, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_static_wave_never_advances() {
        let options = WaveAnimationOptions::default().animate_wave(false);
        let wave = WaveParams::default().animation_options(options);
        let mut controller = controller(WaveSliderArgs::default().value(0.8).wave(wave));

        let t0 = Instant::now();
        let first = controller.frame(t0);
        let second = controller.frame(t0 + ms(16));
        let later = controller.frame(t0 + ms(700));
        assert_eq!(first.phase, 0.0);
        assert_eq!(first, second);
        assert_eq!(first, later);
        assert!(!controller.is_animating());
    }

    #[test]
    fn test_animated_wave_travels() {
        let mut controller = controller(WaveSliderArgs::default().value(1.0));
        let t0 = Instant::now();
        let first = controller.frame(t0);
        let second = controller.frame(t0 + ms(250));
        assert_eq!(first.phase, 0.0);
        let expected = WaveParams::default().phase_cycle() / 4.0;
        assert!((second.phase - expected).abs() < 1e-2);
        assert_ne!(first.wave_points, second.wave_points);
        assert!(controller.is_animating());
    }

    #[test]
    fn test_disabled_slider_freezes_wave() {
        let mut controller = controller(WaveSliderArgs::default().value(1.0).enabled(false));
        let t0 = Instant::now();
        let first = controller.frame(t0);
        let second = controller.frame(t0 + ms(300));
        assert_eq!(first.phase, second.phase);
        assert_eq!(first.active_color, SliderColors::default().disabled_active_track);
        assert_eq!(first.thumb_color, SliderColors::default().disabled_thumb);
    }

    #[test]
    fn test_flatline_on_drag_targets_zero() {
        let mut controller = controller(WaveSliderArgs::default().value(0.5));
        let t0 = Instant::now();
        controller.handle_drag(DragInteraction::Start, t0);
        assert!(controller.is_dragging());
        assert_eq!(controller.target_amplitude(), 0.0);
        let frame = controller.frame(t0 + WaveSliderDefaults::AMPLITUDE_ANIMATION_DURATION);
        assert_eq!(frame.amplitude, 0.0);
        assert!(frame.is_flat());
    }

    #[test]
    fn test_reverse_flatline_waves_while_dragging() {
        let options = WaveAnimationOptions::default().reverse_flatline(true);
        let wave = WaveParams::default().animation_options(options);
        let mut controller = controller(WaveSliderArgs::default().wave(wave));
        let t0 = Instant::now();
        assert_eq!(controller.frame(t0).amplitude, 0.0);

        controller.handle_drag(DragInteraction::Start, t0);
        assert_eq!(controller.target_amplitude(), 15.0);
        let frame = controller.frame(t0 + ms(1000));
        assert_eq!(frame.amplitude, 15.0);
    }

    #[test]
    fn test_drag_start_stop_restores_amplitude() {
        let mut controller = controller(WaveSliderArgs::default().value(0.5));
        let t0 = Instant::now();
        assert_eq!(controller.frame(t0).amplitude, 15.0);

        controller.handle_drag(DragInteraction::Start, t0 + ms(10));
        controller.handle_drag(DragInteraction::Stop, t0 + ms(10));
        assert_eq!(controller.target_amplitude(), 15.0);

        let settle_at = t0 + ms(10) + WaveSliderDefaults::AMPLITUDE_ANIMATION_DURATION;
        let settled = controller.frame(settle_at);
        assert_eq!(settled.amplitude, 15.0);
    }

    #[test]
    fn test_amplitude_is_smoothed() {
        let mut controller = controller(WaveSliderArgs::default().value(0.5));
        let t0 = Instant::now();
        controller.frame(t0);
        controller.handle_drag(DragInteraction::Start, t0);
        let mid = controller.frame(t0 + ms(100)).amplitude;
        assert!(mid > 0.0 && mid < 15.0, "amplitude {mid}");
    }

    #[test]
    fn test_pointer_drag_notifies() {
        let events = Arc::new(Events::default());
        let mut controller = controller(args_with_events(&events));
        let t0 = Instant::now();

        controller.handle_pointer(PointerEvent::Pressed { x: 20.0 }, t0);
        assert!(!controller.is_dragging());
        controller.handle_pointer(PointerEvent::Moved { x: 60.0 }, t0 + ms(16));
        assert!(controller.is_dragging());
        controller.handle_pointer(PointerEvent::Moved { x: 60.0 }, t0 + ms(32));
        controller.handle_pointer(PointerEvent::Moved { x: 100.0 }, t0 + ms(48));
        controller.handle_pointer(PointerEvent::Released, t0 + ms(64));
        assert!(!controller.is_dragging());

        assert_eq!(*events.changes.lock(), vec![0.1, 0.3, 0.5]);
        assert_eq!(*events.finished.lock(), vec![0.5]);
        assert_eq!(controller.value(), 0.5);
    }

    #[test]
    fn test_click_without_drag_finishes_once() {
        let events = Arc::new(Events::default());
        let mut controller = controller(args_with_events(&events));
        let t0 = Instant::now();
        controller.handle_pointer(PointerEvent::Pressed { x: 150.0 }, t0);
        controller.handle_pointer(PointerEvent::Released, t0);
        controller.handle_pointer(PointerEvent::Released, t0);
        assert_eq!(*events.changes.lock(), vec![0.75]);
        assert_eq!(*events.finished.lock(), vec![0.75]);
        assert_eq!(controller.interaction_state(), InteractionState::Idle);
    }

    #[test]
    fn test_host_drag_stop_finishes_press_once() {
        let events = Arc::new(Events::default());
        let mut controller = controller(args_with_events(&events));
        let t0 = Instant::now();
        controller.handle_pointer(PointerEvent::Pressed { x: 20.0 }, t0);
        controller.handle_pointer(PointerEvent::Moved { x: 80.0 }, t0);
        controller.handle_drag(DragInteraction::Stop, t0);
        controller.handle_pointer(PointerEvent::Released, t0);
        controller.handle_pointer(PointerEvent::Moved { x: 120.0 }, t0);
        assert_eq!(*events.finished.lock(), vec![0.4]);
        assert_eq!(controller.value(), 0.4);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_snapped_press_keeps_tick_under_thumb_hidden() {
        let mut args = WaveSliderArgs::default();
        args.wave = args.wave.steps(24);
        let mut controller = WaveSliderController::new(args).expect("valid args");
        controller.set_track_size(250.0, 40.0);
        let t0 = Instant::now();
        controller.handle_pointer(PointerEvent::Pressed { x: 50.0 }, t0);
        controller.handle_pointer(PointerEvent::Released, t0);

        let frame = controller.frame(t0);
        assert_eq!(frame.amplitude, 15.0);
        let under_thumb = frame
            .ticks
            .iter()
            .find(|tick| (tick.fraction - 0.2).abs() < 1e-4)
            .expect("tick at 0.2");
        assert!(under_thumb.in_active_range);
        assert!(under_thumb.color.is_transparent());
    }

    #[test]
    fn test_steps_snap_pointer_values() {
        let events = Arc::new(Events::default());
        let mut args = args_with_events(&events);
        args.wave = args.wave.steps(3);
        let mut controller = controller(args);
        controller.handle_pointer(PointerEvent::Pressed { x: 74.0 }, Instant::now());
        assert_eq!(*events.changes.lock(), vec![0.25]);

        let frame = controller.frame(Instant::now());
        assert_eq!(frame.ticks.len(), 5);
    }

    #[test]
    fn test_disabled_slider_ignores_input() {
        let events = Arc::new(Events::default());
        let mut controller = controller(args_with_events(&events).enabled(false));
        let t0 = Instant::now();
        controller.handle_pointer(PointerEvent::Pressed { x: 100.0 }, t0);
        controller.handle_pointer(PointerEvent::Moved { x: 150.0 }, t0);
        controller.handle_drag(DragInteraction::Start, t0);
        assert!(!controller.is_dragging());
        assert!(events.changes.lock().is_empty());
        assert!(events.finished.lock().is_empty());
    }

    #[test]
    fn test_disabling_mid_drag_resets_state() {
        let mut controller = controller(WaveSliderArgs::default());
        let t0 = Instant::now();
        controller.handle_pointer(PointerEvent::Pressed { x: 10.0 }, t0);
        controller.handle_pointer(PointerEvent::Moved { x: 30.0 }, t0);
        assert!(controller.is_dragging());

        let args = controller.args().clone().enabled(false);
        controller.set_args(args, t0).expect("valid args");
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_thumb_color_animates_on_enable_toggle() {
        let mut controller = controller(WaveSliderArgs::default());
        let colors = SliderColors::default();
        let t0 = Instant::now();
        assert_eq!(controller.frame(t0).thumb_color, colors.thumb);

        let args = controller.args().clone().enabled(false);
        controller.set_args(args, t0).expect("valid args");
        let mid = controller.frame(t0 + ms(75)).thumb_color;
        assert_ne!(mid, colors.thumb);
        assert_ne!(mid, colors.disabled_thumb);
        let done = controller.frame(t0 + WaveSliderDefaults::THUMB_COLOR_ANIMATION_DURATION);
        assert_eq!(done.thumb_color, colors.disabled_thumb);
    }

    #[test]
    fn test_set_args_rejects_invalid_params() {
        let mut controller = controller(WaveSliderArgs::default());
        let mut args = WaveSliderArgs::default();
        args.wave = args.wave.stroke_width(f32::INFINITY);
        assert!(controller.set_args(args, Instant::now()).is_err());
        assert_eq!(controller.args().wave, WaveParams::default());
    }

    #[test]
    fn test_value_is_clamped() {
        let mut controller = controller(WaveSliderArgs::default().value(1.5));
        assert_eq!(controller.value(), 1.0);
        controller.set_value(-0.2);
        assert_eq!(controller.value(), 0.0);
        controller.set_value(f32::NAN);
        assert_eq!(controller.value(), 0.0);
        let frame = controller.frame(Instant::now());
        assert_eq!(frame.wave_points.len(), 1);
    }

    #[test]
    fn test_scheduler_requests_stop_after_dispose() {
        let scheduler = Arc::new(CountingScheduler::default());
        let mut controller = controller(WaveSliderArgs::default().value(0.5));
        controller.set_scheduler(scheduler.clone());
        let t0 = Instant::now();

        controller.frame(t0);
        let before = scheduler.requests.load(Ordering::SeqCst);
        assert!(before > 0);

        controller.dispose();
        assert!(controller.is_disposed());
        let frozen = controller.frame(t0 + ms(100)).phase;
        controller.frame(t0 + ms(600));
        assert_eq!(scheduler.requests.load(Ordering::SeqCst), before);
        assert_eq!(controller.frame(t0 + ms(900)).phase, frozen);
        assert!(!controller.is_animating());

        controller.set_scheduler(scheduler.clone());
        controller.frame(t0 + ms(1000));
        assert_eq!(scheduler.requests.load(Ordering::SeqCst), before);
    }

    #[test]
    fn test_custom_thumb_draws_with_frame_color() {
        use crate::{render::Canvas, thumb::ThumbContext};

        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        let thumb = Thumb::custom(move |_: &mut dyn Canvas, context: ThumbContext| {
            *sink.lock() = Some(context);
        });
        let mut controller = controller(WaveSliderArgs::default().value(0.25).thumb(thumb));
        let frame = controller.frame(Instant::now());

        struct Nop;
        impl Canvas for Nop {
            fn draw_path(&mut self, _: &lyon_path::Path, _: Color, _: Stroke) {}
            fn fill_path(&mut self, _: &lyon_path::Path, _: Color) {}
            fn draw_line(&mut self, _: Vec2, _: Vec2, _: Color, _: Stroke) {}
            fn draw_points(&mut self, _: &[Vec2], _: Color, _: Stroke) {}
        }
        frame.draw(&mut Nop);

        let context = seen.lock().expect("custom thumb was drawn");
        assert_eq!(context.center, Vec2::new(50.0, 100.0));
        assert_eq!(context.color, SliderColors::default().thumb);
    }
}
