//! Scripted slider session: press, drag across the track, release.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use parking_lot::Mutex;
use tracing::{debug, info};
use wave_slider::{
    controller::{WaveSliderArgs, WaveSliderController},
    interaction::PointerEvent,
};

use crate::{scheduler::ManualScheduler, svg::SvgCanvas};

/// Pointer input scheduled for a frame index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScriptStep {
    pub frame: u32,
    pub event: PointerEvent,
}

/// Presses at the thumb during the second quarter of the run, drags it
/// towards the far end, then releases.
pub fn drag_script(frames: u32, width: f32, start_value: f32) -> Vec<ScriptStep> {
    let (press, release) = gesture_window(frames);
    if release <= press + 1 {
        return Vec::new();
    }
    let from = start_value.clamp(0.0, 1.0) * width;
    let to = width * 0.85;
    let mut steps = vec![ScriptStep {
        frame: press,
        event: PointerEvent::Pressed { x: from },
    }];
    let span = (release - press - 1) as f32;
    steps.extend((press + 1..release).map(|frame| {
        let t = (frame - press) as f32 / span;
        ScriptStep {
            frame,
            event: PointerEvent::Moved {
                x: from + (to - from) * t,
            },
        }
    }));
    steps.push(ScriptStep {
        frame: release,
        event: PointerEvent::Released,
    });
    steps
}

/// Press and release frame indices: the end of the first quarter and the end
/// of the third.
fn gesture_window(frames: u32) -> (u32, u32) {
    (frames / 4, frames - frames / 4)
}

/// What happened during a session.
#[derive(Debug, Default)]
pub struct SessionReport {
    pub rendered: Vec<PathBuf>,
    pub skipped: u32,
    pub changes: usize,
    pub finished_value: Option<f32>,
    pub frame_requests: u64,
}

#[derive(Default)]
struct Notifications {
    changes: usize,
    finished: Option<f32>,
}

pub struct Session {
    controller: WaveSliderController,
    scheduler: Arc<ManualScheduler>,
    notifications: Arc<Mutex<Notifications>>,
    interval: Duration,
}

impl Session {
    pub fn new(args: WaveSliderArgs, size: (f32, f32), interval: Duration) -> Result<Self> {
        let notifications = Arc::new(Mutex::new(Notifications::default()));
        let on_change = Arc::clone(&notifications);
        let on_finished = Arc::clone(&notifications);
        let args = args
            .on_change(move |value| {
                debug!(value, "value changed");
                on_change.lock().changes += 1;
            })
            .on_change_finished(move |value| {
                info!(value, "value change finished");
                on_finished.lock().finished = Some(value);
            });

        let mut controller =
            WaveSliderController::new(args).context("Failed to create wave slider")?;
        controller.set_track_size(size.0, size.1);
        let scheduler = Arc::new(ManualScheduler::default());
        controller.set_scheduler(scheduler.clone());

        Ok(Self {
            controller,
            scheduler,
            notifications,
            interval,
        })
    }

    /// Runs `frames` simulated frames, writing each rendered one to `output`.
    ///
    /// Like a real host, a frame is only drawn when the slider requested one
    /// or input arrived.
    pub fn run(
        mut self,
        frames: u32,
        script: &[ScriptStep],
        output: &Path,
    ) -> Result<SessionReport> {
        fs::create_dir_all(output)
            .with_context(|| format!("Failed to create output directory {}", output.display()))?;

        let start = Instant::now();
        let mut report = SessionReport::default();
        let mut script = script.iter().peekable();

        for index in 0..frames {
            let now = start + self.interval * index;
            let mut had_input = false;
            while let Some(step) = script.next_if(|step| step.frame == index) {
                self.controller.handle_pointer(step.event, now);
                had_input = true;
            }

            if index > 0 && !had_input && !self.scheduler.take_pending() {
                debug!(frame = index, "slider idle, skipping frame");
                report.skipped += 1;
                continue;
            }

            let frame = self.controller.frame(now);
            let mut canvas = SvgCanvas::new(frame.size.x, frame.size.y);
            frame.draw(&mut canvas);

            let path = output.join(format!("frame_{index:04}.svg"));
            fs::write(&path, canvas.finish())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            report.rendered.push(path);
        }

        self.controller.dispose();
        let notifications = self.notifications.lock();
        report.changes = notifications.changes;
        report.finished_value = notifications.finished;
        report.frame_requests = self.scheduler.requests();
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use wave_slider::params::{WaveAnimationOptions, WaveParams};

    use super::*;

    #[test]
    fn test_drag_script_shape() {
        let script = drag_script(40, 200.0, 0.25);
        assert_eq!(script.first().map(|s| s.frame), Some(10));
        assert_eq!(script.first().map(|s| s.event), Some(PointerEvent::Pressed { x: 50.0 }));
        assert_eq!(
            script.last().map(|s| (s.frame, s.event)),
            Some((30, PointerEvent::Released))
        );
        assert_eq!(script.len(), 21);
        assert!(drag_script(2, 200.0, 0.5).is_empty());
    }

    #[test]
    fn test_gesture_window_handles_large_frame_counts() {
        assert_eq!(gesture_window(40), (10, 30));
        assert_eq!(gesture_window(u32::MAX), (1_073_741_823, 3_221_225_472));
    }

    #[test]
    fn test_session_renders_and_reports() {
        let temp_dir = tempfile::tempdir().expect("temp dir");
        let output = temp_dir.path().join("frames");
        let args = WaveSliderArgs::default().value(0.25);
        let session = Session::new(args, (200.0, 40.0), Duration::from_millis(33))
            .expect("valid session");
        let script = drag_script(20, 200.0, 0.25);
        let report = session.run(20, &script, &output).expect("session runs");

        assert_eq!(report.rendered.len(), 20);
        assert_eq!(report.skipped, 0);
        assert!(report.changes > 0);
        let finished = report.finished_value.expect("release finishes the change");
        assert!((finished - 0.85).abs() < 0.02, "finished at {finished}");
        assert!(report.rendered.iter().all(|p| p.exists()));
    }

    #[test]
    fn test_still_session_skips_idle_frames() {
        let temp_dir = tempfile::tempdir().expect("temp dir");
        let output = temp_dir.path().join("frames");
        let wave = WaveParams::default()
            .animation_options(WaveAnimationOptions::default().animate_wave(false));
        let args = WaveSliderArgs::default().value(0.5).wave(wave);
        let session = Session::new(args, (200.0, 40.0), Duration::from_millis(33))
            .expect("valid session");
        let report = session.run(10, &[], &output).expect("session runs");

        assert_eq!(report.rendered.len(), 1);
        assert_eq!(report.skipped, 9);
        assert_eq!(report.changes, 0);
        assert_eq!(report.finished_value, None);
    }
}
