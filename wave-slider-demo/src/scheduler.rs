use parking_lot::Mutex;
use wave_slider::controller::FrameScheduler;

/// Frame scheduler for the offline render loop: it only records that the
/// slider asked for another frame.
#[derive(Default)]
pub struct ManualScheduler {
    state: Mutex<SchedulerState>,
}

#[derive(Default)]
struct SchedulerState {
    pending: bool,
    requests: u64,
}

impl ManualScheduler {
    /// Returns whether a frame was requested since the last call, clearing
    /// the flag.
    pub fn take_pending(&self) -> bool {
        std::mem::take(&mut self.state.lock().pending)
    }

    pub fn requests(&self) -> u64 {
        self.state.lock().requests
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self) {
        let mut state = self.state.lock();
        state.pending = true;
        state.requests += 1;
    }
}
