/// Coalesces bursts of events into at most one unit of work per frame.
///
/// The host calls [`FrameThrottle::request`] for every event and schedules a
/// frame callback only when it returns `true`. The callback calls
/// [`FrameThrottle::take`] first, so events arriving while the work runs
/// schedule the next frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks work as pending. `true` means a frame callback must be scheduled now.
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    /// Clears the pending flag, reporting whether work was requested.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
