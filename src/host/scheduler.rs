//! Per-frame callback registration.
//!
//! The host owns the frame clock. The engine asks for frames with
//! [`FrameScheduler::register`] and releases them with
//! [`FrameScheduler::cancel`]; every frame the host delivers carries the
//! registration it was issued for, so frames from a cancelled registration
//! can be recognized and dropped.

use std::time::Duration;

use crate::error::ScheduleError;

/// Handle for one per-frame callback registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistrationId(u64);

impl RegistrationId {
    /// Raw id value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// One frame callback invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Registration this frame was delivered for.
    pub registration: RegistrationId,
    /// Host clock reading, monotonically increasing across frames.
    pub time: Duration,
}

/// Host primitive for registering cancelable per-frame callbacks.
pub trait FrameScheduler {
    /// Start delivering frames for a new registration.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] if the host refuses the registration.
    fn register(&mut self) -> Result<RegistrationId, ScheduleError>;

    /// Stop delivering frames for `id`. Must take effect before the next
    /// registration is issued.
    fn cancel(&mut self, id: RegistrationId);
}

/// Scheduler that allows at most one live registration.
///
/// Registering while another registration is still live is refused, which
/// keeps two frame handlers from ever running side by side.
#[derive(Debug, Default)]
pub struct ExclusiveScheduler {
    next_id: u64,
    active: Option<RegistrationId>,
    registered: u64,
    cancelled: u64,
}

impl ExclusiveScheduler {
    /// Scheduler with no live registration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The live registration, if any.
    #[must_use]
    pub fn active(&self) -> Option<RegistrationId> {
        self.active
    }

    /// Frame for the live registration at `time`, if any.
    #[must_use]
    pub fn frame_at(&self, time: Duration) -> Option<Frame> {
        self.active.map(|registration| Frame { registration, time })
    }

    /// Total registrations issued.
    #[must_use]
    pub fn registered(&self) -> u64 {
        self.registered
    }

    /// Total registrations cancelled.
    #[must_use]
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for ExclusiveScheduler {
    fn register(&mut self) -> Result<RegistrationId, ScheduleError> {
        if let Some(live) = self.active {
            return Err(ScheduleError(format!(
                "registration {} is still live",
                live.get()
            )));
        }
        let id = RegistrationId(self.next_id);
        self.next_id += 1;
        self.registered += 1;
        self.active = Some(id);
        Ok(id)
    }

    fn cancel(&mut self, id: RegistrationId) {
        if self.active == Some(id) {
            self.active = None;
            self.cancelled += 1;
        }
    }
}
