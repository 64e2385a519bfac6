//! Owned animation state: playlist cursors and the transition clock.

use std::time::Duration;

use super::playlist::Playlist;

/// Where the current transition is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationPhase {
    /// Transition set up, no frame seen yet.
    #[default]
    WaitingForFirstFrame,
    /// Start time recorded, points moving.
    Animating,
    /// Every point reached its end state.
    Complete,
}

/// Everything that survives from one frame to the next apart from the
/// points themselves.
#[derive(Debug, Clone)]
pub struct AnimationContext {
    playlist: Playlist,
    start_time: Option<Duration>,
    phase: AnimationPhase,
    cycles: u64,
}

impl AnimationContext {
    /// Fresh context at the first playlist entry.
    #[must_use]
    pub fn new(playlist: Playlist) -> Self {
        Self {
            playlist,
            start_time: None,
            phase: AnimationPhase::WaitingForFirstFrame,
            cycles: 0,
        }
    }

    /// Time since the transition's first frame.
    ///
    /// The first call after a transition begins records `frame_time` as the
    /// start time and returns zero. Frame times earlier than the start time
    /// saturate to zero.
    pub fn elapsed_at(&mut self, frame_time: Duration) -> Duration {
        let start = *self.start_time.get_or_insert(frame_time);
        if self.phase == AnimationPhase::WaitingForFirstFrame {
            self.phase = AnimationPhase::Animating;
        }
        frame_time.saturating_sub(start)
    }

    /// Mark the current transition complete.
    pub fn complete(&mut self) {
        self.phase = AnimationPhase::Complete;
    }

    /// Move on to the next playlist entry and clear the clock.
    ///
    /// Returns `true` if either playlist cursor wrapped.
    pub fn next_cycle(&mut self) -> bool {
        let wrapped = self.playlist.advance();
        if wrapped {
            log::debug!(
                "playlist wrapped (layout {}/{}, color {}/{})",
                self.playlist.layout_cursor(),
                self.playlist.layout_count(),
                self.playlist.color_cursor(),
                self.playlist.color_scale_count(),
            );
        }
        self.start_time = None;
        self.phase = AnimationPhase::WaitingForFirstFrame;
        self.cycles += 1;
        wrapped
    }

    /// The playlist and its cursors.
    #[must_use]
    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Host time of the transition's first frame, once seen.
    #[must_use]
    pub fn start_time(&self) -> Option<Duration> {
        self.start_time
    }

    /// Lifecycle phase of the current transition.
    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Transitions completed so far.
    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        color::ColorScaleKind,
        layout::{shared, SpiralLayout},
    };

    fn context() -> AnimationContext {
        let playlist = Playlist::new(
            vec![shared(SpiralLayout::new(5.0, 10.0, 10.0))],
            vec![ColorScaleKind::Viridis.playlist_scale().unwrap()],
        )
        .unwrap();
        AnimationContext::new(playlist)
    }

    #[test]
    fn first_frame_records_start_time() {
        let mut ctx = context();
        assert_eq!(ctx.phase(), AnimationPhase::WaitingForFirstFrame);
        assert_eq!(ctx.elapsed_at(Duration::from_secs(10)), Duration::ZERO);
        assert_eq!(ctx.start_time(), Some(Duration::from_secs(10)));
        assert_eq!(ctx.phase(), AnimationPhase::Animating);
        assert_eq!(
            ctx.elapsed_at(Duration::from_millis(10_250)),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn next_cycle_resets_clock() {
        let mut ctx = context();
        let _ = ctx.elapsed_at(Duration::from_secs(1));
        ctx.complete();
        assert_eq!(ctx.phase(), AnimationPhase::Complete);
        assert!(ctx.next_cycle());
        assert_eq!(ctx.start_time(), None);
        assert_eq!(ctx.phase(), AnimationPhase::WaitingForFirstFrame);
        assert_eq!(ctx.cycles(), 1);
        assert_eq!(ctx.elapsed_at(Duration::from_secs(7)), Duration::ZERO);
    }

    #[test]
    fn clock_never_runs_backwards() {
        let mut ctx = context();
        let _ = ctx.elapsed_at(Duration::from_secs(5));
        assert_eq!(ctx.elapsed_at(Duration::from_secs(4)), Duration::ZERO);
    }
}
