//! Animation driver: turns host frames into draws and keeps the playlist
//! cycling.

use std::time::Duration;

use rand::{rngs::StdRng, SeedableRng};

use super::{
    context::AnimationContext,
    playlist::Playlist,
    stagger::StaggerTiming,
    transition::{begin_transition, TransitionInfo},
};
use crate::{
    error::PointmorphError,
    host::{
        Background, Frame, FrameScheduler, FrameUniforms, PointAttributes,
        RegistrationId, RenderBackend,
    },
    options::Options,
    points::PointStore,
};

/// Canvas the points are drawn on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    /// Canvas width in pixels.
    pub width: f32,
    /// Canvas height in pixels.
    pub height: f32,
    /// Rendered point size in pixels.
    pub point_width: f32,
    /// Clear color.
    pub background: Background,
}

/// What a call to [`AnimationDriver::on_frame`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Frame belonged to a cancelled registration; nothing was drawn.
    Ignored,
    /// Frame drawn, transition still running.
    Drawn {
        /// Time since the transition's first frame.
        elapsed: Duration,
    },
    /// Frame drawn, transition finished and the next one has begun.
    Cycled {
        /// Time since the finished transition's first frame.
        elapsed: Duration,
    },
}

/// Drives transitions from host frame callbacks.
///
/// One registration is live at a time. When a transition completes the
/// driver cancels its registration, advances the playlist, begins the next
/// transition, recompiles the draw call, and registers again, all inside the
/// frame callback that observed completion.
pub struct AnimationDriver<B: RenderBackend, S: FrameScheduler> {
    context: AnimationContext,
    store: PointStore,
    timing: StaggerTiming,
    stage: Stage,
    rng: StdRng,
    backend: B,
    scheduler: S,
    draw_call: B::DrawCall,
    registration: Option<RegistrationId>,
    transition: TransitionInfo,
}

impl<B: RenderBackend, S: FrameScheduler> AnimationDriver<B, S> {
    /// Validate `options`, build every component, and begin the first
    /// transition.
    ///
    /// # Errors
    ///
    /// Returns [`PointmorphError::Config`] for invalid options, or the
    /// backend/scheduler error if the first transition cannot be set up.
    pub fn new(
        options: &Options,
        backend: B,
        scheduler: S,
    ) -> Result<Self, PointmorphError> {
        options.validate()?;
        let stage = options.stage();
        let seed = options.playlist.seed_color_scale.ramp()?;
        let store = PointStore::initialize(
            options.points.count,
            stage.point_width,
            stage.width,
            stage.height,
            &seed,
        )?;
        let playlist = Playlist::from_options(options)?;
        let rng = StdRng::from_rng(&mut rand::rng());
        Self::from_parts(
            store,
            playlist,
            options.stagger_timing(),
            stage,
            rng,
            backend,
            scheduler,
        )
    }

    /// Assemble a driver from prebuilt components and begin the first
    /// transition with the playlist's current entry.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the draw call cannot be compiled, or the
    /// scheduler error if the frame registration is refused.
    pub fn from_parts(
        mut store: PointStore,
        playlist: Playlist,
        timing: StaggerTiming,
        stage: Stage,
        mut rng: StdRng,
        mut backend: B,
        mut scheduler: S,
    ) -> Result<Self, PointmorphError> {
        let context = AnimationContext::new(playlist);
        let transition = prepare(&mut store, &context, &mut rng);
        let draw_call =
            backend.compile_draw_call(&PointAttributes::from_store(&store))?;
        let registration = Some(scheduler.register()?);
        log::info!(
            "animating {} points, {:?} per transition",
            store.len(),
            timing.max_duration(store.len()),
        );
        Ok(Self {
            context,
            store,
            timing,
            stage,
            rng,
            backend,
            scheduler,
            draw_call,
            registration,
            transition,
        })
    }

    /// Handle one frame callback.
    ///
    /// Frames from any registration other than the live one are ignored.
    ///
    /// # Errors
    ///
    /// Surfaces backend and scheduler failures unchanged. There is no retry;
    /// after an error during cycling the driver holds no registration.
    pub fn on_frame(
        &mut self,
        frame: Frame,
    ) -> Result<FrameOutcome, PointmorphError> {
        if self.registration != Some(frame.registration) {
            log::trace!(
                "ignoring frame for stale registration {}",
                frame.registration.get()
            );
            return Ok(FrameOutcome::Ignored);
        }

        let elapsed = self.context.elapsed_at(frame.time);
        let uniforms = self.uniforms(elapsed);
        self.backend.clear(self.stage.background)?;
        self.backend.draw(&self.draw_call, &uniforms)?;

        if !self.timing.is_complete(elapsed, self.store.len()) {
            return Ok(FrameOutcome::Drawn { elapsed });
        }

        self.context.complete();
        self.next_transition()?;
        Ok(FrameOutcome::Cycled { elapsed })
    }

    fn next_transition(&mut self) -> Result<(), PointmorphError> {
        self.stop();
        let _ = self.context.next_cycle();
        self.transition = prepare(&mut self.store, &self.context, &mut self.rng);
        self.draw_call = self
            .backend
            .compile_draw_call(&PointAttributes::from_store(&self.store))?;
        self.registration = Some(self.scheduler.register()?);
        Ok(())
    }

    /// Cancel the live registration, if any. Later frames are ignored.
    pub fn stop(&mut self) {
        if let Some(id) = self.registration.take() {
            self.scheduler.cancel(id);
        }
    }

    /// Uniforms for a frame `elapsed` into the current transition.
    #[must_use]
    pub fn uniforms(&self, elapsed: Duration) -> FrameUniforms {
        FrameUniforms {
            point_width: self.stage.point_width,
            stage_width: self.stage.width,
            stage_height: self.stage.height,
            elapsed: elapsed.as_secs_f32(),
            duration: self.timing.duration.as_secs_f32(),
            delay_per_index: self.timing.delay_per_index.as_secs_f32(),
            easing: self.timing.easing.shader_id(),
            _pad: 0,
        }
    }

    /// The point store.
    #[must_use]
    pub fn store(&self) -> &PointStore {
        &self.store
    }

    /// Playlist cursors and transition clock.
    #[must_use]
    pub fn context(&self) -> &AnimationContext {
        &self.context
    }

    /// Timing shared by every transition.
    #[must_use]
    pub fn timing(&self) -> &StaggerTiming {
        &self.timing
    }

    /// Canvas geometry.
    #[must_use]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// The transition in progress.
    #[must_use]
    pub fn transition(&self) -> &TransitionInfo {
        &self.transition
    }

    /// The live registration, if any.
    #[must_use]
    pub fn registration(&self) -> Option<RegistrationId> {
        self.registration
    }

    /// The render backend.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable render backend, e.g. for surface resizes.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// The frame scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

/// Begin a transition with the playlist's current entry.
fn prepare(
    store: &mut PointStore,
    context: &AnimationContext,
    rng: &mut StdRng,
) -> TransitionInfo {
    let (layout, colors) = context.playlist().current();
    begin_transition(store, layout.as_ref(), colors.as_ref(), rng);
    let info = TransitionInfo {
        sequence: context.cycles(),
        layout: layout.name().to_owned(),
        color_scale: colors.name().to_owned(),
    };
    log::debug!(
        "transition {}: {} / {} over {} points",
        info.sequence,
        info.layout,
        info.color_scale,
        store.len(),
    );
    info
}
