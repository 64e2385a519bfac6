//! End-to-end transition cycles with an in-memory scheduler and a backend
//! that records what it is asked to draw.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::time::Duration;

use glam::Vec2;
use pointmorph::{
    animation::{
        AnimationDriver, AnimationPhase, FrameOutcome, Playlist, Stage,
        StaggerTiming,
    },
    color::{ColorScaleKind, SharedColorScale},
    error::{PointmorphError, RenderError, ScheduleError},
    host::{
        Background, ExclusiveScheduler, Frame, FrameScheduler, FrameUniforms,
        PointAttributes, RegistrationId, RenderBackend,
    },
    layout::{shared, GridLayout, SharedLayout, SineLayout, SpiralLayout},
    options::Options,
    points::PointStore,
    util::easing::EasingFunction,
};
use rand::{rngs::StdRng, SeedableRng};

const WIDTH: f32 = 200.0;
const HEIGHT: f32 = 100.0;

#[derive(Default)]
struct RecordingBackend {
    compiled: Vec<PointAttributes>,
    clears: Vec<Background>,
    draws: Vec<(usize, FrameUniforms)>,
    fail_compile: bool,
}

impl RenderBackend for RecordingBackend {
    type DrawCall = usize;

    fn compile_draw_call(
        &mut self,
        attributes: &PointAttributes,
    ) -> Result<usize, RenderError> {
        if self.fail_compile {
            return Err(RenderError::Backend("out of buffers".into()));
        }
        self.compiled.push(attributes.clone());
        Ok(self.compiled.len() - 1)
    }

    fn clear(&mut self, background: Background) -> Result<(), RenderError> {
        self.clears.push(background);
        Ok(())
    }

    fn draw(
        &mut self,
        call: &usize,
        uniforms: &FrameUniforms,
    ) -> Result<(), RenderError> {
        self.draws.push((*call, *uniforms));
        Ok(())
    }
}

struct RefusingScheduler;

impl FrameScheduler for RefusingScheduler {
    fn register(&mut self) -> Result<RegistrationId, ScheduleError> {
        Err(ScheduleError("host closed".into()))
    }

    fn cancel(&mut self, _id: RegistrationId) {}
}

type TestDriver = AnimationDriver<RecordingBackend, ExclusiveScheduler>;

fn layouts() -> Vec<SharedLayout> {
    vec![
        shared(SpiralLayout::new(5.0, WIDTH, HEIGHT)),
        shared(GridLayout::new(5.0, WIDTH).unwrap()),
    ]
}

fn colors() -> Vec<SharedColorScale> {
    [
        ColorScaleKind::Viridis,
        ColorScaleKind::Inferno,
        ColorScaleKind::RdYlGn,
    ]
    .iter()
    .map(|k| k.playlist_scale().unwrap())
    .collect()
}

fn stage() -> Stage {
    Stage {
        width: WIDTH,
        height: HEIGHT,
        point_width: 4.0,
        background: Background {
            color: [0.1, 0.2, 0.3, 1.0],
        },
    }
}

/// 100 ms per point, 1 ms stagger: 10 points finish after 110 ms.
fn timing() -> StaggerTiming {
    StaggerTiming::new(
        Duration::from_millis(100),
        Duration::from_millis(1),
        EasingFunction::CubicInOut,
    )
}

fn store(count: usize) -> PointStore {
    let seed = ColorScaleKind::Viridis.ramp().unwrap();
    PointStore::initialize(count, 4.0, WIDTH, HEIGHT, &seed).unwrap()
}

fn driver_with(count: usize, timing: StaggerTiming) -> TestDriver {
    AnimationDriver::from_parts(
        store(count),
        Playlist::new(layouts(), colors()).unwrap(),
        timing,
        stage(),
        StdRng::seed_from_u64(7),
        RecordingBackend::default(),
        ExclusiveScheduler::new(),
    )
    .unwrap()
}

fn frame(driver: &TestDriver, ms: u64) -> Frame {
    driver
        .scheduler()
        .frame_at(Duration::from_millis(ms))
        .unwrap()
}

/// Deliver frames until the transition completes. Returns the time of the
/// completing frame.
fn run_cycle(driver: &mut TestDriver, start_ms: u64) -> u64 {
    let mut t = start_ms;
    loop {
        let f = frame(driver, t);
        if let FrameOutcome::Cycled { .. } = driver.on_frame(f).unwrap() {
            return t;
        }
        t += 16;
    }
}

#[test]
fn construction_begins_first_transition() {
    let driver = driver_with(10, timing());
    assert_eq!(driver.backend().compiled.len(), 1);
    assert!(driver.registration().is_some());
    assert_eq!(driver.scheduler().registered(), 1);
    assert_eq!(driver.context().phase(), AnimationPhase::WaitingForFirstFrame);
    assert_eq!(driver.transition().layout, "spiral");
    assert_eq!(driver.transition().color_scale, "viridis");

    let center = Vec2::new(WIDTH / 2.0, HEIGHT / 2.0);
    for p in driver.store().points() {
        assert_eq!(p.previous(), center);
    }
    // Spiral index 0 sits on the center.
    assert_eq!(driver.store().points()[0].position(), center);
}

#[test]
fn first_frame_starts_the_clock() {
    let mut driver = driver_with(10, timing());
    let outcome = driver.on_frame(frame(&driver, 5000)).unwrap();
    assert_eq!(
        outcome,
        FrameOutcome::Drawn {
            elapsed: Duration::ZERO
        }
    );
    assert_eq!(driver.context().start_time(), Some(Duration::from_secs(5)));
    assert_eq!(driver.context().phase(), AnimationPhase::Animating);

    let outcome = driver.on_frame(frame(&driver, 5040)).unwrap();
    assert_eq!(
        outcome,
        FrameOutcome::Drawn {
            elapsed: Duration::from_millis(40)
        }
    );

    let backend = driver.backend();
    assert_eq!(backend.clears.len(), 2);
    assert_eq!(backend.clears[0], stage().background);
    let (call, uniforms) = backend.draws[1];
    assert_eq!(call, 0);
    assert!((uniforms.elapsed - 0.04).abs() < 1e-6);
    assert!((uniforms.duration - 0.1).abs() < 1e-6);
    assert!((uniforms.delay_per_index - 0.001).abs() < 1e-6);
    assert_eq!(uniforms.stage_width, WIDTH);
    assert_eq!(uniforms.easing, EasingFunction::CubicInOut.shader_id());
}

#[test]
fn completes_only_after_worst_case_stagger() {
    let mut driver = driver_with(10, timing());
    let _ = driver.on_frame(frame(&driver, 0)).unwrap();
    assert!(matches!(
        driver.on_frame(frame(&driver, 110)).unwrap(),
        FrameOutcome::Drawn { .. }
    ));
    assert_eq!(
        driver.on_frame(frame(&driver, 111)).unwrap(),
        FrameOutcome::Cycled {
            elapsed: Duration::from_millis(111)
        }
    );
}

#[test]
fn cycle_snapshots_targets_and_advances_playlist() {
    let mut driver = driver_with(10, timing());
    let targets: Vec<Vec2> =
        driver.store().points().iter().map(|p| p.position()).collect();

    let _ = run_cycle(&mut driver, 0);

    for (p, target) in driver.store().points().iter().zip(&targets) {
        assert_eq!(p.previous(), *target);
    }
    let playlist = driver.context().playlist();
    assert_eq!(playlist.layout_cursor(), 1);
    assert_eq!(playlist.color_cursor(), 1);
    assert_eq!(driver.transition().layout, "grid");
    assert_eq!(driver.transition().sequence, 1);
    assert_eq!(driver.context().start_time(), None);
    assert_eq!(driver.context().phase(), AnimationPhase::WaitingForFirstFrame);

    // Grid with 5 px cells over 200 px: 40 columns.
    assert_eq!(driver.store().points()[3].position(), Vec2::new(15.0, 0.0));

    let scheduler = driver.scheduler();
    assert_eq!(scheduler.registered(), 2);
    assert_eq!(scheduler.cancelled(), 1);
    assert_eq!(driver.backend().compiled.len(), 2);
}

#[test]
fn compiled_buffers_carry_start_and_end_state() {
    let mut driver = driver_with(10, timing());
    let _ = run_cycle(&mut driver, 0);
    let attributes = &driver.backend().compiled[1];
    assert_eq!(attributes.len(), 10);
    for (v, p) in attributes.vertices.iter().zip(driver.store().points()) {
        assert_eq!(v.position_start, p.previous().to_array());
        assert_eq!(v.position_end, p.position().to_array());
        assert_eq!(v.color_start, p.color_start());
        assert_eq!(v.color_end, p.color_end());
        assert_eq!(v.index, p.id() as f32);
    }
}

#[test]
fn cursors_wrap_independently_over_many_cycles() {
    let mut driver = driver_with(10, timing());
    let mut seen = Vec::new();
    let mut t = 0;
    for _ in 0..6 {
        t = run_cycle(&mut driver, t + 1000);
        let playlist = driver.context().playlist();
        seen.push((playlist.layout_cursor(), playlist.color_cursor()));
    }
    assert_eq!(
        seen,
        vec![(1, 1), (0, 2), (1, 0), (0, 1), (1, 2), (0, 0)]
    );
    assert_eq!(driver.context().cycles(), 6);
}

#[test]
fn end_colors_chain_into_next_start_colors() {
    let mut driver = driver_with(16, timing());
    let mut t = 0;
    for _ in 0..3 {
        let ends: Vec<_> =
            driver.store().points().iter().map(|p| p.color_end()).collect();
        t = run_cycle(&mut driver, t + 1000);
        for (p, end) in driver.store().points().iter().zip(&ends) {
            assert_eq!(p.color_start(), *end);
        }
    }
}

#[test]
fn stale_frames_are_ignored() {
    let mut driver = driver_with(10, timing());
    let stale = frame(&driver, 0);
    let _ = driver.on_frame(stale).unwrap();
    let _ = run_cycle(&mut driver, 16);

    let draws = driver.backend().draws.len();
    let late = Frame {
        registration: stale.registration,
        time: Duration::from_millis(500),
    };
    assert_eq!(driver.on_frame(late).unwrap(), FrameOutcome::Ignored);
    assert_eq!(driver.backend().draws.len(), draws);
    assert_eq!(driver.context().start_time(), None);
}

#[test]
fn stop_cancels_registration() {
    let mut driver = driver_with(10, timing());
    let f = frame(&driver, 0);
    driver.stop();
    assert!(driver.scheduler().active().is_none());
    assert_eq!(driver.on_frame(f).unwrap(), FrameOutcome::Ignored);
}

#[test]
fn zero_duration_snaps_on_first_frame() {
    let timing = StaggerTiming::new(
        Duration::ZERO,
        Duration::from_millis(5),
        EasingFunction::CubicInOut,
    );
    let mut driver = driver_with(20, timing);
    let _ = driver.on_frame(frame(&driver, 0)).unwrap();

    let state = driver.store().interpolate(driver.timing(), Duration::ZERO);
    for (s, p) in state.iter().zip(driver.store().points()) {
        assert_eq!(s.t, 1.0);
        assert_eq!(s.position, p.position());
        assert_eq!(s.color, p.color_end());
    }
}

#[test]
fn points_wait_for_their_delay() {
    let mut driver = driver_with(10, timing());
    let _ = driver.on_frame(frame(&driver, 0)).unwrap();
    let state = driver
        .store()
        .interpolate(driver.timing(), Duration::from_micros(4500));
    for s in &state {
        if s.id >= 5 {
            assert_eq!(s.t, 0.0);
            let p = driver.store().points()[s.id as usize];
            assert_eq!(s.position, p.previous());
        } else {
            assert!(s.t > 0.0);
        }
    }
}

#[test]
fn single_entry_playlist_repeats() {
    let mut driver = AnimationDriver::from_parts(
        store(8),
        Playlist::new(
            vec![shared(SineLayout::new(5.0, WIDTH, HEIGHT))],
            vec![ColorScaleKind::Inferno.playlist_scale().unwrap()],
        )
        .unwrap(),
        timing(),
        stage(),
        StdRng::seed_from_u64(1),
        RecordingBackend::default(),
        ExclusiveScheduler::new(),
    )
    .unwrap();
    let t = run_cycle(&mut driver, 0);
    let _ = run_cycle(&mut driver, t + 100);
    assert_eq!(driver.transition().layout, "sine");
    assert_eq!(driver.context().playlist().layout_cursor(), 0);
    assert_eq!(driver.context().cycles(), 2);
}

#[test]
fn compile_failure_surfaces_to_caller() {
    let backend = RecordingBackend {
        fail_compile: true,
        ..RecordingBackend::default()
    };
    let result = AnimationDriver::from_parts(
        store(4),
        Playlist::new(layouts(), colors()).unwrap(),
        timing(),
        stage(),
        StdRng::seed_from_u64(0),
        backend,
        ExclusiveScheduler::new(),
    );
    assert!(matches!(
        result,
        Err(PointmorphError::Render(RenderError::Backend(_)))
    ));
}

#[test]
fn refused_registration_surfaces_to_caller() {
    let result = AnimationDriver::from_parts(
        store(4),
        Playlist::new(layouts(), colors()).unwrap(),
        timing(),
        stage(),
        StdRng::seed_from_u64(0),
        RecordingBackend::default(),
        RefusingScheduler,
    );
    assert!(matches!(result, Err(PointmorphError::Schedule(_))));
}

#[test]
fn driver_from_options_validates_first() {
    let mut options = Options::default();
    options.points.count = 50;
    let driver = AnimationDriver::new(
        &options,
        RecordingBackend::default(),
        ExclusiveScheduler::new(),
    )
    .unwrap();
    assert_eq!(driver.store().len(), 50);
    assert_eq!(driver.transition().layout, "phyllotaxis");
    assert_eq!(driver.stage().background.color, [1.0, 1.0, 1.0, 1.0]);

    options.playlist.layouts.clear();
    let result = AnimationDriver::new(
        &options,
        RecordingBackend::default(),
        ExclusiveScheduler::new(),
    );
    assert!(matches!(result, Err(PointmorphError::Config(_))));
}
