//! The transition sequencer: builds a pass from options and schedules
//! tile reveals over time.
//!
//! A pass walks a fixed pipeline: resolve options into concrete pass
//! parameters, build and stage the tile set, install the pass's depth
//! keyframes, compute the reveal order, then step through the queue one
//! tile per interval. Each step is a timer followed by a paint-frame
//! callback so the reveal lines up with the host's paint cadence.
//!
//! The sequencer is synchronous and single-threaded. All asynchrony
//! lives in the host, which delivers timer, frame and completion events
//! through the `handle_*` inlets. At most one timer or frame is pending
//! at any time; events carrying a stale handle are ignored, which makes
//! cancellation races impossible by construction.

use std::collections::VecDeque;
use std::time::Duration;

use rand::Rng;

use crate::effect::EffectKind;
use crate::grid::Grid;
use crate::host::{
    ActivationSink, FrameHandle, Renderer, SlideProvider, TileImagery,
    TimerHandle, Timers, TransitionTiming,
};
use crate::keyframes::KeyframeTrack;
use crate::options::TransitionOptions;
use crate::resolve::{MotionResolver, PassParams, TileMotion};
use crate::tile::{self, ShapeMode};

/// The single pending-callback slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Idle,
    Timer(TimerHandle),
    Frame(FrameHandle),
}

/// Everything a pass carries between events.
#[derive(Debug)]
struct PassState {
    /// Tiles not yet revealed, front first.
    queue: VecDeque<usize>,
    /// Per-tile motions, indexed by tile index.
    motions: Vec<TileMotion>,
    timing: TransitionTiming,
    interval: Duration,
    /// Whether tiles run the depth keyframe animation.
    with_keyframes: bool,
    /// The final tile of the pass, once it has begun.
    last_tile: Option<usize>,
    awaiting_transition_end: bool,
    awaiting_animation_end: bool,
}

#[derive(Debug)]
enum State {
    Idle,
    /// Pass built and staged, waiting for the incoming image to decode.
    AwaitingImages(PassState),
    Playing(PassState),
}

/// The tile transition scheduler.
///
/// Owns the collaborator trait objects for the duration of its life.
/// One pass runs at a time; starting a new pass clears any pass still
/// in flight.
pub struct Sequencer {
    renderer: Box<dyn Renderer>,
    timers: Box<dyn Timers>,
    slides: Box<dyn SlideProvider>,
    sink: Box<dyn ActivationSink>,
    state: State,
    pending: Pending,
}

impl Sequencer {
    /// Bind a sequencer to its host collaborators.
    #[must_use]
    pub fn new(
        renderer: Box<dyn Renderer>,
        timers: Box<dyn Timers>,
        slides: Box<dyn SlideProvider>,
        sink: Box<dyn ActivationSink>,
    ) -> Self {
        Self {
            renderer,
            timers,
            slides,
            sink,
            state: State::Idle,
            pending: Pending::Idle,
        }
    }

    /// Whether a pass is currently building or playing.
    #[must_use]
    pub const fn in_progress(&self) -> bool {
        !matches!(self.state, State::Idle)
    }

    /// Start a transition pass. `backward` marks reverse navigation and
    /// triggers direction/order auto-reversal when configured.
    pub fn start(
        &mut self,
        options: &TransitionOptions,
        backward: bool,
    ) {
        let mut rng = rand::rng();
        self.start_with_rng(options, backward, &mut rng);
    }

    /// [`start`](Self::start) with a caller-supplied random source, for
    /// deterministic passes.
    pub fn start_with_rng<R: Rng + ?Sized>(
        &mut self,
        options: &TransitionOptions,
        backward: bool,
        rng: &mut R,
    ) {
        if self.in_progress() {
            self.clear();
        }

        let (width, height) = self.slides.container_size();
        let grid =
            Grid::new(options.rows, options.columns, width, height);
        let params = PassParams::new(
            options,
            &grid,
            backward,
            self.renderer.supports_3d(),
            rng,
        );
        log::debug!(
            "pass: {:?} on {}x{}, direction {:?}, order {:?}",
            params.effect,
            grid.rows(),
            grid.columns(),
            params.direction,
            params.order,
        );

        if params.hide_slides {
            self.renderer.set_slides_hidden(true);
        }

        // 3D passes get cuboid tiles so the side faces show mid-turn.
        let mode = if params.is_3d {
            ShapeMode::Cuboid
        } else {
            ShapeMode::Plane
        };
        let tiles = tile::build_tiles(&grid, params.depth);
        self.renderer.build_tiles(
            &tiles,
            mode,
            options.shape_color.as_deref(),
        );

        let motions = MotionResolver::new(&params, &grid).resolve(rng);
        let current = self.slides.current_image();
        let previous = self.slides.previous_image();
        for (t, motion) in tiles.iter().zip(&motions) {
            let imagery = TileImagery {
                active_offset: current
                    .map(|img| tile::image_offset(&img, &t.rect)),
                prev_offset: if motion.roles.prev.is_some() {
                    previous
                        .map(|img| tile::image_offset(&img, &t.rect))
                } else {
                    None
                },
            };
            self.renderer.stage_tile(t, motion, &imagery);
        }

        if params.is_3d && options.shape_shading {
            // A flip shows its outgoing face for only half the turn.
            let shade = if params.effect == EffectKind::Flip {
                options.duration() / 2
            } else {
                options.duration()
            };
            for t in &tiles {
                self.renderer.add_shading(
                    t.index,
                    shade,
                    options.easing,
                );
            }
        }

        let with_keyframes =
            match KeyframeTrack::for_pass(&params, &grid, options.depth)
            {
                Some(track) => {
                    match self.renderer.install_keyframes(&track) {
                        Ok(()) => true,
                        Err(e) => {
                            log::warn!(
                                "keyframes rejected, pass degrades to \
                                 flat transitions: {e}"
                            );
                            false
                        }
                    }
                }
                None => false,
            };

        let mut sequence = params.order.sequence(&grid, rng);
        // The order's own reverse flag is already applied; re-reverse
        // when the effect toggled the pass-level flag past it.
        if params.is_reverse != params.order.is_reverse() {
            sequence.reverse();
        }

        let pass = PassState {
            queue: sequence.into_iter().collect(),
            motions,
            timing: TransitionTiming {
                duration: options.duration(),
                easing: options.easing,
            },
            interval: options.interval(),
            with_keyframes,
            last_tile: None,
            awaiting_transition_end: false,
            awaiting_animation_end: false,
        };

        if current.is_none_or(|img| img.ready) {
            self.state = State::Playing(pass);
            self.pending = Pending::Frame(self.timers.request_frame());
        } else {
            log::debug!("incoming image not decoded; deferring pass");
            self.state = State::AwaitingImages(pass);
        }
    }

    /// Abort any in-flight pass: cancel the pending callback, destroy
    /// the tile subtree and return to idle. Idempotent; no activation
    /// signal is sent.
    pub fn clear(&mut self) {
        match self.pending {
            Pending::Timer(h) => self.timers.cancel_timeout(h),
            Pending::Frame(h) => self.timers.cancel_frame(h),
            Pending::Idle => {}
        }
        self.pending = Pending::Idle;
        if self.in_progress() {
            log::debug!("clearing in-flight pass");
        }
        self.state = State::Idle;
        self.renderer.clear_tiles();
    }

    /// Deliver an elapsed timeout. Stale handles are ignored.
    pub fn handle_timer(&mut self, handle: TimerHandle) {
        if self.pending != Pending::Timer(handle) {
            return;
        }
        // Align the actual reveal with the next paint.
        self.pending = Pending::Frame(self.timers.request_frame());
    }

    /// Deliver a paint-frame callback. Stale handles are ignored.
    pub fn handle_frame(&mut self, handle: FrameHandle) {
        if self.pending != Pending::Frame(handle) {
            return;
        }
        self.pending = Pending::Idle;
        self.advance();
    }

    /// Deliver a tile's transition completion. Only the final tile of
    /// the pass is joined on; all other completions are ignored.
    pub fn handle_transition_end(&mut self, tile_index: usize) {
        if let State::Playing(pass) = &mut self.state {
            if pass.last_tile == Some(tile_index)
                && pass.awaiting_transition_end
            {
                pass.awaiting_transition_end = false;
                self.try_finish();
            }
        }
    }

    /// Deliver a tile's keyframe-animation completion. Only meaningful
    /// for the final tile of a keyframed pass.
    pub fn handle_animation_end(&mut self, tile_index: usize) {
        if let State::Playing(pass) = &mut self.state {
            if pass.last_tile == Some(tile_index)
                && pass.awaiting_animation_end
            {
                pass.awaiting_animation_end = false;
                self.try_finish();
            }
        }
    }

    /// Notify that slide images finished decoding. Starts playback if a
    /// pass was waiting on the incoming image.
    pub fn handle_image_ready(&mut self) {
        if !matches!(self.state, State::AwaitingImages(_)) {
            return;
        }
        if !self.slides.current_image().is_none_or(|img| img.ready) {
            return;
        }
        if let State::AwaitingImages(pass) =
            std::mem::replace(&mut self.state, State::Idle)
        {
            self.state = State::Playing(pass);
            self.pending = Pending::Frame(self.timers.request_frame());
        }
    }

    /// Reveal the next tile in the queue and schedule the step after.
    fn advance(&mut self) {
        let State::Playing(pass) = &mut self.state else {
            return;
        };
        let Some(index) = pass.queue.pop_front() else {
            return;
        };
        let Some(motion) = pass.motions.get(index).copied() else {
            return;
        };

        self.renderer.begin_transition(
            index,
            &motion,
            &pass.timing,
            pass.with_keyframes,
        );

        if pass.queue.is_empty() {
            pass.last_tile = Some(index);
            pass.awaiting_transition_end = true;
            pass.awaiting_animation_end = pass.with_keyframes;
        } else {
            self.pending =
                Pending::Timer(self.timers.set_timeout(pass.interval));
        }
    }

    fn try_finish(&mut self) {
        if let State::Playing(pass) = &self.state {
            if pass.last_tile.is_some()
                && !pass.awaiting_transition_end
                && !pass.awaiting_animation_end
            {
                self.finish();
            }
        }
    }

    /// Complete the pass: one activation signal, then tear down tiles.
    /// The pass stays in progress until the activation callback has
    /// returned. Peripheral slide visibility is the owner's to restore;
    /// the owner re-layers slides on activation anyway.
    fn finish(&mut self) {
        self.sink.activate();
        self.renderer.clear_tiles();
        self.state = State::Idle;
        log::debug!("pass complete");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::host::{RendererError, SlideImage};
    use crate::order::TileOrder;
    use crate::tile::Tile;
    use crate::util::easing::Easing;

    /// Recording host shared by all four collaborator traits.
    #[derive(Debug, Default)]
    struct Shared {
        next_handle: u64,
        pending_timers: Vec<TimerHandle>,
        pending_frames: Vec<FrameHandle>,
        canceled_timers: Vec<TimerHandle>,
        canceled_frames: Vec<FrameHandle>,
        timer_delays: Vec<Duration>,
        supports_3d: bool,
        fail_keyframes: bool,
        container: (f32, f32),
        current: Option<SlideImage>,
        previous: Option<SlideImage>,
        built: Vec<(usize, ShapeMode)>,
        staged: Vec<usize>,
        shaded: Vec<(usize, Duration)>,
        keyframes_installed: usize,
        begun: Vec<(usize, bool, Duration)>,
        slides_hidden: Option<bool>,
        cleared: usize,
        activations: usize,
        /// Interleaved activation/teardown events, in call order.
        events: Vec<&'static str>,
    }

    #[derive(Clone)]
    struct Host(Rc<RefCell<Shared>>);

    impl Timers for Host {
        fn set_timeout(&mut self, delay: Duration) -> TimerHandle {
            let mut s = self.0.borrow_mut();
            s.next_handle += 1;
            let handle = TimerHandle(s.next_handle);
            s.pending_timers.push(handle);
            s.timer_delays.push(delay);
            handle
        }

        fn cancel_timeout(&mut self, handle: TimerHandle) {
            let mut s = self.0.borrow_mut();
            s.pending_timers.retain(|&h| h != handle);
            s.canceled_timers.push(handle);
        }

        fn request_frame(&mut self) -> FrameHandle {
            let mut s = self.0.borrow_mut();
            s.next_handle += 1;
            let handle = FrameHandle(s.next_handle);
            s.pending_frames.push(handle);
            handle
        }

        fn cancel_frame(&mut self, handle: FrameHandle) {
            let mut s = self.0.borrow_mut();
            s.pending_frames.retain(|&h| h != handle);
            s.canceled_frames.push(handle);
        }
    }

    impl SlideProvider for Host {
        fn container_size(&self) -> (f32, f32) {
            self.0.borrow().container
        }

        fn current_image(&self) -> Option<SlideImage> {
            self.0.borrow().current
        }

        fn previous_image(&self) -> Option<SlideImage> {
            self.0.borrow().previous
        }
    }

    impl Renderer for Host {
        fn supports_3d(&self) -> bool {
            self.0.borrow().supports_3d
        }

        fn build_tiles(
            &mut self,
            tiles: &[Tile],
            mode: ShapeMode,
            _shape_color: Option<&str>,
        ) {
            self.0.borrow_mut().built.push((tiles.len(), mode));
        }

        fn stage_tile(
            &mut self,
            tile: &Tile,
            _motion: &TileMotion,
            _imagery: &TileImagery,
        ) {
            self.0.borrow_mut().staged.push(tile.index);
        }

        fn install_keyframes(
            &mut self,
            _track: &KeyframeTrack,
        ) -> Result<(), RendererError> {
            let mut s = self.0.borrow_mut();
            if s.fail_keyframes {
                return Err(RendererError::new("stylesheet rejected"));
            }
            s.keyframes_installed += 1;
            Ok(())
        }

        fn add_shading(
            &mut self,
            tile_index: usize,
            duration: Duration,
            _easing: Easing,
        ) {
            self.0.borrow_mut().shaded.push((tile_index, duration));
        }

        fn begin_transition(
            &mut self,
            tile_index: usize,
            _motion: &TileMotion,
            timing: &TransitionTiming,
            with_keyframes: bool,
        ) {
            self.0.borrow_mut().begun.push((
                tile_index,
                with_keyframes,
                timing.duration,
            ));
        }

        fn set_slides_hidden(&mut self, hidden: bool) {
            self.0.borrow_mut().slides_hidden = Some(hidden);
        }

        fn clear_tiles(&mut self) {
            let mut s = self.0.borrow_mut();
            s.cleared += 1;
            s.events.push("clear_tiles");
        }
    }

    impl ActivationSink for Host {
        fn activate(&mut self) {
            let mut s = self.0.borrow_mut();
            s.activations += 1;
            s.events.push("activate");
        }
    }

    fn image(ready: bool) -> SlideImage {
        SlideImage {
            width: 400.0,
            height: 200.0,
            left: 0.0,
            top: 0.0,
            ready,
        }
    }

    fn sequencer(supports_3d: bool) -> (Sequencer, Rc<RefCell<Shared>>) {
        let _ = env_logger::builder().is_test(true).try_init();
        let shared = Rc::new(RefCell::new(Shared {
            supports_3d,
            container: (400.0, 200.0),
            current: Some(image(true)),
            previous: Some(image(true)),
            ..Shared::default()
        }));
        let host = Host(Rc::clone(&shared));
        let seq = Sequencer::new(
            Box::new(host.clone()),
            Box::new(host.clone()),
            Box::new(host.clone()),
            Box::new(host),
        );
        (seq, shared)
    }

    fn options(
        effect: EffectKind,
        rows: u32,
        columns: u32,
    ) -> TransitionOptions {
        TransitionOptions {
            effect,
            rows,
            columns,
            ..TransitionOptions::default()
        }
    }

    fn take_frame(shared: &Rc<RefCell<Shared>>) -> FrameHandle {
        shared.borrow_mut().pending_frames.remove(0)
    }

    fn take_timer(shared: &Rc<RefCell<Shared>>) -> TimerHandle {
        shared.borrow_mut().pending_timers.remove(0)
    }

    /// Step the pass through timer + frame until `count` tiles begun.
    fn run_tiles(
        seq: &mut Sequencer,
        shared: &Rc<RefCell<Shared>>,
        count: usize,
    ) {
        let frame = take_frame(shared);
        seq.handle_frame(frame);
        while shared.borrow().begun.len() < count {
            let timer = take_timer(shared);
            seq.handle_timer(timer);
            let frame = take_frame(shared);
            seq.handle_frame(frame);
        }
    }

    #[test]
    fn test_single_tile_pass_lifecycle() {
        let (mut seq, shared) = sequencer(false);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(!seq.in_progress());

        seq.start_with_rng(
            &options(EffectKind::Fade, 1, 1),
            false,
            &mut rng,
        );
        assert!(seq.in_progress());
        {
            let s = shared.borrow();
            assert_eq!(s.built, vec![(1, ShapeMode::Plane)]);
            assert_eq!(s.staged, vec![0]);
            assert_eq!(s.slides_hidden, None, "fade keeps slides shown");
            assert!(s.begun.is_empty(), "reveal waits for the frame");
        }

        let frame = take_frame(&shared);
        seq.handle_frame(frame);
        assert_eq!(
            shared.borrow().begun,
            vec![(0, false, Duration::from_millis(800))]
        );
        assert_eq!(shared.borrow().activations, 0);

        seq.handle_transition_end(0);
        assert_eq!(shared.borrow().activations, 1);
        assert_eq!(shared.borrow().cleared, 1);
        assert!(!seq.in_progress());
    }

    #[test]
    fn test_activation_precedes_tile_teardown() {
        let (mut seq, shared) = sequencer(false);
        let mut rng = StdRng::seed_from_u64(1);
        seq.start_with_rng(
            &options(EffectKind::Fade, 1, 1),
            false,
            &mut rng,
        );
        let frame = take_frame(&shared);
        seq.handle_frame(frame);
        seq.handle_transition_end(0);

        // The owner reads its own state from the activation callback;
        // tiles must still be standing when it fires.
        assert_eq!(
            shared.borrow().events,
            vec!["activate", "clear_tiles"]
        );
        assert!(!seq.in_progress());
    }

    #[test]
    fn test_interval_chains_timer_then_frame() {
        let (mut seq, shared) = sequencer(false);
        let mut rng = StdRng::seed_from_u64(1);
        seq.start_with_rng(
            &options(EffectKind::Push, 1, 3),
            false,
            &mut rng,
        );
        assert_eq!(shared.borrow().slides_hidden, Some(true));

        run_tiles(&mut seq, &shared, 3);
        {
            let s = shared.borrow();
            let order: Vec<usize> =
                s.begun.iter().map(|&(i, _, _)| i).collect();
            assert_eq!(order, vec![0, 1, 2]);
            assert_eq!(
                s.timer_delays,
                vec![
                    Duration::from_millis(100);
                    2
                ],
                "one interval between each consecutive pair"
            );
            assert!(
                s.pending_timers.is_empty(),
                "no timer after the last tile"
            );
        }

        // Completions from non-final tiles are ignored.
        seq.handle_transition_end(0);
        assert_eq!(shared.borrow().activations, 0);

        seq.handle_transition_end(2);
        assert_eq!(shared.borrow().activations, 1);
        assert!(!seq.in_progress());
    }

    #[test]
    fn test_clear_cancels_pending_callbacks() {
        let (mut seq, shared) = sequencer(false);
        let mut rng = StdRng::seed_from_u64(1);
        seq.start_with_rng(
            &options(EffectKind::Fade, 1, 2),
            false,
            &mut rng,
        );
        let frame = shared.borrow().pending_frames[0];

        seq.clear();
        assert!(!seq.in_progress());
        assert_eq!(shared.borrow().canceled_frames, vec![frame]);
        assert!(shared.borrow().cleared >= 1);

        // The canceled frame arriving late must not mutate anything.
        seq.handle_frame(frame);
        assert!(shared.borrow().begun.is_empty());

        // Idempotent.
        seq.clear();
        assert!(!seq.in_progress());
    }

    #[test]
    fn test_clear_mid_pass_cancels_interval_timer() {
        let (mut seq, shared) = sequencer(false);
        let mut rng = StdRng::seed_from_u64(1);
        seq.start_with_rng(
            &options(EffectKind::Fade, 1, 3),
            false,
            &mut rng,
        );
        let frame = take_frame(&shared);
        seq.handle_frame(frame);
        let timer = shared.borrow().pending_timers[0];

        seq.clear();
        assert_eq!(shared.borrow().canceled_timers, vec![timer]);
        seq.handle_timer(timer);
        assert!(
            shared.borrow().pending_frames.is_empty(),
            "stale timer must not request a frame"
        );
        assert_eq!(shared.borrow().activations, 0);
    }

    #[test]
    fn test_3d_fallback_builds_flat_pass() {
        let (mut seq, shared) = sequencer(false);
        let mut rng = StdRng::seed_from_u64(1);
        seq.start_with_rng(
            &options(EffectKind::Flip, 2, 2),
            false,
            &mut rng,
        );
        let s = shared.borrow();
        assert_eq!(s.built, vec![(4, ShapeMode::Plane)]);
        assert_eq!(s.keyframes_installed, 0);
        assert!(s.shaded.is_empty());
        // Push substitution still hides slides.
        assert_eq!(s.slides_hidden, Some(true));
    }

    #[test]
    fn test_flip_joins_transition_and_animation_end() {
        let (mut seq, shared) = sequencer(true);
        let mut rng = StdRng::seed_from_u64(1);
        seq.start_with_rng(
            &options(EffectKind::Flip, 1, 1),
            false,
            &mut rng,
        );
        {
            let s = shared.borrow();
            assert_eq!(
                s.built,
                vec![(1, ShapeMode::Cuboid)],
                "3D flip tiles carry side faces"
            );
            assert_eq!(s.keyframes_installed, 1);
            // Flip shading runs for half the transition.
            assert_eq!(
                s.shaded,
                vec![(0, Duration::from_millis(400))]
            );
        }

        let frame = take_frame(&shared);
        seq.handle_frame(frame);
        assert_eq!(
            shared.borrow().begun,
            vec![(0, true, Duration::from_millis(800))]
        );

        seq.handle_transition_end(0);
        assert_eq!(
            shared.borrow().activations,
            0,
            "keyframed pass also waits for the animation"
        );
        seq.handle_animation_end(0);
        assert_eq!(shared.borrow().activations, 1);
        assert!(!seq.in_progress());
    }

    #[test]
    fn test_rotate_builds_cuboids_with_full_shading() {
        let (mut seq, shared) = sequencer(true);
        let mut rng = StdRng::seed_from_u64(1);
        seq.start_with_rng(
            &options(EffectKind::Rotate, 1, 2),
            false,
            &mut rng,
        );
        let s = shared.borrow();
        assert_eq!(s.built, vec![(2, ShapeMode::Cuboid)]);
        assert_eq!(s.keyframes_installed, 1);
        assert_eq!(
            s.shaded,
            vec![
                (0, Duration::from_millis(800)),
                (1, Duration::from_millis(800)),
            ]
        );
    }

    #[test]
    fn test_keyframe_rejection_degrades_pass() {
        let (mut seq, shared) = sequencer(true);
        shared.borrow_mut().fail_keyframes = true;
        let mut rng = StdRng::seed_from_u64(1);
        seq.start_with_rng(
            &options(EffectKind::Flip, 1, 1),
            false,
            &mut rng,
        );
        assert_eq!(shared.borrow().keyframes_installed, 0);

        let frame = take_frame(&shared);
        seq.handle_frame(frame);
        assert!(!shared.borrow().begun[0].1);

        // No keyframe animation to join; transition end completes it.
        seq.handle_transition_end(0);
        assert_eq!(shared.borrow().activations, 1);
    }

    #[test]
    fn test_unready_image_defers_playback() {
        let (mut seq, shared) = sequencer(false);
        shared.borrow_mut().current = Some(image(false));
        let mut rng = StdRng::seed_from_u64(1);
        seq.start_with_rng(
            &options(EffectKind::Fade, 1, 1),
            false,
            &mut rng,
        );
        assert!(seq.in_progress());
        assert!(
            shared.borrow().pending_frames.is_empty(),
            "no frame until the image decodes"
        );

        // A spurious readiness signal while still undecoded is ignored.
        seq.handle_image_ready();
        assert!(shared.borrow().pending_frames.is_empty());

        shared.borrow_mut().current = Some(image(true));
        seq.handle_image_ready();
        let frame = take_frame(&shared);
        seq.handle_frame(frame);
        assert_eq!(shared.borrow().begun.len(), 1);

        seq.handle_transition_end(0);
        assert_eq!(shared.borrow().activations, 1);
    }

    #[test]
    fn test_restart_clears_previous_pass() {
        let (mut seq, shared) = sequencer(false);
        let mut rng = StdRng::seed_from_u64(1);
        seq.start_with_rng(
            &options(EffectKind::Fade, 1, 2),
            false,
            &mut rng,
        );
        let stale_frame = shared.borrow().pending_frames[0];

        seq.start_with_rng(
            &options(EffectKind::Fade, 1, 2),
            false,
            &mut rng,
        );
        {
            let s = shared.borrow();
            assert_eq!(s.canceled_frames, vec![stale_frame]);
            assert!(s.cleared >= 1);
            assert_eq!(s.built.len(), 2);
        }

        seq.handle_frame(stale_frame);
        assert!(shared.borrow().begun.is_empty());

        let frame = take_frame(&shared);
        seq.handle_frame(frame);
        assert_eq!(shared.borrow().begun.len(), 1);
    }

    #[test]
    fn test_reveal_follows_configured_order() {
        let (mut seq, shared) = sequencer(false);
        let mut rng = StdRng::seed_from_u64(1);
        let opts = TransitionOptions {
            order: TileOrder::Left,
            ..options(EffectKind::Fade, 1, 3)
        };
        seq.start_with_rng(&opts, false, &mut rng);

        run_tiles(&mut seq, &shared, 3);
        let order: Vec<usize> = shared
            .borrow()
            .begun
            .iter()
            .map(|&(i, _, _)| i)
            .collect();
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn test_move_reverses_the_reveal_order() {
        let (mut seq, shared) = sequencer(false);
        let mut rng = StdRng::seed_from_u64(1);
        let opts = TransitionOptions {
            order: TileOrder::Right,
            ..options(EffectKind::Move, 1, 3)
        };
        seq.start_with_rng(&opts, false, &mut rng);

        run_tiles(&mut seq, &shared, 3);
        let order: Vec<usize> = shared
            .borrow()
            .begun
            .iter()
            .map(|&(i, _, _)| i)
            .collect();
        assert_eq!(order, vec![2, 1, 0]);
    }
}
