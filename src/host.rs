//! Collaborator traits the owning rotator implements.
//!
//! The sequencer never holds a back-reference to the rotator. Instead it
//! depends on four narrow interfaces: a [`Renderer`] that owns the tile
//! visual subtree, a [`Timers`] source for cancellable delayed/paint
//! callbacks, a [`SlideProvider`] for container and image geometry, and
//! an [`ActivationSink`] that receives the single completion signal per
//! pass. Every interface is synchronous; asynchrony lives in the host's
//! event loop, which feeds timer/frame/completion events back into the
//! sequencer.

use std::fmt;
use std::time::Duration;

use crate::keyframes::KeyframeTrack;
use crate::resolve::TileMotion;
use crate::tile::{ShapeMode, Tile};
use crate::util::easing::Easing;

/// Handle for a pending delayed callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// Handle for a pending paint-frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Source of cancellable timers and paint-frame callbacks.
///
/// Cancellation must be synchronous: after `cancel_*` returns, the
/// handle's callback must never be delivered.
pub trait Timers {
    /// Schedule a callback after `delay`. The host later calls
    /// [`Sequencer::handle_timer`](crate::Sequencer::handle_timer).
    fn set_timeout(&mut self, delay: Duration) -> TimerHandle;

    /// Cancel a pending timeout. No-op for unknown handles.
    fn cancel_timeout(&mut self, handle: TimerHandle);

    /// Schedule a callback aligned to the next paint frame. The host
    /// later calls
    /// [`Sequencer::handle_frame`](crate::Sequencer::handle_frame).
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a pending frame request. No-op for unknown handles.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// A slide image as laid out on screen, in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideImage {
    /// Rendered width in pixels.
    pub width: f32,
    /// Rendered height in pixels.
    pub height: f32,
    /// Left offset within the container.
    pub left: f32,
    /// Top offset within the container.
    pub top: f32,
    /// Whether the image is decoded and paintable. Unready images delay
    /// the start of playback until the host reports readiness; load
    /// *failures* are the loader's concern and reported as ready.
    pub ready: bool,
}

/// Container and slide-image geometry for the pass being built.
pub trait SlideProvider {
    /// Container size in pixels (width, height).
    fn container_size(&self) -> (f32, f32);

    /// The incoming slide's image, if any.
    fn current_image(&self) -> Option<SlideImage>;

    /// The outgoing slide's image, if any (absent on the first pass).
    fn previous_image(&self) -> Option<SlideImage>;
}

/// Crop offsets compositing the two slide images into one tile.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TileImagery {
    /// (left, top) offset of the current image on the active side.
    pub active_offset: Option<(f32, f32)>,
    /// (left, top) offset of the previous image on the previous side.
    pub prev_offset: Option<(f32, f32)>,
}

/// Renderer-side failure, e.g. a rejected keyframe rule. Never fatal:
/// the sequencer logs and degrades.
#[derive(Debug)]
pub struct RendererError(String);

impl RendererError {
    /// Wrap a renderer failure message.
    #[must_use]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl fmt::Display for RendererError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "renderer error: {}", self.0)
    }
}

impl std::error::Error for RendererError {}

/// Duration and curve applied to every tile's own transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTiming {
    /// Transition duration per tile.
    pub duration: Duration,
    /// Timing curve per tile.
    pub easing: Easing,
}

/// Owner of the generated tile subtree and the rendering primitives.
///
/// The subtree is exclusively owned by the sequencer between `start()`
/// and the activation signal; the rotator must not mutate it in that
/// window.
pub trait Renderer {
    /// Whether the runtime supports 3D (perspective) transforms. When
    /// false, 3D effects are substituted with `push` before resolution.
    fn supports_3d(&self) -> bool;

    /// Create the visual elements for a fresh tile set, replacing any
    /// prior set. `shape_color` tints cuboid faces.
    fn build_tiles(
        &mut self,
        tiles: &[Tile],
        mode: ShapeMode,
        shape_color: Option<&str>,
    );

    /// Apply a tile's starting styles, face roles and image crops. Runs
    /// once per tile during pass construction, before any reveal.
    fn stage_tile(
        &mut self,
        tile: &Tile,
        motion: &TileMotion,
        imagery: &TileImagery,
    );

    /// Install the pass's depth keyframe track. A failure is reported
    /// but not fatal; the pass degrades to plain transitions.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying stylesheet rejects the rule.
    fn install_keyframes(
        &mut self,
        track: &KeyframeTrack,
    ) -> Result<(), RendererError>;

    /// Attach a paused shade-in overlay to a tile's previous side. The
    /// overlay starts running when the tile's transition begins.
    fn add_shading(
        &mut self,
        tile_index: usize,
        duration: Duration,
        easing: Easing,
    );

    /// Begin a tile's transition toward its `to` styles, plus the depth
    /// keyframe animation when `with_keyframes`. The host must deliver
    /// [`Sequencer::handle_transition_end`](crate::Sequencer::handle_transition_end)
    /// (and `handle_animation_end` for keyframed tiles) when the
    /// underlying primitives complete.
    fn begin_transition(
        &mut self,
        tile_index: usize,
        motion: &TileMotion,
        timing: &TransitionTiming,
        with_keyframes: bool,
    );

    /// Hide or show the peripheral slide content around the tile grid.
    fn set_slides_hidden(&mut self, hidden: bool);

    /// Destroy the generated tile subtree. Must be idempotent.
    fn clear_tiles(&mut self);
}

/// Receiver of the once-per-pass completion signal. The rotator reads
/// its own slide state; the signal carries no payload.
pub trait ActivationSink {
    /// The new slide is now authoritative.
    fn activate(&mut self);
}
