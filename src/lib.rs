// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Animation math allowances - casts are intentional and safe
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::module_name_repetitions)]

//! Grid-tile transition engine for slide rotators.
//!
//! Tessera drives the visual hand-off between two slides of a rotator:
//! it partitions a slide into a grid of tiles, computes a per-tile
//! animation (push, cover, move, flip, rotate, fade, zoom, expand),
//! sequences the tile reveals over time, and reports completion back to
//! the owning rotator.
//!
//! # Key entry points
//!
//! - [`sequencer::Sequencer`] - the transition scheduler and state machine
//! - [`options::TransitionOptions`] - per-slide transition configuration
//! - [`order::TileOrder`] - tile traversal sequences (spiral, zig-zag, ...)
//! - [`host`] - the collaborator traits a rotator implements
//!
//! # Architecture
//!
//! Rendering is abstracted behind [`host::Renderer`]; the engine never
//! touches a DOM or stylesheet itself. Timing is host-driven: the
//! sequencer requests timers and paint-frame callbacks through
//! [`host::Timers`] and the host feeds the resulting events back in.
//! This keeps the whole engine synchronous and deterministic under test.

pub mod direction;
pub mod effect;
pub mod error;
pub mod grid;
pub mod host;
pub mod keyframes;
pub mod options;
pub mod order;
pub mod presets;
pub mod resolve;
pub mod sequencer;
pub mod tile;
pub mod util;

pub use error::TesseraError;
pub use options::TransitionOptions;
pub use sequencer::Sequencer;
