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
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Staggered point-cloud transitions between 2D layouts, drawn with wgpu.
//!
//! A fixed set of points moves through a looping playlist of arrangements
//! (phyllotaxis, grid, random scatter, sine wave, spiral) while their colors
//! blend from one palette to the next. Each point starts moving slightly
//! after the one before it, so every transition sweeps across the cloud.
//!
//! # Key entry points
//!
//! - [`animation::AnimationDriver`] - turns host frames into draws and
//!   transitions
//! - [`layout::Layout`] - the layout algorithm trait and its five
//!   implementations
//! - [`points::PointStore`] - start/end state of every point
//! - [`options::Options`] - startup configuration (TOML)
//! - [`host`] - the frame scheduling and render backend ports
//!
//! # Architecture
//!
//! Everything runs on one thread, driven by frame callbacks. A transition
//! snapshots the current targets and end colors as the new start state,
//! writes new end colors and targets, and uploads both to the backend once.
//! Per frame only the elapsed time changes; the vertex shader derives each
//! point's eased progress from its id. Once the slowest point has arrived
//! the driver cancels its frame registration, advances the playlist, begins
//! the next transition, and registers again.

pub mod animation;
pub mod color;
pub mod error;
pub mod gpu;
pub mod host;
pub mod layout;
pub mod options;
pub mod points;
pub mod renderer;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use animation::{AnimationDriver, FrameOutcome, Playlist, StaggerTiming};
pub use error::PointmorphError;
pub use layout::{Layout, LayoutKind};
pub use options::Options;
pub use points::PointStore;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
