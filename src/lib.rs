// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
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

//! GPU-accelerated 3D item carousel viewer built on wgpu.
//!
//! Vitrine arranges a ring of items around a fixed-radius circle, swings
//! the ring with an eased shortest-arc animation when the selection
//! changes, and offers an inspect mode that orbits the selected item
//! alone. The scene optionally renders through a two-pass CRT filter:
//! an offscreen capture followed by a fullscreen pass applying barrel
//! distortion, chromatic aberration, scanlines, and friends.
//!
//! # Key entry points
//!
//! - [`engine::CarouselEngine`] - the main engine (state + rendering)
//! - [`carousel::Carousel`] - the selection state machine
//! - [`options::Options`] - runtime configuration (ring, camera, CRT
//!   knobs, keybindings)
//! - [`Viewer`] - standalone winit window (behind the `viewer` feature)
//!
//! # Per-frame protocol
//!
//! Once per display refresh: sample held keys → advance the carousel and
//! item visuals → upload camera/model uniforms → draw the backdrop and
//! items into the capture target → run the CRT pass onto the swapchain.
//! With post-processing disabled the scene renders straight to the
//! surface and the second pass simply does not exist.

pub mod camera;
pub mod carousel;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::{CarouselCommand, CarouselEngine};
pub use error::VitrineError;
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
