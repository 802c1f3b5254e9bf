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

//! Runtime camera-control engine for interactive 3D applications.
//!
//! Every frame, camrig decides which logical camera is active, runs its
//! modifier pipeline (follow, aim, framing, noise, custom stages) to
//! produce a view transform, and blends camera changes smoothly over
//! time. The crate owns no rendering — it emits one final
//! [`transform::CameraTransform`] per tick for the host's renderer,
//! audio listener, or anything else that consumes a view.
//!
//! # Key entry points
//!
//! - [`director::CameraDirector`] - the per-tick frame driver
//! - [`rig::CameraRig`] - one logical camera and its stage pipeline
//! - [`stack::CameraStack`] - priority-based active-camera resolution
//! - [`blend::BlendProfile`] - how a camera is blended into
//! - [`options::DirectorOptions`] - TOML-backed tunables
//!
//! # Architecture
//!
//! The engine is a single synchronous pass per tick: resolve the winner
//! over the registered rigs, evaluate the winning pipeline (plus the
//! outgoing one while a blend is in flight), interpolate, emit. There are
//! no fatal conditions — faults degrade gracefully and are reported
//! through [`diagnostics::FaultSink`], and the engine always produces a
//! finite transform.

pub mod blend;
pub mod context;
pub mod diagnostics;
pub mod director;
pub mod easing;
pub mod error;
pub mod options;
pub mod rig;
pub mod stack;
pub mod stage;
pub mod transform;
