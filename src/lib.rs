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
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Touch-driven orientation control for a single 3D object.
//!
//! Touchspin turns a raw stream of touch events into a rotation quaternion
//! and a bounded zoom scale. One finger drags the object around, a quick
//! release flings it into a decaying spin, two fingers pinch-zoom, and a
//! long press followed by a vertical slide zooms in fine steps. A double tap
//! resets the zoom.
//!
//! # Key entry points
//!
//! - [`controller::OrientationController`] - the interaction state machine
//! - [`input::GestureClassifier`] - fling, double-tap and long-press
//!   recognition over timestamped events
//! - [`options::Options`] - runtime configuration (scale range, fling decay,
//!   gesture thresholds, hot zones)
//! - [`replay`] - drive a controller from a recorded touch trace
//!
//! # Threading
//!
//! The controller does no locking of its own. Touch delivery and
//! [`controller::OrientationController::current_orientation`] must not
//! interleave, so a host that takes touches on a UI thread and renders on
//! another keeps the whole controller behind one lock (it is `Send`, so
//! `Arc<Mutex<_>>` works), or owns it from a single task. Gesture timeouts
//! are evaluated lazily, on the next event or on an explicit
//! [`controller::OrientationController::poll`].

pub mod controller;
pub mod error;
pub mod input;
pub mod math;
pub mod options;
pub mod replay;

pub use controller::{Orientation, OrientationController, TouchMode};
pub use error::TouchspinError;
pub use input::{TouchAction, TouchEvent};
pub use options::Options;
