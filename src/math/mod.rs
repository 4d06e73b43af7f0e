//! Small 3D math primitives used by the orientation controller.
//!
//! Thin wrappers over [`glam`] that pin down the conventions the controller
//! depends on: axes built from 2D screen deltas, zero-safe normalisation, and
//! right-handed in-place quaternion composition.

/// Unit rotation quaternion with in-place composition.
pub mod quaternion;
/// Rotation axis built from screen-space deltas.
pub mod vector;

pub use quaternion::Quaternion;
pub use vector::Vector3;
