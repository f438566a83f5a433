//! Boxpusher grid core (renderer-agnostic).
//!
//! Layout math for box-animation scenes: a dense rectangular N-dimensional
//! array (`NdArray`) built from an index-to-value mapping, purely functional
//! 3D/2D vector helpers, and the grid builders choreography code positions
//! its elements with.

pub mod layout;
pub mod nd;
pub mod vec;

// Re-exports for consumers (scene core and choreography code)
pub use layout::{grid, multi_grid};
pub use nd::{GridError, NdArray};
pub use vec::{add, modulo, v2, v3, Vec2, Vec3};
