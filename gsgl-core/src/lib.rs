//! The core of the gsgl demos. This crate contains everything that does not need a window or a
//! GL context: the free-look camera and the fixed geometry the demos draw.

pub mod camera;
pub mod geometry;

pub use camera::{Camera, Movement, PITCH_LIMIT, Projection};
