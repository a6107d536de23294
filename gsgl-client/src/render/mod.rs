//! Module for anything related to rendering.
//!
//! This module contains the vertex attribute layouts of the demo geometry. The GLSL sources of
//! each demo live next to it under `render/shaders/<demo>/`.

pub mod vertex;
