//! The first demo: a quad drawn from a vertex buffer and an element buffer.

use std::sync::Arc;

use glow::HasContext;
use gsgl_core::geometry::{QUAD_INDICES, QUAD_POSITIONS};

use crate::{
    abs::{Mesh, ShaderProgram},
    shader_program,
};

pub struct TriangleScene {
    quad: Mesh,
    shader: ShaderProgram,
}

impl TriangleScene {
    pub fn new(gl: &Arc<glow::Context>) -> Result<Self, String> {
        let quad = Mesh::new(gl, &QUAD_POSITIONS, &QUAD_INDICES, glow::TRIANGLES)?;
        let shader = shader_program!(triangle, gl, "..")?;
        Ok(Self { quad, shader })
    }
}

impl super::Scene for TriangleScene {
    fn demo(&self) -> super::Demo {
        super::Demo::Triangle
    }

    fn render(&mut self, gl: &Arc<glow::Context>) {
        let [r, g, b, a] = super::CLEAR_COLOR;
        unsafe {
            gl.disable(glow::DEPTH_TEST);
            gl.clear_color(r, g, b, a);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }

        self.shader.use_program();
        self.quad.draw();

        unsafe {
            gl.use_program(None);
        }
    }
}
