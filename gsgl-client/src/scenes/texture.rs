//! The second demo: a vertex-coloured quad blending two textures.

use std::sync::Arc;

use glow::HasContext;
use gsgl_core::geometry::{QUAD_INDICES, TEXTURED_QUAD};

use crate::{
    abs::{Mesh, ShaderProgram, Texture},
    settings::Settings,
    shader_program,
};

/// Share of the second texture in the blend.
pub const TEXTURE_MIX: f32 = 0.2;

pub struct TextureScene {
    quad: Mesh,
    shader: ShaderProgram,
    textures: [Texture; 2],
}

impl TextureScene {
    pub fn new(gl: &Arc<glow::Context>, settings: &Settings) -> Result<Self, String> {
        let quad = Mesh::new(gl, &TEXTURED_QUAD, &QUAD_INDICES, glow::TRIANGLES)?;
        let shader = shader_program!(texture, gl, "..")?;
        let textures = load_demo_textures(gl, settings)?;

        shader.use_program();
        shader.set_uniform("u_texture0", 0);
        shader.set_uniform("u_texture1", 1);
        shader.set_uniform("u_mix", TEXTURE_MIX);
        unsafe {
            gl.use_program(None);
        }

        Ok(Self {
            quad,
            shader,
            textures,
        })
    }
}

/// Loads the crate and smiley textures used by the texture and camera demos.
pub fn load_demo_textures(
    gl: &Arc<glow::Context>,
    settings: &Settings,
) -> Result<[Texture; 2], String> {
    Ok([
        Texture::load(gl, &settings.assets_dir.join("container.jpg"))?,
        Texture::load(gl, &settings.assets_dir.join("awesomeface.png"))?,
    ])
}

impl super::Scene for TextureScene {
    fn demo(&self) -> super::Demo {
        super::Demo::Texture
    }

    fn render(&mut self, gl: &Arc<glow::Context>) {
        let [r, g, b, a] = super::CLEAR_COLOR;
        unsafe {
            gl.disable(glow::DEPTH_TEST);
            gl.clear_color(r, g, b, a);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }

        for (unit, texture) in self.textures.iter().enumerate() {
            texture.bind(unit as u32);
        }
        self.shader.use_program();
        self.quad.draw();

        unsafe {
            gl.use_program(None);
        }
    }
}
