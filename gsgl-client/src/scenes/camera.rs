//! The camera demo: a free-look camera flying through a field of textured cubes.

use std::sync::Arc;

use glow::HasContext;
use gsgl_core::{
    Camera, Projection,
    geometry::{CUBE_INDICES, CUBE_VERTICES, cube_field},
};
use sdl2::event::{Event, WindowEvent};

use crate::{
    abs::{Mesh, ShaderProgram, Texture},
    input::{MouseLook, UpdateContext},
    settings::Settings,
    shader_program,
};

use super::texture::{TEXTURE_MIX, load_demo_textures};

pub struct CameraScene {
    camera: Camera,
    projection: Projection,
    mouse_look: MouseLook,
    cube: Mesh,
    shader: ShaderProgram,
    textures: [Texture; 2],
    width: u32,
    height: u32,
}

impl CameraScene {
    pub fn new(
        gl: &Arc<glow::Context>,
        settings: &Settings,
        (width, height): (u32, u32),
    ) -> Result<Self, String> {
        let cube = Mesh::new(gl, &CUBE_VERTICES, &CUBE_INDICES, glow::TRIANGLES)?;
        let shader = shader_program!(camera, gl, "..")?;
        let textures = load_demo_textures(gl, settings)?;

        shader.use_program();
        shader.set_uniform("u_texture0", 0);
        shader.set_uniform("u_texture1", 1);
        shader.set_uniform("u_mix", TEXTURE_MIX);
        unsafe {
            gl.use_program(None);
        }

        Ok(Self {
            camera: settings.camera.camera(),
            projection: settings.camera.projection(),
            mouse_look: MouseLook::default(),
            cube,
            shader,
            textures,
            width,
            height,
        })
    }

    fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl super::Scene for CameraScene {
    fn demo(&self) -> super::Demo {
        super::Demo::Camera
    }

    fn handle_event(&mut self, event: &Event) {
        self.mouse_look.handle_event(&mut self.camera, event);
        if let Event::Window {
            win_event: WindowEvent::Resized(width, height),
            ..
        } = event
        {
            self.width = (*width).max(0) as u32;
            self.height = (*height).max(0) as u32;
        }
    }

    fn update(
        &mut self,
        gl: &Arc<glow::Context>,
        ctx: &UpdateContext,
        sdl: &sdl2::Sdl,
    ) -> super::SceneSwitch {
        sdl.mouse().set_relative_mouse_mode(true);
        self.camera
            .advance(&ctx.keyboard.movement(), ctx.delta_time);
        super::switch_on_keys(super::Demo::Camera, gl, ctx)
    }

    fn render(&mut self, gl: &Arc<glow::Context>) {
        let [r, g, b, a] = super::CLEAR_COLOR;
        unsafe {
            gl.enable(glow::DEPTH_TEST);
            gl.clear_color(r, g, b, a);
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        for (unit, texture) in self.textures.iter().enumerate() {
            texture.bind(unit as u32);
        }
        self.shader.use_program();
        self.shader.set_uniform("u_view", self.camera.view_matrix());
        self.shader
            .set_uniform("u_projection", self.projection.matrix(self.aspect_ratio()));
        for model in cube_field() {
            self.shader.set_uniform("u_model", model);
            self.cube.draw();
        }

        unsafe {
            gl.use_program(None);
        }
    }
}
