//! GLSL compilation and uniform upload.
//!
//! Every demo builds one [`ShaderProgram`] from a vertex and a fragment stage, usually through
//! the `shader_program!` macro. Values go to the GPU through the [`Uniform`] trait.

use std::sync::Arc;

use glam::Mat4;
use glow::HasContext;

/// A compiled shader stage. It only lives until its program is linked.
pub struct Shader {
    gl: Arc<glow::Context>,
    id: glow::Shader,
}

impl Shader {
    /// Compiles `source` as a stage of type `shader_type` (`glow::VERTEX_SHADER` or
    /// `glow::FRAGMENT_SHADER`). A compile error carries the driver's info log.
    pub fn new(gl: &Arc<glow::Context>, shader_type: u32, source: &str) -> Result<Self, String> {
        let stage = stage_name(shader_type);
        unsafe {
            let id = gl.create_shader(shader_type)?;
            gl.shader_source(id, source);
            gl.compile_shader(id);

            if gl.get_shader_compile_status(id) {
                return Ok(Self {
                    gl: Arc::clone(gl),
                    id,
                });
            }

            let info_log = gl.get_shader_info_log(id);
            gl.delete_shader(id);
            Err(format!(
                "{stage} shader failed to compile: {}",
                info_log.trim_end()
            ))
        }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.id);
        }
    }
}

fn stage_name(shader_type: u32) -> &'static str {
    match shader_type {
        glow::VERTEX_SHADER => "Vertex",
        glow::FRAGMENT_SHADER => "Fragment",
        _ => "Unknown",
    }
}

/// A value that can be written to a uniform location of the program in use.
pub trait Uniform {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation);
}

impl Uniform for i32 {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_1_i32(Some(location), *self) }
    }
}

impl Uniform for f32 {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_1_f32(Some(location), *self) }
    }
}

impl Uniform for Mat4 {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_matrix_4_f32_slice(Some(location), false, &self.to_cols_array()) }
    }
}

impl<T: Uniform> Uniform for &T {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        (*self).upload(gl, location);
    }
}

/// A linked vertex + fragment program.
pub struct ShaderProgram {
    gl: Arc<glow::Context>,
    id: glow::Program,
}

impl ShaderProgram {
    /// Links `shaders` into a program. The stages are detached again after a successful link,
    /// so dropping them afterwards frees them.
    pub fn new(gl: &Arc<glow::Context>, shaders: &[&Shader]) -> Result<Self, String> {
        unsafe {
            let id = gl.create_program()?;
            for shader in shaders {
                gl.attach_shader(id, shader.id);
            }
            gl.link_program(id);

            if !gl.get_program_link_status(id) {
                let info_log = gl.get_program_info_log(id);
                gl.delete_program(id);
                return Err(format!(
                    "Shader program failed to link: {}",
                    info_log.trim_end()
                ));
            }

            for shader in shaders {
                gl.detach_shader(id, shader.id);
            }
            Ok(Self {
                gl: Arc::clone(gl),
                id,
            })
        }
    }

    /// Compiles both stages and links them. The stage objects are gone once this returns.
    pub fn from_sources(
        gl: &Arc<glow::Context>,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, String> {
        let vertex = Shader::new(gl, glow::VERTEX_SHADER, vertex_source)?;
        let fragment = Shader::new(gl, glow::FRAGMENT_SHADER, fragment_source)?;
        Self::new(gl, &[&vertex, &fragment])
    }

    pub fn use_program(&self) {
        unsafe {
            self.gl.use_program(Some(self.id));
        }
    }

    /// Writes `value` to the uniform `name`. The program must be in use.
    ///
    /// Names the driver does not report (misspelt, or optimised out of the GLSL) are skipped.
    pub fn set_uniform<T: Uniform>(&self, name: &str, value: T) {
        match unsafe { self.gl.get_uniform_location(self.id, name) } {
            Some(location) => value.upload(&self.gl, &location),
            None => log::trace!("Uniform '{name}' is not active, skipping"),
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.id);
        }
    }
}
