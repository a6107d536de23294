//! Attribute layouts of the demo vertex types.

use glam::Vec3;
use glow::HasContext;
use gsgl_core::geometry::{ColorTexVertex, PositionVertex, TexVertex};

use crate::abs::Vertex;

impl Vertex for PositionVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = size_of::<PositionVertex>() as i32;

            // Position attribute
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
        }
    }
}

impl Vertex for ColorTexVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = size_of::<ColorTexVertex>() as i32;

            // Position attribute
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);

            // Color attribute
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, stride, size_of::<Vec3>() as i32);

            // UV attribute
            gl.enable_vertex_attrib_array(2);
            gl.vertex_attrib_pointer_f32(
                2,
                2,
                glow::FLOAT,
                false,
                stride,
                (2 * size_of::<Vec3>()) as i32,
            );
        }
    }
}

impl Vertex for TexVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = size_of::<TexVertex>() as i32;

            // Position attribute
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);

            // UV attribute
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 2, glow::FLOAT, false, stride, size_of::<Vec3>() as i32);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    #[test]
    fn attribute_offsets_match_field_offsets() {
        assert_eq!(std::mem::offset_of!(ColorTexVertex, color), size_of::<Vec3>());
        assert_eq!(std::mem::offset_of!(ColorTexVertex, uv), 2 * size_of::<Vec3>());
        assert_eq!(std::mem::offset_of!(TexVertex, uv), size_of::<Vec3>());
        assert_eq!(size_of::<TexVertex>(), size_of::<Vec3>() + size_of::<Vec2>());
    }
}
