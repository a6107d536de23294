//! Fixed geometry drawn by the demos.
//!
//! Vertex types are `#[repr(C)]` so that slices of them can be uploaded to vertex buffers as-is.

use glam::{Mat4, Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct PositionVertex {
    pub position: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct ColorTexVertex {
    pub position: Vec3,
    pub color: Vec3,
    pub uv: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct TexVertex {
    pub position: Vec3,
    pub uv: Vec2,
}

/// A unit quad in the XY plane: top right, bottom right, bottom left, top left.
pub const QUAD_POSITIONS: [PositionVertex; 4] = [
    PositionVertex { position: Vec3::new(0.5, 0.5, 0.0) },
    PositionVertex { position: Vec3::new(0.5, -0.5, 0.0) },
    PositionVertex { position: Vec3::new(-0.5, -0.5, 0.0) },
    PositionVertex { position: Vec3::new(-0.5, 0.5, 0.0) },
];

/// Two counter-clockwise triangles covering the quad.
pub const QUAD_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

/// The unit quad with a colour and a texture coordinate per corner.
pub const TEXTURED_QUAD: [ColorTexVertex; 4] = [
    ColorTexVertex {
        position: Vec3::new(0.5, 0.5, 0.0),
        color: Vec3::new(1.0, 0.0, 0.0),
        uv: Vec2::new(1.0, 1.0),
    },
    ColorTexVertex {
        position: Vec3::new(0.5, -0.5, 0.0),
        color: Vec3::new(0.0, 1.0, 0.0),
        uv: Vec2::new(1.0, 0.0),
    },
    ColorTexVertex {
        position: Vec3::new(-0.5, -0.5, 0.0),
        color: Vec3::new(0.0, 0.0, 1.0),
        uv: Vec2::new(0.0, 0.0),
    },
    ColorTexVertex {
        position: Vec3::new(-0.5, 0.5, 0.0),
        color: Vec3::new(1.0, 1.0, 0.0),
        uv: Vec2::new(0.0, 1.0),
    },
];

const fn tex(x: f32, y: f32, z: f32, u: f32, v: f32) -> TexVertex {
    TexVertex {
        position: Vec3::new(x, y, z),
        uv: Vec2::new(u, v),
    }
}

/// A unit cube centred on the origin, four vertices per face so every face gets the full texture.
#[rustfmt::skip]
pub const CUBE_VERTICES: [TexVertex; 24] = [
    // +Z
    tex( 0.5,  0.5,  0.5, 1.0, 1.0),
    tex( 0.5, -0.5,  0.5, 1.0, 0.0),
    tex(-0.5, -0.5,  0.5, 0.0, 0.0),
    tex(-0.5,  0.5,  0.5, 0.0, 1.0),
    // -Z
    tex(-0.5,  0.5, -0.5, 1.0, 1.0),
    tex(-0.5, -0.5, -0.5, 1.0, 0.0),
    tex( 0.5, -0.5, -0.5, 0.0, 0.0),
    tex( 0.5,  0.5, -0.5, 0.0, 1.0),
    // -X
    tex(-0.5,  0.5,  0.5, 1.0, 1.0),
    tex(-0.5, -0.5,  0.5, 1.0, 0.0),
    tex(-0.5, -0.5, -0.5, 0.0, 0.0),
    tex(-0.5,  0.5, -0.5, 0.0, 1.0),
    // +X
    tex( 0.5,  0.5, -0.5, 1.0, 1.0),
    tex( 0.5, -0.5, -0.5, 1.0, 0.0),
    tex( 0.5, -0.5,  0.5, 0.0, 0.0),
    tex( 0.5,  0.5,  0.5, 0.0, 1.0),
    // +Y
    tex( 0.5,  0.5, -0.5, 1.0, 1.0),
    tex( 0.5,  0.5,  0.5, 1.0, 0.0),
    tex(-0.5,  0.5,  0.5, 0.0, 0.0),
    tex(-0.5,  0.5, -0.5, 0.0, 1.0),
    // -Y
    tex( 0.5, -0.5, -0.5, 1.0, 1.0),
    tex( 0.5, -0.5,  0.5, 1.0, 0.0),
    tex(-0.5, -0.5,  0.5, 0.0, 0.0),
    tex(-0.5, -0.5, -0.5, 0.0, 1.0),
];

/// Two triangles per cube face, same winding as [`QUAD_INDICES`].
#[rustfmt::skip]
pub const CUBE_INDICES: [u32; 36] = [
    0, 1, 3,     1, 2, 3,
    4, 5, 7,     5, 6, 7,
    8, 9, 11,    9, 10, 11,
    12, 13, 15,  13, 14, 15,
    16, 17, 19,  17, 18, 19,
    20, 21, 23,  21, 22, 23,
];

/// World positions of the cubes in the camera demo.
pub const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

/// Axis every cube is tilted around. Not normalized.
pub const CUBE_ROTATION_AXIS: Vec3 = Vec3::new(1.0, 0.3, 0.5);

/// Model matrix of the `index`-th cube: tilted by `index` radians, then moved to `position`.
pub fn cube_model(index: usize, position: Vec3) -> Mat4 {
    Mat4::from_translation(position)
        * Mat4::from_axis_angle(CUBE_ROTATION_AXIS.normalize(), index as f32)
}

/// Model matrices of the whole cube field, in [`CUBE_POSITIONS`] order.
pub fn cube_field() -> impl Iterator<Item = Mat4> {
    CUBE_POSITIONS
        .iter()
        .enumerate()
        .map(|(i, position)| cube_model(i, *position))
}
