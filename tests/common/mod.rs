//! Byte buffer helpers shared between integration tests.
#![allow(dead_code)]

use meshdata::{AttributeDescriptor, AttributeName, AttributeType, IndexDescriptor, MeshData};

pub fn u16_bytes(data: &[u16]) -> Vec<u8> {
    data.iter().flat_map(|v| v.to_ne_bytes()).collect()
}

pub fn u32_bytes(data: &[u32]) -> Vec<u8> {
    data.iter().flat_map(|v| v.to_ne_bytes()).collect()
}

pub fn f32_bytes(data: &[f32]) -> Vec<u8> {
    data.iter().flat_map(|v| v.to_ne_bytes()).collect()
}

/// Stride of one vertex of [quad]: position (xyz) followed by texture coordinates (uv).
pub const QUAD_STRIDE: usize = 5 * 4;

pub const QUAD_POSITIONS: [[f32; 3]; 4] = [
    [-1.0, -1.0, 0.0],
    [1.0, -1.0, 0.0],
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
];

pub const QUAD_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 2, 3, 0];

/// An indexed quad with interleaved positions & texture coordinates.
pub fn quad() -> MeshData<'static> {
    let vertices: Vec<f32> = QUAD_POSITIONS
        .iter()
        .zip(QUAD_UVS.iter())
        .flat_map(|(p, uv)| p.iter().chain(uv.iter()).copied())
        .collect();
    MeshData::new(
        u16_bytes(&QUAD_INDICES),
        f32_bytes(&vertices),
        IndexDescriptor::typed::<u16>(0, QUAD_INDICES.len()),
        vec![
            AttributeDescriptor::new(
                AttributeName::Positions3D,
                AttributeType::Vector3,
                0,
                QUAD_STRIDE,
                4,
            ),
            AttributeDescriptor::new(
                AttributeName::TextureCoordinates2D,
                AttributeType::Vector2,
                3 * 4,
                QUAD_STRIDE,
                4,
            ),
        ],
        None,
    )
    .unwrap()
}
