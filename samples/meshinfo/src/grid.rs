//! A flat, subdivided square in the XY plane, standing in for the output of an importer.

use meshdata::{
    AttributeDescriptor, AttributeName, AttributeType, ImporterState, IndexDescriptor, IndexType,
    MeshData, MeshError,
};

/// Position (xyz), normal (xyz), texture coordinates (uv)
const STRIDE: usize = 8 * std::mem::size_of::<f32>();

#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("a {size}×{size} grid has {vertices} vertices, too many for {ty} indices")]
    IndexOverflow {
        size: u32,
        vertices: u64,
        ty: IndexType,
    },
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

fn push_index(data: &mut Vec<u8>, ty: IndexType, index: u32) {
    // range is checked up front, in `grid`
    match ty {
        IndexType::UnsignedByte => data.push(index as u8),
        IndexType::UnsignedShort => data.extend_from_slice(&(index as u16).to_ne_bytes()),
        IndexType::UnsignedInt => data.extend_from_slice(&index.to_ne_bytes()),
    }
}

/// Generate a `size`×`size` grid of quads spanning -1..1 on X and Y.
#[tracing::instrument(level = "debug")]
pub fn grid(size: u32, ty: IndexType) -> Result<MeshData<'static>, GridError> {
    let side = u64::from(size) + 1;
    let vertices = side * side;
    let max = match ty {
        IndexType::UnsignedByte => u64::from(u8::MAX),
        IndexType::UnsignedShort => u64::from(u16::MAX),
        IndexType::UnsignedInt => u64::from(u32::MAX),
    };
    if vertices - 1 > max {
        return Err(GridError::IndexOverflow { size, vertices, ty });
    }
    let side = side as u32;

    let mut vertex_data = Vec::with_capacity(vertices as usize * STRIDE);
    for y in 0..side {
        for x in 0..side {
            let u = x as f32 / size.max(1) as f32;
            let v = y as f32 / size.max(1) as f32;
            for c in [u * 2.0 - 1.0, v * 2.0 - 1.0, 0.0, 0.0, 0.0, 1.0, u, v] {
                vertex_data.extend_from_slice(&c.to_ne_bytes());
            }
        }
    }

    let mut index_data = Vec::with_capacity(size as usize * size as usize * 6 * ty.size());
    for y in 0..size {
        for x in 0..size {
            let corner = y * side + x;
            for i in [corner, corner + 1, corner + side + 1, corner + side + 1, corner + side, corner] {
                push_index(&mut index_data, ty, i);
            }
        }
    }

    let count = vertices as usize;
    let indices = IndexDescriptor::whole(ty, &index_data);
    tracing::debug!(
        vertices = count,
        indices = indices.count(),
        "generated grid"
    );
    MeshData::new(
        index_data,
        vertex_data,
        indices,
        vec![
            AttributeDescriptor::new(AttributeName::Positions3D, AttributeType::Vector3, 0, STRIDE, count),
            AttributeDescriptor::new(AttributeName::Normals, AttributeType::Vector3, 12, STRIDE, count),
            AttributeDescriptor::new(
                AttributeName::TextureCoordinates2D,
                AttributeType::Vector2,
                24,
                STRIDE,
                count,
            ),
        ],
        Some(ImporterState::from_raw(size as usize)),
    )
    .map_err(GridError::from)
}
