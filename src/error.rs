use crate::{AttributeName, AttributeType, IndexType};

/// Errors related to [MeshData](crate::MeshData) construction and access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    #[error("index data out of bounds: {offset}..{end} ⊄ 0..{buffer_len}")]
    IndexRangeOverflow {
        offset: usize,
        end: usize,
        buffer_len: usize,
    },
    #[error("index data of {len} bytes is not a multiple of the {ty} size ({} bytes)", .ty.size())]
    IndexSizeMismatch { len: usize, ty: IndexType },
    #[error("attribute {id} out of bounds: {offset}..{end} ⊄ 0..{buffer_len}")]
    AttributeRangeOverflow {
        id: usize,
        offset: usize,
        end: usize,
        buffer_len: usize,
    },
    #[error("attribute {id} has stride {stride}, smaller than its {ty} element ({} bytes)", .ty.size())]
    AttributeStride {
        id: usize,
        stride: usize,
        ty: AttributeType,
    },
    #[error("attribute {id} has {count} elements, expected {expected} (the vertex count)")]
    VertexCountMismatch {
        id: usize,
        count: usize,
        expected: usize,
    },
    #[error("attribute index out of range: 0..{count} ∌ {id}")]
    AttributeOutOfRange { id: usize, count: usize },
    #[error("index {id} out of bounds for {count} {name} attributes")]
    NamedAttributeOutOfRange {
        name: AttributeName,
        id: usize,
        count: usize,
    },
    #[error("improper index type requested: stored {stored}, requested {requested}")]
    IndexTypeMismatch {
        stored: IndexType,
        requested: IndexType,
    },
    #[error("improper type requested for attribute {id}: stored {stored}, requested {requested}")]
    AttributeTypeMismatch {
        id: usize,
        stored: AttributeType,
        requested: AttributeType,
    },
    #[error("cannot borrow view as slice; data not aligned to {align} bytes")]
    Misaligned { align: usize },
    #[error("cannot borrow view as slice; stride {stride} != element size {size}")]
    Strided { stride: usize, size: usize },
}
