use std::ops::Range;

use num_traits::AsPrimitive;

use crate::view::Element;

/// The integer width of the elements of an index array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexType {
    UnsignedByte,
    UnsignedShort,
    UnsignedInt,
}

impl IndexType {
    /// Size of one index, in bytes.
    pub const fn size(self) -> usize {
        use std::mem::size_of;
        match self {
            IndexType::UnsignedByte => size_of::<u8>(),
            IndexType::UnsignedShort => size_of::<u16>(),
            IndexType::UnsignedInt => size_of::<u32>(),
        }
    }
}

/// Trait for types which can be used as index data.
///
/// # Safety
///
/// Implementing types *must* have the size described by their `TYPE` constant.
#[allow(unsafe_code)]
pub unsafe trait IndexElement: Element + AsPrimitive<u32> {
    const TYPE: IndexType;
}

mod _impl_index {
    use super::{IndexElement, IndexType};

    macro_rules! impl_index {
        ($Target:ty => $t:ident) => {
            // "size of type $Target == size of index type $t"
            static_assertions::const_assert_eq!(
                std::mem::size_of::<$Target>(),
                IndexType::$t.size()
            );
            #[allow(unsafe_code)]
            unsafe impl IndexElement for $Target {
                const TYPE: IndexType = IndexType::$t;
            }
        };
    }

    impl_index!(u8 => UnsignedByte);
    impl_index!(u16 => UnsignedShort);
    impl_index!(u32 => UnsignedInt);
}

/// Describes where index data lives within a mesh's index buffer, and what it looks like.
///
/// Has no data accessors; the data is accessible through [MeshData](crate::MeshData) once the
/// descriptor is handed to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexDescriptor {
    ty: IndexType,
    /// Offset into the index buffer, in bytes
    offset: usize,
    /// Length of the index data, in bytes
    size: usize,
}

impl Default for IndexDescriptor {
    fn default() -> Self {
        Self::none()
    }
}

impl IndexDescriptor {
    /// Describe a non-indexed mesh.
    #[inline]
    pub const fn none() -> Self {
        Self {
            ty: IndexType::UnsignedInt,
            offset: 0,
            size: 0,
        }
    }

    /// Describe `size` bytes of indices of type `ty`, starting `offset` bytes into the index
    /// buffer.
    #[inline]
    pub const fn new(ty: IndexType, offset: usize, size: usize) -> Self {
        Self { ty, offset, size }
    }

    /// Describe `count` indices of type `T`, starting `offset` bytes into the index buffer.
    ///
    /// A byte size too large for `usize` saturates, and so fails validation in
    /// [MeshData::new](crate::MeshData::new).
    #[inline]
    pub const fn typed<T: IndexElement>(offset: usize, count: usize) -> Self {
        Self::new(T::TYPE, offset, count.saturating_mul(T::TYPE.size()))
    }

    /// Describe an entire index buffer made of indices of type `ty`.
    #[inline]
    pub fn whole(ty: IndexType, buffer: &[u8]) -> Self {
        Self::new(ty, 0, buffer.len())
    }

    #[inline(always)]
    pub fn index_type(&self) -> IndexType {
        self.ty
    }

    #[inline(always)]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the described data, in bytes.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of indices described.
    #[inline]
    pub fn count(&self) -> usize {
        self.size / self.ty.size()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Byte range of the described data within the index buffer.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset.saturating_add(self.size)
    }
}
