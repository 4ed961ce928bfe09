//! Convenience accessors which copy data out of a [MeshData] as a fixed type, regardless of how
//! it's stored.

use nalgebra::{Vector2, Vector3};
use num_traits::AsPrimitive;

use crate::{
    view::StridedView, AttributeName, AttributeType, Color3, Color4, IndexElement, IndexType,
    MeshData, MeshError,
};

fn widen<T: IndexElement>(input: StridedView<'_, T>) -> Vec<u32> {
    input.iter().map(AsPrimitive::<u32>::as_).collect()
}

impl<'data> MeshData<'data> {
    /// Index data, widened to `u32`; empty if the mesh isn't indexed.
    #[allow(unsafe_code)]
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub fn indices_as_u32(&self) -> Vec<u32> {
        // the type is taken from the descriptor itself, so it always matches
        unsafe {
            match self.index_type() {
                None => Vec::new(),
                Some(IndexType::UnsignedByte) => widen(self.indices_unchecked::<u8>()),
                Some(IndexType::UnsignedShort) => widen(self.indices_unchecked::<u16>()),
                Some(IndexType::UnsignedInt) => widen(self.indices_unchecked::<u32>()),
            }
        }
    }

    /// Resolve the `id`th attribute named `name`, and ensure it's stored as `expected`.
    fn convertible(
        &self,
        name: AttributeName,
        id: usize,
        expected: AttributeType,
    ) -> Result<usize, MeshError> {
        let attr = self.attribute_for(name, id)?;
        let stored = self.attributes[attr].attribute_type();
        if stored != expected {
            return Err(MeshError::AttributeTypeMismatch {
                id: attr,
                stored,
                requested: expected,
            });
        }
        Ok(attr)
    }

    /// Copy of the `id`th [AttributeName::Positions2D] attribute.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub fn positions_2d(&self, id: usize) -> Result<Vec<Vector2<f32>>, MeshError> {
        let attr = self.convertible(AttributeName::Positions2D, id, AttributeType::Vector2)?;
        Ok(self.attribute::<Vector2<f32>>(attr)?.to_vec())
    }

    /// Copy of the `id`th [AttributeName::Positions3D] attribute.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub fn positions_3d(&self, id: usize) -> Result<Vec<Vector3<f32>>, MeshError> {
        let attr = self.convertible(AttributeName::Positions3D, id, AttributeType::Vector3)?;
        Ok(self.attribute::<Vector3<f32>>(attr)?.to_vec())
    }

    /// Copy of the `id`th [AttributeName::Normals] attribute.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub fn normals(&self, id: usize) -> Result<Vec<Vector3<f32>>, MeshError> {
        let attr = self.convertible(AttributeName::Normals, id, AttributeType::Vector3)?;
        Ok(self.attribute::<Vector3<f32>>(attr)?.to_vec())
    }

    /// Copy of the `id`th [AttributeName::TextureCoordinates2D] attribute.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub fn texture_coordinates_2d(&self, id: usize) -> Result<Vec<Vector2<f32>>, MeshError> {
        let attr = self.convertible(
            AttributeName::TextureCoordinates2D,
            id,
            AttributeType::Vector2,
        )?;
        Ok(self.attribute::<Vector2<f32>>(attr)?.to_vec())
    }

    /// Copy of the `id`th [AttributeName::Colors] attribute, as RGBA.
    ///
    /// RGB colors get an alpha of 1.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub fn colors(&self, id: usize) -> Result<Vec<Color4>, MeshError> {
        let attr = self.attribute_for(AttributeName::Colors, id)?;
        match self.attributes[attr].attribute_type() {
            AttributeType::Vector4 => Ok(self.attribute::<Color4>(attr)?.to_vec()),
            AttributeType::Vector3 => Ok(self
                .attribute::<Color3>(attr)?
                .iter()
                .map(|c| c.push(1.0))
                .collect()),
            stored => Err(MeshError::AttributeTypeMismatch {
                id: attr,
                stored,
                requested: AttributeType::Vector4,
            }),
        }
    }
}
