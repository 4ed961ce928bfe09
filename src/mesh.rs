mod convert;

use crate::{
    view::StridedView, AttributeDescriptor, AttributeElement, AttributeName, AttributeType,
    IndexDescriptor, IndexElement, IndexType, MeshBuffer, MeshError,
};

/// An opaque token relating a [MeshData] to whatever produced it.
///
/// Never interpreted by this crate; importers may use it as a key to look up their own context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImporterState(usize);

impl ImporterState {
    #[inline]
    pub const fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn from_ptr<T>(ptr: *const T) -> Self {
        Self(ptr as usize)
    }

    #[inline]
    pub const fn into_raw(self) -> usize {
        self.0
    }

    /// The pointer this token was made from. Dereferencing it is entirely the caller's business.
    #[inline]
    pub fn as_ptr<T>(self) -> *const T {
        self.0 as *const T
    }
}

/// Index and vertex data of a polygon mesh, with a runtime description of its layout.
///
/// # Invariants
///
/// Upheld by [MeshData::new]:
///
/// * the index descriptor is empty, or lies within `index_data` and is a whole number of indices
/// * every attribute descriptor lies within `vertex_data`, with a stride no smaller than its element
/// * every attribute has the same element count
pub struct MeshData<'data> {
    pub(crate) index_data: MeshBuffer<'data>,
    pub(crate) vertex_data: MeshBuffer<'data>,
    pub(crate) indices: IndexDescriptor,
    pub(crate) attributes: Vec<AttributeDescriptor>,
    pub(crate) importer_state: Option<ImporterState>,
}

fn validate_indices(indices: &IndexDescriptor, data: &[u8]) -> Result<(), MeshError> {
    if indices.is_empty() {
        return Ok(());
    }
    match indices.offset().checked_add(indices.size()) {
        Some(end) if end <= data.len() => {}
        end => {
            return Err(MeshError::IndexRangeOverflow {
                offset: indices.offset(),
                end: end.unwrap_or(usize::MAX),
                buffer_len: data.len(),
            })
        }
    }
    if indices.size() % indices.index_type().size() != 0 {
        return Err(MeshError::IndexSizeMismatch {
            len: indices.size(),
            ty: indices.index_type(),
        });
    }
    Ok(())
}

fn validate_attributes(attributes: &[AttributeDescriptor], data: &[u8]) -> Result<(), MeshError> {
    let Some(expected) = attributes.first().map(AttributeDescriptor::count) else {
        return Ok(());
    };
    for (id, attr) in attributes.iter().enumerate() {
        if attr.stride() < attr.attribute_type().size() {
            return Err(MeshError::AttributeStride {
                id,
                stride: attr.stride(),
                ty: attr.attribute_type(),
            });
        }
        match attr.end() {
            Some(end) if end <= data.len() => {}
            end => {
                return Err(MeshError::AttributeRangeOverflow {
                    id,
                    offset: attr.offset(),
                    end: end.unwrap_or(usize::MAX),
                    buffer_len: data.len(),
                })
            }
        }
        if attr.count() != expected {
            return Err(MeshError::VertexCountMismatch {
                id,
                count: attr.count(),
                expected,
            });
        }
    }
    Ok(())
}

impl<'data> MeshData<'data> {
    /// Take ownership of (or borrow) index and vertex data, described by `indices` and
    /// `attributes`.
    ///
    /// Either buffer may be empty; ex. a non-indexed mesh has no index data.
    #[allow(unsafe_code)]
    pub fn new(
        index_data: impl Into<MeshBuffer<'data>>,
        vertex_data: impl Into<MeshBuffer<'data>>,
        indices: IndexDescriptor,
        attributes: Vec<AttributeDescriptor>,
        importer_state: Option<ImporterState>,
    ) -> Result<Self, MeshError> {
        let index_data = index_data.into();
        let vertex_data = vertex_data.into();
        validate_indices(&indices, &index_data)?;
        validate_attributes(&attributes, &vertex_data)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            index_bytes = index_data.len(),
            vertex_bytes = vertex_data.len(),
            owned_indices = index_data.is_owned(),
            owned_vertices = vertex_data.is_owned(),
            attributes = attributes.len(),
            "constructed MeshData"
        );
        Ok(unsafe {
            Self::new_unchecked(index_data, vertex_data, indices, attributes, importer_state)
        })
    }

    /// Construct a MeshData without validating its descriptors.
    ///
    /// # Safety
    ///
    /// The descriptors must satisfy the invariants listed on [MeshData]; typed accessors read
    /// memory based on them without further bounds checks.
    #[inline]
    #[allow(unsafe_code)]
    pub unsafe fn new_unchecked(
        index_data: impl Into<MeshBuffer<'data>>,
        vertex_data: impl Into<MeshBuffer<'data>>,
        indices: IndexDescriptor,
        attributes: Vec<AttributeDescriptor>,
        importer_state: Option<ImporterState>,
    ) -> Self {
        Self {
            index_data: index_data.into(),
            vertex_data: vertex_data.into(),
            indices,
            attributes,
            importer_state,
        }
    }

    /// Raw index buffer, whether owned or borrowed; see [MeshData::index_data_mut] to tell them
    /// apart.
    ///
    /// Empty once [MeshData::release_indices] has been called.
    #[inline]
    pub fn index_data(&self) -> &[u8] {
        &self.index_data
    }

    /// Raw index buffer, if it's owned by this mesh.
    #[inline]
    pub fn index_data_mut(&mut self) -> Option<&mut [u8]> {
        self.index_data.as_slice_mut()
    }

    /// Raw vertex buffer, whether owned or borrowed; see [MeshData::vertex_data_mut] to tell them
    /// apart.
    ///
    /// Empty once [MeshData::release_vertices] has been called.
    #[inline]
    pub fn vertex_data(&self) -> &[u8] {
        &self.vertex_data
    }

    /// Raw vertex buffer, if it's owned by this mesh.
    #[inline]
    pub fn vertex_data_mut(&mut self) -> Option<&mut [u8]> {
        self.vertex_data.as_slice_mut()
    }

    #[inline]
    pub fn index_descriptor(&self) -> &IndexDescriptor {
        &self.indices
    }

    #[inline]
    pub fn attribute_descriptors(&self) -> &[AttributeDescriptor] {
        &self.attributes
    }

    #[inline]
    pub fn importer_state(&self) -> Option<ImporterState> {
        self.importer_state
    }

    #[inline]
    pub fn is_indexed(&self) -> bool {
        !self.indices.is_empty()
    }

    /// Number of indices; 0 if the mesh isn't indexed.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.count()
    }

    /// Index type, or `None` if the mesh isn't indexed.
    #[inline]
    pub fn index_type(&self) -> Option<IndexType> {
        self.is_indexed().then(|| self.indices.index_type())
    }

    /// Index data as stored; `T` must match [MeshData::index_type].
    ///
    /// Yields an empty view for non-indexed meshes.
    #[allow(unsafe_code)]
    pub fn indices<T: IndexElement>(&self) -> Result<StridedView<'_, T>, MeshError> {
        if self.is_indexed() && T::TYPE != self.indices.index_type() {
            return Err(MeshError::IndexTypeMismatch {
                stored: self.indices.index_type(),
                requested: T::TYPE,
            });
        }
        Ok(unsafe { self.indices_unchecked() })
    }

    /// # Safety
    ///
    /// * `T::TYPE` must equal [MeshData::index_type], if the mesh is indexed
    #[allow(unsafe_code)]
    pub unsafe fn indices_unchecked<T: IndexElement>(&self) -> StridedView<'_, T> {
        let bytes = match self.is_indexed() {
            true => self.index_data.get(self.indices.range()).unwrap_or(&[]),
            false => &[],
        };
        unsafe { StridedView::new_unchecked(bytes, T::TYPE.size(), bytes.len() / T::TYPE.size()) }
    }

    /// Total number of attribute arrays; not to be confused with [MeshData::vertex_count].
    #[inline]
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Element count of the first attribute, or 0 if there are no attributes.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.attributes.first().map_or(0, AttributeDescriptor::count)
    }

    /// Number of attributes with the given name.
    pub fn attribute_count_of(&self, name: AttributeName) -> usize {
        self.attributes.iter().filter(|a| a.name() == name).count()
    }

    #[inline]
    pub fn has_attribute(&self, name: AttributeName) -> bool {
        self.attributes.iter().any(|a| a.name() == name)
    }

    fn descriptor(&self, id: usize) -> Result<&AttributeDescriptor, MeshError> {
        self.attributes
            .get(id)
            .ok_or(MeshError::AttributeOutOfRange {
                id,
                count: self.attributes.len(),
            })
    }

    /// Name of the attribute at position `id`.
    pub fn attribute_name(&self, id: usize) -> Result<AttributeName, MeshError> {
        self.descriptor(id).map(AttributeDescriptor::name)
    }

    /// Type of the attribute at position `id`.
    pub fn attribute_type(&self, id: usize) -> Result<AttributeType, MeshError> {
        self.descriptor(id).map(AttributeDescriptor::attribute_type)
    }

    /// Type of the `id`th attribute named `name`.
    pub fn attribute_type_of(
        &self,
        name: AttributeName,
        id: usize,
    ) -> Result<AttributeType, MeshError> {
        self.attribute_type(self.attribute_for(name, id)?)
    }

    /// Position of the `id`th attribute named `name` among all attributes.
    pub fn attribute_for(&self, name: AttributeName, id: usize) -> Result<usize, MeshError> {
        self.attributes
            .iter()
            .enumerate()
            .filter(|(_, a)| a.name() == name)
            .nth(id)
            .map(|(i, _)| i)
            .ok_or_else(|| MeshError::NamedAttributeOutOfRange {
                name,
                id,
                count: self.attribute_count_of(name),
            })
    }

    /// Data of the attribute at position `id`; `T` must match its type.
    #[allow(unsafe_code)]
    pub fn attribute<T: AttributeElement>(
        &self,
        id: usize,
    ) -> Result<StridedView<'_, T>, MeshError> {
        let stored = self.descriptor(id)?.attribute_type();
        if T::TYPE != stored {
            return Err(MeshError::AttributeTypeMismatch {
                id,
                stored,
                requested: T::TYPE,
            });
        }
        Ok(unsafe { self.attribute_unchecked(id) })
    }

    /// Data of the `id`th attribute named `name`; `T` must match its type.
    pub fn attribute_of<T: AttributeElement>(
        &self,
        name: AttributeName,
        id: usize,
    ) -> Result<StridedView<'_, T>, MeshError> {
        self.attribute(self.attribute_for(name, id)?)
    }

    /// # Safety
    ///
    /// * `id < self.attribute_count()`
    /// * `T::TYPE` must equal the type of the attribute at position `id`
    #[allow(unsafe_code)]
    pub unsafe fn attribute_unchecked<T: AttributeElement>(&self, id: usize) -> StridedView<'_, T> {
        let attr = unsafe { self.attributes.get_unchecked(id) };
        let bytes = self.vertex_data.get(attr.offset()..).unwrap_or(&[]);
        unsafe { StridedView::new_unchecked(bytes, attr.stride(), attr.count()) }
    }

    /// Give up the index buffer, leaving the mesh non-indexed.
    ///
    /// Yields an empty `Vec` if the index data isn't owned, or has already been released.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub fn release_indices(&mut self) -> Vec<u8> {
        self.indices = IndexDescriptor::none();
        self.index_data.take()
    }

    /// Give up the vertex buffer, leaving the mesh without attributes.
    ///
    /// Yields an empty `Vec` if the vertex data isn't owned, or has already been released.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub fn release_vertices(&mut self) -> Vec<u8> {
        self.attributes.clear();
        self.vertex_data.take()
    }
}
