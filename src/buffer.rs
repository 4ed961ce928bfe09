use std::ops::Deref;

/// Byte storage backing the index or vertex data of a [MeshData](crate::MeshData).
///
/// A mesh either owns its data or borrows it from somewhere that outlives it (ex. a
/// memory-mapped file). Descriptors address this storage by byte offset, so either variant works
/// the same way from the perspective of the accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshBuffer<'data> {
    Owned(Vec<u8>),
    Borrowed(&'data [u8]),
}

impl Default for MeshBuffer<'_> {
    fn default() -> Self {
        Self::Owned(Vec::new())
    }
}

impl From<Vec<u8>> for MeshBuffer<'_> {
    fn from(value: Vec<u8>) -> Self {
        Self::Owned(value)
    }
}

impl<'data> From<&'data [u8]> for MeshBuffer<'data> {
    fn from(value: &'data [u8]) -> Self {
        Self::Borrowed(value)
    }
}

impl<'data> MeshBuffer<'data> {
    #[inline]
    pub fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        self
    }

    /// Mutable access to the data, if it's owned.
    #[inline]
    pub fn as_slice_mut(&mut self) -> Option<&mut [u8]> {
        match self {
            Self::Owned(data) => Some(data.as_mut_slice()),
            Self::Borrowed(_) => None,
        }
    }

    /// Take the owned data out, leaving an empty buffer behind.
    ///
    /// Borrowed data isn't ours to give away, so this yields an empty `Vec` for it; the borrow is
    /// dropped all the same.
    pub fn take(&mut self) -> Vec<u8> {
        match std::mem::take(self) {
            Self::Owned(data) => data,
            Self::Borrowed(_) => Vec::new(),
        }
    }
}

impl Deref for MeshBuffer<'_> {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        match self {
            Self::Owned(data) => data,
            Self::Borrowed(data) => data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MeshBuffer;

    #[test]
    fn take_owned() {
        let mut buf = MeshBuffer::from(vec![1u8, 2, 3]);
        assert_eq!(buf.take(), vec![1, 2, 3]);
        assert!(buf.is_empty());
        assert!(buf.take().is_empty());
    }

    #[test]
    fn take_borrowed() {
        let data = [4u8; 8];
        let mut buf = MeshBuffer::from(&data[..]);
        assert!(!buf.is_owned());
        assert!(buf.as_slice_mut().is_none());
        assert!(buf.take().is_empty());
        assert!(buf.is_empty());
        assert!(buf.is_owned());
    }
}
