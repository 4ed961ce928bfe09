use std::{iter::FusedIterator, marker::PhantomData, mem::size_of};

use crate::MeshError;

/// Trait for plain-old-data types which can be read out of mesh byte storage.
///
/// # Safety
///
/// Every bit pattern of `size_of::<Self>()` bytes must be a valid `Self`, and `Self` must not
/// contain padding.
#[allow(unsafe_code)]
pub unsafe trait Element: Copy + 'static {}

/// A non-owning view of `len` elements of type `T`, spaced `stride` bytes apart.
///
/// Elements are read by value, so the underlying bytes needn't be aligned for `T`.
///
/// # Invariants
///
/// * `len == 0` or `data.len() >= (len - 1) * stride + size_of::<T>()`
pub struct StridedView<'data, T> {
    data: &'data [u8],
    stride: usize,
    len: usize,
    _ty: PhantomData<T>,
}

impl<T> Clone for StridedView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StridedView<'_, T> {}

impl<T> std::fmt::Debug for StridedView<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StridedView")
            .field("ptr", &self.data.as_ptr())
            .field("stride", &self.stride)
            .field("len", &self.len)
            .finish()
    }
}

/// Number of bytes spanned by `len` elements of `size` bytes spaced `stride` bytes apart.
#[inline]
pub(crate) fn span(len: usize, stride: usize, size: usize) -> Option<usize> {
    match len {
        0 => Some(0),
        _ => (len - 1).checked_mul(stride)?.checked_add(size),
    }
}

impl<'data, T: Element> StridedView<'data, T> {
    /// Construct a view without performing bounds checks.
    ///
    /// # Safety
    ///
    /// * `len == 0` or `data.len() >= (len - 1) * stride + size_of::<T>()`
    /// * the viewed bytes must have been written as `T`s (or anything sharing `T`'s layout)
    #[inline]
    #[allow(unsafe_code)]
    pub(crate) const unsafe fn new_unchecked(data: &'data [u8], stride: usize, len: usize) -> Self {
        Self {
            data,
            stride,
            len,
            _ty: PhantomData {},
        }
    }

    /// View `len` elements starting at the beginning of `data`.
    ///
    /// Returns `None` if `data` is too short, or if `stride` is smaller than an element.
    #[allow(unsafe_code)]
    pub fn new(data: &'data [u8], stride: usize, len: usize) -> Option<Self> {
        if stride < size_of::<T>() || span(len, stride, size_of::<T>())? > data.len() {
            return None;
        }
        Some(unsafe { Self::new_unchecked(data, stride, len) })
    }

    /// View a tightly packed array.
    pub fn packed(data: &'data [u8]) -> Option<Self> {
        if data.len() % size_of::<T>() != 0 {
            return None;
        }
        Self::new(data, size_of::<T>(), data.len() / size_of::<T>())
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// # Safety
    ///
    /// * `index < self.len()`
    #[inline]
    #[allow(unsafe_code)]
    pub unsafe fn get_unchecked(&self, index: usize) -> T {
        // in bounds per the view invariant; `T: Element` makes any bit pattern fine
        unsafe { std::ptr::read_unaligned(self.data.as_ptr().add(index * self.stride) as *const T) }
    }

    #[inline]
    #[allow(unsafe_code)]
    pub fn get(&self, index: usize) -> Option<T> {
        if index < self.len {
            Some(unsafe { self.get_unchecked(index) })
        } else {
            None
        }
    }

    #[inline]
    pub fn iter(&self) -> StridedIter<'data, T> {
        StridedIter {
            view: *self,
            front: 0,
            back: self.len,
        }
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Borrow the view as a `[T]`, if it's tightly packed and suitably aligned.
    #[allow(unsafe_code)]
    pub fn try_as_slice(&self) -> Result<&'data [T], MeshError> {
        if self.len == 0 {
            return Ok(&[]);
        }
        if self.stride != size_of::<T>() {
            return Err(MeshError::Strided {
                stride: self.stride,
                size: size_of::<T>(),
            });
        }
        if !(self.data.as_ptr() as *const T).is_aligned() {
            return Err(MeshError::Misaligned {
                align: std::mem::align_of::<T>(),
            });
        }
        Ok(unsafe { std::slice::from_raw_parts(self.data.as_ptr() as *const T, self.len) })
    }
}

impl<'data, T: Element> IntoIterator for StridedView<'data, T> {
    type Item = T;
    type IntoIter = StridedIter<'data, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'view, 'data, T: Element> IntoIterator for &'view StridedView<'data, T> {
    type Item = T;
    type IntoIter = StridedIter<'data, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements of a [StridedView].
#[derive(Debug, Clone)]
pub struct StridedIter<'data, T> {
    view: StridedView<'data, T>,
    front: usize,
    back: usize,
}

impl<T: Element> Iterator for StridedIter<'_, T> {
    type Item = T;

    #[inline]
    #[allow(unsafe_code)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let res = unsafe { self.view.get_unchecked(self.front) };
        self.front += 1;
        Some(res)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T: Element> DoubleEndedIterator for StridedIter<'_, T> {
    #[inline]
    #[allow(unsafe_code)]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(unsafe { self.view.get_unchecked(self.back) })
    }
}

impl<T: Element> ExactSizeIterator for StridedIter<'_, T> {}

impl<T: Element> FusedIterator for StridedIter<'_, T> {}

mod _impl_elem {
    use super::Element;

    macro_rules! impl_elem {
        ($($Target:ty),+) => {
            $(
                #[allow(unsafe_code)]
                unsafe impl Element for $Target {}
            )+
        };
    }

    impl_elem!(u8, u16, u32, f32);
    impl_elem!([f32; 2], [f32; 3], [f32; 4]);
    impl_elem!(
        nalgebra::Vector2<f32>,
        nalgebra::Vector3<f32>,
        nalgebra::Vector4<f32>,
        nalgebra::Point2<f32>,
        nalgebra::Point3<f32>,
        nalgebra::Point4<f32>
    );
}

#[cfg(test)]
mod tests {
    use super::{span, StridedView};

    fn interleaved() -> Vec<u8> {
        // (u16 value, u16 padding) * 4
        [10u16, 0xffff, 20, 0xffff, 30, 0xffff, 40, 0xffff]
            .iter()
            .flat_map(|v| v.to_ne_bytes())
            .collect()
    }

    #[test]
    fn span_bounds() {
        assert_eq!(span(0, 12, 4), Some(0));
        assert_eq!(span(1, 12, 4), Some(4));
        assert_eq!(span(3, 12, 4), Some(28));
        assert_eq!(span(usize::MAX, 2, 1), None);
    }

    #[test]
    fn strided_read() {
        let data = interleaved();
        let view = StridedView::<u16>::new(&data, 4, 4).unwrap();
        assert_eq!(view.to_vec(), vec![10, 20, 30, 40]);
        assert_eq!(view.get(4), None);
        assert_eq!(view.iter().rev().collect::<Vec<_>>(), vec![40, 30, 20, 10]);
        assert_eq!(view.iter().len(), 4);
        assert!(view.try_as_slice().is_err());
    }

    #[test]
    fn unaligned_read() {
        let mut data = vec![0u8];
        data.extend_from_slice(&1.5f32.to_ne_bytes());
        data.extend_from_slice(&(-2.0f32).to_ne_bytes());
        let view = StridedView::<f32>::packed(&data[1..]).unwrap();
        assert_eq!(view.to_vec(), vec![1.5, -2.0]);
    }

    #[test]
    fn out_of_bounds() {
        let data = interleaved();
        assert!(StridedView::<u16>::new(&data, 4, 5).is_none());
        assert!(StridedView::<u32>::new(&data, 2, 1).is_none());
        assert!(StridedView::<u32>::packed(&data[..6]).is_none());
    }
}
