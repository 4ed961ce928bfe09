use nalgebra::{Vector3, Vector4};

use crate::view::{span, Element};

/// An RGB color
pub type Color3 = Vector3<f32>;
/// An RGBA color
pub type Color4 = Vector4<f32>;

/// The semantic role of a mesh attribute.
///
/// Several attributes in one mesh may share a name (ex. multiple texture coordinate sets); they're
/// told apart by the order in which they occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeName {
    /// 2D positions; [AttributeType::Vector2]
    Positions2D,
    /// 3D positions; [AttributeType::Vector3]
    Positions3D,
    /// Normals; [AttributeType::Vector3]
    Normals,
    /// 2D texture coordinates; [AttributeType::Vector2]
    TextureCoordinates2D,
    /// Vertex colors; [AttributeType::Vector3] or [AttributeType::Vector4]
    Colors,
    /// An importer-specific attribute; see [AttributeName::custom].
    Custom(CustomAttribute),
}

/// Raw tag value of an [AttributeName::Custom] attribute.
///
/// # Invariants
///
/// * the value is at least [AttributeName::CUSTOM]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomAttribute(u8);

impl CustomAttribute {
    /// Returns `None` if `raw` is below [AttributeName::CUSTOM].
    #[inline]
    pub const fn new(raw: u8) -> Option<Self> {
        match raw >= AttributeName::CUSTOM {
            true => Some(Self(raw)),
            false => None,
        }
    }

    #[inline(always)]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl AttributeName {
    /// Raw tag values from here on up are reserved for [AttributeName::Custom].
    pub const CUSTOM: u8 = 128;

    /// A custom name with the raw tag value `raw`; `None` if `raw` is below
    /// [AttributeName::CUSTOM].
    #[inline]
    pub const fn custom(raw: u8) -> Option<Self> {
        match CustomAttribute::new(raw) {
            Some(c) => Some(Self::Custom(c)),
            None => None,
        }
    }

    /// Interpret a raw tag value. Values between the known names and [AttributeName::CUSTOM] have
    /// no meaning.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Positions2D),
            1 => Some(Self::Positions3D),
            2 => Some(Self::Normals),
            3 => Some(Self::TextureCoordinates2D),
            4 => Some(Self::Colors),
            // `None` for the unassigned values below CUSTOM
            r => Self::custom(r),
        }
    }

    pub const fn to_raw(self) -> u8 {
        match self {
            Self::Positions2D => 0,
            Self::Positions3D => 1,
            Self::Normals => 2,
            Self::TextureCoordinates2D => 3,
            Self::Colors => 4,
            Self::Custom(c) => c.raw(),
        }
    }

    #[inline]
    pub const fn is_custom(self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

/// The shape of each element of a mesh attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
    /// Two `f32`s; also used for 2D positions & texture coordinates
    Vector2,
    /// Three `f32`s; also used for RGB colors
    Vector3,
    /// Four `f32`s; also used for RGBA colors
    Vector4,
}

impl AttributeType {
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Vector2),
            1 => Some(Self::Vector3),
            2 => Some(Self::Vector4),
            _ => None,
        }
    }

    pub const fn to_raw(self) -> u8 {
        match self {
            Self::Vector2 => 0,
            Self::Vector3 => 1,
            Self::Vector4 => 2,
        }
    }

    pub const fn components(self) -> usize {
        match self {
            Self::Vector2 => 2,
            Self::Vector3 => 3,
            Self::Vector4 => 4,
        }
    }

    /// Size of one element, in bytes.
    pub const fn size(self) -> usize {
        self.components() * std::mem::size_of::<f32>()
    }
}

/// Trait for types which can be used as mesh attribute data.
///
/// # Safety
///
/// Implementing types *must* have the size described by their `TYPE` constant.
#[allow(unsafe_code)]
pub unsafe trait AttributeElement: Element {
    const TYPE: AttributeType;
}

mod _impl_attr {
    use super::{AttributeElement, AttributeType};

    macro_rules! impl_attr {
        ($t:ident => $($Target:ty),+) => {
            $(
                // "size of type $Target == size of attribute type $t"
                static_assertions::const_assert_eq!(
                    std::mem::size_of::<$Target>(),
                    AttributeType::$t.size()
                );
                #[allow(unsafe_code)]
                unsafe impl AttributeElement for $Target {
                    const TYPE: AttributeType = AttributeType::$t;
                }
            )+
        };
    }

    impl_attr!(Vector2 => nalgebra::Vector2<f32>, nalgebra::Point2<f32>, [f32; 2]);
    impl_attr!(Vector3 => nalgebra::Vector3<f32>, nalgebra::Point3<f32>, [f32; 3]);
    impl_attr!(Vector4 => nalgebra::Vector4<f32>, nalgebra::Point4<f32>, [f32; 4]);
}

/// Describes where one attribute array lives within a mesh's vertex buffer, and what it looks
/// like.
///
/// Has no data accessors; the data is accessible through [MeshData](crate::MeshData) once the
/// descriptor is handed to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeDescriptor {
    name: AttributeName,
    ty: AttributeType,
    /// Offset of the first element into the vertex buffer, in bytes
    offset: usize,
    /// Distance between the starts of consecutive elements, in bytes
    stride: usize,
    count: usize,
}

impl AttributeDescriptor {
    #[inline]
    pub const fn new(
        name: AttributeName,
        ty: AttributeType,
        offset: usize,
        stride: usize,
        count: usize,
    ) -> Self {
        Self {
            name,
            ty,
            offset,
            stride,
            count,
        }
    }

    /// Describe `count` elements of type `T`, spaced `stride` bytes apart.
    #[inline]
    pub const fn typed<T: AttributeElement>(
        name: AttributeName,
        offset: usize,
        stride: usize,
        count: usize,
    ) -> Self {
        Self::new(name, T::TYPE, offset, stride, count)
    }

    /// Describe a tightly packed array of `count` elements of type `T`.
    #[inline]
    pub const fn packed<T: AttributeElement>(
        name: AttributeName,
        offset: usize,
        count: usize,
    ) -> Self {
        Self::typed::<T>(name, offset, T::TYPE.size(), count)
    }

    #[inline(always)]
    pub fn name(&self) -> AttributeName {
        self.name
    }

    #[inline(always)]
    pub fn attribute_type(&self) -> AttributeType {
        self.ty
    }

    #[inline(always)]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline(always)]
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline(always)]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Offset one past the last byte of the last element, or `None` on overflow.
    #[inline]
    pub fn end(&self) -> Option<usize> {
        self.offset
            .checked_add(span(self.count, self.stride, self.ty.size())?)
    }
}
