use std::fmt::{Debug, Display};

use crate::{AttributeName, AttributeType, IndexType, MeshData};

impl Display for IndexType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexType::UnsignedByte => f.write_str("IndexType::UnsignedByte"),
            IndexType::UnsignedShort => f.write_str("IndexType::UnsignedShort"),
            IndexType::UnsignedInt => f.write_str("IndexType::UnsignedInt"),
        }
    }
}

impl Display for AttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeType::Vector2 => f.write_str("AttributeType::Vector2"),
            AttributeType::Vector3 => f.write_str("AttributeType::Vector3"),
            AttributeType::Vector4 => f.write_str("AttributeType::Vector4"),
        }
    }
}

impl Display for AttributeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeName::Positions2D => f.write_str("AttributeName::Positions2D"),
            AttributeName::Positions3D => f.write_str("AttributeName::Positions3D"),
            AttributeName::Normals => f.write_str("AttributeName::Normals"),
            AttributeName::TextureCoordinates2D => {
                f.write_str("AttributeName::TextureCoordinates2D")
            }
            AttributeName::Colors => f.write_str("AttributeName::Colors"),
            AttributeName::Custom(c) => write!(f, "AttributeName::Custom({})", c.raw()),
        }
    }
}

/// A raw [AttributeType] tag, as it might come out of a file. Formats as the type it names, or as
/// `AttributeType(0x..)` if it doesn't name one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawAttributeType(pub u8);

impl Display for RawAttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match AttributeType::from_raw(self.0) {
            Some(ty) => Display::fmt(&ty, f),
            None => write!(f, "AttributeType({:#04x})", self.0),
        }
    }
}

/// A raw [AttributeName] tag, as it might come out of a file. Formats as the name it represents,
/// or as `AttributeName(0x..)` if it doesn't represent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawAttributeName(pub u8);

impl Display for RawAttributeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match AttributeName::from_raw(self.0) {
            Some(name) => Display::fmt(&name, f),
            None => write!(f, "AttributeName({:#04x})", self.0),
        }
    }
}

impl Debug for MeshData<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeshData")
            .field("index_data", &format_args!("{} bytes", self.index_data.len()))
            .field(
                "vertex_data",
                &format_args!("{} bytes", self.vertex_data.len()),
            )
            .field("indices", &self.indices)
            .field("attributes", &self.attributes)
            .field("importer_state", &self.importer_state)
            .finish()
    }
}

impl Display for MeshData<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MeshData (")?;
        match self.index_type() {
            Some(ty) => write!(f, "{} indices of {ty}", self.index_count())?,
            None => write!(f, "non-indexed")?,
        }
        write!(
            f,
            ", {} vertices / {} attributes) {{",
            self.vertex_count(),
            self.attribute_count()
        )?;
        for (id, attr) in self.attributes.iter().enumerate() {
            write!(
                f,
                "\n  [{id}] {}: {} @ {} (stride {})",
                attr.name(),
                attr.attribute_type(),
                attr.offset(),
                attr.stride()
            )?;
        }
        write!(f, "\n}}")
    }
}
