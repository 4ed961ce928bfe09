//! Textual representations of tags & meshes.

mod common;

use meshdata::{
    AttributeName, AttributeType, CustomAttribute, IndexType, RawAttributeName, RawAttributeType,
};

#[test]
fn attribute_names() {
    assert_eq!(
        AttributeName::TextureCoordinates2D.to_string(),
        "AttributeName::TextureCoordinates2D"
    );
    assert_eq!(AttributeName::Colors.to_string(), "AttributeName::Colors");
    assert_eq!(
        AttributeName::custom(200).unwrap().to_string(),
        "AttributeName::Custom(200)"
    );
}

#[test]
fn raw_attribute_names() {
    assert_eq!(RawAttributeName(1).to_string(), "AttributeName::Positions3D");
    assert_eq!(RawAttributeName(200).to_string(), "AttributeName::Custom(200)");
    assert_eq!(RawAttributeName(128).to_string(), "AttributeName::Custom(128)");
    assert_eq!(RawAttributeName(5).to_string(), "AttributeName(0x05)");
    assert_eq!(RawAttributeName(127).to_string(), "AttributeName(0x7f)");
}

#[test]
fn raw_attribute_types() {
    assert_eq!(RawAttributeType(2).to_string(), "AttributeType::Vector4");
    assert_eq!(RawAttributeType(0xde).to_string(), "AttributeType(0xde)");
}

#[test]
fn raw_round_trip() {
    for raw in 0..=u8::MAX {
        if let Some(name) = AttributeName::from_raw(raw) {
            assert_eq!(name.to_raw(), raw);
            assert_eq!(name.is_custom(), raw >= AttributeName::CUSTOM);
        }
        if let Some(ty) = AttributeType::from_raw(raw) {
            assert_eq!(ty.to_raw(), raw);
        }
    }
}

#[test]
fn names_survive_raw_round_trip() {
    let known = [
        AttributeName::Positions2D,
        AttributeName::Positions3D,
        AttributeName::Normals,
        AttributeName::TextureCoordinates2D,
        AttributeName::Colors,
    ];
    let custom = (AttributeName::CUSTOM..=u8::MAX).filter_map(AttributeName::custom);
    for name in known.into_iter().chain(custom) {
        assert_eq!(AttributeName::from_raw(name.to_raw()), Some(name), "{name}");
    }
}

#[test]
fn custom_below_threshold() {
    for raw in 0..AttributeName::CUSTOM {
        assert_eq!(AttributeName::custom(raw), None);
        assert_eq!(CustomAttribute::new(raw), None);
    }
    let name = AttributeName::custom(AttributeName::CUSTOM).unwrap();
    assert!(name.is_custom());
    assert_eq!(name.to_raw(), 128);
    assert_eq!(
        CustomAttribute::new(255).map(CustomAttribute::raw),
        Some(255)
    );
}

#[test]
fn types() {
    assert_eq!(AttributeType::Vector3.to_string(), "AttributeType::Vector3");
    assert_eq!(IndexType::UnsignedShort.to_string(), "IndexType::UnsignedShort");
    assert_eq!(AttributeType::Vector3.size(), 12);
    assert_eq!(IndexType::UnsignedInt.size(), 4);
}

#[test]
fn mesh_summary() {
    let mesh = common::quad();
    assert_eq!(
        mesh.to_string(),
        "MeshData (6 indices of IndexType::UnsignedShort, 4 vertices / 2 attributes) {\n  \
         [0] AttributeName::Positions3D: AttributeType::Vector3 @ 0 (stride 20)\n  \
         [1] AttributeName::TextureCoordinates2D: AttributeType::Vector2 @ 12 (stride 20)\n}"
    );
    let debug = format!("{mesh:?}");
    assert!(debug.contains("index_data: 12 bytes"), "{debug}");
    assert!(debug.contains("vertex_data: 80 bytes"), "{debug}");
}
