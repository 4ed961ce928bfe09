//! Index counts, typed index views, and widening.

mod common;

use common::{u16_bytes, u32_bytes};
use meshdata::{IndexDescriptor, IndexType, MeshBuffer, MeshData, MeshError};
use quickcheck_macros::quickcheck;

fn indexed(data: Vec<u8>, indices: IndexDescriptor) -> MeshData<'static> {
    MeshData::new(data, MeshBuffer::default(), indices, Vec::new(), None).unwrap()
}

#[quickcheck]
fn unsigned_byte(source: Vec<u8>) -> bool {
    let mesh = indexed(source.clone(), IndexDescriptor::typed::<u8>(0, source.len()));
    mesh.index_count() == source.len()
        && mesh.indices::<u8>().unwrap().to_vec() == source
        && mesh.indices_as_u32() == source.iter().map(|&i| u32::from(i)).collect::<Vec<_>>()
}

#[quickcheck]
fn unsigned_short(source: Vec<u16>) -> bool {
    let mesh = indexed(
        u16_bytes(&source),
        IndexDescriptor::typed::<u16>(0, source.len()),
    );
    mesh.index_count() == source.len()
        && mesh.indices::<u16>().unwrap().to_vec() == source
        && mesh.indices_as_u32() == source.iter().map(|&i| u32::from(i)).collect::<Vec<_>>()
}

#[quickcheck]
fn unsigned_int(source: Vec<u32>) -> bool {
    let mesh = indexed(
        u32_bytes(&source),
        IndexDescriptor::typed::<u32>(0, source.len()),
    );
    mesh.index_count() == source.len()
        && mesh.indices::<u32>().unwrap().to_vec() == source
        && mesh.indices_as_u32() == source
}

#[test]
fn index_type() {
    let mesh = indexed(u16_bytes(&[0, 1, 2]), IndexDescriptor::typed::<u16>(0, 3));
    assert!(mesh.is_indexed());
    assert_eq!(mesh.index_type(), Some(IndexType::UnsignedShort));
    assert_eq!(mesh.index_descriptor().size(), 6);
}

#[test]
fn sub_range() {
    // 2 bytes of header, then four shorts, then 2 bytes of trailing junk
    let mut data = vec![0xaa, 0xbb];
    data.extend(u16_bytes(&[7, 8, 9, 10]));
    data.extend([0xcc, 0xdd]);
    let mesh = indexed(data, IndexDescriptor::typed::<u16>(2, 4));
    assert_eq!(mesh.index_count(), 4);
    assert_eq!(mesh.indices::<u16>().unwrap().to_vec(), vec![7, 8, 9, 10]);
    assert_eq!(mesh.indices_as_u32(), vec![7, 8, 9, 10]);
    assert_eq!(mesh.index_data().len(), 12);
}

#[test]
fn type_mismatch() {
    let mesh = indexed(u16_bytes(&[0, 1, 2]), IndexDescriptor::typed::<u16>(0, 3));
    assert_eq!(
        mesh.indices::<u8>().unwrap_err(),
        MeshError::IndexTypeMismatch {
            stored: IndexType::UnsignedShort,
            requested: IndexType::UnsignedByte
        }
    );
    assert!(mesh.indices::<u32>().is_err());
}

#[test]
fn type_mismatch_message() {
    let mesh = indexed(vec![0, 1, 2], IndexDescriptor::typed::<u8>(0, 3));
    let msg = mesh.indices::<u32>().unwrap_err().to_string();
    assert!(msg.contains("IndexType::UnsignedByte"), "{msg}");
}

#[test]
fn non_indexed() {
    let mesh = indexed(Vec::new(), IndexDescriptor::none());
    assert!(!mesh.is_indexed());
    assert_eq!(mesh.index_count(), 0);
    assert_eq!(mesh.index_type(), None);
    assert!(mesh.indices::<u32>().unwrap().is_empty());
    assert!(mesh.indices::<u8>().unwrap().is_empty());
    assert!(mesh.indices_as_u32().is_empty());
}

#[test]
fn borrowed_indices() {
    let data = u32_bytes(&[3, 2, 1]);
    let mesh = MeshData::new(
        &data[..],
        MeshBuffer::default(),
        IndexDescriptor::whole(IndexType::UnsignedInt, &data),
        Vec::new(),
        None,
    )
    .unwrap();
    assert_eq!(mesh.indices_as_u32(), vec![3, 2, 1]);
}

#[test]
fn out_of_bounds() {
    let err = MeshData::new(
        vec![0u8; 4],
        MeshBuffer::default(),
        IndexDescriptor::typed::<u16>(2, 2),
        Vec::new(),
        None,
    )
    .unwrap_err();
    assert_eq!(
        err,
        MeshError::IndexRangeOverflow {
            offset: 2,
            end: 6,
            buffer_len: 4
        }
    );
}

#[test]
fn oversized_index_count() {
    let err = MeshData::new(
        vec![0u8; 16],
        MeshBuffer::default(),
        IndexDescriptor::typed::<u32>(0, usize::MAX / 2),
        Vec::new(),
        None,
    )
    .unwrap_err();
    assert_eq!(
        err,
        MeshError::IndexRangeOverflow {
            offset: 0,
            end: usize::MAX,
            buffer_len: 16
        }
    );
}

#[test]
fn partial_index() {
    let err = MeshData::new(
        vec![0u8; 6],
        MeshBuffer::default(),
        IndexDescriptor::new(IndexType::UnsignedInt, 0, 6),
        Vec::new(),
        None,
    )
    .unwrap_err();
    assert_eq!(
        err,
        MeshError::IndexSizeMismatch {
            len: 6,
            ty: IndexType::UnsignedInt
        }
    );
}

#[test]
fn aligned_slice() {
    let mesh = common::quad();
    let view = mesh.indices::<u16>().unwrap();
    assert_eq!(view.len(), 6);
    assert_eq!(view.stride(), 2);
    // Vec<u8> allocations are at least word-aligned in practice, but nothing guarantees it
    match view.try_as_slice() {
        Ok(slice) => assert_eq!(slice, &common::QUAD_INDICES),
        Err(e) => assert_eq!(e, MeshError::Misaligned { align: 2 }),
    }
}
