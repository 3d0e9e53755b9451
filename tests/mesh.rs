use quickcheck_macros::quickcheck;
use sceneglue::{
    mesh::{check_bounds, pack, Error},
    MeshSegment, SceneMesh,
};

#[quickcheck]
fn segment_accessors(offset: u32, count: u32) -> bool {
    let segment = MeshSegment::new(offset, count);
    segment.index_offset() == offset && segment.index_count() == count
}

#[quickcheck]
fn check_bounds_matches_sum(offset: u16, count: u16, len: u16) -> bool {
    let segment = MeshSegment::new(offset, count);
    let end = offset as usize + count as usize;
    match check_bounds(&segment, len as usize) {
        Ok(range) => end <= len as usize && range == (offset as usize..end),
        Err(Error::Overflow(s)) => s == segment && end > u16::MAX as usize,
        Err(Error::OutOfBounds(s, l)) => s == segment && l == len as usize && end > l,
        Err(_) => false,
    }
}

#[test]
fn empty_segment() {
    let segment = MeshSegment::<u32>::new(0, 0);
    assert_eq!(segment.index_offset(), 0);
    assert_eq!(segment.index_count(), 0);
    assert_eq!(segment, MeshSegment::default());
}

#[test]
fn validated_by_caller() {
    // construction never checks anything
    let segment = MeshSegment::new(120u32, 36);

    assert_eq!(check_bounds(&segment, 200), Ok(120..156));
    assert_eq!(
        check_bounds(&segment, 100),
        Err(Error::OutOfBounds(segment, 100))
    );

    let mut mesh = SceneMesh::with_indices(vec![0u32; 200]);
    assert_eq!(mesh.push_segment(segment), Ok(0));
    assert_eq!(mesh.segment_indices(0).map(<[u32]>::len), Ok(36));

    let mut small = SceneMesh::with_indices(vec![0u32; 100]);
    assert_eq!(
        small.push_segment(segment),
        Err(Error::OutOfBounds(segment, 100))
    );
    assert!(small.is_empty());
}

#[test]
fn from_parts_rejects_any_bad_segment() {
    let segments = vec![MeshSegment::new(0u16, 6), MeshSegment::new(4, 4)];
    assert_eq!(
        SceneMesh::from_parts(vec![0; 8], segments.clone()).map(|m| m.len()),
        Ok(2)
    );
    assert_eq!(
        SceneMesh::from_parts(vec![0; 7], segments),
        Err(Error::OutOfBounds(MeshSegment::new(4, 4), 7))
    );
}

/// Concatenating per-material index streams, each local to its own part of a shared vertex
/// buffer.
#[test]
fn material_streams() {
    let mut mesh = SceneMesh::<u32>::new();
    let first = mesh.append_rebased([0, 1, 2, 2, 1, 3], 0).unwrap();
    let second = mesh.append_rebased([0, 1, 2], 4).unwrap();
    let empty = mesh.append_segment([]).unwrap();

    assert_eq!(first, MeshSegment::new(0, 6));
    assert_eq!(second, MeshSegment::new(6, 3));
    assert_eq!(empty, MeshSegment::new(9, 0));
    assert_eq!(mesh.segments(), &[first, second, empty]);
    assert_eq!(mesh.index_count(), 9);

    assert_eq!(mesh.segment_indices(1), Ok(&[4, 5, 6][..]));
    assert_eq!(mesh.segment_indices(2), Ok(&[][..]));
    assert_eq!(mesh.segment_indices(3), Err(Error::InvalidSegment(3)));

    // the same layout, from the stream lengths alone
    assert_eq!(pack([6u32, 3, 0]), Ok(mesh.segments().to_vec()));

    let (indices, segments) = mesh.into_parts();
    assert_eq!(indices, [0, 1, 2, 2, 1, 3, 4, 5, 6]);
    assert_eq!(segments.len(), 3);
}

#[test]
fn foreign_segment_lookup() {
    let mesh = SceneMesh::with_indices(vec![9u8, 8, 7, 6, 5]);
    assert_eq!(mesh.indices_of(&MeshSegment::new(1, 3)), Ok(&[8, 7, 6][..]));
    assert_eq!(mesh.segment(0), None);
    assert_eq!(
        mesh.indices_of(&MeshSegment::new(3, 3)),
        Err(Error::OutOfBounds(MeshSegment::new(3, 3), 5))
    );
}

#[test]
fn crate_error_wraps_modules() {
    let err: sceneglue::Error = Error::InvalidSegment(2).into();
    assert!(matches!(err, sceneglue::Error::Mesh(Error::InvalidSegment(2))));
    assert_eq!(err.to_string(), "Attempted to access segment 2, which does not exist");

    let err: sceneglue::Error = sceneglue::vector::Error::IndexOutOfRange(5).into();
    assert_eq!(err.to_string(), "Component index out of range: 0..4 ∌ 5");
}
