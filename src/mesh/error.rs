use super::{MeshSegment, SegmentIndex};

/// Errors related to [MeshSegments](crate::MeshSegment) and [SceneMeshes](crate::SceneMesh).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error<Idx: SegmentIndex = u32> {
    #[error("Segment {0:?} does not fit within an index buffer of length {1}")]
    OutOfBounds(MeshSegment<Idx>, usize),
    #[error("End of segment {0:?} overflows the index type")]
    Overflow(MeshSegment<Idx>),
    #[error("Attempted to access segment {0}, which does not exist")]
    InvalidSegment(usize),
    #[error("Index buffer length {0} exceeds the range of the index type")]
    IndexOverflow(usize),
    #[error("Rebasing index {0:?} by {1:?} overflows the index type")]
    RebaseOverflow(Idx, Idx),
}
