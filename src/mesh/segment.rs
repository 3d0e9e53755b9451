use super::SegmentIndex;

/// A contiguous range within an index buffer, forming one drawable part of a larger mesh.
///
/// This is a pure coordinate pair: it neither owns nor refers to the buffer it describes, and so
/// can't check itself against one. Bounds are checked where the buffer is known; see
/// [check_bounds](super::check_bounds) and [SceneMesh](super::SceneMesh).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MeshSegment<Idx: SegmentIndex = u32> {
    index_offset: Idx,
    index_count: Idx,
}

impl<Idx: SegmentIndex> MeshSegment<Idx> {
    /// Construct a segment of `index_count` indices, starting at `index_offset`.
    #[inline]
    pub fn new(index_offset: Idx, index_count: Idx) -> Self {
        Self {
            index_offset,
            index_count,
        }
    }

    /// The position of the first index of this segment within its index buffer.
    #[inline]
    pub fn index_offset(&self) -> Idx {
        self.index_offset
    }

    /// The number of indices in this segment.
    #[inline]
    pub fn index_count(&self) -> Idx {
        self.index_count
    }
}
