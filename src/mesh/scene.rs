use super::{check_bounds, Error, MeshSegment, SegmentIndex};

/// A flat index buffer, shared by an ordered list of [MeshSegments](MeshSegment).
///
/// # Invariants
///
/// * For each segment `s`: `s.index_offset() + s.index_count() <= self.indices().len()`
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SceneMesh<Idx: SegmentIndex = u32> {
    indices: Vec<Idx>,
    segments: Vec<MeshSegment<Idx>>,
}

impl<Idx: SegmentIndex> SceneMesh<Idx> {
    /// Construct a mesh with an empty index buffer and no segments.
    pub fn new() -> Self {
        Self::with_indices(Vec::new())
    }

    /// Construct a mesh around an existing index buffer, with no segments.
    pub fn with_indices(indices: Vec<Idx>) -> Self {
        Self {
            indices,
            segments: Vec::new(),
        }
    }

    /// Construct a mesh from an index buffer and the segments describing it.
    ///
    /// # Errors
    ///
    /// * Any error from [check_bounds], for the first segment which doesn't fit `indices`
    pub fn from_parts(
        indices: Vec<Idx>,
        segments: Vec<MeshSegment<Idx>>,
    ) -> Result<Self, Error<Idx>> {
        for segment in &segments {
            check_bounds(segment, indices.len())?;
        }
        Ok(Self { indices, segments })
    }

    /// Decompose `self` into its index buffer and segments.
    pub fn into_parts(self) -> (Vec<Idx>, Vec<MeshSegment<Idx>>) {
        (self.indices, self.segments)
    }

    /// Add a segment referring to indices already in the buffer, returning its position.
    ///
    /// # Errors
    ///
    /// * Any error from [check_bounds]; `self` is unchanged
    pub fn push_segment(&mut self, segment: MeshSegment<Idx>) -> Result<usize, Error<Idx>> {
        if let Err(e) = check_bounds(&segment, self.indices.len()) {
            #[cfg(feature = "tracing")]
            tracing::warn!(?segment, len = self.indices.len(), "rejected mesh segment");
            return Err(e);
        }
        self.segments.push(segment);
        Ok(self.segments.len() - 1)
    }

    /// Append an index stream to the end of the buffer, and add a segment covering it.
    ///
    /// # Errors
    ///
    /// * [`IndexOverflow`](Error::IndexOverflow) if the new buffer length isn't representable by
    ///   `Idx`; `self` is unchanged
    pub fn append_segment(
        &mut self,
        indices: impl IntoIterator<Item = Idx>,
    ) -> Result<MeshSegment<Idx>, Error<Idx>> {
        let start = self.indices.len();
        self.indices.extend(indices);
        let len = self.indices.len();
        // the end of the segment must be representable, not just its offset and count
        let (Some(offset), Some(count), Some(_)) = (
            num_traits::cast::<usize, Idx>(start),
            num_traits::cast::<usize, Idx>(len - start),
            num_traits::cast::<usize, Idx>(len),
        ) else {
            self.indices.truncate(start);
            return Err(Error::IndexOverflow(len));
        };
        let segment = MeshSegment::new(offset, count);
        #[cfg(feature = "tracing")]
        tracing::trace!(?segment, position = self.segments.len(), "appended mesh segment");
        self.segments.push(segment);
        Ok(segment)
    }

    /// As [append_segment](Self::append_segment), except that `base` is added to each index.
    ///
    /// Useful when the stream's indices are local to a vertex range which starts at `base`
    /// within a shared vertex buffer.
    ///
    /// # Errors
    ///
    /// * [`RebaseOverflow`](Error::RebaseOverflow) if `index + base` isn't representable by
    ///   `Idx` for some index; `self` is unchanged
    /// * Any error from [append_segment](Self::append_segment)
    pub fn append_rebased(
        &mut self,
        indices: impl IntoIterator<Item = Idx>,
        base: Idx,
    ) -> Result<MeshSegment<Idx>, Error<Idx>> {
        let rebased = indices
            .into_iter()
            .map(|i| i.checked_add(&base).ok_or(Error::RebaseOverflow(i, base)))
            .collect::<Result<Vec<_>, _>>()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(?base, count = rebased.len(), "rebased index stream");
        self.append_segment(rebased)
    }

    /// The whole index buffer.
    #[inline]
    pub fn indices(&self) -> &[Idx] {
        &self.indices
    }

    #[inline]
    pub fn segments(&self) -> &[MeshSegment<Idx>] {
        &self.segments
    }

    #[inline]
    pub fn segment(&self, position: usize) -> Option<&MeshSegment<Idx>> {
        self.segments.get(position)
    }

    /// The indices covered by the segment at `position`.
    ///
    /// # Errors
    ///
    /// * [`InvalidSegment`](Error::InvalidSegment) if there's no segment at `position`
    pub fn segment_indices(&self, position: usize) -> Result<&[Idx], Error<Idx>> {
        let segment = self
            .segments
            .get(position)
            .ok_or(Error::InvalidSegment(position))?;
        self.indices_of(segment)
    }

    /// The indices covered by any segment, not necessarily one stored in `self`.
    ///
    /// # Errors
    ///
    /// * Any error from [check_bounds]
    pub fn indices_of(&self, segment: &MeshSegment<Idx>) -> Result<&[Idx], Error<Idx>> {
        Ok(&self.indices[check_bounds(segment, self.indices.len())?])
    }

    /// The number of segments in this mesh.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The length of the index buffer.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}
