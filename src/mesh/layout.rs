use std::ops::Range;

use super::{Error, MeshSegment, SegmentIndex};

/// Check a segment against the length of the index buffer it describes, returning the range of
/// buffer positions it covers.
///
/// An empty segment is valid anywhere up to and including `len`.
///
/// # Errors
///
/// * [`Overflow`](Error::Overflow) if `index_offset + index_count` isn't representable by `Idx`
/// * [`OutOfBounds`](Error::OutOfBounds) if `index_offset + index_count > len`
pub fn check_bounds<Idx: SegmentIndex>(
    segment: &MeshSegment<Idx>,
    len: usize,
) -> Result<Range<usize>, Error<Idx>> {
    let end = segment
        .index_offset()
        .checked_add(&segment.index_count())
        .ok_or(Error::Overflow(*segment))?;
    // `Idx` may be wider than usize, in which case the segment can't fit in any buffer
    match (
        num_traits::cast::<Idx, usize>(segment.index_offset()),
        num_traits::cast::<Idx, usize>(end),
    ) {
        (Some(start), Some(end)) if end <= len => Ok(start..end),
        _ => Err(Error::OutOfBounds(*segment, len)),
    }
}

/// Lay out consecutive segments from the number of indices in each, starting at offset 0.
///
/// This is the layout produced by concatenating several index streams (ex. one per material)
/// into a single buffer: segment `n` starts where segment `n - 1` ends.
///
/// # Errors
///
/// * [`Overflow`](Error::Overflow) if the running offset isn't representable by `Idx`
pub fn pack<Idx: SegmentIndex>(
    counts: impl IntoIterator<Item = Idx>,
) -> Result<Vec<MeshSegment<Idx>>, Error<Idx>> {
    let mut offset = Idx::zero();
    counts
        .into_iter()
        .map(|count| {
            let segment = MeshSegment::new(offset, count);
            offset = offset
                .checked_add(&count)
                .ok_or(Error::Overflow(segment))?;
            Ok(segment)
        })
        .collect()
}
