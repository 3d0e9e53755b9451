use crate::{mesh, vector, SegmentIndex};

/// Any error produced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error<Idx: SegmentIndex = u32> {
    #[error(transparent)]
    Vector(#[from] vector::Error),
    #[error(transparent)]
    Mesh(#[from] mesh::Error<Idx>),
}
