//! Segments of shared index buffers, and the mesh descriptions which own those buffers.

mod error;
mod layout;
mod scene;
mod segment;

use sceneglue_common::ArrayIndex;

pub use error::*;
pub use layout::*;
pub use scene::*;
pub use segment::*;

/// Trait alias for unsigned integer types which can act as indices (and offsets) within an
/// index buffer.
pub trait SegmentIndex: ArrayIndex {}
impl<P> SegmentIndex for P where P: ArrayIndex {}
