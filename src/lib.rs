//! Value types shared between a managed scene description and a native physics/rendering
//! engine:
//!
//! * [Vector4], a four-component vector which converts losslessly to and from the engine's own
//!   vector type through the narrow [NativeVector] bridge
//! * [MeshSegment], an `(offset, count)` range within an externally owned index buffer, plus
//!   [SceneMesh] for checking and laying out segments where that buffer is known
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

pub mod error;
pub mod mesh;
pub mod vector;

pub use error::Error;
pub use mesh::{MeshSegment, SceneMesh, SegmentIndex};
pub use vector::{Axis, Float, NativeVector, Vector4};
