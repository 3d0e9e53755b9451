//! The boundary between [Vector4](crate::Vector4) and a native engine's own vector type.

use nalgebra::{Point4, Vector4};

use super::{Axis, Error, Float};

/// A native engine's four-component vector value, as seen from this side of the boundary.
///
/// Implementors need to provide exactly two things: construction from four components, and an
/// indexed read of a single component. Nothing else about the engine's type is assumed, and a
/// value is never retained after a conversion reads it.
///
/// Component `i` must map to the same axis as [Axis] index `i`.
pub trait NativeVector<Real: Float = f32>: Sized {
    /// Construct a native value from its four components.
    fn from_xyzw(x: Real, y: Real, z: Real, w: Real) -> Self;

    /// Read a single component.
    ///
    /// # Panics
    ///
    /// * `index` ∉ 0..4
    fn component_unchecked(&self, index: usize) -> Real;

    /// Read a single component.
    ///
    /// # Errors
    ///
    /// * [`IndexOutOfRange`](Error::IndexOutOfRange) if `index` ∉ 0..4
    #[inline]
    fn component(&self, index: usize) -> Result<Real, Error> {
        Axis::try_from(index).map(|axis| self.component_unchecked(axis.index()))
    }
}

impl<Real: Float> NativeVector<Real> for Vector4<Real> {
    #[inline]
    fn from_xyzw(x: Real, y: Real, z: Real, w: Real) -> Self {
        Self::new(x, y, z, w)
    }

    #[inline]
    fn component_unchecked(&self, index: usize) -> Real {
        self[index]
    }
}

impl<Real: Float> NativeVector<Real> for Point4<Real> {
    #[inline]
    fn from_xyzw(x: Real, y: Real, z: Real, w: Real) -> Self {
        Self::new(x, y, z, w)
    }

    #[inline]
    fn component_unchecked(&self, index: usize) -> Real {
        self[index]
    }
}

impl<Real: Float> NativeVector<Real> for [Real; 4] {
    #[inline]
    fn from_xyzw(x: Real, y: Real, z: Real, w: Real) -> Self {
        [x, y, z, w]
    }

    #[inline]
    fn component_unchecked(&self, index: usize) -> Real {
        self[index]
    }
}
