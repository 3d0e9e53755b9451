//! Four-component vectors which cross the boundary to a native engine.

mod axis;
mod debug;
mod error;
mod native;
mod traits;

use std::ops::Index;

pub use axis::*;
pub use error::*;
pub use native::*;
pub use traits::*;

/// A vector of four ordered components: `{ X, Y, Z, W }`.
///
/// Storage is a fixed `[Real; 4]`, so the length can't change, and the only way to mutate a
/// vector is to replace all four components at once. Component `i` always maps to the [Axis]
/// with index `i`, whichever constructor, setter, or conversion produced it.
///
/// Converting to and from a [NativeVector] is lossless: the exact bit patterns of the
/// components survive the trip in both directions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector4<Real: Float = f32> {
    data: [Real; 4],
}

impl<Real: Float> Default for Vector4<Real> {
    /// The zero vector.
    fn default() -> Self {
        Self {
            data: [Real::ZERO; 4],
        }
    }
}

impl<Real: Float> Vector4<Real> {
    /// Construct a vector from its components.
    #[inline]
    pub fn new(x: Real, y: Real, z: Real, w: Real) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Construct a vector holding the current components of `other`.
    ///
    /// The result shares no storage with `other`.
    #[inline]
    pub fn from_copy(other: &Self) -> Self {
        Self { data: other.data }
    }

    /// Construct a vector by reading each component of a native value.
    #[inline]
    pub fn from_native<N: NativeVector<Real>>(native: &N) -> Self {
        Self {
            data: Axis::ALL.map(|axis| native.component_unchecked(axis.index())),
        }
    }

    /// Replace all four components.
    #[inline]
    pub fn set(&mut self, x: Real, y: Real, z: Real, w: Real) {
        self.data = [x, y, z, w];
    }

    /// Replace all four components with the current components of `other`.
    #[inline]
    pub fn set_from(&mut self, other: &Self) {
        self.data = other.data;
    }

    /// Replace all four components with those of a native value.
    #[inline]
    pub fn set_from_native<N: NativeVector<Real>>(&mut self, native: &N) {
        *self = Self::from_native(native);
    }

    /// Construct a new native value from the components of `self`.
    #[inline]
    pub fn to_native<N: NativeVector<Real>>(&self) -> N {
        let [x, y, z, w] = self.data;
        N::from_xyzw(x, y, z, w)
    }

    #[inline]
    pub fn x(&self) -> Real {
        self.component(Axis::X)
    }

    #[inline]
    pub fn y(&self) -> Real {
        self.component(Axis::Y)
    }

    #[inline]
    pub fn z(&self) -> Real {
        self.component(Axis::Z)
    }

    #[inline]
    pub fn w(&self) -> Real {
        self.component(Axis::W)
    }

    /// The component along `axis`.
    #[inline]
    pub fn component(&self, axis: Axis) -> Real {
        self.data[axis.index()]
    }

    /// The component at a raw index.
    ///
    /// # Errors
    ///
    /// * [`IndexOutOfRange`](Error::IndexOutOfRange) if `index` ∉ 0..4
    #[inline]
    pub fn get(&self, index: usize) -> Result<Real, Error> {
        Axis::try_from(index).map(|axis| self.component(axis))
    }

    #[inline]
    pub fn as_array(&self) -> &[Real; 4] {
        &self.data
    }

    #[inline]
    pub fn to_array(self) -> [Real; 4] {
        self.data
    }
}

impl<Real: Float> Index<usize> for Vector4<Real> {
    type Output = Real;

    /// # Panics
    ///
    /// * `index` ∉ 0..4
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<Real: Float> Index<Axis> for Vector4<Real> {
    type Output = Real;

    #[inline]
    fn index(&self, axis: Axis) -> &Self::Output {
        &self.data[axis.index()]
    }
}

impl<Real: Float> From<[Real; 4]> for Vector4<Real> {
    fn from(data: [Real; 4]) -> Self {
        Self { data }
    }
}

impl<Real: Float> From<Vector4<Real>> for [Real; 4] {
    fn from(v: Vector4<Real>) -> Self {
        v.data
    }
}

impl<Real: Float> From<nalgebra::Vector4<Real>> for Vector4<Real> {
    fn from(v: nalgebra::Vector4<Real>) -> Self {
        Self::from_native(&v)
    }
}

impl<Real: Float> From<Vector4<Real>> for nalgebra::Vector4<Real> {
    fn from(v: Vector4<Real>) -> Self {
        v.to_native()
    }
}
