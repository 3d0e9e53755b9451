use super::Error;

/// The semantic axis of a vector component.
///
/// This is the single source of the component ordering: `X ↔ 0`, `Y ↔ 1`, `Z ↔ 2`, `W ↔ 3`,
/// both in [Vector4](crate::Vector4) storage and in [NativeVector](crate::NativeVector) reads.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
    W = 3,
}

impl Axis {
    /// Every axis, in component order.
    pub const ALL: [Self; 4] = [Self::X, Self::Y, Self::Z, Self::W];

    /// Iterator through all axes, in component order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    /// The component index of this axis.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Axis {
    type Error = Error;

    /// # Errors
    ///
    /// * [`IndexOutOfRange`](Error::IndexOutOfRange) if `index` ∉ 0..4
    #[inline]
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange(index))
    }
}

impl From<Axis> for usize {
    fn from(axis: Axis) -> Self {
        axis.index()
    }
}
