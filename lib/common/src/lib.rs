use std::{fmt::Debug, hash::Hash};

use num_traits::{AsPrimitive, PrimInt, Unsigned};

pub mod macros;

/// Trait for unsigned integers which can act as positions within an array (or an array-like
/// structure, such as an index buffer).
pub trait ArrayIndex:
    PrimInt + Unsigned + AsPrimitive<usize> + Default + Hash + Debug + Send + Sync + 'static
{
}
impl<P> ArrayIndex for P where
    P: PrimInt + Unsigned + AsPrimitive<usize> + Default + Hash + Debug + Send + Sync + 'static
{
}
