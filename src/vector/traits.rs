use sceneglue_common::item_with;

/// Trait for floating-point component types, so that vectors can be generic over {f32, f64}
/// (single- and double-precision engine builds).
pub trait Float:
    num_traits::Float + nalgebra::Scalar + std::fmt::Display + Copy + Send + Sync
{
    const ZERO: Self;
}

item_with! {Real: f32, f64 => impl Float for Real {
    const ZERO: Self = 0.0;
}}
