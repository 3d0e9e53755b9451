/// Errors related to [Vector4s](crate::Vector4) and [native vectors](crate::NativeVector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Component index out of range: 0..4 ∌ {0}")]
    IndexOutOfRange(usize),
}
