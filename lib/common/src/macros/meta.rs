/// Repeat an [item](https://doc.rust-lang.org/nightly/reference/items.html) `$imp` once for each
/// type `$Ty`, making the current type available within `$imp` under the alias `$Alias`.
///
/// Mostly useful for implementing a trait on every primitive of a family (`f32`, `f64`, ...)
/// when the impl body needs to name the concrete type. Prefer a generic impl where one works.
///
/// ```
/// trait Width {
///     const BITS: u32;
/// }
///
/// sceneglue_common::item_with! {Prim: u8, u16 => impl Width for Prim {
///     const BITS: u32 = Prim::BITS;
/// }}
///
/// assert_eq!(<u16 as Width>::BITS, 16);
/// ```
#[macro_export]
macro_rules! item_with {
    {$Alias:ident: $($Ty:ty),+ => $imp:item} => {
        $(
            const _: () = {
                type $Alias = $Ty;
                $imp
            };
        )+
    };
}
