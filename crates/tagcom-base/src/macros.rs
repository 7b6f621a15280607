/// The union chain type for a list of alternatives.
///
/// `Union![A, B, C]` is `RawUnion<A, RawUnion<B, RawUnion<C, Never>>>`.
#[macro_export]
macro_rules! Union {
    () => { $crate::Never };
    ($head:ty $(, $tail:ty)*) => {
        $crate::RawUnion<$head, $crate::Union![$($tail),*]>
    };
}

/// `Variant![A, B, C]` is `Variant<Union![A, B, C]>`.
#[macro_export]
macro_rules! Variant {
    ($($t:ty),*) => { $crate::Variant<$crate::Union![$($t),*]> };
}
