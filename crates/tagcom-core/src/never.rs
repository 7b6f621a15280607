/// Types which have no value.
///
/// # Safety
/// Implementors must be uninhabited.
pub unsafe trait ShouldNever {}

/// The uninhabited type. Terminates type-level lists such as union chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Never {}

unsafe impl ShouldNever for Never {}

pub trait ShouldNeverExtension: ShouldNever {
    fn never<T>(&self) -> T {
        unreachable!(
            "<{} as ShouldNever>::never should never be called.",
            std::any::type_name::<Self>()
        )
    }
}

impl<T: ShouldNever + ?Sized> ShouldNeverExtension for T {}
