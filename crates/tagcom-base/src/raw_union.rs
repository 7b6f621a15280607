use std::any::{type_name, TypeId};
use std::fmt;
use std::marker::PhantomData;
use std::mem::ManuallyDrop;

use tagcom_core::Never;

/// Untagged storage for one of several alternatives.
///
/// A right-leaning chain `RawUnion<A, RawUnion<B, RawUnion<C, Never>>>` is
/// large enough for any of `A`, `B`, `C` and aligned for all of them. It does
/// not know which alternative it holds: the owner keeps the tag and must
/// destroy the active alternative through [`Alternatives::destroy`] exactly
/// once. Dropping a `RawUnion` itself runs no destructor.
pub union RawUnion<H, R> {
    head: ManuallyDrop<H>,
    tail: ManuallyDrop<R>,
}

/// Index of the head of a union chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Here;

/// Index into the tail of a union chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct There<I>(PhantomData<I>);

pub type I0 = Here;
pub type I1 = There<I0>;
pub type I2 = There<I1>;
pub type I3 = There<I2>;
pub type I4 = There<I3>;
pub type I5 = There<I4>;
pub type I6 = There<I5>;
pub type I7 = There<I6>;

/// A union chain, or the empty chain [`Never`].
///
/// # Safety
/// `LEN` must be the number of alternatives in the chain.
pub unsafe trait Alternatives: Sized {
    const LEN: usize;

    /// Runs the destructor of the alternative at `tag`.
    ///
    /// # Safety
    /// `tag` must be the index of the active alternative, and the storage
    /// must not be used afterwards except to be overwritten.
    unsafe fn destroy(&mut self, tag: usize);

    /// The name of the alternative type at `tag`, if `tag < LEN`.
    fn type_name_at(tag: usize) -> Option<&'static str>;
}

unsafe impl Alternatives for Never {
    const LEN: usize = 0;

    unsafe fn destroy(&mut self, _: usize) {
        match *self {}
    }

    fn type_name_at(_: usize) -> Option<&'static str> {
        None
    }
}

unsafe impl<H, R: Alternatives> Alternatives for RawUnion<H, R> {
    const LEN: usize = R::LEN + 1;

    unsafe fn destroy(&mut self, tag: usize) {
        debug_assert!(tag < Self::LEN, "tag {} out of range for {} alternatives", tag, Self::LEN);
        if tag == 0 {
            ManuallyDrop::drop(&mut self.head)
        } else {
            (*self.tail).destroy(tag - 1)
        }
    }

    fn type_name_at(tag: usize) -> Option<&'static str> {
        if tag == 0 {
            Some(type_name::<H>())
        } else {
            R::type_name_at(tag - 1)
        }
    }
}

/// The union chain has an alternative of type `T` at the position named by
/// the index `I`.
///
/// When `T` occurs once in the chain, `I` can be inferred. When it occurs more
/// than once, inference is ambiguous and the index must be spelled out.
///
/// # Safety
/// `INDEX` must be the position `I` designates, and `inject` must make that
/// alternative active.
pub unsafe trait Contains<T, I>: Alternatives {
    const INDEX: usize;

    fn inject(value: T) -> Self;

    /// # Safety
    /// The alternative at `INDEX` must be active.
    unsafe fn get(&self) -> &T;

    /// # Safety
    /// The alternative at `INDEX` must be active.
    unsafe fn get_mut(&mut self) -> &mut T;

    /// Assigns to the active alternative in place, returning the old value.
    ///
    /// # Safety
    /// The alternative at `INDEX` must be active.
    unsafe fn set(&mut self, value: T) -> T {
        std::mem::replace(self.get_mut(), value)
    }

    /// Moves the active alternative out. The storage is consumed without
    /// running any other destructor.
    ///
    /// # Safety
    /// The alternative at `INDEX` must be active.
    unsafe fn take(self) -> T;
}

unsafe impl<H, R: Alternatives> Contains<H, Here> for RawUnion<H, R> {
    const INDEX: usize = 0;

    fn inject(value: H) -> Self {
        RawUnion {
            head: ManuallyDrop::new(value),
        }
    }

    unsafe fn get(&self) -> &H {
        &self.head
    }

    unsafe fn get_mut(&mut self) -> &mut H {
        &mut self.head
    }

    unsafe fn take(self) -> H {
        ManuallyDrop::into_inner(self.head)
    }
}

unsafe impl<T, I, H, R: Contains<T, I>> Contains<T, There<I>> for RawUnion<H, R> {
    const INDEX: usize = <R as Contains<T, I>>::INDEX + 1;

    fn inject(value: T) -> Self {
        RawUnion {
            tail: ManuallyDrop::new(<R as Contains<T, I>>::inject(value)),
        }
    }

    unsafe fn get(&self) -> &T {
        <R as Contains<T, I>>::get(&self.tail)
    }

    unsafe fn get_mut(&mut self) -> &mut T {
        <R as Contains<T, I>>::get_mut(&mut self.tail)
    }

    unsafe fn take(self) -> T {
        <R as Contains<T, I>>::take(ManuallyDrop::into_inner(self.tail))
    }
}

impl<H, R> RawUnion<H, R> {
    pub fn from_head(value: H) -> Self {
        RawUnion {
            head: ManuallyDrop::new(value),
        }
    }

    pub fn from_tail(rest: R) -> Self {
        RawUnion {
            tail: ManuallyDrop::new(rest),
        }
    }

    /// # Safety
    /// The head must be active.
    pub unsafe fn into_head(self) -> H {
        ManuallyDrop::into_inner(self.head)
    }

    /// # Safety
    /// An alternative of the tail must be active.
    pub unsafe fn into_tail(self) -> R {
        ManuallyDrop::into_inner(self.tail)
    }
}

/// Copy construction dispatching on the source tag.
pub unsafe trait CloneAlternatives: Alternatives {
    /// # Safety
    /// `tag` must be the index of the active alternative.
    unsafe fn clone_at(&self, tag: usize) -> Self;
}

unsafe impl CloneAlternatives for Never {
    unsafe fn clone_at(&self, _: usize) -> Self {
        match *self {}
    }
}

unsafe impl<H: Clone, R: CloneAlternatives> CloneAlternatives for RawUnion<H, R> {
    unsafe fn clone_at(&self, tag: usize) -> Self {
        if tag == 0 {
            Self::from_head((*self.head).clone())
        } else {
            Self::from_tail((*self.tail).clone_at(tag - 1))
        }
    }
}

pub unsafe trait PartialEqAlternatives: Alternatives {
    /// # Safety
    /// `tag` must be the index of the active alternative of both.
    unsafe fn eq_at(&self, other: &Self, tag: usize) -> bool;
}

unsafe impl PartialEqAlternatives for Never {
    unsafe fn eq_at(&self, _: &Self, _: usize) -> bool {
        match *self {}
    }
}

unsafe impl<H: PartialEq, R: PartialEqAlternatives> PartialEqAlternatives for RawUnion<H, R> {
    unsafe fn eq_at(&self, other: &Self, tag: usize) -> bool {
        if tag == 0 {
            *self.head == *other.head
        } else {
            (*self.tail).eq_at(&other.tail, tag - 1)
        }
    }
}

pub unsafe trait DebugAlternatives: Alternatives {
    /// # Safety
    /// `tag` must be the index of the active alternative.
    unsafe fn fmt_at(&self, tag: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

unsafe impl DebugAlternatives for Never {
    unsafe fn fmt_at(&self, _: usize, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

unsafe impl<H: fmt::Debug, R: DebugAlternatives> DebugAlternatives for RawUnion<H, R> {
    unsafe fn fmt_at(&self, tag: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if tag == 0 {
            fmt::Debug::fmt(&*self.head, f)
        } else {
            (*self.tail).fmt_at(tag - 1, f)
        }
    }
}

/// Every alternative converts into `T`.
pub unsafe trait UnifyAlternatives<T>: Alternatives {
    /// # Safety
    /// `tag` must be the index of the active alternative.
    unsafe fn unify_at(self, tag: usize) -> T;
}

unsafe impl<T> UnifyAlternatives<T> for Never {
    unsafe fn unify_at(self, _: usize) -> T {
        match self {}
    }
}

unsafe impl<T, H: Into<T>, R: UnifyAlternatives<T>> UnifyAlternatives<T> for RawUnion<H, R> {
    unsafe fn unify_at(self, tag: usize) -> T {
        if tag == 0 {
            self.into_head().into()
        } else {
            self.into_tail().unify_at(tag - 1)
        }
    }
}

/// Runtime type identity of each alternative.
pub trait DistinctAlternatives: Alternatives {
    fn type_id_at(tag: usize) -> Option<TypeId>;

    /// The first pair of positions holding the same type, if any.
    fn first_duplicate() -> Option<(usize, usize)> {
        for second in 1..Self::LEN {
            for first in 0..second {
                if Self::type_id_at(first) == Self::type_id_at(second) {
                    return Some((first, second));
                }
            }
        }
        None
    }
}

impl DistinctAlternatives for Never {
    fn type_id_at(_: usize) -> Option<TypeId> {
        None
    }
}

impl<H: 'static, R: DistinctAlternatives> DistinctAlternatives for RawUnion<H, R> {
    fn type_id_at(tag: usize) -> Option<TypeId> {
        if tag == 0 {
            Some(TypeId::of::<H>())
        } else {
            R::type_id_at(tag - 1)
        }
    }
}
