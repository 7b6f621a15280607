use std::fmt;
use std::mem::ManuallyDrop;

use tagcom_core::{InvalidState, Never, ShouldNever};

use crate::raw_union::*;
use crate::DuplicateAlternative;

/// A value that is exactly one of the alternatives of `U`.
///
/// The tag records which alternative is active; the storage is a
/// [`RawUnion`] chain. The active alternative is constructed once and
/// destroyed once, with the destructor of its own type.
///
/// ```
/// use tagcom_base::Variant;
///
/// let mut v: Variant![u8, String] = Variant::new(String::from("abc"));
/// assert_eq!(v.tag(), 1);
/// assert_eq!(v.get::<String, _>().map(String::as_str), Some("abc"));
/// assert_eq!(v.get::<u8, _>(), None);
///
/// v.replace(7u8);
/// assert_eq!(v.get::<u8, _>(), Some(&7));
/// ```
pub struct Variant<U: Alternatives> {
    tag: usize,
    storage: U,
}

impl<U: Alternatives> Variant<U> {
    pub const LEN: usize = U::LEN;

    /// Constructs the alternative of type `T`.
    ///
    /// The index is inferred when `T` occurs once in `U`. A type that occurs
    /// more than once needs its position spelled out:
    ///
    /// ```
    /// use tagcom_base::{Variant, I1};
    ///
    /// let v: Variant![u8, u8] = Variant::new::<u8, I1>(3);
    /// assert_eq!(v.tag(), 1);
    /// ```
    ///
    /// ```compile_fail
    /// use tagcom_base::Variant;
    ///
    /// let v: Variant![u8, u8] = Variant::new(3u8);
    /// ```
    pub fn new<T, I>(value: T) -> Self
    where
        U: Contains<T, I>,
    {
        Self {
            tag: <U as Contains<T, I>>::INDEX,
            storage: <U as Contains<T, I>>::inject(value),
        }
    }

    /// # Safety
    /// The alternative at `tag` must be the active one of `storage`.
    pub unsafe fn from_raw_parts(tag: usize, storage: U) -> Self {
        debug_assert!(tag < U::LEN);
        Self { tag, storage }
    }

    /// Position of the active alternative.
    pub fn tag(&self) -> usize {
        self.tag
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        U::LEN
    }

    /// Type name of the alternative at `tag`.
    pub fn alternative_name(tag: usize) -> Result<&'static str, InvalidState> {
        U::type_name_at(tag).ok_or(InvalidState::TagOutOfRange { tag, len: U::LEN })
    }

    /// Type name of the active alternative.
    pub fn type_name(&self) -> &'static str {
        Self::alternative_name(self.tag).unwrap_or("?")
    }

    pub fn holds<T, I>(&self) -> bool
    where
        U: Contains<T, I>,
    {
        self.tag == <U as Contains<T, I>>::INDEX
    }

    pub fn get<T, I>(&self) -> Option<&T>
    where
        U: Contains<T, I>,
    {
        self.holds::<T, I>()
            .then(|| unsafe { <U as Contains<T, I>>::get(&self.storage) })
    }

    pub fn get_mut<T, I>(&mut self) -> Option<&mut T>
    where
        U: Contains<T, I>,
    {
        if self.holds::<T, I>() {
            Some(unsafe { <U as Contains<T, I>>::get_mut(&mut self.storage) })
        } else {
            None
        }
    }

    pub fn try_get<T, I>(&self) -> Result<&T, InvalidState>
    where
        U: Contains<T, I>,
    {
        self.get::<T, I>().ok_or(InvalidState::WrongAlternative {
            requested: <U as Contains<T, I>>::INDEX,
            active: self.tag,
        })
    }

    /// Assigns to the active alternative, returning its previous value.
    ///
    /// Fails without touching the storage when `T` is not the active
    /// alternative; use [`Variant::replace`] to switch alternatives.
    pub fn set<T, I>(&mut self, value: T) -> Result<T, InvalidState>
    where
        U: Contains<T, I>,
    {
        if !self.holds::<T, I>() {
            return Err(InvalidState::WrongAlternative {
                requested: <U as Contains<T, I>>::INDEX,
                active: self.tag,
            });
        }

        Ok(unsafe { <U as Contains<T, I>>::set(&mut self.storage, value) })
    }

    /// Makes `T` the active alternative, returning the previous variant.
    pub fn replace<T, I>(&mut self, value: T) -> Self
    where
        U: Contains<T, I>,
    {
        std::mem::replace(self, Self::new(value))
    }

    /// Moves out the alternative of type `T`, or gives the variant back.
    pub fn take<T, I>(self) -> Result<T, Self>
    where
        U: Contains<T, I>,
    {
        if !self.holds::<T, I>() {
            return Err(self);
        }

        let (_, storage) = self.into_parts();
        Ok(unsafe { <U as Contains<T, I>>::take(storage) })
    }

    /// Converts whichever alternative is active into `T`.
    pub fn unify<T>(self) -> T
    where
        U: UnifyAlternatives<T>,
    {
        let (tag, storage) = self.into_parts();
        unsafe { storage.unify_at(tag) }
    }

    fn into_parts(self) -> (usize, U) {
        let this = ManuallyDrop::new(self);
        (this.tag, unsafe { std::ptr::read(&this.storage) })
    }
}

impl<H, R: Alternatives> Variant<RawUnion<H, R>> {
    pub fn from_head(value: H) -> Self {
        Self {
            tag: 0,
            storage: RawUnion::from_head(value),
        }
    }

    pub fn from_tail(rest: Variant<R>) -> Self {
        let (tag, storage) = rest.into_parts();
        Self {
            tag: tag + 1,
            storage: RawUnion::from_tail(storage),
        }
    }

    /// Peels off the first alternative.
    pub fn split(self) -> Result<H, Variant<R>> {
        let (tag, storage) = self.into_parts();
        unsafe {
            match tag {
                0 => Ok(storage.into_head()),
                _ => Err(Variant::from_raw_parts(tag - 1, storage.into_tail())),
            }
        }
    }
}

impl<U: DistinctAlternatives> Variant<U> {
    /// Checks that no type occurs twice among the alternatives.
    pub fn try_distinct() -> Result<(), DuplicateAlternative> {
        match U::first_duplicate() {
            None => Ok(()),
            Some((first, second)) => Err(DuplicateAlternative {
                first,
                second,
                type_name: U::type_name_at(first).unwrap_or("?"),
            }),
        }
    }

    pub fn assert_distinct() {
        if let Err(e) = Self::try_distinct() {
            panic!("{}", e)
        }
    }
}

unsafe impl ShouldNever for Variant<Never> {}

impl<U: Alternatives> Drop for Variant<U> {
    fn drop(&mut self) {
        unsafe { self.storage.destroy(self.tag) }
    }
}

impl<U: CloneAlternatives> Clone for Variant<U> {
    fn clone(&self) -> Self {
        Self {
            tag: self.tag,
            storage: unsafe { self.storage.clone_at(self.tag) },
        }
    }
}

impl<U: PartialEqAlternatives> PartialEq for Variant<U> {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && unsafe { self.storage.eq_at(&other.storage, self.tag) }
    }
}

impl<U: DebugAlternatives> fmt::Debug for Variant<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Active<'a, U>(&'a U, usize);

        impl<U: DebugAlternatives> fmt::Debug for Active<'_, U> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                unsafe { self.0.fmt_at(self.1, f) }
            }
        }

        f.debug_struct("Variant")
            .field("tag", &self.tag)
            .field("value", &Active(&self.storage, self.tag))
            .finish()
    }
}
