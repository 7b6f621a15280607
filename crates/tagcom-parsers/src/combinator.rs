pub mod either;
pub mod from_fn;
pub mod many;
pub mod map;
pub mod one_of;
pub mod reference;
pub mod sequence;

pub use either::{either, Either};
pub use from_fn::{from_fn, FromFn};
pub use many::{many, Many};
pub use map::{map, Map};
pub use one_of::{one_of, OneOf};
pub use reference::{by_ref, Ref};
pub use sequence::{sequence, Sequence};
