use tagcom_core::Parser;

use crate::{Many, Map, Ref};

pub trait ParserExtension: Parser {
    fn map<U, F: Fn(Self::Output) -> U>(self, mapping: F) -> Map<Self, U, F>
    where
        Self: Sized,
    {
        Map::new(self, mapping)
    }

    fn many(self) -> Many<Self>
    where
        Self: Sized,
    {
        Many::new(self)
    }

    fn by_ref(&self) -> Ref<'_, Self> {
        Ref::new(self)
    }
}

impl<P: Parser> ParserExtension for P {}
