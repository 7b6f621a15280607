use std::marker::PhantomData;

use tagcom_core::{Cursor, ParseResult, Parser};

/// A parser written as a closure.
pub fn from_fn<O, F>(f: F) -> FromFn<O, F>
where
    F: Fn(Cursor<'_>) -> ParseResult<O>,
{
    FromFn::new(f)
}

#[derive(Debug, Clone, Copy)]
pub struct FromFn<O, F> {
    f: F,
    marker: PhantomData<fn() -> O>,
}

impl<O, F: Fn(Cursor<'_>) -> ParseResult<O>> FromFn<O, F> {
    pub fn new(f: F) -> Self {
        Self {
            f,
            marker: PhantomData,
        }
    }
}

impl<O, F: Fn(Cursor<'_>) -> ParseResult<O>> Parser for FromFn<O, F> {
    type Output = O;

    fn parse(&self, input: Cursor<'_>) -> ParseResult<Self::Output> {
        (self.f)(input)
    }
}
