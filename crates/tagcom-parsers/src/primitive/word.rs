use tagcom_core::{done, fail, Cursor, Expected, Failure, ParseResult, Parser, Span};

pub fn word(word: &'static str) -> Word {
    Word::new(word)
}

/// Matches an exact string. The empty word always matches, consuming nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word {
    word: &'static str,
}

impl Word {
    pub fn new(word: &'static str) -> Self {
        Self { word }
    }
}

impl Parser for Word {
    type Output = &'static str;

    fn parse(&self, input: Cursor<'_>) -> ParseResult<Self::Output> {
        let offset = input.position();
        if input.starts_with(self.word) {
            done(self.word, Span::with_len(offset, self.word.len()))
        } else {
            fail(Failure::new(offset, Expected::Word(self.word)))
        }
    }
}
