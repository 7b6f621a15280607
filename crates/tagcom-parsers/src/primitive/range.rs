use tagcom_core::{
    done, fail, Cursor, Expected, Failure, GrammarCheck, ParseResult, Parser, Span,
};

use crate::GrammarError;

/// Builds a [`Range`].
///
/// Reversed bounds are reported by [`Parser::validate`] on any grammar that
/// contains the range; use [`Range::try_new`] to reject them right away.
pub fn range(lo: char, hi: char) -> Range {
    Range { lo, hi }
}

/// Matches one character in `lo..=hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    lo: char,
    hi: char,
}

impl Range {
    pub fn try_new(lo: char, hi: char) -> Result<Self, GrammarError> {
        let range = Self { lo, hi };
        range.check(&mut GrammarCheck::new())?;
        Ok(range)
    }

    pub fn lo(&self) -> char {
        self.lo
    }

    pub fn hi(&self) -> char {
        self.hi
    }
}

impl Parser for Range {
    type Output = char;

    fn parse(&self, input: Cursor<'_>) -> ParseResult<Self::Output> {
        let offset = input.position();
        match input.peek() {
            Some(c) if (self.lo..=self.hi).contains(&c) => {
                done(c, Span::with_len(offset, c.len_utf8()))
            }
            _ => fail(Failure::new(offset, Expected::Range(self.lo, self.hi))),
        }
    }

    fn check(&self, _: &mut GrammarCheck) -> Result<(), GrammarError> {
        if self.lo > self.hi {
            log::debug!("rejected range {:?}..={:?}", self.lo, self.hi);
            return Err(GrammarError::EmptyRange {
                lo: self.lo,
                hi: self.hi,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn every_char_inside_matches() {
        let digits = range('0', '9');

        for c in '0'..='9' {
            let input = c.to_string();
            assert_eq!(
                digits.parse(Cursor::new(&input)),
                done(c, Span::new(0, 1)),
                "case: {}",
                c
            );
        }
    }

    #[test]
    fn every_char_outside_fails_at_its_start() {
        let digits = range('0', '9');

        for c in ['/', ':', 'a', ' ', 'é'] {
            let input = format!("x{}", c);
            assert_eq!(
                digits.parse(Cursor::at(&input, 1)),
                fail(Failure::new(1, Expected::Range('0', '9'))),
                "case: {}",
                c
            );
        }
    }

    #[test]
    fn fails_when_ended() {
        assert_eq!(
            range('a', 'z').parse(Cursor::at("q", 1)),
            fail(Failure::new(1, Expected::Range('a', 'z')))
        );
    }

    #[test]
    fn single_char_range() {
        assert_eq!(range('k', 'k').parse(Cursor::new("k")), done('k', Span::new(0, 1)));
    }

    #[test]
    fn reversed_bounds_are_rejected() {
        assert_eq!(
            Range::try_new('z', 'a'),
            Err(GrammarError::EmptyRange { lo: 'z', hi: 'a' })
        );
    }

    #[test]
    fn reversed_bounds_fail_validation() {
        assert_eq!(
            range('9', '0').validate(),
            Err(GrammarError::EmptyRange { lo: '9', hi: '0' })
        );
        assert_eq!(range('0', '9').validate(), Ok(()));
    }
}
