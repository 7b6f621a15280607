use std::collections::HashSet;

/// The named rules reached so far while checking a grammar.
///
/// Each named rule is followed the first time it is reached only, so
/// checking a recursive grammar terminates. Rules are told apart by type
/// name, which ignores lifetimes; two instances of a rule that differ only
/// in a lifetime describe the same grammar.
#[derive(Debug, Default)]
pub struct GrammarCheck {
    visited: HashSet<&'static str>,
}

impl GrammarCheck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `rule`, returning `false` if it was already reached.
    pub fn enter(&mut self, rule: &'static str) -> bool {
        self.visited.insert(rule)
    }

    /// Number of distinct named rules reached.
    pub fn rules(&self) -> usize {
        self.visited.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rules_are_entered_once() {
        let mut check = GrammarCheck::new();

        assert!(check.enter("a::Paren"));
        assert!(check.enter("a::Round"));
        assert!(!check.enter("a::Paren"));
        assert_eq!(check.rules(), 2);
    }
}
