//! Call expressions over single-character names and digits.
//!
//! ```text
//! program  := expr end
//! expr     := call | literal | variable
//! call     := [a-z] '(' expr ',' expr ')'
//! literal  := [0-9]
//! variable := [a-z]
//! ```

use std::fmt;

use tagcom::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Call(Call),
    Literal(Literal),
    Variable(Variable),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub name: char,
    pub args: Box<(Expr, Expr)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variable(pub char);

impl From<Call> for Expr {
    fn from(value: Call) -> Self {
        Expr::Call(value)
    }
}

impl From<Literal> for Expr {
    fn from(value: Literal) -> Self {
        Expr::Literal(value)
    }
}

impl From<Variable> for Expr {
    fn from(value: Variable) -> Self {
        Expr::Variable(value)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Call(call) => write!(f, "{}({},{})", call.name, call.args.0, call.args.1),
            Expr::Literal(Literal(v)) => write!(f, "{}", v),
            Expr::Variable(Variable(name)) => write!(f, "{}", name),
        }
    }
}

pub struct Program;

impl Rule for Program {
    type Inner = Sequence<(ExprRule, End)>;
    type Output = Expr;

    fn rule(&self) -> Self::Inner {
        sequence((ExprRule, end()))
    }

    fn action(&self, (expr, _): (Expr, Eof)) -> Expr {
        expr
    }
}

pub struct ExprRule;

impl Rule for ExprRule {
    type Inner = OneOf<(CallRule, LiteralRule, VariableRule)>;
    type Output = Expr;

    fn rule(&self) -> Self::Inner {
        one_of((CallRule, LiteralRule, VariableRule))
    }

    fn action(&self, parsed: Variant![Call, Literal, Variable]) -> Expr {
        parsed.unify()
    }
}

pub struct CallRule;

impl Rule for CallRule {
    type Inner = Sequence<(Range, Symbol, ExprRule, Symbol, ExprRule, Symbol)>;
    type Output = Call;

    fn rule(&self) -> Self::Inner {
        sequence((
            range('a', 'z'),
            symbol('('),
            ExprRule,
            symbol(','),
            ExprRule,
            symbol(')'),
        ))
    }

    fn action(&self, (name, _, lhs, _, rhs, _): (char, char, Expr, char, Expr, char)) -> Call {
        Call {
            name,
            args: Box::new((lhs, rhs)),
        }
    }
}

pub struct LiteralRule;

impl Rule for LiteralRule {
    type Inner = Range;
    type Output = Literal;

    fn rule(&self) -> Self::Inner {
        range('0', '9')
    }

    fn action(&self, digit: char) -> Literal {
        Literal(digit as u32 - '0' as u32)
    }
}

pub struct VariableRule;

impl Rule for VariableRule {
    type Inner = Range;
    type Output = Variable;

    fn rule(&self) -> Self::Inner {
        range('a', 'z')
    }

    fn action(&self, name: char) -> Variable {
        Variable(name)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn call(name: char, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Call(Call {
            name,
            args: Box::new((lhs, rhs)),
        })
    }

    #[test]
    fn grammar_is_well_formed() {
        assert_eq!(Program.validate(), Ok(()));
    }

    #[test]
    fn single_terms() {
        assert_eq!(
            parse_str(&Program, "7").map(|(e, _)| e),
            Ok(Expr::Literal(Literal(7)))
        );
        assert_eq!(
            parse_str(&Program, "x").map(|(e, _)| e),
            Ok(Expr::Variable(Variable('x')))
        );
    }

    #[test]
    fn nested_calls() {
        let (expr, span) = parse_str(&Program, "f(g(1,2),y)").unwrap();

        assert_eq!(
            expr,
            call(
                'f',
                call('g', Expr::Literal(Literal(1)), Expr::Literal(Literal(2))),
                Expr::Variable(Variable('y')),
            )
        );
        assert_eq!(span, Span::new(0, 11));
        assert_eq!(expr.to_string(), "f(g(1,2),y)");
    }

    #[test]
    fn name_without_arguments_is_a_variable() {
        let error = parse_str(&Program, "fx").unwrap_err();

        assert_eq!(error.failure().unwrap().at(), 1);
        assert_eq!(error.failure().unwrap().expected(), Expected::End);
    }

    #[test]
    fn missing_argument_is_rejected() {
        for input in ["f(1,)", "f(1,x", "f(1)", "()"] {
            assert!(
                parse(&Program, Cursor::new(input)).unwrap().is_failure(),
                "case: {}",
                input
            );
        }
    }

    #[test]
    fn failed_call_falls_back_to_a_variable() {
        let result = parse(&ExprRule, Cursor::new("f(1,)")).unwrap();

        assert_eq!(result.span(), Some(Span::new(0, 1)));
        assert_eq!(result.into_value(), Ok(Expr::Variable(Variable('f'))));
    }
}
