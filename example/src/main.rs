mod brackets;
mod call;

use std::fmt;

use anyhow::{bail, Result};
use clap::{Parser as _, ValueEnum};
use tagcom::metrics::{CR, CRLF, LF};
use tagcom::{parse_str_with, ParseError};

/// Parses each input with one of the example grammars.
#[derive(Debug, clap::Parser)]
#[command(name = "tagcom-example", version)]
struct Cli {
    /// The grammar to parse the inputs with.
    #[arg(long, value_enum, default_value_t = Grammar::Brackets)]
    grammar: Grammar,

    /// Print the parsed tree of each accepted input.
    #[arg(long)]
    show_tree: bool,

    /// The line ending used to locate failures.
    #[arg(long, value_enum, default_value_t = LineEnding::Lf)]
    line_ending: LineEnding,

    /// The inputs to parse.
    #[arg(required = true)]
    inputs: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Grammar {
    /// Balanced round and curly brackets, e.g. `{(()){}}`.
    Brackets,
    /// Call expressions, e.g. `f(g(1,2),y)`.
    Call,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LineEnding {
    Lf,
    Cr,
    Crlf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("{:?}", cli);

    let mut rejected = 0;
    for input in &cli.inputs {
        let outcome = match cli.grammar {
            Grammar::Brackets => run(&brackets::Document, input, &cli),
            Grammar::Call => run(&call::Program, input, &cli),
        };

        if let Err(e) = outcome {
            println!("{:?}: rejected: {}", input, e);
            rejected += 1;
        }
    }

    if rejected > 0 {
        bail!("{} of {} inputs rejected", rejected, cli.inputs.len());
    }

    Ok(())
}

fn run<P>(rule: &P, input: &str, cli: &Cli) -> Result<(), ParseError>
where
    P: tagcom::Parser,
    P::Output: fmt::Display + fmt::Debug,
{
    let (tree, span) = match cli.line_ending {
        LineEnding::Lf => parse_str_with::<LF, _>(rule, input),
        LineEnding::Cr => parse_str_with::<CR, _>(rule, input),
        LineEnding::Crlf => parse_str_with::<CRLF, _>(rule, input),
    }?;
    log::info!("accepted {:?} over {}", input, span);

    if cli.show_tree {
        println!("{:?}: {:#?}", input, tree);
    } else {
        println!("{:?}: accepted as {}", input, tree);
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cli_defaults_to_brackets() {
        let cli = Cli::try_parse_from(["tagcom-example", "()"]).unwrap();

        assert_eq!(cli.grammar, Grammar::Brackets);
        assert_eq!(cli.line_ending, LineEnding::Lf);
        assert!(!cli.show_tree);
        assert_eq!(cli.inputs, vec!["()".to_string()]);
    }

    #[test]
    fn cli_selects_grammar() {
        let cli =
            Cli::try_parse_from(["tagcom-example", "--grammar", "call", "--show-tree", "f(1,2)"])
                .unwrap();

        assert_eq!(cli.grammar, Grammar::Call);
        assert!(cli.show_tree);
    }

    #[test]
    fn cli_needs_an_input() {
        assert!(Cli::try_parse_from(["tagcom-example"]).is_err());
    }

    #[test]
    fn run_reports_the_failure() {
        let cli = Cli::try_parse_from(["tagcom-example", "--grammar", "call", "f(1,"]).unwrap();

        let error = run(&call::Program, "f(1,", &cli).unwrap_err();

        assert_eq!(error.failure().map(|f| f.at()), Some(1));
    }

    #[test]
    fn failures_are_located_with_the_chosen_line_ending() {
        let cli =
            Cli::try_parse_from(["tagcom-example", "--line-ending", "crlf", "()\r\n"]).unwrap();

        let error = run(&brackets::Document, "()\r\n", &cli).unwrap_err();
        let rejection = error.rejection().unwrap();

        assert_eq!(cli.line_ending, LineEnding::Crlf);
        assert_eq!(rejection.at().to_string(), "1:3");
    }
}
