//! Reference driver: builds the decimal-number pattern directly through the
//! AST constructors, compiles and refines it, prints the AST and NFA, and
//! runs it against a fixed set of test strings.

use regexp_nfa::{compile, matches, refine_epsilon, Error, Limits, Regex};
use std::process::ExitCode;

/// `[0-9][0-9]*.[0-9][0-9]* | .[0-9][0-9]*`
fn decimal_number_regex() -> Regex {
    let digit = || Regex::range(b'0', b'9');
    let digits_plus = || Regex::concat(digit(), Regex::star(digit()));
    let with_integer_part = Regex::concat(digits_plus(), Regex::concat(Regex::literal(b'.'), digits_plus()));
    let leading_dot = Regex::concat(Regex::literal(b'.'), digits_plus());
    Regex::alt(with_integer_part, leading_dot)
}

fn run() -> Result<(), Error> {
    let limits = Limits::default();
    let ast = decimal_number_regex();
    println!("AST: {ast}");

    let mut nfa = compile(&ast, &limits)?;
    refine_epsilon(&mut nfa, &limits)?;
    println!("NFA:\n{nfa}");

    let description = "a decimal number";
    for input in ["3.1415926", ".5", "a rational number", "3"] {
        let accepted = matches(&nfa, input.as_bytes(), &limits)?;
        if accepted {
            println!("Yes, \"{input}\" is {description}.");
        } else {
            println!("No, \"{input}\" is not {description}.");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
