//! Concrete end-to-end scenarios against the public API: the decimal-number
//! pattern, the capitalized-sentence pattern, `a | ab`, and `(ab)*`.

use regexp_nfa::{compile, matches, refine_epsilon, Limits, Regex};

fn build(ast: &Regex) -> regexp_nfa::Nfa {
    let _ = env_logger::try_init();
    let limits = Limits::default();
    let mut nfa = compile(ast, &limits).expect("compile");
    refine_epsilon(&mut nfa, &limits).expect("refine");
    nfa
}

fn accepts(ast: &Regex, input: &str) -> bool {
    let nfa = build(ast);
    matches(&nfa, input.as_bytes(), &Limits::default()).expect("match")
}

/// `[0-9][0-9]*.[0-9][0-9]* | .[0-9][0-9]*`
fn decimal_number() -> Regex {
    let digit = || Regex::range(b'0', b'9');
    let digits_plus = || Regex::concat(digit(), Regex::star(digit()));
    let with_integer_part = Regex::concat(digits_plus(), Regex::concat(Regex::literal(b'.'), digits_plus()));
    let leading_dot = Regex::concat(Regex::literal(b'.'), digits_plus());
    Regex::alt(with_integer_part, leading_dot)
}

/// `[A-Z][a-z]*(, [a-z][a-z]* | [a-z][a-z]*)*(. | ?)`
fn capitalized_sentence() -> Regex {
    let lower_word = || Regex::concat(Regex::range(b'a', b'z'), Regex::star(Regex::range(b'a', b'z')));
    let comma_continuation = Regex::concat(Regex::literal(b','), Regex::concat(Regex::literal(b' '), lower_word()));
    let space_continuation = Regex::concat(Regex::literal(b' '), lower_word());
    let continuation = Regex::alt(comma_continuation, space_continuation);
    let opener = Regex::concat(Regex::range(b'A', b'Z'), Regex::star(Regex::range(b'a', b'z')));
    let terminator = Regex::alt(Regex::literal(b'.'), Regex::literal(b'?'));
    Regex::concat(opener, Regex::concat(Regex::star(continuation), terminator))
}

#[test]
fn decimal_number_scenarios() {
    let pattern = decimal_number();
    assert!(accepts(&pattern, "3.1415926"));
    assert!(accepts(&pattern, ".5"));
    assert!(!accepts(&pattern, "a rational number"));
    assert!(!accepts(&pattern, "3"));
}

#[test]
fn capitalized_sentence_scenarios() {
    let pattern = capitalized_sentence();
    assert!(accepts(&pattern, "Hello, world."));
    assert!(accepts(&pattern, "Hello, world?"));
    assert!(accepts(&pattern, "Hello world."));
    assert!(!accepts(&pattern, "Hello, world"));
    assert!(!accepts(&pattern, "Hello, World?"));
    assert!(accepts(&pattern, "Yes, is a sentence."));
}

#[test]
fn a_or_ab_scenarios() {
    let pattern = Regex::alt(Regex::literal_str("a"), Regex::literal_str("ab"));
    assert!(accepts(&pattern, "a"));
    assert!(accepts(&pattern, "ab"));
    assert!(!accepts(&pattern, "b"));
}

#[test]
fn ab_star_scenarios() {
    let pattern = Regex::star(Regex::literal_str("ab"));
    assert!(accepts(&pattern, ""));
    assert!(accepts(&pattern, "ab"));
    assert!(accepts(&pattern, "abab"));
    assert!(!accepts(&pattern, "aba"));
}
