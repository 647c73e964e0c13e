use parsimony::char::{any_character, digit, letter, lowercase};
use parsimony::str::{literal, remaining_as_string, string_upto};
use parsimony::{
    all, any, at_least_one, from_fn, keep_left, keep_right, many, optional, parse_str, pure, run,
    Combinator, ParseError, Stream,
};

fn number<'a>() -> impl parsimony::Parser<'a, O = u32> + Clone {
    digit()
        .at_least_one()
        .map(|ds| ds.into_iter().fold(0, |n, d| n * 10 + d.to_digit(10).unwrap_or(0)))
}

#[test]
fn map_keeps_position() {
    let (n, s) = run(number(), Stream::new("42+1")).unwrap();
    assert_eq!(n, 42);
    assert_eq!(s.offset(), 2);
    assert_eq!(parse_str("x", number()), Err(ParseError::PredicateFailed(0)));
}

#[test]
fn pure_consumes_nothing() {
    assert_eq!(parse_str("abc", pure(7)), Ok((7, "abc")));
    assert_eq!(parse_str("", pure("x")), Ok(("x", "")));
}

#[test]
fn apply_runs_function_parser_first() {
    let add = number().map(|a| move |b: u32| a + b);
    let p = add.keep_left(literal("+")).apply(number());
    assert_eq!(parse_str("40+2;", p), Ok((42, ";")));

    let p = pure(|c: char| c.to_ascii_uppercase()).apply(letter());
    assert_eq!(parse_str("q", p.clone()), Ok(('Q', "")));
    assert_eq!(parse_str("1", p), Err(ParseError::PredicateFailed(0)));
}

#[test]
fn keep_left_and_right() {
    assert_eq!(parse_str("a;b", letter().keep_left(literal(";"))), Ok(('a', "b")));
    assert_eq!(parse_str("a;b", keep_right(letter(), literal(";"))), Ok((";", "b")));
    let p = keep_left(letter(), literal(","));
    assert_eq!(parse_str("a;b", p), Err(ParseError::PredicateFailed(1)));
    let p = number().delimited_by(literal("("), literal(")"));
    assert_eq!(parse_str("(12)3", p), Ok((12, "3")));
}

#[test]
fn flat_map_depends_on_earlier_output() {
    // a length prefix followed by that many characters
    let p = number()
        .keep_left(literal(":"))
        .flat_map(|n| from_fn(move |mut s| {
            for _ in 0..n {
                s = run(any_character(), s)?.1;
            }
            Ok((n, s))
        }))
        .with_consumed();
    assert_eq!(parse_str("3:abcdef", p.clone()), Ok(((3, "3:abc"), "def")));
    assert_eq!(parse_str("9:abc", p), Err(ParseError::EndOfInput));
}

#[test]
fn flat_map_builds_scanner_from_token() {
    let p = any_character().flat_map(|c| {
        let delim = c.to_string();
        string_upto(delim.clone()).keep_left(literal(delim))
    });
    assert_eq!(parse_str("|a,b|c", p), Ok(("a,b", "c")));
}

#[test]
fn or_else_backtracks() {
    // the first branch consumes "ab" before failing
    let p = all((literal("a"), literal("b"), literal("c")))
        .map(|_| "abc")
        .or_else(literal("ab"));
    assert_eq!(parse_str("abd", p), Ok(("ab", "d")));
}

#[test]
fn or_else_reports_last_error() {
    let p = literal("x").map(|_| ()).or_else(any_character().map(|_| ()));
    assert_eq!(parse_str("", p), Err(ParseError::EndOfInput));
    let p = any_character().or_else(literal("x").map(|_| 'x'));
    assert_eq!(parse_str("", p), Err(ParseError::PredicateFailed(0)));
}

#[test]
fn any_tries_in_order() {
    let kw = || any((literal("else"), literal("elif"), literal("el")));
    assert_eq!(parse_str("elif", kw()), Ok(("elif", "")));
    assert_eq!(parse_str("elx", kw()), Ok(("el", "x")));
    let arr = any([literal("a"), literal("b")]);
    assert_eq!(parse_str("b", arr), Ok(("b", "")));
    let none: [parsimony::str::Literal<&str>; 0] = [];
    assert_eq!(parse_str("b", any(none)), Err(ParseError::PredicateFailed(0)));
}

#[test]
fn many_collects_longest_run() {
    assert_eq!(parse_str("123abc", many(digit())), Ok((vec!['1', '2', '3'], "abc")));
    assert_eq!(parse_str("abc", many(digit())), Ok((vec![], "abc")));
    assert_eq!(parse_str("", many(digit())), Ok((vec![], "")));
}

#[test]
fn many_discards_partial_attempt() {
    let pair = letter().then(digit());
    let (pairs, rest) = parse_str("a1b2c", pair.many()).unwrap();
    assert_eq!(pairs, vec![('a', '1'), ('b', '2')]);
    assert_eq!(rest, "c");
}

#[test]
fn many_stops_on_zero_width_success() {
    assert_eq!(parse_str("abc", many(pure(1))), Ok((vec![1], "abc")));
    assert_eq!(parse_str("", many(remaining_as_string())), Ok((vec![""], "")));
    assert_eq!(parse_str("ab", many(remaining_as_string())), Ok((vec!["ab", ""], "")));
    assert_eq!(parse_str("x", at_least_one(optional(digit()))), Ok((vec![None], "x")));
}

#[test]
fn at_least_one_requires_a_match() {
    assert_eq!(parse_str("abc123", at_least_one(letter())), Ok((vec!['a', 'b', 'c'], "123")));
    assert_eq!(parse_str("123abc", at_least_one(letter())), Err(ParseError::PredicateFailed(0)));
    assert_eq!(parse_str("", letter().at_least_one()), Err(ParseError::EndOfInput));
}

#[test]
fn optional_never_fails() {
    assert_eq!(parse_str("7x", optional(digit())), Ok((Some('7'), "x")));
    assert_eq!(parse_str("x", optional(digit())), Ok((None, "x")));
    let p = letter().then(digit()).optional();
    assert_eq!(parse_str("ab", p), Ok((None, "ab")));
}

#[test]
fn separated_by_leaves_trailing_separator() {
    let list = || number().separated_by(literal(","));
    assert_eq!(parse_str("1,22,3;", list()), Ok((vec![1, 22, 3], ";")));
    assert_eq!(parse_str("1,2,", list()), Ok((vec![1, 2], ",")));
    assert_eq!(parse_str(";", list()), Ok((vec![], ";")));
}

#[test]
fn filter_and_filter_map() {
    let even = number().filter(|n| n % 2 == 0);
    assert_eq!(parse_str("12", even.clone()), Ok((12, "")));
    assert_eq!(parse_str("13", even), Err(ParseError::PredicateFailed(0)));
    let small = number().filter_map(|n| u8::try_from(n).ok());
    assert_eq!(parse_str("255", small.clone()), Ok((255u8, "")));
    assert_eq!(parse_str("256", small), Err(ParseError::PredicateFailed(0)));
}

#[test]
fn with_consumed_returns_matched_slice() {
    let ident = lowercase().then(letter().many()).with_consumed().map(|(_, s)| s);
    assert_eq!(parse_str("fooBar baz", ident), Ok(("fooBar", " baz")));
}

#[test]
fn failure_leaves_caller_stream_usable() {
    let start = Stream::new("abc");
    assert!(run(digit(), start).is_err());
    assert_eq!(run(letter(), start).map(|(c, s)| (c, s.offset())), Ok(('a', 1)));
}
