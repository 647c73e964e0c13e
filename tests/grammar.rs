//! A tiny S-expression grammar built from the library's parts.

use parsimony::char::{alphanumeric, digit, letter};
use parsimony::str::{bracket, end, literal};
use parsimony::{any, lazy, parse_str, Combinator, ParseError, Parser};

#[derive(Debug, PartialEq)]
enum Sexp<'a> {
    Num(i64),
    Sym(&'a str),
    Str(&'a str),
    List(Vec<Sexp<'a>>),
}

fn space<'a>() -> impl Parser<'a, O = ()> + Clone {
    literal(" ").many().map(|_| ())
}

fn num<'a>() -> impl Parser<'a, O = Sexp<'a>> + Clone {
    literal("-")
        .optional()
        .then(digit().at_least_one())
        .with_consumed()
        .filter_map(|(_, s)| s.parse().ok())
        .map(Sexp::Num)
}

fn sym<'a>() -> impl Parser<'a, O = Sexp<'a>> + Clone {
    letter()
        .then(alphanumeric().many())
        .with_consumed()
        .map(|(_, s)| Sexp::Sym(s))
}

fn sexp<'a>() -> impl Parser<'a, O = Sexp<'a>> + Clone {
    let list = lazy!(sexp)
        .keep_left(space())
        .many()
        .delimited_by(literal("(").keep_left(space()), literal(")"))
        .map(Sexp::List);
    any((num(), sym(), bracket("\"", "\"").map(Sexp::Str), list))
}

fn program<'a>() -> impl Parser<'a, O = Vec<Sexp<'a>>> + Clone {
    space().keep_right(sexp().keep_left(space()).many()).keep_left(end())
}

#[test]
fn nested_lists() {
    use Sexp::*;
    let out = parse_str("(define (sq x) (mul x x)) (sq -12) \"done\"", program());
    let expected = vec![
        List(vec![
            Sym("define"),
            List(vec![Sym("sq"), Sym("x")]),
            List(vec![Sym("mul"), Sym("x"), Sym("x")]),
        ]),
        List(vec![Sym("sq"), Num(-12)]),
        Str("done"),
    ];
    assert_eq!(out, Ok((expected, "")));
}

#[test]
fn unbalanced_input_is_rejected() {
    assert_eq!(parse_str("(a (b)", program()), Err(ParseError::PredicateFailed(0)));
    assert_eq!(parse_str("(a))", program()), Err(ParseError::PredicateFailed(3)));
}

#[test]
fn grammar_is_shared_across_threads() {
    let p = program();
    let inputs = ["(a 1)", "(b (c 2))", "x y z", "()"];
    std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| {
                let p = p.clone();
                scope.spawn(move || parse_str(input, p).map(|(v, _)| v.len()))
            })
            .collect();
        let lens: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(lens, vec![Ok(1), Ok(1), Ok(3), Ok(1)]);
    });
}
