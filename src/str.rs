//! Parsers for strings.

use crate::combinator::{pure, Filter, Pure};
use crate::{from_fn, Combinator, PResult, ParseError, Parser, Stream};

/// A parser returned by [`remaining_as_string`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Remaining;

/// Consume all remaining input and return it.
///
/// This always succeeds, possibly with an empty string.
pub fn remaining_as_string() -> Remaining {
    Remaining
}

impl<'a> Parser<'a> for Remaining {
    type O = &'a str;

    fn parse(self, input: Stream<'a>) -> PResult<'a, Self::O> {
        Ok(input.advance(input.rest().len()))
    }
}

/// Consume all remaining input if it satisfies the given predicate.
///
/// ~~~
/// use parsimony::{parse_str, str::satisfying_string, ParseError};
/// let p = || satisfying_string(|s| s.ends_with('!'));
/// assert_eq!(parse_str("hi!", p()), Ok(("hi!", "")));
/// assert_eq!(parse_str("hi?", p()), Err(ParseError::PredicateFailed(0)));
/// ~~~
pub fn satisfying_string<'a, F: FnOnce(&&'a str) -> bool>(f: F) -> Filter<Remaining, F> {
    remaining_as_string().filter(f)
}

/// A parser returned by [`string_upto`].
#[derive(Clone, Copy, Debug)]
pub struct StringUpto<D>(D);

/// Return all input before the first occurrence of `delimiter`.
///
/// The delimiter itself is not consumed.
/// If the delimiter does not occur, fail with [`ParseError::EndOfInput`].
///
/// ~~~
/// use parsimony::{parse_str, str::string_upto, ParseError};
/// assert_eq!(parse_str("foo END bar", string_upto("END")), Ok(("foo ", "END bar")));
/// assert_eq!(parse_str("foo", string_upto("END")), Err(ParseError::EndOfInput));
/// ~~~
pub fn string_upto<D: AsRef<str>>(delimiter: D) -> StringUpto<D> {
    StringUpto(delimiter)
}

impl<'a, D: AsRef<str>> Parser<'a> for StringUpto<D> {
    type O = &'a str;

    fn parse(self, input: Stream<'a>) -> PResult<'a, Self::O> {
        let len = input.rest().find(self.0.as_ref()).ok_or(ParseError::EndOfInput)?;
        Ok(input.advance(len))
    }
}

/// A parser returned by [`literal`].
#[derive(Clone, Copy, Debug)]
pub struct Literal<D>(D);

/// Match the given string at the start of the input and return the matched input.
pub fn literal<D: AsRef<str>>(marker: D) -> Literal<D> {
    Literal(marker)
}

impl<'a, D: AsRef<str>> Parser<'a> for Literal<D> {
    type O = &'a str;

    fn parse(self, input: Stream<'a>) -> PResult<'a, Self::O> {
        let marker = self.0.as_ref();
        if input.rest().starts_with(marker) {
            Ok(input.advance(marker.len()))
        } else {
            Err(ParseError::rejected(input))
        }
    }
}

/// A parser returned by [`end`].
#[derive(Clone, Copy, Debug, Default)]
pub struct End;

/// Succeed only if no input remains.
pub fn end() -> End {
    End
}

impl<'a> Parser<'a> for End {
    type O = ();

    fn parse(self, input: Stream<'a>) -> PResult<'a, Self::O> {
        if input.is_empty() {
            Ok(((), input))
        } else {
            Err(ParseError::rejected(input))
        }
    }
}

/// A parser returned by [`bracket`] and [`bracket_with`].
#[derive(Clone, Copy, Debug)]
pub struct Bracket<Open, Close>(Open, Close);

/// Return the text between the literal markers `open` and `close`.
///
/// The first occurrence of `close` ends the bracket, so brackets do not nest.
///
/// ~~~
/// use parsimony::{parse_str, str::bracket};
/// assert_eq!(parse_str("[hello]world", bracket("[", "]")), Ok(("hello", "world")));
/// assert_eq!(parse_str("[a[b]c]", bracket("[", "]")), Ok(("a[b", "c]")));
/// ~~~
pub fn bracket<D: AsRef<str>>(open: D, close: D) -> Bracket<Literal<D>, Pure<D>> {
    bracket_with(literal(open), pure(close))
}

/// Return the text between an opening parser and a closing delimiter.
///
/// First `open` runs, then `close`.
/// The *output* of `close` is the delimiter:
/// the input is scanned up to its first occurrence,
/// and the delimiter is then consumed as well.
/// The output of `open` is discarded.
///
/// This allows for delimiters that are only known while parsing,
/// such as the tag of a here-document:
///
/// ~~~
/// use parsimony::{char::letter, parse_str, str::{bracket_with, literal}, Combinator};
/// let tag = letter().at_least_one().with_consumed().map(|(_, tag)| tag);
/// let heredoc = bracket_with(literal("<<"), tag.keep_left(literal("\n")));
/// assert_eq!(parse_str("<<EOF\nsome text\nEOF;", heredoc), Ok(("some text\n", ";")));
/// ~~~
pub fn bracket_with<'a, Open, Close>(open: Open, close: Close) -> Bracket<Open, Close>
where
    Open: Parser<'a>,
    Close: Parser<'a>,
    Close::O: AsRef<str>,
{
    Bracket(open, close)
}

impl<'a, Open, Close> Parser<'a> for Bracket<Open, Close>
where
    Open: Parser<'a>,
    Close: Parser<'a>,
    Close::O: AsRef<str>,
{
    type O = &'a str;

    fn parse(self, input: Stream<'a>) -> PResult<'a, Self::O> {
        let Self(open, close) = self;
        let inner = close.flat_map(|delim: Close::O| {
            from_fn(move |input: Stream<'a>| {
                let (middle, rest) = string_upto(delim.as_ref()).parse(input)?;
                let (_, rest) = literal(delim.as_ref()).parse(rest)?;
                Ok((middle, rest))
            })
        });
        open.keep_right(inner).parse(input)
    }
}
