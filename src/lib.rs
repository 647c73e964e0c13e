//! Parser combinators over an immutable string cursor.
//!
//! Small parsers for characters and strings are combined
//! into larger grammars by sequencing, alternation, repetition and mapping.
//! All parsers run on a [`Stream`], an immutable position in the input,
//! which makes backtracking free:
//! a failed attempt simply leaves the caller with the stream it started from.
//!
//! ~~~
//! use parsimony::{char::letter, parse_str, Combinator};
//! let ident = letter().at_least_one().with_consumed().map(|(_, s)| s);
//! assert_eq!(parse_str("abc123", ident), Ok(("abc", "123")));
//! ~~~
#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod char;
pub mod combinator;
mod error;
pub mod str;
mod stream;

#[doc(inline)]
pub use combinator::{
    all, any, at_least_one, keep_left, keep_right, many, optional, pure, Combinator,
};
pub use error::{PResult, ParseError};
pub use stream::Stream;

/// A parser takes a stream and either yields an output and the remaining stream, or fails.
///
/// [`Parser::parse`] takes `self` by value.
/// This allows parsers to hold [`FnOnce`] closures,
/// such as the one passed to [`Combinator::flat_map`],
/// whose output can then be moved out without cloning.
/// To run a parser more than once, clone it:
/// every parser in this crate implements [`Clone`] when its components do.
///
/// A parser never hands back a stream that lies before its input.
/// When it fails, the caller continues with the stream it passed in.
pub trait Parser<'a> {
    type O;

    /// Parse a value of type [`Self::O`].
    fn parse(self, input: Stream<'a>) -> PResult<'a, Self::O>;
}

/// Run a parser on a stream.
pub fn run<'a, P: Parser<'a>>(parser: P, input: Stream<'a>) -> PResult<'a, P::O> {
    parser.parse(input)
}

/// Run a parser on a whole string and return its output together with the unconsumed input.
///
/// ~~~
/// use parsimony::{char::digit, parse_str, Combinator, ParseError};
/// assert_eq!(parse_str("12ab", digit().many()), Ok((vec!['1', '2'], "ab")));
/// assert_eq!(parse_str("ab", digit()), Err(ParseError::PredicateFailed(0)));
/// ~~~
pub fn parse_str<'a, P: Parser<'a>>(
    input: &'a str,
    parser: P,
) -> Result<(P::O, &'a str), ParseError> {
    let (y, rest) = parser.parse(Stream::new(input))?;
    Ok((y, rest.rest()))
}

/// Construct a parser from a function.
///
/// This is similar to [`core::iter::from_fn`].
/// It can be used to write a custom parser without having to write a struct.
/// For example, a parser that yields the current offset without consuming anything:
///
/// ~~~
/// use parsimony::{from_fn, parse_str, Parser};
/// fn position<'a>() -> impl Parser<'a, O = usize> {
///     from_fn(|input: parsimony::Stream<'a>| Ok((input.offset(), input)))
/// }
/// assert_eq!(parse_str("abc", position()), Ok((0, "abc")));
/// ~~~
pub fn from_fn<'a, O, F: FnOnce(Stream<'a>) -> PResult<'a, O>>(f: F) -> FromFn<F> {
    FromFn(f)
}

/// A parser that returns the output of the function `F` called with the given stream.
///
/// This is returned by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

impl<'a, O, F: FnOnce(Stream<'a>) -> PResult<'a, O>> Parser<'a> for FromFn<F> {
    type O = O;

    fn parse(self, input: Stream<'a>) -> PResult<'a, Self::O> {
        self.0(input)
    }
}

/// Lazily construct a parser from a function.
///
/// `lazy!(p)` expands to `from_fn(|input| p().parse(input))`.
/// Because the type of the result does not mention the type of `p()`,
/// this allows for recursive parsers:
///
/// ~~~
/// use parsimony::{lazy, parse_str, str::literal, Combinator, Parser};
/// // balanced parentheses, yielding the nesting depth
/// fn nested<'a>() -> impl Parser<'a, O = usize> + Clone {
///     lazy!(nested)
///         .delimited_by(literal("("), literal(")"))
///         .map(|depth| depth + 1)
///         .or_else(parsimony::pure(0))
/// }
/// assert_eq!(parse_str("((()))!", nested()), Ok((3, "!")));
/// ~~~
///
/// It also erases large parser types,
/// which can considerably reduce build times for big grammars.
#[macro_export]
macro_rules! lazy {
    ($p:expr) => {
        $crate::from_fn(|input| $crate::Parser::parse($p(), input))
    };
}
