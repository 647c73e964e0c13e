//! Parsers for single characters.
//!
//! The character classes ([`lowercase`], [`digit`], ...) are built from plain
//! function pointers, so they are [`Copy`] and can be shared freely, also across threads.

use crate::combinator::Filter;
use crate::{Combinator, PResult, ParseError, Parser, Stream};

/// A parser returned by [`any_character`].
#[derive(Clone, Copy, Debug, Default)]
pub struct AnyCharacter;

/// If input remains, return its first character and advance by one character.
///
/// ~~~
/// use parsimony::{char::any_character, parse_str, ParseError};
/// assert_eq!(parse_str("ñx", any_character()), Ok(('ñ', "x")));
/// assert_eq!(parse_str("", any_character()), Err(ParseError::EndOfInput));
/// ~~~
pub fn any_character() -> AnyCharacter {
    AnyCharacter
}

impl<'a> Parser<'a> for AnyCharacter {
    type O = char;

    fn parse(self, input: Stream<'a>) -> PResult<'a, Self::O> {
        input.split_first().ok_or(ParseError::EndOfInput)
    }
}

/// Parse a character that satisfies the given predicate.
///
/// If the predicate rejects the character,
/// the error carries the offset *before* the character.
pub fn satisfying_character<F: FnOnce(&char) -> bool>(f: F) -> Filter<AnyCharacter, F> {
    any_character().filter(f)
}

/// A character class parser, as returned by [`lowercase`], [`uppercase`] and [`digit`].
pub type CharClass = Filter<AnyCharacter, fn(&char) -> bool>;

fn class(f: fn(&char) -> bool) -> CharClass {
    satisfying_character(f)
}

/// An ASCII lowercase letter `'a'..='z'`.
pub fn lowercase() -> CharClass {
    class(|c| c.is_ascii_lowercase())
}

/// An ASCII uppercase letter `'A'..='Z'`.
pub fn uppercase() -> CharClass {
    class(|c| c.is_ascii_uppercase())
}

/// An ASCII decimal digit `'0'..='9'`.
pub fn digit() -> CharClass {
    class(|c| c.is_ascii_digit())
}

/// A [`lowercase`] or, failing that, an [`uppercase`] letter.
pub fn letter<'a>() -> impl Parser<'a, O = char> + Copy {
    lowercase().or_else(uppercase())
}

/// A [`letter`] or, failing that, a [`digit`].
///
/// ~~~
/// use parsimony::{char::alphanumeric, parse_str, Combinator};
/// let p = alphanumeric().at_least_one();
/// assert_eq!(parse_str("a1B2-", p), Ok((vec!['a', '1', 'B', '2'], "-")));
/// ~~~
pub fn alphanumeric<'a>() -> impl Parser<'a, O = char> + Copy {
    letter().or_else(digit())
}
