//! Create new parsers by combining existing ones.
//!
//! There are two flavours of combinators:
//!
//! * Combinators in the [`Combinator`] trait:
//!   These take a fixed number of parsers; for example,
//!   [`Combinator::optional`] takes one parser and
//!   [`Combinator::then`] takes two parsers.
//! * Free functions: [`pure`] takes no parser at all,
//!   [`any`] and [`all`] take n-tuples of parsers,
//!   and [`many`], [`at_least_one`], [`optional`], [`keep_left`] and [`keep_right`]
//!   are prefix spellings of the methods of the same name.
//!
//! # Overview
//!
//! Here, `a` and `b` are two languages that are recognized by parsers of the same name.
//!
//! | Language             | Parser
//! | :------------------- | :----------------------
//! | `ab`                 | [`a.then(b)`](Combinator::then)
//! | `abc`                | [`all((a, b, c))`](all)
//! | <code>a\|b</code>    | [`a.or_else(b)`](Combinator::or_else)
//! | <code>a\|b\|c</code> | [`any((a, b, c))`](any)
//! | `a?`                 | [`a.optional()`](Combinator::optional)
//! | `a*`                 | [`a.many()`](Combinator::many)
//! | `a+`                 | [`a.at_least_one()`](Combinator::at_least_one)
//! | `(a(ba)*)?`          | [`a.separated_by(b)`](Combinator::separated_by)
//!
//! Combinators that operate on the output of a parser `a`:
//!
//! Parser `p`                                    | `p.parse(s)`
//! :-------------------------------------------- | :---------------------------------------------
//! [`a.map(f)`](Combinator::map)                 | <code>a.parse(s).map(\|(y, rest)\| (f(y), rest))</code>
//! [`a.flat_map(f)`](Combinator::flat_map)       | <code>a.parse(s).and_then(\|(y, rest)\| f(y).parse(rest))</code>
//! [`a.filter(f)`](Combinator::filter)           | fails with [`ParseError::PredicateFailed`] at `s` unless `f(&y)`
//! [`fs.apply(a)`](Combinator::apply)            | run `fs`, then `a`, and apply the function from `fs` to the output of `a`
//!
//! Combinators that throw away results, for parsers `a`, `b`, and `c`:
//!
//! Parser                                             | Definition
//! :------------------------------------------------- | :-------------------------------------------------
//! [`a.keep_left(b)`](Combinator::keep_left)          | <code>a.then(b).map(\|(a, _b)\| a)</code>
//! [`a.keep_right(b)`](Combinator::keep_right)        | <code>a.then(b).map(\|(_a, b)\| b)</code>
//! [`b.delimited_by(a, c)`](Combinator::delimited_by) | <code>all((a, b, c)).map(\|(_a, b, _c)\| b)</code>
use crate::{PResult, ParseError, Parser, Stream};
use alloc::vec::Vec;

/// A combinator combines parsers to form new ones.
///
/// Every [`Parser`] implements the [`Combinator`] trait.
/// To use it, import it as follows:
///
/// ~~~
/// use parsimony::Combinator;
/// ~~~
pub trait Combinator<'a>: Parser<'a>
where
    Self: Sized,
{
    /// If both parsers yield an output, return the pair of their outputs.
    ///
    /// `p0.then(p1).then(p2)` yields nested pairs;
    /// use [`all`] to get a flat tuple instead.
    fn then<P: Parser<'a>>(self, other: P) -> All<(Self, P)> {
        All((self, other))
    }

    /// If the first parser succeeds, return its output, otherwise
    /// run the second parser on the *same* input and return its outcome.
    ///
    /// Whatever the first parser consumed before failing is discarded,
    /// and its error is forgotten.
    ///
    /// ~~~
    /// use parsimony::{parse_str, str::literal, Combinator, ParseError};
    /// let p = || literal("ab").or_else(literal("ac"));
    /// assert_eq!(parse_str("acd", p()), Ok(("ac", "d")));
    /// assert_eq!(parse_str("x", p()), Err(ParseError::PredicateFailed(0)));
    /// ~~~
    fn or_else<P: Parser<'a, O = Self::O>>(self, other: P) -> Any<(Self, P)> {
        Any((self, other))
    }

    /// Apply a function to the output of the parser.
    fn map<O, F: FnOnce(Self::O) -> O>(self, f: F) -> Map<Self, F> {
        Map(self, f)
    }

    /// Run a parser yielding a function, then the given parser,
    /// and apply the function to the output of the given parser.
    ///
    /// ~~~
    /// use parsimony::{char::digit, parse_str, pure, Combinator};
    /// let pair = pure(|a: char| move |b: char| (a, b)).apply(digit()).apply(digit());
    /// assert_eq!(parse_str("12x", pair), Ok((('1', '2'), "x")));
    /// ~~~
    fn apply<P: Parser<'a>>(self, other: P) -> Apply<Self, P> {
        Apply(self, other)
    }

    /// Succeed only if the given function yields `true` for the parser output.
    ///
    /// On rejection, the error refers to where the parser started.
    fn filter<F: FnOnce(&Self::O) -> bool>(self, f: F) -> Filter<Self, F> {
        Filter(self, f)
    }

    /// If the given function yields `Some(y)` for the parser output, succeed with `y`, else fail.
    fn filter_map<O, F: FnOnce(Self::O) -> Option<O>>(self, f: F) -> FilterMap<Self, F> {
        FilterMap(self, f)
    }

    /// Run two parsers in sequence and discard result of second one.
    fn keep_left<P: Parser<'a>>(self, other: P) -> ThenMap<Self, P, Self::O, P::O, Self::O> {
        self.then(other).map(|(l, _r): (Self::O, P::O)| l)
    }

    /// Run two parsers in sequence and discard result of first one.
    fn keep_right<P: Parser<'a>>(self, other: P) -> ThenMap<Self, P, Self::O, P::O, P::O> {
        self.then(other).map(|(_l, r): (Self::O, P::O)| r)
    }

    /// Run parsers `l`, `self`, and `r` in sequence and return only the output of `self`.
    fn delimited_by<L, R>(self, l: L, r: R) -> DelimitedBy<L, Self, R, L::O, Self::O, R::O>
    where
        L: Parser<'a>,
        R: Parser<'a>,
    {
        all((l, self, r)).map(|(_l, m, _r)| m)
    }

    /// Apply the parser as often as possible and collect its outputs.
    ///
    /// This never fails; if the parser does not match at all,
    /// the output is empty and no input is consumed.
    /// Repetition also ends after an iteration that succeeds without consuming input,
    /// because it would succeed in the same way forever.
    fn many(self) -> Repeated<Self, fn() -> Vec<Self::O>>
    where
        Self: Clone,
    {
        Repeated(self, Vec::new)
    }

    /// Like [`Combinator::many`], but collect the outputs into the type `O`.
    ///
    /// ~~~
    /// use parsimony::{char::letter, parse_str, Combinator};
    /// assert_eq!(parse_str("ab1", letter().repeated::<String>()), Ok(("ab".to_string(), "1")));
    /// ~~~
    fn repeated<O>(self) -> Repeated<Self, fn() -> O>
    where
        Self: Clone,
        O: Default + Extend<Self::O>,
    {
        Repeated(self, O::default)
    }

    /// Like [`Combinator::many`], but fail unless the parser matches at least once.
    fn at_least_one(self) -> AtLeastOne<Self>
    where
        Self: Clone,
    {
        AtLeastOne(self)
    }

    /// Apply the parser as often as possible, separated by `sep`.
    ///
    /// `a.separated_by(b)` corresponds to the regular expression `(a(ba)*)?`.
    /// The outputs of `b` are discarded.
    /// Trailing `b`s are not consumed; for this, use
    /// `a.separated_by(b).keep_left(b.optional())`.
    fn separated_by<Sep>(self, sep: Sep) -> SeparatedBy<Self, Sep>
    where
        Self: Clone,
        Sep: Parser<'a> + Clone,
    {
        SeparatedBy(self, sep)
    }

    /// If the given parser succeeds, wrap its output in `Some`, else return `None`.
    ///
    /// The resulting parser always succeeds.
    fn optional(self) -> Opt<Self> {
        Opt(self)
    }

    /// Run the first parser, then create a second parser from its output and run it.
    ///
    /// This lets later parsing depend on what was parsed earlier.
    fn flat_map<P: Parser<'a>, F: FnOnce(Self::O) -> P>(self, f: F) -> FlatMap<Self, F> {
        FlatMap(self, f)
    }

    /// Run the parser and combine its output with the slice of the input it consumed.
    fn with_consumed(self) -> WithConsumed<Self> {
        WithConsumed(self)
    }
}

impl<'a, T: Parser<'a>> Combinator<'a> for T {}

/// A parser returned by [`pure`].
#[derive(Clone, Copy)]
pub struct Pure<T>(T);

/// Succeed with `value` without consuming any input.
pub fn pure<T>(value: T) -> Pure<T> {
    Pure(value)
}

impl<'a, T> Parser<'a> for Pure<T> {
    type O = T;

    fn parse(self, input: Stream<'a>) -> PResult<'a, Self::O> {
        Ok((self.0, input))
    }
}

/// A parser returned by [`all`] and [`Combinator::then`].
#[derive(Clone, Copy)]
pub struct All<T>(T);

/// Return outputs of all provided parsers, if all succeed.
///
/// This function takes a tuple of parsers,
/// which may all return different types of outputs.
///
/// ~~~
/// use parsimony::{all, char::{digit, letter}, parse_str, Combinator};
/// let p = all((digit(), letter().at_least_one(), digit()));
/// assert_eq!(parse_str("1ab2 rest", p), Ok((('1', vec!['a', 'b'], '2'), " rest")));
/// ~~~
pub fn all<T>(t: T) -> All<T> {
    All(t)
}

/// A parser returned by [`any`] and [`Combinator::or_else`].
#[derive(Clone, Copy)]
pub struct Any<T>(T);

/// Return output of the first provided parser that succeeds.
///
/// This function takes a tuple (or an array) of parsers,
/// which all have to return the same type of output.
/// Every alternative starts from the same input.
/// If all fail, the error of the last one is returned.
///
/// ~~~
/// use parsimony::{any, parse_str, str::literal, ParseError};
/// let p = || any((literal("let"), literal("if"), literal("else")));
/// assert_eq!(parse_str("if x", p()), Ok(("if", " x")));
/// assert_eq!(parse_str("while", p()), Err(ParseError::PredicateFailed(0)));
/// ~~~
pub fn any<T>(t: T) -> Any<T> {
    Any(t)
}

impl<'a, O, P: Parser<'a, O = O>, const N: usize> Parser<'a> for Any<[P; N]> {
    type O = O;

    fn parse(self, input: Stream<'a>) -> PResult<'a, Self::O> {
        let mut iter = IntoIterator::into_iter(self.0).rev();
        let last = iter.next().ok_or(ParseError::rejected(input))?;
        for p in iter.rev() {
            if let Ok(y) = p.parse(input) {
                return Ok(y);
            }
        }
        last.parse(input)
    }
}

/// Generate parsing code for `Any<(P0, P1, ..., Pn)>`.
///
/// `impl_any!(input, p0 p1 ... pn)` tries each parser on the same input
/// and returns the outcome of `pn` if no earlier parser succeeded.
macro_rules! impl_any {
    ($input:ident, $head:ident $($tail:ident)+) => {
        if let Ok(y) = $head.parse($input) {
            return Ok(y)
        }
        impl_any!($input, $($tail)+)
    };
    ($input:ident, $head:ident) => {
        return $head.parse($input)
    }
}

/// Generate `impl`s for `Any<(P0, P1, ..., Pn)>` and `All<(P0, P1, ..., Pn)>`.
macro_rules! impl_all_any {
    ($($acc:ident)+; $head:ident $($tail:ident)*) => {
        impl_all_any!($($acc)+      ;          );
        impl_all_any!($($acc)+ $head; $($tail)*);
    };
    ($($parser:ident)+;) => {
        #[allow(non_snake_case)]
        impl<'a, $($parser: Parser<'a>),+> Parser<'a> for All<($($parser),+,)> {
            type O = ($($parser::O),+,);

            #[inline(always)]
            fn parse(self, input: Stream<'a>) -> PResult<'a, Self::O> {
                let Self(($($parser),+,)) = self;
                $(let ($parser, input) = $parser.parse(input)?;)+
                Ok((($($parser),+,), input))
            }
        }

        #[allow(non_snake_case)]
        impl<'a, O, $($parser: Parser<'a, O = O>),+> Parser<'a> for Any<($($parser),+,)> {
            type O = O;

            #[inline(always)]
            fn parse(self, input: Stream<'a>) -> PResult<'a, Self::O> {
                let Self(($($parser),+,)) = self;
                impl_any!(input, $($parser)*);
            }
        }
    }
}
impl_all_any!(P1; P2 P3 P4 P5 P6 P7 P8 P9);

/// A parser returned by [`Combinator::map`].
#[derive(Clone, Copy)]
pub struct Map<P, F>(P, F);

impl<'a, P: Parser<'a>, O, F: FnOnce(P::O) -> O> Parser<'a> for Map<P, F> {
    type O = O;

    fn parse(self, input: Stream<'a>) -> PResult<'a, Self::O> {
        let (p, f) = (self.0, self.1);
        p.parse(input).map(|(y, rest)| (f(y), rest))
    }
}

/// A parser returned by [`Combinator::apply`].
#[derive(Clone, Copy)]
pub struct Apply<PF, PX>(PF, PX);

impl<'a, PF, PX, O> Parser<'a> for Apply<PF, PX>
where
    PF: Parser<'a>,
    PX: Parser<'a>,
    PF::O: FnOnce(PX::O) -> O,
{
    type O = O;

    fn parse(self, input: Stream<'a>) -> PResult<'a, Self::O> {
        let (pf, px) = (self.0, self.1);
        let (f, rest) = pf.parse(input)?;
        let (x, rest) = px.parse(rest)?;
        Ok((f(x), rest))
    }
}

/// A parser returned by [`Combinator::filter`].
#[derive(Clone, Copy)]
pub struct Filter<P, F>(P, F);

impl<'a, P: Parser<'a>, F: FnOnce(&P::O) -> bool> Parser<'a> for Filter<P, F> {
    type O = P::O;

    fn parse(self, input: Stream<'a>) -> PResult<'a, Self::O> {
        let (p, f) = (self.0, self.1);
        let (y, rest) = p.parse(input)?;
        if f(&y) {
            Ok((y, rest))
        } else {
            Err(ParseError::rejected(input))
        }
    }
}

/// A parser returned by [`Combinator::filter_map`].
#[derive(Clone, Copy)]
pub struct FilterMap<P, F>(P, F);

impl<'a, P: Parser<'a>, O, F: FnOnce(P::O) -> Option<O>> Parser<'a> for FilterMap<P, F> {
    type O = O;

    fn parse(self, input: Stream<'a>) -> PResult<'a, Self::O> {
        let (p, f) = (self.0, self.1);
        let (y, rest) = p.parse(input)?;
        let y = f(y).ok_or(ParseError::rejected(input))?;
        Ok((y, rest))
    }
}

type ThenMap<P1, P2, O1, O2, O> = Map<All<(P1, P2)>, fn((O1, O2)) -> O>;
type DelimitedBy<L, M, R, LO, MO, RO> = Map<All<(L, M, R)>, fn((LO, MO, RO)) -> MO>;

/// Run `l` then `r` and keep the output of `l`.
///
/// Same as [`Combinator::keep_left`].
pub fn keep_left<'a, L, R>(l: L, r: R) -> ThenMap<L, R, L::O, R::O, L::O>
where
    L: Parser<'a>,
    R: Parser<'a>,
{
    l.keep_left(r)
}

/// Run `l` then `r` and keep the output of `r`.
///
/// Same as [`Combinator::keep_right`].
pub fn keep_right<'a, L, R>(l: L, r: R) -> ThenMap<L, R, L::O, R::O, R::O>
where
    L: Parser<'a>,
    R: Parser<'a>,
{
    l.keep_right(r)
}

/// A parser returned by [`Combinator::optional`].
#[derive(Clone, Copy)]
pub struct Opt<P>(P);

/// Same as [`Combinator::optional`].
pub fn optional<'a, P: Parser<'a>>(p: P) -> Opt<P> {
    Opt(p)
}

impl<'a, P: Parser<'a>> Parser<'a> for Opt<P> {
    type O = Option<P::O>;

    fn parse(self, input: Stream<'a>) -> PResult<'a, Self::O> {
        Ok(match self.0.parse(input) {
            Ok((y, rest)) => (Some(y), rest),
            Err(_) => (None, input),
        })
    }
}

/// Run parsers produced by `p` until one fails or stops consuming input,
/// extend `out` with their outputs, and return the input after the last success.
fn repeat_into<'a, P, PF, O>(mut p: PF, out: &mut O, mut input: Stream<'a>) -> Stream<'a>
where
    P: Parser<'a>,
    PF: FnMut() -> P,
    O: Extend<P::O>,
{
    while let Ok((y, rest)) = p().parse(input) {
        out.extend(core::iter::once(y));
        let stalled = rest.offset() == input.offset();
        input = rest;
        if stalled {
            break;
        }
    }
    input
}

/// A parser returned by [`Combinator::many`] and [`Combinator::repeated`].
#[derive(Clone, Copy)]
pub struct Repeated<P, O>(P, O);

/// Same as [`Combinator::many`].
///
/// ~~~
/// use parsimony::{char::digit, many, parse_str};
/// assert_eq!(parse_str("abc", many(digit())), Ok((vec![], "abc")));
/// ~~~
pub fn many<'a, P: Parser<'a> + Clone>(p: P) -> Repeated<P, fn() -> Vec<P::O>> {
    p.many()
}

impl<'a, P, O, OF> Parser<'a> for Repeated<P, OF>
where
    P: Parser<'a> + Clone,
    O: Extend<P::O>,
    OF: FnOnce() -> O,
{
    type O = O;

    fn parse(self, input: Stream<'a>) -> PResult<'a, Self::O> {
        let (p, init) = (self.0, self.1);
        let mut out = init();
        let rest = repeat_into(|| p.clone(), &mut out, input);
        Ok((out, rest))
    }
}

/// A parser returned by [`Combinator::at_least_one`].
#[derive(Clone, Copy)]
pub struct AtLeastOne<P>(P);

/// Same as [`Combinator::at_least_one`].
///
/// ~~~
/// use parsimony::{at_least_one, char::letter, parse_str, ParseError};
/// assert_eq!(parse_str("abc123", at_least_one(letter())), Ok((vec!['a', 'b', 'c'], "123")));
/// assert_eq!(parse_str("123abc", at_least_one(letter())), Err(ParseError::PredicateFailed(0)));
/// ~~~
pub fn at_least_one<'a, P: Parser<'a> + Clone>(p: P) -> AtLeastOne<P> {
    AtLeastOne(p)
}

impl<'a, P: Parser<'a> + Clone> Parser<'a> for AtLeastOne<P> {
    type O = Vec<P::O>;

    fn parse(self, input: Stream<'a>) -> PResult<'a, Self::O> {
        let p = self.0;
        let (head, rest) = p.clone().parse(input)?;
        let mut out = Vec::from([head]);
        if rest.offset() == input.offset() {
            return Ok((out, rest));
        }
        let rest = repeat_into(|| p.clone(), &mut out, rest);
        Ok((out, rest))
    }
}

/// A parser returned by [`Combinator::separated_by`].
#[derive(Clone, Copy)]
pub struct SeparatedBy<P, Sep>(P, Sep);

impl<'a, P, Sep> Parser<'a> for SeparatedBy<P, Sep>
where
    P: Parser<'a> + Clone,
    Sep: Parser<'a> + Clone,
{
    type O = Vec<P::O>;

    fn parse(self, mut input: Stream<'a>) -> PResult<'a, Self::O> {
        let Self(p, sep) = self;
        let mut out = Vec::new();
        match p.clone().parse(input) {
            Ok((head, rest)) => {
                out.push(head);
                input = rest;
            }
            Err(_) => return Ok((out, input)),
        }

        while let Ok((_, after_sep)) = sep.clone().parse(input) {
            match p.clone().parse(after_sep) {
                Ok((y, rest)) if rest.offset() > input.offset() => {
                    out.push(y);
                    input = rest;
                }
                _ => break,
            }
        }
        Ok((out, input))
    }
}

/// A parser returned by [`Combinator::flat_map`].
#[derive(Clone, Copy)]
pub struct FlatMap<P, F>(P, F);

impl<'a, P1: Parser<'a>, P2: Parser<'a>, F: FnOnce(P1::O) -> P2> Parser<'a> for FlatMap<P1, F> {
    type O = P2::O;

    fn parse(self, input: Stream<'a>) -> PResult<'a, Self::O> {
        let (y, rest) = self.0.parse(input)?;
        self.1(y).parse(rest)
    }
}

/// A parser returned by [`Combinator::with_consumed`].
#[derive(Clone, Copy)]
pub struct WithConsumed<P>(P);

impl<'a, P: Parser<'a>> Parser<'a> for WithConsumed<P> {
    type O = (P::O, &'a str);

    fn parse(self, input: Stream<'a>) -> PResult<'a, Self::O> {
        let (y, rest) = self.0.parse(input)?;
        Ok(((y, input.consumed_until(&rest)), rest))
    }
}
