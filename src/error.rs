//! Parse failures.

use crate::Stream;

/// Why a parser failed.
///
/// Failures are ordinary values:
/// combinators such as [`or_else`](crate::Combinator::or_else) or
/// [`many`](crate::Combinator::many) inspect them and may recover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// More input was required, but none was left.
    #[error("unexpected end of input")]
    EndOfInput,
    /// A check rejected the candidate starting at the given character offset.
    #[error("predicate failed at offset {0}")]
    PredicateFailed(usize),
}

impl ParseError {
    /// Character offset at which the failure occurred, if known.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::EndOfInput => None,
            Self::PredicateFailed(offset) => Some(*offset),
        }
    }

    pub(crate) fn rejected(at: Stream<'_>) -> Self {
        Self::PredicateFailed(at.offset())
    }
}

/// Result of running a parser: a value and the remaining input, or a failure.
pub type PResult<'a, O> = Result<(O, Stream<'a>), ParseError>;
