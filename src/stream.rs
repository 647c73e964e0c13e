//! Immutable cursor into the input.

use core::fmt;

/// Position in an input string together with the input that remains.
///
/// A stream never changes: advancing yields a new stream,
/// so a combinator can always resume from an earlier one after a failed attempt.
/// The input text is shared, never copied.
///
/// ~~~
/// use parsimony::Stream;
/// let s = Stream::new("héllo");
/// assert_eq!(s.offset(), 0);
/// assert_eq!(s.rest(), "héllo");
/// ~~~
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Stream<'a> {
    text: &'a str,
    /// byte index of the remaining input in `text`
    pos: usize,
    /// number of characters consumed
    offset: usize,
}

impl<'a> Stream<'a> {
    /// Start a stream at the beginning of `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            offset: 0,
        }
    }

    /// Number of characters consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The input that has not been consumed yet.
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// The complete input this stream was created from.
    pub fn source(&self) -> &'a str {
        self.text
    }

    /// True if no input remains.
    pub fn is_empty(&self) -> bool {
        self.pos == self.text.len()
    }

    /// If input remains, return its first character and the stream after it.
    pub fn split_first(self) -> Option<(char, Self)> {
        let c = self.rest().chars().next()?;
        Some((
            c,
            Self {
                pos: self.pos + c.len_utf8(),
                offset: self.offset + 1,
                ..self
            },
        ))
    }

    /// Consume the first `len` bytes of the remaining input.
    ///
    /// `len` must lie on a character boundary of [`Stream::rest`].
    pub(crate) fn advance(self, len: usize) -> (&'a str, Self) {
        let taken = &self.rest()[..len];
        let next = Self {
            pos: self.pos + len,
            offset: self.offset + taken.chars().count(),
            ..self
        };
        (taken, next)
    }

    /// Input consumed between `self` and the later stream `after`.
    pub(crate) fn consumed_until(&self, after: &Self) -> &'a str {
        &self.text[self.pos..after.pos]
    }
}

impl fmt::Debug for Stream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("offset", &self.offset)
            .field("rest", &self.rest())
            .finish()
    }
}
