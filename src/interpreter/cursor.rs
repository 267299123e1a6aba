use crate::interpreter::token::Token;

/// An element type a [`Cursor`] can walk over.
///
/// Implementors decide what [`Cursor::current`] yields once the source is
/// exhausted, so lookahead is total at the boundary.
pub trait Symbol: Clone {
    /// Returns the sentinel that stands for "end of stream" in `source`.
    fn end_of(source: &[Self]) -> Self;
}

impl Symbol for char {
    fn end_of(_: &[Self]) -> Self {
        '\0'
    }
}

impl Symbol for Token {
    /// A token stream ends with its own trailing token, which the lexer
    /// guarantees is `End`. An empty stream gets a synthesized `End` at 0.
    fn end_of(source: &[Self]) -> Self {
        source.last().cloned().unwrap_or_else(|| Self::end(0))
    }
}

/// A position-tracking reader with one-symbol lookahead.
///
/// The cursor never fails: reading past the end returns the sentinel chosen
/// by [`Symbol::end_of`]. Every symbol passed over is appended to a record,
/// which the lexer uses to assemble literal text.
///
/// ## Example
/// ```
/// use calcfront::interpreter::cursor::Cursor;
///
/// let mut cursor = Cursor::new("1.5".chars().collect());
/// cursor.advance();
/// cursor.advance();
/// assert_eq!(*cursor.current(), '5');
/// assert_eq!(cursor.record(), &['1', '.']);
///
/// cursor.advance();
/// assert!(cursor.is_at_end());
/// assert_eq!(*cursor.current(), '\0');
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<T: Symbol> {
    source:   Vec<T>,
    end:      T,
    position: usize,
    record:   Vec<T>,
}

impl<T: Symbol> Cursor<T> {
    /// Creates a cursor positioned at the first symbol of `source`.
    #[must_use]
    pub fn new(source: Vec<T>) -> Self {
        let end = T::end_of(&source);
        Self { source,
               end,
               position: 0,
               record: Vec::new() }
    }

    /// Gets the symbol under the cursor, or the end sentinel past the end.
    #[must_use]
    pub fn current(&self) -> &T {
        self.source.get(self.position).unwrap_or(&self.end)
    }

    /// Records the current symbol and moves one position forward.
    pub fn advance(&mut self) {
        self.record.push(self.current().clone());
        self.position += 1;
    }

    /// Gets every symbol passed over since the last [`Cursor::clear_record`].
    #[must_use]
    pub fn record(&self) -> &[T] {
        &self.record
    }

    /// Empties the record.
    pub fn clear_record(&mut self) {
        self.record.clear();
    }

    /// Gets the current offset into the source.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` once every symbol of the source has been passed over.
    ///
    /// This is decided by position, not by comparing against the sentinel,
    /// so a source that happens to contain the sentinel value is still read
    /// in full.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }
}
