//! Ordered symbol sets for keyspace enumeration.
//!
//! An [`Alphabet`] is the set of symbols usable at each password position.
//! Its order is load-bearing: it defines the enumeration order of the whole
//! keyspace, with position 0 as the smallest symbol. Duplicate symbols are
//! harmless; they only make some candidates appear more than once.

/// An ordered, finite set of symbols with random access by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Create an alphabet from symbols in the given order.
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Self {
        Self { symbols: symbols.into_iter().collect() }
    }

    /// The alphanumeric alphabet `[a-z][A-Z][0-9]`, in that order.
    ///
    /// This matches the candidate set of the cipher-file format: passwords
    /// are drawn from lowercase letters, then uppercase letters, then
    /// digits.
    pub fn alphanumeric() -> Self {
        Self::new(('a'..='z').chain('A'..='Z').chain('0'..='9'))
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True if the alphabet has no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at `position`, or `None` past the end.
    pub fn symbol(&self, position: usize) -> Option<char> {
        self.symbols.get(position).copied()
    }

    /// All symbols in enumeration order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}
