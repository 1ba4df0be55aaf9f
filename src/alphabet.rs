//! Alphabet: the ordered symbol set every substitution indexes into.
//!
//! The engine never works on `char` internally. Each symbol is translated to a
//! [`Letter`] (its index in the alphabet) on the way in and back to a `char` on
//! the way out.

use crate::error::EnigmaError;

/// Index of a symbol within an [`Alphabet`], always in `[0, N)`.
pub type Letter = usize;

/// The 26-letter Latin alphabet used by the historical machines.
pub const LATIN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Ordered set of distinct symbols of size `N >= 2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::latin()
    }
}

impl Alphabet {
    /// Returns the `A..=Z` alphabet.
    pub fn latin() -> Self {
        Alphabet {
            symbols: LATIN.chars().collect(),
        }
    }

    /// Builds an alphabet from the symbols of `symbols`, in order.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidConfig`] if there are fewer than two
    /// symbols or a symbol is repeated.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_engine::Alphabet;
    ///
    /// let digits = Alphabet::new("0123456789").unwrap();
    /// assert_eq!(digits.len(), 10);
    /// assert!(Alphabet::new("AA").is_err());
    /// ```
    pub fn new(symbols: &str) -> Result<Self, EnigmaError> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.len() < 2 {
            return Err(EnigmaError::config(format!(
                "alphabet needs at least 2 symbols, got {}",
                symbols.len()
            )));
        }
        for (i, c) in symbols.iter().enumerate() {
            if symbols[..i].contains(c) {
                return Err(EnigmaError::config(format!(
                    "alphabet symbol {:?} appears more than once",
                    c
                )));
            }
        }
        Ok(Alphabet { symbols })
    }

    /// Returns the number of symbols `N`.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`: an alphabet holds at least two symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns `true` if `c` belongs to the alphabet.
    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    /// Translates a symbol to its [`Letter`] index.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnsupportedLetter`] if `c` is not in the alphabet.
    pub fn index_of(&self, c: char) -> Result<Letter, EnigmaError> {
        self.symbols
            .iter()
            .position(|&s| s == c)
            .ok_or(EnigmaError::UnsupportedLetter(c))
    }

    /// Translates a [`Letter`] back to its symbol.
    ///
    /// The index is taken mod `N`.
    pub fn symbol(&self, letter: Letter) -> char {
        self.symbols[letter % self.symbols.len()]
    }

    /// Translates every symbol of `word` to its index.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnsupportedLetter`] for the first symbol that is
    /// not in the alphabet.
    pub fn indices_of(&self, word: &str) -> Result<Vec<Letter>, EnigmaError> {
        word.chars().map(|c| self.index_of(c)).collect()
    }

    /// Renders a sequence of letters back into a `String`.
    pub fn word_of(&self, letters: &[Letter]) -> String {
        letters.iter().map(|&l| self.symbol(l)).collect()
    }

    /// Returns the symbols as a `String`, in order.
    pub fn symbols(&self) -> String {
        self.symbols.iter().collect()
    }
}
