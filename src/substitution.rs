//! Substitution: a validated permutation of `[0, N)`.
//!
//! This is the primitive shared by rotors, the reflector and the plugboard.
//! Both directions are tabulated at construction so that `apply` and
//! `invert` are a single table lookup.

use crate::alphabet::{Alphabet, Letter};
use crate::error::EnigmaError;

/// A bijection over `[0, N)` together with its inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    forward: Vec<Letter>,
    inverse: Vec<Letter>,
}

impl Substitution {
    /// Builds a substitution from its forward table.
    ///
    /// `map[i]` is the image of letter `i`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] if `map` is empty, holds a value
    /// outside `[0, map.len())`, or maps two letters to the same image.
    pub fn new(map: Vec<Letter>) -> Result<Self, EnigmaError> {
        let n = map.len();
        if n == 0 {
            return Err(EnigmaError::wiring("substitution is empty"));
        }
        let mut inverse = vec![usize::MAX; n];
        for (i, &target) in map.iter().enumerate() {
            if target >= n {
                return Err(EnigmaError::wiring(format!(
                    "letter {} maps to {} which is outside [0, {})",
                    i, target, n
                )));
            }
            if inverse[target] != usize::MAX {
                return Err(EnigmaError::wiring(format!(
                    "not a bijection: letters {} and {} both map to {}",
                    inverse[target], i, target
                )));
            }
            inverse[target] = i;
        }
        Ok(Substitution {
            forward: map,
            inverse,
        })
    }

    /// Builds a substitution from a wiring word over `alphabet`.
    ///
    /// Symbol `i` of the alphabet maps to symbol `i` of `word`, so
    /// `"EKMFLGDQVZNTOWYHXUSPAIBRCJ"` reads A→E, B→K, C→M and so on.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] if `word` has the wrong length,
    /// uses a symbol outside the alphabet, or is not a permutation.
    pub fn from_word(alphabet: &Alphabet, word: &str) -> Result<Self, EnigmaError> {
        let map = alphabet.indices_of(word).map_err(|_| {
            EnigmaError::wiring(format!(
                "wiring {:?} uses symbols outside the alphabet {:?}",
                word,
                alphabet.symbols()
            ))
        })?;
        if map.len() != alphabet.len() {
            return Err(EnigmaError::wiring(format!(
                "wiring {:?} has {} symbols, alphabet has {}",
                word,
                map.len(),
                alphabet.len()
            )));
        }
        Self::new(map)
    }

    /// The identity permutation over `[0, n)`.
    pub fn identity(n: usize) -> Self {
        Substitution {
            forward: (0..n).collect(),
            inverse: (0..n).collect(),
        }
    }

    /// Returns `N`.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Always `false` for a constructed substitution.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Image of `letter`.
    ///
    /// # Panics
    /// Panics if `letter` is not in `[0, N)`.
    pub fn apply(&self, letter: Letter) -> Letter {
        self.forward[letter]
    }

    /// Pre-image of `letter`.
    ///
    /// # Panics
    /// Panics if `letter` is not in `[0, N)`.
    pub fn invert(&self, letter: Letter) -> Letter {
        self.inverse[letter]
    }

    /// Returns `true` if applying the substitution twice is the identity.
    pub fn is_involution(&self) -> bool {
        self.forward == self.inverse
    }

    /// Letters that map to themselves, in ascending order.
    pub fn fixed_points(&self) -> Vec<Letter> {
        self.forward
            .iter()
            .enumerate()
            .filter(|&(i, &t)| i == t)
            .map(|(i, _)| i)
            .collect()
    }

    /// The forward table.
    pub fn mapping(&self) -> &[Letter] {
        &self.forward
    }

    /// Renders the forward table as a wiring word over `alphabet`.
    pub fn to_word(&self, alphabet: &Alphabet) -> String {
        alphabet.word_of(&self.forward)
    }
}
