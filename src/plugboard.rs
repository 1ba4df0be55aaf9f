//! Plugboard: optional letter swaps applied before and after the rotors.

use crate::alphabet::Letter;
use crate::error::EnigmaError;
use crate::substitution::Substitution;

/// Steckerbrett. A partial involution over at most `N / 2` disjoint pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    wiring: Substitution,
}

impl Plugboard {
    /// A plugboard with no cables: every letter maps to itself.
    pub fn empty(n: usize) -> Self {
        Plugboard {
            wiring: Substitution::identity(n),
        }
    }

    /// Builds a plugboard over `[0, n)` from unordered letter pairs.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] if a letter is outside `[0, n)`,
    /// a letter is paired with itself, or a letter appears in two pairs.
    pub fn from_pairs(n: usize, pairs: &[(Letter, Letter)]) -> Result<Self, EnigmaError> {
        let mut map: Vec<Letter> = (0..n).collect();
        let mut used = vec![false; n];
        for &(a, b) in pairs {
            if a >= n || b >= n {
                return Err(EnigmaError::wiring(format!(
                    "plug ({}, {}) is outside [0, {})",
                    a, b, n
                )));
            }
            if a == b {
                return Err(EnigmaError::wiring(format!(
                    "plug pairs letter {} with itself",
                    a
                )));
            }
            for letter in [a, b] {
                if used[letter] {
                    return Err(EnigmaError::wiring(format!(
                        "letter {} appears in more than one plug pair",
                        letter
                    )));
                }
                used[letter] = true;
            }
            map[a] = b;
            map[b] = a;
        }
        Ok(Plugboard {
            wiring: Substitution::new(map)?,
        })
    }

    /// Cable partner of `letter`, or `letter` itself when unplugged.
    ///
    /// # Panics
    /// Panics if `letter` is not in `[0, N)`.
    pub fn substitute(&self, letter: Letter) -> Letter {
        self.wiring.apply(letter)
    }

    /// The connected pairs, each with its smaller letter first, in ascending order.
    pub fn pairs(&self) -> Vec<(Letter, Letter)> {
        self.wiring
            .mapping()
            .iter()
            .enumerate()
            .filter(|&(a, &b)| a < b)
            .map(|(a, &b)| (a, b))
            .collect()
    }
}
