//! Reflector: the fixed, fixed-point-free involution at the end of the stack.

use crate::alphabet::Letter;
use crate::error::EnigmaError;
use crate::substitution::Substitution;

/// Umkehrwalze. Sends the signal back through the rotors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    wiring: Substitution,
}

impl Reflector {
    /// Wraps `wiring` as a reflector.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] if `wiring` is not an involution
    /// or maps any letter to itself.
    pub fn new(wiring: Substitution) -> Result<Self, EnigmaError> {
        if !wiring.is_involution() {
            return Err(EnigmaError::wiring("reflector wiring is not an involution"));
        }
        if let Some(&fixed) = wiring.fixed_points().first() {
            return Err(EnigmaError::wiring(format!(
                "reflector maps letter {} to itself",
                fixed
            )));
        }
        Ok(Reflector { wiring })
    }

    /// Reflected image of `letter`.
    ///
    /// # Panics
    /// Panics if `letter` is not in `[0, N)`.
    pub fn substitute(&self, letter: Letter) -> Letter {
        self.wiring.apply(letter)
    }

    pub fn wiring(&self) -> &Substitution {
        &self.wiring
    }
}
