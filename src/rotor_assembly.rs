//! RotorAssembly: the ordered rotor stack and its stepping controller.
//!
//! Rotors are held left to right as they sit in the machine: index 0 is the
//! leftmost (slowest) rotor, the last index is the rightmost (fastest) rotor.
//!
//! Stepping is decided for every rotor from the notch state captured before
//! any rotor moves on the current keystroke. Counting from the right
//! (`i = 0` is the rightmost rotor), rotor `i` steps when
//!
//! - `i == 0`, or
//! - rotor `i - 1` is at a notch, or
//! - rotor `i` is itself at a notch and is neither the rightmost nor the
//!   leftmost rotor (the double-step).

use crate::alphabet::Letter;
use crate::error::EnigmaError;
use crate::rotor::Rotor;

/// Non-empty, fixed-order stack of rotors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorAssembly {
    rotors: Vec<Rotor>,
}

impl RotorAssembly {
    /// Creates an assembly from rotors given left to right.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidConfig`] if `rotors` is empty or the
    /// rotors do not share one alphabet size.
    pub fn new(rotors: Vec<Rotor>) -> Result<Self, EnigmaError> {
        let first = rotors
            .first()
            .ok_or_else(|| EnigmaError::config("at least one rotor is required"))?;
        let n = first.len();
        if let Some((i, r)) = rotors.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(EnigmaError::config(format!(
                "rotor {} has {} contacts, rotor 0 has {}",
                i,
                r.len(),
                n
            )));
        }
        Ok(RotorAssembly { rotors })
    }

    /// Applies one keystroke's worth of stepping.
    pub fn step(&mut self) {
        let k = self.rotors.len();
        // Notch state indexed from the right, captured before anything moves.
        let at_notch: Vec<bool> = self.rotors.iter().rev().map(Rotor::is_at_notch).collect();
        let before = tracing::enabled!(tracing::Level::TRACE).then(|| self.positions());

        for i in 0..k {
            let steps = i == 0 || at_notch[i - 1] || (at_notch[i] && i != k - 1);
            if steps {
                self.rotors[k - 1 - i].step_once();
            }
        }

        if let Some(before) = before {
            tracing::trace!(
                before = ?before,
                after = ?self.positions(),
                "Rotor assembly stepped"
            );
        }
    }

    /// Passes `letter` through every rotor, rightmost first.
    pub fn encode_forward(&self, letter: Letter) -> Letter {
        self.rotors
            .iter()
            .rev()
            .fold(letter, |acc, rotor| rotor.forward(acc))
    }

    /// Passes `letter` back through every rotor, leftmost first.
    pub fn encode_backward(&self, letter: Letter) -> Letter {
        self.rotors
            .iter()
            .fold(letter, |acc, rotor| rotor.backward(acc))
    }

    /// Current window positions, left to right.
    pub fn positions(&self) -> Vec<Letter> {
        self.rotors.iter().map(Rotor::position).collect()
    }

    /// The rotors, left to right.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// Number of rotors (always at least one).
    pub fn len(&self) -> usize {
        self.rotors.len()
    }

    /// Always `false`: an assembly holds at least one rotor.
    pub fn is_empty(&self) -> bool {
        self.rotors.is_empty()
    }
}
