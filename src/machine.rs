//! Machine: the engine facade.
//!
//! Wires Plugboard → RotorAssembly (forward) → Reflector → RotorAssembly
//! (backward) → Plugboard behind the [`Machine`] trait. Rotors step before
//! every keystroke, so the machine is a stream cipher: the same letter typed
//! twice encrypts differently.

use crate::alphabet::{Alphabet, Letter};
use crate::config::{MachineConfig, MachineParts};
use crate::error::EnigmaError;

/// The capability shared by every machine variant.
///
/// Variants may differ in rotor count or alphabet size; callers only rely on
/// these operations.
pub trait Machine {
    /// Steps the rotors and enciphers one character.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnsupportedLetter`] if `input` is not in the
    /// alphabet. A rejected character leaves every rotor where it was.
    fn process(&mut self, input: char) -> Result<char, EnigmaError>;

    /// Replaces the whole setup and resets positions to those in `config`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] or [`EnigmaError::InvalidConfig`]
    /// if `config` is invalid. On error the current setup is kept.
    fn set_config(&mut self, config: &MachineConfig) -> Result<(), EnigmaError>;

    /// Returns the current setup, with rotor positions as they stand now.
    fn config(&self) -> MachineConfig;

    /// The alphabet accepted by [`process`](Self::process).
    fn alphabet(&self) -> &Alphabet;

    /// Enciphers every character of `text` in order.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnsupportedLetter`] for the first character not
    /// in the alphabet. In that case nothing is processed and no rotor moves.
    fn encipher(&mut self, text: &str) -> Result<String, EnigmaError> {
        if let Some(bad) = text.chars().find(|&c| !self.alphabet().contains(c)) {
            return Err(EnigmaError::UnsupportedLetter(bad));
        }
        text.chars().map(|c| self.process(c)).collect()
    }
}

/// Enigma engine with any rotor count and alphabet.
///
/// # Examples
///
/// ```
/// use enigma_engine::{EnigmaMachine, Machine, MachineConfig, RotorConfig};
///
/// let config = MachineConfig::new(
///     vec![
///         RotorConfig::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q", 0, 0),
///         RotorConfig::new("AJDKSIRUXBLHWTMCQGZNPYFVOE", "E", 0, 0),
///         RotorConfig::new("BDFHJLCPRTXVZNYEIWGAKMUSQO", "V", 0, 0),
///     ],
///     "YRUHQSLDPXNGOKMIEBFZCWVJAT",
/// );
///
/// let mut sender = EnigmaMachine::new(&config).unwrap();
/// let ciphertext = sender.encipher("AAAAA").unwrap();
/// assert_eq!(ciphertext, "BDZGO");
///
/// let mut receiver = EnigmaMachine::new(&config).unwrap();
/// assert_eq!(receiver.encipher(&ciphertext).unwrap(), "AAAAA");
/// ```
#[derive(Debug, Clone)]
pub struct EnigmaMachine {
    parts: MachineParts,
}

impl EnigmaMachine {
    /// Builds a machine from `config`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] or [`EnigmaError::InvalidConfig`]
    /// if `config` is invalid.
    pub fn new(config: &MachineConfig) -> Result<Self, EnigmaError> {
        let parts = Self::load(config)?;
        Ok(EnigmaMachine { parts })
    }

    /// Current rotor positions, left to right.
    pub fn positions(&self) -> Vec<Letter> {
        self.parts.assembly.positions()
    }

    /// Number of rotors installed.
    pub fn num_rotors(&self) -> usize {
        self.parts.assembly.len()
    }

    /// Validates `config` and logs the outcome.
    fn load(config: &MachineConfig) -> Result<MachineParts, EnigmaError> {
        match config.build() {
            Ok(parts) => {
                tracing::debug!(
                    rotors = parts.assembly.len(),
                    alphabet_len = parts.alphabet.len(),
                    plug_pairs = parts.plugboard.pairs().len(),
                    positions = ?parts.assembly.positions(),
                    "Machine configured"
                );
                Ok(parts)
            }
            Err(err) => {
                tracing::debug!(error = %err, "Machine configuration rejected");
                Err(err)
            }
        }
    }

    /// Full electrical path for one already-validated letter.
    fn encode(&mut self, letter: Letter) -> Letter {
        let parts = &mut self.parts;
        parts.assembly.step();

        let x = parts.plugboard.substitute(letter);
        let x = parts.assembly.encode_forward(x);
        let x = parts.reflector.substitute(x);
        let x = parts.assembly.encode_backward(x);
        parts.plugboard.substitute(x)
    }
}

impl Machine for EnigmaMachine {
    fn process(&mut self, input: char) -> Result<char, EnigmaError> {
        let letter = self.parts.alphabet.index_of(input)?;
        let out = self.encode(letter);
        Ok(self.parts.alphabet.symbol(out))
    }

    fn set_config(&mut self, config: &MachineConfig) -> Result<(), EnigmaError> {
        self.parts = Self::load(config)?;
        Ok(())
    }

    fn config(&self) -> MachineConfig {
        MachineConfig::capture(&self.parts)
    }

    fn alphabet(&self) -> &Alphabet {
        &self.parts.alphabet
    }
}
