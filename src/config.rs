//! MachineConfig: the plain-data description of a machine setup.
//!
//! A config is what an external loader hands to the engine and what the engine
//! hands back from [`Machine::config`](crate::Machine::config). It derives
//! `serde` traits so any format can carry it, but the engine itself never
//! reads or writes anything.

use serde::{Deserialize, Serialize};

use crate::alphabet::{Alphabet, Letter};
use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::rotor_assembly::RotorAssembly;
use crate::substitution::Substitution;

/// One rotor slot: wiring, turnover notches, ring setting and position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorConfig {
    /// Wiring word over the machine alphabet.
    pub wiring: String,
    /// Window letters at which this rotor carries its left neighbour.
    #[serde(default)]
    pub notches: String,
    /// Ring setting as an index in `[0, N)`.
    #[serde(default)]
    pub ring_setting: Letter,
    /// Window position as an index in `[0, N)`.
    #[serde(default)]
    pub position: Letter,
}

impl RotorConfig {
    pub fn new(
        wiring: impl Into<String>,
        notches: impl Into<String>,
        ring_setting: Letter,
        position: Letter,
    ) -> Self {
        RotorConfig {
            wiring: wiring.into(),
            notches: notches.into(),
            ring_setting,
            position,
        }
    }
}

/// An unordered plugboard cable between two symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlugPair(pub char, pub char);

/// Complete machine setup.
///
/// # Examples
///
/// ```
/// use enigma_engine::{MachineConfig, PlugPair, RotorConfig};
///
/// let config = MachineConfig::new(
///     vec![
///         RotorConfig::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q", 0, 0),
///         RotorConfig::new("AJDKSIRUXBLHWTMCQGZNPYFVOE", "E", 0, 0),
///         RotorConfig::new("BDFHJLCPRTXVZNYEIWGAKMUSQO", "V", 0, 0),
///     ],
///     "YRUHQSLDPXNGOKMIEBFZCWVJAT",
/// )
/// .with_plugboard(vec![PlugPair('A', 'B')]);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Alphabet symbols in order.
    #[serde(default = "default_alphabet")]
    pub alphabet: String,
    /// Rotors from left (slowest) to right (fastest).
    pub rotors: Vec<RotorConfig>,
    /// Reflector wiring word.
    pub reflector: String,
    #[serde(default)]
    pub plugboard: Vec<PlugPair>,
}

fn default_alphabet() -> String {
    Alphabet::default().symbols()
}

/// Validated components of a machine, ready to install.
#[derive(Debug, Clone)]
pub(crate) struct MachineParts {
    pub(crate) alphabet: Alphabet,
    pub(crate) assembly: RotorAssembly,
    pub(crate) reflector: Reflector,
    pub(crate) plugboard: Plugboard,
}

impl MachineConfig {
    /// A config over the Latin alphabet with an empty plugboard.
    pub fn new(rotors: Vec<RotorConfig>, reflector: impl Into<String>) -> Self {
        MachineConfig {
            alphabet: default_alphabet(),
            rotors,
            reflector: reflector.into(),
            plugboard: Vec::new(),
        }
    }

    pub fn with_alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    pub fn with_plugboard(mut self, plugboard: Vec<PlugPair>) -> Self {
        self.plugboard = plugboard;
        self
    }

    /// Runs every construction check without building a machine.
    ///
    /// # Errors
    /// Returns the same error [`EnigmaMachine::new`](crate::EnigmaMachine::new)
    /// would return for this config.
    pub fn validate(&self) -> Result<(), EnigmaError> {
        self.build().map(|_| ())
    }

    pub(crate) fn build(&self) -> Result<MachineParts, EnigmaError> {
        let alphabet = Alphabet::new(&self.alphabet)?;

        if self.rotors.is_empty() {
            return Err(EnigmaError::config("at least one rotor is required"));
        }
        let mut rotors = Vec::with_capacity(self.rotors.len());
        for (i, rc) in self.rotors.iter().enumerate() {
            let label = format!("rotor {}", i);
            rotors.push(build_rotor(&alphabet, rc).map_err(|e| prefix(e, &label))?);
        }
        let assembly = RotorAssembly::new(rotors)?;

        let reflector = Substitution::from_word(&alphabet, &self.reflector)
            .and_then(Reflector::new)
            .map_err(|e| prefix(e, "reflector"))?;

        let plugboard = if self.plugboard.is_empty() {
            Plugboard::empty(alphabet.len())
        } else {
            let plugboard = build_plugboard(&alphabet, &self.plugboard);
            plugboard.map_err(|e| prefix(e, "plugboard"))?
        };

        Ok(MachineParts {
            alphabet,
            assembly,
            reflector,
            plugboard,
        })
    }

    /// Captures installed components, with positions as they stand now.
    pub(crate) fn capture(parts: &MachineParts) -> Self {
        let alphabet = &parts.alphabet;
        let rotors = parts
            .assembly
            .rotors()
            .iter()
            .map(|r| RotorConfig {
                wiring: r.wiring().to_word(alphabet),
                notches: alphabet.word_of(r.notches()),
                ring_setting: r.ring_setting(),
                position: r.position(),
            })
            .collect();
        let plugboard = parts
            .plugboard
            .pairs()
            .into_iter()
            .map(|(a, b)| PlugPair(alphabet.symbol(a), alphabet.symbol(b)))
            .collect();
        MachineConfig {
            alphabet: alphabet.symbols(),
            rotors,
            reflector: parts.reflector.wiring().to_word(alphabet),
            plugboard,
        }
    }
}

fn build_rotor(alphabet: &Alphabet, rc: &RotorConfig) -> Result<Rotor, EnigmaError> {
    let wiring = Substitution::from_word(alphabet, &rc.wiring)?;
    let notches = alphabet.indices_of(&rc.notches).map_err(notch_error)?;
    Rotor::new(wiring, notches, rc.ring_setting, rc.position)
}

fn notch_error(err: EnigmaError) -> EnigmaError {
    EnigmaError::config(format!("notch list: {}", err))
}

fn build_plugboard(alphabet: &Alphabet, plugs: &[PlugPair]) -> Result<Plugboard, EnigmaError> {
    let mut pairs = Vec::with_capacity(plugs.len());
    for &PlugPair(a, b) in plugs {
        pairs.push((plug_letter(alphabet, a)?, plug_letter(alphabet, b)?));
    }
    Plugboard::from_pairs(alphabet.len(), &pairs)
}

/// Plug symbols outside the alphabet are wiring faults, not input faults.
fn plug_letter(alphabet: &Alphabet, c: char) -> Result<Letter, EnigmaError> {
    if !alphabet.contains(c) {
        let msg = format!("symbol {:?} is not in the alphabet", c);
        return Err(EnigmaError::wiring(msg));
    }
    alphabet.index_of(c)
}

/// Prepends the failing component to an error message, keeping its kind.
fn prefix(err: EnigmaError, component: &str) -> EnigmaError {
    match err {
        EnigmaError::InvalidWiring(msg) => {
            EnigmaError::InvalidWiring(format!("{}: {}", component, msg))
        }
        EnigmaError::InvalidConfig(msg) => {
            EnigmaError::InvalidConfig(format!("{}: {}", component, msg))
        }
        other => other,
    }
}
