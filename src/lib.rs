//! Enigma rotor cipher engine.
//!
//! Simulates the electromechanical Enigma: a plugboard, a stack of notched
//! rotors and a fixed reflector. The stepping controller reproduces the
//! historical machine's sequencing exactly, including the middle-rotor
//! double-step.
//!
//! The engine takes an already-assembled [`MachineConfig`] and single
//! characters. Where a config comes from (files, CLI, network) is up to the
//! host.
//!
//! # Architecture
//!
//! ```text
//! Substitution   (validated permutation of [0, N) plus its inverse)
//!     ↓ wrapped by
//! Rotor          (wiring + ring setting + moving position + notches)
//! Reflector      (fixed-point-free involution)
//! Plugboard      (disjoint letter swaps)
//!     ↓ composed by
//! RotorAssembly  (ordered rotors, simultaneous notch-driven stepping)
//! EnigmaMachine  (plugboard → rotors → reflector → rotors → plugboard)
//! ```
//!
//! # Examples
//!
//! Encrypt with one machine and decrypt with a second one set up identically:
//!
//! ```
//! use enigma_engine::{EnigmaMachine, Machine, MachineConfig, PlugPair, RotorConfig};
//!
//! let config = MachineConfig::new(
//!     vec![
//!         RotorConfig::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q", 0, 0),
//!         RotorConfig::new("AJDKSIRUXBLHWTMCQGZNPYFVOE", "E", 0, 0),
//!         RotorConfig::new("BDFHJLCPRTXVZNYEIWGAKMUSQO", "V", 0, 0),
//!     ],
//!     "YRUHQSLDPXNGOKMIEBFZCWVJAT",
//! )
//! .with_plugboard(vec![PlugPair('A', 'B'), PlugPair('C', 'D'), PlugPair('E', 'F')]);
//!
//! let mut encoder = EnigmaMachine::new(&config).unwrap();
//! let ciphertext = encoder.encipher("HELLOWORLD").unwrap();
//! assert_eq!(ciphertext, "IKACBBMTBF");
//!
//! let mut decoder = EnigmaMachine::new(&config).unwrap();
//! assert_eq!(decoder.encipher(&ciphertext).unwrap(), "HELLOWORLD");
//! ```
//!
//! Characters outside the alphabet are rejected without moving the rotors:
//!
//! ```
//! use enigma_engine::{EnigmaError, EnigmaMachine, Machine, MachineConfig, RotorConfig};
//!
//! let config = MachineConfig::new(
//!     vec![RotorConfig::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q", 0, 0)],
//!     "YRUHQSLDPXNGOKMIEBFZCWVJAT",
//! );
//! let mut machine = EnigmaMachine::new(&config).unwrap();
//!
//! assert_eq!(machine.process(' '), Err(EnigmaError::UnsupportedLetter(' ')));
//! assert_eq!(machine.positions(), vec![0]);
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod config;
pub mod error;
pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod rotor_assembly;
pub mod substitution;

mod machine;

pub use alphabet::{Alphabet, Letter};
pub use config::{MachineConfig, PlugPair, RotorConfig};
pub use error::EnigmaError;
pub use machine::{EnigmaMachine, Machine};
