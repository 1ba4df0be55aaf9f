//! Historical wirings shared by the integration tests.

#![allow(dead_code)]

use enigma_engine::{MachineConfig, RotorConfig};

pub const ROTOR_I: (&str, &str) = ("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q");
pub const ROTOR_II: (&str, &str) = ("AJDKSIRUXBLHWTMCQGZNPYFVOE", "E");
pub const ROTOR_III: (&str, &str) = ("BDFHJLCPRTXVZNYEIWGAKMUSQO", "V");
pub const ROTOR_IV: (&str, &str) = ("ESOVPZJAYQUIRHXLNFTGKDCMWB", "J");
pub const ROTOR_V: (&str, &str) = ("VZBRGITYUPSDNHLXAWMJQOFECK", "Z");

pub const UKW_B: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";
pub const UKW_C: &str = "FVPJIAOYEDRZXWGCTKUQSBNMHL";

/// Builds a Latin-alphabet config from `(wiring, notches)` rotors left to right.
pub fn config(
    rotors: &[(&str, &str)],
    reflector: &str,
    rings: &[usize],
    positions: &[usize],
) -> MachineConfig {
    let rotors = rotors
        .iter()
        .zip(rings.iter().zip(positions.iter()))
        .map(|(&(wiring, notches), (&ring, &pos))| RotorConfig::new(wiring, notches, ring, pos))
        .collect();
    MachineConfig::new(rotors, reflector)
}

/// Rotors I, II, III with reflector B.
pub fn wehrmacht(rings: [usize; 3], positions: [usize; 3]) -> MachineConfig {
    config(&[ROTOR_I, ROTOR_II, ROTOR_III], UKW_B, &rings, &positions)
}

/// Letter index of an uppercase Latin letter.
pub fn idx(c: char) -> usize {
    (c as u8 - b'A') as usize
}

/// Uppercase Latin letter for an index, taken mod 26.
pub fn letter(x: usize) -> char {
    (b'A' + (x % 26) as u8) as char
}

/// Window letters for a position vector.
pub fn window(positions: &[usize]) -> String {
    positions.iter().map(|&p| letter(p)).collect()
}
