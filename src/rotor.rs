//! Rotor: a wired disc with a ring setting, a rotating position and notches.
//!
//! Position and ring setting combine into a single net offset
//! `(position - ring_setting) mod N` that is added before the wiring lookup
//! and subtracted after it.
//!
//! Notches are stored in window coordinates: a rotor is at a notch when its
//! current `position` is one of its notch letters. The ring setting does not
//! move the notch.

use crate::alphabet::Letter;
use crate::error::EnigmaError;
use crate::substitution::Substitution;

/// A single rotor with its mutable position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    wiring: Substitution,
    notches: Vec<Letter>,
    ring_setting: Letter,
    position: Letter,
}

impl Rotor {
    /// Creates a rotor.
    ///
    /// # Parameters
    /// - `wiring`: The internal cross-wiring (any bijection).
    /// - `notches`: Positions at which this rotor lets its left neighbour
    ///   step. Duplicates are ignored; an empty set disables turnover.
    /// - `ring_setting`: Ringstellung, in `[0, N)`.
    /// - `position`: Starting window position, in `[0, N)`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidConfig`] if the ring setting, the position
    /// or a notch lies outside `[0, N)`.
    pub fn new(
        wiring: Substitution,
        notches: Vec<Letter>,
        ring_setting: Letter,
        position: Letter,
    ) -> Result<Self, EnigmaError> {
        let n = wiring.len();
        if ring_setting >= n {
            return Err(EnigmaError::config(format!(
                "ring setting {} is outside [0, {})",
                ring_setting, n
            )));
        }
        if position >= n {
            return Err(EnigmaError::config(format!(
                "start position {} is outside [0, {})",
                position, n
            )));
        }
        if let Some(&bad) = notches.iter().find(|&&notch| notch >= n) {
            return Err(EnigmaError::config(format!(
                "notch {} is outside [0, {})",
                bad, n
            )));
        }
        let mut notches = notches;
        notches.sort_unstable();
        notches.dedup();
        Ok(Rotor {
            wiring,
            notches,
            ring_setting,
            position,
        })
    }

    /// Advances the position by one, wrapping at `N`.
    pub fn step_once(&mut self) {
        self.position = (self.position + 1) % self.wiring.len();
    }

    /// Returns `true` if the current position is a notch position.
    pub fn is_at_notch(&self) -> bool {
        self.notches.binary_search(&self.position).is_ok()
    }

    /// Enciphers `letter` on the way in (right to left through the stack).
    ///
    /// # Panics
    /// Panics if `letter` is not in `[0, N)`.
    pub fn forward(&self, letter: Letter) -> Letter {
        let n = self.contact(letter);
        let shift = self.offset();
        (self.wiring.apply((letter + shift) % n) + n - shift) % n
    }

    /// Enciphers `letter` on the way back (left to right). Exact inverse of
    /// [`forward`](Self::forward) at the same position.
    ///
    /// # Panics
    /// Panics if `letter` is not in `[0, N)`.
    pub fn backward(&self, letter: Letter) -> Letter {
        let n = self.contact(letter);
        let shift = self.offset();
        (self.wiring.invert((letter + shift) % n) + n - shift) % n
    }

    /// Returns `N` after checking that `letter` names a contact.
    fn contact(&self, letter: Letter) -> usize {
        let n = self.wiring.len();
        assert!(letter < n, "letter {} is outside [0, {})", letter, n);
        n
    }

    /// Net offset between the wiring core and the entry contacts.
    fn offset(&self) -> usize {
        let n = self.wiring.len();
        (self.position + n - self.ring_setting) % n
    }

    // --- Getters ---

    /// Current window position.
    pub fn position(&self) -> Letter {
        self.position
    }

    /// Ring setting.
    pub fn ring_setting(&self) -> Letter {
        self.ring_setting
    }

    /// Notch positions, ascending and without duplicates.
    pub fn notches(&self) -> &[Letter] {
        &self.notches
    }

    /// The rotor's wiring.
    pub fn wiring(&self) -> &Substitution {
        &self.wiring
    }

    /// Alphabet size `N`.
    pub fn len(&self) -> usize {
        self.wiring.len()
    }

    /// Always `false` for a constructed rotor.
    pub fn is_empty(&self) -> bool {
        self.wiring.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;

    const ROTOR_I: &str = "EKMFLGDQVZNTOWYHXUSPAIBRCJ";

    fn rotor_i(ring: Letter, pos: Letter) -> Rotor {
        let wiring = Substitution::from_word(&Alphabet::latin(), ROTOR_I).unwrap();
        Rotor::new(wiring, vec![16], ring, pos).unwrap()
    }

    #[test]
    fn test_new_stores_settings() {
        let r = rotor_i(3, 7);
        assert_eq!(r.ring_setting(), 3);
        assert_eq!(r.position(), 7);
        assert_eq!(r.notches(), &[16]);
        assert_eq!(r.len(), 26);
    }

    #[test]
    fn test_rejects_out_of_range_settings() {
        let w = Substitution::identity(26);
        assert!(matches!(
            Rotor::new(w.clone(), vec![], 26, 0),
            Err(EnigmaError::InvalidConfig(_))
        ));
        assert!(matches!(
            Rotor::new(w.clone(), vec![], 0, 26),
            Err(EnigmaError::InvalidConfig(_))
        ));
        assert!(matches!(
            Rotor::new(w, vec![30], 0, 0),
            Err(EnigmaError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_notches_are_sorted_and_deduplicated() {
        let r = Rotor::new(Substitution::identity(26), vec![25, 12, 25], 0, 0).unwrap();
        assert_eq!(r.notches(), &[12, 25]);
    }

    #[test]
    fn test_step_once_wraps() {
        let mut r = rotor_i(0, 24);
        r.step_once();
        assert_eq!(r.position(), 25);
        r.step_once();
        assert_eq!(r.position(), 0);
    }

    #[test]
    fn test_is_at_notch() {
        let mut r = rotor_i(0, 15);
        assert!(!r.is_at_notch());
        r.step_once();
        assert!(r.is_at_notch(), "rotor I turns over at Q");
        r.step_once();
        assert!(!r.is_at_notch());
    }

    #[test]
    fn test_ring_setting_does_not_move_notch() {
        let r = rotor_i(5, 16);
        assert!(r.is_at_notch());
    }

    #[test]
    fn test_no_notches_never_at_notch() {
        let mut r = Rotor::new(Substitution::identity(26), vec![], 0, 0).unwrap();
        for _ in 0..26 {
            assert!(!r.is_at_notch());
            r.step_once();
        }
    }

    #[test]
    fn test_forward_at_zero_is_plain_wiring() {
        let r = rotor_i(0, 0);
        assert_eq!(r.forward(0), 4, "A -> E");
        assert_eq!(r.backward(4), 0);
    }

    #[test]
    fn test_forward_with_position() {
        // Position B: A enters the core at B, K comes out, shifted back to J.
        let r = rotor_i(0, 1);
        assert_eq!(r.forward(0), 9);
    }

    #[test]
    fn test_forward_with_ring_setting() {
        // Ring B at position A: offset -1, A enters at Z -> J, shifted to K.
        let r = rotor_i(1, 0);
        assert_eq!(r.forward(0), 10);
    }

    #[test]
    fn test_equal_position_and_ring_cancel() {
        let plain = rotor_i(0, 0);
        let shifted = rotor_i(9, 9);
        for x in 0..26 {
            assert_eq!(plain.forward(x), shifted.forward(x));
        }
    }

    #[test]
    fn test_backward_inverts_forward_at_every_offset() {
        for ring in [0, 1, 13, 25] {
            for pos in 0..26 {
                let r = rotor_i(ring, pos);
                for x in 0..26 {
                    assert_eq!(
                        r.backward(r.forward(x)),
                        x,
                        "ring={}, pos={}, letter={}",
                        ring,
                        pos,
                        x
                    );
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "outside [0, 26)")]
    fn test_forward_outside_range_panics() {
        rotor_i(0, 25).forward(usize::MAX);
    }

    #[test]
    #[should_panic(expected = "outside [0, 26)")]
    fn test_backward_outside_range_panics() {
        rotor_i(3, 0).backward(26);
    }
}
