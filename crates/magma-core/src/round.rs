//! Round primitives: the round function and the round-key order.

use crate::sbox::SubstitutionTable;

/// Number of Feistel rounds.
pub const ROUNDS: usize = 32;

/// Transform direction selector for the Feistel driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Plaintext to ciphertext.
    Encrypt,
    /// Ciphertext to plaintext.
    Decrypt,
}

/// Substitutes the eight nibbles of a word, most significant first, through
/// table rows 0..=7 and reassembles them in the same order.
#[inline]
pub fn substitute_word(word: u32, table: &SubstitutionTable) -> u32 {
    let mut out = 0u32;
    for row in 0..8 {
        let shift = 28 - 4 * row;
        let nibble = ((word >> shift) & 0xF) as u8;
        out |= u32::from(table.substitute(row, nibble)) << shift;
    }
    out
}

/// The round function g: wrapping addition of the round key, nibble
/// substitution, then an 11-bit left rotation. Identical in both
/// directions; only its invocation differs.
#[inline]
pub fn g(half: u32, round_key: u32, table: &SubstitutionTable) -> u32 {
    substitute_word(half.wrapping_add(round_key), table).rotate_left(11)
}

/// Index into the round-key schedule consumed at `round`.
///
/// Encryption walks K1..K8 three times and then K8..K1 once; decryption is
/// the exact mirror (K1..K8 once, then K8..K1 three times). The order is a
/// pure function of the round number and direction, so the schedule itself
/// is never reordered and stays shareable across threads.
#[inline]
pub fn key_index(round: usize, direction: Direction) -> usize {
    let reversal = match direction {
        Direction::Encrypt => 24,
        Direction::Decrypt => 8,
    };
    if round < reversal {
        round % 8
    } else {
        7 - round % 8
    }
}
