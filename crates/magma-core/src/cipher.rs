//! Magma key schedule and block encryption/decryption.

use crate::block::{join_block, split_block, Block, BLOCK_SIZE};
use crate::error::MagmaError;
use crate::key::{MagmaKey, RoundKeys};
use crate::round::{g, key_index, Direction, ROUNDS};
use crate::sbox::SubstitutionTable;

/// Derives the eight 32-bit round keys from a 256-bit master key.
///
/// Consecutive 4-byte groups are packed most significant byte first, in key
/// order, so round key `i` is a pure function of key bytes `4i..4i+4`.
pub fn expand_key(key: &MagmaKey) -> RoundKeys {
    let mut words = [0u32; 8];
    for (i, chunk) in key.0.chunks_exact(4).enumerate() {
        let bytes: [u8; 4] = chunk.try_into().expect("chunk length is four");
        words[i] = u32::from_be_bytes(bytes);
    }
    RoundKeys(words)
}

/// A Magma cipher instance: derived round keys plus the substitution table.
///
/// The schedule is derived once at construction and never mutated
/// afterwards; every transform borrows the instance immutably, so one
/// instance can be shared across threads and repeated calls are guaranteed
/// to see identical state.
#[derive(Clone, Debug)]
pub struct Magma {
    round_keys: RoundKeys,
    table: SubstitutionTable,
}

impl Magma {
    /// Creates an instance from a master key, with the standard
    /// substitution table.
    pub fn new(key: MagmaKey) -> Self {
        Self {
            round_keys: expand_key(&key),
            table: SubstitutionTable::default(),
        }
    }

    /// Replaces the substitution table as a unit.
    ///
    /// The table's shape is guaranteed by construction; permutation
    /// well-formedness is the caller's concern (see
    /// [`SubstitutionTable::validate_permutations`]).
    pub fn set_substitution_table(&mut self, table: SubstitutionTable) {
        self.table = table;
    }

    /// Returns the active substitution table.
    pub fn substitution_table(&self) -> &SubstitutionTable {
        &self.table
    }

    /// Runs the 32-round Feistel network over one pair of halves.
    ///
    /// The round adjacent to the ciphertext (the last when encrypting, the
    /// first when decrypting) keeps its role assignment instead of
    /// swapping, so the output pair is already ordered and no closing
    /// half-swap exists.
    fn feistel(&self, mut left: u32, mut right: u32, direction: Direction) -> (u32, u32) {
        for round in 0..ROUNDS {
            let key = self.round_keys.get(key_index(round, direction));
            match direction {
                Direction::Encrypt => {
                    let mixed = left ^ g(right, key, &self.table);
                    if round == ROUNDS - 1 {
                        left = mixed;
                    } else {
                        left = right;
                        right = mixed;
                    }
                }
                Direction::Decrypt => {
                    if round == 0 {
                        left ^= g(right, key, &self.table);
                    } else {
                        let mixed = right ^ g(left, key, &self.table);
                        right = left;
                        left = mixed;
                    }
                }
            }
        }
        (left, right)
    }

    fn transform_block(&self, block: &Block, direction: Direction) -> Block {
        let (left, right) = split_block(block);
        let (left, right) = self.feistel(left, right, direction);
        join_block(left, right)
    }

    /// Encrypts a single 8-byte block.
    pub fn encrypt_block(&self, block: &Block) -> Block {
        self.transform_block(block, Direction::Encrypt)
    }

    /// Decrypts a single 8-byte block.
    pub fn decrypt_block(&self, block: &Block) -> Block {
        self.transform_block(block, Direction::Decrypt)
    }

    /// ECB transform of a pre-validated, block-aligned buffer into
    /// `output`. Block `i` of the output occupies bytes `8i..8i+8`, exactly
    /// where its input block was read from.
    pub(crate) fn process_into(&self, input: &[u8], output: &mut [u8], direction: Direction) {
        debug_assert_eq!(input.len() % BLOCK_SIZE, 0);
        debug_assert_eq!(input.len(), output.len());
        for (src, dst) in input
            .chunks_exact(BLOCK_SIZE)
            .zip(output.chunks_exact_mut(BLOCK_SIZE))
        {
            let block: Block = src.try_into().expect("chunk length is eight");
            dst.copy_from_slice(&self.transform_block(&block, direction));
        }
    }

    pub(crate) fn process(
        &self,
        input: &[u8],
        direction: Direction,
    ) -> Result<Vec<u8>, MagmaError> {
        if input.len() % BLOCK_SIZE != 0 {
            return Err(MagmaError::BufferLength(input.len()));
        }
        let mut output = vec![0u8; input.len()];
        self.process_into(input, &mut output, direction);
        Ok(output)
    }

    /// Encrypts a buffer as a sequence of independent 8-byte blocks.
    ///
    /// # Errors
    /// Returns [`MagmaError::BufferLength`] unless the length is a multiple
    /// of 8; nothing is transformed in that case. An empty buffer yields an
    /// empty output.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, MagmaError> {
        self.process(plaintext, Direction::Encrypt)
    }

    /// Decrypts a buffer as a sequence of independent 8-byte blocks.
    ///
    /// # Errors
    /// Returns [`MagmaError::BufferLength`] unless the length is a multiple
    /// of 8.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, MagmaError> {
        self.process(ciphertext, Direction::Decrypt)
    }
}
