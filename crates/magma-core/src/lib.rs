//! Magma (GOST R 34.12-2015) 64-bit block cipher.
//!
//! This crate mirrors the published standard and provides:
//! - Key schedule for the 256-bit master key.
//! - Single-block encryption and decryption.
//! - Sequential and fork-join parallel ECB processing of block-aligned
//!   buffers.
//! - A replaceable nibble substitution layer with an opt-in permutation
//!   check.
//!
//! The implementation aims for clarity and bit-exactness rather than
//! constant-time guarantees; it should not be treated as side-channel
//! hardened, and raw ECB offers no confidentiality for structured data on
//! its own.
//!
//! # Examples
//!
//! ```
//! use magma_core::{Magma, MagmaKey};
//!
//! let cipher = Magma::new(MagmaKey::from([0x11u8; 32]));
//!
//! let plaintext = *b"exactly 16 bytes";
//! let ciphertext = cipher.encrypt(&plaintext).unwrap();
//! let recovered = cipher.decrypt(&ciphertext).unwrap();
//! assert_eq!(recovered, plaintext);
//! ```
//!
//! Large buffers can be fanned out across worker tasks; the result is
//! byte-identical to the sequential transform:
//!
//! ```
//! use magma_core::{Magma, MagmaKey};
//!
//! let cipher = Magma::new(MagmaKey::from([0x22u8; 32]));
//! let buffer = vec![0u8; 1024];
//!
//! let sequential = cipher.encrypt(&buffer).unwrap();
//! let parallel = cipher.encrypt_parallel(&buffer, 4).unwrap();
//! assert_eq!(sequential, parallel);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod key;
mod parallel;
mod round;
mod sbox;

pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::cipher::{expand_key, Magma};
pub use crate::error::MagmaError;
pub use crate::key::{MagmaKey, RoundKeys};
pub use crate::sbox::SubstitutionTable;
