//! Key types for Magma.

/// Magma 256-bit master key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MagmaKey(pub [u8; 32]);

impl From<[u8; 32]> for MagmaKey {
    fn from(value: [u8; 32]) -> Self {
        Self(value)
    }
}

/// Derived round keys for Magma.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [u32; 8]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=7).
    #[inline]
    pub fn get(&self, index: usize) -> u32 {
        self.0[index]
    }
}
