//! Block representation helpers.

/// Magma block of 8 bytes.
pub type Block = [u8; 8];

/// Size of a cipher block in bytes.
pub const BLOCK_SIZE: usize = 8;

/// Splits a block into its 32-bit halves, most significant byte first.
#[inline]
pub fn split_block(block: &Block) -> (u32, u32) {
    let (hi, lo) = block.split_at(4);
    (
        u32::from_be_bytes(hi.try_into().expect("half is four bytes")),
        u32::from_be_bytes(lo.try_into().expect("half is four bytes")),
    )
}

/// Reassembles a block from its halves; exact inverse of [`split_block`].
#[inline]
pub fn join_block(left: u32, right: u32) -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    block[..4].copy_from_slice(&left.to_be_bytes());
    block[4..].copy_from_slice(&right.to_be_bytes());
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_packs_most_significant_byte_first() {
        let block = [0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54, 0x32, 0x10];
        assert_eq!(split_block(&block), (0xFEDC_BA98, 0x7654_3210));
    }

    #[test]
    fn join_is_the_exact_inverse() {
        let block = join_block(0xFEDC_BA98, 0x7654_3210);
        assert_eq!(block, [0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54, 0x32, 0x10]);
        assert_eq!(split_block(&block), (0xFEDC_BA98, 0x7654_3210));
    }
}
