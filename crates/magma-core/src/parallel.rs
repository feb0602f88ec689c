//! Fork-join parallel ECB processing.

use std::mem;

use rayon::prelude::*;

use crate::block::BLOCK_SIZE;
use crate::cipher::Magma;
use crate::error::MagmaError;
use crate::round::Direction;

impl Magma {
    /// Encrypts a buffer by fanning it out over `workers` concurrent chunk
    /// tasks. Byte-for-byte identical to [`encrypt`](Self::encrypt) for the
    /// same key and input.
    ///
    /// # Errors
    /// Returns [`MagmaError::BufferLength`] for a non-block-aligned buffer
    /// and [`MagmaError::WorkerCount`] when `workers` is zero.
    pub fn encrypt_parallel(
        &self,
        plaintext: &[u8],
        workers: usize,
    ) -> Result<Vec<u8>, MagmaError> {
        self.process_parallel(plaintext, workers, Direction::Encrypt)
    }

    /// Decrypts a buffer by fanning it out over `workers` concurrent chunk
    /// tasks. Byte-for-byte identical to [`decrypt`](Self::decrypt).
    ///
    /// # Errors
    /// Returns [`MagmaError::BufferLength`] for a non-block-aligned buffer
    /// and [`MagmaError::WorkerCount`] when `workers` is zero.
    pub fn decrypt_parallel(
        &self,
        ciphertext: &[u8],
        workers: usize,
    ) -> Result<Vec<u8>, MagmaError> {
        self.process_parallel(ciphertext, workers, Direction::Decrypt)
    }

    /// Splits the buffer into `workers` contiguous chunks and transforms
    /// them concurrently, joining before return.
    ///
    /// Every chunk is `len / workers` rounded down to whole blocks; the
    /// final chunk absorbs the remainder and may be larger than the others.
    /// Each chunk's output lands at the byte range it was read from.
    /// Because the round-key order is a pure function of the round number,
    /// the instance carries no mutable state and is shared across the chunk
    /// tasks as-is.
    fn process_parallel(
        &self,
        input: &[u8],
        workers: usize,
        direction: Direction,
    ) -> Result<Vec<u8>, MagmaError> {
        if input.len() % BLOCK_SIZE != 0 {
            return Err(MagmaError::BufferLength(input.len()));
        }
        if workers == 0 {
            return Err(MagmaError::WorkerCount);
        }

        let mut output = vec![0u8; input.len()];
        let chunk_len = input.len() / workers / BLOCK_SIZE * BLOCK_SIZE;

        let mut tasks: Vec<(&[u8], &mut [u8])> = Vec::with_capacity(workers);
        let mut src_rest = input;
        let mut dst_rest: &mut [u8] = &mut output;
        for worker in 0..workers {
            let take = if worker == workers - 1 {
                src_rest.len()
            } else {
                chunk_len
            };
            let (src, src_tail) = src_rest.split_at(take);
            let (dst, dst_tail) = mem::take(&mut dst_rest).split_at_mut(take);
            tasks.push((src, dst));
            src_rest = src_tail;
            dst_rest = dst_tail;
        }

        tasks
            .into_par_iter()
            .for_each(|(src, dst)| self.process_into(src, dst, direction));
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use crate::cipher::Magma;
    use crate::error::MagmaError;
    use crate::key::MagmaKey;
    use rand::RngCore;

    fn test_cipher() -> Magma {
        Magma::new(MagmaKey::from([0x5Au8; 32]))
    }

    #[test]
    fn matches_sequential_for_every_worker_count() {
        let cipher = test_cipher();
        let mut rng = rand::thread_rng();
        let mut buffer = vec![0u8; 10 * 8];
        rng.fill_bytes(&mut buffer);

        let expected_ct = cipher.encrypt(&buffer).unwrap();
        for workers in 1..=10 {
            assert_eq!(
                cipher.encrypt_parallel(&buffer, workers).unwrap(),
                expected_ct,
                "encrypt mismatch at {} workers",
                workers
            );
            assert_eq!(
                cipher.decrypt_parallel(&expected_ct, workers).unwrap(),
                buffer,
                "decrypt mismatch at {} workers",
                workers
            );
        }
    }

    #[test]
    fn oversubscribed_worker_count_still_matches() {
        // More workers than blocks degenerates to empty leading chunks and
        // one final chunk holding the whole buffer.
        let cipher = test_cipher();
        let buffer = [0x3Cu8; 3 * 8];
        let expected = cipher.encrypt(&buffer).unwrap();
        assert_eq!(cipher.encrypt_parallel(&buffer, 7).unwrap(), expected);
        assert_eq!(cipher.encrypt_parallel(&buffer, 64).unwrap(), expected);
    }

    #[test]
    fn empty_buffer_is_accepted() {
        let cipher = test_cipher();
        assert_eq!(cipher.encrypt_parallel(&[], 4).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn zero_workers_is_rejected() {
        let cipher = test_cipher();
        assert_eq!(
            cipher.encrypt_parallel(&[0u8; 16], 0),
            Err(MagmaError::WorkerCount)
        );
        assert_eq!(
            cipher.decrypt_parallel(&[0u8; 16], 0),
            Err(MagmaError::WorkerCount)
        );
    }

    #[test]
    fn unaligned_buffer_is_rejected_before_spawning() {
        let cipher = test_cipher();
        assert_eq!(
            cipher.encrypt_parallel(&[0u8; 12], 2),
            Err(MagmaError::BufferLength(12))
        );
    }
}
