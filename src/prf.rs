use aes::{Aes128, Aes192, Aes256};
use cipher::{generic_array::GenericArray, BlockEncrypt, NewBlockCipher};

use crate::Error;

/// Size of the block cipher's block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// The FF3-1 round function: CIPH_{REVB(K)} applied to byte-reversed blocks.
///
/// FF3-1 numbers bytes big-endian while the key and block are fed to AES in
/// the opposite order, so the key, the input block, and the output block are
/// all byte-reversed around the cipher call.
#[derive(Clone)]
pub enum PRF {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl PRF {
    /// Expands REVB(`key`) for AES-128, AES-192, or AES-256 depending on its
    /// length.
    pub fn new(key: &[u8]) -> Result<Self, Error> {
        let mut reversed = [0; 32];
        let reversed = match key.len() {
            16 | 24 | 32 => &mut reversed[..key.len()],
            len => return Err(Error::InvalidKey { len }),
        };
        reversed.copy_from_slice(key);
        reversed.reverse();

        let prf = match reversed.len() {
            16 => PRF::Aes128(Aes128::new(GenericArray::from_slice(reversed))),
            24 => PRF::Aes192(Aes192::new(GenericArray::from_slice(reversed))),
            _ => PRF::Aes256(Aes256::new(GenericArray::from_slice(reversed))),
        };
        Ok(prf)
    }

    /// Key size in bits.
    pub fn key_bits(&self) -> usize {
        match self {
            PRF::Aes128(_) => 128,
            PRF::Aes192(_) => 192,
            PRF::Aes256(_) => 256,
        }
    }

    /// S = REVB(CIPH_{REVB(K)}(REVB(P))).
    pub fn ciph(&self, p: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let mut block = GenericArray::clone_from_slice(p);
        block.reverse();
        match self {
            PRF::Aes128(c) => c.encrypt_block(&mut block),
            PRF::Aes192(c) => c.encrypt_block(&mut block),
            PRF::Aes256(c) => c.encrypt_block(&mut block),
        }
        block.reverse();

        let mut s = [0; BLOCK_SIZE];
        s.copy_from_slice(&block);
        s
    }
}
