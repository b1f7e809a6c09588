//! The pseudorandom function layer of FF1, built on AES-128/192/256.
//!
//! `prf` is the CBC-MAC construction of NIST SP 800-38G Algorithm 6, chained
//! by hand over the single-block cipher. `prf2` computes the same value by
//! delegating to the `cbc` crate with a zero IV and no padding, keeping only
//! the final ciphertext block. The two are bit-identical for every valid
//! input, which is the property that justifies trusting the hand-rolled
//! chain.

use aes::cipher::{
    consts::U16, generic_array::GenericArray, BlockCipher, BlockEncrypt, BlockEncryptMut,
    BlockSizeUser, KeyInit, KeyIvInit,
};
use aes::{Aes128, Aes192, Aes256, Block};

use crate::{Error, MAXLEN};

/// Single-block AES keyed by a 128-, 192- or 256-bit key supplied at
/// runtime.
enum AesCipher {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl AesCipher {
    fn new(key: &[u8]) -> Result<Self, Error> {
        match key.len() {
            16 => Ok(Self::Aes128(Aes128::new(GenericArray::from_slice(key)))),
            24 => Ok(Self::Aes192(Aes192::new(GenericArray::from_slice(key)))),
            32 => Ok(Self::Aes256(Aes256::new(GenericArray::from_slice(key)))),
            len => Err(Error::InvalidKeyLength(len)),
        }
    }

    fn encrypt_block(&self, block: &mut Block) {
        match self {
            Self::Aes128(cipher) => cipher.encrypt_block(block),
            Self::Aes192(cipher) => cipher.encrypt_block(block),
            Self::Aes256(cipher) => cipher.encrypt_block(block),
        }
    }
}

fn check_blocks(x: &[u8]) -> Result<(), Error> {
    if x.is_empty() || x.len() > MAXLEN {
        return Err(Error::InputLenOutOfRange(x.len()));
    }
    if x.len() % 16 != 0 {
        return Err(Error::InvalidBlockLength(x.len()));
    }
    Ok(())
}

/// NIST SP 800-38G Algorithm 6: `PRF(X)`.
///
/// Splits `x` into 16-byte blocks and folds them into a zero chaining block
/// with `y = CIPH_K(y xor block)`, returning the final chaining value.
///
/// `x` must be a positive multiple of 16 bytes, at most
/// [`MAXLEN`](crate::MAXLEN).
pub(crate) fn prf(key: &[u8], x: &[u8]) -> Result<[u8; 16], Error> {
    check_blocks(x)?;
    let cipher = AesCipher::new(key)?;

    let mut y = Block::default();
    for block in x.chunks_exact(16) {
        for (lhs, &rhs) in y.iter_mut().zip(block) {
            *lhs ^= rhs;
        }
        cipher.encrypt_block(&mut y);
    }
    Ok(y.into())
}

/// Equivalent rendition of `PRF(X)` through CBC-mode encryption.
///
/// Encrypts `x` under CBC with a zero IV and no padding, then returns the
/// last ciphertext block. Produces the same output as [`prf`] for every
/// valid input.
pub(crate) fn prf2(key: &[u8], x: &[u8]) -> Result<[u8; 16], Error> {
    check_blocks(x)?;
    match key.len() {
        16 => cbc_last::<Aes128>(key, x),
        24 => cbc_last::<Aes192>(key, x),
        32 => cbc_last::<Aes256>(key, x),
        len => Err(Error::InvalidKeyLength(len)),
    }
}

fn cbc_last<C>(key: &[u8], x: &[u8]) -> Result<[u8; 16], Error>
where
    C: BlockEncryptMut + BlockCipher + KeyInit + BlockSizeUser<BlockSize = U16>,
{
    let mut encryptor = cbc::Encryptor::<C>::new_from_slices(key, &[0_u8; 16])
        .map_err(|_| Error::InvalidKeyLength(key.len()))?;

    let mut buf = x.to_vec();
    for block in buf.chunks_exact_mut(16) {
        encryptor.encrypt_block_mut(Block::from_mut_slice(block));
    }

    let mut last = [0_u8; 16];
    last.copy_from_slice(&buf[buf.len() - 16..]);
    Ok(last)
}

/// `CIPH_K(X)`: one invocation of the block cipher on exactly one 16-byte
/// block.
pub(crate) fn ciph(key: &[u8], x: &[u8]) -> Result<[u8; 16], Error> {
    if x.len() != 16 {
        return Err(Error::InvalidBlockLength(x.len()));
    }
    let cipher = AesCipher::new(key)?;

    let mut block = Block::clone_from_slice(x);
    cipher.encrypt_block(&mut block);
    Ok(block.into())
}
