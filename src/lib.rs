//! FF1 format-preserving encryption over an arbitrary radix, specified in
//! [NIST Special Publication 800-38G](https://nvlpubs.nist.gov/nistpubs/SpecialPublications/NIST.SP.800-38G.pdf).
//!
//! FF1 maps a numeral string in a given radix to a ciphertext numeral string
//! of the same length and radix, using AES as the underlying pseudorandom
//! primitive. The key is supplied per call as a 128-, 192- or 256-bit byte
//! string, together with a tweak of up to `max_tlen` bytes.
//!
//! # Example
//!
//! ```rust
//! use radix_ff1::FF1;
//!
//! const KEY: [u8; 16] = [
//!     0x2B, 0x7E, 0x15, 0x16, 0x28, 0xAE, 0xD2, 0xA6,
//!     0xAB, 0xF7, 0x15, 0x88, 0x09, 0xCF, 0x4F, 0x3C,
//! ];
//!
//! let ff1 = FF1::new(10, 8).unwrap();
//!
//! let plaintext = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
//! let ciphertext = ff1.encrypt(&KEY, &[], &plaintext).unwrap();
//! assert_eq!(ciphertext, [2, 4, 3, 3, 4, 7, 7, 4, 8, 4]);
//!
//! let recovered = ff1.decrypt(&KEY, &[], &ciphertext).unwrap();
//! assert_eq!(recovered, plaintext);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod ff1;
pub mod numeral;
mod prf;

pub use crate::{error::Error, ff1::FF1};

/// Minimum length of an input numeral string.
pub const MINLEN: usize = 2;

/// Maximum length of an input numeral string.
///
/// NIST SP 800-38G permits lengths up to 2^32; this implementation limits
/// inputs to 4096 numerals to keep the cost of a single call bounded.
pub const MAXLEN: usize = 4096;

/// Minimum radix for numeral strings.
pub const MINRADIX: u32 = 2;

/// Maximum radix for numeral strings.
pub const MAXRADIX: u32 = 65536;
