use num_bigint::{BigInt, BigUint};
use tracing::{debug, trace};

use crate::numeral::{
    bytestring, bytestring_big, concatenate, log2, modulo, modulo_big, num, num_radix,
    numerals_to_string, str_radix, to_hex, xor,
};
use crate::prf::{ciph, prf, prf2};
use crate::{Error, MAXLEN, MAXRADIX, MINLEN, MINRADIX};

/// A struct for performing FF1 encryption in an arbitrary radix.
///
/// An instance carries only its immutable `(radix, max_tlen)` configuration;
/// the AES key and the tweak are supplied per call, and every call is a pure
/// deterministic function of its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FF1 {
    radix: u32,
    max_tlen: usize,
}

/// Per-call quantities of steps 1-5 that are identical across all ten
/// rounds.
struct Params {
    u: usize,
    v: usize,
    b: usize,
    d: usize,
    p: [u8; 16],
}

impl FF1 {
    /// Creates an [`FF1`] instance for a given radix and maximum tweak
    /// length in bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RadixOutOfRange`] if `radix` is outside
    /// `[MINRADIX, MAXRADIX]` and [`Error::MaxTweakLenOutOfRange`] if
    /// `max_tlen` exceeds [`MAXLEN`](crate::MAXLEN).
    pub fn new(radix: u32, max_tlen: usize) -> Result<Self, Error> {
        if !(MINRADIX..=MAXRADIX).contains(&radix) {
            return Err(Error::RadixOutOfRange(radix));
        }
        if max_tlen > MAXLEN {
            return Err(Error::MaxTweakLenOutOfRange(max_tlen));
        }
        Ok(Self { radix, max_tlen })
    }

    /// The radix this instance operates in.
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// The maximum tweak length in bytes accepted by this instance.
    pub fn max_tlen(&self) -> usize {
        self.max_tlen
    }

    /// NIST SP 800-38G Algorithm 7: `FF1.Encrypt(K, T, X)`.
    ///
    /// Encrypts a plaintext numeral string into a ciphertext numeral string
    /// of the same length and radix.
    ///
    /// # Errors
    ///
    /// All preconditions are checked before any round work: the key must be
    /// 16, 24 or 32 bytes, the tweak no longer than `max_tlen`, the message
    /// length within `[MINLEN, MAXLEN]` with `radix^len >= 100`, and every
    /// numeral a digit in the radix.
    pub fn encrypt(&self, key: &[u8], tweak: &[u8], x: &[u16]) -> Result<Vec<u16>, Error> {
        let params = self.setup(key, tweak, x)?;
        debug!(radix = self.radix, n = x.len(), t = tweak.len(), "ff1 encrypt");
        trace!(x = %numerals_to_string(x), "plaintext");

        // 2. A = X[..u]; B = X[u..]
        let mut a = x[..params.u].to_vec();
        let mut b = x[params.u..].to_vec();

        let radix_big = BigUint::from(self.radix);
        // 6. ten Feistel rounds, forward
        for i in 0..10_u8 {
            let y = self.round_value(key, tweak, &params, i, &b, prf)?;

            // 6.v. m = u for even rounds, v for odd
            let m = if i % 2 == 0 { params.u } else { params.v };
            // 6.vi. c = (NUM_radix(A) + y) mod radix^m
            let c = modulo_big(
                &(BigInt::from(num_radix(&a, self.radix)?) + BigInt::from(y)),
                &BigInt::from(radix_big.pow(m as u32)),
            )?;
            // 6.vii-ix. C = STR^m_radix(c); A = B; B = C
            let c_digits = str_radix(&c, self.radix, m)?;
            a = b;
            b = c_digits;
        }

        // 7. return A || B
        Ok(concatenate(&a, &b))
    }

    /// NIST SP 800-38G Algorithm 8: `FF1.Decrypt(K, T, X)`.
    ///
    /// Decrypts a ciphertext numeral string back into a plaintext numeral
    /// string of the same length and radix. The rounds run in reverse order
    /// with the half roles swapped, which inverts the Feistel network.
    ///
    /// # Errors
    ///
    /// Same preconditions as [`FF1::encrypt`].
    pub fn decrypt(&self, key: &[u8], tweak: &[u8], x: &[u16]) -> Result<Vec<u16>, Error> {
        let params = self.setup(key, tweak, x)?;
        debug!(radix = self.radix, n = x.len(), t = tweak.len(), "ff1 decrypt");
        trace!(x = %numerals_to_string(x), "ciphertext");

        // 2. A = X[..u]; B = X[u..]
        let mut a = x[..params.u].to_vec();
        let mut b = x[params.u..].to_vec();

        let radix_big = BigUint::from(self.radix);
        // 6. ten Feistel rounds, backward; prf2 here and prf on the encrypt
        // path exercises the equivalence of the two PRF constructions
        for i in (0..10_u8).rev() {
            let y = self.round_value(key, tweak, &params, i, &a, prf2)?;

            // 6.v. m = u for even rounds, v for odd
            let m = if i % 2 == 0 { params.u } else { params.v };
            // 6.vi. c = (NUM_radix(B) - y) mod radix^m; the subtraction can
            // go negative, which the Euclidean remainder absorbs
            let c = modulo_big(
                &(BigInt::from(num_radix(&b, self.radix)?) - BigInt::from(y)),
                &BigInt::from(radix_big.pow(m as u32)),
            )?;
            // 6.vii-ix. C = STR^m_radix(c); B = A; A = C
            let c_digits = str_radix(&c, self.radix, m)?;
            b = a;
            a = c_digits;
        }

        // 7. return A || B
        Ok(concatenate(&a, &b))
    }

    /// Validates one call's inputs and derives the round-independent
    /// quantities of steps 1-5.
    fn setup(&self, key: &[u8], tweak: &[u8], x: &[u16]) -> Result<Params, Error> {
        if !matches!(key.len(), 16 | 24 | 32) {
            return Err(Error::InvalidKeyLength(key.len()));
        }
        if tweak.len() > self.max_tlen {
            return Err(Error::TweakTooLong {
                len: tweak.len(),
                max: self.max_tlen,
            });
        }
        let n = x.len();
        if !(MINLEN..=MAXLEN).contains(&n) {
            return Err(Error::MessageLenOutOfRange(n));
        }
        if f64::from(self.radix).powi(n as i32) < 100.0 {
            return Err(Error::DomainTooSmall {
                radix: self.radix,
                len: n,
            });
        }
        for (index, &digit) in x.iter().enumerate() {
            if u32::from(digit) >= self.radix {
                return Err(Error::DigitOutOfRange {
                    index,
                    digit,
                    radix: self.radix,
                });
            }
        }

        // 1. u = floor(n/2); v = n - u
        let u = n / 2;
        let v = n - u;
        // 3. b = ceil(ceil(v * log2(radix)) / 8)
        let b = ((v as f64 * log2(self.radix)?).ceil() / 8.0).ceil() as usize;
        // 4. d = 4 * ceil(b/4) + 4
        let d = ((b + 3) & !3) + 4;

        // 5. P = [1]^1 || [2]^1 || [1]^1 || [radix]^3 || [10]^1
        //        || [u mod 256]^1 || [n]^4 || [t]^4
        let radix_bytes = bytestring(u64::from(self.radix), 3)?;
        let n_bytes = bytestring(n as u64, 4)?;
        let t_bytes = bytestring(tweak.len() as u64, 4)?;
        let mut p = [0_u8; 16];
        p[0] = 0x01;
        p[1] = 0x02;
        p[2] = 0x01;
        p[3..6].copy_from_slice(&radix_bytes);
        p[6] = 0x0A;
        p[7] = modulo(u as i64, 256)? as u8;
        p[8..12].copy_from_slice(&n_bytes);
        p[12..16].copy_from_slice(&t_bytes);

        Ok(Params { u, v, b, d, p })
    }

    /// Computes the round value `y` of steps 6.i-6.iv for one Feistel round,
    /// encoding `half` (the numeral half not updated this round) into the
    /// PRF input.
    fn round_value(
        &self,
        key: &[u8],
        tweak: &[u8],
        params: &Params,
        round: u8,
        half: &[u16],
        prf_impl: fn(&[u8], &[u8]) -> Result<[u8; 16], Error>,
    ) -> Result<BigUint, Error> {
        // 6.i. Q = T || [0]^((-t-b-1) mod 16) || [i]^1 || [NUM_radix(half)]^b
        let pad = modulo(-(tweak.len() as i64) - params.b as i64 - 1, 16)? as usize;
        let mut q = tweak.to_vec();
        // the pad is empty when t + b + 1 is already a multiple of 16
        if pad > 0 {
            q.extend_from_slice(&bytestring(0, pad)?);
        }
        q.extend_from_slice(&bytestring(u64::from(round), 1)?);
        q.extend_from_slice(&bytestring_big(&num_radix(half, self.radix)?, params.b)?);
        trace!(round, q = %to_hex(&q), "round input");

        // 6.ii. R = PRF(P || Q); P is not appended to the PRF output, which
        // is what the NIST sample data validates
        let r = prf_impl(key, &concatenate(&params.p, &q))?;

        // 6.iii. S = first d bytes of
        //        R || CIPH_K(R xor [1]^16) || CIPH_K(R xor [2]^16) || ...
        let mut s = r.to_vec();
        let mut j: u64 = 1;
        while s.len() < params.d {
            s.extend_from_slice(&ciph(key, &xor(&r, &bytestring(j, 16)?)?)?);
            j += 1;
        }
        s.truncate(params.d);
        trace!(round, s = %to_hex(&s), "round output");

        // 6.iv. y = NUM(S)
        num(&s)
    }
}
