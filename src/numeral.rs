//! Numeral-string and byte-string arithmetic from NIST SP 800-38G.
//!
//! These are the common functions the Feistel rounds are built from:
//! conversions between numeral strings and integers, fixed-width big-endian
//! encodings, elementwise XOR, Euclidean remainders and a few diagnostic
//! formatters. Numeral strings can represent values far beyond machine-word
//! range (`radix^length`), so the conversions work in arbitrary precision.
//!
//! Every function validates its domain and fails fast; no function mutates
//! its input or silently truncates.

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::{Error, MAXLEN, MAXRADIX, MINRADIX};

/// NIST SP 800-38G Algorithm 1: `NUM_radix(X)`.
///
/// Converts a numeral string to an integer by Horner evaluation, valuing the
/// numerals in decreasing order of significance.
///
/// # Errors
///
/// Returns an error if `x` is empty or longer than [`MAXLEN`](crate::MAXLEN),
/// if `radix` is out of range, or if any numeral is not a digit in `radix`.
pub fn num_radix(x: &[u16], radix: u32) -> Result<BigUint, Error> {
    if x.is_empty() || x.len() > MAXLEN {
        return Err(Error::InputLenOutOfRange(x.len()));
    }
    if !(MINRADIX..=MAXRADIX).contains(&radix) {
        return Err(Error::RadixOutOfRange(radix));
    }

    let r = BigUint::from(radix);
    let mut value = BigUint::zero();
    for (index, &digit) in x.iter().enumerate() {
        if u32::from(digit) >= radix {
            return Err(Error::DigitOutOfRange {
                index,
                digit,
                radix,
            });
        }
        value = value * &r + BigUint::from(digit);
    }
    Ok(value)
}

/// NIST SP 800-38G Algorithm 2: `NUM(X)`.
///
/// Converts a byte string to an integer, treating each byte as an unsigned
/// numeral in base 256, most significant byte first.
///
/// # Errors
///
/// Returns an error if `x` is empty or longer than [`MAXLEN`](crate::MAXLEN).
pub fn num(x: &[u8]) -> Result<BigUint, Error> {
    if x.is_empty() || x.len() > MAXLEN {
        return Err(Error::InputLenOutOfRange(x.len()));
    }
    Ok(BigUint::from_bytes_be(x))
}

/// NIST SP 800-38G Algorithm 3: `STR^m_radix(x)`.
///
/// Converts an integer to a numeral string of exactly `m` numerals in the
/// given radix, most significant numeral first.
///
/// # Errors
///
/// Returns an error if `m` or `radix` is out of range, or if
/// `x >= radix^m`.
pub fn str_radix(x: &BigUint, radix: u32, m: usize) -> Result<Vec<u16>, Error> {
    if m < 1 || m > MAXLEN {
        return Err(Error::InputLenOutOfRange(m));
    }
    if !(MINRADIX..=MAXRADIX).contains(&radix) {
        return Err(Error::RadixOutOfRange(radix));
    }
    let r = BigUint::from(radix);
    if *x >= r.pow(m as u32) {
        return Err(Error::ValueOutOfRange);
    }

    let mut digits = vec![0_u16; m];
    let mut rest = x.clone();
    for digit in digits.iter_mut().rev() {
        let (quotient, remainder) = rest.div_rem(&r);
        // remainder < radix <= 2^16, so the narrowing is lossless
        *digit = remainder.to_u32().unwrap_or(0) as u16;
        rest = quotient;
    }
    Ok(digits)
}

/// NIST SP 800-38G Algorithm 4: `REV(X)`.
///
/// Returns the numeral string in reverse order; the input is not modified.
pub fn rev(x: &[u16]) -> Vec<u16> {
    x.iter().rev().copied().collect()
}

/// NIST SP 800-38G Algorithm 5: `REVB(X)`.
///
/// Returns the byte string in reverse byte order; the input is not modified.
pub fn revb(x: &[u8]) -> Vec<u8> {
    x.iter().rev().copied().collect()
}

/// Elementwise XOR of two byte strings of equal length.
///
/// # Errors
///
/// Returns an error if either operand is empty or longer than
/// [`MAXLEN`](crate::MAXLEN), or if the lengths differ; operands are never
/// zero-padded.
pub fn xor(x: &[u8], y: &[u8]) -> Result<Vec<u8>, Error> {
    if x.is_empty() || x.len() > MAXLEN {
        return Err(Error::InputLenOutOfRange(x.len()));
    }
    if y.is_empty() || y.len() > MAXLEN {
        return Err(Error::InputLenOutOfRange(y.len()));
    }
    if x.len() != y.len() {
        return Err(Error::LengthMismatch {
            lhs: x.len(),
            rhs: y.len(),
        });
    }
    Ok(x.iter().zip(y).map(|(a, b)| a ^ b).collect())
}

/// Base-2 logarithm of a strictly positive integer.
///
/// # Errors
///
/// Returns [`Error::LogOfZero`] if `x` is zero.
pub fn log2(x: u32) -> Result<f64, Error> {
    if x == 0 {
        return Err(Error::LogOfZero);
    }
    Ok(f64::from(x).log2())
}

/// Euclidean remainder `x - m * floor(x / m)` for machine-width integers.
///
/// The result is always in `[0, m)`, unlike the `%` operator for negative
/// `x`.
///
/// # Errors
///
/// Returns [`Error::NonPositiveModulus`] if `m <= 0`; NIST SP 800-38G
/// defines the modulus only for positive `m`.
pub fn modulo(x: i64, m: i64) -> Result<i64, Error> {
    if m <= 0 {
        return Err(Error::NonPositiveModulus);
    }
    Ok(x.rem_euclid(m))
}

/// Euclidean remainder for arbitrary-precision integers.
///
/// The result is always nonnegative, which is what the Feistel decrypt round
/// relies on when `NUM_radix(B) - y` goes negative.
///
/// # Errors
///
/// Returns [`Error::NonPositiveModulus`] if `m <= 0`.
pub fn modulo_big(x: &BigInt, m: &BigInt) -> Result<BigUint, Error> {
    if m.sign() != Sign::Plus {
        return Err(Error::NonPositiveModulus);
    }
    let mut remainder = x % m;
    if remainder.sign() == Sign::Minus {
        remainder += m;
    }
    Ok(remainder.magnitude().clone())
}

/// Fixed-width big-endian encoding `[x]^s` of a machine-width integer.
///
/// # Errors
///
/// Returns an error if `s` is outside `[1, MAXLEN]` or if `x >= 256^s`.
pub fn bytestring(x: u64, s: usize) -> Result<Vec<u8>, Error> {
    if s < 1 || s > MAXLEN {
        return Err(Error::WidthOutOfRange(s));
    }
    if s < 8 && x >> (8 * s) != 0 {
        return Err(Error::ValueOutOfRange);
    }

    let mut out = vec![0_u8; s];
    for (i, byte) in out.iter_mut().rev().enumerate().take(8) {
        *byte = (x >> (8 * i)) as u8;
    }
    Ok(out)
}

/// Fixed-width big-endian encoding `[x]^s` of an arbitrary-precision
/// integer.
///
/// # Errors
///
/// Returns an error if `s` is outside `[1, MAXLEN]` or if `x >= 256^s`.
pub fn bytestring_big(x: &BigUint, s: usize) -> Result<Vec<u8>, Error> {
    if s < 1 || s > MAXLEN {
        return Err(Error::WidthOutOfRange(s));
    }
    if x.bits() > 8 * s as u64 {
        return Err(Error::ValueOutOfRange);
    }

    let raw = x.to_bytes_be();
    let mut out = vec![0_u8; s];
    if x.is_zero() {
        return Ok(out);
    }
    out[s - raw.len()..].copy_from_slice(&raw);
    Ok(out)
}

/// Returns `s / 8` bytes of all zero bits or all one bits.
///
/// # Errors
///
/// Returns [`Error::InvalidBitCount`] if `s` is not a positive multiple
/// of 8.
pub fn bitstring(bit: bool, s: usize) -> Result<Vec<u8>, Error> {
    if s == 0 || s % 8 != 0 {
        return Err(Error::InvalidBitCount(s));
    }
    Ok(vec![if bit { 0xFF } else { 0x00 }; s / 8])
}

/// Concatenation `X || Y`, preserving order.
pub fn concatenate<T: Clone>(x: &[T], y: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(x.len() + y.len());
    out.extend_from_slice(x);
    out.extend_from_slice(y);
    out
}

/// Renders a byte string as uppercase hex, for diagnostic output.
pub fn to_hex(x: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(2 * x.len());
    for &byte in x {
        out.push(HEX[usize::from(byte >> 4)] as char);
        out.push(HEX[usize::from(byte & 0xF)] as char);
    }
    out
}

/// Renders a numeral string as space-separated decimal values, for
/// diagnostic output.
pub fn numerals_to_string(x: &[u16]) -> String {
    x.iter()
        .map(u16::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    #[test]
    fn num_radix_horner() {
        // NUM_2(0 0 0 1 1 0 1 0) = 26, the example from the specification
        let x = [0, 0, 0, 1, 1, 0, 1, 0];
        assert_eq!(num_radix(&x, 2).unwrap(), BigUint::from(26_u32));

        let x = [1, 2, 3];
        assert_eq!(num_radix(&x, 10).unwrap(), BigUint::from(123_u32));

        let x = [0, 0];
        assert_eq!(num_radix(&x, 10).unwrap(), BigUint::zero());
    }

    #[test]
    fn num_radix_rejects_bad_inputs() {
        assert_eq!(num_radix(&[], 10), Err(Error::InputLenOutOfRange(0)));
        assert_eq!(
            num_radix(&vec![0; MAXLEN + 1], 10),
            Err(Error::InputLenOutOfRange(MAXLEN + 1))
        );
        assert_eq!(num_radix(&[0, 1], 1), Err(Error::RadixOutOfRange(1)));
        assert_eq!(
            num_radix(&[0, 1], MAXRADIX + 1),
            Err(Error::RadixOutOfRange(MAXRADIX + 1))
        );
        assert_eq!(
            num_radix(&[0, 7, 0], 7),
            Err(Error::DigitOutOfRange {
                index: 1,
                digit: 7,
                radix: 7
            })
        );
    }

    #[test]
    fn num_base_256() {
        assert_eq!(num(&[0x01, 0x00]).unwrap(), BigUint::from(256_u32));
        assert_eq!(num(&[0xFF, 0xFF]).unwrap(), BigUint::from(65535_u32));
        assert_eq!(num(&[0x00]).unwrap(), BigUint::zero());
        assert_eq!(num(&[]), Err(Error::InputLenOutOfRange(0)));
    }

    #[test]
    fn str_radix_fixed_width() {
        // STR^4_12(559) = 0 3 10 7, the example from the specification
        let x = BigUint::from(559_u32);
        assert_eq!(str_radix(&x, 12, 4).unwrap(), [0, 3, 10, 7]);

        let zero = BigUint::zero();
        assert_eq!(str_radix(&zero, 10, 3).unwrap(), [0, 0, 0]);
    }

    #[test]
    fn str_radix_rejects_bad_inputs() {
        let x = BigUint::from(100_u32);
        assert_eq!(str_radix(&x, 10, 0), Err(Error::InputLenOutOfRange(0)));
        assert_eq!(str_radix(&x, 1, 3), Err(Error::RadixOutOfRange(1)));
        assert_eq!(str_radix(&x, 10, 2), Err(Error::ValueOutOfRange));
    }

    #[quickcheck]
    fn str_radix_inverts_num_radix(digits: Vec<u8>) -> TestResult {
        if digits.is_empty() || digits.len() > MAXLEN {
            return TestResult::discard();
        }

        let digits: Vec<u16> = digits.iter().map(|&d| u16::from(d % 10)).collect();
        let value = num_radix(&digits, 10).unwrap();
        TestResult::from_bool(str_radix(&value, 10, digits.len()).unwrap() == digits)
    }

    #[test]
    fn rev_and_revb_reverse_order() {
        assert_eq!(rev(&[1, 2, 3]), [3, 2, 1]);
        assert_eq!(rev(&[]), Vec::<u16>::new());
        assert_eq!(rev(&[5]), [5]);
        assert_eq!(revb(&[0x01, 0x02, 0x03]), [0x03, 0x02, 0x01]);
    }

    #[test]
    fn xor_elementwise() {
        assert_eq!(
            xor(&[0xFF, 0x0F], &[0x0F, 0x0F]).unwrap(),
            [0xF0, 0x00]
        );
        assert_eq!(
            xor(&[1, 2], &[1, 2, 3]),
            Err(Error::LengthMismatch { lhs: 2, rhs: 3 })
        );
        assert_eq!(xor(&[], &[]), Err(Error::InputLenOutOfRange(0)));
    }

    #[test]
    fn log2_of_powers_of_two() {
        assert_eq!(log2(1).unwrap(), 0.0);
        assert_eq!(log2(2).unwrap(), 1.0);
        assert_eq!(log2(1024).unwrap(), 10.0);
        assert_eq!(log2(0), Err(Error::LogOfZero));
    }

    #[test]
    fn modulo_is_euclidean() {
        assert_eq!(modulo(13, 4).unwrap(), 1);
        assert_eq!(modulo(-3, 5).unwrap(), 2);
        assert_eq!(modulo(-16, 16).unwrap(), 0);
        assert_eq!(modulo(5, 0), Err(Error::NonPositiveModulus));
        assert_eq!(modulo(5, -2), Err(Error::NonPositiveModulus));
    }

    #[test]
    fn modulo_big_is_euclidean() {
        let m = BigInt::from(7);
        assert_eq!(
            modulo_big(&BigInt::from(-12), &m).unwrap(),
            BigUint::from(2_u32)
        );
        assert_eq!(
            modulo_big(&BigInt::from(12), &m).unwrap(),
            BigUint::from(5_u32)
        );
        assert_eq!(
            modulo_big(&m, &BigInt::from(-1)),
            Err(Error::NonPositiveModulus)
        );
        assert_eq!(
            modulo_big(&m, &BigInt::zero()),
            Err(Error::NonPositiveModulus)
        );
    }

    #[test]
    fn bytestring_big_endian() {
        assert_eq!(bytestring(1, 2).unwrap(), [0x00, 0x01]);
        assert_eq!(bytestring(0xABCD, 4).unwrap(), [0x00, 0x00, 0xAB, 0xCD]);
        assert_eq!(bytestring(0, 3).unwrap(), [0x00, 0x00, 0x00]);
        assert_eq!(bytestring(256, 1), Err(Error::ValueOutOfRange));
        assert_eq!(bytestring(1, 0), Err(Error::WidthOutOfRange(0)));
        assert_eq!(
            bytestring(u64::MAX, 10).unwrap(),
            [0, 0, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
        );
    }

    #[test]
    fn bytestring_big_matches_native() {
        let x = BigUint::from(0x0001_0000_u32);
        assert_eq!(bytestring_big(&x, 3).unwrap(), [0x01, 0x00, 0x00]);
        assert_eq!(bytestring_big(&x, 2), Err(Error::ValueOutOfRange));
        assert_eq!(
            bytestring_big(&BigUint::zero(), 4).unwrap(),
            [0, 0, 0, 0]
        );

        for x in [0_u64, 1, 255, 256, 0xFFFF_FFFF, u64::MAX] {
            assert_eq!(
                bytestring(x, 8).unwrap(),
                bytestring_big(&BigUint::from(x), 8).unwrap()
            );
        }
    }

    #[test]
    fn bitstring_fills_bytes() {
        assert_eq!(bitstring(false, 16).unwrap(), [0x00, 0x00]);
        assert_eq!(bitstring(true, 8).unwrap(), [0xFF]);
        assert_eq!(bitstring(true, 0), Err(Error::InvalidBitCount(0)));
        assert_eq!(bitstring(true, 4), Err(Error::InvalidBitCount(4)));
    }

    #[test]
    fn concatenate_preserves_order() {
        assert_eq!(concatenate(&[1_u16, 2], &[3, 4]), [1, 2, 3, 4]);
        assert_eq!(concatenate::<u8>(&[], &[7]), [7]);
        assert_eq!(concatenate::<u8>(&[], &[]), Vec::new());
    }

    #[test]
    fn diagnostic_formatting() {
        assert_eq!(to_hex(&[0x01, 0xAB, 0xFF]), "01ABFF");
        assert_eq!(to_hex(&[]), "");
        assert_eq!(numerals_to_string(&[0, 12, 345]), "0 12 345");
    }
}
