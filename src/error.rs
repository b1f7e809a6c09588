/// Errors related to FF1 encryption.
///
/// Each variant identifies one kind of precondition violation, so callers
/// can distinguish range errors from cipher errors without matching on the
/// rendered message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The radix is outside the permitted range `[MINRADIX, MAXRADIX]`.
    #[error("radix {0} is not within the permitted range of 2..=65536")]
    RadixOutOfRange(u32),

    /// The maximum tweak length is outside the permitted range `[0, MAXLEN]`.
    #[error("maximum tweak length {0} is not within the permitted range of 0..=4096")]
    MaxTweakLenOutOfRange(usize),

    /// The tweak is longer than the maximum configured at construction.
    #[error("tweak length {len} exceeds the maximum tweak length {max}")]
    TweakTooLong {
        /// Length of the supplied tweak in bytes.
        len: usize,
        /// Maximum tweak length accepted by this instance.
        max: usize,
    },

    /// The message length is outside the permitted range `[MINLEN, MAXLEN]`.
    #[error("message length {0} is not within the permitted range of 2..=4096")]
    MessageLenOutOfRange(usize),

    /// The domain is too small: NIST SP 800-38G requires `radix^len >= 100`.
    #[error("radix {radix} ^ length {len} is less than 100")]
    DomainTooSmall {
        /// Radix of the numeral string.
        radix: u32,
        /// Length of the numeral string.
        len: usize,
    },

    /// A numeral is not a valid digit for the radix.
    #[error("numeral {digit} at index {index} is not a digit in radix {radix}")]
    DigitOutOfRange {
        /// Index of the offending numeral.
        index: usize,
        /// Value of the offending numeral.
        digit: u16,
        /// Radix of the numeral string.
        radix: u32,
    },

    /// A byte or numeral string length is outside the permitted range
    /// `[1, MAXLEN]`.
    #[error("input length {0} is not within the permitted range of 1..=4096")]
    InputLenOutOfRange(usize),

    /// The operands of an elementwise operation differ in length.
    #[error("operands must be the same length ({lhs} != {rhs})")]
    LengthMismatch {
        /// Length of the left operand.
        lhs: usize,
        /// Length of the right operand.
        rhs: usize,
    },

    /// A fixed-width byte-string width is outside the permitted range
    /// `[1, MAXLEN]`.
    #[error("width {0} is not within the permitted range of 1..=4096")]
    WidthOutOfRange(usize),

    /// An integer does not fit the requested encoding or numeral-string
    /// range.
    #[error("value out of range for the requested encoding")]
    ValueOutOfRange,

    /// A bit-fill length is not a positive multiple of 8.
    #[error("bit count {0} is not a positive multiple of 8")]
    InvalidBitCount(usize),

    /// The modulus of a Euclidean remainder is zero or negative.
    #[error("modulus must be a positive integer")]
    NonPositiveModulus,

    /// The argument of a base-2 logarithm is zero.
    #[error("logarithm argument must be a positive integer")]
    LogOfZero,

    /// The key length is not a valid AES key size (16, 24 or 32 bytes).
    #[error("key length {0} is not a valid AES key size of 16, 24 or 32 bytes")]
    InvalidKeyLength(usize),

    /// A cipher input is not block-aligned: `ciph` requires exactly one
    /// 16-byte block and the PRF a positive multiple of 16 bytes.
    #[error("input length {0} is not a whole number of 16-byte blocks")]
    InvalidBlockLength(usize),
}
