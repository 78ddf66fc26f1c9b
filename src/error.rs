use core::fmt;

/// Errors related to FF3-1 encryption.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Error {
    /// Key is not 16, 24, or 32 bytes long.
    InvalidKey {
        /// Length of the rejected key, in bytes.
        len: usize,
    },
    /// Radix is outside the range `[2, 65535]`.
    InvalidRadix {
        /// The rejected radix.
        radix: u32,
    },
    /// The minimum input length for this radix is below 2.
    MinlenTooLow {
        /// The computed minimum length.
        minlen: usize,
    },
    /// The maximum input length for this radix is below the minimum.
    MaxlenLessThanMinlen {
        /// The computed minimum length.
        minlen: usize,
        /// The computed maximum length.
        maxlen: usize,
    },
    /// Input length is outside the bounds defined in the
    /// [`FF3_1`](crate::FF3_1) structure.
    InvalidInputLength {
        /// Length of the rejected input.
        len: usize,
        /// Minimum permitted length.
        min: usize,
        /// Maximum permitted length.
        max: usize,
    },
    /// Input contains a digit that is not less than the radix.
    InvalidNumeral {
        /// The rejected digit.
        digit: u16,
        /// Radix of the [`FF3_1`](crate::FF3_1) structure.
        radix: u32,
    },
    /// Tweak is not exactly 56 bits long.
    InvalidTweakLength {
        /// Length of the rejected tweak, in bits.
        bits: usize,
    },
    /// Tweak could not be decoded into bits at all.
    InvalidTweakType,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::InvalidKey { len } => write!(
                f,
                "key must be 16, 24, or 32 bytes long, got {} bytes",
                len
            ),
            Error::InvalidRadix { radix } => {
                write!(f, "radix must be between 2 and 65535, got {}", radix)
            }
            Error::MinlenTooLow { minlen } => {
                write!(f, "minimum length must be at least 2, got {}", minlen)
            }
            Error::MaxlenLessThanMinlen { minlen, maxlen } => write!(
                f,
                "maximum length {} is less than minimum length {}",
                maxlen, minlen
            ),
            Error::InvalidInputLength { len, min, max } => write!(
                f,
                "input length must be between {} and {}, got {}",
                min, max, len
            ),
            Error::InvalidNumeral { digit, radix } => write!(
                f,
                "digit {} is not valid for radix {}",
                digit, radix
            ),
            Error::InvalidTweakLength { bits } => {
                write!(f, "tweak must be exactly 56 bits long, got {} bits", bits)
            }
            Error::InvalidTweakType => write!(f, "tweak is not a hexadecimal string"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
