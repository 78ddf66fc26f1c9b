use hex::FromHexError;
use log::debug;

use crate::Error;

/// Length of an FF3-1 tweak in bytes (56 bits).
pub const TWEAK_LEN: usize = 7;

/// The two 32-bit tweak halves. Even rounds use `right`, odd rounds use
/// `left`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Tweak {
    pub left: [u8; 4],
    pub right: [u8; 4],
}

impl Tweak {
    /// Splits a 56-bit tweak into `T_L || 0^4` and `T_R || T_M || 0^4`, where
    /// `T_L` is the leftmost 28 bits, `T_M` the next 4, and `T_R` the last 24.
    pub fn split(tweak: &[u8]) -> Result<Self, Error> {
        if tweak.len() != TWEAK_LEN {
            debug!("rejected tweak of {} bytes", tweak.len());
            return Err(Error::InvalidTweakLength {
                bits: tweak.len() * 8,
            });
        }

        let mut left = [0; 4];
        left[..3].copy_from_slice(&tweak[..3]);
        left[3] = tweak[3] & 0xF0;

        let mut right = [0; 4];
        right[..3].copy_from_slice(&tweak[4..]);
        right[3] = tweak[3] << 4;

        Ok(Self { left, right })
    }

    /// Returns the 4-byte tweak half for round `i`.
    pub fn for_round(&self, i: u8) -> [u8; 4] {
        if i % 2 == 0 {
            self.right
        } else {
            self.left
        }
    }
}

/// Parses a 56-bit tweak from 14 hexadecimal characters.
///
/// # Errors
///
/// Returns [`Error::InvalidTweakType`] if `s` is not hexadecimal, and
/// [`Error::InvalidTweakLength`] if it does not encode exactly 56 bits.
///
/// # Examples
///
/// ```rust
/// # use ff3_1::{parse_tweak, Error};
/// assert_eq!(
///     parse_tweak("CBD09280979564"),
///     Ok([0xCB, 0xD0, 0x92, 0x80, 0x97, 0x95, 0x64])
/// );
/// assert_eq!(
///     parse_tweak("CBD0928097956400"),
///     Err(Error::InvalidTweakLength { bits: 64 })
/// );
/// assert_eq!(parse_tweak("CBD0928097956Z"), Err(Error::InvalidTweakType));
/// ```
pub fn parse_hex(s: &str) -> Result<[u8; TWEAK_LEN], Error> {
    let mut tweak = [0; TWEAK_LEN];
    hex::decode_to_slice(s, &mut tweak).map_err(|err| {
        debug!("rejected tweak string: {}", err);
        match err {
            FromHexError::InvalidStringLength => Error::InvalidTweakLength { bits: s.len() * 4 },
            _ => Error::InvalidTweakType,
        }
    })?;
    Ok(tweak)
}

#[cfg(test)]
mod tests {
    use super::{parse_hex, Tweak};
    use crate::Error;

    use quickcheck_macros::quickcheck;

    #[test]
    fn split_known_tweak() {
        let tweak = Tweak::split(&[0xCB, 0xD0, 0x92, 0x80, 0x97, 0x95, 0x64]).unwrap();
        assert_eq!(tweak.left, [0xCB, 0xD0, 0x92, 0x80]);
        assert_eq!(tweak.right, [0x97, 0x95, 0x64, 0x00]);

        let tweak = Tweak::split(&[0x12, 0x34, 0x56, 0x7A, 0xBC, 0xDE, 0xF0]).unwrap();
        assert_eq!(tweak.left, [0x12, 0x34, 0x56, 0x70]);
        assert_eq!(tweak.right, [0xBC, 0xDE, 0xF0, 0xA0]);
    }

    #[test]
    fn round_parity_selects_half() {
        let tweak = Tweak::split(&[1, 2, 3, 4, 5, 6, 7]).unwrap();
        for i in (0..8).step_by(2) {
            assert_eq!(tweak.for_round(i), tweak.right);
            assert_eq!(tweak.for_round(i + 1), tweak.left);
        }
    }

    #[test]
    fn split_rejects_wrong_length() {
        assert_eq!(
            Tweak::split(&[0; 8]),
            Err(Error::InvalidTweakLength { bits: 64 })
        );
        assert_eq!(
            Tweak::split(&[0; 6]),
            Err(Error::InvalidTweakLength { bits: 48 })
        );
        assert_eq!(
            Tweak::split(&[]),
            Err(Error::InvalidTweakLength { bits: 0 })
        );
    }

    #[test]
    fn parse_hex_errors() {
        assert_eq!(parse_hex(""), Err(Error::InvalidTweakLength { bits: 0 }));
        assert_eq!(parse_hex("0123456789AB"), Err(Error::InvalidTweakLength { bits: 48 }));
        assert_eq!(parse_hex("0123456789ABC"), Err(Error::InvalidTweakType));
        assert_eq!(parse_hex("0123456789ABCG"), Err(Error::InvalidTweakType));
        assert_eq!(
            parse_hex("0123456789abcd"),
            Ok([0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD])
        );
    }

    /// Test that splitting keeps every tweak bit and zeroes the padding.
    #[quickcheck]
    fn split_preserves_bits(bits: u64) -> bool {
        let bytes = bits.to_be_bytes();
        let tweak = Tweak::split(&bytes[1..]).unwrap();

        let left = u32::from_be_bytes(tweak.left);
        let right = u32::from_be_bytes(tweak.right);

        let t_left = (bits >> 28) & 0x0FFF_FFFF;
        let t_mid = (bits >> 24) & 0xF;
        let t_right = bits & 0xFF_FFFF;

        u64::from(left) == t_left << 4 && u64::from(right) == (t_right << 8) | (t_mid << 4)
    }
}
