use core::fmt;

use log::debug;

use crate::{
    bounds::{self, MAX_RADIX, MIN_RADIX},
    numeral::{num_radix, str_radix},
    prf::{BLOCK_SIZE, PRF},
    tweak::Tweak,
    Error,
};

/// Number of Feistel rounds in FF3-1.
const ROUNDS: u8 = 8;

/// A struct for performing FF3-1 encryption over numeral strings of a given
/// radix.
///
/// The key selects AES-128, AES-192, or AES-256. An instance is immutable once
/// constructed and can be shared between threads.
#[derive(Clone)]
pub struct FF3_1 {
    prf: PRF,
    radix: u32,
    min_len: usize,
    max_len: usize,
}

#[derive(Copy, Clone)]
enum Direction {
    Encrypt,
    Decrypt,
}

impl FF3_1 {
    /// Creates an [`FF3_1`] instance for a given key and radix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if the key is not 16, 24, or 32 bytes,
    /// [`Error::InvalidRadix`] if the radix is outside `[2, 65535]`, and
    /// [`Error::MinlenTooLow`] or [`Error::MaxlenLessThanMinlen`] if the radix
    /// does not give a usable range of input lengths.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ff3_1::{Error, FF3_1};
    /// let ff3 = FF3_1::new(&[0; 16], 10).unwrap();
    /// assert_eq!(ff3.min_len(), 6);
    /// assert_eq!(ff3.max_len(), 56);
    ///
    /// assert_eq!(
    ///     FF3_1::new(&[0; 16], 1).err(),
    ///     Some(Error::InvalidRadix { radix: 1 })
    /// );
    /// assert_eq!(
    ///     FF3_1::new(&[0; 20], 10).err(),
    ///     Some(Error::InvalidKey { len: 20 })
    /// );
    /// ```
    pub fn new(key: &[u8], radix: u32) -> Result<Self, Error> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            debug!("rejected radix {}", radix);
            return Err(Error::InvalidRadix { radix });
        }

        let prf = PRF::new(key).map_err(|err| {
            debug!("rejected key of {} bytes", key.len());
            err
        })?;

        let min_len = bounds::min_len(radix);
        if min_len < 2 {
            return Err(Error::MinlenTooLow { minlen: min_len });
        }

        let max_len = bounds::max_len(radix);
        if max_len < min_len {
            return Err(Error::MaxlenLessThanMinlen {
                minlen: min_len,
                maxlen: max_len,
            });
        }

        debug!(
            "FF3-1 with AES-{}, radix {}, lengths {}..={}",
            prf.key_bits(),
            radix,
            min_len,
            max_len
        );

        Ok(Self {
            prf,
            radix,
            min_len,
            max_len,
        })
    }

    /// The radix of numeral strings accepted by this instance.
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// The shortest numeral string accepted by this instance.
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// The longest numeral string accepted by this instance.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Encrypts the given plaintext in place.
    ///
    /// Each element of `x` is a digit in `[0, radix)`, most significant first.
    /// `tweak` must be exactly 7 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInputLength`] if the length of `x` is outside
    /// `[min_len, max_len]`, [`Error::InvalidNumeral`] if a digit is not less
    /// than the radix, and [`Error::InvalidTweakLength`] if the tweak is not
    /// 56 bits. `x` is left untouched on error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ff3_1::FF3_1;
    /// let key = [
    ///     0x2D, 0xE7, 0x9D, 0x23, 0x2D, 0xF5, 0x58, 0x5D, 0x68, 0xCE, 0x47, 0x88, 0x2A, 0xE2,
    ///     0x56, 0xD6,
    /// ];
    /// let tweak = [0xCB, 0xD0, 0x92, 0x80, 0x97, 0x95, 0x64];
    /// let ff3 = FF3_1::new(&key, 10).unwrap();
    ///
    /// let mut x = [3, 9, 9, 2, 5, 2, 0, 2, 4, 0];
    /// ff3.encrypt(&tweak, &mut x).unwrap();
    /// assert_eq!(x, [8, 9, 0, 1, 8, 0, 1, 1, 0, 6]);
    /// ff3.decrypt(&tweak, &mut x).unwrap();
    /// assert_eq!(x, [3, 9, 9, 2, 5, 2, 0, 2, 4, 0]);
    /// ```
    pub fn encrypt(&self, tweak: &[u8], x: &mut [u16]) -> Result<(), Error> {
        self.cipher(tweak, x, Direction::Encrypt)
    }

    /// Decrypts the given ciphertext in place.
    ///
    /// # Errors
    ///
    /// Same as [`encrypt`](FF3_1::encrypt).
    pub fn decrypt(&self, tweak: &[u8], x: &mut [u16]) -> Result<(), Error> {
        self.cipher(tweak, x, Direction::Decrypt)
    }

    fn validate(&self, tweak: &[u8], x: &[u16]) -> Result<Tweak, Error> {
        let len = x.len();
        if len < self.min_len || len > self.max_len {
            debug!(
                "rejected input of length {}, expected {}..={}",
                len, self.min_len, self.max_len
            );
            return Err(Error::InvalidInputLength {
                len,
                min: self.min_len,
                max: self.max_len,
            });
        }

        if let Some(&digit) = x.iter().find(|&&d| u32::from(d) >= self.radix) {
            debug!("rejected digit outside radix {}", self.radix);
            return Err(Error::InvalidNumeral {
                digit,
                radix: self.radix,
            });
        }

        Tweak::split(tweak)
    }

    fn cipher(&self, tweak: &[u8], x: &mut [u16], direction: Direction) -> Result<(), Error> {
        let tweak = self.validate(tweak, x)?;

        // u = ceil(n / 2), v = n - u
        let u = (x.len() + 1) / 2;
        let (left, right) = x.split_at_mut(u);

        // Both halves fit in 96 bits, so neither modulus overflows.
        let modulus_u = u128::from(self.radix).pow(left.len() as u32);
        let modulus_v = u128::from(self.radix).pow(right.len() as u32);

        for round in 0..ROUNDS {
            let i = match direction {
                Direction::Encrypt => round,
                Direction::Decrypt => ROUNDS - 1 - round,
            };

            // This is equivalent to moving A and B at the end of each round: even rounds
            // rewrite the left slot from the right one, odd rounds the reverse.
            let (x_a, x_b, modulus) = if i % 2 == 0 {
                (&mut *left, &*right, modulus_u)
            } else {
                (&mut *right, &*left, modulus_v)
            };

            let y = self.round(i, tweak.for_round(i), x_b) % modulus;

            // c = (NUM_radix(REV(A)) +/- y) mod radix^m, where A < radix^m.
            let a = num_radix(self.radix, x_a.iter().rev().copied());
            let c = match direction {
                Direction::Encrypt => (a + y) % modulus,
                Direction::Decrypt => (a + modulus - y) % modulus,
            };

            // C = REV(STR^m_radix(c)). c was reduced modulo radix^m, so this cannot
            // overflow.
            str_radix(self.radix, c, x_a.iter_mut().rev()).unwrap();
        }

        Ok(())
    }

    /// Computes y = NUM(S) for round `i`, where S is the round function applied
    /// to P = (W xor [i]^4) || [NUM_radix(REV(B))]^12.
    fn round(&self, i: u8, w: [u8; 4], x_b: &[u16]) -> u128 {
        let mut p = [0; BLOCK_SIZE];
        p[..4].copy_from_slice(&w);
        p[3] ^= i;

        let b = num_radix(self.radix, x_b.iter().rev().copied());
        p[4..].copy_from_slice(&b.to_be_bytes()[4..]);

        u128::from_be_bytes(self.prf.ciph(&p))
    }
}

impl fmt::Debug for FF3_1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FF3_1")
            .field("key_bits", &self.prf.key_bits())
            .field("radix", &self.radix)
            .field("min_len", &self.min_len)
            .field("max_len", &self.max_len)
            .finish()
    }
}
