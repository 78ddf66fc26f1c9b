//! Rust implementation of FF3-1 format-preserving encryption, specified in
//! [NIST Special Publication 800-38G Revision 1](https://csrc.nist.gov/publications/detail/sp/800-38g/rev-1/draft).
//!
//! Numeral strings are slices of `u16` digits, so any radix from 2 to 65535
//! is supported. Mapping an application alphabet to digits is left to the
//! caller.
//!
//! # Example
//!
//! ```rust
//! # use ff3_1::{parse_tweak, FF3_1};
//! #
//! const KEY: [u8; 16] = [
//!     0x71, 0x83, 0x85, 0xE6, 0x54, 0x25, 0x34, 0x60, 0x44, 0x19, 0xE8, 0x3C, 0xE3, 0x87, 0xA4,
//!     0x37,
//! ];
//!
//! let ff3 = FF3_1::new(&KEY, 26).unwrap();
//! let tweak = parse_tweak("B6F35084FA90E1").unwrap();
//!
//! // "wfmwlrorcd" with a = 0, ..., z = 25
//! let mut x = [22, 5, 12, 22, 11, 17, 14, 17, 2, 3];
//! ff3.encrypt(&tweak, &mut x).unwrap();
//! // "ywowehycyd"
//! assert_eq!(x, [24, 22, 14, 22, 4, 7, 24, 2, 24, 3]);
//! ff3.decrypt(&tweak, &mut x).unwrap();
//! assert_eq!(x, [22, 5, 12, 22, 11, 17, 14, 17, 2, 3]);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(missing_docs)]

mod bounds;
mod error;
mod ff3_1;
mod numeral;
mod prf;
mod tweak;

pub use crate::{
    bounds::{MAX_RADIX, MIN_DOMAIN_SIZE, MIN_RADIX, NUM_BITS},
    error::Error,
    ff3_1::FF3_1,
    tweak::{parse_hex as parse_tweak, TWEAK_LEN},
};
