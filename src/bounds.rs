use crate::numeral::pow;

/// Smallest domain size, `radix^minlen`, permitted by FF3-1.
pub const MIN_DOMAIN_SIZE: u128 = 1_000_000;

/// Width in bits of the numeral field in each round's cipher input.
pub const NUM_BITS: u32 = 96;

/// Smallest radix accepted by FF3-1.
pub const MIN_RADIX: u32 = 2;

/// Largest radix accepted by FF3-1.
pub const MAX_RADIX: u32 = 65535;

/// minlen = ceil(log_radix(1000000)), i.e. the smallest `k` with
/// `radix^k >= 1000000`.
///
/// Computed with integer powers so that exact powers such as `10^6` do not
/// round up.
pub fn min_len(radix: u32) -> usize {
    debug_assert!(radix >= MIN_RADIX);
    let mut len = 0;
    while pow(radix, len).map_or(false, |x| x < MIN_DOMAIN_SIZE) {
        len += 1;
    }
    len
}

/// maxlen = 2 * floor(96 / log2(radix)).
///
/// `floor(96 / log2(radix))` is the largest `k` with `radix^k <= 2^96`, which
/// is also the longest numeral half that fits in the 96-bit field.
pub fn max_len(radix: u32) -> usize {
    debug_assert!(radix >= MIN_RADIX);
    let limit = 1_u128 << NUM_BITS;
    let mut half = 0;
    while pow(radix, half + 1).map_or(false, |x| x <= limit) {
        half += 1;
    }
    2 * half
}

#[cfg(test)]
mod tests {
    use super::{max_len, min_len, MAX_RADIX, MIN_RADIX};

    use num::{bigint::BigUint, traits::Pow};

    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    #[test]
    fn known_bounds() {
        let table = [
            (2, 20, 192),
            (10, 6, 56),
            (16, 5, 48),
            (26, 5, 40),
            (36, 4, 36),
            (256, 3, 24),
            (1000, 2, 18),
            (65535, 2, 12),
        ];
        for &(radix, min, max) in &table {
            assert_eq!(min_len(radix), min, "minlen for radix {}", radix);
            assert_eq!(max_len(radix), max, "maxlen for radix {}", radix);
        }
    }

    /// Test that minlen is the smallest length giving a domain of at least
    /// one million.
    #[quickcheck]
    fn min_len_is_smallest(r: u16) -> TestResult {
        let radix = MIN_RADIX + u32::from(r) % (MAX_RADIX - 1);
        let min = min_len(radix);
        let big = BigUint::from(radix);
        let million = BigUint::from(1_000_000_u32);

        TestResult::from_bool(
            big.clone().pow(min) >= million && big.pow(min - 1) < million,
        )
    }

    /// Test that each half of a maxlen input fits in 96 bits, and one more
    /// digit would not.
    #[quickcheck]
    fn max_len_fits_num_bits(r: u16) -> TestResult {
        let radix = MIN_RADIX + u32::from(r) % (MAX_RADIX - 1);
        let half = max_len(radix) / 2;
        let big = BigUint::from(radix);
        let limit = BigUint::from(2_u32).pow(96_usize);

        TestResult::from_bool(
            max_len(radix) >= min_len(radix)
                && big.clone().pow(half) <= limit
                && big.pow(half + 1) > limit,
        )
    }
}
