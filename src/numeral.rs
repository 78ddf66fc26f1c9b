/// Returned by [`str_radix`] when a value has more digits than the output.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Overflow;

/// Computes `radix^exp`, or `None` if it does not fit in 128 bits.
pub fn pow(radix: u32, exp: usize) -> Option<u128> {
    let mut acc = 1_u128;
    for _ in 0..exp {
        acc = acc.checked_mul(u128::from(radix))?;
    }
    Some(acc)
}

/// NUM_radix(X): interprets `digits` as a big-endian base-`radix` integer.
///
/// Callers must ensure the result fits in 128 bits. Every numeral half
/// permitted by [`max_len`](crate::bounds::max_len) fits in 96.
pub fn num_radix<I>(radix: u32, digits: I) -> u128
where
    I: IntoIterator<Item = u16>,
{
    let radix = u128::from(radix);
    digits
        .into_iter()
        .fold(0, |acc, d| acc * radix + u128::from(d))
}

/// STR^m_radix(x): writes `value` as big-endian base-`radix` digits into
/// `dst`, where `m` is the number of items `dst` yields. Leading positions
/// are zero-padded.
///
/// Passing `slice.iter_mut().rev()` yields REV(STR^m_radix(x)).
///
/// # Errors
///
/// Returns [`Overflow`] if `value >= radix^m`. The output is unspecified in
/// that case.
pub fn str_radix<'a, I>(radix: u32, mut value: u128, dst: I) -> Result<(), Overflow>
where
    I: IntoIterator<Item = &'a mut u16>,
    I::IntoIter: DoubleEndedIterator,
{
    let radix = u128::from(radix);
    for d in dst.into_iter().rev() {
        // The remainder is below radix, which is at most 65535.
        *d = (value % radix) as u16;
        value /= radix;
    }
    if value == 0 {
        Ok(())
    } else {
        Err(Overflow)
    }
}
