use std::ops::Mul;

use log::trace;
use num_traits::{One, PrimInt, Unsigned, Zero};

use crate::decimal::{BigDecimal, BinaryDigits};

/// Raises `base` to a native unsigned exponent by repeated squaring (O(log n)).
///
/// Bits are consumed least-significant first. An exponent of zero returns
/// `neutral` untouched.
///
/// ```
/// use ring_power::power::power;
/// assert_eq!(power(3u64, 13u32, 1u64), 1_594_323);
/// assert_eq!(power(3u64, 0u8, 1u64), 1);
/// ```
pub fn power<T, E>(base: T, exponent: E, neutral: T) -> T
where
    E: PrimInt + Unsigned,
    for<'a> &'a T: Mul<&'a T, Output = T>,
{
    let bit_length = E::zero().count_zeros() - exponent.leading_zeros();
    let mut multiplications = 0u32;

    let mut result = neutral;
    let mut base = base;
    let mut exp = exponent;
    while !exp.is_zero() {
        if exp & E::one() == E::one() {
            result = &result * &base;
            multiplications += 1;
        }
        exp = exp >> 1;
        if !exp.is_zero() {
            base = &base * &base;
            multiplications += 1;
        }
    }

    trace!("power: {bit_length} exponent bits, {multiplications} multiplications");
    result
}

/// Raises `base` to the exponent spelled by `digits`.
///
/// Bits are consumed most-significant first: the running result is squared
/// each step and `base` is multiplied in on every 1 bit. For the same logical
/// exponent this agrees with [`power`].
pub fn power_by_digits<T>(base: T, digits: &BinaryDigits, neutral: T) -> T
where
    for<'a> &'a T: Mul<&'a T, Output = T>,
{
    let mut multiplications = 0u32;

    let mut result = neutral;
    let mut started = false;
    for bit in digits.msb_first() {
        if started {
            result = &result * &result;
            multiplications += 1;
        }
        if bit {
            result = &result * &base;
            multiplications += 1;
            started = true;
        }
    }

    trace!(
        "power_by_digits: {} exponent bits, {multiplications} multiplications",
        digits.len()
    );
    result
}

/// Raises `base` to an arbitrarily large decimal exponent.
///
/// ```
/// use ring_power::decimal::BigDecimal;
/// use ring_power::power::power_by_decimal;
/// use ring_power::ring::{ModRing, Modulus};
/// let m = Modulus::new(1_000_000_007).unwrap();
/// let exponent: BigDecimal = "1000000006".parse().unwrap();
/// // Fermat: a^(p-1) = 1 mod p
/// let x = power_by_decimal(ModRing::new(2, m), &exponent, ModRing::one(m));
/// assert_eq!(x.value(), 1);
/// ```
pub fn power_by_decimal<T>(base: T, exponent: &BigDecimal, neutral: T) -> T
where
    for<'a> &'a T: Mul<&'a T, Output = T>,
{
    power_by_digits(base, &exponent.to_binary_digits(), neutral)
}
