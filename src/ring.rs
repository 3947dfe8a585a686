use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::{EngineError, Result};
use crate::power::power;

/// A validated ring modulus, always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modulus(u64);

impl Modulus {
    pub fn new(value: u64) -> Result<Self> {
        if value == 0 {
            return Err(EngineError::ZeroModulus);
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for Modulus {
    type Error = EngineError;

    fn try_from(value: u64) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An integer residue modulo a runtime modulus.
///
/// The stored value always lies in `[0, M)`. Arithmetic goes through a `u128`
/// intermediate, so any `u64` modulus is safe from overflow.
///
/// ```
/// use ring_power::ring::{ModRing, Modulus};
/// let m = Modulus::new(7).unwrap();
/// let a = ModRing::new(5, m);
/// let b = ModRing::from_signed(-3, m);
/// assert_eq!((a + b).value(), 2);
/// assert_eq!((b - a).value(), 6);
/// assert_eq!((a * b).value(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModRing {
    value: u64,
    modulus: Modulus,
}

impl ModRing {
    pub fn new(value: u64, modulus: Modulus) -> Self {
        Self {
            value: value % modulus.0,
            modulus,
        }
    }

    /// Reduces a signed integer, mapping negative inputs to their
    /// non-negative residue.
    pub fn from_signed(value: i64, modulus: Modulus) -> Self {
        let m = i128::from(modulus.0);
        let reduced = (i128::from(value) % m + m) % m;
        Self {
            value: reduced as u64,
            modulus,
        }
    }

    pub fn zero(modulus: Modulus) -> Self {
        Self { value: 0, modulus }
    }

    // 1 mod M, which is 0 for the trivial ring
    pub fn one(modulus: Modulus) -> Self {
        Self::new(1, modulus)
    }

    pub fn value(self) -> u64 {
        self.value
    }

    pub fn modulus(self) -> Modulus {
        self.modulus
    }

    pub fn pow(self, exponent: u64) -> Self {
        power(self, exponent, Self::one(self.modulus))
    }

    fn add_mod(self, rhs: Self) -> Self {
        debug_assert_eq!(self.modulus, rhs.modulus, "mixed moduli");
        let sum = (u128::from(self.value) + u128::from(rhs.value)) % u128::from(self.modulus.0);
        Self {
            value: sum as u64,
            modulus: self.modulus,
        }
    }

    fn sub_mod(self, rhs: Self) -> Self {
        debug_assert_eq!(self.modulus, rhs.modulus, "mixed moduli");
        let m = u128::from(self.modulus.0);
        let diff = (u128::from(self.value) + m - u128::from(rhs.value)) % m;
        Self {
            value: diff as u64,
            modulus: self.modulus,
        }
    }

    fn mul_mod(self, rhs: Self) -> Self {
        debug_assert_eq!(self.modulus, rhs.modulus, "mixed moduli");
        let product = (u128::from(self.value) * u128::from(rhs.value)) % u128::from(self.modulus.0);
        Self {
            value: product as u64,
            modulus: self.modulus,
        }
    }
}

impl fmt::Display for ModRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<ModRing> for u64 {
    fn from(element: ModRing) -> u64 {
        element.value
    }
}

macro_rules! ring_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $op:ident) => {
        impl $imp for ModRing {
            type Output = ModRing;

            fn $method(self, rhs: ModRing) -> ModRing {
                self.$op(rhs)
            }
        }

        impl<'a, 'b> $imp<&'b ModRing> for &'a ModRing {
            type Output = ModRing;

            fn $method(self, rhs: &'b ModRing) -> ModRing {
                self.$op(*rhs)
            }
        }

        impl $assign_imp for ModRing {
            fn $assign_method(&mut self, rhs: ModRing) {
                *self = self.$op(rhs);
            }
        }

        impl<'a> $assign_imp<&'a ModRing> for ModRing {
            fn $assign_method(&mut self, rhs: &'a ModRing) {
                *self = self.$op(*rhs);
            }
        }
    };
}

ring_binop!(Add, add, AddAssign, add_assign, add_mod);
ring_binop!(Sub, sub, SubAssign, sub_assign, sub_mod);
ring_binop!(Mul, mul, MulAssign, mul_assign, mul_mod);

impl Neg for ModRing {
    type Output = ModRing;

    fn neg(self) -> ModRing {
        ModRing::zero(self.modulus) - self
    }
}

/// Element type a [`SquareMatrix`](crate::matrix::SquareMatrix) can hold.
///
/// Neutral elements are produced from an existing element because the
/// modulus of a [`ModRing`] is only known at runtime.
pub trait Ring: Clone + PartialEq + fmt::Debug {
    fn zero_like(&self) -> Self;
    fn one_like(&self) -> Self;
    fn ring_add(&self, rhs: &Self) -> Self;
    fn ring_mul(&self, rhs: &Self) -> Self;
}

impl Ring for ModRing {
    fn zero_like(&self) -> Self {
        ModRing::zero(self.modulus)
    }

    fn one_like(&self) -> Self {
        ModRing::one(self.modulus)
    }

    fn ring_add(&self, rhs: &Self) -> Self {
        self.add_mod(*rhs)
    }

    fn ring_mul(&self, rhs: &Self) -> Self {
        self.mul_mod(*rhs)
    }
}

// Arithmetic modulo 2^64.
impl Ring for u64 {
    fn zero_like(&self) -> Self {
        0
    }

    fn one_like(&self) -> Self {
        1
    }

    fn ring_add(&self, rhs: &Self) -> Self {
        self.wrapping_add(*rhs)
    }

    fn ring_mul(&self, rhs: &Self) -> Self {
        self.wrapping_mul(*rhs)
    }
}

impl Ring for BigUint {
    fn zero_like(&self) -> Self {
        BigUint::zero()
    }

    fn one_like(&self) -> Self {
        BigUint::one()
    }

    fn ring_add(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn ring_mul(&self, rhs: &Self) -> Self {
        self * rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modulus(m: u64) -> Modulus {
        Modulus::new(m).unwrap()
    }

    #[test]
    fn zero_modulus_is_rejected() {
        assert_eq!(Modulus::new(0), Err(EngineError::ZeroModulus));
        assert_eq!(Modulus::try_from(1).map(Modulus::get), Ok(1));
    }

    #[test]
    fn construction_reduces_value() {
        let m = modulus(1000003);
        assert_eq!(ModRing::new(1000003, m).value(), 0);
        assert_eq!(ModRing::new(2000010, m).value(), 4);
        assert_eq!(ModRing::from_signed(-1, m).value(), 1000002);
        assert_eq!(ModRing::from_signed(-1000004, m).value(), 1000002);
        assert_eq!(ModRing::from_signed(i64::MIN, modulus(u64::MAX)).value(), u64::MAX - (1 << 63));
    }

    #[test]
    fn operations_stay_in_range_and_sub_undoes_add() {
        for m in 2..=13u64 {
            let md = modulus(m);
            for a in 0..m {
                for b in 0..m {
                    let (x, y) = (ModRing::new(a, md), ModRing::new(b, md));
                    assert!((x + y).value() < m);
                    assert!((x - y).value() < m);
                    assert!((x * y).value() < m);
                    assert_eq!((x + y) - y, x);
                    assert_eq!((x - y).value(), (a + m - b) % m);
                }
            }
        }
    }

    #[test]
    fn large_modulus_does_not_overflow() {
        let m = modulus(u64::MAX - 58);
        let a = ModRing::new(u64::MAX - 59, m);
        assert_eq!((a * a).value(), 1);
        assert_eq!((a + a).value(), u64::MAX - 60);
        assert_eq!((-a).value(), 1);
    }

    #[test]
    fn trivial_ring_collapses_to_zero() {
        let m = modulus(1);
        assert_eq!(ModRing::one(m), ModRing::zero(m));
        assert_eq!(ModRing::new(41, m).pow(3).value(), 0);
    }

    #[test]
    fn pow_matches_repeated_multiplication() {
        let m = modulus(1_000_000_007);
        let base = ModRing::new(3, m);
        let mut expected = ModRing::one(m);
        for e in 0..40u64 {
            assert_eq!(base.pow(e), expected);
            expected *= base;
        }
    }

    #[test]
    fn assign_operators_match_binary_operators() {
        let m = modulus(97);
        let (a, b) = (ModRing::new(50, m), ModRing::new(60, m));
        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
        c -= &b;
        assert_eq!(c, a);
        c *= &b;
        assert_eq!(c, &a * &b);
    }
}
