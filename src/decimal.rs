//! Arbitrary-precision decimal integers and their conversion to binary.
//!
//! Exponents read as decimal text can exceed any native integer. A
//! [`BigDecimal`] keeps the digits as written and yields its bits by
//! repeated long division by two, which is all the exponentiation needs.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::EngineError;

/// A non-negative decimal integer, digits stored least-significant first.
///
/// High zeros are never stored, so zero is the empty digit list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BigDecimal {
    digits: Vec<u8>,
}

/// Quotient and remainder bit of [`BigDecimal::divide_by_two`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivisionByTwo {
    pub quotient: BigDecimal,
    pub remainder: u8,
}

impl BigDecimal {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Subtracts one in place.
    ///
    /// # Panics
    /// Panics if `self` is zero.
    pub fn decrement(&mut self) {
        assert!(!self.is_zero(), "cannot decrement a zero BigDecimal");
        for digit in self.digits.iter_mut() {
            if *digit != 0 {
                *digit -= 1;
                break;
            }
            *digit = 9;
        }
        self.normalize();
    }

    pub fn checked_decrement(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let mut decremented = self.clone();
        decremented.decrement();
        Some(decremented)
    }

    // Long division from the most-significant digit, carrying each digit's
    // remainder into the next dividend.
    pub fn divide_by_two(&self) -> DivisionByTwo {
        let mut quotient = Vec::with_capacity(self.digits.len());
        let mut carry = 0u8;
        for &digit in self.digits.iter().rev() {
            let value = carry * 10 + digit;
            quotient.push(value / 2);
            carry = value % 2;
        }
        quotient.reverse();

        let mut quotient = BigDecimal { digits: quotient };
        quotient.normalize();
        DivisionByTwo {
            quotient,
            remainder: carry,
        }
    }

    /// Bits of the value, least-significant first. Zero has no bits.
    pub fn to_binary_digits(&self) -> BinaryDigits {
        self.clone().into_binary_digits()
    }

    pub fn into_binary_digits(self) -> BinaryDigits {
        let mut bits = Vec::with_capacity(self.digits.len() * 4);
        let mut decimal = self;
        while !decimal.is_zero() {
            let DivisionByTwo {
                quotient,
                remainder,
            } = decimal.divide_by_two();
            bits.push(remainder == 1);
            decimal = quotient;
        }
        BinaryDigits { bits }
    }

    pub fn to_u64(&self) -> Option<u64> {
        self.digits.iter().rev().try_fold(0u64, |acc, &digit| {
            acc.checked_mul(10)?.checked_add(u64::from(digit))
        })
    }

    pub fn to_biguint(&self) -> BigUint {
        if self.is_zero() {
            return BigUint::zero();
        }
        BigUint::from_radix_le(&self.digits, 10).unwrap_or_default()
    }

    /// Number of stored decimal digits; zero has none.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    fn normalize(&mut self) {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
    }
}

impl FromStr for BigDecimal {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(EngineError::EmptyDecimal);
        }
        let mut digits = Vec::with_capacity(s.len());
        for (position, found) in s.chars().enumerate() {
            let digit = found
                .to_digit(10)
                .ok_or(EngineError::InvalidDigit { position, found })?;
            digits.push(digit as u8);
        }
        digits.reverse();

        let mut decimal = BigDecimal { digits };
        decimal.normalize();
        Ok(decimal)
    }
}

impl From<u64> for BigDecimal {
    fn from(mut value: u64) -> Self {
        let mut digits = Vec::new();
        while value > 0 {
            digits.push((value % 10) as u8);
            value /= 10;
        }
        BigDecimal { digits }
    }
}

impl From<&BigUint> for BigDecimal {
    fn from(value: &BigUint) -> Self {
        let mut decimal = BigDecimal {
            digits: value.to_radix_le(10),
        };
        decimal.normalize();
        decimal
    }
}

impl fmt::Display for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        for digit in self.digits.iter().rev() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

/// Binary digits produced by [`BigDecimal::to_binary_digits`].
///
/// Stored least-significant first, the order in which long division
/// produces them. The exponentiation walks them with [`msb_first`].
///
/// [`msb_first`]: BinaryDigits::msb_first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryDigits {
    bits: Vec<bool>,
}

impl BinaryDigits {
    pub fn lsb_first(&self) -> impl DoubleEndedIterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    pub fn msb_first(&self) -> impl DoubleEndedIterator<Item = bool> + '_ {
        self.bits.iter().rev().copied()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn to_biguint(&self) -> BigUint {
        self.msb_first().fold(BigUint::zero(), |acc, bit| {
            (acc << 1u32) + BigUint::from(u8::from(bit))
        })
    }
}

impl fmt::Display for BinaryDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("0");
        }
        for bit in self.msb_first() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
