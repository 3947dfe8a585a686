//! # Modular Ring Matrix Power Library
//!
//! This library evaluates linear recurrences and transfer-matrix counting problems in
//! logarithmic time by raising square matrices over a modular ring to large powers. Exponents
//! may be native unsigned integers or decimal strings of any length.
//!
//! ## Key Features
//! - **Modular Ring**: `u64` residues under a runtime modulus, with overflow-free
//!   multiplication through a `u128` intermediate and always non-negative subtraction.
//! - **Big Decimal Exponents**: Decimal strings are halved digit by digit to produce the
//!   binary digits driving the exponentiation.
//! - **Generic Binary Exponentiation**: Works for any type with an associative
//!   multiplication and a neutral element: ring elements, matrices, exact `BigUint` values.
//! - **Recurrence Models**: Companion matrices of linear recurrences and profile transfer
//!   matrices, with a configurable readout of the answer.
//!
//! ## Overview of Modules
//!
//! ### Errors
//! - `EngineError`: Enum of caller-facing validation failures, such as a zero modulus,
//!   malformed decimal text, non-square matrices or out-of-range recurrence parameters.
//!
//! ### `ring`
//! `Modulus` and `ModRing`, plus the `Ring` trait that matrix cells implement.
//!
//! ### `decimal`
//! `BigDecimal` with decrement, division by two and conversion to `BinaryDigits`.
//!
//! ### `matrix`
//! `SquareMatrix<T>` with products, the identity constructor and cell reductions.
//!
//! ### `power`
//! `power` walks a native exponent from the least-significant bit, `power_by_digits` and
//! `power_by_decimal` walk decimal-sourced bits from the most-significant end. Both agree for
//! the same exponent.
//!
//! ### `recurrence`
//! `TransferModel` ties a transition matrix to a `Readout` and a base case anchored at index 1.
//! `linear_recurrence`, `profile_coloring` and `fibonacci_pair` build the common models.
//!
//! ## Usage Example
//! ```rust
//! use ring_power::decimal::BigDecimal;
//! use ring_power::recurrence::{linear_recurrence, profile_coloring};
//! use ring_power::ring::Modulus;
//!
//! let m = Modulus::new(1_000_003).unwrap();
//! let five_sum = linear_recurrence(m, &[1, 1, 1, 1, 1]).unwrap();
//! assert_eq!(five_sum.value_at(6).unwrap().value(), 16);
//!
//! let grid = profile_coloring(2, Modulus::new(1_000_000_007).unwrap()).unwrap();
//! let length: BigDecimal = "3".parse().unwrap();
//! assert_eq!(grid.value_at_decimal(&length).unwrap().value(), 50);
//! ```

pub mod decimal;
pub mod error;
pub mod matrix;
pub mod power;
pub mod recurrence;
pub mod ring;

pub use error::{EngineError, Result};
