use log::debug;
use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::decimal::BigDecimal;
use crate::error::{EngineError, Result};
use crate::matrix::SquareMatrix;
use crate::power::{power, power_by_decimal};
use crate::ring::{ModRing, Modulus, Ring};

/// Widest profile accepted by [`profile_coloring`]; the transition matrix has
/// `2^width` rows.
pub const MAX_PROFILE_WIDTH: u32 = 8;

/// Which part of an exponentiated transition matrix forms the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readout {
    Cell { row: usize, col: usize },
    SumAll,
}

impl Readout {
    pub fn read<T: Ring>(&self, matrix: &SquareMatrix<T>) -> T {
        match *self {
            Readout::Cell { row, col } => matrix[(row, col)].clone(),
            Readout::SumAll => matrix.sum(),
        }
    }
}

/// A transition matrix, how to read an answer out of its powers, and the
/// answer at the anchor index 1.
#[derive(Debug, Clone)]
pub struct TransferModel {
    transition: SquareMatrix<ModRing>,
    readout: Readout,
    base_case: ModRing,
}

impl TransferModel {
    pub fn new(
        transition: SquareMatrix<ModRing>,
        readout: Readout,
        base_case: ModRing,
    ) -> Result<Self> {
        let size = transition.dimension();
        if let Readout::Cell { row, col } = readout {
            if row >= size || col >= size {
                return Err(EngineError::ReadoutOutOfRange { row, col, size });
            }
        }
        Ok(Self {
            transition,
            readout,
            base_case,
        })
    }

    pub fn transition(&self) -> &SquareMatrix<ModRing> {
        &self.transition
    }

    pub fn readout(&self) -> Readout {
        self.readout
    }

    pub fn base_case(&self) -> ModRing {
        self.base_case
    }

    /// Reads the answer from `transition^steps`; zero steps reads the identity.
    pub fn after_steps(&self, steps: u64) -> ModRing {
        let identity = self.transition.identity_like();
        let result = if steps == 0 {
            identity
        } else {
            power(self.transition.clone(), steps, identity)
        };
        self.readout.read(&result)
    }

    pub fn after_decimal_steps(&self, steps: &BigDecimal) -> ModRing {
        let identity = self.transition.identity_like();
        let result = if steps.is_zero() {
            identity
        } else {
            power_by_decimal(self.transition.clone(), steps, identity)
        };
        self.readout.read(&result)
    }

    /// Answer at `index`, counted from the anchor at index 1.
    ///
    /// Index 1 is the base case and never touches the matrix; any later
    /// index reads `transition^(index - 1)`.
    pub fn value_at(&self, index: u64) -> Result<ModRing> {
        match index {
            0 => Err(EngineError::IndexBeforeAnchor),
            1 => Ok(self.base_case),
            _ => Ok(self.after_steps(index - 1)),
        }
    }

    pub fn value_at_decimal(&self, index: &BigDecimal) -> Result<ModRing> {
        let steps = index
            .checked_decrement()
            .ok_or(EngineError::IndexBeforeAnchor)?;
        if steps.is_zero() {
            return Ok(self.base_case);
        }
        Ok(self.after_decimal_steps(&steps))
    }
}

/// `f(n) = c[0]*f(n-1) + c[1]*f(n-2) + ... + c[k-1]*f(n-k)` over a modular
/// ring, evaluated through its companion matrix.
#[derive(Debug, Clone)]
pub struct LinearRecurrence {
    coefficients: Vec<ModRing>,
    model: TransferModel,
}

impl LinearRecurrence {
    pub fn new(modulus: Modulus, coefficients: &[i64]) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(EngineError::EmptyRecurrence);
        }
        let coefficients: Vec<ModRing> = coefficients
            .iter()
            .map(|&c| ModRing::from_signed(c, modulus))
            .collect();

        // row 0 combines the previous k values, the rest shifts the window
        let order = coefficients.len();
        let mut transition = SquareMatrix::filled(order, ModRing::zero(modulus));
        for (col, &c) in coefficients.iter().enumerate() {
            transition[(0, col)] = c;
        }
        for row in 1..order {
            transition[(row, row - 1)] = ModRing::one(modulus);
        }
        debug!("companion matrix for order {order} recurrence mod {modulus}");

        let model = TransferModel::new(
            transition,
            Readout::Cell { row: 0, col: 0 },
            ModRing::one(modulus),
        )?;
        Ok(Self {
            coefficients,
            model,
        })
    }

    pub fn order(&self) -> usize {
        self.coefficients.len()
    }

    pub fn coefficients(&self) -> &[ModRing] {
        &self.coefficients
    }

    pub fn model(&self) -> &TransferModel {
        &self.model
    }

    pub fn into_model(self) -> TransferModel {
        self.model
    }

    /// `f(index)` given the initial window `[f(0), ..., f(k-1)]`.
    pub fn term(&self, index: u64, initial: &[i64]) -> Result<ModRing> {
        let order = self.order();
        if initial.len() != order {
            return Err(EngineError::InitialWindowLength {
                expected: order,
                found: initial.len(),
            });
        }
        let modulus = self.coefficients[0].modulus();
        let mut state: Vec<ModRing> = initial
            .iter()
            .map(|&v| ModRing::from_signed(v, modulus))
            .collect();

        let newest = order as u64 - 1;
        if index <= newest {
            return Ok(state[index as usize]);
        }

        state.reverse();
        let transition = self.model.transition();
        let advanced = power(transition.clone(), index - newest, transition.identity_like());
        Ok(advanced.apply(&state)[0])
    }
}

/// Companion-matrix model of a linear recurrence, anchored at index 1 with
/// base case one and read from cell (0, 0).
///
/// ```
/// use ring_power::recurrence::linear_recurrence;
/// use ring_power::ring::Modulus;
/// let m = Modulus::new(1_000_003).unwrap();
/// let model = linear_recurrence(m, &[1, 1, 1, 1, 1]).unwrap();
/// assert_eq!(model.value_at(1).unwrap().value(), 1);
/// assert_eq!(model.value_at(6).unwrap().value(), 16);
/// ```
pub fn linear_recurrence(modulus: Modulus, coefficients: &[i64]) -> Result<TransferModel> {
    LinearRecurrence::new(modulus, coefficients).map(LinearRecurrence::into_model)
}

/// Counts two-colourings of a `width x length` grid with no single-coloured
/// 2x2 square, one column profile per step.
///
/// `value_at(length)` gives the count modulo `modulus`.
pub fn profile_coloring(width: u32, modulus: Modulus) -> Result<TransferModel> {
    if width == 0 {
        return Err(EngineError::ZeroWidth);
    }
    if width > MAX_PROFILE_WIDTH {
        return Err(EngineError::WidthTooLarge {
            width,
            max: MAX_PROFILE_WIDTH,
        });
    }

    let profiles = 1usize << width;
    let mut transition = SquareMatrix::filled(profiles, ModRing::one(modulus));
    for left in 0..profiles {
        for right in 0..profiles {
            if !profiles_compatible(left, right, width) {
                transition[(left, right)] = ModRing::zero(modulus);
            }
        }
    }
    debug!("profile transfer matrix: width {width}, {profiles} profiles");

    TransferModel::new(
        transition,
        Readout::SumAll,
        ModRing::new(1u64 << width, modulus),
    )
}

// Two adjacent columns clash when rows i and i+1 form a single-coloured square.
fn profiles_compatible(left: usize, right: usize, width: u32) -> bool {
    let bit = |profile: usize, row: u32| (profile >> row) & 1;
    !(0..width.saturating_sub(1)).any(|row| {
        let corner = bit(left, row);
        corner == bit(right, row) && corner == bit(left, row + 1) && corner == bit(right, row + 1)
    })
}

/// Computes `(F(n), F(n+1))` exactly by raising `[[1, 1], [1, 0]]` to the n-th power.
///
/// ```
/// use ring_power::recurrence::fibonacci_pair;
/// use num_bigint::BigUint;
/// let (f99, _) = fibonacci_pair(99);
/// assert_eq!(f99, BigUint::parse_bytes(b"218922995834555169026", 10).unwrap());
/// ```
pub fn fibonacci_pair(n: u64) -> (BigUint, BigUint) {
    let mut q = SquareMatrix::filled(2, BigUint::one());
    q[(1, 1)] = BigUint::zero();
    let identity = q.identity_like();

    let result = power(q, n, identity);
    (result[(0, 1)].clone(), result[(0, 0)].clone())
}

pub fn fibonacci_mod(n: u64, modulus: Modulus) -> ModRing {
    let mut q = SquareMatrix::filled(2, ModRing::one(modulus));
    q[(1, 1)] = ModRing::zero(modulus);
    let identity = q.identity_like();

    power(q, n, identity)[(0, 1)]
}
