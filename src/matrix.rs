use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use crate::error::{EngineError, Result};
use crate::ring::{ModRing, Modulus, Ring};

// Square matrix over a ring, stored row-major
#[derive(Clone, PartialEq, Eq)]
pub struct SquareMatrix<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Ring> SquareMatrix<T> {
    /// Ring-one on the diagonal, ring-zero elsewhere: the neutral element of
    /// [`multiply`](Self::multiply).
    pub fn identity(size: usize, zero: T, one: T) -> Self {
        assert!(size > 0, "matrix dimension must be positive");
        let mut matrix = Self::filled(size, zero);
        for i in 0..size {
            matrix[(i, i)] = one.clone();
        }
        matrix
    }

    pub fn filled(size: usize, value: T) -> Self {
        assert!(size > 0, "matrix dimension must be positive");
        Self {
            size,
            cells: vec![value; size * size],
        }
    }

    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 || rows.iter().any(|row| row.len() != size) {
            return Err(EngineError::NotSquare);
        }
        Ok(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Identity of the same dimension and ring as `self`.
    pub fn identity_like(&self) -> Self {
        let sample = &self.cells[0];
        Self::identity(self.size, sample.zero_like(), sample.one_like())
    }

    pub fn dimension(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.size && col < self.size {
            self.cells.get(row * self.size + col)
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.size)
    }

    /// Matrix product `self * other`.
    ///
    /// # Panics
    /// Panics if the dimensions differ.
    pub fn multiply(&self, other: &Self) -> Self {
        assert_eq!(
            self.size, other.size,
            "cannot multiply matrices of different dimensions"
        );
        let n = self.size;
        let mut cells = Vec::with_capacity(n * n);
        for i in 0..n {
            let row = &self.cells[i * n..(i + 1) * n];
            for j in 0..n {
                let mut acc = row[0].ring_mul(&other.cells[j]);
                for (k, lhs) in row.iter().enumerate().skip(1) {
                    acc = acc.ring_add(&lhs.ring_mul(&other.cells[k * n + j]));
                }
                cells.push(acc);
            }
        }
        Self { size: n, cells }
    }

    pub fn checked_multiply(&self, other: &Self) -> Result<Self> {
        if self.size != other.size {
            return Err(EngineError::DimensionMismatch {
                left: self.size,
                right: other.size,
            });
        }
        Ok(self.multiply(other))
    }

    /// Multiplies the matrix by a column vector.
    ///
    /// # Panics
    /// Panics if the vector length differs from the dimension.
    pub fn apply(&self, vector: &[T]) -> Vec<T> {
        assert_eq!(
            vector.len(),
            self.size,
            "vector length must match matrix dimension"
        );
        self.rows()
            .map(|row| {
                row.iter()
                    .zip(vector)
                    .skip(1)
                    .fold(row[0].ring_mul(&vector[0]), |acc, (a, x)| {
                        acc.ring_add(&a.ring_mul(x))
                    })
            })
            .collect()
    }

    pub fn sum(&self) -> T {
        self.cells[1..]
            .iter()
            .fold(self.cells[0].clone(), |acc, cell| acc.ring_add(cell))
    }

    pub fn trace(&self) -> T {
        (1..self.size).fold(self[(0, 0)].clone(), |acc, i| {
            acc.ring_add(&self[(i, i)])
        })
    }
}

impl SquareMatrix<ModRing> {
    pub fn identity_mod(size: usize, modulus: Modulus) -> Self {
        Self::identity(size, ModRing::zero(modulus), ModRing::one(modulus))
    }

    /// Builds a matrix from a literal grid of integers, each reduced modulo
    /// `modulus`.
    ///
    /// ```
    /// use ring_power::matrix::SquareMatrix;
    /// use ring_power::ring::Modulus;
    /// let m = Modulus::new(10).unwrap();
    /// let a = SquareMatrix::from_integers(m, [[1, 1], [1, 0]]).unwrap();
    /// let b = &a * &a;
    /// assert_eq!(b.get(0, 0).map(|x| x.value()), Some(2));
    /// ```
    pub fn from_integers<R, I>(modulus: Modulus, rows: R) -> Result<Self>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = i64>,
    {
        Self::from_rows(
            rows.into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|value| ModRing::from_signed(value, modulus))
                        .collect()
                })
                .collect(),
        )
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.size && col < self.size, "matrix index out of range");
        &self.cells[row * self.size + col]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.size && col < self.size, "matrix index out of range");
        &mut self.cells[row * self.size + col]
    }
}

impl<'a, 'b, T: Ring> Mul<&'b SquareMatrix<T>> for &'a SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn mul(self, rhs: &'b SquareMatrix<T>) -> SquareMatrix<T> {
        self.multiply(rhs)
    }
}

impl<T: Ring> Mul for SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn mul(self, rhs: SquareMatrix<T>) -> SquareMatrix<T> {
        self.multiply(&rhs)
    }
}

impl<T: fmt::Debug> fmt::Debug for SquareMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.cells.chunks(self.size))
            .finish()
    }
}
