//! Fixed-size 4x4 matrices used by the cubic surface evaluators.
//!
//! The element type is generic so the same storage holds scalar basis
//! matrices (`Matrix4<f64>`) and control-point grids (`Matrix4<Point>`).
//! Everything lives on the stack; indexing is bounds checked.

use std::ops::{Add, Index, Mul};

/// A 4x4 matrix stored row-major.
///
/// # Examples
/// ```
/// use figure_mesh::core::matrix::Matrix4;
///
/// let m = Matrix4::from_rows([
///     [1.0, 2.0, 3.0, 4.0],
///     [0.0, 1.0, 0.0, 0.0],
///     [0.0, 0.0, 1.0, 0.0],
///     [0.0, 0.0, 0.0, 1.0],
/// ]);
/// assert_eq!(m[(0, 3)], 4.0);
/// assert_eq!(m.transpose()[(3, 0)], 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4<T> {
    rows: [[T; 4]; 4],
}

impl<T: Copy> Matrix4<T> {
    /// Builds a matrix from its rows.
    pub const fn from_rows(rows: [[T; 4]; 4]) -> Self {
        Self { rows }
    }

    /// Builds a matrix by evaluating `f(row, col)` for every cell.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self {
            rows: std::array::from_fn(|i| std::array::from_fn(|j| f(i, j))),
        }
    }

    /// Returns the transposed matrix.
    pub fn transpose(&self) -> Self {
        Self::from_fn(|i, j| self.rows[j][i])
    }
}

impl<T> Index<(usize, usize)> for Matrix4<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.rows[row][col]
    }
}

impl<T> Matrix4<T>
where
    T: Copy + Default + Add<Output = T> + Mul<f64, Output = T>,
{
    /// Left-multiplies by a scalar matrix: `lhs · self`.
    pub fn premultiply(&self, lhs: &Matrix4<f64>) -> Self {
        Self::from_fn(|i, j| {
            (0..4).fold(T::default(), |acc, k| acc + self.rows[k][j] * lhs[(i, k)])
        })
    }

    /// Right-multiplies by a scalar matrix: `self · rhs`.
    pub fn postmultiply(&self, rhs: &Matrix4<f64>) -> Self {
        Self::from_fn(|i, j| {
            (0..4).fold(T::default(), |acc, k| acc + self.rows[i][k] * rhs[(k, j)])
        })
    }

    /// Blends a control grid with a basis: `basis · self · basisᵗ`.
    ///
    /// The result is the coefficient matrix of the polynomial surface, ready
    /// for [`Matrix4::weighted_sum`].
    ///
    /// # Examples
    /// ```
    /// use figure_mesh::core::matrix::{Matrix4, IDENTITY};
    ///
    /// let p = Matrix4::from_fn(|i, j| (i * 4 + j) as f64);
    /// assert_eq!(p.blend(&IDENTITY), p);
    /// ```
    pub fn blend(&self, basis: &Matrix4<f64>) -> Self {
        self.premultiply(basis).postmultiply(&basis.transpose())
    }

    /// Evaluates `Σ_i row_weights[i] · Σ_j col_weights[j] · self[i][j]`.
    ///
    /// With power-basis weights `[t³, t², t, 1]` on both sides this evaluates
    /// a bicubic polynomial surface at one parameter pair.
    pub fn weighted_sum(&self, row_weights: [f64; 4], col_weights: [f64; 4]) -> T {
        self.rows
            .iter()
            .zip(row_weights)
            .fold(T::default(), |acc, (row, rw)| {
                let blended = row
                    .iter()
                    .zip(col_weights)
                    .fold(T::default(), |inner, (&cell, cw)| inner + cell * cw);
                acc + blended * rw
            })
    }
}

/// The 4x4 identity matrix.
pub const IDENTITY: Matrix4<f64> = Matrix4::from_rows([
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
]);

/// Power basis `[t³, t², t, 1]` for a cubic parameter.
///
/// # Examples
/// ```
/// use figure_mesh::core::matrix::cubic_powers;
/// assert_eq!(cubic_powers(2.0), [8.0, 4.0, 2.0, 1.0]);
/// ```
#[inline]
pub fn cubic_powers(t: f64) -> [f64; 4] {
    [t * t * t, t * t, t, 1.0]
}
