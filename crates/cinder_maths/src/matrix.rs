//! Row-major matrices and the standard transform builders.
//!
//! Sizes up to 4x4 are what the renderer uses, but nothing here assumes a
//! fixed dimension except the transform constructors and tuple
//! multiplication, which are 4x4 by definition.

use serde::{Deserialize, Serialize};

use crate::scalar;
use crate::tuple::Tuple;

/// A row-major matrix of `f64` elements.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a matrix with every element zero.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn zeroed(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "matrix dimensions must be non-zero");
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Creates the identity matrix of the given dimension.
    #[must_use]
    pub fn identity(size: usize) -> Self {
        let mut matrix = Self::zeroed(size, size);
        for i in 0..size {
            matrix.set(i, i, 1.0);
        }

        matrix
    }

    /// Creates a matrix from row slices.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty or the rows differ in length.
    #[must_use]
    pub fn from_rows(rows: &[&[f64]]) -> Self {
        assert!(!rows.is_empty(), "matrix needs at least one row");
        let cols = rows[0].len();
        assert!(cols > 0, "matrix needs at least one column");

        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            assert_eq!(row.len(), cols, "matrix rows must have equal length");
            data.extend_from_slice(row);
        }

        Self {
            rows: rows.len(),
            cols,
            data,
        }
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics on an out-of-range index.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols, "matrix index out of range");
        self.data[row * self.cols + col]
    }

    /// Sets the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics on an out-of-range index.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        assert!(row < self.rows && col < self.cols, "matrix index out of range");
        self.data[row * self.cols + col] = value;
    }

    /// Element-wise epsilon equality. Matrices of different shapes are never
    /// equal.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| scalar::approx_eq(a, b))
    }

    /// Matrix product `self x other`.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions do not agree.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        assert_eq!(
            self.cols, other.rows,
            "cannot multiply {}x{} by {}x{}",
            self.rows, self.cols, other.rows, other.cols
        );

        let mut product = Self::zeroed(self.rows, other.cols);
        for row in 0..self.rows {
            for col in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.get(row, k) * other.get(k, col);
                }
                product.set(row, col, sum);
            }
        }

        product
    }

    /// Applies this 4x4 matrix to a tuple.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not 4x4.
    #[must_use]
    pub fn transform(&self, tuple: Tuple) -> Tuple {
        assert!(
            self.rows == 4 && self.cols == 4,
            "tuple transform requires a 4x4 matrix"
        );

        let components = [tuple.x, tuple.y, tuple.z, tuple.w];
        let mut result = [0.0; 4];
        for (row, slot) in result.iter_mut().enumerate() {
            *slot = (0..4)
                .map(|col| self.get(row, col) * components[col])
                .sum();
        }

        Tuple::new(result[0], result[1], result[2], result[3])
    }

    /// Returns the transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut transposed = Self::zeroed(self.cols, self.rows);
        for row in 0..self.rows {
            for col in 0..self.cols {
                transposed.set(col, row, self.get(row, col));
            }
        }

        transposed
    }

    /// Returns the matrix with the given row and column removed.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is 1x1 or the indices are out of range.
    #[must_use]
    pub fn submatrix(&self, skip_row: usize, skip_col: usize) -> Self {
        assert!(
            self.rows > 1 && self.cols > 1,
            "submatrix of a 1x1 matrix does not exist"
        );
        assert!(skip_row < self.rows && skip_col < self.cols, "matrix index out of range");

        let mut sub = Self::zeroed(self.rows - 1, self.cols - 1);
        let mut target = 0;
        for row in 0..self.rows {
            if row == skip_row {
                continue;
            }
            for col in 0..self.cols {
                if col == skip_col {
                    continue;
                }
                sub.data[target] = self.get(row, col);
                target += 1;
            }
        }

        sub
    }

    /// Determinant of the submatrix at `(row, col)`.
    #[must_use]
    pub fn minor(&self, row: usize, col: usize) -> f64 {
        self.submatrix(row, col).determinant()
    }

    /// Signed minor at `(row, col)`.
    #[must_use]
    pub fn cofactor(&self, row: usize, col: usize) -> f64 {
        let minor = self.minor(row, col);
        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        assert_eq!(self.rows, self.cols, "determinant requires a square matrix");

        if self.rows == 1 {
            return self.data[0];
        }
        if self.rows == 2 {
            return self.get(0, 0) * self.get(1, 1) - self.get(0, 1) * self.get(1, 0);
        }

        (0..self.cols)
            .map(|col| self.get(0, col) * self.cofactor(0, col))
            .sum()
    }

    /// Returns true if the determinant is non-zero.
    #[must_use]
    pub fn is_invertible(&self) -> bool {
        !scalar::approx_eq(self.determinant(), 0.0)
    }

    /// Returns the inverse, or `None` for a singular matrix.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let determinant = self.determinant();
        if scalar::approx_eq(determinant, 0.0) {
            return None;
        }

        let mut inverse = Self::zeroed(self.rows, self.cols);
        for row in 0..self.rows {
            for col in 0..self.cols {
                // transposed assignment folds the adjugate step in
                inverse.set(col, row, self.cofactor(row, col) / determinant);
            }
        }

        Some(inverse)
    }

    /// A 4x4 matrix translating points by `(x, y, z)`. Vectors are
    /// unaffected by translation.
    #[must_use]
    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        let mut matrix = Self::identity(4);
        matrix.set(0, 3, x);
        matrix.set(1, 3, y);
        matrix.set(2, 3, z);
        matrix
    }

    /// A 4x4 scaling matrix.
    #[must_use]
    pub fn scaling(x: f64, y: f64, z: f64) -> Self {
        let mut matrix = Self::identity(4);
        matrix.set(0, 0, x);
        matrix.set(1, 1, y);
        matrix.set(2, 2, z);
        matrix
    }

    /// A 4x4 rotation about the x axis, in radians.
    #[must_use]
    pub fn rotation_x(radians: f64) -> Self {
        let mut matrix = Self::identity(4);
        matrix.set(1, 1, radians.cos());
        matrix.set(1, 2, -radians.sin());
        matrix.set(2, 1, radians.sin());
        matrix.set(2, 2, radians.cos());
        matrix
    }

    /// A 4x4 rotation about the y axis, in radians.
    #[must_use]
    pub fn rotation_y(radians: f64) -> Self {
        let mut matrix = Self::identity(4);
        matrix.set(0, 0, radians.cos());
        matrix.set(0, 2, radians.sin());
        matrix.set(2, 0, -radians.sin());
        matrix.set(2, 2, radians.cos());
        matrix
    }

    /// A 4x4 rotation about the z axis, in radians.
    #[must_use]
    pub fn rotation_z(radians: f64) -> Self {
        let mut matrix = Self::identity(4);
        matrix.set(0, 0, radians.cos());
        matrix.set(0, 1, -radians.sin());
        matrix.set(1, 0, radians.sin());
        matrix.set(1, 1, radians.cos());
        matrix
    }

    /// A 4x4 shearing matrix; each parameter moves one component in
    /// proportion to another.
    #[must_use]
    pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Self {
        let mut matrix = Self::identity(4);
        matrix.set(0, 1, xy);
        matrix.set(0, 2, xz);
        matrix.set(1, 0, yx);
        matrix.set(1, 2, yz);
        matrix.set(2, 0, zx);
        matrix.set(2, 1, zy);
        matrix
    }

    /// Folds a list of transforms into one matrix, applied in the order
    /// given (the first entry acts on the tuple first). An empty list
    /// yields the identity.
    #[must_use]
    pub fn chained(transforms: &[Self]) -> Self {
        transforms
            .iter()
            .fold(Self::identity(4), |acc, matrix| matrix.multiply(&acc))
    }
}

impl std::ops::Mul for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: Self) -> Matrix {
        self.multiply(rhs)
    }
}

impl std::ops::Mul<Tuple> for &Matrix {
    type Output = Tuple;
    fn mul(self, rhs: Tuple) -> Tuple {
        self.transform(rhs)
    }
}
