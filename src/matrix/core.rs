//! Core Matrix type

use super::{Layout, Storage};
use crate::error::{Error, Result};
use crate::tolerance::Tolerance;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Dense rows x columns matrix of `f64`
///
/// `Matrix` consists of:
/// - **Storage**: an owned, contiguous buffer of `rows * columns` elements
/// - **Layout**: the shape and row stride used to address that buffer
///
/// A matrix is either *valid* (storage present, both dimensions at least 1)
/// or *empty* (no storage, shape 0x0). Empty matrices come from
/// [`Matrix::empty`] or from [`Matrix::release`]; every operation that needs
/// a valid operand rejects them with [`Error::InvalidArgument`].
///
/// Cloning performs a deep copy. Storage is freed on drop.
///
/// # Example
///
/// ```
/// use densemat::prelude::*;
///
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
/// assert_eq!(a.shape(), (2, 2));
/// assert_eq!(a[(1, 0)], 3.0);
/// # Ok::<(), densemat::error::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct Matrix {
    storage: Storage,
    layout: Layout,
}

impl Matrix {
    /// Create a zero-filled `rows x columns` matrix
    ///
    /// Fails with [`Error::InvalidDimensions`] if either dimension is zero and
    /// with [`Error::OutOfMemory`] if storage cannot be obtained.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        let layout = Self::checked_layout(rows, columns)?;
        let len = layout
            .checked_elem_count()
            .ok_or(Error::OutOfMemory { size: usize::MAX })?;
        let storage = Storage::zeroed(len)?;
        Ok(Self { storage, layout })
    }

    /// The empty matrix (no storage, shape 0x0)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a matrix from row-major data
    pub fn from_slice(data: &[f64], rows: usize, columns: usize) -> Result<Self> {
        let layout = Self::checked_layout(rows, columns)?;
        if layout.checked_elem_count() != Some(data.len()) {
            return Err(Error::dimension_mismatch(
                "from_slice",
                (rows, columns),
                (data.len(), 1),
            ));
        }
        let storage = Storage::from_slice(data)?;
        Ok(Self { storage, layout })
    }

    /// Create a matrix from a list of equally sized rows
    ///
    /// Fails with [`Error::InvalidDimensions`] when there are no rows or the
    /// rows are empty, and with [`Error::DimensionMismatch`] when rows differ
    /// in length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let columns = rows.first().map_or(0, |r| r.as_ref().len());
        let mut matrix = Self::new(rows.len(), columns)?;
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(Error::dimension_mismatch(
                    "from_rows",
                    (rows.len(), columns),
                    (rows.len(), row.len()),
                ));
            }
            matrix.row_mut(i).copy_from_slice(row);
        }
        Ok(matrix)
    }

    /// Create a matrix whose `(i, j)` cell is `f(i, j)`
    pub fn from_fn<F>(rows: usize, columns: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut matrix = Self::new(rows, columns)?;
        for i in 0..rows {
            for (j, cell) in matrix.row_mut(i).iter_mut().enumerate() {
                *cell = f(i, j);
            }
        }
        Ok(matrix)
    }

    /// The `n x n` identity matrix
    pub fn identity(n: usize) -> Result<Self> {
        let mut matrix = Self::new(n, n)?;
        for i in 0..n {
            matrix[(i, i)] = 1.0;
        }
        Ok(matrix)
    }

    fn checked_layout(rows: usize, columns: usize) -> Result<Layout> {
        if rows == 0 || columns == 0 {
            return Err(Error::InvalidDimensions { rows, columns });
        }
        Ok(Layout::contiguous(rows, columns))
    }

    /// Free the storage and reset the shape to 0x0
    ///
    /// Releasing an already empty matrix does nothing.
    pub fn release(&mut self) {
        self.storage.release();
        self.layout = Layout::empty();
    }

    /// True iff storage is present and both dimensions are at least 1
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.layout.is_empty() && self.storage.len() == self.layout.elem_count()
    }

    /// Precondition guard: [`Error::InvalidArgument`] unless [`Self::is_valid`]
    pub fn validate(&self) -> Result<()> {
        self.validate_arg("matrix")
    }

    pub(crate) fn validate_arg(&self, arg: &'static str) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::invalid_matrix(arg))
        }
    }

    /// Compare with the default tolerance (1e-7 absolute, per cell)
    ///
    /// Matrices of different shape are never equal.
    pub fn approx_eq(&self, other: &Matrix) -> bool {
        self.approx_eq_with(other, Tolerance::default())
    }

    /// Compare with an explicit per-cell absolute tolerance
    pub fn approx_eq_with(&self, other: &Matrix, tol: Tolerance) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(&a, &b)| tol.close(a, b))
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.layout.rows()
    }

    /// Number of columns
    #[inline]
    pub fn columns(&self) -> usize {
        self.layout.columns()
    }

    /// `(rows, columns)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.layout.shape()
    }

    /// Shape and row stride
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// True for n x n matrices
    #[inline]
    pub fn is_square(&self) -> bool {
        self.layout.is_square()
    }

    /// Row-major view of every cell
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        self.storage.as_slice()
    }

    /// Mutable row-major view of every cell
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        self.storage.as_mut_slice()
    }

    /// Copy the cells out in row-major order
    pub fn to_vec(&self) -> Vec<f64> {
        self.as_slice().to_vec()
    }

    /// Row `i`
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows`.
    pub fn row(&self, i: usize) -> &[f64] {
        let stride = self.layout.row_stride();
        &self.as_slice()[i * stride..(i + 1) * stride]
    }

    /// Mutable row `i`
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows`.
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        let stride = self.layout.row_stride();
        &mut self.as_mut_slice()[i * stride..(i + 1) * stride]
    }

    /// Checked read of cell `(i, j)`
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.layout.index(i, j).map(|idx| self.as_slice()[idx])
    }

    /// Checked write of cell `(i, j)`
    pub fn set(&mut self, i: usize, j: usize, value: f64) -> Result<()> {
        let idx = self.checked_index(i, j)?;
        self.as_mut_slice()[idx] = value;
        Ok(())
    }

    fn checked_index(&self, i: usize, j: usize) -> Result<usize> {
        if i >= self.rows() {
            return Err(Error::IndexOutOfBounds {
                index: i,
                size: self.rows(),
            });
        }
        if j >= self.columns() {
            return Err(Error::IndexOutOfBounds {
                index: j,
                size: self.columns(),
            });
        }
        Ok(i * self.layout.row_stride() + j)
    }

    /// Exchange rows `a` and `b` in place
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let stride = self.layout.row_stride();
        let (lo, hi) = (a.min(b), a.max(b));
        let (head, tail) = self.as_mut_slice().split_at_mut(hi * stride);
        head[lo * stride..(lo + 1) * stride].swap_with_slice(&mut tail[..stride]);
    }

    /// Iterate over rows
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact panics on a zero chunk size
        let stride = self.layout.row_stride().max(1);
        self.as_slice().chunks_exact(stride)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        match self.layout.index(i, j) {
            Some(idx) => &self.as_slice()[idx],
            None => panic!(
                "index ({i}, {j}) out of bounds for {}x{} matrix",
                self.rows(),
                self.columns()
            ),
        }
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        match self.layout.index(i, j) {
            Some(idx) => &mut self.as_mut_slice()[idx],
            None => panic!(
                "index ({i}, {j}) out of bounds for {}x{} matrix",
                self.rows(),
                self.columns()
            ),
        }
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("shape", &self.shape())
            .field("data", &self.as_slice())
            .finish()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "Matrix(empty)");
        }
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}
