//! Layout: shape and row stride for matrix memory layout

use std::fmt;

/// Layout describes how a matrix maps onto its flat buffer
///
/// Elements are stored contiguously in row-major order, so the element at
/// `(i, j)` lives at `i * columns + j`. The empty layout (0x0) describes a
/// matrix with no storage.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Layout {
    rows: usize,
    columns: usize,
}

impl Layout {
    /// Create a contiguous row-major layout
    ///
    /// # Example
    /// ```
    /// use densemat::matrix::Layout;
    /// let layout = Layout::contiguous(2, 3);
    /// assert_eq!(layout.shape(), (2, 3));
    /// assert_eq!(layout.row_stride(), 3);
    /// assert_eq!(layout.elem_count(), 6);
    /// ```
    pub const fn contiguous(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// The 0x0 layout of an empty matrix
    pub const fn empty() -> Self {
        Self {
            rows: 0,
            columns: 0,
        }
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `(rows, columns)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Elements between the starts of consecutive rows
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.columns
    }

    /// Total number of elements, or `None` on overflow
    pub fn checked_elem_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }

    /// Total number of elements
    #[inline]
    pub fn elem_count(&self) -> usize {
        self.rows * self.columns
    }

    /// True when the layout has no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    /// True for n x n layouts
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Flat buffer offset of `(row, col)`, or `None` when out of bounds
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.columns {
            Some(row * self.columns + col)
        } else {
            None
        }
    }

    /// Layout of the transposed matrix
    #[inline]
    pub fn transposed(&self) -> Self {
        Self {
            rows: self.columns,
            columns: self.rows,
        }
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Layout({}x{})", self.rows, self.columns)
    }
}
