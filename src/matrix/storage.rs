//! Storage: owned, contiguous f64 buffer

use crate::error::{Error, Result};

/// Owned backing buffer of a matrix
///
/// Memory is obtained with a single fallible reservation, so allocation
/// either fully succeeds or fails without leaving anything behind. The
/// buffer is freed when the storage is dropped or released.
#[derive(Clone, Default, PartialEq)]
pub struct Storage {
    data: Vec<f64>,
}

impl Storage {
    /// Allocate `len` zero-initialised elements
    ///
    /// Returns [`Error::OutOfMemory`] if the allocator refuses the request or
    /// the byte size overflows.
    pub fn zeroed(len: usize) -> Result<Self> {
        let size_bytes = len
            .checked_mul(std::mem::size_of::<f64>())
            .ok_or(Error::OutOfMemory { size: usize::MAX })?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::OutOfMemory { size: size_bytes })?;
        data.resize(len, 0.0);

        Ok(Self { data })
    }

    /// Copy `values` into freshly allocated storage
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        let mut storage = Self::zeroed(values.len())?;
        storage.data.copy_from_slice(values);
        Ok(storage)
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when no memory is held
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Size in bytes
    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<f64>()
    }

    /// Elements in row-major order
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable elements in row-major order
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Free the buffer, leaving empty storage behind
    pub fn release(&mut self) {
        self.data = Vec::new();
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("len", &self.data.len())
            .field("capacity", &self.data.capacity())
            .finish()
    }
}
