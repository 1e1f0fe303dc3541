//! Matrix types
//!
//! This module provides the core `Matrix` type, a dense rows x columns grid of
//! `f64` held in one owned, row-major buffer.

mod core;
mod layout;
mod storage;

pub use core::Matrix;
pub use layout::Layout;
pub use storage::Storage;
