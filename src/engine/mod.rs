//! Storage engine contracts and the fixed-size engines implementing them.
//!
//! A storage engine owns a fixed-shape block of scalar elements and exposes
//! index-based read/write access plus shape queries. The container wrappers
//! in [`crate::vector`] and [`crate::matrix`] are generic over these
//! contracts, so any type implementing them plugs in: the crate's own
//! engines ([`vector4::Vector4Engine`], [`matrix4::Matrix4Engine`]) are the
//! register-accelerated ones, and foreign engines fall back to the
//! element-wise kernels in [`crate::ops::fallback`].
//!
//! # Index preconditions
//!
//! `element` / `element_mut` are hot-path accessors: indices outside the
//! engine's shape are a caller precondition, checked by `debug_assert!` in
//! debug builds only. The container wrappers are responsible for passing
//! valid indices.

use crate::error::{size_mismatch, Result};

pub mod matrix4;
pub mod vector4;

/// Contract for a fixed-shape one-dimensional storage engine.
pub trait VectorEngine {
    /// Reads component `i`. Precondition: `i < self.size()`.
    fn element(&self, i: usize) -> f32;

    /// Read-write access to component `i`. Precondition: `i < self.size()`.
    fn element_mut(&mut self, i: usize) -> &mut f32;

    /// Number of components held.
    fn size(&self) -> usize;

    /// Number of components the engine can hold; equals `size()` for
    /// non-resizable engines.
    fn capacity(&self) -> usize;

    /// Exchanges components `i` and `j` in place.
    fn swap_elements(&mut self, i: usize, j: usize) {
        if i != j {
            let a = self.element(i);
            let b = self.element(j);
            *self.element_mut(i) = b;
            *self.element_mut(j) = a;
        }
    }

    /// Element-wise assignment from any engine presenting this contract.
    ///
    /// Sizes must agree exactly; on disagreement the destination is left
    /// untouched and [`crate::error::EngineError::SizeMismatch`] is
    /// returned. Truncating or padding would silently produce a
    /// mathematically wrong result.
    fn assign_from<E: VectorEngine + ?Sized>(&mut self, rhs: &E) -> Result<()> {
        if rhs.size() != self.size() {
            return Err(size_mismatch((self.size(), 1), (rhs.size(), 1)));
        }

        for i in 0..self.size() {
            *self.element_mut(i) = rhs.element(i);
        }

        Ok(())
    }
}

/// Contract for a fixed-shape two-dimensional, row-major storage engine.
pub trait MatrixEngine {
    /// Reads the element at row `i`, column `j`. Precondition:
    /// `i < self.rows() && j < self.columns()`.
    fn element(&self, i: usize, j: usize) -> f32;

    /// Read-write access to the element at row `i`, column `j`. Same
    /// precondition as [`Self::element`].
    fn element_mut(&mut self, i: usize, j: usize) -> &mut f32;

    /// Number of rows held.
    fn rows(&self) -> usize;

    /// Number of columns held.
    fn columns(&self) -> usize;

    /// Shape as `(rows, columns)`.
    fn size(&self) -> (usize, usize) {
        (self.rows(), self.columns())
    }

    /// Shape the engine can hold; equals `size()` for non-resizable
    /// engines.
    fn capacity(&self) -> (usize, usize);

    /// Exchanges rows `i1` and `i2` in place.
    fn swap_rows(&mut self, i1: usize, i2: usize) {
        if i1 != i2 {
            for j in 0..self.columns() {
                let a = self.element(i1, j);
                let b = self.element(i2, j);
                *self.element_mut(i1, j) = b;
                *self.element_mut(i2, j) = a;
            }
        }
    }

    /// Exchanges columns `j1` and `j2` in place.
    fn swap_columns(&mut self, j1: usize, j2: usize) {
        if j1 != j2 {
            for i in 0..self.rows() {
                let a = self.element(i, j1);
                let b = self.element(i, j2);
                *self.element_mut(i, j1) = b;
                *self.element_mut(i, j2) = a;
            }
        }
    }

    /// Element-wise assignment from any engine presenting this contract.
    ///
    /// Shapes must agree exactly; on disagreement the destination is left
    /// untouched and [`crate::error::EngineError::SizeMismatch`] is
    /// returned.
    fn assign_from<E: MatrixEngine + ?Sized>(&mut self, rhs: &E) -> Result<()> {
        if rhs.size() != self.size() {
            return Err(size_mismatch(self.size(), rhs.size()));
        }

        for i in 0..self.rows() {
            for j in 0..self.columns() {
                *self.element_mut(i, j) = rhs.element(i, j);
            }
        }

        Ok(())
    }
}
