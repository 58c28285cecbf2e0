//! Fixed 4×4 matrix storage engine.
//!
//! `Matrix4Engine` owns exactly sixteen `f32` elements in row-major order
//! (`element(i, j)` lives at offset `i * 4 + j`) in a 16-byte aligned
//! array. Like the vector engine it is dual-viewed: the scalar view is the
//! indexable array, the register view is a 16-lane tile spanning the whole
//! matrix as one unit. Whole-matrix element-wise operations (add, subtract,
//! negate, scalar-multiply) go through the register view; row and column
//! sub-operations go through the scalar view only, since their element
//! groups cross register lanes.

use crate::engine::MatrixEngine;
use crate::simd::traits::{SimdLoad, SimdStore};
use crate::simd::F32x16;

/// Number of rows; fixed for the lifetime of every instance.
pub const ROWS: usize = 4;

/// Number of columns; fixed for the lifetime of every instance.
pub const COLUMNS: usize = 4;

/// Total element count of the row-major array.
pub const ELEMENTS: usize = ROWS * COLUMNS;

/// Fixed-size, non-resizable, row-major storage for a 4×4 block of `f32`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[repr(C, align(16))]
pub struct Matrix4Engine {
    elems: [f32; ELEMENTS],
}

impl Matrix4Engine {
    /// Row-major scalar view of the elements.
    #[inline(always)]
    pub fn as_slice(&self) -> &[f32] {
        &self.elems
    }

    /// Mutable row-major scalar view of the elements.
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.elems
    }

    /// Loads the 16-lane register view from the element array.
    #[inline(always)]
    pub fn to_register(&self) -> F32x16 {
        // The array is 16-byte aligned by the struct's repr.
        unsafe { F32x16::load_aligned(self.elems.as_ptr()) }
    }

    /// Materializes a register tile as a fresh engine.
    ///
    /// The result owns its own array; it never aliases the engine(s) the
    /// tile was loaded from.
    #[inline(always)]
    pub fn from_register(reg: F32x16) -> Self {
        let mut engine = Self::default();
        unsafe { reg.store_aligned_at(engine.elems.as_mut_ptr()) };
        engine
    }

    /// Exchanges all 16 elements with another engine.
    #[inline(always)]
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.elems, &mut other.elems);
    }
}

impl MatrixEngine for Matrix4Engine {
    #[inline(always)]
    fn element(&self, i: usize, j: usize) -> f32 {
        debug_assert!(i < ROWS, "row index {i} out of range 0..{ROWS}");
        debug_assert!(j < COLUMNS, "column index {j} out of range 0..{COLUMNS}");

        self.elems[i * COLUMNS + j]
    }

    #[inline(always)]
    fn element_mut(&mut self, i: usize, j: usize) -> &mut f32 {
        debug_assert!(i < ROWS, "row index {i} out of range 0..{ROWS}");
        debug_assert!(j < COLUMNS, "column index {j} out of range 0..{COLUMNS}");

        &mut self.elems[i * COLUMNS + j]
    }

    #[inline(always)]
    fn rows(&self) -> usize {
        ROWS
    }

    #[inline(always)]
    fn columns(&self) -> usize {
        COLUMNS
    }

    #[inline(always)]
    fn capacity(&self) -> (usize, usize) {
        (ROWS, COLUMNS)
    }

    #[inline(always)]
    fn swap_rows(&mut self, i1: usize, i2: usize) {
        if i1 != i2 {
            for j in 0..COLUMNS {
                self.elems.swap(i1 * COLUMNS + j, i2 * COLUMNS + j);
            }
        }
    }

    #[inline(always)]
    fn swap_columns(&mut self, j1: usize, j2: usize) {
        if j1 != j2 {
            for i in 0..ROWS {
                self.elems.swap(i * COLUMNS + j1, i * COLUMNS + j2);
            }
        }
    }
}

impl From<[f32; ELEMENTS]> for Matrix4Engine {
    /// Row-major literal construction.
    #[inline(always)]
    fn from(elems: [f32; ELEMENTS]) -> Self {
        Self { elems }
    }
}

impl FromIterator<f32> for Matrix4Engine {
    /// Row-major fill from up to 16 values, in order. A shorter sequence
    /// leaves the trailing elements at zero; extra values are ignored.
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        let mut engine = Self::default();

        for (slot, value) in engine.elems.iter_mut().zip(iter) {
            *slot = value;
        }

        engine
    }
}
