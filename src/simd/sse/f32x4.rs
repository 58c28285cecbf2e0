//! SSE 4-lane f32 SIMD register.
//!
//! `F32x4` wraps the 128-bit `__m128` register to operate on the four
//! elements of a vector engine at once. Lane `i` of the register always
//! corresponds to element `i` of the owning engine, so lane-wise arithmetic
//! produces bit-identical results to an element-by-element scalar loop:
//! lanes are combined independently, in index order, with no reassociation.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, Mul, Neg, Sub};

use crate::simd::traits::{Alignment, SimdLoad, SimdStore};

/// SSE memory alignment requirement in bytes.
pub(crate) const SSE_ALIGNMENT: usize = 16;

/// Number of f32 elements in a 128-bit register.
pub const LANE_COUNT: usize = 4;

/// SSE SIMD register containing 4 packed f32 values.
///
/// A transient view over a storage engine's elements, loaded on demand and
/// stored back out after the operation. Copying the register never aliases
/// the memory it was loaded from.
#[derive(Copy, Clone, Debug)]
pub struct F32x4 {
    /// 128-bit register holding 4 packed f32 values
    pub elements: __m128,
}

impl F32x4 {
    /// Copies the register out into a plain array.
    #[inline(always)]
    pub fn to_array(self) -> [f32; LANE_COUNT] {
        let mut out = [0.0f32; LANE_COUNT];
        unsafe { self.store_unaligned_at(out.as_mut_ptr()) };
        out
    }
}

impl Alignment<f32> for F32x4 {
    /// Checks 16-byte alignment, the boundary `_mm_load_ps` requires.
    #[inline(always)]
    fn is_aligned(ptr: *const f32) -> bool {
        let ptr = ptr as usize;

        ptr % SSE_ALIGNMENT == 0
    }
}

impl SimdLoad<f32> for F32x4 {
    /// Loads 4 elements, choosing the aligned or unaligned instruction.
    #[inline(always)]
    unsafe fn load(ptr: *const f32) -> Self {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        match Self::is_aligned(ptr) {
            true => unsafe { Self::load_aligned(ptr) },
            false => unsafe { Self::load_unaligned(ptr) },
        }
    }

    /// Loads 4 elements from 16-byte aligned memory with `_mm_load_ps`.
    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f32) -> Self {
        Self {
            elements: _mm_load_ps(ptr),
        }
    }

    /// Loads 4 elements from unaligned memory with `_mm_loadu_ps`.
    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self {
        Self {
            elements: _mm_loadu_ps(ptr),
        }
    }

    /// Broadcasts `value` into all 4 lanes.
    #[inline(always)]
    unsafe fn splat(value: f32) -> Self {
        Self {
            elements: _mm_set1_ps(value),
        }
    }
}

impl SimdStore<f32> for F32x4 {
    /// Stores 4 elements, choosing the aligned or unaligned instruction.
    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut f32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        match Self::is_aligned(ptr) {
            true => unsafe { self.store_aligned_at(ptr) },
            false => unsafe { self.store_unaligned_at(ptr) },
        }
    }

    /// Stores 4 elements to 16-byte aligned memory with `_mm_store_ps`.
    #[inline(always)]
    unsafe fn store_aligned_at(&self, ptr: *mut f32) {
        _mm_store_ps(ptr, self.elements);
    }

    /// Stores 4 elements to unaligned memory with `_mm_storeu_ps`.
    #[inline(always)]
    unsafe fn store_unaligned_at(&self, ptr: *mut f32) {
        _mm_storeu_ps(ptr, self.elements);
    }
}

impl Add for F32x4 {
    type Output = Self;

    /// Lane-wise addition of two registers.
    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm_add_ps(self.elements, rhs.elements) },
        }
    }
}

impl Sub for F32x4 {
    type Output = Self;

    /// Lane-wise subtraction of two registers.
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm_sub_ps(self.elements, rhs.elements) },
        }
    }
}

impl Mul for F32x4 {
    type Output = Self;

    /// Lane-wise multiplication of two registers.
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm_mul_ps(self.elements, rhs.elements) },
        }
    }
}

impl Neg for F32x4 {
    type Output = Self;

    /// Flips the sign bit of every lane.
    #[inline(always)]
    fn neg(self) -> Self::Output {
        Self {
            elements: unsafe { _mm_xor_ps(self.elements, _mm_set1_ps(-0.0)) },
        }
    }
}
