//! SSE 16-lane f32 SIMD register tile.
//!
//! `F32x16` spans all 16 elements of a matrix engine as one unit, composed
//! of four 128-bit `__m128` registers covering lanes 0..3, 4..7, 8..11 and
//! 12..15, one register per matrix row in row-major order. Whole-matrix
//! element-wise operations apply the same instruction to each quarter, so
//! results remain bit-identical to a scalar element-by-element loop.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, Mul, Neg, Sub};

use crate::simd::traits::{Alignment, SimdLoad, SimdStore};

use super::f32x4::SSE_ALIGNMENT;

/// Number of f32 elements spanned by the tile.
pub const LANE_COUNT: usize = 16;

/// Lanes covered by each 128-bit quarter of the tile.
const QUARTER: usize = 4;

/// SIMD register tile containing 16 packed f32 values.
#[derive(Copy, Clone, Debug)]
pub struct F32x16 {
    /// Four 128-bit registers, lane-ordered: `elements[q]` holds lanes
    /// `4q..4q+3`
    pub elements: [__m128; 4],
}

impl F32x16 {
    /// Copies the tile out into a plain array.
    #[inline(always)]
    pub fn to_array(self) -> [f32; LANE_COUNT] {
        let mut out = [0.0f32; LANE_COUNT];
        unsafe { self.store_unaligned_at(out.as_mut_ptr()) };
        out
    }
}

impl Alignment<f32> for F32x16 {
    #[inline(always)]
    fn is_aligned(ptr: *const f32) -> bool {
        let ptr = ptr as usize;

        ptr % SSE_ALIGNMENT == 0
    }
}

impl SimdLoad<f32> for F32x16 {
    #[inline(always)]
    unsafe fn load(ptr: *const f32) -> Self {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        match Self::is_aligned(ptr) {
            true => unsafe { Self::load_aligned(ptr) },
            false => unsafe { Self::load_unaligned(ptr) },
        }
    }

    /// Loads 16 elements from 16-byte aligned memory.
    ///
    /// A 16-byte aligned base keeps every quarter aligned as well.
    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f32) -> Self {
        Self {
            elements: [
                _mm_load_ps(ptr),
                _mm_load_ps(ptr.add(QUARTER)),
                _mm_load_ps(ptr.add(2 * QUARTER)),
                _mm_load_ps(ptr.add(3 * QUARTER)),
            ],
        }
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self {
        Self {
            elements: [
                _mm_loadu_ps(ptr),
                _mm_loadu_ps(ptr.add(QUARTER)),
                _mm_loadu_ps(ptr.add(2 * QUARTER)),
                _mm_loadu_ps(ptr.add(3 * QUARTER)),
            ],
        }
    }

    /// Broadcasts `value` into all 16 lanes.
    #[inline(always)]
    unsafe fn splat(value: f32) -> Self {
        let reg = _mm_set1_ps(value);

        Self {
            elements: [reg, reg, reg, reg],
        }
    }
}

impl SimdStore<f32> for F32x16 {
    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut f32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        match Self::is_aligned(ptr) {
            true => unsafe { self.store_aligned_at(ptr) },
            false => unsafe { self.store_unaligned_at(ptr) },
        }
    }

    #[inline(always)]
    unsafe fn store_aligned_at(&self, ptr: *mut f32) {
        _mm_store_ps(ptr, self.elements[0]);
        _mm_store_ps(ptr.add(QUARTER), self.elements[1]);
        _mm_store_ps(ptr.add(2 * QUARTER), self.elements[2]);
        _mm_store_ps(ptr.add(3 * QUARTER), self.elements[3]);
    }

    #[inline(always)]
    unsafe fn store_unaligned_at(&self, ptr: *mut f32) {
        _mm_storeu_ps(ptr, self.elements[0]);
        _mm_storeu_ps(ptr.add(QUARTER), self.elements[1]);
        _mm_storeu_ps(ptr.add(2 * QUARTER), self.elements[2]);
        _mm_storeu_ps(ptr.add(3 * QUARTER), self.elements[3]);
    }
}

impl Add for F32x16 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        unsafe {
            Self {
                elements: [
                    _mm_add_ps(self.elements[0], rhs.elements[0]),
                    _mm_add_ps(self.elements[1], rhs.elements[1]),
                    _mm_add_ps(self.elements[2], rhs.elements[2]),
                    _mm_add_ps(self.elements[3], rhs.elements[3]),
                ],
            }
        }
    }
}

impl Sub for F32x16 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        unsafe {
            Self {
                elements: [
                    _mm_sub_ps(self.elements[0], rhs.elements[0]),
                    _mm_sub_ps(self.elements[1], rhs.elements[1]),
                    _mm_sub_ps(self.elements[2], rhs.elements[2]),
                    _mm_sub_ps(self.elements[3], rhs.elements[3]),
                ],
            }
        }
    }
}

impl Mul for F32x16 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        unsafe {
            Self {
                elements: [
                    _mm_mul_ps(self.elements[0], rhs.elements[0]),
                    _mm_mul_ps(self.elements[1], rhs.elements[1]),
                    _mm_mul_ps(self.elements[2], rhs.elements[2]),
                    _mm_mul_ps(self.elements[3], rhs.elements[3]),
                ],
            }
        }
    }
}

impl Neg for F32x16 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        unsafe {
            let sign = _mm_set1_ps(-0.0);

            Self {
                elements: [
                    _mm_xor_ps(self.elements[0], sign),
                    _mm_xor_ps(self.elements[1], sign),
                    _mm_xor_ps(self.elements[2], sign),
                    _mm_xor_ps(self.elements[3], sign),
                ],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iota() -> [f32; LANE_COUNT] {
        core::array::from_fn(|i| i as f32)
    }

    #[test]
    fn test_load_store_roundtrip() {
        let data = iota();
        let v = unsafe { F32x16::load(data.as_ptr()) };
        assert_eq!(v.to_array(), data);
    }

    #[test]
    fn test_splat_and_scale() {
        let data = iota();
        let v = unsafe { F32x16::load(data.as_ptr()) };
        let s = unsafe { F32x16::splat(2.0) };

        let expected: [f32; LANE_COUNT] = core::array::from_fn(|i| 2.0 * i as f32);
        assert_eq!((v * s).to_array(), expected);
    }

    #[test]
    fn test_add_sub_neg() {
        let a = unsafe { F32x16::load(iota().as_ptr()) };
        let b = unsafe { F32x16::splat(1.0) };

        let sum = (a + b).to_array();
        let diff = (a - b).to_array();
        let neg = (-a).to_array();

        for i in 0..LANE_COUNT {
            assert_eq!(sum[i], i as f32 + 1.0);
            assert_eq!(diff[i], i as f32 - 1.0);
            assert_eq!(neg[i], -(i as f32));
        }
    }
}
