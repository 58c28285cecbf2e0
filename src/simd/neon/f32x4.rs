//! NEON 4-lane f32 SIMD register.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use std::ops::{Add, Mul, Neg, Sub};

use crate::simd::traits::{Alignment, SimdLoad, SimdStore};

/// NEON memory alignment requirement in bytes.
pub(crate) const NEON_ALIGNMENT: usize = 16;

/// Number of f32 elements in a 128-bit register.
pub const LANE_COUNT: usize = 4;

/// NEON SIMD register containing 4 packed f32 values.
///
/// Lane `i` corresponds to element `i` of the owning engine; lane-wise
/// arithmetic matches an element-by-element scalar loop bit for bit.
#[derive(Copy, Clone, Debug)]
pub struct F32x4 {
    /// 128-bit register holding 4 packed f32 values
    pub elements: float32x4_t,
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
    #[inline(always)]
    fn is_aligned(ptr: *const f32) -> bool {
        let ptr = ptr as usize;

        ptr % NEON_ALIGNMENT == 0
    }
}

impl SimdLoad<f32> for F32x4 {
    #[inline(always)]
    unsafe fn load(ptr: *const f32) -> Self {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        Self {
            elements: vld1q_f32(ptr),
        }
    }

    /// `vld1q_f32` has no alignment requirement; same as [`Self::load`].
    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f32) -> Self {
        unsafe { Self::load(ptr) }
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self {
        unsafe { Self::load(ptr) }
    }

    #[inline(always)]
    unsafe fn splat(value: f32) -> Self {
        Self {
            elements: vdupq_n_f32(value),
        }
    }
}

impl SimdStore<f32> for F32x4 {
    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut f32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        vst1q_f32(ptr, self.elements);
    }

    #[inline(always)]
    unsafe fn store_aligned_at(&self, ptr: *mut f32) {
        unsafe { self.store_at(ptr) }
    }

    #[inline(always)]
    unsafe fn store_unaligned_at(&self, ptr: *mut f32) {
        unsafe { self.store_at(ptr) }
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { vaddq_f32(self.elements, rhs.elements) },
        }
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { vsubq_f32(self.elements, rhs.elements) },
        }
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { vmulq_f32(self.elements, rhs.elements) },
        }
    }
}

impl Neg for F32x4 {
    type Output = Self;

    /// Flips the sign bit of every lane.
    #[inline(always)]
    fn neg(self) -> Self::Output {
        Self {
            elements: unsafe { vnegq_f32(self.elements) },
        }
    }
}

#[cfg(test)]
#[cfg(target_arch = "aarch64")]
mod tests {
    use super::*;

    #[test]
    fn test_load_store_roundtrip() {
        let data = [1.0f32, 2.0, 3.0, 4.0];
        let v = unsafe { F32x4::load(data.as_ptr()) };
        assert_eq!(v.to_array(), data);
    }

    #[test]
    fn test_lanewise_arithmetic() {
        let a = unsafe { F32x4::load([1.0f32, 2.0, 3.0, 4.0].as_ptr()) };
        let b = unsafe { F32x4::load([2.0f32, 4.0, 6.0, 8.0].as_ptr()) };

        assert_eq!((a + b).to_array(), [3.0, 6.0, 9.0, 12.0]);
        assert_eq!((b - a).to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!((a * b).to_array(), [2.0, 8.0, 18.0, 32.0]);
        assert_eq!((-a).to_array(), [-1.0, -2.0, -3.0, -4.0]);
    }

    #[test]
    fn test_splat_fills_all_lanes() {
        let v = unsafe { F32x4::splat(-1.5) };
        assert_eq!(v.to_array(), [-1.5; 4]);
    }
}
