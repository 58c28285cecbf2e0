//! SIMD register layer for the fixed-size storage engines.
//!
//! Exactly one architecture module is compiled in, selected by the build
//! script's CPU probe:
//!
//! - [`sse`]: x86/x86_64, 128-bit `__m128` registers
//! - [`neon`]: AArch64, 128-bit `float32x4_t` registers
//! - [`fallback`]: portable scalar arrays, used when neither is detected
//!
//! Each module provides the same two types under the same names:
//!
//! - `F32x4`: a 4-lane register holding one vector engine's elements
//! - `F32x16`: a 16-lane register tile holding one matrix engine's elements
//!
//! The active module's types are re-exported here so the dispatch layer can
//! name them without repeating the architecture selection.
//!
//! Register values are always produced by loading from a storage engine's
//! scalar array and are written back after an operation. The scalar array
//! remains the owning view; registers are transient.

#[cfg(sse)]
pub mod sse;

#[cfg(neon)]
pub mod neon;

#[cfg(fallback)]
pub mod fallback;

pub mod traits;

#[cfg(sse)]
pub use sse::{f32x16::F32x16, f32x4::F32x4};

#[cfg(neon)]
pub use neon::{f32x16::F32x16, f32x4::F32x4};

#[cfg(fallback)]
pub use fallback::{f32x16::F32x16, f32x4::F32x4};
