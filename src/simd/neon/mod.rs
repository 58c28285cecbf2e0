//! ARM NEON implementations of the 4-lane and 16-lane register types.
//!
//! Built on the 128-bit `float32x4_t` register available on every AArch64
//! processor (Apple Silicon, AWS Graviton, mobile). [`f32x4::F32x4`] holds
//! one vector engine in a single register; [`f32x16::F32x16`] holds one
//! matrix engine in a tile of four. NEON has no aligned/unaligned
//! instruction split, so the aligned and unaligned entry points coincide.

pub mod f32x16;

pub mod f32x4;
