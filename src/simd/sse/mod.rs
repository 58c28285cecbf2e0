//! SSE implementations of the 4-lane and 16-lane register types.
//!
//! Both types are built on the 128-bit `__m128` register: [`f32x4::F32x4`]
//! is a single register holding one vector engine, and
//! [`f32x16::F32x16`] is a tile of four registers holding one matrix
//! engine. SSE4.1 is detected by the build script; every x86-64 processor
//! since Penryn (2008) qualifies.
//!
//! # Memory Alignment
//!
//! 128-bit loads and stores are fastest from 16-byte aligned addresses.
//! The storage engines align their element arrays accordingly, so the
//! dispatch layer always takes the aligned path; the unaligned entry
//! points exist for foreign memory.

pub mod f32x16;

pub mod f32x4;
