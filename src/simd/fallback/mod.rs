//! Portable scalar implementations of the register types.
//!
//! Compiled in when the build probe detects neither SSE nor NEON. The types
//! keep the exact surface of their hardware counterparts so the dispatch
//! layer is identical on every build; "lanes" are plain array slots
//! combined in index order, which is the same arithmetic the hardware
//! registers perform.

pub mod f32x16;

pub mod f32x4;
