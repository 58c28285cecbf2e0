//! Fixed-size 4-lane vector and 4×4 matrix storage engines with SIMD
//! register arithmetic, behind generic container wrappers and a
//! compile-time operation-dispatch layer.
//!
//! The storage engines keep their elements in aligned scalar arrays and
//! load a hardware register view on demand; arithmetic between the fixed
//! engines takes the register path, and any engine implementing the
//! contract traits plugs into the same containers through the element-wise
//! fallback kernels. The instruction set (SSE, NEON or portable scalar) is
//! chosen by the build script.

pub mod engine;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod quaternion;
pub mod simd;
pub mod vector;

pub use engine::matrix4::Matrix4Engine;
pub use engine::vector4::Vector4Engine;
pub use engine::{MatrixEngine, VectorEngine};
pub use error::{EngineError, Result};
pub use matrix::{Matrix, Matrix4};
pub use quaternion::Quaternion;
pub use vector::{Vector, Vector4};
